//! File and directory manipulation utilities.

use std::ffi::OsStr;
use std::fs;
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{from_reader, to_writer_pretty};

/// Reads a JSON-encoded type from a given file `path`. The path is attached to any error.
pub fn read_json<D: DeserializeOwned>(path: impl AsRef<Path>) -> anyhow::Result<D> {
    let path = path.as_ref();
    let file = File::open(path).with_context(|| format!("opening {}", path.display()))?;
    from_reader(BufReader::new(file)).with_context(|| format!("decoding {}", path.display()))
}

// JSON-encodes the `value` in pretty-printed form and writes it to a given `path`.
pub fn write_json(path: impl AsRef<Path>, value: &impl Serialize) -> anyhow::Result<()> {
    let path = path.as_ref();
    let file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
    to_writer_pretty(BufWriter::new(file), value)
        .with_context(|| format!("encoding {}", path.display()))
}

pub trait ReadJsonFile<D> {
    fn read_json_file(path: impl AsRef<Path>) -> anyhow::Result<D>;
}

impl<D: DeserializeOwned> ReadJsonFile<D> for D {
    fn read_json_file(path: impl AsRef<Path>) -> anyhow::Result<D> {
        read_json(path)
    }
}

/// Recursively locates all files in a given directory matching the supplied `extension_filter`. The
/// located files are written into the `files` vector, visiting directory entries in name order. If
/// the given `path` is a file that matches the filter (rather than a directory), it is added to `files`.
pub fn recurse_dir(
    path: PathBuf,
    files: &mut Vec<PathBuf>,
    extension_filter: &mut impl FnMut(&OsStr) -> bool,
) -> anyhow::Result<()> {
    let md = fs::metadata(&path).with_context(|| format!("reading {}", path.display()))?;
    if md.is_dir() {
        let mut entries = fs::read_dir(&path)
            .with_context(|| format!("listing {}", path.display()))?
            .map(|entry| entry.map(|entry| entry.path()))
            .collect::<Result<Vec<_>, _>>()?;
        entries.sort();
        for entry in entries {
            recurse_dir(entry, files, extension_filter)?;
        }
    } else if extension_filter(path.extension().unwrap_or_default()) {
        files.push(path);
    }
    Ok(())
}
