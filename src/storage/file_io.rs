//! Atomic JSON file I/O
//!
//! All persistence funnels through these two functions. Writes go to a
//! sibling temp file, get synced, and are renamed into place, so a crash
//! mid-write leaves the previous file intact.

use std::fmt;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use serde::{de::DeserializeOwned, Serialize};

use crate::error::PocketFinError;

fn storage_err(context: &str, err: impl fmt::Display) -> PocketFinError {
    PocketFinError::Storage(format!("{}: {}", context, err))
}

/// Read a JSON document, returning `T::default()` when the file is absent
pub fn read_json<T, P>(path: P) -> Result<T, PocketFinError>
where
    T: DeserializeOwned + Default,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    if !path.exists() {
        return Ok(T::default());
    }

    let file =
        File::open(path).map_err(|e| storage_err(&format!("Failed to open {}", path.display()), e))?;
    serde_json::from_reader(BufReader::new(file))
        .map_err(|e| storage_err(&format!("Failed to parse {}", path.display()), e))
}

/// Write a JSON document atomically (temp file, fsync, rename)
pub fn write_json_atomic<T, P>(path: P, data: &T) -> Result<(), PocketFinError>
where
    T: Serialize,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .map_err(|e| storage_err(&format!("Failed to create directory {}", parent.display()), e))?;
    }

    // The temp file must live in the same directory for the rename to be atomic
    let temp_path = path.with_extension("json.tmp");

    let file =
        File::create(&temp_path).map_err(|e| storage_err("Failed to create temp file", e))?;
    let mut writer = BufWriter::new(file);

    serde_json::to_writer_pretty(&mut writer, data)
        .map_err(|e| storage_err("Failed to serialize data", e))?;
    writer.flush().map_err(|e| storage_err("Failed to flush data", e))?;
    writer
        .get_ref()
        .sync_all()
        .map_err(|e| storage_err("Failed to sync data", e))?;

    fs::rename(&temp_path, path).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        storage_err("Failed to rename temp file", e)
    })
}
