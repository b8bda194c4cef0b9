//! Ledger (CSV) and run-log (JSON) persistence.
//!
//! A single writer per ledger is assumed; nothing here locks the file.

use std::{
    fs::{self, File, OpenOptions},
    io::{BufWriter, ErrorKind, Write},
    path::{Path, PathBuf},
};

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::{Serializer, Value, ser::PrettyFormatter};

use crate::{
    error::OutputError,
    model::{LEDGER_HEADERS, OutputRecord},
};

/// `<ledger dir>/logs/<run timestamp>.json`, to one-second resolution.
pub fn log_path_for(ledger_path: &Path, run_at: DateTime<Utc>) -> PathBuf {
    let dir = ledger_path.parent().unwrap_or_else(|| Path::new(""));
    dir.join("logs")
        .join(format!("{}.json", run_at.format("%Y-%m-%dT%H%M%S")))
}

/// Append `record` to the ledger, writing the header first if the file is
/// missing or empty.
pub fn append_ledger(path: &Path, record: &OutputRecord) -> Result<(), OutputError> {
    create_parent_dir(path)?;

    let needs_header = match fs::metadata(path) {
        Ok(meta) => meta.len() == 0,
        Err(e) if e.kind() == ErrorKind::NotFound => true,
        Err(e) => return Err(OutputError::LedgerIo(path.to_path_buf(), e)),
    };

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| OutputError::LedgerIo(path.to_path_buf(), e))?;

    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(file);

    if needs_header {
        tracing::debug!(path = %path.display(), "starting new ledger");
        writer
            .write_record(LEDGER_HEADERS)
            .map_err(|e| OutputError::LedgerCsv(path.to_path_buf(), e))?;
    }

    writer
        .serialize(record)
        .map_err(|e| OutputError::LedgerCsv(path.to_path_buf(), e))?;
    writer
        .flush()
        .map_err(|e| OutputError::LedgerIo(path.to_path_buf(), e))?;

    tracing::info!(path = %path.display(), "appended ledger row");
    Ok(())
}

/// Write the full response to a fresh file, replacing any file already there.
pub fn write_run_log(path: &Path, response: &Value) -> Result<(), OutputError> {
    create_parent_dir(path)?;

    let file = File::create(path).map_err(|e| OutputError::LogIo(path.to_path_buf(), e))?;
    let mut out = BufWriter::new(file);

    let mut ser = Serializer::with_formatter(&mut out, PrettyFormatter::with_indent(b"    "));
    response
        .serialize(&mut ser)
        .map_err(|e| OutputError::LogJson(path.to_path_buf(), e))?;
    out.flush()
        .map_err(|e| OutputError::LogIo(path.to_path_buf(), e))?;

    tracing::info!(path = %path.display(), "wrote run log");
    Ok(())
}

fn create_parent_dir(path: &Path) -> Result<(), OutputError> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => fs::create_dir_all(parent)
            .map_err(|e| OutputError::CreateDir(parent.to_path_buf(), e)),
        _ => Ok(()),
    }
}
