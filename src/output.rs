//! Output management module
//!
//! Writes the sorted word list as a compact JSON array and reads JSON word
//! lists back.

use std::fs::{File, OpenOptions};
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use serde_json::Value;

use crate::error::{ConvertError, Result};
use crate::filter::WordFilter;

/// Default output file name
pub const DEFAULT_OUTPUT: &str = "guesses.json";

/// Writer that counts the bytes passing through it
struct CountingWriter<W: Write> {
    inner: W,
    bytes_written: u64,
}

impl<W: Write> Write for CountingWriter<W> {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        let n = self.inner.write(buf)?;
        self.bytes_written += n as u64;
        Ok(n)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        self.inner.flush()
    }
}

/// Write `words` to `path` as a compact JSON array of strings, replacing any
/// existing file. Returns the number of bytes written.
pub fn write_json(path: &Path, words: &[String]) -> Result<u64> {
    let file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(path)
        .map_err(|e| ConvertError::output(path, e))?;

    let mut writer = CountingWriter {
        inner: BufWriter::new(file),
        bytes_written: 0,
    };

    serde_json::to_writer(&mut writer, words).map_err(|e| {
        if e.is_io() {
            ConvertError::output(path, e.into())
        } else {
            ConvertError::Serialize {
                path: path.to_path_buf(),
                source: e,
            }
        }
    })?;

    writer.flush().map_err(|e| ConvertError::output(path, e))?;

    log::debug!("Wrote {} bytes to {:?}", writer.bytes_written, path);
    Ok(writer.bytes_written)
}

/// Load a JSON word list: every string entry is lowercased and kept only if
/// it passes `filter`. Entries that are not strings are skipped.
pub fn read_word_list(path: &Path, filter: &WordFilter) -> Result<Vec<String>> {
    let file = File::open(path).map_err(|e| ConvertError::input(path, e))?;

    let entries: Vec<Value> =
        serde_json::from_reader(BufReader::new(file)).map_err(|e| {
            if e.is_io() {
                ConvertError::input(path, e.into())
            } else {
                ConvertError::Parse {
                    path: path.to_path_buf(),
                    source: e,
                }
            }
        })?;

    let words = entries
        .into_iter()
        .filter_map(|v| match v {
            Value::String(s) => Some(s.to_ascii_lowercase()),
            _ => None,
        })
        .filter(|w| filter.matches(w))
        .collect();

    Ok(words)
}
