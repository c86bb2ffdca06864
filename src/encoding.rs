//! Line reading for wordlist input
//!
//! Reads a file line by line as strict UTF-8. A leading UTF-8 BOM is skipped
//! and line terminators are removed.

use std::fs::File;
use std::io::{self, BufRead, BufReader, Read};
use std::path::{Path, PathBuf};

use crate::error::{ConvertError, Result};

const UTF8_BOM: [u8; 3] = [0xEF, 0xBB, 0xBF];

/// Iterator over the lines of a UTF-8 text file.
///
/// `\n`, `\r\n` and a lone `\r` all end a line.
pub struct LineReader<R: Read = File> {
    reader: BufReader<R>,
    path: PathBuf,
    line_buffer: Vec<u8>,
    line_number: usize,
    // Last terminator was `\r`; a `\n` right after it belongs to it
    skip_lf: bool,
    done: bool,
}

impl LineReader<File> {
    /// Open a file for line reading
    pub fn open(path: &Path) -> Result<Self> {
        let file = File::open(path).map_err(|e| ConvertError::input(path, e))?;
        Ok(Self::new(file, path))
    }
}

impl<R: Read> LineReader<R> {
    /// Wrap any reader; `path` is only used in error messages
    pub fn new(inner: R, path: impl Into<PathBuf>) -> Self {
        Self {
            reader: BufReader::with_capacity(64 * 1024, inner),
            path: path.into(),
            line_buffer: Vec::with_capacity(256),
            line_number: 0,
            skip_lf: false,
            done: false,
        }
    }

    /// Read the next line into `line_buffer` without its terminator.
    /// Returns false at end of input.
    fn read_line_bytes(&mut self) -> io::Result<bool> {
        if self.skip_lf {
            self.skip_lf = false;
            let available = self.reader.fill_buf()?;
            if available.first() == Some(&b'\n') {
                self.reader.consume(1);
            }
        }

        let mut found_any = false;
        loop {
            let (used, terminated) = {
                let available = self.reader.fill_buf()?;
                if available.is_empty() {
                    return Ok(found_any);
                }
                found_any = true;

                match memchr::memchr2(b'\n', b'\r', available) {
                    Some(i) => {
                        self.line_buffer.extend_from_slice(&available[..i]);
                        self.skip_lf = available[i] == b'\r';
                        (i + 1, true)
                    }
                    None => {
                        self.line_buffer.extend_from_slice(available);
                        (available.len(), false)
                    }
                }
            };

            self.reader.consume(used);
            if terminated {
                return Ok(true);
            }
        }
    }
}

impl<R: Read> Iterator for LineReader<R> {
    type Item = Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        self.line_buffer.clear();

        match self.read_line_bytes() {
            Ok(false) => {
                self.done = true;
                None
            }
            Ok(true) => {
                self.line_number += 1;

                let mut bytes = self.line_buffer.as_slice();
                if self.line_number == 1 {
                    bytes = bytes.strip_prefix(&UTF8_BOM).unwrap_or(bytes);
                }

                match std::str::from_utf8(bytes) {
                    Ok(s) => Some(Ok(s.to_string())),
                    Err(_) => {
                        self.done = true;
                        Some(Err(ConvertError::InputEncoding {
                            path: self.path.clone(),
                            line: self.line_number,
                        }))
                    }
                }
            }
            Err(e) => {
                self.done = true;
                Some(Err(ConvertError::input(self.path.clone(), e)))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn lines_of(bytes: &[u8]) -> Vec<String> {
        LineReader::new(bytes, "mem")
            .collect::<Result<Vec<_>>>()
            .unwrap()
    }

    #[test]
    fn test_line_reader() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "line1").unwrap();
        writeln!(file, "line2").unwrap();
        write!(file, "line3").unwrap();

        let lines: Vec<_> = LineReader::open(file.path())
            .unwrap()
            .filter_map(|r| r.ok())
            .collect();

        assert_eq!(lines, vec!["line1", "line2", "line3"]);
    }

    #[test]
    fn test_crlf_and_bom() {
        let lines = lines_of(b"\xEF\xBB\xBFcrane\r\nslate\r\n");
        assert_eq!(lines, vec!["crane", "slate"]);

        // Old Mac line endings
        let lines = lines_of(b"apple\rzebra\rcrane\r");
        assert_eq!(lines, vec!["apple", "zebra", "crane"]);

        // Mixed, with blank lines in each style
        let lines = lines_of(b"one\r\rtwo\n\nthree\r\n\r\nfour");
        assert_eq!(lines, vec!["one", "", "two", "", "three", "", "four"]);
    }

    #[test]
    fn test_crlf_split_across_buffer_refills() {
        // One byte per read forces `\r` and `\n` into separate fill_buf calls
        struct Trickle<'a>(&'a [u8]);

        impl Read for Trickle<'_> {
            fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
                if self.0.is_empty() || buf.is_empty() {
                    return Ok(0);
                }
                buf[0] = self.0[0];
                self.0 = &self.0[1..];
                Ok(1)
            }
        }

        let lines: Vec<String> = LineReader::new(Trickle(b"ab\r\ncd\r\n\ref"), "mem")
            .collect::<Result<_>>()
            .unwrap();
        assert_eq!(lines, vec!["ab", "cd", "", "ef"]);
    }

    #[test]
    fn test_bom_only_stripped_on_first_line() {
        let lines = lines_of(b"crane\n\xEF\xBB\xBFslate\n");
        assert_eq!(lines[1], "\u{feff}slate");
    }

    #[test]
    fn test_empty_lines_are_kept() {
        assert_eq!(lines_of(b"\n\nabc\n"), vec!["", "", "abc"]);
    }

    #[test]
    fn test_invalid_utf8_names_line() {
        let mut reader = LineReader::new(&b"ok\n\xFF\xFEbad\nnever\n"[..], "words.txt");
        assert_eq!(reader.next().unwrap().unwrap(), "ok");

        match reader.next().unwrap() {
            Err(ConvertError::InputEncoding { line, path }) => {
                assert_eq!(line, 2);
                assert_eq!(path, PathBuf::from("words.txt"));
            }
            other => panic!("expected encoding error, got {:?}", other),
        }
        assert!(reader.next().is_none());
    }

    #[test]
    fn test_open_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = LineReader::open(&dir.path().join("absent.txt"));
        assert!(matches!(result, Err(ConvertError::InputAccess { .. })));
    }
}
