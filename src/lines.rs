//! Reading and writing one element per line.
//!
//! Lines are read as raw bytes, so input does not have to be UTF-8. The line
//! terminator (`\n` or `\r\n`) is not part of the element, and
//! [`write_lines`] ends every element with a plain `\n`. Two consequences:
//!
//! - Output is normalized: `\r\n` input comes back as `\n`, and an
//!   unterminated last line gains a terminator.
//! - A line sorts before every line it is a prefix of. `"a"` comes before
//!   `"a\tb"` even though `\t` is smaller than `\n`; keeping the terminator
//!   in the element would order them the other way round.

use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use log::debug;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LinesError {
    #[error("failed to open {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to create {}: {source}", .path.display())]
    Create {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("expected {expected} line(s), but the input ended after {found}")]
    UnexpectedEof { expected: usize, found: usize },

    #[error("line {line} is {len} bytes long, exceeding the maximum of {width}")]
    LineTooLong { line: usize, len: usize, width: usize },

    #[error("cannot reserve room for {count} lines")]
    Allocation { count: usize },
}

/// Reads exactly `count` lines of at most `width` bytes each.
///
/// The last line does not need a terminator. Anything after the first
/// `count` lines is ignored.
///
/// ```
/// use linesort::lines::read_lines;
///
/// let lines = read_lines(&b"pear\r\napple\nfig"[..], 3, 16).unwrap();
/// assert_eq!(lines, [b"pear".to_vec(), b"apple".to_vec(), b"fig".to_vec()]);
/// ```
pub fn read_lines<R: BufRead>(mut reader: R, count: usize, width: usize) -> Result<Vec<Vec<u8>>, LinesError> {
    let mut lines = Vec::new();
    lines
        .try_reserve_exact(count)
        .map_err(|_| LinesError::Allocation { count })?;

    for index in 0..count {
        let mut line = Vec::new();
        if reader.read_until(b'\n', &mut line)? == 0 {
            return Err(LinesError::UnexpectedEof {
                expected: count,
                found: index,
            });
        }
        trim_terminator(&mut line);
        if line.len() > width {
            return Err(LinesError::LineTooLong {
                line: index + 1,
                len: line.len(),
                width,
            });
        }
        lines.push(line);
    }

    Ok(lines)
}

/// Writes every element followed by `\n`.
pub fn write_lines<W, T>(mut writer: W, lines: &[T]) -> Result<(), LinesError>
where
    W: Write,
    T: AsRef<[u8]>,
{
    for line in lines {
        writer.write_all(line.as_ref())?;
        writer.write_all(b"\n")?;
    }
    writer.flush()?;
    Ok(())
}

pub fn read_lines_from_path(path: &Path, count: usize, width: usize) -> Result<Vec<Vec<u8>>, LinesError> {
    let file = File::open(path).map_err(|source| LinesError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    let lines = read_lines(BufReader::new(file), count, width)?;
    debug!("Read {} line(s) from {:?}", lines.len(), path);
    Ok(lines)
}

pub fn write_lines_to_path<T: AsRef<[u8]>>(path: &Path, lines: &[T]) -> Result<(), LinesError> {
    let file = File::create(path).map_err(|source| LinesError::Create {
        path: path.to_path_buf(),
        source,
    })?;
    write_lines(BufWriter::new(file), lines)?;
    debug!("Wrote {} line(s) to {:?}", lines.len(), path);
    Ok(())
}

fn trim_terminator(line: &mut Vec<u8>) {
    if line.last() == Some(&b'\n') {
        line.pop();
        if line.last() == Some(&b'\r') {
            line.pop();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_requested_count_only() {
        let lines = read_lines(&b"a\nb\nc\nd\n"[..], 2, 8).unwrap();
        assert_eq!(lines, [b"a".to_vec(), b"b".to_vec()]);
    }

    #[test]
    fn keeps_empty_and_non_utf8_lines() {
        let lines = read_lines(&b"\n\xff\xfe\n"[..], 2, 8).unwrap();
        assert_eq!(lines, [Vec::new(), vec![0xff, 0xfe]]);
    }

    #[test]
    fn short_input_is_an_error() {
        let err = read_lines(&b"one\ntwo\n"[..], 3, 8).unwrap_err();
        assert!(matches!(
            err,
            LinesError::UnexpectedEof {
                expected: 3,
                found: 2
            }
        ));
    }

    #[test]
    fn long_line_is_an_error() {
        let err = read_lines(&b"ok\ntoo long\n"[..], 2, 4).unwrap_err();
        assert!(matches!(
            err,
            LinesError::LineTooLong {
                line: 2,
                len: 8,
                width: 4
            }
        ));
    }

    #[test]
    fn zero_lines_from_empty_input() {
        let lines = read_lines(&b""[..], 0, 8).unwrap();
        assert!(lines.is_empty());
    }

    #[test]
    fn writes_one_element_per_line() {
        let mut out = Vec::new();
        write_lines(&mut out, &["b", "", "a"]).unwrap();
        assert_eq!(out, b"b\n\na\n");
    }

    #[test]
    fn terminators_are_normalized_on_the_way_out() {
        let lines = read_lines(&b"b\r\na\tb\na"[..], 3, 8).unwrap();
        assert_eq!(lines, [b"b".to_vec(), b"a\tb".to_vec(), b"a".to_vec()]);

        let mut sorted = lines;
        sorted.sort();
        assert_eq!(sorted, [b"a".to_vec(), b"a\tb".to_vec(), b"b".to_vec()]);

        let mut out = Vec::new();
        write_lines(&mut out, &sorted).unwrap();
        assert_eq!(out, b"a\na\tb\nb\n");
    }

    #[test]
    fn missing_file_reports_path() {
        let path = Path::new("/nonexistent/linesort/input.txt");
        let err = read_lines_from_path(path, 1, 8).unwrap_err();
        assert!(matches!(err, LinesError::Open { .. }));
        assert!(err.to_string().contains("/nonexistent/linesort/input.txt"));
    }
}
