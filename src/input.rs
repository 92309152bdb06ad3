//! Loads the newline delimited lists of whole numbers the sorts run on.

use std::fs;
use std::io;
use std::num::ParseIntError;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

/// A line that is not a whole number.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("line {line} is not a whole number: {record:?}")]
pub struct ParseRecordError {
    /// 1-based.
    pub line: usize,
    pub record: String,
    #[source]
    pub source: ParseIntError,
}

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("malformed record in {}", .path.display())]
    MalformedRecord {
        path: PathBuf,
        #[source]
        source: ParseRecordError,
    },
}

/// Parses one integer per line. Whitespace around a number is ignored, blank lines are not.
pub fn parse_whole_input(text: &str) -> Result<Vec<i32>, ParseRecordError> {
    text.lines()
        .enumerate()
        .map(|(i, line)| {
            line.trim()
                .parse::<i32>()
                .map_err(|source| ParseRecordError {
                    line: i + 1,
                    record: line.to_owned(),
                    source,
                })
        })
        .collect()
}

/// Reads and parses the file at `path`, see [`parse_whole_input`].
pub fn read_whole_input(path: &Path) -> Result<Vec<i32>, LoadError> {
    let text = fs::read_to_string(path).map_err(|source| LoadError::Read {
        path: path.to_owned(),
        source,
    })?;
    debug!(path = %path.display(), bytes = text.len(), "read input file");

    let values = parse_whole_input(&text).map_err(|source| LoadError::MalformedRecord {
        path: path.to_owned(),
        source,
    })?;
    debug!(records = values.len(), "parsed input records");

    Ok(values)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn parses_one_value_per_line() {
        assert_eq!(parse_whole_input("5\n3\n3\n1\n"), Ok(vec![5, 3, 3, 1]));
    }

    #[test]
    fn missing_trailing_newline() {
        assert_eq!(parse_whole_input("5\n3"), Ok(vec![5, 3]));
    }

    #[test]
    fn crlf_and_padding() {
        assert_eq!(parse_whole_input(" 12\r\n-4 \r\n0\r\n"), Ok(vec![12, -4, 0]));
    }

    #[test]
    fn empty_text_is_empty_list() {
        assert_eq!(parse_whole_input(""), Ok(vec![]));
    }

    #[test]
    fn reports_malformed_line() {
        let err = parse_whole_input("1\n2\nthree\n4\n").unwrap_err();

        assert_eq!(err.line, 3);
        assert_eq!(err.record, "three");
        assert_eq!(err.to_string(), "line 3 is not a whole number: \"three\"");
    }

    #[test]
    fn blank_line_is_malformed() {
        let err = parse_whole_input("1\n\n2\n").unwrap_err();
        assert_eq!(err.line, 2);
    }

    #[test]
    fn rejects_out_of_i32_range() {
        assert!(parse_whole_input("2147483648\n").is_err());
        assert_eq!(parse_whole_input("-2147483648\n"), Ok(vec![i32::MIN]));
    }

    #[test]
    fn rejects_fractions() {
        assert!(parse_whole_input("1.5\n").is_err());
    }

    #[test]
    fn reads_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "10").unwrap();
        writeln!(file, "-3").unwrap();
        writeln!(file, "7").unwrap();

        assert_eq!(read_whole_input(file.path()).unwrap(), vec![10, -3, 7]);
    }

    #[test]
    fn missing_file_is_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("does_not_exist.txt");

        let err = read_whole_input(&path).unwrap_err();
        assert!(matches!(err, LoadError::Read { .. }));
    }

    #[test]
    fn malformed_file_is_distinct_from_read_error() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "1").unwrap();
        writeln!(file, "x").unwrap();

        match read_whole_input(file.path()).unwrap_err() {
            LoadError::MalformedRecord { source, .. } => assert_eq!(source.line, 2),
            other => panic!("expected a malformed record, got {other:?}"),
        }
    }
}
