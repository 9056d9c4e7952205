use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use tracing::trace;

use crate::errors::{SearchError, SearchResult};

const BUFFER_CAPACITY: usize = 65536;

/// Reads a text file fully into memory and splits it into lines.
///
/// Lines are raw bytes; the input contract is 7-bit ASCII, so no decoding is
/// performed. Line terminators (`\n`, `\r\n`) are stripped and are not part
/// of any line's content. An empty file yields zero lines, and a trailing
/// newline does not produce a phantom empty line.
pub fn read_lines(path: &Path) -> SearchResult<Vec<Vec<u8>>> {
    trace!("Reading file: {}", path.display());

    let file = File::open(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => SearchError::file_not_found(path),
        std::io::ErrorKind::PermissionDenied => SearchError::permission_denied(path),
        _ => SearchError::IoError(e),
    })?;

    let mut reader = BufReader::with_capacity(BUFFER_CAPACITY, file);
    let mut bytes = Vec::new();
    reader
        .read_to_end(&mut bytes)
        .map_err(SearchError::IoError)?;

    Ok(split_lines(&bytes))
}

/// Splits raw file content into lines, stripping terminators
pub fn split_lines(bytes: &[u8]) -> Vec<Vec<u8>> {
    if bytes.is_empty() {
        return Vec::new();
    }

    let mut lines: Vec<Vec<u8>> = bytes
        .split(|&b| b == b'\n')
        .map(|line| line.strip_suffix(b"\r").unwrap_or(line).to_vec())
        .collect();

    // A trailing newline terminates the last line rather than opening a new one
    if bytes.ends_with(b"\n") {
        lines.pop();
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::tempdir;

    #[test]
    fn test_split_lines_basic() {
        assert_eq!(split_lines(b"a\nb\nc\n"), vec![b"a".to_vec(), b"b".to_vec(), b"c".to_vec()]);
    }

    #[test]
    fn test_split_lines_no_trailing_newline() {
        assert_eq!(split_lines(b"a\nb"), vec![b"a".to_vec(), b"b".to_vec()]);
    }

    #[test]
    fn test_split_lines_empty_input() {
        assert!(split_lines(b"").is_empty());
    }

    #[test]
    fn test_split_lines_preserves_empty_lines() {
        assert_eq!(
            split_lines(b"a\n\nb\n"),
            vec![b"a".to_vec(), Vec::new(), b"b".to_vec()]
        );
    }

    #[test]
    fn test_split_lines_strips_carriage_return() {
        assert_eq!(split_lines(b"a\r\nb\r\n"), vec![b"a".to_vec(), b"b".to_vec()]);
    }

    #[test]
    fn test_read_lines() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("input.txt");
        let mut file = File::create(&path).unwrap();
        file.write_all(b"first line\nsecond line\n").unwrap();

        let lines = read_lines(&path).unwrap();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], b"first line");
        assert_eq!(lines[1], b"second line");
    }

    #[test]
    fn test_read_lines_missing_file() {
        let dir = tempdir().unwrap();
        let err = read_lines(&dir.path().join("missing.txt")).unwrap_err();
        assert!(matches!(err, SearchError::FileNotFound(_)));
    }
}
