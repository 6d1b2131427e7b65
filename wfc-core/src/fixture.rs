use std::ffi::OsString;
use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use tracing::info;

use crate::error::{Result, WfcError};

/// `<source_path>test`.
pub fn test_data_path(source: &Path) -> PathBuf {
    let mut s = OsString::from(source.as_os_str());
    s.push("test");
    PathBuf::from(s)
}

/// Grow a sample file into a large input for the chunker.
///
/// Appends the lines of `source` (`\n`, `\r\n` and `\r` terminators stripped, nothing in between)
/// `copies` times to `<source_path>test`, creating it when missing.
pub fn generate_test_data(source: &Path, copies: u32) -> Result<PathBuf> {
    let dest = test_data_path(source);
    let out = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&dest)
        .map_err(|e| WfcError::ChunkWriteFailed {
            path: dest.clone(),
            source: e,
        })?;
    let mut w = BufWriter::new(out);
    let write_err = |e: std::io::Error| WfcError::ChunkWriteFailed {
        path: dest.clone(),
        source: e,
    };

    let mut appended = 0u64;
    for _ in 0..copies {
        let f = File::open(source).map_err(|e| WfcError::source_io(source, e))?;
        for line in BufReader::new(f).split(b'\n') {
            let mut line = line.map_err(|e| WfcError::source_io(source, e))?;
            line.retain(|&b| b != b'\r');
            w.write_all(&line).map_err(write_err)?;
            appended += line.len() as u64;
        }
    }
    w.flush().map_err(write_err)?;

    info!(dest = %dest.display(), copies, bytes = appended, "test data generated");
    Ok(dest)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn concatenates_lines_per_copy() {
        let tmp = tempfile::tempdir().unwrap();
        let src = tmp.path().join("1.txt");
        std::fs::write(&src, "ab\ncd\r\nef").unwrap();

        let out = generate_test_data(&src, 3).unwrap();
        assert_eq!(out, tmp.path().join("1.txttest"));
        assert_eq!(std::fs::read_to_string(&out).unwrap(), "abcdefabcdefabcdef");
    }

    #[test]
    fn appends_to_existing_output() {
        let tmp = tempfile::tempdir().unwrap();
        let src = tmp.path().join("s");
        std::fs::write(&src, "xy\n").unwrap();
        generate_test_data(&src, 1).unwrap();
        let out = generate_test_data(&src, 2).unwrap();
        assert_eq!(std::fs::read_to_string(out).unwrap(), "xyxyxy");
    }

    #[test]
    fn zero_copies_creates_empty_file() {
        let tmp = tempfile::tempdir().unwrap();
        let src = tmp.path().join("s");
        std::fs::write(&src, "data").unwrap();
        let out = generate_test_data(&src, 0).unwrap();
        assert_eq!(std::fs::metadata(out).unwrap().len(), 0);
    }

    #[test]
    fn missing_source_is_reported() {
        let tmp = tempfile::tempdir().unwrap();
        let err = generate_test_data(&tmp.path().join("none"), 1).unwrap_err();
        assert!(matches!(err, WfcError::SourceNotFound { .. }));
    }
}
