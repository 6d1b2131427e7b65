use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum WfcError {
    #[error("source not found: {}", path.display())]
    SourceNotFound { path: PathBuf },

    #[error("source unreadable: {}: {source}", path.display())]
    SourceUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("chunk write failed: {}: {source}", path.display())]
    ChunkWriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot create directory {}: {source}", path.display())]
    DirectoryCreateFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("report write failed: {}: {source}", path.display())]
    ReportWriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Per-file; the word counter records it and moves on.
    #[error("input file read failed: {}: {source}", path.display())]
    InputFileReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot list input directory {}: {source}", path.display())]
    InputDirectoryUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("chunk size must be greater than zero")]
    InvalidChunkSize,

    #[error("buffer size must be greater than zero")]
    InvalidBufferSize,

    #[error("Format error: {0}")]
    Format(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl WfcError {
    /// Classify a failure to open or read the split source.
    pub(crate) fn source_io(path: impl Into<PathBuf>, err: std::io::Error) -> Self {
        let path = path.into();
        if err.kind() == std::io::ErrorKind::NotFound {
            WfcError::SourceNotFound { path }
        } else {
            WfcError::SourceUnreadable { path, source: err }
        }
    }
}

// Convenient crate-wide result type
pub type Result<T> = std::result::Result<T, WfcError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Error, ErrorKind};

    #[test]
    fn missing_source_maps_to_not_found() {
        let err = WfcError::source_io("/nope", Error::new(ErrorKind::NotFound, "gone"));
        assert!(matches!(err, WfcError::SourceNotFound { .. }));
    }

    #[test]
    fn other_source_errors_are_unreadable() {
        let err = WfcError::source_io("/nope", Error::new(ErrorKind::PermissionDenied, "no"));
        match err {
            WfcError::SourceUnreadable { path, source } => {
                assert_eq!(path, PathBuf::from("/nope"));
                assert_eq!(source.kind(), ErrorKind::PermissionDenied);
            }
            other => panic!("unexpected {other:?}"),
        }
    }
}
