use std::fs::{File, OpenOptions};
use std::io;
use std::path::Path;

use tracing::warn;

/// What to do when an output file already exists, e.g. when two runs share
/// an output directory.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OverwritePolicy {
    /// Truncate and replace, logging a warning.
    #[default]
    Overwrite,
    /// Exclusive create; an existing file is an `AlreadyExists` error.
    Refuse,
}

pub(crate) fn create_output(path: &Path, policy: OverwritePolicy) -> io::Result<File> {
    match policy {
        OverwritePolicy::Overwrite => {
            if path.exists() {
                warn!(path = %path.display(), "replacing existing output file");
            }
            File::create(path)
        }
        OverwritePolicy::Refuse => OpenOptions::new().write(true).create_new(true).open(path),
    }
}
