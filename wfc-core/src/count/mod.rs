use std::fs;
use std::path::{Path, PathBuf};

use time::Time;
use tracing::{debug, info, warn};
use walkdir::WalkDir;

use crate::clock;
use crate::error::{Result, WfcError};
use crate::output::OverwritePolicy;

pub mod report;
pub mod table;
pub mod tokenize;

pub use report::{report_path, write_report, write_report_to};
pub use table::{Report, WordCounts, WordFrequency};
pub use tokenize::{EmptyTokens, join_lines, normalize, tokenize};

#[derive(Clone, Debug, Default)]
pub struct CountOptions {
    pub empty_tokens: EmptyTokens,
    pub overwrite: OverwritePolicy,
    /// Time stamped into the report name; now when unset.
    pub generated_at: Option<Time>,
}

/// Counts over one directory plus the inputs that could not be read.
#[derive(Debug, Default)]
pub struct Tally {
    pub counts: WordCounts,
    pub files_read: usize,
    /// Always `WfcError::InputFileReadFailed`.
    pub skipped: Vec<WfcError>,
}

#[derive(Debug)]
pub struct CountOutcome {
    pub tally: Tally,
    pub report_path: PathBuf,
    pub report_lines: usize,
}

/// Regular files directly inside `dir`, sorted by file name.
pub fn list_inputs(dir: &Path) -> Result<Vec<PathBuf>> {
    let md = fs::metadata(dir).map_err(|e| WfcError::InputDirectoryUnreadable {
        path: dir.to_path_buf(),
        source: e,
    })?;
    if !md.is_dir() {
        return Err(WfcError::InputDirectoryUnreadable {
            path: dir.to_path_buf(),
            source: std::io::Error::new(std::io::ErrorKind::InvalidInput, "not a directory"),
        });
    }

    let mut files = Vec::new();
    for e in WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
        .sort_by_file_name()
    {
        match e {
            Ok(entry) => {
                if entry.file_type().is_file() {
                    files.push(entry.into_path());
                }
            }
            Err(err) if err.depth() == 0 => {
                return Err(WfcError::InputDirectoryUnreadable {
                    path: dir.to_path_buf(),
                    source: err.into(),
                });
            }
            Err(err) => {
                // a dangling link or an entry that vanished mid-listing
                let path = err.path().map(Path::to_path_buf).unwrap_or_default();
                warn!(path = %path.display(), error = %err, "skipping directory entry");
            }
        }
    }
    Ok(files)
}

/// Whole file as text; invalid UTF-8 is replaced and so acts as a delimiter.
pub fn read_input(path: &Path) -> Result<String> {
    let bytes = fs::read(path).map_err(|e| WfcError::InputFileReadFailed {
        path: path.to_path_buf(),
        source: e,
    })?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Count words across the files of `dir` without writing anything.
///
/// Unreadable files are logged and recorded in [`Tally::skipped`].
pub fn tally_directory(dir: &Path, empty: EmptyTokens) -> Result<Tally> {
    let mut tally = Tally::default();
    for path in list_inputs(dir)? {
        match read_input(&path) {
            Ok(text) => {
                let mut file_counts = WordCounts::new();
                let tokens = file_counts.add_text(&text, empty);
                tally.counts.merge(file_counts);
                tally.files_read += 1;
                debug!(path = %path.display(), tokens, "input counted");
            }
            Err(err) => {
                warn!(error = %err, "skipping unreadable input");
                tally.skipped.push(err);
            }
        }
    }
    Ok(tally)
}

/// Count the words in `dir` and write the sorted report into it.
pub fn count_words(dir: &Path, opts: &CountOptions) -> Result<CountOutcome> {
    let tally = tally_directory(dir, opts.empty_tokens)?;
    let report = tally.counts.to_report();
    let at = opts.generated_at.unwrap_or_else(|| clock::now().time());
    let report_path = write_report(dir, &report, at, opts.overwrite)?;

    info!(
        dir = %dir.display(),
        files = tally.files_read,
        skipped = tally.skipped.len(),
        words = report.len(),
        report = %report_path.display(),
        "word count complete"
    );
    Ok(CountOutcome {
        report_lines: report.len(),
        tally,
        report_path,
    })
}
