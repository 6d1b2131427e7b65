use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use time::Time;
use tracing::debug;

use super::table::Report;
use crate::clock;
use crate::error::{Result, WfcError};
use crate::output::{OverwritePolicy, create_output};

/// `<dir>/wordCount<HHMMSS>.txt`.
pub fn report_path(dir: &Path, at: Time) -> Result<PathBuf> {
    Ok(dir.join(format!("wordCount{}.txt", clock::time_stamp(at)?)))
}

/// Write `report` to `path`, one `word count` line each, flushed per line.
pub fn write_report_to(path: &Path, report: &Report, overwrite: OverwritePolicy) -> Result<()> {
    let report_err = |e: std::io::Error| WfcError::ReportWriteFailed {
        path: path.to_path_buf(),
        source: e,
    };
    let f = create_output(path, overwrite).map_err(report_err)?;
    let mut w = BufWriter::new(f);
    for line in report.lines() {
        writeln!(w, "{line}").map_err(report_err)?;
        w.flush().map_err(report_err)?;
    }
    let f = w.into_inner().map_err(|e| report_err(e.into_error()))?;
    f.sync_all().map_err(report_err)?;
    debug!(path = %path.display(), lines = report.len(), "report written");
    Ok(())
}

/// Write `report` into `dir` under its timestamped name and return that path.
pub fn write_report(
    dir: &Path,
    report: &Report,
    at: Time,
    overwrite: OverwritePolicy,
) -> Result<PathBuf> {
    let path = report_path(dir, at)?;
    write_report_to(&path, report, overwrite)?;
    Ok(path)
}
