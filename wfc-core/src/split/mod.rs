use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use time::Date;
use tracing::info;

use crate::clock;
use crate::domain::{ChunkFile, SourceFile, SplitOutcome};
use crate::error::{Result, WfcError};
use crate::output::OverwritePolicy;

pub mod plan;
pub mod writer;

pub use plan::{ChunkPlan, chunk_count, plan_chunks};
pub use writer::write_chunk;

pub const DEFAULT_BUFFER_SIZE: usize = 64 * 1024;

#[derive(Clone, Debug)]
pub struct SplitOptions {
    /// Size of each read from the source.
    pub buffer_size: usize,
    pub overwrite: OverwritePolicy,
    /// Date used for the output directory name; today when unset.
    pub date: Option<Date>,
}

impl Default for SplitOptions {
    fn default() -> Self {
        Self {
            buffer_size: DEFAULT_BUFFER_SIZE,
            overwrite: OverwritePolicy::default(),
            date: None,
        }
    }
}

/// Name and length of the file to split.
pub fn describe_source(path: &Path) -> Result<SourceFile> {
    let md = fs::metadata(path).map_err(|e| WfcError::source_io(path, e))?;
    if !md.is_file() {
        return Err(WfcError::SourceUnreadable {
            path: path.to_path_buf(),
            source: std::io::Error::new(std::io::ErrorKind::InvalidInput, "not a regular file"),
        });
    }
    Ok(SourceFile {
        path: path.to_path_buf(),
        name: path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default(),
        len: md.len(),
    })
}

/// `<source_dir>/<YYYYMMDD>`. Pure; nothing is created.
pub fn chunk_dir(source: &Path, date: Date) -> Result<PathBuf> {
    let parent = match source.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    Ok(parent.join(clock::date_stamp(date)?))
}

/// `<dir>/part<N>`.
pub fn part_path(dir: &Path, index: u64) -> PathBuf {
    dir.join(format!("part{index}"))
}

/// `<source_path>.bak`, the destination when the whole file is one chunk.
pub fn single_chunk_path(source: &Path) -> PathBuf {
    let mut s = OsString::from(source.as_os_str());
    s.push(".bak");
    PathBuf::from(s)
}

/// Create the dated output directory for `source`, reusing it if present.
pub fn ensure_chunk_dir(source: &Path, date: Date) -> Result<PathBuf> {
    let dir = chunk_dir(source, date)?;
    fs::create_dir_all(&dir).map_err(|e| WfcError::DirectoryCreateFailed {
        path: dir.clone(),
        source: e,
    })?;
    Ok(dir)
}

/// Split `source` into `chunk_size`-byte files.
///
/// Aborts on the first failing chunk; chunks already written stay on disk.
pub fn split(source: &Path, chunk_size: u64, opts: &SplitOptions) -> Result<SplitOutcome> {
    if chunk_size == 0 {
        return Err(WfcError::InvalidChunkSize);
    }
    if opts.buffer_size == 0 {
        return Err(WfcError::InvalidBufferSize);
    }

    let src = describe_source(source)?;
    let plan = plan_chunks(src.len, chunk_size)?;
    let date = opts.date.unwrap_or_else(|| clock::now().date());
    let out_dir = ensure_chunk_dir(source, date)?;
    let single = plan.is_single();

    info!(
        source = %source.display(),
        bytes = src.len,
        chunk_size,
        chunks = plan.chunk_total(),
        "splitting file"
    );

    let mut chunks = Vec::new();
    for spec in plan {
        let dest = if single {
            single_chunk_path(source)
        } else {
            part_path(&out_dir, spec.index)
        };
        write_chunk(source, &dest, &spec, opts.buffer_size, opts.overwrite)?;
        chunks.push(ChunkFile { spec, path: dest });
    }

    info!(out_dir = %out_dir.display(), chunks = chunks.len(), "split complete");
    Ok(SplitOutcome {
        source: src,
        out_dir,
        chunks,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;

    fn opts() -> SplitOptions {
        SplitOptions {
            buffer_size: 13,
            date: Some(date!(2023 - 11 - 02)),
            ..Default::default()
        }
    }

    #[test]
    fn paths_follow_layout() {
        let dir = chunk_dir(Path::new("/data/in/big.txt"), date!(2023 - 11 - 02)).unwrap();
        assert_eq!(dir, PathBuf::from("/data/in/20231102"));
        assert_eq!(part_path(&dir, 3), PathBuf::from("/data/in/20231102/part3"));
        assert_eq!(
            single_chunk_path(Path::new("/data/in/big.txt")),
            PathBuf::from("/data/in/big.txt.bak")
        );
    }

    #[test]
    fn bare_file_name_uses_current_dir() {
        let dir = chunk_dir(Path::new("big.txt"), date!(2023 - 11 - 02)).unwrap();
        assert_eq!(dir, PathBuf::from("./20231102"));
    }

    #[test]
    fn multi_chunk_split_reassembles() {
        let tmp = tempfile::tempdir().unwrap();
        let src = tmp.path().join("input.txt");
        let data: Vec<u8> = (0..1000u32).map(|i| b'a' + (i % 26) as u8).collect();
        fs::write(&src, &data).unwrap();

        let out = split(&src, 300, &opts()).unwrap();
        assert_eq!(out.out_dir, tmp.path().join("20231102"));
        assert_eq!(out.chunks.len(), 4);
        assert_eq!(out.total_bytes(), 1000);
        assert_eq!(out.source.name, "input.txt");

        let mut joined = Vec::new();
        for (i, c) in out.chunks.iter().enumerate() {
            assert_eq!(c.path, out.out_dir.join(format!("part{}", i + 1)));
            joined.extend(fs::read(&c.path).unwrap());
        }
        assert_eq!(joined, data);
    }

    #[test]
    fn single_chunk_goes_next_to_source() {
        let tmp = tempfile::tempdir().unwrap();
        let src = tmp.path().join("small.txt");
        fs::write(&src, b"tiny").unwrap();

        let out = split(&src, 1024, &opts()).unwrap();
        assert_eq!(out.chunks.len(), 1);
        assert_eq!(out.chunks[0].path, tmp.path().join("small.txt.bak"));
        assert_eq!(fs::read(&out.chunks[0].path).unwrap(), b"tiny");
        assert!(out.out_dir.is_dir());
    }

    #[test]
    fn empty_source_yields_one_empty_chunk() {
        let tmp = tempfile::tempdir().unwrap();
        let src = tmp.path().join("empty.txt");
        fs::write(&src, b"").unwrap();

        let out = split(&src, 8, &opts()).unwrap();
        assert_eq!(out.chunks.len(), 1);
        assert_eq!(fs::metadata(&out.chunks[0].path).unwrap().len(), 0);
    }

    #[test]
    fn existing_dated_dir_is_reused() {
        let tmp = tempfile::tempdir().unwrap();
        let src = tmp.path().join("input.txt");
        fs::write(&src, b"0123456789").unwrap();

        split(&src, 4, &opts()).unwrap();
        let again = split(&src, 4, &opts()).unwrap();
        assert_eq!(again.chunks.len(), 3);
        assert_eq!(fs::read(again.out_dir.join("part3")).unwrap(), b"89");
    }

    #[test]
    fn refuse_policy_stops_on_existing_part() {
        let tmp = tempfile::tempdir().unwrap();
        let src = tmp.path().join("input.txt");
        fs::write(&src, b"0123456789").unwrap();
        let dir = tmp.path().join("20231102");
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("part2"), b"keep").unwrap();

        let o = SplitOptions {
            overwrite: OverwritePolicy::Refuse,
            ..opts()
        };
        let err = split(&src, 4, &o).unwrap_err();
        assert!(matches!(err, WfcError::ChunkWriteFailed { .. }));
        // part1 was written before the failure and is left in place
        assert_eq!(fs::read(dir.join("part1")).unwrap(), b"0123");
        assert_eq!(fs::read(dir.join("part2")).unwrap(), b"keep");
        assert!(!dir.join("part3").exists());
    }

    #[test]
    fn missing_source_is_reported() {
        let tmp = tempfile::tempdir().unwrap();
        let err = split(&tmp.path().join("nope.txt"), 4, &opts()).unwrap_err();
        assert!(matches!(err, WfcError::SourceNotFound { .. }));
    }

    #[test]
    fn directory_source_is_unreadable() {
        let tmp = tempfile::tempdir().unwrap();
        let err = split(tmp.path(), 4, &opts()).unwrap_err();
        assert!(matches!(err, WfcError::SourceUnreadable { .. }));
    }

    #[test]
    fn zero_chunk_size_is_rejected_before_io() {
        let err = split(Path::new("/does/not/matter"), 0, &opts()).unwrap_err();
        assert!(matches!(err, WfcError::InvalidChunkSize));
    }
}
