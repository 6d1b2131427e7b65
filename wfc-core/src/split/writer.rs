use std::fs::File;
use std::io::{BufWriter, ErrorKind, Read, Seek, SeekFrom, Write};
use std::path::Path;

use tracing::debug;

use crate::domain::ChunkSpec;
use crate::error::{Result, WfcError};
use crate::output::{OverwritePolicy, create_output};

/// Copy the byte range described by `spec` from `source` into a new file at `dest`.
///
/// Reads run in `buffer_size` blocks; the block that crosses the chunk end is
/// written only up to the boundary. Returns the number of bytes written, which
/// always equals `spec.len` on success.
pub fn write_chunk(
    source: &Path,
    dest: &Path,
    spec: &ChunkSpec,
    buffer_size: usize,
    overwrite: OverwritePolicy,
) -> Result<u64> {
    if buffer_size == 0 {
        return Err(WfcError::InvalidBufferSize);
    }

    let mut src = File::open(source).map_err(|e| WfcError::source_io(source, e))?;
    src.seek(SeekFrom::Start(spec.offset))
        .map_err(|e| WfcError::source_io(source, e))?;

    let chunk_err = |e: std::io::Error| WfcError::ChunkWriteFailed {
        path: dest.to_path_buf(),
        source: e,
    };
    let out = create_output(dest, overwrite).map_err(chunk_err)?;
    let mut out = BufWriter::new(out);

    let mut buf = vec![0u8; buffer_size];
    let mut written = 0u64;
    while written < spec.len {
        let n = match src.read(&mut buf) {
            Ok(0) => {
                return Err(WfcError::SourceUnreadable {
                    path: source.to_path_buf(),
                    source: std::io::Error::new(
                        ErrorKind::UnexpectedEof,
                        format!(
                            "source ended at byte {} inside chunk {}",
                            spec.offset + written,
                            spec.index
                        ),
                    ),
                });
            }
            Ok(n) => n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(WfcError::source_io(source, e)),
        };
        let left = spec.len - written;
        let take = if n as u64 > left { left as usize } else { n };
        out.write_all(&buf[..take]).map_err(chunk_err)?;
        written += take as u64;
    }

    // surface flush errors instead of losing them on drop
    let file = out.into_inner().map_err(|e| chunk_err(e.into_error()))?;
    file.sync_all().map_err(chunk_err)?;

    debug!(
        chunk = spec.index,
        offset = spec.offset,
        len = written,
        dest = %dest.display(),
        "chunk written"
    );
    Ok(written)
}
