use crate::domain::ChunkSpec;
use crate::error::{Result, WfcError};

/// Number of chunks a file of `file_size` bytes splits into.
pub fn chunk_count(file_size: u64, chunk_size: u64) -> Result<u64> {
    if chunk_size == 0 {
        return Err(WfcError::InvalidChunkSize);
    }
    if file_size <= chunk_size {
        Ok(1)
    } else {
        Ok(file_size.div_ceil(chunk_size))
    }
}

/// Contiguous chunk boundaries covering `0..file_size`, produced one at a time.
///
/// A file that fits in one chunk yields a single spec of `file_size` bytes
/// (possibly zero). Otherwise every chunk but the last is `chunk_size` long and
/// the last takes the remainder.
#[derive(Clone, Debug)]
pub struct ChunkPlan {
    file_size: u64,
    nominal: u64,
    count: u64,
    next_index: u64,
    remaining: u64,
    written_total: u64,
}

impl ChunkPlan {
    pub fn chunk_total(&self) -> u64 {
        self.count
    }

    pub fn is_single(&self) -> bool {
        self.count == 1
    }
}

impl Iterator for ChunkPlan {
    type Item = ChunkSpec;

    fn next(&mut self) -> Option<ChunkSpec> {
        if self.remaining == 0 {
            return None;
        }
        let index = self.next_index;
        let len = if self.remaining > 1 {
            self.nominal
        } else {
            self.file_size - self.written_total
        };
        let spec = ChunkSpec {
            index,
            offset: self.written_total,
            len,
        };
        self.remaining -= 1;
        self.next_index = self.next_index.saturating_add(1);
        self.written_total += len;
        Some(spec)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match usize::try_from(self.remaining) {
            Ok(n) => (n, Some(n)),
            Err(_) => (usize::MAX, None),
        }
    }
}

pub fn plan_chunks(file_size: u64, chunk_size: u64) -> Result<ChunkPlan> {
    let count = chunk_count(file_size, chunk_size)?;
    Ok(ChunkPlan {
        file_size,
        nominal: if count == 1 { file_size } else { chunk_size },
        count,
        next_index: 1,
        remaining: count,
        written_total: 0,
    })
}
