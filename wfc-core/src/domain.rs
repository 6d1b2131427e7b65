// wfc_core/src/domain.rs
use std::path::PathBuf;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SourceFile {
    pub path: PathBuf,
    pub name: String,
    pub len: u64,
}

/// One contiguous byte range of the source. `index` is 1-based.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ChunkSpec {
    pub index: u64,
    pub offset: u64,
    pub len: u64,
}

impl ChunkSpec {
    pub fn end(&self) -> u64 {
        self.offset + self.len
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChunkFile {
    pub spec: ChunkSpec,
    pub path: PathBuf,
}

#[derive(Clone, Debug)]
pub struct SplitOutcome {
    pub source: SourceFile,
    /// Dated directory (`<source_dir>/<YYYYMMDD>`), created even for a single chunk.
    pub out_dir: PathBuf,
    pub chunks: Vec<ChunkFile>,
}

impl SplitOutcome {
    pub fn total_bytes(&self) -> u64 {
        self.chunks.iter().map(|c| c.spec.len).sum()
    }
}
