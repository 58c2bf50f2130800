//! Environment knobs collected into one place (§6).

use crate::fastx::SeqFormat;

/// Conservative default; used only as a fallback when the platform's actual
/// page size cannot be queried. 4 KiB is correct on the large majority of
/// targets this crate runs on.
pub const DEFAULT_PAGE_SIZE: u64 = 4096;

pub const DEFAULT_BUFFER_CAPACITY: usize = 64 * 1024;

/// Tunables for a partitioned, distributed indexing run.
#[derive(Debug, Clone)]
pub struct Config {
    /// Nominal size in bytes of an L2 block.
    pub chunk_size: u64,
    /// Number of worker threads per rank.
    pub thread_count: usize,
    /// Per-destination buffer size used by the communication layer.
    pub buffer_capacity: usize,
    /// K-mer length.
    pub k: usize,
    /// Input file format, which selects the record boundary resync
    /// strategy (§4.C) and the in-block record reader (§4.E).
    pub format: SeqFormat,
}

impl Config {
    pub fn new(k: usize) -> Self {
        Config {
            chunk_size: DEFAULT_PAGE_SIZE,
            thread_count: std::thread::available_parallelism()
                .map(|n| n.get())
                .unwrap_or(1),
            buffer_capacity: DEFAULT_BUFFER_CAPACITY,
            k,
            format: SeqFormat::FASTQ,
        }
    }

    pub fn with_chunk_size(mut self, chunk_size: u64) -> Self {
        self.chunk_size = chunk_size;
        self
    }

    pub fn with_thread_count(mut self, thread_count: usize) -> Self {
        self.thread_count = thread_count.max(1);
        self
    }

    pub fn with_buffer_capacity(mut self, buffer_capacity: usize) -> Self {
        self.buffer_capacity = buffer_capacity;
        self
    }

    pub fn with_format(mut self, format: SeqFormat) -> Self {
        self.format = format;
        self
    }
}
