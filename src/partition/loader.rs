//! Memory-mapped file loading and two-level (L1/L2) block partitioning
//! (§4.B).

use std::fs::File;
use std::path::Path;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

use memmap2::Mmap;

use crate::fastx::SeqFormat;

use super::config::Config;
use super::error::Result;
use super::range::Range;
use super::resync;

/// A contiguous, memory-mapped byte region owned by exactly one rank for the
/// duration of one indexing pass.
#[derive(Debug, Clone, Copy)]
pub struct L1Block<'m> {
    pub data: &'m [u8],
    pub range: Range,
}

/// A sub-range of an [`L1Block`], handed out to one worker thread.
#[derive(Debug, Clone, Copy)]
pub struct L2Block<'m> {
    pub data: &'m [u8],
    pub range: Range,
}

/// Maps a file region for one rank and serves [`L2Block`]s to worker
/// threads off a shared atomic cursor.
pub struct FileLoader {
    mmap: Mmap,
    chunk_size: u64,
    format: SeqFormat,
    l1_range: Range,
    l1_served: AtomicBool,
    l2_cursor: AtomicU64,
}

impl FileLoader {
    /// Opens `path`, partitions its byte range across `world_size` ranks,
    /// and resynchronizes this rank's slice (`rank`) to record boundaries
    /// per `config.format`. `thread_count` and `chunk_size` configure the
    /// L2 cursor.
    pub fn open<P: AsRef<Path>>(
        path: P,
        world_size: u64,
        rank: u64,
        config: &Config,
    ) -> Result<Self> {
        let file = File::open(path)?;
        // SAFETY: the mapped file is treated as read-only for the lifetime
        // of the loader and is not expected to be modified concurrently by
        // another process while the indexing pass runs.
        let mmap = unsafe { Mmap::map(&file)? };
        let total_len = mmap.len() as u64;

        let raw_ranges = Range::partition(total_len, world_size.max(1));
        let raw = raw_ranges
            .get(rank as usize)
            .copied()
            .unwrap_or_else(|| Range::new(total_len, total_len));

        let start = if rank == 0 {
            0
        } else {
            resync::resync(&mmap, raw.start as usize, config.format)? as u64
        };
        let end = if rank + 1 >= world_size {
            total_len
        } else {
            resync::resync(&mmap, raw.end as usize, config.format)? as u64
        };

        Ok(FileLoader {
            mmap,
            chunk_size: config.chunk_size.max(1),
            format: config.format,
            l1_range: Range::new(start, end),
            l1_served: AtomicBool::new(false),
            l2_cursor: AtomicU64::new(0),
        })
    }

    /// Returns the next (possibly only) L1 block for this rank, or `None`
    /// once exhausted.
    ///
    /// Takes `&self` rather than `&mut self`: the returned [`L1Block`]
    /// borrows out of the mmap for as long as the caller holds it, and
    /// callers need a plain shared reference to `self` alongside it (e.g.
    /// to hand worker threads both the L1 block and the loader they pull
    /// L2 blocks from). Served-once tracking is an atomic flag instead of
    /// a `bool` field for the same reason.
    pub fn next_l1_block(&self) -> Option<L1Block<'_>> {
        if self.l1_range.is_empty() {
            return None;
        }
        if self
            .l1_served
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .is_err()
        {
            return None;
        }
        self.l2_cursor.store(0, Ordering::SeqCst);
        let data = &self.mmap[self.l1_range.start as usize..self.l1_range.end as usize];
        Some(L1Block {
            data,
            range: self.l1_range,
        })
    }

    /// Hands out the next record-aligned, non-overlapping-by-nominal-size
    /// slice of `l1` using an atomic fetch-add on the shared cursor.
    ///
    /// Returns `Err` if the nominal chunk boundary cannot be resynchronized
    /// to a record start (`ErrorKind::NoRecordBoundary`); this is fatal, not
    /// a reason to silently fall back to serving the rest of `l1` as one
    /// block.
    pub fn next_l2_block<'m>(&self, l1: &L1Block<'m>) -> Result<Option<L2Block<'m>>> {
        let l1_len = l1.data.len() as u64;
        let start = self.l2_cursor.fetch_add(self.chunk_size, Ordering::SeqCst);
        if start >= l1_len {
            return Ok(None);
        }
        let nominal_end = (start + self.chunk_size).min(l1_len);
        let end = if nominal_end >= l1_len {
            l1_len
        } else {
            resync::resync(l1.data, nominal_end as usize, self.format)? as u64
        };
        Ok(Some(L2Block {
            data: &l1.data[start as usize..end as usize],
            range: Range::new(start, end),
        }))
    }

    /// Rewinds the L2 cursor so the current L1 block can be scanned again.
    pub fn reset_l2_partitioner(&self) {
        self.l2_cursor.store(0, Ordering::SeqCst);
    }

    pub fn l1_range(&self) -> Range {
        self.l1_range
    }
}
