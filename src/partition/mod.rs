//! Record-aligned file partitioning: splitting a file into per-rank,
//! memory-mapped L1 blocks (§4.B) built on top of a plain byte-range
//! partitioner (§4.A), and resynchronizing to FASTQ record boundaries at
//! arbitrary offsets (§4.C).

mod config;
#[macro_use]
mod error;
mod loader;
mod range;
mod resync;

pub use self::config::{Config, DEFAULT_BUFFER_CAPACITY, DEFAULT_PAGE_SIZE};
pub use crate::fastx::SeqFormat;
pub use self::error::{Error, ErrorKind, Result};
pub use self::loader::{FileLoader, L1Block, L2Block};
pub use self::range::Range;
pub use self::resync::resync;
