//! This crate provides FASTA and FASTQ parsing and writing, extended with the
//! building blocks needed to run sequence indexing across a cluster of worker
//! processes: record-aligned range partitioning of input files, a bit-packed
//! k-mer representation with O(k/w) rolling update, and a distributed,
//! hash-partitioned k-mer multimap fed through a buffering communication
//! layer.
//!
//! # Sequence parsing
//!
//! [`fasta`], [`fastq`] and [`fastx`] provide streaming readers built around
//! the same generic core reader in [`core`]. See their module docs for
//! details and examples.
//!
//! # Partitioning and k-mer indexing
//!
//! [`partition`] splits a file into byte ranges and loads each range through
//! a memory-mapped view, resynchronizing to record boundaries at the
//! boundaries of a range. [`kmer`] implements the bit-packed k-mer value and
//! the per-record rolling generator. [`dist`] implements the communication
//! layer and the distributed multimap that the generator feeds into.

extern crate buffer_redux as buf_redux;
extern crate memchr;

#[macro_use]
extern crate serde_derive;
extern crate serde;

#[macro_use]
mod error;
mod helpers;
mod record;

mod build;
pub mod core;
pub mod dist;
pub mod fasta;
pub mod fastq;
pub mod fastx;
pub mod kmer;
pub mod parallel;
pub mod partition;
pub mod policy;
pub mod prelude;

pub use crate::build::{build, Index};
pub use crate::core::PositionStore;
pub use error::{ErrorOffset, ErrorPosition};
pub use helpers::{LinePositionIter, LineSearchIter, Position};
pub use record::BaseRecord;
