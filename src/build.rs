//! Top-level orchestration wiring the file loader, k-mer generator, and
//! distributed multimap into one indexing pass (§2, §6): `Build(filename)`
//! loads this rank's L1 block, a pool of worker threads pulls L2 blocks
//! from it, each block is parsed into FASTA or FASTQ records depending on
//! `config.format`, each record is expanded into k-mers which are hashed
//! and handed to the distributed multimap, and a final flush barriers
//! across ranks.

use std::path::Path;
use std::sync::Mutex;

extern crate scoped_threadpool;

use crate::dist::{DistMultimap, Entry, Transport};
use crate::fasta;
use crate::fastq;
use crate::kmer::alphabet::Alphabet;
use crate::kmer::{Kmer, KmerGenerator};
use crate::partition::{Config, Error as PartitionError, FileLoader, Result as PartitionResult, SeqFormat};
use crate::BaseRecord;

/// A built index: this rank's shard of the distributed multimap, the
/// transport handle it was built with, and the recoverable-error counters
/// accumulated along the way (§7: `InvalidCharacter` and a locally
/// unparseable record are recovered, never propagated, and are only
/// visible here).
pub struct Index<T: Transport> {
    multimap: DistMultimap<T>,
    kmer_stats: crate::kmer::Stats,
    dist_stats: crate::dist::Stats,
}

impl<T: Transport> Index<T> {
    /// Entries stored locally under `kmer`. Only meaningful on the rank
    /// that owns `hash(kmer) mod world_size`; other ranks always see an
    /// empty result.
    pub fn query(&self, kmer: &Kmer) -> Vec<Entry> {
        self.multimap.get_local(kmer).unwrap_or_default()
    }

    pub fn local_size(&self) -> u64 {
        self.multimap.local_size()
    }

    /// Total entry count across all ranks.
    pub fn size(&self) -> crate::dist::Result<u64> {
        self.multimap.size()
    }

    /// Recovery counters for invalid-character resets during k-mer
    /// generation on this rank.
    pub fn kmer_stats(&self) -> &crate::kmer::Stats {
        &self.kmer_stats
    }

    /// Recovery counters for records skipped during parsing on this rank.
    pub fn dist_stats(&self) -> &crate::dist::Stats {
        &self.dist_stats
    }
}

/// Runs one indexing pass over `path` for this rank, inserting every
/// valid k-mer (plus originating read id, offset and combined quality)
/// into a [`DistMultimap`] behind `transport`.
///
/// `config.k`, `config.chunk_size`, `config.thread_count` and
/// `config.buffer_capacity` drive the partitioning, L2 block size, worker
/// pool size and comm layer buffer size respectively.
pub fn build<A, P, T>(
    path: P,
    alphabet: A,
    transport: T,
    config: &Config,
) -> PartitionResult<Index<T>>
where
    A: Alphabet + Clone + Send + Sync,
    P: AsRef<Path>,
    T: Transport,
{
    let world_size = transport.world_size();
    let rank = transport.rank();
    let loader = FileLoader::open(path, world_size, rank, config)?;
    let multimap = DistMultimap::new(transport, config.buffer_capacity);
    let kmer_stats = crate::kmer::Stats::new();
    let dist_stats = crate::dist::Stats::new();

    if let Some(l1) = loader.next_l1_block() {
        // `scoped_threadpool::Scope::execute` closures cannot return a
        // value, so the first fatal error any worker hits (a resync
        // failure pulling its next L2 block, or a multimap insert failure)
        // is stashed here instead of being silently dropped.
        let first_error: Mutex<Option<PartitionError>> = Mutex::new(None);
        let mut pool = scoped_threadpool::Pool::new(config.thread_count.max(1) as u32);
        pool.scoped(|scope| {
            for _ in 0..config.thread_count.max(1) {
                let loader = &loader;
                let multimap = &multimap;
                let kmer_stats = &kmer_stats;
                let dist_stats = &dist_stats;
                let first_error = &first_error;
                let alphabet = alphabet.clone();
                let k = config.k;
                let format = config.format;
                scope.execute(move || {
                    let result = (|| -> PartitionResult<()> {
                        while let Some(l2) = loader.next_l2_block(&l1)? {
                            index_block(
                                l2.data, &alphabet, k, format, multimap, kmer_stats, dist_stats,
                            )?;
                        }
                        Ok(())
                    })();
                    if let Err(e) = result {
                        let mut slot = first_error.lock().unwrap();
                        if slot.is_none() {
                            *slot = Some(e);
                        }
                    }
                });
            }
        });
        if let Some(e) = first_error.into_inner().unwrap() {
            return Err(e);
        }
    }

    multimap.flush().map_err(std::io::Error::from)?;

    Ok(Index {
        multimap,
        kmer_stats,
        dist_stats,
    })
}

/// Parses every record out of `data` (FASTA or FASTQ, per `format`) and
/// inserts its k-mers. Malformed records are skipped and counted in
/// `dist_stats`: a partial record at the very end of an L2 block belongs to
/// whichever block resynchronization assigned it to, and a truly malformed
/// record elsewhere indicates upstream corruption this pass does not try
/// to repair. A failed multimap insert (comm layer down, codec failure) is
/// fatal and propagates out.
fn index_block<A, T>(
    data: &[u8],
    alphabet: &A,
    k: usize,
    format: SeqFormat,
    multimap: &DistMultimap<T>,
    kmer_stats: &crate::kmer::Stats,
    dist_stats: &crate::dist::Stats,
) -> PartitionResult<()>
where
    A: Alphabet + Clone,
    T: Transport,
{
    match format {
        SeqFormat::FASTQ => index_fastq_block(data, alphabet, k, multimap, kmer_stats, dist_stats),
        SeqFormat::FASTA => index_fasta_block(data, alphabet, k, multimap, kmer_stats, dist_stats),
    }
}

fn index_fastq_block<A, T>(
    data: &[u8],
    alphabet: &A,
    k: usize,
    multimap: &DistMultimap<T>,
    kmer_stats: &crate::kmer::Stats,
    dist_stats: &crate::dist::Stats,
) -> PartitionResult<()>
where
    A: Alphabet + Clone,
    T: Transport,
{
    use crate::fastq::Record as FastqRecord;

    let mut reader = fastq::Reader::new(data);
    while let Some(result) = reader.next() {
        let record = match result {
            Ok(r) => r,
            Err(_) => {
                dist_stats.record_skip();
                continue;
            }
        };
        let id = match record.id() {
            Ok(id) => id.as_bytes(),
            Err(_) => {
                dist_stats.record_skip();
                continue;
            }
        };
        let seq = record.seq();
        let qual = record.qual();
        let generator = match KmerGenerator::new(alphabet.clone(), k, seq, Some(qual), id) {
            Ok(g) => g.with_stats(kmer_stats),
            Err(_) => {
                dist_stats.record_skip();
                continue;
            }
        };
        insert_emissions(generator, multimap)?;
    }
    Ok(())
}

/// Mirrors [`index_fastq_block`], but with no quality line (§4.E): every
/// emission's `quality` is `None`.
fn index_fasta_block<A, T>(
    data: &[u8],
    alphabet: &A,
    k: usize,
    multimap: &DistMultimap<T>,
    kmer_stats: &crate::kmer::Stats,
    dist_stats: &crate::dist::Stats,
) -> PartitionResult<()>
where
    A: Alphabet + Clone,
    T: Transport,
{
    let mut reader = fasta::Reader::new(data);
    while let Some(result) = reader.next() {
        let record = match result {
            Ok(r) => r,
            Err(_) => {
                dist_stats.record_skip();
                continue;
            }
        };
        let id = match record.id() {
            Ok(id) => id.as_bytes(),
            Err(_) => {
                dist_stats.record_skip();
                continue;
            }
        };
        let seq = record.seq();
        let generator = match KmerGenerator::new(alphabet.clone(), k, seq, None, id) {
            Ok(g) => g.with_stats(kmer_stats),
            Err(_) => {
                dist_stats.record_skip();
                continue;
            }
        };
        insert_emissions(generator, multimap)?;
    }
    Ok(())
}

/// Inserts every emission into `multimap`, propagating the first failure
/// (comm layer down, codec failure) instead of discarding it.
fn insert_emissions<A, T>(
    generator: KmerGenerator<'_, A>,
    multimap: &DistMultimap<T>,
) -> PartitionResult<()>
where
    A: Alphabet,
    T: Transport,
{
    for emission in generator {
        multimap
            .insert(
                &emission.kmer,
                emission.read_id,
                emission.offset as u64,
                emission.quality,
            )
            .map_err(std::io::Error::from)?;
    }
    Ok(())
}
