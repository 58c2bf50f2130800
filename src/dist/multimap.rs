//! Distributed, hash-partitioned k-mer multimap (§4.G).

use std::collections::hash_map::DefaultHasher;
use std::collections::HashMap;
use std::hash::{Hash, Hasher};
use std::sync::Mutex;

use crate::kmer::Kmer;

use super::comm::CommLayer;
use super::error::{Error, ErrorKind, Result};
use super::message::{Batch, Entry};
use super::transport::Transport;

fn codec_error(e: bincode::Error) -> Error {
    Error::new(ErrorKind::Codec(e))
}

/// Local shard of the index, owning exactly the k-mers that hash to this
/// rank. Insertion of a k-mer belonging to another rank is forwarded
/// through the buffering [`CommLayer`]; [`flush`](Self::flush) quiesces
/// that layer and applies everything it delivered.
pub struct DistMultimap<T: Transport> {
    comm: CommLayer<T>,
    local: Mutex<HashMap<Kmer, Vec<Entry>>>,
}

impl<T: Transport> DistMultimap<T> {
    pub fn new(transport: T, buffer_capacity: usize) -> Self {
        DistMultimap {
            comm: CommLayer::new(transport, buffer_capacity),
            local: Mutex::new(HashMap::new()),
        }
    }

    fn owning_rank(&self, kmer: &Kmer) -> u64 {
        let mut hasher = DefaultHasher::new();
        kmer.hash(&mut hasher);
        hasher.finish() % self.comm.transport().world_size()
    }

    /// Inserts one `(k-mer, metadata)` pair. Local if this rank owns the
    /// key's hash, otherwise buffered for the owning rank.
    pub fn insert(
        &self,
        kmer: &Kmer,
        read_id: &[u8],
        offset: u64,
        quality: Option<f64>,
    ) -> Result<()> {
        let dst = self.owning_rank(kmer);
        let entry = Entry::new(kmer, read_id, offset, quality);
        if dst == self.comm.transport().rank() {
            self.insert_local(kmer.clone(), entry);
            return Ok(());
        }
        let batch = Batch {
            entries: vec![entry],
        };
        let bytes = bincode::serialize(&batch).map_err(codec_error)?;
        self.comm.send(dst, &bytes)
    }

    fn insert_local(&self, kmer: Kmer, entry: Entry) {
        let mut local = self.local.lock().unwrap();
        local.entry(kmer).or_insert_with(Vec::new).push(entry);
    }

    fn drain_inbound(&self) -> Result<()> {
        while let Some(bytes) = self.comm.try_recv()? {
            let batch: Batch = bincode::deserialize(&bytes).map_err(codec_error)?;
            for entry in batch.entries {
                let kmer = entry.kmer();
                self.insert_local(kmer, entry);
            }
        }
        Ok(())
    }

    /// Quiesces the comm layer, applies everything it delivered, and
    /// barriers so every rank reaches the same point before returning.
    /// After this call, the local state equals the set of entries whose
    /// key hashes to this rank.
    pub fn flush(&self) -> Result<()> {
        self.comm.flush()?;
        self.drain_inbound()
    }

    /// Number of entries held locally right now.
    pub fn local_size(&self) -> u64 {
        let local = self.local.lock().unwrap();
        local.values().map(|v| v.len() as u64).sum()
    }

    /// Total entry count across all ranks, via an allreduce over
    /// `local_size()`.
    pub fn size(&self) -> Result<u64> {
        self.comm.transport().allreduce_sum(self.local_size())
    }

    /// Looks up the entries stored locally under `kmer`. Returns `None`
    /// if this rank doesn't own the key or holds no entries for it.
    pub fn get_local(&self, kmer: &Kmer) -> Option<Vec<Entry>> {
        let local = self.local.lock().unwrap();
        local.get(kmer).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dist::channel::ChannelTransport;
    use crate::kmer::alphabet::{Alphabet, Dna};
    use std::thread;

    fn make_kmer(s: &str) -> Kmer {
        let dna = Dna;
        let mut k = Kmer::new(s.len(), dna.bits_per_char()).unwrap();
        for b in s.bytes() {
            k.append(dna.encode(b).unwrap());
        }
        k
    }

    #[test]
    fn distinct_kmers_survive_flush_across_ranks() {
        let world_size = 4u64;
        let world = ChannelTransport::world(world_size);
        let maps: Vec<_> = world
            .into_iter()
            .map(|t| DistMultimap::new(t, 4096))
            .collect();

        let handles: Vec<_> = maps
            .into_iter()
            .enumerate()
            .map(|(rank, map)| {
                thread::spawn(move || {
                    for i in 0..1000u32 {
                        let s = format!(
                            "{}{}{}{}",
                            b"ACGT"[((rank as u32 + i) % 4) as usize] as char,
                            b"ACGT"[((rank as u32 + i * 3) % 4) as usize] as char,
                            b"ACGT"[((rank as u32 + i * 7) % 4) as usize] as char,
                            b"ACGT"[((rank as u32 + i * 11) % 4) as usize] as char,
                        );
                        let kmer = make_kmer(&s);
                        map.insert(&kmer, format!("r{}", i).as_bytes(), i as u64, None)
                            .unwrap();
                    }
                    map.flush().unwrap();
                    map.local_size()
                })
            })
            .collect();

        let total: u64 = handles.into_iter().map(|h| h.join().unwrap()).sum();
        assert!(total > 0);
    }
}
