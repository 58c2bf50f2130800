//! Wire format for one index entry crossing the communication layer.

use crate::kmer::Kmer;

/// `(k-mer, metadata)` as it travels over the wire; mirrors the in-memory
/// index entry but owns its bytes so it can be serialized independently of
/// the L2 block it was generated from.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Entry {
    kmer_words: Vec<u64>,
    k: usize,
    bits_per_char: u32,
    pub read_id: Vec<u8>,
    pub offset: u64,
    pub quality: Option<f64>,
}

impl Entry {
    pub fn new(kmer: &Kmer, read_id: &[u8], offset: u64, quality: Option<f64>) -> Self {
        Entry {
            kmer_words: kmer.words().to_vec(),
            k: kmer.k(),
            bits_per_char: kmer.bits_per_char(),
            read_id: read_id.to_vec(),
            offset,
            quality,
        }
    }

    pub fn kmer(&self) -> Kmer {
        Kmer::from_words(self.kmer_words.clone(), self.k, self.bits_per_char)
    }
}

/// A batch of entries destined for one rank, the unit the communication
/// layer actually flushes over the wire.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Batch {
    pub entries: Vec<Entry>,
}
