use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use super::error::{Error, ErrorKind, Result};

/// Maximum number of 64-bit words backing a single k-mer. `k` is checked
/// against this bound at construction time (`ErrorKind::Overflow`).
const MAX_WORDS: usize = 8;

/// A fixed-width, bit-packed k-mer value.
///
/// Characters are stored as `bits_per_char`-wide codes packed into an array
/// of `u64` words, word 0 holding the least significant bits. The character
/// appended first occupies the most significant bits of the logical
/// `k * bits_per_char`-bit value; the most recently appended character
/// occupies the least significant bits. Bits at or above position
/// `k * bits_per_char` are padding and are always zero.
#[derive(Clone, Debug, Default)]
pub struct Kmer {
    words: Vec<u64>,
    k: usize,
    bits_per_char: u32,
}

impl Kmer {
    /// Creates an empty k-mer of length `k` over an alphabet using
    /// `bits_per_char` bits per character.
    pub fn new(k: usize, bits_per_char: u32) -> Result<Self> {
        let total_bits = k
            .checked_mul(bits_per_char as usize)
            .ok_or_else(|| overflow_error(k, bits_per_char))?;
        let n_words = ((total_bits + 63) / 64).max(1);
        if n_words > MAX_WORDS {
            let max_k = (MAX_WORDS * 64) / bits_per_char as usize;
            return Err(Error::new(ErrorKind::Overflow {
                k,
                bits_per_char,
                max_k,
            }));
        }
        Ok(Kmer {
            words: vec![0u64; n_words],
            k,
            bits_per_char,
        })
    }

    /// Rebuilds a k-mer from its raw word array, e.g. after deserializing a
    /// wire payload. The caller is responsible for `words` having come from
    /// a valid k-mer of this shape; padding bits are re-masked regardless.
    pub fn from_words(words: Vec<u64>, k: usize, bits_per_char: u32) -> Self {
        let mut out = Kmer {
            words,
            k,
            bits_per_char,
        };
        out.mask_top_word();
        out
    }

    /// Number of characters stored in this k-mer.
    #[inline]
    pub fn k(&self) -> usize {
        self.k
    }

    #[inline]
    pub fn bits_per_char(&self) -> u32 {
        self.bits_per_char
    }

    #[inline]
    pub fn n_words(&self) -> usize {
        self.words.len()
    }

    #[inline]
    fn total_bits(&self) -> usize {
        self.k * self.bits_per_char as usize
    }

    /// Raw backing words, word 0 least significant.
    #[inline]
    pub fn words(&self) -> &[u64] {
        &self.words
    }

    /// Masks the top word so that only the low `total_bits` bits of the
    /// whole word array remain set; this is the padding invariant.
    fn mask_top_word(&mut self) {
        let total_bits = self.total_bits();
        let top_idx = self.words.len() - 1;
        let bits_below_top = top_idx * 64;
        let bits_in_top = total_bits - bits_below_top;
        if bits_in_top < 64 {
            self.words[top_idx] &= (1u64 << bits_in_top) - 1;
        }
    }

    /// Appends one character code, evicting the oldest character once the
    /// k-mer is full. `code` must be `< 2^bits_per_char`.
    pub fn append(&mut self, code: u8) {
        let shift = self.bits_per_char;
        let n = self.words.len();
        for i in (0..n).rev() {
            let mut v = self.words[i] << shift;
            if i > 0 {
                v |= self.words[i - 1] >> (64 - shift);
            }
            self.words[i] = v;
        }
        self.words[0] |= code as u64;
        self.mask_top_word();
    }

    /// Extracts the raw code at group position `pos` (0 = the most
    /// recently appended / least significant character, `k - 1` = the
    /// oldest / most significant). A single word lookup, at most spanning
    /// a word boundary: O(1), independent of `nWords`.
    fn group_at(&self, pos: usize) -> u8 {
        let bpc = self.bits_per_char as usize;
        let mask = (1u64 << bpc) - 1;
        let bit_pos = pos * bpc;
        let word_idx = bit_pos / 64;
        let bit_in_word = bit_pos % 64;
        let code = if bit_in_word + bpc <= 64 {
            (self.words[word_idx] >> bit_in_word) & mask
        } else {
            let low_bits = 64 - bit_in_word;
            let low = self.words[word_idx] >> bit_in_word;
            let high = self.words[word_idx + 1] << low_bits;
            (low | high) & mask
        };
        code as u8
    }

    /// OR's `code` into group position `pos` of `words`. `words` must
    /// start zeroed at every bit this writes; the caller is responsible
    /// for that (true of a freshly allocated `vec![0u64; n]`).
    fn or_group_at(words: &mut [u64], bits_per_char: u32, pos: usize, code: u8) {
        let bpc = bits_per_char as usize;
        let bit_pos = pos * bpc;
        let word_idx = bit_pos / 64;
        let bit_in_word = bit_pos % 64;
        let v = code as u64;
        words[word_idx] |= v << bit_in_word;
        if bit_in_word + bpc > 64 {
            let low_bits = 64 - bit_in_word;
            words[word_idx + 1] |= v >> low_bits;
        }
    }

    /// Bit-group reversal at granularity `bits_per_char` over the k-mer's
    /// full logical length, running `transform` over every group along the
    /// way (§4.D). Each of the `k` groups is read out of its source
    /// position and written directly into its mirrored destination
    /// position; no per-group `append` (which itself shifts the whole word
    /// array) is involved, so the whole pass costs one word-array-sized
    /// allocation plus `k` O(1) group moves rather than `k` O(nWords)
    /// shifts.
    fn reverse_groups<F>(&self, transform: F) -> Self
    where
        F: Fn(u8) -> u8,
    {
        let mut words = vec![0u64; self.words.len()];
        for pos in 0..self.k {
            let code = transform(self.group_at(self.k - 1 - pos));
            Self::or_group_at(&mut words, self.bits_per_char, pos, code);
        }
        let mut out = Kmer {
            words,
            k: self.k,
            bits_per_char: self.bits_per_char,
        };
        out.mask_top_word();
        out
    }

    /// Reverses the order of the characters (not their identity).
    pub fn reverse(&self) -> Self {
        self.reverse_groups(|c| c)
    }

    /// Reverses the order of the characters and complements each one using
    /// the supplied function.
    pub fn reverse_complement<F>(&self, complement: F) -> Self
    where
        F: Fn(u8) -> u8,
    {
        self.reverse_groups(complement)
    }
}

impl PartialEq for Kmer {
    fn eq(&self, other: &Self) -> bool {
        self.k == other.k && self.bits_per_char == other.bits_per_char && self.words == other.words
    }
}

impl Eq for Kmer {}

impl PartialOrd for Kmer {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Kmer {
    fn cmp(&self, other: &Self) -> Ordering {
        self.words
            .iter()
            .rev()
            .cmp(other.words.iter().rev())
    }
}

impl Hash for Kmer {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.words.hash(state);
        self.k.hash(state);
        self.bits_per_char.hash(state);
    }
}

impl fmt::Display for Kmer {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for w in self.words.iter().rev() {
            write!(f, "{:016x}", w)?;
        }
        Ok(())
    }
}

fn overflow_error(k: usize, bits_per_char: u32) -> Error {
    Error::new(ErrorKind::Overflow {
        k,
        bits_per_char,
        max_k: (MAX_WORDS * 64) / bits_per_char.max(1) as usize,
    })
}
