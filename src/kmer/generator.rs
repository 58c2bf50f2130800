//! Rolling k-mer + metadata generation over a single sequence record (§4.E).

use std::collections::VecDeque;

use super::alphabet::Alphabet;
use super::stats::Stats;
use super::value::Kmer;

/// One emitted k-mer together with the metadata needed to place it back
/// into its originating read.
#[derive(Debug, Clone)]
pub struct Emission<'a> {
    pub kmer: Kmer,
    pub read_id: &'a [u8],
    /// 0-based offset of the k-mer's first character within the sequence
    /// slice that was passed to the generator.
    pub offset: usize,
    /// Combined log-probability quality score over the k-mer's window, if
    /// a quality string was supplied.
    pub quality: Option<f64>,
}

/// Converts one Sanger-encoded FASTQ quality byte (Phred+33) to a
/// log10 error-probability.
#[inline]
fn sanger_log_prob(byte: u8) -> f64 {
    let phred = (byte as i32 - 33).max(0) as f64;
    -phred / 10.0
}

/// Pulls k-mers out of one sequence record, one character at a time.
///
/// Invalid characters (anything the alphabet does not recognize) break the
/// rolling window: no k-mer spanning the invalid character is emitted, and
/// accumulation restarts at the next character.
pub struct KmerGenerator<'a, A: Alphabet> {
    alphabet: A,
    k: usize,
    seq: &'a [u8],
    qual: Option<&'a [u8]>,
    read_id: &'a [u8],
    pos: usize,
    kmer: Kmer,
    valid_run: usize,
    qual_window: VecDeque<f64>,
    qual_sum: f64,
    stats: Option<&'a Stats>,
}

impl<'a, A: Alphabet> KmerGenerator<'a, A> {
    pub fn new(
        alphabet: A,
        k: usize,
        seq: &'a [u8],
        qual: Option<&'a [u8]>,
        read_id: &'a [u8],
    ) -> super::error::Result<Self> {
        let bpc = alphabet.bits_per_char();
        let kmer = Kmer::new(k, bpc)?;
        Ok(KmerGenerator {
            alphabet,
            k,
            seq,
            qual,
            read_id,
            pos: 0,
            kmer,
            valid_run: 0,
            qual_window: VecDeque::with_capacity(k),
            qual_sum: 0.0,
            stats: None,
        })
    }

    /// Attaches a shared [`Stats`] counter that every invalid-character
    /// recovery on this generator increments.
    pub fn with_stats(mut self, stats: &'a Stats) -> Self {
        self.stats = Some(stats);
        self
    }

    fn reset_window(&mut self) {
        self.valid_run = 0;
        self.qual_window.clear();
        self.qual_sum = 0.0;
        if let Some(stats) = self.stats {
            stats.record_invalid_char();
        }
    }
}

impl<'a, A: Alphabet> Iterator for KmerGenerator<'a, A> {
    type Item = Emission<'a>;

    fn next(&mut self) -> Option<Emission<'a>> {
        while self.pos < self.seq.len() {
            let byte = self.seq[self.pos];
            let code = self.alphabet.encode(byte);
            let code = match code {
                Some(c) => c,
                None => {
                    self.reset_window();
                    self.pos += 1;
                    continue;
                }
            };
            self.kmer.append(code);
            self.valid_run += 1;

            if let Some(qual) = self.qual {
                let lp = sanger_log_prob(qual[self.pos]);
                self.qual_window.push_back(lp);
                self.qual_sum += lp;
                if self.qual_window.len() > self.k {
                    if let Some(leaving) = self.qual_window.pop_front() {
                        self.qual_sum -= leaving;
                    }
                }
            }

            let char_offset = self.pos;
            self.pos += 1;

            if self.valid_run >= self.k {
                let quality = self.qual.map(|_| self.qual_sum);
                return Some(Emission {
                    kmer: self.kmer.clone(),
                    read_id: self.read_id,
                    offset: char_offset + 1 - self.k,
                    quality,
                });
            }
        }
        None
    }
}
