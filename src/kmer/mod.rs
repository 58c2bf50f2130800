//! Bit-packed k-mer values (§4.D) and the per-record rolling generator
//! (§4.E) that produces them from sequence data.
//!
//! ```
//! use seq_io::kmer::{alphabet::Dna, Kmer, KmerGenerator};
//! use seq_io::kmer::alphabet::Alphabet;
//!
//! let mut k = Kmer::new(4, Dna.bits_per_char()).unwrap();
//! for b in b"ACGT" {
//!     k.append(Dna.encode(*b).unwrap());
//! }
//! let gen = KmerGenerator::new(Dna, 4, b"ACGTAC", None, b"read1").unwrap();
//! let emitted: Vec<_> = gen.collect();
//! assert_eq!(emitted.len(), 3);
//! ```

pub mod alphabet;
mod error;
mod generator;
mod stats;
mod value;

pub use self::alphabet::{Alphabet, Dna, Dna5, Protein};
pub use self::error::{Error, ErrorKind, Result};
pub use self::generator::{Emission, KmerGenerator};
pub use self::stats::Stats;
pub use self::value::Kmer;
