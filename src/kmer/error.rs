use std::fmt;
use std::io;

#[derive(Debug)]
pub enum ErrorKind {
    /// `std::io::Error`, never produced by this module directly, kept for
    /// symmetry with the other error types in this crate.
    Io(io::Error),
    /// The requested `k` does not fit into the chosen word width at the
    /// given `bits_per_char`.
    Overflow {
        k: usize,
        bits_per_char: u32,
        max_k: usize,
    },
}

impl ErrorKind {
    pub fn position(&self) -> Option<&crate::ErrorPosition> {
        None
    }
}

impl_error!(ErrorKind);

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.kind() {
            ErrorKind::Io(ref e) => e.fmt(f),
            ErrorKind::Overflow {
                k,
                bits_per_char,
                max_k,
            } => write!(
                f,
                "k-mer overflow: k={} at {} bits/char exceeds the maximum of {} for this word size",
                k, bits_per_char, max_k
            ),
        }
    }
}
