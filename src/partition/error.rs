use std::fmt;
use std::io;

#[derive(Debug)]
pub enum ErrorKind {
    /// `std::io::Error`: file open, mmap, or read failure.
    Io(io::Error),
    /// No record boundary could be located within a non-empty byte range.
    NoRecordBoundary { start: u64, end: u64 },
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
            ErrorKind::NoRecordBoundary { start, end } => write!(
                f,
                "no record boundary found in byte range [{}, {})",
                start, end
            ),
        }
    }
}
