use std::fmt;
use std::io;

#[derive(Debug)]
pub enum ErrorKind {
    /// `std::io::Error`, kept for symmetry with the other error types in
    /// this crate; the in-process reference transport never produces one.
    Io(io::Error),
    /// A rank id used in a send/recv call is out of range for the current
    /// world size.
    UnknownRank { rank: u64, world_size: u64 },
    /// The transport's channel on the other end has been dropped.
    TransportClosed,
    /// A wire payload could not be encoded or decoded.
    Codec(bincode::Error),
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
            ErrorKind::UnknownRank { rank, world_size } => {
                write!(f, "rank {} is out of range for world size {}", rank, world_size)
            }
            ErrorKind::TransportClosed => write!(f, "transport channel closed unexpectedly"),
            ErrorKind::Codec(ref e) => write!(f, "failed to (de)serialize wire payload: {}", e),
        }
    }
}
