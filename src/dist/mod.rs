//! Cross-rank communication and the distributed k-mer multimap (§4.F,
//! §4.G): a `Transport` context handle passed through construction rather
//! than relied on as process-global state, a buffering layer on top of it,
//! and the hash-partitioned multimap itself.

pub mod channel;
mod comm;
mod error;
mod message;
mod multimap;
mod stats;
mod transport;

pub use self::channel::ChannelTransport;
pub use self::comm::CommLayer;
pub use self::error::{Error, ErrorKind, Result};
pub use self::message::{Batch, Entry};
pub use self::multimap::DistMultimap;
pub use self::stats::Stats;
pub use self::transport::Transport;
