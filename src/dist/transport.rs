//! The `Transport` trait: an explicit, constructor-injected context handle
//! standing in for a process-per-rank message-passing library (§4.F, §9
//! redesign flag — no global MPI-style handle).

use super::error::Result;

/// Point-to-point and collective operations a rank needs to reach its
/// peers. Point-to-point delivery is ordered per `(src, dst)` pair;
/// collectives (`barrier`, `allreduce_sum`) involve every rank in the
/// transport's world.
pub trait Transport: Send + Sync {
    /// This transport handle's own rank.
    fn rank(&self) -> u64;

    /// Total number of ranks in the transport's world.
    fn world_size(&self) -> u64;

    /// Sends one message to `dst`. Delivery is ordered relative to other
    /// `send`s from this rank to the same `dst`, but not relative to sends
    /// to other destinations.
    fn send(&self, dst: u64, bytes: Vec<u8>) -> Result<()>;

    /// Non-blocking receive of the next message addressed to this rank
    /// from any source, if one is queued.
    fn try_recv(&self) -> Result<Option<Vec<u8>>>;

    /// Blocks until every rank has called `barrier`.
    fn barrier(&self) -> Result<()>;

    /// Sums `value` across all ranks and returns the total on every rank.
    fn allreduce_sum(&self, value: u64) -> Result<u64>;
}
