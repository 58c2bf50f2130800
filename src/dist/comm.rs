//! Buffering communication layer: coalesces many small per-destination
//! inserts into few large [`Transport`] messages (§4.F).

use std::sync::Mutex;

use super::error::Result;
use super::transport::Transport;

/// Per-destination byte buffer of capacity `capacity`, flushed to the
/// underlying transport once full or on an explicit [`CommLayer::flush`].
///
/// The reference [`ChannelTransport`](super::channel::ChannelTransport)'s
/// `send`/`try_recv` are plain non-blocking channel operations, so unlike a
/// real process-per-rank transport this layer needs no dedicated
/// background sender/receiver thread to avoid blocking callers; a future
/// `Transport` backed by blocking I/O can add one without changing this
/// type's public surface.
pub struct CommLayer<T: Transport> {
    transport: T,
    capacity: usize,
    buffers: Vec<Mutex<Vec<u8>>>,
}

impl<T: Transport> CommLayer<T> {
    pub fn new(transport: T, capacity: usize) -> Self {
        let world_size = transport.world_size() as usize;
        let buffers = (0..world_size).map(|_| Mutex::new(Vec::new())).collect();
        CommLayer {
            transport,
            capacity: capacity.max(1),
            buffers,
        }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Appends `bytes` to `dst`'s buffer, flushing it first if appending
    /// would exceed `capacity`.
    pub fn send(&self, dst: u64, bytes: &[u8]) -> Result<()> {
        let mut buf = self.buffers[dst as usize].lock().unwrap();
        if !buf.is_empty() && buf.len() + bytes.len() > self.capacity {
            let filled = std::mem::take(&mut *buf);
            self.transport.send(dst, filled)?;
        }
        buf.extend_from_slice(bytes);
        Ok(())
    }

    /// Posts every non-empty buffer, then barriers so every rank observes
    /// that all sends issued before this call have been posted.
    pub fn flush(&self) -> Result<()> {
        for (dst, buf) in self.buffers.iter().enumerate() {
            let mut buf = buf.lock().unwrap();
            if !buf.is_empty() {
                let filled = std::mem::take(&mut *buf);
                self.transport.send(dst as u64, filled)?;
            }
        }
        self.transport.barrier()
    }

    /// Drains one inbound message, if any is queued.
    pub fn try_recv(&self) -> Result<Option<Vec<u8>>> {
        self.transport.try_recv()
    }
}
