//! `ChannelTransport`: an in-process [`Transport`] built on
//! `std::sync::mpsc`, standing in for a real multi-process message-passing
//! library (§4.F implementation note).

use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::{Arc, Barrier, Mutex};

use super::error::{Error, ErrorKind, Result};
use super::transport::Transport;

/// Shared reduction plumbing backing [`ChannelTransport::allreduce_sum`]:
/// every rank posts its value to rank 0 over `collect`, rank 0 sums and
/// republishes the total on each rank's `broadcast` channel.
struct ReduceHub {
    // Every rank's thread posts here concurrently, so the single shared
    // `Sender` needs a mutex around it; `broadcast_tx` only needs one
    // sequential sender (rank 0), so it's left bare.
    collect_tx: Mutex<Sender<u64>>,
    collect_rx: Mutex<Receiver<u64>>,
    broadcast_tx: Vec<Sender<u64>>,
    broadcast_rx: Vec<Mutex<Receiver<u64>>>,
}

impl ReduceHub {
    fn new(world_size: u64) -> Self {
        let (collect_tx, collect_rx) = mpsc::channel();
        let mut broadcast_tx = Vec::with_capacity(world_size as usize);
        let mut broadcast_rx = Vec::with_capacity(world_size as usize);
        for _ in 0..world_size {
            let (tx, rx) = mpsc::channel();
            broadcast_tx.push(tx);
            broadcast_rx.push(Mutex::new(rx));
        }
        ReduceHub {
            collect_tx: Mutex::new(collect_tx),
            collect_rx: Mutex::new(collect_rx),
            broadcast_tx,
            broadcast_rx,
        }
    }
}

/// One rank's handle onto an in-process transport world. Point-to-point
/// messages travel over a plain mpsc channel per destination; every rank
/// holds its own clone of the sending half. A rank's `Transport::send` can
/// be called concurrently by more than one of that rank's own worker
/// threads (§5: insertion into the comm layer never waits for the
/// network, but several threads may race to post to the same
/// destination), so each `Sender` is kept behind its own mutex rather than
/// relied on to tolerate concurrent `&self` use on its own.
pub struct ChannelTransport {
    rank: u64,
    world_size: u64,
    senders: Vec<Mutex<Sender<Vec<u8>>>>,
    inbox: Mutex<Receiver<Vec<u8>>>,
    barrier: Arc<Barrier>,
    reduce: Arc<ReduceHub>,
}

impl ChannelTransport {
    /// Builds one handle per rank of a `world_size`-rank in-process world.
    /// Hand out one handle per worker thread/rank; the handles are `Send`
    /// and meant to be moved into the threads that use them.
    pub fn world(world_size: u64) -> Vec<ChannelTransport> {
        let world_size = world_size.max(1);
        let mut senders = Vec::with_capacity(world_size as usize);
        let mut inboxes = Vec::with_capacity(world_size as usize);
        for _ in 0..world_size {
            let (tx, rx) = mpsc::channel();
            senders.push(tx);
            inboxes.push(rx);
        }
        let barrier = Arc::new(Barrier::new(world_size as usize));
        let reduce = Arc::new(ReduceHub::new(world_size));

        inboxes
            .into_iter()
            .enumerate()
            .map(|(rank, rx)| ChannelTransport {
                rank: rank as u64,
                world_size,
                senders: senders.iter().map(|tx| Mutex::new(tx.clone())).collect(),
                inbox: Mutex::new(rx),
                barrier: barrier.clone(),
                reduce: reduce.clone(),
            })
            .collect()
    }
}

fn closed() -> Error {
    Error::new(ErrorKind::TransportClosed)
}

impl Transport for ChannelTransport {
    fn rank(&self) -> u64 {
        self.rank
    }

    fn world_size(&self) -> u64 {
        self.world_size
    }

    fn send(&self, dst: u64, bytes: Vec<u8>) -> Result<()> {
        if dst >= self.world_size {
            return Err(Error::new(ErrorKind::UnknownRank {
                rank: dst,
                world_size: self.world_size,
            }));
        }
        let sender = self.senders[dst as usize].lock().unwrap();
        sender.send(bytes).map_err(|_| closed())
    }

    fn try_recv(&self) -> Result<Option<Vec<u8>>> {
        let inbox = self.inbox.lock().unwrap();
        match inbox.try_recv() {
            Ok(bytes) => Ok(Some(bytes)),
            Err(mpsc::TryRecvError::Empty) => Ok(None),
            Err(mpsc::TryRecvError::Disconnected) => Err(closed()),
        }
    }

    fn barrier(&self) -> Result<()> {
        self.barrier.wait();
        Ok(())
    }

    fn allreduce_sum(&self, value: u64) -> Result<u64> {
        self.reduce
            .collect_tx
            .lock()
            .unwrap()
            .send(value)
            .map_err(|_| closed())?;
        if self.rank == 0 {
            let mut total = 0u64;
            let rx = self.reduce.collect_rx.lock().unwrap();
            for _ in 0..self.world_size {
                total += rx.recv().map_err(|_| closed())?;
            }
            for tx in &self.reduce.broadcast_tx {
                tx.send(total).map_err(|_| closed())?;
            }
        }
        let rx = self.reduce.broadcast_rx[self.rank as usize].lock().unwrap();
        rx.recv().map_err(|_| closed())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn point_to_point_delivers_in_order() {
        let mut world = ChannelTransport::world(2);
        let b = world.pop().unwrap();
        let a = world.pop().unwrap();

        a.send(1, vec![1]).unwrap();
        a.send(1, vec![2]).unwrap();

        assert_eq!(b.try_recv().unwrap(), Some(vec![1]));
        assert_eq!(b.try_recv().unwrap(), Some(vec![2]));
        assert_eq!(b.try_recv().unwrap(), None);
    }

    #[test]
    fn send_to_unknown_rank_is_rejected() {
        let world = ChannelTransport::world(2);
        let err = world[0].send(5, vec![1]).unwrap_err();
        assert!(matches!(err.kind(), ErrorKind::UnknownRank { .. }));
    }

    #[test]
    fn allreduce_sum_matches_on_every_rank() {
        let world = ChannelTransport::world(4);
        let handles: Vec<_> = world
            .into_iter()
            .enumerate()
            .map(|(i, t)| thread::spawn(move || t.allreduce_sum(i as u64 + 1).unwrap()))
            .collect();
        let totals: Vec<u64> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        assert_eq!(totals, vec![10, 10, 10, 10]);
    }

    #[test]
    fn barrier_releases_all_waiters() {
        let world = ChannelTransport::world(3);
        let handles: Vec<_> = world
            .into_iter()
            .map(|t| thread::spawn(move || t.barrier().unwrap()))
            .collect();
        for h in handles {
            h.join().unwrap();
        }
    }
}
