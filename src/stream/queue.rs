//! Hand-off point between the audio capture callback and the frame loop.
//!
//! The capture collaborator invokes its callback on an execution context this
//! crate does not own; the callback pushes a copy of each delivered block and
//! returns immediately. Once per frame tick the frame loop drains everything
//! queued so far in one atomic step. Single producer, single consumer.

use std::mem;
use std::sync::Mutex;

/// one audio block as delivered by the capture callback
pub type SampleBlock = Vec<i16>;

/// single-producer/single-consumer queue of captured audio blocks with a
/// take-all-and-clear drain
#[derive(Debug, Default)]
pub struct BlockQueue {
    blocks: Mutex<Vec<SampleBlock>>,
}

impl BlockQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enqueues one captured block, called from the capture context.
    ///
    /// The lock is held only for the push itself, never while the consumer
    /// converts or copies payload, so the capture callback cannot be starved.
    pub fn push(&self, block: SampleBlock) {
        self.blocks
            .lock()
            .expect("block queue mutex poisoned")
            .push(block);
    }

    /// Takes every queued block in arrival order, leaving the queue empty.
    pub fn drain_all(&self) -> Vec<SampleBlock> {
        mem::take(&mut *self.blocks.lock().expect("block queue mutex poisoned"))
    }

    /// Drains the queue and concatenates the blocks in arrival order.
    ///
    /// The concatenation happens after the drain, outside the lock; the
    /// producer no longer touches a batch once it is handed off.
    pub fn drain_concat(&self) -> Vec<i16> {
        let blocks = self.drain_all();
        let total = blocks.iter().map(Vec::len).sum();
        let mut joined = Vec::with_capacity(total);
        for block in blocks {
            joined.extend_from_slice(&block);
        }
        joined
    }

    pub fn len(&self) -> usize {
        self.blocks.lock().expect("block queue mutex poisoned").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
