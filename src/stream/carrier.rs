//! Reconciles the open-ended capture stream with the fixed payload capacity
//! of one carrier frame.
//!
//! The buffer accepts sample blocks of arbitrary size, converts them to the
//! carrier byte representation and tracks a write cursor. A block that does
//! not fit is split at the capacity boundary; the remainder is carried over
//! and seeds the next cycle, so nothing captured is ever lost across frame
//! boundaries.

use log::debug;

use crate::error::SoundveilError;
use crate::result::Result;
use crate::samples::{int16_to_int8, int8_to_uint8};

/// fill state of a [`CarrierBuffer`]
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum FillState {
    /// the cursor has not reached capacity yet, appends are accepted
    Filling,
    /// one frame worth of payload is ready and awaits [`CarrierBuffer::finalize_and_reset`]
    Full,
}

/// Accumulates converted audio bytes until one frame worth of payload is
/// ready.
///
/// Capacity is fixed at construction, typically to the carrier frame's
/// whole-byte bit plane capacity. Not designed for concurrent callers; the
/// frame loop is the single draining point.
#[derive(Debug)]
pub struct CarrierBuffer {
    buf: Vec<u8>,
    cursor: usize,
    carry: Vec<u8>,
}

impl CarrierBuffer {
    pub fn new(capacity: usize) -> Self {
        Self {
            buf: vec![0; capacity],
            cursor: 0,
            carry: Vec::new(),
        }
    }

    pub fn capacity(&self) -> usize {
        self.buf.len()
    }

    /// next write offset in bytes, reset on every finalized frame
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn state(&self) -> FillState {
        if self.cursor == self.capacity() {
            FillState::Full
        } else {
            FillState::Filling
        }
    }

    pub fn is_full(&self) -> bool {
        self.state() == FillState::Full
    }

    /// bytes that did not fit into the current cycle, non empty only while full
    pub fn carry_len(&self) -> usize {
        self.carry.len()
    }

    /// Converts one batch of 16 bit samples to the carrier byte
    /// representation and appends it at the cursor.
    ///
    /// A batch that overflows the capacity is split at the boundary and the
    /// remainder is carried into the next cycle. While the buffer is full,
    /// appends are rejected with [`SoundveilError::CarrierFull`] until the
    /// finished payload has been taken.
    pub fn append(&mut self, block: &[i16]) -> Result<()> {
        if self.is_full() {
            return Err(SoundveilError::CarrierFull);
        }

        let bytes = int8_to_uint8(&int16_to_int8(block));
        self.push_bytes(&bytes);
        Ok(())
    }

    /// Hands out the finished frame payload and starts the next cycle.
    ///
    /// Only valid while full, otherwise [`SoundveilError::NotReady`]. The new
    /// cycle is seeded with the carry-over; a carry that itself exceeds the
    /// capacity fills the buffer again and keeps the excess carried.
    pub fn finalize_and_reset(&mut self) -> Result<Vec<u8>> {
        if !self.is_full() {
            return Err(SoundveilError::NotReady);
        }

        let capacity = self.capacity();
        let payload = std::mem::replace(&mut self.buf, vec![0; capacity]);
        self.cursor = 0;

        let carry = std::mem::take(&mut self.carry);
        if !carry.is_empty() {
            debug!("seeding next cycle with {} carried bytes", carry.len());
            self.push_bytes(&carry);
        }

        Ok(payload)
    }

    fn push_bytes(&mut self, bytes: &[u8]) {
        let room = self.capacity() - self.cursor;
        if bytes.len() < room {
            self.buf[self.cursor..self.cursor + bytes.len()].copy_from_slice(bytes);
            self.cursor += bytes.len();
        } else {
            let (fits, rest) = bytes.split_at(room);
            self.buf[self.cursor..].copy_from_slice(fits);
            self.cursor = self.capacity();
            if !rest.is_empty() {
                debug!(
                    "carrier full, carrying {} of {} bytes into the next cycle",
                    rest.len(),
                    bytes.len()
                );
                self.carry.extend_from_slice(rest);
            }
        }
    }
}
