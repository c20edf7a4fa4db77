//! In-memory passthrough used by unit tests

use std::cell::{Cell, RefCell};

use crate::error::Result;

use super::core::{PacketRequest, Passthrough};
use super::packet::CommandPacket;
use super::sense::SenseData;
use super::types::DataDirection;

/// Always answers with the same status, sense and response bytes, and
/// remembers what it was asked to do.
pub struct MockDrive {
    status: i32,
    response: Vec<u8>,
    sense: SenseData,
    record_buffer: bool,
    calls: Cell<usize>,
    last_timeout_ms: Cell<Option<i32>>,
    last_direction: Cell<Option<DataDirection>>,
    last_packet: Cell<Option<CommandPacket>>,
    seen_buffer: RefCell<Option<Vec<u8>>>,
}

impl MockDrive {
    pub fn new(status: i32, response: Vec<u8>) -> Self {
        Self {
            status,
            response,
            sense: SenseData::default(),
            record_buffer: false,
            calls: Cell::new(0),
            last_timeout_ms: Cell::new(None),
            last_direction: Cell::new(None),
            last_packet: Cell::new(None),
            seen_buffer: RefCell::new(None),
        }
    }

    pub fn with_sense(mut self, sense: SenseData) -> Self {
        self.sense = sense;
        self
    }

    /// Snapshot the buffer as it arrives, before the canned response is copied in
    pub fn recording_buffer(mut self) -> Self {
        self.record_buffer = true;
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.get()
    }

    pub fn last_timeout_ms(&self) -> Option<i32> {
        self.last_timeout_ms.get()
    }

    pub fn last_direction(&self) -> Option<DataDirection> {
        self.last_direction.get()
    }

    pub fn last_packet(&self) -> Option<CommandPacket> {
        self.last_packet.get()
    }

    pub fn seen_buffer(&self) -> Option<Vec<u8>> {
        self.seen_buffer.borrow().clone()
    }
}

impl Passthrough for MockDrive {
    fn send_packet(&self, request: &mut PacketRequest<'_>) -> Result<i32> {
        self.calls.set(self.calls.get() + 1);
        self.last_timeout_ms.set(Some(request.timeout_ms));
        self.last_direction.set(Some(request.direction));
        self.last_packet.set(Some(request.packet));
        if self.record_buffer {
            *self.seen_buffer.borrow_mut() = Some(request.buffer.to_vec());
        }

        // Written even on failure: a real drive may leave garbage behind
        let n = self.response.len().min(request.buffer.len());
        request.buffer[..n].copy_from_slice(&self.response[..n]);
        request.sense = self.sense;
        Ok(self.status)
    }
}
