//! Per-channel packet sequence counters.

use std::collections::HashMap;

use crate::error::HostError;

type ChannelKey = (String, String);

/// The send/receive/acknowledge counters enforcing packet ordering per
/// `(port, channel)` pair.
///
/// Each counter starts at 1 and advances by exactly 1 per accepted
/// operation; the core guarantees atomic read-then-increment, while the
/// packet layer decides what to do with the number.
#[derive(Default, Debug, Clone)]
pub struct SequenceCounters {
    send: HashMap<ChannelKey, u64>,
    recv: HashMap<ChannelKey, u64>,
    ack: HashMap<ChannelKey, u64>,
}

impl SequenceCounters {
    /// Creates a fresh set of counters.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the next send sequence for the pair and advances the counter.
    pub fn next_sequence_send(&mut self, port_id: &str, channel_id: &str) -> u64 {
        Self::bump(&mut self.send, port_id, channel_id)
    }

    /// Returns the next receive sequence for the pair and advances the
    /// counter.
    pub fn next_sequence_recv(&mut self, port_id: &str, channel_id: &str) -> u64 {
        Self::bump(&mut self.recv, port_id, channel_id)
    }

    /// Returns the next acknowledgement sequence for the pair and advances
    /// the counter.
    pub fn next_sequence_ack(&mut self, port_id: &str, channel_id: &str) -> u64 {
        Self::bump(&mut self.ack, port_id, channel_id)
    }

    /// The send sequence the next call would return, without advancing.
    #[must_use]
    pub fn peek_send(&self, port_id: &str, channel_id: &str) -> u64 {
        Self::peek(&self.send, port_id, channel_id)
    }

    /// The receive sequence the next call would return, without advancing.
    #[must_use]
    pub fn peek_recv(&self, port_id: &str, channel_id: &str) -> u64 {
        Self::peek(&self.recv, port_id, channel_id)
    }

    /// The acknowledgement sequence the next call would return, without
    /// advancing.
    #[must_use]
    pub fn peek_ack(&self, port_id: &str, channel_id: &str) -> u64 {
        Self::peek(&self.ack, port_id, channel_id)
    }

    /// The receive-side ordering check: on an ordered channel an incoming
    /// packet must carry exactly the next expected sequence. Does not
    /// advance the counter.
    ///
    /// # Errors
    /// Returns `SequenceMismatch` if `sequence` is not the next expected
    /// receive sequence for the pair.
    pub fn expect_recv(
        &self,
        port_id: &str,
        channel_id: &str,
        sequence: u64,
    ) -> Result<(), HostError> {
        let expected = self.peek_recv(port_id, channel_id);
        if sequence != expected {
            return Err(HostError::SequenceMismatch {
                expected,
                found: sequence,
            });
        }
        Ok(())
    }

    fn bump(map: &mut HashMap<ChannelKey, u64>, port_id: &str, channel_id: &str) -> u64 {
        let counter = map
            .entry((port_id.to_string(), channel_id.to_string()))
            .or_insert(1);
        let current = *counter;
        *counter += 1;
        current
    }

    fn peek(map: &HashMap<ChannelKey, u64>, port_id: &str, channel_id: &str) -> u64 {
        map.get(&(port_id.to_string(), channel_id.to_string()))
            .copied()
            .unwrap_or(1)
    }
}
