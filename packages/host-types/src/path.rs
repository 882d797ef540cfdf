//! Canonical store paths.
//!
//! Every commitment the host exports lives under one of these paths; the
//! counterparty reconstructs the same strings when verifying proofs against
//! our commitment root, so the formats here are wire-stable.

use crate::height::Height;
use crate::identifiers::ClientId;

/// The store path of a client's state commitment.
#[must_use]
pub fn client_state(client_id: &ClientId) -> String {
    format!("clients/{client_id}/clientState")
}

/// The store path of a client's consensus state commitment at `height`.
#[must_use]
pub fn consensus_state(client_id: &ClientId, height: &Height) -> String {
    format!("clients/{client_id}/consensusStates/{height}")
}

/// The store path of a connection end.
#[must_use]
pub fn connection(connection_id: &str) -> String {
    format!("connections/{connection_id}")
}

/// The store path of a channel end.
#[must_use]
pub fn channel(port_id: &str, channel_id: &str) -> String {
    format!("channelEnds/ports/{port_id}/channels/{channel_id}")
}

/// The store path of an outgoing packet commitment.
#[must_use]
pub fn packet_commitment(port_id: &str, channel_id: &str, sequence: u64) -> String {
    format!("commitments/ports/{port_id}/channels/{channel_id}/sequences/{sequence}")
}

/// The store path of a packet acknowledgement.
#[must_use]
pub fn packet_acknowledgement(port_id: &str, channel_id: &str, sequence: u64) -> String {
    format!("acks/ports/{port_id}/channels/{channel_id}/sequences/{sequence}")
}

/// The store path of a packet receipt.
#[must_use]
pub fn packet_receipt(port_id: &str, channel_id: &str, sequence: u64) -> String {
    format!("receipts/ports/{port_id}/channels/{channel_id}/sequences/{sequence}")
}

/// The store path of the next send sequence for a channel.
#[must_use]
pub fn next_sequence_send(port_id: &str, channel_id: &str) -> String {
    format!("nextSequenceSend/ports/{port_id}/channels/{channel_id}")
}

/// The store path of the next receive sequence for a channel.
#[must_use]
pub fn next_sequence_recv(port_id: &str, channel_id: &str) -> String {
    format!("nextSequenceRecv/ports/{port_id}/channels/{channel_id}")
}

/// The store path of the next acknowledgement sequence for a channel.
#[must_use]
pub fn next_sequence_ack(port_id: &str, channel_id: &str) -> String {
    format!("nextSequenceAck/ports/{port_id}/channels/{channel_id}")
}
