//! This module defines [`MockConsensusState`].

use serde::{Deserialize, Serialize};
use serde_with::base64::Base64;
use serde_with::serde_as;

/// The canonical type URL of [`MockConsensusState`] payloads.
pub const MOCK_CONSENSUS_STATE_TYPE_URL: &str = "/mock.ConsensusState";

/// A snapshot of counterparty state at one height.
///
/// Immutable once recorded; an update that would replace it with different
/// contents is rejected as a duplicate height.
#[serde_as]
#[derive(Serialize, Deserialize, PartialEq, Eq, Clone, Debug, Default)]
pub struct MockConsensusState {
    /// The consensus timestamp, seconds since the unix epoch. Zero means
    /// unset and is rejected.
    pub timestamp: u64,
    /// The commitment root the counterparty exported at this height.
    #[serde_as(as = "Base64")]
    pub root: Vec<u8>,
    /// Commitment of the validator set expected at the next height, when
    /// the counterparty's consensus publishes one.
    #[serde_as(as = "Option<Base64>")]
    #[serde(default)]
    pub next_validators_hash: Option<Vec<u8>>,
}
