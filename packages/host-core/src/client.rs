//! Defines the [`LightClient`] trait that must be implemented by all client
//! type verifiers.

use core::fmt;

use ibc_host_types::commitment::{CommitmentDigest, CommitmentPrefix};
use ibc_host_types::height::Height;
use ibc_host_types::identifiers::ClientId;
use ibc_proto::google::protobuf::Any;

use crate::error::HostError;

/// A `(height, commitment)` pair the host records after a successful create
/// or update.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ConsensusUpdate {
    /// The height the new consensus state was recorded at.
    pub height: Height,
    /// The commitment of the new consensus state.
    pub commitment: CommitmentDigest,
}

/// The result of creating a client.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CreatedClient {
    /// The commitment of the stored client state.
    pub client_state_commitment: CommitmentDigest,
    /// The initial consensus state recorded alongside it.
    pub consensus_update: ConsensusUpdate,
}

/// The result of submitting a client message.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ClientUpdate {
    /// The message verified and the client advanced.
    ///
    /// `consensus_updates` is empty when the message was a redundant
    /// resubmission of an already-recorded state.
    Updated {
        /// The commitment of the refreshed client state.
        client_state_commitment: CommitmentDigest,
        /// The consensus states recorded by this update.
        consensus_updates: Vec<ConsensusUpdate>,
    },
    /// The message proved misbehaviour; the client is now frozen and no new
    /// consensus state was recorded.
    Misbehaviour {
        /// The commitment of the frozen client state.
        client_state_commitment: CommitmentDigest,
    },
}

/// Whether a client accepts further updates.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClientStatus {
    /// The client accepts updates and serves proof verification.
    Active,
    /// Misbehaviour was detected; updates and verification are refused.
    Frozen,
}

impl fmt::Display for ClientStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Active => f.write_str("Active"),
            Self::Frozen => f.write_str("Frozen"),
        }
    }
}

/// The verifier contract for one client type.
///
/// One implementation instance serves every client of its type and
/// exclusively owns the client/consensus state rows of those clients; no
/// other component mutates them. All consensus-specific trust logic lives
/// behind this trait; the host only routes and records the returned
/// commitments.
pub trait LightClient {
    /// The client type name this implementation answers for.
    fn client_type(&self) -> &str;

    /// Initializes state for a new client from type-tagged initial payloads.
    ///
    /// # Errors
    /// Returns `InvalidInitialState` if either payload is malformed for this
    /// client type: wrong type tag, undecodable body, unset height, or zero
    /// timestamp.
    fn create_client(
        &mut self,
        client_id: &ClientId,
        client_state: &Any,
        consensus_state: &Any,
    ) -> Result<CreatedClient, HostError>;

    /// Verifies a client message and applies it.
    ///
    /// A valid header is recorded as a new consensus state; valid
    /// misbehaviour evidence freezes the client instead.
    ///
    /// # Errors
    /// Returns `InvalidClientMessage` for an unexpected tag or undecodable
    /// body, `ClientFrozen` once frozen, and `DuplicateHeight` if a
    /// *different* consensus state is already recorded at the message
    /// height. All checks precede any state mutation.
    fn update_client(
        &mut self,
        client_id: &ClientId,
        client_message: &Any,
    ) -> Result<ClientUpdate, HostError>;

    /// The stored client state, or `None` for an unknown identifier.
    fn client_state(&self, client_id: &ClientId) -> Option<Vec<u8>>;

    /// The stored consensus state at `height`, or `None` when missing.
    fn consensus_state(&self, client_id: &ClientId, height: Height) -> Option<Vec<u8>>;

    /// The latest recorded height, or `None` for an unknown identifier.
    fn latest_height(&self, client_id: &ClientId) -> Option<Height>;

    /// The timestamp of the consensus state at `height`, or `None` when
    /// missing.
    fn timestamp_at_height(&self, client_id: &ClientId, height: Height) -> Option<u64>;

    /// The client's status, or `None` for an unknown identifier.
    fn status(&self, client_id: &ClientId) -> Option<ClientStatus>;

    /// Verifies that `proof` demonstrates `path` maps to `value` in the
    /// counterparty's state at `height`.
    ///
    /// A well-formed proof that simply does not verify is `Ok(false)`.
    ///
    /// # Errors
    /// Returns `ClientFrozen` if the client is frozen and `UnknownHeight` if
    /// no consensus state exists at `height`.
    fn verify_membership(
        &self,
        client_id: &ClientId,
        height: Height,
        proof: &[u8],
        prefix: &CommitmentPrefix,
        path: &str,
        value: &[u8],
    ) -> Result<bool, HostError>;

    /// Verifies that `proof` demonstrates `path` is absent from the
    /// counterparty's state at `height`.
    ///
    /// # Errors
    /// Same as [`LightClient::verify_membership`].
    fn verify_non_membership(
        &self,
        client_id: &ClientId,
        height: Height,
        proof: &[u8],
        prefix: &CommitmentPrefix,
        path: &str,
    ) -> Result<bool, HostError>;
}

impl fmt::Debug for dyn LightClient + '_ {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LightClient")
            .field("client_type", &self.client_type())
            .finish()
    }
}
