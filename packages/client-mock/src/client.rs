//! The [`MockClient`] verifier.

use std::collections::{BTreeMap, HashMap};

use ibc_host_core::client::{
    ClientStatus, ClientUpdate, ConsensusUpdate, CreatedClient, LightClient,
};
use ibc_host_core::error::HostError;
use ibc_host_types::commitment::{CommitmentDigest, CommitmentPrefix};
use ibc_host_types::ensure;
use ibc_host_types::envelope;
use ibc_host_types::height::Height;
use ibc_host_types::identifiers::ClientId;
use ibc_proto::google::protobuf::Any;
use prost::Message;

use crate::client_state::{MockClientState, MOCK_CLIENT_STATE_TYPE_URL};
use crate::consensus_state::{MockConsensusState, MOCK_CONSENSUS_STATE_TYPE_URL};
use crate::header::{MockHeader, MockMisbehaviour, MOCK_HEADER_TYPE_URL, MOCK_MISBEHAVIOUR_TYPE_URL};
use crate::proof::MockProof;

/// The client type the mock registers under.
pub const MOCK_CLIENT_TYPE: &str = "mock";

/// The rows owned for one client identifier.
#[derive(Debug, Clone, Default)]
struct MockClientRecord {
    client_state: MockClientState,
    consensus_states: BTreeMap<Height, MockConsensusState>,
}

/// A verifier that trusts everything.
///
/// The generic contract obligations still hold (tag discipline, sentinel
/// rejection, duplicate-height detection, freeze on conflicting headers)
/// but every consensus-specific check passes unconditionally.
#[derive(Default)]
pub struct MockClient {
    clients: HashMap<ClientId, MockClientRecord>,
}

impl MockClient {
    /// Creates a mock client serving no identifiers yet.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn record(&self, client_id: &ClientId) -> Result<&MockClientRecord, HostError> {
        self.clients
            .get(client_id)
            .ok_or_else(|| HostError::UnknownClient {
                client_id: client_id.clone(),
            })
    }

    /// The commitment of a client state: the digest of its packed envelope.
    fn client_state_commitment(
        client_state: &MockClientState,
    ) -> Result<CommitmentDigest, HostError> {
        let any = envelope::pack(MOCK_CLIENT_STATE_TYPE_URL, client_state)?;
        Ok(CommitmentDigest::of(&any.encode_to_vec()))
    }

    /// The commitment of a consensus state: the digest of its packed
    /// envelope.
    fn consensus_state_commitment(
        consensus_state: &MockConsensusState,
    ) -> Result<CommitmentDigest, HostError> {
        let any = envelope::pack(MOCK_CONSENSUS_STATE_TYPE_URL, consensus_state)?;
        Ok(CommitmentDigest::of(&any.encode_to_vec()))
    }

    /// The shared preconditions of proof verification: the client must be
    /// known, not frozen, and hold a consensus state at `height`.
    fn verification_state(
        &self,
        client_id: &ClientId,
        height: Height,
    ) -> Result<&MockConsensusState, HostError> {
        let record = self.record(client_id)?;
        ensure!(
            !record.client_state.frozen,
            HostError::ClientFrozen {
                client_id: client_id.clone(),
            }
        );
        record
            .consensus_states
            .get(&height)
            .ok_or_else(|| HostError::UnknownHeight {
                client_id: client_id.clone(),
                height,
            })
    }

    fn apply_header(
        &mut self,
        client_id: &ClientId,
        header: &MockHeader,
    ) -> Result<ClientUpdate, HostError> {
        ensure!(
            !header.height.is_unset(),
            HostError::InvalidClientMessage {
                reason: "header height is unset".to_string(),
            }
        );
        ensure!(
            header.timestamp != 0,
            HostError::InvalidClientMessage {
                reason: "header timestamp is zero".to_string(),
            }
        );

        let record = self
            .clients
            .get_mut(client_id)
            .ok_or_else(|| HostError::UnknownClient {
                client_id: client_id.clone(),
            })?;
        ensure!(
            !record.client_state.frozen,
            HostError::ClientFrozen {
                client_id: client_id.clone(),
            }
        );

        // A real verifier would check signatures and quorum against the
        // trusted consensus state here; the mock accepts every header.

        let new_consensus_state = header.consensus_state();
        if let Some(existing) = record.consensus_states.get(&header.height) {
            if *existing != new_consensus_state {
                return Err(HostError::DuplicateHeight {
                    client_id: client_id.clone(),
                    height: header.height,
                });
            }
            // Redundant resubmission of an already-recorded state.
            let client_state_commitment = Self::client_state_commitment(&record.client_state)?;
            return Ok(ClientUpdate::Updated {
                client_state_commitment,
                consensus_updates: vec![],
            });
        }

        let commitment = Self::consensus_state_commitment(&new_consensus_state)?;
        record
            .consensus_states
            .insert(header.height, new_consensus_state);
        if header.height > record.client_state.latest_height {
            record.client_state.latest_height = header.height;
        }
        let client_state_commitment = Self::client_state_commitment(&record.client_state)?;
        Ok(ClientUpdate::Updated {
            client_state_commitment,
            consensus_updates: vec![ConsensusUpdate {
                height: header.height,
                commitment,
            }],
        })
    }

    fn apply_misbehaviour(
        &mut self,
        client_id: &ClientId,
        misbehaviour: &MockMisbehaviour,
    ) -> Result<ClientUpdate, HostError> {
        ensure!(
            !misbehaviour.header_1.height.is_unset() && !misbehaviour.header_2.height.is_unset(),
            HostError::InvalidClientMessage {
                reason: "misbehaviour header height is unset".to_string(),
            }
        );
        ensure!(
            misbehaviour.is_conflicting(),
            HostError::InvalidClientMessage {
                reason: "misbehaviour headers do not conflict".to_string(),
            }
        );

        let record = self
            .clients
            .get_mut(client_id)
            .ok_or_else(|| HostError::UnknownClient {
                client_id: client_id.clone(),
            })?;
        ensure!(
            !record.client_state.frozen,
            HostError::ClientFrozen {
                client_id: client_id.clone(),
            }
        );

        record.client_state.frozen = true;
        let client_state_commitment = Self::client_state_commitment(&record.client_state)?;
        Ok(ClientUpdate::Misbehaviour {
            client_state_commitment,
        })
    }
}

impl LightClient for MockClient {
    fn client_type(&self) -> &str {
        MOCK_CLIENT_TYPE
    }

    fn create_client(
        &mut self,
        client_id: &ClientId,
        client_state: &Any,
        consensus_state: &Any,
    ) -> Result<CreatedClient, HostError> {
        let client_state: MockClientState =
            envelope::unpack(client_state, MOCK_CLIENT_STATE_TYPE_URL).map_err(|err| {
                HostError::InvalidInitialState {
                    reason: err.to_string(),
                }
            })?;
        let consensus_state: MockConsensusState =
            envelope::unpack(consensus_state, MOCK_CONSENSUS_STATE_TYPE_URL).map_err(|err| {
                HostError::InvalidInitialState {
                    reason: err.to_string(),
                }
            })?;

        ensure!(
            !client_state.latest_height.is_unset(),
            HostError::InvalidInitialState {
                reason: "latest height is unset".to_string(),
            }
        );
        ensure!(
            consensus_state.timestamp != 0,
            HostError::InvalidInitialState {
                reason: "consensus timestamp is zero".to_string(),
            }
        );
        ensure!(
            !client_state.frozen,
            HostError::InvalidInitialState {
                reason: "client state is frozen".to_string(),
            }
        );

        let client_state_commitment = Self::client_state_commitment(&client_state)?;
        let commitment = Self::consensus_state_commitment(&consensus_state)?;
        let height = client_state.latest_height;

        let mut consensus_states = BTreeMap::new();
        consensus_states.insert(height, consensus_state);
        self.clients.insert(
            client_id.clone(),
            MockClientRecord {
                client_state,
                consensus_states,
            },
        );

        Ok(CreatedClient {
            client_state_commitment,
            consensus_update: ConsensusUpdate { height, commitment },
        })
    }

    fn update_client(
        &mut self,
        client_id: &ClientId,
        client_message: &Any,
    ) -> Result<ClientUpdate, HostError> {
        // Tag discipline: the payload is only interpreted under a known tag.
        match client_message.type_url.as_str() {
            MOCK_HEADER_TYPE_URL => {
                let header: MockHeader = envelope::unpack(client_message, MOCK_HEADER_TYPE_URL)
                    .map_err(|err| HostError::InvalidClientMessage {
                        reason: err.to_string(),
                    })?;
                self.apply_header(client_id, &header)
            }
            MOCK_MISBEHAVIOUR_TYPE_URL => {
                let misbehaviour: MockMisbehaviour =
                    envelope::unpack(client_message, MOCK_MISBEHAVIOUR_TYPE_URL).map_err(|err| {
                        HostError::InvalidClientMessage {
                            reason: err.to_string(),
                        }
                    })?;
                self.apply_misbehaviour(client_id, &misbehaviour)
            }
            other => Err(HostError::InvalidClientMessage {
                reason: format!("unexpected type URL `{other}`"),
            }),
        }
    }

    fn client_state(&self, client_id: &ClientId) -> Option<Vec<u8>> {
        self.clients
            .get(client_id)
            .and_then(|record| serde_json::to_vec(&record.client_state).ok())
    }

    fn consensus_state(&self, client_id: &ClientId, height: Height) -> Option<Vec<u8>> {
        self.clients
            .get(client_id)
            .and_then(|record| record.consensus_states.get(&height))
            .and_then(|consensus_state| serde_json::to_vec(consensus_state).ok())
    }

    fn latest_height(&self, client_id: &ClientId) -> Option<Height> {
        self.clients
            .get(client_id)
            .map(|record| record.client_state.latest_height)
    }

    fn timestamp_at_height(&self, client_id: &ClientId, height: Height) -> Option<u64> {
        self.clients
            .get(client_id)
            .and_then(|record| record.consensus_states.get(&height))
            .map(|consensus_state| consensus_state.timestamp)
    }

    fn status(&self, client_id: &ClientId) -> Option<ClientStatus> {
        self.clients.get(client_id).map(|record| {
            if record.client_state.frozen {
                ClientStatus::Frozen
            } else {
                ClientStatus::Active
            }
        })
    }

    fn verify_membership(
        &self,
        client_id: &ClientId,
        height: Height,
        proof: &[u8],
        _prefix: &CommitmentPrefix,
        path: &str,
        value: &[u8],
    ) -> Result<bool, HostError> {
        self.verification_state(client_id, height)?;
        let Ok(proof) = serde_json::from_slice::<MockProof>(proof) else {
            return Ok(false);
        };
        Ok(proof.key_path == path && proof.value.as_deref() == Some(value))
    }

    fn verify_non_membership(
        &self,
        client_id: &ClientId,
        height: Height,
        proof: &[u8],
        _prefix: &CommitmentPrefix,
        path: &str,
    ) -> Result<bool, HostError> {
        self.verification_state(client_id, height)?;
        let Ok(proof) = serde_json::from_slice::<MockProof>(proof) else {
            return Ok(false);
        };
        Ok(proof.key_path == path && proof.value.is_none())
    }
}
