//! The host facade: client lifecycle, commitment recording, and the query
//! surface exposed to relayers and protocol layers.

use ibc_host_types::commitment::{CommitmentDigest, CommitmentPrefix};
use ibc_host_types::height::Height;
use ibc_host_types::identifiers::ClientId;
use ibc_host_types::path;
use ibc_proto::google::protobuf::Any;
use tracing::{info, instrument, warn};

use crate::client::{ClientStatus, ClientUpdate};
use crate::error::HostError;
use crate::router::ClientRouter;
use crate::store::capability::CapabilityTable;
use crate::store::commitment::CommitmentStore;
use crate::store::sequence::SequenceCounters;

/// Wires the client router to the host stores.
///
/// Client create/update operations dispatch through the router and record
/// the returned commitments at their canonical paths, so the chain's
/// exported state always reflects the verifiers' view. Every entry point is
/// synchronous and validates before mutating.
#[derive(Default, Debug)]
pub struct Host {
    router: ClientRouter,
    commitments: CommitmentStore,
    sequences: SequenceCounters,
    capabilities: CapabilityTable,
}

impl Host {
    /// Creates a host with no registered client types.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a client of `client_type` from type-tagged initial payloads
    /// and records its client and consensus state commitments.
    ///
    /// # Errors
    /// Returns `UnknownClientType` if no implementation is registered for
    /// the type, and whatever the implementation's `create_client` raises.
    #[instrument(skip(self, client_state, consensus_state))]
    pub fn create_client(
        &mut self,
        client_type: &str,
        client_state: &Any,
        consensus_state: &Any,
    ) -> Result<ClientId, HostError> {
        if !self.router.is_registered(client_type) {
            return Err(HostError::UnknownClientType {
                client_type: client_type.to_string(),
            });
        }
        let client_id = self.router.allocate_client_id(client_type)?;
        let module = self.router.module_for_mut(&client_id)?;
        let created = module.create_client(&client_id, client_state, consensus_state)?;

        self.commitments.set_digest(
            &path::client_state(&client_id),
            created.client_state_commitment,
        );
        let update = created.consensus_update;
        self.commitments.set_digest(
            &path::consensus_state(&client_id, &update.height),
            update.commitment,
        );
        info!(%client_id, height = %update.height, "created client");
        Ok(client_id)
    }

    /// Submits a client message to the client's verifier and records the
    /// resulting commitments: the refreshed client state plus any new
    /// consensus states, or only the frozen client state on misbehaviour.
    ///
    /// # Errors
    /// Returns `UnknownClient` if the identifier is unbound, and whatever
    /// the implementation's `update_client` raises.
    #[instrument(skip(self, client_message))]
    pub fn update_client(
        &mut self,
        client_id: &ClientId,
        client_message: &Any,
    ) -> Result<ClientUpdate, HostError> {
        let module = self.router.module_for_mut(client_id)?;
        let update = module.update_client(client_id, client_message)?;
        match &update {
            ClientUpdate::Updated {
                client_state_commitment,
                consensus_updates,
            } => {
                self.commitments
                    .set_digest(&path::client_state(client_id), *client_state_commitment);
                for consensus_update in consensus_updates {
                    self.commitments.set_digest(
                        &path::consensus_state(client_id, &consensus_update.height),
                        consensus_update.commitment,
                    );
                }
                info!(%client_id, updates = consensus_updates.len(), "updated client");
            }
            ClientUpdate::Misbehaviour {
                client_state_commitment,
            } => {
                self.commitments
                    .set_digest(&path::client_state(client_id), *client_state_commitment);
                warn!(%client_id, "misbehaviour detected, client frozen");
            }
        }
        Ok(update)
    }

    /// Verifies a membership proof against the client's stored consensus
    /// root at `height`.
    ///
    /// # Errors
    /// Returns `UnknownClient` for an unbound identifier; the bound
    /// verifier raises `ClientFrozen`/`UnknownHeight` per the contract.
    pub fn verify_membership(
        &self,
        client_id: &ClientId,
        height: Height,
        proof: &[u8],
        prefix: &CommitmentPrefix,
        path: &str,
        value: &[u8],
    ) -> Result<bool, HostError> {
        self.router
            .module_for(client_id)?
            .verify_membership(client_id, height, proof, prefix, path, value)
    }

    /// Verifies a non-membership proof against the client's stored
    /// consensus root at `height`.
    ///
    /// # Errors
    /// Same as [`Host::verify_membership`].
    pub fn verify_non_membership(
        &self,
        client_id: &ClientId,
        height: Height,
        proof: &[u8],
        prefix: &CommitmentPrefix,
        path: &str,
    ) -> Result<bool, HostError> {
        self.router
            .module_for(client_id)?
            .verify_non_membership(client_id, height, proof, prefix, path)
    }

    /// The stored client state, or `None` for an unknown identifier.
    #[must_use]
    pub fn client_state(&self, client_id: &ClientId) -> Option<Vec<u8>> {
        self.router
            .module_for(client_id)
            .ok()
            .and_then(|module| module.client_state(client_id))
    }

    /// The stored consensus state at `height`, or `None` when missing.
    #[must_use]
    pub fn consensus_state(&self, client_id: &ClientId, height: Height) -> Option<Vec<u8>> {
        self.router
            .module_for(client_id)
            .ok()
            .and_then(|module| module.consensus_state(client_id, height))
    }

    /// The latest recorded height of a client, or `None` when unknown.
    #[must_use]
    pub fn latest_height(&self, client_id: &ClientId) -> Option<Height> {
        self.router
            .module_for(client_id)
            .ok()
            .and_then(|module| module.latest_height(client_id))
    }

    /// The timestamp of a client's consensus state at `height`, or `None`
    /// when missing.
    #[must_use]
    pub fn timestamp_at_height(&self, client_id: &ClientId, height: Height) -> Option<u64> {
        self.router
            .module_for(client_id)
            .ok()
            .and_then(|module| module.timestamp_at_height(client_id, height))
    }

    /// A client's status, or `None` for an unknown identifier.
    #[must_use]
    pub fn client_status(&self, client_id: &ClientId) -> Option<ClientStatus> {
        self.router
            .module_for(client_id)
            .ok()
            .and_then(|module| module.status(client_id))
    }

    /// The commitment recorded at `path`, or `None`.
    #[must_use]
    pub fn commitment(&self, path: &str) -> Option<CommitmentDigest> {
        self.commitments.get(path)
    }

    /// The client router.
    #[must_use]
    pub fn router(&self) -> &ClientRouter {
        &self.router
    }

    /// The client router, mutably.
    pub fn router_mut(&mut self) -> &mut ClientRouter {
        &mut self.router
    }

    /// The commitment store.
    #[must_use]
    pub fn commitments(&self) -> &CommitmentStore {
        &self.commitments
    }

    /// The commitment store, mutably. Only the handshake/packet layers
    /// write here; client commitments go through the lifecycle entry
    /// points.
    pub fn commitments_mut(&mut self) -> &mut CommitmentStore {
        &mut self.commitments
    }

    /// The packet sequence counters.
    #[must_use]
    pub fn sequences(&self) -> &SequenceCounters {
        &self.sequences
    }

    /// The packet sequence counters, mutably.
    pub fn sequences_mut(&mut self) -> &mut SequenceCounters {
        &mut self.sequences
    }

    /// The capability table.
    #[must_use]
    pub fn capabilities(&self) -> &CapabilityTable {
        &self.capabilities
    }

    /// The capability table, mutably.
    pub fn capabilities_mut(&mut self) -> &mut CapabilityTable {
        &mut self.capabilities
    }
}
