//! Test doubles shared by the unit tests in this crate.

use ibc_host_types::commitment::CommitmentPrefix;
use ibc_host_types::height::Height;
use ibc_host_types::identifiers::ClientId;
use ibc_proto::google::protobuf::Any;

use crate::client::{ClientStatus, ClientUpdate, CreatedClient, LightClient};
use crate::error::HostError;

/// A do-nothing verifier for tests that only exercise registration and
/// dispatch.
pub struct NullClient(pub &'static str);

impl LightClient for NullClient {
    fn client_type(&self) -> &str {
        self.0
    }

    fn create_client(
        &mut self,
        _client_id: &ClientId,
        _client_state: &Any,
        _consensus_state: &Any,
    ) -> Result<CreatedClient, HostError> {
        unimplemented!()
    }

    fn update_client(
        &mut self,
        _client_id: &ClientId,
        _client_message: &Any,
    ) -> Result<ClientUpdate, HostError> {
        unimplemented!()
    }

    fn client_state(&self, _client_id: &ClientId) -> Option<Vec<u8>> {
        None
    }

    fn consensus_state(&self, _client_id: &ClientId, _height: Height) -> Option<Vec<u8>> {
        None
    }

    fn latest_height(&self, _client_id: &ClientId) -> Option<Height> {
        None
    }

    fn timestamp_at_height(&self, _client_id: &ClientId, _height: Height) -> Option<u64> {
        None
    }

    fn status(&self, _client_id: &ClientId) -> Option<ClientStatus> {
        None
    }

    fn verify_membership(
        &self,
        _client_id: &ClientId,
        _height: Height,
        _proof: &[u8],
        _prefix: &CommitmentPrefix,
        _path: &str,
        _value: &[u8],
    ) -> Result<bool, HostError> {
        unimplemented!()
    }

    fn verify_non_membership(
        &self,
        _client_id: &ClientId,
        _height: Height,
        _proof: &[u8],
        _prefix: &CommitmentPrefix,
        _path: &str,
    ) -> Result<bool, HostError> {
        unimplemented!()
    }
}
