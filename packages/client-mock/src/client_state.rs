//! This module defines [`MockClientState`].

use ibc_host_types::height::Height;
use serde::{Deserialize, Serialize};

/// The canonical type URL of [`MockClientState`] payloads.
pub const MOCK_CLIENT_STATE_TYPE_URL: &str = "/mock.ClientState";

/// The client state of the mock light client.
#[derive(Serialize, Deserialize, PartialEq, Eq, Clone, Copy, Debug, Default)]
pub struct MockClientState {
    /// The latest height the client has accepted.
    pub latest_height: Height,
    /// Whether misbehaviour froze the client. A frozen client refuses
    /// updates and proof verification.
    #[serde(default)]
    pub frozen: bool,
    /// How long a consensus state stays trustworthy, in seconds. The mock
    /// carries the parameter but never enforces it.
    #[serde(default)]
    pub trusting_period: u64,
}
