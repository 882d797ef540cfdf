//! The host error taxonomy.
//!
//! Every variant is terminal for the current operation; nothing is retried
//! internally. Validation errors surface before any state is mutated, and a
//! proof that merely fails to verify is a boolean result, never an error.

use ibc_host_types::error::{IdentifierError, TypeError};
use ibc_host_types::height::Height;
use ibc_host_types::identifiers::ClientId;
use thiserror::Error;

/// Errors raised by the host core and by light client implementations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HostError {
    #[error("initial client state is invalid: {reason}")]
    InvalidInitialState { reason: String },

    #[error("client message is invalid: {reason}")]
    InvalidClientMessage { reason: String },

    #[error(transparent)]
    InvalidType(#[from] TypeError),

    #[error(transparent)]
    InvalidIdentifier(#[from] IdentifierError),

    #[error("client `{client_id}` is frozen")]
    ClientFrozen { client_id: ClientId },

    #[error("no client bound to `{client_id}`")]
    UnknownClient { client_id: ClientId },

    #[error("client type `{client_type}` is not registered")]
    UnknownClientType { client_type: String },

    #[error("no consensus state recorded for `{client_id}` at height {height}")]
    UnknownHeight { client_id: ClientId, height: Height },

    #[error("a different consensus state is already recorded for `{client_id}` at height {height}")]
    DuplicateHeight { client_id: ClientId, height: Height },

    #[error("sequence mismatch, expected ({expected}) but found ({found})")]
    SequenceMismatch { expected: u64, found: u64 },

    #[error("client type `{client_type}` is already registered")]
    TypeAlreadyRegistered { client_type: String },

    #[error("capability `{name}` is already claimed by `{owner}`")]
    CapabilityAlreadyClaimed { name: String, owner: String },

    #[error("capability `{name}` does not exist")]
    UnknownCapability { name: String },

    #[error("`{owner}` does not own capability `{name}`")]
    CapabilityNotOwned { name: String, owner: String },
}
