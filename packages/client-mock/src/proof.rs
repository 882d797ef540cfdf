//! The mock proof format.

use serde::{Deserialize, Serialize};
use serde_with::base64::Base64;
use serde_with::serde_as;

/// What a mock "Merkle proof" asserts about the counterparty store.
///
/// Real verifiers check a cryptographic proof against the stored commitment
/// root; the mock proof simply states its claim, and verification checks the
/// claim against the query. A proof carrying a value supports membership of
/// exactly that value under its path; a valueless proof supports
/// non-membership of the path. Proof bytes are JSON, as with the storage
/// proofs of real clients.
#[serde_as]
#[derive(Serialize, Deserialize, PartialEq, Eq, Clone, Debug)]
pub struct MockProof {
    /// The counterparty store path the proof speaks about.
    pub key_path: String,
    /// The value claimed present, or `None` for an absence proof.
    #[serde_as(as = "Option<Base64>")]
    #[serde(default)]
    pub value: Option<Vec<u8>>,
}

impl MockProof {
    /// A membership proof for `value` under `key_path`.
    #[must_use]
    pub fn membership(key_path: &str, value: &[u8]) -> Self {
        Self {
            key_path: key_path.to_string(),
            value: Some(value.to_vec()),
        }
    }

    /// An absence proof for `key_path`.
    #[must_use]
    pub fn non_membership(key_path: &str) -> Self {
        Self {
            key_path: key_path.to_string(),
            value: None,
        }
    }
}
