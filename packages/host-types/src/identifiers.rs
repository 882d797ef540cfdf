//! Client identifiers and client type names.

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::ensure;
use crate::error::IdentifierError;

/// A stable name for one client instance, of the form `{type}-{sequence}`.
///
/// The sequence is allocated by the router from a process-wide counter and is
/// never reused, so an identifier keeps naming the same client even after it
/// is frozen or abandoned.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClientId(String);

impl ClientId {
    /// Creates an identifier from a validated client type and a sequence.
    ///
    /// # Errors
    /// Returns an error if `client_type` is not a valid client type name.
    pub fn new(client_type: &str, sequence: u64) -> Result<Self, IdentifierError> {
        validate_client_type(client_type)?;
        Ok(Self(format!("{client_type}-{sequence}")))
    }

    /// The client type segment, everything before the last `-`.
    #[must_use]
    pub fn client_type(&self) -> &str {
        self.0.rsplit_once('-').map_or(self.0.as_str(), |(t, _)| t)
    }

    /// The allocation sequence segment, everything after the last `-`.
    #[must_use]
    pub fn sequence(&self) -> u64 {
        self.0
            .rsplit_once('-')
            .and_then(|(_, s)| s.parse().ok())
            .unwrap_or_default()
    }

    /// The identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for ClientId {
    type Err = IdentifierError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (client_type, sequence) = s
            .rsplit_once('-')
            .ok_or_else(|| IdentifierError::MissingSequence(s.to_string()))?;
        validate_client_type(client_type)?;
        let sequence: u64 = sequence
            .parse()
            .map_err(|_| IdentifierError::InvalidSequence(s.to_string()))?;
        Self::new(client_type, sequence)
    }
}

impl fmt::Display for ClientId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Validates a client type name.
///
/// Type names may contain alphanumerics, `-` and `_`; the sequence appended
/// by [`ClientId::new`] is recovered by splitting on the *last* dash, so
/// dashes inside the type (e.g. `07-tendermint`) are fine.
///
/// # Errors
/// Returns an error if the name is empty or contains an invalid character.
pub fn validate_client_type(client_type: &str) -> Result<(), IdentifierError> {
    ensure!(!client_type.is_empty(), IdentifierError::EmptyClientType);
    for c in client_type.chars() {
        ensure!(
            c.is_ascii_alphanumeric() || c == '-' || c == '_',
            IdentifierError::InvalidCharacter(c)
        );
    }
    Ok(())
}
