//! This module defines [`Height`].

use core::fmt;

use serde::{Deserialize, Serialize};

/// A position in a counterparty chain's history.
///
/// Heights are ordered lexicographically on `(revision_number,
/// revision_height)`; within one revision a valid chain only ever moves to a
/// strictly larger `revision_height`.
#[derive(
    Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy, Debug, Default,
)]
pub struct Height {
    /// The revision number, bumped on counterparty chain upgrades.
    #[serde(default)]
    pub revision_number: u64,
    /// The block height within the revision.
    pub revision_height: u64,
}

impl Height {
    /// Creates a new height.
    #[must_use]
    pub const fn new(revision_number: u64, revision_height: u64) -> Self {
        Self {
            revision_number,
            revision_height,
        }
    }

    /// Whether this height carries the "unset" sentinel.
    ///
    /// A zero `revision_height` never identifies a real block; creation and
    /// update paths reject it.
    #[must_use]
    pub const fn is_unset(&self) -> bool {
        self.revision_height == 0
    }
}

impl fmt::Display for Height {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.revision_number, self.revision_height)
    }
}
