//! Client messages accepted by the mock client: headers and misbehaviour
//! evidence.

use ibc_host_types::height::Height;
use serde::{Deserialize, Serialize};
use serde_with::base64::Base64;
use serde_with::serde_as;

use crate::consensus_state::MockConsensusState;

/// The canonical type URL of [`MockHeader`] payloads.
pub const MOCK_HEADER_TYPE_URL: &str = "/mock.Header";

/// The canonical type URL of [`MockMisbehaviour`] payloads.
pub const MOCK_MISBEHAVIOUR_TYPE_URL: &str = "/mock.Misbehaviour";

/// A mock header: the consensus state it installs plus the height it claims.
#[serde_as]
#[derive(Serialize, Deserialize, PartialEq, Eq, Clone, Debug, Default)]
pub struct MockHeader {
    /// The height the header attests to.
    pub height: Height,
    /// The header timestamp, seconds since the unix epoch.
    pub timestamp: u64,
    /// The commitment root the counterparty exported at this height.
    #[serde_as(as = "Base64")]
    pub root: Vec<u8>,
}

impl MockHeader {
    /// The consensus state this header installs when accepted.
    #[must_use]
    pub fn consensus_state(&self) -> MockConsensusState {
        MockConsensusState {
            timestamp: self.timestamp,
            root: self.root.clone(),
            next_validators_hash: None,
        }
    }
}

/// Evidence that the counterparty signed conflicting state.
#[derive(Serialize, Deserialize, PartialEq, Eq, Clone, Debug, Default)]
pub struct MockMisbehaviour {
    /// The first of the two conflicting headers.
    pub header_1: MockHeader,
    /// The second of the two conflicting headers.
    pub header_2: MockHeader,
}

impl MockMisbehaviour {
    /// Valid evidence is two headers for the same height that install
    /// different consensus states.
    #[must_use]
    pub fn is_conflicting(&self) -> bool {
        self.header_1.height == self.header_2.height
            && self.header_1.consensus_state() != self.header_2.consensus_state()
    }
}

#[cfg(test)]
mod tests {
    use ibc_host_types::height::Height;

    use super::{MockHeader, MockMisbehaviour};

    fn header(height: Height, root: &[u8]) -> MockHeader {
        MockHeader {
            height,
            timestamp: 10,
            root: root.to_vec(),
        }
    }

    #[test]
    fn test_conflict_detection() {
        let conflicting = MockMisbehaviour {
            header_1: header(Height::new(0, 5), b"root a"),
            header_2: header(Height::new(0, 5), b"root b"),
        };
        assert!(conflicting.is_conflicting());

        let same_state = MockMisbehaviour {
            header_1: header(Height::new(0, 5), b"root a"),
            header_2: header(Height::new(0, 5), b"root a"),
        };
        assert!(!same_state.is_conflicting());

        let different_heights = MockMisbehaviour {
            header_1: header(Height::new(0, 5), b"root a"),
            header_2: header(Height::new(0, 6), b"root b"),
        };
        assert!(!different_heights.is_conflicting());
    }
}
