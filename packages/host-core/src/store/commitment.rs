//! The hashed-path → hashed-value commitment store.

use std::collections::HashMap;

use ibc_host_types::commitment::CommitmentDigest;

/// The canonical map of this chain's exported protocol state.
///
/// Only digests are stored, never raw values; an entry proves the path
/// existed with that value at commitment time, and a later write simply
/// overwrites it (the store is an advancing state machine, not an audit
/// log). Counterparty state is never read from here; proofs against the
/// counterparty go through a light client instead.
#[derive(Default, Debug, Clone)]
pub struct CommitmentStore {
    commitments: HashMap<CommitmentDigest, CommitmentDigest>,
}

impl CommitmentStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `digest(path) → digest(value)`, silently overwriting any
    /// previous entry for the path.
    pub fn set(&mut self, path: &str, value: &[u8]) {
        self.commitments
            .insert(CommitmentDigest::of(path.as_bytes()), CommitmentDigest::of(value));
    }

    /// Records a value commitment that was already digested by its producer
    /// (e.g. a client state commitment returned by a verifier).
    pub fn set_digest(&mut self, path: &str, value: CommitmentDigest) {
        self.commitments
            .insert(CommitmentDigest::of(path.as_bytes()), value);
    }

    /// Clears the entry for `path`, if any. Used when state is removed, such
    /// as a fulfilled packet commitment.
    pub fn delete(&mut self, path: &str) {
        self.commitments.remove(&CommitmentDigest::of(path.as_bytes()));
    }

    /// The value commitment recorded for `path`, or `None`.
    #[must_use]
    pub fn get(&self, path: &str) -> Option<CommitmentDigest> {
        self.commitments
            .get(&CommitmentDigest::of(path.as_bytes()))
            .copied()
    }

    /// Lookup by a precomputed path digest, for relayers that hash keys
    /// themselves.
    #[must_use]
    pub fn get_by_digest(&self, path_digest: &CommitmentDigest) -> Option<CommitmentDigest> {
        self.commitments.get(path_digest).copied()
    }

    /// The number of live entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.commitments.len()
    }

    /// Whether the store has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commitments.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use ibc_host_types::commitment::CommitmentDigest;

    use super::CommitmentStore;

    #[test]
    fn test_set_then_get_returns_value_digest() {
        let mut store = CommitmentStore::new();
        store.set("commitments/ports/transfer/channels/channel-0/sequences/1", b"packet data");
        assert_eq!(
            Some(CommitmentDigest::of(b"packet data")),
            store.get("commitments/ports/transfer/channels/channel-0/sequences/1")
        );
    }

    #[test]
    fn test_overwrite_is_silent() {
        let mut store = CommitmentStore::new();
        store.set("connections/connection-0", b"INIT");
        store.set("connections/connection-0", b"OPEN");
        assert_eq!(
            Some(CommitmentDigest::of(b"OPEN")),
            store.get("connections/connection-0")
        );
        assert_eq!(1, store.len());
    }

    #[test]
    fn test_delete_then_get_is_none() {
        let mut store = CommitmentStore::new();
        store.set("acks/ports/transfer/channels/channel-0/sequences/1", b"ack");
        store.delete("acks/ports/transfer/channels/channel-0/sequences/1");
        assert_eq!(None, store.get("acks/ports/transfer/channels/channel-0/sequences/1"));
        assert!(store.is_empty());
    }

    #[test]
    fn test_lookup_by_precomputed_digest() {
        let mut store = CommitmentStore::new();
        store.set("channelEnds/ports/transfer/channels/channel-0", b"channel end");
        let path_digest = CommitmentDigest::of(b"channelEnds/ports/transfer/channels/channel-0");
        assert_eq!(
            Some(CommitmentDigest::of(b"channel end")),
            store.get_by_digest(&path_digest)
        );
    }
}
