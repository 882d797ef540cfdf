//! The capability ownership table.

use std::collections::HashMap;

use crate::error::HostError;

/// Records which module(s) own each named capability.
///
/// The table answers existence and ownership lookups only; what an owner is
/// allowed to do with a capability is the caller's policy. A capability is
/// never silently reassigned: owners are only ever added by an explicit
/// claim and removed by an explicit release.
#[derive(Default, Debug, Clone)]
pub struct CapabilityTable {
    owners: HashMap<String, Vec<String>>,
}

impl CapabilityTable {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Claims `name` for `owner`, creating the capability on first claim.
    ///
    /// # Errors
    /// Returns `CapabilityAlreadyClaimed` if this owner already claimed the
    /// capability.
    pub fn claim(&mut self, name: &str, owner: &str) -> Result<(), HostError> {
        let owners = self.owners.entry(name.to_string()).or_default();
        if owners.iter().any(|o| o == owner) {
            return Err(HostError::CapabilityAlreadyClaimed {
                name: name.to_string(),
                owner: owner.to_string(),
            });
        }
        owners.push(owner.to_string());
        Ok(())
    }

    /// Releases `owner`'s claim on `name`. The capability survives until its
    /// last owner releases it.
    ///
    /// # Errors
    /// Returns `UnknownCapability` if the capability does not exist and
    /// `CapabilityNotOwned` if this owner holds no claim on it.
    pub fn release(&mut self, name: &str, owner: &str) -> Result<(), HostError> {
        let owners = self
            .owners
            .get_mut(name)
            .ok_or_else(|| HostError::UnknownCapability {
                name: name.to_string(),
            })?;
        let position = owners.iter().position(|o| o == owner).ok_or_else(|| {
            HostError::CapabilityNotOwned {
                name: name.to_string(),
                owner: owner.to_string(),
            }
        })?;
        owners.remove(position);
        if owners.is_empty() {
            self.owners.remove(name);
        }
        Ok(())
    }

    /// Whether `owner` holds a claim on `name`.
    #[must_use]
    pub fn authenticate(&self, name: &str, owner: &str) -> bool {
        self.owners
            .get(name)
            .is_some_and(|owners| owners.iter().any(|o| o == owner))
    }

    /// The owners of `name`, or `None` if the capability does not exist.
    #[must_use]
    pub fn owners(&self, name: &str) -> Option<&[String]> {
        self.owners.get(name).map(Vec::as_slice)
    }

    /// Whether a capability named `name` exists.
    #[must_use]
    pub fn exists(&self, name: &str) -> bool {
        self.owners.contains_key(name)
    }
}

#[cfg(test)]
mod tests {
    use super::CapabilityTable;
    use crate::error::HostError;

    #[test]
    fn test_claim_and_authenticate() {
        let mut table = CapabilityTable::new();
        table.claim("ports/transfer", "transfer-module").unwrap();
        assert!(table.exists("ports/transfer"));
        assert!(table.authenticate("ports/transfer", "transfer-module"));
        assert!(!table.authenticate("ports/transfer", "other-module"));
        assert!(!table.authenticate("ports/ica", "transfer-module"));
    }

    #[test]
    fn test_double_claim_by_same_owner_fails() {
        let mut table = CapabilityTable::new();
        table.claim("ports/transfer", "transfer-module").unwrap();
        assert_eq!(
            HostError::CapabilityAlreadyClaimed {
                name: "ports/transfer".to_string(),
                owner: "transfer-module".to_string(),
            },
            table.claim("ports/transfer", "transfer-module").unwrap_err()
        );
    }

    #[test]
    fn test_multiple_owners() {
        let mut table = CapabilityTable::new();
        table.claim("channels/channel-0", "transfer-module").unwrap();
        table.claim("channels/channel-0", "fee-module").unwrap();
        assert_eq!(
            Some(["transfer-module".to_string(), "fee-module".to_string()].as_slice()),
            table.owners("channels/channel-0")
        );
    }

    #[test]
    fn test_release_semantics() {
        let mut table = CapabilityTable::new();
        table.claim("channels/channel-0", "transfer-module").unwrap();
        table.claim("channels/channel-0", "fee-module").unwrap();

        table.release("channels/channel-0", "fee-module").unwrap();
        assert!(table.exists("channels/channel-0"));
        assert!(!table.authenticate("channels/channel-0", "fee-module"));

        table.release("channels/channel-0", "transfer-module").unwrap();
        assert!(!table.exists("channels/channel-0"));

        assert!(matches!(
            table.release("channels/channel-0", "transfer-module"),
            Err(HostError::UnknownCapability { .. })
        ));
    }
}
