//! Routes client operations to the implementation registered for their
//! client type, and allocates fresh client identifiers.

use std::collections::HashMap;

use ibc_host_types::identifiers::ClientId;
use tracing::info;

use crate::client::LightClient;
use crate::error::HostError;

/// The client type → implementation registry.
///
/// Identifier allocation draws from one process-wide counter that never
/// resets; a sequence number is never reused, even for clients that are
/// later frozen or abandoned.
#[derive(Default, Debug)]
pub struct ClientRouter {
    /// One implementation per client type.
    modules: HashMap<String, Box<dyn LightClient>>,
    /// Which client type owns each allocated identifier.
    clients: HashMap<ClientId, String>,
    next_client_seq: u64,
}

impl ClientRouter {
    /// Creates an empty router.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an implementation under its client type. One-time binding.
    ///
    /// # Errors
    /// Returns `TypeAlreadyRegistered` if the type already has an
    /// implementation.
    pub fn register(&mut self, module: Box<dyn LightClient>) -> Result<(), HostError> {
        let client_type = module.client_type().to_string();
        if self.modules.contains_key(&client_type) {
            return Err(HostError::TypeAlreadyRegistered { client_type });
        }
        info!(%client_type, "registered client type");
        self.modules.insert(client_type, module);
        Ok(())
    }

    /// Whether an implementation is registered for `client_type`.
    #[must_use]
    pub fn is_registered(&self, client_type: &str) -> bool {
        self.modules.contains_key(client_type)
    }

    /// Allocates the next client identifier for `client_type` and binds it
    /// for dispatch.
    ///
    /// # Errors
    /// Returns an error if `client_type` is not a valid type name.
    pub fn allocate_client_id(&mut self, client_type: &str) -> Result<ClientId, HostError> {
        let client_id = ClientId::new(client_type, self.next_client_seq)?;
        self.next_client_seq += 1;
        self.clients
            .insert(client_id.clone(), client_type.to_string());
        Ok(client_id)
    }

    /// The implementation bound to `client_id`.
    ///
    /// # Errors
    /// Returns `UnknownClient` if no implementation is bound to the
    /// identifier.
    pub fn module_for(&self, client_id: &ClientId) -> Result<&dyn LightClient, HostError> {
        self.clients
            .get(client_id)
            .and_then(|client_type| self.modules.get(client_type))
            .map(|module| &**module)
            .ok_or_else(|| HostError::UnknownClient {
                client_id: client_id.clone(),
            })
    }

    /// The implementation bound to `client_id`, mutably.
    ///
    /// # Errors
    /// Returns `UnknownClient` if no implementation is bound to the
    /// identifier.
    pub fn module_for_mut(
        &mut self,
        client_id: &ClientId,
    ) -> Result<&mut (dyn LightClient + 'static), HostError> {
        let client_type = self
            .clients
            .get(client_id)
            .cloned()
            .ok_or_else(|| HostError::UnknownClient {
                client_id: client_id.clone(),
            })?;
        self.modules
            .get_mut(&client_type)
            .map(|module| module.as_mut())
            .ok_or_else(|| HostError::UnknownClient {
                client_id: client_id.clone(),
            })
    }
}
