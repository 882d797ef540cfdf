//! Defines the [`HostBuilder`] struct that is used to build a [`Host`].

use std::collections::HashMap;

use tracing::info;

use crate::client::LightClient;
use crate::config::HostConfig;
use crate::error::HostError;
use crate::host::Host;

/// Collects light client modules and assembles a [`Host`] with the subset a
/// configuration enables.
#[derive(Default, Debug)]
pub struct HostBuilder {
    /// The modules available for registration, keyed by client type.
    modules: HashMap<String, Box<dyn LightClient>>,
}

impl HostBuilder {
    /// Creates a new `HostBuilder` instance.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a light client module to the builder.
    ///
    /// # Errors
    /// Returns `TypeAlreadyRegistered` if a module for the same client type
    /// was already added.
    pub fn register<T: LightClient + 'static>(mut self, module: T) -> Result<Self, HostError> {
        let client_type = module.client_type().to_string();
        if self.modules.contains_key(&client_type) {
            return Err(HostError::TypeAlreadyRegistered { client_type });
        }
        self.modules.insert(client_type, Box::new(module));
        Ok(self)
    }

    /// Builds a host with the modules the configuration enables.
    ///
    /// # Errors
    /// Returns `UnknownClientType` if the configuration enables a client
    /// type that was never added, and `TypeAlreadyRegistered` if it lists
    /// one twice.
    pub fn build(mut self, config: &HostConfig) -> Result<Host, HostError> {
        let mut host = Host::new();
        for c in config.clients.iter().filter(|c| c.enabled) {
            let module = self.modules.remove(&c.client_type).ok_or_else(|| {
                HostError::UnknownClientType {
                    client_type: c.client_type.clone(),
                }
            })?;
            host.router_mut().register(module)?;
            info!(client_type = %c.client_type, "client module enabled");
        }
        Ok(host)
    }
}
