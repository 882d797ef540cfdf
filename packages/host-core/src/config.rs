//! Defines the top level configuration for the host.

use serde::{Deserialize, Serialize};

/// The top level configuration for the host.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct HostConfig {
    /// The configuration for the client type modules.
    pub clients: Vec<ClientModuleConfig>,
}

/// The configuration for one client type module.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct ClientModuleConfig {
    /// The client type the module answers for.
    pub client_type: String,
    /// Whether the module is enabled.
    #[serde(default = "default_true")]
    pub enabled: bool,
}

/// Returns true, used as a default value for boolean fields.
const fn default_true() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::HostConfig;

    #[test]
    fn test_enabled_defaults_to_true() {
        let config: HostConfig = serde_json::from_str(
            r#"{ "clients": [
                { "client_type": "mock" },
                { "client_type": "tendermint", "enabled": false }
            ] }"#,
        )
        .unwrap();
        assert!(config.clients[0].enabled);
        assert!(!config.clients[1].enabled);
    }
}
