use std::fs;
use std::path::Path;

use opcua::crypto::SecurityPolicy;
use opcua::types::MessageSecurityMode;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ToolConfig {
    pub server_url: String,
    pub security_policy: String,
    pub security_mode: String,
    pub application_name: String,
    pub application_uri: String,
    pub session_timeout: u32,
    /// Nodes per Read request when checking a live server.
    pub batch_size: usize,
    pub auto_trust: bool,
    pub client_cert_path: Option<String>,
    pub client_key_path: Option<String>,
}

impl Default for ToolConfig {
    fn default() -> Self {
        Self {
            server_url: "opc.tcp://localhost:4840".to_string(),
            security_policy: "None".to_string(),
            security_mode: "None".to_string(),
            application_name: "OPC UA NodeId Table".to_string(),
            application_uri: "urn:opcua-node-ids".to_string(),
            session_timeout: 60000,
            batch_size: 500,
            auto_trust: true,
            client_cert_path: None,
            client_key_path: None,
        }
    }
}

impl ToolConfig {
    /// Load and validate a TOML file; fields it omits keep their defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let config = Self::read(path)?;
        config.validate()?;
        Ok(config)
    }

    /// Parse a TOML file without validating it, so callers can apply
    /// overrides first.
    pub fn read(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        let config: Self = toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.display().to_string(),
            source,
        })?;
        log::debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.batch_size == 0 {
            return Err(ConfigError::Invalid {
                field: "batch_size",
                reason: "must be greater than zero".to_string(),
            });
        }
        if !self.server_url.starts_with("opc.tcp://") {
            return Err(ConfigError::Invalid {
                field: "server_url",
                reason: format!("'{}' is not an opc.tcp:// URL", self.server_url),
            });
        }
        self.policy()?;
        self.mode()?;
        Ok(())
    }

    pub fn policy(&self) -> Result<SecurityPolicy, ConfigError> {
        match self.security_policy.as_str() {
            "None" => Ok(SecurityPolicy::None),
            "Basic128Rsa15" => Ok(SecurityPolicy::Basic128Rsa15),
            "Basic256" => Ok(SecurityPolicy::Basic256),
            "Basic256Sha256" => Ok(SecurityPolicy::Basic256Sha256),
            "Aes128Sha256RsaOaep" => Ok(SecurityPolicy::Aes128Sha256RsaOaep),
            "Aes256Sha256RsaPss" => Ok(SecurityPolicy::Aes256Sha256RsaPss),
            other => Err(ConfigError::Invalid {
                field: "security_policy",
                reason: format!("unknown policy '{other}'"),
            }),
        }
    }

    pub fn mode(&self) -> Result<MessageSecurityMode, ConfigError> {
        match self.security_mode.as_str() {
            "None" => Ok(MessageSecurityMode::None),
            "Sign" => Ok(MessageSecurityMode::Sign),
            "SignAndEncrypt" => Ok(MessageSecurityMode::SignAndEncrypt),
            other => Err(ConfigError::Invalid {
                field: "security_mode",
                reason: format!("unknown mode '{other}'"),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = ToolConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.policy().unwrap(), SecurityPolicy::None);
        assert_eq!(config.mode().unwrap(), MessageSecurityMode::None);
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config: ToolConfig = toml::from_str(
            r#"
server_url = "opc.tcp://plc.local:4840"
batch_size = 100
"#,
        )
        .unwrap();
        assert_eq!(config.server_url, "opc.tcp://plc.local:4840");
        assert_eq!(config.batch_size, 100);
        assert_eq!(config.session_timeout, 60000);
        assert_eq!(config.security_policy, "None");
    }

    #[test]
    fn test_rejects_invalid_values() {
        let config = ToolConfig {
            batch_size: 0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Invalid { field: "batch_size", .. })
        ));

        let config = ToolConfig {
            security_policy: "Rot13".to_string(),
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Invalid { field: "security_policy", .. })
        ));

        let config = ToolConfig {
            server_url: "http://localhost".to_string(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
