//! Client configuration validation
//!
//! [`ClientConfig::validate`] turns the loosely-typed [`RawConfig`] into a
//! normalized configuration, or fails on the first missing/invalid field.
//! The input is consumed by value; caller-owned data is never mutated.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

pub use cloudlink_config::{RawConfig, RawServerConfig};

use crate::error::{CloudlinkError, Result};

/// Default port when the configuration leaves it out
pub const DEFAULT_PORT: u16 = 80;

/// Cloud providers supported by the Cloudlink service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CloudProvider {
    Aws,
    DigitalOcean,
    Gce,
}

impl CloudProvider {
    /// Provider name as it appears on the wire (URL path segment)
    pub fn as_str(&self) -> &'static str {
        match self {
            CloudProvider::Aws => "aws",
            CloudProvider::DigitalOcean => "digitalocean",
            CloudProvider::Gce => "gce",
        }
    }

    /// Parse a provider name, `None` if it is not in the supported set
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "aws" => Some(CloudProvider::Aws),
            "digitalocean" => Some(CloudProvider::DigitalOcean),
            "gce" => Some(CloudProvider::Gce),
            _ => None,
        }
    }
}

impl fmt::Display for CloudProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Validated Cloudlink service endpoint
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub secure: bool,
}

/// Validated client configuration
///
/// Constructed once per client via [`ClientConfig::validate`] and immutable
/// afterwards.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub cloud: CloudProvider,
    pub server: ServerConfig,
    /// Opaque, provider-specific credentials; forwarded with every request
    pub auth: Value,
}

impl ClientConfig {
    /// Validate a raw configuration, surfacing the first failing check.
    ///
    /// `server.port` defaults to 80 and `server.secure` to `false` when
    /// absent; everything else is required.
    pub fn validate(raw: RawConfig) -> Result<Self> {
        let cloud = raw.cloud.ok_or_else(|| {
            CloudlinkError::InvalidConfig("Missing \"cloud\" definition in config".to_string())
        })?;

        let cloud = CloudProvider::parse(&cloud).ok_or_else(|| {
            CloudlinkError::InvalidConfig(format!(
                "\"{}\" is not a supported cloud provider",
                cloud
            ))
        })?;

        let server = raw.server.ok_or_else(|| {
            CloudlinkError::InvalidConfig("Missing \"server\" object in config".to_string())
        })?;

        let host = server
            .host
            .filter(|h| !h.is_empty())
            .ok_or_else(|| {
                CloudlinkError::InvalidConfig("Missing \"server.host\" in config".to_string())
            })?;

        // Port 0 counts as unset, same as the secure flag below
        let port = match server.port {
            Some(p) if p != 0 => p,
            _ => DEFAULT_PORT,
        };
        let secure = server.secure.unwrap_or(false);

        let auth = raw
            .auth
            .filter(|a| !a.is_null())
            .ok_or_else(|| {
                CloudlinkError::InvalidConfig("Missing \"auth\" object in config".to_string())
            })?;

        Ok(Self {
            cloud,
            server: ServerConfig { host, port, secure },
            auth,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn valid_raw() -> RawConfig {
        RawConfig {
            cloud: Some("aws".to_string()),
            server: Some(RawServerConfig {
                host: Some("api.example.com".to_string()),
                port: Some(8080),
                secure: Some(true),
            }),
            auth: Some(json!({"token": "t"})),
        }
    }

    #[test]
    fn test_validate_ok() {
        let config = ClientConfig::validate(valid_raw()).unwrap();
        assert_eq!(config.cloud, CloudProvider::Aws);
        assert_eq!(config.server.host, "api.example.com");
        assert_eq!(config.server.port, 8080);
        assert!(config.server.secure);
        assert_eq!(config.auth, json!({"token": "t"}));
    }

    #[test]
    fn test_missing_cloud() {
        let raw = RawConfig {
            cloud: None,
            ..valid_raw()
        };
        let err = ClientConfig::validate(raw).unwrap_err();
        match err {
            CloudlinkError::InvalidConfig(msg) => {
                assert_eq!(msg, "Missing \"cloud\" definition in config");
            }
            other => panic!("Expected InvalidConfig, got {:?}", other),
        }
    }

    #[test]
    fn test_unsupported_cloud_names_value() {
        let raw = RawConfig {
            cloud: Some("azure".to_string()),
            ..valid_raw()
        };
        let err = ClientConfig::validate(raw).unwrap_err();
        match err {
            CloudlinkError::InvalidConfig(msg) => {
                assert_eq!(msg, "\"azure\" is not a supported cloud provider");
            }
            other => panic!("Expected InvalidConfig, got {:?}", other),
        }
    }

    #[test]
    fn test_supported_cloud_set() {
        for (name, provider) in [
            ("aws", CloudProvider::Aws),
            ("digitalocean", CloudProvider::DigitalOcean),
            ("gce", CloudProvider::Gce),
        ] {
            let raw = RawConfig {
                cloud: Some(name.to_string()),
                ..valid_raw()
            };
            let config = ClientConfig::validate(raw).unwrap();
            assert_eq!(config.cloud, provider);
            assert_eq!(config.cloud.as_str(), name);
        }
    }

    #[test]
    fn test_missing_server() {
        let raw = RawConfig {
            server: None,
            ..valid_raw()
        };
        let err = ClientConfig::validate(raw).unwrap_err();
        assert!(err.to_string().contains("\"server\" object"));
    }

    #[test]
    fn test_missing_host() {
        let raw = RawConfig {
            server: Some(RawServerConfig {
                host: None,
                port: Some(80),
                secure: None,
            }),
            ..valid_raw()
        };
        let err = ClientConfig::validate(raw).unwrap_err();
        assert!(err.to_string().contains("\"server.host\""));
    }

    #[test]
    fn test_empty_host_rejected() {
        let raw = RawConfig {
            server: Some(RawServerConfig {
                host: Some(String::new()),
                port: None,
                secure: None,
            }),
            ..valid_raw()
        };
        let err = ClientConfig::validate(raw).unwrap_err();
        assert!(err.to_string().contains("\"server.host\""));
    }

    #[test]
    fn test_port_and_secure_defaults() {
        let raw = RawConfig {
            server: Some(RawServerConfig {
                host: Some("api.example.com".to_string()),
                port: None,
                secure: None,
            }),
            ..valid_raw()
        };
        let config = ClientConfig::validate(raw).unwrap();
        assert_eq!(config.server.port, DEFAULT_PORT);
        assert!(!config.server.secure);
    }

    #[test]
    fn test_port_zero_treated_as_unset() {
        let raw = RawConfig {
            server: Some(RawServerConfig {
                host: Some("api.example.com".to_string()),
                port: Some(0),
                secure: None,
            }),
            ..valid_raw()
        };
        let config = ClientConfig::validate(raw).unwrap();
        assert_eq!(config.server.port, DEFAULT_PORT);
    }

    #[test]
    fn test_missing_auth() {
        let raw = RawConfig {
            auth: None,
            ..valid_raw()
        };
        let err = ClientConfig::validate(raw).unwrap_err();
        assert!(err.to_string().contains("\"auth\" object"));
    }

    #[test]
    fn test_null_auth_rejected() {
        let raw = RawConfig {
            auth: Some(Value::Null),
            ..valid_raw()
        };
        let err = ClientConfig::validate(raw).unwrap_err();
        assert!(err.to_string().contains("\"auth\" object"));
    }

    #[test]
    fn test_cloud_checked_before_server() {
        // Checks run in declaration order; the first failure wins
        let raw = RawConfig {
            cloud: None,
            server: None,
            auth: None,
        };
        let err = ClientConfig::validate(raw).unwrap_err();
        assert!(err.to_string().contains("\"cloud\" definition"));
    }
}
