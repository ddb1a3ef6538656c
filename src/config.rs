//! Configuration for the namespace adapter.
//!
//! # Example
//!
//! ```
//! use zk_map::ZkMapConfig;
//!
//! // Minimal config (uses defaults)
//! let config = ZkMapConfig::default();
//! assert_eq!(config.connect_string, "127.0.0.1:2181");
//! assert_eq!(config.session_timeout_ms, 3_000);
//!
//! // Full config
//! let config = ZkMapConfig {
//!     connect_string: "zk1:2181,zk2:2181/app".into(),
//!     session_timeout_ms: 10_000,
//! };
//! ```

use serde::Deserialize;

/// Configuration for [`ZkMap::connect`](crate::ZkMap::connect).
///
/// The connect string may name several ensemble members and may end with a
/// chroot path (`host:2181/app`) to scope the whole adapter to a subtree.
/// The session timeout is handed to the client library as-is; it is the only
/// cancellation/timeout mechanism the adapter has.
#[derive(Debug, Clone, Deserialize)]
pub struct ZkMapConfig {
    /// Ensemble address string (e.g. `"127.0.0.1:2181"`)
    #[serde(default = "default_connect_string")]
    pub connect_string: String,

    /// Session timeout in milliseconds
    #[serde(default = "default_session_timeout_ms")]
    pub session_timeout_ms: u64,
}

fn default_connect_string() -> String {
    "127.0.0.1:2181".to_string()
}

fn default_session_timeout_ms() -> u64 {
    3_000
}

impl Default for ZkMapConfig {
    fn default() -> Self {
        Self {
            connect_string: default_connect_string(),
            session_timeout_ms: default_session_timeout_ms(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ZkMapConfig::default();
        assert_eq!(config.connect_string, "127.0.0.1:2181");
        assert_eq!(config.session_timeout_ms, 3_000);
    }

    #[test]
    fn test_deserialize_partial() {
        let config: ZkMapConfig =
            serde_json::from_str(r#"{"connect_string": "zk1:2181,zk2:2181"}"#).unwrap();
        assert_eq!(config.connect_string, "zk1:2181,zk2:2181");
        assert_eq!(config.session_timeout_ms, 3_000);
    }

    #[test]
    fn test_deserialize_empty_object_uses_defaults() {
        let config: ZkMapConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config.connect_string, "127.0.0.1:2181");
    }
}
