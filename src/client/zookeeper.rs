//! Live ZooKeeper session.
//!
//! One [`zookeeper::ZooKeeper`] session is established in the constructor and
//! used for every subsequent call; it is never transparently re-created. The
//! session's own timeout (fixed at construction) is the only timeout in play;
//! this crate adds no retry or reconnect layer on top.
//!
//! The watch callback required at connect time is registered and deliberately
//! discarded: no behavior on any session or node event.
//!
//! Nodes are created persistent with the open ACL, and writes/deletes pass an
//! unconditional version, mirroring the adapter's last-writer-wins contract.

use std::time::Duration;

use tracing::debug;
use zookeeper::{Acl, CreateMode, WatchedEvent, Watcher, ZkError, ZooKeeper};

use crate::config::ZkMapConfig;
use super::traits::{NamespaceClient, NamespaceError};

/// Watcher that drops every event on the floor.
struct DiscardEvents;

impl Watcher for DiscardEvents {
    fn handle(&self, _event: WatchedEvent) {}
}

/// A [`NamespaceClient`] backed by one live ZooKeeper session.
pub struct ZooKeeperClient {
    session: ZooKeeper,
}

impl ZooKeeperClient {
    /// Establish the session described by `config`.
    ///
    /// A chroot suffix on the connect string (`host:2181/app`) scopes every
    /// path this client sees to that subtree; the adapter itself keeps
    /// traversing from `/`.
    pub fn connect(config: &ZkMapConfig) -> Result<Self, NamespaceError> {
        let timeout = Duration::from_millis(config.session_timeout_ms);
        let session = ZooKeeper::connect(&config.connect_string, timeout, DiscardEvents)
            .map_err(|e| NamespaceError::Connection(format!("{e:?}")))?;
        debug!(
            connect_string = %config.connect_string,
            timeout_ms = config.session_timeout_ms,
            "session established"
        );
        Ok(Self { session })
    }
}

fn map_err(path: &str, err: ZkError) -> NamespaceError {
    match err {
        ZkError::NoNode => NamespaceError::NoNode(path.to_string()),
        ZkError::NodeExists => NamespaceError::NodeExists(path.to_string()),
        ZkError::NotEmpty => NamespaceError::NotEmpty(path.to_string()),
        ZkError::ConnectionLoss | ZkError::SessionExpired | ZkError::OperationTimeout => {
            NamespaceError::Connection(format!("{err:?}"))
        }
        other => NamespaceError::Backend(format!("{other:?}")),
    }
}

impl NamespaceClient for ZooKeeperClient {
    fn exists(&self, path: &str) -> Result<bool, NamespaceError> {
        match self.session.exists(path, false) {
            Ok(stat) => Ok(stat.is_some()),
            Err(e) => Err(map_err(path, e)),
        }
    }

    fn create(&self, path: &str, data: Vec<u8>) -> Result<(), NamespaceError> {
        self.session
            .create(path, data, Acl::open_unsafe().clone(), CreateMode::Persistent)
            .map(|_created| ())
            .map_err(|e| map_err(path, e))
    }

    fn set_data(&self, path: &str, data: Vec<u8>) -> Result<(), NamespaceError> {
        self.session
            .set_data(path, data, None)
            .map(|_stat| ())
            .map_err(|e| map_err(path, e))
    }

    fn get_data(&self, path: &str) -> Result<Vec<u8>, NamespaceError> {
        self.session
            .get_data(path, false)
            .map(|(data, _stat)| data)
            .map_err(|e| map_err(path, e))
    }

    fn delete(&self, path: &str) -> Result<(), NamespaceError> {
        self.session.delete(path, None).map_err(|e| map_err(path, e))
    }

    fn get_children(&self, path: &str) -> Result<Vec<String>, NamespaceError> {
        self.session
            .get_children(path, false)
            .map_err(|e| map_err(path, e))
    }

    fn close(&self) -> Result<(), NamespaceError> {
        debug!("closing session");
        self.session
            .close()
            .map_err(|e| NamespaceError::Connection(format!("{e:?}")))
    }
}
