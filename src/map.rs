// Copyright (c) 2025-2026 Adrian Robinson. Licensed under the AGPL-3.0.
// See LICENSE file in the project root for full license text.

//! The namespace adapter.
//!
//! [`ZkMap`] presents a ZooKeeper hierarchical namespace as a flat map of
//! absolute paths to text values. Every operation is one blocking round trip
//! to the coordination service (or a fixed short sequence of them); nothing is
//! cached, and enumeration re-reads the whole namespace from the network each
//! time.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use zk_map::{InMemoryNamespace, ZkMap};
//!
//! let map = ZkMap::with_client(Arc::new(InMemoryNamespace::new()));
//!
//! assert!(map.is_empty());
//! assert_eq!(map.insert("/app", "config").unwrap(), None);
//! assert_eq!(map.get("/app").unwrap().as_deref(), Some("config"));
//! assert_eq!(map.len(), 1);
//! ```

use std::collections::{HashSet, VecDeque};
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;

use tracing::debug;

use crate::client::traits::{NamespaceClient, NamespaceError};
use crate::client::zookeeper::ZooKeeperClient;
use crate::config::ZkMapConfig;
use crate::metrics;

/// Map-style view of a coordination-service namespace.
///
/// Keys are absolute paths beginning with `/`; values are text. The adapter
/// performs no path validation of its own: malformed keys surface as errors
/// from the underlying call.
///
/// # Entry counter
///
/// [`len`](ZkMap::len) reports a locally tracked tally, not a live remote
/// count: it starts at zero when the adapter is constructed, moves only on
/// creates and deletes that flow through this instance, and is never
/// reconciled with the remote namespace. Over a namespace that already holds
/// entries it is wrong from the start. Removing such pre-existing entries can
/// push the raw tally negative; `len` clamps at zero.
pub struct ZkMap {
    client: Arc<dyn NamespaceClient>,
    tracked: AtomicI64,
}

impl ZkMap {
    /// Connect a live session and wrap it.
    ///
    /// The session lives as long as the adapter; release it with
    /// [`close`](ZkMap::close).
    pub fn connect(config: &ZkMapConfig) -> Result<Self, NamespaceError> {
        let client = ZooKeeperClient::connect(config)?;
        Ok(Self::with_client(Arc::new(client)))
    }

    /// Wrap an already-built client (tests, alternative backends).
    #[must_use]
    pub fn with_client(client: Arc<dyn NamespaceClient>) -> Self {
        Self {
            client,
            tracked: AtomicI64::new(0),
        }
    }

    /// Locally tracked entry count. See the type-level caveat.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tracked.load(Ordering::Acquire).max(0) as usize
    }

    /// `len() == 0`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// One existence check against the exact path.
    pub fn contains_key(&self, key: &str) -> Result<bool, NamespaceError> {
        let _timer = metrics::LatencyTimer::new("contains_key");
        match self.client.exists(key) {
            Ok(found) => {
                metrics::record_operation("contains_key", if found { "hit" } else { "miss" });
                Ok(found)
            }
            Err(e) => {
                metrics::record_operation("contains_key", "error");
                Err(e)
            }
        }
    }

    /// Walk the namespace breadth-first until a node's payload equals
    /// `value`, comparing as text.
    ///
    /// Returns on the first match; the worst case reads every node. Nothing
    /// is memoized, so each call traverses the network afresh.
    pub fn contains_value(&self, value: &str) -> Result<bool, NamespaceError> {
        let _timer = metrics::LatencyTimer::new("contains_value");
        let mut visited = 0usize;
        let mut pending = self.root_frontier()?;
        while let Some(path) = pending.pop_front() {
            let data = self.client.get_data(&path)?;
            visited += 1;
            if text(data) == value {
                metrics::record_traversal_nodes(visited);
                metrics::record_operation("contains_value", "hit");
                return Ok(true);
            }
            for child in self.client.get_children(&path)? {
                pending.push_back(join_path(&path, &child));
            }
        }
        metrics::record_traversal_nodes(visited);
        metrics::record_operation("contains_value", "miss");
        Ok(false)
    }

    /// Look up the value at `key`.
    ///
    /// Two round trips: an existence check, then the read. The key can vanish
    /// between them; that race is accepted, and the read then fails with
    /// [`NamespaceError::NoNode`].
    ///
    /// # Example
    ///
    /// ```
    /// use std::sync::Arc;
    /// use zk_map::{InMemoryNamespace, ZkMap};
    ///
    /// let map = ZkMap::with_client(Arc::new(InMemoryNamespace::new()));
    /// assert_eq!(map.get("/missing").unwrap(), None);
    ///
    /// map.insert("/node", "data").unwrap();
    /// assert_eq!(map.get("/node").unwrap().as_deref(), Some("data"));
    /// ```
    pub fn get(&self, key: &str) -> Result<Option<String>, NamespaceError> {
        let _timer = metrics::LatencyTimer::new("get");
        if !self.client.exists(key)? {
            metrics::record_operation("get", "miss");
            return Ok(None);
        }
        match self.client.get_data(key) {
            Ok(data) => {
                metrics::record_operation("get", "hit");
                Ok(Some(text(data)))
            }
            Err(e) => {
                metrics::record_operation("get", "error");
                Err(e)
            }
        }
    }

    /// Write `value` at `key`, returning the previous value if the key
    /// already existed.
    ///
    /// An existing key is read back then overwritten unconditionally (no
    /// version check), three round trips in total. A new key is created
    /// persistent with the open ACL, and the local entry counter moves up by
    /// one.
    ///
    /// # Example
    ///
    /// ```
    /// use std::sync::Arc;
    /// use zk_map::{InMemoryNamespace, ZkMap};
    ///
    /// let map = ZkMap::with_client(Arc::new(InMemoryNamespace::new()));
    ///
    /// assert_eq!(map.insert("/node", "one").unwrap(), None);
    /// assert_eq!(map.insert("/node", "two").unwrap().as_deref(), Some("one"));
    /// assert_eq!(map.len(), 1);
    /// ```
    pub fn insert(&self, key: &str, value: &str) -> Result<Option<String>, NamespaceError> {
        let _timer = metrics::LatencyTimer::new("insert");
        if self.client.exists(key)? {
            let previous = text(self.client.get_data(key)?);
            self.client.set_data(key, value.as_bytes().to_vec())?;
            metrics::record_operation("insert", "overwrite");
            debug!(key, "overwrote node");
            Ok(Some(previous))
        } else {
            self.client.create(key, value.as_bytes().to_vec())?;
            let tally = self.tracked.fetch_add(1, Ordering::AcqRel) + 1;
            metrics::set_tracked_entries(tally.max(0) as usize);
            metrics::record_operation("insert", "create");
            debug!(key, "created node");
            Ok(None)
        }
    }

    /// Delete `key`, returning the value it held, or `None` if it was absent.
    ///
    /// The delete is unconditional (no version check); a successful delete
    /// moves the local entry counter down by one.
    pub fn remove(&self, key: &str) -> Result<Option<String>, NamespaceError> {
        let _timer = metrics::LatencyTimer::new("remove");
        if !self.client.exists(key)? {
            metrics::record_operation("remove", "miss");
            return Ok(None);
        }
        let previous = text(self.client.get_data(key)?);
        self.client.delete(key)?;
        let tally = self.tracked.fetch_sub(1, Ordering::AcqRel) - 1;
        metrics::set_tracked_entries(tally.max(0) as usize);
        metrics::record_operation("remove", "removed");
        debug!(key, "removed node");
        Ok(Some(previous))
    }

    /// One [`insert`](ZkMap::insert) per input pair, in the input's iteration
    /// order. Not atomic: a failure partway leaves the earlier writes in
    /// place.
    pub fn insert_all<I, K, V>(&self, entries: I) -> Result<(), NamespaceError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        for (key, value) in entries {
            self.insert(key.as_ref(), value.as_ref())?;
        }
        Ok(())
    }

    /// Remove every entry in a fresh [`entries`](ZkMap::entries) snapshot.
    ///
    /// Not atomic, and not guarded against concurrent mutation during the
    /// loop. Deletion follows the snapshot's set order, so a parent can be
    /// attempted before its children and fail with
    /// [`NamespaceError::NotEmpty`], aborting partway.
    pub fn clear(&self) -> Result<(), NamespaceError> {
        let _timer = metrics::LatencyTimer::new("clear");
        for (key, _value) in self.entries()? {
            self.remove(&key)?;
        }
        Ok(())
    }

    /// Keys of a fresh enumeration snapshot.
    pub fn keys(&self) -> Result<HashSet<String>, NamespaceError> {
        Ok(self.entries()?.into_iter().map(|(key, _)| key).collect())
    }

    /// Values of a fresh enumeration snapshot.
    ///
    /// Returns a set, so distinct keys holding equal values collapse to one
    /// element.
    pub fn values(&self) -> Result<HashSet<String>, NamespaceError> {
        Ok(self.entries()?.into_iter().map(|(_, value)| value).collect())
    }

    /// Snapshot the whole namespace as (path, value) pairs.
    ///
    /// Breadth-first from the root: the root's children and every descendant
    /// become one entry each; the root node itself does not. No depth limit
    /// and no cycle protection; the namespace is a strict tree.
    ///
    /// # Example
    ///
    /// ```
    /// use std::sync::Arc;
    /// use zk_map::{InMemoryNamespace, ZkMap};
    ///
    /// let map = ZkMap::with_client(Arc::new(InMemoryNamespace::new()));
    /// map.insert("/a", "1").unwrap();
    /// map.insert("/b", "2").unwrap();
    /// map.insert("/a/c", "3").unwrap();
    ///
    /// let entries = map.entries().unwrap();
    /// assert_eq!(entries.len(), 3);
    /// assert!(entries.contains(&("/a/c".to_string(), "3".to_string())));
    /// ```
    pub fn entries(&self) -> Result<HashSet<(String, String)>, NamespaceError> {
        let _timer = metrics::LatencyTimer::new("entries");
        let mut found = HashSet::new();
        let mut pending = self.root_frontier()?;
        while let Some(path) = pending.pop_front() {
            let value = text(self.client.get_data(&path)?);
            for child in self.client.get_children(&path)? {
                pending.push_back(join_path(&path, &child));
            }
            found.insert((path, value));
        }
        metrics::record_traversal_nodes(found.len());
        Ok(found)
    }

    /// Release the session. The adapter is unusable afterwards.
    pub fn close(&self) -> Result<(), NamespaceError> {
        self.client.close()
    }

    /// Initial work queue for a traversal: the root's children as full paths.
    fn root_frontier(&self) -> Result<VecDeque<String>, NamespaceError> {
        Ok(self
            .client
            .get_children("/")?
            .into_iter()
            .map(|name| join_path("/", &name))
            .collect())
    }
}

fn join_path(parent: &str, child: &str) -> String {
    if parent == "/" {
        format!("/{child}")
    } else {
        format!("{parent}/{child}")
    }
}

fn text(data: Vec<u8>) -> String {
    // Own writes are always valid UTF-8; foreign binary nodes degrade to
    // replacement characters instead of failing the whole traversal.
    String::from_utf8_lossy(&data).into_owned()
}
