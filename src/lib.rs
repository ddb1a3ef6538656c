//! # zk-map
//!
//! A map-style adapter over a ZooKeeper hierarchical namespace.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                         Caller                              │
//! │  • Map surface: len / get / insert / remove / entries ...   │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │                      ZkMap adapter                          │
//! │  • Translates each call into primitive namespace ops        │
//! │  • Breadth-first work-queue traversal for enumeration       │
//! │  • Atomic entry tally (opportunistic, never reconciled)     │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │                NamespaceClient (one session)                │
//! │  • exists / create / set-data / get-data / delete /         │
//! │    get-children, all blocking round trips                   │
//! │  • Live ZooKeeper session, or in-process tree double        │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! Everything below the client trait (consensus, sessions, watches, the wire
//! format) belongs to the coordination service and is not reimplemented here.
//! There is no retry, reconnect, caching, or transaction layer: every
//! operation is a direct pass-through, and compound operations (an existence
//! check followed by a read or write) are exactly as racy as that implies.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use zk_map::{ZkMap, ZkMapConfig};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ZkMapConfig {
//!         connect_string: "localhost:2181".into(),
//!         session_timeout_ms: 3_000,
//!     };
//!     let map = ZkMap::connect(&config)?;
//!
//!     // Keys must begin with a / character
//!     map.insert("/node2", "node 2 data")?;
//!     println!("{:?}", map.get("/node2")?);
//!
//!     map.close()?;
//!     Ok(())
//! }
//! ```
//!
//! For tests (and anything that shouldn't need a server), build the adapter
//! over the in-process double instead:
//!
//! ```
//! use std::sync::Arc;
//! use zk_map::{InMemoryNamespace, ZkMap};
//!
//! let map = ZkMap::with_client(Arc::new(InMemoryNamespace::new()));
//! assert_eq!(map.insert("/a", "1").unwrap(), None);
//! ```
//!
//! ## Modules
//!
//! - [`map`]: the [`ZkMap`] adapter itself
//! - [`client`]: the [`NamespaceClient`] seam plus the live and in-memory
//!   implementations
//! - [`config`]: [`ZkMapConfig`]
//! - [`metrics`]: `metrics`-crate instrumentation helpers

pub mod config;
pub mod client;
pub mod map;
pub mod metrics;

pub use config::ZkMapConfig;
pub use map::ZkMap;
pub use client::traits::{NamespaceClient, NamespaceError};
pub use client::memory::InMemoryNamespace;
pub use client::zookeeper::ZooKeeperClient;
pub use metrics::LatencyTimer;
