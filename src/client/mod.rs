//! Coordination-service clients.
//!
//! [`traits::NamespaceClient`] defines the primitive namespace operations the
//! adapter is built on. Two implementations ship with the crate:
//!
//! - [`zookeeper::ZooKeeperClient`]: one live session against a ZooKeeper
//!   ensemble
//! - [`memory::InMemoryNamespace`]: an in-process tree double for tests and
//!   doctests

pub mod traits;
pub mod zookeeper;
pub mod memory;
