use thiserror::Error;

/// Errors surfaced by a [`NamespaceClient`].
///
/// `NoNode` is the only variant the adapter ever translates into a normal
/// result (an existence check answering "false", a lookup answering `None`).
/// Every other variant is fatal to the calling operation and propagates
/// unchanged; there is no retry or fallback layer in this crate.
#[derive(Error, Debug)]
pub enum NamespaceError {
    #[error("no node at '{0}'")]
    NoNode(String),
    #[error("node already exists at '{0}'")]
    NodeExists(String),
    #[error("node at '{0}' still has children")]
    NotEmpty(String),
    #[error("session failure: {0}")]
    Connection(String),
    #[error("coordination backend error: {0}")]
    Backend(String),
}

/// The primitive operations of the coordination service's namespace.
///
/// This is the seam between the adapter and the remote service: the live
/// implementation holds one session for its whole lifetime, and the
/// in-process [`InMemoryNamespace`](crate::InMemoryNamespace) double lets the
/// mapping contract be tested without a server.
///
/// Paths are absolute (`/a/b`); `get_children` returns bare child *names*,
/// and joining them back onto the parent path is the caller's job.
pub trait NamespaceClient: Send + Sync {
    /// Does a node exist at `path`? Absence is a normal answer, not an error.
    fn exists(&self, path: &str) -> Result<bool, NamespaceError>;

    /// Create a persistent, openly-writable node holding `data`.
    fn create(&self, path: &str, data: Vec<u8>) -> Result<(), NamespaceError>;

    /// Overwrite the node's payload regardless of its current version.
    fn set_data(&self, path: &str, data: Vec<u8>) -> Result<(), NamespaceError>;

    /// Read the node's payload.
    fn get_data(&self, path: &str) -> Result<Vec<u8>, NamespaceError>;

    /// Delete the node regardless of its current version.
    fn delete(&self, path: &str) -> Result<(), NamespaceError>;

    /// Names of the node's direct children, in whatever order the service
    /// reports them.
    fn get_children(&self, path: &str) -> Result<Vec<String>, NamespaceError>;

    /// Release the session. Further calls are undefined.
    fn close(&self) -> Result<(), NamespaceError>;
}
