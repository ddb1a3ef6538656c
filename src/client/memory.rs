use dashmap::DashMap;
use super::traits::{NamespaceClient, NamespaceError};

/// In-process namespace double.
///
/// Faithful to the tree rules of the real service: a node can only be created
/// under a live parent, a node with children cannot be deleted, and the root
/// `/` always exists (holding an empty payload) but is never stored as an
/// entry. Child listings return bare names in unspecified order.
pub struct InMemoryNamespace {
    nodes: DashMap<String, Vec<u8>>,
}

impl InMemoryNamespace {
    #[must_use]
    pub fn new() -> Self {
        Self {
            nodes: DashMap::new(),
        }
    }

    /// Number of live nodes (excluding the implicit root).
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Path checks the real client library would reject as bad arguments.
    fn validate(path: &str) -> Result<(), NamespaceError> {
        let ok = path == "/"
            || (path.starts_with('/') && !path.ends_with('/') && !path.contains("//"));
        if ok {
            Ok(())
        } else {
            Err(NamespaceError::Backend(format!("invalid path '{path}'")))
        }
    }

    fn parent_of(path: &str) -> &str {
        match path.rsplit_once('/') {
            Some(("", _)) => "/",
            Some((parent, _)) => parent,
            None => "/",
        }
    }

    fn node_exists(&self, path: &str) -> bool {
        path == "/" || self.nodes.contains_key(path)
    }
}

impl Default for InMemoryNamespace {
    fn default() -> Self {
        Self::new()
    }
}

impl NamespaceClient for InMemoryNamespace {
    fn exists(&self, path: &str) -> Result<bool, NamespaceError> {
        Self::validate(path)?;
        Ok(self.node_exists(path))
    }

    fn create(&self, path: &str, data: Vec<u8>) -> Result<(), NamespaceError> {
        Self::validate(path)?;
        if self.node_exists(path) {
            return Err(NamespaceError::NodeExists(path.to_string()));
        }
        let parent = Self::parent_of(path);
        if !self.node_exists(parent) {
            return Err(NamespaceError::NoNode(parent.to_string()));
        }
        self.nodes.insert(path.to_string(), data);
        Ok(())
    }

    fn set_data(&self, path: &str, data: Vec<u8>) -> Result<(), NamespaceError> {
        Self::validate(path)?;
        if !self.nodes.contains_key(path) {
            return Err(NamespaceError::NoNode(path.to_string()));
        }
        self.nodes.insert(path.to_string(), data);
        Ok(())
    }

    fn get_data(&self, path: &str) -> Result<Vec<u8>, NamespaceError> {
        Self::validate(path)?;
        if path == "/" {
            return Ok(Vec::new());
        }
        self.nodes
            .get(path)
            .map(|entry| entry.value().clone())
            .ok_or_else(|| NamespaceError::NoNode(path.to_string()))
    }

    fn delete(&self, path: &str) -> Result<(), NamespaceError> {
        Self::validate(path)?;
        if path == "/" {
            return Err(NamespaceError::Backend("cannot delete the root node".into()));
        }
        if !self.nodes.contains_key(path) {
            return Err(NamespaceError::NoNode(path.to_string()));
        }
        let has_children = self
            .nodes
            .iter()
            .any(|entry| Self::parent_of(entry.key()) == path);
        if has_children {
            return Err(NamespaceError::NotEmpty(path.to_string()));
        }
        self.nodes.remove(path);
        Ok(())
    }

    fn get_children(&self, path: &str) -> Result<Vec<String>, NamespaceError> {
        Self::validate(path)?;
        if !self.node_exists(path) {
            return Err(NamespaceError::NoNode(path.to_string()));
        }
        let children = self
            .nodes
            .iter()
            .filter(|entry| Self::parent_of(entry.key()) == path)
            .map(|entry| {
                entry
                    .key()
                    .rsplit('/')
                    .next()
                    .unwrap_or_default()
                    .to_string()
            })
            .collect();
        Ok(children)
    }

    fn close(&self) -> Result<(), NamespaceError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_namespace_is_empty() {
        let ns = InMemoryNamespace::new();
        assert!(ns.is_empty());
        assert_eq!(ns.len(), 0);
    }

    #[test]
    fn test_root_always_exists() {
        let ns = InMemoryNamespace::new();
        assert!(ns.exists("/").unwrap());
        assert_eq!(ns.get_data("/").unwrap(), Vec::<u8>::new());
    }

    #[test]
    fn test_create_and_get() {
        let ns = InMemoryNamespace::new();
        ns.create("/a", b"payload".to_vec()).unwrap();

        assert!(ns.exists("/a").unwrap());
        assert_eq!(ns.get_data("/a").unwrap(), b"payload".to_vec());
    }

    #[test]
    fn test_create_existing_fails() {
        let ns = InMemoryNamespace::new();
        ns.create("/a", vec![]).unwrap();

        let err = ns.create("/a", vec![]).unwrap_err();
        assert!(matches!(err, NamespaceError::NodeExists(_)));
    }

    #[test]
    fn test_create_without_parent_fails() {
        let ns = InMemoryNamespace::new();

        let err = ns.create("/a/b", vec![]).unwrap_err();
        assert!(matches!(err, NamespaceError::NoNode(ref p) if p == "/a"));
    }

    #[test]
    fn test_set_data_overwrites() {
        let ns = InMemoryNamespace::new();
        ns.create("/a", b"one".to_vec()).unwrap();
        ns.set_data("/a", b"two".to_vec()).unwrap();

        assert_eq!(ns.get_data("/a").unwrap(), b"two".to_vec());
    }

    #[test]
    fn test_set_data_missing_fails() {
        let ns = InMemoryNamespace::new();

        let err = ns.set_data("/ghost", vec![]).unwrap_err();
        assert!(matches!(err, NamespaceError::NoNode(_)));
    }

    #[test]
    fn test_delete_leaf() {
        let ns = InMemoryNamespace::new();
        ns.create("/a", vec![]).unwrap();
        ns.delete("/a").unwrap();

        assert!(!ns.exists("/a").unwrap());
        assert!(ns.is_empty());
    }

    #[test]
    fn test_delete_with_children_fails() {
        let ns = InMemoryNamespace::new();
        ns.create("/a", vec![]).unwrap();
        ns.create("/a/b", vec![]).unwrap();

        let err = ns.delete("/a").unwrap_err();
        assert!(matches!(err, NamespaceError::NotEmpty(_)));

        // Children-first order succeeds
        ns.delete("/a/b").unwrap();
        ns.delete("/a").unwrap();
        assert!(ns.is_empty());
    }

    #[test]
    fn test_children_are_bare_names() {
        let ns = InMemoryNamespace::new();
        ns.create("/a", vec![]).unwrap();
        ns.create("/b", vec![]).unwrap();
        ns.create("/a/c", vec![]).unwrap();

        let mut root_children = ns.get_children("/").unwrap();
        root_children.sort();
        assert_eq!(root_children, vec!["a".to_string(), "b".to_string()]);

        assert_eq!(ns.get_children("/a").unwrap(), vec!["c".to_string()]);
        assert!(ns.get_children("/b").unwrap().is_empty());
    }

    #[test]
    fn test_children_of_missing_node_fails() {
        let ns = InMemoryNamespace::new();

        let err = ns.get_children("/ghost").unwrap_err();
        assert!(matches!(err, NamespaceError::NoNode(_)));
    }

    #[test]
    fn test_malformed_paths_rejected() {
        let ns = InMemoryNamespace::new();

        for bad in ["", "a", "relative/path", "/trailing/", "/dou//ble"] {
            let err = ns.exists(bad).unwrap_err();
            assert!(matches!(err, NamespaceError::Backend(_)), "path: {bad:?}");
        }
    }

    #[test]
    fn test_concurrent_creates() {
        use std::sync::Arc;

        let ns = Arc::new(InMemoryNamespace::new());
        let mut handles = vec![];

        for worker in 0..8 {
            let ns = ns.clone();
            handles.push(std::thread::spawn(move || {
                for i in 0..50 {
                    ns.create(&format!("/w{worker}-{i}"), vec![]).unwrap();
                }
            }));
        }
        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(ns.len(), 400);
    }
}
