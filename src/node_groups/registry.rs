use super::file::load_node_groups;
use super::observer::{NodeGroupRegistryObserver, TracingObserver};
use super::NodeGroupConfig;
use crate::node::synthesize_node;
use k8s_openapi::api::core::v1::Node;
use std::fmt;
use std::path::Path;

/// Ordered in-memory collection of node group configurations.
///
/// Lookups are linear scans in insertion order and the first entry with a matching id
/// wins. Adding an id that is already present does not fail, the later entry just
/// stays unreachable by id until the earlier one is removed.
///
/// Entries are only handed out as shared borrows, so `update_prefix` is the single
/// point where an entry changes after it was added.
#[derive(Debug)]
pub struct NodeGroupRegistry {
    node_groups: Vec<NodeGroupConfig>,
    observer: Box<dyn NodeGroupRegistryObserver>,
}

impl NodeGroupRegistry {
    pub fn new() -> Self {
        Self::with_observer(TracingObserver)
    }

    pub fn with_observer(observer: impl NodeGroupRegistryObserver + 'static) -> Self {
        Self {
            node_groups: vec![],
            observer: Box::new(observer),
        }
    }

    pub fn list(&self) -> &[NodeGroupConfig] {
        &self.node_groups
    }

    pub fn add(&mut self, node_group: NodeGroupConfig) {
        if self.get(&node_group.id).is_some() {
            self.observer.observe_duplicate_id(&node_group.id);
        }

        self.observer.observe_added(&node_group.id);
        self.node_groups.push(node_group);
    }

    pub fn get(&self, id: &str) -> Option<&NodeGroupConfig> {
        self.node_groups.iter().find(|node_group| node_group.id == id)
    }

    /// Removes the first entry with the given id. Unknown ids are ignored.
    pub fn remove(&mut self, id: &str) -> Option<NodeGroupConfig> {
        let index = self
            .node_groups
            .iter()
            .position(|node_group| node_group.id == id)?;

        let removed = self.node_groups.remove(index);
        self.observer.observe_removed(id);

        Some(removed)
    }

    pub fn update_prefix(&mut self, id: &str, new_prefix: impl Into<String>) -> bool {
        let node_group = match self
            .node_groups
            .iter_mut()
            .find(|node_group| node_group.id == id)
        {
            Some(node_group) => node_group,
            None => {
                self.observer.observe_missing_node_group(id, "update_prefix");
                return false;
            }
        };

        let old_prefix = std::mem::replace(&mut node_group.prefix, new_prefix.into());
        self.observer
            .observe_prefix_updated(id, &old_prefix, &node_group.prefix);

        true
    }

    /// Synthesizes a node from the entry registered under `id`.
    ///
    /// Returns `None` and notifies the observer when no such entry exists.
    pub fn create_node(&self, id: &str) -> Option<Node> {
        match self.get(id) {
            Some(node_group) => Some(synthesize_node(node_group)),
            None => {
                self.observer.observe_missing_node_group(id, "create_node");
                None
            }
        }
    }

    /// Adds every node group found in `path`, ordered by file name.
    pub fn seed_from_dir(&mut self, path: impl AsRef<Path>) -> crate::Result<usize> {
        let node_groups = load_node_groups(path)?;
        let seeded = node_groups.len();

        for node_group in node_groups {
            self.add(node_group);
        }

        Ok(seeded)
    }
}

impl Default for NodeGroupRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for NodeGroupRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NodeGroupRegistry ({} node groups)", self.node_groups.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node_groups::fixtures::node_group;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Debug, Default, Clone)]
    struct RecordingObserver(Rc<RefCell<Vec<String>>>);

    impl RecordingObserver {
        fn events(&self) -> Vec<String> {
            self.0.borrow().clone()
        }
    }

    impl NodeGroupRegistryObserver for RecordingObserver {
        fn observe_duplicate_id(&self, id: &str) {
            self.0.borrow_mut().push(format!("duplicate {}", id));
        }

        fn observe_missing_node_group(&self, id: &str, operation: &'static str) {
            self.0
                .borrow_mut()
                .push(format!("missing {} in {}", id, operation));
        }
    }

    #[test]
    fn test_get_returns_added_entry() {
        let mut registry = NodeGroupRegistry::new();
        let mut entry = node_group("g1");
        entry.price_per_hour = Some("0.12".into());
        entry.count = Some(4);

        registry.add(entry.clone());

        assert_eq!(Some(&entry), registry.get("g1"));
        assert_eq!(None, registry.get("g2"));
    }

    #[test]
    fn test_list_preserves_insertion_order() {
        let mut registry = NodeGroupRegistry::new();
        for id in &["c", "a", "b"] {
            registry.add(node_group(id));
        }

        let ids: Vec<_> = registry.list().iter().map(|g| g.id.as_str()).collect();
        assert_eq!(vec!["c", "a", "b"], ids);
    }

    #[test]
    fn test_remove_deletes_entry() {
        let mut registry = NodeGroupRegistry::new();
        registry.add(node_group("g1"));
        registry.add(node_group("g2"));

        let removed = registry.remove("g1");

        assert_eq!(Some("g1"), removed.as_ref().map(|g| g.id.as_str()));
        assert_eq!(None, registry.get("g1"));
        assert!(registry.list().iter().all(|g| g.id != "g1"));
        assert_eq!(1, registry.list().len());
    }

    #[test]
    fn test_remove_unknown_id_is_noop() {
        let mut registry = NodeGroupRegistry::new();
        registry.add(node_group("g1"));

        assert_eq!(None, registry.remove("nope"));
        assert_eq!(1, registry.list().len());
    }

    #[test]
    fn test_update_prefix_is_idempotent() {
        let mut registry = NodeGroupRegistry::new();
        registry.add(node_group("g1"));

        assert!(registry.update_prefix("g1", "slow"));
        assert_eq!(Some("slow"), registry.get("g1").map(|g| g.prefix.as_str()));

        assert!(registry.update_prefix("g1", "slow"));
        assert_eq!(Some("slow"), registry.get("g1").map(|g| g.prefix.as_str()));
    }

    #[test]
    fn test_update_prefix_reports_unknown_id() {
        let observer = RecordingObserver::default();
        let mut registry = NodeGroupRegistry::with_observer(observer.clone());

        assert!(!registry.update_prefix("g1", "slow"));
        assert_eq!(vec!["missing g1 in update_prefix"], observer.events());
    }

    #[test]
    fn test_duplicate_ids_resolve_to_first_entry() {
        let observer = RecordingObserver::default();
        let mut registry = NodeGroupRegistry::with_observer(observer.clone());
        let mut second = node_group("g1");
        second.prefix = "second".into();

        registry.add(node_group("g1"));
        registry.add(second);

        assert_eq!(2, registry.list().len());
        assert_eq!(Some("fast"), registry.get("g1").map(|g| g.prefix.as_str()));
        assert_eq!(vec!["duplicate g1"], observer.events());

        registry.remove("g1");
        assert_eq!(Some("second"), registry.get("g1").map(|g| g.prefix.as_str()));
    }

    #[test]
    fn test_create_node_uses_current_prefix() {
        let mut registry = NodeGroupRegistry::new();
        registry.add(node_group("g1"));
        registry.update_prefix("g1", "renamed");

        let node = registry.create_node("g1");

        assert_eq!(
            Some("renamed-"),
            node.as_ref()
                .and_then(|n| n.metadata.generate_name.as_deref())
        );
    }

    #[test]
    fn test_create_node_for_missing_id() {
        let observer = RecordingObserver::default();
        let registry = NodeGroupRegistry::with_observer(observer.clone());

        assert_eq!(None, registry.create_node("does-not-exist"));
        assert!(registry.list().is_empty());
        assert_eq!(
            vec!["missing does-not-exist in create_node"],
            observer.events()
        );
    }

    #[test]
    fn test_seed_from_dir_appends_after_existing_entries(
    ) -> std::result::Result<(), Box<dyn std::error::Error>> {
        let dir = tempfile::tempdir()?;
        std::fs::write(
            dir.path().join("slow.yml"),
            "id: g2\nprefix: slow\ncpuValue: \"2\"\nmemoryValue: 4Gi\npodsValue: 30\n",
        )?;

        let mut registry = NodeGroupRegistry::new();
        registry.add(node_group("g1"));

        assert_eq!(1, registry.seed_from_dir(dir.path())?);

        let ids: Vec<_> = registry.list().iter().map(|g| g.id.as_str()).collect();
        assert_eq!(vec!["g1", "g2"], ids);

        Ok(())
    }

    #[test]
    fn test_create_node_does_not_mutate_registry() {
        let mut registry = NodeGroupRegistry::new();
        registry.add(node_group("g1"));

        let _ = registry.create_node("g1");

        assert_eq!(Some(&node_group("g1")), registry.get("g1"));
        assert_eq!(1, registry.list().len());
    }
}
