use std::fmt::Debug;
use tracing::{debug, info, warn};

/// Receives the diagnostics a [`NodeGroupRegistry`](super::NodeGroupRegistry) produces.
///
/// Every hook defaults to doing nothing.
pub trait NodeGroupRegistryObserver: Debug {
    fn observe_added(&self, _id: &str) {}

    fn observe_duplicate_id(&self, _id: &str) {}

    fn observe_removed(&self, _id: &str) {}

    fn observe_prefix_updated(&self, _id: &str, _old_prefix: &str, _new_prefix: &str) {}

    fn observe_missing_node_group(&self, _id: &str, _operation: &'static str) {}
}

#[derive(Debug, Default, Clone, Copy)]
pub struct TracingObserver;

impl NodeGroupRegistryObserver for TracingObserver {
    fn observe_added(&self, id: &str) {
        debug!(id, "Added node group");
    }

    fn observe_duplicate_id(&self, id: &str) {
        warn!(
            id,
            "Added node group with an id that is already registered, it stays unreachable until the earlier entry is removed"
        );
    }

    fn observe_removed(&self, id: &str) {
        debug!(id, "Removed node group");
    }

    fn observe_prefix_updated(&self, id: &str, old_prefix: &str, new_prefix: &str) {
        info!(id, old_prefix, new_prefix, "Updated node group prefix");
    }

    fn observe_missing_node_group(&self, id: &str, operation: &'static str) {
        warn!(id, operation, "Node group not found");
    }
}
