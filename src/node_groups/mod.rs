mod file;
mod observer;
mod registry;

use serde::{Deserialize, Serialize};

pub use file::{load_node_groups, parse_node_group_file};
pub use observer::{NodeGroupRegistryObserver, TracingObserver};
pub use registry::NodeGroupRegistry;

/// Template for a class of simulated nodes.
///
/// Taint fields are only read when `add_taints` is set, label fields only when
/// `add_labels` is set. `price_per_hour` and `count` are informational and never
/// influence the synthesized node.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeGroupConfig {
    pub id: String,
    pub prefix: String,
    pub cpu_value: String,
    pub memory_value: String,
    pub pods_value: u32,
    #[serde(default)]
    pub add_taints: bool,
    #[serde(default)]
    pub taint_key: String,
    #[serde(default)]
    pub taint_value: String,
    #[serde(default)]
    pub taint_effect: String,
    #[serde(default)]
    pub add_labels: bool,
    #[serde(default)]
    pub label_key: String,
    #[serde(default)]
    pub label_value: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_per_hour: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub count: Option<u32>,
}
