use crate::node_groups::NodeGroupConfig;
use k8s_openapi::api::core::v1::{Node, NodeCondition, NodeSpec, NodeStatus, Taint};
use k8s_openapi::apimachinery::pkg::api::resource::Quantity;
use k8s_openapi::apimachinery::pkg::apis::meta::v1::ObjectMeta;
use std::collections::BTreeMap;

/// Label binding a synthesized node back to the node group it was created from.
pub const NODE_GROUP_ID_LABEL: &str = "nodegroup.simulator.k8s.io/id";

pub const NODE_PHASE_RUNNING: &str = "Running";

/// Builds the node described by `node_group`.
///
/// `spec.taints` is left unset unless `add_taints` is set, so it is missing from the
/// serialized object instead of being an empty list.
pub fn synthesize_node(node_group: &NodeGroupConfig) -> Node {
    Node {
        metadata: ObjectMeta {
            generate_name: Some(format!("{}-", node_group.prefix)),
            labels: Some(labels(node_group)),
            ..Default::default()
        },
        spec: Some(NodeSpec {
            taints: taints(node_group),
            ..Default::default()
        }),
        status: Some(NodeStatus {
            capacity: Some(resources(node_group)),
            allocatable: Some(resources(node_group)),
            phase: Some(NODE_PHASE_RUNNING.into()),
            conditions: Some(vec![NodeCondition {
                type_: "Ready".into(),
                status: "True".into(),
                ..Default::default()
            }]),
            ..Default::default()
        }),
    }
}

fn labels(node_group: &NodeGroupConfig) -> BTreeMap<String, String> {
    let mut labels = BTreeMap::new();

    if node_group.add_labels {
        labels.insert(node_group.label_key.clone(), node_group.label_value.clone());
    }

    // identity label goes last so a colliding custom label can't shadow it
    labels.insert(NODE_GROUP_ID_LABEL.into(), node_group.id.clone());

    labels
}

fn taints(node_group: &NodeGroupConfig) -> Option<Vec<Taint>> {
    if !node_group.add_taints {
        return None;
    }

    Some(vec![Taint {
        key: node_group.taint_key.clone(),
        value: Some(node_group.taint_value.clone()),
        effect: node_group.taint_effect.clone(),
        ..Default::default()
    }])
}

fn resources(node_group: &NodeGroupConfig) -> BTreeMap<String, Quantity> {
    let mut resources = BTreeMap::new();
    resources.insert("cpu".into(), Quantity(node_group.cpu_value.clone()));
    resources.insert("memory".into(), Quantity(node_group.memory_value.clone()));
    resources.insert("pods".into(), Quantity(node_group.pods_value.to_string()));

    resources
}
