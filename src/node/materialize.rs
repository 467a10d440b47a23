use super::name::NameGenerator;
use super::synthesizer::synthesize_node;
use crate::node_groups::NodeGroupConfig;
use k8s_openapi::api::core::v1::Node;
use tracing::debug;

/// Synthesizes `count` nodes (one when unset) for `node_group`.
///
/// With a name generator every node gets a concrete `metadata.name` derived from its
/// `generateName`, otherwise naming is left to whoever consumes the nodes.
pub fn materialize_nodes(
    node_group: &NodeGroupConfig,
    names: Option<&dyn NameGenerator>,
) -> Vec<Node> {
    let template = synthesize_node(node_group);
    let count = node_group.count.unwrap_or(1);

    debug!(id = node_group.id.as_str(), count, "Materializing nodes");

    (0..count)
        .map(|_| {
            let mut node = template.clone();
            if let Some(names) = names {
                node.metadata.name = node
                    .metadata
                    .generate_name
                    .as_deref()
                    .map(|generate_name| names.generate_name(generate_name));
            }

            node
        })
        .collect()
}
