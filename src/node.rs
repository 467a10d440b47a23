mod materialize;
mod name;
mod render;
mod synthesizer;

pub use materialize::materialize_nodes;
pub use name::{NameGenerator, RandomSuffix};
pub use render::{render, OutputFormat};
pub use synthesizer::{synthesize_node, NODE_GROUP_ID_LABEL, NODE_PHASE_RUNNING};
