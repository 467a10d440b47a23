use crate::error::{Error, Result};
use k8s_openapi::api::core::v1::Node;
use serde::Deserialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Yaml,
    Json,
}

impl Default for OutputFormat {
    fn default() -> Self {
        OutputFormat::Yaml
    }
}

/// Renders nodes as a multi document YAML stream or as a JSON array.
pub fn render(nodes: &[Node], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Yaml => {
            let mut out = String::new();
            for node in nodes {
                let document = serde_yaml::to_string(node).map_err(Error::YamlRendering)?;

                out.push_str("---\n");
                out.push_str(document.trim_start_matches("---\n").trim_end());
                out.push('\n');
            }

            Ok(out)
        }
        OutputFormat::Json => serde_json::to_string_pretty(nodes).map_err(Error::JsonRendering),
    }
}
