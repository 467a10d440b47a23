use super::NodeGroupConfig;
use crate::error::{Error, Result};
use crate::utils;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use tracing::info;

#[tracing::instrument(name = "load_node_groups", skip(path), fields(path = %path.as_ref().display()))]
pub fn load_node_groups(path: impl AsRef<Path>) -> Result<Vec<NodeGroupConfig>> {
    let files = utils::scan_for_files(&path)?;
    let node_groups = utils::parse_files(files, parse_node_group_file);

    info!(count = node_groups.len(), "Loaded node groups");

    Ok(node_groups)
}

pub fn parse_node_group_file(path: &Path) -> Result<NodeGroupConfig> {
    let file = File::open(path).map_err(|source| Error::Io {
        path: path.into(),
        source,
    })?;

    serde_yaml::from_reader(BufReader::new(file)).map_err(|source| Error::NodeGroupFile {
        path: path.into(),
        source,
    })
}
