use std::path::PathBuf;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Failed to read {path:?}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to parse node group file {path:?}")]
    NodeGroupFile {
        path: PathBuf,
        source: serde_yaml::Error,
    },
    #[error("Failed to render nodes as yaml")]
    YamlRendering(#[source] serde_yaml::Error),
    #[error("Failed to render nodes as json")]
    JsonRendering(#[source] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
