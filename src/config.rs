use crate::node::OutputFormat;
use anyhow::Context;
use serde::Deserialize;
use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

#[derive(Deserialize, Debug)]
#[serde(default)]
pub struct Config {
    pub node_groups_path: PathBuf,
    pub output: Output,
    pub name_generation: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            node_groups_path: "node-groups".into(),
            output: Default::default(),
            name_generation: false,
        }
    }
}

#[derive(Deserialize, Debug, Default)]
#[serde(default)]
pub struct Output {
    pub format: OutputFormat,
}

pub fn load_config() -> anyhow::Result<Config> {
    let config_path = get_config_path();
    let file = File::open(&config_path)
        .with_context(|| format!("Failed to open config file {}", &config_path))?;

    let config = serde_yaml::from_reader(BufReader::new(file))
        .with_context(|| format!("Failed to parse config file {}", &config_path))?;

    Ok(config)
}

fn get_config_path() -> String {
    use std::env;
    use tracing::info;

    env::var("APP_CONFIG").unwrap_or_else(|e| {
        info!(
            error = format!("{:?}", e).as_str(),
            "Missing or invalid APP_CONFIG env var, fallback to config.yml"
        );
        "config.yml".to_string()
    })
}
