use anyhow::Context;
use node_group_simulator::config::load_config;
use node_group_simulator::node::{materialize_nodes, render, NameGenerator, RandomSuffix};
use node_group_simulator::node_groups::NodeGroupRegistry;
use tracing::info;
use tracing::subscriber::set_global_default;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::{EnvFilter, Registry};

fn init_logging() -> anyhow::Result<()> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr);

    let subscriber = Registry::default().with(env_filter).with(fmt_layer);

    set_global_default(subscriber).context("Failed to set subscriber")?;

    Ok(())
}

fn main() -> anyhow::Result<()> {
    init_logging()?;
    let config = load_config()?;

    let mut registry = NodeGroupRegistry::new();
    let seeded = registry
        .seed_from_dir(&config.node_groups_path)
        .with_context(|| {
            format!(
                "Failed to seed node groups from {}",
                config.node_groups_path.display()
            )
        })?;

    info!(seeded, "Seeded {}", registry);

    let random_suffix = RandomSuffix::default();
    let names: Option<&dyn NameGenerator> = if config.name_generation {
        Some(&random_suffix)
    } else {
        None
    };

    let nodes: Vec<_> = registry
        .list()
        .iter()
        .flat_map(|node_group| materialize_nodes(node_group, names))
        .collect();

    info!(count = nodes.len(), "Materialized nodes");

    println!("{}", render(&nodes, config.output.format)?.trim_end());

    Ok(())
}
