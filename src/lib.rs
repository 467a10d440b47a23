pub mod config;
pub mod error;
pub mod node;
pub mod node_groups;
mod utils;

pub use error::{Error, Result};
