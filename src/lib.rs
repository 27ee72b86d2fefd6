pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub mod runner;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::{cli::LocalStorage, toml_config::TomlConfig, ConversionConfig};
pub use core::{etl::EtlEngine, pipeline::ScopPipeline, turtle::TurtleEmitter};
pub use domain::model::{DescriptionPolicy, Taxonomy};
pub use utils::error::{Result, ScopError};
