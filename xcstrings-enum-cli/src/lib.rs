//! CLI library for testing purposes

pub mod config;
pub mod generate;
pub mod options;
pub mod validation;

pub use config::{FileConfig, load_config, parse_config};
pub use generate::run_generate_command;
pub use options::{CliOptions, OutputTarget, Settings};
