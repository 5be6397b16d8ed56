//! Configuration file parsing and profile loading

pub mod preflight_toml;
pub mod profile;

pub use preflight_toml::{ColorOption, Config, OutputConfig, OutputFormat, RulesConfig};
pub use profile::{Override, Profile};
