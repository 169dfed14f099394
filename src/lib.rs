pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::config::{EnvConfig, StaticConfig, TomlConfig};
pub use crate::core::{ApiClient, ApiConfig, ConfigProvider, RequestOptions, Resource};
pub use crate::utils::error::{ApiError, Result};
