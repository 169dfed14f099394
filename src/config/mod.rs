#[cfg(feature = "cli")]
pub mod cli;
pub mod env;
pub mod static_config;
pub mod toml_config;

#[cfg(feature = "cli")]
pub use cli::CliConfig;
pub use env::EnvConfig;
pub use static_config::StaticConfig;
pub use toml_config::TomlConfig;

/// 沒有指定主機時視為本機開發
pub const DEFAULT_HOST: &str = "localhost";
