pub mod base_url;
pub mod client;
pub mod endpoints;
pub mod fallback;
pub mod resolve;

pub use crate::domain::model::RequestOptions;
pub use crate::domain::ports::ConfigProvider;
pub use crate::utils::error::Result;
pub use base_url::ApiConfig;
pub use client::ApiClient;
pub use endpoints::Resource;
