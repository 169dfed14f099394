use crate::config::{StaticConfig, DEFAULT_HOST};
use crate::core::ConfigProvider;

pub const API_URL_VAR: &str = "NURSERY_API_URL";
pub const HOST_VAR: &str = "NURSERY_HOST";
pub const ORIGIN_VAR: &str = "NURSERY_ORIGIN";
pub const DIRECT_BACKEND_VAR: &str = "NURSERY_DIRECT_BACKEND";

/// 從環境變數讀取設定
#[derive(Debug, Clone)]
pub struct EnvConfig {
    inner: StaticConfig,
}

impl EnvConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// 以自訂查詢函式取值，測試時不必修改行程環境
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let mut inner = StaticConfig::new(non_empty(HOST_VAR).unwrap_or_else(|| DEFAULT_HOST.to_string()));
        if let Some(api_url) = lookup(API_URL_VAR) {
            inner = inner.with_api_url(api_url);
        }
        if let Some(origin) = non_empty(ORIGIN_VAR) {
            inner = inner.with_origin(origin);
        }
        if let Some(direct) = non_empty(DIRECT_BACKEND_VAR) {
            inner = inner.with_direct_backend(direct);
        }

        tracing::debug!(
            host = %inner.current_host(),
            api_url = ?inner.api_url_override(),
            "Loaded API settings from environment"
        );

        Self { inner }
    }
}

impl ConfigProvider for EnvConfig {
    fn api_url_override(&self) -> Option<&str> {
        self.inner.api_url_override()
    }

    fn current_host(&self) -> &str {
        self.inner.current_host()
    }

    fn origin(&self) -> String {
        self.inner.origin()
    }

    fn direct_backend_url(&self) -> &str {
        self.inner.direct_backend_url()
    }
}
