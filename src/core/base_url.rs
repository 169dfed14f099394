use crate::domain::ports::ConfigProvider;

/// 本機開發時後端直接監聽的位址
pub const DIRECT_BACKEND_URL: &str = "http://localhost:5000/api";

/// 反向代理後的相對 API 路徑
pub const PROXY_PATH: &str = "/api";

pub fn is_loopback(host: &str) -> bool {
    host.eq_ignore_ascii_case("localhost") || host == "127.0.0.1"
}

/// 決定 API 基底 URL
///
/// 優先順序：
/// 1. 非空的覆寫值，原樣使用
/// 2. 主機為 loopback 時使用 [`DIRECT_BACKEND_URL`]
/// 3. 其餘情況使用 [`PROXY_PATH`]，交給反向代理處理
pub fn resolve_base_url(override_url: Option<&str>, host: &str) -> String {
    match override_url {
        Some(value) if !value.trim().is_empty() => value.to_string(),
        _ if is_loopback(host) => DIRECT_BACKEND_URL.to_string(),
        _ => PROXY_PATH.to_string(),
    }
}

/// 啟動時解析一次的 API 設定，之後不再變動
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: String,
    host: String,
    origin: String,
    direct_backend_url: String,
}

impl ApiConfig {
    pub fn from_provider<C: ConfigProvider + ?Sized>(provider: &C) -> Self {
        let host = provider.current_host().to_string();
        let base_url = resolve_base_url(provider.api_url_override(), &host);

        tracing::debug!(
            host = %host,
            base_url = %base_url,
            overridden = provider.api_url_override().is_some_and(|v| !v.trim().is_empty()),
            "Resolved API base URL"
        );

        Self {
            base_url,
            host,
            origin: provider.origin(),
            direct_backend_url: provider.direct_backend_url().to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn origin(&self) -> &str {
        &self.origin
    }

    pub fn direct_backend_url(&self) -> &str {
        &self.direct_backend_url
    }

    pub fn is_proxy_base(&self) -> bool {
        self.base_url.trim_end_matches('/') == PROXY_PATH
    }

    pub fn is_loopback_host(&self) -> bool {
        is_loopback(&self.host)
    }
}
