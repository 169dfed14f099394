use crate::core::base_url::ApiConfig;
use crate::core::resolve::join_url;
use reqwest::StatusCode;

/// 本機開發透過代理 `/api` 時，404 通常代表代理沒有啟動，改直連後端
pub fn should_fallback(status: StatusCode, config: &ApiConfig) -> bool {
    status == StatusCode::NOT_FOUND && config.is_proxy_base() && config.is_loopback_host()
}

pub fn fallback_target(config: &ApiConfig, endpoint: &str) -> String {
    join_url(config.direct_backend_url(), endpoint)
}
