use crate::core::base_url::DIRECT_BACKEND_URL;
use crate::core::ConfigProvider;

/// 固定值的設定來源，給測試與嵌入式使用
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaticConfig {
    api_url: Option<String>,
    host: String,
    origin: Option<String>,
    direct_backend_url: Option<String>,
}

impl StaticConfig {
    pub fn new(host: impl Into<String>) -> Self {
        Self {
            api_url: None,
            host: host.into(),
            origin: None,
            direct_backend_url: None,
        }
    }

    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = Some(api_url.into());
        self
    }

    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }

    pub fn with_origin(mut self, origin: impl Into<String>) -> Self {
        self.origin = Some(origin.into());
        self
    }

    pub fn with_direct_backend(mut self, url: impl Into<String>) -> Self {
        self.direct_backend_url = Some(url.into());
        self
    }
}

impl ConfigProvider for StaticConfig {
    fn api_url_override(&self) -> Option<&str> {
        self.api_url.as_deref()
    }

    fn current_host(&self) -> &str {
        &self.host
    }

    fn origin(&self) -> String {
        match &self.origin {
            Some(origin) => origin.clone(),
            None => format!("http://{}", self.host),
        }
    }

    fn direct_backend_url(&self) -> &str {
        self.direct_backend_url.as_deref().unwrap_or(DIRECT_BACKEND_URL)
    }
}
