use crate::core::base_url::ApiConfig;
use crate::core::fallback::{fallback_target, should_fallback};
use crate::core::resolve::{absolutize, is_absolute_url, resolve_request_url};
use crate::domain::model::RequestOptions;
use crate::domain::ports::ConfigProvider;
use crate::utils::error::{ApiError, Result};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, CONTENT_TYPE};
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use std::sync::Arc;

/// 所有頁面共用的 API 呼叫入口
///
/// 複製成本很低（內部共享 `reqwest::Client` 與 `Arc<ApiConfig>`），可以在多個 task 間同時使用。
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    config: Arc<ApiConfig>,
}

impl ApiClient {
    pub fn new(config: ApiConfig) -> Self {
        Self::with_client(Client::new(), config)
    }

    pub fn with_client(client: Client, config: ApiConfig) -> Self {
        Self {
            client,
            config: Arc::new(config),
        }
    }

    pub fn from_provider<C: ConfigProvider + ?Sized>(provider: &C) -> Self {
        Self::new(ApiConfig::from_provider(provider))
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// 送出請求並回傳原始回應
    ///
    /// 本機透過代理 `/api` 得到 404 時，改向直連後端重試一次，並以重試結果為準。
    /// 非 2xx 狀態一律轉成 [`ApiError::Http`]。
    pub async fn call(&self, endpoint: &str, options: &RequestOptions) -> Result<Response> {
        let url = resolve_request_url(&self.config, endpoint);
        let mut response = self.send(&url, options).await?;

        if !is_absolute_url(endpoint) && should_fallback(response.status(), &self.config) {
            let target = fallback_target(&self.config, endpoint);
            tracing::warn!(
                url = %url,
                fallback = %target,
                "Proxy returned 404, retrying against direct backend"
            );
            response = self.send(&target, options).await?;
        }

        ensure_success(response)
    }

    /// 呼叫並將回應本文解析為 JSON
    pub async fn fetch_json<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        options: &RequestOptions,
    ) -> Result<T> {
        let response = self.call(endpoint, options).await?;
        let bytes = response.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    async fn send(&self, url: &str, options: &RequestOptions) -> Result<Response> {
        let target = absolutize(&self.config, url)?;
        let headers = merge_headers(&options.headers)?;

        tracing::debug!(method = %options.method, url = %target, "Making API request");

        let mut request = self
            .client
            .request(options.method.clone(), target.clone())
            .headers(headers);
        if let Some(body) = &options.body {
            request = request.body(body.clone());
        }

        let response = request.send().await.map_err(|e| {
            tracing::error!(url = %target, error = %e, "API request failed");
            e
        })?;

        tracing::debug!(url = %target, status = %response.status(), "API response status");
        Ok(response)
    }
}

/// 預設 `Content-Type: application/json`，呼叫者給的同名標頭會覆蓋
fn merge_headers(headers: &[(String, String)]) -> Result<HeaderMap> {
    let mut merged = HeaderMap::new();
    merged.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

    for (name, value) in headers {
        let header_name =
            HeaderName::from_bytes(name.as_bytes()).map_err(|e| ApiError::InvalidHeader {
                name: name.clone(),
                reason: e.to_string(),
            })?;
        let header_value = HeaderValue::from_str(value).map_err(|e| ApiError::InvalidHeader {
            name: name.clone(),
            reason: e.to_string(),
        })?;
        merged.insert(header_name, header_value);
    }

    Ok(merged)
}

fn ensure_success(response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    tracing::error!(url = %response.url(), status = %status, "API responded with error status");
    Err(ApiError::Http {
        status: status.as_u16(),
        status_text: status.canonical_reason().unwrap_or_default().to_string(),
        url: response.url().to_string(),
    })
}
