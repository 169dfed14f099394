use crate::core::base_url::ApiConfig;
use crate::utils::error::{ApiError, Result};
use url::Url;

/// endpoint 是否已經帶有 http(s) scheme
pub fn is_absolute_url(endpoint: &str) -> bool {
    Url::parse(endpoint)
        .map(|url| matches!(url.scheme(), "http" | "https"))
        .unwrap_or(false)
}

/// 以單一斜線連接基底與 endpoint
pub fn join_url(base: &str, endpoint: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        endpoint.trim_start_matches('/')
    )
}

/// endpoint 已是絕對 URL 時原樣回傳，否則接在基底 URL 之後
pub fn resolve_request_url(config: &ApiConfig, endpoint: &str) -> String {
    if is_absolute_url(endpoint) {
        endpoint.to_string()
    } else {
        join_url(config.base_url(), endpoint)
    }
}

/// 將相對 URL（例如 `/api/orders`）補上來源，成為可以送出的絕對 URL
pub fn absolutize(config: &ApiConfig, url: &str) -> Result<Url> {
    if is_absolute_url(url) {
        return Url::parse(url).map_err(|e| ApiError::InvalidUrl {
            url: url.to_string(),
            reason: e.to_string(),
        });
    }

    let origin = Url::parse(config.origin()).map_err(|e| ApiError::InvalidUrl {
        url: config.origin().to_string(),
        reason: format!("invalid origin: {}", e),
    })?;

    origin.join(url).map_err(|e| ApiError::InvalidUrl {
        url: url.to_string(),
        reason: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::StaticConfig;

    fn proxy_config() -> ApiConfig {
        ApiConfig::from_provider(&StaticConfig::new("shop.example.com"))
    }

    #[test]
    fn test_join_inserts_exactly_one_slash() {
        assert_eq!(join_url("/api", "/orders"), "/api/orders");
        assert_eq!(join_url("/api", "orders"), "/api/orders");
        assert_eq!(join_url("/api/", "/orders"), "/api/orders");
        assert_eq!(
            join_url("http://localhost:5000/api", "plants/12"),
            "http://localhost:5000/api/plants/12"
        );
    }

    #[test]
    fn test_resolve_relative_endpoint() {
        let config = proxy_config();
        assert_eq!(resolve_request_url(&config, "/orders"), "/api/orders");
        assert_eq!(resolve_request_url(&config, "orders"), "/api/orders");
    }

    #[test]
    fn test_absolute_endpoint_bypasses_base() {
        let config = proxy_config();
        assert_eq!(
            resolve_request_url(&config, "http://other.host/x"),
            "http://other.host/x"
        );
        assert_eq!(
            resolve_request_url(&config, "https://other.host/x"),
            "https://other.host/x"
        );
    }

    #[test]
    fn test_is_absolute_url() {
        assert!(is_absolute_url("http://other.host/x"));
        assert!(is_absolute_url("HTTPS://other.host"));
        assert!(!is_absolute_url("/orders"));
        assert!(!is_absolute_url("orders"));
        assert!(!is_absolute_url("localhost:5000/orders"));
        assert!(!is_absolute_url("mailto:someone@example.com"));
    }

    #[test]
    fn test_absolutize_against_origin() {
        let config = proxy_config();
        let url = absolutize(&config, "/api/orders").unwrap();
        assert_eq!(url.as_str(), "http://shop.example.com/api/orders");

        let url = absolutize(&config, "http://other.host/x").unwrap();
        assert_eq!(url.as_str(), "http://other.host/x");
    }

    #[test]
    fn test_absolutize_rejects_bad_origin() {
        let config = ApiConfig::from_provider(
            &StaticConfig::new("shop.example.com").with_origin("not a url"),
        );
        assert!(matches!(
            absolutize(&config, "/api/orders"),
            Err(ApiError::InvalidUrl { .. })
        ));
    }
}
