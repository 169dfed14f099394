use crate::utils::error::{ApiError, Result};
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(ApiError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(ApiError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: url_str.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(ApiError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

/// 基底 URL 可以是完整的 http(s) URL，也可以是反向代理後的相對路徑（例如 `/api`）
pub fn validate_base_url(field_name: &str, value: &str) -> Result<()> {
    if value.starts_with('/') {
        if value.starts_with("//") {
            return Err(ApiError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: value.to_string(),
                reason: "Protocol-relative URLs are not supported".to_string(),
            });
        }
        return Ok(());
    }
    validate_url(field_name, value)
}

/// 主機名稱不能帶 scheme 或路徑
pub fn validate_host(field_name: &str, host: &str) -> Result<()> {
    validate_non_empty_string(field_name, host)?;

    if host.contains("://") || host.contains('/') || host.chars().any(char::is_whitespace) {
        return Err(ApiError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: host.to_string(),
            reason: "Expected a bare host name such as localhost or shop.example.com".to_string(),
        });
    }
    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(ApiError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}
