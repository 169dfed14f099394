use crate::utils::error::{ApiError, Result};
use reqwest::Method;
use serde::Serialize;

/// 單次請求的選項：方法、標頭與本文
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestOptions {
    pub method: Method,
    /// 依呼叫者給定的順序套用，後者覆蓋前者
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

impl Default for RequestOptions {
    fn default() -> Self {
        Self::new(Method::GET)
    }
}

impl RequestOptions {
    pub fn new(method: Method) -> Self {
        Self {
            method,
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn get() -> Self {
        Self::new(Method::GET)
    }

    pub fn post() -> Self {
        Self::new(Method::POST)
    }

    pub fn put() -> Self {
        Self::new(Method::PUT)
    }

    pub fn patch() -> Self {
        Self::new(Method::PATCH)
    }

    pub fn delete() -> Self {
        Self::new(Method::DELETE)
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// 附加 `Authorization: Bearer <token>`，token 的生命週期由呼叫者管理
    pub fn bearer(self, token: &str) -> Self {
        self.with_header("Authorization", format!("Bearer {}", token))
    }

    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// 將 payload 序列化成 JSON 本文
    pub fn json<T: Serialize + ?Sized>(mut self, payload: &T) -> Result<Self> {
        self.body = Some(serde_json::to_string(payload)?);
        Ok(self)
    }
}

/// 解析 `Name: value` 格式的標頭
pub fn parse_header_line(line: &str) -> Result<(String, String)> {
    let (name, value) = line.split_once(':').ok_or_else(|| ApiError::InvalidHeader {
        name: line.to_string(),
        reason: "expected 'Name: value'".to_string(),
    })?;

    let name = name.trim();
    if name.is_empty() {
        return Err(ApiError::InvalidHeader {
            name: line.to_string(),
            reason: "header name is empty".to_string(),
        });
    }

    Ok((name.to_string(), value.trim().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_get_without_body() {
        let options = RequestOptions::default();
        assert_eq!(options.method, Method::GET);
        assert!(options.headers.is_empty());
        assert!(options.body.is_none());
    }

    #[test]
    fn test_builder_keeps_header_order() {
        let options = RequestOptions::post()
            .bearer("abc123")
            .with_header("X-Trace", "1")
            .with_body("{}");

        assert_eq!(options.method, Method::POST);
        assert_eq!(
            options.headers,
            vec![
                ("Authorization".to_string(), "Bearer abc123".to_string()),
                ("X-Trace".to_string(), "1".to_string()),
            ]
        );
        assert_eq!(options.body.as_deref(), Some("{}"));
    }

    #[test]
    fn test_json_body() {
        let options = RequestOptions::post()
            .json(&serde_json::json!({"plant_id": 7, "quantity": 3}))
            .unwrap();
        let body: serde_json::Value = serde_json::from_str(options.body.as_deref().unwrap()).unwrap();
        assert_eq!(body["plant_id"], 7);
        assert_eq!(body["quantity"], 3);
    }

    #[test]
    fn test_parse_header_line() {
        assert_eq!(
            parse_header_line("Authorization: Bearer xyz").unwrap(),
            ("Authorization".to_string(), "Bearer xyz".to_string())
        );
        assert_eq!(
            parse_header_line("X-Empty:").unwrap(),
            ("X-Empty".to_string(), String::new())
        );
        assert!(parse_header_line("no-colon").is_err());
        assert!(parse_header_line(": value").is_err());
    }
}
