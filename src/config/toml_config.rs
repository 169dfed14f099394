use crate::config::{StaticConfig, DEFAULT_HOST};
use crate::core::ConfigProvider;
use crate::utils::error::{ApiError, Result};
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub api: ApiSection,
    #[serde(default)]
    pub request: RequestSection,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ApiSection {
    pub url: Option<String>,
    pub host: Option<String>,
    pub origin: Option<String>,
    pub direct_backend: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RequestSection {
    pub token: Option<String>,
    pub headers: Option<BTreeMap<String, String>>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(ApiError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| ApiError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${NURSERY_API_TOKEN})，找不到的保留原字串
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| ApiError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    /// 驗證配置的合理性
    pub fn validate_config(&self) -> Result<()> {
        if let Some(url) = &self.api.url {
            reject_unresolved("api.url", url)?;
            if !url.trim().is_empty() {
                validation::validate_base_url("api.url", url)?;
            }
        }
        if let Some(host) = &self.api.host {
            validation::validate_host("api.host", host)?;
        }
        if let Some(origin) = &self.api.origin {
            reject_unresolved("api.origin", origin)?;
            validation::validate_url("api.origin", origin)?;
        }
        if let Some(direct) = &self.api.direct_backend {
            reject_unresolved("api.direct_backend", direct)?;
            validation::validate_url("api.direct_backend", direct)?;
        }
        if let Some(token) = &self.request.token {
            reject_unresolved("request.token", token)?;
        }
        if let Some(headers) = &self.request.headers {
            for (name, value) in headers {
                validation::validate_non_empty_string("request.headers", name)?;
                reject_unresolved("request.headers", value)?;
            }
        }
        Ok(())
    }

    pub fn token(&self) -> Option<&str> {
        self.request.token.as_deref().filter(|t| !t.trim().is_empty())
    }

    /// 依名稱排序的額外標頭
    pub fn headers(&self) -> Vec<(String, String)> {
        self.request
            .headers
            .as_ref()
            .map(|headers| {
                headers
                    .iter()
                    .map(|(k, v)| (k.clone(), v.clone()))
                    .collect()
            })
            .unwrap_or_default()
    }

    pub fn to_static_config(&self) -> StaticConfig {
        let mut config = StaticConfig::new(self.current_host());
        if let Some(url) = &self.api.url {
            config = config.with_api_url(url.clone());
        }
        if let Some(origin) = &self.api.origin {
            config = config.with_origin(origin.clone());
        }
        if let Some(direct) = &self.api.direct_backend {
            config = config.with_direct_backend(direct.clone());
        }
        config
    }
}

fn reject_unresolved(field: &str, value: &str) -> Result<()> {
    if value.contains("${") {
        return Err(ApiError::InvalidConfigValueError {
            field: field.to_string(),
            value: value.to_string(),
            reason: "Unresolved environment variable".to_string(),
        });
    }
    Ok(())
}

impl ConfigProvider for TomlConfig {
    fn api_url_override(&self) -> Option<&str> {
        self.api.url.as_deref()
    }

    fn current_host(&self) -> &str {
        self.api.host.as_deref().unwrap_or(DEFAULT_HOST)
    }

    fn origin(&self) -> String {
        match &self.api.origin {
            Some(origin) => origin.clone(),
            None => format!("http://{}", self.current_host()),
        }
    }

    fn direct_backend_url(&self) -> &str {
        self.api
            .direct_backend
            .as_deref()
            .unwrap_or(crate::core::base_url::DIRECT_BACKEND_URL)
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
