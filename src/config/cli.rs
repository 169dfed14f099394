use crate::config::{StaticConfig, TomlConfig, DEFAULT_HOST};
use crate::core::{RequestOptions, Resource};
use crate::domain::model::parse_header_line;
use crate::utils::error::{ApiError, Result};
use crate::utils::validation::{self, Validate};
use clap::Parser;
use reqwest::Method;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "nursery-client")]
#[command(about = "Call the nursery management REST API")]
pub struct CliConfig {
    #[arg(help = "Endpoint path (e.g. /orders) or absolute URL")]
    pub endpoint: Option<String>,

    #[arg(long, conflicts_with = "endpoint", help = "Backend resource, e.g. orders or plants")]
    pub resource: Option<Resource>,

    #[arg(long, requires = "resource", help = "Item id within the resource")]
    pub id: Option<String>,

    #[arg(short = 'X', long, default_value = "GET")]
    pub method: String,

    #[arg(short, long, help = "Request body (JSON)")]
    pub data: Option<String>,

    #[arg(short = 'H', long = "header", help = "Extra header as 'Name: value'")]
    pub headers: Vec<String>,

    #[arg(long, env = "NURSERY_API_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    #[arg(long, env = "NURSERY_API_URL", help = "Override the API base URL")]
    pub api_url: Option<String>,

    #[arg(long, env = "NURSERY_HOST", help = "Host the client runs on [default: localhost]")]
    pub host: Option<String>,

    #[arg(long, env = "NURSERY_ORIGIN", help = "Origin used to resolve relative URLs")]
    pub origin: Option<String>,

    #[arg(long, env = "NURSERY_DIRECT_BACKEND", help = "Direct backend used for the dev fallback")]
    pub direct_backend: Option<String>,

    #[arg(long, help = "TOML configuration file")]
    pub config: Option<PathBuf>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub log_json: bool,
}

impl CliConfig {
    /// 要呼叫的 endpoint：直接給的路徑，或由 --resource/--id 組出
    pub fn target_endpoint(&self) -> Result<String> {
        match (&self.endpoint, self.resource) {
            (Some(endpoint), _) => Ok(endpoint.clone()),
            (None, Some(resource)) => Ok(match &self.id {
                Some(id) => resource.item_path(id),
                None => resource.path(),
            }),
            (None, None) => Err(ApiError::MissingConfigError {
                field: "endpoint".to_string(),
            }),
        }
    }

    pub fn http_method(&self) -> Result<Method> {
        let upper = self.method.trim().to_ascii_uppercase();
        upper
            .parse::<Method>()
            .map_err(|e| ApiError::InvalidConfigValueError {
                field: "method".to_string(),
                value: self.method.clone(),
                reason: e.to_string(),
            })
    }

    /// 設定檔為底，命令列參數覆蓋
    pub fn provider(&self, file: Option<&TomlConfig>) -> StaticConfig {
        let mut provider = match file {
            Some(file) => file.to_static_config(),
            None => StaticConfig::new(DEFAULT_HOST),
        };

        if let Some(host) = &self.host {
            provider = provider.with_host(host.clone());
        }
        if let Some(api_url) = &self.api_url {
            provider = provider.with_api_url(api_url.clone());
        }
        if let Some(origin) = &self.origin {
            provider = provider.with_origin(origin.clone());
        }
        if let Some(direct) = &self.direct_backend {
            provider = provider.with_direct_backend(direct.clone());
        }
        provider
    }

    /// 組出請求選項：設定檔標頭、命令列標頭、token、本文
    pub fn request_options(&self, file: Option<&TomlConfig>) -> Result<RequestOptions> {
        let mut options = RequestOptions::new(self.http_method()?);

        if let Some(file) = file {
            for (name, value) in file.headers() {
                options = options.with_header(name, value);
            }
        }
        for line in &self.headers {
            let (name, value) = parse_header_line(line)?;
            options = options.with_header(name, value);
        }

        let token = self
            .token
            .as_deref()
            .filter(|t| !t.trim().is_empty())
            .or_else(|| file.and_then(TomlConfig::token));
        if let Some(token) = token {
            options = options.bearer(token);
        }

        if let Some(data) = &self.data {
            options = options.with_body(data.clone());
        }

        Ok(options)
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        self.target_endpoint()?;
        self.http_method()?;

        if let Some(api_url) = &self.api_url {
            if !api_url.trim().is_empty() {
                validation::validate_base_url("api_url", api_url)?;
            }
        }
        if let Some(host) = &self.host {
            validation::validate_host("host", host)?;
        }
        if let Some(origin) = &self.origin {
            validation::validate_url("origin", origin)?;
        }
        if let Some(direct) = &self.direct_backend {
            validation::validate_url("direct_backend", direct)?;
        }
        for line in &self.headers {
            parse_header_line(line)?;
        }
        if let Some(data) = &self.data {
            serde_json::from_str::<serde_json::Value>(data)?;
        }
        Ok(())
    }
}
