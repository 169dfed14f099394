use anyhow::Context;
use clap::Parser;
use nursery_client::utils::{logger, validation::Validate};
use nursery_client::{ApiClient, ApiError, CliConfig, TomlConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    // 初始化日誌
    if config.log_json {
        logger::init_json_logger(config.verbose);
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::debug!("CLI config: {:?}", config);

    // 驗證配置
    if let Err(e) = config.validate() {
        fail(&e);
    }

    let file = match &config.config {
        Some(path) => {
            let file = TomlConfig::from_file(path)
                .with_context(|| format!("failed to load {}", path.display()));
            match file {
                Ok(file) => {
                    if let Err(e) = file.validate() {
                        fail(&e);
                    }
                    Some(file)
                }
                Err(e) => {
                    tracing::error!("❌ {:#}", e);
                    eprintln!("❌ {:#}", e);
                    std::process::exit(1);
                }
            }
        }
        None => None,
    };

    let endpoint = config.target_endpoint()?;
    let options = match config.request_options(file.as_ref()) {
        Ok(options) => options,
        Err(e) => fail(&e),
    };

    let client = ApiClient::from_provider(&config.provider(file.as_ref()));
    tracing::info!(
        "Calling {} {} (base URL: {})",
        options.method,
        endpoint,
        client.config().base_url()
    );

    let response = match client.call(&endpoint, &options).await {
        Ok(response) => response,
        Err(e) => fail(&e),
    };

    let status = response.status();
    let body = response.text().await.context("failed to read response body")?;
    tracing::info!("✅ {} ({} bytes)", status, body.len());

    // JSON 回應以易讀格式輸出，其他原樣輸出
    match serde_json::from_str::<serde_json::Value>(&body) {
        Ok(json) => println!("{}", serde_json::to_string_pretty(&json)?),
        Err(_) => println!("{}", body),
    }

    Ok(())
}

fn fail(e: &ApiError) -> ! {
    tracing::error!("❌ {}", e);
    tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());
    std::process::exit(e.exit_code());
}
