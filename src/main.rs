use clap::Parser;
use number_classifier::core::ConfigProvider;
use number_classifier::utils::{logger, validation::Validate};
use number_classifier::{
    CliConfig, Command, ErrorResult, NumberClassifier, NumbersApiClient, TomlConfig,
};
use std::sync::Arc;

/// 指定 --config 時以 TOML 檔案取代命令列參數
fn load_config(cli: &CliConfig) -> number_classifier::Result<Box<dyn ConfigProvider>> {
    match &cli.config {
        Some(path) => {
            tracing::info!("📄 Loading configuration from {}", path.display());
            let config = TomlConfig::from_file(path)?;
            config.validate()?;
            Ok(Box::new(config))
        }
        None => {
            cli.validate()?;
            Ok(Box::new(cli.clone()))
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // 初始化日誌
    if cli.log_json {
        logger::init_json_logger(cli.verbose);
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::info!("Starting number-classifier");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    let config = match load_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("❌ Configuration validation failed: {}", e);
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(1);
        }
    };

    let fun_facts = NumbersApiClient::from_config(config.as_ref())?;
    let classifier = NumberClassifier::new(Arc::new(fun_facts));

    match cli.command() {
        Command::Serve => {
            let addr = config.bind_address().parse()?;
            number_classifier::serve(addr, classifier).await?;
        }
        Command::Classify { number } => match classifier.classify_token(&number).await {
            Ok(result) => println!("{}", serde_json::to_string_pretty(&result)?),
            Err(e) => {
                tracing::error!("❌ {}", e);
                let error = ErrorResult::new(e.echoed_input().unwrap_or_default());
                println!("{}", serde_json::to_string_pretty(&error)?);
                eprintln!("❌ {}", e.user_friendly_message());
                std::process::exit(if e.is_client_error() { 2 } else { 1 });
            }
        },
    }

    Ok(())
}
