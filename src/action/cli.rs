use clap::Parser;

use crate::action::interactive::process_interactive_mode;
use crate::config::config::{default_save_path, Cli, ConversionOptions, OutputFormat};
use crate::config::ports::{AppConfig, ConfigPort, ConversionPort};
use crate::error::ConvertResult;
use crate::facade::conversion_facade::ConversionAdapter;
use crate::models::conversion::ConversionOutput;
use crate::service::config_service::{ConfigService, DefaultConfigAdapter};
use crate::utils::utils::setup_logging;

pub fn process_args(args: Vec<String>) -> ConvertResult<ConversionOutput> {
    if args.len() == 1 {
        process_interactive_mode()
    } else {
        process_cli_mode()
    }
}

pub fn process_cli_mode() -> ConvertResult<ConversionOutput> {
    let cli = Cli::parse();
    setup_logging(&cli.log_level);

    // 只提供輸入路徑時使用預設配置
    let is_default_config =
        cli.format.is_none() && cli.quality.is_none() && cli.save_path.is_none();

    let config_port: Box<dyn ConfigPort> = if is_default_config {
        log::info!("未提供選項參數，使用預設配置：PNG 格式，儲存至下載目錄");
        Box::new(DefaultConfigAdapter::new(cli.inputs.clone()))
    } else {
        Box::new(CliConfigAdapter::new(cli.clone()))
    };

    let config_service = ConfigService::new(config_port);
    let mut config = config_service.get_config()?;
    config.naming = cli.naming;
    config.no_progress = cli.no_progress;

    if cli.show_config {
        println!("實際使用的配置：{:#?}", config);
    }

    let conversion_port: Box<dyn ConversionPort> = Box::new(ConversionAdapter::default());
    conversion_port.execute(config)
}

// CLI 配置適配器
pub struct CliConfigAdapter {
    cli: Cli,
}

impl CliConfigAdapter {
    pub fn new(cli: Cli) -> Self {
        CliConfigAdapter { cli }
    }
}

impl ConfigPort for CliConfigAdapter {
    fn get_config(&self) -> ConvertResult<AppConfig> {
        let format = self.cli.format.unwrap_or_default();
        if format == OutputFormat::Png && self.cli.quality.is_some() {
            log::info!("PNG 為無損格式，忽略品質設定");
        }

        Ok(AppConfig {
            inputs: self.cli.inputs.clone(),
            options: ConversionOptions::new(format, self.cli.quality.unwrap_or_default()),
            save_path: self
                .cli
                .save_path
                .clone()
                .unwrap_or_else(|| default_save_path().to_string_lossy().to_string()),
            naming: self.cli.naming,
            no_progress: self.cli.no_progress,
        })
    }
}
