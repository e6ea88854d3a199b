use dialoguer::{Confirm, Input, Select};
use std::path::Path;

use crate::config::config::{
    default_save_path, ArchiveNaming, ConversionOptions, OutputFormat, QualityTier,
};
use crate::config::ports::{AppConfig, ConfigPort, ConversionPort};
use crate::error::{ConvertError, ConvertResult};
use crate::facade::conversion_facade::ConversionAdapter;
use crate::models::conversion::ConversionOutput;
use crate::service::config_service::{ConfigService, DefaultConfigAdapter};
use crate::utils::utils::setup_logging;

pub fn process_interactive_mode() -> ConvertResult<ConversionOutput> {
    setup_logging("info");
    println!("=== 歡迎使用 HEIC 轉換互動模式 ===");
    let use_default_config = get_default_config_option()?;
    let inputs = get_input_paths()?;

    let config_port: Box<dyn ConfigPort> = if use_default_config {
        println!("使用預設配置：PNG 格式，儲存至下載目錄");
        Box::new(DefaultConfigAdapter::new(inputs))
    } else {
        Box::new(InteractiveConfigAdapter::new(inputs))
    };

    let config = ConfigService::new(config_port).get_config()?;
    let conversion_port: Box<dyn ConversionPort> = Box::new(ConversionAdapter::default());
    conversion_port.execute(config)
}

fn prompt_err(what: &str, e: dialoguer::Error) -> ConvertError {
    ConvertError::Config(format!("{}失敗: {}", what, e))
}

pub fn get_default_config_option() -> ConvertResult<bool> {
    Confirm::new()
        .with_prompt("是否使用預設配置？（PNG 格式，儲存至下載目錄，僅需指定輸入檔案）")
        .default(true)
        .interact()
        .map_err(|e| prompt_err("預設配置選擇", e))
}

/// 以逗號分隔的路徑字串拆成清單
pub fn split_paths(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

pub fn get_input_paths() -> ConvertResult<Vec<String>> {
    let raw: String = Input::new()
        .with_prompt("請輸入 HEIC/HEIF 檔案或目錄路徑，多個路徑以逗號分隔（例如：./a.heic,./photos）")
        .validate_with(|input: &String| -> Result<(), String> {
            let paths = split_paths(input);
            if paths.is_empty() {
                return Err("請至少輸入一個路徑".to_string());
            }
            match paths.iter().find(|p| !Path::new(p.as_str()).exists()) {
                Some(missing) => Err(format!("路徑 '{}' 不存在", missing)),
                None => Ok(()),
            }
        })
        .interact_text()
        .map_err(|e| prompt_err("輸入路徑", e))?;
    Ok(split_paths(&raw))
}

pub fn get_output_format() -> ConvertResult<OutputFormat> {
    let selection = Select::new()
        .with_prompt("選擇輸出格式（使用方向鍵選擇，按 Enter 確認）")
        .items(&["PNG - 無損", "JPG - 壓縮"])
        .default(0)
        .interact()
        .map_err(|e| prompt_err("輸出格式選擇", e))?;
    Ok(if selection == 1 {
        OutputFormat::Jpg
    } else {
        OutputFormat::Png
    })
}

pub fn get_quality_tier(format: OutputFormat) -> ConvertResult<QualityTier> {
    if format == OutputFormat::Png {
        println!("PNG 為無損格式，不使用品質設定。");
        return Ok(QualityTier::default());
    }
    let selection = Select::new()
        .with_prompt("選擇 JPG 品質")
        .items(&["最高品質（95）", "最低品質（10）"])
        .default(0)
        .interact()
        .map_err(|e| prompt_err("品質選擇", e))?;
    Ok(if selection == 1 {
        QualityTier::Lowest
    } else {
        QualityTier::Highest
    })
}

pub fn get_save_path() -> ConvertResult<String> {
    Input::new()
        .with_prompt("輸入 ZIP 檔案儲存目錄")
        .default(default_save_path().to_string_lossy().to_string())
        .validate_with(|input: &String| -> Result<(), String> {
            if Path::new(input).is_dir() {
                Ok(())
            } else {
                Err(format!("目錄 '{}' 不存在", input))
            }
        })
        .interact_text()
        .map_err(|e| prompt_err("儲存目錄輸入", e))
}

pub fn get_archive_naming() -> ConvertResult<ArchiveNaming> {
    let selection = Select::new()
        .with_prompt("選擇 ZIP 檔名方式")
        .items(&[
            "固定名稱（heic_converted_<格式>.zip）",
            "時間戳（heic_converted_<格式>_yyyyMMddhhmmss.zip）",
        ])
        .default(0)
        .interact()
        .map_err(|e| prompt_err("檔名方式選擇", e))?;
    Ok(if selection == 1 {
        ArchiveNaming::Timestamp
    } else {
        ArchiveNaming::Fixed
    })
}

// 交互配置適配器
pub struct InteractiveConfigAdapter {
    inputs: Vec<String>,
}

impl InteractiveConfigAdapter {
    pub fn new(inputs: Vec<String>) -> Self {
        InteractiveConfigAdapter { inputs }
    }
}

impl ConfigPort for InteractiveConfigAdapter {
    fn get_config(&self) -> ConvertResult<AppConfig> {
        let format = get_output_format()?;
        let quality = get_quality_tier(format)?;
        let save_path = get_save_path()?;
        let naming = get_archive_naming()?;

        Ok(AppConfig {
            inputs: self.inputs.clone(),
            options: ConversionOptions::new(format, quality),
            save_path,
            naming,
            no_progress: false,
        })
    }
}
