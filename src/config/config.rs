use clap::{Parser, ValueEnum};
use std::path::{Path, PathBuf};

use crate::error::{ConvertError, ConvertResult};

#[derive(Parser, Clone, Debug)]
#[command(
    name = "heic_converter",
    about = "將 HEIC/HEIF 影像轉換為 PNG 或 JPG 並打包成 ZIP 檔案",
    long_about = "一個將 HEIC/HEIF 影像批次轉換為 PNG 或 JPG 的工具，轉換結果會打包成單一 ZIP 檔案並儲存至指定目錄。\nPNG 為無損格式，不使用品質設定；JPG 可選擇最高品質（95）或最低品質（10）。\n不帶任何參數執行時進入互動模式。使用 --show-config 預覽實際配置。",
    arg_required_else_help = true
)]
pub struct Cli {
    /// HEIC/HEIF 檔案或包含這些檔案的目錄
    #[arg(required = true, num_args = 1..)]
    pub inputs: Vec<String>,
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,
    #[arg(short, long, value_enum)]
    pub quality: Option<QualityTier>,
    /// ZIP 檔案的儲存目錄（預設為下載目錄）
    #[arg(short, long)]
    pub save_path: Option<String>,
    #[arg(long, value_enum, default_value = "fixed")]
    pub naming: ArchiveNaming,
    #[arg(long, default_value_t = false)]
    pub no_progress: bool,
    #[arg(long, default_value = "info", value_parser = ["debug", "info", "warn", "error"])]
    pub log_level: String,
    #[arg(long, default_value_t = false)]
    pub show_config: bool,
}

#[derive(Clone, Copy, ValueEnum, PartialEq, Eq, Debug, Default)]
pub enum OutputFormat {
    #[default]
    Png,
    Jpg,
}

impl OutputFormat {
    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Png => "png",
            OutputFormat::Jpg => "jpg",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            OutputFormat::Png => "PNG",
            OutputFormat::Jpg => "JPG",
        }
    }
}

#[derive(Clone, Copy, ValueEnum, PartialEq, Eq, Debug, Default)]
pub enum QualityTier {
    #[default]
    Highest,
    Lowest,
}

impl QualityTier {
    pub fn value(self) -> u8 {
        match self {
            QualityTier::Highest => 95,
            QualityTier::Lowest => 10,
        }
    }
}

#[derive(Clone, Copy, ValueEnum, PartialEq, Eq, Debug, Default)]
pub enum ArchiveNaming {
    /// heic_converted_<格式>.zip
    #[default]
    Fixed,
    /// heic_converted_<格式>_<yyyyMMddhhmmss>.zip
    Timestamp,
}

// 單次批次轉換的選項，轉換期間不可變
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct ConversionOptions {
    pub format: OutputFormat,
    pub quality: QualityTier,
}

impl ConversionOptions {
    pub fn new(format: OutputFormat, quality: QualityTier) -> Self {
        ConversionOptions { format, quality }
    }

    /// PNG 為無損格式，沒有品質參數
    pub fn jpeg_quality(&self) -> Option<u8> {
        match self.format {
            OutputFormat::Png => None,
            OutputFormat::Jpg => Some(self.quality.value()),
        }
    }
}

/// 下載目錄，無法取得時使用目前目錄
pub fn default_save_path() -> PathBuf {
    save_path_or_current(dirs::download_dir())
}

fn save_path_or_current(download_dir: Option<PathBuf>) -> PathBuf {
    download_dir.unwrap_or_else(|| PathBuf::from("."))
}

pub fn validate_input_paths(inputs: &[String]) -> ConvertResult<Vec<PathBuf>> {
    if inputs.is_empty() {
        return Err(ConvertError::Config(
            "請至少指定一個 HEIC/HEIF 檔案或目錄".to_string(),
        ));
    }
    let mut paths = Vec::with_capacity(inputs.len());
    for input in inputs {
        let path = Path::new(input);
        if !path.exists() {
            log::error!("輸入路徑不存在：{}", input);
            return Err(ConvertError::Config(format!("輸入路徑 '{}' 不存在", input)));
        }
        paths.push(path.to_path_buf());
    }
    Ok(paths)
}

pub fn validate_save_path(save_path: &str) -> ConvertResult<PathBuf> {
    let path = Path::new(save_path);
    if save_path.trim().is_empty() || !path.is_dir() {
        log::error!("無效的儲存位置：{}", save_path);
        return Err(ConvertError::Config(format!(
            "無效的儲存位置：'{}'，請指定已存在的目錄",
            save_path
        )));
    }
    Ok(path.to_path_buf())
}
