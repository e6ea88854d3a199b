use crate::config::config::{ArchiveNaming, ConversionOptions};
use crate::error::ConvertResult;
use crate::models::conversion::ConversionOutput;

// 應用配置結構體，封裝所有參數
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub inputs: Vec<String>,
    pub options: ConversionOptions,
    pub save_path: String,
    pub naming: ArchiveNaming,
    pub no_progress: bool,
}

// 配置來源的 Port
pub trait ConfigPort {
    fn get_config(&self) -> ConvertResult<AppConfig>;
}

// 轉換執行的 Port
pub trait ConversionPort {
    fn execute(&self, config: AppConfig) -> ConvertResult<ConversionOutput>;
}
