use crate::config::config::{default_save_path, ArchiveNaming, ConversionOptions};
use crate::config::ports::{AppConfig, ConfigPort};
use crate::error::ConvertResult;

// 配置服務，負責選擇適當的配置適配器
pub struct ConfigService {
    config_port: Box<dyn ConfigPort>,
}

impl ConfigService {
    pub fn new(config_port: Box<dyn ConfigPort>) -> Self {
        ConfigService { config_port }
    }

    pub fn get_config(&self) -> ConvertResult<AppConfig> {
        self.config_port.get_config()
    }
}

// 預設配置適配器：PNG、最高品質、下載目錄、固定檔名
pub struct DefaultConfigAdapter {
    inputs: Vec<String>,
}

impl DefaultConfigAdapter {
    pub fn new(inputs: Vec<String>) -> Self {
        DefaultConfigAdapter { inputs }
    }
}

impl ConfigPort for DefaultConfigAdapter {
    fn get_config(&self) -> ConvertResult<AppConfig> {
        Ok(AppConfig {
            inputs: self.inputs.clone(),
            options: ConversionOptions::default(),
            save_path: default_save_path().to_string_lossy().to_string(),
            naming: ArchiveNaming::Fixed,
            no_progress: false,
        })
    }
}
