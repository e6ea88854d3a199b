use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("無法解碼 HEIC/HEIF 影像：{0}")]
    Decode(String),
    #[error("無法編碼輸出影像：{0}")]
    Encode(String),
    #[error("檔案系統錯誤：{0}")]
    Filesystem(#[from] io::Error),
    #[error("ZIP 壓縮檔錯誤：{0}")]
    Archive(#[from] zip::result::ZipError),
    #[error("設定錯誤：{0}")]
    Config(String),
    #[error("嘗試 {0} 次後仍找不到可用的壓縮檔名稱")]
    NameExhausted(u32),
}

pub type ConvertResult<T> = Result<T, ConvertError>;
