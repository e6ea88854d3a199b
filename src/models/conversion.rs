use std::path::PathBuf;

use crate::config::config::{ArchiveNaming, ConversionOptions};
use crate::models::zip::ArchiveBuildOutput;

#[derive(Clone, Debug)]
pub struct ConversionInput {
    pub inputs: Vec<PathBuf>,
    pub options: ConversionOptions,
    pub save_path: PathBuf,
    pub naming: ArchiveNaming,
    pub no_progress: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FileFailure {
    pub file_name: String,
    pub message: String,
}

#[derive(Debug)]
pub struct ConversionOutput {
    pub converted: usize,
    pub failures: Vec<FileFailure>,
    // 沒有任何檔案轉換成功時不產生壓縮檔
    pub archive: Option<ArchiveBuildOutput>,
}
