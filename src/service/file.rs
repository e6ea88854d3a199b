use std::fs;
use std::path::{Path, PathBuf};

use log::{info, warn};
use walkdir::WalkDir;

use crate::error::ConvertResult;
use crate::models::file::{FileCollectInput, FileCollectOutput};
use crate::models::image::InputImage;
use crate::service::traits::i_service::FileServiceTrait;
use crate::utils::utils::format_file_size;

const HEIF_EXTENSIONS: [&str; 2] = ["heic", "heif"];

pub fn is_heif_file(path: &Path) -> bool {
    path.extension()
        .map(|ext| ext.to_string_lossy().to_ascii_lowercase())
        .is_some_and(|ext| HEIF_EXTENSIONS.contains(&ext.as_str()))
}

pub fn collect_heif_files(inputs: &[PathBuf]) -> ConvertResult<Vec<PathBuf>> {
    let mut files = Vec::new();
    for input in inputs {
        if input.is_dir() {
            for entry in WalkDir::new(input).sort_by_file_name() {
                let entry = entry.map_err(std::io::Error::from)?;
                if entry.file_type().is_file() && is_heif_file(entry.path()) {
                    files.push(entry.into_path());
                }
            }
        } else if is_heif_file(input) {
            files.push(input.clone());
        } else {
            warn!("略過非 HEIC/HEIF 檔案：{}", input.display());
        }
    }
    Ok(files)
}

pub struct FileService;

impl FileService {
    pub fn new() -> Self {
        FileService
    }
}

impl Default for FileService {
    fn default() -> Self {
        Self::new()
    }
}

impl FileServiceTrait for FileService {
    fn collect_files(&self, input: FileCollectInput) -> ConvertResult<FileCollectOutput> {
        let files = collect_heif_files(&input.inputs)?;
        let mut total_size = 0;
        for (i, file) in files.iter().enumerate() {
            let size = fs::metadata(file)?.len();
            total_size += size;
            info!("{}. {}（{}）", i + 1, file.display(), format_file_size(size));
        }
        info!("已選取 {} 個檔案，總大小：{}", files.len(), format_file_size(total_size));
        Ok(FileCollectOutput { files, total_size })
    }

    fn read_image(&self, path: &Path) -> ConvertResult<InputImage> {
        let data = fs::read(path)?;
        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().to_string())
            .unwrap_or_else(|| path.display().to_string());
        Ok(InputImage::new(file_name, data))
    }
}
