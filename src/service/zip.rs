use std::collections::HashSet;
use std::fs::OpenOptions;
use std::io::{self, Cursor, Write};
use std::path::{Path, PathBuf};

use chrono::Local;
use log::info;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

use crate::config::config::{ArchiveNaming, OutputFormat};
use crate::error::{ConvertError, ConvertResult};
use crate::models::image::OutputImage;
use crate::models::zip::{ArchiveBuildInput, ArchiveBuildOutput};
use crate::service::traits::i_service::ArchiveServiceTrait;
use crate::utils::utils::format_file_size;

pub const ARCHIVE_PREFIX: &str = "heic_converted";
pub const MAX_NAME_ATTEMPTS: u32 = 10_000;

pub fn archive_base_name(format: OutputFormat, naming: ArchiveNaming) -> String {
    match naming {
        ArchiveNaming::Fixed => format!("{}_{}", ARCHIVE_PREFIX, format.extension()),
        ArchiveNaming::Timestamp => format!(
            "{}_{}_{}",
            ARCHIVE_PREFIX,
            format.extension(),
            Local::now().format("%Y%m%d%H%M%S")
        ),
    }
}

/// 在儲存目錄中找出第一個不存在的 `<base>.zip`、`<base>_1.zip`、`<base>_2.zip`…
pub fn resolve_archive_path(save_path: &Path, base_name: &str) -> ConvertResult<PathBuf> {
    resolve_archive_path_with_limit(save_path, base_name, MAX_NAME_ATTEMPTS)
}

fn resolve_archive_path_with_limit(
    save_path: &Path,
    base_name: &str,
    max_attempts: u32,
) -> ConvertResult<PathBuf> {
    let candidate = save_path.join(format!("{}.zip", base_name));
    if !candidate.exists() {
        return Ok(candidate);
    }
    for counter in 1..=max_attempts {
        let candidate = save_path.join(format!("{}_{}.zip", base_name, counter));
        if !candidate.exists() {
            return Ok(candidate);
        }
    }
    Err(ConvertError::NameExhausted(max_attempts))
}

/// ZIP 內不可有重複檔名，同名項目在副檔名前加上 `_1`、`_2`…
pub fn unique_entry_names(images: &[OutputImage]) -> Vec<String> {
    let mut used = HashSet::new();
    let mut names = Vec::with_capacity(images.len());
    for image in images {
        let mut name = image.file_name.clone();
        let mut counter = 1;
        while used.contains(&name.to_lowercase()) {
            let path = Path::new(&image.file_name);
            let stem = path
                .file_stem()
                .map(|s| s.to_string_lossy().to_string())
                .unwrap_or_default();
            name = match path.extension() {
                Some(ext) => format!("{}_{}.{}", stem, counter, ext.to_string_lossy()),
                None => format!("{}_{}", stem, counter),
            };
            counter += 1;
        }
        used.insert(name.to_lowercase());
        names.push(name);
    }
    names
}

pub fn create_archive_buffer(
    images: &[OutputImage],
    entry_names: &[String],
) -> ConvertResult<Vec<u8>> {
    let mut zip_buffer = Vec::new();
    let mut zip = ZipWriter::new(Cursor::new(&mut zip_buffer));
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);
    for (image, name) in images.iter().zip(entry_names) {
        zip.start_file(name.as_str(), options)?;
        zip.write_all(&image.data)?;
    }
    zip.finish()?;
    Ok(zip_buffer)
}

// create_new 保證不會覆寫既有檔案
fn write_new_file(path: &Path, data: &[u8]) -> io::Result<()> {
    let mut file = OpenOptions::new().write(true).create_new(true).open(path)?;
    file.write_all(data)?;
    file.flush()
}

pub struct ZipService;

impl ZipService {
    pub fn new() -> Self {
        ZipService
    }
}

impl Default for ZipService {
    fn default() -> Self {
        Self::new()
    }
}

impl ArchiveServiceTrait for ZipService {
    fn build_archive(&self, input: ArchiveBuildInput) -> ConvertResult<ArchiveBuildOutput> {
        let entry_names = unique_entry_names(&input.images);
        let archive_bytes = create_archive_buffer(&input.images, &entry_names)?;
        info!(
            "ZIP 壓縮完成，共 {} 個檔案，大小：{}",
            entry_names.len(),
            format_file_size(archive_bytes.len() as u64)
        );

        let archive_path = resolve_archive_path(&input.save_path, &input.base_name)?;
        write_new_file(&archive_path, &archive_bytes)?;
        info!("ZIP 檔案已儲存至：{}", archive_path.display());

        let archive_name = archive_path
            .file_name()
            .map(|name| name.to_string_lossy().to_string())
            .unwrap_or_default();
        Ok(ArchiveBuildOutput {
            archive_path,
            archive_name,
            archive_bytes,
            entry_names,
        })
    }
}
