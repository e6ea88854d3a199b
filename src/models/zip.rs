use std::path::PathBuf;

use crate::models::image::OutputImage;

#[derive(Clone)]
pub struct ArchiveBuildInput {
    pub images: Vec<OutputImage>,
    pub save_path: PathBuf,
    pub base_name: String,
}

#[derive(Debug)]
pub struct ArchiveBuildOutput {
    pub archive_path: PathBuf,
    pub archive_name: String,
    pub archive_bytes: Vec<u8>,
    pub entry_names: Vec<String>,
}
