use std::path::PathBuf;

#[derive(Clone)]
pub struct FileCollectInput {
    pub inputs: Vec<PathBuf>,
}

#[derive(Debug)]
pub struct FileCollectOutput {
    pub files: Vec<PathBuf>,
    pub total_size: u64,
}
