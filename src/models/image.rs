use std::path::Path;

// 單一輸入影像，轉換完成後即丟棄
#[derive(Clone, Debug)]
pub struct InputImage {
    pub file_name: String,
    pub data: Vec<u8>,
}

impl InputImage {
    pub fn new(file_name: impl Into<String>, data: Vec<u8>) -> Self {
        InputImage { file_name: file_name.into(), data }
    }

    /// 去除副檔名後的檔名，無法取得時使用 "image"
    pub fn stem(&self) -> String {
        Path::new(&self.file_name)
            .file_stem()
            .map(|s| s.to_string_lossy().to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| "image".to_string())
    }
}

#[derive(Clone, Debug)]
pub struct OutputImage {
    pub file_name: String,
    pub data: Vec<u8>,
    pub width: u32,
    pub height: u32,
}
