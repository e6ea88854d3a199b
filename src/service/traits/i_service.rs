use image::DynamicImage;

use crate::config::config::ConversionOptions;
use crate::error::ConvertResult;
use crate::models::file::{FileCollectInput, FileCollectOutput};
use crate::models::image::{InputImage, OutputImage};
use crate::models::zip::{ArchiveBuildInput, ArchiveBuildOutput};

// File 服務接口，負責收集與讀取輸入檔案
pub trait FileServiceTrait: Send + Sync {
    /// 收集所有 HEIC/HEIF 檔案
    /// # 參數
    /// - input: 使用者指定的檔案或目錄
    /// # 回傳
    /// - 成功時返回依輸入順序排列的檔案列表和總大小
    fn collect_files(&self, input: FileCollectInput) -> ConvertResult<FileCollectOutput>;

    fn read_image(&self, path: &std::path::Path) -> ConvertResult<InputImage>;
}

// 解碼器接口，將原始位元組解碼為像素緩衝區
pub trait DecoderServiceTrait: Send + Sync {
    fn decode(&self, input: &InputImage) -> ConvertResult<DynamicImage>;
}

// Image 服務接口，負責單一影像的轉換
pub trait ImageServiceTrait: Send + Sync {
    /// 解碼、視需要去除透明度、再依選項編碼
    /// # 回傳
    /// - 失敗時返回 Decode 或 Encode 錯誤
    fn convert(
        &self,
        input: &InputImage,
        options: &ConversionOptions,
    ) -> ConvertResult<OutputImage>;
}

// Archive 服務接口，負責打包 ZIP 並寫入儲存目錄
pub trait ArchiveServiceTrait: Send + Sync {
    fn build_archive(&self, input: ArchiveBuildInput) -> ConvertResult<ArchiveBuildOutput>;
}
