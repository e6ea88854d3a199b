use log::{info, warn};

use crate::config::config::{validate_input_paths, validate_save_path};
use crate::config::ports::{AppConfig, ConversionPort};
use crate::error::ConvertResult;
use crate::facade::traits::i_conversion::ConversionFacadeTrait;
use crate::models::conversion::{ConversionInput, ConversionOutput, FileFailure};
use crate::models::file::FileCollectInput;
use crate::models::zip::ArchiveBuildInput;
use crate::service::convert::ImageService;
use crate::service::decode::HeifDecoder;
use crate::service::file::FileService;
use crate::service::traits::i_service::{ArchiveServiceTrait, FileServiceTrait, ImageServiceTrait};
use crate::service::zip::{archive_base_name, ZipService};
use crate::utils::utils::ProgressManager;

pub struct ConversionFacade {
    file_service: Box<dyn FileServiceTrait>,
    image_service: Box<dyn ImageServiceTrait>,
    archive_service: Box<dyn ArchiveServiceTrait>,
}

impl ConversionFacade {
    pub fn new(
        file_service: Box<dyn FileServiceTrait>,
        image_service: Box<dyn ImageServiceTrait>,
        archive_service: Box<dyn ArchiveServiceTrait>,
    ) -> Self {
        ConversionFacade {
            file_service,
            image_service,
            archive_service,
        }
    }

    /// 使用 libheif 解碼與 ZIP 打包的預設組合
    pub fn with_defaults() -> Self {
        ConversionFacade::new(
            Box::new(FileService::new()),
            Box::new(ImageService::new(Box::new(HeifDecoder::new()))),
            Box::new(ZipService::new()),
        )
    }
}

impl ConversionFacadeTrait for ConversionFacade {
    fn execute_conversion(&self, input: ConversionInput) -> ConvertResult<ConversionOutput> {
        let collected = self.file_service.collect_files(FileCollectInput {
            inputs: input.inputs.clone(),
        })?;
        let total = collected.files.len();
        if total == 0 {
            warn!("無符合條件的 HEIC/HEIF 檔案可處理");
            return Ok(ConversionOutput { converted: 0, failures: Vec::new(), archive: None });
        }

        info!(
            "開始轉換 {} 個檔案為 {}，儲存目錄：{}",
            total,
            input.options.format.label(),
            input.save_path.display()
        );
        if let Some(quality) = input.options.jpeg_quality() {
            info!("JPG 品質：{}", quality);
        }

        let pm = ProgressManager::new(total as u64, input.no_progress);
        let mut images = Vec::with_capacity(total);
        let mut failures = Vec::new();
        for (index, path) in collected.files.iter().enumerate() {
            let display_name = path.display().to_string();
            pm.update(index, total, &display_name);
            let result = self
                .file_service
                .read_image(path)
                .and_then(|image| self.image_service.convert(&image, &input.options));
            match result {
                Ok(output) => images.push(output),
                Err(e) => {
                    warn!("轉換 {} 失敗：{}", display_name, e);
                    failures.push(FileFailure { file_name: display_name, message: e.to_string() });
                }
            }
            pm.inc();
        }
        pm.finish(images.len(), failures.len());

        if images.is_empty() {
            warn!("沒有任何檔案轉換成功，不產生 ZIP 檔案");
            return Ok(ConversionOutput { converted: 0, failures, archive: None });
        }

        let converted = images.len();
        let archive = self.archive_service.build_archive(ArchiveBuildInput {
            images,
            save_path: input.save_path.clone(),
            base_name: archive_base_name(input.options.format, input.naming),
        })?;

        Ok(ConversionOutput { converted, failures, archive: Some(archive) })
    }
}

// 將 AppConfig 驗證後交給 Facade 執行
pub struct ConversionAdapter {
    facade: Box<dyn ConversionFacadeTrait>,
}

impl ConversionAdapter {
    pub fn new(facade: Box<dyn ConversionFacadeTrait>) -> Self {
        ConversionAdapter { facade }
    }
}

impl Default for ConversionAdapter {
    fn default() -> Self {
        ConversionAdapter::new(Box::new(ConversionFacade::with_defaults()))
    }
}

impl ConversionPort for ConversionAdapter {
    fn execute(&self, config: AppConfig) -> ConvertResult<ConversionOutput> {
        let inputs = validate_input_paths(&config.inputs)?;
        let save_path = validate_save_path(&config.save_path)?;
        self.facade.execute_conversion(ConversionInput {
            inputs,
            options: config.options,
            save_path,
            naming: config.naming,
            no_progress: config.no_progress,
        })
    }
}
