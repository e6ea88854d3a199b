use image::codecs::jpeg::JpegEncoder;
use image::codecs::png::{CompressionType, FilterType, PngEncoder};
use image::{imageops, DynamicImage, Rgba, RgbaImage};
use log::debug;

use crate::config::config::{ConversionOptions, OutputFormat};
use crate::error::{ConvertError, ConvertResult};
use crate::models::image::{InputImage, OutputImage};
use crate::service::traits::i_service::{DecoderServiceTrait, ImageServiceTrait};

/// 將透明影像合成到同尺寸的白色不透明背景上
pub fn flatten_alpha(image: &DynamicImage) -> DynamicImage {
    let white = Rgba([255, 255, 255, 255]);
    let mut background = RgbaImage::from_pixel(image.width(), image.height(), white);
    imageops::overlay(&mut background, &image.to_rgba8(), 0, 0);
    DynamicImage::ImageRgb8(DynamicImage::ImageRgba8(background).to_rgb8())
}

/// JPG 不支援透明通道；PNG 保留原始像素
pub fn prepare_for_format(image: DynamicImage, format: OutputFormat) -> DynamicImage {
    match format {
        OutputFormat::Png => image,
        OutputFormat::Jpg if image.color().has_alpha() => flatten_alpha(&image),
        OutputFormat::Jpg => DynamicImage::ImageRgb8(image.to_rgb8()),
    }
}

pub fn encode_image(image: &DynamicImage, options: &ConversionOptions) -> ConvertResult<Vec<u8>> {
    let mut buffer = Vec::new();
    let result = match options.jpeg_quality() {
        None => {
            let encoder = PngEncoder::new_with_quality(
                &mut buffer,
                CompressionType::Best,
                FilterType::Adaptive,
            );
            image.write_with_encoder(encoder)
        }
        Some(quality) => {
            let encoder = JpegEncoder::new_with_quality(&mut buffer, quality);
            image.write_with_encoder(encoder)
        }
    };
    result.map_err(|e| ConvertError::Encode(e.to_string()))?;
    Ok(buffer)
}

pub fn output_file_name(input: &InputImage, format: OutputFormat) -> String {
    format!("{}.{}", input.stem(), format.extension())
}

pub struct ImageService {
    decoder: Box<dyn DecoderServiceTrait>,
}

impl ImageService {
    pub fn new(decoder: Box<dyn DecoderServiceTrait>) -> Self {
        ImageService { decoder }
    }
}

impl ImageServiceTrait for ImageService {
    fn convert(
        &self,
        input: &InputImage,
        options: &ConversionOptions,
    ) -> ConvertResult<OutputImage> {
        let decoded = self.decoder.decode(input)?;
        let (width, height) = (decoded.width(), decoded.height());
        let prepared = prepare_for_format(decoded, options.format);
        let data = encode_image(&prepared, options).map_err(|e| match e {
            ConvertError::Encode(msg) => {
                ConvertError::Encode(format!("{}: {}", input.file_name, msg))
            }
            other => other,
        })?;
        let file_name = output_file_name(input, options.format);
        debug!("轉換 {} -> {}，{} 位元組", input.file_name, file_name, data.len());
        Ok(OutputImage {
            file_name,
            data,
            width,
            height,
        })
    }
}
