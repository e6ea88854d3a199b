use image::{DynamicImage, RgbImage, RgbaImage};
use libheif_rs::{ColorSpace, HeifContext, LibHeif, RgbChroma};
use log::debug;

use crate::error::{ConvertError, ConvertResult};
use crate::models::image::InputImage;
use crate::service::traits::i_service::DecoderServiceTrait;

// 使用系統 libheif 解碼主影像
pub struct HeifDecoder;

impl HeifDecoder {
    pub fn new() -> Self {
        HeifDecoder
    }
}

impl Default for HeifDecoder {
    fn default() -> Self {
        Self::new()
    }
}

impl DecoderServiceTrait for HeifDecoder {
    fn decode(&self, input: &InputImage) -> ConvertResult<DynamicImage> {
        let decode_err =
            |e: libheif_rs::HeifError| ConvertError::Decode(format!("{}: {}", input.file_name, e));

        let lib_heif = LibHeif::new();
        let ctx = HeifContext::read_from_bytes(&input.data).map_err(decode_err)?;
        let handle = ctx.primary_image_handle().map_err(decode_err)?;
        let has_alpha = handle.has_alpha_channel();
        let chroma = if has_alpha {
            RgbChroma::Rgba
        } else {
            RgbChroma::Rgb
        };
        let image = lib_heif
            .decode(&handle, ColorSpace::Rgb(chroma), None)
            .map_err(decode_err)?;

        let plane = image.planes().interleaved.ok_or_else(|| {
            ConvertError::Decode(format!("{}: 缺少交錯像素平面", input.file_name))
        })?;
        let (width, height) = (plane.width, plane.height);

        // 每列可能含有對齊填充，只複製實際像素
        let channels = if has_alpha { 4 } else { 3 };
        let row_len = width as usize * channels;
        if plane.stride < row_len {
            return Err(ConvertError::Decode(format!(
                "{}: 無效的列寬 {}",
                input.file_name, plane.stride
            )));
        }
        let mut pixels = Vec::with_capacity(row_len * height as usize);
        for row in plane.data.chunks(plane.stride).take(height as usize) {
            let row = row.get(..row_len).ok_or_else(|| {
                ConvertError::Decode(format!("{}: 像素資料長度不足", input.file_name))
            })?;
            pixels.extend_from_slice(row);
        }
        debug!("解碼 {}：{}x{}，透明通道：{}", input.file_name, width, height, has_alpha);

        let decoded = if has_alpha {
            RgbaImage::from_raw(width, height, pixels).map(DynamicImage::ImageRgba8)
        } else {
            RgbImage::from_raw(width, height, pixels).map(DynamicImage::ImageRgb8)
        };
        decoded.ok_or_else(|| {
            ConvertError::Decode(format!("{}: 像素緩衝區尺寸不符", input.file_name))
        })
    }
}
