use std::fs;
use std::io::Cursor;
use std::path::Path;

use heic_converter::config::config::{ArchiveNaming, ConversionOptions, OutputFormat, QualityTier};
use heic_converter::facade::conversion_facade::ConversionFacade;
use heic_converter::facade::traits::i_conversion::ConversionFacadeTrait;
use heic_converter::models::conversion::ConversionInput;
use heic_converter::models::image::InputImage;
use heic_converter::service::decode::HeifDecoder;
use heic_converter::service::traits::i_service::DecoderServiceTrait;
use image::{GenericImageView, ImageFormat};
use libheif_rs::{
    Channel, ColorSpace, CompressionFormat, EncoderQuality, HeifContext, Image, LibHeif, RgbChroma,
};
use zip::ZipArchive;

const WIDTH: u32 = 64;
const HEIGHT: u32 = 48;

fn sample(x: u32, y: u32, channel: usize) -> u8 {
    match channel {
        0 => (x * 4) as u8,
        1 => (y * 5) as u8,
        2 => 128,
        _ if x < WIDTH / 2 => 0,
        _ => 255,
    }
}

// 以系統 libheif 的編碼器產生 HEIC 位元組；沒有 HEVC 或 AV1 編碼器時返回 None
fn encode_heic(with_alpha: bool) -> Option<Vec<u8>> {
    let lib_heif = LibHeif::new();
    let mut encoder = lib_heif
        .encoder_for_format(CompressionFormat::Hevc)
        .or_else(|_| lib_heif.encoder_for_format(CompressionFormat::Av1))
        .ok()?;
    encoder.set_quality(EncoderQuality::Lossy(90)).unwrap();

    let mut image = Image::new(WIDTH, HEIGHT, ColorSpace::Rgb(RgbChroma::C444)).unwrap();
    let mut channels = vec![Channel::R, Channel::G, Channel::B];
    if with_alpha {
        channels.push(Channel::Alpha);
    }
    for channel in channels {
        image.create_plane(channel, WIDTH, HEIGHT, 8).unwrap();
    }

    let planes = image.planes_mut();
    for (index, plane) in [planes.r, planes.g, planes.b, planes.a].into_iter().enumerate() {
        let Some(plane) = plane else { continue };
        for y in 0..HEIGHT {
            for x in 0..WIDTH {
                plane.data[y as usize * plane.stride + x as usize] = sample(x, y, index);
            }
        }
    }

    let mut context = HeifContext::new().unwrap();
    context.encode_image(&image, &mut encoder, None).unwrap();
    Some(context.write_to_bytes().unwrap())
}

fn heic_or_skip(with_alpha: bool) -> Option<Vec<u8>> {
    let bytes = encode_heic(with_alpha);
    if bytes.is_none() {
        eprintln!("libheif 沒有可用的 HEVC/AV1 編碼器，略過此測試");
    }
    bytes
}

fn run(inputs: Vec<&Path>, save: &Path, format: OutputFormat) -> Vec<(String, Vec<u8>)> {
    let input = ConversionInput {
        inputs: inputs.into_iter().map(Path::to_path_buf).collect(),
        options: ConversionOptions::new(format, QualityTier::Highest),
        save_path: save.to_path_buf(),
        naming: ArchiveNaming::Fixed,
        no_progress: true,
    };
    let output = ConversionFacade::with_defaults().execute_conversion(input).unwrap();
    assert!(output.failures.is_empty(), "{:?}", output.failures);

    let bytes = output.archive.unwrap().archive_bytes;
    let mut archive = ZipArchive::new(Cursor::new(bytes)).unwrap();
    (0..archive.len())
        .map(|i| {
            let mut entry = archive.by_index(i).unwrap();
            let name = entry.name().to_string();
            let mut data = Vec::new();
            std::io::copy(&mut entry, &mut data).unwrap();
            (name, data)
        })
        .collect()
}

#[test]
fn decodes_opaque_heic_as_rgb() {
    let Some(bytes) = heic_or_skip(false) else { return };
    let decoded = HeifDecoder::new()
        .decode(&InputImage::new("opaque.heic", bytes))
        .unwrap();

    assert_eq!(decoded.dimensions(), (WIDTH, HEIGHT));
    assert!(!decoded.color().has_alpha());
}

#[test]
fn decodes_alpha_heic_as_rgba() {
    let Some(bytes) = heic_or_skip(true) else { return };
    let decoded = HeifDecoder::new()
        .decode(&InputImage::new("alpha.heic", bytes))
        .unwrap();

    assert_eq!(decoded.dimensions(), (WIDTH, HEIGHT));
    assert!(decoded.color().has_alpha());
    let rgba = decoded.to_rgba8();
    assert!(rgba.get_pixel(4, 4)[3] < 32);
    assert!(rgba.get_pixel(WIDTH - 4, HEIGHT - 4)[3] > 224);
}

#[test]
fn default_facade_converts_real_heic_to_png() {
    let Some(bytes) = heic_or_skip(false) else { return };
    let src = tempfile::tempdir().unwrap();
    let out = tempfile::tempdir().unwrap();
    let photo = src.path().join("photo.HEIC");
    fs::write(&photo, bytes).unwrap();

    let entries = run(vec![&photo], out.path(), OutputFormat::Png);

    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].0, "photo.png");
    let decoded = image::load_from_memory_with_format(&entries[0].1, ImageFormat::Png).unwrap();
    assert_eq!(decoded.dimensions(), (WIDTH, HEIGHT));
    assert!(out.path().join("heic_converted_png.zip").exists());
}

#[test]
fn default_facade_flattens_real_heic_alpha_for_jpg() {
    let (Some(opaque), Some(alpha)) = (heic_or_skip(false), heic_or_skip(true)) else {
        return;
    };
    let src = tempfile::tempdir().unwrap();
    let out = tempfile::tempdir().unwrap();
    let first = src.path().join("opaque.heic");
    let second = src.path().join("alpha.heif");
    fs::write(&first, opaque).unwrap();
    fs::write(&second, alpha).unwrap();

    let entries = run(vec![&first, &second], out.path(), OutputFormat::Jpg);

    let names: Vec<&str> = entries.iter().map(|(name, _)| name.as_str()).collect();
    assert_eq!(names, vec!["opaque.jpg", "alpha.jpg"]);
    let decoded = image::load_from_memory_with_format(&entries[1].1, ImageFormat::Jpeg).unwrap();
    assert_eq!(decoded.dimensions(), (WIDTH, HEIGHT));
    assert!(!decoded.color().has_alpha());
    let pixel = decoded.to_rgb8().get_pixel(4, 4).0;
    assert!(pixel.iter().all(|&c| c >= 235), "expected white, got {:?}", pixel);
}
