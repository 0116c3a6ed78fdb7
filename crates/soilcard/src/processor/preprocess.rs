use std::io::Cursor;
use std::path::Path;

use image::{GrayImage, ImageFormat, Luma};
use tempfile::NamedTempFile;

use crate::error::ProcessError;

const SHARPEN_SIGMA: f32 = 1.0;
const SHARPEN_THRESHOLD: i32 = 2;

/// Share of pixels clipped at each end of the histogram when stretching.
const CLIP_PERCENT: u64 = 1;

/// Greyscale, contrast-normalize and sharpen an encoded image.
pub fn preprocess_image(image_data: &[u8]) -> Result<GrayImage, ProcessError> {
    let img = image::load_from_memory(image_data)
        .map_err(|e| ProcessError::Preprocessing(format!("Failed to load image: {}", e)))?;

    let gray = img.to_luma8();
    let normalized = stretch_contrast(&gray);

    Ok(image::imageops::unsharpen(
        &normalized,
        SHARPEN_SIGMA,
        SHARPEN_THRESHOLD,
    ))
}

/// Writes the preprocessed image to a temporary PNG. The file is removed
/// when the returned handle is dropped.
pub fn preprocess_to_temp(
    image_data: &[u8],
    temp_dir: Option<&Path>,
) -> Result<NamedTempFile, ProcessError> {
    let processed = preprocess_image(image_data)?;

    let mut builder = tempfile::Builder::new();
    builder.prefix("soilcard_pre_").suffix(".png");
    let temp = match temp_dir {
        Some(dir) => builder.tempfile_in(dir),
        None => builder.tempfile(),
    }
    .map_err(|e| ProcessError::Preprocessing(format!("Failed to create temp file: {}", e)))?;

    let mut png_data = Vec::new();
    processed
        .write_to(&mut Cursor::new(&mut png_data), ImageFormat::Png)
        .map_err(|e| ProcessError::Preprocessing(format!("Failed to encode image: {}", e)))?;

    std::fs::write(temp.path(), &png_data)
        .map_err(|e| ProcessError::Preprocessing(format!("Failed to write temp image: {}", e)))?;

    Ok(temp)
}

/// Linear stretch between the 1st and 99th luminance percentiles.
fn stretch_contrast(gray: &GrayImage) -> GrayImage {
    let mut histogram = [0u64; 256];
    for pixel in gray.pixels() {
        histogram[pixel.0[0] as usize] += 1;
    }

    let total = u64::from(gray.width()) * u64::from(gray.height());
    let cutoff = total * CLIP_PERCENT / 100;

    let mut seen = 0;
    let low = (0..=255u8)
        .find(|&level| {
            seen += histogram[level as usize];
            seen > cutoff
        })
        .unwrap_or(0);

    let mut seen = 0;
    let high = (0..=255u8)
        .rev()
        .find(|&level| {
            seen += histogram[level as usize];
            seen > cutoff
        })
        .unwrap_or(255);

    if high <= low {
        return gray.clone();
    }

    let scale = 255.0 / f32::from(high - low);
    GrayImage::from_fn(gray.width(), gray.height(), |x, y| {
        let value = gray.get_pixel(x, y).0[0];
        let stretched = (f32::from(value.saturating_sub(low)) * scale).round();
        Luma([stretched.min(255.0) as u8])
    })
}
