use image::imageops::{self, FilterType};
use ndarray::Array4;

use super::InferenceError;

/// Decodes an uploaded image into a `1 x height x width x 3` batch of RGB
/// values scaled to `[0, 1]`.
pub fn preprocess(bytes: &[u8], size: [u32; 2]) -> Result<Array4<f32>, InferenceError> {
    let [width, height] = size;
    let rgb = image::load_from_memory(bytes)?.to_rgb8();
    let resized = imageops::resize(&rgb, width, height, FilterType::CatmullRom);

    let mut input = Array4::<f32>::zeros((1, height as usize, width as usize, 3));
    for (x, y, pixel) in resized.enumerate_pixels() {
        for (channel, value) in pixel.0.iter().enumerate() {
            input[[0, y as usize, x as usize, channel]] = *value as f32 / 255.0;
        }
    }
    Ok(input)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageFormat, Rgb, RgbImage};
    use std::io::Cursor;

    fn png(width: u32, height: u32, color: [u8; 3]) -> Vec<u8> {
        let image = RgbImage::from_pixel(width, height, Rgb(color));
        let mut bytes = Cursor::new(Vec::new());
        image.write_to(&mut bytes, ImageFormat::Png).unwrap();
        bytes.into_inner()
    }

    #[test]
    fn resizes_to_model_input() {
        let input = preprocess(&png(40, 30, [255, 255, 255]), [224, 224]).unwrap();
        assert_eq!(input.shape(), &[1, 224, 224, 3]);
    }

    #[test]
    fn scales_channels_to_unit_range() {
        let input = preprocess(&png(8, 8, [255, 0, 51]), [4, 4]).unwrap();
        let step = 1.0 / 255.0;
        assert!((input[[0, 2, 2, 0]] - 1.0).abs() <= step);
        assert!(input[[0, 2, 2, 1]].abs() <= step);
        assert!((input[[0, 2, 2, 2]] - 0.2).abs() <= step);
    }

    #[test]
    fn rejects_non_images() {
        let result = preprocess(b"definitely not a png", [224, 224]);
        assert!(matches!(result, Err(InferenceError::Decode(_))));
    }
}
