//! # Image Processing Module
//!
//! Questo modulo transcodifica una singola immagine in JPEG usando il crate
//! `image`, interamente in memoria.
//!
//! ## Pipeline
//!
//! 1. **Rilevamento formato**: dal contenuto, non dall'estensione
//!    (`with_guessed_format`), quindi qualsiasi formato abilitato nel crate
//!    `image` è accettato
//! 2. **Decodifica**: raster + etichetta del formato (`png`, `jpeg`, `webp`...)
//! 3. **Log**: formato e dimensioni in pixel
//! 4. **Encoding**: JPEG a qualità fissa [`JPEG_QUALITY`]
//!
//! ## Error Handling
//!
//! - Input non decodificabile: [`ConvertError::Decode`]
//! - Encoding fallito: [`ConvertError::Encode`] (raro, ma mai ignorato)
//!
//! Nessun accesso al filesystem: il chiamante fornisce e consuma i byte.
//!
//! ## Esempio
//!
//! ```ignore
//! let png = std::fs::read("cover.png")?;
//! let transcoded = ImageProcessor::transcode(&png)?;
//! std::fs::write("cover.jpg", &transcoded.bytes)?;
//! ```

use crate::config::JPEG_QUALITY;
use crate::error::{ConvertError, Result};
use image::codecs::jpeg::JpegEncoder;
use image::{DynamicImage, ImageFormat};
use std::io::Cursor;
use tracing::info;

/// Result of a successful transcode
#[derive(Debug, Clone)]
pub struct Transcoded {
    /// Encoded JPEG bytes
    pub bytes: Vec<u8>,
    /// Format label reported by the decoder (`png`, `jpeg`, ...)
    pub source_format: String,
    pub width: u32,
    pub height: u32,
}

/// Stateless JPEG transcoder
pub struct ImageProcessor;

impl ImageProcessor {
    /// Decodes `input` and re-encodes it as JPEG at [`JPEG_QUALITY`].
    pub fn transcode(input: &[u8]) -> Result<Transcoded> {
        let (image, source_format) = Self::decode(input)?;
        let (width, height) = (image.width(), image.height());
        info!("    {} {}x{}", source_format, width, height);

        let bytes = Self::encode_jpeg(&image)?;

        Ok(Transcoded {
            bytes,
            source_format,
            width,
            height,
        })
    }

    /// Decodes an image, sniffing the format from its content
    pub fn decode(input: &[u8]) -> Result<(DynamicImage, String)> {
        let reader = image::io::Reader::new(Cursor::new(input))
            .with_guessed_format()
            .map_err(|e| ConvertError::Decode(image::ImageError::IoError(e)))?;

        let format = reader.format();
        let image = reader.decode().map_err(ConvertError::Decode)?;
        let label = format
            .map(Self::format_label)
            .unwrap_or_else(|| "unknown".to_string());
        Ok((image, label))
    }

    /// Encodes a raster as JPEG; alpha is dropped since JPEG cannot carry it
    pub fn encode_jpeg(image: &DynamicImage) -> Result<Vec<u8>> {
        let rgb = image.to_rgb8();
        let mut buffer = Vec::new();
        JpegEncoder::new_with_quality(&mut buffer, JPEG_QUALITY)
            .encode_image(&rgb)
            .map_err(ConvertError::Encode)?;
        Ok(buffer)
    }

    /// Lower-case name for a decoded format (`Png` -> `png`)
    fn format_label(format: ImageFormat) -> String {
        format!("{:?}", format).to_lowercase()
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use image::{GenericImageView, Rgb, RgbImage, Rgba, RgbaImage};

    /// PNG fixture of the given size
    pub(crate) fn png_bytes(width: u32, height: u32) -> Vec<u8> {
        let img = RgbImage::from_fn(width, height, |x, y| Rgb([(x * 7) as u8, (y * 5) as u8, 128]));
        let img = DynamicImage::ImageRgb8(img);
        let mut out = Cursor::new(Vec::new());
        img.write_to(&mut out, ImageFormat::Png).unwrap();
        out.into_inner()
    }

    /// JPEG fixture of the given size
    pub(crate) fn jpeg_bytes(width: u32, height: u32) -> Vec<u8> {
        let img = RgbImage::from_pixel(width, height, Rgb([200, 40, 40]));
        let mut out = Vec::new();
        JpegEncoder::new_with_quality(&mut out, 75)
            .encode_image(&img)
            .unwrap();
        out
    }

    #[test]
    fn test_png_transcodes_to_jpeg_with_same_bounds() {
        let result = ImageProcessor::transcode(&png_bytes(32, 20)).unwrap();
        assert_eq!(result.source_format, "png");
        assert_eq!((result.width, result.height), (32, 20));

        let decoded = image::load_from_memory(&result.bytes).unwrap();
        assert_eq!(image::guess_format(&result.bytes).unwrap(), ImageFormat::Jpeg);
        assert_eq!(decoded.dimensions(), (32, 20));
    }

    #[test]
    fn test_jpeg_is_reencoded() {
        let result = ImageProcessor::transcode(&jpeg_bytes(16, 16)).unwrap();
        assert_eq!(result.source_format, "jpeg");
        assert_eq!(image::guess_format(&result.bytes).unwrap(), ImageFormat::Jpeg);
    }

    #[test]
    fn test_alpha_png_is_flattened() {
        let img = DynamicImage::ImageRgba8(RgbaImage::from_pixel(8, 4, Rgba([10, 20, 30, 100])));
        let mut out = Cursor::new(Vec::new());
        img.write_to(&mut out, ImageFormat::Png).unwrap();

        let result = ImageProcessor::transcode(out.get_ref()).unwrap();
        let decoded = image::load_from_memory(&result.bytes).unwrap();
        assert_eq!(decoded.dimensions(), (8, 4));
    }

    #[test]
    fn test_garbage_is_decode_error() {
        let err = ImageProcessor::transcode(b"definitely not an image").unwrap_err();
        assert!(matches!(err, ConvertError::Decode(_)));
    }

    #[test]
    fn test_truncated_png_is_decode_error() {
        let png = png_bytes(16, 16);
        let err = ImageProcessor::transcode(&png[..png.len() / 2]).unwrap_err();
        assert!(matches!(err, ConvertError::Decode(_)));
    }

    #[test]
    fn test_format_label() {
        assert_eq!(ImageProcessor::format_label(ImageFormat::Png), "png");
        assert_eq!(ImageProcessor::format_label(ImageFormat::Jpeg), "jpeg");
    }
}
