//! Letterhead asset loading.
//!
//! The branded layout draws one raster banner at the top of the first
//! page. A default banner ships with the crate; deployments can point at
//! their own PNG instead. Loading and decoding happen once per render,
//! before any page content is drawn, and any failure aborts the render
//! with `RenderError::AssetLoad`.

use std::path::Path;

use crate::error::RenderError;

/// Banner bundled with the crate.
static BUNDLED_LETTERHEAD: &[u8] = include_bytes!("../assets/letterhead.png");

/// A decoded letterhead image, as packed 8-bit RGB rows.
#[derive(Debug, Clone)]
pub struct Letterhead {
    pub width: u32,
    pub height: u32,
    pub rgb: Vec<u8>,
}

impl Letterhead {
    /// Decode the banner that ships with the crate.
    pub fn bundled() -> Result<Self, RenderError> {
        Self::decode(BUNDLED_LETTERHEAD)
    }

    /// Read and decode a banner from disk.
    pub async fn load(path: &Path) -> Result<Self, RenderError> {
        let bytes = tokio::fs::read(path)
            .await
            .map_err(|e| RenderError::AssetLoad(format!("{}: {}", path.display(), e)))?;
        Self::decode(&bytes)
    }

    /// Decode PNG bytes into packed RGB8.
    pub fn decode(bytes: &[u8]) -> Result<Self, RenderError> {
        let mut decoder = png::Decoder::new(bytes);
        decoder.set_transformations(png::Transformations::normalize_to_color8());
        let mut reader = decoder
            .read_info()
            .map_err(|e| RenderError::AssetLoad(e.to_string()))?;

        let mut buf = vec![0u8; reader.output_buffer_size()];
        let info = reader
            .next_frame(&mut buf)
            .map_err(|e| RenderError::AssetLoad(e.to_string()))?;
        buf.truncate(info.buffer_size());

        let rgb = match info.color_type {
            png::ColorType::Rgb => buf,
            png::ColorType::Rgba => buf
                .chunks_exact(4)
                .flat_map(|px| [px[0], px[1], px[2]])
                .collect(),
            png::ColorType::Grayscale => buf.iter().flat_map(|&g| [g, g, g]).collect(),
            png::ColorType::GrayscaleAlpha => buf
                .chunks_exact(2)
                .flat_map(|px| [px[0], px[0], px[0]])
                .collect(),
            other => {
                return Err(RenderError::AssetLoad(format!(
                    "Unsupported letterhead color type: {:?}",
                    other
                )))
            }
        };

        Ok(Self {
            width: info.width,
            height: info.height,
            rgb,
        })
    }

    /// Height-over-width ratio, used to scale the drawn banner
    /// proportionally at a fixed width.
    pub fn aspect(&self) -> f64 {
        f64::from(self.height) / f64::from(self.width)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_banner_decodes() {
        let banner = Letterhead::bundled().unwrap();
        assert_eq!(banner.width, 560);
        assert_eq!(banner.height, 120);
        assert_eq!(
            banner.rgb.len(),
            (banner.width * banner.height * 3) as usize
        );
    }

    #[test]
    fn garbage_bytes_fail_with_asset_error() {
        let err = Letterhead::decode(b"not a png").unwrap_err();
        assert!(matches!(err, RenderError::AssetLoad(_)));
    }

    #[tokio::test]
    async fn missing_path_fails_with_asset_error() {
        let err = Letterhead::load(Path::new("/nonexistent/banner.png"))
            .await
            .unwrap_err();
        assert!(matches!(err, RenderError::AssetLoad(_)));
    }

    #[test]
    fn aspect_is_proportional() {
        let banner = Letterhead::bundled().unwrap();
        assert!((banner.aspect() - 120.0 / 560.0).abs() < 1e-9);
    }
}
