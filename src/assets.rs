//! Image Assets
//!
//! Decodes image files to RGBA8 pixel data ready for texture upload, plus
//! procedural constructors for running without assets on disk.

use std::path::Path;

use crate::errors::Result;

/// RGBA8 pixel data with its extent.
#[derive(Debug, Clone)]
pub struct PixelData {
    pub pixels: Vec<u8>,
    pub width: u32,
    pub height: u32,
}

impl PixelData {
    /// A solid-color image.
    #[must_use]
    pub fn solid(width: u32, height: u32, rgba: [u8; 4]) -> Self {
        let mut pixels = Vec::with_capacity(width as usize * height as usize * 4);
        for _ in 0..width * height {
            pixels.extend_from_slice(&rgba);
        }
        Self {
            pixels,
            width,
            height,
        }
    }

    /// A two-color checkerboard with `cell` texels per square.
    #[must_use]
    pub fn checkerboard(width: u32, height: u32, cell: u32, a: [u8; 4], b: [u8; 4]) -> Self {
        let cell = cell.max(1);
        let mut pixels = Vec::with_capacity(width as usize * height as usize * 4);
        for y in 0..height {
            for x in 0..width {
                let even = ((x / cell) + (y / cell)) % 2 == 0;
                pixels.extend_from_slice(if even { &a } else { &b });
            }
        }
        Self {
            pixels,
            width,
            height,
        }
    }

    /// Bytes per row without padding.
    #[inline]
    #[must_use]
    pub fn bytes_per_row(&self) -> u32 {
        self.width * 4
    }
}

/// Loads an image file and converts it to RGBA8.
pub fn load_rgba8(path: impl AsRef<Path>) -> Result<PixelData> {
    let img = image::open(path)?;
    let rgba = img.into_rgba8();
    let (width, height) = (rgba.width(), rgba.height());

    Ok(PixelData {
        pixels: rgba.into_raw(),
        width,
        height,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn solid_fills_every_texel() {
        let data = PixelData::solid(4, 2, [10, 20, 30, 255]);
        assert_eq!(data.pixels.len(), 4 * 2 * 4);
        assert_eq!(&data.pixels[..4], &[10, 20, 30, 255]);
        assert_eq!(&data.pixels[28..], &[10, 20, 30, 255]);
        assert_eq!(data.bytes_per_row(), 16);
    }

    #[test]
    fn checkerboard_alternates_cells() {
        let white = [255, 255, 255, 255];
        let black = [0, 0, 0, 255];
        let data = PixelData::checkerboard(4, 4, 2, white, black);
        // (0,0) is in the first cell, (2,0) in the second.
        assert_eq!(&data.pixels[0..4], &white);
        assert_eq!(&data.pixels[8..12], &black);
        // (0,2) starts the second cell row.
        assert_eq!(&data.pixels[32..36], &black);
    }
}
