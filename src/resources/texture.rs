//! GPU Textures
//!
//! [`GpuTexture`] wraps a 2D `wgpu::Texture` together with its creation
//! facts. Uploads go through [`GpuTexture::write`], which validates the data
//! length against the texture extent and the declared row stride before the
//! queue ever sees the bytes. The tight stride for RGBA8-class formats is
//! `bytes_per_pixel * width`; a caller declaring padded rows must pass a
//! stride at least that large.

use crate::errors::{GlintError, Result};

// ============================================================================
// Descriptor
// ============================================================================

/// Creation parameters for a 2D texture.
#[derive(Debug, Clone)]
pub struct TextureDesc<'a> {
    /// Debug label.
    pub label: Option<&'a str>,
    /// Width in texels.
    pub width: u32,
    /// Height in texels.
    pub height: u32,
    /// Texel format.
    pub format: wgpu::TextureFormat,
    /// Number of mip levels (the demo uses 1).
    pub mip_level_count: u32,
    /// Sample count (1 unless multisampled).
    pub sample_count: u32,
    /// Usage flags.
    pub usage: wgpu::TextureUsages,
}

impl Default for TextureDesc<'_> {
    fn default() -> Self {
        Self {
            label: None,
            width: 1,
            height: 1,
            format: wgpu::TextureFormat::Rgba8Unorm,
            mip_level_count: 1,
            sample_count: 1,
            usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
        }
    }
}

// ============================================================================
// Upload validation
// ============================================================================

/// Bytes per row without padding, if the format has a fixed texel size.
fn tight_bytes_per_row(format: wgpu::TextureFormat, width: u32) -> Option<u32> {
    format
        .block_copy_size(None)
        .map(|block_size| block_size * width)
}

fn validate_upload(
    format: wgpu::TextureFormat,
    width: u32,
    height: u32,
    bytes_per_row: u32,
    data_len: usize,
) -> Result<()> {
    let tight = tight_bytes_per_row(format, width).ok_or_else(|| {
        GlintError::TextureUploadMismatch(format!("format {format:?} has no fixed texel size"))
    })?;

    if bytes_per_row < tight {
        return Err(GlintError::TextureUploadMismatch(format!(
            "row stride {bytes_per_row} is below the tight stride {tight} for width {width}"
        )));
    }

    let expected = bytes_per_row as usize * height as usize;
    if data_len != expected {
        return Err(GlintError::TextureUploadMismatch(format!(
            "got {data_len} bytes, expected {expected} ({bytes_per_row} bytes per row x {height} rows)"
        )));
    }

    Ok(())
}

// ============================================================================
// GpuTexture
// ============================================================================

/// A 2D GPU texture with tracked extent, format, and usage.
pub struct GpuTexture {
    texture: wgpu::Texture,
    size: wgpu::Extent3d,
    format: wgpu::TextureFormat,
    mip_level_count: u32,
    usage: wgpu::TextureUsages,
}

impl GpuTexture {
    /// Creates an empty 2D texture described by `desc`.
    #[must_use]
    pub fn new_2d(device: &wgpu::Device, desc: &TextureDesc<'_>) -> Self {
        let size = wgpu::Extent3d {
            width: desc.width,
            height: desc.height,
            depth_or_array_layers: 1,
        };

        let texture = device.create_texture(&wgpu::TextureDescriptor {
            label: desc.label,
            size,
            mip_level_count: desc.mip_level_count,
            sample_count: desc.sample_count,
            dimension: wgpu::TextureDimension::D2,
            format: desc.format,
            usage: desc.usage,
            view_formats: &[],
        });

        Self {
            texture,
            size,
            format: desc.format,
            mip_level_count: desc.mip_level_count,
            usage: desc.usage,
        }
    }

    /// Uploads `data` to mip level 0 with a tight row stride.
    ///
    /// Fails unless `data` is exactly `bytes_per_pixel * width * height`
    /// bytes. `usage` must include [`wgpu::TextureUsages::COPY_DST`].
    pub fn write(&self, queue: &wgpu::Queue, data: &[u8]) -> Result<()> {
        let bytes_per_row = tight_bytes_per_row(self.format, self.size.width).ok_or_else(|| {
            GlintError::TextureUploadMismatch(format!(
                "format {:?} has no fixed texel size",
                self.format
            ))
        })?;
        self.write_with_stride(queue, data, bytes_per_row)
    }

    /// Uploads `data` to mip level 0 with an explicit row stride.
    ///
    /// The stride must be at least the tight stride for the texture width,
    /// and `data` must cover exactly `bytes_per_row * height` bytes.
    pub fn write_with_stride(
        &self,
        queue: &wgpu::Queue,
        data: &[u8],
        bytes_per_row: u32,
    ) -> Result<()> {
        validate_upload(
            self.format,
            self.size.width,
            self.size.height,
            bytes_per_row,
            data.len(),
        )?;

        queue.write_texture(
            wgpu::TexelCopyTextureInfo {
                texture: &self.texture,
                mip_level: 0,
                origin: wgpu::Origin3d::ZERO,
                aspect: wgpu::TextureAspect::All,
            },
            data,
            wgpu::TexelCopyBufferLayout {
                offset: 0,
                bytes_per_row: Some(bytes_per_row),
                rows_per_image: Some(self.size.height),
            },
            self.size,
        );

        Ok(())
    }

    /// Creates a view covering the whole texture.
    #[must_use]
    pub fn default_view(&self) -> wgpu::TextureView {
        self.texture
            .create_view(&wgpu::TextureViewDescriptor::default())
    }

    /// The underlying texture.
    #[inline]
    #[must_use]
    pub fn raw(&self) -> &wgpu::Texture {
        &self.texture
    }

    /// Extent in texels.
    #[inline]
    #[must_use]
    pub fn size(&self) -> wgpu::Extent3d {
        self.size
    }

    /// Texel format.
    #[inline]
    #[must_use]
    pub fn format(&self) -> wgpu::TextureFormat {
        self.format
    }

    /// Number of mip levels.
    #[inline]
    #[must_use]
    pub fn mip_level_count(&self) -> u32 {
        self.mip_level_count
    }

    /// Declared usage flags.
    #[inline]
    #[must_use]
    pub fn usage(&self) -> wgpu::TextureUsages {
        self.usage
    }
}

// ============================================================================
// Tests
// ============================================================================
