//! Samplers
//!
//! [`SamplerConfig`] is plain data describing a sampler; `create` turns it
//! into a `wgpu::Sampler`. Defaults: clamp-to-edge addressing, linear
//! filtering, LOD clamped to [0, 1], no comparison, anisotropy off.

/// Sampler creation parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SamplerConfig {
    pub address_mode_u: wgpu::AddressMode,
    pub address_mode_v: wgpu::AddressMode,
    pub address_mode_w: wgpu::AddressMode,
    pub mag_filter: wgpu::FilterMode,
    pub min_filter: wgpu::FilterMode,
    pub mipmap_filter: wgpu::MipmapFilterMode,
    pub lod_min_clamp: f32,
    pub lod_max_clamp: f32,
    /// Comparison function (shadow samplers). `None` for plain filtering.
    pub compare: Option<wgpu::CompareFunction>,
    /// Anisotropic filtering level (1 = off).
    pub anisotropy_clamp: u16,
}

impl Default for SamplerConfig {
    fn default() -> Self {
        Self {
            address_mode_u: wgpu::AddressMode::ClampToEdge,
            address_mode_v: wgpu::AddressMode::ClampToEdge,
            address_mode_w: wgpu::AddressMode::ClampToEdge,
            mag_filter: wgpu::FilterMode::Linear,
            min_filter: wgpu::FilterMode::Linear,
            mipmap_filter: wgpu::MipmapFilterMode::Linear,
            lod_min_clamp: 0.0,
            lod_max_clamp: 1.0,
            compare: None,
            anisotropy_clamp: 1,
        }
    }
}

impl SamplerConfig {
    /// Builds the wgpu descriptor for this configuration.
    #[must_use]
    pub fn descriptor<'a>(&self, label: Option<&'a str>) -> wgpu::SamplerDescriptor<'a> {
        wgpu::SamplerDescriptor {
            label,
            address_mode_u: self.address_mode_u,
            address_mode_v: self.address_mode_v,
            address_mode_w: self.address_mode_w,
            mag_filter: self.mag_filter,
            min_filter: self.min_filter,
            mipmap_filter: self.mipmap_filter,
            lod_min_clamp: self.lod_min_clamp,
            lod_max_clamp: self.lod_max_clamp,
            compare: self.compare,
            anisotropy_clamp: self.anisotropy_clamp,
            border_color: None,
        }
    }

    /// Creates the sampler on `device`.
    #[must_use]
    pub fn create(&self, device: &wgpu::Device, label: Option<&str>) -> wgpu::Sampler {
        device.create_sampler(&self.descriptor(label))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_matches_clamped_linear_sampling() {
        let config = SamplerConfig::default();
        assert_eq!(config.address_mode_u, wgpu::AddressMode::ClampToEdge);
        assert_eq!(config.address_mode_v, wgpu::AddressMode::ClampToEdge);
        assert_eq!(config.mag_filter, wgpu::FilterMode::Linear);
        assert_eq!(config.min_filter, wgpu::FilterMode::Linear);
        assert_eq!(config.lod_min_clamp, 0.0);
        assert_eq!(config.lod_max_clamp, 1.0);
        assert_eq!(config.compare, None);
        assert_eq!(config.anisotropy_clamp, 1);
    }

    #[test]
    fn descriptor_carries_all_fields() {
        let config = SamplerConfig {
            address_mode_u: wgpu::AddressMode::Repeat,
            lod_max_clamp: 8.0,
            anisotropy_clamp: 4,
            ..Default::default()
        };
        let desc = config.descriptor(Some("demo sampler"));
        assert_eq!(desc.label, Some("demo sampler"));
        assert_eq!(desc.address_mode_u, wgpu::AddressMode::Repeat);
        assert_eq!(desc.address_mode_v, wgpu::AddressMode::ClampToEdge);
        assert_eq!(desc.lod_max_clamp, 8.0);
        assert_eq!(desc.anisotropy_clamp, 4);
        assert_eq!(desc.border_color, None);
    }
}
