//! Uniform State
//!
//! [`PulseUniforms`] is the time-driven uniform block refreshed every frame:
//! a single scale factor following `size(t) = 1 + 0.5 * sin(2t)` for elapsed
//! seconds `t`. The value oscillates inside [0.5, 1.5] with period pi and
//! starts at exactly 1.0. The layout matches the WGSL-side struct
//! (`size: f32`), so the block can be written straight into a uniform
//! buffer.

use bytemuck::{Pod, Zeroable};

/// The per-frame uniform block.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct PulseUniforms {
    /// Scale applied to the drawn geometry.
    pub size: f32,
}

impl PulseUniforms {
    /// The uniform state at `elapsed` seconds.
    ///
    /// Deterministic in `elapsed`: the same instant always produces the
    /// same block.
    #[must_use]
    pub fn at(elapsed: f32) -> Self {
        Self {
            size: 1.0 + 0.5 * (2.0 * elapsed).sin(),
        }
    }

    /// Raw bytes for queue writes.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(self)
    }
}

impl Default for PulseUniforms {
    fn default() -> Self {
        Self::at(0.0)
    }
}
