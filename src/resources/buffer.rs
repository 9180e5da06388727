//! GPU Buffers
//!
//! [`GpuBuffer`] wraps a `wgpu::Buffer` together with its creation facts and
//! an explicit mapping state. Buffers come in two flavors:
//!
//! - **Mapped at creation**: a host-visible staging window is open until
//!   [`GpuBuffer::unmap`] is called. Writing through the map and unmapping
//!   are only legal while the window is open; handing the buffer to the GPU
//!   is only legal after it closes.
//! - **Queue-written**: created unmapped and refreshed with
//!   [`GpuBuffer::queue_write`] (uniform buffers use this every frame).
//!
//! Violating the mapping protocol is a reported error, never a wgpu
//! validation panic at submit time.

use crate::errors::{GlintError, Result};

// ============================================================================
// Mapping state
// ============================================================================

/// Mapping state of a buffer's host-visible staging window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MapState {
    /// Created with `mapped_at_creation`; the staging window is open.
    Mapped,
    /// Unmapped; the buffer is usable by the GPU.
    Ready,
}

impl MapState {
    /// Returns `true` while the staging window is open.
    #[inline]
    #[must_use]
    pub fn is_mapped(self) -> bool {
        matches!(self, Self::Mapped)
    }
}

fn require_mapped(state: MapState, label: &str) -> Result<()> {
    if state.is_mapped() {
        Ok(())
    } else {
        Err(GlintError::BufferNotMapped(label.to_string()))
    }
}

fn require_ready(state: MapState, label: &str) -> Result<()> {
    if state.is_mapped() {
        Err(GlintError::BufferStillMapped(label.to_string()))
    } else {
        Ok(())
    }
}

fn check_range(size: u64, offset: u64, len: u64, label: &str) -> Result<()> {
    let end = offset.checked_add(len);
    if end.is_some_and(|end| end <= size) {
        Ok(())
    } else {
        Err(GlintError::BufferWriteOutOfBounds(format!(
            "write of {len} bytes at offset {offset} exceeds buffer '{label}' ({size} bytes)"
        )))
    }
}

// ============================================================================
// GpuBuffer
// ============================================================================

/// A GPU buffer with tracked size, usage, and mapping state.
pub struct GpuBuffer {
    buffer: wgpu::Buffer,
    size: u64,
    usage: wgpu::BufferUsages,
    label: String,
    state: MapState,
}

impl GpuBuffer {
    /// Creates an unmapped buffer of `size` bytes.
    ///
    /// Pair with [`queue_write`](Self::queue_write) to fill it; `usage` must
    /// then include [`wgpu::BufferUsages::COPY_DST`].
    #[must_use]
    pub fn new(device: &wgpu::Device, label: &str, size: u64, usage: wgpu::BufferUsages) -> Self {
        let buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some(label),
            size,
            usage,
            mapped_at_creation: false,
        });

        Self {
            buffer,
            size,
            usage,
            label: label.to_string(),
            state: MapState::Ready,
        }
    }

    /// Creates a buffer of `size` bytes with its staging window open.
    ///
    /// Write host data with [`write_mapped`](Self::write_mapped), then close
    /// the window with [`unmap`](Self::unmap) before any GPU use.
    #[must_use]
    pub fn new_mapped(
        device: &wgpu::Device,
        label: &str,
        size: u64,
        usage: wgpu::BufferUsages,
    ) -> Self {
        let buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some(label),
            size,
            usage,
            mapped_at_creation: true,
        });

        Self {
            buffer,
            size,
            usage,
            label: label.to_string(),
            state: MapState::Mapped,
        }
    }

    /// Creates a buffer initialized with `data` through the mapped-at-creation
    /// window, returned already unmapped.
    #[must_use]
    pub fn from_data(
        device: &wgpu::Device,
        label: &str,
        data: &[u8],
        usage: wgpu::BufferUsages,
    ) -> Self {
        let mut buffer = Self::new_mapped(device, label, data.len() as u64, usage);
        {
            let mut view = buffer.buffer.slice(..).get_mapped_range_mut();
            view.copy_from_slice(data);
        }
        buffer.buffer.unmap();
        buffer.state = MapState::Ready;
        buffer
    }

    /// Copies `data` into the open staging window at byte `offset`.
    ///
    /// Fails when the window is closed or the write exceeds the buffer.
    pub fn write_mapped(&mut self, offset: u64, data: &[u8]) -> Result<()> {
        require_mapped(self.state, &self.label)?;
        check_range(self.size, offset, data.len() as u64, &self.label)?;

        let mut view = self
            .buffer
            .slice(offset..offset + data.len() as u64)
            .get_mapped_range_mut();
        view.copy_from_slice(data);
        Ok(())
    }

    /// Closes the staging window, making the buffer usable by the GPU.
    ///
    /// Fails when the buffer was not mapped.
    pub fn unmap(&mut self) -> Result<()> {
        require_mapped(self.state, &self.label)?;
        self.buffer.unmap();
        self.state = MapState::Ready;
        Ok(())
    }

    /// Writes `data` at byte `offset` through the queue.
    ///
    /// Fails while the staging window is still open or when the write
    /// exceeds the buffer.
    pub fn queue_write(&self, queue: &wgpu::Queue, offset: u64, data: &[u8]) -> Result<()> {
        require_ready(self.state, &self.label)?;
        check_range(self.size, offset, data.len() as u64, &self.label)?;
        queue.write_buffer(&self.buffer, offset, data);
        Ok(())
    }

    /// Borrows the underlying buffer for GPU use (binding, vertex input).
    ///
    /// Fails while the staging window is still open.
    pub fn raw_ready(&self) -> Result<&wgpu::Buffer> {
        require_ready(self.state, &self.label)?;
        Ok(&self.buffer)
    }

    /// Size in bytes.
    #[inline]
    #[must_use]
    pub fn size(&self) -> u64 {
        self.size
    }

    /// Declared usage flags.
    #[inline]
    #[must_use]
    pub fn usage(&self) -> wgpu::BufferUsages {
        self.usage
    }

    /// Debug label.
    #[inline]
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Returns `true` while the staging window is open.
    #[inline]
    #[must_use]
    pub fn is_mapped(&self) -> bool {
        self.state.is_mapped()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mapped_state_accepts_map_operations() {
        assert!(require_mapped(MapState::Mapped, "vb").is_ok());
        assert!(require_ready(MapState::Ready, "vb").is_ok());
    }

    #[test]
    fn ready_state_rejects_map_operations() {
        let err = require_mapped(MapState::Ready, "vb").unwrap_err();
        assert!(matches!(err, GlintError::BufferNotMapped(label) if label == "vb"));
    }

    #[test]
    fn mapped_state_rejects_gpu_use() {
        let err = require_ready(MapState::Mapped, "vb").unwrap_err();
        assert!(matches!(err, GlintError::BufferStillMapped(label) if label == "vb"));
    }

    #[test]
    fn range_check_accepts_exact_fit() {
        assert!(check_range(36, 0, 36, "vb").is_ok());
        assert!(check_range(36, 12, 24, "vb").is_ok());
    }

    #[test]
    fn range_check_rejects_overflow() {
        assert!(check_range(36, 0, 37, "vb").is_err());
        assert!(check_range(36, 36, 1, "vb").is_err());
        assert!(check_range(36, u64::MAX, 2, "vb").is_err());
    }
}
