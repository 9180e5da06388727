//! Vertex Layout and Pipeline Builder Tests
//!
//! Tests for:
//! - Vertex blueprint validation (ordering, overlap, stride, locations)
//! - The canonical 36-byte position/color/uv layout
//! - Blueprint-to-wgpu layout mapping
//! - Color target defaults (replace blending, all channels)

use glint::errors::GlintError;
use glint::pipeline::{ColorTarget, VertexBufferBlueprint};

fn attr(format: wgpu::VertexFormat, offset: u64, shader_location: u32) -> wgpu::VertexAttribute {
    wgpu::VertexAttribute {
        format,
        offset,
        shader_location,
    }
}

/// The demo's interleaved layout: vec3 position, vec4 color, vec2 uv.
fn position_color_uv() -> Vec<wgpu::VertexAttribute> {
    vec![
        attr(wgpu::VertexFormat::Float32x3, 0, 0),
        attr(wgpu::VertexFormat::Float32x4, 12, 1),
        attr(wgpu::VertexFormat::Float32x2, 28, 2),
    ]
}

// ============================================================================
// Vertex Blueprint Validation
// ============================================================================

#[test]
fn canonical_36_byte_layout_validates() {
    let blueprint = VertexBufferBlueprint::vertex(36, position_color_uv());
    assert!(blueprint.is_ok());
}

#[test]
fn empty_attribute_list_is_rejected() {
    let err = VertexBufferBlueprint::vertex(36, vec![]).unwrap_err();
    assert!(matches!(err, GlintError::InvalidVertexLayout(_)));
}

#[test]
fn overlapping_attributes_are_rejected() {
    // Color starts at byte 8, inside the 12-byte position.
    let err = VertexBufferBlueprint::vertex(
        36,
        vec![
            attr(wgpu::VertexFormat::Float32x3, 0, 0),
            attr(wgpu::VertexFormat::Float32x4, 8, 1),
        ],
    )
    .unwrap_err();

    match err {
        GlintError::InvalidVertexLayout(msg) => {
            assert!(msg.contains("overlaps"), "message was: {msg}");
        }
        other => panic!("expected InvalidVertexLayout, got {other:?}"),
    }
}

#[test]
fn attributes_past_the_stride_are_rejected() {
    // The vec2 at offset 32 ends at byte 40, past a 36-byte stride.
    let err = VertexBufferBlueprint::vertex(
        36,
        vec![
            attr(wgpu::VertexFormat::Float32x3, 0, 0),
            attr(wgpu::VertexFormat::Float32x2, 32, 1),
        ],
    )
    .unwrap_err();

    match err {
        GlintError::InvalidVertexLayout(msg) => {
            assert!(msg.contains("stride"), "message was: {msg}");
        }
        other => panic!("expected InvalidVertexLayout, got {other:?}"),
    }
}

#[test]
fn duplicate_shader_locations_are_rejected() {
    let err = VertexBufferBlueprint::vertex(
        36,
        vec![
            attr(wgpu::VertexFormat::Float32x3, 0, 0),
            attr(wgpu::VertexFormat::Float32x4, 12, 0),
        ],
    )
    .unwrap_err();

    match err {
        GlintError::InvalidVertexLayout(msg) => {
            assert!(msg.contains("location 0"), "message was: {msg}");
        }
        other => panic!("expected InvalidVertexLayout, got {other:?}"),
    }
}

#[test]
fn attributes_may_leave_tail_padding() {
    // A stride larger than the attribute span is legal (aligned vertices).
    let blueprint = VertexBufferBlueprint::vertex(48, position_color_uv());
    assert!(blueprint.is_ok());
}

// ============================================================================
// wgpu Layout Mapping
// ============================================================================

#[test]
fn as_wgpu_carries_stride_step_and_attributes() {
    let blueprint = VertexBufferBlueprint::vertex(36, position_color_uv()).unwrap();
    let layout = blueprint.as_wgpu();

    assert_eq!(layout.array_stride, 36);
    assert_eq!(layout.step_mode, wgpu::VertexStepMode::Vertex);
    assert_eq!(layout.attributes.len(), 3);
    assert_eq!(layout.attributes[1].offset, 12);
    assert_eq!(layout.attributes[2].shader_location, 2);
}

// ============================================================================
// Color Targets
// ============================================================================

#[test]
fn color_target_defaults_to_replace_and_all_channels() {
    let target = ColorTarget::new(wgpu::TextureFormat::Bgra8UnormSrgb);

    assert_eq!(target.format, wgpu::TextureFormat::Bgra8UnormSrgb);
    assert_eq!(target.blend, Some(wgpu::BlendState::REPLACE));
    assert_eq!(target.write_mask, wgpu::ColorWrites::ALL);
}
