//! Bind Group Layout Tests
//!
//! Tests for:
//! - Blueprint-to-wgpu layout entry mapping (binding type, visibility)
//! - Structural validation of bind group entries against a blueprint
//! - Mismatch reporting: arity, binding index, and kind, naming the slot

use glint::errors::GlintError;
use glint::resources::{BindingKind, BindingLayoutBlueprint, LayoutSlot};

fn demo_blueprint() -> BindingLayoutBlueprint {
    BindingLayoutBlueprint::new(
        "demo",
        vec![
            LayoutSlot::uniform(0, wgpu::ShaderStages::VERTEX),
            LayoutSlot::sampler(1, wgpu::ShaderStages::FRAGMENT),
            LayoutSlot::texture_2d(2, wgpu::ShaderStages::FRAGMENT),
        ],
    )
}

// ============================================================================
// Layout Entry Mapping
// ============================================================================

#[test]
fn layout_entries_carry_binding_and_visibility() {
    let entries = demo_blueprint().layout_entries();
    assert_eq!(entries.len(), 3);

    assert_eq!(entries[0].binding, 0);
    assert_eq!(entries[0].visibility, wgpu::ShaderStages::VERTEX);
    assert_eq!(entries[1].binding, 1);
    assert_eq!(entries[1].visibility, wgpu::ShaderStages::FRAGMENT);
    assert_eq!(entries[2].binding, 2);
}

#[test]
fn uniform_slot_maps_to_uniform_buffer_binding() {
    let entries = demo_blueprint().layout_entries();
    assert!(matches!(
        entries[0].ty,
        wgpu::BindingType::Buffer {
            ty: wgpu::BufferBindingType::Uniform,
            has_dynamic_offset: false,
            ..
        }
    ));
}

#[test]
fn sampler_slot_maps_to_filtering_sampler() {
    let entries = demo_blueprint().layout_entries();
    assert!(matches!(
        entries[1].ty,
        wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Filtering)
    ));
}

#[test]
fn texture_slot_maps_to_filterable_2d_float() {
    let entries = demo_blueprint().layout_entries();
    assert!(matches!(
        entries[2].ty,
        wgpu::BindingType::Texture {
            sample_type: wgpu::TextureSampleType::Float { filterable: true },
            view_dimension: wgpu::TextureViewDimension::D2,
            multisampled: false,
        }
    ));
}

// ============================================================================
// Structural Validation
// ============================================================================

#[test]
fn matching_entries_validate() {
    let blueprint = demo_blueprint();
    let entries = [
        (0, BindingKind::UniformBuffer),
        (1, BindingKind::Sampler),
        (2, BindingKind::Texture2d),
    ];
    assert!(blueprint.validate(&entries).is_ok());
}

#[test]
fn arity_mismatch_reports_counts() {
    let blueprint = demo_blueprint();
    let entries = [(0, BindingKind::UniformBuffer), (1, BindingKind::Sampler)];

    let err = blueprint.validate(&entries).unwrap_err();
    match err {
        GlintError::LayoutMismatch(msg) => {
            assert!(msg.contains("3 slots"), "message was: {msg}");
            assert!(msg.contains("2 entries"), "message was: {msg}");
        }
        other => panic!("expected LayoutMismatch, got {other:?}"),
    }
}

#[test]
fn wrong_binding_index_names_the_slot() {
    let blueprint = demo_blueprint();
    let entries = [
        (0, BindingKind::UniformBuffer),
        (5, BindingKind::Sampler),
        (2, BindingKind::Texture2d),
    ];

    let err = blueprint.validate(&entries).unwrap_err();
    match err {
        GlintError::LayoutMismatch(msg) => {
            assert!(msg.contains("expected binding 1"), "message was: {msg}");
            assert!(msg.contains("got binding 5"), "message was: {msg}");
        }
        other => panic!("expected LayoutMismatch, got {other:?}"),
    }
}

#[test]
fn wrong_kind_names_the_slot() {
    // Sampler and texture swapped relative to the blueprint.
    let blueprint = demo_blueprint();
    let entries = [
        (0, BindingKind::UniformBuffer),
        (1, BindingKind::Texture2d),
        (2, BindingKind::Sampler),
    ];

    let err = blueprint.validate(&entries).unwrap_err();
    match err {
        GlintError::LayoutMismatch(msg) => {
            assert!(msg.contains("binding 1"), "message was: {msg}");
            assert!(msg.contains("Sampler"), "message was: {msg}");
            assert!(msg.contains("Texture2d"), "message was: {msg}");
        }
        other => panic!("expected LayoutMismatch, got {other:?}"),
    }
}

#[test]
fn empty_blueprint_accepts_empty_entries() {
    let blueprint = BindingLayoutBlueprint::new("empty", vec![]);
    assert!(blueprint.validate(&[]).is_ok());
    assert!(blueprint.validate(&[(0, BindingKind::Sampler)]).is_err());
}
