//! Surface and Frame Loop Tests
//!
//! Tests for:
//! - Frame planning (proceed / reconfigure / skip) against polled window sizes
//! - Zero-size polls skipping acquisition without touching the configuration
//! - Stale configurations rebuilding at the next usable size, changed or not
//! - Frame-sequence bookkeeping (single-use targets, stale present rejection)
//! - Transient vs. fatal surface error classification
//! - Error monitor queryability

use glint::context::ErrorMonitor;
use glint::errors::GlintError;
use glint::surface::{FramePlan, FrameSequence, SurfaceState, plan_frame};

// ============================================================================
// Frame Planning
// ============================================================================

#[test]
fn matching_size_proceeds() {
    assert_eq!(
        plan_frame(SurfaceState::Configured, (800, 600), (800, 600)),
        FramePlan::Proceed
    );
}

#[test]
fn size_change_reconfigures_to_polled_extent() {
    assert_eq!(
        plan_frame(SurfaceState::Configured, (800, 600), (1024, 768)),
        FramePlan::Reconfigure {
            width: 1024,
            height: 768
        }
    );
}

#[test]
fn zero_size_skips() {
    let configured = (800, 600);
    assert_eq!(
        plan_frame(SurfaceState::Configured, configured, (0, 0)),
        FramePlan::Skip
    );
    assert_eq!(
        plan_frame(SurfaceState::Configured, configured, (0, 600)),
        FramePlan::Skip
    );
    assert_eq!(
        plan_frame(SurfaceState::Configured, configured, (800, 0)),
        FramePlan::Skip
    );
}

#[test]
fn zero_size_never_reconfigures_an_unconfigured_surface() {
    // A window that has never had area stays unconfigured.
    assert_eq!(
        plan_frame(SurfaceState::Unconfigured, (0, 0), (0, 0)),
        FramePlan::Skip
    );
}

#[test]
fn unconfigured_surface_reconfigures_on_first_real_size() {
    assert_eq!(
        plan_frame(SurfaceState::Unconfigured, (0, 0), (800, 600)),
        FramePlan::Reconfigure {
            width: 800,
            height: 600
        }
    );
}

#[test]
fn restored_window_reconfigures_back() {
    // Minimize leaves the configuration at the old extent; restore sees a
    // match again and proceeds without reconfiguring.
    assert_eq!(
        plan_frame(SurfaceState::Configured, (800, 600), (0, 0)),
        FramePlan::Skip
    );
    assert_eq!(
        plan_frame(SurfaceState::Configured, (800, 600), (800, 600)),
        FramePlan::Proceed
    );
}

#[test]
fn stale_surface_reconfigures_at_unchanged_size() {
    // A lost swapchain marks the configuration stale; the rebuild must run
    // even though the polled size still matches the configured extent.
    assert_eq!(
        plan_frame(SurfaceState::Stale, (800, 600), (800, 600)),
        FramePlan::Reconfigure {
            width: 800,
            height: 600
        }
    );
}

#[test]
fn stale_surface_defers_the_rebuild_while_zero_sized() {
    // A minimized window postpones the rebuild; once the window has area
    // again the rebuild lands at the polled extent.
    assert_eq!(
        plan_frame(SurfaceState::Stale, (800, 600), (0, 0)),
        FramePlan::Skip
    );
    assert_eq!(
        plan_frame(SurfaceState::Stale, (800, 600), (1024, 768)),
        FramePlan::Reconfigure {
            width: 1024,
            height: 768
        }
    );
}

// ============================================================================
// Frame Sequence Bookkeeping
// ============================================================================

#[test]
fn acquisitions_number_frames_from_zero() {
    let mut seq = FrameSequence::default();
    assert_eq!(seq.begin_acquire(), 0);
    assert!(seq.finish_present(0).is_ok());
    assert_eq!(seq.begin_acquire(), 1);
    assert_eq!(seq.acquired_count(), 2);
}

#[test]
fn present_clears_the_outstanding_frame() {
    let mut seq = FrameSequence::default();
    let frame = seq.begin_acquire();
    assert!(seq.finish_present(frame).is_ok());

    // Presenting the same frame again is rejected.
    let err = seq.finish_present(frame).unwrap_err();
    assert!(matches!(err, GlintError::StalePresent { .. }));
}

#[test]
fn stale_frame_index_is_rejected() {
    let mut seq = FrameSequence::default();
    let old = seq.begin_acquire();
    let current = seq.begin_acquire();

    let err = seq.finish_present(old).unwrap_err();
    match err {
        GlintError::StalePresent { acquired, current: c } => {
            assert_eq!(acquired, old);
            assert_eq!(c, current);
        }
        other => panic!("expected StalePresent, got {other:?}"),
    }
}

#[test]
fn present_without_acquire_is_rejected() {
    let mut seq = FrameSequence::default();
    assert!(seq.finish_present(0).is_err());
}

#[test]
fn superseded_frame_is_replaced_by_the_new_acquisition() {
    // A skipped frame (acquired but never presented) must not block the
    // next acquisition from presenting.
    let mut seq = FrameSequence::default();
    let _skipped = seq.begin_acquire();
    let next = seq.begin_acquire();
    assert!(seq.finish_present(next).is_ok());
}

// ============================================================================
// Acquire Error Classification
// ============================================================================

#[test]
fn timeout_outdated_and_lost_are_transient() {
    use glint::surface::is_transient_acquire_error;

    assert!(is_transient_acquire_error(&wgpu::SurfaceError::Timeout));
    assert!(is_transient_acquire_error(&wgpu::SurfaceError::Outdated));
    assert!(is_transient_acquire_error(&wgpu::SurfaceError::Lost));
}

#[test]
fn out_of_memory_is_fatal() {
    use glint::surface::is_transient_acquire_error;

    assert!(!is_transient_acquire_error(
        &wgpu::SurfaceError::OutOfMemory
    ));
}

// ============================================================================
// Error Monitor
// ============================================================================

#[test]
fn fresh_monitor_counts_zero() {
    let monitor = ErrorMonitor::default();
    assert_eq!(monitor.count(), 0);
}
