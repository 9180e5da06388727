//! Pulse Uniform Tests
//!
//! Tests for:
//! - The pulse function `size(t) = 1 + 0.5 * sin(2t)`
//! - Range bounds and determinism
//! - Byte layout handed to the uniform buffer

use std::f32::consts::FRAC_PI_4;

use glint::uniforms::PulseUniforms;

const EPSILON: f32 = 1e-5;

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < EPSILON
}

// ============================================================================
// Pulse Function
// ============================================================================

#[test]
fn size_at_zero_is_one() {
    assert!(approx(PulseUniforms::at(0.0).size, 1.0));
    assert!(approx(PulseUniforms::default().size, 1.0));
}

#[test]
fn size_peaks_at_quarter_pi() {
    // sin(2t) peaks at t = pi/4, giving 1 + 0.5.
    assert!(approx(PulseUniforms::at(FRAC_PI_4).size, 1.5));
}

#[test]
fn size_bottoms_at_three_quarter_pi() {
    // sin(2t) bottoms at t = 3*pi/4, giving 1 - 0.5.
    assert!(approx(PulseUniforms::at(3.0 * FRAC_PI_4).size, 0.5));
}

#[test]
fn size_stays_within_bounds() {
    for i in 0..=10_000 {
        let t = i as f32 * 0.01;
        let size = PulseUniforms::at(t).size;
        assert!(
            (0.5 - EPSILON..=1.5 + EPSILON).contains(&size),
            "size({t}) = {size} left [0.5, 1.5]"
        );
    }
}

#[test]
fn pulse_is_deterministic() {
    assert_eq!(PulseUniforms::at(1.7), PulseUniforms::at(1.7));
}

// ============================================================================
// Byte Layout
// ============================================================================

#[test]
fn payload_is_the_four_bytes_of_the_scale() {
    let pulse = PulseUniforms::at(0.0);
    let bytes = pulse.as_bytes();

    assert_eq!(bytes.len(), 4);
    assert_eq!(bytes, 1.0_f32.to_ne_bytes());
}

#[test]
fn payload_tracks_the_size_field() {
    let pulse = PulseUniforms { size: 0.75 };
    assert_eq!(pulse.as_bytes(), 0.75_f32.to_ne_bytes());
}
