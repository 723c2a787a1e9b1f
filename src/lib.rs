//! Shark Dive - underwater survival game simulation core
//!
//! Core modules:
//! - `sim`: Simulation (world state, tick, shark AI, events, session)
//! - `tuning`: Data-driven game balance
//! - `error`: Errors raised at the edges (tuning files, asset loading)

pub mod error;
pub mod sim;
pub mod tuning;

pub use error::{LoadError, TuningError};
pub use tuning::Tuning;

use glam::{Quat, Vec3};

/// Game loop constants
pub mod consts {
    /// Fixed simulation timestep (60 Hz, one tick per animation frame)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;
    /// Longest frame delta fed to the accumulator (tab switches, breakpoints)
    pub const MAX_FRAME_DT: f32 = 0.1;
}

/// Normalized angle to [-π, π). Non-finite input maps to 0.
#[inline]
pub fn normalize_angle(angle: f32) -> f32 {
    use std::f32::consts::{PI, TAU};
    if !angle.is_finite() {
        return 0.0;
    }
    let wrapped = (angle + PI).rem_euclid(TAU) - PI;
    // rem_euclid can round up to TAU for tiny negative inputs
    if wrapped >= PI {
        wrapped - TAU
    } else {
        wrapped
    }
}

/// Rotate a point about the vertical (y) axis
#[inline]
pub fn rotate_about_y(point: Vec3, angle: f32) -> Vec3 {
    Quat::from_rotation_y(angle) * point
}

/// Point on a horizontal ring of `radius` at the given azimuth and depth
#[inline]
pub fn ring_point(radius: f32, azimuth: f32, depth: f32) -> Vec3 {
    let mut point = rotate_about_y(Vec3::X, azimuth) * radius;
    point.y = depth;
    point
}

/// Angle between two vectors in radians.
///
/// A zero-length vector has no direction, so it is reported as pointing
/// directly away (π).
#[inline]
pub fn angle_between(a: Vec3, b: Vec3) -> f32 {
    let denom = (a.length_squared() * b.length_squared()).sqrt();
    if denom <= f32::EPSILON {
        return std::f32::consts::PI;
    }
    (a.dot(b) / denom).clamp(-1.0, 1.0).acos()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::{FRAC_PI_2, PI};

    #[test]
    fn test_normalize_angle() {
        // 3π wraps onto the ±π seam
        assert!((normalize_angle(3.0 * PI).abs() - PI).abs() < 1e-5);
        assert!((normalize_angle(2.5 * PI) - FRAC_PI_2).abs() < 1e-5);
        assert!((normalize_angle(-FRAC_PI_2) + FRAC_PI_2).abs() < 1e-6);
    }

    #[test]
    fn test_normalize_angle_extremes() {
        assert_eq!(normalize_angle(f32::INFINITY), 0.0);
        assert_eq!(normalize_angle(f32::NEG_INFINITY), 0.0);
        assert_eq!(normalize_angle(f32::NAN), 0.0);
        for angle in [1.0e12, -1.0e12, f32::MAX, -f32::MAX, -1.0e-9] {
            let wrapped = normalize_angle(angle);
            assert!((-PI..PI).contains(&wrapped), "{angle} -> {wrapped}");
        }
    }

    #[test]
    fn test_ring_point_keeps_radius_and_depth() {
        let p = ring_point(300.0, 1.234, -13.0);
        assert!((Vec3::new(p.x, 0.0, p.z).length() - 300.0).abs() < 1e-3);
        assert_eq!(p.y, -13.0);
    }

    #[test]
    fn test_angle_between() {
        assert!((angle_between(Vec3::X, Vec3::Z) - FRAC_PI_2).abs() < 1e-6);
        assert!(angle_between(Vec3::X, Vec3::X * 5.0).abs() < 1e-3);
        assert_eq!(angle_between(Vec3::ZERO, Vec3::X), PI);
    }
}
