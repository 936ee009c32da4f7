//! Duck Pond - ducks waddling around a canvas, chasing breadcrumbs
//!
//! Core modules:
//! - `sim`: Deterministic simulation (motion, lure seeking, entity lifecycle)
//! - `renderer`: Sprite tessellation and the WebGPU pipeline
//! - `settings`: Persisted user preferences

pub mod renderer;
pub mod settings;
pub mod sim;

pub use settings::{QualityPreset, Settings};
pub use sim::{Pond, PondConfig, PondStats};

use glam::Vec2;

/// Pond tuning constants
pub mod consts {
    /// Default canvas extent (pixels)
    pub const CANVAS_WIDTH: f32 = 800.0;
    pub const CANVAS_HEIGHT: f32 = 600.0;

    /// Ducks spawned when the pond starts
    pub const INITIAL_MOVERS: usize = 3;
    /// Population cap; adds beyond it are silently dropped
    pub const MAX_MOVERS: usize = 10;

    /// Per-tick phase increments (cosmetic only)
    pub const WADDLE_STEP: f32 = 0.1;
    pub const TAIL_STEP: f32 = 0.15;
    /// Lateral oscillation amplitudes added to the straight-line step
    pub const WADDLE_AMPLITUDE: f32 = 2.0;
    pub const CURLY_AMPLITUDE: f32 = 1.5;
    /// Frequency ratio of the vertical wobble relative to the waddle
    pub const CURLY_FREQUENCY: f32 = 0.7;

    /// Duck size range
    pub const MOVER_MIN_SIZE: f32 = 20.0;
    pub const MOVER_MAX_SIZE: f32 = 35.0;
    /// Duck speed range (pixels per tick)
    pub const MOVER_MIN_SPEED: f32 = 0.5;
    pub const MOVER_MAX_SPEED: f32 = 1.5;
    /// Distance kept from the canvas edge when spawning at random
    pub const MOVER_SPAWN_MARGIN: f32 = 30.0;

    /// Breadcrumb lifetime in ticks (5 seconds at 60 Hz)
    pub const LURE_MAX_AGE: u32 = 300;
    /// Breadcrumb size range
    pub const LURE_MIN_SIZE: f32 = 5.0;
    pub const LURE_MAX_SIZE: f32 = 10.0;
    pub const LURE_SPAWN_MARGIN: f32 = 20.0;
}

/// Unit vector pointing along `heading` (radians)
#[inline]
pub fn heading_vector(heading: f32) -> Vec2 {
    Vec2::new(heading.cos(), heading.sin())
}

/// Rotate a sprite-local point by `heading` and move it to `origin`
#[inline]
pub fn local_to_world(origin: Vec2, heading: f32, local: Vec2) -> Vec2 {
    origin + heading_vector(heading).rotate(local)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    #[test]
    fn test_local_to_world_rotates_forward_axis() {
        let p = local_to_world(Vec2::new(10.0, 10.0), FRAC_PI_2, Vec2::new(5.0, 0.0));
        assert!((p.x - 10.0).abs() < 1e-5);
        assert!((p.y - 15.0).abs() < 1e-5);
    }
}
