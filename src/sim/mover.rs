//! Ducks: waddling motion, wall bounce and breadcrumb seeking

use glam::Vec2;
use rand::Rng;
use std::f32::consts::{FRAC_PI_2, PI, TAU};

use super::lure::Lure;
use super::state::PondEvent;
use crate::consts::*;
use crate::heading_vector;

/// Duck body colors (gold, orange, pale yellow, khaki, burlywood)
pub const DUCK_PALETTE: [[f32; 4]; 5] = [
    [1.0, 0.843, 0.0, 1.0],
    [1.0, 0.647, 0.0, 1.0],
    [1.0, 1.0, 0.6, 1.0],
    [0.941, 0.902, 0.549, 1.0],
    [0.871, 0.722, 0.529, 1.0],
];

/// A duck wandering the pond
#[derive(Debug, Clone, PartialEq)]
pub struct Mover {
    pub id: u32,
    pub pos: Vec2,
    /// Radians, deliberately unbounded (only ever fed to sin/cos/atan2)
    pub heading: f32,
    /// Pixels per tick
    pub speed: f32,
    pub waddle_phase: f32,
    pub tail_phase: f32,
    /// Sprite scale and bounce/eat radius
    pub size: f32,
    pub color: [f32; 4],
}

impl Mover {
    pub fn new(id: u32, pos: Vec2, heading: f32, speed: f32, size: f32) -> Self {
        Self {
            id,
            pos,
            heading,
            speed,
            waddle_phase: 0.0,
            tail_phase: 0.0,
            size,
            color: DUCK_PALETTE[0],
        }
    }

    /// Spawn a duck with random traits at `pos`
    pub fn spawn_at(id: u32, pos: Vec2, rng: &mut impl Rng) -> Self {
        Self {
            id,
            pos,
            heading: rng.random_range(0.0..TAU),
            speed: rng.random_range(MOVER_MIN_SPEED..MOVER_MAX_SPEED),
            waddle_phase: rng.random_range(0.0..TAU),
            tail_phase: 0.0,
            size: rng.random_range(MOVER_MIN_SIZE..MOVER_MAX_SIZE),
            color: DUCK_PALETTE[rng.random_range(0..DUCK_PALETTE.len())],
        }
    }

    /// Spawn a duck with random traits somewhere inside `bounds`
    pub fn spawn_random(id: u32, bounds: Vec2, rng: &mut impl Rng) -> Self {
        let pos = Vec2::new(
            sample_axis(rng, bounds.x, MOVER_SPAWN_MARGIN),
            sample_axis(rng, bounds.y, MOVER_SPAWN_MARGIN),
        );
        Self::spawn_at(id, pos, rng)
    }

    #[inline]
    pub fn half_size(&self) -> f32 {
        self.size / 2.0
    }

    /// Pull the duck back inside `[size/2, extent - size/2]` on both axes
    pub fn clamp_to(&mut self, bounds: Vec2) {
        let half = self.half_size();
        self.pos.x = self.pos.x.min(bounds.x - half).max(half);
        self.pos.y = self.pos.y.min(bounds.y - half).max(half);
    }

    /// Advance one tick: waddle, move, bounce, then chase/eat breadcrumbs
    pub fn update(&mut self, bounds: Vec2, lures: &mut [Lure], events: &mut Vec<PondEvent>) {
        self.waddle(bounds);
        self.seek_lures(lures, events);
    }

    /// Oscillating step along the heading, reflected off the canvas edges
    pub fn waddle(&mut self, bounds: Vec2) {
        self.waddle_phase += WADDLE_STEP;
        self.tail_phase += TAIL_STEP;

        let waddle_offset = self.waddle_phase.sin() * WADDLE_AMPLITUDE;
        let curly_offset = (self.waddle_phase * CURLY_FREQUENCY).cos() * CURLY_AMPLITUDE;

        self.pos += heading_vector(self.heading) * self.speed + Vec2::new(waddle_offset, curly_offset);

        let half = self.half_size();
        if self.pos.x < half || self.pos.x > bounds.x - half {
            self.heading = PI - self.heading;
            self.pos.x = self.pos.x.min(bounds.x - half).max(half);
        }
        if self.pos.y < half || self.pos.y > bounds.y - half {
            self.heading = -self.heading;
            self.pos.y = self.pos.y.min(bounds.y - half).max(half);
        }
    }

    /// Steer toward every breadcrumb within `size`, eat those within `size / 2`.
    ///
    /// Breadcrumbs are scanned in insertion order, so when several are in
    /// range the last one scanned decides the heading for this tick.
    pub fn seek_lures(&mut self, lures: &mut [Lure], events: &mut Vec<PondEvent>) {
        for lure in lures.iter_mut().filter(|l| !l.consumed) {
            let to_lure = lure.pos - self.pos;
            let dist = to_lure.length();
            if dist >= self.size {
                continue;
            }

            self.heading = to_lure.y.atan2(to_lure.x);

            if dist < self.half_size() {
                lure.consumed = true;
                log::debug!("Duck {} ate breadcrumb {}", self.id, lure.id);
                events.push(PondEvent::LureEaten {
                    mover_id: self.id,
                    lure_id: lure.id,
                });
            }
        }
    }

    /// Turn by a random amount in [-π/2, π/2)
    pub fn change_direction(&mut self, rng: &mut impl Rng) {
        self.heading += rng.random_range(-FRAC_PI_2..FRAC_PI_2);
    }
}

/// Uniform coordinate in [margin, extent - margin], or the midpoint when the
/// extent is too small to honor the margin
pub(crate) fn sample_axis(rng: &mut impl Rng, extent: f32, margin: f32) -> f32 {
    if extent > 2.0 * margin {
        rng.random_range(margin..=extent - margin)
    } else {
        extent / 2.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    const BOUNDS: Vec2 = Vec2::new(CANVAS_WIDTH, CANVAS_HEIGHT);

    #[test]
    fn test_phases_advance_each_tick() {
        let mut duck = Mover::new(1, Vec2::new(400.0, 300.0), 0.0, 1.0, 20.0);
        duck.waddle(BOUNDS);
        duck.waddle(BOUNDS);
        assert!((duck.waddle_phase - 0.2).abs() < 1e-6);
        assert!((duck.tail_phase - 0.3).abs() < 1e-6);
    }

    #[test]
    fn test_step_includes_waddle_offsets() {
        let mut duck = Mover::new(1, Vec2::new(400.0, 300.0), 0.0, 1.0, 20.0);
        duck.waddle(BOUNDS);
        let expected_x = 400.0 + 1.0 + 0.1f32.sin() * 2.0;
        let expected_y = 300.0 + (0.1f32 * 0.7).cos() * 1.5;
        assert!((duck.pos.x - expected_x).abs() < 1e-4);
        assert!((duck.pos.y - expected_y).abs() < 1e-4);
        // Oscillation leaves the nominal heading alone
        assert_eq!(duck.heading, 0.0);
    }

    #[test]
    fn test_bounce_off_right_wall() {
        let mut duck = Mover::new(1, Vec2::new(BOUNDS.x - 1.0, 300.0), 0.0, 1.0, 20.0);
        duck.waddle(BOUNDS);
        assert_eq!(duck.heading, PI);
        assert_eq!(duck.pos.x, BOUNDS.x - 10.0);
    }

    #[test]
    fn test_bounce_off_top_wall() {
        let mut duck = Mover::new(1, Vec2::new(400.0, 5.0), -FRAC_PI_2, 1.0, 20.0);
        duck.waddle(BOUNDS);
        assert_eq!(duck.heading, FRAC_PI_2);
        assert_eq!(duck.pos.y, 10.0);
    }

    #[test]
    fn test_corner_reflects_both_axes() {
        let mut duck = Mover::new(1, Vec2::new(2.0, 2.0), 1.0, 1.0, 20.0);
        duck.waddle(BOUNDS);
        // x: π - 1, then y: -(π - 1)
        assert!((duck.heading - (1.0 - PI)).abs() < 1e-6);
        assert_eq!(duck.pos, Vec2::new(10.0, 10.0));
    }

    #[test]
    fn test_seek_steers_toward_lure_in_range() {
        let mut duck = Mover::new(1, Vec2::new(100.0, 100.0), 0.0, 1.0, 20.0);
        let mut lures = vec![Lure::new(7, Vec2::new(100.0, 115.0), 5.0, LURE_MAX_AGE)];
        let mut events = Vec::new();
        duck.seek_lures(&mut lures, &mut events);
        assert!((duck.heading - FRAC_PI_2).abs() < 1e-6);
        assert!(!lures[0].consumed);
        assert!(events.is_empty());
    }

    #[test]
    fn test_seek_ignores_lure_out_of_range() {
        let mut duck = Mover::new(1, Vec2::new(100.0, 100.0), 0.5, 1.0, 20.0);
        let mut lures = vec![Lure::new(7, Vec2::new(130.0, 100.0), 5.0, LURE_MAX_AGE)];
        duck.seek_lures(&mut lures, &mut Vec::new());
        assert_eq!(duck.heading, 0.5);
    }

    #[test]
    fn test_seek_eats_close_lure() {
        let mut duck = Mover::new(3, Vec2::new(50.0, 50.0), 0.0, 1.0, 20.0);
        let mut lures = vec![Lure::new(9, Vec2::new(52.0, 52.0), 5.0, LURE_MAX_AGE)];
        let mut events = Vec::new();
        duck.seek_lures(&mut lures, &mut events);
        assert!(lures[0].consumed);
        assert_eq!(
            events,
            vec![PondEvent::LureEaten {
                mover_id: 3,
                lure_id: 9
            }]
        );
    }

    #[test]
    fn test_last_lure_in_range_wins_heading() {
        let mut duck = Mover::new(1, Vec2::new(100.0, 100.0), 0.0, 1.0, 30.0);
        let mut lures = vec![
            Lure::new(1, Vec2::new(120.0, 100.0), 5.0, LURE_MAX_AGE),
            Lure::new(2, Vec2::new(100.0, 80.0), 5.0, LURE_MAX_AGE),
        ];
        duck.seek_lures(&mut lures, &mut Vec::new());
        assert!((duck.heading + FRAC_PI_2).abs() < 1e-6);
    }

    #[test]
    fn test_consumed_lure_is_not_chased() {
        let mut duck = Mover::new(1, Vec2::new(100.0, 100.0), 0.25, 1.0, 20.0);
        let mut lure = Lure::new(1, Vec2::new(101.0, 101.0), 5.0, LURE_MAX_AGE);
        lure.consumed = true;
        let mut lures = vec![lure];
        let mut events = Vec::new();
        duck.seek_lures(&mut lures, &mut events);
        assert_eq!(duck.heading, 0.25);
        assert!(events.is_empty());
    }

    #[test]
    fn test_change_direction_stays_within_quarter_turn() {
        let mut rng = Pcg32::seed_from_u64(42);
        for _ in 0..200 {
            let mut duck = Mover::new(1, Vec2::ZERO, 0.0, 1.0, 20.0);
            duck.change_direction(&mut rng);
            assert!((-FRAC_PI_2..FRAC_PI_2).contains(&duck.heading));
        }
    }

    #[test]
    fn test_spawn_random_traits_in_range() {
        let mut rng = Pcg32::seed_from_u64(7);
        for id in 0..100 {
            let duck = Mover::spawn_random(id, BOUNDS, &mut rng);
            assert!((MOVER_SPAWN_MARGIN..=BOUNDS.x - MOVER_SPAWN_MARGIN).contains(&duck.pos.x));
            assert!((MOVER_SPAWN_MARGIN..=BOUNDS.y - MOVER_SPAWN_MARGIN).contains(&duck.pos.y));
            assert!((MOVER_MIN_SPEED..MOVER_MAX_SPEED).contains(&duck.speed));
            assert!((MOVER_MIN_SIZE..MOVER_MAX_SIZE).contains(&duck.size));
            assert!(DUCK_PALETTE.contains(&duck.color));
            assert_eq!(duck.tail_phase, 0.0);
        }
    }

    #[test]
    fn test_sample_axis_tiny_extent_uses_midpoint() {
        let mut rng = Pcg32::seed_from_u64(1);
        assert_eq!(sample_axis(&mut rng, 40.0, 30.0), 20.0);
    }
}
