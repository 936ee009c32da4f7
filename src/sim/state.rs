//! Pond state: the duck and breadcrumb collections plus the seeded RNG

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::lure::Lure;
use super::mover::{Mover, sample_axis};
use crate::consts::*;

/// Pond dimensions and population limits
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PondConfig {
    /// Canvas extent in pixels
    pub width: f32,
    pub height: f32,
    /// Ducks spawned on start
    pub initial_movers: usize,
    /// Duck population cap
    pub max_movers: usize,
    /// Breadcrumb lifetime in ticks
    pub lure_max_age: u32,
}

impl Default for PondConfig {
    fn default() -> Self {
        Self {
            width: CANVAS_WIDTH,
            height: CANVAS_HEIGHT,
            initial_movers: INITIAL_MOVERS,
            max_movers: MAX_MOVERS,
            lure_max_age: LURE_MAX_AGE,
        }
    }
}

impl PondConfig {
    #[inline]
    pub fn bounds(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }
}

/// Population counts for the stats readout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PondStats {
    pub movers: usize,
    pub lures: usize,
}

/// Something that happened during the last step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PondEvent {
    /// A duck got close enough to eat a breadcrumb
    LureEaten { mover_id: u32, lure_id: u32 },
    /// A breadcrumb reached the end of its lifetime
    LureExpired { lure_id: u32 },
}

/// Complete pond state
#[derive(Debug, Clone)]
pub struct Pond {
    pub config: PondConfig,
    /// Ducks, in spawn order
    pub movers: Vec<Mover>,
    /// Breadcrumbs, in drop order (this order decides steering ties)
    pub lures: Vec<Lure>,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Events produced by the most recent step
    pub events: Vec<PondEvent>,
    rng: Pcg32,
    next_id: u32,
}

impl Pond {
    /// Default-sized pond with the initial ducks
    pub fn new(seed: u64) -> Self {
        Self::with_config(PondConfig::default(), seed)
    }

    /// Pond with the initial ducks at random positions
    pub fn with_config(config: PondConfig, seed: u64) -> Self {
        let mut pond = Self::empty(config, Pcg32::seed_from_u64(seed));
        for _ in 0..config.initial_movers.min(config.max_movers) {
            pond.add_mover(None);
        }
        log::info!(
            "Pond {}x{} started with {} ducks (seed {})",
            config.width,
            config.height,
            pond.movers.len(),
            seed
        );
        pond
    }

    /// Pond with no ducks and no breadcrumbs, drawing randomness from `rng`
    pub fn empty(config: PondConfig, rng: Pcg32) -> Self {
        Self {
            config,
            movers: Vec::new(),
            lures: Vec::new(),
            time_ticks: 0,
            events: Vec::new(),
            rng,
            next_id: 1,
        }
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id = self.next_id.wrapping_add(1).max(1);
        id
    }

    #[inline]
    pub fn bounds(&self) -> Vec2 {
        self.config.bounds()
    }

    pub fn stats(&self) -> PondStats {
        PondStats {
            movers: self.movers.len(),
            lures: self.lures.len(),
        }
    }

    pub fn is_full(&self) -> bool {
        self.movers.len() >= self.config.max_movers
    }

    /// Spawn a duck at `pos`, or somewhere random when `None`.
    /// A given `pos` is clamped so the whole duck sits on the canvas.
    /// Returns false (and does nothing) when the pond is full.
    pub fn add_mover(&mut self, pos: Option<Vec2>) -> bool {
        if self.is_full() {
            log::debug!("Pond full ({} ducks), not adding", self.movers.len());
            return false;
        }
        let id = self.next_entity_id();
        let bounds = self.bounds();
        let mover = match pos {
            Some(pos) => {
                let mut mover = Mover::spawn_at(id, pos, &mut self.rng);
                mover.clamp_to(bounds);
                mover
            }
            None => Mover::spawn_random(id, bounds, &mut self.rng),
        };
        self.movers.push(mover);
        true
    }

    /// Add a fully specified duck, subject to the same cap as `add_mover`
    pub fn push_mover(&mut self, mover: Mover) -> bool {
        if self.is_full() {
            return false;
        }
        self.next_id = self.next_id.max(mover.id.saturating_add(1));
        self.movers.push(mover);
        true
    }

    /// Drop a breadcrumb at `pos`. Breadcrumbs are not capped.
    pub fn add_lure(&mut self, pos: Vec2) -> u32 {
        let id = self.next_entity_id();
        let lure = Lure::spawn_at(id, pos, self.config.lure_max_age, &mut self.rng);
        self.lures.push(lure);
        id
    }

    /// Drop a breadcrumb somewhere random, away from the edges
    pub fn add_random_lure(&mut self) -> u32 {
        let bounds = self.bounds();
        let pos = Vec2::new(
            sample_axis(&mut self.rng, bounds.x, LURE_SPAWN_MARGIN),
            sample_axis(&mut self.rng, bounds.y, LURE_SPAWN_MARGIN),
        );
        self.add_lure(pos)
    }

    /// Every duck turns by a random amount
    pub fn change_all_directions(&mut self) {
        for mover in &mut self.movers {
            mover.change_direction(&mut self.rng);
        }
    }

    /// Remove every duck and breadcrumb
    pub fn clear(&mut self) {
        self.movers.clear();
        self.lures.clear();
        self.events.clear();
        log::info!("Pond cleared");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_pond_has_initial_ducks() {
        let pond = Pond::new(12345);
        assert_eq!(pond.stats(), PondStats { movers: 3, lures: 0 });
        let bounds = pond.bounds();
        for duck in &pond.movers {
            assert!(duck.pos.x >= MOVER_SPAWN_MARGIN && duck.pos.x <= bounds.x - MOVER_SPAWN_MARGIN);
            assert!(duck.pos.y >= MOVER_SPAWN_MARGIN && duck.pos.y <= bounds.y - MOVER_SPAWN_MARGIN);
        }
    }

    #[test]
    fn test_same_seed_same_pond() {
        let a = Pond::new(7);
        let b = Pond::new(7);
        assert_eq!(a.movers, b.movers);
    }

    #[test]
    fn test_add_mover_respects_cap() {
        let mut pond = Pond::new(1);
        while pond.movers.len() < MAX_MOVERS {
            assert!(pond.add_mover(None));
        }
        assert_eq!(pond.movers.len(), 10);
        assert!(!pond.add_mover(None));
        assert!(!pond.add_mover(Some(Vec2::new(50.0, 50.0))));
        assert_eq!(pond.movers.len(), 10);
    }

    #[test]
    fn test_add_mover_at_position() {
        let mut pond = Pond::empty(PondConfig::default(), Pcg32::seed_from_u64(3));
        assert!(pond.add_mover(Some(Vec2::new(123.0, 45.0))));
        assert_eq!(pond.movers[0].pos, Vec2::new(123.0, 45.0));
    }

    #[test]
    fn test_push_mover_keeps_ids_unique() {
        let mut pond = Pond::empty(PondConfig::default(), Pcg32::seed_from_u64(3));
        assert!(pond.push_mover(Mover::new(40, Vec2::new(50.0, 50.0), 0.0, 1.0, 20.0)));
        assert_eq!(pond.add_lure(Vec2::new(10.0, 10.0)), 41);
    }

    #[test]
    fn test_add_mover_outside_canvas_is_clamped() {
        let mut pond = Pond::empty(PondConfig::default(), Pcg32::seed_from_u64(3));
        assert!(pond.add_mover(Some(Vec2::new(-50.0, 9999.0))));
        let duck = &pond.movers[0];
        let half = duck.half_size();
        assert_eq!(duck.pos, Vec2::new(half, CANVAS_HEIGHT - half));
    }

    #[test]
    fn test_push_mover_with_max_id_does_not_overflow() {
        let mut pond = Pond::empty(PondConfig::default(), Pcg32::seed_from_u64(3));
        assert!(pond.push_mover(Mover::new(u32::MAX, Vec2::new(50.0, 50.0), 0.0, 1.0, 20.0)));
        assert_eq!(pond.add_lure(Vec2::new(10.0, 10.0)), u32::MAX);
        // The allocator wraps past zero
        assert_eq!(pond.add_lure(Vec2::new(20.0, 20.0)), 1);
    }

    #[test]
    fn test_add_lure_counts() {
        let mut pond = Pond::new(12345);
        pond.add_lure(Vec2::new(100.0, 100.0));
        assert_eq!(pond.stats(), PondStats { movers: 3, lures: 1 });
        assert_eq!(pond.lures[0].pos, Vec2::new(100.0, 100.0));
        assert_eq!(pond.lures[0].age, 0);
    }

    #[test]
    fn test_lures_are_uncapped() {
        let mut pond = Pond::new(5);
        for _ in 0..500 {
            pond.add_random_lure();
        }
        assert_eq!(pond.lures.len(), 500);
    }

    #[test]
    fn test_random_lure_in_bounds() {
        let mut pond = Pond::new(5);
        for _ in 0..100 {
            pond.add_random_lure();
        }
        for lure in &pond.lures {
            assert!(lure.pos.x >= LURE_SPAWN_MARGIN && lure.pos.x <= CANVAS_WIDTH - LURE_SPAWN_MARGIN);
            assert!(lure.pos.y >= LURE_SPAWN_MARGIN && lure.pos.y <= CANVAS_HEIGHT - LURE_SPAWN_MARGIN);
        }
    }

    #[test]
    fn test_clear_is_idempotent() {
        let mut pond = Pond::new(9);
        pond.add_lure(Vec2::new(10.0, 10.0));
        pond.clear();
        assert_eq!(pond.stats(), PondStats::default());
        pond.clear();
        assert_eq!(pond.stats(), PondStats::default());
    }

    #[test]
    fn test_change_all_directions_turns_every_duck() {
        let mut pond = Pond::new(11);
        let before: Vec<f32> = pond.movers.iter().map(|m| m.heading).collect();
        pond.change_all_directions();
        for (duck, old) in pond.movers.iter().zip(before) {
            assert!((duck.heading - old).abs() < std::f32::consts::FRAC_PI_2 + 1e-5);
        }
    }

    #[test]
    fn test_initial_count_limited_by_cap() {
        let config = PondConfig {
            initial_movers: 20,
            ..Default::default()
        };
        let pond = Pond::with_config(config, 1);
        assert_eq!(pond.movers.len(), MAX_MOVERS);
    }
}
