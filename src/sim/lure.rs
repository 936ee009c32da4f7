//! Breadcrumbs: short-lived markers ducks chase and eat

use glam::Vec2;
use rand::Rng;

use crate::consts::{LURE_MAX_SIZE, LURE_MIN_SIZE};

/// A breadcrumb dropped on the pond
#[derive(Debug, Clone, PartialEq)]
pub struct Lure {
    pub id: u32,
    pub pos: Vec2,
    pub size: f32,
    /// Ticks survived so far (0..=max_age)
    pub age: u32,
    /// Lifetime in ticks
    pub max_age: u32,
    /// Eaten this tick; dropped when the pond prunes breadcrumbs
    pub consumed: bool,
}

impl Lure {
    pub fn new(id: u32, pos: Vec2, size: f32, max_age: u32) -> Self {
        Self {
            id,
            pos,
            size,
            age: 0,
            max_age,
            consumed: false,
        }
    }

    /// Breadcrumb of random size at `pos`
    pub fn spawn_at(id: u32, pos: Vec2, max_age: u32, rng: &mut impl Rng) -> Self {
        Self::new(id, pos, rng.random_range(LURE_MIN_SIZE..LURE_MAX_SIZE), max_age)
    }

    /// Age by one tick. Returns whether the breadcrumb is still alive.
    pub fn update(&mut self) -> bool {
        self.age = (self.age + 1).min(self.max_age);
        self.age < self.max_age
    }

    pub fn is_expired(&self) -> bool {
        self.age >= self.max_age
    }

    /// Fraction of the lifetime used up, drives the fade-out
    pub fn age_fraction(&self) -> f32 {
        if self.max_age == 0 {
            1.0
        } else {
            self.age as f32 / self.max_age as f32
        }
    }
}
