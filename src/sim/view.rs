//! Read-only views of the pond handed to a renderer
//!
//! The simulation never draws. It walks its entities and passes each one to
//! a `PondCanvas`, which decides how a duck or a breadcrumb looks.

use glam::Vec2;

use super::lure::Lure;
use super::mover::Mover;
use super::state::Pond;

/// Everything needed to draw one duck
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoverSprite {
    pub pos: Vec2,
    pub heading: f32,
    pub size: f32,
    pub color: [f32; 4],
    pub tail_phase: f32,
}

/// Everything needed to draw one breadcrumb
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LureSprite {
    pub pos: Vec2,
    pub size: f32,
    /// age / max_age, 0 when fresh and 1 when about to vanish
    pub age_fraction: f32,
}

/// Drawing surface the pond renders itself onto
pub trait PondCanvas {
    fn draw_mover(&mut self, sprite: &MoverSprite);
    fn draw_lure(&mut self, sprite: &LureSprite);
}

impl Mover {
    pub fn sprite(&self) -> MoverSprite {
        MoverSprite {
            pos: self.pos,
            heading: self.heading,
            size: self.size,
            color: self.color,
            tail_phase: self.tail_phase,
        }
    }
}

impl Lure {
    pub fn sprite(&self) -> LureSprite {
        LureSprite {
            pos: self.pos,
            size: self.size,
            age_fraction: self.age_fraction(),
        }
    }
}

impl Pond {
    /// Draw every duck, then every breadcrumb
    pub fn draw<C: PondCanvas + ?Sized>(&self, canvas: &mut C) {
        for mover in &self.movers {
            canvas.draw_mover(&mover.sprite());
        }
        for lure in &self.lures {
            canvas.draw_lure(&lure.sprite());
        }
    }
}
