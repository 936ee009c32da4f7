//! Deterministic pond simulation
//!
//! All duck and breadcrumb behavior lives here. This module stays pure:
//! - One step per frame, no wall-clock time
//! - Seeded RNG only
//! - Stable iteration order (spawn/drop order)
//! - No rendering or platform dependencies

pub mod lure;
pub mod mover;
pub mod state;
pub mod tick;
pub mod view;

pub use lure::Lure;
pub use mover::{DUCK_PALETTE, Mover};
pub use state::{Pond, PondConfig, PondEvent, PondStats};
pub use tick::{PondInput, apply_input, step};
pub use view::{LureSprite, MoverSprite, PondCanvas};
