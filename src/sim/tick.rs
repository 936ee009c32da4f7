//! Per-frame simulation step and host input handling
//!
//! The host calls `step` once per display frame and `apply_input` for user
//! events between frames, never during a step.

use glam::Vec2;

use super::state::{Pond, PondEvent, PondStats};

/// User actions coming from the page
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PondInput {
    /// Click on the canvas (canvas-relative coordinates): every duck turns
    /// and a breadcrumb lands at the click
    Click(Vec2),
    /// "Add duck" button
    AddDuck,
    /// "Add breadcrumb" button
    AddBreadcrumb,
    /// "Clear" button
    Clear,
}

/// Advance the pond by one tick
pub fn step(pond: &mut Pond) -> PondStats {
    pond.time_ticks += 1;
    pond.events.clear();

    let bounds = pond.bounds();
    for mover in &mut pond.movers {
        mover.update(bounds, &mut pond.lures, &mut pond.events);
    }

    // Eaten breadcrumbs go first; survivors age and drop out on expiry
    let events = &mut pond.events;
    pond.lures.retain_mut(|lure| {
        if lure.consumed {
            return false;
        }
        lure.update();
        if lure.is_expired() {
            events.push(PondEvent::LureExpired { lure_id: lure.id });
            return false;
        }
        true
    });

    log::trace!(
        "tick {}: {} ducks, {} breadcrumbs, {} events",
        pond.time_ticks,
        pond.movers.len(),
        pond.lures.len(),
        pond.events.len()
    );

    pond.stats()
}

/// Apply one user action between steps
pub fn apply_input(pond: &mut Pond, input: PondInput) -> PondStats {
    match input {
        PondInput::Click(pos) => {
            pond.change_all_directions();
            pond.add_lure(pos);
        }
        PondInput::AddDuck => {
            pond.add_mover(None);
        }
        PondInput::AddBreadcrumb => {
            pond.add_random_lure();
        }
        PondInput::Clear => pond.clear(),
    }
    pond.stats()
}
