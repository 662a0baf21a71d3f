//! Simulation world: grid, rules, scheduler, emitters

mod grid;
mod movement;
mod reactions;
mod rng_trait;
mod stats;
#[allow(clippy::module_inception)]
mod world;

pub use grid::Grid;
pub use movement::MovementSystem;
pub use reactions::ReactionSystem;
pub use rng_trait::SimRng;
pub use stats::{NoopStats, SimStats, TickStats};
pub use world::{Emitter, World, DENSITY_STEP};
