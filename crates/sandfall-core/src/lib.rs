//! Core engine for the falling-sand particle simulation
//!
//! Owns the cell grid, the per-material reaction and movement rules, the
//! tick scheduler with its randomized scan, the emitters, and the drawing
//! tools. Windowing, input handling, and blitting stay in the host: it
//! feeds tool strokes and commands in and reads per-cell colors out.

pub mod config;
pub mod error;
pub mod tools;
pub mod world;

pub use config::SimConfig;
pub use error::ConfigError;
pub use sandfall_simulation::{Cell, Material};
pub use world::World;
