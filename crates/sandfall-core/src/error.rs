//! Construction-time error types

use thiserror::Error;

/// Minimum grid dimension accepted by [`crate::World::new`].
///
/// Three rows are reserved as border rows and the outermost columns are
/// never visited, so anything smaller has no simulation area at all.
pub const MIN_GRID_SIZE: usize = 4;

/// Errors produced while validating a [`crate::SimConfig`].
///
/// Once a world is constructed the simulation is total over its state
/// space; these are the only user-visible failures.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("grid must be at least 4x4 cells, got {width}x{height}")]
    GridTooSmall { width: usize, height: usize },

    #[error("{name} emitter density must be within [0.0, 1.0], got {value}")]
    DensityOutOfRange { name: &'static str, value: f32 },
}
