//! Material taxonomy and cell representation for Sandfall
//!
//! This crate provides the foundational data types for the falling-sand
//! simulation:
//! - Material enumeration and behavioral predicates (Material)
//! - Tagged cell representation with the per-tick moved flag (Cell)
//! - Display colors and names for the render layer

mod cell;
mod material;

pub use cell::Cell;
pub use material::Material;
