//! Cell representation with the per-tick moved flag

use crate::Material;
use serde::{Deserialize, Serialize};

/// A single grid cell.
///
/// Mobile cells carry a `moved` flag marking "already displaced this tick".
/// The movement rules set it when relocating a particle so the scheduler
/// does not process the particle again in the same scan; the end-of-tick
/// normalization pass clears it everywhere. Externally (render, queries
/// after a tick) only settled cells are ever observable.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    pub material: Material,
    pub moved: bool,
}

impl Cell {
    pub const EMPTY: Cell = Cell {
        material: Material::Empty,
        moved: false,
    };

    /// A settled cell of the given material.
    pub fn settled(material: Material) -> Self {
        Self {
            material,
            moved: false,
        }
    }

    /// A cell of the given material already displaced this tick.
    pub fn moved(material: Material) -> Self {
        Self {
            material,
            moved: true,
        }
    }

    pub fn is_empty(self) -> bool {
        self.material == Material::Empty
    }

    /// True if the cell holds `material`, moved or settled.
    pub fn is(self, material: Material) -> bool {
        self.material == material
    }

    /// True if the cell holds `material` and has not moved this tick.
    ///
    /// Several reaction and movement checks deliberately match only the
    /// settled form (e.g. water turns settled dirt into mud but ignores
    /// dirt that is still in flight).
    pub fn is_settled(self, material: Material) -> bool {
        self.material == material && !self.moved
    }

    /// True if the cell holds `material` and was displaced this tick.
    pub fn is_moved(self, material: Material) -> bool {
        self.material == material && self.moved
    }

    /// Clear the moved flag.
    pub fn settle(&mut self) {
        self.moved = false;
    }
}
