//! Drawing tools for placing and erasing particles

mod brush;
mod erase;
mod pen;

pub use brush::{Brush, PALETTE};
pub use erase::EraseTool;
pub use pen::PenTool;

use glam::IVec2;
use sandfall_simulation::{Cell, Material};

use crate::world::{Grid, SimRng};

/// Trait for drawing tools
pub trait Tool {
    /// Tool display name
    fn name(&self) -> &str;

    /// Apply tool at position with the given stamp radius
    fn apply(&self, grid: &mut Grid, position: IVec2, radius: u32);
}

/// Draw a filled circle of cells, clipped to the grid bounds.
pub fn stamp(grid: &mut Grid, center: IVec2, radius: u32, material: Material) {
    let r = radius as i32;

    for dy in -r..=r {
        for dx in -r..=r {
            if dx * dx + dy * dy <= r * r {
                let x = center.x + dx;
                let y = center.y + dy;
                if grid.contains(x, y) {
                    grid.set(x as usize, y as usize, Cell::settled(material));
                }
            }
        }
    }
}

/// Draw a stroke of stamps from `from` to `to`.
///
/// Coincident endpoints stamp once. Otherwise the stroke is sampled at
/// `max(|dx|, |dy|)` points, one per unit along the longer axis, which
/// keeps consecutive stamps within Chebyshev distance 1 of each other.
pub fn line(grid: &mut Grid, from: IVec2, to: IVec2, radius: u32, material: Material) {
    if from == to {
        stamp(grid, from, radius, material);
        return;
    }

    let delta = to - from;
    let steps = delta.x.abs().max(delta.y.abs());

    for i in 0..steps {
        let t = i as f32 / steps as f32;
        let x = from.x as f32 + t * delta.x as f32;
        let y = from.y as f32 + t * delta.y as f32;
        stamp(grid, IVec2::new(x as i32, y as i32), radius, material);
    }
}

/// Scribble 20 top-to-bottom strokes followed by 20 left-to-right strokes
/// of `material` at random positions. Used for the wall-maze fill and its
/// eraser counterpart.
pub fn random_lines<R: SimRng>(grid: &mut Grid, material: Material, radius: u32, rng: &mut R) {
    log::debug!("drawing random {} lines", material.name());

    let width = grid.width() as u32;
    let height = grid.height() as u32;

    for _ in 0..20 {
        let x1 = rng.pick(width) as i32;
        let x2 = rng.pick(width) as i32;
        line(
            grid,
            IVec2::new(x1, 0),
            IVec2::new(x2, height as i32),
            radius,
            material,
        );
    }

    for _ in 0..20 {
        let y1 = rng.pick(height) as i32;
        let y2 = rng.pick(height) as i32;
        line(
            grid,
            IVec2::new(0, y1),
            IVec2::new(width as i32, y2),
            radius,
            material,
        );
    }
}
