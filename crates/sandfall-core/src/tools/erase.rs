//! Eraser tool

use glam::IVec2;
use sandfall_simulation::Material;

use super::{stamp, Tool};
use crate::world::Grid;

/// Eraser tool that places Empty
pub struct EraseTool;

impl Tool for EraseTool {
    fn name(&self) -> &str {
        "Eraser"
    }

    fn apply(&self, grid: &mut Grid, position: IVec2, radius: u32) {
        stamp(grid, position, radius, Material::Empty);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sandfall_simulation::Cell;

    #[test]
    fn test_eraser_clears_cells() {
        let mut grid = Grid::new(8, 8);
        grid.set(4, 4, Cell::settled(Material::Wall));
        grid.set(5, 4, Cell::settled(Material::Wall));

        EraseTool.apply(&mut grid, IVec2::new(4, 4), 1);

        assert!(grid.get(4, 4).is_empty());
        assert!(grid.get(5, 4).is_empty());
    }
}
