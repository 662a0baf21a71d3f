//! Pen tool for drawing materials

use glam::IVec2;
use sandfall_simulation::Material;

use super::{stamp, Tool};
use crate::world::Grid;

/// Pen tool that draws a specific material
pub struct PenTool {
    material: Material,
}

impl PenTool {
    /// Create a new pen tool for the given material
    pub fn new(material: Material) -> Self {
        Self { material }
    }

    /// Set the material this pen draws
    pub fn set_material(&mut self, material: Material) {
        self.material = material;
    }

    /// Get the current material
    pub fn material(&self) -> Material {
        self.material
    }
}

impl Tool for PenTool {
    fn name(&self) -> &str {
        "Pen"
    }

    fn apply(&self, grid: &mut Grid, position: IVec2, radius: u32) {
        stamp(grid, position, radius, self.material);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pen_draws_its_material() {
        let mut grid = Grid::new(8, 8);
        let pen = PenTool::new(Material::Sand);
        pen.apply(&mut grid, IVec2::new(4, 4), 1);
        assert!(grid.get(4, 4).is_settled(Material::Sand));
    }

    #[test]
    fn test_set_material() {
        let mut pen = PenTool::new(Material::Sand);
        pen.set_material(Material::Water);
        assert_eq!(pen.material(), Material::Water);
    }
}
