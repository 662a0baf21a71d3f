//! Brush state: selected material and pen size

use sandfall_simulation::Material;

use crate::config::SimConfig;

/// Selectable materials in UI order; the trailing Empty entry is the
/// eraser.
pub const PALETTE: [Material; 19] = [
    Material::Water,
    Material::Sand,
    Material::Salt,
    Material::Oil,
    Material::Fire,
    Material::Acid,
    Material::Dirt,
    Material::WaterSpout,
    Material::SandSpout,
    Material::SaltSpout,
    Material::OilSpout,
    Material::Wall,
    Material::Torch,
    Material::Stove,
    Material::Plant,
    Material::Ice,
    Material::IronWall,
    Material::Void,
    Material::Empty,
];

const MIN_PEN_SIZE: u32 = 1;
const MAX_PEN_SIZE: u32 = 32;

/// The current drawing selection: material plus pen size.
///
/// The pen size is a power-of-two control value in {1..32} that doubles
/// and halves; the actual stamp radius grows sublinearly with it.
#[derive(Debug, Clone)]
pub struct Brush {
    material: Material,
    pen_size: u32,
}

impl Brush {
    pub fn new(material: Material, pen_size: u32) -> Self {
        Self {
            material,
            pen_size: pen_size.clamp(MIN_PEN_SIZE, MAX_PEN_SIZE),
        }
    }

    pub fn from_config(config: &SimConfig) -> Self {
        Self::new(config.brush_material, config.pen_size)
    }

    pub fn material(&self) -> Material {
        self.material
    }

    pub fn set_material(&mut self, material: Material) {
        log::debug!("brush material: {}", material.name());
        self.material = material;
    }

    pub fn pen_size(&self) -> u32 {
        self.pen_size
    }

    /// Double the pen size, up to 32.
    pub fn grow(&mut self) {
        self.pen_size = (self.pen_size * 2).min(MAX_PEN_SIZE);
    }

    /// Halve the pen size, down to 1.
    pub fn shrink(&mut self) {
        self.pen_size = (self.pen_size / 2).max(MIN_PEN_SIZE);
    }

    /// Stamp radius for the current pen size.
    pub fn radius(&self) -> u32 {
        match self.pen_size {
            1 => 1,
            2 => 2,
            4 => 3,
            8 => 5,
            16 => 7,
            _ => 9,
        }
    }

    /// Select the next palette entry, wrapping around.
    pub fn cycle_next(&mut self) {
        let next = match PALETTE.iter().position(|&m| m == self.material) {
            Some(i) => (i + 1) % PALETTE.len(),
            None => 0,
        };
        self.set_material(PALETTE[next]);
    }

    /// Select the previous palette entry, wrapping around.
    pub fn cycle_prev(&mut self) {
        let prev = match PALETTE.iter().position(|&m| m == self.material) {
            Some(i) => (i + PALETTE.len() - 1) % PALETTE.len(),
            None => 0,
        };
        self.set_material(PALETTE[prev]);
    }
}

impl Default for Brush {
    fn default() -> Self {
        Self::new(Material::Wall, 2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grow_and_shrink_clamp() {
        let mut brush = Brush::new(Material::Wall, 1);
        let sizes: Vec<u32> = (0..7)
            .map(|_| {
                brush.grow();
                brush.pen_size()
            })
            .collect();
        assert_eq!(sizes, vec![2, 4, 8, 16, 32, 32, 32]);

        for _ in 0..7 {
            brush.shrink();
        }
        assert_eq!(brush.pen_size(), 1);
    }

    #[test]
    fn test_radius_mapping() {
        let radii: Vec<u32> = [1, 2, 4, 8, 16, 32]
            .into_iter()
            .map(|size| Brush::new(Material::Wall, size).radius())
            .collect();
        assert_eq!(radii, vec![1, 2, 3, 5, 7, 9]);
    }

    #[test]
    fn test_cycle_wraps() {
        let mut brush = Brush::new(Material::Water, 1);
        for _ in 0..PALETTE.len() {
            brush.cycle_next();
        }
        assert_eq!(brush.material(), Material::Water);

        brush.cycle_prev();
        assert_eq!(brush.material(), Material::Empty);
    }

    #[test]
    fn test_from_config() {
        let brush = Brush::from_config(&SimConfig::default());
        assert_eq!(brush.material(), Material::Wall);
        assert_eq!(brush.pen_size(), 2);
    }

    #[test]
    fn test_cycle_from_unlisted_material_resets() {
        let mut brush = Brush::new(Material::Rust, 1);
        brush.cycle_next();
        assert_eq!(brush.material(), PALETTE[0]);
    }
}
