//! Reaction rules for static materials
//!
//! Static materials never change position; each tick the scheduler invokes
//! the rule for every occupied static cell and the rule reads and writes
//! only the cardinal neighbors (plus the stove's two-above cell). All
//! probabilistic behavior draws through [`SimRng`].

use sandfall_simulation::{Cell, Material};

use super::{Grid, SimRng, SimStats};

/// Reaction rule dispatch for static materials.
pub struct ReactionSystem;

impl ReactionSystem {
    /// Run the reaction rule for the static cell at `(x, y)`.
    ///
    /// The caller guarantees the cell is interior: `x` in `[1, width-2]`
    /// and `y` in `[1, height-3]`, so every cardinal neighbor is in bounds.
    pub fn update<R: SimRng>(
        grid: &mut Grid,
        x: usize,
        y: usize,
        material: Material,
        rng: &mut R,
        stats: &mut dyn SimStats,
    ) {
        match material {
            Material::Void => Self::update_void(grid, x, y, stats),
            Material::IronWall => Self::update_iron_wall(grid, x, y, rng, stats),
            Material::Torch => Self::update_torch(grid, x, y, rng, stats),
            Material::Plant => Self::update_plant(grid, x, y, rng, stats),
            Material::Ember => Self::update_ember(grid, x, y, rng, stats),
            Material::Stove => Self::update_stove(grid, x, y, rng, stats),
            Material::Rust => Self::update_rust(grid, x, y, rng),
            Material::WaterSpout => Self::update_spout(grid, x, y, Material::Water, rng, stats),
            Material::SandSpout => Self::update_spout(grid, x, y, Material::Sand, rng, stats),
            Material::SaltSpout => Self::update_salt_spout(grid, x, y, rng, stats),
            Material::OilSpout => Self::update_spout(grid, x, y, Material::Oil, rng, stats),
            // Walls and ice only react to what other rules do to them
            _ => {}
        }
    }

    /// The four cardinal neighbors of an interior cell.
    fn cardinal(x: usize, y: usize) -> [(usize, usize); 4] {
        [(x, y - 1), (x, y + 1), (x - 1, y), (x + 1, y)]
    }

    /// Uniformly chosen cardinal neighbor.
    fn random_cardinal<R: SimRng>(x: usize, y: usize, rng: &mut R) -> (usize, usize) {
        Self::cardinal(x, y)[rng.pick(4) as usize]
    }

    /// Void swallows everything it touches, every tick, no probability gate.
    fn update_void(grid: &mut Grid, x: usize, y: usize, stats: &mut dyn SimStats) {
        for (nx, ny) in Self::cardinal(x, y) {
            if !grid.get(nx, ny).is_empty() {
                grid.set(nx, ny, Cell::EMPTY);
                stats.record_reaction();
            }
        }
    }

    /// Corrosion spreads from rust into iron.
    fn update_iron_wall<R: SimRng>(
        grid: &mut Grid,
        x: usize,
        y: usize,
        rng: &mut R,
        stats: &mut dyn SimStats,
    ) {
        if rng.one_in(200)
            && Self::cardinal(x, y)
                .iter()
                .any(|&(nx, ny)| grid.get(nx, ny).is(Material::Rust))
        {
            grid.set(x, y, Cell::settled(Material::Rust));
            stats.record_reaction();
        }
    }

    fn update_torch<R: SimRng>(
        grid: &mut Grid,
        x: usize,
        y: usize,
        rng: &mut R,
        stats: &mut dyn SimStats,
    ) {
        // Continuous flame into empty neighbors
        if rng.one_in(2) {
            for (nx, ny) in Self::cardinal(x, y) {
                let neighbor = grid.get(nx, ny);
                if neighbor.is_empty() || neighbor.is_moved(Material::Fire) {
                    grid.set(nx, ny, Cell::moved(Material::Fire));
                }
            }
        }

        // Adjacent water boils regardless of the flame roll
        for (nx, ny) in Self::cardinal(x, y) {
            if grid.get(nx, ny).is(Material::Water) {
                grid.set(nx, ny, Cell::moved(Material::Steam));
                stats.record_reaction();
            }
        }
    }

    /// Growth consumes a random adjacent water cell.
    fn update_plant<R: SimRng>(
        grid: &mut Grid,
        x: usize,
        y: usize,
        rng: &mut R,
        stats: &mut dyn SimStats,
    ) {
        if rng.one_in(2) {
            let (nx, ny) = Self::random_cardinal(x, y, rng);
            if grid.get(nx, ny).is_settled(Material::Water) {
                grid.set(nx, ny, Cell::settled(Material::Plant));
                stats.record_reaction();
            }
        }
    }

    fn update_ember<R: SimRng>(
        grid: &mut Grid,
        x: usize,
        y: usize,
        rng: &mut R,
        stats: &mut dyn SimStats,
    ) {
        let below = grid.get(x, y + 1);
        if below.is_empty() || below.material.is_burnable() {
            grid.set(x, y + 1, Cell::settled(Material::Fire));
            stats.record_reaction();
        }

        let (nx, ny) = Self::random_cardinal(x, y, rng);
        if grid.get(nx, ny).is(Material::Plant) {
            grid.set(nx, ny, Cell::settled(Material::Fire));
            stats.record_reaction();
        }

        // Embers burn out slowly
        if rng.one_in(18) {
            grid.set(x, y, Cell::EMPTY);
        }
    }

    fn update_stove<R: SimRng>(
        grid: &mut Grid,
        x: usize,
        y: usize,
        rng: &mut R,
        stats: &mut dyn SimStats,
    ) {
        if rng.one_in(4) && grid.get(x, y - 1).is_settled(Material::Water) {
            grid.set(x, y - 1, Cell::settled(Material::Steam));
            stats.record_reaction();
        }

        // Saltwater separates: salt stays, steam escapes two cells up
        if rng.one_in(4) && grid.get(x, y - 1).is_settled(Material::SaltWater) {
            grid.set(x, y - 1, Cell::settled(Material::Salt));
            if y >= 2 {
                grid.set(x, y - 2, Cell::settled(Material::Steam));
            }
            stats.record_reaction();
        }

        if rng.one_in(8) && grid.get(x, y - 1).is_settled(Material::Oil) {
            grid.set(x, y - 1, Cell::settled(Material::Ember));
            stats.record_reaction();
        }
    }

    fn update_rust<R: SimRng>(grid: &mut Grid, x: usize, y: usize, rng: &mut R) {
        if rng.one_in(7000) {
            grid.set(x, y, Cell::EMPTY);
        }
    }

    /// Spouts drip their material into an empty cell below.
    fn update_spout<R: SimRng>(
        grid: &mut Grid,
        x: usize,
        y: usize,
        material: Material,
        rng: &mut R,
        stats: &mut dyn SimStats,
    ) {
        if rng.one_in(6) && grid.get(x, y + 1).is_empty() {
            grid.set(x, y + 1, Cell::moved(material));
            stats.record_reaction();
        }
    }

    /// The salt spout also salinates water directly below it.
    fn update_salt_spout<R: SimRng>(
        grid: &mut Grid,
        x: usize,
        y: usize,
        rng: &mut R,
        stats: &mut dyn SimStats,
    ) {
        if rng.one_in(6) {
            if grid.get(x, y + 1).is_empty() {
                grid.set(x, y + 1, Cell::moved(Material::Salt));
                stats.record_reaction();
            }
            if grid.get(x, y + 1).is(Material::Water) {
                grid.set(x, y + 1, Cell::moved(Material::SaltWater));
                stats.record_reaction();
            }
        }
    }
}
