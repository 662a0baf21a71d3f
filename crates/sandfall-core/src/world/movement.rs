//! Movement rules for mobile materials
//!
//! Gravity and buoyancy, contact chemistry, the optional density-swap
//! overlay, and the lateral spread fallback. The cell being processed is
//! treated as "moved" for the duration of the call: relocations write the
//! moved flag so the scheduler does not process the particle a second time
//! in the same scan.
//!
//! The grid mutates in place during the scan; every neighbor read below
//! observes writes made earlier in the same call and earlier in the same
//! tick. Keep the statement order as is.

use sandfall_simulation::{Cell, Material};

use super::{Grid, SimRng, SimStats};

/// Movement rule dispatch for mobile materials.
pub struct MovementSystem;

impl MovementSystem {
    /// Run the movement rule for the settled mobile cell at `(x, y)`.
    ///
    /// The caller guarantees the cell is interior: `x` in `[1, width-2]`
    /// and `y` in `[1, height-3]`, so the eight surrounding cells are in
    /// bounds.
    pub fn update<R: SimRng>(
        grid: &mut Grid,
        x: usize,
        y: usize,
        material: Material,
        swaps_enabled: bool,
        rng: &mut R,
        stats: &mut dyn SimStats,
    ) {
        // Primary fall or rise
        if !material.is_floating() {
            if grid.get(x, y + 1).is_empty() && !rng.one_in(8) {
                grid.set(x, y + 1, Cell::moved(material));
                grid.set(x, y, Cell::EMPTY);
                stats.record_particle_moved();
                return;
            }
        } else {
            // Buoyancy damping
            if rng.one_in(3) {
                return;
            }

            let above = grid.get(x, y - 1);
            if (above.is_empty() || above.is_settled(Material::Fire))
                && !rng.one_in(8)
                && material != Material::Electricity
            {
                if material == Material::Fire && rng.one_in(20) {
                    grid.set(x, y, Cell::EMPTY);
                } else {
                    // The row above was already scanned this tick, so the
                    // cell rises with its settled state intact.
                    grid.set(x, y - 1, grid.get(x, y));
                    grid.set(x, y, Cell::EMPTY);
                    stats.record_particle_moved();
                }
                return;
            }
        }

        // Random handedness for all lateral checks below
        let sign: i32 = if rng.coin() { 1 } else { -1 };
        let first_x = (x as i32 + sign) as usize;
        let second_x = (x as i32 - sign) as usize;

        if Self::contact_chemistry(grid, x, y, material, first_x, second_x, rng, stats) {
            return;
        }

        if swaps_enabled && Self::density_swap(grid, x, y, material, rng, stats) {
            return;
        }

        Self::spread(grid, x, y, material, first_x, second_x, stats);
    }

    /// Kind-specific neighbor chemistry, run when the primary fall/rise
    /// did not relocate the particle.
    ///
    /// Returns true when the particle is fully resolved and the swap and
    /// spread steps must not run. Branches that clear or convert the cell
    /// without returning true deliberately fall through; the spread step
    /// can then re-materialize the particle next door. That clobbering is
    /// part of the emergent behavior.
    #[allow(clippy::too_many_arguments)]
    fn contact_chemistry<R: SimRng>(
        grid: &mut Grid,
        x: usize,
        y: usize,
        material: Material,
        first_x: usize,
        second_x: usize,
        rng: &mut R,
        stats: &mut dyn SimStats,
    ) -> bool {
        let neighbors = [(x, y - 1), (x, y + 1), (first_x, y), (second_x, y)];

        match material {
            Material::Electricity => {
                // Discharge
                if rng.one_in(2) {
                    grid.set(x, y, Cell::EMPTY);
                }
            }
            Material::Steam => {
                if rng.one_in(1000) {
                    // Condense
                    grid.set(x, y, Cell::moved(Material::Water));
                    return true;
                }
                if rng.one_in(500) {
                    grid.set(x, y, Cell::EMPTY);
                    return true;
                }
                let above = grid.get(x, y - 1);
                if !above.material.is_static() && !above.material.is_floating() {
                    if rng.one_in(15) {
                        grid.set(x, y, Cell::EMPTY);
                    } else {
                        // Rise by displacing whatever sits above
                        grid.set(x, y, above);
                        grid.set(x, y - 1, Cell::moved(Material::Steam));
                        stats.record_particle_moved();
                    }
                    return true;
                }
            }
            Material::Fire => {
                if !grid.get(x, y - 1).material.is_burnable() && rng.one_in(10) {
                    grid.set(x, y, Cell::EMPTY);
                    return true;
                }

                // Melt adjacent ice, quenching the fire for each melt
                if rng.one_in(4) {
                    for (nx, ny) in neighbors {
                        if grid.get(nx, ny).is(Material::Ice) {
                            grid.set(nx, ny, Cell::settled(Material::Water));
                            grid.set(x, y, Cell::EMPTY);
                            stats.record_reaction();
                        }
                    }
                }

                // Burn one random neighbor
                let (nx, ny) = neighbors[rng.pick(4) as usize];
                let target = grid.get(nx, ny);
                if target.material.is_burnable() {
                    if target.material.burns_as_ember() {
                        grid.set(nx, ny, Cell::settled(Material::Ember));
                    } else {
                        grid.set(nx, ny, Cell::settled(Material::Fire));
                    }
                    stats.record_reaction();
                }
            }
            Material::Water => {
                if rng.one_in(200) && grid.get(x, y + 1).is(Material::IronWall) {
                    grid.set(x, y + 1, Cell::settled(Material::Rust));
                    stats.record_reaction();
                }

                if neighbors
                    .iter()
                    .any(|&(nx, ny)| grid.get(nx, ny).is_settled(Material::Fire))
                {
                    grid.set(x, y, Cell::moved(Material::Steam));
                    stats.record_reaction();
                }

                // Water and dirt combine into mud
                if grid.get(x, y + 1).is_settled(Material::Dirt) {
                    grid.set(x, y + 1, Cell::moved(Material::Mud));
                    grid.set(x, y, Cell::EMPTY);
                    stats.record_reaction();
                }
                if grid.get(x, y - 1).is_settled(Material::Dirt) {
                    grid.set(x, y - 1, Cell::moved(Material::Mud));
                    grid.set(x, y, Cell::EMPTY);
                    stats.record_reaction();
                }

                // Water and salt combine into saltwater
                if grid.get(x, y - 1).is(Material::Salt) {
                    grid.set(x, y - 1, Cell::moved(Material::SaltWater));
                    grid.set(x, y, Cell::EMPTY);
                    stats.record_reaction();
                }
                if grid.get(x, y + 1).is(Material::Salt) {
                    grid.set(x, y + 1, Cell::moved(Material::SaltWater));
                    grid.set(x, y, Cell::EMPTY);
                    stats.record_reaction();
                }

                if rng.one_in(60) {
                    Self::melt_random_ice(grid, neighbors, rng, stats);
                }
            }
            Material::Acid => {
                // Dissolves everything except walls and its own dilutions
                let (nx, ny) = neighbors[rng.pick(4) as usize];
                let target = grid.get(nx, ny);
                if !(target.is(Material::Wall)
                    || target.is(Material::IronWall)
                    || target.is(Material::Water)
                    || target.is(Material::Acid))
                {
                    if !target.is_empty() {
                        stats.record_reaction();
                    }
                    grid.set(nx, ny, Cell::EMPTY);
                }
            }
            Material::Salt => {
                if rng.one_in(20) {
                    Self::melt_random_ice(grid, neighbors, rng, stats);
                }
            }
            Material::SaltWater => {
                // Dissolves ice more slowly than pure salt
                if rng.one_in(40) {
                    Self::melt_random_ice(grid, neighbors, rng, stats);
                }
            }
            Material::Oil => {
                let (nx, ny) = neighbors[rng.pick(4) as usize];
                if grid.get(nx, ny).is_settled(Material::Fire) {
                    grid.set(x, y, Cell::settled(Material::Fire));
                    stats.record_reaction();
                }
            }
            _ => {}
        }

        false
    }

    fn melt_random_ice<R: SimRng>(
        grid: &mut Grid,
        neighbors: [(usize, usize); 4],
        rng: &mut R,
        stats: &mut dyn SimStats,
    ) {
        let (nx, ny) = neighbors[rng.pick(4) as usize];
        if grid.get(nx, ny).is(Material::Ice) {
            grid.set(nx, ny, Cell::settled(Material::Water));
            stats.record_reaction();
        }
    }

    /// Density overlay: a lighter particle below a heavier one swaps
    /// upward through it. Returns true when a swap happened.
    ///
    /// Only the last alternative of each condition is gated by the 1/3
    /// roll; the emergent liquid layering is tuned around that exact
    /// shape, so keep the gating where it is.
    fn density_swap<R: SimRng>(
        grid: &mut Grid,
        x: usize,
        y: usize,
        material: Material,
        rng: &mut R,
        stats: &mut dyn SimStats,
    ) -> bool {
        let above = grid.get(x, y - 1);
        let swap = match material {
            Material::Water => {
                above.is_settled(Material::Sand)
                    || above.is_settled(Material::Mud)
                    || (above.is_settled(Material::SaltWater) && rng.one_in(3))
            }
            Material::Oil => above.is_settled(Material::Water) && rng.one_in(3),
            Material::SaltWater => {
                above.is_settled(Material::Dirt)
                    || above.is_settled(Material::Mud)
                    || (above.is_settled(Material::Sand) && rng.one_in(3))
            }
            _ => false,
        };

        if swap {
            grid.set(x, y, above);
            grid.set(x, y - 1, Cell::moved(material));
            stats.record_particle_moved();
        }
        swap
    }

    /// Lateral spread fallback: relocate into the first empty cell among
    /// the diagonal-below pair then the same-row pair (diagonal-above
    /// first for steam).
    fn spread(
        grid: &mut Grid,
        x: usize,
        y: usize,
        material: Material,
        first_x: usize,
        second_x: usize,
        stats: &mut dyn SimStats,
    ) {
        let targets = if !material.is_floating() {
            [
                (first_x, y + 1),
                (second_x, y + 1),
                (first_x, y),
                (second_x, y),
            ]
        } else if material == Material::Steam {
            [
                (first_x, y - 1),
                (second_x, y - 1),
                (first_x, y),
                (second_x, y),
            ]
        } else {
            return;
        };

        for (nx, ny) in targets {
            if grid.get(nx, ny).is_empty() {
                grid.set(nx, ny, Cell::moved(material));
                grid.set(x, y, Cell::EMPTY);
                stats.record_particle_moved();
                return;
            }
        }
    }
}
