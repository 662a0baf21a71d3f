//! Simulation statistics collection trait

/// Trait for collecting simulation statistics.
///
/// Lets the rules record what happened during a tick without the engine
/// depending on any particular diagnostics implementation.
pub trait SimStats {
    /// Record that a particle relocated during the tick.
    fn record_particle_moved(&mut self);

    /// Record that a reaction converted one or more cells.
    fn record_reaction(&mut self);
}

/// A no-op implementation for when stats collection is not needed.
#[derive(Default)]
pub struct NoopStats;

impl SimStats for NoopStats {
    fn record_particle_moved(&mut self) {}
    fn record_reaction(&mut self) {}
}

/// Simple counting implementation used for diagnostics and in tests.
#[derive(Default, Debug, Clone, Copy)]
pub struct TickStats {
    pub particles_moved: u64,
    pub reactions: u64,
}

impl SimStats for TickStats {
    fn record_particle_moved(&mut self) {
        self.particles_moved += 1;
    }

    fn record_reaction(&mut self) {
        self.reactions += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_noop_stats_do_nothing() {
        let mut stats = NoopStats;
        stats.record_particle_moved();
        stats.record_reaction();
    }

    #[test]
    fn test_tick_stats_count() {
        let mut stats = TickStats::default();
        stats.record_particle_moved();
        stats.record_particle_moved();
        stats.record_reaction();
        assert_eq!(stats.particles_moved, 2);
        assert_eq!(stats.reactions, 1);
    }
}
