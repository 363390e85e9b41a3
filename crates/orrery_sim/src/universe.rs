use bevy::prelude::*;
use orrery_core::PhysicsError;
use orrery_physics::Universe;

/// The simulated universe, tracked as a Bevy Resource
#[derive(Resource)]
pub struct UniverseState {
    pub universe: Universe,
    /// Completed ticks
    pub ticks: u64,
    /// Paused between ticks; a tick is never interrupted
    pub paused: bool,
    /// Fault that stopped the simulation, if any
    pub fault: Option<PhysicsError>,
    /// Incremented when the universe is swapped out (snapshot load)
    pub generation: u32,
}

impl UniverseState {
    pub fn new(universe: Universe) -> Self {
        Self {
            universe,
            ticks: 0,
            paused: false,
            fault: None,
            generation: 0,
        }
    }

    /// Advance the universe by one tick. Does nothing while paused or after a
    /// fault; a new fault is kept and returned.
    pub fn tick(&mut self) -> Result<(), PhysicsError> {
        if self.paused || self.fault.is_some() {
            return Ok(());
        }

        match self.universe.tick() {
            Ok(()) => {
                self.ticks += 1;
                Ok(())
            }
            Err(e) => {
                self.fault = Some(e.clone());
                Err(e)
            }
        }
    }

    /// Replace the universe with a loaded one (between ticks)
    pub fn replace_universe(&mut self, universe: Universe, ticks: u64) {
        info!(
            "Replacing universe: {} -> {} bodies at tick {}",
            self.universe.len(),
            universe.len(),
            ticks
        );
        self.universe = universe;
        self.ticks = ticks;
        self.fault = None;
        self.generation = self.generation.wrapping_add(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use orrery_core::{Rgb, UniverseConfig};
    use orrery_physics::Body;

    fn pair(gap: f64) -> Universe {
        let mut universe = Universe::new(UniverseConfig::default());
        universe.add_bodies([
            Body::new(400.0, 500.0, "a", Rgb::BLACK, 100.0, [0.0, 0.0]),
            Body::new(400.0 + gap, 500.0, "b", Rgb::BLACK, 100.0, [0.0, 0.0]),
        ]);
        universe
    }

    #[test]
    fn test_tick_counts() {
        let mut state = UniverseState::new(pair(200.0));
        state.tick().unwrap();
        state.tick().unwrap();
        assert_eq!(state.ticks, 2);
        assert!(state.universe.bodies()[0].position[0] > 400.0);
    }

    #[test]
    fn test_paused_does_not_advance() {
        let mut state = UniverseState::new(pair(200.0));
        state.paused = true;
        let before = state.universe.clone();

        state.tick().unwrap();

        assert_eq!(state.ticks, 0);
        assert_eq!(state.universe, before);
    }

    #[test]
    fn test_fault_is_sticky() {
        let mut state = UniverseState::new(pair(0.0));

        assert!(state.tick().is_err());
        assert!(matches!(state.fault, Some(PhysicsError::CoincidentBodies { .. })));
        assert_eq!(state.ticks, 0);

        // Later calls are no-ops rather than repeated faults
        assert!(state.tick().is_ok());
        assert_eq!(state.ticks, 0);
    }

    #[test]
    fn test_replace_universe_clears_fault() {
        let mut state = UniverseState::new(pair(0.0));
        state.tick().unwrap_err();

        state.replace_universe(pair(200.0), 7);

        assert_eq!(state.ticks, 7);
        assert_eq!(state.generation, 1);
        assert!(state.fault.is_none());
        state.tick().unwrap();
        assert_eq!(state.ticks, 8);
    }
}
