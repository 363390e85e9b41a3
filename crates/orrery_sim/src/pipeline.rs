use bevy::prelude::*;
use orrery_core::TICK_RATE_HZ;

use super::state::AppState;
use super::universe::UniverseState;

/// Bevy plugin for the simulation pipeline. Ticks run in `FixedUpdate`, so
/// the tick rate is independent of the frame rate.
pub struct SimulationPlugin {
    pub tick_rate_hz: f64,
}

impl Default for SimulationPlugin {
    fn default() -> Self {
        Self {
            tick_rate_hz: TICK_RATE_HZ,
        }
    }
}

impl Plugin for SimulationPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(Time::<Fixed>::from_hz(self.tick_rate_hz))
            .init_state::<AppState>()
            .add_systems(Startup, announce)
            .add_systems(
                FixedUpdate,
                simulation_tick.run_if(in_state(AppState::Running)),
            );
    }
}

fn announce(universe: Res<UniverseState>, fixed: Res<Time<Fixed>>) {
    let config = &universe.universe.config;
    info!(
        "Universe {}x{} with {} bodies, starting at tick {}, {:.0} ticks/s",
        config.width(),
        config.height(),
        universe.universe.len(),
        universe.ticks,
        1.0 / fixed.timestep().as_secs_f64()
    );
}

/// Main simulation tick. A fault stops the whole run.
fn simulation_tick(
    mut universe: ResMut<UniverseState>,
    mut next_state: ResMut<NextState<AppState>>,
    mut exit: EventWriter<AppExit>,
) {
    if let Err(e) = universe.tick() {
        error!("Simulation halted at tick {}: {e}", universe.ticks);
        next_state.set(AppState::Halted);
        exit.send(AppExit::error());
    }
}
