use anyhow::Result;
use bevy::prelude::*;
use clap::Parser;
use orrery::cli::RunArgs;
use orrery_render::OrreryRenderPlugin;
use orrery_render::bodies::to_color;
use orrery_sim::{SimulationPlugin, UniverseState};

/// Real-time 2D gravitational N-body viewer
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    #[command(flatten)]
    run: RunArgs,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let config = args.run.sim_config();
    let (universe, ticks) = args.run.build_universe(&config)?;

    let size = universe.config.size;
    let background = to_color(universe.config.background_color);
    let mut state = UniverseState::new(universe);
    state.ticks = ticks;

    let exit = App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Orrery".into(),
                resolution: (size[0] as f32, size[1] as f32).into(),
                resizable: false,
                ..default()
            }),
            ..default()
        }))
        .insert_resource(ClearColor(background))
        .insert_resource(state)
        .add_plugins(SimulationPlugin {
            tick_rate_hz: config.tick_rate_hz,
        })
        .add_plugins(OrreryRenderPlugin)
        .run();

    if exit.is_error() {
        anyhow::bail!("simulation stopped on a fault");
    }
    Ok(())
}
