use bevy::prelude::*;

use super::bodies::{self, SpawnedGeneration};
use super::camera;
use super::controls;
use super::ui;

/// Draws the universe and handles keyboard input
pub struct OrreryRenderPlugin;

impl Plugin for OrreryRenderPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ui::HudThrottle>()
            .init_resource::<SpawnedGeneration>()
            .add_systems(Startup, (camera::spawn_camera, ui::spawn_hud))
            .add_systems(
                Update,
                (
                    controls::quit_system,
                    controls::pause_system,
                    controls::snapshot_system,
                    bodies::spawn_body_circles.after(controls::snapshot_system),
                    bodies::sync_body_circles.after(bodies::spawn_body_circles),
                    ui::update_hud,
                ),
            );
    }
}
