use bevy::prelude::*;

/// Marker for the single 2D camera
#[derive(Component)]
pub struct UniverseCamera;

/// Default 2D projection: one world unit per logical pixel, origin at the
/// window centre. The window is sized to the universe, so the whole box is visible.
pub fn spawn_camera(mut commands: Commands) {
    commands.spawn((Camera2d, UniverseCamera));
}
