use bevy::prelude::*;
use orrery_core::Rgb;
use orrery_sim::UniverseState;

/// Marker for a body's circle, indexed into the universe registry
#[derive(Component)]
pub struct BodyCircle {
    pub index: usize,
}

/// Which universe generation the spawned circles belong to
#[derive(Resource, Default)]
pub struct SpawnedGeneration(pub Option<u32>);

/// Universe coordinates (origin top-left, y down) to world coordinates
/// (origin at the centre, y up)
pub fn to_world(position: [f64; 2], size: [f64; 2]) -> Vec2 {
    Vec2::new(
        (position[0] - size[0] / 2.0) as f32,
        (size[1] / 2.0 - position[1]) as f32,
    )
}

pub fn to_color(rgb: Rgb) -> Color {
    Color::srgb_u8(rgb.r(), rgb.g(), rgb.b())
}

/// Spawn one filled circle per body. Re-runs whenever the universe is replaced,
/// since the body list may differ after a snapshot load.
pub fn spawn_body_circles(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
    mut spawned: ResMut<SpawnedGeneration>,
    universe: Res<UniverseState>,
    existing: Query<Entity, With<BodyCircle>>,
) {
    if spawned.0 == Some(universe.generation) {
        return;
    }

    for entity in &existing {
        commands.entity(entity).despawn();
    }

    let size = universe.universe.config.size;
    for (index, body) in universe.universe.bodies().iter().enumerate() {
        let position = to_world(body.position, size);
        commands.spawn((
            Mesh2d(meshes.add(Circle::new(body.radius() as f32))),
            MeshMaterial2d(materials.add(ColorMaterial::from(to_color(body.color)))),
            Transform::from_xyz(position.x, position.y, index as f32 * 1e-3),
            BodyCircle { index },
        ));
    }

    info!(
        "Spawned {} body circles (generation {})",
        universe.universe.len(),
        universe.generation
    );
    spawned.0 = Some(universe.generation);
}

/// Copy body positions into circle transforms
pub fn sync_body_circles(
    universe: Res<UniverseState>,
    mut query: Query<(&mut Transform, &BodyCircle)>,
) {
    let bodies = universe.universe.bodies();
    let size = universe.universe.config.size;

    for (mut transform, circle) in query.iter_mut() {
        let Some(body) = bodies.get(circle.index) else {
            continue;
        };
        let position = to_world(body.position, size);
        transform.translation.x = position.x;
        transform.translation.y = position.y;
    }
}
