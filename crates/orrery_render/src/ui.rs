use bevy::prelude::*;
use orrery_sim::UniverseState;

/// Marker for the HUD text
#[derive(Component)]
pub struct HudText;

/// HUD frame counter for throttling
#[derive(Resource, Default)]
pub struct HudThrottle {
    pub frame: u32,
}

/// Spawn the HUD overlay
pub fn spawn_hud(mut commands: Commands) {
    commands.spawn((
        Text::new("Orrery"),
        TextFont {
            font_size: 14.0,
            ..default()
        },
        TextColor(Color::srgba(0.8, 0.8, 0.8, 0.8)),
        Node {
            position_type: PositionType::Absolute,
            top: Val::Px(8.0),
            left: Val::Px(8.0),
            ..default()
        },
        HudText,
    ));
}

pub fn hud_text(state: &UniverseState) -> String {
    let status = if state.fault.is_some() {
        " [HALTED]"
    } else if state.paused {
        " [PAUSED]"
    } else {
        ""
    };
    let p = state.universe.total_momentum();

    format!(
        "Tick: {}{}\n\
         Bodies: {}\n\
         Momentum: ({:.3}, {:.3}) | KE: {:.3}\n\
         [Space] Pause  [F5] Save  [F9] Load  [Esc] Quit",
        state.ticks,
        status,
        state.universe.len(),
        p[0],
        p[1],
        state.universe.kinetic_energy(),
    )
}

/// Update HUD text every 10th frame
pub fn update_hud(
    universe: Res<UniverseState>,
    mut throttle: ResMut<HudThrottle>,
    mut query: Query<&mut Text, With<HudText>>,
) {
    throttle.frame = throttle.frame.wrapping_add(1);
    if throttle.frame % 10 != 0 {
        return;
    }
    if let Ok(mut text) = query.get_single_mut() {
        **text = hud_text(&universe);
    }
}
