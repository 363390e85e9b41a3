use bevy::prelude::*;
use orrery_core::UniverseConfig;
use orrery_sim::UniverseState;
use orrery_storage::UniverseSnapshot;

/// Backspace or Escape quits
pub fn quit_system(keyboard: Res<ButtonInput<KeyCode>>, mut exit: EventWriter<AppExit>) {
    if keyboard.any_just_pressed([KeyCode::Backspace, KeyCode::Escape]) {
        info!("Quit requested");
        exit.send(AppExit::Success);
    }
}

/// Space toggles pause. Ticks run in FixedUpdate, so a pause always lands
/// between two ticks.
pub fn pause_system(keyboard: Res<ButtonInput<KeyCode>>, mut universe: ResMut<UniverseState>) {
    if keyboard.just_pressed(KeyCode::Space) {
        universe.paused = !universe.paused;
        info!(
            "Simulation {} at tick {}",
            if universe.paused { "paused" } else { "resumed" },
            universe.ticks
        );
    }
}

/// Handle F5 (save) / F9 (load) snapshot hotkeys
pub fn snapshot_system(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut universe: ResMut<UniverseState>,
) {
    // F5: save snapshot
    if keyboard.just_pressed(KeyCode::F5) {
        let snapshot = UniverseSnapshot {
            ticks: universe.ticks,
            universe: universe.universe.clone(),
        };

        let timestamp = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs();
        let path = orrery_storage::saves_dir().join(format!("snapshot_{timestamp}.bin"));

        match orrery_storage::save_snapshot(&snapshot, &path) {
            Ok(()) => info!("Snapshot saved: {}", path.display()),
            Err(e) => error!("Failed to save snapshot: {e}"),
        }
    }

    // F9: load latest snapshot
    if keyboard.just_pressed(KeyCode::F9) {
        let dir = orrery_storage::saves_dir();
        let Some(path) = orrery_storage::find_latest_snapshot(&dir) else {
            warn!("No snapshots found in {}", dir.display());
            return;
        };

        match orrery_storage::load_snapshot(&path) {
            Ok(snapshot) => {
                let current = &universe.universe.config;
                if let Err(reason) = check_snapshot_config(current, &snapshot.universe.config) {
                    error!("Refusing snapshot {}: {reason}", path.display());
                    return;
                }
                if snapshot.universe.config != *current {
                    warn!("Snapshot {} uses different physical constants", path.display());
                }
                universe.replace_universe(snapshot.universe, snapshot.ticks);
                info!("Snapshot loaded: {} (tick {})", path.display(), snapshot.ticks);
            }
            Err(e) => error!("Failed to load snapshot: {e}"),
        }
    }
}

/// A snapshot can replace the running universe only if its config is valid and
/// its box matches the window, which is sized once at startup.
pub fn check_snapshot_config(
    current: &UniverseConfig,
    loaded: &UniverseConfig,
) -> Result<(), String> {
    loaded.validate().map_err(|e| e.to_string())?;
    if loaded.size != current.size {
        return Err(format!(
            "universe is {}x{} but the window is {}x{}",
            loaded.width(),
            loaded.height(),
            current.width(),
            current.height()
        ));
    }
    Ok(())
}
