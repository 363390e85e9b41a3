use orrery_physics::Universe;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// A whole universe frozen between two ticks
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UniverseSnapshot {
    /// Ticks completed when the snapshot was taken
    pub ticks: u64,
    pub universe: Universe,
}

/// Default directory for snapshots
pub fn saves_dir() -> PathBuf {
    PathBuf::from("saves")
}

/// Save a snapshot to disk as bincode
pub fn save_snapshot(snapshot: &UniverseSnapshot, path: &Path) -> Result<(), String> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| format!("Failed to create dir: {e}"))?;
    }
    let data = bincode::serialize(snapshot).map_err(|e| format!("Serialize error: {e}"))?;
    fs::write(path, data).map_err(|e| format!("Write error: {e}"))?;
    Ok(())
}

/// Load a snapshot from disk
pub fn load_snapshot(path: &Path) -> Result<UniverseSnapshot, String> {
    let data = fs::read(path).map_err(|e| format!("Read error: {e}"))?;
    let snapshot =
        bincode::deserialize(&data).map_err(|e| format!("Deserialize error: {e}"))?;
    Ok(snapshot)
}

/// Most recently modified `.bin` file in `dir`
pub fn find_latest_snapshot(dir: &Path) -> Option<PathBuf> {
    fs::read_dir(dir).ok().and_then(|entries| {
        entries
            .filter_map(|e| e.ok())
            .filter(|e| e.path().extension().is_some_and(|ext| ext == "bin"))
            .max_by_key(|e| e.metadata().ok().and_then(|m| m.modified().ok()))
            .map(|e| e.path())
    })
}
