pub mod pipeline;
pub mod state;
pub mod universe;

pub use pipeline::SimulationPlugin;
pub use state::AppState;
pub use universe::UniverseState;
