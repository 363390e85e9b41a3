pub mod bodies;
pub mod camera;
pub mod controls;
pub mod plugin;
pub mod ui;

pub use plugin::OrreryRenderPlugin;
