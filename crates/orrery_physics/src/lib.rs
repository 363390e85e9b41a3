pub mod body;
pub mod forces;
pub mod procgen;
pub mod universe;

pub use body::Body;
pub use universe::Universe;
