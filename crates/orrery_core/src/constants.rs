// Simulation units are pixels and ticks: one tick is one unit of time, so
// velocities are pixels per tick and accelerations are added to velocity
// without a time step.

/// Newton's gravitational constant (SI value, scaled up by the gravity multiplier)
pub const G: f64 = 6.674_30e-11;

/// Default amplification of G so that forces are visible at pixel distances
pub const GRAVITY_MULTIPLIER: f64 = 1e10;

/// Per-axis signed speed above which the damping factor is applied
pub const SPEED_THRESHOLD: f64 = 3.0;

/// Default multiplicative brake for fast axes
pub const DAMPING_FACTOR: f64 = 0.9;

/// Default universe extent (width, height)
pub const UNIVERSE_SIZE: [f64; 2] = [1000.0, 1000.0];

/// Where a body is put back when it leaves through the far edge: `size - margin`
pub const FAR_EDGE_MARGIN: f64 = 10.0;

/// Mass below which the drawn radius stops shrinking
pub const RADIUS_MASS_FLOOR: f64 = 10.0;

/// Largest drawn radius
pub const MAX_RADIUS: f64 = 100.0;

/// Fixed tick rate of the reference driver
pub const TICK_RATE_HZ: f64 = 165.0;

/// Number of randomly generated bodies by default
pub const DEFAULT_BODY_COUNT: u32 = 3;

/// Inclusive mass range for randomly generated bodies
pub const RANDOM_MASS_RANGE: (u32, u32) = (10, 200);

/// Random initial velocity per axis is drawn from `[-MAX, MAX)`
pub const RANDOM_MAX_SPEED: f64 = 1.0;
