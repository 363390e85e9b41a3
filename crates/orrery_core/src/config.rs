use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::error::PhysicsError;
use crate::types::Rgb;

/// Environment of a universe: physical constants and bounds.
/// Immutable once the universe is built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UniverseConfig {
    /// G in the inverse-square law
    pub gravitational_constant: f64,
    /// Scales every pairwise force
    pub gravity_multiplier: f64,
    /// Clear colour for the draw surface
    pub background_color: Rgb,
    /// (width, height) of the reflective box
    pub size: [f64; 2],
    /// Applied to an axis whose signed velocity exceeds `speed_threshold`
    pub damping_factor: f64,
    #[serde(default = "default_speed_threshold")]
    pub speed_threshold: f64,
}

fn default_speed_threshold() -> f64 {
    SPEED_THRESHOLD
}

impl UniverseConfig {
    /// Stores the parameters as given. Nothing is validated here; see [`Self::validate`].
    pub fn new(
        gravitational_constant: f64,
        gravity_multiplier: f64,
        background_color: Rgb,
        size: [f64; 2],
        damping_factor: f64,
    ) -> Self {
        Self {
            gravitational_constant,
            gravity_multiplier,
            background_color,
            size,
            damping_factor,
            speed_threshold: SPEED_THRESHOLD,
        }
    }

    pub fn width(&self) -> f64 {
        self.size[0]
    }

    pub fn height(&self) -> f64 {
        self.size[1]
    }

    /// G after the multiplier has been applied
    pub fn effective_gravity(&self) -> f64 {
        self.gravity_multiplier * self.gravitational_constant
    }

    /// Checks the ranges the integrator relies on: a positive box and a damping
    /// factor strictly between 0 and 1.
    pub fn validate(&self) -> Result<(), PhysicsError> {
        if !(self.size[0] > 0.0 && self.size[1] > 0.0) {
            return Err(PhysicsError::InvalidConfig(format!(
                "size must be positive, got {:?}",
                self.size
            )));
        }
        if !(self.damping_factor > 0.0 && self.damping_factor < 1.0) {
            return Err(PhysicsError::InvalidConfig(format!(
                "damping factor must be in (0, 1), got {}",
                self.damping_factor
            )));
        }
        Ok(())
    }
}

impl Default for UniverseConfig {
    fn default() -> Self {
        Self::new(
            G,
            GRAVITY_MULTIPLIER,
            Rgb::BLACK,
            UNIVERSE_SIZE,
            DAMPING_FACTOR,
        )
    }
}

/// Initial conditions to populate a universe with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Scenario {
    /// `body_count` bodies with random position, mass, colour and velocity
    #[default]
    Random,
    /// Two heavy bodies drifting toward each other along the top of the box
    BlackHoles,
}

/// Run configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimConfig {
    pub universe: UniverseConfig,
    /// Bodies generated by [`Scenario::Random`]
    pub body_count: u32,
    /// Random seed for deterministic initial conditions
    pub seed: u64,
    /// Ticks per second in the windowed driver
    pub tick_rate_hz: f64,
    pub scenario: Scenario,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            universe: UniverseConfig::default(),
            body_count: DEFAULT_BODY_COUNT,
            seed: 42,
            tick_rate_hz: TICK_RATE_HZ,
            scenario: Scenario::Random,
        }
    }
}
