use orrery_core::{BodyId, PhysicsError, UniverseConfig};
use serde::{Deserialize, Serialize};

use crate::body::Body;

/// Bounded 2D environment and the registry of every body in it.
///
/// Bodies are only ever appended. A tick is two passes over the registry:
/// all velocities first, read against unchanged positions, then all positions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Universe {
    pub config: UniverseConfig,
    bodies: Vec<Body>,
}

impl Universe {
    pub fn new(config: UniverseConfig) -> Self {
        Self {
            config,
            bodies: Vec::new(),
        }
    }

    /// Appends in the given order. No deduplication.
    pub fn add_bodies(&mut self, bodies: impl IntoIterator<Item = Body>) {
        self.bodies.extend(bodies);
    }

    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    pub fn body(&self, id: BodyId) -> Option<&Body> {
        self.bodies.iter().find(|b| b.id() == id)
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    /// Velocity pass. A body is attracted by every other registry slot, so a
    /// clone sharing its id still counts as a separate body. Every new velocity
    /// is computed before any is stored, so a fault leaves all bodies as they were.
    pub fn update_velocities(&mut self) -> Result<(), PhysicsError> {
        let velocities = self
            .bodies
            .iter()
            .enumerate()
            .map(|(i, body)| {
                let others = self
                    .bodies
                    .iter()
                    .enumerate()
                    .filter(move |(j, _)| *j != i)
                    .map(|(_, other)| other);
                body.velocity_under(others, &self.config)
            })
            .collect::<Result<Vec<_>, _>>()?;

        for (body, velocity) in self.bodies.iter_mut().zip(velocities) {
            body.velocity = velocity;
        }
        Ok(())
    }

    /// Position pass with wall reflection
    pub fn update_positions(&mut self) {
        let Universe { config, bodies } = self;
        for body in bodies.iter_mut() {
            body.update_position(config);
        }
    }

    /// Advance the universe by one tick
    pub fn tick(&mut self) -> Result<(), PhysicsError> {
        self.update_velocities()?;
        self.update_positions();
        Ok(())
    }

    /// Runs `ticks` ticks, stopping at the first fault
    pub fn run(&mut self, ticks: u64) -> Result<(), PhysicsError> {
        for _ in 0..ticks {
            self.tick()?;
        }
        Ok(())
    }

    /// Sum of m * v over all bodies
    pub fn total_momentum(&self) -> [f64; 2] {
        self.bodies.iter().fold([0.0, 0.0], |acc, b| {
            let p = b.momentum();
            [acc[0] + p[0], acc[1] + p[1]]
        })
    }

    pub fn kinetic_energy(&self) -> f64 {
        self.bodies.iter().map(Body::kinetic_energy).sum()
    }
}
