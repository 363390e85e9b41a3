use std::fmt;

use crate::types::BodyId;

/// Errors raised by the physics core
#[derive(Debug, Clone, PartialEq)]
pub enum PhysicsError {
    /// Two bodies sit at exactly the same position, so the force between them
    /// has no direction and an infinite magnitude. Fatal for the tick.
    CoincidentBodies { body: BodyId, other: BodyId },
    /// Universe parameters outside the ranges the integrator assumes
    InvalidConfig(String),
}

impl fmt::Display for PhysicsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CoincidentBodies { body, other } => {
                write!(f, "bodies {body} and {other} occupy the same position")
            }
            Self::InvalidConfig(reason) => write!(f, "invalid universe config: {reason}"),
        }
    }
}

impl std::error::Error for PhysicsError {}
