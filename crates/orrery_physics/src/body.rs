use orrery_core::constants::{FAR_EDGE_MARGIN, MAX_RADIUS, RADIUS_MASS_FLOOR};
use orrery_core::{BodyId, PhysicsError, Rgb, UniverseConfig};
use serde::{Deserialize, Serialize};

use crate::forces;
use crate::universe::Universe;

/// A point mass in the universe.
///
/// Position and velocity change every tick; identity, mass and radius are
/// fixed at construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Body {
    id: BodyId,
    pub name: String,
    pub color: Rgb,
    mass: f64,
    /// Drawn radius, derived from mass. Not used by the physics.
    radius: f64,
    /// Universe coordinates: origin top-left, y grows downward
    pub position: [f64; 2],
    /// Per-axis displacement per tick
    pub velocity: [f64; 2],
}

impl Body {
    /// `mass` must be positive; it is not checked.
    pub fn new(
        x: f64,
        y: f64,
        name: impl Into<String>,
        color: Rgb,
        mass: f64,
        initial_velocity: [f64; 2],
    ) -> Self {
        Self {
            id: BodyId::new(),
            name: name.into(),
            color,
            mass,
            radius: Self::radius_for_mass(mass),
            position: [x, y],
            velocity: initial_velocity,
        }
    }

    /// Half the mass, with the mass floored at 10 first and the result capped at 100
    pub fn radius_for_mass(mass: f64) -> f64 {
        MAX_RADIUS.min(mass.max(RADIUS_MASS_FLOOR) / 2.0)
    }

    pub fn id(&self) -> BodyId {
        self.id
    }

    pub fn mass(&self) -> f64 {
        self.mass
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn momentum(&self) -> [f64; 2] {
        [self.velocity[0] * self.mass, self.velocity[1] * self.mass]
    }

    pub fn kinetic_energy(&self) -> f64 {
        0.5 * self.mass * (self.velocity[0].powi(2) + self.velocity[1].powi(2))
    }

    pub fn squared_distance_to(&self, other: &Body) -> f64 {
        forces::squared_distance(self.position, other.position)
    }

    /// Force on `self` due to `other`, scaled by the universe's gravity multiplier.
    /// Fails when both bodies are at exactly the same position.
    pub fn gravitational_force_from(
        &self,
        other: &Body,
        config: &UniverseConfig,
    ) -> Result<[f64; 2], PhysicsError> {
        forces::gravity_force(
            self.position,
            self.mass,
            other.position,
            other.mass,
            config.gravitational_constant,
            config.gravity_multiplier,
        )
        .ok_or(PhysicsError::CoincidentBodies {
            body: self.id,
            other: other.id,
        })
    }

    /// The velocity a body held outside `universe` would have after the
    /// velocity pass: every registered body attracts it except one carrying
    /// its own id. Does not modify anything.
    pub fn velocity_after_gravity(&self, universe: &Universe) -> Result<[f64; 2], PhysicsError> {
        self.velocity_under(
            universe.bodies().iter().filter(|b| b.id != self.id),
            &universe.config,
        )
    }

    /// Current velocity plus the acceleration from each of `others`, then damping
    pub(crate) fn velocity_under<'a>(
        &self,
        others: impl IntoIterator<Item = &'a Body>,
        config: &UniverseConfig,
    ) -> Result<[f64; 2], PhysicsError> {
        let mut velocity = self.velocity;

        for other in others {
            let force = self.gravitational_force_from(other, config)?;
            // Unit time step: acceleration is added straight to velocity
            velocity[0] += force[0] / self.mass;
            velocity[1] += force[1] / self.mass;
        }

        apply_damping(&mut velocity, config);
        Ok(velocity)
    }

    /// Velocity pass for a body held outside `universe`. The universe's own
    /// bodies go through [`Universe::update_velocities`] instead, which keeps
    /// every position fixed until all velocities are known.
    pub fn update_velocity(&mut self, universe: &Universe) -> Result<(), PhysicsError> {
        self.velocity = self.velocity_after_gravity(universe)?;
        Ok(())
    }

    /// Moves by one tick of velocity, then reflects off the walls per axis.
    pub fn update_position(&mut self, config: &UniverseConfig) {
        self.position[0] += self.velocity[0];
        self.position[1] += self.velocity[1];

        for axis in 0..2 {
            let limit = config.size[axis];
            if self.position[axis] < 0.0 {
                self.position[axis] = 0.0;
                self.velocity[axis] = -self.velocity[axis];
            } else if self.position[axis] > limit {
                self.position[axis] = limit - FAR_EDGE_MARGIN;
                self.velocity[axis] = -self.velocity[axis];
            }
        }
    }
}

/// Brakes each axis whose velocity is above the threshold.
///
/// The comparison is on the signed component, so an axis moving fast in the
/// negative direction is never damped.
fn apply_damping(velocity: &mut [f64; 2], config: &UniverseConfig) {
    for v in velocity.iter_mut() {
        if *v > config.speed_threshold {
            *v *= config.damping_factor;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn body_at(x: f64, y: f64, mass: f64) -> Body {
        Body::new(x, y, "test", Rgb::new(255, 255, 255), mass, [0.0, 0.0])
    }

    fn unit_config() -> UniverseConfig {
        UniverseConfig::new(1.0, 1.0, Rgb::BLACK, [1000.0, 1000.0], 0.9)
    }

    #[test]
    fn test_new_sets_state() {
        let body = Body::new(1.5, 2.5, "Earth", Rgb::new(0, 0, 255), 40.0, [0.25, -0.5]);
        assert_eq!(body.position, [1.5, 2.5]);
        assert_eq!(body.velocity, [0.25, -0.5]);
        assert_eq!(body.mass(), 40.0);
        assert_eq!(body.radius(), 20.0);
        assert_eq!(body.name, "Earth");
        assert_eq!(body.color, Rgb::new(0, 0, 255));
    }

    #[test]
    fn test_radius_clamping() {
        // Floor: mass below 10 behaves like 10
        assert_eq!(Body::radius_for_mass(1.0), 5.0);
        assert_eq!(Body::radius_for_mass(-20.0), 5.0);
        assert_eq!(Body::radius_for_mass(10.0), 5.0);
        assert_eq!(Body::radius_for_mass(150.0), 75.0);
        // Cap
        assert_eq!(Body::radius_for_mass(200.0), 100.0);
        assert_eq!(Body::radius_for_mass(10_000.0), 100.0);
    }

    #[test]
    fn test_squared_distance_symmetric() {
        let a = body_at(1.0, 2.0, 10.0);
        let b = body_at(4.0, 6.0, 10.0);
        assert_eq!(a.squared_distance_to(&b), 25.0);
        assert_eq!(a.squared_distance_to(&b), b.squared_distance_to(&a));

        let c = body_at(1.0, 2.0, 99.0);
        assert_eq!(a.squared_distance_to(&c), 0.0);
    }

    #[test]
    fn test_newton_third_law() {
        let config = UniverseConfig::default();
        let a = body_at(123.0, 456.0, 37.0);
        let b = body_at(789.5, 12.25, 150.0);

        let fa = a.gravitational_force_from(&b, &config).unwrap();
        let fb = b.gravitational_force_from(&a, &config).unwrap();

        assert!((fa[0] + fb[0]).abs() < 1e-12, "{fa:?} vs {fb:?}");
        assert!((fa[1] + fb[1]).abs() < 1e-12, "{fa:?} vs {fb:?}");
    }

    #[test]
    fn test_force_points_toward_other() {
        let config = unit_config();
        let a = body_at(0.0, 0.0, 1.0);
        let b = body_at(3.0, 4.0, 25.0);

        let f = a.gravitational_force_from(&b, &config).unwrap();
        // |F| = 1 * 25 / 25 = 1, direction (0.6, 0.8)
        assert!((f[0] - 0.6).abs() < 1e-12);
        assert!((f[1] - 0.8).abs() < 1e-12);
    }

    #[test]
    fn test_coincident_bodies_fault() {
        let config = unit_config();
        let a = body_at(50.0, 50.0, 10.0);
        let b = body_at(50.0, 50.0, 20.0);

        let err = a.gravitational_force_from(&b, &config).unwrap_err();
        assert_eq!(
            err,
            PhysicsError::CoincidentBodies {
                body: a.id(),
                other: b.id()
            }
        );
    }

    #[test]
    fn test_update_velocity_matches_closed_form() {
        let mut universe = Universe::new(UniverseConfig::default());
        universe.add_bodies([body_at(100.0, 200.0, 50.0), body_at(400.0, 600.0, 80.0)]);

        let mut a = universe.bodies()[0].clone();
        let b = &universe.bodies()[1];
        a.update_velocity(&universe).unwrap();

        // r = 500, direction (0.6, 0.8); a = G' * m_b / r^2
        let g = universe.config.effective_gravity();
        let accel = g * 80.0 / 250_000.0;
        assert!((a.velocity[0] - accel * 0.6).abs() < 1e-15);
        assert!((a.velocity[1] - accel * 0.8).abs() < 1e-15);
        // Other body untouched
        assert_eq!(b.velocity, [0.0, 0.0]);
    }

    #[test]
    fn test_update_velocity_excludes_self_by_id_only() {
        let mut universe = Universe::new(unit_config());
        let original = body_at(10.0, 10.0, 10.0);
        universe.add_bodies([original.clone()]);

        // Same id: skipped, no force and no fault
        let mut same = original.clone();
        same.update_velocity(&universe).unwrap();
        assert_eq!(same.velocity, [0.0, 0.0]);

        // Identical state but a different identity: counted, and coincident
        let mut twin = body_at(10.0, 10.0, 10.0);
        assert!(matches!(
            twin.update_velocity(&universe),
            Err(PhysicsError::CoincidentBodies { .. })
        ));
        assert_eq!(twin.velocity, [0.0, 0.0]);
    }

    #[test]
    fn test_damping_positive_axis() {
        let universe = Universe::new(UniverseConfig::default());
        let threshold = universe.config.speed_threshold;
        let mut body = body_at(500.0, 500.0, 10.0);
        body.velocity = [threshold + 0.5, threshold];

        body.update_velocity(&universe).unwrap();

        assert_eq!(body.velocity[0], (threshold + 0.5) * 0.9);
        // Exactly at the threshold is not above it
        assert_eq!(body.velocity[1], threshold);
    }

    #[test]
    fn test_damping_ignores_negative_axis() {
        // Signed comparison: fast leftward/upward motion is never braked
        let universe = Universe::new(UniverseConfig::default());
        let mut body = body_at(500.0, 500.0, 10.0);
        body.velocity = [-3.5, -40.0];

        body.update_velocity(&universe).unwrap();

        assert_eq!(body.velocity, [-3.5, -40.0]);
    }

    #[test]
    fn test_reflect_near_edge() {
        let config = UniverseConfig::default();
        let mut body = body_at(0.0, 2.0, 10.0);
        body.velocity = [-5.0, -3.0];

        body.update_position(&config);

        assert_eq!(body.position, [0.0, 0.0]);
        assert_eq!(body.velocity, [5.0, 3.0]);
    }

    #[test]
    fn test_reflect_far_edge() {
        let config = UniverseConfig::new(1.0, 1.0, Rgb::BLACK, [800.0, 600.0], 0.9);
        let mut body = body_at(800.0, 598.0, 10.0);
        body.velocity = [5.0, 4.0];

        body.update_position(&config);

        assert_eq!(body.position, [790.0, 590.0]);
        assert_eq!(body.velocity, [-5.0, -4.0]);
    }

    #[test]
    fn test_reflect_is_per_axis() {
        let config = UniverseConfig::default();
        let mut body = body_at(500.0, 999.0, 10.0);
        body.velocity = [1.0, 2.0];

        body.update_position(&config);

        assert_eq!(body.position, [501.0, 990.0]);
        assert_eq!(body.velocity, [1.0, -2.0]);
    }

    #[test]
    fn test_on_the_wall_is_inside() {
        let config = UniverseConfig::default();
        let mut body = body_at(995.0, 5.0, 10.0);
        body.velocity = [5.0, -5.0];

        body.update_position(&config);

        assert_eq!(body.position, [1000.0, 0.0]);
        assert_eq!(body.velocity, [5.0, -5.0]);
    }

    #[test]
    fn test_momentum_and_energy() {
        let mut body = body_at(0.0, 0.0, 2.0);
        body.velocity = [3.0, 4.0];
        assert_eq!(body.momentum(), [6.0, 8.0]);
        assert_eq!(body.kinetic_energy(), 25.0);
    }
}
