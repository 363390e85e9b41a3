use orrery_core::constants::{RANDOM_MASS_RANGE, RANDOM_MAX_SPEED};
use orrery_core::{Rgb, Scenario, SimConfig, UniverseConfig};
use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::body::Body;
use crate::universe::Universe;

/// Build a universe from the run config and populate it with the chosen scenario
pub fn populate(config: &SimConfig) -> Universe {
    let mut universe = Universe::new(config.universe.clone());
    let bodies = match config.scenario {
        Scenario::Random => {
            let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
            generate_random_bodies(config.body_count, &config.universe, &mut rng)
        }
        Scenario::BlackHoles => black_holes(),
    };
    universe.add_bodies(bodies);
    universe
}

/// `count` bodies scattered over the universe, named "Body 0", "Body 1", ...
pub fn generate_random_bodies(
    count: u32,
    config: &UniverseConfig,
    rng: &mut impl Rng,
) -> Vec<Body> {
    (0..count).map(|i| random_body(i, config, rng)).collect()
}

fn random_body(index: u32, config: &UniverseConfig, rng: &mut impl Rng) -> Body {
    let color = Rgb::new(
        rng.gen_range(0..=255),
        rng.gen_range(0..=255),
        rng.gen_range(0..=255),
    );

    // Whole-pixel positions anywhere in the box, edges included
    let x = rng.gen_range(0..=config.width() as i64) as f64;
    let y = rng.gen_range(0..=config.height() as i64) as f64;

    let (min_mass, max_mass) = RANDOM_MASS_RANGE;
    let mass = rng.gen_range(min_mass..=max_mass) as f64;

    let velocity = [
        rng.gen_range(-RANDOM_MAX_SPEED..RANDOM_MAX_SPEED),
        rng.gen_range(-RANDOM_MAX_SPEED..RANDOM_MAX_SPEED),
    ];

    Body::new(x, y, format!("Body {index}"), color, mass, velocity)
}

/// Two heavy, dark bodies on a slow collision course along the top of the box
pub fn black_holes() -> Vec<Body> {
    let dark = Rgb::new(10, 10, 10);
    vec![
        Body::new(200.0, 200.0, "Black Hole", dark, 10_000.0, [0.2, 0.01]),
        Body::new(1000.0, 200.0, "Black Hole", dark, 10_000.0, [-0.2, -0.01]),
    ]
}
