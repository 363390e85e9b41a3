use anyhow::Result;
use clap::{Args, ValueEnum};
use orrery_core::constants::{
    DAMPING_FACTOR, DEFAULT_BODY_COUNT, GRAVITY_MULTIPLIER, TICK_RATE_HZ, UNIVERSE_SIZE,
};
use orrery_core::{Scenario, SimConfig, UniverseConfig};
use orrery_physics::{Universe, procgen};
use std::path::PathBuf;

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScenarioArg {
    Random,
    BlackHoles,
}

impl From<ScenarioArg> for Scenario {
    fn from(arg: ScenarioArg) -> Self {
        match arg {
            ScenarioArg::Random => Scenario::Random,
            ScenarioArg::BlackHoles => Scenario::BlackHoles,
        }
    }
}

/// Options shared by the viewer and the headless runner
#[derive(Args, Debug, Clone)]
pub struct RunArgs {
    /// Number of random bodies
    #[arg(long, default_value_t = DEFAULT_BODY_COUNT)]
    pub bodies: u32,

    /// Seed for the random initial conditions
    #[arg(long, default_value_t = 42)]
    pub seed: u64,

    #[arg(long, value_enum, default_value_t = ScenarioArg::Random)]
    pub scenario: ScenarioArg,

    /// Ticks per second (viewer only)
    #[arg(long, default_value_t = TICK_RATE_HZ)]
    pub tick_rate: f64,

    #[arg(long, default_value_t = UNIVERSE_SIZE[0])]
    pub width: f64,

    #[arg(long, default_value_t = UNIVERSE_SIZE[1])]
    pub height: f64,

    /// Brake applied to fast axes, in (0, 1)
    #[arg(long, default_value_t = DAMPING_FACTOR)]
    pub damping: f64,

    #[arg(long, default_value_t = GRAVITY_MULTIPLIER)]
    pub gravity_multiplier: f64,

    /// Resume from a snapshot instead of generating bodies
    #[arg(long)]
    pub load: Option<PathBuf>,
}

impl RunArgs {
    pub fn sim_config(&self) -> SimConfig {
        let defaults = UniverseConfig::default();
        SimConfig {
            universe: UniverseConfig::new(
                defaults.gravitational_constant,
                self.gravity_multiplier,
                defaults.background_color,
                [self.width, self.height],
                self.damping,
            ),
            body_count: self.bodies,
            seed: self.seed,
            tick_rate_hz: self.tick_rate,
            scenario: self.scenario.into(),
        }
    }

    /// The universe to run and the tick count it starts at. Refuses configs the
    /// integrator cannot handle.
    pub fn build_universe(&self, config: &SimConfig) -> Result<(Universe, u64)> {
        let (universe, ticks) = match &self.load {
            Some(path) => {
                let snapshot = orrery_storage::load_snapshot(path).map_err(anyhow::Error::msg)?;
                (snapshot.universe, snapshot.ticks)
            }
            None => {
                // Generation samples positions from the box, so it must be valid first
                config.universe.validate()?;
                (procgen::populate(config), 0)
            }
        };
        universe.config.validate()?;
        Ok((universe, ticks))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Parser)]
    struct Cli {
        #[command(flatten)]
        run: RunArgs,
    }

    fn parse(args: &[&str]) -> RunArgs {
        Cli::try_parse_from(std::iter::once("orrery").chain(args.iter().copied()))
            .unwrap()
            .run
    }

    #[test]
    fn test_defaults_match_reference_setup() {
        let config = parse(&[]).sim_config();
        assert_eq!(config.universe, UniverseConfig::default());
        assert_eq!(config.body_count, 3);
        assert_eq!(config.tick_rate_hz, 165.0);
        assert_eq!(config.scenario, Scenario::Random);
    }

    #[test]
    fn test_overrides() {
        let config = parse(&[
            "--bodies", "8", "--seed", "5", "--scenario", "black-holes", "--width", "640",
            "--damping", "0.5",
        ])
        .sim_config();
        assert_eq!(config.body_count, 8);
        assert_eq!(config.seed, 5);
        assert_eq!(config.scenario, Scenario::BlackHoles);
        assert_eq!(config.universe.size, [640.0, 1000.0]);
        assert_eq!(config.universe.damping_factor, 0.5);
    }

    #[test]
    fn test_build_rejects_bad_damping() {
        let args = parse(&["--damping", "1.5"]);
        let config = args.sim_config();
        assert!(args.build_universe(&config).is_err());
    }

    #[test]
    fn test_build_rejects_negative_size_before_generating() {
        for flag in ["--width=-5", "--height=-5", "--width=0"] {
            let args = parse(&[flag]);
            let err = args.build_universe(&args.sim_config()).unwrap_err();
            assert!(err.to_string().contains("size must be positive"), "{flag}: {err}");
        }
    }

    #[test]
    fn test_build_generates_bodies() {
        let args = parse(&["--bodies", "4"]);
        let (universe, ticks) = args.build_universe(&args.sim_config()).unwrap();
        assert_eq!(universe.len(), 4);
        assert_eq!(ticks, 0);
    }
}
