//! Build a runnable pair scenario from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces the runtime bundle:
//! - engine settings (`Engine`)
//! - numerical parameters (`Parameters`)
//! - the pair at t = 0 (`PairSystem`)

use crate::configuration::config::{IntegratorConfig, ScenarioConfig};
use crate::error::{SimError, SimResult};
use crate::simulation::engine::Engine;
use crate::simulation::params::Parameters;
use crate::simulation::system::PairSystem;

#[derive(Debug, Clone)]
pub struct Scenario {
    pub engine: Engine,
    pub parameters: Parameters,
    pub system: PairSystem,
}

impl Scenario {
    pub fn build_scenario(cfg: &ScenarioConfig) -> SimResult<Self> {
        let p_cfg = &cfg.parameters;
        if p_cfg.steps == 0 {
            return Err(SimError::Config("parameters.steps must be at least 1".to_string()));
        }
        if p_cfg.sample_every == 0 {
            return Err(SimError::Config(
                "parameters.sample_every must be at least 1".to_string(),
            ));
        }
        if !(p_cfg.dt.is_finite() && p_cfg.dt > 0.0) {
            return Err(SimError::Config(format!(
                "parameters.dt must be positive, got {}",
                p_cfg.dt
            )));
        }
        if !matches!(cfg.engine.dimension, 2 | 3) {
            return Err(SimError::Config(format!(
                "engine.dimension must be 2 or 3, got {}",
                cfg.engine.dimension
            )));
        }

        let parameters = Parameters {
            dt: p_cfg.dt,
            steps: p_cfg.steps,
            sample_every: p_cfg.sample_every,
        };

        let engine = Engine {
            dimension: cfg.engine.dimension,
            integrator: cfg.engine.integrator,
        };

        // Pair at t = 0: A at the origin, B on the x axis
        let pair = &cfg.pair;
        let system = PairSystem::new(
            pair.a.mass,
            pair.b.mass,
            pair.separation,
            &pair.a.velocity,
            &pair.b.velocity,
            engine.dimension,
        )?;

        Ok(Self {
            engine,
            parameters,
            system,
        })
    }

    /// One step of the configured integrator with the configured `dt`
    pub fn advance(&mut self) -> SimResult<()> {
        match self.engine.integrator {
            IntegratorConfig::SemiImplicitEuler => self.system.step(self.parameters.dt),
            IntegratorConfig::VelocityVerlet => self.system.step_verlet(self.parameters.dt),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::configuration::config::{BodyConfig, EngineConfig, PairConfig, ParametersConfig};

    fn config(dimension: usize, velocity_b: Vec<f64>) -> ScenarioConfig {
        ScenarioConfig {
            engine: EngineConfig {
                dimension,
                integrator: IntegratorConfig::SemiImplicitEuler,
            },
            parameters: ParametersConfig {
                dt: 10.0,
                steps: 5,
                sample_every: 1,
            },
            pair: PairConfig {
                separation: 1.0e7,
                a: BodyConfig {
                    mass: 5.0e24,
                    velocity: vec![0.0; dimension],
                },
                b: BodyConfig {
                    mass: 1.0e22,
                    velocity: velocity_b,
                },
            },
        }
    }

    #[test]
    fn builds_and_advances() {
        let mut scenario = Scenario::build_scenario(&config(2, vec![0.0, 5000.0])).unwrap();
        scenario.advance().unwrap();
        assert_eq!(scenario.system.steps_taken(), 1);
        assert!((scenario.system.elapsed() - 10.0).abs() < 1e-12);
    }

    #[test]
    fn rejects_unsupported_dimension() {
        let err = Scenario::build_scenario(&config(4, vec![0.0; 4])).unwrap_err();
        assert!(matches!(err, SimError::Config(_)));
    }

    #[test]
    fn rejects_zero_sampling() {
        let mut cfg = config(3, vec![0.0, 1.0, 0.0]);
        cfg.parameters.sample_every = 0;
        assert!(matches!(Scenario::build_scenario(&cfg), Err(SimError::Config(_))));
    }

    #[test]
    fn velocity_dimension_mismatch_is_invalid_parameter() {
        let err = Scenario::build_scenario(&config(3, vec![0.0, 1.0])).unwrap_err();
        assert!(matches!(err, SimError::InvalidParameter(_)));
    }
}
