//! Configuration types for loading pair scenarios from YAML.
//!
//! A scenario consists of:
//!
//! - [`EngineConfig`]     – dimension and integrator
//! - [`ParametersConfig`] – step size, step count and frame sampling
//! - [`PairConfig`]       – masses, initial separation and velocities
//! - [`ScenarioConfig`]   – top-level wrapper loaded from YAML
//!
//! # YAML format
//! The Earth/Moon scenario:
//!
//! ```yaml
//! engine:
//!   dimension: 3                      # 2 or 3
//!   integrator: "semi_implicit_euler" # or "velocity_verlet"
//!
//! parameters:
//!   dt: 10000.0                       # fixed step (s)
//!   steps: 1000                       # number of steps
//!   sample_every: 20                  # one frame every n steps
//!
//! pair:
//!   separation: 3.844e8               # B starts here on the x axis (m)
//!   a:
//!     mass: 5.972e24
//!     velocity: [0.0, 0.0, 0.0]
//!   b:
//!     mass: 7.348e22
//!     velocity: [0.0, 1022.0, 0.0]
//! ```

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Which time-stepping scheme advances the pair
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IntegratorConfig {
    #[default]
    #[serde(rename = "semi_implicit_euler")] // one force evaluation, kick then drift
    SemiImplicitEuler,

    #[serde(rename = "velocity_verlet")] // two force evaluations, second order
    VelocityVerlet,
}

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct EngineConfig {
    pub dimension: usize, // 2 or 3
    #[serde(default)]
    pub integrator: IntegratorConfig,
}

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct ParametersConfig {
    pub dt: f64,     // time step size (s)
    pub steps: u64,  // number of steps
    #[serde(default = "default_sample_every")]
    pub sample_every: u64, // emit one frame every n steps
}

fn default_sample_every() -> u64 {
    1
}

/// Initial state of one body; its position follows from the pair layout
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct BodyConfig {
    pub mass: f64,          // kg
    pub velocity: Vec<f64>, // m/s, one entry per axis
}

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct PairConfig {
    pub separation: f64, // initial distance of B from A along the x axis (m)
    pub a: BodyConfig,
    pub b: BodyConfig,
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct ScenarioConfig {
    pub engine: EngineConfig,
    pub parameters: ParametersConfig,
    pub pair: PairConfig,
}

impl ScenarioConfig {
    pub fn from_yaml_str(s: &str) -> Result<Self> {
        serde_yaml::from_str(s).context("malformed scenario YAML")
    }

    pub fn load(path: &Path) -> Result<Self> {
        let file = File::open(path)
            .with_context(|| format!("failed to open scenario {}", path.display()))?;
        let reader = BufReader::new(file);
        serde_yaml::from_reader(reader)
            .with_context(|| format!("failed to parse scenario {}", path.display()))
    }
}
