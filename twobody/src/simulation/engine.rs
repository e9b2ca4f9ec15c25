//! Runtime engine settings
//!
//! Dimension and integrator used when building and running a `Scenario`

use crate::configuration::config::IntegratorConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Engine {
    pub dimension: usize,             // 2 or 3
    pub integrator: IntegratorConfig, // semi-implicit euler or velocity verlet
}
