pub mod error;
pub mod simulation;
pub mod configuration;
pub mod driver;

pub use error::{SimError, SimResult};

pub use simulation::states::{Body, BodyId, NVec, NVec2, NVec3};
pub use simulation::params::{Parameters, G};
pub use simulation::forces::NewtonianGravity;
pub use simulation::integrator::{semi_implicit_euler, velocity_verlet};
pub use simulation::system::{GravitationalPairSystem, PairState, PairSystem, PairSystem2, PairSystem3};
pub use simulation::scenario::Scenario;

pub use configuration::config::{IntegratorConfig, EngineConfig, ParametersConfig, BodyConfig, PairConfig, ScenarioConfig};

pub use driver::frames::{Frame, RunSummary, run_scenario, spawn_run};
pub use driver::sink::FrameWriter;
