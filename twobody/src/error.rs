//! Error type shared by the kernel, the scenario builder and the driver

use thiserror::Error;

/// Root error for everything the pair kernel can refuse to do.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SimError {
    /// Non-positive or non-finite mass/separation/time step, or a velocity
    /// vector whose length does not match the system dimensionality.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// The two bodies coincide, so the attraction has no direction.
    #[error("degenerate state: {0}")]
    DegenerateState(String),

    /// A scenario file that does not describe a runnable pair.
    #[error("config error: {0}")]
    Config(String),
}

pub type SimResult<T> = Result<T, SimError>;
