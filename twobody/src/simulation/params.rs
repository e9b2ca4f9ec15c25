//! Physical constants and numerical parameters for a run
//!
//! `Parameters` holds runtime settings:
//! - fixed integration step size `dt` (s),
//! - number of steps to take,
//! - sampling stride for frames handed to the consumer

/// Newtonian gravitational constant (m^3 kg^-1 s^-2)
pub const G: f64 = 6.674_30e-11;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Parameters {
    pub dt: f64,             // step size
    pub steps: u64,          // number of steps
    pub sample_every: u64,   // emit a frame every n steps
}
