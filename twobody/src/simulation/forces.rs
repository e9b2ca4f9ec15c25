//! Force law for the pair kernel
//!
//! Plain inverse-square Newtonian attraction, no softening: coincident bodies
//! are reported as a degenerate state instead of being smoothed over.

use crate::error::{SimError, SimResult};
use crate::simulation::states::{is_finite_vec, Body, NVec};

/// Newtonian gravity between two point masses
#[allow(non_snake_case)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NewtonianGravity {
    pub G: f64, // gravitational constant
}

impl Default for NewtonianGravity {
    fn default() -> Self {
        Self { G: crate::simulation::params::G }
    }
}

impl NewtonianGravity {
    /// Force exerted on `a` by `b`
    ///
    /// With r = x_b - x_a the result is `G m_a m_b / |r|^2 * r / |r|`, directed
    /// from `a` toward `b`. The force on `b` is the exact negation.
    pub fn force_on_a<const D: usize>(&self, a: &Body<D>, b: &Body<D>) -> SimResult<NVec<D>> {
        // displacement from a to b
        let r = b.x - a.x;
        let dist = r.norm();

        if dist == 0.0 {
            return Err(SimError::DegenerateState(format!(
                "bodies coincide at {:?}, attraction has no direction",
                a.x.as_slice()
            )));
        }

        // |F| = G m_a m_b / d^2
        let magnitude = self.G * (a.mass() * b.mass()) / (dist * dist);
        let force = magnitude * (r / dist);

        if !(magnitude.is_finite() && is_finite_vec(&force)) {
            return Err(SimError::DegenerateState(format!(
                "attraction overflows at separation {dist} (|F| = {magnitude})"
            )));
        }

        Ok(force)
    }

    /// Gravitational potential energy -G m_a m_b / |r|
    pub fn potential_energy<const D: usize>(&self, a: &Body<D>, b: &Body<D>) -> SimResult<f64> {
        let dist = (b.x - a.x).norm();
        if dist == 0.0 {
            return Err(SimError::DegenerateState(
                "potential energy is unbounded for coincident bodies".to_string(),
            ));
        }
        let energy = -self.G * (a.mass() * b.mass()) / dist;
        if !energy.is_finite() {
            return Err(SimError::DegenerateState(format!(
                "potential energy overflows at separation {dist}"
            )));
        }
        Ok(energy)
    }
}
