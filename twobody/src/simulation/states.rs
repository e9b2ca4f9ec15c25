//! Core state types for the pair simulation.
//!
//! A [`Body`] is generic over its spatial dimension `D`; the planar and
//! spatial variants are the `D = 2` and `D = 3` specializations:
//! - `Body<2>` using `NVec2` (2d)
//! - `Body<3>` using `NVec3` (3d)

use nalgebra::{SVector, Vector2, Vector3};

use crate::error::{SimError, SimResult};

pub type NVec<const D: usize> = SVector<f64, D>;
pub type NVec2 = Vector2<f64>;
pub type NVec3 = Vector3<f64>;

/// Selects one of the two bodies of a pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BodyId {
    A,
    B,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Body<const D: usize> {
    pub x: NVec<D>, // position (m)
    pub v: NVec<D>, // velocity (m/s)
    m: f64,         // mass (kg), fixed after construction
}

impl<const D: usize> Body<D> {
    /// Build a body, rejecting masses that are not strictly positive
    pub fn new(m: f64, x: NVec<D>, v: NVec<D>) -> SimResult<Self> {
        if !(m.is_finite() && m > 0.0) {
            return Err(SimError::InvalidParameter(format!(
                "mass must be positive and finite, got {m}"
            )));
        }
        if !is_finite_vec(&x) {
            return Err(SimError::InvalidParameter(format!(
                "position must be finite, got {:?}",
                x.as_slice()
            )));
        }
        if !is_finite_vec(&v) {
            return Err(SimError::InvalidParameter(format!(
                "velocity must be finite, got {:?}",
                v.as_slice()
            )));
        }
        Ok(Self { x, v, m })
    }

    pub fn mass(&self) -> f64 {
        self.m
    }

    /// Linear momentum m * v
    pub fn momentum(&self) -> NVec<D> {
        self.m * self.v
    }

    /// Kinetic energy 1/2 m |v|^2
    pub fn kinetic_energy(&self) -> f64 {
        0.5 * self.m * self.v.norm_squared()
    }
}

/// Turn a caller-supplied slice into a fixed-size vector of dimension `D`
pub fn vec_from_slice<const D: usize>(what: &str, s: &[f64]) -> SimResult<NVec<D>> {
    if s.len() != D {
        return Err(SimError::InvalidParameter(format!(
            "{what} has {} components, system is {D}D",
            s.len()
        )));
    }
    Ok(NVec::<D>::from_column_slice(s))
}

pub(crate) fn is_finite_vec<const D: usize>(v: &NVec<D>) -> bool {
    v.iter().all(|c| c.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_non_positive_mass() {
        for m in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let err = Body::<2>::new(m, NVec2::zeros(), NVec2::zeros()).unwrap_err();
            assert!(matches!(err, SimError::InvalidParameter(_)), "mass {m}: {err:?}");
        }
    }

    #[test]
    fn slice_length_must_match_dimension() {
        assert!(vec_from_slice::<3>("velocity", &[1.0, 2.0]).is_err());
        let v = vec_from_slice::<3>("velocity", &[1.0, 2.0, 3.0]).unwrap();
        assert_eq!(v, NVec3::new(1.0, 2.0, 3.0));
    }
}
