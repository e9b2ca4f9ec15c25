//! The gravitational pair: two point masses under mutual attraction
//!
//! [`GravitationalPairSystem`] is generic over the spatial dimension; the
//! planar and spatial systems are `PairSystem2` and `PairSystem3`. When the
//! dimension is only known at runtime (scenario files, CLI) use [`PairSystem`].
//!
//! Only `D = 2` and `D = 3` are supported; constructing any other dimension
//! is rejected at compile time.
//!
//! `step` takes `&mut self`, so a system cannot be stepped from two places at
//! once. Independent systems share nothing and can run on separate threads.

use tracing::{debug, trace};

use crate::error::{SimError, SimResult};
use crate::simulation::forces::NewtonianGravity;
use crate::simulation::integrator::{semi_implicit_euler, velocity_verlet};
use crate::simulation::states::{is_finite_vec, vec_from_slice, Body, BodyId, NVec};

/// Two point masses under mutual Newtonian attraction.
///
/// Any dimension other than 2 or 3 fails to build:
///
/// ```compile_fail
/// let _ = twobody::GravitationalPairSystem::<4>::new(1.0, 1.0, 1.0, &[0.0; 4], &[0.0; 4]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct GravitationalPairSystem<const D: usize> {
    a: Body<D>,
    b: Body<D>,
    gravity: NewtonianGravity,
    t: f64,     // simulated time (s)
    steps: u64, // steps taken so far
}

pub type PairSystem2 = GravitationalPairSystem<2>;
pub type PairSystem3 = GravitationalPairSystem<3>;

impl<const D: usize> GravitationalPairSystem<D> {
    const PLANAR_OR_SPATIAL: () = assert!(D == 2 || D == 3, "pair systems are 2D or 3D");

    /// Place A at the origin and B at `separation` along the first axis.
    ///
    /// Velocities are given as slices so a caller holding runtime data gets a
    /// clean `InvalidParameter` instead of a panic on a length mismatch.
    pub fn new(
        mass_a: f64,
        mass_b: f64,
        separation: f64,
        velocity_a: &[f64],
        velocity_b: &[f64],
    ) -> SimResult<Self> {
        if separation == 0.0 {
            return Err(SimError::DegenerateState(
                "zero initial separation places both bodies at the origin".to_string(),
            ));
        }
        if !(separation.is_finite() && separation > 0.0) {
            return Err(SimError::InvalidParameter(format!(
                "separation must be positive and finite, got {separation}"
            )));
        }
        let mut x_b = NVec::<D>::zeros();
        x_b[0] = separation;

        Self::with_positions(
            mass_a,
            mass_b,
            NVec::<D>::zeros(),
            x_b,
            vec_from_slice("initial velocity of A", velocity_a)?,
            vec_from_slice("initial velocity of B", velocity_b)?,
        )
    }

    /// Build a pair with both positions chosen by the caller
    pub fn with_positions(
        mass_a: f64,
        mass_b: f64,
        position_a: NVec<D>,
        position_b: NVec<D>,
        velocity_a: NVec<D>,
        velocity_b: NVec<D>,
    ) -> SimResult<Self> {
        #[allow(clippy::let_unit_value)]
        let () = Self::PLANAR_OR_SPATIAL;

        let a = Body::new(mass_a, position_a, velocity_a)?;
        let b = Body::new(mass_b, position_b, velocity_b)?;
        if a.x == b.x {
            return Err(SimError::DegenerateState(format!(
                "both bodies start at {:?}",
                a.x.as_slice()
            )));
        }

        debug!(
            dims = D,
            mass_a,
            mass_b,
            separation = (b.x - a.x).norm(),
            "constructed gravitational pair"
        );

        Ok(Self {
            a,
            b,
            gravity: NewtonianGravity::default(),
            t: 0.0,
            steps: 0,
        })
    }

    /// Force on A from B. The force on B is its negation.
    pub fn gravitational_force_on_a(&self) -> SimResult<NVec<D>> {
        self.gravity.force_on_a(&self.a, &self.b)
    }

    /// Force acting on `body`
    pub fn force_on(&self, body: BodyId) -> SimResult<NVec<D>> {
        let f_ab = self.gravitational_force_on_a()?;
        Ok(match body {
            BodyId::A => f_ab,
            BodyId::B => -f_ab,
        })
    }

    /// Advance both bodies by `dt` seconds with semi-implicit Euler
    pub fn step(&mut self, dt: f64) -> SimResult<()> {
        check_dt(dt)?;
        semi_implicit_euler(&mut self.a, &mut self.b, &self.gravity, dt)?;
        self.advance_clock(dt);
        Ok(())
    }

    /// Advance both bodies by `dt` seconds with velocity-Verlet
    pub fn step_verlet(&mut self, dt: f64) -> SimResult<()> {
        check_dt(dt)?;
        velocity_verlet(&mut self.a, &mut self.b, &self.gravity, dt)?;
        self.advance_clock(dt);
        Ok(())
    }

    fn advance_clock(&mut self, dt: f64) {
        self.t += dt;
        self.steps += 1;
        trace!(step = self.steps, t = self.t, "pair advanced");
    }

    fn body(&self, body: BodyId) -> &Body<D> {
        match body {
            BodyId::A => &self.a,
            BodyId::B => &self.b,
        }
    }

    fn body_mut(&mut self, body: BodyId) -> &mut Body<D> {
        match body {
            BodyId::A => &mut self.a,
            BodyId::B => &mut self.b,
        }
    }

    pub fn position_of(&self, body: BodyId) -> &NVec<D> {
        &self.body(body).x
    }

    pub fn velocity_of(&self, body: BodyId) -> &NVec<D> {
        &self.body(body).v
    }

    pub fn mass_of(&self, body: BodyId) -> f64 {
        self.body(body).mass()
    }

    /// Move `body` to `position`. Coincident positions are accepted here and
    /// reported by the next force evaluation.
    pub fn set_position(&mut self, body: BodyId, position: NVec<D>) -> SimResult<()> {
        if !is_finite_vec(&position) {
            return Err(SimError::InvalidParameter(format!(
                "position must be finite, got {:?}",
                position.as_slice()
            )));
        }
        self.body_mut(body).x = position;
        Ok(())
    }

    pub fn set_velocity(&mut self, body: BodyId, velocity: NVec<D>) -> SimResult<()> {
        if !is_finite_vec(&velocity) {
            return Err(SimError::InvalidParameter(format!(
                "velocity must be finite, got {:?}",
                velocity.as_slice()
            )));
        }
        self.body_mut(body).v = velocity;
        Ok(())
    }

    /// Simulated seconds since construction
    pub fn elapsed(&self) -> f64 {
        self.t
    }

    pub fn steps_taken(&self) -> u64 {
        self.steps
    }

    /// Distance |x_b - x_a|
    pub fn separation(&self) -> f64 {
        (self.b.x - self.a.x).norm()
    }

    pub fn total_mass(&self) -> f64 {
        self.a.mass() + self.b.mass()
    }

    pub fn total_momentum(&self) -> NVec<D> {
        self.a.momentum() + self.b.momentum()
    }

    pub fn center_of_mass(&self) -> NVec<D> {
        (self.a.mass() * self.a.x + self.b.mass() * self.b.x) / self.total_mass()
    }

    pub fn center_of_mass_velocity(&self) -> NVec<D> {
        self.total_momentum() / self.total_mass()
    }

    pub fn kinetic_energy(&self) -> f64 {
        self.a.kinetic_energy() + self.b.kinetic_energy()
    }

    pub fn potential_energy(&self) -> SimResult<f64> {
        self.gravity.potential_energy(&self.a, &self.b)
    }

    pub fn total_energy(&self) -> SimResult<f64> {
        Ok(self.kinetic_energy() + self.potential_energy()?)
    }

    /// Owned copy of the current kinematic state
    pub fn snapshot(&self) -> PairState<D> {
        PairState {
            step: self.steps,
            t: self.t,
            position_a: self.a.x,
            velocity_a: self.a.v,
            position_b: self.b.x,
            velocity_b: self.b.v,
        }
    }
}

fn check_dt(dt: f64) -> SimResult<()> {
    if dt.is_finite() && dt > 0.0 {
        Ok(())
    } else {
        Err(SimError::InvalidParameter(format!(
            "time step must be positive and finite, got {dt}"
        )))
    }
}

/// Copy of both bodies' kinematics at one instant
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PairState<const D: usize> {
    pub step: u64,
    pub t: f64,
    pub position_a: NVec<D>,
    pub velocity_a: NVec<D>,
    pub position_b: NVec<D>,
    pub velocity_b: NVec<D>,
}

/// A pair whose dimensionality is chosen at runtime
#[derive(Debug, Clone, PartialEq)]
pub enum PairSystem {
    Planar(PairSystem2),
    Spatial(PairSystem3),
}

impl PairSystem {
    /// Construct a 2D or 3D pair from runtime data
    pub fn new(
        mass_a: f64,
        mass_b: f64,
        separation: f64,
        velocity_a: &[f64],
        velocity_b: &[f64],
        dims: usize,
    ) -> SimResult<Self> {
        match dims {
            2 => Ok(PairSystem::Planar(PairSystem2::new(
                mass_a, mass_b, separation, velocity_a, velocity_b,
            )?)),
            3 => Ok(PairSystem::Spatial(PairSystem3::new(
                mass_a, mass_b, separation, velocity_a, velocity_b,
            )?)),
            _ => Err(SimError::InvalidParameter(format!(
                "dimensionality must be 2 or 3, got {dims}"
            ))),
        }
    }

    pub fn dims(&self) -> usize {
        match self {
            PairSystem::Planar(_) => 2,
            PairSystem::Spatial(_) => 3,
        }
    }

    pub fn step(&mut self, dt: f64) -> SimResult<()> {
        match self {
            PairSystem::Planar(s) => s.step(dt),
            PairSystem::Spatial(s) => s.step(dt),
        }
    }

    pub fn step_verlet(&mut self, dt: f64) -> SimResult<()> {
        match self {
            PairSystem::Planar(s) => s.step_verlet(dt),
            PairSystem::Spatial(s) => s.step_verlet(dt),
        }
    }

    pub fn position_of(&self, body: BodyId) -> &[f64] {
        match self {
            PairSystem::Planar(s) => s.position_of(body).as_slice(),
            PairSystem::Spatial(s) => s.position_of(body).as_slice(),
        }
    }

    pub fn velocity_of(&self, body: BodyId) -> &[f64] {
        match self {
            PairSystem::Planar(s) => s.velocity_of(body).as_slice(),
            PairSystem::Spatial(s) => s.velocity_of(body).as_slice(),
        }
    }

    pub fn separation(&self) -> f64 {
        match self {
            PairSystem::Planar(s) => s.separation(),
            PairSystem::Spatial(s) => s.separation(),
        }
    }

    pub fn total_momentum(&self) -> Vec<f64> {
        match self {
            PairSystem::Planar(s) => s.total_momentum().as_slice().to_vec(),
            PairSystem::Spatial(s) => s.total_momentum().as_slice().to_vec(),
        }
    }

    pub fn total_energy(&self) -> SimResult<f64> {
        match self {
            PairSystem::Planar(s) => s.total_energy(),
            PairSystem::Spatial(s) => s.total_energy(),
        }
    }

    pub fn elapsed(&self) -> f64 {
        match self {
            PairSystem::Planar(s) => s.elapsed(),
            PairSystem::Spatial(s) => s.elapsed(),
        }
    }

    pub fn steps_taken(&self) -> u64 {
        match self {
            PairSystem::Planar(s) => s.steps_taken(),
            PairSystem::Spatial(s) => s.steps_taken(),
        }
    }
}
