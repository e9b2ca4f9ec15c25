//! Fixed-step time integrators for the pair
//!
//! Provides the semi-implicit (symplectic) Euler step the kernel is built on
//! and a velocity-Verlet step for comparison runs. Both take the two bodies
//! and the force law explicitly and update positions and velocities in-place.

use crate::error::{SimError, SimResult};
use crate::simulation::forces::NewtonianGravity;
use crate::simulation::states::{is_finite_vec, Body};

/// Advance the pair by one step using semi-implicit Euler.
///
/// One force evaluation at the current positions, velocities kicked first,
/// then positions drifted with the *new* velocities. The order is part of
/// the scheme; swapping the two updates turns it into explicit Euler.
///
/// On a degenerate state, or when the update would leave the finite range,
/// nothing is mutated.
pub fn semi_implicit_euler<const D: usize>(
    a: &mut Body<D>,
    b: &mut Body<D>,
    gravity: &NewtonianGravity,
    dt: f64,
) -> SimResult<()> {
    // F_ab from x_n, F_ba = -F_ab
    let f_ab = gravity.force_on_a(a, b)?;
    let f_ba = -f_ab;

    // Kick: v_n+1 = v_n + (F / m) dt
    let mut next_a = *a;
    let mut next_b = *b;
    next_a.v += (f_ab / a.mass()) * dt;
    next_b.v += (f_ba / b.mass()) * dt;

    // Drift: x_n+1 = x_n + v_n+1 dt
    next_a.x += next_a.v * dt;
    next_b.x += next_b.v * dt;

    check_finite(&next_a)?;
    check_finite(&next_b)?;
    *a = next_a;
    *b = next_b;

    Ok(())
}

fn check_finite<const D: usize>(body: &Body<D>) -> SimResult<()> {
    if is_finite_vec(&body.x) && is_finite_vec(&body.v) {
        Ok(())
    } else {
        Err(SimError::DegenerateState(format!(
            "step leaves the finite range (x = {:?}, v = {:?})",
            body.x.as_slice(),
            body.v.as_slice()
        )))
    }
}

/// Advance the pair by one step using velocity-Verlet.
///
/// Two force evaluations per step. Works on copies, so a failure anywhere in
/// the step leaves both bodies untouched.
pub fn velocity_verlet<const D: usize>(
    a: &mut Body<D>,
    b: &mut Body<D>,
    gravity: &NewtonianGravity,
    dt: f64,
) -> SimResult<()> {
    let half_dt = 0.5 * dt;
    let mut next_a = *a;
    let mut next_b = *b;

    // a_n from x_n
    let f_old = gravity.force_on_a(&next_a, &next_b)?;

    // Kick: v_n+1/2 = v_n + (dt/2) a_n
    next_a.v += (f_old / next_a.mass()) * half_dt;
    next_b.v -= (f_old / next_b.mass()) * half_dt;

    // Drift: x_n+1 = x_n + dt v_n+1/2
    next_a.x += next_a.v * dt;
    next_b.x += next_b.v * dt;

    // a_n+1 from x_n+1
    let f_new = gravity.force_on_a(&next_a, &next_b)?;

    // Second kick: v_n+1 = v_n+1/2 + (dt/2) a_n+1
    next_a.v += (f_new / next_a.mass()) * half_dt;
    next_b.v -= (f_new / next_b.mass()) * half_dt;

    check_finite(&next_a)?;
    check_finite(&next_b)?;
    *a = next_a;
    *b = next_b;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simulation::states::NVec2;

    fn pair() -> (Body<2>, Body<2>) {
        let a = Body::new(2.0, NVec2::new(0.0, 0.0), NVec2::new(0.0, -0.5)).unwrap();
        let b = Body::new(1.0, NVec2::new(1.0, 0.0), NVec2::new(0.0, 1.0)).unwrap();
        (a, b)
    }

    #[test]
    fn euler_drifts_with_updated_velocity() {
        let gravity = NewtonianGravity { G: 1.0 };
        let (mut a, mut b) = pair();
        let dt = 0.1;

        semi_implicit_euler(&mut a, &mut b, &gravity, dt).unwrap();

        // F = 1 * 2 * 1 / 1^2 along +x on a
        let va = NVec2::new(2.0 / 2.0 * dt, -0.5);
        let vb = NVec2::new(-2.0 / 1.0 * dt, 1.0);
        assert!((a.v - va).norm() < 1e-15);
        assert!((b.v - vb).norm() < 1e-15);
        assert!((a.x - va * dt).norm() < 1e-15);
        assert!((b.x - (NVec2::new(1.0, 0.0) + vb * dt)).norm() < 1e-15);
    }

    #[test]
    fn euler_leaves_degenerate_state_untouched() {
        let gravity = NewtonianGravity { G: 1.0 };
        let (mut a, mut b) = pair();
        b.x = a.x;
        let (a0, b0) = (a, b);

        assert!(semi_implicit_euler(&mut a, &mut b, &gravity, 0.1).is_err());
        assert_eq!(a, a0);
        assert_eq!(b, b0);
    }

    #[test]
    fn verlet_conserves_momentum() {
        let gravity = NewtonianGravity { G: 1.0 };
        let (mut a, mut b) = pair();
        let p0 = a.momentum() + b.momentum();

        for _ in 0..100 {
            velocity_verlet(&mut a, &mut b, &gravity, 0.01).unwrap();
        }
        let p1 = a.momentum() + b.momentum();
        assert!((p1 - p0).norm() < 1e-12, "momentum drift {:?}", p1 - p0);
    }
}
