//! Stepping loop that feeds a consumer one frame at a time
//!
//! The pair is owned by the loop; consumers (plotters, light-curve or
//! Doppler stages) only ever see copied [`Frame`]s delivered over a channel.

use std::sync::mpsc::{self, Receiver, Sender};
use std::thread::{self, JoinHandle};

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::error::SimResult;
use crate::simulation::scenario::Scenario;
use crate::simulation::states::BodyId;
use crate::simulation::system::PairSystem;

/// Kinematic state of the pair at one sampled step
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Frame {
    pub step: u64,
    pub t: f64,
    pub position_a: Vec<f64>,
    pub velocity_a: Vec<f64>,
    pub position_b: Vec<f64>,
    pub velocity_b: Vec<f64>,
    pub separation: f64,
}

impl Frame {
    pub fn capture(system: &PairSystem) -> Self {
        Self {
            step: system.steps_taken(),
            t: system.elapsed(),
            position_a: system.position_of(BodyId::A).to_vec(),
            velocity_a: system.velocity_of(BodyId::A).to_vec(),
            position_b: system.position_of(BodyId::B).to_vec(),
            velocity_b: system.velocity_of(BodyId::B).to_vec(),
            separation: system.separation(),
        }
    }
}

/// What a finished run looked like
#[derive(Debug, Clone, PartialEq)]
pub struct RunSummary {
    pub steps: u64,
    pub frames: u64,
    pub min_separation: f64,
    pub max_separation: f64,
    pub relative_energy_drift: f64, // |E_end - E_0| / |E_0|
    pub momentum_drift: f64,        // |p_end - p_0|
}

/// Step `scenario` to completion, sending every `sample_every`-th frame
///
/// The initial state is sent as frame 0 and the final state is always sent,
/// even when the step count is not a multiple of the stride. If the receiving
/// side hangs up the run stops early and the summary covers the steps taken
/// so far.
pub fn run_scenario(mut scenario: Scenario, tx: Sender<Frame>) -> SimResult<RunSummary> {
    let params = scenario.parameters;
    let system = &scenario.system;

    let e0 = system.total_energy()?;
    let p0 = system.total_momentum();
    let mut min_separation = system.separation();
    let mut max_separation = min_separation;
    let mut frames = 0u64;

    info!(
        dims = system.dims(),
        integrator = ?scenario.engine.integrator,
        dt = params.dt,
        steps = params.steps,
        "starting pair run"
    );

    let mut last_sent = system.steps_taken();
    let mut consumer_alive = tx.send(Frame::capture(system)).is_ok();
    if consumer_alive {
        frames += 1;
    }

    for _ in 0..params.steps {
        if !consumer_alive {
            debug!("frame consumer hung up, stopping early");
            break;
        }

        if let Err(err) = scenario.advance() {
            warn!(
                step = scenario.system.steps_taken(),
                t = scenario.system.elapsed(),
                %err,
                "pair run aborted"
            );
            return Err(err);
        }

        let system = &scenario.system;
        let d = system.separation();
        min_separation = min_separation.min(d);
        max_separation = max_separation.max(d);

        if system.steps_taken() % params.sample_every == 0 {
            last_sent = system.steps_taken();
            consumer_alive = tx.send(Frame::capture(system)).is_ok();
            if consumer_alive {
                frames += 1;
            }
        }
    }

    let system = &scenario.system;
    // final state, when the stride skipped it
    if consumer_alive
        && system.steps_taken() != last_sent
        && tx.send(Frame::capture(system)).is_ok()
    {
        frames += 1;
    }

    let e1 = system.total_energy()?;
    let momentum_drift = system
        .total_momentum()
        .iter()
        .zip(p0.iter())
        .map(|(p, q)| (p - q) * (p - q))
        .sum::<f64>()
        .sqrt();

    let summary = RunSummary {
        steps: system.steps_taken(),
        frames,
        min_separation,
        max_separation,
        relative_energy_drift: ((e1 - e0) / e0).abs(),
        momentum_drift,
    };
    info!(?summary, "pair run finished");

    Ok(summary)
}

/// Run `scenario` on its own thread and hand back the frame stream
pub fn spawn_run(scenario: Scenario) -> (Receiver<Frame>, JoinHandle<SimResult<RunSummary>>) {
    let (tx, rx) = mpsc::channel();
    let handle = thread::spawn(move || run_scenario(scenario, tx));
    (rx, handle)
}
