//! Step loop, freezing rule and linear cooling.
//!
//! One step performs `trials_per_step_factor * N` swap attempts at a fixed
//! temperature. A step that accepts fewer than `success_threshold` swaps
//! freezes the run. Otherwise the temperature drops by
//! `cooling_fraction * T0` and the run is exhausted once it reaches zero.

use super::config::AnnealConfig;
use super::sampler::{attempt_swap, RandomSource};
use super::types::{AnnealState, StepOutcome, StepRecord};
use crate::color::Color;
use crate::energy::total_distance;
use crate::error::{Result, SimpixError};
use log::info;

/// Drives annealing steps over a borrowed working buffer.
///
/// The controller holds the only mutable borrow of `working` for its whole
/// lifetime; the running total distance is kept in sync with every accepted
/// swap.
#[derive(Debug)]
pub struct AnnealController<'a> {
    target: &'a [Color],
    working: &'a mut [Color],
    config: AnnealConfig,
    temperature: f64,
    cooled: usize,
    total_distance: f64,
    state: AnnealState,
    steps: Vec<StepRecord>,
    trials: u64,
    accepted: u64,
}

/// Checks that both buffers have the same, non-zero length.
pub fn validate_buffers(target: &[Color], working: &[Color]) -> Result<()> {
    if target.len() != working.len() || target.is_empty() {
        return Err(SimpixError::DimensionMismatch {
            target: target.len(),
            working: working.len(),
        });
    }
    Ok(())
}

impl<'a> AnnealController<'a> {
    /// Validates the inputs and computes the initial total distance.
    ///
    /// On error nothing has been touched.
    pub fn new(
        target: &'a [Color],
        working: &'a mut [Color],
        config: &AnnealConfig,
    ) -> Result<Self> {
        validate_buffers(target, working)?;
        config.validate()?;

        let total_distance = total_distance(target, working);
        Ok(Self {
            target,
            working,
            config: config.clone(),
            temperature: config.initial_temperature,
            cooled: 0,
            total_distance,
            state: AnnealState::Running,
            steps: Vec::with_capacity(config.max_steps().min(1024)),
            trials: 0,
            accepted: 0,
        })
    }

    /// Runs one step. A terminal controller returns its terminal outcome
    /// again without touching the buffer.
    pub fn step<S: RandomSource>(&mut self, rng: &mut S) -> StepOutcome {
        match self.state {
            AnnealState::Frozen => return StepOutcome::Frozen,
            AnnealState::Exhausted => return StepOutcome::Exhausted,
            AnnealState::Running => {}
        }

        let temperature = self.temperature;
        let trials = self.config.trials_per_step(self.working.len());
        let mut successes = 0usize;

        for _ in 0..trials {
            let outcome = attempt_swap(self.target, self.working, temperature, rng);
            if outcome.accepted {
                successes += 1;
                self.total_distance += outcome.delta;
            }
        }

        self.trials += trials as u64;
        self.accepted += successes as u64;

        let record = StepRecord {
            step: self.steps.len(),
            temperature,
            successes,
            total_distance: self.total_distance,
        };
        info!(
            "step {}: totalDist = {:.6}\tnumSuccess = {}\tT = {:.4}",
            record.step, record.total_distance, record.successes, record.temperature
        );
        self.steps.push(record);

        if successes < self.config.success_threshold {
            self.state = AnnealState::Frozen;
            return StepOutcome::Frozen;
        }

        self.cooled += 1;
        self.temperature = self.config.temperature_at(self.cooled);
        if self.temperature <= 0.0 || self.cooled >= self.config.max_steps() {
            self.state = AnnealState::Exhausted;
            return StepOutcome::Exhausted;
        }
        StepOutcome::Continue
    }

    pub fn state(&self) -> AnnealState {
        self.state
    }

    /// Temperature the next step would run at.
    pub fn temperature(&self) -> f64 {
        self.temperature
    }

    /// Running total distance, exact up to floating-point accumulation.
    pub fn total_distance(&self) -> f64 {
        self.total_distance
    }

    pub fn steps(&self) -> &[StepRecord] {
        &self.steps
    }

    pub fn working(&self) -> &[Color] {
        &*self.working
    }

    /// Total swap attempts so far.
    pub fn trials(&self) -> u64 {
        self.trials
    }

    /// Total accepted swaps so far.
    pub fn accepted(&self) -> u64 {
        self.accepted
    }

    /// Overwrites the working buffer with an earlier snapshot of it.
    ///
    /// `snapshot` must be a state this controller reached, with
    /// `total_distance` its distance, so the running total stays exact.
    pub(crate) fn restore(&mut self, snapshot: &[Color], total_distance: f64) {
        self.working.copy_from_slice(snapshot);
        self.total_distance = total_distance;
    }

    pub(crate) fn into_steps(self) -> Vec<StepRecord> {
        self.steps
    }
}
