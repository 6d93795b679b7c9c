//! Run driver: validation, seeding, cancellation and the final report.

use super::config::AnnealConfig;
use super::controller::AnnealController;
use super::sampler::RandomSource;
use super::types::{StepOutcome, StepRecord, Termination};
use crate::color::Color;
use crate::error::Result;
use log::{debug, info};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Summary of a finished run. The morphed pixels are left in the caller's
/// working buffer.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AnnealReport {
    /// Total distance before the first step.
    pub initial_distance: f64,

    /// Total distance of the returned working buffer.
    ///
    /// For a cancelled run this is the best distance seen at a step
    /// boundary, and the buffer holds that state.
    pub total_distance: f64,

    /// One record per executed step, in order.
    pub steps: Vec<StepRecord>,

    /// Why the run stopped.
    pub termination: Termination,

    /// Temperature the next step would have run at.
    pub final_temperature: f64,

    /// Total swap attempts.
    pub trials: u64,

    /// Total accepted swaps, including energy-neutral ones.
    pub accepted: u64,
}

/// Executes pixel-morphing annealing runs.
pub struct MorphRunner;

impl MorphRunner {
    /// Rearranges `working` toward `target` and reports what happened.
    ///
    /// Seeds a [`StdRng`] from `config.seed`, or from a random seed when
    /// none is set.
    ///
    /// # Examples
    ///
    /// ```
    /// use simpix::anneal::{AnnealConfig, MorphRunner, Termination};
    /// use simpix::Color;
    ///
    /// let target = vec![Color::BLACK, Color::WHITE, Color::BLACK, Color::WHITE];
    /// let mut working = vec![Color::WHITE, Color::BLACK, Color::WHITE, Color::BLACK];
    /// let config = AnnealConfig::default()
    ///     .with_success_threshold(1)
    ///     .with_cooling_fraction(0.1)
    ///     .with_seed(42);
    ///
    /// let report = MorphRunner::run(&target, &mut working, &config).unwrap();
    /// assert!(report.total_distance <= report.initial_distance);
    /// assert!(report.steps.len() <= 10);
    /// ```
    pub fn run(
        target: &[Color],
        working: &mut [Color],
        config: &AnnealConfig,
    ) -> Result<AnnealReport> {
        Self::run_with_cancel(target, working, config, None)
    }

    /// Runs with an optional cancellation flag, checked between steps.
    ///
    /// A cancelled run leaves the best state reached so far in `working`.
    pub fn run_with_cancel(
        target: &[Color],
        working: &mut [Color],
        config: &AnnealConfig,
        cancel: Option<Arc<AtomicBool>>,
    ) -> Result<AnnealReport> {
        config.validate()?;

        let seed = config.seed.unwrap_or_else(rand::random);
        debug!("seeding annealer with {seed}");
        let mut rng = StdRng::seed_from_u64(seed);

        Self::run_with_source(target, working, config, &mut rng, cancel.as_deref())
    }

    /// Runs with a caller-supplied random source. `config.seed` is ignored.
    pub fn run_with_source<S: RandomSource>(
        target: &[Color],
        working: &mut [Color],
        config: &AnnealConfig,
        rng: &mut S,
        cancel: Option<&AtomicBool>,
    ) -> Result<AnnealReport> {
        let mut controller = AnnealController::new(target, working, config)?;
        let initial_distance = controller.total_distance();
        debug!(
            "annealing {} pixels: totalDist = {:.6}, T0 = {}, up to {} steps",
            target.len(),
            initial_distance,
            config.initial_temperature,
            config.max_steps()
        );

        // Best state seen at a step boundary; only needed when the run can
        // be cut short.
        let mut best = cancel.map(|_| (controller.working().to_vec(), initial_distance));

        let termination = loop {
            if cancel.is_some_and(|flag| flag.load(Ordering::Relaxed)) {
                break Termination::Cancelled;
            }
            let outcome = controller.step(rng);
            if let Some((snapshot, best_distance)) = best.as_mut() {
                if controller.total_distance() < *best_distance {
                    snapshot.copy_from_slice(controller.working());
                    *best_distance = controller.total_distance();
                }
            }
            match outcome {
                StepOutcome::Continue => {}
                StepOutcome::Frozen => break Termination::Frozen,
                StepOutcome::Exhausted => break Termination::Exhausted,
            }
        };

        if termination == Termination::Cancelled {
            if let Some((snapshot, best_distance)) = &best {
                controller.restore(snapshot, *best_distance);
            }
        }

        let total_distance = controller.total_distance();
        let final_temperature = controller.temperature();
        let trials = controller.trials();
        let accepted = controller.accepted();
        let steps = controller.into_steps();

        info!(
            "annealing stopped ({termination:?}) after {} steps: totalDist {:.6} -> {:.6}",
            steps.len(),
            initial_distance,
            total_distance
        );

        Ok(AnnealReport {
            initial_distance,
            total_distance,
            steps,
            termination,
            final_temperature,
            trials,
            accepted,
        })
    }
}
