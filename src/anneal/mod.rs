//! Simulated annealing over pixel permutations.
//!
//! The working buffer is only ever changed by transpositions, so the run
//! solves an assignment problem: which of its own colors goes where. Each
//! proposal swaps two random positions and is accepted by the Metropolis
//! rule; the temperature follows a linear schedule and the run stops early
//! once a step freezes.
//!
//! # References
//!
//! - Metropolis et al. (1953), "Equation of State Calculations by Fast Computing Machines"
//! - Kirkpatrick, Gelatt & Vecchi (1983), "Optimization by Simulated Annealing"

mod config;
mod controller;
mod runner;
mod sampler;
mod types;

pub use config::AnnealConfig;
pub use controller::{validate_buffers, AnnealController};
pub use runner::{AnnealReport, MorphRunner};
pub use sampler::{attempt_swap, metropolis_accept, propose_indices, RandomSource, SwapOutcome};
pub use types::{AnnealState, StepOutcome, StepRecord, Termination};
