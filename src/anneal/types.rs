//! Controller states, step results and the per-step log record.

/// Lifecycle of an [`AnnealController`](super::AnnealController).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnnealState {
    /// More steps will be performed.
    Running,
    /// A step accepted fewer swaps than the success threshold.
    Frozen,
    /// The linear schedule ran out of temperature.
    Exhausted,
}

/// What happened at the end of one step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// The temperature was lowered and another step may run.
    Continue,
    /// The step accepted too few swaps; the controller is now frozen.
    Frozen,
    /// The temperature reached zero; the controller is now exhausted.
    Exhausted,
}

/// Why a run stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Termination {
    /// A step accepted fewer swaps than the success threshold.
    Frozen,
    /// The cooling schedule ran out.
    Exhausted,
    /// The cancellation flag was observed between two steps.
    Cancelled,
}

/// Statistics of one completed step.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StepRecord {
    /// Zero-based step number.
    pub step: usize,
    /// Temperature the step ran at.
    pub temperature: f64,
    /// Accepted swaps during the step.
    pub successes: usize,
    /// Running total distance after the step.
    pub total_distance: f64,
}
