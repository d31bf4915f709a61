//! Step results

use serde::{Deserialize, Serialize};

use super::explanation::Explanation;
use super::state::ExecutionState;

/// Whether another step can follow
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Step {
    /// More lines to execute
    Continue,
    /// The loop has exited
    Done,
}

impl Step {
    pub fn continues(self) -> bool {
        self == Step::Continue
    }
}

/// Outcome of one `advance` call
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transition {
    /// State after the step (explanation already folded in)
    pub state: ExecutionState,
    /// Explanation produced by this step, `None` when the previous one stands
    pub explanation: Option<Explanation>,
    pub step: Step,
}
