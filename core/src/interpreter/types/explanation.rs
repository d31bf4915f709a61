//! Explanation keys produced by transitions
//!
//! The interpreter only picks a key and its numbers; turning them into a
//! sentence is the job of [`crate::i18n`].

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "key", rename_all = "camelCase")]
pub enum Explanation {
    /// `Sum = 0` executed
    Init,
    /// Entering the loop body with a new counter value
    LoopEnter { i: i64 },
    /// Loop test passed, remainder computed for the select
    CheckMod { i: i64, remainder: i64 },
    AddBranch { i: i64, prev_sum: i64, new_sum: i64 },
    SkipBranch { i: i64, remainder: i64 },
    Complete { sum: i64 },
    /// Prompt shown after a reset
    ClickToStart,
}
