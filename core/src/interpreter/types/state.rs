//! Execution snapshot types

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::explanation::Explanation;
use super::line::Line;
use crate::error::Error;

/// Values of the two program variables
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Variables {
    #[serde(rename = "Sum")]
    pub sum: i64,
    pub i: i64,
}

impl Variables {
    pub fn get(&self, var: Variable) -> i64 {
        match var {
            Variable::Sum => self.sum,
            Variable::I => self.i,
        }
    }

    pub fn set(&mut self, var: Variable, value: i64) {
        match var {
            Variable::Sum => self.sum = value,
            Variable::I => self.i = value,
        }
    }
}

/// Name of a program variable
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Variable {
    #[serde(rename = "Sum")]
    Sum,
    #[serde(rename = "i")]
    I,
}

impl Variable {
    pub const ALL: [Variable; 2] = [Variable::Sum, Variable::I];

    pub fn name(self) -> &'static str {
        match self {
            Variable::Sum => "Sum",
            Variable::I => "i",
        }
    }
}

impl fmt::Display for Variable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Variable {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        match s {
            "Sum" => Ok(Variable::Sum),
            "i" => Ok(Variable::I),
            other => Err(Error::UnknownVariable(other.to_string())),
        }
    }
}

/// Full simulation state at one instant
///
/// This is the value the interpreter consumes and produces, and what the
/// store publishes to the view.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExecutionState {
    pub current_line: Line,
    pub current_iteration: u32,
    pub variables: Variables,
    pub is_running: bool,
    pub explanation: Option<Explanation>,
}

impl ExecutionState {
    /// The snapshot every session starts from and every reset returns to
    pub fn initial() -> Self {
        Self::default()
    }
}
