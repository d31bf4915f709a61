//! Program counter for the fixed program

use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::program::{self, ProgramLine};

/// Which line the simulation is on
///
/// Discriminants match the line indices shown to the user: `-1` before the
/// first step, `0..=7` for program lines and `8` once the loop has exited.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
#[repr(i8)]
pub enum Line {
    #[default]
    NotStarted = -1,
    AssignSum = 0,
    ForCheck = 1,
    SelectCase = 2,
    CaseZero = 3,
    AddToSum = 4,
    CaseOther = 5,
    EndSelect = 6,
    Next = 7,
    Done = 8,
}

const ORDER: [Line; 10] = [
    Line::NotStarted,
    Line::AssignSum,
    Line::ForCheck,
    Line::SelectCase,
    Line::CaseZero,
    Line::AddToSum,
    Line::CaseOther,
    Line::EndSelect,
    Line::Next,
    Line::Done,
];

impl Line {
    pub fn index(self) -> i64 {
        self as i8 as i64
    }

    /// Convert a raw index, validating it against the program length
    pub fn from_index(index: i64) -> Result<Self, Error> {
        let last = program::PROGRAM.len() as i64;
        if !(-1..=last).contains(&index) {
            return Err(Error::LineOutOfRange(index));
        }
        ORDER
            .get((index + 1) as usize)
            .copied()
            .ok_or(Error::LineOutOfRange(index))
    }

    /// The program line being highlighted, if any
    pub fn program_line(self) -> Option<&'static ProgramLine> {
        usize::try_from(self.index()).ok().and_then(program::line)
    }

    pub fn is_terminal(self) -> bool {
        self == Line::Done
    }
}

impl TryFrom<i64> for Line {
    type Error = Error;

    fn try_from(index: i64) -> Result<Self, Error> {
        Line::from_index(index)
    }
}

impl From<Line> for i64 {
    fn from(line: Line) -> i64 {
        line.index()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::program::LineKind;

    #[test]
    fn test_index_round_trip_covers_every_line() {
        for (slot, line) in ORDER.iter().enumerate() {
            assert_eq!(line.index(), slot as i64 - 1);
            assert_eq!(Line::from_index(line.index()).unwrap(), *line);
        }
    }

    #[test]
    fn test_out_of_range_rejected() {
        assert!(matches!(Line::from_index(-2), Err(Error::LineOutOfRange(-2))));
        assert!(matches!(Line::from_index(9), Err(Error::LineOutOfRange(9))));
        assert!(serde_json::from_str::<Line>("42").is_err());
    }

    #[test]
    fn test_program_line_only_inside_program() {
        assert!(Line::NotStarted.program_line().is_none());
        assert!(Line::Done.program_line().is_none());
        assert_eq!(Line::AddToSum.program_line().unwrap().kind, LineKind::Add);
        assert_eq!(Line::Next.program_line().unwrap().kind, LineKind::Next);
    }

    #[test]
    fn test_serializes_as_index() {
        assert_eq!(serde_json::to_string(&Line::NotStarted).unwrap(), "-1");
        assert_eq!(serde_json::to_string(&Line::Done).unwrap(), "8");
    }
}
