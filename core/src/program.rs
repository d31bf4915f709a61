//! The fixed program shown by the visualizer
//!
//! Eight lines of BASIC-flavoured pseudo-code that add up every multiple of 4
//! between 1 and 20. The interpreter hard-codes the semantics of each line;
//! this table only supplies what the view needs (text, nesting, keywords) and
//! the program length used for bounds checks.

use serde::Serialize;

/// First value of the loop counter
pub const LOOP_START: i64 = 1;

/// Last value of the loop counter (inclusive)
pub const LOOP_END: i64 = 20;

/// Divisor used by `Select Case (i Mod 4)`
pub const DIVISOR: i64 = 4;

/* ===================== Lines ===================== */

/// Semantic tag of a program line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum LineKind {
    Assignment,
    ForStart,
    SelectCase,
    CaseZero,
    Add,
    CaseOther,
    EndSelect,
    Next,
}

/// One line of the program as displayed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ProgramLine {
    pub text: &'static str,
    /// Nesting depth, 0..=3
    pub indent: u8,
    pub kind: LineKind,
}

pub const PROGRAM: [ProgramLine; 8] = [
    ProgramLine {
        text: "Sum = 0",
        indent: 0,
        kind: LineKind::Assignment,
    },
    ProgramLine {
        text: "For i = 1 to 20",
        indent: 0,
        kind: LineKind::ForStart,
    },
    ProgramLine {
        text: "Select Case (i Mod 4)",
        indent: 1,
        kind: LineKind::SelectCase,
    },
    ProgramLine {
        text: "Case 0",
        indent: 2,
        kind: LineKind::CaseZero,
    },
    ProgramLine {
        text: "Sum = Sum + i",
        indent: 3,
        kind: LineKind::Add,
    },
    ProgramLine {
        text: "Case 1,2,3",
        indent: 2,
        kind: LineKind::CaseOther,
    },
    ProgramLine {
        text: "End Select",
        indent: 1,
        kind: LineKind::EndSelect,
    },
    ProgramLine {
        text: "Next",
        indent: 0,
        kind: LineKind::Next,
    },
];

/// Look up a line by its zero-based index
pub fn line(index: usize) -> Option<&'static ProgramLine> {
    PROGRAM.get(index)
}

/* ===================== Keywords ===================== */

/// Words in the program that carry a tooltip
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum Keyword {
    Sum,
    For,
    I,
    SelectCase,
    Mod,
    Case,
    Operator,
    To,
    EndSelect,
    Next,
}

impl Keyword {
    pub const ALL: [Keyword; 10] = [
        Keyword::Sum,
        Keyword::For,
        Keyword::I,
        Keyword::SelectCase,
        Keyword::Mod,
        Keyword::Case,
        Keyword::Operator,
        Keyword::To,
        Keyword::EndSelect,
        Keyword::Next,
    ];

    /// The token as it appears in the source text
    pub fn token(self) -> &'static str {
        match self {
            Keyword::Sum => "Sum",
            Keyword::For => "For",
            Keyword::I => "i",
            Keyword::SelectCase => "Select Case",
            Keyword::Mod => "Mod",
            Keyword::Case => "Case",
            Keyword::Operator => "=",
            Keyword::To => "to",
            Keyword::EndSelect => "End Select",
            Keyword::Next => "Next",
        }
    }
}

impl LineKind {
    /// Keywords that appear on a line of this kind, in reading order
    pub fn keywords(self) -> &'static [Keyword] {
        match self {
            LineKind::Assignment => &[Keyword::Sum, Keyword::Operator],
            LineKind::ForStart => &[Keyword::For, Keyword::I, Keyword::Operator, Keyword::To],
            LineKind::SelectCase => &[Keyword::SelectCase, Keyword::I, Keyword::Mod],
            LineKind::CaseZero | LineKind::CaseOther => &[Keyword::Case],
            LineKind::Add => &[Keyword::Sum, Keyword::Operator, Keyword::I],
            LineKind::EndSelect => &[Keyword::EndSelect],
            LineKind::Next => &[Keyword::Next],
        }
    }
}
