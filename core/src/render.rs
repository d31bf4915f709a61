//! Plain-text frame for a snapshot
//!
//! Layout: title, code listing with the current line marked, variables,
//! iteration, speed, the current explanation and the control names.

use std::fmt::Write;

use crate::i18n::{self, Language};
use crate::interpreter::{ExecutionState, Variable};
use crate::program::{self, Keyword};
use crate::speed::Speed;

const MARKER: &str = "▶";
const INDENT: &str = "    ";

pub fn render(state: &ExecutionState, lang: Language, speed: Speed) -> String {
    let labels = i18n::labels(lang);
    let mut out = String::new();

    let _ = writeln!(out, "{}", labels.main_title);
    let _ = writeln!(out);

    let _ = writeln!(out, "{}", labels.code_title);
    let highlighted = usize::try_from(state.current_line.index()).ok();
    for (idx, line) in program::PROGRAM.iter().enumerate() {
        let marker = if highlighted == Some(idx) { MARKER } else { " " };
        let _ = writeln!(
            out,
            "{} {:>2} | {}{}",
            marker,
            idx,
            INDENT.repeat(line.indent as usize),
            line.text
        );
    }
    let _ = writeln!(out);

    let _ = writeln!(out, "{}", labels.variables_title);
    for var in Variable::ALL {
        let _ = writeln!(out, "  {:<4}= {}", var.name(), state.variables.get(var));
    }
    let _ = writeln!(
        out,
        "  {}: {}",
        labels.current_iteration, state.current_iteration
    );
    let _ = writeln!(out, "  {} {}", labels.speed, speed);
    let _ = writeln!(out);

    let explanation = match &state.explanation {
        Some(explanation) => i18n::explain(lang, explanation),
        None => labels.click_to_start.to_string(),
    };
    let _ = writeln!(out, "{}", explanation);
    let _ = writeln!(out, "[{}] [{}] [{}]", labels.start, labels.step, labels.reset);

    out
}

/// Tooltips for a list of keywords, one block per keyword
pub fn render_keywords(lang: Language, keywords: &[Keyword]) -> String {
    let mut out = String::new();
    for keyword in keywords {
        let tooltip = i18n::tooltip(lang, *keyword);
        let _ = writeln!(out, "[{}] {}", keyword.token(), tooltip.title);
        let _ = writeln!(out, "{}", tooltip.desc);
        let _ = writeln!(out);
    }
    out
}

pub fn render_summary(lang: Language) -> String {
    let labels = i18n::labels(lang);
    let summary = i18n::summary(lang);
    let mut out = String::new();

    let _ = writeln!(out, "{}", labels.summary_title);
    let _ = writeln!(out, "{}", summary.title);
    let _ = writeln!(out, "{}", summary.overview);
    let _ = writeln!(out);
    for step in summary.steps {
        let _ = writeln!(out, "  {}", step);
    }
    let _ = writeln!(out);
    let _ = writeln!(out, "{}", summary.final_result);
    let _ = writeln!(out, "{}", summary.explanation);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interpreter::{advance, Line};

    #[test]
    fn test_initial_frame_prompts_to_start() {
        let frame = render(&ExecutionState::initial(), Language::En, Speed::default());

        assert!(frame.contains("👆 Click Start to begin!"));
        assert!(!frame.contains(MARKER));
        assert!(frame.contains("Speed: 1.1x"));
        assert!(frame.contains("Current Iteration: 0"));
        assert!(frame.ends_with("[Start] [Next Step] [Reset]\n"));
    }

    #[test]
    fn test_current_line_is_marked_and_indented() {
        let mut state = ExecutionState::initial();
        while state.current_line != Line::AddToSum {
            state = advance(state).state;
        }

        let frame = render(&state, Language::En, Speed::default());
        let marked: Vec<&str> = frame.lines().filter(|l| l.starts_with(MARKER)).collect();
        assert_eq!(marked, vec!["▶  4 |             Sum = Sum + i"]);
        assert!(frame.contains("i   = 4"));
    }

    #[test]
    fn test_language_switch_only_changes_text() {
        let state = advance(ExecutionState::initial()).state;
        let en = render(&state, Language::En, Speed::default());
        let ko = render(&state, Language::Ko, Speed::default());

        assert!(en.contains("Starting the program"));
        assert!(ko.contains("프로그램을 시작해요"));
        assert!(ko.contains("▶  0 | Sum = 0"));
        assert!(ko.contains("[시작] [한 줄 실행] [초기화]"));
    }

    #[test]
    fn test_keyword_blocks() {
        let text = render_keywords(Language::En, &[Keyword::Mod]);
        assert!(text.starts_with("[Mod] Modulo Operation (Mod)"));
    }
}
