//! Display text in English and Korean
//!
//! Everything the user reads comes from here: labels, step explanations,
//! keyword tooltips and the program summary. Switching language never
//! touches the simulation.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::Error;
use crate::interpreter::Explanation;
use crate::program::Keyword;

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Ko,
}

impl Language {
    pub fn code(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Ko => "ko",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        match s.trim().to_lowercase().as_str() {
            "en" => Ok(Language::En),
            "ko" => Ok(Language::Ko),
            other => Err(Error::UnknownLanguage(other.to_string())),
        }
    }
}

/* ===================== Labels ===================== */

#[derive(Debug)]
pub struct Labels {
    pub main_title: &'static str,
    pub code_title: &'static str,
    pub variables_title: &'static str,
    pub summary_title: &'static str,
    pub start: &'static str,
    pub step: &'static str,
    pub reset: &'static str,
    pub speed: &'static str,
    pub current_iteration: &'static str,
    pub click_to_start: &'static str,
    pub keyword_hint: &'static str,
    pub controls_hint: &'static str,
    pub variables_hint: &'static str,
}

static EN_LABELS: Labels = Labels {
    main_title: "🎓 Learn to Code!",
    code_title: "📝 The Code",
    variables_title: "💾 Variables",
    summary_title: "🎯 What Does This Code Do?",
    start: "Start",
    step: "Next Step",
    reset: "Reset",
    speed: "Speed:",
    current_iteration: "Current Iteration",
    click_to_start: "👆 Click Start to begin!",
    keyword_hint: "💡 Tip: type `keywords` to see what each word in the code means!",
    controls_hint: "🎮 Controls: `start` runs automatically, `step` goes line-by-line, and `reset` starts over. Change pace with `speed <ms>`.",
    variables_hint: "📊 Variables: the current values of all variables as the code executes. Watch how `Sum` and `i` change as the program runs!",
};

static KO_LABELS: Labels = Labels {
    main_title: "🎓 코딩을 배워요!",
    code_title: "📝 코드",
    variables_title: "💾 변수",
    summary_title: "🎯 이 코드는 무엇을 할까요?",
    start: "시작",
    step: "한 줄 실행",
    reset: "초기화",
    speed: "속도:",
    current_iteration: "현재 반복",
    click_to_start: "👆 시작 버튼을 눌러보세요!",
    keyword_hint: "💡 팁: `keywords`를 입력하면 코드의 각 단어가 무슨 뜻인지 볼 수 있어요!",
    controls_hint: "🎮 조작 방법: `start`로 자동 실행, `step`으로 한 줄씩 진행, `reset`으로 처음부터 다시 시작할 수 있어요. `speed <ms>`로 속도를 조절할 수 있어요.",
    variables_hint: "📊 변수 창: 코드가 실행되면서 모든 변수의 현재 값을 보여줘요. 프로그램이 실행될 때 `Sum`과 `i`가 어떻게 변하는지 지켜보세요!",
};

pub fn labels(lang: Language) -> &'static Labels {
    match lang {
        Language::En => &EN_LABELS,
        Language::Ko => &KO_LABELS,
    }
}

/* ===================== Explanations ===================== */

/// Render an explanation key in the given language
pub fn explain(lang: Language, explanation: &Explanation) -> String {
    match (lang, *explanation) {
        (Language::En, Explanation::Init) => {
            "🎬 Starting the program! We set Sum to 0.".to_string()
        }
        (Language::Ko, Explanation::Init) => {
            "🎬 프로그램을 시작해요! Sum을 0으로 설정해요.".to_string()
        }

        (Language::En, Explanation::LoopEnter { i }) => {
            format!("🔄 Loop iteration #{i}: Checking if {i} is divisible by 4...")
        }
        (Language::Ko, Explanation::LoopEnter { i }) => {
            format!("🔄 {i}번째 반복: {i}가 4로 나누어떨어지는지 확인해요...")
        }

        (Language::En, Explanation::CheckMod { i, remainder }) => {
            format!("🔍 Calculating {i} mod 4 = {remainder}")
        }
        (Language::Ko, Explanation::CheckMod { i, remainder }) => {
            format!("🔍 {i}를 4로 나눈 나머지 = {remainder}")
        }

        (Language::En, Explanation::AddBranch { i, prev_sum, new_sum }) => {
            format!("✅ {i} is divisible by 4! Adding it to Sum: {prev_sum} + {i} = {new_sum}")
        }
        (Language::Ko, Explanation::AddBranch { i, prev_sum, new_sum }) => {
            format!("✅ {i}는 4로 나누어떨어져요! Sum에 더해요: {prev_sum} + {i} = {new_sum}")
        }

        (Language::En, Explanation::SkipBranch { i, remainder }) => {
            format!("⏭️ {i} is NOT divisible by 4 (remainder is {remainder}). Skipping...")
        }
        (Language::Ko, Explanation::SkipBranch { i, remainder }) => {
            format!("⏭️ {i}는 4로 나누어떨어지지 않아요 (나머지가 {remainder}). 건너뛰어요...")
        }

        (Language::En, Explanation::Complete { sum }) => {
            format!("🎉 Loop complete! Final sum = {sum}")
        }
        (Language::Ko, Explanation::Complete { sum }) => {
            format!("🎉 반복 완료! 최종 합계 = {sum}")
        }

        (lang, Explanation::ClickToStart) => labels(lang).click_to_start.to_string(),
    }
}

/* ===================== Keyword Tooltips ===================== */

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeywordTooltip {
    pub title: &'static str,
    pub desc: &'static str,
}

pub fn tooltip(lang: Language, keyword: Keyword) -> KeywordTooltip {
    let (title, desc) = match (lang, keyword) {
        (Language::En, Keyword::Sum) => (
            "Variable: Sum",
            "Sum is like a labeled box in the computer's memory that stores a number. \
             Throughout the program we use it to keep the running total: every time we find \
             a number divisible by 4, we take what is already in the box, add the new number \
             and put the result back.",
        ),
        (Language::En, Keyword::For) => (
            "For Loop",
            "A For loop repeats a set of instructions automatically. `For i = 1 to 20` means: \
             start counting at 1, do something, then count to 2 and do it again, and keep \
             going until 20. It saves us from writing the same code over and over.",
        ),
        (Language::En, Keyword::I) => (
            "Loop Counter: i",
            "The loop counter `i` is a number badge that changes each time we go through the \
             loop: 1, 2, 3, ... up to 20. Each pass we look at i to decide what to do, and it \
             is increased automatically at the end of each iteration.",
        ),
        (Language::En, Keyword::SelectCase) => (
            "Select Case Statement",
            "`Select Case` picks one of several options based on ONE value. The computer first \
             calculates `i Mod 4` (always 0, 1, 2 or 3), compares it with each `Case` in order, \
             runs the code under the first match and continues after `End Select`.",
        ),
        (Language::En, Keyword::Mod) => (
            "Modulo Operation (Mod)",
            "Mod finds the remainder after division. Share 7 cookies among 4 friends: each gets \
             1 and 3 are left over, so `7 Mod 4 = 3`. If a number Mod 4 is 0, it divides \
             perfectly by 4.",
        ),
        (Language::En, Keyword::Case) => (
            "Case Branch",
            "A Case is one branch of a Select Case. `Case 0` means \"if the remainder is 0, do \
             something special\"; `Case 1,2,3` means \"if the remainder is 1, 2 or 3, do \
             something else\" (here: skip it).",
        ),
        (Language::En, Keyword::Operator) => (
            "Operators",
            "`=` is the assignment operator: it puts a value into a variable. `Sum = Sum + i` \
             means \"calculate Sum + i, then store the result back in Sum\". `+` adds two \
             numbers together.",
        ),
        (Language::En, Keyword::To) => (
            "To Keyword",
            "`to` sets where the counting stops. `For i = 1 to 20` starts at 1 and goes up to \
             AND INCLUDING 20, adding 1 to the counter each time.",
        ),
        (Language::En, Keyword::EndSelect) => (
            "End Select",
            "`End Select` marks where the Select Case statement finishes. After reaching it, \
             all cases have been checked and the program moves on to the next line.",
        ),
        (Language::En, Keyword::Next) => (
            "Next Keyword",
            "`Next` closes the For loop: add 1 to the counter, check whether the end number \
             has been passed, and if not, jump back to the start of the loop.",
        ),

        (Language::Ko, Keyword::Sum) => (
            "변수: Sum",
            "Sum은 컴퓨터 메모리 안에 숫자를 저장하는 라벨이 붙은 상자 같아요. 프로그램 전체에서 \
             이 상자로 누적 합계를 기억해요. 4로 나누어떨어지는 숫자를 찾을 때마다 상자에 있던 값에 \
             새 숫자를 더해서 다시 넣어요.",
        ),
        (Language::Ko, Keyword::For) => (
            "For 반복문",
            "For 반복문은 명령들을 자동으로 여러 번 반복해요. `For i = 1 to 20`은 1부터 세기 \
             시작해서 뭔가를 하고, 2로 세고 다시 하고, 이렇게 20까지 계속하라는 뜻이에요.",
        ),
        (Language::Ko, Keyword::I) => (
            "반복 카운터: i",
            "반복 카운터 `i`는 반복문을 돌 때마다 1, 2, 3, ... 20으로 바뀌는 숫자 배지예요. \
             매번 i의 값을 보고 무엇을 할지 결정하고, 각 반복이 끝날 때 자동으로 증가해요.",
        ),
        (Language::Ko, Keyword::SelectCase) => (
            "Select Case 문",
            "`Select Case`는 하나의 값을 기준으로 할 일을 고르는 문법이에요. 먼저 `i Mod 4`를 \
             계산하고(항상 0, 1, 2, 3 중 하나), 위에서부터 `Case`와 비교해서 처음 일치하는 Case의 \
             코드를 실행한 뒤 `End Select` 다음으로 넘어가요.",
        ),
        (Language::Ko, Keyword::Mod) => (
            "나머지 연산 (Mod)",
            "Mod는 나눗셈 후 남은 나머지를 구해요. 쿠키 7개를 친구 4명에게 나누면 1개씩 주고 \
             3개가 남으니 `7 Mod 4 = 3`이에요. Mod 4가 0이면 4로 딱 나누어떨어진다는 뜻이에요.",
        ),
        (Language::Ko, Keyword::Case) => (
            "Case 분기",
            "Case는 Select Case 안의 하나의 분기예요. `Case 0`은 \"나머지가 0이면 특별한 것을 \
             해라\", `Case 1,2,3`은 \"나머지가 1, 2, 3이면 다른 것을 해라(여기서는 건너뛰기)\"는 \
             뜻이에요.",
        ),
        (Language::Ko, Keyword::Operator) => (
            "연산자",
            "`=`는 할당 연산자로 변수에 값을 넣어요. `Sum = Sum + i`는 \"Sum + i를 계산해서 \
             그 결과를 다시 Sum에 저장해라\"는 뜻이에요. `+`는 두 숫자를 더해요.",
        ),
        (Language::Ko, Keyword::To) => (
            "to 키워드",
            "`to`는 세기를 멈출 곳을 정해요. `For i = 1 to 20`은 1에서 시작해서 20까지 \
             포함해서, 매번 1씩 올라가요.",
        ),
        (Language::Ko, Keyword::EndSelect) => (
            "End Select",
            "`End Select`는 Select Case 문이 끝나는 곳을 표시해요. 여기에 도달하면 모든 \
             Case를 확인한 것이고, 프로그램은 다음 줄로 넘어가요.",
        ),
        (Language::Ko, Keyword::Next) => (
            "Next 키워드",
            "`Next`는 For 반복문을 닫아요: 카운터에 1을 더하고, 끝 숫자를 넘었는지 확인하고, \
             아직이면 반복문의 시작으로 돌아가요.",
        ),
    };
    KeywordTooltip { title, desc }
}

/* ===================== Summary ===================== */

#[derive(Debug)]
pub struct Summary {
    pub title: &'static str,
    pub overview: &'static str,
    pub steps: &'static [&'static str],
    pub final_result: &'static str,
    pub explanation: &'static str,
}

static EN_SUMMARY: Summary = Summary {
    title: "What This Code Does",
    overview: "This code finds all numbers from 1 to 20 that are divisible by 4, and adds them together!",
    steps: &[
        "Step 1: Set up a total: `Sum = 0` means \"start the total at zero.\"",
        "Step 2: Count from 1 up to 20: `For i = 1 to 20` makes the computer try each number, one at a time.",
        "Step 3: Find the remainder after dividing by 4: `(i mod 4)` gives the leftover. Example: `9 mod 4 = 1`.",
        "Step 4: Decide with `Select Case`: on `Case 0` the number is divisible by 4, so `Sum = Sum + i`. On `Case 1, 2, or 3` we skip it.",
        "Step 5: Repeat until `Next` finishes the loop: 4, 8, 12, 16 and 20 get added, so `Sum` ends up being 60.",
    ],
    final_result: "Final Result: Sum = 60",
    explanation: "Because 4 + 8 + 12 + 16 + 20 = 60",
};

static KO_SUMMARY: Summary = Summary {
    title: "이 코드가 하는 일",
    overview: "이 코드는 1부터 20까지의 숫자 중에서 4로 나누어떨어지는 숫자들을 찾아서 모두 더해요!",
    steps: &[
        "1단계: 합계 상자를 준비해요. `Sum = 0`은 \"합계를 0부터 시작하자\"는 뜻이에요.",
        "2단계: 1부터 20까지 세어가며 확인해요. `For i = 1 to 20`은 숫자를 하나씩 차례대로 검사하게 해줘요.",
        "3단계: 지금 숫자를 4로 나눈 나머지를 구해요. 예: `9 mod 4 = 1`.",
        "4단계: `Select Case`로 결정해요. `Case 0`이면 `Sum = Sum + i`로 더하고, `Case 1, 2, 3`이면 건너뛰어요.",
        "5단계: `Next`로 반복을 끝까지 돌려요. 4, 8, 12, 16, 20이 더해져서 `Sum`은 60이 돼요.",
    ],
    final_result: "최종 결과: Sum = 60",
    explanation: "왜냐하면 4 + 8 + 12 + 16 + 20 = 60",
};

pub fn summary(lang: Language) -> &'static Summary {
    match lang {
        Language::En => &EN_SUMMARY,
        Language::Ko => &KO_SUMMARY,
    }
}
