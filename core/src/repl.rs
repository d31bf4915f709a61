//! Interactive session
//!
//! Reads one command per line from stdin. Frames are drawn by a separate
//! task that watches the store, so auto-run ticks show up while the prompt
//! waits for input.

use anyhow::{Context, Result};
use std::str::FromStr;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::watch;
use tracing::debug;

use crate::config::Config;
use crate::driver::AutoRunDriver;
use crate::error::Error;
use crate::i18n::{self, Language};
use crate::program::Keyword;
use crate::render;
use crate::speed::Speed;
use crate::store::{self, ExecutionStateStore};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Start,
    Step,
    Reset,
    Speed(Speed),
    Lang(Language),
    Show,
    Keywords,
    Summary,
    Help,
    Quit,
}

impl FromStr for Command {
    type Err = Error;

    fn from_str(input: &str) -> Result<Self, Error> {
        let mut words = input.split_whitespace();
        let name = words.next().unwrap_or_default().to_lowercase();
        let arg = words.next();

        let command = match (name.as_str(), arg) {
            ("start" | "run", None) => Command::Start,
            ("step" | "next" | "s", None) => Command::Step,
            ("reset" | "r", None) => Command::Reset,
            ("speed", Some(ms)) => {
                let ms = ms
                    .parse::<u64>()
                    .map_err(|_| Error::UnknownCommand(input.trim().to_string()))?;
                Command::Speed(Speed::new(ms)?)
            }
            ("lang", Some(code)) => Command::Lang(code.parse()?),
            ("show" | "", None) => Command::Show,
            ("keywords", None) => Command::Keywords,
            ("summary", None) => Command::Summary,
            ("help" | "?", None) => Command::Help,
            ("quit" | "exit" | "q", None) => Command::Quit,
            _ => return Err(Error::UnknownCommand(input.trim().to_string())),
        };
        Ok(command)
    }
}

const HELP: &str = "\
commands:
  start          run automatically
  step           execute one line
  reset          stop and go back to the beginning
  speed <ms>     delay between automatic steps (100-2000)
  lang <en|ko>   switch display language
  show           redraw the current state
  keywords       explain the words used in the code
  summary        what the program computes
  quit           leave";

pub async fn run(config: &Config) -> Result<()> {
    let store = ExecutionStateStore::shared();
    let driver = AutoRunDriver::new(store.clone(), config.execution.speed_ms);
    let (lang_tx, lang_rx) = watch::channel(config.display.language);

    driver.reset();
    let renderer = tokio::spawn(draw_frames(driver.clone(), lang_rx));

    let labels = i18n::labels(config.display.language);
    println!("{}", labels.controls_hint);
    println!("{}", labels.variables_hint);
    println!("{}", labels.keyword_hint);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await.context("Failed to read stdin")? {
        let lang = *lang_tx.borrow();
        let command = match line.parse::<Command>() {
            Ok(command) => command,
            Err(e) => {
                eprintln!("{}", e);
                continue;
            }
        };
        debug!(?command, "repl command");

        match command {
            Command::Start => {
                if !driver.start()? {
                    eprintln!("already running");
                }
            }
            Command::Step => {
                if driver.step().is_none() {
                    eprintln!("already running");
                }
            }
            Command::Reset => driver.reset(),
            Command::Speed(speed) => {
                driver.set_speed(speed);
                println!("{} {}", i18n::labels(lang).speed, speed);
            }
            Command::Lang(lang) => {
                lang_tx.send_replace(lang);
            }
            Command::Show => {
                let snapshot = store::lock(&store).snapshot();
                println!("{}", render::render(&snapshot, lang, driver.speed()));
            }
            Command::Keywords => print!("{}", render::render_keywords(lang, &Keyword::ALL)),
            Command::Summary => print!("{}", render::render_summary(lang)),
            Command::Help => println!("{}", HELP),
            Command::Quit => break,
        }
    }

    driver.reset();
    renderer.abort();
    Ok(())
}

/// Redraw whenever the state or the language changes
async fn draw_frames(driver: AutoRunDriver, mut lang: watch::Receiver<Language>) {
    let mut updates = store::lock(driver.store()).subscribe();
    loop {
        let snapshot = updates.borrow_and_update().clone();
        let current = *lang.borrow_and_update();
        println!("{}", render::render(&snapshot, current, driver.speed()));

        tokio::select! {
            changed = updates.changed() => if changed.is_err() { return },
            changed = lang.changed() => if changed.is_err() { return },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_commands() {
        assert_eq!("start".parse::<Command>().unwrap(), Command::Start);
        assert_eq!(" STEP ".parse::<Command>().unwrap(), Command::Step);
        assert_eq!("".parse::<Command>().unwrap(), Command::Show);
        assert_eq!(
            "speed 250".parse::<Command>().unwrap(),
            Command::Speed(Speed::new(250).unwrap())
        );
        assert_eq!("lang ko".parse::<Command>().unwrap(), Command::Lang(Language::Ko));
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        assert!(matches!(
            "jump".parse::<Command>(),
            Err(Error::UnknownCommand(_))
        ));
        assert!(matches!(
            "speed 5".parse::<Command>(),
            Err(Error::SpeedOutOfRange(5))
        ));
        assert!(matches!(
            "speed fast".parse::<Command>(),
            Err(Error::UnknownCommand(_))
        ));
        assert!(matches!(
            "lang fr".parse::<Command>(),
            Err(Error::UnknownLanguage(_))
        ));
        assert!("step twice".parse::<Command>().is_err());
    }
}
