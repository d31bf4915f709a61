use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::config::Config;
use crate::driver::AutoRunDriver;
use crate::i18n::Language;
use crate::interpreter::{self, ExecutionState};
use crate::program;
use crate::render;
use crate::store::{self, ExecutionStateStore};

#[derive(Parser)]
#[command(name = "looplens")]
#[command(about = "looplens - Watch a small For/Select Case program run line by line", long_about = None)]
pub struct Cli {
    /// Path to config file (overrides default search)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Display language (overrides config file and env vars)
    #[arg(long, global = true)]
    pub lang: Option<Language>,

    /// Milliseconds between auto-run steps, 100-2000
    #[arg(long, global = true)]
    pub speed: Option<u64>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Auto-run the program, redrawing after every step
    Run,

    /// Step through the whole program at once and print every transition
    Trace {
        /// Print one JSON object per transition
        #[arg(long)]
        json: bool,
    },

    /// Interactive session: start, step, reset, speed, lang
    Repl,

    /// Explain the keywords used in the program
    Keywords {
        /// Only keywords on this line (0-7)
        #[arg(short = 'l', long = "line")]
        line: Option<usize>,
    },

    /// Describe what the program computes
    Summary,

    /// Print the effective configuration as TOML
    Config,
}

/// Run the CLI by parsing process arguments
pub async fn run_cli() -> Result<()> {
    let cli = Cli::parse();
    run_cli_with_args(cli).await
}

/// Run the CLI with provided arguments
pub async fn run_cli_from_args(args: Vec<String>) -> Result<()> {
    let cli = Cli::parse_from(args);
    run_cli_with_args(cli).await
}

async fn run_cli_with_args(cli: Cli) -> Result<()> {
    // Load before running any command so config errors surface first
    let config = Config::builder()
        .config_path(cli.config)
        .speed_ms(cli.speed)
        .language(cli.lang)
        .build()
        .context("Failed to load configuration")?;
    let lang = config.display.language;

    match cli.command {
        Commands::Run => run_auto(&config).await?,

        Commands::Trace { json } => {
            for transition in interpreter::trace(ExecutionState::initial()) {
                if json {
                    println!("{}", serde_json::to_string(&transition)?);
                } else {
                    let state = &transition.state;
                    let explanation = state
                        .explanation
                        .map(|e| crate::i18n::explain(lang, &e))
                        .unwrap_or_default();
                    println!(
                        "line {:>2}  iter {:>2}  Sum {:>2}  i {:>2}  {}",
                        state.current_line.index(),
                        state.current_iteration,
                        state.variables.sum,
                        state.variables.i,
                        explanation
                    );
                }
            }
        }

        Commands::Repl => crate::repl::run(&config).await?,

        Commands::Keywords { line } => {
            let keywords: Vec<program::Keyword> = match line {
                Some(idx) => program::line(idx)
                    .with_context(|| {
                        format!(
                            "Line {} does not exist (expected 0-{})",
                            idx,
                            program::PROGRAM.len() - 1
                        )
                    })?
                    .kind
                    .keywords()
                    .to_vec(),
                None => program::Keyword::ALL.to_vec(),
            };
            print!("{}", render::render_keywords(lang, &keywords));
        }

        Commands::Summary => print!("{}", render::render_summary(lang)),

        Commands::Config => print!("{}", config.to_toml()?),
    }

    Ok(())
}

/// Start an auto-run and redraw on every committed snapshot until it ends
async fn run_auto(config: &Config) -> Result<()> {
    let lang = config.display.language;
    let speed = config.execution.speed_ms;
    let store = ExecutionStateStore::shared();
    let driver = AutoRunDriver::new(store.clone(), speed);
    let mut updates = store::lock(&store).subscribe();

    driver.start()?;

    loop {
        let snapshot = updates.borrow_and_update().clone();
        println!("{}", render::render(&snapshot, lang, speed));
        if !snapshot.is_running {
            break;
        }

        tokio::select! {
            changed = updates.changed() => changed.context("State store closed")?,
            _ = tokio::signal::ctrl_c() => {
                driver.reset();
                println!("{}", render::render(&store::lock(&store).snapshot(), lang, speed));
                break;
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[tokio::test]
    async fn test_runs_from_argument_list() {
        run_cli_from_args(args(&["looplens", "--speed", "500", "config"]))
            .await
            .unwrap();
        run_cli_from_args(args(&["looplens", "--lang", "ko", "keywords", "--line", "4"]))
            .await
            .unwrap();
        run_cli_from_args(args(&["looplens", "trace", "--json"]))
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_bad_overrides_fail_before_dispatch() {
        let err = run_cli_from_args(args(&["looplens", "--speed", "5", "summary"]))
            .await
            .unwrap_err();
        assert!(format!("{:#}", err).contains("Failed to load configuration"));

        let err = run_cli_from_args(args(&["looplens", "keywords", "--line", "8"]))
            .await
            .unwrap_err();
        assert!(err.to_string().contains("Line 8 does not exist"));
    }
}
