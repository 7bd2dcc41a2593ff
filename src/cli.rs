use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use log::warn;

use crate::expression::format_for_display;
use crate::puzzle::{PuzzleGenerator, Round};
use crate::solver::solve;

/// Log level for the application
#[derive(Debug, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn to_log_level_filter(&self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Twentyfour - play the 24 points game from the terminal
#[derive(Parser, Debug)]
#[command(name = "twentyfour")]
#[command(about = "Generate, solve and check 24 points puzzles")]
#[command(version)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Command,

    /// Log level (default: warn)
    #[arg(short, long, value_enum, default_value = "warn", global = true)]
    pub log_level: LogLevel,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Deal four cards that are guaranteed solvable
    New {
        /// Also print a witness expression
        #[arg(long)]
        reveal: bool,
    },
    /// Find an expression worth 24 for four given cards
    Solve {
        /// Four card values in 1..=13
        #[arg(num_args = 4, value_name = "CARD", value_parser = clap::value_parser!(u8).range(1..=13))]
        cards: Vec<u8>,
    },
    /// Judge a submitted expression against four cards
    Check {
        /// Expression to judge
        expr: String,
        /// Four card values in 1..=13
        #[arg(num_args = 4, value_name = "CARD", value_parser = clap::value_parser!(u8).range(1..=13))]
        cards: Vec<u8>,
    },
}

/// Initialize logging based on the provided log level
pub fn init_logging(log_level: &LogLevel) -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log_level.to_log_level_filter())
        .init();
    Ok(())
}

/// Run the main application logic
pub fn run() -> Result<()> {
    let args = CliArgs::parse();
    init_logging(&args.log_level)?;

    match args.command {
        Command::New { reveal } => run_new(reveal),
        Command::Solve { cards } => run_solve(&cards),
        Command::Check { expr, cards } => run_check(&expr, &cards),
    }
}

fn run_new(reveal: bool) -> Result<()> {
    let round = PuzzleGenerator::default().generate();
    if round.is_degraded() {
        warn!("Puzzle generation hit its retry ceiling");
        println!("Could not find a solvable deal, try again.");
        return Ok(());
    }

    let cards = round.cards();
    println!("Cards: {} {} {} {}", cards[0], cards[1], cards[2], cards[3]);
    if reveal {
        if let Some(witness) = round.witness() {
            println!("One solution: {}", format_for_display(witness));
        }
    }
    Ok(())
}

fn run_solve(cards: &[u8]) -> Result<()> {
    let cards = as_card_array(cards)?;
    match solve(cards) {
        Some(witness) => println!("{}", format_for_display(&witness)),
        None => println!("No solution."),
    }
    Ok(())
}

fn run_check(expr: &str, cards: &[u8]) -> Result<()> {
    let cards = as_card_array(cards)?;
    let round = Round::new(cards, None);

    match round.check(expr) {
        Ok(outcome) if outcome.is_win() => {
            println!("Correct! {} = {}", expr, outcome.value);
        }
        Ok(outcome) if outcome.matches_target => {
            let reason = outcome.usage_violation.unwrap_or_default();
            println!("The value is right, but the cards are used illegally: {}", reason);
        }
        Ok(outcome) => {
            println!("Not quite: {} = {}, the target is 24.", expr, outcome.value);
        }
        Err(err) => {
            println!("Cannot read that expression: {}", err);
        }
    }
    Ok(())
}

fn as_card_array(cards: &[u8]) -> Result<[u8; 4]> {
    cards
        .try_into()
        .context("exactly four cards are required")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_conversion() {
        assert_eq!(
            LogLevel::Error.to_log_level_filter(),
            log::LevelFilter::Error
        );
        assert_eq!(LogLevel::Warn.to_log_level_filter(), log::LevelFilter::Warn);
        assert_eq!(LogLevel::Info.to_log_level_filter(), log::LevelFilter::Info);
        assert_eq!(
            LogLevel::Debug.to_log_level_filter(),
            log::LevelFilter::Debug
        );
        assert_eq!(
            LogLevel::Trace.to_log_level_filter(),
            log::LevelFilter::Trace
        );
    }

    #[test]
    fn test_parse_solve_command() {
        let args = CliArgs::try_parse_from(["twentyfour", "solve", "1", "2", "3", "4"])
            .expect("valid command line");
        match args.command {
            Command::Solve { cards } => assert_eq!(cards, vec![1, 2, 3, 4]),
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_check_requires_four_cards() {
        assert!(CliArgs::try_parse_from(["twentyfour", "check", "1+2", "1", "2"]).is_err());
    }

    #[test]
    fn test_card_range_enforced() {
        assert!(CliArgs::try_parse_from(["twentyfour", "solve", "1", "2", "3", "14"]).is_err());
        assert!(CliArgs::try_parse_from(["twentyfour", "solve", "0", "2", "3", "4"]).is_err());
    }
}
