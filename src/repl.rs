//! Interactive command loop for driving the search engines.
//!
//! Commands follow the form `<Engine> <input_file> <output_file> <depth>`:
//! the board is read from the input file (a single 23-character line of
//! `W`/`B`/`x`), the configured search runs, the chosen board is written to
//! the output file, and a four-line report is printed: input position,
//! output position, evaluation count, and the estimate.
//!
//! ## Supported commands
//!
//! - Engine names per the [`SearchConfig::parse`] grammar, e.g.
//!   `MiniMaxOpening`, `ABGame`, `MiniMaxGameBlack`, `ABOpeningImproved`
//! - `help` - list commands and the invocation format
//! - `exit` / `quit` - leave the loop
//!
//! Failures (unknown command, missing file, malformed board, no legal
//! move) are reported as messages; the loop keeps running.

use std::fs;
use std::io::{self, BufRead, Write};

use anyhow::{Context, Result, anyhow, bail};

use crate::board::{Board, Player};
use crate::eval::Tier;
use crate::search::{Algorithm, SearchConfig, run_search};

/// The list of known engine commands: the full phase x algorithm x side x
/// tier product.
pub const KNOWN_COMMANDS: &[&str] = &[
    "ABGame",
    "ABGameBlack",
    "ABGameBlackImproved",
    "ABGameImproved",
    "ABOpening",
    "ABOpeningBlack",
    "ABOpeningBlackImproved",
    "ABOpeningImproved",
    "MiniMaxGame",
    "MiniMaxGameBlack",
    "MiniMaxGameBlackImproved",
    "MiniMaxGameImproved",
    "MiniMaxOpening",
    "MiniMaxOpeningBlack",
    "MiniMaxOpeningBlackImproved",
    "MiniMaxOpeningImproved",
];

/// Run the command loop, reading from stdin and writing to stdout.
pub fn run() {
    println!("Morris-Rust: Nine Men's Morris search engine");
    println!("Format: <command> <input_file> <output_file> <depth>");
    println!("Type 'help' for the list of commands, 'exit' or 'quit' to leave.");

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        print!("\n>>> ");
        let _ = stdout.flush();

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) | Err(_) => break,
            Ok(_) => {}
        }

        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if line.eq_ignore_ascii_case("exit") || line.eq_ignore_ascii_case("quit") {
            break;
        }
        if line.eq_ignore_ascii_case("help") {
            println!("{}", help_text());
            continue;
        }

        // A command failure is a message, never the end of the loop.
        match run_command(line) {
            Ok(report) => println!("{report}"),
            Err(error) => println!("Error: {error:#}"),
        }
    }
}

/// Parse and execute one `<Engine> <input> <output> <depth>` command line.
pub fn run_command(line: &str) -> Result<String> {
    let parts: Vec<&str> = line.split_whitespace().collect();
    let &[engine, input, output, depth] = parts.as_slice() else {
        bail!("invalid command; expected <command> <input_file> <output_file> <depth>");
    };
    let depth: i32 = depth
        .parse()
        .with_context(|| format!("depth must be an integer, got '{depth}'"))?;
    execute(engine, input, output, depth)
}

/// Execute one engine invocation against board files and return the
/// report.
pub fn execute(engine: &str, input: &str, output: &str, depth: i32) -> Result<String> {
    let config = SearchConfig::parse(engine)
        .ok_or_else(|| anyhow!("unknown command '{engine}' (try 'help')"))?;

    let text = fs::read_to_string(input)
        .with_context(|| format!("cannot read board file '{input}'"))?;
    let board: Board = text
        .lines()
        .next()
        .unwrap_or("")
        .trim()
        .parse()
        .with_context(|| format!("board file '{input}' is malformed"))?;

    let outcome = run_search(&board, depth, config);
    let Some(best) = outcome.best else {
        bail!("no legal move from this position; the game is over for the side to move");
    };

    fs::write(output, best.to_string())
        .with_context(|| format!("cannot write board file '{output}'"))?;

    Ok(format!(
        "Input position: {board}\n\
         Output position: {best}\n\
         Positions evaluated by static estimation: {}.\n\
         {}: {}.",
        outcome.evaluations,
        estimate_label(config),
        outcome.score
    ))
}

/// The estimate line's label, e.g. `MINIMAX estimate`, `Improved
/// Alpha-Beta Pruning estimate for black`.
fn estimate_label(config: SearchConfig) -> String {
    let algorithm = match config.algorithm {
        Algorithm::Minimax => "MINIMAX",
        Algorithm::AlphaBeta => "Alpha-Beta Pruning",
    };
    let tier = match config.tier {
        Tier::Basic => "",
        Tier::Improved => "Improved ",
    };
    let side = match config.side {
        Player::White => "",
        Player::Black => " for black",
    };
    format!("{tier}{algorithm} estimate{side}")
}

fn help_text() -> String {
    let mut text = String::from(
        "Commands take the form: <command> <input_file> <output_file> <depth>\n\
         The input file holds one 23-character board line of 'W', 'B', 'x'.\n\
         Available commands:\n",
    );
    for command in KNOWN_COMMANDS {
        text.push_str("  ");
        text.push_str(command);
        text.push('\n');
    }
    text.push_str("  help\n  exit | quit");
    text
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_known_command_parses() {
        for command in KNOWN_COMMANDS {
            assert!(
                SearchConfig::parse(command).is_some(),
                "'{command}' should parse"
            );
        }
    }

    #[test]
    fn estimate_labels_name_the_configuration() {
        let label = |name: &str| estimate_label(SearchConfig::parse(name).unwrap());
        assert_eq!(label("MiniMaxOpening"), "MINIMAX estimate");
        assert_eq!(label("ABGame"), "Alpha-Beta Pruning estimate");
        assert_eq!(label("MiniMaxGameBlack"), "MINIMAX estimate for black");
        assert_eq!(
            label("MiniMaxOpeningImproved"),
            "Improved MINIMAX estimate"
        );
        assert_eq!(
            label("ABGameBlackImproved"),
            "Improved Alpha-Beta Pruning estimate for black"
        );
    }

    #[test]
    fn run_command_rejects_wrong_arity() {
        assert!(run_command("MiniMaxOpening only two").is_err());
        assert!(run_command("MiniMaxOpening a b c d").is_err());
    }

    #[test]
    fn run_command_rejects_non_integer_depth() {
        let error = run_command("MiniMaxOpening in.txt out.txt three")
            .unwrap_err()
            .to_string();
        assert!(error.contains("integer"), "unexpected error: {error}");
    }

    #[test]
    fn execute_rejects_unknown_engines() {
        let error = execute("MonteCarloGame", "in.txt", "out.txt", 2)
            .unwrap_err()
            .to_string();
        assert!(error.contains("unknown command"), "unexpected error: {error}");
    }
}
