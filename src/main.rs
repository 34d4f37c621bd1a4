//! Morris-Rust: a Nine Men's Morris search engine.
//!
//! ## Usage
//!
//! - `morris-rust` - Start the interactive command loop
//! - `morris-rust repl` - Same, explicitly
//! - `morris-rust run <engine> <input> <output> <depth>` - One-shot search
//! - `morris-rust demo` - Run a short demonstration search

use clap::{Parser, Subcommand};

use morris_rust::board::Board;
use morris_rust::repl;
use morris_rust::search::{Algorithm, SearchConfig, run_search};

/// Morris-Rust: a Nine Men's Morris adversarial search engine
#[derive(Parser)]
#[command(name = "morris-rust")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the interactive command loop
    Repl,
    /// Run a single engine invocation against board files
    Run {
        /// Engine name, e.g. MiniMaxOpening, ABGame, MiniMaxGameBlack
        engine: String,
        /// File holding the input board line
        input: String,
        /// File the chosen board is written to
        output: String,
        /// Search depth; 0 evaluates the input board itself
        depth: i32,
    },
    /// Run a simple demo of the engine
    Demo,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Run {
            engine,
            input,
            output,
            depth,
        }) => {
            let report = repl::execute(&engine, &input, &output, depth)?;
            println!("{report}");
        }
        Some(Commands::Demo) => run_demo()?,
        Some(Commands::Repl) | None => repl::run(),
    }
    Ok(())
}

fn run_demo() -> anyhow::Result<()> {
    println!("Morris-Rust: Nine Men's Morris search engine\n");

    // A midgame skirmish: white one piece up, both sides sliding.
    let board: Board = "WxWWxxxxBxWxxBxxxBxBxxx".parse()?;
    println!("=== Midgame Demo ===");
    println!("Position: {board}");

    for name in ["MiniMaxGame", "ABGame"] {
        let config = SearchConfig::parse(name).expect("known engine name");
        let outcome = run_search(&board, 3, config);
        let label = match config.algorithm {
            Algorithm::Minimax => "Minimax",
            Algorithm::AlphaBeta => "Alpha-Beta",
        };
        match outcome.best {
            Some(best) => println!(
                "{label:<10} -> {best}  score {} ({} evaluations)",
                outcome.score, outcome.evaluations
            ),
            None => println!("{label:<10} -> no legal move"),
        }
    }
    println!("\nBoth algorithms pick the same move; pruning only saves work.");
    Ok(())
}
