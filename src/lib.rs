//! Morris-Rust: a Nine Men's Morris search engine.
//!
//! This crate computes the best move for a player in the 23-point "mill"
//! variant of Nine Men's Morris via adversarial tree search, reimplemented
//! in Rust from a Python original.
//!
//! ## Modules
//!
//! - [`constants`] - Board geometry tables and evaluation weights
//! - [`board`] - Immutable board values and the W/B/x text encoding
//! - [`movegen`] - Successor generation (add, slide, hop, capture)
//! - [`eval`] - Static estimators (basic and improved tiers)
//! - [`search`] - Minimax and Alpha-Beta engines
//! - [`repl`] - Interactive command loop and file-based driver
//!
//! ## Example
//!
//! ```
//! use morris_rust::board::Board;
//! use morris_rust::search::{SearchConfig, run_search};
//!
//! // Two white pieces placed, one black: white to place the next piece.
//! let board: Board = "WWxxxBxxxxxxxxxxxxxxxxx".parse().unwrap();
//!
//! let config = SearchConfig::parse("ABOpening").unwrap();
//! let outcome = run_search(&board, 2, config);
//!
//! // White completes the 0-1-2 mill and captures the black piece.
//! let best = outcome.best.unwrap();
//! assert_eq!(best.to_string(), "WWWxxxxxxxxxxxxxxxxxxxx");
//! ```

pub mod board;
pub mod constants;
pub mod eval;
pub mod movegen;
pub mod repl;
pub mod search;
