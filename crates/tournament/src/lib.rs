//! Tournament runner for shogi engines
//!
//! This crate provides infrastructure for:
//! - Running matches between engines through the full game driver
//! - Loading match settings from TOML
//! - Summarizing results as win/loss/draw counts
//!
//! # Usage
//!
//! ```bash
//! # Beam search against the random baseline
//! cargo run -p tournament -- match beam random --games 20 --depth 3 --width 5
//!
//! # Settings from a file, with a trained value table
//! cargo run -p tournament -- match beam:tables/v1.json beam --config match.toml
//! ```

mod config;
mod match_runner;
mod outcome;

pub use config::*;
pub use match_runner::*;
pub use outcome::*;
