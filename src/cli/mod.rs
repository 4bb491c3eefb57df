//! Command-line interface for avg-lyric-counter.
//!
//! Takes an artist name (or prompts for one), runs the counter and prints
//! the average lyric word count.

mod commands;

pub use commands::{Cli, run_command};
