//! avg-lyric-counter - average word count of an artist's song lyrics.
//!
//! Resolves the artist on MusicBrainz, collects the unique tracks of their
//! albums, looks up each track's lyrics on lyrics.ovh and prints the average
//! number of words per song that has lyrics.

pub mod cli;
pub mod config;
pub mod counter;
pub mod error;
pub mod lookup;
#[cfg(test)]
pub mod test_utils;

use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn main() -> anyhow::Result<()> {
    let args = cli::Cli::parse();

    // RUST_LOG wins; otherwise -v flags pick the level
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(args.log_directive()));

    // Logs on stderr, the result on stdout
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
        .with(filter)
        .init();

    cli::run_command(&args)
}
