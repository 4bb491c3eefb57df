//! The counting command: run the counter for one artist and print the result.

use std::io::{BufRead, Write};

use tokio::runtime::Runtime;

use crate::config::CounterConfig;
use crate::counter::{LyricCounter, LyricStats};
use crate::error::{Result, ResultExt};
use crate::lookup::{LyricsApi, MetadataApi};

/// Count and print the average lyric word count for `artist_name`.
///
/// Missing data (empty name, unknown artist, no releases, no tracks) is
/// reported on stderr and ends the process with exit code 1; the log has the
/// specific reason.
pub fn cmd_count(rt: &Runtime, artist_name: &str, config: CounterConfig) -> anyhow::Result<()> {
    let counter = LyricCounter::from_config(config)?;

    match rt.block_on(count_artist(&counter, artist_name)) {
        Ok(stats) => {
            print!("{}", render_stats(&stats));
            Ok(())
        }
        Err(e) if e.is_missing_data() => {
            eprintln!(
                "No lyric data available for '{}'. Run with -v for details.",
                artist_name.trim()
            );
            std::process::exit(1);
        }
        Err(e) => Err(e.into()),
    }
}

/// Run the counter, labelling failures with the artist they were for
async fn count_artist<M: MetadataApi, L: LyricsApi>(
    counter: &LyricCounter<M, L>,
    artist_name: &str,
) -> Result<LyricStats> {
    counter
        .average_word_count(artist_name)
        .await
        .with_context(format!("counting lyrics for '{}'", artist_name.trim()))
}

/// Ask for an artist name and read one line of input.
pub fn prompt_artist_name(mut input: impl BufRead, mut output: impl Write) -> Result<String> {
    writeln!(output, "Enter artist name:")
        .and_then(|_| output.flush())
        .with_context("writing prompt")?;

    let mut line = String::new();
    input
        .read_line(&mut line)
        .with_context("reading artist name")?;
    Ok(line.trim().to_string())
}

/// Text printed for a successful run
fn render_stats(stats: &LyricStats) -> String {
    format!(
        "Found {} of {} songs with lyrics.\nAverage word count: {}\n",
        stats.found, stats.tracks, stats.average
    )
}
