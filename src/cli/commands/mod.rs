//! CLI definition and dispatch.
//!
//! The counting flow itself lives in `count`.

mod count;

use clap::{Parser, ValueEnum};
use tokio::runtime::Runtime;

use crate::config::{CounterConfig, DEFAULT_EXCLUSION_FILTERS};
use crate::lookup::{ReleaseFilter, ReleaseSource, lyricsovh, musicbrainz};

pub use count::{cmd_count, prompt_artist_name};

/// Average word count of an artist's song lyrics
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Artist name (prompted for when omitted)
    pub artist: Option<String>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// MusicBrainz API root
    #[arg(long, env = "MUSICBRAINZ_URL", default_value = musicbrainz::DEFAULT_BASE_URL)]
    pub musicbrainz_url: String,

    /// lyrics.ovh API root
    #[arg(long, env = "LYRICS_OVH_URL", default_value = lyricsovh::DEFAULT_BASE_URL)]
    pub lyrics_url: String,

    /// Where release IDs come from
    #[arg(long, value_enum, default_value = "release-groups")]
    pub release_source: SourceArg,

    /// Keep live release groups
    #[arg(long)]
    pub include_live: bool,

    /// Keep compilation release groups
    #[arg(long)]
    pub include_compilations: bool,

    /// Keep remix release groups
    #[arg(long)]
    pub include_remixes: bool,

    /// Keep demo release groups
    #[arg(long)]
    pub include_demos: bool,

    /// Skip tracks whose title contains this text (repeatable, case-insensitive)
    #[arg(long = "exclude", value_name = "SUBSTRING", default_values_t = default_exclusions())]
    pub exclude: Vec<String>,

    /// Don't skip any tracks by title
    #[arg(long, conflicts_with = "exclude")]
    pub no_exclusions: bool,
}

/// `--release-source` values
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum SourceArg {
    /// Search album release groups, first release of each
    ReleaseGroups,
    /// Browse the artist's releases
    ArtistReleases,
}

impl From<SourceArg> for ReleaseSource {
    fn from(arg: SourceArg) -> Self {
        match arg {
            SourceArg::ReleaseGroups => ReleaseSource::ReleaseGroups,
            SourceArg::ArtistReleases => ReleaseSource::ArtistReleases,
        }
    }
}

fn default_exclusions() -> Vec<String> {
    DEFAULT_EXCLUSION_FILTERS.iter().map(|s| s.to_string()).collect()
}

impl Cli {
    /// Resolve the flags into a run configuration
    pub fn to_config(&self) -> CounterConfig {
        CounterConfig {
            musicbrainz_url: self.musicbrainz_url.clone(),
            lyrics_url: self.lyrics_url.clone(),
            release_source: self.release_source.into(),
            release_filter: ReleaseFilter {
                exclude_live: !self.include_live,
                exclude_compilation: !self.include_compilations,
                exclude_remix: !self.include_remixes,
                exclude_demo: !self.include_demos,
            },
            exclusion_filters: if self.no_exclusions {
                Vec::new()
            } else {
                self.exclude.clone()
            },
            ..Default::default()
        }
    }

    /// Log filter directive for the requested verbosity
    pub fn log_directive(&self) -> String {
        let level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };
        format!("avg_lyric_counter={}", level)
    }
}

/// Run the CLI: get the artist name, count, print.
pub fn run_command(cli: &Cli) -> anyhow::Result<()> {
    let rt = Runtime::new()?;

    let artist_name = match &cli.artist {
        Some(name) => name.clone(),
        None => {
            let stdin = std::io::stdin();
            prompt_artist_name(stdin.lock(), std::io::stdout())?
        }
    };

    cmd_count(&rt, &artist_name, cli.to_config())
}
