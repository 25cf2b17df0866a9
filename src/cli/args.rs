//! Command line argument parsing for the textlens CLI using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

/// textlens - plain-text analysis from the command line
#[derive(Parser, Debug, Clone)]
#[command(name = "textlens")]
#[command(about = "Count, rank, extract and compare plain text")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct TextLensArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human", global = true)]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,

    /// Analysis configuration file (JSON)
    #[arg(short, long, value_name = "CONFIG_FILE", env = "TEXTLENS_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl TextLensArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Word, sentence, paragraph, line and character counts
    Stats(StatsArgs),

    /// Word or n-gram frequency table
    Frequency(FrequencyArgs),

    /// Keyword density of one keyword, or a ranked keyword table
    Density(DensityArgs),

    /// Extract URLs, hashtags, mentions, emails and emoji
    Extract(ExtractArgs),

    /// Normalize line endings and redundant whitespace
    Normalize(InputArgs),

    /// Similarity percentage and edit distance of two texts
    Similarity(SimilarityArgs),

    /// Remove English stop words
    #[command(name = "stopwords")]
    StopWords(InputArgs),
}

/// A single text input: a file, or stdin when omitted or `-`.
#[derive(Parser, Debug, Clone)]
pub struct InputArgs {
    /// Input file (reads stdin when omitted or `-`)
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,
}

/// Arguments for text statistics
#[derive(Parser, Debug, Clone)]
pub struct StatsArgs {
    /// Input files, analysed in parallel (reads stdin when none are given)
    #[arg(value_name = "FILES")]
    pub files: Vec<PathBuf>,

    /// Reading rate in words per minute
    #[arg(long)]
    pub reading_wpm: Option<u32>,

    /// Speaking rate in words per minute
    #[arg(long)]
    pub speaking_wpm: Option<u32>,
}

/// Arguments for frequency tables
#[derive(Parser, Debug, Clone)]
pub struct FrequencyArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Words per phrase (1 = single words)
    #[arg(short, long)]
    pub ngram: Option<usize>,

    /// Keep case distinctions
    #[arg(long, conflicts_with = "case_insensitive")]
    pub case_sensitive: bool,

    /// Fold case even when the config file enables case sensitivity
    #[arg(long)]
    pub case_insensitive: bool,

    /// Number of rows to show (0 = all)
    #[arg(short, long)]
    pub top: Option<usize>,
}

impl FrequencyArgs {
    /// Case sensitivity after applying the command line overrides.
    pub fn case_sensitive_or(&self, configured: bool) -> bool {
        if self.case_sensitive {
            true
        } else if self.case_insensitive {
            false
        } else {
            configured
        }
    }
}

/// Arguments for keyword density
#[derive(Parser, Debug, Clone)]
pub struct DensityArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Keyword or phrase to measure; without it a ranked table is shown
    #[arg(short, long)]
    pub keyword: Option<String>,

    /// Words per phrase for the ranked table
    #[arg(short, long)]
    pub ngram: Option<usize>,

    /// Keep stop words in the ranked table
    #[arg(long, conflicts_with = "exclude_stop_words")]
    pub include_stop_words: bool,

    /// Drop stop words even when the config file keeps them
    #[arg(long)]
    pub exclude_stop_words: bool,

    /// Shortest word kept in the ranked table
    #[arg(long)]
    pub min_word_length: Option<usize>,

    /// Number of rows to show (0 = all)
    #[arg(short, long)]
    pub top: Option<usize>,
}

impl DensityArgs {
    /// Whether stop words stay in the table after the command line overrides.
    pub fn include_stop_words_or(&self, configured: bool) -> bool {
        if self.include_stop_words {
            true
        } else if self.exclude_stop_words {
            false
        } else {
            configured
        }
    }
}

/// Arguments for pattern extraction
#[derive(Parser, Debug, Clone)]
pub struct ExtractArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// What to extract
    #[arg(short, long, default_value = "all")]
    pub kind: ExtractKind,
}

/// Arguments for comparing two texts
#[derive(Parser, Debug, Clone)]
pub struct SimilarityArgs {
    /// First text (or file path with --files)
    #[arg(value_name = "A")]
    pub a: String,

    /// Second text (or file path with --files)
    #[arg(value_name = "B")]
    pub b: String,

    /// Treat A and B as file paths
    #[arg(long)]
    pub files: bool,
}

/// Output format options
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputFormat {
    /// Human-readable format
    Human,
    /// JSON format
    Json,
}

/// Pattern kinds for the extract command
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExtractKind {
    Urls,
    Hashtags,
    Mentions,
    Emails,
    Emojis,
    All,
}
