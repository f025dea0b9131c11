//! Clap argument definitions for the `tam` CLI.

use std::{num::NonZeroUsize, path::PathBuf};

use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};

/// Top-level CLI options.
#[derive(Parser)]
#[command(name = "tam")]
#[command(about = "Extract adverb-noun and prefix-noun contexts from parsed corpora")]
pub struct Cli {
    /// Log verbosity (-v for progress, -vv for debug details); RUST_LOG overrides
    #[arg(short = 'v', long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

/// Which construction `tam contexts` extracts.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtractionType {
    /// Hyphenated prefix-noun compounds, keyed by prefix
    Compound,
    /// Determiner-anchored adverb-noun ngrams, keyed by adverb
    Ngram,
}

/// Arguments for `tam contexts`.
#[derive(Args, Debug, Clone)]
pub struct ContextsCommand {
    /// Construction to extract
    #[arg(long = "type", value_enum)]
    pub kind: ExtractionType,

    /// Manifest of corpus files (source, file id, path) [default: from config]
    #[arg(short = 'i', long)]
    pub input_files: Option<PathBuf>,

    /// Directory receiving one <key>.contexts.tsv per prefix or adverb [default: from config]
    #[arg(short = 'o', long)]
    pub output_folder: Option<PathBuf>,

    /// Noun frequency list [default: from config]
    #[arg(long)]
    pub accepted_nouns: Option<PathBuf>,

    /// Prefix frequency list, used with --type compound [default: from config]
    #[arg(long)]
    pub accepted_prefs: Option<PathBuf>,

    /// Adverb frequency list, used with --type ngram [default: from config]
    #[arg(long)]
    pub accepted_adverbs: Option<PathBuf>,

    /// Minimum count for a noun to be accepted [default: 20]
    #[arg(long)]
    pub nouns_threshold: Option<u64>,

    /// Minimum count for a prefix to be accepted [default: 20]
    #[arg(long)]
    pub prefs_threshold: Option<u64>,

    /// Minimum count for an adverb to be accepted [default: 20]
    #[arg(long)]
    pub adverbs_threshold: Option<u64>,

    /// Context tokens kept around a match [default: 20]
    #[arg(short = 'c', long)]
    pub context_width: Option<NonZeroUsize>,

    /// Maximum simultaneously open output files, 0 for no limit [default: 0]
    #[arg(long)]
    pub max_open_sinks: Option<usize>,
}

/// Arguments for `tam frequencies`.
#[derive(Args, Debug, Clone)]
pub struct FrequenciesCommand {
    /// Manifest of corpus files (source, file id, path) [default: from config]
    #[arg(short = 'i', long)]
    pub input_files_list: Option<PathBuf>,

    /// Directory receiving one <SOURCE>_<file_id>.nouns.tsv per corpus file [default: from config]
    #[arg(short = 'o', long)]
    pub output_folder: Option<PathBuf>,
}

/// Arguments for `tam merge`.
#[derive(Args, Debug, Clone)]
pub struct MergeCommand {
    /// Directory holding the frequency lists to merge [default: from config]
    #[arg(short = 'i', long)]
    pub input_folder: Option<PathBuf>,

    /// Only merge files whose name contains this text (case-insensitive)
    #[arg(short = 'p', long, default_value = "NOUNS")]
    pub pattern: String,

    /// Directory receiving the merged list [default: directory of the accepted nouns list]
    #[arg(short = 'o', long)]
    pub output_folder: Option<PathBuf>,

    /// Name of the merged list
    #[arg(long, default_value = "accepted.tsv")]
    pub output_filename: String,
}

/// Arguments for `tam init`.
#[derive(Args, Debug, Clone)]
pub struct InitCommand {
    /// Create global ~/.tam.toml instead
    #[arg(long)]
    pub global: bool,

    /// Overwrite existing configuration file
    #[arg(long)]
    pub force: bool,
}

/// Supported `tam` subcommands.
#[derive(Subcommand)]
pub enum Commands {
    /// Extract compound or ngram contexts from the corpus files of a manifest
    Contexts(ContextsCommand),

    /// Count noun frequencies per corpus file
    Frequencies(FrequenciesCommand),

    /// Sum several frequency lists into one
    Merge(MergeCommand),

    /// Initialize tam configuration in current directory
    Init(InitCommand),

    /// Show effective configuration settings
    Config,

    /// Validate configuration and list the manifest's corpus files
    Check,
}
