//! Command line argument parsing for the textprep CLI using clap.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::normalize::NormalizationMode;
use crate::preprocess::{DigitPolicy, PreprocessOptions};

/// textprep - clean, tokenize and normalize natural-language text
#[derive(Parser, Debug, Clone)]
#[command(name = "textprep")]
#[command(about = "Clean, tokenize and normalize natural-language text")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct TextprepArgs {
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

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl TextprepArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n + 1,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Lower-case text and strip punctuation and digits
    Preprocess(PreprocessArgs),

    /// Split text into tokens, optionally dropping stop words
    Tokenize(TokenizeArgs),

    /// Lemmatize or stem whitespace-separated tokens
    Normalize(NormalizeArgs),

    /// Run the full preprocess, tokenize and normalize pipeline
    Run(RunArgs),
}

/// Where the input text comes from. Defaults to stdin.
#[derive(Args, Debug, Clone)]
pub struct InputArgs {
    /// Text to process
    #[arg(short, long, conflicts_with = "input")]
    pub text: Option<String>,

    /// File to read the text from
    #[arg(short, long, value_name = "FILE")]
    pub input: Option<PathBuf>,
}

/// Character-level switches shared by `preprocess` and `run`.
#[derive(Args, Debug, Clone)]
pub struct PreprocessFlags {
    /// Do not lower-case the text
    #[arg(long)]
    pub keep_case: bool,

    /// Do not remove punctuation
    #[arg(long)]
    pub keep_punctuation: bool,

    /// What to do with numbers: none, remove or convert
    #[arg(long, default_value = "none")]
    pub digits: DigitPolicy,
}

impl PreprocessFlags {
    /// Build the preprocessing options selected by these flags.
    pub fn options(&self) -> PreprocessOptions {
        PreprocessOptions::default()
            .with_lower(!self.keep_case)
            .with_remove_punctuation(!self.keep_punctuation)
            .with_digits(self.digits)
    }
}

/// Arguments for the preprocess command
#[derive(Parser, Debug, Clone)]
pub struct PreprocessArgs {
    #[command(flatten)]
    pub input: InputArgs,

    #[command(flatten)]
    pub flags: PreprocessFlags,
}

/// Arguments for the tokenize command
#[derive(Parser, Debug, Clone)]
pub struct TokenizeArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Keep stop words
    #[arg(long)]
    pub keep_stopwords: bool,
}

/// Arguments for the normalize command
#[derive(Parser, Debug, Clone)]
pub struct NormalizeArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Reduction to apply: lemmatize or stem
    #[arg(short, long, default_value = "lemmatize")]
    pub mode: NormalizationMode,

    /// Join the tokens back into one line
    #[arg(long)]
    pub rejoin: bool,
}

/// Arguments for the run command
#[derive(Parser, Debug, Clone)]
pub struct RunArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Pipeline configuration file (JSON); overrides the flags below
    #[arg(short, long, value_name = "CONFIG_FILE")]
    pub config: Option<PathBuf>,

    #[command(flatten)]
    pub flags: PreprocessFlags,

    /// Keep stop words
    #[arg(long)]
    pub keep_stopwords: bool,

    /// Reduction to apply: lemmatize or stem
    #[arg(short, long, default_value = "lemmatize")]
    pub mode: NormalizationMode,

    /// Skip lemmatization and stemming
    #[arg(long, conflicts_with = "mode")]
    pub no_reduce: bool,

    /// Join the tokens back into one line
    #[arg(long)]
    pub rejoin: bool,

    /// Treat every input line as a separate document
    #[arg(long)]
    pub lines: bool,
}

/// Output format
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}
