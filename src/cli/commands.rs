//! Command implementations for the textprep CLI.

use std::fs;
use std::io::{self, Read};

use log::{debug, info};

use crate::cli::args::*;
use crate::cli::output::*;
use crate::error::Result;
use crate::normalize::Normalizer;
use crate::pipeline::{PipelineConfig, TextPipeline};
use crate::preprocess::Preprocessor;

/// Execute a CLI command.
pub fn execute_command(args: TextprepArgs) -> Result<()> {
    match &args.command {
        Command::Preprocess(preprocess_args) => preprocess_text(preprocess_args, &args),
        Command::Tokenize(tokenize_args) => tokenize_text(tokenize_args, &args),
        Command::Normalize(normalize_args) => normalize_tokens(normalize_args, &args),
        Command::Run(run_args) => run_pipeline(run_args, &args),
    }
}

/// Read the input text from `--text`, `--input` or stdin.
pub fn read_input(input: &InputArgs) -> Result<String> {
    if let Some(text) = &input.text {
        return Ok(text.clone());
    }

    if let Some(path) = &input.input {
        info!("Reading input from {}", path.display());
        return Ok(fs::read_to_string(path)?);
    }

    debug!("Reading input from stdin");
    let mut buffer = String::new();
    io::stdin().read_to_string(&mut buffer)?;
    Ok(buffer)
}

/// Clean the input text.
fn preprocess_text(args: &PreprocessArgs, cli_args: &TextprepArgs) -> Result<()> {
    let text = read_input(&args.input)?;
    let options = args.flags.options();
    debug!("Preprocess options: {options:?}");

    let result = PreprocessResult {
        text: Preprocessor::new()?.preprocess(&text, &options)?,
    };

    output_result("Preprocessed text:", &result, cli_args)
}

/// Split the input text into tokens.
fn tokenize_text(args: &TokenizeArgs, cli_args: &TextprepArgs) -> Result<()> {
    let text = read_input(&args.input)?;
    let tokens = Normalizer::new().tokenize_and_filter(&text, !args.keep_stopwords)?;
    info!("Produced {} tokens", tokens.len());

    output_result("Tokens:", &TokensResult::new(tokens), cli_args)
}

/// Reduce whitespace-separated tokens.
fn normalize_tokens(args: &NormalizeArgs, cli_args: &TextprepArgs) -> Result<()> {
    let text = read_input(&args.input)?;
    let tokens: Vec<String> = text.split_whitespace().map(str::to_string).collect();
    info!("Normalizing {} tokens with mode {}", tokens.len(), args.mode);

    let normalized = Normalizer::new().normalize(&tokens, args.mode, args.rejoin)?;
    let result = NormalizedResult {
        documents: vec![normalized],
    };

    output_result("Normalized tokens:", &result, cli_args)
}

/// Run the full pipeline.
fn run_pipeline(args: &RunArgs, cli_args: &TextprepArgs) -> Result<()> {
    let config = pipeline_config(args)?;
    debug!("Pipeline config: {config:?}");

    let text = read_input(&args.input)?;
    let pipeline = TextPipeline::new()?;

    let documents = if args.lines {
        let lines: Vec<&str> = text.lines().collect();
        info!("Processing {} documents", lines.len());
        pipeline.run_many(&lines, &config)?
    } else {
        vec![pipeline.run(&text, &config)?]
    };

    output_result("Pipeline output:", &NormalizedResult { documents }, cli_args)
}

/// Build the pipeline configuration from `--config` or the command flags.
fn pipeline_config(args: &RunArgs) -> Result<PipelineConfig> {
    if let Some(path) = &args.config {
        info!("Loading pipeline config from {}", path.display());
        return PipelineConfig::from_file(path);
    }

    Ok(PipelineConfig::default()
        .with_preprocess(args.flags.options())
        .with_remove_stopwords(!args.keep_stopwords)
        .with_normalize((!args.no_reduce).then_some(args.mode))
        .with_rejoin(args.rejoin))
}
