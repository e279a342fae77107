//! Integration tests for the end-to-end pipeline and its configuration.

use std::fs;
use std::thread;

use tempfile::TempDir;
use textprep::prelude::*;

#[test]
fn test_pipeline_end_to_end() -> Result<()> {
    let pipeline = TextPipeline::new()?;
    let config = PipelineConfig::default()
        .with_preprocess(PreprocessOptions::default().with_digits(DigitPolicy::Convert))
        .with_rejoin(true);

    let output = pipeline.run("The 2 wolves chased 3 geese across the fields.", &config)?;
    assert_eq!(
        output,
        Normalized::Text("two wolf chased three goose across field".to_string())
    );
    Ok(())
}

#[test]
fn test_pipeline_output_has_no_stopwords_or_uppercase() -> Result<()> {
    let pipeline = TextPipeline::new()?;
    let output = pipeline.run(
        "It Was The Best Of Times, It Was The Worst Of Times!",
        &PipelineConfig::default().with_normalize(None),
    )?;

    let stop_filter = StopFilter::new();
    let tokens = output.as_tokens().unwrap();
    assert_eq!(tokens, ["best", "times", "worst", "times"]);
    assert!(tokens.iter().all(|t| !stop_filter.is_stop_word(t)));
    Ok(())
}

#[test]
fn test_config_file_drives_pipeline() -> Result<()> {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("pipeline.json");
    fs::write(
        &path,
        r#"{
            "preprocess": {"digits": "remove"},
            "normalize": "stem",
            "rejoin": true
        }"#,
    )?;

    let config = PipelineConfig::from_file(&path)?;
    let output = TextPipeline::new()?.run("Connected 24 hours a day", &config)?;

    assert_eq!(output, Normalized::Text("connect hour dai".to_string()));
    Ok(())
}

#[test]
fn test_config_file_errors() {
    let temp_dir = TempDir::new().unwrap();

    match PipelineConfig::from_file(temp_dir.path().join("missing.json")) {
        Err(TextprepError::Io(_)) => {}
        other => panic!("expected Io error, got {other:?}"),
    }

    let path = temp_dir.path().join("bad_mode.json");
    fs::write(&path, r#"{"normalize": "bogus"}"#).unwrap();
    match PipelineConfig::from_file(&path) {
        Err(TextprepError::UnsupportedNormalizationMode(msg)) => {
            assert!(msg.contains("bogus"), "{msg}")
        }
        other => panic!("expected UnsupportedNormalizationMode, got {other:?}"),
    }

    let path = temp_dir.path().join("bad_digits.json");
    fs::write(&path, r#"{"preprocess": {"digits": "spell"}}"#).unwrap();
    match PipelineConfig::from_file(&path) {
        Err(TextprepError::InvalidOption(msg)) => assert!(msg.contains("spell"), "{msg}"),
        other => panic!("expected InvalidOption, got {other:?}"),
    }

    let path = temp_dir.path().join("malformed.json");
    fs::write(&path, r#"{"normalize": "stem""#).unwrap();
    match PipelineConfig::from_file(&path) {
        Err(TextprepError::Config(msg)) => assert!(msg.contains("malformed.json"), "{msg}"),
        other => panic!("expected Config error, got {other:?}"),
    }
}

#[test]
fn test_pipeline_is_shareable_across_threads() -> Result<()> {
    let pipeline = TextPipeline::new()?;
    let config = PipelineConfig::default().with_rejoin(true);
    let texts = ["Cats and dogs", "Mice in houses", "Children at play"];

    let outputs: Vec<Normalized> = thread::scope(|scope| {
        let handles: Vec<_> = texts
            .iter()
            .map(|text| {
                let (pipeline, config) = (&pipeline, &config);
                scope.spawn(move || pipeline.run(text, config))
            })
            .collect();
        handles
            .into_iter()
            .map(|handle| handle.join().unwrap())
            .collect::<Result<_>>()
    })?;

    assert_eq!(outputs, pipeline.run_many(&texts, &config)?);
    assert_eq!(
        outputs,
        vec![
            Normalized::Text("cat dog".to_string()),
            Normalized::Text("mouse house".to_string()),
            Normalized::Text("child play".to_string()),
        ]
    );
    Ok(())
}

#[test]
fn test_empty_inputs() -> Result<()> {
    let pipeline = TextPipeline::new()?;

    assert_eq!(
        pipeline.run("", &PipelineConfig::default())?,
        Normalized::Tokens(Vec::new())
    );
    assert!(pipeline.run_many::<&str>(&[], &PipelineConfig::default())?.is_empty());
    Ok(())
}
