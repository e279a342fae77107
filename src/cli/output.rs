//! Output formatting for CLI results.

use std::fmt;

use serde::Serialize;

use crate::cli::args::{OutputFormat, TextprepArgs};
use crate::error::Result;
use crate::normalize::Normalized;

/// Result of the `preprocess` command.
#[derive(Debug, Clone, Serialize)]
pub struct PreprocessResult {
    pub text: String,
}

impl fmt::Display for PreprocessResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Result of the `tokenize` command.
#[derive(Debug, Clone, Serialize)]
pub struct TokensResult {
    pub tokens: Vec<String>,
    pub count: usize,
}

impl TokensResult {
    pub fn new(tokens: Vec<String>) -> Self {
        let count = tokens.len();
        TokensResult { tokens, count }
    }
}

impl fmt::Display for TokensResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, token) in self.tokens.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            f.write_str(token)?;
        }
        Ok(())
    }
}

/// Result of the `normalize` and `run` commands, one entry per document.
#[derive(Debug, Clone, Serialize)]
pub struct NormalizedResult {
    pub documents: Vec<Normalized>,
}

impl fmt::Display for NormalizedResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, document) in self.documents.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{document}")?;
        }
        Ok(())
    }
}

/// Output a result in the requested format.
pub fn output_result<T>(message: &str, result: &T, args: &TextprepArgs) -> Result<()>
where
    T: Serialize + fmt::Display,
{
    match args.output_format {
        OutputFormat::Human => output_human(message, result, args),
        OutputFormat::Json => output_json(result, args),
    }
}

/// Output in human-readable format.
fn output_human<T: fmt::Display>(message: &str, result: &T, args: &TextprepArgs) -> Result<()> {
    if args.verbosity() > 1 {
        println!("{message}");
        println!();
    }

    let rendered = result.to_string();
    if !rendered.is_empty() {
        println!("{rendered}");
    }
    Ok(())
}

/// Output in JSON format.
fn output_json<T: Serialize>(result: &T, args: &TextprepArgs) -> Result<()> {
    let json = if args.pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };
    println!("{json}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokens_result() {
        let result = TokensResult::new(vec!["quick".to_string(), "fox".to_string()]);

        assert_eq!(result.count, 2);
        assert_eq!(result.to_string(), "quick\nfox");
        assert_eq!(
            serde_json::to_string(&result).unwrap(),
            r#"{"tokens":["quick","fox"],"count":2}"#
        );
    }

    #[test]
    fn test_normalized_result() {
        let result = NormalizedResult {
            documents: vec![
                Normalized::Tokens(vec!["cat".to_string(), "mat".to_string()]),
                Normalized::Text("dog run".to_string()),
            ],
        };

        assert_eq!(result.to_string(), "cat mat\ndog run");
        assert_eq!(
            serde_json::to_string(&result).unwrap(),
            r#"{"documents":[["cat","mat"],"dog run"]}"#
        );
    }
}
