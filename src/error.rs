//! Error types for the digest pipeline.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for digest operations.
pub type Result<T> = std::result::Result<T, DigestError>;

/// Errors that can occur while building a digest.
#[derive(Error, Debug)]
pub enum DigestError {
    /// No prompt file argument was supplied.
    #[error("usage: {0} <prompt_file>")]
    Usage(String),

    /// The prompt file could not be read.
    #[error("Failed to read prompt file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A required credential is missing from the environment.
    #[error("Missing credential: {0} is not set")]
    MissingCredential(String),

    /// HTTP request failed.
    #[error("HTTP request failed")]
    Http(#[from] reqwest::Error),

    /// The upstream service reported an error.
    #[error("{service} API error: {message}")]
    Api { service: String, message: String },

    /// Failed to parse response.
    #[error("Failed to parse response: {0}")]
    Parse(String),

    /// The completion response carried no choices.
    #[error("Completion response contained no choices")]
    EmptyCompletion,

    /// URL parsing error.
    #[error("URL parsing error: {0}")]
    UrlParse(#[from] url::ParseError),
}

impl From<serde_json::Error> for DigestError {
    fn from(err: serde_json::Error) -> Self {
        DigestError::Parse(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_usage() {
        let err = DigestError::Usage("serp-digest".to_string());
        assert_eq!(err.to_string(), "usage: serp-digest <prompt_file>");
    }

    #[test]
    fn test_error_display_io() {
        let err = DigestError::Io {
            path: PathBuf::from("missing.txt"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        };
        assert_eq!(
            err.to_string(),
            "Failed to read prompt file missing.txt: not found"
        );
    }

    #[test]
    fn test_error_display_missing_credential() {
        let err = DigestError::MissingCredential("OPENAI_API_KEY".to_string());
        assert_eq!(err.to_string(), "Missing credential: OPENAI_API_KEY is not set");
    }

    #[test]
    fn test_error_display_api() {
        let err = DigestError::Api {
            service: "SerpAPI".to_string(),
            message: "Invalid API key.".to_string(),
        };
        assert_eq!(err.to_string(), "SerpAPI API error: Invalid API key.");
    }

    #[test]
    fn test_error_display_parse() {
        let err = DigestError::Parse("missing field `choices`".to_string());
        assert_eq!(
            err.to_string(),
            "Failed to parse response: missing field `choices`"
        );
    }

    #[test]
    fn test_error_display_empty_completion() {
        let err = DigestError::EmptyCompletion;
        assert_eq!(err.to_string(), "Completion response contained no choices");
    }

    #[test]
    fn test_error_display_http_does_not_repeat_source() {
        let reqwest_err = reqwest::Client::new().get("not a url").build().unwrap_err();
        let source_text = reqwest_err.to_string();
        let err = DigestError::from(reqwest_err);
        assert_eq!(err.to_string(), "HTTP request failed");
        let source = std::error::Error::source(&err).unwrap();
        assert_eq!(source.to_string(), source_text);
    }

    #[test]
    fn test_error_from_serde_json() {
        let json_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let err: DigestError = json_err.into();
        assert!(matches!(err, DigestError::Parse(_)));
    }

    #[test]
    fn test_error_from_url_parse() {
        let url_err = url::Url::parse("not a url").unwrap_err();
        let err: DigestError = url_err.into();
        assert!(err.to_string().starts_with("URL parsing error"));
    }

    #[test]
    fn test_error_debug() {
        let err = DigestError::EmptyCompletion;
        let debug_str = format!("{:?}", err);
        assert!(debug_str.contains("EmptyCompletion"));
    }
}
