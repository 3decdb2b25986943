//! Errors raised while decoding settings snapshots.
//!
//! Classification and labeling themselves never fail; only the JSON envelope
//! around the records can be rejected.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("malformed snapshot: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unknown snapshot source '{0}' (expected 'descriptors' or 'native')")]
    UnknownSource(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    type TestResult = Result<(), Box<dyn std::error::Error>>;

    #[test]
    fn unknown_source_names_the_input() {
        let err = SnapshotError::UnknownSource("xml".to_string());
        assert!(err.to_string().contains("'xml'"));
    }

    #[test]
    fn json_errors_keep_the_parser_message() -> TestResult {
        let result: Result<serde_json::Value, _> = serde_json::from_str("{");
        let Err(e) = result else {
            return Err("truncated JSON parsed".into());
        };
        let err = SnapshotError::from(e);
        assert!(matches!(err, SnapshotError::Json(_)));
        assert!(err.to_string().starts_with("malformed snapshot: EOF"));
        Ok(())
    }
}
