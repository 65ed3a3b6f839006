use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("API request failed: {0}")]
    Network(#[from] reqwest::Error),

    #[error("response body is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unexpected response shape: {message}")]
    Shape { message: String },

    #[error("record {index} has no string \"agency\" field")]
    FieldMissing { index: usize },

    #[error("failed to write report: {0}")]
    Output(#[from] std::io::Error),
}

impl ReportError {
    /// Process exit code for a failed run. Always non-zero.
    pub fn exit_code(&self) -> i32 {
        match self {
            ReportError::Network(_) => 2,
            ReportError::Json(_) | ReportError::Shape { .. } | ReportError::FieldMissing { .. } => {
                3
            }
            ReportError::Output(_) => 4,
        }
    }
}

pub type Result<T> = std::result::Result<T, ReportError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes_are_non_zero() {
        let shape = ReportError::Shape {
            message: "expected a JSON array of records, got an object".to_string(),
        };
        let missing = ReportError::FieldMissing { index: 3 };

        assert_eq!(shape.exit_code(), 3);
        assert_eq!(missing.exit_code(), 3);
    }

    #[test]
    fn test_field_missing_names_the_record() {
        let err = ReportError::FieldMissing { index: 7 };
        assert_eq!(err.to_string(), "record 7 has no string \"agency\" field");
    }
}
