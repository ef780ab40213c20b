use std::io;
use std::path::PathBuf;

/// Reasons a parsed document is not an acceptable service-account credential.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum SchemaError {
    #[error("Missing required fields: {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),
    #[error("Invalid type: {0} (expected 'service_account')")]
    InvalidType(String),
}

#[derive(Debug, thiserror::Error)]
pub enum EncodeError {
    #[error("Service account file not found: {}", .path.display())]
    NotFound { path: PathBuf },
    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Invalid JSON file: {0}")]
    InvalidFormat(String),
    #[error(transparent)]
    Schema(#[from] SchemaError),
}

pub type Result<T> = std::result::Result<T, EncodeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_are_comma_joined() {
        let err = SchemaError::MissingFields(vec!["project_id", "client_email"]);
        assert_eq!(
            err.to_string(),
            "Missing required fields: project_id, client_email"
        );
    }

    #[test]
    fn schema_error_displays_through_encode_error() {
        let err: EncodeError = SchemaError::InvalidType("user".into()).into();
        assert_eq!(
            err.to_string(),
            "Invalid type: user (expected 'service_account')"
        );
    }

    #[test]
    fn not_found_names_the_path() {
        let err = EncodeError::NotFound {
            path: PathBuf::from("missing/key.json"),
        };
        assert!(err.to_string().contains("missing/key.json"));
    }
}
