use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading, grouping or rendering a menu
#[derive(Error, Debug)]
pub enum MenuError {
    /// Failed to read the menu source file
    #[error("Failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to write a rendered menu
    #[error("Failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A row has fewer fields than the menu format requires
    #[error("Malformed row at line {line_number}: expected at least 4 fields, found {fields} in {line:?}")]
    MalformedRow {
        line_number: usize,
        line: String,
        fields: usize,
    },

    /// Builder configuration error
    #[error("Builder error: {0}")]
    BuilderError(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] config::ConfigError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_malformed_row_message() {
        let err = MenuError::MalformedRow {
            line_number: 3,
            line: "Lunch,Meat,12pm".to_string(),
            fields: 3,
        };
        let message = err.to_string();
        assert!(message.contains("line 3"));
        assert!(message.contains("found 3"));
        assert!(message.contains("Lunch,Meat,12pm"));
    }

    #[test]
    fn test_read_error_names_path() {
        let err = MenuError::Read {
            path: PathBuf::from("missing.csv"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        };
        assert!(err.to_string().contains("missing.csv"));
    }
}
