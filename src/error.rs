//! Error types and handling for the `VetRetire` application

use thiserror::Error;

/// Main error type for the `VetRetire` application
#[derive(Error, Debug)]
pub enum VetRetireError {
    /// Configuration-related errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Record store errors (open, read, write, encoding)
    #[error("Store error: {message}")]
    Store { message: String },

    /// Errors raised while importing a single CSV row
    #[error("Import error: {message}")]
    Import { message: String },

    /// Input validation errors
    #[error("Invalid input: {message}")]
    Validation { message: String },

    /// A file named on the command line does not exist
    #[error("File not found: {path}")]
    FileNotFound { path: String },

    /// I/O operation errors
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
}

impl VetRetireError {
    /// Create a new configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a new store error
    pub fn store<S: Into<String>>(message: S) -> Self {
        Self::Store {
            message: message.into(),
        }
    }

    /// Create a new import error
    pub fn import<S: Into<String>>(message: S) -> Self {
        Self::Import {
            message: message.into(),
        }
    }

    /// Create a new validation error
    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Create a new file-not-found error
    pub fn file_not_found<S: Into<String>>(path: S) -> Self {
        Self::FileNotFound { path: path.into() }
    }

    /// Get a user-friendly error message
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            VetRetireError::Config { .. } => {
                "Configuration error. Please check your config file and environment.".to_string()
            }
            VetRetireError::Store { .. } => {
                "Unable to read the location database. Run an import first or check the store path."
                    .to_string()
            }
            VetRetireError::Import { message } | VetRetireError::Validation { message } => {
                message.clone()
            }
            VetRetireError::FileNotFound { path } => format!("File not found: {path}"),
            VetRetireError::Io { .. } => {
                "File operation failed. Please check the path and file permissions.".to_string()
            }
        }
    }
}

impl From<fjall::Error> for VetRetireError {
    fn from(err: fjall::Error) -> Self {
        VetRetireError::store(err.to_string())
    }
}

impl From<postcard::Error> for VetRetireError {
    fn from(err: postcard::Error) -> Self {
        VetRetireError::store(format!("record encoding failed: {err}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let config_err = VetRetireError::config("bad port");
        assert!(matches!(config_err, VetRetireError::Config { .. }));

        let store_err = VetRetireError::store("locked");
        assert!(matches!(store_err, VetRetireError::Store { .. }));

        let import_err = VetRetireError::import("unknown state 'ZZ'");
        assert!(matches!(import_err, VetRetireError::Import { .. }));
    }

    #[test]
    fn test_user_messages() {
        let config_err = VetRetireError::config("test");
        assert!(config_err.user_message().contains("Configuration error"));

        let store_err = VetRetireError::store("test");
        assert!(store_err.user_message().contains("location database"));

        let import_err = VetRetireError::import("unknown state 'ZZ'");
        assert_eq!(import_err.user_message(), "unknown state 'ZZ'");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: VetRetireError = io_err.into();
        assert!(matches!(err, VetRetireError::Io { .. }));
    }
}
