use mongodb::error::{Error as MongoError, ErrorKind, WriteFailure};
use std::fmt;

/// MongoDB server code for `createUser` on an existing user.
pub const USER_ALREADY_EXISTS: i32 = 51003;
/// MongoDB server code for a unique index violation.
pub const DUPLICATE_KEY: i32 = 11000;
/// MongoDB server code for `create` on an existing collection.
pub const NAMESPACE_EXISTS: i32 = 48;

#[derive(Debug)]
pub enum AppError {
    Database(MongoError),
    DuplicateUser { user: String, source: MongoError },
    DuplicateKey { collection: String, source: MongoError },
    Config(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Database(err) => write!(f, "Database error: {}", err),
            AppError::DuplicateUser { user, source } => {
                write!(f, "Duplicate user: {} already exists ({})", user, source)
            }
            AppError::DuplicateKey { collection, source } => {
                write!(f, "Duplicate key in {}: {}", collection, source)
            }
            AppError::Config(msg) => write!(f, "Configuration error: {}", msg),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Database(source)
            | AppError::DuplicateUser { source, .. }
            | AppError::DuplicateKey { source, .. } => Some(source),
            AppError::Config(_) => None,
        }
    }
}

impl From<MongoError> for AppError {
    fn from(err: MongoError) -> Self {
        AppError::Database(err)
    }
}

/// Extracts the server error code from a command or write failure.
pub fn error_code(err: &MongoError) -> Option<i32> {
    match err.kind.as_ref() {
        ErrorKind::Command(command_error) => Some(command_error.code),
        ErrorKind::Write(WriteFailure::WriteError(write_error)) => Some(write_error.code),
        ErrorKind::Write(WriteFailure::WriteConcernError(concern_error)) => {
            Some(concern_error.code)
        }
        _ => None,
    }
}

pub fn is_duplicate_key(err: &MongoError) -> bool {
    error_code(err) == Some(DUPLICATE_KEY)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    fn driver_error(msg: &str) -> MongoError {
        MongoError::from(std::io::Error::other(msg.to_string()))
    }

    #[test]
    fn test_display_includes_driver_message() {
        let err = AppError::DuplicateUser {
            user: "mern_user".to_string(),
            source: driver_error("User \"mern_user@mern_app\" already exists"),
        };
        let rendered = err.to_string();
        assert!(rendered.starts_with("Duplicate user: mern_user already exists"));
        assert!(rendered.contains("User \"mern_user@mern_app\" already exists"));

        let err = AppError::DuplicateKey {
            collection: "users".to_string(),
            source: driver_error("E11000 duplicate key error index: email_1"),
        };
        assert!(err.to_string().starts_with("Duplicate key in users: "));
        assert!(err.to_string().contains("E11000"));

        let err = AppError::Config("bad uri".to_string());
        assert_eq!(err.to_string(), "Configuration error: bad uri");
    }

    #[test]
    fn test_duplicate_errors_keep_driver_source() {
        let err = AppError::DuplicateUser {
            user: "mern_user".to_string(),
            source: driver_error("user exists"),
        };
        let source = err.source().expect("duplicate user keeps the driver error");
        assert!(source.to_string().contains("user exists"));

        let err = AppError::DuplicateKey {
            collection: "users".to_string(),
            source: driver_error("dup key"),
        };
        let source = err.source().expect("duplicate key keeps the driver error");
        assert!(source.to_string().contains("dup key"));
    }

    #[test]
    fn test_config_error_has_no_source() {
        assert!(AppError::Config("bad uri".to_string()).source().is_none());
    }

    #[test]
    fn test_error_code_absent_for_io_errors() {
        assert_eq!(error_code(&driver_error("connection reset")), None);
        assert!(!is_duplicate_key(&driver_error("connection reset")));
    }
}
