//! Error types.
//!
//! Every fallible operation in the crate returns [`WorkloadError`]. Errors are
//! handed to the immediate caller unchanged; nothing is retried or downgraded
//! to a default value.

use thiserror::Error;

use crate::validation::ValidationError;

/// Crate-wide result alias.
pub type Result<T, E = WorkloadError> = std::result::Result<T, E>;

/// Kind of record an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Entity {
    /// A faculty record.
    Faculty,
    /// A course record.
    Course,
}

impl std::fmt::Display for Entity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Faculty => f.write_str("faculty"),
            Self::Course => f.write_str("course"),
        }
    }
}

/// Main error type.
#[derive(Error, Debug)]
pub enum WorkloadError {
    /// A referenced faculty or course id does not exist.
    #[error("{entity} '{id}' not found")]
    NotFound { entity: Entity, id: String },

    /// A record with the same id is already stored.
    #[error("{entity} '{id}' already exists")]
    AlreadyExists { entity: Entity, id: String },

    /// The (faculty, course) pair is already assigned.
    #[error("course '{course_id}' is already assigned to faculty '{faculty_id}'")]
    AlreadyAssigned {
        faculty_id: String,
        course_id: String,
    },

    /// The (faculty, course) pair is not assigned.
    #[error("course '{course_id}' is not assigned to faculty '{faculty_id}'")]
    NotAssigned {
        faculty_id: String,
        course_id: String,
    },

    /// Malformed load-band table.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// A record failed constructor-time validation.
    #[error("invalid entity: {0}")]
    InvalidEntity(String),

    /// Stored catalog data is structurally inconsistent.
    #[error("invalid catalog: {} problem(s), first: {}", .0.len(), first_message(.0))]
    InvalidCatalog(Vec<ValidationError>),

    /// The storage backend failed.
    #[error(transparent)]
    Storage(#[from] StoreError),

    /// Configuration sources could not be read or extracted.
    #[error("config error: {0}")]
    Config(#[from] Box<figment::Error>),
}

impl WorkloadError {
    pub(crate) fn not_found(entity: Entity, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity,
            id: id.into(),
        }
    }

    pub(crate) fn already_exists(entity: Entity, id: impl Into<String>) -> Self {
        Self::AlreadyExists {
            entity,
            id: id.into(),
        }
    }
}

fn first_message(errors: &[ValidationError]) -> &str {
    errors.first().map(|e| e.message.as_str()).unwrap_or("none")
}

/// Failure reported by a [`Store`](crate::store::Store) backend.
///
/// Backends wrap their native error as the source.
#[derive(Error, Debug)]
#[error("storage backend failure: {message}")]
pub struct StoreError {
    /// What the backend was doing.
    pub message: String,
    /// Underlying backend error, if any.
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl StoreError {
    /// Creates a store error without an underlying cause.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            source: None,
        }
    }

    /// Creates a store error wrapping a backend error.
    pub fn with_source(
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::ValidationErrorKind;

    #[test]
    fn test_messages_name_the_identifier() {
        let err = WorkloadError::not_found(Entity::Course, "CS101");
        assert_eq!(err.to_string(), "course 'CS101' not found");

        let err = WorkloadError::AlreadyAssigned {
            faculty_id: "F1".into(),
            course_id: "CS101".into(),
        };
        assert!(err.to_string().contains("F1"));
        assert!(err.to_string().contains("CS101"));
    }

    #[test]
    fn test_invalid_catalog_message() {
        let err = WorkloadError::InvalidCatalog(vec![ValidationError {
            kind: ValidationErrorKind::DuplicateId,
            message: "Duplicate course ID: CS101".into(),
        }]);
        assert_eq!(
            err.to_string(),
            "invalid catalog: 1 problem(s), first: Duplicate course ID: CS101"
        );
    }

    #[test]
    fn test_store_error_source() {
        let io = std::io::Error::new(std::io::ErrorKind::Other, "disk gone");
        let err: WorkloadError = StoreError::with_source("writing faculty", io).into();
        assert_eq!(err.to_string(), "storage backend failure: writing faculty");
        let source = std::error::Error::source(&err);
        assert_eq!(source.map(|s| s.to_string()), Some("disk gone".to_string()));
    }
}
