//! Project-specific error types.

use crate::domain::foundation::{DomainError, ErrorCode, ProjectId, ValidationError};

/// Project errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProjectError {
    /// Project does not exist or is not visible to the caller.
    NotFound(ProjectId),
    /// Caller does not own the project.
    Forbidden,
    /// The caller has no profile to own projects.
    NoProfile,
    /// Validation failed.
    ValidationFailed { field: String, message: String },
    /// Backend / storage error.
    Infrastructure(String),
}

impl ProjectError {
    pub fn not_found(id: ProjectId) -> Self {
        ProjectError::NotFound(id)
    }

    pub fn forbidden() -> Self {
        ProjectError::Forbidden
    }

    pub fn infrastructure(message: impl Into<String>) -> Self {
        ProjectError::Infrastructure(message.into())
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            ProjectError::NotFound(_) => ErrorCode::ProjectNotFound,
            ProjectError::Forbidden => ErrorCode::Forbidden,
            ProjectError::NoProfile => ErrorCode::ProfileNotFound,
            ProjectError::ValidationFailed { .. } => ErrorCode::ValidationFailed,
            ProjectError::Infrastructure(_) => ErrorCode::BackendError,
        }
    }

    pub fn message(&self) -> String {
        match self {
            ProjectError::NotFound(id) => format!("Project not found: {}", id),
            ProjectError::Forbidden => "Permission denied".to_string(),
            ProjectError::NoProfile => "Create a profile before adding projects".to_string(),
            ProjectError::ValidationFailed { field, message } => {
                format!("Validation failed for '{}': {}", field, message)
            }
            ProjectError::Infrastructure(msg) => format!("Error: {}", msg),
        }
    }
}

impl std::fmt::Display for ProjectError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for ProjectError {}

impl From<ValidationError> for ProjectError {
    fn from(err: ValidationError) -> Self {
        ProjectError::ValidationFailed {
            field: err.field().to_string(),
            message: err.to_string(),
        }
    }
}

impl From<DomainError> for ProjectError {
    fn from(err: DomainError) -> Self {
        match err.code {
            ErrorCode::Forbidden | ErrorCode::Unauthorized => ProjectError::Forbidden,
            ErrorCode::ProfileNotFound => ProjectError::NoProfile,
            ErrorCode::ValidationFailed | ErrorCode::EmptyField | ErrorCode::InvalidFormat => {
                ProjectError::ValidationFailed {
                    field: err
                        .details
                        .get("field")
                        .cloned()
                        .unwrap_or_else(|| "unknown".to_string()),
                    message: err.message,
                }
            }
            _ => ProjectError::Infrastructure(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_message_includes_id() {
        let id = ProjectId::new();
        let err = ProjectError::not_found(id);
        assert_eq!(err.code(), ErrorCode::ProjectNotFound);
        assert!(err.message().contains(&id.to_string()));
    }

    #[test]
    fn domain_forbidden_maps_to_forbidden() {
        let err: ProjectError = DomainError::new(ErrorCode::Forbidden, "no").into();
        assert_eq!(err, ProjectError::Forbidden);
    }
}
