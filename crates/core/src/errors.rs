use thiserror::Error;

#[derive(Error, Debug)]
pub enum LingoError {
    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Uniqueness violation: {0}")]
    UniqueViolation(String),

    #[error("Referenced row does not exist: {0}")]
    InvalidReference(String),

    #[error("Deletion blocked by existing references: {0}")]
    DeletionProtected(String),

    #[error("Not implemented: {0}")]
    NotImplemented(String),

    #[error("Database error: {0}")]
    Database(#[from] eyre::Report),
}

pub type LingoResult<T> = Result<T, LingoError>;

/// Rejects `value` when it is longer than `max` characters.
pub fn check_max_len(field: &str, value: &str, max: usize) -> LingoResult<()> {
    let len = value.chars().count();
    if len > max {
        return Err(LingoError::Validation(format!(
            "{field} must be at most {max} characters, got {len}"
        )));
    }
    Ok(())
}

pub fn check_not_empty(field: &str, value: &str) -> LingoResult<()> {
    if value.trim().is_empty() {
        return Err(LingoError::Validation(format!("{field} must not be empty")));
    }
    Ok(())
}
