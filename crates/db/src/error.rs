use c3lingo_core::errors::LingoError;
use sqlx::error::ErrorKind;

enum Violation {
    Unique,
    ForeignKey,
}

fn classify(err: &sqlx::Error) -> Option<Violation> {
    let sqlx::Error::Database(db_err) = err else {
        return None;
    };
    match db_err.kind() {
        ErrorKind::UniqueViolation => return Some(Violation::Unique),
        ErrorKind::ForeignKeyViolation => return Some(Violation::ForeignKey),
        _ => {}
    }
    // SQLite reports only the primary result code when extended codes are off.
    let message = db_err.message();
    if message.starts_with("UNIQUE constraint failed") {
        Some(Violation::Unique)
    } else if message.starts_with("FOREIGN KEY constraint failed") {
        Some(Violation::ForeignKey)
    } else {
        None
    }
}

/// Maps a failed insert or update. A foreign-key failure means a referenced row is missing.
pub fn map_write_error(err: sqlx::Error) -> LingoError {
    match classify(&err) {
        Some(Violation::Unique) => LingoError::UniqueViolation(err.to_string()),
        Some(Violation::ForeignKey) => LingoError::InvalidReference(err.to_string()),
        None => LingoError::Database(eyre::Report::new(err)),
    }
}

/// Maps a failed delete. A foreign-key failure means protected references still exist.
pub fn map_delete_error(err: sqlx::Error) -> LingoError {
    match classify(&err) {
        Some(Violation::ForeignKey) => LingoError::DeletionProtected(err.to_string()),
        Some(Violation::Unique) => LingoError::UniqueViolation(err.to_string()),
        None => LingoError::Database(eyre::Report::new(err)),
    }
}

/// Maps a failed read.
pub fn map_read_error(err: sqlx::Error) -> LingoError {
    LingoError::Database(eyre::Report::new(err))
}
