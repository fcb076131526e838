pub mod booth;
pub mod conference;
pub mod language;
pub mod room;
pub mod shift;
pub mod shift_assignment;
pub mod talk;
pub mod translation;
pub mod translator;
pub mod translator_speaks;
pub mod user;

use c3lingo_core::errors::{LingoError, LingoResult};
use c3lingo_core::registry::EntityKind;
use uuid::Uuid;

use crate::error::{map_delete_error, map_read_error};
use crate::DbPool;

/// Deletes one row, applying the deletion policy declared in the schema.
pub(crate) async fn delete_row(pool: &DbPool, kind: EntityKind, id: Uuid) -> LingoResult<()> {
    tracing::debug!("Deleting {}: id={}", kind, id);

    let sql = format!("DELETE FROM {} WHERE id = $1", kind.table_name());
    let result = sqlx::query(&sql)
        .bind(id)
        .execute(pool)
        .await
        .map_err(map_delete_error)?;

    if result.rows_affected() == 0 {
        return Err(LingoError::NotFound(format!("{kind} {id}")));
    }
    Ok(())
}

pub(crate) async fn count_rows(pool: &DbPool, kind: EntityKind) -> LingoResult<i64> {
    let sql = format!("SELECT COUNT(*) FROM {}", kind.table_name());
    let count = sqlx::query_scalar::<_, i64>(&sql)
        .fetch_one(pool)
        .await
        .map_err(map_read_error)?;
    Ok(count)
}

pub(crate) fn not_found(kind: EntityKind, id: Uuid) -> LingoError {
    LingoError::NotFound(format!("{kind} {id}"))
}
