use c3lingo_core::errors::LingoResult;
use c3lingo_core::models::shift::{CreateShiftRequest, LanguageOrAny, Shift};
use c3lingo_core::registry::EntityKind;
use sqlx::SqliteExecutor;
use uuid::Uuid;

use crate::error::{map_read_error, map_write_error};
use crate::models::DbShift;
use crate::repositories::language::get_language_by_id;
use crate::repositories::{delete_row, not_found};
use crate::DbPool;

pub async fn create_shift(pool: &DbPool, request: &CreateShiftRequest) -> LingoResult<Shift> {
    let id = Uuid::new_v4();

    tracing::debug!(
        "Creating shift: id={}, booth_id={}, talk_id={}, language_id={:?}",
        id, request.booth_id, request.talk_id, request.language_id
    );

    let shift = sqlx::query_as::<_, DbShift>(
        r#"
        INSERT INTO shifts (id, booth_id, talk_id, language_id)
        VALUES ($1, $2, $3, $4)
        RETURNING id, booth_id, talk_id, language_id
        "#,
    )
    .bind(id)
    .bind(request.booth_id)
    .bind(request.talk_id)
    .bind(request.language_id)
    .fetch_one(pool)
    .await
    .map_err(map_write_error)?;

    Ok(shift.into())
}

pub async fn get_shift_by_id(pool: &DbPool, id: Uuid) -> LingoResult<Option<Shift>> {
    let shift = sqlx::query_as::<_, DbShift>(
        r#"
        SELECT id, booth_id, talk_id, language_id
        FROM shifts
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await
    .map_err(map_read_error)?;

    Ok(shift.map(Shift::from))
}

/// Shifts in talk start order.
pub async fn list_shifts(executor: impl SqliteExecutor<'_>) -> LingoResult<Vec<Shift>> {
    let shifts = sqlx::query_as::<_, DbShift>(
        r#"
        SELECT s.id, s.booth_id, s.talk_id, s.language_id
        FROM shifts s
        JOIN talks t ON t.id = s.talk_id
        ORDER BY t.start ASC
        "#,
    )
    .fetch_all(executor)
    .await
    .map_err(map_read_error)?;

    Ok(shifts.into_iter().map(Shift::from).collect())
}

pub async fn find_shifts_for_talk(pool: &DbPool, talk_id: Uuid) -> LingoResult<Vec<Shift>> {
    let shifts = sqlx::query_as::<_, DbShift>(
        r#"
        SELECT id, booth_id, talk_id, language_id
        FROM shifts
        WHERE talk_id = $1
        "#,
    )
    .bind(talk_id)
    .fetch_all(pool)
    .await
    .map_err(map_read_error)?;

    Ok(shifts.into_iter().map(Shift::from).collect())
}

pub async fn find_shifts_for_booth(pool: &DbPool, booth_id: Uuid) -> LingoResult<Vec<Shift>> {
    let shifts = sqlx::query_as::<_, DbShift>(
        r#"
        SELECT s.id, s.booth_id, s.talk_id, s.language_id
        FROM shifts s
        JOIN talks t ON t.id = s.talk_id
        WHERE s.booth_id = $1
        ORDER BY t.start ASC
        "#,
    )
    .bind(booth_id)
    .fetch_all(pool)
    .await
    .map_err(map_read_error)?;

    Ok(shifts.into_iter().map(Shift::from).collect())
}

/// The target language of the shift, or [`LanguageOrAny::Any`] when it has none.
pub async fn language_or_any(pool: &DbPool, shift: &Shift) -> LingoResult<LanguageOrAny> {
    let Some(language_id) = shift.language_id else {
        return Ok(LanguageOrAny::Any);
    };
    let language = get_language_by_id(pool, language_id)
        .await?
        .ok_or_else(|| not_found(EntityKind::Language, language_id))?;
    Ok(LanguageOrAny::Language(language))
}

pub async fn update_shift(pool: &DbPool, shift: &Shift) -> LingoResult<Shift> {
    let updated = sqlx::query_as::<_, DbShift>(
        r#"
        UPDATE shifts
        SET booth_id = $2, talk_id = $3, language_id = $4
        WHERE id = $1
        RETURNING id, booth_id, talk_id, language_id
        "#,
    )
    .bind(shift.id)
    .bind(shift.booth_id)
    .bind(shift.talk_id)
    .bind(shift.language_id)
    .fetch_optional(pool)
    .await
    .map_err(map_write_error)?
    .ok_or_else(|| not_found(EntityKind::Shift, shift.id))?;

    Ok(updated.into())
}

/// Also deletes every assignment to the shift.
pub async fn delete_shift(pool: &DbPool, id: Uuid) -> LingoResult<()> {
    delete_row(pool, EntityKind::Shift, id).await
}
