use c3lingo_core::errors::LingoResult;
use c3lingo_core::models::language::Language;
use c3lingo_core::models::translator::{CreateTranslatorSpeaksRequest, TranslatorSpeaks};
use c3lingo_core::models::user::User;
use c3lingo_core::registry::EntityKind;
use sqlx::SqliteExecutor;
use uuid::Uuid;

use crate::error::{map_read_error, map_write_error};
use crate::models::{DbLanguage, DbTranslatorSpeaks, DbUser};
use crate::repositories::{delete_row, not_found};
use crate::DbPool;

/// Records that a user speaks a language. Recording the same pair twice is allowed.
pub async fn create_translator_speaks(
    pool: &DbPool,
    request: &CreateTranslatorSpeaksRequest,
) -> LingoResult<TranslatorSpeaks> {
    let id = Uuid::new_v4();

    tracing::debug!(
        "Creating translator_speaks: id={}, user_id={}, language_id={}",
        id, request.user_id, request.language_id
    );

    let speaks = sqlx::query_as::<_, DbTranslatorSpeaks>(
        r#"
        INSERT INTO translator_speaks (id, user_id, language_id)
        VALUES ($1, $2, $3)
        RETURNING id, user_id, language_id
        "#,
    )
    .bind(id)
    .bind(request.user_id)
    .bind(request.language_id)
    .fetch_one(pool)
    .await
    .map_err(map_write_error)?;

    Ok(speaks.into())
}

pub async fn get_translator_speaks_by_id(
    pool: &DbPool,
    id: Uuid,
) -> LingoResult<Option<TranslatorSpeaks>> {
    let speaks = sqlx::query_as::<_, DbTranslatorSpeaks>(
        r#"
        SELECT id, user_id, language_id
        FROM translator_speaks
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await
    .map_err(map_read_error)?;

    Ok(speaks.map(TranslatorSpeaks::from))
}

pub async fn list_translator_speaks(
    executor: impl SqliteExecutor<'_>,
) -> LingoResult<Vec<TranslatorSpeaks>> {
    let speaks = sqlx::query_as::<_, DbTranslatorSpeaks>(
        r#"
        SELECT id, user_id, language_id
        FROM translator_speaks
        "#,
    )
    .fetch_all(executor)
    .await
    .map_err(map_read_error)?;

    Ok(speaks.into_iter().map(TranslatorSpeaks::from).collect())
}

/// Distinct languages the user speaks, by code.
pub async fn find_languages_spoken_by_user(pool: &DbPool, user_id: Uuid) -> LingoResult<Vec<Language>> {
    let languages = sqlx::query_as::<_, DbLanguage>(
        r#"
        SELECT DISTINCT l.id, l.code, l.name_en, l.name_self
        FROM languages l
        JOIN translator_speaks ts ON ts.language_id = l.id
        WHERE ts.user_id = $1
        ORDER BY l.code ASC
        "#,
    )
    .bind(user_id)
    .fetch_all(pool)
    .await
    .map_err(map_read_error)?;

    Ok(languages.into_iter().map(Language::from).collect())
}

/// Distinct users speaking the language, by username.
pub async fn find_speakers_of_language(pool: &DbPool, language_id: Uuid) -> LingoResult<Vec<User>> {
    let users = sqlx::query_as::<_, DbUser>(
        r#"
        SELECT DISTINCT u.id, u.username, u.email, u.created_at
        FROM users u
        JOIN translator_speaks ts ON ts.user_id = u.id
        WHERE ts.language_id = $1
        ORDER BY u.username ASC
        "#,
    )
    .bind(language_id)
    .fetch_all(pool)
    .await
    .map_err(map_read_error)?;

    Ok(users.into_iter().map(User::from).collect())
}

pub async fn update_translator_speaks(
    pool: &DbPool,
    speaks: &TranslatorSpeaks,
) -> LingoResult<TranslatorSpeaks> {
    let updated = sqlx::query_as::<_, DbTranslatorSpeaks>(
        r#"
        UPDATE translator_speaks
        SET user_id = $2, language_id = $3
        WHERE id = $1
        RETURNING id, user_id, language_id
        "#,
    )
    .bind(speaks.id)
    .bind(speaks.user_id)
    .bind(speaks.language_id)
    .fetch_optional(pool)
    .await
    .map_err(map_write_error)?
    .ok_or_else(|| not_found(EntityKind::TranslatorSpeaks, speaks.id))?;

    Ok(updated.into())
}

pub async fn delete_translator_speaks(pool: &DbPool, id: Uuid) -> LingoResult<()> {
    delete_row(pool, EntityKind::TranslatorSpeaks, id).await
}
