use c3lingo_core::errors::LingoResult;
use c3lingo_core::models::talk::{CreateTranslationRequest, Translation};
use c3lingo_core::registry::EntityKind;
use sqlx::SqliteExecutor;
use uuid::Uuid;

use crate::error::{map_read_error, map_write_error};
use crate::models::DbTranslation;
use crate::repositories::{delete_row, not_found};
use crate::DbPool;

const TRANSLATION_COLUMNS: &str =
    "id, talk_id, language_id, author_id, title, subtitle, abstract, description";

/// Fails with a uniqueness violation when the talk already has a translation
/// into the language.
pub async fn create_translation(
    pool: &DbPool,
    request: &CreateTranslationRequest,
) -> LingoResult<Translation> {
    let id = Uuid::new_v4();

    tracing::debug!(
        "Creating translation: id={}, talk_id={}, language_id={}",
        id, request.talk_id, request.language_id
    );

    let sql = format!(
        r#"
        INSERT INTO translations ({TRANSLATION_COLUMNS})
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
        RETURNING {TRANSLATION_COLUMNS}
        "#
    );
    let translation = sqlx::query_as::<_, DbTranslation>(&sql)
        .bind(id)
        .bind(request.talk_id)
        .bind(request.language_id)
        .bind(request.author_id)
        .bind(&request.text.title)
        .bind(&request.text.subtitle)
        .bind(&request.text.abstract_text)
        .bind(&request.text.description)
        .fetch_one(pool)
        .await
        .map_err(map_write_error)?;

    Ok(translation.into())
}

pub async fn get_translation_by_id(pool: &DbPool, id: Uuid) -> LingoResult<Option<Translation>> {
    let sql = format!("SELECT {TRANSLATION_COLUMNS} FROM translations WHERE id = $1");
    let translation = sqlx::query_as::<_, DbTranslation>(&sql)
        .bind(id)
        .fetch_optional(pool)
        .await
        .map_err(map_read_error)?;

    Ok(translation.map(Translation::from))
}

pub async fn find_translation(
    pool: &DbPool,
    talk_id: Uuid,
    language_id: Uuid,
) -> LingoResult<Option<Translation>> {
    let sql = format!(
        "SELECT {TRANSLATION_COLUMNS} FROM translations WHERE talk_id = $1 AND language_id = $2"
    );
    let translation = sqlx::query_as::<_, DbTranslation>(&sql)
        .bind(talk_id)
        .bind(language_id)
        .fetch_optional(pool)
        .await
        .map_err(map_read_error)?;

    Ok(translation.map(Translation::from))
}

pub async fn list_translations(executor: impl SqliteExecutor<'_>) -> LingoResult<Vec<Translation>> {
    let sql = format!("SELECT {TRANSLATION_COLUMNS} FROM translations ORDER BY title ASC");
    let translations = sqlx::query_as::<_, DbTranslation>(&sql)
        .fetch_all(executor)
        .await
        .map_err(map_read_error)?;

    Ok(translations.into_iter().map(Translation::from).collect())
}

pub async fn find_translations_for_talk(pool: &DbPool, talk_id: Uuid) -> LingoResult<Vec<Translation>> {
    let sql = format!(
        "SELECT {TRANSLATION_COLUMNS} FROM translations WHERE talk_id = $1 ORDER BY title ASC"
    );
    let translations = sqlx::query_as::<_, DbTranslation>(&sql)
        .bind(talk_id)
        .fetch_all(pool)
        .await
        .map_err(map_read_error)?;

    Ok(translations.into_iter().map(Translation::from).collect())
}

pub async fn find_translations_by_author(
    pool: &DbPool,
    author_id: Uuid,
) -> LingoResult<Vec<Translation>> {
    let sql = format!(
        "SELECT {TRANSLATION_COLUMNS} FROM translations WHERE author_id = $1 ORDER BY title ASC"
    );
    let translations = sqlx::query_as::<_, DbTranslation>(&sql)
        .bind(author_id)
        .fetch_all(pool)
        .await
        .map_err(map_read_error)?;

    Ok(translations.into_iter().map(Translation::from).collect())
}

pub async fn update_translation(pool: &DbPool, translation: &Translation) -> LingoResult<Translation> {
    let sql = format!(
        r#"
        UPDATE translations
        SET talk_id = $2, language_id = $3, author_id = $4, title = $5, subtitle = $6,
            abstract = $7, description = $8
        WHERE id = $1
        RETURNING {TRANSLATION_COLUMNS}
        "#
    );
    let updated = sqlx::query_as::<_, DbTranslation>(&sql)
        .bind(translation.id)
        .bind(translation.talk_id)
        .bind(translation.language_id)
        .bind(translation.author_id)
        .bind(&translation.text.title)
        .bind(&translation.text.subtitle)
        .bind(&translation.text.abstract_text)
        .bind(&translation.text.description)
        .fetch_optional(pool)
        .await
        .map_err(map_write_error)?
        .ok_or_else(|| not_found(EntityKind::Translation, translation.id))?;

    Ok(updated.into())
}

pub async fn delete_translation(pool: &DbPool, id: Uuid) -> LingoResult<()> {
    delete_row(pool, EntityKind::Translation, id).await
}
