use c3lingo_core::errors::LingoResult;
use c3lingo_core::models::language::{CreateLanguageRequest, Language};
use c3lingo_core::registry::EntityKind;
use sqlx::SqliteExecutor;
use uuid::Uuid;

use crate::error::{map_read_error, map_write_error};
use crate::models::DbLanguage;
use crate::repositories::{delete_row, not_found};
use crate::DbPool;

pub async fn create_language(pool: &DbPool, request: &CreateLanguageRequest) -> LingoResult<Language> {
    request.validate()?;
    let id = Uuid::new_v4();

    tracing::debug!("Creating language: id={}, code={}", id, request.code);

    let language = sqlx::query_as::<_, DbLanguage>(
        r#"
        INSERT INTO languages (id, code, name_en, name_self)
        VALUES ($1, $2, $3, $4)
        RETURNING id, code, name_en, name_self
        "#,
    )
    .bind(id)
    .bind(&request.code)
    .bind(&request.name_en)
    .bind(&request.name_self)
    .fetch_one(pool)
    .await
    .map_err(map_write_error)?;

    Ok(language.into())
}

pub async fn get_language_by_id(pool: &DbPool, id: Uuid) -> LingoResult<Option<Language>> {
    let language = sqlx::query_as::<_, DbLanguage>(
        r#"
        SELECT id, code, name_en, name_self
        FROM languages
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await
    .map_err(map_read_error)?;

    Ok(language.map(Language::from))
}

/// Language codes are not unique, so this may match several rows.
pub async fn find_languages_by_code(pool: &DbPool, code: &str) -> LingoResult<Vec<Language>> {
    let languages = sqlx::query_as::<_, DbLanguage>(
        r#"
        SELECT id, code, name_en, name_self
        FROM languages
        WHERE code = $1
        ORDER BY name_en ASC
        "#,
    )
    .bind(code)
    .fetch_all(pool)
    .await
    .map_err(map_read_error)?;

    Ok(languages.into_iter().map(Language::from).collect())
}

pub async fn list_languages(executor: impl SqliteExecutor<'_>) -> LingoResult<Vec<Language>> {
    let languages = sqlx::query_as::<_, DbLanguage>(
        r#"
        SELECT id, code, name_en, name_self
        FROM languages
        ORDER BY code ASC
        "#,
    )
    .fetch_all(executor)
    .await
    .map_err(map_read_error)?;

    Ok(languages.into_iter().map(Language::from).collect())
}

pub async fn update_language(pool: &DbPool, language: &Language) -> LingoResult<Language> {
    language.validate()?;

    let updated = sqlx::query_as::<_, DbLanguage>(
        r#"
        UPDATE languages
        SET code = $2, name_en = $3, name_self = $4
        WHERE id = $1
        RETURNING id, code, name_en, name_self
        "#,
    )
    .bind(language.id)
    .bind(&language.code)
    .bind(&language.name_en)
    .bind(&language.name_self)
    .fetch_optional(pool)
    .await
    .map_err(map_write_error)?
    .ok_or_else(|| not_found(EntityKind::Language, language.id))?;

    Ok(updated.into())
}

/// Fails while any talk, translation, shift or spoken-language record uses it.
pub async fn delete_language(pool: &DbPool, id: Uuid) -> LingoResult<()> {
    delete_row(pool, EntityKind::Language, id).await
}
