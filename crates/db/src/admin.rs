//! Generic listings of every registered entity kind.

use std::collections::HashMap;

use c3lingo_core::errors::LingoResult;
use c3lingo_core::labels;
use c3lingo_core::models::{
    conference::{Conference, Room},
    language::Language,
    shift::LanguageOrAny,
    talk::Talk,
    user::User,
};
use c3lingo_core::registry::{AdminEntry, EntityKind};
use sqlx::SqliteConnection;
use uuid::Uuid;

use crate::error::map_read_error;
use crate::repositories::{
    booth, conference, count_rows, language, not_found, room, shift, shift_assignment, talk,
    translation, translator, translator_speaks, user,
};
use crate::DbPool;

pub async fn count_entries(pool: &DbPool, kind: EntityKind) -> LingoResult<i64> {
    count_rows(pool, kind).await
}

/// Row counts of every kind, in registration order.
pub async fn overview(pool: &DbPool) -> LingoResult<Vec<(EntityKind, i64)>> {
    let mut counts = Vec::with_capacity(EntityKind::ALL.len());
    for kind in EntityKind::ALL {
        counts.push((kind, count_rows(pool, kind).await?));
    }
    Ok(counts)
}

struct Lookup<T> {
    kind: EntityKind,
    rows: HashMap<Uuid, T>,
}

impl<T> Lookup<T> {
    fn new(kind: EntityKind, rows: Vec<T>, id: impl Fn(&T) -> Uuid) -> Self {
        let rows = rows.into_iter().map(|row| (id(&row), row)).collect();
        Self { kind, rows }
    }

    fn get(&self, id: Uuid) -> LingoResult<&T> {
        self.rows.get(&id).ok_or_else(|| not_found(self.kind, id))
    }
}

async fn languages(conn: &mut SqliteConnection) -> LingoResult<Lookup<Language>> {
    let rows = language::list_languages(conn).await?;
    Ok(Lookup::new(EntityKind::Language, rows, |row| row.id))
}

async fn conferences(conn: &mut SqliteConnection) -> LingoResult<Lookup<Conference>> {
    let rows = conference::list_conferences(conn).await?;
    Ok(Lookup::new(EntityKind::Conference, rows, |row| row.id))
}

async fn users(conn: &mut SqliteConnection) -> LingoResult<Lookup<User>> {
    let rows = user::list_users(conn).await?;
    Ok(Lookup::new(EntityKind::User, rows, |row| row.id))
}

async fn rooms(conn: &mut SqliteConnection) -> LingoResult<Lookup<Room>> {
    let rows = room::list_rooms(conn).await?;
    Ok(Lookup::new(EntityKind::Room, rows, |row| row.id))
}

async fn talks(conn: &mut SqliteConnection) -> LingoResult<Lookup<Talk>> {
    let rows = talk::list_talks(conn).await?;
    Ok(Lookup::new(EntityKind::Talk, rows, |row| row.id))
}

fn talk_label(conferences: &Lookup<Conference>, talk: &Talk) -> LingoResult<String> {
    Ok(labels::talk_label(conferences.get(talk.conference_id)?, talk))
}

fn room_label(conferences: &Lookup<Conference>, room: &Room) -> LingoResult<String> {
    Ok(labels::room_label(conferences.get(room.conference_id)?, room))
}

fn target_language(
    languages: &Lookup<Language>,
    language_id: Option<Uuid>,
) -> LingoResult<LanguageOrAny> {
    let language = language_id
        .map(|id| languages.get(id).cloned())
        .transpose()?;
    Ok(LanguageOrAny::from(language))
}

/// Every row of `kind` with its display label.
///
/// Referenced and referencing tables are read in one transaction.
pub async fn list_entries(pool: &DbPool, kind: EntityKind) -> LingoResult<Vec<AdminEntry>> {
    tracing::debug!("Listing admin entries for {}", kind);

    let mut tx = pool.begin().await.map_err(map_read_error)?;
    let conn = &mut *tx;

    let entries: Vec<AdminEntry> = match kind {
        EntityKind::Language => language::list_languages(&mut *conn)
            .await?
            .into_iter()
            .map(|row| AdminEntry {
                id: row.id,
                label: row.to_string(),
            })
            .collect(),
        EntityKind::Conference => conference::list_conferences(&mut *conn)
            .await?
            .into_iter()
            .map(|row| AdminEntry {
                id: row.id,
                label: row.to_string(),
            })
            .collect(),
        EntityKind::User => user::list_users(&mut *conn)
            .await?
            .into_iter()
            .map(|row| AdminEntry {
                id: row.id,
                label: row.to_string(),
            })
            .collect(),
        EntityKind::Room => {
            let conferences = conferences(&mut *conn).await?;
            room::list_rooms(&mut *conn)
                .await?
                .into_iter()
                .map(|row| -> LingoResult<AdminEntry> {
                    Ok(AdminEntry {
                        id: row.id,
                        label: room_label(&conferences, &row)?,
                    })
                })
                .collect::<LingoResult<_>>()?
        }
        EntityKind::Talk => {
            let conferences = conferences(&mut *conn).await?;
            talk::list_talks(&mut *conn)
                .await?
                .into_iter()
                .map(|row| -> LingoResult<AdminEntry> {
                    Ok(AdminEntry {
                        id: row.id,
                        label: talk_label(&conferences, &row)?,
                    })
                })
                .collect::<LingoResult<_>>()?
        }
        EntityKind::Translation => {
            let conferences = conferences(&mut *conn).await?;
            let languages = languages(&mut *conn).await?;
            let talks = talks(&mut *conn).await?;
            translation::list_translations(&mut *conn)
                .await?
                .into_iter()
                .map(|row| -> LingoResult<AdminEntry> {
                    let talk_label = talk_label(&conferences, talks.get(row.talk_id)?)?;
                    Ok(AdminEntry {
                        id: row.id,
                        label: labels::translation_label(
                            &talk_label,
                            languages.get(row.language_id)?,
                        ),
                    })
                })
                .collect::<LingoResult<_>>()?
        }
        EntityKind::Translator => {
            let users = users(&mut *conn).await?;
            translator::list_translators(&mut *conn)
                .await?
                .into_iter()
                .map(|row| -> LingoResult<AdminEntry> {
                    Ok(AdminEntry {
                        id: row.id,
                        label: labels::translator_label(users.get(row.user_id)?),
                    })
                })
                .collect::<LingoResult<_>>()?
        }
        EntityKind::TranslatorSpeaks => {
            let users = users(&mut *conn).await?;
            let languages = languages(&mut *conn).await?;
            translator_speaks::list_translator_speaks(&mut *conn)
                .await?
                .into_iter()
                .map(|row| -> LingoResult<AdminEntry> {
                    Ok(AdminEntry {
                        id: row.id,
                        label: labels::translator_speaks_label(
                            users.get(row.user_id)?,
                            languages.get(row.language_id)?,
                        ),
                    })
                })
                .collect::<LingoResult<_>>()?
        }
        EntityKind::Booth => {
            let conferences = conferences(&mut *conn).await?;
            let rooms = rooms(&mut *conn).await?;
            booth::list_booths(&mut *conn)
                .await?
                .into_iter()
                .map(|row| -> LingoResult<AdminEntry> {
                    let room_label = room_label(&conferences, rooms.get(row.room_id)?)?;
                    Ok(AdminEntry {
                        id: row.id,
                        label: labels::booth_label(&room_label, &row),
                    })
                })
                .collect::<LingoResult<_>>()?
        }
        EntityKind::Shift => {
            let conferences = conferences(&mut *conn).await?;
            let languages = languages(&mut *conn).await?;
            let talks = talks(&mut *conn).await?;
            shift::list_shifts(&mut *conn)
                .await?
                .into_iter()
                .map(|row| -> LingoResult<AdminEntry> {
                    let talk = talks.get(row.talk_id)?;
                    let talk_label = talk_label(&conferences, talk)?;
                    let target = target_language(&languages, row.language_id)?;
                    Ok(AdminEntry {
                        id: row.id,
                        label: labels::shift_label(
                            &talk_label,
                            languages.get(talk.language_id)?,
                            &target,
                        ),
                    })
                })
                .collect::<LingoResult<_>>()?
        }
        EntityKind::ShiftAssignment => {
            let conferences = conferences(&mut *conn).await?;
            let languages = languages(&mut *conn).await?;
            let talks = talks(&mut *conn).await?;
            let users = users(&mut *conn).await?;
            let shift_rows = shift::list_shifts(&mut *conn).await?;
            let shifts = Lookup::new(EntityKind::Shift, shift_rows, |row| row.id);
            shift_assignment::list_shift_assignments(&mut *conn)
                .await?
                .into_iter()
                .map(|row| -> LingoResult<AdminEntry> {
                    let shift = shifts.get(row.shift_id)?;
                    let talk = talks.get(shift.talk_id)?;
                    let talk_label = talk_label(&conferences, talk)?;
                    let target = target_language(&languages, shift.language_id)?;
                    Ok(AdminEntry {
                        id: row.id,
                        label: labels::shift_assignment_label(
                            users.get(row.user_id)?,
                            languages.get(talk.language_id)?,
                            &target,
                            &talk_label,
                        ),
                    })
                })
                .collect::<LingoResult<_>>()?
        }
    };

    tx.commit().await.map_err(map_read_error)?;
    Ok(entries)
}
