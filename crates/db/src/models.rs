use c3lingo_core::models::{
    booth::Booth,
    conference::{Conference, Room},
    language::Language,
    shift::{Shift, ShiftAssignment},
    talk::{Talk, TalkText, Translation},
    translator::{Translator, TranslatorSpeaks},
    user::User,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbLanguage {
    pub id: Uuid,
    pub code: String,
    pub name_en: String,
    pub name_self: String,
}

impl From<DbLanguage> for Language {
    fn from(row: DbLanguage) -> Self {
        Self {
            id: row.id,
            code: row.code,
            name_en: row.name_en,
            name_self: row.name_self,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbConference {
    pub id: Uuid,
    pub shortname: String,
    pub name: String,
    pub image_url: String,
    pub start: Option<DateTime<Utc>>,
    pub end: Option<DateTime<Utc>>,
    pub fahrplan_version: String,
}

impl From<DbConference> for Conference {
    fn from(row: DbConference) -> Self {
        Self {
            id: row.id,
            shortname: row.shortname,
            name: row.name,
            image_url: row.image_url,
            start: row.start,
            end: row.end,
            fahrplan_version: row.fahrplan_version,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbUser {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

impl From<DbUser> for User {
    fn from(row: DbUser) -> Self {
        Self {
            id: row.id,
            username: row.username,
            email: row.email,
            created_at: row.created_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbRoom {
    pub id: Uuid,
    pub conference_id: Uuid,
    pub name: String,
}

impl From<DbRoom> for Room {
    fn from(row: DbRoom) -> Self {
        Self {
            id: row.id,
            conference_id: row.conference_id,
            name: row.name,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbTalk {
    pub id: Uuid,
    pub conference_id: Uuid,
    pub fahrplan_id: String,
    pub fahrplan_guid: String,
    pub title: String,
    pub subtitle: String,
    #[sqlx(rename = "abstract")]
    pub abstract_text: String,
    pub description: String,
    pub logo_url: String,
    pub talk_type: String,
    pub speakers: String,
    pub language_id: Uuid,
    pub room_id: Uuid,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl From<DbTalk> for Talk {
    fn from(row: DbTalk) -> Self {
        Self {
            id: row.id,
            conference_id: row.conference_id,
            fahrplan_id: row.fahrplan_id,
            fahrplan_guid: row.fahrplan_guid,
            text: TalkText {
                title: row.title,
                subtitle: row.subtitle,
                abstract_text: row.abstract_text,
                description: row.description,
            },
            logo_url: row.logo_url,
            talk_type: row.talk_type,
            speakers: row.speakers,
            language_id: row.language_id,
            room_id: row.room_id,
            start: row.start,
            end: row.end,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbTranslation {
    pub id: Uuid,
    pub talk_id: Uuid,
    pub language_id: Uuid,
    pub author_id: Option<Uuid>,
    pub title: String,
    pub subtitle: String,
    #[sqlx(rename = "abstract")]
    pub abstract_text: String,
    pub description: String,
}

impl From<DbTranslation> for Translation {
    fn from(row: DbTranslation) -> Self {
        Self {
            id: row.id,
            talk_id: row.talk_id,
            language_id: row.language_id,
            author_id: row.author_id,
            text: TalkText {
                title: row.title,
                subtitle: row.subtitle,
                abstract_text: row.abstract_text,
                description: row.description,
            },
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbTranslator {
    pub id: Uuid,
    pub user_id: Uuid,
    pub confirmed: bool,
    pub bio: String,
    pub contact_info: String,
    pub secret_token: String,
}

impl From<DbTranslator> for Translator {
    fn from(row: DbTranslator) -> Self {
        Self {
            id: row.id,
            user_id: row.user_id,
            confirmed: row.confirmed,
            bio: row.bio,
            contact_info: row.contact_info,
            secret_token: row.secret_token,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbTranslatorSpeaks {
    pub id: Uuid,
    pub user_id: Uuid,
    pub language_id: Uuid,
}

impl From<DbTranslatorSpeaks> for TranslatorSpeaks {
    fn from(row: DbTranslatorSpeaks) -> Self {
        Self {
            id: row.id,
            user_id: row.user_id,
            language_id: row.language_id,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbBooth {
    pub id: Uuid,
    pub room_id: Uuid,
    pub name: String,
    pub location: String,
    pub dect: String,
    pub desired_occupancy: u32,
    pub maximum_occupancy: u32,
}

impl From<DbBooth> for Booth {
    fn from(row: DbBooth) -> Self {
        Self {
            id: row.id,
            room_id: row.room_id,
            name: row.name,
            location: row.location,
            dect: row.dect,
            desired_occupancy: row.desired_occupancy,
            maximum_occupancy: row.maximum_occupancy,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbShift {
    pub id: Uuid,
    pub booth_id: Uuid,
    pub talk_id: Uuid,
    pub language_id: Option<Uuid>,
}

impl From<DbShift> for Shift {
    fn from(row: DbShift) -> Self {
        Self {
            id: row.id,
            booth_id: row.booth_id,
            talk_id: row.talk_id,
            language_id: row.language_id,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbShiftAssignment {
    pub id: Uuid,
    pub shift_id: Uuid,
    pub user_id: Uuid,
    pub waitlisted: bool,
    pub freeloaded: bool,
    pub comment: String,
}

impl From<DbShiftAssignment> for ShiftAssignment {
    fn from(row: DbShiftAssignment) -> Self {
        Self {
            id: row.id,
            shift_id: row.shift_id,
            user_id: row.user_id,
            waitlisted: row.waitlisted,
            freeloaded: row.freeloaded,
            comment: row.comment,
        }
    }
}
