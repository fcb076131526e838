use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::{check_max_len, check_not_empty, LingoError, LingoResult};

pub const FAHRPLAN_ID_MAX_LEN: usize = 100;

/// The translatable properties of a talk.
///
/// A [`Talk`] carries them untranslated as imported from the Fahrplan, a
/// [`Translation`] carries them in another language.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TalkText {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub subtitle: String,
    #[serde(default)]
    pub abstract_text: String,
    #[serde(default)]
    pub description: String,
}

/// A single presentation given at a conference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Talk {
    pub id: Uuid,
    pub conference_id: Uuid,
    pub fahrplan_id: String,
    pub fahrplan_guid: String,
    pub text: TalkText,
    pub logo_url: String,
    pub talk_type: String,
    /// Comma-separated list of speakers, as found in the Fahrplan.
    pub speakers: String,
    pub language_id: Uuid,
    pub room_id: Uuid,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl Talk {
    pub fn validate(&self) -> LingoResult<()> {
        validate_talk_fields(&self.fahrplan_id, &self.fahrplan_guid, self.start, self.end)
    }

    pub fn speaker_list(&self) -> Vec<&str> {
        self.speakers
            .split(',')
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .collect()
    }

    /// The media.ccc.de slug of this talk.
    ///
    /// Always fails: the slug would need a conference acronym and a
    /// parametrized talk name, and neither is modelled.
    pub fn slug(&self) -> LingoResult<String> {
        Err(LingoError::NotImplemented(format!(
            "slug for talk {} needs a conference acronym and a parametrized name",
            self.fahrplan_id
        )))
    }

    pub fn watch_url(&self) -> LingoResult<String> {
        let slug = self.slug()?;
        Ok(format!("https://media.ccc.de/v/{slug}"))
    }

    /// Always fails: the slides location is keyed by a talk guid that is
    /// not resolved anywhere.
    pub fn slides_url(&self) -> LingoResult<String> {
        Err(LingoError::NotImplemented(format!(
            "slides url for talk {}",
            self.fahrplan_id
        )))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTalkRequest {
    pub conference_id: Uuid,
    pub fahrplan_id: String,
    pub fahrplan_guid: String,
    #[serde(default)]
    pub text: TalkText,
    #[serde(default)]
    pub logo_url: String,
    #[serde(default)]
    pub talk_type: String,
    #[serde(default)]
    pub speakers: String,
    pub language_id: Uuid,
    pub room_id: Uuid,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl CreateTalkRequest {
    pub fn validate(&self) -> LingoResult<()> {
        validate_talk_fields(&self.fahrplan_id, &self.fahrplan_guid, self.start, self.end)
    }
}

fn validate_talk_fields(
    fahrplan_id: &str,
    fahrplan_guid: &str,
    start: DateTime<Utc>,
    end: DateTime<Utc>,
) -> LingoResult<()> {
    check_not_empty("fahrplan_id", fahrplan_id)?;
    check_max_len("fahrplan_id", fahrplan_id, FAHRPLAN_ID_MAX_LEN)?;
    check_not_empty("fahrplan_guid", fahrplan_guid)?;
    check_max_len("fahrplan_guid", fahrplan_guid, FAHRPLAN_ID_MAX_LEN)?;
    if end < start {
        return Err(LingoError::Validation(format!(
            "talk {fahrplan_id} ends before it starts"
        )));
    }
    Ok(())
}

/// A translation of the text of a talk into another language.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Translation {
    pub id: Uuid,
    pub talk_id: Uuid,
    pub language_id: Uuid,
    /// Cleared when the author's account is deleted.
    pub author_id: Option<Uuid>,
    pub text: TalkText,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTranslationRequest {
    pub talk_id: Uuid,
    pub language_id: Uuid,
    pub author_id: Option<Uuid>,
    #[serde(default)]
    pub text: TalkText,
}
