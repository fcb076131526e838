use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::language::Language;

/// Target language of a shift, or `*` when any language is accepted.
pub const ANY_LANGUAGE: &str = "*";

/// An opportunity for translators to translate a given talk in a given booth.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shift {
    pub id: Uuid,
    pub booth_id: Uuid,
    pub talk_id: Uuid,
    /// Empty for booths shared between languages based on availability.
    pub language_id: Option<Uuid>,
}

impl Shift {
    pub fn accepts_any_language(&self) -> bool {
        self.language_id.is_none()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateShiftRequest {
    pub booth_id: Uuid,
    pub talk_id: Uuid,
    pub language_id: Option<Uuid>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "language", rename_all = "snake_case")]
pub enum LanguageOrAny {
    Language(Language),
    Any,
}

impl LanguageOrAny {
    pub fn language(&self) -> Option<&Language> {
        match self {
            LanguageOrAny::Language(language) => Some(language),
            LanguageOrAny::Any => None,
        }
    }

    pub fn is_any(&self) -> bool {
        matches!(self, LanguageOrAny::Any)
    }
}

impl From<Option<Language>> for LanguageOrAny {
    fn from(language: Option<Language>) -> Self {
        match language {
            Some(language) => LanguageOrAny::Language(language),
            None => LanguageOrAny::Any,
        }
    }
}

impl fmt::Display for LanguageOrAny {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LanguageOrAny::Language(language) => fmt::Display::fmt(language, f),
            LanguageOrAny::Any => f.write_str(ANY_LANGUAGE),
        }
    }
}

/// A user volunteering for a shift.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftAssignment {
    pub id: Uuid,
    pub shift_id: Uuid,
    pub user_id: Uuid,
    /// Not yet confirmed for the shift.
    pub waitlisted: bool,
    pub freeloaded: bool,
    pub comment: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateShiftAssignmentRequest {
    pub shift_id: Uuid,
    pub user_id: Uuid,
    #[serde(default = "default_waitlisted")]
    pub waitlisted: bool,
    #[serde(default)]
    pub freeloaded: bool,
    #[serde(default)]
    pub comment: String,
}

impl CreateShiftAssignmentRequest {
    /// A new waitlisted sign-up without comment.
    pub fn new(shift_id: Uuid, user_id: Uuid) -> Self {
        Self {
            shift_id,
            user_id,
            waitlisted: default_waitlisted(),
            freeloaded: false,
            comment: String::new(),
        }
    }
}

fn default_waitlisted() -> bool {
    true
}
