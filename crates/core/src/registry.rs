//! Entity kinds exposed for generic management.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::LingoError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    Language,
    Conference,
    User,
    Room,
    Talk,
    Translation,
    Translator,
    TranslatorSpeaks,
    Booth,
    Shift,
    ShiftAssignment,
}

impl EntityKind {
    /// Every registered kind, referenced rows before the rows referencing them.
    pub const ALL: [EntityKind; 11] = [
        EntityKind::Language,
        EntityKind::Conference,
        EntityKind::User,
        EntityKind::Room,
        EntityKind::Talk,
        EntityKind::Translation,
        EntityKind::Translator,
        EntityKind::TranslatorSpeaks,
        EntityKind::Booth,
        EntityKind::Shift,
        EntityKind::ShiftAssignment,
    ];

    pub fn table_name(self) -> &'static str {
        match self {
            EntityKind::Language => "languages",
            EntityKind::Conference => "conferences",
            EntityKind::User => "users",
            EntityKind::Room => "rooms",
            EntityKind::Talk => "talks",
            EntityKind::Translation => "translations",
            EntityKind::Translator => "translators",
            EntityKind::TranslatorSpeaks => "translator_speaks",
            EntityKind::Booth => "booths",
            EntityKind::Shift => "shifts",
            EntityKind::ShiftAssignment => "shift_assignments",
        }
    }

    pub fn singular_name(self) -> &'static str {
        match self {
            EntityKind::Language => "language",
            EntityKind::Conference => "conference",
            EntityKind::User => "user",
            EntityKind::Room => "room",
            EntityKind::Talk => "talk",
            EntityKind::Translation => "translation",
            EntityKind::Translator => "translator",
            EntityKind::TranslatorSpeaks => "translator_speaks",
            EntityKind::Booth => "booth",
            EntityKind::Shift => "shift",
            EntityKind::ShiftAssignment => "shift_assignment",
        }
    }

    pub fn plural_name(self) -> &'static str {
        match self {
            EntityKind::Language => "Languages",
            EntityKind::Conference => "Conferences",
            EntityKind::User => "Users",
            EntityKind::Room => "Rooms",
            EntityKind::Talk => "Talks",
            EntityKind::Translation => "Translations",
            EntityKind::Translator => "Translators",
            EntityKind::TranslatorSpeaks => "Translator speaks",
            EntityKind::Booth => "Booths",
            EntityKind::Shift => "Shifts",
            EntityKind::ShiftAssignment => "Shift assignments",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.singular_name())
    }
}

impl FromStr for EntityKind {
    type Err = LingoError;

    /// Accepts the singular or the table name, case-insensitively, with `-` or `_`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace('-', "_");
        EntityKind::ALL
            .into_iter()
            .find(|kind| kind.singular_name() == normalized || kind.table_name() == normalized)
            .ok_or_else(|| LingoError::Validation(format!("unknown entity kind: {s}")))
    }
}

/// One row of an entity listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminEntry {
    pub id: Uuid,
    pub label: String,
}
