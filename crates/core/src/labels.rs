//! Human-readable labels for listings.
//!
//! Labels of dependent rows embed the label of the row they reference, so
//! callers pass the already resolved parents in.

use crate::models::{
    booth::Booth,
    conference::{Conference, Room},
    language::Language,
    shift::LanguageOrAny,
    talk::Talk,
    user::User,
};

pub fn room_label(conference: &Conference, room: &Room) -> String {
    format!("{conference}/{}", room.name)
}

pub fn talk_label(conference: &Conference, talk: &Talk) -> String {
    format!("{conference}/{}", talk.text.title)
}

pub fn translation_label(talk_label: &str, language: &Language) -> String {
    format!("{talk_label} ({language})")
}

pub fn translator_label(user: &User) -> String {
    user.to_string()
}

pub fn translator_speaks_label(user: &User, language: &Language) -> String {
    format!("{user}: {language}")
}

pub fn booth_label(room_label: &str, booth: &Booth) -> String {
    format!("{room_label}/{}", booth.name)
}

pub fn shift_label(talk_label: &str, source: &Language, target: &LanguageOrAny) -> String {
    format!("{talk_label} ({source} -> {target})")
}

/// `{user} {source} -> {target} {talk}`. An unrestricted shift prints `*` as its
/// target, matching [`shift_label`], not `None`.
pub fn shift_assignment_label(
    user: &User,
    source: &Language,
    target: &LanguageOrAny,
    talk_label: &str,
) -> String {
    format!("{user} {source} -> {target} {talk_label}")
}
