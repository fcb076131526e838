use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::{check_max_len, check_not_empty, LingoResult};

pub const CODE_MAX_LEN: usize = 8;
pub const NAME_MAX_LEN: usize = 100;

/// A language we support, spoken or otherwise.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Language {
    pub id: Uuid,
    /// RFC 3066 for spoken languages where possible, ISO 639-3 for signed ones.
    pub code: String,
    /// Name in English, for the team's use.
    pub name_en: String,
    /// Name as users of the language would recognize it.
    pub name_self: String,
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.code)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateLanguageRequest {
    pub code: String,
    pub name_en: String,
    pub name_self: String,
}

impl CreateLanguageRequest {
    pub fn validate(&self) -> LingoResult<()> {
        validate_language_fields(&self.code, &self.name_en, &self.name_self)
    }
}

impl Language {
    pub fn validate(&self) -> LingoResult<()> {
        validate_language_fields(&self.code, &self.name_en, &self.name_self)
    }
}

fn validate_language_fields(code: &str, name_en: &str, name_self: &str) -> LingoResult<()> {
    check_not_empty("code", code)?;
    check_max_len("code", code, CODE_MAX_LEN)?;
    check_not_empty("name_en", name_en)?;
    check_max_len("name_en", name_en, NAME_MAX_LEN)?;
    check_not_empty("name_self", name_self)?;
    check_max_len("name_self", name_self, NAME_MAX_LEN)
}
