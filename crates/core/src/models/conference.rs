use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::{check_max_len, check_not_empty, LingoError, LingoResult};

pub const SHORTNAME_MAX_LEN: usize = 100;

/// A public event in which one or more talks will be translated, e.g. the 36C3.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Conference {
    pub id: Uuid,
    /// e.g. `36c3`
    pub shortname: String,
    /// e.g. "36th Chaos Communication Congress"
    pub name: String,
    pub image_url: String,
    pub start: Option<DateTime<Utc>>,
    pub end: Option<DateTime<Utc>>,
    /// Latest imported version of the Fahrplan.
    pub fahrplan_version: String,
}

impl fmt::Display for Conference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.shortname)
    }
}

impl Conference {
    pub fn validate(&self) -> LingoResult<()> {
        validate_conference_fields(&self.shortname, &self.name, self.start, self.end)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateConferenceRequest {
    pub shortname: String,
    pub name: String,
    #[serde(default)]
    pub image_url: String,
    pub start: Option<DateTime<Utc>>,
    pub end: Option<DateTime<Utc>>,
    #[serde(default)]
    pub fahrplan_version: String,
}

impl CreateConferenceRequest {
    pub fn validate(&self) -> LingoResult<()> {
        validate_conference_fields(&self.shortname, &self.name, self.start, self.end)
    }
}

fn validate_conference_fields(
    shortname: &str,
    name: &str,
    start: Option<DateTime<Utc>>,
    end: Option<DateTime<Utc>>,
) -> LingoResult<()> {
    check_not_empty("shortname", shortname)?;
    check_max_len("shortname", shortname, SHORTNAME_MAX_LEN)?;
    check_not_empty("name", name)?;
    if let (Some(start), Some(end)) = (start, end) {
        if end < start {
            return Err(LingoError::Validation(
                "conference end must not be before its start".to_string(),
            ));
        }
    }
    Ok(())
}

/// A room where talks are given during a conference, e.g. "Hall Ada".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    pub id: Uuid,
    pub conference_id: Uuid,
    pub name: String,
}

impl Room {
    pub fn validate(&self) -> LingoResult<()> {
        check_not_empty("name", &self.name)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateRoomRequest {
    pub conference_id: Uuid,
    pub name: String,
}

impl CreateRoomRequest {
    pub fn validate(&self) -> LingoResult<()> {
        check_not_empty("name", &self.name)
    }
}
