use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::{check_max_len, check_not_empty, LingoResult};

pub const DECT_MAX_LEN: usize = 30;

/// A translation booth that contains a console.
///
/// The occupancy numbers are informational. Nothing limits how many
/// assignments a shift in this booth may collect.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Booth {
    pub id: Uuid,
    pub room_id: Uuid,
    /// e.g. "Hall A booth 1"
    pub name: String,
    /// How to get there: a c3nav link, free text, ...
    pub location: String,
    pub dect: String,
    /// How many translators we want in this booth for a typical talk.
    pub desired_occupancy: u32,
    /// How many translators fit in this booth.
    pub maximum_occupancy: u32,
}

impl Booth {
    pub fn validate(&self) -> LingoResult<()> {
        validate_booth_fields(&self.name, &self.location, &self.dect)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateBoothRequest {
    pub room_id: Uuid,
    pub name: String,
    pub location: String,
    #[serde(default)]
    pub dect: String,
    pub desired_occupancy: u32,
    pub maximum_occupancy: u32,
}

impl CreateBoothRequest {
    pub fn validate(&self) -> LingoResult<()> {
        validate_booth_fields(&self.name, &self.location, &self.dect)
    }
}

fn validate_booth_fields(name: &str, location: &str, dect: &str) -> LingoResult<()> {
    check_not_empty("name", name)?;
    check_not_empty("location", location)?;
    check_max_len("dect", dect, DECT_MAX_LEN)
}
