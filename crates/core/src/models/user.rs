use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::{check_max_len, check_not_empty, LingoResult};

pub const USERNAME_MAX_LEN: usize = 150;
pub const EMAIL_MAX_LEN: usize = 254;

/// An account that can author translations and volunteer for shifts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.username)
    }
}

impl User {
    pub fn validate(&self) -> LingoResult<()> {
        validate_user_fields(&self.username, &self.email)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateUserRequest {
    pub username: String,
    #[serde(default)]
    pub email: String,
}

impl CreateUserRequest {
    pub fn validate(&self) -> LingoResult<()> {
        validate_user_fields(&self.username, &self.email)
    }
}

fn validate_user_fields(username: &str, email: &str) -> LingoResult<()> {
    check_not_empty("username", username)?;
    check_max_len("username", username, USERNAME_MAX_LEN)?;
    check_max_len("email", email, EMAIL_MAX_LEN)
}
