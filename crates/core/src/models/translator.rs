use md5::{Digest, Md5};
use rand::distributions::Alphanumeric;
use rand::{thread_rng, Rng};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::user::User;

pub const SECRET_TOKEN_LEN: usize = 64;

const GRAVATAR_BASE_URL: &str = "https://www.gravatar.com/avatar";

/// Translator profile of a user. There is at most one per user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Translator {
    pub id: Uuid,
    pub user_id: Uuid,
    pub confirmed: bool,
    pub bio: String,
    pub contact_info: String,
    /// Authenticates requests for the personal calendar feed.
    pub secret_token: String,
}

impl Translator {
    /// Gravatar URL derived from the email of `user`, who must own this profile.
    pub fn avatar_url(&self, user: &User) -> String {
        debug_assert_eq!(user.id, self.user_id, "user does not own this translator profile");
        avatar_url(&user.email)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateTranslatorRequest {
    pub user_id: Uuid,
    pub confirmed: bool,
    #[serde(default)]
    pub bio: String,
    #[serde(default)]
    pub contact_info: String,
}

/// Indicates that a user speaks a given language.
///
/// The same pair may be recorded more than once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslatorSpeaks {
    pub id: Uuid,
    pub user_id: Uuid,
    pub language_id: Uuid,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTranslatorSpeaksRequest {
    pub user_id: Uuid,
    pub language_id: Uuid,
}

pub fn generate_secret_token() -> String {
    thread_rng()
        .sample_iter(&Alphanumeric)
        .take(SECRET_TOKEN_LEN)
        .map(char::from)
        .collect()
}

// The hash leaks the address to anyone with a rainbow table.
pub fn avatar_url(email: &str) -> String {
    let digest = Md5::digest(email.to_lowercase().as_bytes());
    format!("{GRAVATAR_BASE_URL}/{}", hex::encode(digest))
}
