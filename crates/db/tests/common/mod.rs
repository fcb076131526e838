#![allow(dead_code)]

use c3lingo_core::models::{
    booth::{Booth, CreateBoothRequest},
    conference::{Conference, CreateConferenceRequest, CreateRoomRequest, Room},
    language::{CreateLanguageRequest, Language},
    shift::{CreateShiftRequest, Shift},
    talk::{CreateTalkRequest, Talk, TalkText},
    user::{CreateUserRequest, User},
};
use c3lingo_db::repositories::{booth, conference, language, room, shift, talk, user};
use c3lingo_db::{create_memory_pool, DbPool};
use chrono::{Duration, TimeZone, Utc};
use fake::faker::internet::en::{SafeEmail, Username};
use fake::Fake;
use uuid::Uuid;

pub async fn create_test_pool() -> DbPool {
    create_memory_pool()
        .await
        .expect("Failed to create in-memory test database")
}

pub async fn create_language(pool: &DbPool, code: &str, name_en: &str) -> Language {
    language::create_language(
        pool,
        &CreateLanguageRequest {
            code: code.to_string(),
            name_en: name_en.to_string(),
            name_self: name_en.to_string(),
        },
    )
    .await
    .expect("Failed to create language")
}

pub async fn create_conference(pool: &DbPool, shortname: &str) -> Conference {
    conference::create_conference(
        pool,
        &CreateConferenceRequest {
            shortname: shortname.to_string(),
            name: format!("{shortname} Chaos Communication Congress"),
            start: Some(Utc.with_ymd_and_hms(2019, 12, 27, 10, 0, 0).unwrap()),
            end: Some(Utc.with_ymd_and_hms(2019, 12, 30, 18, 0, 0).unwrap()),
            ..CreateConferenceRequest::default()
        },
    )
    .await
    .expect("Failed to create conference")
}

pub async fn create_room(pool: &DbPool, conference: &Conference, name: &str) -> Room {
    room::create_room(
        pool,
        &CreateRoomRequest {
            conference_id: conference.id,
            name: name.to_string(),
        },
    )
    .await
    .expect("Failed to create room")
}

pub fn talk_request(
    conference: &Conference,
    room: &Room,
    language: &Language,
    fahrplan_id: &str,
    title: &str,
) -> CreateTalkRequest {
    let start = Utc.with_ymd_and_hms(2019, 12, 27, 11, 0, 0).unwrap();
    CreateTalkRequest {
        conference_id: conference.id,
        fahrplan_id: fahrplan_id.to_string(),
        fahrplan_guid: Uuid::new_v4().to_string(),
        text: TalkText {
            title: title.to_string(),
            subtitle: String::new(),
            abstract_text: format!("All about {title}"),
            description: String::new(),
        },
        logo_url: String::new(),
        talk_type: "lecture".to_string(),
        speakers: "Alice, Bob".to_string(),
        language_id: language.id,
        room_id: room.id,
        start,
        end: start + Duration::hours(1),
    }
}

pub async fn create_talk(
    pool: &DbPool,
    conference: &Conference,
    room: &Room,
    language: &Language,
    fahrplan_id: &str,
) -> Talk {
    talk::create_talk(
        pool,
        &talk_request(conference, room, language, fahrplan_id, "Opening Ceremony"),
    )
    .await
    .expect("Failed to create talk")
}

pub async fn create_booth(pool: &DbPool, room: &Room, name: &str) -> Booth {
    booth::create_booth(
        pool,
        &CreateBoothRequest {
            room_id: room.id,
            name: name.to_string(),
            location: "Behind the stage, left door".to_string(),
            dect: "4711".to_string(),
            desired_occupancy: 2,
            maximum_occupancy: 3,
        },
    )
    .await
    .expect("Failed to create booth")
}

pub async fn create_shift(
    pool: &DbPool,
    booth: &Booth,
    talk: &Talk,
    language: Option<&Language>,
) -> Shift {
    shift::create_shift(
        pool,
        &CreateShiftRequest {
            booth_id: booth.id,
            talk_id: talk.id,
            language_id: language.map(|language| language.id),
        },
    )
    .await
    .expect("Failed to create shift")
}

pub async fn create_user(pool: &DbPool) -> User {
    let username: String = Username().fake();
    let email: String = SafeEmail().fake();
    user::create_user(
        pool,
        &CreateUserRequest {
            username: format!("{username}-{}", Uuid::new_v4().simple()),
            email,
        },
    )
    .await
    .expect("Failed to create user")
}

/// A conference with one room, one German talk in it and one booth.
pub struct Fixture {
    pub conference: Conference,
    pub room: Room,
    pub german: Language,
    pub english: Language,
    pub talk: Talk,
    pub booth: Booth,
}

impl Fixture {
    pub async fn new(pool: &DbPool) -> Self {
        let conference = create_conference(pool, "36c3").await;
        let room = create_room(pool, &conference, "Ada").await;
        let german = create_language(pool, "de", "German").await;
        let english = create_language(pool, "en", "English").await;
        let talk = create_talk(pool, &conference, &room, &german, "10496").await;
        let booth = create_booth(pool, &room, "Booth 1").await;

        Self {
            conference,
            room,
            german,
            english,
            talk,
            booth,
        }
    }
}
