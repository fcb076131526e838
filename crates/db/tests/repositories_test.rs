mod common;

use c3lingo_core::errors::LingoError;
use c3lingo_core::models::{
    shift::CreateShiftAssignmentRequest,
    talk::{CreateTranslationRequest, TalkText},
    translator::{CreateTranslatorRequest, CreateTranslatorSpeaksRequest},
};
use c3lingo_core::registry::EntityKind;
use c3lingo_db::admin;
use c3lingo_db::repositories::{
    booth, conference, language, room, shift, shift_assignment, talk, translation, translator,
    translator_speaks, user,
};
use chrono::Duration;
use pretty_assertions::assert_eq;
use uuid::Uuid;

use common::{create_shift, create_test_pool, create_user, talk_request, Fixture};

#[test_log::test(tokio::test)]
async fn test_talk_round_trips_all_fields() {
    let pool = create_test_pool().await;
    let fixture = Fixture::new(&pool).await;

    let loaded = talk::get_talk_by_id(&pool, fixture.talk.id)
        .await
        .unwrap()
        .expect("Talk should exist");

    assert_eq!(loaded, fixture.talk);
    assert_eq!(loaded.text.abstract_text, "All about Opening Ceremony");
    assert_eq!(loaded.speaker_list(), vec!["Alice", "Bob"]);

    let by_fahrplan = talk::find_talk_by_fahrplan_id(&pool, fixture.conference.id, "10496")
        .await
        .unwrap();
    assert_eq!(by_fahrplan, Some(fixture.talk.clone()));
    assert_eq!(
        talk::find_talk_by_fahrplan_id(&pool, fixture.conference.id, "99999")
            .await
            .unwrap(),
        None
    );
}

#[tokio::test]
async fn test_talks_for_conference_in_schedule_order() {
    let pool = create_test_pool().await;
    let fixture = Fixture::new(&pool).await;

    let mut earlier = talk_request(
        &fixture.conference,
        &fixture.room,
        &fixture.english,
        "10001",
        "Early Bird",
    );
    earlier.start = fixture.talk.start - Duration::hours(2);
    earlier.end = fixture.talk.start - Duration::hours(1);
    let earlier = talk::create_talk(&pool, &earlier).await.unwrap();

    let talks = talk::find_talks_for_conference(&pool, fixture.conference.id)
        .await
        .unwrap();
    let ids: Vec<Uuid> = talks.iter().map(|talk| talk.id).collect();
    assert_eq!(ids, vec![earlier.id, fixture.talk.id]);

    let in_room = talk::find_talks_in_room(&pool, fixture.room.id).await.unwrap();
    assert_eq!(in_room.len(), 2);
}

#[tokio::test]
async fn test_update_talk_text() {
    let pool = create_test_pool().await;
    let fixture = Fixture::new(&pool).await;

    let mut changed = fixture.talk.clone();
    changed.text = TalkText {
        title: "Opening".to_string(),
        subtitle: "Welcome to Leipzig".to_string(),
        abstract_text: String::new(),
        description: "Doors open at 10:30".to_string(),
    };
    changed.language_id = fixture.english.id;

    let updated = talk::update_talk(&pool, &changed).await.unwrap();
    assert_eq!(updated, changed);

    let missing = talk::update_talk(
        &pool,
        &c3lingo_core::models::talk::Talk {
            id: Uuid::new_v4(),
            ..changed
        },
    )
    .await;
    assert!(matches!(missing, Err(LingoError::NotFound(_))));
}

#[tokio::test]
async fn test_language_crud() {
    let pool = create_test_pool().await;
    let mut dgs = common::create_language(&pool, "gsg", "German Sign Language").await;

    dgs.name_self = "Deutsche Gebärdensprache".to_string();
    let updated = language::update_language(&pool, &dgs).await.unwrap();
    assert_eq!(updated.name_self, "Deutsche Gebärdensprache");

    // Codes are not unique
    common::create_language(&pool, "gsg", "Duplicate").await;
    assert_eq!(
        language::find_languages_by_code(&pool, "gsg").await.unwrap().len(),
        2
    );

    language::delete_language(&pool, dgs.id).await.unwrap();
    assert!(language::get_language_by_id(&pool, dgs.id).await.unwrap().is_none());

    let again = language::delete_language(&pool, dgs.id).await;
    assert!(matches!(again, Err(LingoError::NotFound(_))));
}

#[tokio::test]
async fn test_invalid_language_is_rejected_before_insert() {
    let pool = create_test_pool().await;

    let result = language::create_language(
        &pool,
        &c3lingo_core::models::language::CreateLanguageRequest {
            code: "much-too-long".to_string(),
            name_en: "Too long".to_string(),
            name_self: "Too long".to_string(),
        },
    )
    .await;

    assert!(matches!(result, Err(LingoError::Validation(_))));
    assert!(language::list_languages(&pool).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_conference_fahrplan_version() {
    let pool = create_test_pool().await;
    let created = common::create_conference(&pool, "36c3").await;
    assert_eq!(created.fahrplan_version, "");

    let updated = conference::set_fahrplan_version(&pool, created.id, "1.7 Ho Ho Ho")
        .await
        .unwrap();
    assert_eq!(updated.fahrplan_version, "1.7 Ho Ho Ho");
    assert_eq!(updated.start, created.start);

    let missing = conference::set_fahrplan_version(&pool, Uuid::new_v4(), "1.0").await;
    assert!(matches!(missing, Err(LingoError::NotFound(_))));
}

#[tokio::test]
async fn test_rooms_and_booths_lookups() {
    let pool = create_test_pool().await;
    let fixture = Fixture::new(&pool).await;
    let borg = common::create_room(&pool, &fixture.conference, "Borg").await;
    let second_booth = common::create_booth(&pool, &fixture.room, "Booth 2").await;

    let rooms = room::find_rooms_for_conference(&pool, fixture.conference.id)
        .await
        .unwrap();
    assert_eq!(rooms, vec![fixture.room.clone(), borg.clone()]);

    let booths = booth::find_booths_for_room(&pool, fixture.room.id).await.unwrap();
    assert_eq!(booths, vec![fixture.booth.clone(), second_booth]);
    assert!(booth::find_booths_for_room(&pool, borg.id).await.unwrap().is_empty());

    let mut moved = fixture.booth.clone();
    moved.room_id = borg.id;
    moved.maximum_occupancy = 4;
    let moved = booth::update_booth(&pool, &moved).await.unwrap();
    assert_eq!(moved.room_id, borg.id);
    assert_eq!(moved.maximum_occupancy, 4);
}

#[tokio::test]
async fn test_translation_lookups() {
    let pool = create_test_pool().await;
    let fixture = Fixture::new(&pool).await;
    let author = create_user(&pool).await;

    let created = translation::create_translation(
        &pool,
        &CreateTranslationRequest {
            talk_id: fixture.talk.id,
            language_id: fixture.english.id,
            author_id: Some(author.id),
            text: TalkText {
                title: "Opening Ceremony".to_string(),
                subtitle: "Welcome".to_string(),
                ..TalkText::default()
            },
        },
    )
    .await
    .unwrap();

    assert_eq!(
        translation::find_translation(&pool, fixture.talk.id, fixture.english.id)
            .await
            .unwrap(),
        Some(created.clone())
    );
    assert_eq!(
        translation::find_translation(&pool, fixture.talk.id, fixture.german.id)
            .await
            .unwrap(),
        None
    );
    assert_eq!(
        translation::find_translations_by_author(&pool, author.id)
            .await
            .unwrap(),
        vec![created.clone()]
    );

    let mut edited = created.clone();
    edited.text.description = "Translated description".to_string();
    edited.author_id = None;
    let edited = translation::update_translation(&pool, &edited).await.unwrap();
    assert_eq!(edited.author_id, None);
    assert_eq!(edited.text.description, "Translated description");
}

#[tokio::test]
async fn test_translator_profile_update_keeps_token() {
    let pool = create_test_pool().await;
    let volunteer = create_user(&pool).await;

    let profile = translator::create_translator(
        &pool,
        &CreateTranslatorRequest {
            user_id: volunteer.id,
            confirmed: false,
            ..CreateTranslatorRequest::default()
        },
    )
    .await
    .unwrap();

    let mut confirmed = profile.clone();
    confirmed.confirmed = true;
    confirmed.bio = "Simultaneous de/en".to_string();
    confirmed.secret_token = "x".repeat(64);
    let updated = translator::update_translator(&pool, &confirmed).await.unwrap();

    assert!(updated.confirmed);
    assert_eq!(updated.bio, "Simultaneous de/en");
    assert_eq!(updated.secret_token, profile.secret_token);

    assert_eq!(
        translator::get_translator_by_user(&pool, volunteer.id)
            .await
            .unwrap(),
        Some(updated.clone())
    );
    assert_eq!(
        translator::get_translator_by_secret_token(&pool, &profile.secret_token)
            .await
            .unwrap(),
        Some(updated)
    );
}

#[tokio::test]
async fn test_translator_avatar_url_from_stored_user() {
    let pool = create_test_pool().await;
    let volunteer = user::create_user(
        &pool,
        &c3lingo_core::models::user::CreateUserRequest {
            username: "ada".to_string(),
            email: "Ada@C3Lingo.org".to_string(),
        },
    )
    .await
    .unwrap();
    let profile = translator::create_translator(
        &pool,
        &CreateTranslatorRequest {
            user_id: volunteer.id,
            confirmed: true,
            ..CreateTranslatorRequest::default()
        },
    )
    .await
    .unwrap();

    let found = user::get_user_by_username(&pool, "ada")
        .await
        .unwrap()
        .expect("User should exist");
    assert_eq!(
        profile.avatar_url(&found),
        "https://www.gravatar.com/avatar/967dff8dfbf6e8c3ad4c4b86b8cecd5e"
    );
}

#[tokio::test]
async fn test_shift_assignment_defaults_and_updates() {
    let pool = create_test_pool().await;
    let fixture = Fixture::new(&pool).await;
    let volunteer = create_user(&pool).await;
    let shift = create_shift(&pool, &fixture.booth, &fixture.talk, Some(&fixture.english)).await;

    let assignment = shift_assignment::create_shift_assignment(
        &pool,
        &CreateShiftAssignmentRequest::new(shift.id, volunteer.id),
    )
    .await
    .unwrap();
    assert!(assignment.waitlisted);
    assert!(!assignment.freeloaded);
    assert_eq!(assignment.comment, "");

    let mut confirmed = assignment.clone();
    confirmed.waitlisted = false;
    confirmed.comment = "Will bring my own headset".to_string();
    let confirmed = shift_assignment::update_shift_assignment(&pool, &confirmed)
        .await
        .unwrap();
    assert!(!confirmed.waitlisted);

    assert_eq!(
        shift_assignment::find_assignments_for_user(&pool, volunteer.id)
            .await
            .unwrap(),
        vec![confirmed.clone()]
    );
    assert_eq!(
        shift_assignment::find_assignments_for_shift(&pool, shift.id)
            .await
            .unwrap(),
        vec![confirmed]
    );
}

#[tokio::test]
async fn test_shift_update_and_booth_lookup() {
    let pool = create_test_pool().await;
    let fixture = Fixture::new(&pool).await;
    let mut shift = create_shift(&pool, &fixture.booth, &fixture.talk, None).await;

    shift.language_id = Some(fixture.english.id);
    let updated = shift::update_shift(&pool, &shift).await.unwrap();
    assert!(!updated.accepts_any_language());

    assert_eq!(
        shift::find_shifts_for_booth(&pool, fixture.booth.id)
            .await
            .unwrap(),
        vec![updated]
    );

    let unknown_language = shift::update_shift(
        &pool,
        &c3lingo_core::models::shift::Shift {
            language_id: Some(Uuid::new_v4()),
            ..shift
        },
    )
    .await;
    assert!(matches!(unknown_language, Err(LingoError::InvalidReference(_))));
}

#[test_log::test(tokio::test)]
async fn test_admin_overview_counts_every_kind() {
    let pool = create_test_pool().await;
    let fixture = Fixture::new(&pool).await;
    create_shift(&pool, &fixture.booth, &fixture.talk, None).await;

    let overview = admin::overview(&pool).await.unwrap();
    let kinds: Vec<EntityKind> = overview.iter().map(|(kind, _)| *kind).collect();
    assert_eq!(kinds, EntityKind::ALL.to_vec());

    let count = |kind: EntityKind| {
        overview
            .iter()
            .find(|(entry, _)| *entry == kind)
            .map(|(_, count)| *count)
            .unwrap()
    };
    assert_eq!(count(EntityKind::Language), 2);
    assert_eq!(count(EntityKind::Conference), 1);
    assert_eq!(count(EntityKind::Talk), 1);
    assert_eq!(count(EntityKind::Shift), 1);
    assert_eq!(count(EntityKind::ShiftAssignment), 0);
    assert_eq!(
        admin::count_entries(&pool, EntityKind::Booth).await.unwrap(),
        1
    );
}

#[tokio::test]
async fn test_admin_entry_labels() {
    let pool = create_test_pool().await;
    let fixture = Fixture::new(&pool).await;
    let volunteer = user::create_user(
        &pool,
        &c3lingo_core::models::user::CreateUserRequest {
            username: "ada".to_string(),
            email: String::new(),
        },
    )
    .await
    .unwrap();
    let open = create_shift(&pool, &fixture.booth, &fixture.talk, None).await;
    shift_assignment::create_shift_assignment(
        &pool,
        &CreateShiftAssignmentRequest::new(open.id, volunteer.id),
    )
    .await
    .unwrap();
    translation::create_translation(
        &pool,
        &CreateTranslationRequest {
            talk_id: fixture.talk.id,
            language_id: fixture.english.id,
            author_id: None,
            text: TalkText::default(),
        },
    )
    .await
    .unwrap();
    translator::create_translator(
        &pool,
        &CreateTranslatorRequest {
            user_id: volunteer.id,
            confirmed: true,
            ..CreateTranslatorRequest::default()
        },
    )
    .await
    .unwrap();
    translator_speaks::create_translator_speaks(
        &pool,
        &CreateTranslatorSpeaksRequest {
            user_id: volunteer.id,
            language_id: fixture.german.id,
        },
    )
    .await
    .unwrap();

    let labels = |entries: Vec<c3lingo_core::registry::AdminEntry>| {
        entries.into_iter().map(|entry| entry.label).collect::<Vec<_>>()
    };

    assert_eq!(
        labels(admin::list_entries(&pool, EntityKind::Language).await.unwrap()),
        vec!["de", "en"]
    );
    assert_eq!(
        labels(admin::list_entries(&pool, EntityKind::Room).await.unwrap()),
        vec!["36c3/Ada"]
    );
    assert_eq!(
        labels(admin::list_entries(&pool, EntityKind::Talk).await.unwrap()),
        vec!["36c3/Opening Ceremony"]
    );
    assert_eq!(
        labels(admin::list_entries(&pool, EntityKind::Translation).await.unwrap()),
        vec!["36c3/Opening Ceremony (en)"]
    );
    assert_eq!(
        labels(admin::list_entries(&pool, EntityKind::Translator).await.unwrap()),
        vec!["ada"]
    );
    assert_eq!(
        labels(admin::list_entries(&pool, EntityKind::TranslatorSpeaks).await.unwrap()),
        vec!["ada: de"]
    );
    assert_eq!(
        labels(admin::list_entries(&pool, EntityKind::Booth).await.unwrap()),
        vec!["36c3/Ada/Booth 1"]
    );
    assert_eq!(
        labels(admin::list_entries(&pool, EntityKind::Shift).await.unwrap()),
        vec!["36c3/Opening Ceremony (de -> *)"]
    );
    assert_eq!(
        labels(admin::list_entries(&pool, EntityKind::ShiftAssignment).await.unwrap()),
        vec!["ada de -> * 36c3/Opening Ceremony"]
    );
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_admin_entries_stay_consistent_during_writes() {
    let path = std::env::temp_dir().join(format!("c3lingo-{}.db", Uuid::new_v4()));
    let url = format!("sqlite://{}", path.display());
    let pool = c3lingo_db::create_pool(&url, 4).await.unwrap();
    c3lingo_db::schema::initialize_database(&pool).await.unwrap();

    let writer_pool = pool.clone();
    let writer = tokio::spawn(async move {
        for i in 0..25 {
            let conference = common::create_conference(&writer_pool, &format!("c{i}")).await;
            common::create_room(&writer_pool, &conference, "Saal 1").await;
        }
    });

    for _ in 0..25 {
        admin::list_entries(&pool, EntityKind::Room)
            .await
            .expect("Rooms should always resolve their conference");
    }
    writer.await.unwrap();

    let rooms = admin::list_entries(&pool, EntityKind::Room).await.unwrap();
    assert_eq!(rooms.len(), 25);

    pool.close().await;
    for suffix in ["", "-wal", "-shm"] {
        let _ = std::fs::remove_file(format!("{}{suffix}", path.display()));
    }
}
