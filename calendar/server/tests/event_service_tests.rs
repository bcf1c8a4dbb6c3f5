use calendar_server::event::{EventPatch, EventService, EventServiceError, NewEvent};
use calendar_server::store::{EventStore, seed_events};

mod common;

#[tokio::test]
async fn first_run_seeds_four_example_events() {
    let ctx = common::setup().await.expect("Failed to setup test context");

    let service = EventService::new(&ctx.store);
    let events = service.get_all_events().await.expect("list should succeed");
    assert_eq!(events, seed_events());
}

#[tokio::test]
async fn ensure_data_file_does_not_overwrite_an_existing_collection() {
    let ctx = common::setup().await.expect("Failed to setup test context");

    let service = EventService::new(&ctx.store);
    service
        .delete_event_by_id(1)
        .await
        .expect("delete should succeed");

    ctx.store
        .ensure_data_file()
        .await
        .expect("ensure should succeed");

    let events = service.get_all_events().await.expect("list should succeed");
    assert_eq!(events.len(), 3, "existing collection must not be re-seeded");
}

#[tokio::test]
async fn missing_file_reads_as_empty_collection() {
    let _ = tracing_subscriber::fmt().try_init();
    let dir = tempfile::tempdir().expect("tempdir");
    let store = EventStore::new(dir.path().join("absent.json"));

    assert!(store.load().await.is_empty());
}

#[tokio::test]
async fn corrupt_file_reads_as_empty_collection() {
    let ctx = common::setup().await.expect("Failed to setup test context");

    tokio::fs::write(ctx.store.path(), b"{ not json ]")
        .await
        .expect("write should succeed");

    assert!(ctx.store.load().await.is_empty());
}

#[tokio::test]
async fn created_ids_increment_past_the_highest_existing_id() {
    let ctx = common::setup().await.expect("Failed to setup test context");

    let service = EventService::new(&ctx.store);
    let first = service
        .create_event(NewEvent {
            title: "Standup".to_string(),
            date: "2025-11-03".to_string(),
            color: None,
        })
        .await
        .expect("create should succeed");
    let second = service
        .create_event(NewEvent {
            title: "Retro".to_string(),
            date: "2025-11-07".to_string(),
            color: Some("#9b51e0".to_string()),
        })
        .await
        .expect("create should succeed");

    assert_eq!(first.id, 5);
    assert_eq!(second.id, 6);
    assert_eq!(second.color, "#9b51e0");
}

#[tokio::test]
async fn ids_are_not_reused_after_deleting_the_latest_event() {
    let ctx = common::setup().await.expect("Failed to setup test context");

    let service = EventService::new(&ctx.store);
    service
        .delete_event_by_id(2)
        .await
        .expect("delete should succeed");

    let created = service
        .create_event(NewEvent {
            title: "Standup".to_string(),
            date: "2025-11-03".to_string(),
            color: None,
        })
        .await
        .expect("create should succeed");

    // Highest surviving id is 4, so the next assignment is 5.
    assert_eq!(created.id, 5);
}

#[tokio::test]
async fn update_with_empty_strings_leaves_fields_unchanged() {
    let ctx = common::setup().await.expect("Failed to setup test context");

    let service = EventService::new(&ctx.store);
    let updated = service
        .update_event_by_id(
            1,
            EventPatch {
                title: Some(String::new()),
                date: None,
                color: Some(String::new()),
            },
        )
        .await
        .expect("update should succeed");

    assert_eq!(updated.title, "Team Meeting");
    assert_eq!(updated.color, "#4285f4");
}

#[tokio::test]
async fn update_with_unparseable_date_reports_invalid_date() {
    let ctx = common::setup().await.expect("Failed to setup test context");

    let service = EventService::new(&ctx.store);
    let result = service
        .update_event_by_id(
            1,
            EventPatch {
                date: Some("whenever".to_string()),
                ..EventPatch::default()
            },
        )
        .await;

    assert!(matches!(result, Err(EventServiceError::InvalidDate(_))));
}

#[tokio::test]
async fn delete_of_unknown_id_reports_not_found() {
    let ctx = common::setup().await.expect("Failed to setup test context");

    let service = EventService::new(&ctx.store);
    let result = service.delete_event_by_id(42).await;
    assert!(matches!(
        result,
        Err(EventServiceError::EventNotFound(42))
    ));
}
