mod common;

use common::{fields, spawn_test_server};
use roster_client::{ClientError, DeleteOutcome, RowState, SyncController, UpdateOutcome};
use roster_types::Field;

#[tokio::test]
async fn load_builds_clean_rows() {
    let (client, store) = spawn_test_server().await;
    store.seed_sample_data().unwrap();

    let mut controller = SyncController::new(client);
    controller.load().await.unwrap();

    assert_eq!(controller.rows().len(), 2);
    assert!(controller.rows().iter().all(|r| r.state() == RowState::Clean));
    assert_eq!(controller.rows()[0].snapshot().email, "john.doe@example.com");
}

#[tokio::test]
async fn create_reloads_full_list() {
    let (client, _store) = spawn_test_server().await;
    let mut controller = SyncController::new(client);
    controller.load().await.unwrap();
    assert!(controller.rows().is_empty());

    let created = controller
        .create(fields("  Ada ", "Lovelace", "ada@example.com "))
        .await
        .unwrap();

    assert_eq!(controller.rows().len(), 1);
    let row = controller.row(created.id).unwrap();
    assert_eq!(row.snapshot().name, "Ada");
    assert_eq!(row.snapshot().email, "ada@example.com");
}

#[tokio::test]
async fn create_conflict_surfaces_server_message() {
    let (client, store) = spawn_test_server().await;
    store.insert(&fields("A", "A", "a@example.com")).unwrap();
    let mut controller = SyncController::new(client);

    let err = controller.create(fields("B", "B", "a@example.com")).await.unwrap_err();
    assert_eq!(err.status(), Some(409));
    assert_eq!(store.count().unwrap(), 1);
}

#[tokio::test]
async fn submit_update_sends_and_reloads() {
    let (client, store) = spawn_test_server().await;
    let id = store.insert(&fields("John", "Doe", "john@example.com")).unwrap();
    let mut controller = SyncController::new(client);
    controller.load().await.unwrap();

    controller.edit(id, Field::Name, "Jon ").unwrap();
    let outcome = controller.submit_update(id).await.unwrap();
    assert_eq!(outcome, UpdateOutcome::Updated("Student successfully updated!".into()));

    let row = controller.row(id).unwrap();
    assert_eq!(row.state(), RowState::Clean);
    assert_eq!(row.snapshot().name, "Jon");
    assert_eq!(store.select_all().unwrap()[0].name, "Jon");
}

#[tokio::test]
async fn unchanged_submit_does_not_touch_server() {
    let (client, store) = spawn_test_server().await;
    let id = store.insert(&fields("John", "Doe", "john@example.com")).unwrap();
    let mut controller = SyncController::new(client);
    controller.load().await.unwrap();

    // Changed on the server behind the controller's back; a request would
    // overwrite it.
    store.update(id, &fields("Remote", "Doe", "john@example.com")).unwrap();

    let outcome = controller.submit_update(id).await.unwrap();
    assert_eq!(outcome, UpdateOutcome::NoChanges);
    assert_eq!(store.select_all().unwrap()[0].name, "Remote");
}

#[tokio::test]
async fn failed_update_keeps_row_dirty_with_error() {
    let (client, store) = spawn_test_server().await;
    let a = store.insert(&fields("A", "A", "a@example.com")).unwrap();
    store.insert(&fields("B", "B", "b@example.com")).unwrap();
    let mut controller = SyncController::new(client);
    controller.load().await.unwrap();

    controller.edit(a, Field::Email, "b@example.com").unwrap();
    let err = controller.submit_update(a).await.unwrap_err();
    assert_eq!(err.status(), Some(409));

    let row = controller.row(a).unwrap();
    assert_eq!(row.state(), RowState::Dirty);
    assert_eq!(row.draft().email, "b@example.com");
    assert_eq!(row.last_error(), Some("Email already exists. Please use a unique email."));
}

#[tokio::test]
async fn update_of_row_deleted_elsewhere_is_not_found() {
    let (client, store) = spawn_test_server().await;
    let id = store.insert(&fields("A", "A", "a@example.com")).unwrap();
    let mut controller = SyncController::new(client);
    controller.load().await.unwrap();
    store.delete(id).unwrap();

    controller.edit(id, Field::Name, "Z").unwrap();
    let err = controller.submit_update(id).await.unwrap_err();
    assert_eq!(err.status(), Some(404));
}

#[tokio::test]
async fn delete_requires_confirmation() {
    let (client, store) = spawn_test_server().await;
    let id = store.insert(&fields("A", "A", "a@example.com")).unwrap();
    let mut controller = SyncController::new(client);
    controller.load().await.unwrap();

    let outcome = controller.delete(id, |_| false).await.unwrap();
    assert_eq!(outcome, DeleteOutcome::Cancelled);
    assert_eq!(store.count().unwrap(), 1);

    let outcome = controller.delete(id, |_| true).await.unwrap();
    assert_eq!(outcome, DeleteOutcome::Deleted("Student deleted successfully".into()));
    assert!(controller.rows().is_empty());
    assert_eq!(store.count().unwrap(), 0);
}

#[tokio::test]
async fn delete_of_unloaded_row_is_rejected_locally() {
    let (client, _store) = spawn_test_server().await;
    let mut controller = SyncController::new(client);
    controller.load().await.unwrap();

    let err = controller
        .delete(roster_types::StudentId::new(5), |_| true)
        .await
        .unwrap_err();
    assert!(matches!(err, ClientError::UnknownRow(_)));
}
