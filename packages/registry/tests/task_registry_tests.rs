// ABOUTME: Integration tests for optimistic task operations
// ABOUTME: Covers prepend ordering, rollback equality, filtering, and local validation

use peachy_client::ApiClient;
use peachy_core::{Priority, TaskCreateInput, TaskUpdateInput, User};
use peachy_registry::{RegistryError, Session, TaskFilter};
use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn dev_user() -> User {
    User {
        id: "u1".to_string(),
        email: "dev@peachy.task".to_string(),
        name: None,
    }
}

/// Session loaded from canned list responses
async fn seeded_session(
    server: &MockServer,
    tasks: serde_json::Value,
    labels: serde_json::Value,
) -> Session {
    Mock::given(method("GET"))
        .and(path("/tasks/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(tasks))
        .mount(server)
        .await;
    Mock::given(method("GET"))
        .and(path("/labels/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(labels))
        .mount(server)
        .await;

    let client = ApiClient::new(server.uri()).unwrap();
    let mut session = Session::new(dev_user(), client);
    session.load(50).await.unwrap();
    session
}

fn buy_milk() -> serde_json::Value {
    json!({
        "id": "t1",
        "user_id": "u1",
        "title": "Buy milk",
        "priority": "low",
        "deadline": "2025-01-01",
        "completed": false,
        "label_ids": []
    })
}

#[tokio::test]
async fn test_create_prepends_new_task() {
    let server = MockServer::start().await;
    let mut session = seeded_session(&server, json!([buy_milk()]), json!([])).await;

    Mock::given(method("POST"))
        .and(path("/tasks/"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": "t2",
            "user_id": "u1",
            "title": "Water plants",
            "priority": "medium",
            "deadline": "2025-02-01",
            "completed": false,
            "label_ids": []
        })))
        .mount(&server)
        .await;

    let created = session
        .tasks
        .create(TaskCreateInput {
            title: "Water plants".to_string(),
            deadline: "2025-02-01".to_string(),
            ..Default::default()
        })
        .await
        .unwrap();

    assert_eq!(created.id, "t2");
    assert_eq!(session.tasks.list().len(), 2);
    // Newly created tasks are prepended, most recent first
    assert_eq!(session.tasks.list()[0].id, "t2");
    assert_eq!(session.tasks.list()[1].id, "t1");
}

#[tokio::test]
async fn test_create_validation_never_reaches_network() {
    let server = MockServer::start().await;
    let mut session = seeded_session(&server, json!([buy_milk()]), json!([])).await;
    let before = session.tasks.list().to_vec();
    let requests_after_load = server.received_requests().await.unwrap().len();

    let err = session
        .tasks
        .create(TaskCreateInput {
            title: "   ".to_string(),
            deadline: String::new(),
            ..Default::default()
        })
        .await
        .unwrap_err();

    let fields: Vec<&str> = err
        .validation_errors()
        .unwrap()
        .iter()
        .map(|e| e.field.as_str())
        .collect();
    assert_eq!(fields, vec!["title", "deadline"]);
    assert_eq!(session.tasks.list(), before.as_slice());
    assert_eq!(
        server.received_requests().await.unwrap().len(),
        requests_after_load
    );
}

#[tokio::test]
async fn test_create_failure_rolls_back_bit_for_bit() {
    let server = MockServer::start().await;
    let mut session = seeded_session(&server, json!([buy_milk()]), json!([])).await;
    let before = session.tasks.list().to_vec();

    Mock::given(method("POST"))
        .and(path("/tasks/"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let err = session
        .tasks
        .create(TaskCreateInput {
            title: "Water plants".to_string(),
            deadline: "2025-02-01".to_string(),
            ..Default::default()
        })
        .await
        .unwrap_err();

    assert_eq!(err.to_string(), "Failed to create task");
    assert_eq!(session.tasks.list(), before.as_slice());
}

#[tokio::test]
async fn test_toggle_flips_only_completed() {
    let server = MockServer::start().await;
    let mut session = seeded_session(&server, json!([buy_milk()]), json!([])).await;
    let before = session.tasks.list()[0].clone();

    Mock::given(method("PATCH"))
        .and(path("/tasks/t1"))
        .and(body_json(json!({ "completed": true })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "t1",
            "user_id": "u1",
            "title": "Buy milk",
            "priority": "low",
            "deadline": "2025-01-01",
            "completed": true,
            "label_ids": []
        })))
        .mount(&server)
        .await;

    session.tasks.toggle_complete("t1").await.unwrap();

    let after = &session.tasks.list()[0];
    let mut expected = before;
    expected.completed = true;
    assert_eq!(after, &expected);
}

#[tokio::test]
async fn test_toggle_failure_rolls_back() {
    let server = MockServer::start().await;
    let mut session = seeded_session(&server, json!([buy_milk()]), json!([])).await;
    let before = session.tasks.list().to_vec();

    Mock::given(method("PATCH"))
        .and(path("/tasks/t1"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let err = session.tasks.toggle_complete("t1").await.unwrap_err();

    assert_eq!(err.to_string(), "Failed to update task");
    assert_eq!(session.tasks.list(), before.as_slice());
}

#[tokio::test]
async fn test_update_failure_rolls_back_bit_for_bit() {
    let server = MockServer::start().await;
    let mut session = seeded_session(&server, json!([buy_milk()]), json!([])).await;
    let before = session.tasks.list().to_vec();

    Mock::given(method("PATCH"))
        .and(path("/tasks/t1"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let err = session
        .tasks
        .update(
            "t1",
            TaskUpdateInput {
                title: Some("Buy oat milk".to_string()),
                priority: Some(Priority::High),
                ..Default::default()
            },
        )
        .await
        .unwrap_err();

    assert_eq!(err.to_string(), "Failed to save changes");
    assert_eq!(session.tasks.list(), before.as_slice());
}

#[tokio::test]
async fn test_update_empty_title_rejected_locally() {
    let server = MockServer::start().await;
    let mut session = seeded_session(&server, json!([buy_milk()]), json!([])).await;
    let before = session.tasks.list().to_vec();
    let requests_after_load = server.received_requests().await.unwrap().len();

    let err = session
        .tasks
        .update(
            "t1",
            TaskUpdateInput {
                title: Some(String::new()),
                ..Default::default()
            },
        )
        .await
        .unwrap_err();

    assert!(matches!(err, RegistryError::Validation(_)));
    assert_eq!(session.tasks.list(), before.as_slice());
    assert_eq!(
        server.received_requests().await.unwrap().len(),
        requests_after_load
    );
}

#[tokio::test]
async fn test_update_unknown_task_is_a_local_error() {
    let server = MockServer::start().await;
    let mut session = seeded_session(&server, json!([]), json!([])).await;

    let err = session
        .tasks
        .update(
            "missing",
            TaskUpdateInput {
                completed: Some(true),
                ..Default::default()
            },
        )
        .await
        .unwrap_err();

    assert!(matches!(err, RegistryError::TaskNotFound(_)));
}

#[tokio::test]
async fn test_delete_removes_task() {
    let server = MockServer::start().await;
    let mut session = seeded_session(&server, json!([buy_milk()]), json!([])).await;

    Mock::given(method("DELETE"))
        .and(path("/tasks/t1"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;

    session.tasks.delete("t1").await.unwrap();
    assert!(session.tasks.list().is_empty());
}

#[tokio::test]
async fn test_delete_failure_rolls_back() {
    let server = MockServer::start().await;
    let mut session = seeded_session(&server, json!([buy_milk()]), json!([])).await;
    let before = session.tasks.list().to_vec();

    Mock::given(method("DELETE"))
        .and(path("/tasks/t1"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let err = session.tasks.delete("t1").await.unwrap_err();

    assert_eq!(err.to_string(), "Failed to delete task");
    assert_eq!(session.tasks.list(), before.as_slice());
}

#[tokio::test]
async fn test_filter_is_pure_and_idempotent() {
    let server = MockServer::start().await;
    let session = seeded_session(
        &server,
        json!([
            { "id": "t1", "title": "a", "completed": false },
            { "id": "t2", "title": "b", "completed": true },
            { "id": "t3", "title": "c", "completed": false }
        ]),
        json!([]),
    )
    .await;

    let all: Vec<&str> = session
        .tasks
        .filtered(TaskFilter::All)
        .iter()
        .map(|t| t.id.as_str())
        .collect();
    assert_eq!(all, vec!["t1", "t2", "t3"]);

    let active: Vec<&str> = session
        .tasks
        .filtered(TaskFilter::Active)
        .iter()
        .map(|t| t.id.as_str())
        .collect();
    assert_eq!(active, vec!["t1", "t3"]);

    let completed: Vec<&str> = session
        .tasks
        .filtered(TaskFilter::Completed)
        .iter()
        .map(|t| t.id.as_str())
        .collect();
    assert_eq!(completed, vec!["t2"]);

    // Applying a filter twice yields the same view and never mutates state
    let again: Vec<&str> = session
        .tasks
        .filtered(TaskFilter::Active)
        .iter()
        .map(|t| t.id.as_str())
        .collect();
    assert_eq!(again, active);
    assert_eq!(session.tasks.list().len(), 3);
}
