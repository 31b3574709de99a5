//! Flow-level tests for catalog synchronization and CRUD.
//!
//! Each test drives an [`playbill_app::App`] against a mock theater
//! server and asserts on what actually matters to a view: what the
//! store holds afterwards, what came back, and what was published on
//! the notice bus.

mod common;

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use assert_matches::assert_matches;
use axum::extract::Path;
use axum::http::StatusCode;
use axum::routing::{delete, get, patch, post};
use axum::{Json, Router};
use serde_json::{json, Value};
use tokio::sync::broadcast::error::TryRecvError;
use tokio_util::sync::CancellationToken;

use common::{app_for, production_json, spawn_server, valid_draft};
use playbill_app::FlowError;
use playbill_client::ApiError;
use playbill_core::{Production, ProductionDraft};
use playbill_events::NoticeLevel;

// ---------------------------------------------------------------------------
// Synchronization
// ---------------------------------------------------------------------------

#[tokio::test]
async fn refresh_mirrors_the_server_list() {
    let router = Router::new().route(
        "/productions",
        get(|| async {
            Json(json!([
                production_json(1, "Cats"),
                production_json(2, "Hamlet"),
            ]))
        }),
    );
    let app = app_for(&spawn_server(router).await);
    let cancel = CancellationToken::new();

    let count = app
        .refresh_productions(&cancel)
        .await
        .expect("refresh should succeed");

    assert_eq!(count, 2);
    let held = app.productions.all().await;
    assert_eq!(held.len(), 2);
    assert_eq!(held[0].title, "Cats");
    assert_eq!(held[1].title, "Hamlet");
}

#[tokio::test]
async fn refresh_failure_keeps_the_store_and_raises_a_notice() {
    let router = Router::new().route(
        "/productions",
        get(|| async {
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "message": "something went wrong" })),
            )
        }),
    );
    let app = app_for(&spawn_server(router).await);
    let mut notices = app.notices.subscribe();
    let cancel = CancellationToken::new();

    let err = app
        .refresh_productions(&cancel)
        .await
        .expect_err("refresh should fail");

    assert_matches!(err, FlowError::Api(ApiError::Api { status: 500, .. }));
    assert!(app.productions.is_empty().await);

    let notice = notices.recv().await.expect("a notice should be published");
    assert_eq!(notice.level, NoticeLevel::Error);
    assert_eq!(notice.message, "something went wrong");
}

/// A view torn down mid-request must not see its late response land.
#[tokio::test]
async fn cancelled_view_discards_the_late_response() {
    let router = Router::new().route(
        "/productions",
        get(|| async {
            tokio::time::sleep(Duration::from_millis(200)).await;
            Json(json!([production_json(1, "Cats")]))
        }),
    );
    let app = app_for(&spawn_server(router).await);
    let cancel = CancellationToken::new();

    let flow = {
        let app = app.clone();
        let cancel = cancel.clone();
        tokio::spawn(async move { app.refresh_productions(&cancel).await })
    };
    tokio::time::sleep(Duration::from_millis(50)).await;
    cancel.cancel();

    let result = flow.await.expect("flow task should not panic");
    assert_matches!(result, Err(FlowError::Cancelled));

    // Give the server's response ample time to arrive anyway.
    tokio::time::sleep(Duration::from_millis(300)).await;
    assert!(app.productions.is_empty().await);
}

// ---------------------------------------------------------------------------
// Detail
// ---------------------------------------------------------------------------

#[tokio::test]
async fn load_production_goes_to_the_caller_not_the_store() {
    let router = Router::new().route(
        "/productions/{id}",
        get(|Path(id): Path<i64>| async move {
            let mut record = production_json(id, "Tosca");
            record["crew_members"] = json!([
                { "id": 1, "name": "Maria Callas", "role": "Tosca", "production_id": id },
            ]);
            Json(record)
        }),
    );
    let app = app_for(&spawn_server(router).await);
    let cancel = CancellationToken::new();

    let production = app
        .load_production(7, &cancel)
        .await
        .expect("load should succeed");

    assert_eq!(production.id, 7);
    assert_eq!(production.crew_members.len(), 1);
    assert_eq!(production.crew_members[0].name, "Maria Callas");
    assert!(app.productions.is_empty().await);
}

#[tokio::test]
async fn load_production_passes_the_404_message_to_the_caller() {
    let router = Router::new().route(
        "/productions/{id}",
        get(|| async {
            (
                StatusCode::NOT_FOUND,
                Json(json!({ "message": "Could not find Production with id #9" })),
            )
        }),
    );
    let app = app_for(&spawn_server(router).await);
    let mut notices = app.notices.subscribe();
    let cancel = CancellationToken::new();

    let err = app
        .load_production(9, &cancel)
        .await
        .expect_err("load should fail");

    assert_eq!(err.form_message(), "Could not find Production with id #9");
    // Application rejections are the detail view's to render inline.
    assert_matches!(notices.try_recv(), Err(TryRecvError::Empty));
}

// ---------------------------------------------------------------------------
// Create
// ---------------------------------------------------------------------------

#[tokio::test]
async fn invalid_draft_never_reaches_the_network() {
    let hits = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&hits);
    let router = Router::new().route(
        "/productions",
        post(move || {
            let counter = Arc::clone(&counter);
            async move {
                counter.fetch_add(1, Ordering::SeqCst);
                (StatusCode::CREATED, Json(production_json(1, "Cats")))
            }
        }),
    );
    let app = app_for(&spawn_server(router).await);
    let cancel = CancellationToken::new();

    let draft = ProductionDraft {
        title: "A".to_string(),
        ..valid_draft()
    };
    let err = app
        .create_production(&draft, &cancel)
        .await
        .expect_err("draft should be refused");

    let report = err.report().expect("failure should carry the report");
    assert_eq!(report.errors.len(), 1);
    assert_eq!(report.errors[0].field, "title");
    assert_eq!(report.errors[0].message, "Titles must be at least 2 chars");
    assert_eq!(hits.load(Ordering::SeqCst), 0);
    assert!(app.productions.is_empty().await);
}

#[tokio::test]
async fn create_appends_the_confirmed_record() {
    let router = Router::new().route(
        "/productions",
        post(|Json(body): Json<Value>| async move {
            let mut record = production_json(42, "placeholder");
            record["title"] = body["title"].clone();
            (StatusCode::CREATED, Json(record))
        }),
    );
    let app = app_for(&spawn_server(router).await);
    let cancel = CancellationToken::new();

    let created = app
        .create_production(&valid_draft(), &cancel)
        .await
        .expect("create should succeed");

    assert_eq!(created.id, 42);
    assert_eq!(created.title, "Cats");
    let held = app.productions.get(42).await.expect("record should be stored");
    assert_eq!(held.title, "Cats");
}

/// A record created and then fetched comes back field-for-field equal,
/// id and crew aside.
#[tokio::test]
async fn created_record_round_trips_through_get_one() {
    let held: Arc<std::sync::Mutex<Option<Value>>> = Arc::new(std::sync::Mutex::new(None));
    let write_slot = Arc::clone(&held);
    let read_slot = Arc::clone(&held);
    let router = Router::new()
        .route(
            "/productions",
            post(move |Json(mut body): Json<Value>| {
                let slot = Arc::clone(&write_slot);
                async move {
                    body["id"] = json!(42);
                    *slot.lock().expect("slot lock") = Some(body.clone());
                    (StatusCode::CREATED, Json(body))
                }
            }),
        )
        .route(
            "/productions/{id}",
            get(move || {
                let slot = Arc::clone(&read_slot);
                async move {
                    let stored = slot.lock().expect("slot lock").clone();
                    match stored {
                        Some(record) => (StatusCode::OK, Json(record)),
                        None => (StatusCode::NOT_FOUND, Json(json!({ "message": "nothing" }))),
                    }
                }
            }),
        );
    let app = app_for(&spawn_server(router).await);
    let cancel = CancellationToken::new();

    let created = app
        .create_production(&valid_draft(), &cancel)
        .await
        .expect("create should succeed");
    let fetched = app
        .load_production(created.id, &cancel)
        .await
        .expect("load should succeed");

    assert_eq!(fetched.title, created.title);
    assert_eq!(fetched.genre, created.genre);
    assert_eq!(fetched.director, created.director);
    assert_eq!(fetched.description, created.description);
    assert_eq!(fetched.budget, created.budget);
    assert_eq!(fetched.image, created.image);
    assert_eq!(fetched.ongoing, created.ongoing);
}

#[tokio::test]
async fn create_rejection_comes_back_inline_not_as_a_notice() {
    let router = Router::new().route(
        "/productions",
        post(|| async {
            (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(json!({ "message": { "genre": ["is not included in the list"] } })),
            )
        }),
    );
    let app = app_for(&spawn_server(router).await);
    let mut notices = app.notices.subscribe();
    let cancel = CancellationToken::new();

    let err = app
        .create_production(&valid_draft(), &cancel)
        .await
        .expect_err("create should fail");

    assert_eq!(err.form_message(), "is not included in the list");
    assert!(app.productions.is_empty().await);
    assert_matches!(notices.try_recv(), Err(TryRecvError::Empty));
}

/// An already-cancelled token refuses the flow before any request.
#[tokio::test]
async fn already_cancelled_token_issues_no_request() {
    let hits = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&hits);
    let router = Router::new().route(
        "/productions",
        post(move || {
            let counter = Arc::clone(&counter);
            async move {
                counter.fetch_add(1, Ordering::SeqCst);
                (StatusCode::CREATED, Json(production_json(1, "Cats")))
            }
        }),
    );
    let app = app_for(&spawn_server(router).await);
    let cancel = CancellationToken::new();
    cancel.cancel();

    let result = app.create_production(&valid_draft(), &cancel).await;

    assert_matches!(result, Err(FlowError::Cancelled));
    assert_eq!(hits.load(Ordering::SeqCst), 0);
    assert!(app.productions.is_empty().await);
}

// ---------------------------------------------------------------------------
// Update
// ---------------------------------------------------------------------------

#[tokio::test]
async fn update_replaces_the_stored_record_in_place() {
    let router = Router::new()
        .route(
            "/productions",
            get(|| async {
                Json(json!([
                    production_json(3, "Cats"),
                    production_json(5, "Hamlet"),
                    production_json(8, "Tosca"),
                ]))
            }),
        )
        .route(
            "/productions/{id}",
            patch(|Path(id): Path<i64>, Json(body): Json<Value>| async move {
                let mut record = production_json(id, "placeholder");
                record["title"] = body["title"].clone();
                Json(record)
            }),
        );
    let app = app_for(&spawn_server(router).await);
    let cancel = CancellationToken::new();
    app.refresh_productions(&cancel)
        .await
        .expect("seed refresh should succeed");

    let draft = ProductionDraft {
        title: "Hamlet Revival".to_string(),
        ..valid_draft()
    };
    let updated = app
        .update_production(5, &draft, &cancel)
        .await
        .expect("update should succeed");

    assert_eq!(updated.title, "Hamlet Revival");
    let held = app.productions.all().await;
    let ids: Vec<i64> = held.iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![3, 5, 8]);
    assert_eq!(held[1].title, "Hamlet Revival");
}

// ---------------------------------------------------------------------------
// Delete
// ---------------------------------------------------------------------------

#[tokio::test]
async fn delete_removes_only_the_target_record() {
    let router = Router::new()
        .route(
            "/productions",
            get(|| async {
                Json(json!([
                    production_json(3, "Cats"),
                    production_json(5, "Hamlet"),
                    production_json(8, "Tosca"),
                ]))
            }),
        )
        .route(
            "/productions/{id}",
            delete(|| async { StatusCode::NO_CONTENT }),
        );
    let app = app_for(&spawn_server(router).await);
    let cancel = CancellationToken::new();
    app.refresh_productions(&cancel)
        .await
        .expect("seed refresh should succeed");

    app.delete_production(5, &cancel)
        .await
        .expect("delete should succeed");

    let ids: Vec<i64> = app.productions.all().await.iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![3, 8]);
}

#[tokio::test]
async fn delete_failure_raises_a_notice_and_keeps_the_store() {
    let router = Router::new()
        .route(
            "/productions",
            get(|| async { Json(json!([production_json(3, "Cats")])) }),
        )
        .route(
            "/productions/{id}",
            delete(|| async {
                (
                    StatusCode::NOT_FOUND,
                    Json(json!({ "message": "Could not find Production with id #3" })),
                )
            }),
        );
    let app = app_for(&spawn_server(router).await);
    let cancel = CancellationToken::new();
    app.refresh_productions(&cancel)
        .await
        .expect("seed refresh should succeed");
    let mut notices = app.notices.subscribe();

    let err = app
        .delete_production(3, &cancel)
        .await
        .expect_err("delete should fail");

    assert_matches!(err, FlowError::Api(ApiError::Api { status: 404, .. }));
    assert_eq!(app.productions.len().await, 1);

    let notice = notices.recv().await.expect("a notice should be published");
    assert_eq!(notice.level, NoticeLevel::Error);
    assert_eq!(notice.message, "Could not find Production with id #3");
}

// ---------------------------------------------------------------------------
// Transport failures
// ---------------------------------------------------------------------------

/// With no server listening at all, a refresh surfaces the outage on
/// the bus and the collection stays exactly as it was.
#[tokio::test]
async fn unreachable_server_refresh_raises_a_notice_and_keeps_the_store() {
    let app = app_for("http://127.0.0.1:9");
    let seeded: Vec<Production> = serde_json::from_value(json!([
        production_json(3, "Cats"),
        production_json(8, "Tosca"),
    ]))
    .expect("seed records should deserialize");
    app.productions.replace_all(seeded).await;
    let mut notices = app.notices.subscribe();
    let cancel = CancellationToken::new();

    let err = app
        .refresh_productions(&cancel)
        .await
        .expect_err("refresh should fail");

    assert_matches!(err, FlowError::Api(ApiError::Transport(_)));
    let ids: Vec<i64> = app.productions.all().await.iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![3, 8]);

    let notice = notices.recv().await.expect("a notice should be published");
    assert_eq!(notice.level, NoticeLevel::Error);
}

/// Transport failures on create are not inline form text: the bus gets
/// the error and nothing reaches the store.
#[tokio::test]
async fn unreachable_server_create_raises_a_notice_and_stores_nothing() {
    let app = app_for("http://127.0.0.1:9");
    let mut notices = app.notices.subscribe();
    let cancel = CancellationToken::new();

    let err = app
        .create_production(&valid_draft(), &cancel)
        .await
        .expect_err("create should fail");

    assert_matches!(err, FlowError::Api(ApiError::Transport(_)));
    assert!(app.productions.is_empty().await);

    let notice = notices.recv().await.expect("a notice should be published");
    assert_eq!(notice.level, NoticeLevel::Error);
}
