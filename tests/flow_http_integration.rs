//! End-to-end HTTP tests driving the full API router with the real
//! in-memory adapters.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use bnpl_coach::adapters::events::InMemoryFlowEventPublisher;
use bnpl_coach::adapters::http::{api_router, AppState};
use bnpl_coach::adapters::storage::InMemoryFlowStore;
use bnpl_coach::config::SimulationConfig;

fn app() -> axum::Router {
    let state = AppState::new(
        Arc::new(InMemoryFlowStore::new()),
        Arc::new(InMemoryFlowEventPublisher::new()),
        SimulationConfig::default(),
    );
    api_router(state)
}

fn post(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

async fn send(app: &axum::Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, json)
}

#[tokio::test]
async fn health_endpoint_responds() {
    let app = app();
    let response = app.oneshot(get("/health")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn store_endpoint_serves_fixed_item_list() {
    let app = app();
    let (status, json) = send(&app, get("/api/store/items")).await;

    assert_eq!(status, StatusCode::OK);
    let items = json.as_array().unwrap();
    assert_eq!(items.len(), 29);
    assert_eq!(items[0]["name"], "Apple");
    assert_eq!(items[28]["name"], "Tangerine");
}

#[tokio::test]
async fn store_endpoint_is_idempotent() {
    let app = app();
    let (_, first) = send(&app, get("/api/store/items")).await;
    let (_, second) = send(&app, get("/api/store/items")).await;
    assert_eq!(first, second);
}

/// Walks the canonical session: finance the shoes, buy the iPhone outright,
/// decline the console, pay the unexpected expense in full.
#[tokio::test]
async fn full_walkthrough_produces_expected_summary() {
    let app = app();

    let (status, json) = send(&app, post("/api/flows", "{}")).await;
    assert_eq!(status, StatusCode::CREATED);
    let flow_id = json["flow_id"].as_str().unwrap().to_string();

    let decisions = [
        r#"{"bought": true, "used_bnpl": true}"#,
        r#"{"bought": true, "used_bnpl": false}"#,
        r#"{"bought": false, "used_bnpl": false}"#,
        r#"{"bought": true, "used_bnpl": false}"#,
    ];
    for (i, decision) in decisions.iter().enumerate() {
        let (status, json) =
            send(&app, post(&format!("/api/flows/{}/decision", flow_id), decision)).await;
        assert_eq!(status, StatusCode::OK, "decision {} failed: {}", i, json);
        assert_eq!(json["view_mode"], "intermediate_summary");

        let (status, json) =
            send(&app, post(&format!("/api/flows/{}/advance", flow_id), "")).await;
        assert_eq!(status, StatusCode::OK);
        if i == decisions.len() - 1 {
            assert_eq!(json["view_mode"], "final_summary");
        } else {
            assert_eq!(json["view_mode"], "deciding");
            assert_eq!(json["current_step"], i + 1);
        }
    }

    let (status, json) = send(&app, get(&format!("/api/flows/{}/summary", flow_id))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["happiness_score"], 60);
    assert_eq!(json["initial_balance"], "1000");
    assert_eq!(json["remaining_balance"], "-400");
    assert_eq!(json["weekly_debt"], "50");
    assert_eq!(json["total_bnpl_debt"], "200");
    assert_eq!(json["weekly_breakdown"], serde_json::json!(["50", "50", "50", "50"]));
}

#[tokio::test]
async fn fresh_flow_summary_matches_initial_state() {
    let app = app();

    let (_, json) = send(&app, post("/api/flows", "{}")).await;
    let flow_id = json["flow_id"].as_str().unwrap().to_string();

    let (status, json) = send(&app, get(&format!("/api/flows/{}/summary", flow_id))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["happiness_score"], 0);
    assert_eq!(json["remaining_balance"], "1000");
    assert_eq!(json["weekly_breakdown"], serde_json::json!(["0", "0", "0", "0"]));
    assert_eq!(
        json["weekly_balance"],
        serde_json::json!(["1000", "1000", "1000", "1000"])
    );
}

#[tokio::test]
async fn back_from_final_summary_returns_to_intermediate() {
    let app = app();

    let (_, json) = send(&app, post("/api/flows", "{}")).await;
    let flow_id = json["flow_id"].as_str().unwrap().to_string();

    for _ in 0..4 {
        send(
            &app,
            post(&format!("/api/flows/{}/decision", flow_id), r#"{"bought": false}"#),
        )
        .await;
        send(&app, post(&format!("/api/flows/{}/advance", flow_id), "")).await;
    }

    let (status, json) = send(&app, post(&format!("/api/flows/{}/back", flow_id), "")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["view_mode"], "intermediate_summary");
    // The decision list is untouched by this transition.
    assert_eq!(json["decisions"].as_array().unwrap().len(), 4);
}

#[tokio::test]
async fn reset_restores_a_finished_flow() {
    let app = app();

    let (_, json) = send(&app, post("/api/flows", "{}")).await;
    let flow_id = json["flow_id"].as_str().unwrap().to_string();

    for _ in 0..4 {
        send(
            &app,
            post(
                &format!("/api/flows/{}/decision", flow_id),
                r#"{"bought": true, "used_bnpl": false}"#,
            ),
        )
        .await;
        send(&app, post(&format!("/api/flows/{}/advance", flow_id), "")).await;
    }

    let (status, json) = send(&app, post(&format!("/api/flows/{}/reset", flow_id), "")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["view_mode"], "deciding");
    assert_eq!(json["happiness_score"], 0);

    let (_, json) = send(&app, get(&format!("/api/flows/{}/summary", flow_id))).await;
    assert_eq!(json["remaining_balance"], "1000");
}

#[tokio::test]
async fn unknown_flow_id_maps_to_not_found() {
    let app = app();
    let uri = format!("/api/flows/{}/advance", uuid::Uuid::new_v4());
    let (status, json) = send(&app, post(&uri, "")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["code"], "NOT_FOUND");
}

#[tokio::test]
async fn decision_in_summary_mode_maps_to_conflict() {
    let app = app();

    let (_, json) = send(&app, post("/api/flows", "{}")).await;
    let flow_id = json["flow_id"].as_str().unwrap().to_string();

    let uri = format!("/api/flows/{}/decision", flow_id);
    send(&app, post(&uri, r#"{"bought": true}"#)).await;
    let (status, json) = send(&app, post(&uri, r#"{"bought": true}"#)).await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(json["code"], "CONFLICT");
}
