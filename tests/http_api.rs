mod common;

use axum::body::{to_bytes, Body};
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use serde_json::Value;
use std::sync::Arc;
use tower::ServiceExt;

use common::*;
use spp_ranking::api::handlers::AppState;
use spp_ranking::api::routes::create_router;
use spp_ranking::config::AppConfig;

const TOKEN: &str = "test-token";

fn app() -> Router {
    let mut config = AppConfig::default();
    config.server.admin_token = Some(TOKEN.to_string());
    let query = query_service(fixture_source(), &config);
    query.recalculate(Some(SEASON)).unwrap();
    create_router(Arc::new(AppState::new(query)))
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

async fn get(uri: &str) -> (StatusCode, Value) {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    send(app(), request).await
}

fn put_multiplier(uri: &str, token: Option<&str>, body: &str) -> Request<Body> {
    let mut builder = Request::builder()
        .method(Method::PUT)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json");
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

#[tokio::test]
async fn test_global_ranking_json_shape() {
    let (status, body) = get("/api/spp/rankings/global?pageSize=2").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], 9);
    assert_eq!(body["pageSize"], 2);
    assert_eq!(body["season"], 2023);

    let first = &body["ranking"][0];
    assert_eq!(first["rank"], 1);
    assert_eq!(first["player"]["name"], "Harry Kane");
    assert_eq!(first["player"]["league"], "Bundesliga");
    assert_eq!(first["position"], "Attacker");
    assert_eq!(first["statistics"]["goals"], 36);
    assert_close(first["finalScore"].as_f64().unwrap(), 246.0 * 0.85);
    assert_eq!(body["ranking"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_dimension_routes() {
    let (status, body) = get("/api/spp/rankings/league/39").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["ranking"][0]["player"]["id"], 3);
    assert_eq!(body["filters"]["league"], 39);

    let (status, body) = get("/api/spp/rankings/continent/South%20America").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], 1);

    let (status, body) = get("/api/spp/rankings/position/defender").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["ranking"][0]["player"]["name"], "Virgil van Dijk");

    let (status, body) = get("/api/spp/rankings/position/striker").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], 0);
}

#[tokio::test]
async fn test_bad_filters_are_400() {
    let (status, body) = get("/api/spp/rankings/global?season=abc").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("season"));

    let (status, _) = get("/api/spp/rankings/global?position=striker").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = get("/api/spp/rankings/league/premier").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_player_breakdown_route() {
    let (status, body) = get("/api/spp/player/4/spp").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["rank"], 3);
    assert!(body.get("globalRank").is_none());
    assert_eq!(body["finalScore"], body["breakdown"]["finalScore"]);
    assert_eq!(body["statistics"]["goals"], 19);
    assert_eq!(body["breakdown"]["goalPoints"], 152.0);
    assert_eq!(body["breakdown"]["penaltyPoints"], -13.0);
    assert_eq!(body["weights"]["goal"], 8.0);

    let (status, body) = get("/api/spp/player/999/spp").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn test_recalculate_route() {
    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/spp/recalculate")
        .body(Body::empty())
        .unwrap();
    let (status, body) = send(app(), request).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["recomputed"], 9);
    assert_eq!(body["skippedInvalid"], 1);
    assert_eq!(body["total"], 10);
    assert_eq!(body["failures"][0]["playerId"], 10);

    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/spp/recalculate")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(r#"{"season": 2022}"#))
        .unwrap();
    let (status, body) = send(app(), request).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["season"], 2022);
    assert_eq!(body["total"], 0);
}

#[tokio::test]
async fn test_stats_overview_route() {
    let (status, body) = get("/api/spp/stats/overview").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["totalPlayers"], 9);
    assert_eq!(body["totalLeagues"], 5);
    assert_eq!(body["topPlayers"][0]["player"]["id"], 8);

    let (status, body) = get("/api/spp/stats/overview?season=2010").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["totalPlayers"], 0);
    assert_eq!(body["avgScore"], 0.0);
}

#[tokio::test]
async fn test_leagues_route() {
    let (status, body) = get("/api/leagues").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 9);
}

#[tokio::test]
async fn test_multiplier_update_requires_token() {
    let uri = "/api/admin/leagues/39/multiplier";

    let (status, _) = send(app(), put_multiplier(uri, None, r#"{"multiplier": 1.1}"#)).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, _) = send(app(), put_multiplier(uri, Some("wrong"), r#"{"multiplier": 1.1}"#)).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, body) = send(app(), put_multiplier(uri, Some(TOKEN), r#"{"multiplier": 1.1}"#)).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert_eq!(body, Value::Null);
}

#[tokio::test]
async fn test_multiplier_update_validation() {
    let (status, _) = send(
        app(),
        put_multiplier("/api/admin/leagues/39/multiplier", Some(TOKEN), r#"{"multiplier": -2}"#),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = send(
        app(),
        put_multiplier("/api/admin/leagues/4242/multiplier", Some(TOKEN), r#"{"multiplier": 1.0}"#),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_unset_admin_token_rejects() {
    let query = query_service(fixture_source(), &AppConfig::default());
    let app = create_router(Arc::new(AppState::new(query)));
    let (status, _) = send(
        app,
        put_multiplier("/api/admin/leagues/39/multiplier", Some(TOKEN), r#"{"multiplier": 1.0}"#),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}
