//! End-to-end tests for the backend client against a local mock server.

use axum::extract::Path;
use axum::http::StatusCode;
use axum::routing::{delete, get, post};
use axum::{Json, Router};
use client::{RequestError, SettingRecordClient, WriteOutcome};
use contracts::SettingRecord;
use serde_json::{json, Value};

/// Serve a router on an ephemeral port, returning its base URL.
async fn serve(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind ephemeral port");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("serve");
    });
    format!("http://{addr}/")
}

#[tokio::test]
async fn create_returns_the_echoed_record() {
    let router = Router::new().route(
        "/api/climb-sector-setting",
        post(|Json(body): Json<Value>| async move {
            assert_eq!(body["sectorId"], json!(42));
            assert_eq!(body["settingDate"], json!("2024-03-01"));
            (
                StatusCode::CREATED,
                Json(json!({ "id": 7, "sectorId": 42, "settingDate": "2024-03-01" })),
            )
        }),
    );
    let client = SettingRecordClient::new(serve(router).await);

    let outcome = client.create_setting_record(42, "2024-03-01").await.unwrap();
    assert_eq!(
        outcome,
        WriteOutcome::Record(SettingRecord::new(7, 42, "2024-03-01"))
    );
}

#[tokio::test]
async fn create_against_failing_backend_is_an_error() {
    let router = Router::new().route(
        "/api/climb-sector-setting",
        post(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") }),
    );
    let client = SettingRecordClient::new(serve(router).await);

    let err = client.create_setting_record(42, "2024-03-01").await.unwrap_err();
    assert_eq!(err.status(), Some(500));
    assert!(matches!(err, RequestError::Status { .. }));
}

#[tokio::test]
async fn create_with_unparsable_body_is_a_soft_success() {
    let router = Router::new().route(
        "/api/climb-sector-setting",
        post(|| async { (StatusCode::CREATED, "created") }),
    );
    let client = SettingRecordClient::new(serve(router).await);

    let outcome = client.create_setting_record(42, "2024-03-01").await.unwrap();
    assert_eq!(outcome, WriteOutcome::Unparsed);
}

#[tokio::test]
async fn delete_with_empty_body_returns_none() {
    let router = Router::new().route(
        "/api/climb-sector-setting/:id",
        delete(|Path(id): Path<i64>| async move {
            assert_eq!(id, 7);
            StatusCode::NO_CONTENT
        }),
    );
    let client = SettingRecordClient::new(serve(router).await);

    let deleted = client.delete_setting_record(7).await.unwrap();
    assert_eq!(deleted, None);
}

#[tokio::test]
async fn delete_returns_the_echoed_record() {
    let router = Router::new().route(
        "/api/climb-sector-setting/:id",
        delete(|Path(id): Path<i64>| async move {
            Json(json!({ "id": id, "sectorId": 42, "settingDate": "2024-03-01" }))
        }),
    );
    let client = SettingRecordClient::new(serve(router).await);

    let deleted = client.delete_setting_record(7).await.unwrap();
    assert_eq!(deleted, Some(SettingRecord::new(7, 42, "2024-03-01")));
}

#[tokio::test]
async fn delete_surfaces_whatever_status_the_backend_returns() {
    let router = Router::new().route(
        "/api/climb-sector-setting/:id",
        delete(|| async { StatusCode::NOT_FOUND }),
    );
    let client = SettingRecordClient::new(serve(router).await);

    let err = client.delete_setting_record(12345).await.unwrap_err();
    assert_eq!(err.status(), Some(404));
}

#[tokio::test]
async fn create_sector_follows_the_same_write_contract() {
    let router = Router::new().route(
        "/api/climb-sector",
        post(|Json(body): Json<Value>| async move {
            assert_eq!(body["climbCenterId"], json!(3));
            assert_eq!(body["name"], json!("Slab Wall"));
            (
                StatusCode::CREATED,
                Json(json!({
                    "id": 9,
                    "name": "Slab Wall",
                    "climbCenterId": 3,
                    "settingHistory": []
                })),
            )
        }),
    );
    let client = SettingRecordClient::new(serve(router).await);

    let outcome = client.create_sector(3, "Slab Wall").await.unwrap();
    let sector = outcome.record().expect("parsed sector");
    assert_eq!(sector.id, 9);
    assert_eq!(sector.climb_center_id, 3);
    assert!(sector.setting_history.is_empty());
}

fn center_body() -> Value {
    json!({
        "id": 3,
        "name": "The Climb Gangnam",
        "address": "123 Teheran-ro, Seoul",
        "brandId": 1,
        "instagramUrl": "https://instagram.com/theclimb",
        "brand": { "id": 1, "name": "The Climb" },
        "sectors": [
            {
                "id": 42,
                "name": "Overhang Wall",
                "climbCenterId": 3,
                "settingHistory": [
                    { "id": 7, "sectorId": 42, "settingDate": "2024-03-01" }
                ]
            }
        ]
    })
}

#[tokio::test]
async fn fetch_climb_center_validates_the_response() {
    let router = Router::new().route(
        "/api/climb-center/:id",
        get(|Path(id): Path<i64>| async move {
            assert_eq!(id, 3);
            Json(center_body())
        }),
    );
    let client = SettingRecordClient::new(serve(router).await);

    let center = client.fetch_climb_center(3).await.unwrap();
    assert_eq!(center.name, "The Climb Gangnam");
    assert_eq!(center.sectors[0].setting_history[0].setting_date, "2024-03-01");
}

#[tokio::test]
async fn fetch_rejects_a_malformed_entity_with_the_field_path() {
    let mut body = center_body();
    body["sectors"][0].as_object_mut().unwrap().remove("name");
    let router = Router::new().route(
        "/api/climb-center/:id",
        get(move || async move { Json(body) }),
    );
    let client = SettingRecordClient::new(serve(router).await);

    let err = client.fetch_climb_center(3).await.unwrap_err();
    match err {
        RequestError::Decode(e) => assert_eq!(e.path, "sectors[0].name"),
        other => panic!("expected decode error, got {other:?}"),
    }
}

#[tokio::test]
async fn fetch_climb_centers_validates_each_element() {
    let router = Router::new().route(
        "/api/climb-center",
        get(|| async { Json(json!([center_body()])) }),
    );
    let client = SettingRecordClient::new(serve(router).await);

    let centers = client.fetch_climb_centers().await.unwrap();
    assert_eq!(centers.len(), 1);
    assert_eq!(centers[0].brand.name, "The Climb");
}
