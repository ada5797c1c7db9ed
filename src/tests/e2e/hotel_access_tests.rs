use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use std::sync::Arc;
use std::time::Duration;
use tower::ServiceExt;

use crate::modules::hotels::adapters::outbound::store_in_memory::InMemoryStore;
use crate::modules::hotels::core::entities::TicketStatus;
use crate::shared::core::primitives::format_iso_millis;
use crate::shell::auth::USER_ID_HEADER;
use crate::shell::http::router;
use crate::shell::state::AppState;
use crate::tests::fixtures::{ENTITLED_USER, UserTicketBuilder, seed_enrollment_only};

fn app(store: Arc<InMemoryStore>) -> Router {
    router(AppState::new(store), Duration::from_secs(5))
}

async fn get(app: &Router, path: &str) -> (StatusCode, serde_json::Value) {
    let response = app
        .clone()
        .oneshot(
            Request::get(path)
                .header(USER_ID_HEADER, ENTITLED_USER.to_string())
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null);
    (status, json)
}

#[tokio::test]
async fn paid_in_person_ticket_sees_the_catalog() {
    let store = Arc::new(InMemoryStore::new());
    UserTicketBuilder::new().seed(&store, ENTITLED_USER).await;
    let hotel = store.insert_hotel("nice hotel", "nice image").await;
    let app = app(store);

    let (status, list) = get(&app, "/hotels").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        list,
        serde_json::json!([{
            "id": hotel.id.value(),
            "name": "nice hotel",
            "image": "nice image",
            "createdAt": format_iso_millis(&hotel.created_at),
            "updatedAt": format_iso_millis(&hotel.updated_at),
        }])
    );

    let (status, detail) = get(&app, &format!("/hotels/{}", hotel.id)).await;
    assert_eq!(status, StatusCode::OK);
    let mut expected = list[0].clone();
    expected["Rooms"] = serde_json::json!([]);
    assert_eq!(detail, expected);

    let (_, again) = get(&app, "/hotels").await;
    assert_eq!(again, list);
}

#[tokio::test]
async fn reserved_ticket_is_unauthorized_everywhere() {
    let store = Arc::new(InMemoryStore::new());
    UserTicketBuilder::new()
        .status(TicketStatus::Reserved)
        .seed(&store, ENTITLED_USER)
        .await;
    let hotel = store.insert_hotel("nice hotel", "nice image").await;
    let app = app(store);

    let (list_status, _) = get(&app, "/hotels").await;
    let (detail_status, _) = get(&app, &format!("/hotels/{}", hotel.id)).await;

    assert_eq!(list_status, StatusCode::UNAUTHORIZED);
    assert_eq!(detail_status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn enrollment_without_ticket_is_not_found_everywhere() {
    let store = Arc::new(InMemoryStore::new());
    seed_enrollment_only(&store, ENTITLED_USER).await;
    let hotel = store.insert_hotel("nice hotel", "nice image").await;
    let app = app(store);

    let (list_status, _) = get(&app, "/hotels").await;
    let (detail_status, _) = get(&app, &format!("/hotels/{}", hotel.id)).await;

    assert_eq!(list_status, StatusCode::NOT_FOUND);
    assert_eq!(detail_status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn entitlement_follows_ticket_state_between_calls() {
    let store = Arc::new(InMemoryStore::new());
    seed_enrollment_only(&store, ENTITLED_USER).await;
    let app = app(store.clone());

    let (before, _) = get(&app, "/hotels").await;
    UserTicketBuilder::new().seed(&store, ENTITLED_USER).await;
    let (after, body) = get(&app, "/hotels").await;

    assert_eq!(before, StatusCode::NOT_FOUND);
    assert_eq!(after, StatusCode::OK);
    assert_eq!(body, serde_json::json!([]));
}
