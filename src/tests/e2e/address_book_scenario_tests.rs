use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header},
};
use http_body_util::BodyExt;
use tower::ServiceExt;

use crate::modules::address_book::core::record::Record;
use crate::modules::address_book::core::record_store::RecordStore;
use crate::shell::http::router;
use crate::tests::fixtures::records::RecordBuilder;
use crate::tests::fixtures::state::make_test_state;

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Option<String>, Vec<u8>) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let location = response
        .headers()
        .get(header::LOCATION)
        .map(|v| v.to_str().unwrap().to_string());
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, location, bytes.to_vec())
}

fn json_request(method: &str, uri: &str, body: String) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body))
        .unwrap()
}

fn empty_request(method: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

#[tokio::test]
async fn create_create_delete_leaves_only_the_first_record() {
    let test_state = make_test_state().await;
    let app = router(test_state.state.clone());

    let charles = RecordBuilder::new().to_json();
    let (status, location, _) = send(&app, json_request("POST", "/records", charles)).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(location.as_deref(), Some("/records/1"));

    let mike = RecordBuilder::new()
        .first_name("Mike")
        .last_name("Jones")
        .to_json();
    let (_, location, _) = send(&app, json_request("POST", "/records", mike)).await;
    assert_eq!(location.as_deref(), Some("/records/2"));

    let (status, _, _) = send(&app, empty_request("DELETE", "/records/2")).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, _, body) = send(&app, empty_request("GET", "/records")).await;
    assert_eq!(status, StatusCode::OK);
    let listed: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(
        listed,
        serde_json::json!({
            "1": {
                "id": "1",
                "first_name": "Charles",
                "last_name": "Smith",
                "email": "x@x.com",
                "phone": "555-555-0000"
            }
        })
    );

    let (status, _, _) = send(&app, empty_request("GET", "/records/2")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let snapshot = test_state.state.store.lock().await.snapshot();
    assert_eq!(snapshot.len(), 2);
    assert_eq!(snapshot[&0], Record::sentinel(2));

    let reloaded = RecordStore::load(test_state.database.clone()).await.unwrap();
    assert_eq!(reloaded.snapshot(), snapshot);
}

#[tokio::test]
async fn update_then_export_import_and_save() {
    let test_state = make_test_state().await;
    let app = router(test_state.state.clone());

    for first_name in ["Ann", "Bob", "Cid"] {
        let body = RecordBuilder::new().first_name(first_name).to_json();
        send(&app, json_request("POST", "/records", body)).await;
    }
    let (status, _, _) = send(
        &app,
        json_request("PUT", "/records/2", r#"{"email":"bob@x.com"}"#.into()),
    )
    .await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    send(&app, empty_request("DELETE", "/records/1")).await;

    let (status, _, _) = send(&app, empty_request("POST", "/records/export")).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    let (status, _, _) = send(&app, empty_request("POST", "/records/import")).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (_, _, body) = send(&app, empty_request("GET", "/records/1")).await;
    let bob: Record = serde_json::from_slice(&body).unwrap();
    assert_eq!(bob.id, "1");
    assert_eq!(bob.email, "bob@x.com");

    let writes_before_save = test_state.database.write_count();
    let (status, _, _) = send(&app, empty_request("POST", "/records/save")).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert_eq!(test_state.database.write_count(), writes_before_save + 1);

    let reloaded = RecordStore::load(test_state.database.clone()).await.unwrap();
    assert_eq!(reloaded.last_id(), 2);
    assert_eq!(reloaded.get(2).unwrap().first_name, "Cid");
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_creates_get_distinct_sequential_ids() {
    const REQUESTS: u64 = 32;
    let test_state = make_test_state().await;
    let app = router(test_state.state.clone());

    let handles: Vec<_> = (0..REQUESTS)
        .map(|n| {
            let app = app.clone();
            tokio::spawn(async move {
                let body = RecordBuilder::new().first_name(format!("Person{n}")).to_json();
                send(&app, json_request("POST", "/records", body)).await
            })
        })
        .collect();

    let mut ids = Vec::new();
    for handle in handles {
        let (status, location, _) = handle.await.unwrap();
        assert_eq!(status, StatusCode::CREATED);
        let location = location.unwrap();
        let id: u64 = location.trim_start_matches("/records/").parse().unwrap();
        ids.push(id);
    }
    ids.sort_unstable();
    assert_eq!(ids, (1..=REQUESTS).collect::<Vec<_>>());

    let bytes = test_state.database.contents().await.unwrap();
    let on_disk: std::collections::BTreeMap<u64, Record> = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(on_disk.len() as u64, REQUESTS + 1);
    assert_eq!(on_disk[&0].id, REQUESTS.to_string());
    assert_eq!(test_state.database.write_count() as u64, REQUESTS + 1);
}
