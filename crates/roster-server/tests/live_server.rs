//! Smoke test against a running server.
//!
//! ```bash
//! STORE_BACKEND=memory cargo run --bin roster-server
//!
//! # in another terminal
//! ROSTER_URL=http://localhost:4000 cargo test --test live_server -- --ignored --nocapture
//! ```

use reqwest::{Client, StatusCode};
use serde::Deserialize;
use serde_json::json;

#[derive(Debug, Deserialize)]
struct Envelope<T> {
    success: bool,
    message: Option<String>,
    data: Option<T>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct StudentView {
    id: String,
    name: String,
    student_code: String,
    is_active: bool,
}

fn base_url() -> String {
    std::env::var("ROSTER_URL").unwrap_or_else(|_| "http://localhost:4000".to_string())
}

#[tokio::test]
#[ignore = "requires a running roster-server"]
async fn student_lifecycle() {
    let client = Client::new();
    let base = base_url();
    let code = format!("LIVE-{}", uuid::Uuid::new_v4());

    let response = client
        .post(format!("{base}/students"))
        .json(&json!({ "name": "Live Test", "studentCode": code, "isActive": true }))
        .send()
        .await
        .expect("create request");
    assert_eq!(response.status(), StatusCode::CREATED);
    let created: Envelope<StudentView> = response.json().await.expect("create body");
    assert!(created.success);
    let student = created.data.expect("created student");
    assert_eq!(student.name, "Live Test");
    assert_eq!(student.student_code, code);
    assert!(student.is_active);
    println!("Created student {}", student.id);

    let response = client
        .put(format!("{base}/students/{}", student.id))
        .json(&json!({ "name": "Live Test Renamed", "isActive": false }))
        .send()
        .await
        .expect("update request");
    assert_eq!(response.status(), StatusCode::OK);
    let updated: Envelope<StudentView> = response.json().await.expect("update body");
    let updated = updated.data.expect("updated student");
    assert_eq!(updated.student_code, code);
    assert!(!updated.is_active);

    let response = client
        .delete(format!("{base}/students/{}", student.id))
        .send()
        .await
        .expect("delete request");
    assert_eq!(response.status(), StatusCode::OK);
    let deleted: Envelope<serde_json::Value> = response.json().await.expect("delete body");
    assert_eq!(deleted.message.as_deref(), Some("Student deleted successfully"));

    let response = client
        .get(format!("{base}/students/{}", student.id))
        .send()
        .await
        .expect("get request");
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
