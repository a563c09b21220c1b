//! End-to-end scenario against a live server.
//!
//! Starts the server on a random port with the in-memory backend, then talks
//! to it over real HTTP using ureq.

use std::sync::Arc;

use serde_json::{json, Value};
use todo_core::MemoryStore;

struct Response {
    status: u16,
    body: Value,
}

/// Returns 4xx/5xx responses as data rather than `Err`.
fn agent() -> ureq::Agent {
    ureq::Agent::config_builder()
        .http_status_as_error(false)
        .build()
        .new_agent()
}

fn get(url: &str) -> Response {
    let mut response = agent().get(url).call().expect("HTTP transport error");
    let status = response.status().as_u16();
    let text = response.body_mut().read_to_string().unwrap_or_default();
    Response {
        status,
        body: serde_json::from_str(&text).unwrap_or(Value::Null),
    }
}

fn post_json(url: &str, body: &Value) -> Response {
    let mut response = agent()
        .post(url)
        .content_type("application/json")
        .send(body.to_string().as_bytes())
        .expect("HTTP transport error");
    let status = response.status().as_u16();
    let text = response.body_mut().read_to_string().unwrap_or_default();
    Response {
        status,
        body: serde_json::from_str(&text).unwrap_or(Value::Null),
    }
}

fn start_server() -> String {
    let std_listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = std_listener.local_addr().unwrap();
    std_listener.set_nonblocking(true).unwrap();

    std::thread::spawn(move || {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        rt.block_on(async {
            let listener = tokio::net::TcpListener::from_std(std_listener).unwrap();
            todo_server::run(listener, Arc::new(MemoryStore::new())).await
        })
        .unwrap();
    });

    format!("http://{addr}")
}

#[test]
fn buy_milk_scenario() {
    let base = start_server();

    // Step 1: readiness check.
    assert_eq!(get(&format!("{base}/ready")).status, 200);

    // Step 2: list is empty.
    let listed = get(&format!("{base}/todos"));
    assert_eq!(listed.status, 200);
    assert_eq!(listed.body, json!([]));

    // Step 3: create.
    let created = post_json(
        &format!("{base}/todos"),
        &json!({ "description": "buy milk", "isComplete": false }),
    );
    assert_eq!(created.status, 201);
    assert_eq!(created.body["description"], "buy milk");
    let id = created.body["id"].as_str().expect("generated id").to_string();

    // Step 4: the list includes it.
    let listed = get(&format!("{base}/todos"));
    assert_eq!(listed.status, 200);
    assert_eq!(listed.body, json!([created.body.clone()]));

    // Step 5: fetch by id.
    let fetched = get(&format!("{base}/todos/{id}"));
    assert_eq!(fetched.status, 200);
    assert_eq!(fetched.body, created.body);

    // Step 6: invalid create is rejected and changes nothing.
    let rejected = post_json(&format!("{base}/todos"), &json!({ "isComplete": false }));
    assert_eq!(rejected.status, 400);
    assert_eq!(
        rejected.body,
        json!({ "message": "Please provide description, and isComplete fields" })
    );
    let listed = get(&format!("{base}/todos"));
    assert_eq!(listed.body.as_array().map(Vec::len), Some(1));

    // Step 7: unknown id.
    let missing = get(&format!("{base}/todos/{}", uuid::Uuid::new_v4()));
    assert_eq!(missing.status, 404);
    assert_eq!(missing.body, json!({ "message": "Todo not found" }));
}
