//! Transport-level tests against a local fixture HTTP server.
//!
//! Each test serves a scripted sequence of canned responses (usually just
//! one) on a random port, points a client at it and inspects both the
//! decoded results and the raw requests the client actually sent (method,
//! path, headers, body).

#![allow(clippy::unwrap_used, clippy::panic)]

use habitica_cli::commands::{self, GlobalArgs};
use habitica_cli::config::{Config, DEFAULT_CLIENT_ID, DEFAULT_USER_AGENT};
use habitica_cli::services::{ScoreDirection, TaskKind, TaskUpdateRequest, TasksFilter, Uuid};
use habitica_cli::{Client, Error};
use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::sync::mpsc;
use std::thread;
use std::time::Duration;
use tempfile::TempDir;

const TEST_USER: &str = "test-user-id";
const TEST_TOKEN: &str = "test-api-token";

/// One HTTP request as seen by the server.
struct CapturedRequest {
    method: String,
    /// Path including the query string.
    target: String,
    headers: Vec<(String, String)>,
    body: Vec<u8>,
}

impl CapturedRequest {
    fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    fn body_json(&self) -> serde_json::Value {
        serde_json::from_slice(&self.body).unwrap()
    }
}

fn find_header_end(raw: &[u8]) -> Option<usize> {
    raw.windows(4).position(|window| window == b"\r\n\r\n")
}

fn parse_request(head: &[u8], body: &[u8]) -> CapturedRequest {
    let head = String::from_utf8_lossy(head);
    let mut lines = head.lines();
    let request_line = lines.next().unwrap();
    let mut parts = request_line.split_whitespace();
    let method = parts.next().unwrap().to_string();
    let target = parts.next().unwrap().to_string();

    let headers = lines
        .filter_map(|line| {
            let (name, value) = line.split_once(':')?;
            Some((name.trim().to_string(), value.trim().to_string()))
        })
        .collect();

    CapturedRequest {
        method,
        target,
        headers,
        body: body.to_vec(),
    }
}

/// Serve exactly one request with the given response, returning the base URL
/// for the client and a channel yielding the captured request.
fn serve_once(status: u16, body: impl Into<String>) -> (String, mpsc::Receiver<CapturedRequest>) {
    serve_sequence(vec![(status, body.into())])
}

/// Serve a scripted sequence of responses, one connection per request. Every
/// captured request is sent on the channel before its response goes out, so
/// once a call returns the channel holds everything sent up to that point.
fn serve_sequence(responses: Vec<(u16, String)>) -> (String, mpsc::Receiver<CapturedRequest>) {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    let (tx, rx) = mpsc::channel();

    thread::spawn(move || {
        for (status, body) in responses {
            let (mut stream, _) = listener.accept().unwrap();
            tx.send(read_request(&mut stream)).unwrap();

            let response = format!(
                "HTTP/1.1 {status} {reason}\r\nContent-Type: application/json\r\nContent-Length: {len}\r\nConnection: close\r\n\r\n{body}",
                reason = reason_phrase(status),
                len = body.len(),
            );
            stream.write_all(response.as_bytes()).unwrap();
            stream.flush().unwrap();
        }
    });

    (format!("http://127.0.0.1:{port}/api/v3"), rx)
}

/// Read one full HTTP request (head plus `Content-Length` bytes of body).
fn read_request(stream: &mut TcpStream) -> CapturedRequest {
    let mut raw = Vec::new();
    let mut buf = [0u8; 4096];
    let (head_end, content_length) = loop {
        let n = stream.read(&mut buf).unwrap();
        assert!(n > 0, "connection closed mid-request");
        raw.extend_from_slice(&buf[..n]);
        if let Some(pos) = find_header_end(&raw) {
            let head = String::from_utf8_lossy(&raw[..pos]);
            let content_length = head
                .lines()
                .find_map(|line| {
                    let (name, value) = line.split_once(':')?;
                    if name.eq_ignore_ascii_case("content-length") {
                        value.trim().parse::<usize>().ok()
                    } else {
                        None
                    }
                })
                .unwrap_or(0);
            break (pos, content_length);
        }
    };
    let body_start = head_end + 4;
    while raw.len() < body_start + content_length {
        let n = stream.read(&mut buf).unwrap();
        assert!(n > 0, "connection closed mid-body");
        raw.extend_from_slice(&buf[..n]);
    }

    parse_request(
        &raw[..head_end],
        &raw[body_start..body_start + content_length],
    )
}

fn reason_phrase(status: u16) -> &'static str {
    match status {
        200 => "OK",
        201 => "Created",
        401 => "Unauthorized",
        404 => "Not Found",
        500 => "Internal Server Error",
        502 => "Bad Gateway",
        _ => "Status",
    }
}

fn test_client(base_url: &str) -> Client {
    let config = Config {
        base_url: base_url.to_string(),
        user_id: TEST_USER.to_string(),
        api_token: TEST_TOKEN.to_string(),
    };
    Client::new(&config).unwrap()
}

fn recv(rx: &mpsc::Receiver<CapturedRequest>) -> CapturedRequest {
    rx.recv_timeout(Duration::from_secs(5)).unwrap()
}

/// Global args pointing the command layer at a fixture server, with
/// credentials supplied through a config file under `temp`.
fn fixture_args(temp: &TempDir, base_url: &str) -> GlobalArgs {
    let path = temp.path().join("config.yaml");
    std::fs::write(
        &path,
        format!("user_id: {TEST_USER}\napi_token: {TEST_TOKEN}\n"),
    )
    .unwrap();
    GlobalArgs {
        config: Some(path),
        base_url: Some(base_url.to_string()),
        verbose: false,
    }
}

#[tokio::test]
async fn test_get_user_sends_auth_headers_and_decodes_envelope() {
    let (base_url, rx) = serve_once(
        200,
        r#"{"success": true, "data": {"_id": "u-1", "profile": {"name": "Dev"}}}"#,
    );
    let client = test_client(&base_url);

    let user = client.user().get_current().await.unwrap();
    assert_eq!(user.id.as_str(), "u-1");
    assert_eq!(user.profile.name, "Dev");

    let req = recv(&rx);
    assert_eq!(req.method, "GET");
    assert_eq!(req.target, "/api/v3/user");
    assert_eq!(req.header("x-api-user"), Some(TEST_USER));
    assert_eq!(req.header("x-api-key"), Some(TEST_TOKEN));
    assert_eq!(req.header("accept"), Some("application/json"));
    assert_eq!(req.header("user-agent"), Some(DEFAULT_USER_AGENT));
    assert_eq!(req.header("x-client"), Some(DEFAULT_CLIENT_ID));
}

#[tokio::test]
async fn test_list_tasks_sends_type_filter() {
    let (base_url, rx) = serve_once(
        200,
        r#"{"success": true, "data": [{"_id": "t-1", "text": "Run", "type": "habit"}]}"#,
    );
    let client = test_client(&base_url);

    let tasks = client
        .tasks()
        .list(TasksFilter::kind(TaskKind::Habits))
        .await
        .unwrap();
    assert_eq!(tasks.len(), 1);
    assert_eq!(tasks[0].text, "Run");

    let req = recv(&rx);
    assert_eq!(req.target, "/api/v3/tasks/user?type=habits");
}

#[tokio::test]
async fn test_list_tasks_without_filter_has_no_query() {
    let (base_url, rx) = serve_once(200, r#"{"success": true, "data": []}"#);
    let client = test_client(&base_url);

    let tasks = client.tasks().list(TasksFilter::default()).await.unwrap();
    assert!(tasks.is_empty());

    let req = recv(&rx);
    assert_eq!(req.target, "/api/v3/tasks/user");
}

#[tokio::test]
async fn test_create_todo_sends_checklist_body() {
    let (base_url, rx) = serve_once(
        201,
        r#"{"success": true, "data": {"_id": "t-9", "text": "Shopping", "type": "todo"}}"#,
    );
    let client = test_client(&base_url);

    let task = client
        .tasks()
        .create_todo_with_checklist(
            "Shopping",
            &["Milk".to_string(), String::new(), "Bread".to_string()],
        )
        .await
        .unwrap();
    assert_eq!(task.id.as_str(), "t-9");

    let req = recv(&rx);
    assert_eq!(req.method, "POST");
    assert_eq!(req.target, "/api/v3/tasks/user");
    assert_eq!(req.header("content-type"), Some("application/json"));
    assert_eq!(
        req.body_json(),
        serde_json::json!({
            "text": "Shopping",
            "type": "todo",
            "priority": 1.0,
            "attribute": "str",
            "checklist": [{"text": "Milk"}, {"text": "Bread"}],
        })
    );
}

#[tokio::test]
async fn test_score_posts_direction_path() {
    let (base_url, rx) = serve_once(200, r#"{"success": true, "data": {"delta": 1}}"#);
    let client = test_client(&base_url);

    client
        .tasks()
        .score(&Uuid::new("t-1"), ScoreDirection::Up)
        .await
        .unwrap();

    let req = recv(&rx);
    assert_eq!(req.method, "POST");
    assert_eq!(req.target, "/api/v3/tasks/t-1/score/up");
    assert!(req.body.is_empty());
}

#[tokio::test]
async fn test_checklist_toggle_puts_completed_body() {
    let (base_url, rx) = serve_once(200, r#"{"success": true}"#);
    let client = test_client(&base_url);

    client
        .tasks()
        .update_checklist_item_completed(&Uuid::new("t-1"), &Uuid::new("c-9"), true)
        .await
        .unwrap();

    let req = recv(&rx);
    assert_eq!(req.method, "PUT");
    assert_eq!(req.target, "/api/v3/tasks/t-1/checklist/c-9");
    assert_eq!(req.body_json(), serde_json::json!({"completed": true}));
}

#[tokio::test]
async fn test_update_task_sends_only_set_fields() {
    let (base_url, rx) = serve_once(
        200,
        r#"{"success": true, "data": {"_id": "t-1", "text": "Renamed", "type": "todo"}}"#,
    );
    let client = test_client(&base_url);

    let req = TaskUpdateRequest {
        text: Some("Renamed".to_string()),
        notes: Some("now with notes".to_string()),
        ..TaskUpdateRequest::default()
    };
    let task = client
        .tasks()
        .update(&Uuid::new("t-1"), &req)
        .await
        .unwrap();
    assert_eq!(task.text, "Renamed");

    let captured = recv(&rx);
    assert_eq!(captured.method, "PUT");
    assert_eq!(captured.target, "/api/v3/tasks/t-1");
    assert_eq!(
        captured.body_json(),
        serde_json::json!({"text": "Renamed", "notes": "now with notes"})
    );
}

#[tokio::test]
async fn test_delete_task_issues_delete() {
    let (base_url, rx) = serve_once(200, r#"{"success": true}"#);
    let client = test_client(&base_url);

    client.tasks().delete(&Uuid::new("t-1")).await.unwrap();

    let req = recv(&rx);
    assert_eq!(req.method, "DELETE");
    assert_eq!(req.target, "/api/v3/tasks/t-1");
}

#[tokio::test]
async fn test_not_found_error_carries_envelope_fields() {
    let (base_url, _rx) = serve_once(
        404,
        r#"{"success": false, "error": "NotFound", "message": "Task not found."}"#,
    );
    let client = test_client(&base_url);

    let err = client.tasks().get(&Uuid::new("missing")).await.unwrap_err();
    assert!(err.is_not_found());
    assert!(!err.is_unauthorized());
    assert_eq!(err.status_code(), Some(404));
    match err {
        Error::Api { code, message, .. } => {
            assert_eq!(code, "NotFound");
            assert!(message.starts_with("Task not found.; body="));
        }
        other => panic!("expected Api error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_unauthorized_error_classification() {
    let (base_url, _rx) = serve_once(
        401,
        r#"{"success": false, "error": "NotAuthorized", "message": "Invalid credentials."}"#,
    );
    let client = test_client(&base_url);

    let err = client.user().get_current().await.unwrap_err();
    assert!(err.is_unauthorized());
    assert_eq!(err.status_code(), Some(401));
}

#[tokio::test]
async fn test_undecodable_error_body_uses_fallback_code() {
    let (base_url, _rx) = serve_once(500, "upstream exploded\n");
    let client = test_client(&base_url);

    let err = client.tags().list().await.unwrap_err();
    match err {
        Error::Api {
            status,
            code,
            message,
        } => {
            assert_eq!(status, 500);
            assert_eq!(code, "http_error");
            assert_eq!(message, "upstream exploded");
        }
        other => panic!("expected Api error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_unenveloped_body_decodes_raw() {
    // Some endpoints skip the envelope entirely.
    let (base_url, _rx) = serve_once(200, r#"[{"id": "tag-1", "name": "Work"}]"#);
    let client = test_client(&base_url);

    let tags = client.tags().list().await.unwrap();
    assert_eq!(tags.len(), 1);
    assert_eq!(tags[0].name, "Work");
}

#[tokio::test]
async fn test_inbox_page_parameter() {
    let (base_url, rx) = serve_once(200, r#"{"success": true, "data": {"messages": []}}"#);
    let client = test_client(&base_url);
    let value = client.user().inbox(2).await.unwrap();
    assert!(value.get("messages").is_some());
    assert_eq!(recv(&rx).target, "/api/v3/inbox/messages?page=2");

    // Page zero means no explicit parameter.
    let (base_url, rx) = serve_once(200, r#"{"success": true, "data": {}}"#);
    let client = test_client(&base_url);
    client.user().inbox(0).await.unwrap();
    assert_eq!(recv(&rx).target, "/api/v3/inbox/messages");
}

#[tokio::test]
async fn test_group_and_challenge_paths() {
    let (base_url, rx) = serve_once(
        200,
        r#"{"success": true, "data": {"_id": "g-1", "name": "The Party", "type": "party"}}"#,
    );
    let group = test_client(&base_url)
        .groups()
        .get(&Uuid::new("party"))
        .await
        .unwrap();
    assert_eq!(group.group_type, "party");
    assert_eq!(recv(&rx).target, "/api/v3/groups/party");

    let (base_url, rx) = serve_once(
        200,
        r#"{"success": true, "data": {"_id": "c-1", "shortName": "read"}}"#,
    );
    let challenge = test_client(&base_url)
        .challenges()
        .get(&Uuid::new("c-1"))
        .await
        .unwrap();
    assert_eq!(challenge.short_name, "read");
    assert_eq!(recv(&rx).target, "/api/v3/challenges/c-1");
}

#[tokio::test]
async fn test_inventory_webhook_and_admin_paths() {
    let (base_url, rx) = serve_once(
        200,
        r#"{"success": true, "data": [{"key": "armor_warrior_1", "value": 30}]}"#,
    );
    let items = test_client(&base_url).shops().market().await.unwrap();
    assert_eq!(items[0].key, "armor_warrior_1");
    assert_eq!(recv(&rx).target, "/api/v3/user/inventory/buy");

    let (base_url, rx) = serve_once(
        200,
        r#"{"success": true, "data": [{"id": "w-1", "enabled": true}]}"#,
    );
    let hooks = test_client(&base_url).webhooks().list().await.unwrap();
    assert!(hooks[0].enabled);
    assert_eq!(recv(&rx).target, "/api/v3/user/webhook");

    let (base_url, rx) = serve_once(
        200,
        r#"{"success": true, "data": [{"timestamp": "2024-06-01T00:00:00.000Z"}]}"#,
    );
    let history = test_client(&base_url)
        .admin()
        .user_history("u-1")
        .await
        .unwrap();
    assert_eq!(history.len(), 1);
    assert_eq!(recv(&rx).target, "/api/v3/admin/user/u-1/history");
}

#[tokio::test]
async fn test_empty_data_yields_default_content() {
    let (base_url, rx) = serve_once(200, r#"{"success": true}"#);
    let content = test_client(&base_url).content().get().await.unwrap();
    assert!(content.items.is_empty());
    assert_eq!(recv(&rx).target, "/api/v3/content");
}

const TODO_WITH_CHECKLIST: &str = r#"{"success": true, "data": {
    "_id": "t-1", "type": "todo", "text": "Shopping", "checklist": [
        {"id": "c-1", "text": "Milk", "completed": false},
        {"id": "c-2", "text": "Bread", "completed": true},
        {"id": "c-3", "text": "Eggs", "completed": false}
    ]}}"#;

#[tokio::test]
async fn test_todo_check_sends_negated_state_for_indexed_item() {
    let (base_url, rx) = serve_sequence(vec![
        (200, TODO_WITH_CHECKLIST.to_string()),
        (200, r#"{"success": true}"#.to_string()),
    ]);
    let temp = TempDir::new().unwrap();

    commands::todo_check(&fixture_args(&temp, &base_url), "t-1", 2)
        .await
        .unwrap();

    let fetch = recv(&rx);
    assert_eq!(fetch.method, "GET");
    assert_eq!(fetch.target, "/api/v3/tasks/t-1");

    // Item 2 was fetched as completed, so the write must switch it off.
    let toggle = recv(&rx);
    assert_eq!(toggle.method, "PUT");
    assert_eq!(toggle.target, "/api/v3/tasks/t-1/checklist/c-2");
    assert_eq!(toggle.body_json(), serde_json::json!({"completed": false}));

    // And an unchecked item toggles on.
    let (base_url, rx) = serve_sequence(vec![
        (200, TODO_WITH_CHECKLIST.to_string()),
        (200, r#"{"success": true}"#.to_string()),
    ]);
    commands::todo_check(&fixture_args(&temp, &base_url), "t-1", 3)
        .await
        .unwrap();
    assert_eq!(recv(&rx).target, "/api/v3/tasks/t-1");
    let toggle = recv(&rx);
    assert_eq!(toggle.target, "/api/v3/tasks/t-1/checklist/c-3");
    assert_eq!(toggle.body_json(), serde_json::json!({"completed": true}));
}

#[tokio::test]
async fn test_todo_check_out_of_range_index_sends_no_write() {
    let todo = r#"{"success": true, "data": {"_id": "t-1", "type": "todo",
        "checklist": [{"id": "c-1", "text": "Milk", "completed": false}]}}"#;
    let (base_url, rx) = serve_sequence(vec![(200, todo.to_string())]);
    let temp = TempDir::new().unwrap();

    let err = commands::todo_check(&fixture_args(&temp, &base_url), "t-1", 5)
        .await
        .unwrap_err();
    assert!(err.to_string().contains("out of range"));

    // The task was fetched, but no write followed.
    assert_eq!(recv(&rx).target, "/api/v3/tasks/t-1");
    assert!(rx.try_recv().is_err());
}

#[tokio::test]
async fn test_todo_check_rejects_non_todos_and_empty_checklists() {
    let habit = r#"{"success": true, "data": {"_id": "t-1", "type": "habit", "text": "Run"}}"#;
    let (base_url, rx) = serve_sequence(vec![(200, habit.to_string())]);
    let temp = TempDir::new().unwrap();

    let err = commands::todo_check(&fixture_args(&temp, &base_url), "t-1", 1)
        .await
        .unwrap_err();
    assert!(err.to_string().contains("is not a todo"));
    assert_eq!(recv(&rx).target, "/api/v3/tasks/t-1");
    assert!(rx.try_recv().is_err());

    let bare = r#"{"success": true, "data": {"_id": "t-2", "type": "todo", "text": "Tidy"}}"#;
    let (base_url, rx) = serve_sequence(vec![(200, bare.to_string())]);
    let err = commands::todo_check(&fixture_args(&temp, &base_url), "t-2", 1)
        .await
        .unwrap_err();
    assert!(err.to_string().contains("no checklist items"));
    assert_eq!(recv(&rx).target, "/api/v3/tasks/t-2");
    assert!(rx.try_recv().is_err());
}
