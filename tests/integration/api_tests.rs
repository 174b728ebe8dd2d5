//! API integration tests
//!
//! These run against a live server. Run with: cargo test -- --ignored

use reqwest::Client;
use serde_json::{json, Value};

const BASE_URL: &str = "http://localhost:8080";

/// Register a fresh user and return its login token
async fn register_and_login(client: &Client, username: &str, is_admin: bool) -> String {
    let response = client
        .post(format!("{}/register/", BASE_URL))
        .json(&json!({
            "username": username,
            "email": format!("{}@example.com", username),
            "password": "Adminpass1!",
            "is_admin": is_admin
        }))
        .send()
        .await
        .expect("Failed to send register request");
    assert!(response.status().is_success());

    let response = client
        .post(format!("{}/login/", BASE_URL))
        .form(&[("username", username), ("password", "Adminpass1!")])
        .send()
        .await
        .expect("Failed to send login request");
    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse login response");
    body["access_token"]
        .as_str()
        .expect("No token in response")
        .to_string()
}

/// Unique username per test run so reruns don't collide
fn unique(name: &str) -> String {
    let nanos = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .expect("clock before epoch")
        .subsec_nanos();
    format!("{}_{}", name, nanos)
}

#[tokio::test]
#[ignore]
async fn test_health_check() {
    let client = Client::new();

    let response = client
        .get(format!("{}/health", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
#[ignore]
async fn test_register_and_login_round_trip() {
    let client = Client::new();
    let username = unique("roundtrip");

    let response = client
        .post(format!("{}/register/", BASE_URL))
        .json(&json!({
            "username": username,
            "email": format!("{}@example.com", username),
            "password": "Adminpass1!",
            "is_admin": false
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["message"], "User created successfully");
    assert_eq!(body["data"]["username"], username.as_str());
    assert!(body["data"]["password_hash"].is_null());

    let response = client
        .post(format!("{}/login/", BASE_URL))
        .form(&[("username", username.as_str()), ("password", "Adminpass1!")])
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert!(body["access_token"].is_string());
    assert_eq!(body["token_type"], "bearer");
    assert_eq!(body["message"], "User logged in successfully");
}

#[tokio::test]
#[ignore]
async fn test_register_duplicate_username() {
    let client = Client::new();
    let username = unique("dup");
    register_and_login(&client, &username, false).await;

    let response = client
        .post(format!("{}/register/", BASE_URL))
        .json(&json!({
            "username": username,
            "email": "other@example.com",
            "password": "Adminpass1!",
            "is_admin": false
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 400);

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["detail"], "Username already registered");
}

#[tokio::test]
#[ignore]
async fn test_register_weak_password() {
    let client = Client::new();

    let response = client
        .post(format!("{}/register/", BASE_URL))
        .json(&json!({
            "username": unique("weak"),
            "email": "weak@example.com",
            "password": "short",
            "is_admin": false
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 400);

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["detail"], "Password must be 8–20 characters long.");
}

#[tokio::test]
#[ignore]
async fn test_login_invalid_credentials() {
    let client = Client::new();
    let username = unique("badpass");
    register_and_login(&client, &username, false).await;

    let response = client
        .post(format!("{}/login/", BASE_URL))
        .form(&[("username", username.as_str()), ("password", "Wrongpass1!")])
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 401);
}

#[tokio::test]
#[ignore]
async fn test_create_book_requires_admin() {
    let client = Client::new();
    let token = register_and_login(&client, &unique("reader"), false).await;

    let response = client
        .post(format!("{}/books/", BASE_URL))
        .header("Authorization", format!("Bearer {}", token))
        .json(&json!({
            "title": "Forbidden",
            "author": "Nobody",
            "genre": "None",
            "published_date": "2000-01-01"
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 403);
}

#[tokio::test]
#[ignore]
async fn test_create_book_requires_token() {
    let client = Client::new();

    let response = client
        .post(format!("{}/books/", BASE_URL))
        .json(&json!({
            "title": "Anonymous",
            "author": "Nobody",
            "genre": "None",
            "published_date": "2000-01-01"
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 401);
}

#[tokio::test]
#[ignore]
async fn test_partial_update_preserves_other_fields() {
    let client = Client::new();
    let token = register_and_login(&client, &unique("patcher"), true).await;

    let response = client
        .post(format!("{}/books/", BASE_URL))
        .header("Authorization", format!("Bearer {}", token))
        .json(&json!({
            "title": "Original Title",
            "author": "Original Author",
            "genre": "History",
            "published_date": "1990-05-15"
        }))
        .send()
        .await
        .expect("Failed to send request");
    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    let book_id = body["id"].as_i64().expect("No book ID");

    let response = client
        .patch(format!("{}/books/{}", BASE_URL, book_id))
        .header("Authorization", format!("Bearer {}", token))
        .json(&json!({"title": "New Title"}))
        .send()
        .await
        .expect("Failed to send request");
    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["title"], "New Title");
    assert_eq!(body["author"], "Original Author");
    assert_eq!(body["genre"], "History");
    assert_eq!(body["published_date"], "1990-05-15");
}

#[tokio::test]
#[ignore]
async fn test_update_missing_book() {
    let client = Client::new();
    let token = register_and_login(&client, &unique("updmiss"), true).await;

    let response = client
        .put(format!("{}/books/999999999", BASE_URL))
        .header("Authorization", format!("Bearer {}", token))
        .json(&json!({"title": "Ghost"}))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 404);
}

#[tokio::test]
#[ignore]
async fn test_delete_book() {
    let client = Client::new();
    let token = register_and_login(&client, &unique("deleter"), true).await;

    // Deleting a nonexistent id is NotFound
    let response = client
        .delete(format!("{}/books/999999999", BASE_URL))
        .header("Authorization", format!("Bearer {}", token))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 404);

    let response = client
        .post(format!("{}/books/", BASE_URL))
        .header("Authorization", format!("Bearer {}", token))
        .json(&json!({
            "title": "Ephemeral",
            "author": "Short Lived",
            "genre": "Drama",
            "published_date": "2001-01-01"
        }))
        .send()
        .await
        .expect("Failed to send request");
    let body: Value = response.json().await.expect("Failed to parse response");
    let book_id = body["id"].as_i64().expect("No book ID");

    let response = client
        .delete(format!("{}/books/{}", BASE_URL, book_id))
        .header("Authorization", format!("Bearer {}", token))
        .send()
        .await
        .expect("Failed to send request");
    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["message"], "Book deleted successfully");

    // A subsequent listing must not include the deleted book
    let response = client
        .get(format!("{}/books/", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");
    if response.status().is_success() {
        let books: Value = response.json().await.expect("Failed to parse response");
        let found = books
            .as_array()
            .expect("Expected array")
            .iter()
            .any(|b| b["id"].as_i64() == Some(book_id));
        assert!(!found);
    }
}

#[tokio::test]
#[ignore]
async fn test_search_filters_are_combined() {
    let client = Client::new();
    let token = register_and_login(&client, &unique("searcher"), true).await;

    for (title, author) in [("Alpha Search", "Shared Author"), ("Beta Search", "Shared Author")] {
        let response = client
            .post(format!("{}/books/", BASE_URL))
            .header("Authorization", format!("Bearer {}", token))
            .json(&json!({
                "title": title,
                "author": author,
                "genre": "SearchTest",
                "published_date": "2010-01-01"
            }))
            .send()
            .await
            .expect("Failed to send request");
        assert!(response.status().is_success());
    }

    // Both filters must hold at once
    let response = client
        .get(format!(
            "{}/books/search?title=Alpha&author=Shared", BASE_URL
        ))
        .send()
        .await
        .expect("Failed to send request");
    assert!(response.status().is_success());

    let books: Value = response.json().await.expect("Failed to parse response");
    let titles: Vec<&str> = books
        .as_array()
        .expect("Expected array")
        .iter()
        .filter_map(|b| b["title"].as_str())
        .collect();
    assert!(titles.contains(&"Alpha Search"));
    assert!(!titles.contains(&"Beta Search"));

    // Conflicting filters match nothing
    let response = client
        .get(format!(
            "{}/books/search?title=Alpha&author=NoSuchAuthor", BASE_URL
        ))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 404);
}

#[tokio::test]
#[ignore]
async fn test_genre_filter_is_exact() {
    let client = Client::new();

    let response = client
        .get(format!("{}/books/genre?genre=NoSuchGenreEver", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 404);

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["detail"], "No books found for this genre");
}

#[tokio::test]
#[ignore]
async fn test_borrow_lifecycle_end_to_end() {
    let client = Client::new();
    let admin_token = register_and_login(&client, &unique("a1"), true).await;

    // Create the book
    let response = client
        .post(format!("{}/books/", BASE_URL))
        .header("Authorization", format!("Bearer {}", admin_token))
        .json(&json!({
            "title": "Dune",
            "author": "Herbert",
            "genre": "Sci-Fi",
            "published_date": "1965-08-01"
        }))
        .send()
        .await
        .expect("Failed to send request");
    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    let book_id = body["id"].as_i64().expect("No book ID");
    assert_eq!(body["published_date"], "1965-08-01");

    // Submit a borrow request as a regular user
    let user_token = register_and_login(&client, &unique("u1"), false).await;
    let response = client
        .post(format!("{}/borrow/request", BASE_URL))
        .header("Authorization", format!("Bearer {}", user_token))
        .json(&json!({"user_id": 1, "book_id": book_id}))
        .send()
        .await
        .expect("Failed to send request");
    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    let request_id = body["id"].as_i64().expect("No request ID");
    assert_eq!(body["status"], "Pending");

    // Accept it (admin)
    let response = client
        .put(format!("{}/borrow/request/{}/accept", BASE_URL, request_id))
        .header("Authorization", format!("Bearer {}", admin_token))
        .send()
        .await
        .expect("Failed to send request");
    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["message"], "Request accepted and borrow log created");

    // An Accepted log row for this book must appear in the ledger
    let response = client
        .get(format!("{}/borrow/logs", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");
    assert!(response.status().is_success());

    let logs: Value = response.json().await.expect("Failed to parse response");
    let log = logs
        .as_array()
        .expect("Expected array")
        .iter()
        .rev()
        .find(|l| l["book_id"].as_i64() == Some(book_id))
        .expect("No borrow log for accepted request")
        .clone();
    assert_eq!(log["status"], "Accepted");
    assert!(log["return_date"].is_null());
    let log_id = log["id"].as_i64().expect("No log ID");

    // Return it
    let response = client
        .put(format!("{}/borrow/log/{}/return", BASE_URL, log_id))
        .header("Authorization", format!("Bearer {}", admin_token))
        .send()
        .await
        .expect("Failed to send request");
    assert!(response.status().is_success());

    // Returning the same log again succeeds and re-stamps return_date;
    // this asserts the current (non-idempotent) behavior
    let response = client
        .put(format!("{}/borrow/log/{}/return", BASE_URL, log_id))
        .header("Authorization", format!("Bearer {}", admin_token))
        .send()
        .await
        .expect("Failed to send request");
    assert!(response.status().is_success());

    let response = client
        .get(format!("{}/borrow/logs", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");
    let logs: Value = response.json().await.expect("Failed to parse response");
    let log = logs
        .as_array()
        .expect("Expected array")
        .iter()
        .find(|l| l["id"].as_i64() == Some(log_id))
        .expect("Log disappeared")
        .clone();
    assert_eq!(log["status"], "Returned");
    assert!(log["return_date"].is_string());
}

#[tokio::test]
#[ignore]
async fn test_deny_borrow_request() {
    let client = Client::new();
    let admin_token = register_and_login(&client, &unique("denier"), true).await;

    let response = client
        .post(format!("{}/borrow/request", BASE_URL))
        .header("Authorization", format!("Bearer {}", admin_token))
        .json(&json!({"user_id": 1, "book_id": 1}))
        .send()
        .await
        .expect("Failed to send request");
    let body: Value = response.json().await.expect("Failed to parse response");
    let request_id = body["id"].as_i64().expect("No request ID");

    let response = client
        .put(format!("{}/borrow/request/{}/deny", BASE_URL, request_id))
        .header("Authorization", format!("Bearer {}", admin_token))
        .send()
        .await
        .expect("Failed to send request");
    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["message"], "Request denied");
}

#[tokio::test]
#[ignore]
async fn test_accept_missing_request() {
    let client = Client::new();
    let admin_token = register_and_login(&client, &unique("accmiss"), true).await;

    let response = client
        .put(format!("{}/borrow/request/999999999/accept", BASE_URL))
        .header("Authorization", format!("Bearer {}", admin_token))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 404);

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["detail"], "Request not found");
}
