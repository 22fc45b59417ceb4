//! API integration tests
//!
//! These run against a live server backed by a real database.

use reqwest::Client;
use serde_json::{json, Value};

const BASE_URL: &str = "http://localhost:8080/api/v1";

fn employee_payload(role: &str) -> Value {
    json!({
        "first_name": "Integration",
        "last_name": "Test",
        "group_name": "QA",
        "role": role,
        "expected_salary": "3100.75",
        "expected_date_of_defense": "2025-09-01"
    })
}

/// Helper to create an employee and return its id
async fn create_employee(client: &Client) -> i64 {
    let response = client
        .post(format!("{}/employees", BASE_URL))
        .json(&employee_payload("Tester"))
        .send()
        .await
        .expect("Failed to send create request");

    assert_eq!(response.status(), 201);

    let body: Value = response.json().await.expect("Failed to parse create response");
    body[0]["id"].as_i64().expect("No employee ID")
}

#[tokio::test]
#[ignore] // Run with: cargo test -- --ignored
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
async fn test_readiness_check() {
    let client = Client::new();

    let response = client
        .get(format!("{}/ready", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());
}

#[tokio::test]
#[ignore]
async fn test_create_list_and_delete_employee() {
    let client = Client::new();
    let id = create_employee(&client).await;

    // Listed with the date normalized to UTC
    let response = client
        .get(format!("{}/employees", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    let created = body
        .as_array()
        .expect("List is not an array")
        .iter()
        .find(|e| e["id"] == id)
        .expect("Created employee not listed");
    assert_eq!(created["expected_date_of_defense"], "2025-09-01T00:00:00Z");
    assert_eq!(created["expected_salary"], 3100.75);

    // Delete
    let response = client
        .delete(format!("{}/employees/{}", BASE_URL, id))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 200);
    assert_eq!(response.text().await.unwrap(), "Employee deleted successfully");
}

#[tokio::test]
#[ignore]
async fn test_update_employee() {
    let client = Client::new();
    let id = create_employee(&client).await;

    let response = client
        .put(format!("{}/employees/{}", BASE_URL, id))
        .json(&employee_payload("Lead Tester"))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 200);

    let body: Value = client
        .get(format!("{}/employees", BASE_URL))
        .send()
        .await
        .expect("Failed to send request")
        .json()
        .await
        .expect("Failed to parse response");
    let updated = body
        .as_array()
        .unwrap()
        .iter()
        .find(|e| e["id"] == id)
        .expect("Updated employee not listed");
    assert_eq!(updated["role"], "Lead Tester");

    // Cleanup
    let _ = client
        .delete(format!("{}/employees/{}", BASE_URL, id))
        .send()
        .await;
}

#[tokio::test]
#[ignore]
async fn test_create_missing_fields() {
    let client = Client::new();

    let response = client
        .post(format!("{}/employees", BASE_URL))
        .json(&json!({ "first_name": "Incomplete" }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 400);

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["error"], "Missing required fields");
}

#[tokio::test]
#[ignore]
async fn test_delete_invalid_id() {
    let client = Client::new();

    let response = client
        .delete(format!("{}/employees/not-a-number", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 400);

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["error"], "Invalid employee id");
}
