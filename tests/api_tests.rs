//! API integration tests
//!
//! These run against a live server with a migrated database:
//! `cargo run` in one terminal, then `cargo test -- --ignored`.

use chrono::{DateTime, Duration, Utc};
use reqwest::Client;
use serde_json::{json, Value};
use uuid::Uuid;

const BASE_URL: &str = "http://localhost:8080";

/// Helper to create a user and return its id
async fn create_user(client: &Client) -> String {
    let response = client
        .post(format!("{}/users", BASE_URL))
        .json(&json!({
            "name": "Ada",
            "surname": "Lovelace",
            "email": format!("{}@example.org", Uuid::new_v4()),
            "birth_date": "1990-12-10"
        }))
        .send()
        .await
        .expect("Failed to send user request");

    assert_eq!(response.status(), 201);
    let body: Value = response.json().await.expect("Failed to parse user response");
    body["id"].as_str().expect("No user id").to_string()
}

/// Helper to create a publication and return its id
async fn create_publication(client: &Client) -> String {
    let response = client
        .post(format!("{}/publications", BASE_URL))
        .json(&json!({ "title": "The Art of Computer Programming" }))
        .send()
        .await
        .expect("Failed to send publication request");

    assert_eq!(response.status(), 201);
    let body: Value = response.json().await.expect("Failed to parse publication response");
    body["id"].as_str().expect("No publication id").to_string()
}

/// Helper to create an instance with the given medium and status
async fn create_instance(
    client: &Client,
    publication_id: &str,
    media_type: &str,
    status: &str,
) -> String {
    let response = client
        .post(format!("{}/instances", BASE_URL))
        .json(&json!({
            "publication_id": publication_id,
            "publisher": "Addison-Wesley",
            "type": media_type,
            "status": status,
            "year": 1968
        }))
        .send()
        .await
        .expect("Failed to send instance request");

    assert_eq!(response.status(), 201);
    let body: Value = response.json().await.expect("Failed to parse instance response");
    body["id"].as_str().expect("No instance id").to_string()
}

async fn instance_status(client: &Client, instance_id: &str) -> String {
    let response = client
        .get(format!("{}/instances/{}", BASE_URL, instance_id))
        .send()
        .await
        .expect("Failed to send instance request");

    assert_eq!(response.status(), 200);
    let body: Value = response.json().await.expect("Failed to parse instance response");
    body["status"].as_str().expect("No instance status").to_string()
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
async fn test_create_and_get_user() {
    let client = Client::new();
    let user_id = create_user(&client).await;

    let response = client
        .get(format!("{}/users/{}", BASE_URL, user_id))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 200);

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["id"], user_id.as_str());
    assert_eq!(body["name"], "Ada");
    // No circulation activity yet: keys are omitted entirely
    assert!(body.get("rentals").is_none());
    assert!(body.get("reservations").is_none());
}

#[tokio::test]
#[ignore]
async fn test_create_user_invalid_email() {
    let client = Client::new();

    let response = client
        .post(format!("{}/users", BASE_URL))
        .json(&json!({
            "name": "Bad",
            "surname": "Email",
            "email": "not-an-email",
            "birth_date": "1990-01-01"
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 400);
}

#[tokio::test]
#[ignore]
async fn test_create_user_invalid_birth_date() {
    let client = Client::new();

    let response = client
        .post(format!("{}/users", BASE_URL))
        .json(&json!({
            "name": "Bad",
            "surname": "Date",
            "email": format!("{}@example.org", Uuid::new_v4()),
            "birth_date": "01.01.1990"
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 400);
}

#[tokio::test]
#[ignore]
async fn test_create_user_duplicate_email() {
    let client = Client::new();
    let email = format!("{}@example.org", Uuid::new_v4());

    for expected in [201, 409] {
        let response = client
            .post(format!("{}/users", BASE_URL))
            .json(&json!({
                "name": "Twin",
                "surname": "User",
                "email": email,
                "birth_date": "1985-06-15"
            }))
            .send()
            .await
            .expect("Failed to send request");

        assert_eq!(response.status(), expected);
    }
}

#[tokio::test]
#[ignore]
async fn test_get_unknown_rental() {
    let client = Client::new();

    let response = client
        .get(format!("{}/rentals/{}", BASE_URL, Uuid::new_v4()))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 404);
}

#[tokio::test]
#[ignore]
async fn test_rental_end_to_end() {
    let client = Client::new();
    let user_id = create_user(&client).await;
    let publication_id = create_publication(&client).await;
    let i1 = create_instance(&client, &publication_id, "physical", "available").await;
    let i2 = create_instance(&client, &publication_id, "physical", "loaned").await;

    // First rental wins the single available instance
    let response = client
        .post(format!("{}/rentals", BASE_URL))
        .json(&json!({
            "user_id": user_id,
            "publication_id": publication_id,
            "duration": 7
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 201);
    let loan: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(loan["publication_instance_id"], i1.as_str());
    assert_eq!(loan["duration"], 7);
    assert_eq!(loan["status"], "active");

    assert_eq!(instance_status(&client, &i1).await, "reserved");
    assert_eq!(instance_status(&client, &i2).await, "loaned");

    // The loan is readable back
    let response = client
        .get(format!("{}/rentals/{}", BASE_URL, loan["id"].as_str().unwrap()))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 200);

    // Only the already-loaned copy remains: declined
    let response = client
        .post(format!("{}/rentals", BASE_URL))
        .json(&json!({
            "user_id": user_id,
            "publication_id": publication_id,
            "duration": 7
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 400);
}

#[tokio::test]
#[ignore]
async fn test_rental_contention_single_winner() {
    let client = Client::new();
    let user_id = create_user(&client).await;
    let publication_id = create_publication(&client).await;
    create_instance(&client, &publication_id, "physical", "available").await;

    let mut handles = Vec::new();
    for _ in 0..8 {
        let client = client.clone();
        let user_id = user_id.clone();
        let publication_id = publication_id.clone();
        handles.push(tokio::spawn(async move {
            client
                .post(format!("{}/rentals", BASE_URL))
                .json(&json!({
                    "user_id": user_id,
                    "publication_id": publication_id,
                    "duration": 14
                }))
                .send()
                .await
                .expect("Failed to send request")
                .status()
                .as_u16()
        }));
    }

    let mut statuses = Vec::new();
    for handle in handles {
        statuses.push(handle.await.expect("Task panicked"));
    }

    assert_eq!(statuses.iter().filter(|s| **s == 201).count(), 1);
    assert_eq!(statuses.iter().filter(|s| **s == 400).count(), 7);
}

#[tokio::test]
#[ignore]
async fn test_rental_declined_leaves_no_trace() {
    let client = Client::new();
    let user_id = create_user(&client).await;
    let publication_id = create_publication(&client).await;
    let instance_id = create_instance(&client, &publication_id, "physical", "loaned").await;

    // Retrying under the same condition declines every time
    for _ in 0..3 {
        let response = client
            .post(format!("{}/rentals", BASE_URL))
            .json(&json!({
                "user_id": user_id,
                "publication_id": publication_id,
                "duration": 7
            }))
            .send()
            .await
            .expect("Failed to send request");

        assert_eq!(response.status(), 400);
    }

    assert_eq!(instance_status(&client, &instance_id).await, "loaned");
}

#[tokio::test]
#[ignore]
async fn test_rental_duration_validation() {
    let client = Client::new();
    let user_id = create_user(&client).await;
    let publication_id = create_publication(&client).await;
    create_instance(&client, &publication_id, "physical", "available").await;

    for duration in [0, -5] {
        let response = client
            .post(format!("{}/rentals", BASE_URL))
            .json(&json!({
                "user_id": user_id,
                "publication_id": publication_id,
                "duration": duration
            }))
            .send()
            .await
            .expect("Failed to send request");

        assert_eq!(response.status(), 400);
    }

    // Missing fields are rejected before any allocation
    let response = client
        .post(format!("{}/rentals", BASE_URL))
        .json(&json!({ "publication_id": publication_id }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 400);
}

#[tokio::test]
#[ignore]
async fn test_rental_due_date() {
    let client = Client::new();
    let user_id = create_user(&client).await;
    let publication_id = create_publication(&client).await;
    create_instance(&client, &publication_id, "physical", "available").await;

    let response = client
        .post(format!("{}/rentals", BASE_URL))
        .json(&json!({
            "user_id": user_id,
            "publication_id": publication_id,
            "duration": 14
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 201);
    let loan: Value = response.json().await.expect("Failed to parse response");

    let created_at: DateTime<Utc> = loan["created_at"]
        .as_str()
        .unwrap()
        .parse()
        .expect("Bad created_at");
    let due_at: DateTime<Utc> = loan["due_at"]
        .as_str()
        .unwrap()
        .parse()
        .expect("Bad due_at");

    assert_eq!(due_at - created_at, Duration::days(14));
}

#[tokio::test]
#[ignore]
async fn test_digital_instances_are_not_locked() {
    let client = Client::new();
    let user_id = create_user(&client).await;
    let publication_id = create_publication(&client).await;
    let instance_id = create_instance(&client, &publication_id, "digital", "available").await;

    // Digital copies are unlimited: both rentals share the same instance
    for _ in 0..2 {
        let response = client
            .post(format!("{}/rentals", BASE_URL))
            .json(&json!({
                "user_id": user_id,
                "publication_id": publication_id,
                "duration": 7
            }))
            .send()
            .await
            .expect("Failed to send request");

        assert_eq!(response.status(), 201);
        let loan: Value = response.json().await.expect("Failed to parse response");
        assert_eq!(loan["publication_instance_id"], instance_id.as_str());
    }

    assert_eq!(instance_status(&client, &instance_id).await, "available");
}

#[tokio::test]
#[ignore]
async fn test_reservation_is_independent_of_instances() {
    let client = Client::new();
    let user_id = create_user(&client).await;
    let publication_id = create_publication(&client).await;
    let instance_id = create_instance(&client, &publication_id, "physical", "available").await;

    let response = client
        .post(format!("{}/reservations", BASE_URL))
        .json(&json!({
            "user_id": user_id,
            "publication_id": publication_id
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 201);
    let reservation: Value = response.json().await.expect("Failed to parse response");
    let reservation_id = reservation["id"].as_str().unwrap().to_string();

    // Reserving changed nothing about the copy
    assert_eq!(instance_status(&client, &instance_id).await, "available");

    let response = client
        .delete(format!("{}/reservations/{}", BASE_URL, reservation_id))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 204);
    assert_eq!(instance_status(&client, &instance_id).await, "available");

    // The copy is still rentable
    let response = client
        .post(format!("{}/rentals", BASE_URL))
        .json(&json!({
            "user_id": user_id,
            "publication_id": publication_id,
            "duration": 7
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 201);
}

#[tokio::test]
#[ignore]
async fn test_card_lifecycle() {
    let client = Client::new();
    let user_id = create_user(&client).await;

    let response = client
        .post(format!("{}/cards", BASE_URL))
        .json(&json!({
            "user_id": user_id,
            "magstripe": "8fb5e19c3a6f"
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 201);
    let card: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(card["status"], "inactive");
    let card_id = card["id"].as_str().unwrap().to_string();

    let response = client
        .patch(format!("{}/cards/{}", BASE_URL, card_id))
        .json(&json!({ "status": "active" }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 200);
    let card: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(card["status"], "active");

    let response = client
        .delete(format!("{}/cards/{}", BASE_URL, card_id))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 204);

    let response = client
        .get(format!("{}/cards/{}", BASE_URL, card_id))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 404);
}

#[tokio::test]
#[ignore]
async fn test_author_conflict() {
    let client = Client::new();
    let surname = format!("Knuth-{}", Uuid::new_v4());

    for expected in [201, 409] {
        let response = client
            .post(format!("{}/authors", BASE_URL))
            .json(&json!({ "name": "Donald", "surname": surname }))
            .send()
            .await
            .expect("Failed to send request");

        assert_eq!(response.status(), expected);
    }
}

#[tokio::test]
#[ignore]
async fn test_user_details_aggregate_activity() {
    let client = Client::new();
    let user_id = create_user(&client).await;
    let publication_id = create_publication(&client).await;
    create_instance(&client, &publication_id, "physical", "available").await;

    let response = client
        .post(format!("{}/rentals", BASE_URL))
        .json(&json!({
            "user_id": user_id,
            "publication_id": publication_id,
            "duration": 21
        }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 201);

    let response = client
        .post(format!("{}/reservations", BASE_URL))
        .json(&json!({
            "user_id": user_id,
            "publication_id": publication_id
        }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 201);

    let response = client
        .get(format!("{}/users/{}", BASE_URL, user_id))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 200);
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["rentals"].as_array().unwrap().len(), 1);
    assert_eq!(body["reservations"].as_array().unwrap().len(), 1);
}
