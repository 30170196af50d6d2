//! End-to-end API tests. They expect a running server with a seeded manager
//! account and an empty-enough database; run them explicitly:
//!
//! ```sh
//! CLUB_API_URL=http://127.0.0.1:8000 \
//! MANAGER_EMAIL=manager@example.com MANAGER_PASSWORD=Secur3pass! \
//! cargo test -- --ignored
//! ```

use serde_json::{Value, json};
use uuid::Uuid;

mod unit;

fn api_url() -> String {
    std::env::var("CLUB_API_URL").unwrap_or_else(|_| "http://127.0.0.1:8000".to_string())
}

struct TestClient {
    http: reqwest::Client,
    base: String,
    token: String,
}

impl TestClient {
    async fn login(email: &str, password: &str) -> Self {
        let http = reqwest::Client::new();
        let base = api_url();
        let body: Value = http
            .post(format!("{}/auth/login", base))
            .json(&json!({ "email": email, "password": password }))
            .send()
            .await
            .expect("login request failed")
            .json()
            .await
            .expect("login response was not JSON");
        let token = body["data"]["access_token"]
            .as_str()
            .expect("login did not return a token")
            .to_string();
        Self { http, base, token }
    }

    async fn manager() -> Self {
        let email =
            std::env::var("MANAGER_EMAIL").unwrap_or_else(|_| "manager@example.com".to_string());
        let password =
            std::env::var("MANAGER_PASSWORD").unwrap_or_else(|_| "Secur3pass!".to_string());
        Self::login(&email, &password).await
    }

    async fn post(&self, path: &str, body: Value) -> (u16, Value) {
        let response = self
            .http
            .post(format!("{}{}", self.base, path))
            .bearer_auth(&self.token)
            .json(&body)
            .send()
            .await
            .expect("request failed");
        let status = response.status().as_u16();
        let body = response.json().await.unwrap_or(Value::Null);
        (status, body)
    }

    async fn put(&self, path: &str, body: Value) -> (u16, Value) {
        let response = self
            .http
            .put(format!("{}{}", self.base, path))
            .bearer_auth(&self.token)
            .json(&body)
            .send()
            .await
            .expect("request failed");
        let status = response.status().as_u16();
        let body = response.json().await.unwrap_or(Value::Null);
        (status, body)
    }

    async fn get(&self, path: &str) -> (u16, Value) {
        let response = self
            .http
            .get(format!("{}{}", self.base, path))
            .bearer_auth(&self.token)
            .send()
            .await
            .expect("request failed");
        let status = response.status().as_u16();
        let body = response.json().await.unwrap_or(Value::Null);
        (status, body)
    }
}

/// Signs up a fresh member, has the manager approve them into full
/// membership, and returns a logged-in client plus the member id.
async fn approved_member(manager: &TestClient) -> (TestClient, String) {
    let email = format!("player-{}@example.com", Uuid::new_v4());
    let password = "Secur3pass!";

    let http = reqwest::Client::new();
    let body: Value = http
        .post(format!("{}/auth/register", api_url()))
        .json(&json!({
            "email": email,
            "name": "Test Player",
            "password": password,
        }))
        .send()
        .await
        .expect("register request failed")
        .json()
        .await
        .expect("register response was not JSON");
    let member_id = body["data"]["id"]
        .as_str()
        .expect("register did not return an id")
        .to_string();

    let (status, _) = manager
        .post(
            &format!("/members/{}/approve", member_id),
            json!({ "status": "full" }),
        )
        .await;
    assert_eq!(status, 200, "manager approval failed");

    (TestClient::login(&email, password).await, member_id)
}

async fn create_booking(manager: &TestClient, format: &str) -> String {
    let (status, body) = manager
        .post(
            "/bookings",
            json!({
                "booking_date": "2026-09-12",
                "session": 1,
                "rink_count": 4,
                "format": format,
                "gender": "open",
                "event_type": "club competition",
            }),
        )
        .await;
    assert_eq!(status, 201, "booking creation failed: {}", body);
    body["data"]["id"].as_str().unwrap().to_string()
}

async fn open_pool(manager: &TestClient, booking_id: &str) -> String {
    let (status, body) = manager
        .post(
            &format!("/bookings/{}/pool", booking_id),
            json!({ "auto_close_at": null }),
        )
        .await;
    assert_eq!(status, 201, "pool open failed: {}", body);
    body["data"]["id"].as_str().unwrap().to_string()
}

#[tokio::test]
#[ignore = "requires running server"]
async fn register_after_close_always_fails() {
    let manager = TestClient::manager().await;
    let (player, _) = approved_member(&manager).await;

    let booking_id = create_booking(&manager, "pairs").await;
    let pool_id = open_pool(&manager, &booking_id).await;

    let (status, _) = manager
        .post(&format!("/pools/{}/close", pool_id), json!({}))
        .await;
    assert_eq!(status, 200);

    // closing again is a no-op, not an error
    let (status, _) = manager
        .post(&format!("/pools/{}/close", pool_id), json!({}))
        .await;
    assert_eq!(status, 200);

    let (status, body) = player
        .post(&format!("/pools/{}/registrations", pool_id), json!({}))
        .await;
    assert_eq!(status, 409, "register on a closed pool must conflict");
    assert!(body["message"].as_str().unwrap().contains("closed"));

    let (_, listing) = manager
        .get(&format!("/pools/{}/registrations", pool_id))
        .await;
    assert_eq!(listing["data"].as_array().unwrap().len(), 0);
}

#[tokio::test]
#[ignore = "requires running server"]
async fn withdrawn_registration_reactivates_same_row() {
    let manager = TestClient::manager().await;
    let (player, _) = approved_member(&manager).await;

    let booking_id = create_booking(&manager, "pairs").await;
    let pool_id = open_pool(&manager, &booking_id).await;

    let (status, body) = player
        .post(&format!("/pools/{}/registrations", pool_id), json!({}))
        .await;
    assert_eq!(status, 201);
    let first_id = body["data"]["id"].as_str().unwrap().to_string();
    assert_eq!(body["data"]["status"], "registered");

    let (status, body) = player
        .post(&format!("/pools/{}/withdraw", pool_id), json!({}))
        .await;
    assert_eq!(status, 200);
    assert_eq!(body["data"]["status"], "withdrawn");

    // withdrawing twice is a no-op
    let (status, _) = player
        .post(&format!("/pools/{}/withdraw", pool_id), json!({}))
        .await;
    assert_eq!(status, 200);

    // duplicate registration reuses the original row
    let (status, body) = player
        .post(&format!("/pools/{}/registrations", pool_id), json!({}))
        .await;
    assert_eq!(status, 201);
    assert_eq!(body["data"]["id"].as_str().unwrap(), first_id);
    assert_eq!(body["data"]["status"], "registered");

    // and registering while already active is rejected
    let (status, _) = player
        .post(&format!("/pools/{}/registrations", pool_id), json!({}))
        .await;
    assert_eq!(status, 409);
}

#[tokio::test]
#[ignore = "requires running server"]
async fn fours_template_instantiate_confirm_substitute() {
    let manager = TestClient::manager().await;
    let booking_id = create_booking(&manager, "fours").await;

    let mut players = Vec::new();
    for _ in 0..5 {
        players.push(approved_member(&manager).await);
    }

    let (status, body) = manager
        .post(
            &format!("/bookings/{}/templates", booking_id),
            json!({ "name": "Team A" }),
        )
        .await;
    assert_eq!(status, 201, "template creation failed: {}", body);
    let template_id = body["data"]["template"]["id"].as_str().unwrap().to_string();
    assert_eq!(body["data"]["positions"].as_array().unwrap().len(), 4);

    // duplicate name under the same booking is rejected
    let (status, _) = manager
        .post(
            &format!("/bookings/{}/templates", booking_id),
            json!({ "name": "Team A" }),
        )
        .await;
    assert_eq!(status, 400);

    for (position, (_, member_id)) in ["Lead", "Second", "Third", "Skip"]
        .iter()
        .zip(players.iter().take(4))
    {
        let (status, body) = manager
            .put(
                &format!("/templates/{}/positions", template_id),
                json!({ "position": position, "member_id": member_id }),
            )
            .await;
        assert_eq!(status, 200, "assigning {} failed: {}", position, body);
    }

    // an unknown position name is rejected
    let (status, _) = manager
        .put(
            &format!("/templates/{}/positions", template_id),
            json!({ "position": "Fifth", "member_id": players[0].1 }),
        )
        .await;
    assert_eq!(status, 400);

    let (status, body) = manager
        .post(&format!("/templates/{}/instantiate", template_id), json!({}))
        .await;
    assert_eq!(status, 201, "instantiate failed: {}", body);
    let assignments = body["data"]["assignments"].as_array().unwrap().clone();
    assert_eq!(assignments.len(), 4);
    for assignment in &assignments {
        assert_eq!(assignment["availability"], "pending");
        assert_eq!(assignment["is_substitute"], false);
    }

    // re-instantiating the same template must conflict, not duplicate
    let (status, _) = manager
        .post(&format!("/templates/{}/instantiate", template_id), json!({}))
        .await;
    assert_eq!(status, 409);

    // three confirm available, one unavailable
    for (index, assignment) in assignments.iter().enumerate() {
        let available = index < 3;
        let (status, _) = manager
            .post(
                &format!("/assignments/{}/confirm", assignment["id"].as_str().unwrap()),
                json!({ "available": available }),
            )
            .await;
        assert_eq!(status, 200);
    }

    // every further confirm is rejected; the first answer stands
    for assignment in &assignments {
        let (status, body) = manager
            .post(
                &format!("/assignments/{}/confirm", assignment["id"].as_str().unwrap()),
                json!({ "available": true }),
            )
            .await;
        assert_eq!(status, 409);
        assert!(body["message"].as_str().unwrap().contains("confirmed"));
    }

    // substitute the unavailable player with the fifth member
    let unavailable_id = assignments[3]["id"].as_str().unwrap();
    let (status, body) = manager
        .post(
            &format!("/assignments/{}/substitute", unavailable_id),
            json!({ "member_id": players[4].1, "reason": "called in sick" }),
        )
        .await;
    assert_eq!(status, 200, "substitution failed: {}", body);
    assert_eq!(body["data"]["member_id"].as_str().unwrap(), players[4].1);
    assert_eq!(body["data"]["availability"], "pending");
    assert_eq!(body["data"]["is_substitute"], true);
    assert!(body["data"]["substituted_at"].is_string());

    // exactly one substitution-log entry, recording both members
    let (_, teams) = manager
        .get(&format!("/bookings/{}/teams", booking_id))
        .await;
    let team = &teams["data"].as_array().unwrap()[0];
    let log = team["substitutions"].as_array().unwrap();
    assert_eq!(log.len(), 1);
    assert_eq!(log[0]["position"], "Skip");
    assert_eq!(log[0]["original_member_id"].as_str().unwrap(), players[3].1);
    assert_eq!(
        log[0]["substitute_member_id"].as_str().unwrap(),
        players[4].1
    );
    assert_eq!(log[0]["reason"], "called in sick");
}

#[tokio::test]
#[ignore = "requires running server"]
async fn format_is_immutable_once_teams_exist() {
    let manager = TestClient::manager().await;
    let booking_id = create_booking(&manager, "pairs").await;
    let (_, lead) = approved_member(&manager).await;
    let (_, skip) = approved_member(&manager).await;

    let (_, body) = manager
        .post(
            &format!("/bookings/{}/templates", booking_id),
            json!({ "name": "Team B" }),
        )
        .await;
    let template_id = body["data"]["template"]["id"].as_str().unwrap().to_string();

    for (position, member_id) in [("Lead", &lead), ("Skip", &skip)] {
        manager
            .put(
                &format!("/templates/{}/positions", template_id),
                json!({ "position": position, "member_id": member_id }),
            )
            .await;
    }

    // format may still change while no instance exists
    let (status, _) = manager
        .put(
            &format!("/bookings/{}", booking_id),
            json!({ "format": "pairs" }),
        )
        .await;
    assert_eq!(status, 200);

    let (status, _) = manager
        .post(&format!("/templates/{}/instantiate", template_id), json!({}))
        .await;
    assert_eq!(status, 201);

    let (status, body) = manager
        .put(
            &format!("/bookings/{}", booking_id),
            json!({ "format": "fours" }),
        )
        .await;
    assert_eq!(status, 409, "format change must conflict: {}", body);
}

#[tokio::test]
#[ignore = "requires running server"]
async fn members_cannot_use_manager_operations() {
    let manager = TestClient::manager().await;
    let (player, _) = approved_member(&manager).await;

    let (status, _) = player
        .post(
            "/bookings",
            json!({
                "booking_date": "2026-09-19",
                "session": 1,
                "rink_count": 2,
                "format": "singles",
                "gender": "open",
                "event_type": "roll-up",
            }),
        )
        .await;
    assert_eq!(status, 401);

    let booking_id = create_booking(&manager, "singles").await;
    let (status, _) = player
        .post(&format!("/bookings/{}/pool", booking_id), json!({}))
        .await;
    assert_eq!(status, 401);
}
