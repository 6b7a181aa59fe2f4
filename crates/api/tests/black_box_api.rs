//! Black-box tests over the real HTTP surface: a served axum app on an
//! ephemeral port, exercised with reqwest against a throwaway database.

use std::sync::Arc;

use serde_json::{Value, json};

use coinshop_api::app::{AppServices, build_app};
use coinshop_api::jwt::JwtCodec;
use coinshop_ledger::storage;

struct TestServer {
    base_url: String,
    client: reqwest::Client,
    _dir: tempfile::TempDir,
}

impl TestServer {
    async fn spawn() -> Self {
        let dir = tempfile::tempdir().unwrap();
        let db_path = dir.path().join("api.db");
        let pool = storage::connect(&format!("sqlite:{}", db_path.display()))
            .await
            .unwrap();
        storage::migrate(&pool).await.unwrap();
        coinshop_catalog::seed(&pool).await.unwrap();

        let jwt = JwtCodec::new(b"test-secret", 24);
        let app = build_app(Arc::new(AppServices::new(pool, jwt)));

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            base_url: format!("http://{addr}/api"),
            client: reqwest::Client::new(),
            _dir: dir,
        }
    }

    async fn auth(&self, username: &str, password: &str) -> String {
        let res = self
            .client
            .post(format!("{}/auth", self.base_url))
            .json(&json!({"username": username, "password": password}))
            .send()
            .await
            .unwrap();
        assert_eq!(res.status(), 200);
        res.json::<Value>().await.unwrap()["token"]
            .as_str()
            .unwrap()
            .to_string()
    }

    async fn info(&self, token: &str) -> Value {
        let res = self
            .client
            .get(format!("{}/info", self.base_url))
            .bearer_auth(token)
            .send()
            .await
            .unwrap();
        assert_eq!(res.status(), 200);
        res.json().await.unwrap()
    }
}

#[tokio::test]
async fn protected_routes_reject_missing_and_garbage_tokens() {
    let server = TestServer::spawn().await;

    let res = server
        .client
        .get(format!("{}/info", server.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 401);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["errors"], "unauthorized");

    let res = server
        .client
        .get(format!("{}/info", server.base_url))
        .bearer_auth("not-a-jwt")
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 401);
}

#[tokio::test]
async fn new_account_starts_with_a_thousand_coins_and_empty_history() {
    let server = TestServer::spawn().await;
    let token = server.auth("alice", "hunter2").await;

    let info = server.info(&token).await;
    assert_eq!(info["coins"], 1000);
    assert_eq!(info["inventory"].as_array().unwrap().len(), 0);
    assert_eq!(info["coinHistory"]["sent"].as_array().unwrap().len(), 0);
    assert_eq!(info["coinHistory"]["received"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn wrong_password_for_existing_account_is_unauthorized() {
    let server = TestServer::spawn().await;
    server.auth("alice", "hunter2").await;

    let res = server
        .client
        .post(format!("{}/auth", server.base_url))
        .json(&json!({"username": "alice", "password": "wrong"}))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 401);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["errors"], "unauthorized: authentication failed");
}

#[tokio::test]
async fn buying_an_item_debits_the_balance_and_grows_the_inventory() {
    let server = TestServer::spawn().await;
    let token = server.auth("alice", "hunter2").await;

    for _ in 0..2 {
        let res = server
            .client
            .get(format!("{}/buy/cup", server.base_url))
            .bearer_auth(&token)
            .send()
            .await
            .unwrap();
        assert_eq!(res.status(), 200);
    }

    let info = server.info(&token).await;
    assert_eq!(info["coins"], 960);
    let inventory = info["inventory"].as_array().unwrap();
    assert_eq!(inventory.len(), 1);
    assert_eq!(inventory[0]["type"], "cup");
    assert_eq!(inventory[0]["quantity"], 2);
}

#[tokio::test]
async fn buying_an_unknown_item_is_a_bad_request() {
    let server = TestServer::spawn().await;
    let token = server.auth("alice", "hunter2").await;

    let res = server
        .client
        .get(format!("{}/buy/jetpack", server.base_url))
        .bearer_auth(&token)
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 400);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["errors"], "bad request: item not found");
}

#[tokio::test]
async fn send_coin_moves_coins_and_shows_up_in_both_histories() {
    let server = TestServer::spawn().await;
    let alice = server.auth("alice", "hunter2").await;
    let bob = server.auth("bob", "swordfish").await;

    let res = server
        .client
        .post(format!("{}/sendCoin", server.base_url))
        .bearer_auth(&alice)
        .json(&json!({"toUser": "bob", "amount": 150}))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 200);

    let alice_info = server.info(&alice).await;
    assert_eq!(alice_info["coins"], 850);
    let sent = alice_info["coinHistory"]["sent"].as_array().unwrap();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0]["toUser"], "bob");
    assert_eq!(sent[0]["amount"], 150);

    let bob_info = server.info(&bob).await;
    assert_eq!(bob_info["coins"], 1150);
    let received = bob_info["coinHistory"]["received"].as_array().unwrap();
    assert_eq!(received.len(), 1);
    assert_eq!(received[0]["fromUser"], "alice");
    assert_eq!(received[0]["amount"], 150);
}

#[tokio::test]
async fn send_coin_rejections_do_not_move_coins() {
    let server = TestServer::spawn().await;
    let alice = server.auth("alice", "hunter2").await;
    server.auth("bob", "swordfish").await;

    let cases = [
        (json!({"toUser": "", "amount": 10}), "bad request: toUser is required"),
        (
            json!({"toUser": "bob", "amount": 0}),
            "bad request: amount must be greater than zero",
        ),
        (
            json!({"toUser": "bob", "amount": -5}),
            "bad request: amount must be greater than zero",
        ),
        (
            json!({"toUser": "alice", "amount": 10}),
            "bad request: can't transfer to yourself",
        ),
        (
            json!({"toUser": "nobody", "amount": 10}),
            "bad request: recipient not found",
        ),
        (
            json!({"toUser": "bob", "amount": 5000}),
            "bad request: insufficient funds",
        ),
    ];

    for (payload, expected) in cases {
        let res = server
            .client
            .post(format!("{}/sendCoin", server.base_url))
            .bearer_auth(&alice)
            .json(&payload)
            .send()
            .await
            .unwrap();
        assert_eq!(res.status(), 400, "payload {payload}");
        let body: Value = res.json().await.unwrap();
        assert_eq!(body["errors"], expected);
    }

    let info = server.info(&alice).await;
    assert_eq!(info["coins"], 1000);
    assert_eq!(info["coinHistory"]["sent"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn auth_requires_both_username_and_password() {
    let server = TestServer::spawn().await;

    let res = server
        .client
        .post(format!("{}/auth", server.base_url))
        .json(&json!({"username": "alice"}))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 400);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["errors"], "bad request: username and password required");
}
