// tests/api_tests.rs

use scorecard_server::{
    config::Config,
    mail::{MailQueue, MailerConfig, SmtpMailer},
    routes,
    state::AppState,
};
use std::path::PathBuf;
use std::sync::Arc;

/// Helper function to spawn the app on a random port for testing.
/// Returns the base URL (e.g., "http://127.0.0.1:12345").
///
/// No SMTP password is configured, so every queued scorecard fails fast
/// inside the worker without touching the network.
async fn spawn_app() -> String {
    // 1. Build the mail queue around an unconfigured mailer
    let mailer_config = MailerConfig::default();
    let mailer = SmtpMailer::from_config(mailer_config.clone()).expect("Failed to build mailer");
    let (mail, outcomes) = MailQueue::start(Arc::new(mailer), 2, 16);
    scorecard_server::mail::spawn_outcome_logger(outcomes);

    // 2. Create test configuration and state
    let config = Config {
        port: 0,
        static_dir: PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("static"),
        rust_log: "error".to_string(),
        log_dir: PathBuf::from("logs"),
        mailer: mailer_config,
        mail_workers: 2,
        mail_queue_capacity: 16,
    };

    let state = AppState { config, mail };

    // 3. Create the router with the app state
    let app = routes::create_router(state);

    // 4. Bind to port 0 to get a random available port
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind random port");

    let port = listener.local_addr().unwrap().port();
    let address = format!("http://127.0.0.1:{}", port);

    // 5. Spawn the server in the background
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    address
}

fn sample_submission() -> serde_json::Value {
    serde_json::json!({
        "name": "John Doe",
        "email": "test@example.com",
        "roll": "EE23-001",
        "score": 12,
        "total": 15,
        "answers": [0, 1, 2, 1, 0, 2, 1, 0, 1, 2, 0, 1, 2, 1, 0],
        "questions": [
            {"c": "Digital Electronics", "a": 0},
            {"c": "Digital Electronics", "a": 1},
            {"c": "VLSI", "a": 2},
            {"c": "VLSI", "a": 1},
            {"c": "DSP", "a": 0},
            {"c": "DSP", "a": 2},
            {"c": "DC (Circuits)", "a": 1},
            {"c": "DC (Circuits)", "a": 0},
            {"c": "Aptitude", "a": 1},
            {"c": "Aptitude", "a": 2},
            {"c": "Digital Electronics", "a": 0},
            {"c": "DSP", "a": 1},
            {"c": "VLSI", "a": 2},
            {"c": "DC (Circuits)", "a": 1},
            {"c": "Aptitude", "a": 0}
        ],
        "violations": 1
    })
}

#[tokio::test]
async fn health_check_404() {
    // Arrange
    let address = spawn_app().await;
    let client = reqwest::Client::new();

    // Act
    let response = client
        .get(&format!("{}/nonexistent", address))
        .send()
        .await
        .expect("Failed to execute request");

    // Assert
    assert_eq!(response.status().as_u16(), 404);
}

#[tokio::test]
async fn post_to_unknown_endpoint_is_404() {
    let address = spawn_app().await;
    let client = reqwest::Client::new();

    let response = client
        .post(&format!("{}/submit", address))
        .json(&sample_submission())
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status().as_u16(), 404);
}

#[tokio::test]
async fn serves_static_assets() {
    // Arrange
    let address = spawn_app().await;
    let client = reqwest::Client::new();

    for (path, content_type) in [
        ("/", "text/html"),
        ("/index.html", "text/html"),
        ("/styles.css", "text/css"),
        ("/app.js", "javascript"),
    ] {
        // Act
        let response = client
            .get(&format!("{}{}", address, path))
            .header("Origin", "http://example.com")
            .send()
            .await
            .expect("Failed to execute request");

        // Assert
        assert_eq!(response.status().as_u16(), 200, "GET {}", path);
        let header = response.headers()["content-type"].to_str().unwrap().to_string();
        assert!(header.contains(content_type), "GET {} served {}", path, header);
        assert_eq!(response.headers()["access-control-allow-origin"], "*");
        assert!(!response.bytes().await.unwrap().is_empty());
    }
}

#[tokio::test]
async fn preflight_is_permissive() {
    let address = spawn_app().await;
    let client = reqwest::Client::new();

    let response = client
        .request(reqwest::Method::OPTIONS, &format!("{}/submit-test", address))
        .header("Origin", "http://example.com")
        .header("Access-Control-Request-Method", "POST")
        .header("Access-Control-Request-Headers", "content-type")
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status().as_u16(), 200);
    assert_eq!(response.headers()["access-control-allow-origin"], "*");
}

#[tokio::test]
async fn submit_works_without_mail_secret() {
    // Arrange
    let address = spawn_app().await;
    let client = reqwest::Client::new();

    // Act
    let response = client
        .post(&format!("{}/submit-test", address))
        .json(&sample_submission())
        .send()
        .await
        .expect("Failed to execute request");

    // Assert
    assert_eq!(response.status().as_u16(), 200);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["success"], true);
    assert_eq!(body["email_sent"], true);
    assert_eq!(
        body["message"],
        "Test submitted successfully. Scorecard will be sent to your email shortly."
    );
}

#[tokio::test]
async fn submit_accepts_empty_object_and_missing_content_type() {
    let address = spawn_app().await;
    let client = reqwest::Client::new();

    let response = client
        .post(&format!("{}/submit-test", address))
        .body("{}")
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status().as_u16(), 200);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["success"], true);
}

#[tokio::test]
async fn submit_tolerates_nulls_and_float_scores() {
    let address = spawn_app().await;
    let client = reqwest::Client::new();

    let response = client
        .post(&format!("{}/submit-test", address))
        .json(&serde_json::json!({
            "name": null,
            "email": "test@example.com",
            "score": 12.0,
            "total": 15.0,
            "answers": [0, -1, null]
        }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status().as_u16(), 200);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["email_sent"], true);
}

#[tokio::test]
async fn submit_rejects_unparsable_body() {
    // Arrange
    let address = spawn_app().await;
    let client = reqwest::Client::new();

    // Act
    let response = client
        .post(&format!("{}/submit-test", address))
        .header("Content-Type", "application/json")
        .body("this is not json")
        .send()
        .await
        .expect("Failed to execute request");

    // Assert
    assert_eq!(response.status().as_u16(), 500);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["success"], false);
    assert_eq!(body["email_sent"], false);
    assert!(
        body["message"]
            .as_str()
            .unwrap()
            .starts_with("Error processing submission:")
    );
}

#[tokio::test]
async fn submit_rejects_wrong_shape() {
    let address = spawn_app().await;
    let client = reqwest::Client::new();

    let response = client
        .post(&format!("{}/submit-test", address))
        .json(&serde_json::json!({ "score": "twelve" }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status().as_u16(), 500);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["email_sent"], false);
}
