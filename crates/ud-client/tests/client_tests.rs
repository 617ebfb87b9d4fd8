//! Client error-mapping tests against a stub server.

use ud_client::types::{RolePayload, UserPayload, UserStatus};
use ud_client::{Client, Error};
use wiremock::matchers::{body_json_string, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn sample_user_payload() -> UserPayload {
    UserPayload {
        name: "Ada Lovelace".to_string(),
        email: "ada@example.com".to_string(),
        role: "Admin".to_string(),
        status: UserStatus::Active,
    }
}

#[tokio::test]
async fn list_users_parses_wire_format() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/users"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            {
                "_id": "64b0c5f2a1b2c3d4e5f60718",
                "name": "Ada Lovelace",
                "email": "ada@example.com",
                "role": "Admin",
                "status": "active"
            }
        ])))
        .mount(&server)
        .await;

    let client = Client::new(server.uri());
    let users = client.list_users().await.unwrap();
    assert_eq!(users.len(), 1);
    assert_eq!(users[0].id, "64b0c5f2a1b2c3d4e5f60718");
    assert_eq!(users[0].status, UserStatus::Active);
}

#[tokio::test]
async fn delete_missing_user_maps_to_not_found() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/users/64b0c5f2a1b2c3d4e5f60718"))
        .respond_with(
            ResponseTemplate::new(404)
                .set_body_json(serde_json::json!({ "message": "User not found" })),
        )
        .mount(&server)
        .await;

    let client = Client::new(server.uri());
    let err = client.delete_user("64b0c5f2a1b2c3d4e5f60718").await.unwrap_err();
    match err {
        Error::NotFound(message) => assert_eq!(message, "User not found"),
        other => panic!("expected NotFound, got {:?}", other),
    }
}

#[tokio::test]
async fn create_user_surfaces_server_validation_message() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/users"))
        .respond_with(ResponseTemplate::new(400).set_body_json(
            serde_json::json!({ "message": "User validation failed: `email` is required" }),
        ))
        .mount(&server)
        .await;

    let client = Client::new(server.uri());
    let err = client.create_user(&sample_user_payload()).await.unwrap_err();
    match err {
        Error::BadRequest(message) => {
            assert_eq!(message, "User validation failed: `email` is required")
        }
        other => panic!("expected BadRequest, got {:?}", other),
    }
}

#[tokio::test]
async fn create_user_falls_back_when_body_is_empty() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/users"))
        .respond_with(ResponseTemplate::new(400))
        .mount(&server)
        .await;

    let client = Client::new(server.uri());
    let err = client.create_user(&sample_user_payload()).await.unwrap_err();
    match err {
        Error::BadRequest(message) => assert_eq!(
            message,
            "Failed to create user. Please check your input and try again."
        ),
        other => panic!("expected BadRequest, got {:?}", other),
    }
}

#[tokio::test]
async fn list_users_maps_500_to_server_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/users"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let client = Client::new(server.uri());
    let err = client.list_users().await.unwrap_err();
    match err {
        Error::Server(message) => {
            assert_eq!(message, "Failed to fetch users. Please try again later.")
        }
        other => panic!("expected Server, got {:?}", other),
    }
}

#[tokio::test]
async fn unexpected_status_surfaces_raw_transport_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/roles"))
        .respond_with(ResponseTemplate::new(418))
        .mount(&server)
        .await;

    let client = Client::new(server.uri());
    let err = client.list_roles().await.unwrap_err();
    assert!(matches!(err, Error::Http(_)));
}

#[tokio::test]
async fn non_error_redirect_status_maps_to_server_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/users"))
        .respond_with(ResponseTemplate::new(304))
        .mount(&server)
        .await;

    let client = Client::new(server.uri());
    let err = client.list_users().await.unwrap_err();
    match err {
        Error::Server(message) => assert!(message.contains("304"), "got: {}", message),
        other => panic!("expected Server, got {:?}", other),
    }
}

#[tokio::test]
async fn update_role_sends_payload_and_returns_updated_record() {
    let server = MockServer::start().await;
    let payload = RolePayload {
        name: "Editor".to_string(),
        permissions: vec!["read".to_string()],
    };
    Mock::given(method("PUT"))
        .and(path("/roles/64b0c5f2a1b2c3d4e5f60719"))
        .and(body_json_string(
            serde_json::to_string(&payload).unwrap(),
        ))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "_id": "64b0c5f2a1b2c3d4e5f60719",
            "name": "Editor",
            "permissions": ["read"]
        })))
        .mount(&server)
        .await;

    let client = Client::new(server.uri());
    let role = client
        .update_role("64b0c5f2a1b2c3d4e5f60719", &payload)
        .await
        .unwrap();
    assert_eq!(role.permissions, vec!["read"]);
}

#[tokio::test]
async fn delete_role_accepts_empty_204() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/roles/64b0c5f2a1b2c3d4e5f60719"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;

    let client = Client::new(server.uri());
    assert!(client.delete_role("64b0c5f2a1b2c3d4e5f60719").await.is_ok());
}
