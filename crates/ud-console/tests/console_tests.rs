//! Console action tests against a stub server.

use ud_client::types::{Role, UserStatus};
use ud_client::Client;
use ud_console::dashboard::DashboardState;
use ud_console::forms::UserForm;
use ud_console::roles::RoleListState;
use ud_console::users::UserListState;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn loaded_roles() -> Vec<Role> {
    vec![Role {
        id: "64b0c5f2a1b2c3d4e5f60701".to_string(),
        name: "Admin".to_string(),
        permissions: vec!["read".to_string(), "write".to_string()],
    }]
}

#[tokio::test]
async fn submitting_valid_user_creates_and_appends() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/users"))
        .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({
            "_id": "64b0c5f2a1b2c3d4e5f60718",
            "name": "Ada Lovelace",
            "email": "ada@example.com",
            "role": "Admin",
            "status": "active"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let mut state = UserListState::new(Client::new(server.uri()));
    let form = UserForm {
        name: "Ada Lovelace".to_string(),
        email: "ada@example.com".to_string(),
        role: "Admin".to_string(),
        status: UserStatus::Active,
    };

    let notification = state.submit_new_user(&form, &loaded_roles()).await.unwrap();
    assert!(!notification.is_error());
    assert_eq!(notification.message, "User created successfully");
    assert_eq!(state.users.len(), 1);
    assert_eq!(state.users[0].id, "64b0c5f2a1b2c3d4e5f60718");
}

#[tokio::test]
async fn invalid_email_never_issues_a_request() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/users"))
        .respond_with(ResponseTemplate::new(201))
        .expect(0)
        .mount(&server)
        .await;

    let mut state = UserListState::new(Client::new(server.uri()));
    let form = UserForm {
        name: "Ada Lovelace".to_string(),
        email: "not-an-email".to_string(),
        role: "Admin".to_string(),
        status: UserStatus::Active,
    };

    let errors = state
        .submit_new_user(&form, &loaded_roles())
        .await
        .unwrap_err();
    assert_eq!(errors["email"], "Invalid email address");
    assert!(state.users.is_empty());
}

#[tokio::test]
async fn failed_delete_leaves_list_unchanged() {
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
    Mock::given(method("DELETE"))
        .and(path("/users/64b0c5f2a1b2c3d4e5f60718"))
        .respond_with(
            ResponseTemplate::new(404)
                .set_body_json(serde_json::json!({ "message": "User not found" })),
        )
        .mount(&server)
        .await;

    let mut state = UserListState::new(Client::new(server.uri()));
    assert!(state.refresh().await.is_none());
    assert_eq!(state.users.len(), 1);

    let notification = state.delete_user("64b0c5f2a1b2c3d4e5f60718").await;
    assert!(notification.is_error());
    assert_eq!(notification.message, "User not found");
    assert_eq!(state.users.len(), 1);
}

#[tokio::test]
async fn successful_delete_removes_user_from_list() {
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
    Mock::given(method("DELETE"))
        .and(path("/users/64b0c5f2a1b2c3d4e5f60718"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;

    let mut state = UserListState::new(Client::new(server.uri()));
    state.refresh().await;

    let notification = state.delete_user("64b0c5f2a1b2c3d4e5f60718").await;
    assert_eq!(notification.message, "User deleted successfully");
    assert!(state.users.is_empty());
}

#[tokio::test]
async fn dashboard_refresh_loads_both_lists() {
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
    Mock::given(method("GET"))
        .and(path("/roles"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            {
                "_id": "64b0c5f2a1b2c3d4e5f60701",
                "name": "Admin",
                "permissions": ["read", "write"]
            },
            {
                "_id": "64b0c5f2a1b2c3d4e5f60702",
                "name": "Viewer",
                "permissions": ["read"]
            }
        ])))
        .mount(&server)
        .await;

    let mut state = DashboardState::new(Client::new(server.uri()));
    assert!(state.refresh().await.is_none());
    assert_eq!(state.total_users(), 1);
    assert_eq!(state.total_roles(), 2);
    assert_eq!(state.total_permissions(), 3);
    assert_eq!(state.users_per_role()[0].user_count, 1);
}

#[tokio::test]
async fn dashboard_refresh_failure_leaves_lists_empty() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/users"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/roles"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
        .mount(&server)
        .await;

    let mut state = DashboardState::new(Client::new(server.uri()));
    let notification = state.refresh().await.unwrap();
    assert!(notification.is_error());
    assert!(state.users.is_empty());
    assert!(state.roles.is_empty());
}

#[tokio::test]
async fn role_modal_submit_creates_and_closes() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/roles"))
        .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({
            "_id": "64b0c5f2a1b2c3d4e5f60701",
            "name": "Editor",
            "permissions": ["read", "write"]
        })))
        .mount(&server)
        .await;

    let mut state = RoleListState::new(Client::new(server.uri()));
    state.modal.open_create();
    state.modal.form.name = "Editor".to_string();
    state.modal.form.toggle_permission("read");
    state.modal.form.toggle_permission("write");

    let notification = state.submit().await;
    assert_eq!(notification.message, "Role created successfully");
    assert!(!state.modal.open);
    assert_eq!(state.roles.len(), 1);
}

#[tokio::test]
async fn role_modal_stays_open_on_server_rejection() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/roles"))
        .respond_with(ResponseTemplate::new(400).set_body_json(
            serde_json::json!({ "message": "Role validation failed: `name` is required" }),
        ))
        .mount(&server)
        .await;

    let mut state = RoleListState::new(Client::new(server.uri()));
    state.modal.open_create();
    state.modal.form.name = "Editor".to_string();

    let notification = state.submit().await;
    assert!(notification.is_error());
    assert!(state.modal.open);
    assert!(state.roles.is_empty());
}

#[tokio::test]
async fn editing_a_role_replaces_it_in_the_list() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/roles"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            {
                "_id": "64b0c5f2a1b2c3d4e5f60701",
                "name": "Editor",
                "permissions": ["read", "write"]
            }
        ])))
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .and(path("/roles/64b0c5f2a1b2c3d4e5f60701"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "_id": "64b0c5f2a1b2c3d4e5f60701",
            "name": "Editor",
            "permissions": ["read"]
        })))
        .mount(&server)
        .await;

    let mut state = RoleListState::new(Client::new(server.uri()));
    state.refresh().await;

    let role = state.roles[0].clone();
    state.modal.open_edit(&role);
    assert!(state.modal.name_locked());
    state.modal.form.toggle_permission("write");

    let notification = state.submit().await;
    assert_eq!(notification.message, "Role updated successfully");
    assert_eq!(state.roles[0].permissions, vec!["read"]);
}
