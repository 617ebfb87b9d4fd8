//! UserDeck REST client

use reqwest::{Response, StatusCode};

use crate::error::{Error, Result};
use crate::types::{ErrorBody, Role, RolePayload, User, UserPayload};

/// Typed client for the console's REST API.
///
/// Plain request/response: no retries, no timeout override beyond the
/// transport defaults, no cancellation.
#[derive(Debug, Clone)]
pub struct Client {
    http: reqwest::Client,
    base_url: String,
}

impl Client {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Map a failed response onto the console's error taxonomy:
    /// 404 -> "<entity> not found", 400/500 -> the server's message or
    /// the operation fallback, anything else -> the raw status error.
    async fn check(response: Response, entity: &str, fallback: &str) -> Result<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        match status {
            StatusCode::NOT_FOUND => Err(Error::NotFound(format!("{} not found", entity))),
            StatusCode::BAD_REQUEST => {
                Err(Error::BadRequest(Self::server_message(response, fallback).await))
            }
            StatusCode::INTERNAL_SERVER_ERROR => {
                Err(Error::Server(Self::server_message(response, fallback).await))
            }
            // error_for_status() only errors on 4xx/5xx; a 1xx/3xx
            // still has to come back as an error, not a success.
            _ => match response.error_for_status() {
                Ok(response) => Err(Error::Server(format!(
                    "Unexpected response status: {}",
                    response.status()
                ))),
                Err(err) => Err(err.into()),
            },
        }
    }

    async fn server_message(response: Response, fallback: &str) -> String {
        response
            .json::<ErrorBody>()
            .await
            .map(|body| body.message)
            .unwrap_or_else(|_| fallback.to_string())
    }

    // User endpoints

    pub async fn list_users(&self) -> Result<Vec<User>> {
        let response = self.http.get(self.url("/users")).send().await?;
        let response = Self::check(
            response,
            "User",
            "Failed to fetch users. Please try again later.",
        )
        .await?;
        Ok(response.json().await?)
    }

    pub async fn create_user(&self, user: &UserPayload) -> Result<User> {
        let response = self.http.post(self.url("/users")).json(user).send().await?;
        let response = Self::check(
            response,
            "User",
            "Failed to create user. Please check your input and try again.",
        )
        .await?;
        Ok(response.json().await?)
    }

    pub async fn update_user(&self, id: &str, user: &UserPayload) -> Result<User> {
        let response = self
            .http
            .put(self.url(&format!("/users/{}", id)))
            .json(user)
            .send()
            .await?;
        let response = Self::check(response, "User", "Failed to update user").await?;
        Ok(response.json().await?)
    }

    pub async fn delete_user(&self, id: &str) -> Result<()> {
        let response = self
            .http
            .delete(self.url(&format!("/users/{}", id)))
            .send()
            .await?;
        Self::check(response, "User", "Failed to delete user").await?;
        Ok(())
    }

    // Role endpoints

    pub async fn list_roles(&self) -> Result<Vec<Role>> {
        let response = self.http.get(self.url("/roles")).send().await?;
        let response = Self::check(response, "Role", "Failed to fetch roles").await?;
        Ok(response.json().await?)
    }

    pub async fn create_role(&self, role: &RolePayload) -> Result<Role> {
        let response = self.http.post(self.url("/roles")).json(role).send().await?;
        let response = Self::check(response, "Role", "Failed to create role").await?;
        Ok(response.json().await?)
    }

    pub async fn update_role(&self, id: &str, role: &RolePayload) -> Result<Role> {
        let response = self
            .http
            .put(self.url(&format!("/roles/{}", id)))
            .json(role)
            .send()
            .await?;
        let response = Self::check(response, "Role", "Failed to update role").await?;
        Ok(response.json().await?)
    }

    pub async fn delete_role(&self, id: &str) -> Result<()> {
        let response = self
            .http
            .delete(self.url(&format!("/roles/{}", id)))
            .send()
            .await?;
        Self::check(response, "Role", "Failed to delete role").await?;
        Ok(())
    }
}
