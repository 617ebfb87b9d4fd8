//! User Entity
//!
//! A console account: display name, email, the name of the role it
//! holds, and an active/inactive flag. The role is stored as a plain
//! string; nothing ties it to an existing role document.

use bson::oid::ObjectId;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::shared::error::{ApiError, Result};

/// Account status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum UserStatus {
    Active,
    Inactive,
}

impl Default for UserStatus {
    fn default() -> Self {
        Self::Active
    }
}

impl UserStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Inactive => "inactive",
        }
    }
}

/// User document
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// Store-assigned id; absent until the document is inserted
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,

    pub name: String,

    pub email: String,

    /// Name of the role this user holds (no referential integrity)
    pub role: String,

    #[serde(default)]
    pub status: UserStatus,
}

impl User {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        role: impl Into<String>,
        status: UserStatus,
    ) -> Self {
        Self {
            id: None,
            name: name.into(),
            email: email.into(),
            role: role.into(),
            status,
        }
    }

    /// Required-field checks applied before any write, standing in
    /// for the original store schema's validation.
    pub fn validate(&self) -> Result<()> {
        for (field, value) in [
            ("name", &self.name),
            ("email", &self.email),
            ("role", &self.role),
        ] {
            if value.trim().is_empty() {
                return Err(ApiError::validation(format!(
                    "User validation failed: `{}` is required",
                    field
                )));
            }
        }
        Ok(())
    }
}
