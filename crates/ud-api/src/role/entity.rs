//! Role Entity

use bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

use crate::shared::error::{ApiError, Result};

/// The fixed permission vocabulary
pub const PERMISSIONS: [&str; 3] = ["read", "write", "delete"];

/// Role document
///
/// Role names are not checked for uniqueness; the console simply
/// shows whatever is stored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Role {
    /// Store-assigned id; absent until the document is inserted
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,

    pub name: String,

    #[serde(default)]
    pub permissions: Vec<String>,
}

impl Role {
    pub fn new(name: impl Into<String>, permissions: Vec<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            permissions,
        }
    }

    /// Store-boundary checks: the name is required and permissions
    /// must come from the fixed vocabulary.
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(ApiError::validation(
                "Role validation failed: `name` is required",
            ));
        }
        for permission in &self.permissions {
            if !PERMISSIONS.contains(&permission.as_str()) {
                return Err(ApiError::validation(format!(
                    "Role validation failed: `{}` is not a valid permission",
                    permission
                )));
            }
        }
        Ok(())
    }
}
