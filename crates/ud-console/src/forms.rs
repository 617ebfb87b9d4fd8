//! Modal form state and validation.
//!
//! The user form is schema-driven: declarative rules with per-field
//! messages, checked locally before any network call. The role form is
//! deliberately lighter, a name plus a permission set toggled from the
//! fixed vocabulary.

use std::collections::BTreeMap;

use ud_client::types::{Role, RolePayload, UserPayload, UserStatus};
use validator::{Validate, ValidationError};

/// Permission vocabulary offered by the role form.
pub const PERMISSIONS: [&str; 3] = ["read", "write", "delete"];

/// Field name -> first failing message, for inline display.
pub type FieldErrors = BTreeMap<String, String>;

/// Create/edit form for a user.
#[derive(Debug, Clone, Default, Validate)]
pub struct UserForm {
    #[validate(custom(function = validate_name_length))]
    pub name: String,
    #[validate(email(message = "Invalid email address"))]
    pub email: String,
    #[validate(length(min = 1, message = "Role is required"))]
    pub role: String,
    pub status: UserStatus,
}

// Length rules apply to the string as typed, whitespace included.
fn validate_name_length(name: &str) -> Result<(), ValidationError> {
    if name.chars().count() < 2 {
        return Err(ValidationError::new("name_min")
            .with_message("Name must be at least 2 characters".into()));
    }
    if name.chars().count() > 50 {
        return Err(ValidationError::new("name_max")
            .with_message("Name must not exceed 50 characters".into()));
    }
    Ok(())
}

impl UserForm {
    /// Prefill from an existing record for editing.
    pub fn prefill(user: &ud_client::types::User) -> Self {
        Self {
            name: user.name.clone(),
            email: user.email.clone(),
            role: user.role.clone(),
            status: user.status,
        }
    }

    /// Validate against the schema rules plus the loaded role list.
    ///
    /// The role must name one of the currently loaded roles; a stale
    /// selection fails locally rather than being sent to the server.
    pub fn validate_with_roles(&self, roles: &[Role]) -> Result<UserPayload, FieldErrors> {
        let mut errors = match self.validate() {
            Ok(()) => FieldErrors::new(),
            Err(failures) => failures
                .field_errors()
                .iter()
                .filter_map(|(field, field_errors)| {
                    field_errors.first().map(|err| {
                        let message = err
                            .message
                            .as_ref()
                            .map(|m| m.to_string())
                            .unwrap_or_else(|| format!("{} is invalid", field));
                        (field.to_string(), message)
                    })
                })
                .collect(),
        };

        if !self.role.is_empty()
            && !errors.contains_key("role")
            && !roles.iter().any(|r| r.name == self.role)
        {
            errors.insert("role".to_string(), "Please select a valid role".to_string());
        }

        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(UserPayload {
            name: self.name.clone(),
            email: self.email.clone(),
            role: self.role.clone(),
            status: self.status,
        })
    }
}

/// Create/edit form for a role. No schema rules: a name and a
/// permission set toggled one entry at a time.
#[derive(Debug, Clone, Default)]
pub struct RoleForm {
    pub name: String,
    pub permissions: Vec<String>,
}

impl RoleForm {
    pub fn prefill(role: &Role) -> Self {
        Self {
            name: role.name.clone(),
            permissions: role.permissions.clone(),
        }
    }

    pub fn has_permission(&self, permission: &str) -> bool {
        self.permissions.iter().any(|p| p == permission)
    }

    /// Add or remove a permission. Strings outside the vocabulary are
    /// ignored.
    pub fn toggle_permission(&mut self, permission: &str) {
        if !PERMISSIONS.contains(&permission) {
            return;
        }
        if let Some(pos) = self.permissions.iter().position(|p| p == permission) {
            self.permissions.remove(pos);
        } else {
            self.permissions.push(permission.to_string());
        }
    }

    pub fn is_valid(&self) -> bool {
        !self.name.trim().is_empty()
    }

    pub fn payload(&self) -> RolePayload {
        RolePayload {
            name: self.name.trim().to_string(),
            permissions: self.permissions.clone(),
        }
    }
}
