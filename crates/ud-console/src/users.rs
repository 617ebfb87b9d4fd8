//! User list view state.
//!
//! Holds the fetched user list plus three independent controls (search,
//! status filter, role filter) and a single-column sort. The visible
//! list is derived on demand from those inputs; mutations call the API
//! and update the in-memory list in place on success.

use ud_client::types::{Role, User, UserPayload, UserStatus};
use ud_client::Client;

use crate::forms::{FieldErrors, UserForm};
use crate::notify::Notification;

/// Column the user table is sorted by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    #[default]
    Name,
    Email,
    Role,
    Status,
}

impl SortKey {
    fn field<'a>(&self, user: &'a User) -> &'a str {
        match self {
            Self::Name => &user.name,
            Self::Email => &user.email,
            Self::Role => &user.role,
            Self::Status => user.status.as_str(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

/// Status filter control: all records, or one of the two statuses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Active,
    Inactive,
}

impl StatusFilter {
    fn matches(&self, status: UserStatus) -> bool {
        match self {
            Self::All => true,
            Self::Active => status == UserStatus::Active,
            Self::Inactive => status == UserStatus::Inactive,
        }
    }
}

/// View state backing the user table.
#[derive(Debug, Clone)]
pub struct UserListState {
    client: Client,
    pub users: Vec<User>,
    pub search: String,
    pub status_filter: StatusFilter,
    /// Exact role name, or `None` for all roles.
    pub role_filter: Option<String>,
    pub sort_key: SortKey,
    pub sort_direction: SortDirection,
}

impl UserListState {
    pub fn new(client: Client) -> Self {
        Self {
            client,
            users: Vec::new(),
            search: String::new(),
            status_filter: StatusFilter::default(),
            role_filter: None,
            sort_key: SortKey::default(),
            sort_direction: SortDirection::default(),
        }
    }

    /// Derive the visible list: search over name or email
    /// (case-insensitive substring), then status filter, then role
    /// filter, then a case-insensitive sort on the selected column.
    /// Pure function of the current state.
    pub fn visible_users(&self) -> Vec<&User> {
        let term = self.search.to_lowercase();
        let mut visible: Vec<&User> = self
            .users
            .iter()
            .filter(|user| {
                term.is_empty()
                    || user.name.to_lowercase().contains(&term)
                    || user.email.to_lowercase().contains(&term)
            })
            .filter(|user| self.status_filter.matches(user.status))
            .filter(|user| match &self.role_filter {
                Some(role) => &user.role == role,
                None => true,
            })
            .collect();

        visible.sort_by(|a, b| {
            let ordering = self
                .sort_key
                .field(a)
                .to_lowercase()
                .cmp(&self.sort_key.field(b).to_lowercase());
            match self.sort_direction {
                SortDirection::Ascending => ordering,
                SortDirection::Descending => ordering.reverse(),
            }
        });
        visible
    }

    /// Reselecting the current column flips direction; a new column
    /// resets to ascending.
    pub fn select_sort(&mut self, key: SortKey) {
        if self.sort_key == key {
            self.sort_direction = match self.sort_direction {
                SortDirection::Ascending => SortDirection::Descending,
                SortDirection::Descending => SortDirection::Ascending,
            };
        } else {
            self.sort_key = key;
            self.sort_direction = SortDirection::Ascending;
        }
    }

    /// Replace the list with a fresh fetch. Returns a notification only
    /// on failure.
    pub async fn refresh(&mut self) -> Option<Notification> {
        match self.client.list_users().await {
            Ok(users) => {
                self.users = users;
                None
            }
            Err(err) => Some(Notification::error(err.to_string())),
        }
    }

    pub async fn create_user(&mut self, payload: &UserPayload) -> Notification {
        match self.client.create_user(payload).await {
            Ok(user) => {
                self.users.push(user);
                Notification::success("User created successfully")
            }
            Err(err) => Notification::error(err.to_string()),
        }
    }

    pub async fn update_user(&mut self, id: &str, payload: &UserPayload) -> Notification {
        match self.client.update_user(id, payload).await {
            Ok(updated) => {
                if let Some(existing) = self.users.iter_mut().find(|u| u.id == id) {
                    *existing = updated;
                }
                Notification::success("User updated successfully")
            }
            Err(err) => Notification::error(err.to_string()),
        }
    }

    pub async fn delete_user(&mut self, id: &str) -> Notification {
        match self.client.delete_user(id).await {
            Ok(()) => {
                self.users.retain(|u| u.id != id);
                Notification::success("User deleted successfully")
            }
            Err(err) => Notification::error(err.to_string()),
        }
    }

    /// Validate and create. No request is issued when validation fails.
    pub async fn submit_new_user(
        &mut self,
        form: &UserForm,
        roles: &[Role],
    ) -> Result<Notification, FieldErrors> {
        let payload = form.validate_with_roles(roles)?;
        Ok(self.create_user(&payload).await)
    }

    /// Validate and update. No request is issued when validation fails.
    pub async fn submit_user_update(
        &mut self,
        id: &str,
        form: &UserForm,
        roles: &[Role],
    ) -> Result<Notification, FieldErrors> {
        let payload = form.validate_with_roles(roles)?;
        Ok(self.update_user(id, &payload).await)
    }
}
