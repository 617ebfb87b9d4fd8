//! Dashboard view state.
//!
//! Fetches users and roles together and derives the headline counts:
//! total users, total roles, total permissions granted across roles,
//! and how many users hold each role.

use ud_client::types::{Role, User};
use ud_client::Client;

use crate::notify::Notification;

/// One role's usage: its name and how many users hold it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoleUsage {
    pub name: String,
    pub user_count: usize,
}

/// View state backing the dashboard.
#[derive(Debug, Clone)]
pub struct DashboardState {
    client: Client,
    pub users: Vec<User>,
    pub roles: Vec<Role>,
}

impl DashboardState {
    pub fn new(client: Client) -> Self {
        Self {
            client,
            users: Vec::new(),
            roles: Vec::new(),
        }
    }

    /// Fetch both lists concurrently; either failure leaves both lists
    /// untouched. Returns a notification only on failure.
    pub async fn refresh(&mut self) -> Option<Notification> {
        match futures::try_join!(self.client.list_users(), self.client.list_roles()) {
            Ok((users, roles)) => {
                self.users = users;
                self.roles = roles;
                None
            }
            Err(err) => Some(Notification::error(err.to_string())),
        }
    }

    pub fn total_users(&self) -> usize {
        self.users.len()
    }

    pub fn total_roles(&self) -> usize {
        self.roles.len()
    }

    /// Permissions granted across all roles, counted with multiplicity.
    pub fn total_permissions(&self) -> usize {
        self.roles.iter().map(|r| r.permissions.len()).sum()
    }

    /// Per-role user counts, one entry per fetched role in list order.
    /// Users whose role string matches no fetched role are not counted
    /// anywhere.
    pub fn users_per_role(&self) -> Vec<RoleUsage> {
        self.roles
            .iter()
            .map(|role| RoleUsage {
                name: role.name.clone(),
                user_count: self
                    .users
                    .iter()
                    .filter(|user| user.role == role.name)
                    .count(),
            })
            .collect()
    }
}
