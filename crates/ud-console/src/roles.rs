//! Role list view state.
//!
//! The role table has no filtering or sorting. Create and edit run
//! through a single modal; the name field is locked once an existing
//! role is being edited.

use ud_client::types::Role;
use ud_client::Client;

use crate::forms::RoleForm;
use crate::notify::Notification;

/// Modal state for role create/edit.
#[derive(Debug, Clone, Default)]
pub struct RoleModal {
    pub open: bool,
    pub form: RoleForm,
    editing_id: Option<String>,
}

impl RoleModal {
    pub fn open_create(&mut self) {
        self.open = true;
        self.form = RoleForm::default();
        self.editing_id = None;
    }

    pub fn open_edit(&mut self, role: &Role) {
        self.open = true;
        self.form = RoleForm::prefill(role);
        self.editing_id = Some(role.id.clone());
    }

    pub fn close(&mut self) {
        self.open = false;
        self.form = RoleForm::default();
        self.editing_id = None;
    }

    /// The name cannot be changed once a role exists.
    pub fn name_locked(&self) -> bool {
        self.editing_id.is_some()
    }

    pub fn editing_id(&self) -> Option<&str> {
        self.editing_id.as_deref()
    }
}

/// View state backing the role table and its modal.
#[derive(Debug, Clone)]
pub struct RoleListState {
    client: Client,
    pub roles: Vec<Role>,
    pub modal: RoleModal,
}

impl RoleListState {
    pub fn new(client: Client) -> Self {
        Self {
            client,
            roles: Vec::new(),
            modal: RoleModal::default(),
        }
    }

    /// Replace the list with a fresh fetch. Returns a notification only
    /// on failure.
    pub async fn refresh(&mut self) -> Option<Notification> {
        match self.client.list_roles().await {
            Ok(roles) => {
                self.roles = roles;
                None
            }
            Err(err) => Some(Notification::error(err.to_string())),
        }
    }

    /// Submit the modal form: create when no role is being edited,
    /// update otherwise. The modal closes on success and stays open on
    /// failure so the input is not lost.
    pub async fn submit(&mut self) -> Notification {
        if !self.modal.form.is_valid() {
            return Notification::error("Role name is required");
        }
        let payload = self.modal.form.payload();

        let notification = match self.modal.editing_id().map(str::to_string) {
            None => match self.client.create_role(&payload).await {
                Ok(role) => {
                    self.roles.push(role);
                    Notification::success("Role created successfully")
                }
                Err(err) => Notification::error(err.to_string()),
            },
            Some(id) => match self.client.update_role(&id, &payload).await {
                Ok(updated) => {
                    if let Some(existing) = self.roles.iter_mut().find(|r| r.id == id) {
                        *existing = updated;
                    }
                    Notification::success("Role updated successfully")
                }
                Err(err) => Notification::error(err.to_string()),
            },
        };

        if !notification.is_error() {
            self.modal.close();
        }
        notification
    }

    /// Delete by id. Users referencing the role keep their role string;
    /// nothing cascades or blocks.
    pub async fn delete_role(&mut self, id: &str) -> Notification {
        match self.client.delete_role(id).await {
            Ok(()) => {
                self.roles.retain(|r| r.id != id);
                Notification::success("Role deleted successfully")
            }
            Err(err) => Notification::error(err.to_string()),
        }
    }
}
