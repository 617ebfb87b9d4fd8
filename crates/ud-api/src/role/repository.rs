//! Role Repository

use bson::oid::ObjectId;
use futures::TryStreamExt;
use mongodb::{bson::doc, options::ReturnDocument, Collection, Database};

use crate::role::entity::Role;
use crate::shared::error::Result;

pub struct RoleRepository {
    collection: Collection<Role>,
}

impl RoleRepository {
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection("roles"),
        }
    }

    pub async fn find_all(&self) -> Result<Vec<Role>> {
        let cursor = self.collection.find(doc! {}).await?;
        Ok(cursor.try_collect().await?)
    }

    /// Insert a role and return it with the store-assigned id.
    pub async fn insert(&self, mut role: Role) -> Result<Role> {
        role.validate()?;
        role.id = None;
        let result = self.collection.insert_one(&role).await?;
        role.id = result.inserted_id.as_object_id();
        Ok(role)
    }

    /// Find-and-replace by id, returning the updated document, or
    /// `None` when no document matches.
    pub async fn replace(&self, id: ObjectId, mut role: Role) -> Result<Option<Role>> {
        role.validate()?;
        role.id = Some(id);
        Ok(self
            .collection
            .find_one_and_replace(doc! { "_id": id }, &role)
            .return_document(ReturnDocument::After)
            .await?)
    }

    /// Delete by id. Users referencing this role keep their dangling
    /// role string; deletion neither cascades nor blocks.
    pub async fn delete(&self, id: ObjectId) -> Result<bool> {
        let result = self.collection.delete_one(doc! { "_id": id }).await?;
        Ok(result.deleted_count > 0)
    }
}
