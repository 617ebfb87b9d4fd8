//! User Repository

use bson::oid::ObjectId;
use futures::TryStreamExt;
use mongodb::{bson::doc, options::ReturnDocument, Collection, Database};

use crate::shared::error::Result;
use crate::user::entity::User;

pub struct UserRepository {
    collection: Collection<User>,
}

impl UserRepository {
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection("users"),
        }
    }

    pub async fn find_all(&self) -> Result<Vec<User>> {
        let cursor = self.collection.find(doc! {}).await?;
        Ok(cursor.try_collect().await?)
    }

    /// Insert a user and return it with the store-assigned id.
    pub async fn insert(&self, mut user: User) -> Result<User> {
        user.validate()?;
        user.id = None;
        let result = self.collection.insert_one(&user).await?;
        user.id = result.inserted_id.as_object_id();
        Ok(user)
    }

    /// Find-and-replace by id, returning the updated document, or
    /// `None` when no document matches.
    pub async fn replace(&self, id: ObjectId, mut user: User) -> Result<Option<User>> {
        user.validate()?;
        user.id = Some(id);
        Ok(self
            .collection
            .find_one_and_replace(doc! { "_id": id }, &user)
            .return_document(ReturnDocument::After)
            .await?)
    }

    pub async fn delete(&self, id: ObjectId) -> Result<bool> {
        let result = self.collection.delete_one(doc! { "_id": id }).await?;
        Ok(result.deleted_count > 0)
    }
}
