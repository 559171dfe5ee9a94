//! User account service.

use serde_json::Value;

use nutrack_core::{User, Validate, ValidationError};
use nutrack_store::{schema, AccessError, Documents};

use crate::error::ServiceError;

/// Operations on user accounts.
///
/// Users live at the top level of the document namespace, keyed by their
/// externally assigned id, so creation writes at a caller-chosen id and
/// re-registering an existing id overwrites it.
#[derive(Clone)]
pub struct UserService {
    docs: Documents,
}

impl UserService {
    /// Build the service over the document-access layer.
    #[must_use]
    pub fn new(docs: Documents) -> Self {
        Self { docs }
    }

    /// Create a user from a raw payload. The payload must carry the
    /// account id; defaults fill the rest.
    ///
    /// # Errors
    ///
    /// Validation failures for a missing id or incomplete record, or the
    /// access layer's failure unchanged.
    pub async fn create(&self, body: Value) -> Result<User, ServiceError> {
        let user = User::from_value(body)?;
        let uid = user
            .id
            .as_deref()
            .filter(|id| !id.is_empty())
            .ok_or_else(|| ValidationError::single("the \"id\" field is required"))?
            .to_string();
        user.validate()?;

        self.docs
            .create_with_id(&schema::users(), &uid, user.to_fields())
            .await?;

        tracing::info!(uid = %uid, "user created");
        Ok(user)
    }

    /// Fetch a user by id.
    ///
    /// # Errors
    ///
    /// The access layer's failure unchanged; a stored document that no
    /// longer parses as a user surfaces as a validation failure.
    pub async fn get(&self, uid: &str) -> Result<User, ServiceError> {
        let doc = self.docs.get_by_id(&schema::users(), uid).await?;
        Ok(User::from_value(doc.to_value())?)
    }

    /// Replace a user's record. The id comes from the caller, not the
    /// payload, and updating an id that was never created fails.
    ///
    /// # Errors
    ///
    /// Validation failures, or the access layer's failure unchanged.
    pub async fn update(&self, uid: &str, body: Value) -> Result<User, ServiceError> {
        let user = User::from_value(body)?;
        user.validate()?;

        self.docs
            .update(&schema::users(), uid, user.to_fields())
            .await?;

        tracing::info!(uid = %uid, "user updated");
        Ok(user.with_id(uid))
    }

    /// Delete a user by id.
    ///
    /// History subcollections are left in place; deleting an account does
    /// not cascade.
    ///
    /// # Errors
    ///
    /// The access layer's failure unchanged.
    pub async fn delete(&self, uid: &str) -> Result<(), ServiceError> {
        self.docs.delete_by_id(&schema::users(), uid).await?;
        tracing::info!(uid = %uid, "user deleted");
        Ok(())
    }

    /// Whether a user exists: true iff the fetch succeeds with data.
    /// Store faults surface as `false`, not as errors.
    pub async fn exists(&self, uid: &str) -> bool {
        match self.docs.get_by_id(&schema::users(), uid).await {
            Ok(_) => true,
            Err(AccessError::NotFound) => false,
            Err(e) => {
                tracing::warn!(uid = %uid, error = %e, "existence probe failed");
                false
            }
        }
    }
}
