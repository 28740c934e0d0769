use std::sync::Arc;

use uuid::Uuid;

use crate::{
    db::{db::DBClient, favoritedb::FavoriteExt, propertydb::PropertyExt},
    models::activitymodel::Actor,
    service::{activity_service::ActivityService, error::ServiceError},
};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FavoriteOutcome {
    Added,
    Removed,
}

impl FavoriteOutcome {
    pub fn to_str(&self) -> &str {
        match self {
            FavoriteOutcome::Added => "added",
            FavoriteOutcome::Removed => "removed",
        }
    }
}

#[derive(Debug, Clone)]
pub struct FavoriteService {
    db_client: Arc<DBClient>,
    activity_service: Arc<ActivityService>,
}

impl FavoriteService {
    pub fn new(db_client: Arc<DBClient>, activity_service: Arc<ActivityService>) -> Self {
        Self {
            db_client,
            activity_service,
        }
    }

    /// Flip membership of (user, property) in the favorites set. This is a
    /// read-then-write; the unique index on the pair keeps a concurrent
    /// double-add from leaving duplicate rows behind.
    pub async fn toggle_favorite(
        &self,
        actor: &Actor,
        property_id: Uuid,
    ) -> Result<FavoriteOutcome, ServiceError> {
        let user_id = actor.id.ok_or(ServiceError::Unauthorized)?;

        let property = self
            .db_client
            .get_property_by_id(property_id)
            .await?
            .ok_or(ServiceError::NotFound("Property"))?;

        if let Some(favorite) = self.db_client.get_favorite(user_id, property_id).await? {
            self.db_client.delete_favorite(favorite.id).await?;

            self.activity_service
                .record(
                    "remove_favorite",
                    format!("Removed favorite: {}", property.title),
                    actor,
                )
                .await;

            Ok(FavoriteOutcome::Removed)
        } else {
            self.db_client.insert_favorite(user_id, property_id).await?;

            self.activity_service
                .record(
                    "add_favorite",
                    format!("Added favorite: {}", property.title),
                    actor,
                )
                .await;

            Ok(FavoriteOutcome::Added)
        }
    }
}
