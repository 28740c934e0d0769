use std::sync::Arc;

use crate::{
    db::{activitydb::ActivityExt, db::DBClient},
    models::activitymodel::{ActivityLog, Actor},
    service::error::ServiceError,
};

/// Append-only activity trail. Writes are best-effort: a failed insert is
/// discarded with a warning and never reaches the operation being logged.
#[derive(Debug, Clone)]
pub struct ActivityService {
    db_client: Arc<DBClient>,
}

impl ActivityService {
    pub fn new(db_client: Arc<DBClient>) -> Self {
        Self { db_client }
    }

    pub async fn record(&self, action: &str, description: impl Into<String>, actor: &Actor) {
        let description = description.into();

        if let Err(err) = self
            .db_client
            .insert_activity(action, &description, actor.kind, actor.id, actor.ip.clone())
            .await
        {
            tracing::warn!("activity entry {} dropped: {}", action, err);
        }
    }

    pub async fn recent(&self, limit: usize) -> Result<Vec<ActivityLog>, ServiceError> {
        let activities = self.db_client.recent_activities(limit).await?;
        Ok(activities)
    }
}
