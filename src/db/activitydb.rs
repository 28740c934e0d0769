use async_trait::async_trait;
use uuid::Uuid;

use crate::{
    db::db::DBClient,
    models::activitymodel::{ActivityLog, ActorType},
};

#[async_trait]
pub trait ActivityExt {
    /// Append one activity row. The table is append-only: nothing in the
    /// application updates or deletes from it.
    async fn insert_activity(
        &self,
        action: &str,
        description: &str,
        actor_type: ActorType,
        actor_id: Option<Uuid>,
        ip_address: Option<String>,
    ) -> Result<(), sqlx::Error>;

    async fn recent_activities(&self, limit: usize) -> Result<Vec<ActivityLog>, sqlx::Error>;
}

#[async_trait]
impl ActivityExt for DBClient {
    async fn insert_activity(
        &self,
        action: &str,
        description: &str,
        actor_type: ActorType,
        actor_id: Option<Uuid>,
        ip_address: Option<String>,
    ) -> Result<(), sqlx::Error> {
        sqlx::query(
            r#"
            INSERT INTO activity_logs (action, description, actor_type, actor_id, ip_address)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(action)
        .bind(description)
        .bind(actor_type)
        .bind(actor_id)
        .bind(ip_address)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn recent_activities(&self, limit: usize) -> Result<Vec<ActivityLog>, sqlx::Error> {
        let activities = sqlx::query_as::<_, ActivityLog>(
            r#"
            SELECT id, action, description, actor_type, actor_id, ip_address, created_at
            FROM activity_logs
            ORDER BY created_at DESC
            LIMIT $1
            "#,
        )
        .bind(limit as i64)
        .fetch_all(&self.pool)
        .await?;

        Ok(activities)
    }
}
