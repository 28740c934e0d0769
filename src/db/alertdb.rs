use async_trait::async_trait;
use uuid::Uuid;

use crate::{
    db::db::DBClient, dtos::alertdtos::CreateAlertDto, models::alertmodel::PropertyAlert,
};

#[async_trait]
pub trait AlertExt {
    async fn create_alert(
        &self,
        user_id: Uuid,
        data: &CreateAlertDto,
    ) -> Result<PropertyAlert, sqlx::Error>;

    async fn get_alert_by_id(&self, alert_id: Uuid)
        -> Result<Option<PropertyAlert>, sqlx::Error>;

    /// Every alert currently eligible for matching; inactive alerts are
    /// excluded here rather than filtered by the caller.
    async fn get_active_alerts(&self) -> Result<Vec<PropertyAlert>, sqlx::Error>;

    async fn get_alerts_by_user(&self, user_id: Uuid)
        -> Result<Vec<PropertyAlert>, sqlx::Error>;

    async fn delete_alert(&self, alert_id: Uuid) -> Result<(), sqlx::Error>;
}

#[async_trait]
impl AlertExt for DBClient {
    async fn create_alert(
        &self,
        user_id: Uuid,
        data: &CreateAlertDto,
    ) -> Result<PropertyAlert, sqlx::Error> {
        let alert = sqlx::query_as::<_, PropertyAlert>(
            r#"
            INSERT INTO property_alerts
                (user_id, alert_type, property_type, min_price, max_price, location)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING
                id, user_id, alert_type, property_type, min_price, max_price,
                location, is_active, created_at
            "#,
        )
        .bind(user_id)
        .bind("new_property")
        .bind(data.property_type)
        .bind(data.min_price)
        .bind(data.max_price)
        .bind(data.location.as_deref().filter(|l| !l.is_empty()))
        .fetch_one(&self.pool)
        .await?;

        Ok(alert)
    }

    async fn get_alert_by_id(
        &self,
        alert_id: Uuid,
    ) -> Result<Option<PropertyAlert>, sqlx::Error> {
        let alert = sqlx::query_as::<_, PropertyAlert>(
            r#"
            SELECT
                id, user_id, alert_type, property_type, min_price, max_price,
                location, is_active, created_at
            FROM property_alerts
            WHERE id = $1
            "#,
        )
        .bind(alert_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(alert)
    }

    async fn get_active_alerts(&self) -> Result<Vec<PropertyAlert>, sqlx::Error> {
        let alerts = sqlx::query_as::<_, PropertyAlert>(
            r#"
            SELECT
                id, user_id, alert_type, property_type, min_price, max_price,
                location, is_active, created_at
            FROM property_alerts
            WHERE is_active = TRUE
            ORDER BY created_at ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(alerts)
    }

    async fn get_alerts_by_user(
        &self,
        user_id: Uuid,
    ) -> Result<Vec<PropertyAlert>, sqlx::Error> {
        let alerts = sqlx::query_as::<_, PropertyAlert>(
            r#"
            SELECT
                id, user_id, alert_type, property_type, min_price, max_price,
                location, is_active, created_at
            FROM property_alerts
            WHERE user_id = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(alerts)
    }

    async fn delete_alert(&self, alert_id: Uuid) -> Result<(), sqlx::Error> {
        sqlx::query("DELETE FROM property_alerts WHERE id = $1")
            .bind(alert_id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}
