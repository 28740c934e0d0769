use std::sync::Arc;

use uuid::Uuid;

use crate::{
    db::{alertdb::AlertExt, db::DBClient, userdb::UserExt},
    dtos::alertdtos::CreateAlertDto,
    mail::mailer::NotificationGateway,
    models::{
        activitymodel::Actor,
        alertmodel::PropertyAlert,
        propertymodel::Property,
    },
    service::{activity_service::ActivityService, error::ServiceError},
    utils::currency::format_inr,
};

#[derive(Clone)]
pub struct AlertService {
    db_client: Arc<DBClient>,
    gateway: Arc<dyn NotificationGateway>,
    activity_service: Arc<ActivityService>,
    app_url: String,
}

impl AlertService {
    pub fn new(
        db_client: Arc<DBClient>,
        gateway: Arc<dyn NotificationGateway>,
        activity_service: Arc<ActivityService>,
        app_url: String,
    ) -> Self {
        Self {
            db_client,
            gateway,
            activity_service,
            app_url,
        }
    }

    /// Evaluate every active alert against a freshly committed property and
    /// notify the owners of the ones that match.
    ///
    /// This runs inside the admin create-property request, after the
    /// property row is durable. Nothing in here may fail the caller: every
    /// error is logged and swallowed. The `alert_triggered` activity entry
    /// is written for each match whether or not an email could be sent.
    pub async fn notify_matching_alerts(&self, property: &Property) {
        let alerts = match self.db_client.get_active_alerts().await {
            Ok(alerts) => alerts,
            Err(err) => {
                tracing::warn!("alert matching skipped, could not load alerts: {}", err);
                return;
            }
        };

        for alert in alerts.iter().filter(|alert| alert.matches(property)) {
            self.notify_owner(alert, property).await;

            self.activity_service
                .record(
                    "alert_triggered",
                    format!(
                        "Alert triggered for user {}: {}",
                        alert.user_id, property.title
                    ),
                    &Actor::system(),
                )
                .await;
        }
    }

    async fn notify_owner(&self, alert: &PropertyAlert, property: &Property) {
        let user = match self.db_client.get_user(Some(alert.user_id), None).await {
            Ok(Some(user)) => user,
            Ok(None) => {
                tracing::warn!("alert {} owner {} no longer exists", alert.id, alert.user_id);
                return;
            }
            Err(err) => {
                tracing::warn!("could not resolve owner of alert {}: {}", alert.id, err);
                return;
            }
        };

        if user.email.is_empty() {
            return;
        }

        let body = format!(
            "Hi {},\n\n\
             A new property matches your alert:\n\n\
             Title: {}\n\
             Type: {}\n\
             Location: {}\n\
             Area: {} sq ft\n\
             Price: {}\n\n\
             View: {}/property/{}\n\n\
             You can manage alerts in your dashboard.\n",
            user.name,
            property.title,
            property.property_type.label(),
            property.location,
            property.area,
            format_inr(property.price),
            self.app_url,
            property.id,
        );

        let delivered = self
            .gateway
            .send(
                &[user.email.clone()],
                "New property matches your alert",
                &body,
                "alert",
            )
            .await;

        if !delivered {
            tracing::warn!(
                "alert email for property {} to user {} was not delivered",
                property.id,
                user.id
            );
        }
    }

    pub async fn create_alert(
        &self,
        actor: &Actor,
        data: &CreateAlertDto,
    ) -> Result<PropertyAlert, ServiceError> {
        let user_id = actor.id.ok_or(ServiceError::Unauthorized)?;

        let alert = self.db_client.create_alert(user_id, data).await?;

        self.activity_service
            .record("create_alert", "Created property alert", actor)
            .await;

        Ok(alert)
    }

    pub async fn delete_alert(&self, actor: &Actor, alert_id: Uuid) -> Result<(), ServiceError> {
        let user_id = actor.id.ok_or(ServiceError::Unauthorized)?;

        let alert = self
            .db_client
            .get_alert_by_id(alert_id)
            .await?
            .ok_or(ServiceError::NotFound("Alert"))?;

        if alert.user_id != user_id {
            return Err(ServiceError::Unauthorized);
        }

        self.db_client.delete_alert(alert_id).await?;

        self.activity_service
            .record("delete_alert", "Deleted property alert", actor)
            .await;

        Ok(())
    }
}
