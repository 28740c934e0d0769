use std::sync::Arc;

use uuid::Uuid;

use crate::{
    db::{db::DBClient, enquirydb::EnquiryExt, propertydb::PropertyExt},
    dtos::enquirydtos::CreateEnquiryDto,
    mail::mailer::NotificationGateway,
    models::{
        activitymodel::Actor,
        enquirymodel::{Enquiry, EnquiryStatus},
    },
    service::{activity_service::ActivityService, error::ServiceError},
};

#[derive(Clone)]
pub struct EnquiryService {
    db_client: Arc<DBClient>,
    gateway: Arc<dyn NotificationGateway>,
    activity_service: Arc<ActivityService>,
    operator_email: String,
}

impl EnquiryService {
    pub fn new(
        db_client: Arc<DBClient>,
        gateway: Arc<dyn NotificationGateway>,
        activity_service: Arc<ActivityService>,
        operator_email: String,
    ) -> Self {
        Self {
            db_client,
            gateway,
            activity_service,
            operator_email,
        }
    }

    /// Store a new enquiry and send the operator notification plus the
    /// acknowledgement to the submitter, each best-effort.
    pub async fn create_enquiry(
        &self,
        actor: &Actor,
        data: &CreateEnquiryDto,
    ) -> Result<Enquiry, ServiceError> {
        let enquiry = self.db_client.create_enquiry(data).await?;

        self.activity_service
            .record(
                "submit_enquiry",
                format!("Enquiry from {}", enquiry.name),
                actor,
            )
            .await;

        let property_title = match enquiry.property_id {
            Some(property_id) => self
                .db_client
                .get_property_by_id(property_id)
                .await?
                .map(|p| p.title)
                .unwrap_or_else(|| "General".to_string()),
            None => "General".to_string(),
        };

        let operator_body = format!(
            "New enquiry received:\n\n\
             Name: {}\n\
             Email: {}\n\
             Phone: {}\n\
             Property: {}\n\
             Message:\n{}\n\n\
             Login to admin panel to respond.",
            enquiry.name, enquiry.email, enquiry.phone, property_title, enquiry.message,
        );
        let _ = self
            .gateway
            .send(
                &[self.operator_email.clone()],
                &format!("New Property Enquiry #{}", enquiry.id),
                &operator_body,
                "enquiry",
            )
            .await;

        let ack_body = format!(
            "Hi {},\n\n\
             Thank you for contacting Premium Estate. We will respond shortly.\n\n\
             Regards,\nPremium Estate Team",
            enquiry.name,
        );
        let _ = self
            .gateway
            .send(
                &[enquiry.email.clone()],
                "We received your enquiry",
                &ack_body,
                "enquiry",
            )
            .await;

        Ok(enquiry)
    }

    /// Admin status change; unknown labels return `Ok(None)` with no
    /// mutation, no audit entry and no notification.
    pub async fn set_status(
        &self,
        actor: &Actor,
        enquiry_id: Uuid,
        status_label: &str,
    ) -> Result<Option<Enquiry>, ServiceError> {
        let new_status = match EnquiryStatus::from_label(status_label) {
            Some(status) => status,
            None => return Ok(None),
        };

        let enquiry = self
            .db_client
            .get_enquiry_by_id(enquiry_id)
            .await?
            .ok_or(ServiceError::NotFound("Enquiry"))?;

        let old_status = enquiry.status;

        let enquiry = self
            .db_client
            .update_enquiry_status(enquiry_id, new_status)
            .await?;

        self.activity_service
            .record(
                "update_enquiry_status",
                format!(
                    "Updated enquiry #{} {} -> {}",
                    enquiry.id,
                    old_status.label(),
                    new_status.label()
                ),
                actor,
            )
            .await;

        let body = format!(
            "Hi {},\n\n\
             Your enquiry status has changed to {}.\n\n\
             Regards,\nPremium Estate Team",
            enquiry.name,
            new_status.label(),
        );
        let _ = self
            .gateway
            .send(
                &[enquiry.email.clone()],
                &format!("Your enquiry status: {}", new_status.label()),
                &body,
                "enquiry",
            )
            .await;

        Ok(Some(enquiry))
    }

    pub async fn delete_enquiry(&self, actor: &Actor, enquiry_id: Uuid) -> Result<(), ServiceError> {
        let enquiry = self
            .db_client
            .get_enquiry_by_id(enquiry_id)
            .await?
            .ok_or(ServiceError::NotFound("Enquiry"))?;

        self.db_client.delete_enquiry(enquiry.id).await?;

        self.activity_service
            .record(
                "delete_enquiry",
                format!("Deleted enquiry #{}", enquiry.id),
                actor,
            )
            .await;

        Ok(())
    }
}
