use std::sync::Arc;

use uuid::Uuid;

use crate::{
    db::{bookingdb::BookingExt, db::DBClient, propertydb::PropertyExt},
    dtos::bookingdtos::CreateBookingDto,
    mail::mailer::NotificationGateway,
    models::{
        activitymodel::Actor,
        bookingmodel::{transition_allowed, Booking, BookingStatus},
    },
    service::{activity_service::ActivityService, error::ServiceError},
};

#[derive(Clone)]
pub struct BookingService {
    db_client: Arc<DBClient>,
    gateway: Arc<dyn NotificationGateway>,
    activity_service: Arc<ActivityService>,
    operator_email: String,
}

impl BookingService {
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

    /// Book a site visit. The booking always starts out Pending; the two
    /// confirmation emails are best-effort and independent of each other.
    pub async fn create_booking(
        &self,
        actor: &Actor,
        property_id: Uuid,
        data: &CreateBookingDto,
    ) -> Result<Booking, ServiceError> {
        let user_id = actor.id.ok_or(ServiceError::Unauthorized)?;

        let property = self
            .db_client
            .get_property_by_id(property_id)
            .await?
            .ok_or(ServiceError::NotFound("Property"))?;

        let booking = self
            .db_client
            .create_booking(user_id, property_id, data)
            .await?;

        self.activity_service
            .record(
                "create_booking",
                format!("Booking for {}", property.title),
                actor,
            )
            .await;

        let operator_body = format!(
            "New site visit booked:\n\n\
             Visitor: {}\n\
             Email: {}\n\
             Phone: {}\n\
             Property: {}\n\
             Date: {}\n\
             Time Slot: {}\n\
             Visitors: {}\n\
             Message: {}",
            booking.visitor_name,
            booking.visitor_email,
            booking.visitor_phone,
            property.title,
            booking.visit_date.format("%d %b %Y"),
            booking.visit_slot,
            booking.number_of_visitors,
            booking.message.as_deref().unwrap_or("(none)"),
        );
        let _ = self
            .gateway
            .send(
                &[self.operator_email.clone()],
                &format!("New Site Visit Booking #{}", booking.id),
                &operator_body,
                "booking",
            )
            .await;

        let visitor_body = format!(
            "Hi {},\n\n\
             Thanks for booking a site visit for '{}' on {} at {}. \
             We will confirm soon.\n\n\
             Regards,\nPremium Estate Team",
            booking.visitor_name,
            property.title,
            booking.visit_date.format("%d %b %Y"),
            booking.visit_slot,
        );
        let _ = self
            .gateway
            .send(
                &[booking.visitor_email.clone()],
                "Your site visit booking is pending confirmation",
                &visitor_body,
                "booking",
            )
            .await;

        Ok(booking)
    }

    /// Visitors may only cancel their own bookings.
    pub async fn cancel_booking(
        &self,
        actor: &Actor,
        booking_id: Uuid,
    ) -> Result<Booking, ServiceError> {
        let user_id = actor.id.ok_or(ServiceError::Unauthorized)?;

        let booking = self
            .db_client
            .get_booking_by_id(booking_id)
            .await?
            .ok_or(ServiceError::NotFound("Booking"))?;

        if booking.user_id != user_id {
            return Err(ServiceError::Unauthorized);
        }

        if !transition_allowed(booking.status, BookingStatus::Cancelled) {
            return Err(ServiceError::Validation(
                "Booking can no longer be cancelled".to_string(),
            ));
        }

        let property = self
            .db_client
            .get_property_by_id(booking.property_id)
            .await?
            .ok_or(ServiceError::NotFound("Property"))?;

        let booking = self
            .db_client
            .update_booking_status(booking_id, BookingStatus::Cancelled)
            .await?;

        self.activity_service
            .record(
                "cancel_booking",
                format!("Cancelled booking #{}", booking.id),
                actor,
            )
            .await;

        let body = format!(
            "Hi {},\n\n\
             Your booking for '{}' has been cancelled as requested.\n\n\
             Regards,\nPremium Estate Team",
            booking.visitor_name, property.title,
        );
        let _ = self
            .gateway
            .send(
                &[booking.visitor_email.clone()],
                &format!("Booking #{} Cancelled", booking.id),
                &body,
                "booking",
            )
            .await;

        Ok(booking)
    }

    /// Admin status change. The incoming label is matched against the four
    /// known states; anything else returns `Ok(None)` with no mutation, no
    /// audit entry and no notification. A change to the same state is
    /// persisted and audited but not emailed.
    pub async fn set_status(
        &self,
        actor: &Actor,
        booking_id: Uuid,
        status_label: &str,
    ) -> Result<Option<Booking>, ServiceError> {
        let new_status = match BookingStatus::from_label(status_label) {
            Some(status) => status,
            None => return Ok(None),
        };

        let booking = self
            .db_client
            .get_booking_by_id(booking_id)
            .await?
            .ok_or(ServiceError::NotFound("Booking"))?;

        let old_status = booking.status;

        if !transition_allowed(old_status, new_status) {
            return Err(ServiceError::Validation(format!(
                "Booking cannot move from {} to {}",
                old_status.label(),
                new_status.label()
            )));
        }

        let property = self
            .db_client
            .get_property_by_id(booking.property_id)
            .await?
            .ok_or(ServiceError::NotFound("Property"))?;

        let booking = self
            .db_client
            .update_booking_status(booking_id, new_status)
            .await?;

        self.activity_service
            .record(
                "update_booking_status",
                format!(
                    "Updated booking #{} {} -> {}",
                    booking.id,
                    old_status.label(),
                    new_status.label()
                ),
                actor,
            )
            .await;

        if old_status != new_status {
            let body = format!(
                "Hi {},\n\n\
                 Your booking for '{}' on {} changed from {} to {}.\n\n\
                 Regards,\nPremium Estate Team",
                booking.visitor_name,
                property.title,
                booking.visit_date.format("%d %b %Y"),
                old_status.label(),
                new_status.label(),
            );
            let _ = self
                .gateway
                .send(
                    &[booking.visitor_email.clone()],
                    &format!("Booking #{} Status Updated", booking.id),
                    &body,
                    "booking",
                )
                .await;
        }

        Ok(Some(booking))
    }

    pub async fn delete_booking(&self, actor: &Actor, booking_id: Uuid) -> Result<(), ServiceError> {
        let booking = self
            .db_client
            .get_booking_by_id(booking_id)
            .await?
            .ok_or(ServiceError::NotFound("Booking"))?;

        self.db_client.delete_booking(booking.id).await?;

        self.activity_service
            .record(
                "delete_booking",
                format!("Deleted booking #{}", booking.id),
                actor,
            )
            .await;

        Ok(())
    }
}
