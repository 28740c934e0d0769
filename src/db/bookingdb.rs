use async_trait::async_trait;
use uuid::Uuid;

use crate::{
    db::db::DBClient,
    dtos::bookingdtos::CreateBookingDto,
    models::bookingmodel::{Booking, BookingStatus},
};

#[async_trait]
pub trait BookingExt {
    async fn create_booking(
        &self,
        user_id: Uuid,
        property_id: Uuid,
        data: &CreateBookingDto,
    ) -> Result<Booking, sqlx::Error>;

    async fn get_booking_by_id(&self, booking_id: Uuid)
        -> Result<Option<Booking>, sqlx::Error>;

    async fn update_booking_status(
        &self,
        booking_id: Uuid,
        status: BookingStatus,
    ) -> Result<Booking, sqlx::Error>;

    async fn get_bookings_by_user(&self, user_id: Uuid) -> Result<Vec<Booking>, sqlx::Error>;

    async fn list_bookings(
        &self,
        status: Option<BookingStatus>,
        page: u32,
        limit: usize,
    ) -> Result<Vec<Booking>, sqlx::Error>;

    async fn delete_booking(&self, booking_id: Uuid) -> Result<(), sqlx::Error>;

    async fn count_bookings(&self) -> Result<i64, sqlx::Error>;

    async fn count_bookings_by_status(&self, status: BookingStatus)
        -> Result<i64, sqlx::Error>;
}

#[async_trait]
impl BookingExt for DBClient {
    async fn create_booking(
        &self,
        user_id: Uuid,
        property_id: Uuid,
        data: &CreateBookingDto,
    ) -> Result<Booking, sqlx::Error> {
        let booking = sqlx::query_as::<_, Booking>(
            r#"
            INSERT INTO bookings (
                user_id, property_id, visit_date, visit_slot, visitor_name,
                visitor_email, visitor_phone, number_of_visitors, message, status
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            RETURNING
                id, user_id, property_id, visit_date, visit_slot, visitor_name,
                visitor_email, visitor_phone, number_of_visitors, message,
                status, created_at
            "#,
        )
        .bind(user_id)
        .bind(property_id)
        .bind(data.visit_date)
        .bind(&data.visit_slot)
        .bind(&data.visitor_name)
        .bind(&data.visitor_email)
        .bind(&data.visitor_phone)
        .bind(data.number_of_visitors)
        .bind(&data.message)
        .bind(BookingStatus::Pending)
        .fetch_one(&self.pool)
        .await?;

        Ok(booking)
    }

    async fn get_booking_by_id(
        &self,
        booking_id: Uuid,
    ) -> Result<Option<Booking>, sqlx::Error> {
        let booking = sqlx::query_as::<_, Booking>(
            r#"
            SELECT
                id, user_id, property_id, visit_date, visit_slot, visitor_name,
                visitor_email, visitor_phone, number_of_visitors, message,
                status, created_at
            FROM bookings
            WHERE id = $1
            "#,
        )
        .bind(booking_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(booking)
    }

    async fn update_booking_status(
        &self,
        booking_id: Uuid,
        status: BookingStatus,
    ) -> Result<Booking, sqlx::Error> {
        let booking = sqlx::query_as::<_, Booking>(
            r#"
            UPDATE bookings
            SET status = $1
            WHERE id = $2
            RETURNING
                id, user_id, property_id, visit_date, visit_slot, visitor_name,
                visitor_email, visitor_phone, number_of_visitors, message,
                status, created_at
            "#,
        )
        .bind(status)
        .bind(booking_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(booking)
    }

    async fn get_bookings_by_user(&self, user_id: Uuid) -> Result<Vec<Booking>, sqlx::Error> {
        let bookings = sqlx::query_as::<_, Booking>(
            r#"
            SELECT
                id, user_id, property_id, visit_date, visit_slot, visitor_name,
                visitor_email, visitor_phone, number_of_visitors, message,
                status, created_at
            FROM bookings
            WHERE user_id = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(bookings)
    }

    async fn list_bookings(
        &self,
        status: Option<BookingStatus>,
        page: u32,
        limit: usize,
    ) -> Result<Vec<Booking>, sqlx::Error> {
        let offset = (page.saturating_sub(1)) * limit as u32;

        let bookings = sqlx::query_as::<_, Booking>(
            r#"
            SELECT
                id, user_id, property_id, visit_date, visit_slot, visitor_name,
                visitor_email, visitor_phone, number_of_visitors, message,
                status, created_at
            FROM bookings
            WHERE ($1::booking_status IS NULL OR status = $1)
            ORDER BY created_at DESC
            LIMIT $2 OFFSET $3
            "#,
        )
        .bind(status)
        .bind(limit as i64)
        .bind(offset as i64)
        .fetch_all(&self.pool)
        .await?;

        Ok(bookings)
    }

    async fn delete_booking(&self, booking_id: Uuid) -> Result<(), sqlx::Error> {
        sqlx::query("DELETE FROM bookings WHERE id = $1")
            .bind(booking_id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    async fn count_bookings(&self) -> Result<i64, sqlx::Error> {
        let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM bookings")
            .fetch_one(&self.pool)
            .await?;

        Ok(count.0)
    }

    async fn count_bookings_by_status(
        &self,
        status: BookingStatus,
    ) -> Result<i64, sqlx::Error> {
        let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM bookings WHERE status = $1")
            .bind(status)
            .fetch_one(&self.pool)
            .await?;

        Ok(count.0)
    }
}
