use async_trait::async_trait;
use uuid::Uuid;

use crate::{
    db::db::DBClient,
    dtos::enquirydtos::CreateEnquiryDto,
    models::enquirymodel::{Enquiry, EnquiryStatus},
};

#[async_trait]
pub trait EnquiryExt {
    async fn create_enquiry(&self, data: &CreateEnquiryDto) -> Result<Enquiry, sqlx::Error>;

    async fn get_enquiry_by_id(&self, enquiry_id: Uuid)
        -> Result<Option<Enquiry>, sqlx::Error>;

    async fn update_enquiry_status(
        &self,
        enquiry_id: Uuid,
        status: EnquiryStatus,
    ) -> Result<Enquiry, sqlx::Error>;

    async fn list_enquiries(
        &self,
        status: Option<EnquiryStatus>,
        page: u32,
        limit: usize,
    ) -> Result<Vec<Enquiry>, sqlx::Error>;

    async fn delete_enquiry(&self, enquiry_id: Uuid) -> Result<(), sqlx::Error>;

    async fn count_enquiries(&self) -> Result<i64, sqlx::Error>;

    async fn count_enquiries_by_status(&self, status: EnquiryStatus)
        -> Result<i64, sqlx::Error>;
}

#[async_trait]
impl EnquiryExt for DBClient {
    async fn create_enquiry(&self, data: &CreateEnquiryDto) -> Result<Enquiry, sqlx::Error> {
        let enquiry = sqlx::query_as::<_, Enquiry>(
            r#"
            INSERT INTO enquiries (name, email, phone, property_id, message, status)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING
                id, name, email, phone, property_id, message, status, created_at
            "#,
        )
        .bind(&data.name)
        .bind(&data.email)
        .bind(&data.phone)
        .bind(data.property_id)
        .bind(&data.message)
        .bind(EnquiryStatus::New)
        .fetch_one(&self.pool)
        .await?;

        Ok(enquiry)
    }

    async fn get_enquiry_by_id(
        &self,
        enquiry_id: Uuid,
    ) -> Result<Option<Enquiry>, sqlx::Error> {
        let enquiry = sqlx::query_as::<_, Enquiry>(
            r#"
            SELECT id, name, email, phone, property_id, message, status, created_at
            FROM enquiries
            WHERE id = $1
            "#,
        )
        .bind(enquiry_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(enquiry)
    }

    async fn update_enquiry_status(
        &self,
        enquiry_id: Uuid,
        status: EnquiryStatus,
    ) -> Result<Enquiry, sqlx::Error> {
        let enquiry = sqlx::query_as::<_, Enquiry>(
            r#"
            UPDATE enquiries
            SET status = $1
            WHERE id = $2
            RETURNING
                id, name, email, phone, property_id, message, status, created_at
            "#,
        )
        .bind(status)
        .bind(enquiry_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(enquiry)
    }

    async fn list_enquiries(
        &self,
        status: Option<EnquiryStatus>,
        page: u32,
        limit: usize,
    ) -> Result<Vec<Enquiry>, sqlx::Error> {
        let offset = (page.saturating_sub(1)) * limit as u32;

        let enquiries = sqlx::query_as::<_, Enquiry>(
            r#"
            SELECT id, name, email, phone, property_id, message, status, created_at
            FROM enquiries
            WHERE ($1::enquiry_status IS NULL OR status = $1)
            ORDER BY created_at DESC
            LIMIT $2 OFFSET $3
            "#,
        )
        .bind(status)
        .bind(limit as i64)
        .bind(offset as i64)
        .fetch_all(&self.pool)
        .await?;

        Ok(enquiries)
    }

    async fn delete_enquiry(&self, enquiry_id: Uuid) -> Result<(), sqlx::Error> {
        sqlx::query("DELETE FROM enquiries WHERE id = $1")
            .bind(enquiry_id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    async fn count_enquiries(&self) -> Result<i64, sqlx::Error> {
        let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM enquiries")
            .fetch_one(&self.pool)
            .await?;

        Ok(count.0)
    }

    async fn count_enquiries_by_status(
        &self,
        status: EnquiryStatus,
    ) -> Result<i64, sqlx::Error> {
        let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM enquiries WHERE status = $1")
            .bind(status)
            .fetch_one(&self.pool)
            .await?;

        Ok(count.0)
    }
}
