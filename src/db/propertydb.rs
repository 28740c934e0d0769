use async_trait::async_trait;
use uuid::Uuid;

use crate::{
    db::db::DBClient,
    dtos::propertydtos::SavePropertyDto,
    models::propertymodel::{
        Property, PropertyDocument, PropertyImage, PropertyStatus, PropertyType, PropertyVideo,
        VideoType,
    },
};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PropertySort {
    Recent,
    PriceLow,
    PriceHigh,
    AreaLow,
    AreaHigh,
}

impl PropertySort {
    pub fn from_query(value: &str) -> PropertySort {
        match value {
            "price_low" => PropertySort::PriceLow,
            "price_high" => PropertySort::PriceHigh,
            "area_low" => PropertySort::AreaLow,
            "area_high" => PropertySort::AreaHigh,
            _ => PropertySort::Recent,
        }
    }

    fn order_clause(&self) -> &str {
        match self {
            PropertySort::Recent => "created_at DESC",
            PropertySort::PriceLow => "price ASC",
            PropertySort::PriceHigh => "price DESC",
            PropertySort::AreaLow => "area ASC",
            PropertySort::AreaHigh => "area DESC",
        }
    }
}

#[derive(Debug)]
pub struct PropertySearchFilters {
    pub property_type: Option<PropertyType>,
    pub min_price: Option<i64>,
    pub max_price: Option<i64>,
    pub location: Option<String>,
    pub sort: PropertySort,
}

#[async_trait]
pub trait PropertyExt {
    async fn create_property(&self, data: &SavePropertyDto) -> Result<Property, sqlx::Error>;

    async fn update_property(
        &self,
        property_id: Uuid,
        data: &SavePropertyDto,
    ) -> Result<Property, sqlx::Error>;

    async fn delete_property(&self, property_id: Uuid) -> Result<(), sqlx::Error>;

    async fn get_property_by_id(&self, property_id: Uuid)
        -> Result<Option<Property>, sqlx::Error>;

    async fn list_available_properties(
        &self,
        filters: &PropertySearchFilters,
        page: u32,
        limit: usize,
    ) -> Result<Vec<Property>, sqlx::Error>;

    async fn featured_properties(&self, limit: usize) -> Result<Vec<Property>, sqlx::Error>;

    async fn recent_properties(&self, limit: usize) -> Result<Vec<Property>, sqlx::Error>;

    async fn related_properties(
        &self,
        property_id: Uuid,
        property_type: PropertyType,
        limit: usize,
    ) -> Result<Vec<Property>, sqlx::Error>;

    async fn list_all_properties(
        &self,
        page: u32,
        limit: usize,
    ) -> Result<Vec<Property>, sqlx::Error>;

    async fn update_view_count(&self, property_id: Uuid, views: i64) -> Result<(), sqlx::Error>;

    async fn update_share_count(&self, property_id: Uuid, shares: i64) -> Result<i64, sqlx::Error>;

    async fn add_property_image(
        &self,
        property_id: Uuid,
        image_url: &str,
        is_primary: bool,
    ) -> Result<PropertyImage, sqlx::Error>;

    async fn add_property_video(
        &self,
        property_id: Uuid,
        video_url: &str,
        video_type: VideoType,
    ) -> Result<PropertyVideo, sqlx::Error>;

    async fn add_property_document(
        &self,
        property_id: Uuid,
        document_name: &str,
        document_url: &str,
        document_type: &str,
        file_size: Option<String>,
    ) -> Result<PropertyDocument, sqlx::Error>;

    async fn get_property_images(
        &self,
        property_id: Uuid,
    ) -> Result<Vec<PropertyImage>, sqlx::Error>;

    async fn get_property_videos(
        &self,
        property_id: Uuid,
    ) -> Result<Vec<PropertyVideo>, sqlx::Error>;

    async fn get_property_documents(
        &self,
        property_id: Uuid,
    ) -> Result<Vec<PropertyDocument>, sqlx::Error>;

    async fn delete_property_videos(&self, property_id: Uuid) -> Result<(), sqlx::Error>;

    async fn count_properties(&self) -> Result<i64, sqlx::Error>;

    async fn count_properties_by_status(&self, status: PropertyStatus)
        -> Result<i64, sqlx::Error>;

    async fn engagement_totals(&self) -> Result<(i64, i64), sqlx::Error>;

    async fn property_type_distribution(&self) -> Result<Vec<(PropertyType, i64)>, sqlx::Error>;

    async fn monthly_property_additions(&self) -> Result<Vec<(String, i64)>, sqlx::Error>;

    async fn top_viewed_properties(&self, limit: usize) -> Result<Vec<Property>, sqlx::Error>;
}

#[async_trait]
impl PropertyExt for DBClient {
    async fn create_property(&self, data: &SavePropertyDto) -> Result<Property, sqlx::Error> {
        let property = sqlx::query_as::<_, Property>(
            r#"
            INSERT INTO properties (
                title, description, property_type, price, area, location,
                address, latitude, longitude, status, featured
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            RETURNING
                id, title, description, property_type, price, area, location,
                address, latitude, longitude, status, featured, views, shares,
                created_at, updated_at
            "#,
        )
        .bind(&data.title)
        .bind(&data.description)
        .bind(data.property_type)
        .bind(data.price)
        .bind(data.area)
        .bind(&data.location)
        .bind(&data.address)
        .bind(data.latitude)
        .bind(data.longitude)
        .bind(data.status)
        .bind(data.featured)
        .fetch_one(&self.pool)
        .await?;

        Ok(property)
    }

    async fn update_property(
        &self,
        property_id: Uuid,
        data: &SavePropertyDto,
    ) -> Result<Property, sqlx::Error> {
        let property = sqlx::query_as::<_, Property>(
            r#"
            UPDATE properties
            SET
                title = $1, description = $2, property_type = $3, price = $4,
                area = $5, location = $6, address = $7, latitude = $8,
                longitude = $9, status = $10, featured = $11, updated_at = NOW()
            WHERE id = $12
            RETURNING
                id, title, description, property_type, price, area, location,
                address, latitude, longitude, status, featured, views, shares,
                created_at, updated_at
            "#,
        )
        .bind(&data.title)
        .bind(&data.description)
        .bind(data.property_type)
        .bind(data.price)
        .bind(data.area)
        .bind(&data.location)
        .bind(&data.address)
        .bind(data.latitude)
        .bind(data.longitude)
        .bind(data.status)
        .bind(data.featured)
        .bind(property_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(property)
    }

    async fn delete_property(&self, property_id: Uuid) -> Result<(), sqlx::Error> {
        // Images, videos, documents, favorites and bookings go with the
        // property via ON DELETE CASCADE.
        sqlx::query("DELETE FROM properties WHERE id = $1")
            .bind(property_id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    async fn get_property_by_id(
        &self,
        property_id: Uuid,
    ) -> Result<Option<Property>, sqlx::Error> {
        let property = sqlx::query_as::<_, Property>(
            r#"
            SELECT
                id, title, description, property_type, price, area, location,
                address, latitude, longitude, status, featured, views, shares,
                created_at, updated_at
            FROM properties
            WHERE id = $1
            "#,
        )
        .bind(property_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(property)
    }

    async fn list_available_properties(
        &self,
        filters: &PropertySearchFilters,
        page: u32,
        limit: usize,
    ) -> Result<Vec<Property>, sqlx::Error> {
        let offset = (page.saturating_sub(1)) * limit as u32;

        let query = format!(
            r#"
            SELECT
                id, title, description, property_type, price, area, location,
                address, latitude, longitude, status, featured, views, shares,
                created_at, updated_at
            FROM properties
            WHERE status = $1
            AND ($2::text IS NULL OR property_type = $2::property_type)
            AND ($3::bigint IS NULL OR price >= $3)
            AND ($4::bigint IS NULL OR price <= $4)
            AND ($5::text IS NULL OR location ILIKE $5)
            ORDER BY {}
            LIMIT $6 OFFSET $7
            "#,
            filters.sort.order_clause()
        );

        let properties = sqlx::query_as::<_, Property>(&query)
            .bind(PropertyStatus::Available)
            .bind(filters.property_type.map(|t| t.to_str().to_string()))
            .bind(filters.min_price)
            .bind(filters.max_price)
            .bind(filters.location.as_ref().map(|l| format!("%{}%", l)))
            .bind(limit as i64)
            .bind(offset as i64)
            .fetch_all(&self.pool)
            .await?;

        Ok(properties)
    }

    async fn featured_properties(&self, limit: usize) -> Result<Vec<Property>, sqlx::Error> {
        let properties = sqlx::query_as::<_, Property>(
            r#"
            SELECT
                id, title, description, property_type, price, area, location,
                address, latitude, longitude, status, featured, views, shares,
                created_at, updated_at
            FROM properties
            WHERE featured = TRUE AND status = $1
            ORDER BY created_at DESC
            LIMIT $2
            "#,
        )
        .bind(PropertyStatus::Available)
        .bind(limit as i64)
        .fetch_all(&self.pool)
        .await?;

        Ok(properties)
    }

    async fn recent_properties(&self, limit: usize) -> Result<Vec<Property>, sqlx::Error> {
        let properties = sqlx::query_as::<_, Property>(
            r#"
            SELECT
                id, title, description, property_type, price, area, location,
                address, latitude, longitude, status, featured, views, shares,
                created_at, updated_at
            FROM properties
            WHERE status = $1
            ORDER BY created_at DESC
            LIMIT $2
            "#,
        )
        .bind(PropertyStatus::Available)
        .bind(limit as i64)
        .fetch_all(&self.pool)
        .await?;

        Ok(properties)
    }

    async fn related_properties(
        &self,
        property_id: Uuid,
        property_type: PropertyType,
        limit: usize,
    ) -> Result<Vec<Property>, sqlx::Error> {
        let properties = sqlx::query_as::<_, Property>(
            r#"
            SELECT
                id, title, description, property_type, price, area, location,
                address, latitude, longitude, status, featured, views, shares,
                created_at, updated_at
            FROM properties
            WHERE id != $1 AND property_type = $2 AND status = $3
            LIMIT $4
            "#,
        )
        .bind(property_id)
        .bind(property_type)
        .bind(PropertyStatus::Available)
        .bind(limit as i64)
        .fetch_all(&self.pool)
        .await?;

        Ok(properties)
    }

    async fn list_all_properties(
        &self,
        page: u32,
        limit: usize,
    ) -> Result<Vec<Property>, sqlx::Error> {
        let offset = (page.saturating_sub(1)) * limit as u32;

        let properties = sqlx::query_as::<_, Property>(
            r#"
            SELECT
                id, title, description, property_type, price, area, location,
                address, latitude, longitude, status, featured, views, shares,
                created_at, updated_at
            FROM properties
            ORDER BY created_at DESC
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(limit as i64)
        .bind(offset as i64)
        .fetch_all(&self.pool)
        .await?;

        Ok(properties)
    }

    async fn update_view_count(&self, property_id: Uuid, views: i64) -> Result<(), sqlx::Error> {
        sqlx::query("UPDATE properties SET views = $1 WHERE id = $2")
            .bind(views)
            .bind(property_id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    async fn update_share_count(&self, property_id: Uuid, shares: i64) -> Result<i64, sqlx::Error> {
        let row: (i64,) =
            sqlx::query_as("UPDATE properties SET shares = $1 WHERE id = $2 RETURNING shares")
                .bind(shares)
                .bind(property_id)
                .fetch_one(&self.pool)
                .await?;

        Ok(row.0)
    }

    async fn add_property_image(
        &self,
        property_id: Uuid,
        image_url: &str,
        is_primary: bool,
    ) -> Result<PropertyImage, sqlx::Error> {
        let image = sqlx::query_as::<_, PropertyImage>(
            r#"
            INSERT INTO property_images (property_id, image_url, is_primary)
            VALUES ($1, $2, $3)
            RETURNING id, property_id, image_url, is_primary, created_at
            "#,
        )
        .bind(property_id)
        .bind(image_url)
        .bind(is_primary)
        .fetch_one(&self.pool)
        .await?;

        Ok(image)
    }

    async fn add_property_video(
        &self,
        property_id: Uuid,
        video_url: &str,
        video_type: VideoType,
    ) -> Result<PropertyVideo, sqlx::Error> {
        let video = sqlx::query_as::<_, PropertyVideo>(
            r#"
            INSERT INTO property_videos (property_id, video_url, video_type)
            VALUES ($1, $2, $3)
            RETURNING id, property_id, video_url, video_type, created_at
            "#,
        )
        .bind(property_id)
        .bind(video_url)
        .bind(video_type)
        .fetch_one(&self.pool)
        .await?;

        Ok(video)
    }

    async fn add_property_document(
        &self,
        property_id: Uuid,
        document_name: &str,
        document_url: &str,
        document_type: &str,
        file_size: Option<String>,
    ) -> Result<PropertyDocument, sqlx::Error> {
        let document = sqlx::query_as::<_, PropertyDocument>(
            r#"
            INSERT INTO property_documents
                (property_id, document_name, document_url, document_type, file_size)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING
                id, property_id, document_name, document_url, document_type,
                file_size, created_at
            "#,
        )
        .bind(property_id)
        .bind(document_name)
        .bind(document_url)
        .bind(document_type)
        .bind(file_size)
        .fetch_one(&self.pool)
        .await?;

        Ok(document)
    }

    async fn get_property_images(
        &self,
        property_id: Uuid,
    ) -> Result<Vec<PropertyImage>, sqlx::Error> {
        let images = sqlx::query_as::<_, PropertyImage>(
            r#"
            SELECT id, property_id, image_url, is_primary, created_at
            FROM property_images
            WHERE property_id = $1
            ORDER BY is_primary DESC, created_at ASC
            "#,
        )
        .bind(property_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(images)
    }

    async fn get_property_videos(
        &self,
        property_id: Uuid,
    ) -> Result<Vec<PropertyVideo>, sqlx::Error> {
        let videos = sqlx::query_as::<_, PropertyVideo>(
            r#"
            SELECT id, property_id, video_url, video_type, created_at
            FROM property_videos
            WHERE property_id = $1
            ORDER BY created_at ASC
            "#,
        )
        .bind(property_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(videos)
    }

    async fn get_property_documents(
        &self,
        property_id: Uuid,
    ) -> Result<Vec<PropertyDocument>, sqlx::Error> {
        let documents = sqlx::query_as::<_, PropertyDocument>(
            r#"
            SELECT
                id, property_id, document_name, document_url, document_type,
                file_size, created_at
            FROM property_documents
            WHERE property_id = $1
            ORDER BY created_at ASC
            "#,
        )
        .bind(property_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(documents)
    }

    async fn delete_property_videos(&self, property_id: Uuid) -> Result<(), sqlx::Error> {
        sqlx::query("DELETE FROM property_videos WHERE property_id = $1")
            .bind(property_id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    async fn count_properties(&self) -> Result<i64, sqlx::Error> {
        let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM properties")
            .fetch_one(&self.pool)
            .await?;

        Ok(count.0)
    }

    async fn count_properties_by_status(
        &self,
        status: PropertyStatus,
    ) -> Result<i64, sqlx::Error> {
        let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM properties WHERE status = $1")
            .bind(status)
            .fetch_one(&self.pool)
            .await?;

        Ok(count.0)
    }

    async fn engagement_totals(&self) -> Result<(i64, i64), sqlx::Error> {
        let totals: (i64, i64) = sqlx::query_as(
            "SELECT COALESCE(SUM(views), 0)::bigint, COALESCE(SUM(shares), 0)::bigint FROM properties",
        )
        .fetch_one(&self.pool)
        .await?;

        Ok(totals)
    }

    async fn property_type_distribution(
        &self,
    ) -> Result<Vec<(PropertyType, i64)>, sqlx::Error> {
        let distribution: Vec<(PropertyType, i64)> = sqlx::query_as(
            "SELECT property_type, COUNT(*) FROM properties GROUP BY property_type",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(distribution)
    }

    async fn monthly_property_additions(&self) -> Result<Vec<(String, i64)>, sqlx::Error> {
        let additions: Vec<(String, i64)> = sqlx::query_as(
            r#"
            SELECT to_char(created_at, 'YYYY-MM') AS month, COUNT(*)
            FROM properties
            WHERE created_at >= NOW() - INTERVAL '180 days'
            GROUP BY month
            ORDER BY month
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(additions)
    }

    async fn top_viewed_properties(&self, limit: usize) -> Result<Vec<Property>, sqlx::Error> {
        let properties = sqlx::query_as::<_, Property>(
            r#"
            SELECT
                id, title, description, property_type, price, area, location,
                address, latitude, longitude, status, featured, views, shares,
                created_at, updated_at
            FROM properties
            ORDER BY views DESC
            LIMIT $1
            "#,
        )
        .bind(limit as i64)
        .fetch_all(&self.pool)
        .await?;

        Ok(properties)
    }
}
