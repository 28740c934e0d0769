use std::sync::Arc;

use uuid::Uuid;

use crate::{
    db::{db::DBClient, propertydb::PropertyExt},
    dtos::propertydtos::SavePropertyDto,
    models::{
        activitymodel::Actor,
        propertymodel::{Property, VideoType},
    },
    service::{activity_service::ActivityService, alert_service::AlertService, error::ServiceError},
    storage::FileStorage,
};

#[derive(Clone)]
pub struct PropertyService {
    db_client: Arc<DBClient>,
    storage: Arc<dyn FileStorage>,
    activity_service: Arc<ActivityService>,
    alert_service: Arc<AlertService>,
}

impl PropertyService {
    pub fn new(
        db_client: Arc<DBClient>,
        storage: Arc<dyn FileStorage>,
        activity_service: Arc<ActivityService>,
        alert_service: Arc<AlertService>,
    ) -> Self {
        Self {
            db_client,
            storage,
            activity_service,
            alert_service,
        }
    }

    /// Create a listing with its attachments, then run alert matching.
    /// Matching runs only after the property row and its dependents are
    /// committed, and can never fail the request.
    pub async fn create_property(
        &self,
        actor: &Actor,
        data: &SavePropertyDto,
    ) -> Result<Property, ServiceError> {
        let property = self.db_client.create_property(data).await?;

        self.save_attachments(property.id, data, true).await?;

        self.activity_service
            .record(
                "add_property",
                format!("Added property: {}", property.title),
                actor,
            )
            .await;

        self.alert_service.notify_matching_alerts(&property).await;

        Ok(property)
    }

    /// Edit a listing. New images and documents are appended; the video
    /// list is replaced wholesale. Alerts fire on creation only.
    pub async fn update_property(
        &self,
        actor: &Actor,
        property_id: Uuid,
        data: &SavePropertyDto,
    ) -> Result<Property, ServiceError> {
        self.db_client
            .get_property_by_id(property_id)
            .await?
            .ok_or(ServiceError::NotFound("Property"))?;

        let property = self.db_client.update_property(property_id, data).await?;

        self.db_client.delete_property_videos(property_id).await?;
        self.save_attachments(property.id, data, false).await?;

        self.activity_service
            .record(
                "edit_property",
                format!("Edited property: {}", property.title),
                actor,
            )
            .await;

        Ok(property)
    }

    async fn save_attachments(
        &self,
        property_id: Uuid,
        data: &SavePropertyDto,
        mark_primary: bool,
    ) -> Result<(), ServiceError> {
        for (i, image_url) in data.image_urls.iter().filter(|u| !u.is_empty()).enumerate() {
            self.db_client
                .add_property_image(property_id, image_url, mark_primary && i == 0)
                .await?;
        }

        for video_url in data.video_urls.iter().map(|u| u.trim()).filter(|u| !u.is_empty()) {
            self.db_client
                .add_property_video(property_id, video_url, VideoType::classify(video_url))
                .await?;
        }

        for document in &data.documents {
            self.db_client
                .add_property_document(
                    property_id,
                    &document.document_name,
                    &document.document_url,
                    &document.document_type,
                    document.file_size.clone(),
                )
                .await?;
        }

        Ok(())
    }

    /// Delete a listing. Backing files are removed best-effort before the
    /// row goes away; a file that is already missing or a storage hiccup
    /// never blocks the delete. Favorites, bookings and attachments are
    /// removed by the cascade.
    pub async fn delete_property(
        &self,
        actor: &Actor,
        property_id: Uuid,
    ) -> Result<(), ServiceError> {
        let property = self
            .db_client
            .get_property_by_id(property_id)
            .await?
            .ok_or(ServiceError::NotFound("Property"))?;

        let images = self.db_client.get_property_images(property_id).await?;
        let documents = self.db_client.get_property_documents(property_id).await?;

        for image in &images {
            if let Err(err) = self.storage.delete(&image.image_url).await {
                tracing::debug!("could not remove image file {}: {}", image.image_url, err);
            }
        }
        for document in &documents {
            if let Err(err) = self.storage.delete(&document.document_url).await {
                tracing::debug!(
                    "could not remove document file {}: {}",
                    document.document_url,
                    err
                );
            }
        }

        self.db_client.delete_property(property_id).await?;

        self.activity_service
            .record(
                "delete_property",
                format!("Deleted property: {}", property.title),
                actor,
            )
            .await;

        Ok(())
    }

    /// Persist an uploaded file through the configured storage backend.
    /// When storage is down the upload fails with `StorageUnavailable`;
    /// the listing itself can still be saved without the attachment.
    pub async fn store_upload(
        &self,
        bytes: &[u8],
        subfolder: &str,
        filename: &str,
    ) -> Result<String, ServiceError> {
        let url = self.storage.store(bytes, subfolder, filename).await?;
        Ok(url)
    }

    /// Detail-page view counter. Read-modify-write on purpose: these are
    /// approximate counters and concurrent views may drop an increment.
    pub async fn record_view(&self, actor: &Actor, property: &Property) -> Result<(), ServiceError> {
        self.db_client
            .update_view_count(property.id, property.views + 1)
            .await?;

        self.activity_service
            .record(
                "view_property",
                format!("Viewed property: {}", property.title),
                actor,
            )
            .await;

        Ok(())
    }

    /// Share counter, same approximate semantics as views. Returns the new
    /// share count for the response payload.
    pub async fn record_share(
        &self,
        actor: &Actor,
        property: &Property,
    ) -> Result<i64, ServiceError> {
        let shares = self
            .db_client
            .update_share_count(property.id, property.shares + 1)
            .await?;

        self.activity_service
            .record(
                "share_property",
                format!("Shared property: {}", property.title),
                actor,
            )
            .await;

        Ok(shares)
    }
}
