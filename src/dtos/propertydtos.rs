use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::propertymodel::{Property, PropertyImage, PropertyStatus, PropertyType};

#[derive(Validate, Debug, Clone, Serialize, Deserialize)]
pub struct DocumentDto {
    #[validate(length(min = 1, max = 200, message = "Document name is required"))]
    pub document_name: String,

    #[validate(length(min = 1, message = "Document URL is required"))]
    pub document_url: String,

    #[validate(length(min = 1, max = 50, message = "Document type is required"))]
    pub document_type: String,

    pub file_size: Option<String>,
}

/// Payload for both property creation and editing; attachments are passed
/// as URLs previously returned by the upload endpoint.
#[derive(Validate, Debug, Clone, Serialize, Deserialize)]
pub struct SavePropertyDto {
    #[validate(length(min = 5, max = 200, message = "Title must be between 5 and 200 characters"))]
    pub title: String,

    #[validate(length(min = 20, message = "Description must be at least 20 characters"))]
    pub description: String,

    pub property_type: PropertyType,

    #[validate(range(min = 0, message = "Price cannot be negative"))]
    pub price: i64,

    #[validate(range(min = 0.0, message = "Area cannot be negative"))]
    pub area: f64,

    #[validate(length(min = 1, max = 200, message = "Location is required"))]
    pub location: String,

    #[validate(length(min = 1, message = "Address is required"))]
    pub address: String,

    pub latitude: Option<f64>,
    pub longitude: Option<f64>,

    pub status: PropertyStatus,

    #[serde(default)]
    pub featured: bool,

    // First image is treated as the primary one
    #[serde(default)]
    pub image_urls: Vec<String>,

    #[serde(default)]
    pub video_urls: Vec<String>,

    #[serde(default)]
    #[validate]
    pub documents: Vec<DocumentDto>,
}

#[derive(Debug, Deserialize)]
pub struct PropertyListQueryDto {
    pub page: Option<usize>,
    pub limit: Option<usize>,
    #[serde(rename = "type")]
    pub property_type: Option<String>,
    pub min_price: Option<i64>,
    pub max_price: Option<i64>,
    pub location: Option<String>,
    pub sort: Option<String>,
}

impl PropertyListQueryDto {
    pub fn parsed_property_type(&self) -> Option<PropertyType> {
        self.property_type
            .as_deref()
            .filter(|t| !t.is_empty())
            .and_then(|t| serde_json::from_str(&format!("\"{}\"", t)).ok())
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct FilterPropertyDto {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub property_type: String,
    pub price: i64,
    pub area: f64,
    pub location: String,
    pub address: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub status: String,
    pub featured: bool,
    pub views: i64,
    pub shares: i64,
    pub image_url: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
}

impl FilterPropertyDto {
    pub fn from_property(property: &Property, primary_image: Option<&PropertyImage>) -> Self {
        FilterPropertyDto {
            id: property.id,
            title: property.title.clone(),
            description: property.description.clone(),
            property_type: property.property_type.label().to_string(),
            price: property.price,
            area: property.area,
            location: property.location.clone(),
            address: property.address.clone(),
            latitude: property.latitude,
            longitude: property.longitude,
            status: property.status.label().to_string(),
            featured: property.featured,
            views: property.views,
            shares: property.shares,
            image_url: primary_image.map(|i| i.image_url.clone()),
            created_at: property.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parsed_property_type_accepts_labels() {
        let query = PropertyListQueryDto {
            page: None,
            limit: None,
            property_type: Some("Residential Plot".to_string()),
            min_price: None,
            max_price: None,
            location: None,
            sort: None,
        };
        assert_eq!(query.parsed_property_type(), Some(PropertyType::ResidentialPlot));
    }

    #[test]
    fn test_parsed_property_type_rejects_unknown() {
        let query = PropertyListQueryDto {
            page: None,
            limit: None,
            property_type: Some("Castle".to_string()),
            min_price: None,
            max_price: None,
            location: None,
            sort: None,
        };
        assert_eq!(query.parsed_property_type(), None);
    }

}
