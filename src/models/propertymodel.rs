use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize, Clone, Copy, sqlx::Type, PartialEq)]
#[sqlx(type_name = "property_type", rename_all = "snake_case")]
pub enum PropertyType {
    #[serde(rename = "Residential Plot")]
    ResidentialPlot,
    #[serde(rename = "Commercial Plot")]
    CommercialPlot,
    #[serde(rename = "Agricultural Land")]
    AgriculturalLand,
    #[serde(rename = "Industrial Plot")]
    IndustrialPlot,
}

impl PropertyType {
    pub fn to_str(&self) -> &str {
        match self {
            PropertyType::ResidentialPlot => "residential_plot",
            PropertyType::CommercialPlot => "commercial_plot",
            PropertyType::AgriculturalLand => "agricultural_land",
            PropertyType::IndustrialPlot => "industrial_plot",
        }
    }

    /// Human-readable label used in emails and listings.
    pub fn label(&self) -> &str {
        match self {
            PropertyType::ResidentialPlot => "Residential Plot",
            PropertyType::CommercialPlot => "Commercial Plot",
            PropertyType::AgriculturalLand => "Agricultural Land",
            PropertyType::IndustrialPlot => "Industrial Plot",
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, sqlx::Type, PartialEq)]
#[sqlx(type_name = "property_status", rename_all = "lowercase")]
pub enum PropertyStatus {
    Available,
    Reserved,
    Sold,
}

impl PropertyStatus {
    pub fn label(&self) -> &str {
        match self {
            PropertyStatus::Available => "Available",
            PropertyStatus::Reserved => "Reserved",
            PropertyStatus::Sold => "Sold",
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, sqlx::Type, PartialEq)]
#[sqlx(type_name = "video_type", rename_all = "lowercase")]
pub enum VideoType {
    Youtube,
    Vimeo,
}

impl VideoType {
    /// Listings carry YouTube and Vimeo links only; anything that is not
    /// recognizably YouTube is stored as Vimeo.
    pub fn classify(url: &str) -> VideoType {
        if url.contains("youtube.com") || url.contains("youtu.be") {
            VideoType::Youtube
        } else {
            VideoType::Vimeo
        }
    }
}

#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct Property {
    pub id: Uuid,

    // Basic property info
    pub title: String,
    pub description: String,
    pub property_type: PropertyType,

    // Pricing and size
    pub price: i64,
    pub area: f64,

    // Location details
    pub location: String,
    pub address: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,

    pub status: PropertyStatus,
    pub featured: bool,

    // Approximate engagement counters
    pub views: i64,
    pub shares: i64,

    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct PropertyImage {
    pub id: Uuid,
    pub property_id: Uuid,
    pub image_url: String,
    pub is_primary: bool,
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct PropertyVideo {
    pub id: Uuid,
    pub property_id: Uuid,
    pub video_url: String,
    pub video_type: VideoType,
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct PropertyDocument {
    pub id: Uuid,
    pub property_id: Uuid,
    pub document_name: String,
    pub document_url: String,
    pub document_type: String,
    pub file_size: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_video_classification() {
        assert_eq!(
            VideoType::classify("https://www.youtube.com/watch?v=abc"),
            VideoType::Youtube
        );
        assert_eq!(VideoType::classify("https://youtu.be/abc"), VideoType::Youtube);
        assert_eq!(VideoType::classify("https://vimeo.com/12345"), VideoType::Vimeo);
    }

    #[test]
    fn test_property_type_labels() {
        assert_eq!(PropertyType::ResidentialPlot.label(), "Residential Plot");
        assert_eq!(PropertyType::AgriculturalLand.to_str(), "agricultural_land");
    }
}
