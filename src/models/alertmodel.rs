use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::models::propertymodel::{Property, PropertyType};

#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct PropertyAlert {
    pub id: Uuid,
    pub user_id: Uuid,
    pub alert_type: String,
    // All filter fields are optional; an unset filter matches everything
    pub property_type: Option<PropertyType>,
    pub min_price: Option<i64>,
    pub max_price: Option<i64>,
    pub location: Option<String>,
    pub is_active: bool,
    pub created_at: Option<DateTime<Utc>>,
}

impl PropertyAlert {
    /// Whether a property satisfies every filter set on this alert.
    ///
    /// Filters are conjunctive. A filter that is unset (or an empty
    /// location string left behind by the alert form) is skipped, so it
    /// can never exclude a property. Location matching is a
    /// case-insensitive substring test; price bounds are inclusive.
    pub fn matches(&self, property: &Property) -> bool {
        if let Some(wanted) = self.property_type {
            if wanted != property.property_type {
                return false;
            }
        }
        if let Some(min_price) = self.min_price {
            if property.price < min_price {
                return false;
            }
        }
        if let Some(max_price) = self.max_price {
            if property.price > max_price {
                return false;
            }
        }
        if let Some(location) = self.location.as_deref().filter(|l| !l.is_empty()) {
            if !property
                .location
                .to_lowercase()
                .contains(&location.to_lowercase())
            {
                return false;
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::propertymodel::PropertyStatus;

    fn property(property_type: PropertyType, price: i64, location: &str) -> Property {
        Property {
            id: Uuid::new_v4(),
            title: "Test plot".to_string(),
            description: "A plot used by the matching tests".to_string(),
            property_type,
            price,
            area: 4000.0,
            location: location.to_string(),
            address: "Test address".to_string(),
            latitude: None,
            longitude: None,
            status: PropertyStatus::Available,
            featured: false,
            views: 0,
            shares: 0,
            created_at: None,
            updated_at: None,
        }
    }

    fn alert() -> PropertyAlert {
        PropertyAlert {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            alert_type: "new_property".to_string(),
            property_type: None,
            min_price: None,
            max_price: None,
            location: None,
            is_active: true,
            created_at: None,
        }
    }

    #[test]
    fn unset_filters_match_everything() {
        let a = alert();
        assert!(a.matches(&property(PropertyType::IndustrialPlot, 1, "Anywhere")));
    }

    #[test]
    fn conjunctive_filters() {
        let mut a = alert();
        a.min_price = Some(5_000_000);
        a.location = Some("Mumbai".to_string());

        assert!(a.matches(&property(PropertyType::CommercialPlot, 25_000_000, "Mumbai")));
        assert!(!a.matches(&property(PropertyType::CommercialPlot, 25_000_000, "Pune")));
        assert!(!a.matches(&property(PropertyType::CommercialPlot, 4_999_999, "Mumbai")));
    }

    #[test]
    fn property_type_is_exact() {
        let mut a = alert();
        a.property_type = Some(PropertyType::ResidentialPlot);

        assert!(a.matches(&property(PropertyType::ResidentialPlot, 100, "Thane")));
        assert!(!a.matches(&property(PropertyType::CommercialPlot, 100, "Thane")));
    }

    #[test]
    fn price_bounds_are_inclusive() {
        let mut a = alert();
        a.min_price = Some(1_000);
        a.max_price = Some(2_000);

        assert!(a.matches(&property(PropertyType::ResidentialPlot, 1_000, "x")));
        assert!(a.matches(&property(PropertyType::ResidentialPlot, 2_000, "x")));
        assert!(!a.matches(&property(PropertyType::ResidentialPlot, 999, "x")));
        assert!(!a.matches(&property(PropertyType::ResidentialPlot, 2_001, "x")));
    }

    #[test]
    fn location_match_is_case_insensitive_substring() {
        let mut a = alert();
        a.property_type = Some(PropertyType::ResidentialPlot);
        a.max_price = Some(20_000_000);
        a.location = Some("mumbai".to_string());

        assert!(a.matches(&property(PropertyType::ResidentialPlot, 18_000_000, "Mumbai")));
        assert!(a.matches(&property(PropertyType::ResidentialPlot, 18_000_000, "Navi Mumbai West")));
    }

    #[test]
    fn empty_location_filter_is_ignored() {
        let mut a = alert();
        a.location = Some(String::new());
        assert!(a.matches(&property(PropertyType::ResidentialPlot, 1, "Nashik")));
    }
}
