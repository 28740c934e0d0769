use std::sync::Arc;

use axum::{response::IntoResponse, routing::get, Extension, Json, Router};

use crate::{
    db::{alertdb::AlertExt, bookingdb::BookingExt, favoritedb::FavoriteExt, propertydb::PropertyExt},
    dtos::{
        alertdtos::FilterAlertDto,
        propertydtos::FilterPropertyDto,
        userdtos::FilterUserDto,
    },
    error::HttpError,
    middleware::JWTAuthMiddeware,
    AppState,
};

pub fn users_handler() -> Router {
    Router::new()
        .route("/me", get(get_me))
        .route("/dashboard", get(dashboard))
}

pub async fn get_me(
    Extension(user): Extension<JWTAuthMiddeware>,
) -> Result<impl IntoResponse, HttpError> {
    Ok(Json(serde_json::json!({
        "status": "success",
        "data": {
            "user": FilterUserDto::filter_user(&user.user)
        }
    })))
}

pub async fn dashboard(
    Extension(app_state): Extension<Arc<AppState>>,
    Extension(user): Extension<JWTAuthMiddeware>,
) -> Result<impl IntoResponse, HttpError> {
    let favorites = app_state
        .db_client
        .get_favorites_by_user(user.user.id)
        .await
        .map_err(|e| HttpError::server_error(e.to_string()))?;

    let mut favorite_properties = Vec::new();
    for favorite in &favorites {
        // A favorite can outlive neither its property nor its user, but a
        // concurrent delete may still race this read
        if let Some(property) = app_state
            .db_client
            .get_property_by_id(favorite.property_id)
            .await
            .map_err(|e| HttpError::server_error(e.to_string()))?
        {
            let images = app_state
                .db_client
                .get_property_images(property.id)
                .await
                .map_err(|e| HttpError::server_error(e.to_string()))?;
            favorite_properties.push(FilterPropertyDto::from_property(&property, images.first()));
        }
    }

    let alerts = app_state
        .db_client
        .get_alerts_by_user(user.user.id)
        .await
        .map_err(|e| HttpError::server_error(e.to_string()))?;
    let alert_data: Vec<FilterAlertDto> = alerts.iter().map(FilterAlertDto::from_alert).collect();

    let bookings = app_state
        .db_client
        .get_bookings_by_user(user.user.id)
        .await
        .map_err(|e| HttpError::server_error(e.to_string()))?;

    Ok(Json(serde_json::json!({
        "status": "success",
        "data": {
            "user": FilterUserDto::filter_user(&user.user),
            "favorites": favorite_properties,
            "alerts": alert_data,
            "bookings": bookings
        }
    })))
}
