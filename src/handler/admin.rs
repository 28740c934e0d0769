use std::sync::Arc;

use axum::{
    extract::Query, middleware, response::IntoResponse, routing::get, Extension, Json, Router,
};
use validator::Validate;

use crate::{
    db::{
        activitydb::ActivityExt, bookingdb::BookingExt, enquirydb::EnquiryExt,
        propertydb::PropertyExt, userdb::UserExt,
    },
    dtos::{propertydtos::FilterPropertyDto, userdtos::{FilterUserDto, RequestQueryDto}},
    error::HttpError,
    middleware::{auth, role_check},
    models::{
        bookingmodel::BookingStatus, enquirymodel::EnquiryStatus,
        propertymodel::PropertyStatus, usermodel::UserRole,
    },
    AppState,
};

pub fn admin_handler() -> Router {
    Router::new()
        .route("/dashboard", get(dashboard))
        .route("/analytics", get(analytics))
        .route("/activity", get(recent_activity))
        .route("/users", get(list_users))
        .route("/properties", get(list_all_properties))
        .layer(middleware::from_fn(|state, req, next| {
            role_check(state, req, next, vec![UserRole::Admin])
        }))
        .layer(middleware::from_fn(auth))
}

pub async fn dashboard(
    Extension(app_state): Extension<Arc<AppState>>,
) -> Result<impl IntoResponse, HttpError> {
    let db = &app_state.db_client;

    let total_properties = db
        .count_properties()
        .await
        .map_err(|e| HttpError::server_error(e.to_string()))?;
    let available_properties = db
        .count_properties_by_status(PropertyStatus::Available)
        .await
        .map_err(|e| HttpError::server_error(e.to_string()))?;
    let sold_properties = db
        .count_properties_by_status(PropertyStatus::Sold)
        .await
        .map_err(|e| HttpError::server_error(e.to_string()))?;
    let new_enquiries = db
        .count_enquiries_by_status(EnquiryStatus::New)
        .await
        .map_err(|e| HttpError::server_error(e.to_string()))?;
    let total_users = db
        .count_users()
        .await
        .map_err(|e| HttpError::server_error(e.to_string()))?;
    let pending_bookings = db
        .count_bookings_by_status(BookingStatus::Pending)
        .await
        .map_err(|e| HttpError::server_error(e.to_string()))?;
    let (total_views, total_shares) = db
        .engagement_totals()
        .await
        .map_err(|e| HttpError::server_error(e.to_string()))?;

    let recent_properties = db
        .list_all_properties(1, 5)
        .await
        .map_err(|e| HttpError::server_error(e.to_string()))?;
    let recent_enquiries = db
        .list_enquiries(None, 1, 5)
        .await
        .map_err(|e| HttpError::server_error(e.to_string()))?;
    let recent_bookings = db
        .list_bookings(None, 1, 5)
        .await
        .map_err(|e| HttpError::server_error(e.to_string()))?;
    let recent_activities = app_state
        .activity_service
        .recent(10)
        .await
        .map_err(HttpError::from)?;

    Ok(Json(serde_json::json!({
        "status": "success",
        "data": {
            "stats": {
                "total": total_properties,
                "available": available_properties,
                "sold": sold_properties,
                "enquiries": new_enquiries,
                "users": total_users,
                "bookings": pending_bookings,
                "views": total_views,
                "shares": total_shares
            },
            "properties": recent_properties,
            "enquiries": recent_enquiries,
            "bookings": recent_bookings,
            "activities": recent_activities
        }
    })))
}

pub async fn analytics(
    Extension(app_state): Extension<Arc<AppState>>,
) -> Result<impl IntoResponse, HttpError> {
    let db = &app_state.db_client;

    let total_properties = db
        .count_properties()
        .await
        .map_err(|e| HttpError::server_error(e.to_string()))?;
    let total_users = db
        .count_users()
        .await
        .map_err(|e| HttpError::server_error(e.to_string()))?;
    let total_bookings = db
        .count_bookings()
        .await
        .map_err(|e| HttpError::server_error(e.to_string()))?;
    let total_enquiries = db
        .count_enquiries()
        .await
        .map_err(|e| HttpError::server_error(e.to_string()))?;

    let property_types: Vec<serde_json::Value> = db
        .property_type_distribution()
        .await
        .map_err(|e| HttpError::server_error(e.to_string()))?
        .into_iter()
        .map(|(property_type, count)| {
            serde_json::json!({
                "property_type": property_type.label(),
                "count": count
            })
        })
        .collect();

    let monthly_properties: Vec<serde_json::Value> = db
        .monthly_property_additions()
        .await
        .map_err(|e| HttpError::server_error(e.to_string()))?
        .into_iter()
        .map(|(month, count)| serde_json::json!({ "month": month, "count": count }))
        .collect();

    let top_properties = db
        .top_viewed_properties(5)
        .await
        .map_err(|e| HttpError::server_error(e.to_string()))?;
    let top_data: Vec<FilterPropertyDto> = top_properties
        .iter()
        .map(|p| FilterPropertyDto::from_property(p, None))
        .collect();

    Ok(Json(serde_json::json!({
        "status": "success",
        "data": {
            "totals": {
                "properties": total_properties,
                "users": total_users,
                "bookings": total_bookings,
                "enquiries": total_enquiries
            },
            "property_types": property_types,
            "monthly_properties": monthly_properties,
            "top_properties": top_data
        }
    })))
}

pub async fn recent_activity(
    Extension(app_state): Extension<Arc<AppState>>,
) -> Result<impl IntoResponse, HttpError> {
    let activities = app_state
        .activity_service
        .recent(50)
        .await
        .map_err(HttpError::from)?;

    Ok(Json(serde_json::json!({
        "status": "success",
        "data": {
            "activities": activities,
            "total": activities.len()
        }
    })))
}

pub async fn list_users(
    Query(query_params): Query<RequestQueryDto>,
    Extension(app_state): Extension<Arc<AppState>>,
) -> Result<impl IntoResponse, HttpError> {
    query_params
        .validate()
        .map_err(|e| HttpError::bad_request(e.to_string()))?;

    let page = query_params.page.unwrap_or(1) as u32;
    let limit = query_params.limit.unwrap_or(20);

    let users = app_state
        .db_client
        .list_users(page, limit)
        .await
        .map_err(|e| HttpError::server_error(e.to_string()))?;

    let user_data: Vec<FilterUserDto> = users.iter().map(FilterUserDto::filter_user).collect();

    Ok(Json(serde_json::json!({
        "status": "success",
        "data": {
            "users": user_data,
            "pagination": {
                "page": page,
                "limit": limit,
                "total": user_data.len()
            }
        }
    })))
}

pub async fn list_all_properties(
    Query(query_params): Query<RequestQueryDto>,
    Extension(app_state): Extension<Arc<AppState>>,
) -> Result<impl IntoResponse, HttpError> {
    query_params
        .validate()
        .map_err(|e| HttpError::bad_request(e.to_string()))?;

    let page = query_params.page.unwrap_or(1) as u32;
    let limit = query_params.limit.unwrap_or(10);

    let properties = app_state
        .db_client
        .list_all_properties(page, limit)
        .await
        .map_err(|e| HttpError::server_error(e.to_string()))?;

    Ok(Json(serde_json::json!({
        "status": "success",
        "data": {
            "properties": properties,
            "pagination": {
                "page": page,
                "limit": limit,
                "total": properties.len()
            }
        }
    })))
}
