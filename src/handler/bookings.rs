use std::sync::Arc;

use axum::{
    extract::{Path, Query},
    http::HeaderMap,
    middleware,
    response::IntoResponse,
    routing::{get, post},
    Extension, Json, Router,
};
use uuid::Uuid;
use validator::Validate;

use crate::{
    db::bookingdb::BookingExt,
    dtos::{
        bookingdtos::{BookingListQueryDto, CreateBookingDto, UpdateBookingStatusDto},
        userdtos::Response,
    },
    error::HttpError,
    middleware::{auth, client_ip, role_check, JWTAuthMiddeware},
    models::{activitymodel::Actor, bookingmodel::BookingStatus, usermodel::UserRole},
    AppState,
};

pub fn booking_handler() -> Router {
    let user_routes = Router::new()
        .route("/create/:property_id", post(create_booking))
        .route("/cancel/:booking_id", post(cancel_booking))
        .layer(middleware::from_fn(auth));

    let admin_routes = Router::new()
        .route("/", get(list_bookings))
        .route("/status/:booking_id", post(update_booking_status))
        .route("/delete/:booking_id", post(delete_booking))
        .layer(middleware::from_fn(|state, req, next| {
            role_check(state, req, next, vec![UserRole::Admin])
        }))
        .layer(middleware::from_fn(auth));

    Router::new().merge(user_routes).merge(admin_routes)
}

pub async fn create_booking(
    Path(property_id): Path<Uuid>,
    Extension(app_state): Extension<Arc<AppState>>,
    Extension(user): Extension<JWTAuthMiddeware>,
    headers: HeaderMap,
    Json(body): Json<CreateBookingDto>,
) -> Result<impl IntoResponse, HttpError> {
    body.validate()
        .map_err(|e| HttpError::bad_request(e.to_string()))?;

    let actor = Actor::user(user.user.id).with_ip(client_ip(&headers));

    let booking = app_state
        .booking_service
        .create_booking(&actor, property_id, &body)
        .await
        .map_err(HttpError::from)?;

    Ok(Json(serde_json::json!({
        "status": "success",
        "message": "Site visit booked successfully. We will confirm shortly.",
        "data": {
            "booking": booking
        }
    })))
}

pub async fn cancel_booking(
    Path(booking_id): Path<Uuid>,
    Extension(app_state): Extension<Arc<AppState>>,
    Extension(user): Extension<JWTAuthMiddeware>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, HttpError> {
    let actor = Actor::user(user.user.id).with_ip(client_ip(&headers));

    let booking = app_state
        .booking_service
        .cancel_booking(&actor, booking_id)
        .await
        .map_err(HttpError::from)?;

    Ok(Json(serde_json::json!({
        "status": "success",
        "message": "Booking cancelled successfully",
        "data": {
            "booking": booking
        }
    })))
}

pub async fn list_bookings(
    Query(query): Query<BookingListQueryDto>,
    Extension(app_state): Extension<Arc<AppState>>,
) -> Result<impl IntoResponse, HttpError> {
    let page = query.page.unwrap_or(1) as u32;
    let limit = query.limit.unwrap_or(20);
    let status = query
        .status
        .as_deref()
        .and_then(BookingStatus::from_label);

    let bookings = app_state
        .db_client
        .list_bookings(status, page, limit)
        .await
        .map_err(|e| HttpError::server_error(e.to_string()))?;

    Ok(Json(serde_json::json!({
        "status": "success",
        "data": {
            "bookings": bookings,
            "pagination": {
                "page": page,
                "limit": limit,
                "total": bookings.len()
            }
        }
    })))
}

pub async fn update_booking_status(
    Path(booking_id): Path<Uuid>,
    Extension(app_state): Extension<Arc<AppState>>,
    Extension(user): Extension<JWTAuthMiddeware>,
    headers: HeaderMap,
    Json(body): Json<UpdateBookingStatusDto>,
) -> Result<impl IntoResponse, HttpError> {
    let actor = Actor::admin(user.user.id).with_ip(client_ip(&headers));

    let updated = app_state
        .booking_service
        .set_status(&actor, booking_id, &body.status)
        .await
        .map_err(HttpError::from)?;

    // An unrecognized status label is ignored, not an error
    match updated {
        Some(booking) => Ok(Json(serde_json::json!({
            "status": "success",
            "message": "Booking status updated",
            "data": {
                "booking": booking
            }
        }))),
        None => Ok(Json(serde_json::json!({
            "status": "success",
            "message": "Booking status unchanged"
        }))),
    }
}

pub async fn delete_booking(
    Path(booking_id): Path<Uuid>,
    Extension(app_state): Extension<Arc<AppState>>,
    Extension(user): Extension<JWTAuthMiddeware>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, HttpError> {
    let actor = Actor::admin(user.user.id).with_ip(client_ip(&headers));

    app_state
        .booking_service
        .delete_booking(&actor, booking_id)
        .await
        .map_err(HttpError::from)?;

    Ok(Json(Response {
        status: "success",
        message: "Booking deleted".to_string(),
    }))
}
