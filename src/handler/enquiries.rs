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
    db::enquirydb::EnquiryExt,
    dtos::{
        enquirydtos::{CreateEnquiryDto, EnquiryListQueryDto, UpdateEnquiryStatusDto},
        userdtos::Response,
    },
    error::HttpError,
    middleware::{auth, client_ip, role_check, JWTAuthMiddeware},
    models::{
        activitymodel::{Actor, ActorType},
        enquirymodel::EnquiryStatus,
        usermodel::UserRole,
    },
    AppState,
};

pub fn enquiry_handler() -> Router {
    let admin_routes = Router::new()
        .route("/", get(list_enquiries))
        .route("/status/:enquiry_id", post(update_enquiry_status))
        .route("/delete/:enquiry_id", post(delete_enquiry))
        .layer(middleware::from_fn(|state, req, next| {
            role_check(state, req, next, vec![UserRole::Admin])
        }))
        .layer(middleware::from_fn(auth));

    Router::new()
        .route("/submit", post(submit_enquiry))
        .merge(admin_routes)
}

pub async fn submit_enquiry(
    Extension(app_state): Extension<Arc<AppState>>,
    headers: HeaderMap,
    Json(body): Json<CreateEnquiryDto>,
) -> Result<impl IntoResponse, HttpError> {
    body.validate()
        .map_err(|e| HttpError::bad_request(e.to_string()))?;

    // Enquiries come from the public contact form; the submitter is not
    // necessarily a registered user.
    let actor = Actor {
        kind: ActorType::User,
        id: None,
        ip: client_ip(&headers),
    };

    let enquiry = app_state
        .enquiry_service
        .create_enquiry(&actor, &body)
        .await
        .map_err(HttpError::from)?;

    Ok(Json(serde_json::json!({
        "status": "success",
        "message": "Thank you for your enquiry. We will contact you soon.",
        "data": {
            "enquiry": enquiry
        }
    })))
}

pub async fn list_enquiries(
    Query(query): Query<EnquiryListQueryDto>,
    Extension(app_state): Extension<Arc<AppState>>,
) -> Result<impl IntoResponse, HttpError> {
    let page = query.page.unwrap_or(1) as u32;
    let limit = query.limit.unwrap_or(20);
    let status = query
        .status
        .as_deref()
        .and_then(EnquiryStatus::from_label);

    let enquiries = app_state
        .db_client
        .list_enquiries(status, page, limit)
        .await
        .map_err(|e| HttpError::server_error(e.to_string()))?;

    Ok(Json(serde_json::json!({
        "status": "success",
        "data": {
            "enquiries": enquiries,
            "pagination": {
                "page": page,
                "limit": limit,
                "total": enquiries.len()
            }
        }
    })))
}

pub async fn update_enquiry_status(
    Path(enquiry_id): Path<Uuid>,
    Extension(app_state): Extension<Arc<AppState>>,
    Extension(user): Extension<JWTAuthMiddeware>,
    headers: HeaderMap,
    Json(body): Json<UpdateEnquiryStatusDto>,
) -> Result<impl IntoResponse, HttpError> {
    let actor = Actor::admin(user.user.id).with_ip(client_ip(&headers));

    let updated = app_state
        .enquiry_service
        .set_status(&actor, enquiry_id, &body.status)
        .await
        .map_err(HttpError::from)?;

    // An unrecognized status label is ignored, not an error
    match updated {
        Some(enquiry) => Ok(Json(serde_json::json!({
            "status": "success",
            "message": "Enquiry status updated",
            "data": {
                "enquiry": enquiry
            }
        }))),
        None => Ok(Json(serde_json::json!({
            "status": "success",
            "message": "Enquiry status unchanged"
        }))),
    }
}

pub async fn delete_enquiry(
    Path(enquiry_id): Path<Uuid>,
    Extension(app_state): Extension<Arc<AppState>>,
    Extension(user): Extension<JWTAuthMiddeware>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, HttpError> {
    let actor = Actor::admin(user.user.id).with_ip(client_ip(&headers));

    app_state
        .enquiry_service
        .delete_enquiry(&actor, enquiry_id)
        .await
        .map_err(HttpError::from)?;

    Ok(Json(Response {
        status: "success",
        message: "Enquiry deleted".to_string(),
    }))
}
