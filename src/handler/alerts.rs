use std::sync::Arc;

use axum::{
    extract::Path,
    http::HeaderMap,
    response::IntoResponse,
    routing::{get, post},
    Extension, Json, Router,
};
use uuid::Uuid;
use validator::Validate;

use crate::{
    db::alertdb::AlertExt,
    dtos::{alertdtos::{CreateAlertDto, FilterAlertDto}, userdtos::Response},
    error::HttpError,
    middleware::{client_ip, JWTAuthMiddeware},
    models::activitymodel::Actor,
    AppState,
};

pub fn alert_handler() -> Router {
    Router::new()
        .route("/", get(list_alerts))
        .route("/create", post(create_alert))
        .route("/delete/:alert_id", post(delete_alert))
}

pub async fn list_alerts(
    Extension(app_state): Extension<Arc<AppState>>,
    Extension(user): Extension<JWTAuthMiddeware>,
) -> Result<impl IntoResponse, HttpError> {
    let alerts = app_state
        .db_client
        .get_alerts_by_user(user.user.id)
        .await
        .map_err(|e| HttpError::server_error(e.to_string()))?;

    let alert_data: Vec<FilterAlertDto> = alerts.iter().map(FilterAlertDto::from_alert).collect();

    Ok(Json(serde_json::json!({
        "status": "success",
        "data": {
            "alerts": alert_data,
            "total": alert_data.len()
        }
    })))
}

pub async fn create_alert(
    Extension(app_state): Extension<Arc<AppState>>,
    Extension(user): Extension<JWTAuthMiddeware>,
    headers: HeaderMap,
    Json(body): Json<CreateAlertDto>,
) -> Result<impl IntoResponse, HttpError> {
    body.validate()
        .map_err(|e| HttpError::bad_request(e.to_string()))?;

    let actor = Actor::user(user.user.id).with_ip(client_ip(&headers));

    let alert = app_state
        .alert_service
        .create_alert(&actor, &body)
        .await
        .map_err(HttpError::from)?;

    Ok(Json(serde_json::json!({
        "status": "success",
        "message": "Alert created successfully. You will receive notifications for matching properties.",
        "data": {
            "alert": FilterAlertDto::from_alert(&alert)
        }
    })))
}

pub async fn delete_alert(
    Path(alert_id): Path<Uuid>,
    Extension(app_state): Extension<Arc<AppState>>,
    Extension(user): Extension<JWTAuthMiddeware>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, HttpError> {
    let actor = Actor::user(user.user.id).with_ip(client_ip(&headers));

    app_state
        .alert_service
        .delete_alert(&actor, alert_id)
        .await
        .map_err(HttpError::from)?;

    Ok(Json(Response {
        status: "success",
        message: "Alert deleted successfully".to_string(),
    }))
}
