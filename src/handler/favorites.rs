use std::sync::Arc;

use axum::{
    extract::Path, http::HeaderMap, response::IntoResponse, routing::post, Extension, Json, Router,
};
use uuid::Uuid;

use crate::{
    error::HttpError,
    middleware::{client_ip, JWTAuthMiddeware},
    models::activitymodel::Actor,
    service::favorite_service::FavoriteOutcome,
    AppState,
};

pub fn favorite_handler() -> Router {
    Router::new().route("/toggle/:property_id", post(toggle_favorite))
}

pub async fn toggle_favorite(
    Path(property_id): Path<Uuid>,
    Extension(app_state): Extension<Arc<AppState>>,
    Extension(user): Extension<JWTAuthMiddeware>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, HttpError> {
    let actor = Actor::user(user.user.id).with_ip(client_ip(&headers));

    let outcome = app_state
        .favorite_service
        .toggle_favorite(&actor, property_id)
        .await
        .map_err(HttpError::from)?;

    let message = match outcome {
        FavoriteOutcome::Added => "Added to favorites",
        FavoriteOutcome::Removed => "Removed from favorites",
    };

    Ok(Json(serde_json::json!({
        "status": outcome.to_str(),
        "message": message
    })))
}
