use std::sync::Arc;

use axum::{middleware, routing::get, Extension, Json, Router};
use serde_json::json;
use tower_http::trace::TraceLayer;

use crate::{
    handler::{
        admin::admin_handler, alerts::alert_handler, auth::auth_handler,
        bookings::booking_handler, enquiries::enquiry_handler, favorites::favorite_handler,
        properties::property_handler, users::users_handler,
    },
    middleware::auth,
    AppState,
};

// Health check handler
async fn health_check() -> Json<serde_json::Value> {
    Json(json!({
        "status": "ok",
        "message": "Server is running"
    }))
}

pub fn create_router(app_state: Arc<AppState>) -> Router {
    let api_route = Router::new()
        .nest("/auth", auth_handler())
        .nest("/properties", property_handler())
        .nest(
            "/favorites",
            favorite_handler().layer(middleware::from_fn(auth)),
        )
        .nest("/alerts", alert_handler().layer(middleware::from_fn(auth)))
        .nest("/bookings", booking_handler())
        .nest("/enquiries", enquiry_handler())
        .nest("/users", users_handler().layer(middleware::from_fn(auth)))
        .nest("/admin", admin_handler())
        .layer(TraceLayer::new_for_http())
        .layer(Extension(app_state));

    Router::new()
        .route("/health", get(health_check))
        .nest("/api", api_route)
}
