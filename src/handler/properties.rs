use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{Path, Query},
    http::HeaderMap,
    middleware,
    response::IntoResponse,
    routing::{get, post, put},
    Extension, Json, Router,
};
use axum_extra::extract::cookie::CookieJar;
use chrono::Utc;
use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

use crate::{
    db::{favoritedb::FavoriteExt, propertydb::{PropertyExt, PropertySearchFilters, PropertySort}},
    dtos::{
        propertydtos::{FilterPropertyDto, PropertyListQueryDto, SavePropertyDto},
        userdtos::Response,
    },
    error::HttpError,
    middleware::{auth, client_ip, resolve_optional_user, role_check, JWTAuthMiddeware},
    models::{
        activitymodel::Actor,
        propertymodel::Property,
        usermodel::UserRole,
    },
    utils::files::{allowed_file, file_extension, format_file_size, timestamped_filename},
    AppState,
};

pub fn property_handler() -> Router {
    let admin_routes = Router::new()
        .route("/create", post(create_property))
        .route("/edit/:property_id", put(update_property))
        .route("/delete/:property_id", post(delete_property))
        .route("/upload", post(upload_file))
        .layer(middleware::from_fn(|state, req, next| {
            role_check(state, req, next, vec![UserRole::Admin])
        }))
        .layer(middleware::from_fn(auth));

    Router::new()
        .route("/", get(list_properties))
        .route("/home", get(home_properties))
        .route("/:property_id", get(get_property_by_id))
        .route("/:property_id/share", post(share_property))
        .merge(admin_routes)
}

async fn to_filtered(
    app_state: &AppState,
    property: &Property,
) -> Result<FilterPropertyDto, HttpError> {
    let images = app_state
        .db_client
        .get_property_images(property.id)
        .await
        .map_err(|e| HttpError::server_error(e.to_string()))?;

    Ok(FilterPropertyDto::from_property(property, images.first()))
}

pub async fn list_properties(
    Query(query): Query<PropertyListQueryDto>,
    Extension(app_state): Extension<Arc<AppState>>,
) -> Result<impl IntoResponse, HttpError> {
    let page = query.page.unwrap_or(1) as u32;
    let limit = query.limit.unwrap_or(9);

    let filters = PropertySearchFilters {
        property_type: query.parsed_property_type(),
        min_price: query.min_price,
        max_price: query.max_price,
        location: query.location.clone().filter(|l| !l.is_empty()),
        sort: PropertySort::from_query(query.sort.as_deref().unwrap_or("recent")),
    };

    let properties = app_state
        .db_client
        .list_available_properties(&filters, page, limit)
        .await
        .map_err(|e| HttpError::server_error(e.to_string()))?;

    let mut property_data = Vec::new();
    for property in &properties {
        property_data.push(to_filtered(&app_state, property).await?);
    }

    Ok(Json(serde_json::json!({
        "status": "success",
        "data": {
            "properties": property_data,
            "pagination": {
                "page": page,
                "limit": limit,
                "total": property_data.len()
            }
        }
    })))
}

pub async fn home_properties(
    Extension(app_state): Extension<Arc<AppState>>,
) -> Result<impl IntoResponse, HttpError> {
    let featured = app_state
        .db_client
        .featured_properties(9)
        .await
        .map_err(|e| HttpError::server_error(e.to_string()))?;

    let recent = app_state
        .db_client
        .recent_properties(9)
        .await
        .map_err(|e| HttpError::server_error(e.to_string()))?;

    let mut featured_data = Vec::new();
    for property in &featured {
        featured_data.push(to_filtered(&app_state, property).await?);
    }
    let mut recent_data = Vec::new();
    for property in &recent {
        recent_data.push(to_filtered(&app_state, property).await?);
    }

    Ok(Json(serde_json::json!({
        "status": "success",
        "data": {
            "featured": featured_data,
            "recent": recent_data
        }
    })))
}

pub async fn get_property_by_id(
    Path(property_id): Path<Uuid>,
    cookie_jar: CookieJar,
    Extension(app_state): Extension<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, HttpError> {
    let mut property = app_state
        .db_client
        .get_property_by_id(property_id)
        .await
        .map_err(|e| HttpError::server_error(e.to_string()))?
        .ok_or_else(|| HttpError::not_found("Property not found"))?;

    let viewer = resolve_optional_user(&app_state, &cookie_jar, &headers).await;
    let actor = match &viewer {
        Some(user) => Actor::user(user.id),
        None => Actor::guest(),
    }
    .with_ip(client_ip(&headers));

    app_state
        .property_service
        .record_view(&actor, &property)
        .await
        .map_err(HttpError::from)?;
    property.views += 1;

    let is_favorited = match &viewer {
        Some(user) => app_state
            .db_client
            .get_favorite(user.id, property_id)
            .await
            .map_err(|e| HttpError::server_error(e.to_string()))?
            .is_some(),
        None => false,
    };

    let images = app_state
        .db_client
        .get_property_images(property_id)
        .await
        .map_err(|e| HttpError::server_error(e.to_string()))?;
    let videos = app_state
        .db_client
        .get_property_videos(property_id)
        .await
        .map_err(|e| HttpError::server_error(e.to_string()))?;
    let documents = app_state
        .db_client
        .get_property_documents(property_id)
        .await
        .map_err(|e| HttpError::server_error(e.to_string()))?;

    let related = app_state
        .db_client
        .related_properties(property_id, property.property_type, 3)
        .await
        .map_err(|e| HttpError::server_error(e.to_string()))?;

    let mut related_data = Vec::new();
    for related_property in &related {
        related_data.push(to_filtered(&app_state, related_property).await?);
    }

    Ok(Json(serde_json::json!({
        "status": "success",
        "data": {
            "property": FilterPropertyDto::from_property(&property, images.first()),
            "images": images,
            "videos": videos,
            "documents": documents,
            "related": related_data,
            "is_favorited": is_favorited
        }
    })))
}

pub async fn share_property(
    Path(property_id): Path<Uuid>,
    Extension(app_state): Extension<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, HttpError> {
    let property = app_state
        .db_client
        .get_property_by_id(property_id)
        .await
        .map_err(|e| HttpError::server_error(e.to_string()))?
        .ok_or_else(|| HttpError::not_found("Property not found"))?;

    let actor = Actor::guest().with_ip(client_ip(&headers));
    let shares = app_state
        .property_service
        .record_share(&actor, &property)
        .await
        .map_err(HttpError::from)?;

    Ok(Json(serde_json::json!({
        "status": "success",
        "data": {
            "shares": shares
        }
    })))
}

pub async fn create_property(
    Extension(app_state): Extension<Arc<AppState>>,
    Extension(user): Extension<JWTAuthMiddeware>,
    headers: HeaderMap,
    Json(body): Json<SavePropertyDto>,
) -> Result<impl IntoResponse, HttpError> {
    body.validate()
        .map_err(|e| HttpError::bad_request(e.to_string()))?;

    let actor = Actor::admin(user.user.id).with_ip(client_ip(&headers));

    let property = app_state
        .property_service
        .create_property(&actor, &body)
        .await
        .map_err(HttpError::from)?;

    let filtered_property = to_filtered(&app_state, &property).await?;

    Ok(Json(serde_json::json!({
        "status": "success",
        "message": "Property added successfully",
        "data": {
            "property": filtered_property
        }
    })))
}

pub async fn update_property(
    Path(property_id): Path<Uuid>,
    Extension(app_state): Extension<Arc<AppState>>,
    Extension(user): Extension<JWTAuthMiddeware>,
    headers: HeaderMap,
    Json(body): Json<SavePropertyDto>,
) -> Result<impl IntoResponse, HttpError> {
    body.validate()
        .map_err(|e| HttpError::bad_request(e.to_string()))?;

    let actor = Actor::admin(user.user.id).with_ip(client_ip(&headers));

    let property = app_state
        .property_service
        .update_property(&actor, property_id, &body)
        .await
        .map_err(HttpError::from)?;

    let filtered_property = to_filtered(&app_state, &property).await?;

    Ok(Json(serde_json::json!({
        "status": "success",
        "message": "Property updated successfully",
        "data": {
            "property": filtered_property
        }
    })))
}

pub async fn delete_property(
    Path(property_id): Path<Uuid>,
    Extension(app_state): Extension<Arc<AppState>>,
    Extension(user): Extension<JWTAuthMiddeware>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, HttpError> {
    let actor = Actor::admin(user.user.id).with_ip(client_ip(&headers));

    app_state
        .property_service
        .delete_property(&actor, property_id)
        .await
        .map_err(HttpError::from)?;

    Ok(Json(Response {
        status: "success",
        message: "Property deleted successfully".to_string(),
    }))
}

#[derive(Debug, Deserialize)]
pub struct UploadQueryDto {
    pub filename: String,
    pub subfolder: Option<String>,
}

pub async fn upload_file(
    Query(query): Query<UploadQueryDto>,
    Extension(app_state): Extension<Arc<AppState>>,
    body: Bytes,
) -> Result<impl IntoResponse, HttpError> {
    if !allowed_file(&query.filename) {
        return Err(HttpError::bad_request("File type is not allowed"));
    }

    let subfolder = match query.subfolder.as_deref() {
        None | Some("images") => "images",
        Some("videos") => "videos",
        Some("documents") => "documents",
        Some(other) => {
            return Err(HttpError::bad_request(format!(
                "Unknown upload folder: {}",
                other
            )))
        }
    };

    let filename = timestamped_filename(Utc::now(), &query.filename);

    let url = app_state
        .property_service
        .store_upload(&body, subfolder, &filename)
        .await
        .map_err(HttpError::from)?;

    let document_type = file_extension(&query.filename)
        .map(|ext| ext.to_uppercase())
        .unwrap_or_default();

    Ok(Json(serde_json::json!({
        "status": "success",
        "data": {
            "url": url,
            "document_type": document_type,
            "file_size": format_file_size(body.len() as u64)
        }
    })))
}
