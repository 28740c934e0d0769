mod config;
mod db;
mod dtos;
mod error;
mod handler;
mod mail;
mod middleware;
mod models;
mod routes;
mod service;
mod storage;
mod utils;

use std::sync::Arc;

use axum::http::{
    header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE},
    HeaderValue, Method,
};
use config::Config;
use dotenv::dotenv;
use routes::create_router;
use sqlx::postgres::PgPoolOptions;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tracing_subscriber::filter::LevelFilter;

use crate::{
    db::db::DBClient,
    mail::mailer::{NotificationGateway, SmtpMailer},
    storage::{storage_from_config, FileStorage},
};

use service::{
    activity_service::ActivityService, alert_service::AlertService,
    booking_service::BookingService, enquiry_service::EnquiryService,
    favorite_service::FavoriteService, property_service::PropertyService,
};

#[derive(Clone)]
pub struct AppState {
    pub env: Config,
    pub db_client: Arc<DBClient>,
    pub storage: Arc<dyn FileStorage>,
    // Services
    pub activity_service: Arc<ActivityService>,
    pub alert_service: Arc<AlertService>,
    pub property_service: Arc<PropertyService>,
    pub booking_service: Arc<BookingService>,
    pub enquiry_service: Arc<EnquiryService>,
    pub favorite_service: Arc<FavoriteService>,
}

impl AppState {
    pub fn new(
        db_client: DBClient,
        config: Config,
        gateway: Arc<dyn NotificationGateway>,
        storage: Arc<dyn FileStorage>,
    ) -> Self {
        let db_client_arc = Arc::new(db_client);

        let activity_service = Arc::new(ActivityService::new(db_client_arc.clone()));

        let alert_service = Arc::new(AlertService::new(
            db_client_arc.clone(),
            gateway.clone(),
            activity_service.clone(),
            config.app_url.clone(),
        ));

        let property_service = Arc::new(PropertyService::new(
            db_client_arc.clone(),
            storage.clone(),
            activity_service.clone(),
            alert_service.clone(),
        ));

        let booking_service = Arc::new(BookingService::new(
            db_client_arc.clone(),
            gateway.clone(),
            activity_service.clone(),
            config.operator_email.clone(),
        ));

        let enquiry_service = Arc::new(EnquiryService::new(
            db_client_arc.clone(),
            gateway.clone(),
            activity_service.clone(),
            config.operator_email.clone(),
        ));

        let favorite_service = Arc::new(FavoriteService::new(
            db_client_arc.clone(),
            activity_service.clone(),
        ));

        Self {
            env: config,
            db_client: db_client_arc,
            storage,
            activity_service,
            alert_service,
            property_service,
            booking_service,
            enquiry_service,
            favorite_service,
        }
    }
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_max_level(LevelFilter::DEBUG)
        .init();

    dotenv().ok();

    let config = Config::init();

    let pool = match PgPoolOptions::new()
        .max_connections(20)
        .min_connections(5)
        .connect(&config.database_url)
        .await
    {
        Ok(pool) => {
            tracing::info!("Connection to the database is successful");
            pool
        }
        Err(err) => {
            tracing::error!("Failed to connect to the database: {:?}", err);
            std::process::exit(1);
        }
    };

    let db_client = DBClient::new(pool);

    let gateway: Arc<dyn NotificationGateway> = Arc::new(SmtpMailer::new(&config));
    let storage = storage_from_config(&config);

    let allowed_origins = vec![
        config
            .app_url
            .parse::<HeaderValue>()
            .expect("APP_URL must be a valid origin"),
        "http://localhost:5173".parse::<HeaderValue>().unwrap(),
        "http://localhost:8000".parse::<HeaderValue>().unwrap(),
    ];

    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::list(allowed_origins))
        .allow_headers([AUTHORIZATION, ACCEPT, CONTENT_TYPE])
        .allow_credentials(true)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE]);

    let app_state = Arc::new(AppState::new(db_client, config.clone(), gateway, storage));

    let app = create_router(app_state).layer(cors);

    tracing::info!("Server is running on http://localhost:{}", config.port);

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", &config.port))
        .await
        .unwrap();

    axum::serve(listener, app).await.unwrap();
}
