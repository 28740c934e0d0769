#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub app_url: String,
    pub jwt_secret: String,
    pub jwt_maxage: i64,
    pub port: u16,
    // Email service configurations
    pub smtp_host: String,
    pub smtp_port: u16,
    pub smtp_username: String,
    pub smtp_password: String,
    pub mail_from: String,
    pub operator_email: String,
    // File storage configurations
    pub upload_dir: String,
    pub blob_store_url: Option<String>,
    pub blob_store_token: Option<String>,
}

impl Config {
    pub fn init() -> Config {
        let database_url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");
        let jwt_secret = std::env::var("JWT_SECRET_KEY").expect("JWT_SECRET_KEY must be set");
        let jwt_maxage = std::env::var("JWT_MAXAGE").expect("JWT_MAXAGE must be set");
        let app_url = std::env::var("APP_URL").expect("APP_URL must be set");

        // Email service configurations (with defaults)
        let smtp_host = std::env::var("SMTP_HOST")
            .unwrap_or_else(|_| "localhost".to_string());
        let smtp_port = std::env::var("SMTP_PORT")
            .ok()
            .and_then(|p| p.parse::<u16>().ok())
            .unwrap_or(587);
        let smtp_username = std::env::var("SMTP_USERNAME")
            .unwrap_or_else(|_| "".to_string());
        let smtp_password = std::env::var("SMTP_PASSWORD")
            .unwrap_or_else(|_| "".to_string());
        let mail_from = std::env::var("MAIL_FROM")
            .unwrap_or_else(|_| "Premium Estate <noreply@premiumestate.in>".to_string());
        // Where booking and enquiry notifications for the back office land
        let operator_email = std::env::var("OPERATOR_EMAIL")
            .unwrap_or_else(|_| "admin@premiumestate.in".to_string());

        // File storage configurations; a blob store token switches the
        // backend from local disk to the remote object store
        let upload_dir = std::env::var("UPLOAD_DIR")
            .unwrap_or_else(|_| "static/uploads".to_string());
        let blob_store_url = std::env::var("BLOB_STORE_URL").ok();
        let blob_store_token = std::env::var("BLOB_READ_WRITE_TOKEN").ok();

        Config {
            database_url,
            app_url,
            jwt_secret,
            jwt_maxage: jwt_maxage.parse::<i64>().unwrap(),
            port: 8000,
            smtp_host,
            smtp_port,
            smtp_username,
            smtp_password,
            mail_from,
            operator_email,
            upload_dir,
            blob_store_url,
            blob_store_token,
        }
    }
}
