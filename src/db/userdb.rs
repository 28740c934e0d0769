use async_trait::async_trait;
use uuid::Uuid;

use crate::{
    db::db::DBClient,
    models::usermodel::{User, UserRole},
};

#[async_trait]
pub trait UserExt {
    async fn save_user(
        &self,
        name: String,
        email: String,
        phone: Option<String>,
        password: String,
    ) -> Result<User, sqlx::Error>;

    async fn get_user(
        &self,
        user_id: Option<Uuid>,
        email: Option<&str>,
    ) -> Result<Option<User>, sqlx::Error>;

    async fn list_users(&self, page: u32, limit: usize) -> Result<Vec<User>, sqlx::Error>;

    async fn count_users(&self) -> Result<i64, sqlx::Error>;
}

#[async_trait]
impl UserExt for DBClient {
    async fn save_user(
        &self,
        name: String,
        email: String,
        phone: Option<String>,
        password: String,
    ) -> Result<User, sqlx::Error> {
        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (name, email, phone, password, role)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, name, email, phone, password, role, created_at
            "#,
        )
        .bind(name)
        .bind(email)
        .bind(phone)
        .bind(password)
        .bind(UserRole::User)
        .fetch_one(&self.pool)
        .await?;

        Ok(user)
    }

    async fn get_user(
        &self,
        user_id: Option<Uuid>,
        email: Option<&str>,
    ) -> Result<Option<User>, sqlx::Error> {
        let user = if let Some(user_id) = user_id {
            sqlx::query_as::<_, User>(
                r#"
                SELECT id, name, email, phone, password, role, created_at
                FROM users
                WHERE id = $1
                "#,
            )
            .bind(user_id)
            .fetch_optional(&self.pool)
            .await?
        } else if let Some(email) = email {
            sqlx::query_as::<_, User>(
                r#"
                SELECT id, name, email, phone, password, role, created_at
                FROM users
                WHERE email = $1
                "#,
            )
            .bind(email)
            .fetch_optional(&self.pool)
            .await?
        } else {
            None
        };

        Ok(user)
    }

    async fn list_users(&self, page: u32, limit: usize) -> Result<Vec<User>, sqlx::Error> {
        let offset = (page.saturating_sub(1)) * limit as u32;

        let users = sqlx::query_as::<_, User>(
            r#"
            SELECT id, name, email, phone, password, role, created_at
            FROM users
            ORDER BY created_at DESC
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(limit as i64)
        .bind(offset as i64)
        .fetch_all(&self.pool)
        .await?;

        Ok(users)
    }

    async fn count_users(&self) -> Result<i64, sqlx::Error> {
        let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM users")
            .fetch_one(&self.pool)
            .await?;

        Ok(count.0)
    }
}
