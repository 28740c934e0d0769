use async_trait::async_trait;
use uuid::Uuid;

use crate::{db::db::DBClient, models::favoritemodel::Favorite};

#[async_trait]
pub trait FavoriteExt {
    async fn get_favorite(
        &self,
        user_id: Uuid,
        property_id: Uuid,
    ) -> Result<Option<Favorite>, sqlx::Error>;

    async fn insert_favorite(
        &self,
        user_id: Uuid,
        property_id: Uuid,
    ) -> Result<Favorite, sqlx::Error>;

    async fn delete_favorite(&self, favorite_id: Uuid) -> Result<(), sqlx::Error>;

    async fn get_favorites_by_user(&self, user_id: Uuid)
        -> Result<Vec<Favorite>, sqlx::Error>;
}

#[async_trait]
impl FavoriteExt for DBClient {
    async fn get_favorite(
        &self,
        user_id: Uuid,
        property_id: Uuid,
    ) -> Result<Option<Favorite>, sqlx::Error> {
        let favorite = sqlx::query_as::<_, Favorite>(
            r#"
            SELECT id, user_id, property_id, created_at
            FROM favorites
            WHERE user_id = $1 AND property_id = $2
            "#,
        )
        .bind(user_id)
        .bind(property_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(favorite)
    }

    async fn insert_favorite(
        &self,
        user_id: Uuid,
        property_id: Uuid,
    ) -> Result<Favorite, sqlx::Error> {
        let favorite = sqlx::query_as::<_, Favorite>(
            r#"
            INSERT INTO favorites (user_id, property_id)
            VALUES ($1, $2)
            RETURNING id, user_id, property_id, created_at
            "#,
        )
        .bind(user_id)
        .bind(property_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(favorite)
    }

    async fn delete_favorite(&self, favorite_id: Uuid) -> Result<(), sqlx::Error> {
        sqlx::query("DELETE FROM favorites WHERE id = $1")
            .bind(favorite_id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    async fn get_favorites_by_user(
        &self,
        user_id: Uuid,
    ) -> Result<Vec<Favorite>, sqlx::Error> {
        let favorites = sqlx::query_as::<_, Favorite>(
            r#"
            SELECT id, user_id, property_id, created_at
            FROM favorites
            WHERE user_id = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(favorites)
    }
}
