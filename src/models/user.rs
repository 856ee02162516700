use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;
use uuid::Uuid;

#[derive(Serialize, Deserialize, Debug, sqlx::FromRow)]
pub struct User {
    pub id: Uuid,

    pub email: String,
}

impl User {
    pub async fn by_id(db: &SqlitePool, id: Uuid) -> sqlx::Result<Option<Self>> {
        sqlx::query_as("SELECT id, email FROM users WHERE id = ?")
            .bind(id)
            .fetch_optional(db)
            .await
    }

    pub async fn find_or_create(db: &SqlitePool, email: &str) -> sqlx::Result<Self> {
        let existing: Option<Self> = sqlx::query_as("SELECT id, email FROM users WHERE email = ?")
            .bind(email)
            .fetch_optional(db)
            .await?;

        if let Some(user) = existing {
            return Ok(user);
        }

        let user = Self {
            id: Uuid::new_v4(),
            email: email.to_owned(),
        };

        sqlx::query("INSERT INTO users (id, email) VALUES (?, ?)")
            .bind(user.id)
            .bind(&user.email)
            .execute(db)
            .await?;

        Ok(user)
    }
}
