use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;
use uuid::Uuid;

#[derive(Serialize, Deserialize, Debug, sqlx::FromRow)]
pub struct Course {
    pub id: Uuid,

    pub slug: String,
    pub title: String,
}

impl Course {
    pub async fn create(db: &SqlitePool, slug: &str, title: &str) -> sqlx::Result<Self> {
        let course = Self {
            id: Uuid::new_v4(),
            slug: slug.to_owned(),
            title: title.to_owned(),
        };

        sqlx::query("INSERT INTO courses (id, slug, title) VALUES (?, ?, ?)")
            .bind(course.id)
            .bind(&course.slug)
            .bind(&course.title)
            .execute(db)
            .await?;

        Ok(course)
    }

    pub async fn by_slug(db: &SqlitePool, slug: &str) -> sqlx::Result<Option<Self>> {
        sqlx::query_as("SELECT id, slug, title FROM courses WHERE slug = ?")
            .bind(slug)
            .fetch_optional(db)
            .await
    }
}
