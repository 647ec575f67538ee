use sqlx::PgPool;
use uuid::Uuid;

use crate::models::User;

/// Insert a validated user. The unique index on `email` is what enforces
/// address uniqueness; a violation surfaces as a database error for the
/// handler to translate.
pub async fn insert_user(pool: &PgPool, user: &User) -> anyhow::Result<User> {
    let user = sqlx::query_as::<_, User>(
        r#"
        INSERT INTO users (id, email, name, created_at, updated_at)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING *
        "#,
    )
    .bind(user.id)
    .bind(&user.email)
    .bind(&user.name)
    .bind(user.created_at)
    .bind(user.updated_at)
    .fetch_one(pool)
    .await?;

    Ok(user)
}

pub async fn get_user(pool: &PgPool, id: Uuid) -> anyhow::Result<Option<User>> {
    let user = sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await?;

    Ok(user)
}
