use sqlx::types::Json;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::Slate;

pub async fn insert_slate(pool: &PgPool, slate: &Slate) -> anyhow::Result<Slate> {
    let slate = sqlx::query_as::<_, Slate>(
        r#"
        INSERT INTO slates (id, name, user_id, positions, total_value, created_at, updated_at)
        VALUES ($1, $2, $3, $4, $5, $6, $7)
        RETURNING *
        "#,
    )
    .bind(slate.id)
    .bind(&slate.name)
    .bind(slate.user_id)
    .bind(Json(&slate.positions))
    .bind(slate.total_value)
    .bind(slate.created_at)
    .bind(slate.updated_at)
    .fetch_one(pool)
    .await?;

    Ok(slate)
}

pub async fn get_slate(pool: &PgPool, id: Uuid) -> anyhow::Result<Option<Slate>> {
    let slate = sqlx::query_as::<_, Slate>("SELECT * FROM slates WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await?;

    Ok(slate)
}

pub async fn get_slates_by_user(pool: &PgPool, user_id: Uuid) -> anyhow::Result<Vec<Slate>> {
    let slates = sqlx::query_as::<_, Slate>(
        "SELECT * FROM slates WHERE user_id = $1 ORDER BY created_at DESC",
    )
    .bind(user_id)
    .fetch_all(pool)
    .await?;

    Ok(slates)
}

/// Write back a merged slate. `updated_at` is stamped here, on write, so a
/// patch round trip reflects the store's clock.
pub async fn update_slate(pool: &PgPool, slate: &Slate) -> anyhow::Result<Slate> {
    let slate = sqlx::query_as::<_, Slate>(
        r#"
        UPDATE slates
        SET name = $2,
            positions = $3,
            total_value = $4,
            updated_at = NOW()
        WHERE id = $1
        RETURNING *
        "#,
    )
    .bind(slate.id)
    .bind(&slate.name)
    .bind(Json(&slate.positions))
    .bind(slate.total_value)
    .fetch_one(pool)
    .await?;

    Ok(slate)
}
