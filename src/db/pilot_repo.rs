use sqlx::PgPool;
use uuid::Uuid;

use crate::models::Pilot;

pub async fn insert_pilot(pool: &PgPool, pilot: &Pilot) -> anyhow::Result<Pilot> {
    let pilot = sqlx::query_as::<_, Pilot>(
        r#"
        INSERT INTO pilots (id, name, description, avatar_url, total_return, followers, is_active, created_at, updated_at)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
        RETURNING *
        "#,
    )
    .bind(pilot.id)
    .bind(&pilot.name)
    .bind(&pilot.description)
    .bind(&pilot.avatar_url)
    .bind(pilot.total_return)
    .bind(pilot.followers)
    .bind(pilot.is_active)
    .bind(pilot.created_at)
    .bind(pilot.updated_at)
    .fetch_one(pool)
    .await?;

    Ok(pilot)
}

/// Fetch all active pilots, most followed first.
pub async fn get_active_pilots(pool: &PgPool) -> anyhow::Result<Vec<Pilot>> {
    let pilots = sqlx::query_as::<_, Pilot>(
        "SELECT * FROM pilots WHERE is_active = true ORDER BY followers DESC, name ASC",
    )
    .fetch_all(pool)
    .await?;

    Ok(pilots)
}

pub async fn get_pilot(pool: &PgPool, id: Uuid) -> anyhow::Result<Option<Pilot>> {
    let pilot = sqlx::query_as::<_, Pilot>("SELECT * FROM pilots WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await?;

    Ok(pilot)
}

/// Bump the follower count of an active pilot. Returns `None` when the
/// pilot does not exist or is inactive.
pub async fn increment_followers(pool: &PgPool, id: Uuid) -> anyhow::Result<Option<Pilot>> {
    let pilot = sqlx::query_as::<_, Pilot>(
        r#"
        UPDATE pilots
        SET followers = followers + 1,
            updated_at = NOW()
        WHERE id = $1 AND is_active = true
        RETURNING *
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(pilot)
}
