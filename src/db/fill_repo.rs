use sqlx::PgPool;
use uuid::Uuid;

use crate::models::Fill;

pub async fn insert_fill(pool: &PgPool, fill: &Fill) -> anyhow::Result<Fill> {
    let fill = sqlx::query_as::<_, Fill>(
        r#"
        INSERT INTO fills (id, trade_id, symbol, side, quantity, price, slippage, latency, timestamp)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
        RETURNING *
        "#,
    )
    .bind(fill.id)
    .bind(fill.trade_id)
    .bind(&fill.symbol)
    .bind(fill.side)
    .bind(fill.quantity)
    .bind(fill.price)
    .bind(fill.slippage)
    .bind(fill.latency)
    .bind(fill.timestamp)
    .fetch_one(pool)
    .await?;

    Ok(fill)
}

pub async fn get_fills_by_trade(pool: &PgPool, trade_id: Uuid) -> anyhow::Result<Vec<Fill>> {
    let fills = sqlx::query_as::<_, Fill>(
        "SELECT * FROM fills WHERE trade_id = $1 ORDER BY timestamp ASC",
    )
    .bind(trade_id)
    .fetch_all(pool)
    .await?;

    Ok(fills)
}
