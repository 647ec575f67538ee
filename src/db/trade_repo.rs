use sqlx::PgPool;
use uuid::Uuid;

use crate::models::{Trade, TradeStatus};

pub async fn insert_trade(pool: &PgPool, trade: &Trade) -> anyhow::Result<Trade> {
    let trade = sqlx::query_as::<_, Trade>(
        r#"
        INSERT INTO trades (id, symbol, side, quantity, price, pilot_id, status, timestamp)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
        RETURNING *
        "#,
    )
    .bind(trade.id)
    .bind(&trade.symbol)
    .bind(trade.side)
    .bind(trade.quantity)
    .bind(trade.price)
    .bind(trade.pilot_id)
    .bind(trade.status)
    .bind(trade.timestamp)
    .fetch_one(pool)
    .await?;

    Ok(trade)
}

pub async fn get_trade(pool: &PgPool, id: Uuid) -> anyhow::Result<Option<Trade>> {
    let trade = sqlx::query_as::<_, Trade>("SELECT * FROM trades WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await?;

    Ok(trade)
}

pub async fn get_recent_trades(pool: &PgPool, limit: i64) -> anyhow::Result<Vec<Trade>> {
    let trades =
        sqlx::query_as::<_, Trade>("SELECT * FROM trades ORDER BY timestamp DESC LIMIT $1")
            .bind(limit)
            .fetch_all(pool)
            .await?;

    Ok(trades)
}

pub async fn get_trades_by_pilot(pool: &PgPool, pilot_id: Uuid) -> anyhow::Result<Vec<Trade>> {
    let trades = sqlx::query_as::<_, Trade>(
        "SELECT * FROM trades WHERE pilot_id = $1 ORDER BY timestamp DESC",
    )
    .bind(pilot_id)
    .fetch_all(pool)
    .await?;

    Ok(trades)
}

/// Oldest pending trades first, so the fill feed drains in arrival order.
pub async fn get_pending_trades(pool: &PgPool, limit: i64) -> anyhow::Result<Vec<Trade>> {
    let trades = sqlx::query_as::<_, Trade>(
        "SELECT * FROM trades WHERE status = 'pending' ORDER BY timestamp ASC LIMIT $1",
    )
    .bind(limit)
    .fetch_all(pool)
    .await?;

    Ok(trades)
}

/// Transition a trade out of `pending`. The WHERE clause is the temporal
/// half of the status machine: terminal rows never match, so a filled or
/// cancelled trade can never change status again. Returns `None` when the
/// trade is unknown or already terminal.
pub async fn mark_status(
    pool: &PgPool,
    id: Uuid,
    status: TradeStatus,
) -> anyhow::Result<Option<Trade>> {
    let trade = sqlx::query_as::<_, Trade>(
        r#"
        UPDATE trades
        SET status = $2
        WHERE id = $1 AND status = 'pending'
        RETURNING *
        "#,
    )
    .bind(id)
    .bind(status)
    .fetch_optional(pool)
    .await?;

    Ok(trade)
}
