use chrono::Utc;
use metrics::{counter, histogram};
use rand::Rng;
use rust_decimal::Decimal;
use sqlx::PgPool;
use tokio::sync::broadcast;
use tokio::time::{interval, Duration};
use uuid::Uuid;

use crate::db::{fill_repo, trade_repo};
use crate::models::{Fill, Trade, TradeStatus, WebSocketEvent};

/// Simulated execution jitter: ±30 basis points around the trade price.
const MAX_SLIPPAGE_BPS: i64 = 30;
/// Simulated venue latency bounds in milliseconds.
const LATENCY_MIN_MS: i32 = 5;
const LATENCY_MAX_MS: i32 = 250;
/// Pending trades picked up per tick.
const PENDING_BATCH: i64 = 50;

/// Run the fill feed loop. Stands in for an execution venue: every tick it
/// drains pending trades, fabricates a plausible execution for each, and
/// announces the fill plus the status change to WebSocket subscribers.
pub async fn run_fill_feed(
    pool: PgPool,
    ws_tx: broadcast::Sender<WebSocketEvent>,
    interval_secs: u64,
) {
    let mut ticker = interval(Duration::from_secs(interval_secs));
    tracing::info!(interval_secs, "Fill feed started");

    loop {
        ticker.tick().await;

        let trades = match trade_repo::get_pending_trades(&pool, PENDING_BATCH).await {
            Ok(trades) => trades,
            Err(e) => {
                tracing::error!(error = %e, "Fill feed: failed to fetch pending trades");
                continue;
            }
        };

        if trades.is_empty() {
            tracing::debug!("Fill feed: no pending trades");
            continue;
        }

        for trade in &trades {
            if let Err(e) = execute_trade(&pool, &ws_tx, trade).await {
                tracing::error!(
                    error = %e,
                    trade_id = %trade.id,
                    "Fill feed: execution failed"
                );
            }
        }
    }
}

async fn execute_trade(
    pool: &PgPool,
    ws_tx: &broadcast::Sender<WebSocketEvent>,
    trade: &Trade,
) -> anyhow::Result<()> {
    // Claim the trade first; losing the race to a concurrent cancel is
    // not an error, the trade is simply no longer ours to fill.
    let Some(updated) = trade_repo::mark_status(pool, trade.id, TradeStatus::Filled).await? else {
        return Ok(());
    };

    let fill = simulate_fill(trade, &mut rand::thread_rng());
    let fill = fill_repo::insert_fill(pool, &fill).await?;

    counter!("fills_recorded_total").increment(1);
    histogram!("fill_latency_ms").record(fill.latency as f64);
    tracing::info!(
        trade_id = %trade.id,
        symbol = %fill.symbol,
        price = %fill.price,
        slippage = %fill.slippage,
        "Trade filled"
    );

    if ws_tx.send(WebSocketEvent::Fill(fill)).is_ok() {
        counter!("ws_events_broadcast_total").increment(1);
    }
    if ws_tx.send(WebSocketEvent::Trade(updated)).is_ok() {
        counter!("ws_events_broadcast_total").increment(1);
    }

    Ok(())
}

/// Fabricate an execution for a trade: fill price jittered within
/// ±`MAX_SLIPPAGE_BPS` of the order price, slippage derived from the
/// realized difference, latency drawn from the configured bounds.
pub fn simulate_fill(trade: &Trade, rng: &mut impl Rng) -> Fill {
    let bps = rng.gen_range(-MAX_SLIPPAGE_BPS..=MAX_SLIPPAGE_BPS);
    let price = (trade.price * Decimal::from(10_000 + bps) / Decimal::from(10_000)).round_dp(4);
    let slippage = ((price - trade.price) * Decimal::ONE_HUNDRED / trade.price).round_dp(4);

    Fill {
        id: Uuid::new_v4(),
        trade_id: trade.id,
        symbol: trade.symbol.clone(),
        side: trade.side,
        quantity: trade.quantity,
        price,
        slippage,
        latency: rng.gen_range(LATENCY_MIN_MS..=LATENCY_MAX_MS),
        timestamp: Utc::now(),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
