use serde_json::{json, Value};

#[allow(dead_code)]
pub const USER_ID: &str = "7f8a6f2e-52f0-4b1c-9d51-1f0c8a2e4b01";
#[allow(dead_code)]
pub const PILOT_ID: &str = "0d5bb6a2-8c07-4a51-b54c-2d37f8e4c7a9";
#[allow(dead_code)]
pub const TRADE_ID: &str = "c3b1a2d4-5e6f-4a7b-8c9d-0e1f2a3b4c5d";
#[allow(dead_code)]
pub const FILL_ID: &str = "4b3e1c9a-2d5f-4e6a-b7c8-d9e0f1a2b3c4";
#[allow(dead_code)]
pub const SLATE_ID: &str = "9a8b7c6d-5e4f-4a3b-8c1d-0e9f8a7b6c5d";

#[allow(dead_code)]
pub fn user_payload() -> Value {
    json!({
        "id": USER_ID,
        "email": "alice@example.com",
        "name": "Alice",
        "createdAt": "2024-01-01T00:00:00Z",
        "updatedAt": "2024-01-02T00:00:00Z",
    })
}

#[allow(dead_code)]
pub fn pilot_payload() -> Value {
    json!({
        "id": PILOT_ID,
        "name": "Tech Momentum",
        "description": "Large-cap tech, momentum entries",
        "avatarUrl": "https://cdn.example.com/pilots/tech-momentum.png",
        "totalReturn": 12.4,
        "followers": 1280,
        "isActive": true,
        "createdAt": "2024-01-01T00:00:00Z",
        "updatedAt": "2024-01-02T00:00:00Z",
    })
}

#[allow(dead_code)]
pub fn trade_payload() -> Value {
    json!({
        "id": TRADE_ID,
        "symbol": "AAPL",
        "side": "buy",
        "quantity": 10,
        "price": 150.25,
        "pilotId": PILOT_ID,
        "timestamp": "2024-01-01T00:00:00Z",
    })
}

#[allow(dead_code)]
pub fn fill_payload() -> Value {
    json!({
        "id": FILL_ID,
        "tradeId": TRADE_ID,
        "symbol": "AAPL",
        "side": "buy",
        "quantity": 10,
        "price": 150.31,
        "slippage": 0.04,
        "latency": 23,
        "timestamp": "2024-01-01T00:00:01Z",
    })
}

#[allow(dead_code)]
pub fn slate_payload() -> Value {
    json!({
        "id": SLATE_ID,
        "name": "My Slate",
        "userId": USER_ID,
        "positions": [
            {"symbol": "AAPL", "weight": 30},
            {"symbol": "TSLA", "weight": 20},
            {"symbol": "NVDA", "weight": 25},
            {"symbol": "AMZN", "weight": 25},
        ],
        "totalValue": 4923.82,
        "createdAt": "2024-01-01T00:00:00Z",
        "updatedAt": "2024-01-02T00:00:00Z",
    })
}
