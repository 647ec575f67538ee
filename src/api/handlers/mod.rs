pub mod health;
pub mod ingest;
pub mod metrics;
pub mod pilots;
pub mod risk;
pub mod slates;
pub mod trades;
pub mod users;
pub mod ws;

use axum::Json;
use serde::Serialize;

#[derive(Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub success: bool,
    pub data: Option<T>,
    pub error: Option<String>,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn ok(data: T) -> Json<Self> {
        Json(ApiResponse {
            success: true,
            data: Some(data),
            error: None,
        })
    }
}
