//! Domain schema & validation layer.
//!
//! Every payload crossing a trust boundary (HTTP bodies, WebSocket
//! messages, broker webhooks) goes through exactly one validator here
//! before anything else touches it. Validators are pure functions over
//! `serde_json::Value`: no I/O, no logging, no shared state, and a
//! rejection is an ordinary return value listing *every* failing field.

pub mod error;
pub mod event;
pub(crate) mod fields;
pub mod fill;
pub mod pilot;
pub mod requests;
pub mod slate;
pub mod trade;
pub mod user;

pub use error::{ErrorKind, FieldError, ValidationError};
pub use event::{validate_pnl_update, validate_websocket_event};
pub use fill::validate_fill;
pub use pilot::validate_pilot;
pub use requests::{
    validate_create_slate_request, validate_follow_pilot_request, validate_risk_estimate_request,
    validate_update_slate_request, CreateSlateRequest, FollowPilotRequest, RiskEstimateRequest,
    UpdateSlateRequest,
};
pub use slate::validate_slate;
pub use trade::validate_trade;
pub use user::validate_user;
