//! IdeaHub gateway: HTTP front end over the authorization engine.
//!
//! The gateway owns the ambient concerns (config, error mapping, in-memory
//! stores, HTTP wiring); every access decision is delegated to
//! `ideahub-authz`.

pub mod config;
pub mod error;
pub mod http;
pub mod store;

pub use config::{GatewayConfig, HttpConfig};
pub use error::{GatewayError, GatewayResult};
pub use http::{build_router, AppState};
pub use store::Store;
