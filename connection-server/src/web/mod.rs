//! Web layer for the connection server.
//!
//! Provides the `/connections` endpoint, a health check, and a
//! pass-through to static front-end assets.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::{AppError, connections, create_router};
pub use state::{AppState, LiveState};
