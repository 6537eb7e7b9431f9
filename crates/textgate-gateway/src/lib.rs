//! Thin HTTP gateway in front of the textgate backend.
//!
//! Every route is a single-hop pass-through: forward the request to the
//! backend at a fixed base address, relay the response (JSON or a live
//! SSE stream) back to the caller, and map backend failures to a uniform
//! `{"error": ...}` envelope.

#![deny(unsafe_code)]

pub mod config;
pub mod error;
pub mod forward;
pub mod models;
pub mod server;

pub use config::GatewayConfig;
pub use server::{router, serve, AppState};
