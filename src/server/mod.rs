//! Axum HTTPS server, routing, and middleware.
//!
//! # Responsibilities
//! - Load the TLS certificate/key pair and run the TLS accept loop.
//! - Define the Axum router with the feed route and shared middleware.

pub mod handlers;
pub mod router;
pub mod tls;
