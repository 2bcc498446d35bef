//! API Module
//!
//! HTTP handlers and routing that host the resolver as a service.
//!
//! # Endpoints
//! - `POST /resolve` - Resolve a session token to a user id
//! - `GET /stats` - Cache statistics
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
