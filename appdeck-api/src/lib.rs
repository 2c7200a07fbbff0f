//! appdeck API - app-service wire types
//!
//! This crate defines the request and response types spoken by the
//! app-service inventory endpoints. The backend is external; clients
//! (the appdeck TUI) deserialize its camelCase JSON through these
//! types.
//!
//! Endpoints covered:
//! - `PUT  /api/v1/app-service/get-apps`
//! - `GET  /api/v1/app-service/get-app-overview/{id}`
//! - `GET  /api/v1/app-service/get-app-overview-users/{id}`

pub mod types;

pub use types::*;
