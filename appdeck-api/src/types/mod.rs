//! API Request and Response Types
//!
//! All types serialize with camelCase field names to match the
//! app-service wire format.

// Inventory list types
mod inventory;
pub use inventory::*;

// Per-app overview types
mod overview;
pub use overview::*;
