//! Reusable widget components.

pub mod summary;
pub mod user_row;

pub use summary::SummaryCard;
pub use user_row::user_row;
