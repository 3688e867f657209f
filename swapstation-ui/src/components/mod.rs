//! Reusable UI components

pub mod sparkles;
pub mod stat_card;
pub mod status_badge;

pub use sparkles::MouseSparkles;
pub use stat_card::StatCard;
pub use status_badge::StatusBadge;
