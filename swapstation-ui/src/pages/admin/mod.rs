pub mod dashboard;
pub mod reports;

pub use dashboard::AdminDashboard;
pub use reports::Reports;
