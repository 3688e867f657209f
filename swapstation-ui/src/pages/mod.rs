mod home;
pub mod admin;
pub mod driver;
pub mod staff;

pub use home::{Home, NotFound};

// Re-export driver pages
pub use driver::{BookingHistory, Payment, Reservation, StationFinder};

// Re-export staff pages
pub use staff::{BatteryInspection, BatteryInventory};

// Re-export admin pages
pub use admin::{AdminDashboard, Reports};
