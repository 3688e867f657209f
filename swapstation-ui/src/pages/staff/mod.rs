pub mod battery_inspection;
pub mod battery_inventory;

pub use battery_inspection::BatteryInspection;
pub use battery_inventory::BatteryInventory;
