//! Common types and logic shared by the SwapStation screens
//!
//! Everything that is not markup lives here so it can be tested on the
//! host: the sparkle simulator, the multi-station reservation book,
//! page filters, form validation, pricing and the sample catalog.

pub mod catalog;
pub mod checkout;
pub mod config;
pub mod filters;
pub mod format;
pub mod forms;
pub mod reservation;
pub mod sparkles;

use serde::{Deserialize, Serialize};

/// Station identifier
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(transparent)]
pub struct StationId(pub u32);

impl std::fmt::Display for StationId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Battery chemistry carried by a swap station
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum BatteryKind {
    LithiumIon,
    Lfp,
    LeadAcid,
}

impl BatteryKind {
    pub const ALL: [BatteryKind; 3] = [BatteryKind::LithiumIon, BatteryKind::Lfp, BatteryKind::LeadAcid];

    pub fn label(&self) -> &'static str {
        match self {
            Self::LithiumIon => "Lithium-ion",
            Self::Lfp => "LFP",
            Self::LeadAcid => "Lead-acid",
        }
    }

    /// Parse the value used by `<select>` options
    pub fn from_slug(slug: &str) -> Option<Self> {
        match slug {
            "lithium-ion" => Some(Self::LithiumIon),
            "lfp" => Some(Self::Lfp),
            "lead-acid" => Some(Self::LeadAcid),
            _ => None,
        }
    }

    pub fn slug(&self) -> &'static str {
        match self {
            Self::LithiumIon => "lithium-ion",
            Self::Lfp => "lfp",
            Self::LeadAcid => "lead-acid",
        }
    }
}

impl std::fmt::Display for BatteryKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Battery counts by charge state
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct StockCounts {
    pub full: u32,
    pub charging: u32,
    pub empty: u32,
}

impl StockCounts {
    pub const fn new(full: u32, charging: u32, empty: u32) -> Self {
        Self { full, charging, empty }
    }

    pub fn total(&self) -> u32 {
        self.full + self.charging + self.empty
    }
}

/// A swap station as shown to drivers
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Station {
    pub id: StationId,
    pub name: String,
    pub address: String,
    pub distance_km: f64,
    pub stock: Vec<(BatteryKind, StockCounts)>,
    pub rating: f32,
    pub eta_minutes: u32,
    pub amenities: Vec<String>,
    pub open: bool,
}

impl Station {
    pub fn total_full(&self) -> u32 {
        self.stock.iter().map(|(_, counts)| counts.full).sum()
    }

    pub fn total_batteries(&self) -> u32 {
        self.stock.iter().map(|(_, counts)| counts.total()).sum()
    }

    /// Share of full batteries in percent, 0 for a station with no stock
    pub fn full_ratio(&self) -> f64 {
        let total = self.total_batteries();
        if total == 0 {
            0.0
        } else {
            self.total_full() as f64 / total as f64 * 100.0
        }
    }

    pub fn stock_for(&self, kind: BatteryKind) -> StockCounts {
        self.stock
            .iter()
            .find(|(k, _)| *k == kind)
            .map(|(_, counts)| *counts)
            .unwrap_or_default()
    }
}

/// How a booking was paid for
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum BookingMethod {
    Deposit,
    FullPayment,
}

impl BookingMethod {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Deposit => "Deposit",
            Self::FullPayment => "Full payment",
        }
    }
}

/// Booking lifecycle as seen by the driver
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    Deposited,
    Paid,
    Completed,
}

impl BookingStatus {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Deposited => "Deposited",
            Self::Paid => "Paid",
            Self::Completed => "Completed",
        }
    }
}

/// Battery handed over during a swap
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BatteryInfo {
    pub code: String,
    /// State of health, percent
    pub soh: u8,
    pub charge_cycles: u32,
    pub manufactured: String,
    pub expires: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Booking {
    pub id: String,
    pub vehicle: String,
    pub battery_kind: BatteryKind,
    pub booked_at: String,
    pub paid_at: String,
    pub station: String,
    pub method: BookingMethod,
    pub status: BookingStatus,
    pub amount_vnd: u64,
    pub can_cancel: bool,
    pub battery: BatteryInfo,
}

/// Charge state of a battery held in station inventory
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum BatteryStatus {
    Full,
    Charging,
    Maintenance,
}

impl BatteryStatus {
    pub const ALL: [BatteryStatus; 3] = [BatteryStatus::Full, BatteryStatus::Charging, BatteryStatus::Maintenance];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Full => "Full",
            Self::Charging => "Charging",
            Self::Maintenance => "Maintenance",
        }
    }

    pub fn slug(&self) -> &'static str {
        match self {
            Self::Full => "full",
            Self::Charging => "charging",
            Self::Maintenance => "maintenance",
        }
    }

    pub fn from_slug(slug: &str) -> Option<Self> {
        match slug {
            "full" => Some(Self::Full),
            "charging" => Some(Self::Charging),
            "maintenance" => Some(Self::Maintenance),
            _ => None,
        }
    }
}

impl std::fmt::Display for BatteryStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Battery {
    pub id: String,
    pub kind: BatteryKind,
    pub status: BatteryStatus,
    pub soh: u8,
    pub slot: String,
    pub updated_at: String,
}

/// Battery returned empty and waiting for a staff inspection
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PendingInspection {
    pub battery_id: String,
    pub kind: BatteryKind,
    pub last_used: String,
    pub slot: String,
    pub soh: u8,
    pub cycles: u32,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum InspectionVerdict {
    Passed,
    Maintenance,
}

impl InspectionVerdict {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Passed => "Passed",
            Self::Maintenance => "Maintenance",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct InspectionRecord {
    pub battery_id: String,
    pub kind: BatteryKind,
    pub inspected_at: String,
    pub inspector: String,
    pub physical_condition: String,
    pub notes: String,
    pub verdict: InspectionVerdict,
}

/// Per-station figures for the admin reports
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StationReport {
    pub id: StationId,
    pub name: String,
    pub address: String,
    pub revenue_vnd: u64,
    pub transactions: u32,
    pub batteries: u32,
    /// Percent
    pub efficiency: u8,
    /// Out of 10
    pub popularity: f32,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TransactionStatus {
    Completed,
    Processing,
}

impl TransactionStatus {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Completed => "Completed",
            Self::Processing => "Processing",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SwapTransaction {
    pub id: String,
    pub customer: String,
    pub vehicle: String,
    pub kind: BatteryKind,
    pub swapped_at: String,
    pub duration_secs: u32,
    pub amount_vnd: u64,
    pub status: TransactionStatus,
    pub channel: String,
}

/// Network-wide figures for the admin dashboard
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Kpis {
    pub total_revenue_vnd: u64,
    pub total_transactions: u32,
    pub active_users: u32,
    pub customer_satisfaction: u8,
    pub system_uptime: f32,
    pub battery_utilization: u8,
}

impl Kpis {
    pub fn average_transaction_vnd(&self) -> u64 {
        if self.total_transactions == 0 {
            0
        } else {
            self.total_revenue_vnd / self.total_transactions as u64
        }
    }
}

/// Errors surfaced to the user as notifications
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Please fill in all bank details")]
    MissingBankDetails,

    #[error("{0} is required")]
    MissingField(&'static str),

    #[error("Please select a rating")]
    RatingRequired,

    #[error("Rating must be between 1 and 5, got {0}")]
    InvalidRating(u8),

    #[error("State of health must be a whole number from 0 to 100, got '{0}'")]
    InvalidStateOfHealth(String),

    #[error("Unknown time slot: {0}")]
    InvalidTimeSlot(String),

    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("Date {0} is in the past")]
    PastDate(chrono::NaiveDate),

    #[error("Configuration error: {0}")]
    Config(#[from] toml::de::Error),

    #[error("Invalid configuration value: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_station_ratio_without_stock() {
        let station = Station {
            id: StationId(9),
            name: "Empty".to_string(),
            address: "nowhere".to_string(),
            distance_km: 1.0,
            stock: vec![(BatteryKind::LeadAcid, StockCounts::default())],
            rating: 4.0,
            eta_minutes: 1,
            amenities: vec![],
            open: true,
        };

        assert_eq!(station.total_batteries(), 0);
        assert_eq!(station.full_ratio(), 0.0);
    }

    #[test]
    fn test_station_totals() {
        let station = Station {
            id: StationId(1),
            name: "Q1".to_string(),
            address: "123".to_string(),
            distance_km: 2.5,
            stock: vec![
                (BatteryKind::LithiumIon, StockCounts::new(5, 2, 1)),
                (BatteryKind::Lfp, StockCounts::new(3, 1, 0)),
            ],
            rating: 4.9,
            eta_minutes: 2,
            amenities: vec![],
            open: true,
        };

        assert_eq!(station.total_full(), 8);
        assert_eq!(station.total_batteries(), 12);
        assert!((station.full_ratio() - 66.666).abs() < 0.01);
        assert_eq!(station.stock_for(BatteryKind::LeadAcid), StockCounts::default());
    }

    #[test]
    fn test_kind_slug_round_trip() {
        for kind in BatteryKind::ALL {
            assert_eq!(BatteryKind::from_slug(kind.slug()), Some(kind));
        }
        assert_eq!(BatteryKind::from_slug("nickel"), None);
    }

    #[test]
    fn test_slugs_match_serde_names() {
        for kind in BatteryKind::ALL {
            assert_eq!(serde_json::to_string(&kind).unwrap(), format!("\"{}\"", kind.slug()));
        }
        for status in BatteryStatus::ALL {
            assert_eq!(serde_json::to_string(&status).unwrap(), format!("\"{}\"", status.slug()));
        }
        assert_eq!(serde_json::to_string(&StationId(3)).unwrap(), "3");
    }

    #[test]
    fn test_average_transaction() {
        let kpis = Kpis {
            total_revenue_vnd: 2_850_000,
            total_transactions: 245,
            active_users: 1248,
            customer_satisfaction: 94,
            system_uptime: 99.2,
            battery_utilization: 87,
        };
        assert_eq!(kpis.average_transaction_vnd(), 11_632);
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(Error::MissingBankDetails.to_string(), "Please fill in all bank details");
        assert_eq!(Error::MissingField("Inspector").to_string(), "Inspector is required");
    }
}
