//! Sample data shown by the screens
//!
//! There is no backend; every page reads from these functions.

use crate::{
    Battery, BatteryInfo, BatteryKind, BatteryStatus, Booking, BookingMethod, BookingStatus,
    InspectionRecord, InspectionVerdict, Kpis, PendingInspection, Station, StationId,
    StationReport, StockCounts, SwapTransaction, TransactionStatus,
};

/// Staff members allowed to sign off inspections
pub const INSPECTORS: [&str; 2] = ["Nguyễn Văn A", "Trần Thị B"];

fn make_station(
    id: u32,
    name: &str,
    address: &str,
    distance_km: f64,
    li_ion: StockCounts,
    lfp: StockCounts,
    rating: f32,
    eta_minutes: u32,
    amenities: &[&str],
) -> Station {
    Station {
        id: StationId(id),
        name: name.to_string(),
        address: address.to_string(),
        distance_km,
        stock: vec![
            (BatteryKind::LithiumIon, li_ion),
            (BatteryKind::Lfp, lfp),
            (BatteryKind::LeadAcid, StockCounts::default()),
        ],
        rating,
        eta_minutes,
        amenities: amenities.iter().map(|a| a.to_string()).collect(),
        open: true,
    }
}

pub fn stations() -> Vec<Station> {
    vec![
        make_station(
            1,
            "Trạm Quận 1 Premium",
            "123 Nguyễn Huệ, Quận 1, TP.HCM",
            2.5,
            StockCounts::new(5, 2, 1),
            StockCounts::new(3, 1, 0),
            4.9,
            2,
            &["WiFi", "Coffee", "Parking"],
        ),
        make_station(
            2,
            "Trạm Quận 3 Express",
            "456 Lê Văn Sỹ, Quận 3, TP.HCM",
            4.2,
            StockCounts::new(3, 3, 1),
            StockCounts::new(2, 2, 1),
            4.7,
            5,
            &["24/7", "Security"],
        ),
        make_station(
            3,
            "Trạm Bình Thạnh Mega",
            "789 Xô Viết Nghệ Tĩnh, Bình Thạnh, TP.HCM",
            6.1,
            StockCounts::new(8, 1, 1),
            StockCounts::new(4, 1, 0),
            4.8,
            3,
            &["Supercharge", "Car wash", "Convenience store"],
        ),
    ]
}

pub fn station(id: StationId) -> Option<Station> {
    stations().into_iter().find(|s| s.id == id)
}

fn booking(
    id: &str,
    vehicle: &str,
    battery_kind: BatteryKind,
    times: (&str, &str),
    station: &str,
    method: BookingMethod,
    status: BookingStatus,
    amount_vnd: u64,
    battery: (&str, u8, u32, &str, &str),
) -> Booking {
    let (code, soh, charge_cycles, manufactured, expires) = battery;
    Booking {
        id: id.to_string(),
        vehicle: vehicle.to_string(),
        battery_kind,
        booked_at: times.0.to_string(),
        paid_at: times.1.to_string(),
        station: station.to_string(),
        method,
        status,
        amount_vnd,
        can_cancel: method == BookingMethod::Deposit && status == BookingStatus::Deposited,
        battery: BatteryInfo {
            code: code.to_string(),
            soh,
            charge_cycles,
            manufactured: manufactured.to_string(),
            expires: expires.to_string(),
        },
    }
}

/// Driver bookings, newest first
pub fn bookings() -> Vec<Booking> {
    vec![
        booking(
            "BK004",
            "VinFast VF8",
            BatteryKind::LithiumIon,
            ("18/01/2024 10:15", "18/01/2024 10:20"),
            "Trạm Quận 7 - 999 Nguyễn Văn Linh",
            BookingMethod::Deposit,
            BookingStatus::Deposited,
            50_000,
            ("BT-4001", 92, 450, "10/03/2023", "10/03/2028"),
        ),
        booking(
            "BK003",
            "VinFast VF6",
            BatteryKind::LithiumIon,
            ("17/01/2024 16:45", "17/01/2024 16:50"),
            "Trạm Quận 3 - 456 Lê Văn Sỹ",
            BookingMethod::FullPayment,
            BookingStatus::Paid,
            110_000,
            ("BT-3001", 85, 620, "05/12/2022", "05/12/2027"),
        ),
        booking(
            "BK002",
            "VinFast VF9",
            BatteryKind::Lfp,
            ("16/01/2024 09:15", "16/01/2024 09:20"),
            "Trạm Bình Thạnh - 789 Xô Viết Nghệ Tĩnh",
            BookingMethod::FullPayment,
            BookingStatus::Paid,
            120_000,
            ("BT-2001", 95, 320, "15/08/2023", "15/08/2028"),
        ),
        booking(
            "BK001",
            "VinFast VF8",
            BatteryKind::LithiumIon,
            ("15/01/2024 14:30", "15/01/2024 14:35"),
            "Trạm Quận 1 - 123 Nguyễn Huệ",
            BookingMethod::FullPayment,
            BookingStatus::Completed,
            120_000,
            ("BT-1001", 88, 580, "20/05/2022", "20/05/2027"),
        ),
    ]
}

fn battery(id: &str, kind: BatteryKind, status: BatteryStatus, soh: u8, slot: &str, updated_at: &str) -> Battery {
    Battery {
        id: id.to_string(),
        kind,
        status,
        soh,
        slot: slot.to_string(),
        updated_at: updated_at.to_string(),
    }
}

pub fn batteries() -> Vec<Battery> {
    vec![
        battery("BAT001", BatteryKind::LithiumIon, BatteryStatus::Full, 95, "Slot A1", "15/12/2024 10:30"),
        battery("BAT002", BatteryKind::Lfp, BatteryStatus::Charging, 92, "Slot A2", "15/12/2024 09:15"),
        battery("BAT003", BatteryKind::LithiumIon, BatteryStatus::Maintenance, 88, "Slot A3", "15/12/2024 14:45"),
        battery("BAT004", BatteryKind::Lfp, BatteryStatus::Full, 97, "Slot B1", "15/12/2024 11:20"),
        battery("BAT005", BatteryKind::LithiumIon, BatteryStatus::Charging, 91, "Slot B2", "15/12/2024 13:10"),
    ]
}

pub fn pending_inspections() -> Vec<PendingInspection> {
    let pending = |battery_id: &str, kind, last_used: &str, slot: &str, soh, cycles| PendingInspection {
        battery_id: battery_id.to_string(),
        kind,
        last_used: last_used.to_string(),
        slot: slot.to_string(),
        soh,
        cycles,
    };

    vec![
        pending("BAT005", BatteryKind::LithiumIon, "14/12/2024 16:30", "Slot A3", 78, 345),
        pending("BAT009", BatteryKind::Lfp, "14/12/2024 15:20", "Slot B3", 75, 389),
        pending("BAT014", BatteryKind::LithiumIon, "14/12/2024 14:10", "Slot C2", 72, 467),
    ]
}

/// Inspection log, most recent first
pub fn inspection_history() -> Vec<InspectionRecord> {
    let record = |battery_id: &str, kind, at: &str, inspector: &str, condition: &str, notes: &str, verdict| {
        InspectionRecord {
            battery_id: battery_id.to_string(),
            kind,
            inspected_at: at.to_string(),
            inspector: inspector.to_string(),
            physical_condition: condition.to_string(),
            notes: notes.to_string(),
            verdict,
        }
    };
    let [a, b] = INSPECTORS;

    use BatteryKind::{Lfp, LithiumIon};
    use InspectionVerdict::{Maintenance, Passed};

    vec![
        record("BAT001", LithiumIon, "14/12/2024 10:30", a, "Good", "Normal condition", Passed),
        record("BAT003", Lfp, "14/12/2024 09:15", b, "Slight corrosion", "Keep monitoring", Maintenance),
        record("BAT007", LithiumIon, "13/12/2024 16:45", a, "Good", "Stable operation", Passed),
        record("BAT010", Lfp, "13/12/2024 14:20", b, "Good", "Good condition", Passed),
        record("BAT012", LithiumIon, "13/12/2024 11:30", a, "Light scratches", "Scratches do not affect operation", Passed),
        record("BAT008", Lfp, "12/12/2024 15:45", b, "Severe damage", "Swollen cell, replace", Maintenance),
        record("BAT015", LithiumIon, "12/12/2024 13:10", a, "Good", "Normal operation", Passed),
        record("BAT002", Lfp, "12/12/2024 09:30", b, "Good", "Good condition", Passed),
        record("BAT006", LithiumIon, "11/12/2024 16:20", a, "Corrosion", "Schedule periodic maintenance", Maintenance),
        record("BAT011", Lfp, "11/12/2024 14:15", b, "Good", "Stable operation", Passed),
    ]
}

pub fn station_reports() -> Vec<StationReport> {
    let report = |id, name: &str, address: &str, revenue_vnd, transactions, batteries, efficiency, popularity| {
        StationReport {
            id: StationId(id),
            name: name.to_string(),
            address: address.to_string(),
            revenue_vnd,
            transactions,
            batteries,
            efficiency,
            popularity,
        }
    };

    vec![
        report(1, "Trạm Quận 1", "123 Nguyễn Huệ, Quận 1", 850_000, 89, 45, 96, 9.2),
        report(2, "Trạm Bình Thạnh", "789 Xô Viết Nghệ Tĩnh, Bình Thạnh", 720_000, 76, 38, 94, 8.8),
        report(3, "Trạm Quận 3", "456 Lê Văn Sỹ, Quận 3", 680_000, 64, 42, 92, 8.1),
    ]
}

/// Transactions of the past week at a station
pub fn weekly_transactions(_station: StationId) -> Vec<SwapTransaction> {
    let txn = |id: &str, customer: &str, vehicle: &str, kind, at: &str, duration_secs, amount_vnd, status, channel: &str| {
        SwapTransaction {
            id: id.to_string(),
            customer: customer.to_string(),
            vehicle: vehicle.to_string(),
            kind,
            swapped_at: at.to_string(),
            duration_secs,
            amount_vnd,
            status,
            channel: channel.to_string(),
        }
    };

    use BatteryKind::{Lfp, LithiumIon};
    use TransactionStatus::{Completed, Processing};

    vec![
        txn("TXN001", "Nguyễn Văn A", "VinFast VF8", LithiumIon, "15/01/2024 14:30", 225, 120_000, Completed, "Credit card"),
        txn("TXN002", "Trần Thị B", "VinFast VF9", Lfp, "15/01/2024 16:15", 252, 110_000, Completed, "E-wallet"),
        txn("TXN003", "Lê Văn C", "VinFast VF6", LithiumIon, "16/01/2024 09:20", 208, 115_000, Completed, "Bank transfer"),
        txn("TXN004", "Phạm Thị D", "VinFast VF8", LithiumIon, "16/01/2024 11:45", 176, 120_000, Completed, "Credit card"),
        txn("TXN005", "Hoàng Văn E", "VinFast VF9", Lfp, "17/01/2024 08:30", 245, 110_000, Processing, "E-wallet"),
    ]
}

pub fn kpis() -> Kpis {
    Kpis {
        total_revenue_vnd: 2_850_000,
        total_transactions: 245,
        active_users: 1_248,
        customer_satisfaction: 94,
        system_uptime: 99.2,
        battery_utilization: 87,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_station_lookup() {
        assert_eq!(station(StationId(2)).unwrap().name, "Trạm Quận 3 Express");
        assert!(station(StationId(42)).is_none());
    }

    #[test]
    fn test_only_deposits_are_cancellable() {
        for booking in bookings() {
            assert_eq!(booking.can_cancel, booking.method == BookingMethod::Deposit);
        }
    }

    #[test]
    fn test_inspector_names_match_history() {
        assert!(inspection_history()
            .iter()
            .all(|record| INSPECTORS.contains(&record.inspector.as_str())));
    }
}
