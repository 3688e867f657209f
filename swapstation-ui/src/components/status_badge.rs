//! Status badge component

use leptos::*;
use swapstation_common::{BatteryStatus, BookingStatus, InspectionVerdict, TransactionStatus};

pub fn booking_status_class(status: BookingStatus) -> &'static str {
    match status {
        BookingStatus::Deposited => "status-badge status-pending",
        BookingStatus::Paid => "status-badge status-info",
        BookingStatus::Completed => "status-badge status-ok",
    }
}

pub fn battery_status_class(status: BatteryStatus) -> &'static str {
    match status {
        BatteryStatus::Full => "status-badge status-ok",
        BatteryStatus::Charging => "status-badge status-info",
        BatteryStatus::Maintenance => "status-badge status-error",
    }
}

pub fn verdict_class(verdict: InspectionVerdict) -> &'static str {
    match verdict {
        InspectionVerdict::Passed => "status-badge status-ok",
        InspectionVerdict::Maintenance => "status-badge status-error",
    }
}

pub fn transaction_status_class(status: TransactionStatus) -> &'static str {
    match status {
        TransactionStatus::Completed => "status-badge status-ok",
        TransactionStatus::Processing => "status-badge status-pending",
    }
}

#[component]
pub fn StatusBadge(classes: &'static str, #[prop(into)] label: String) -> impl IntoView {
    view! { <span class=classes>{label}</span> }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_maintenance_is_flagged() {
        assert_eq!(battery_status_class(BatteryStatus::Maintenance), "status-badge status-error");
        assert_eq!(verdict_class(InspectionVerdict::Maintenance), "status-badge status-error");
    }

    #[test]
    fn test_open_deposit_is_pending() {
        assert_eq!(booking_status_class(BookingStatus::Deposited), "status-badge status-pending");
        assert_eq!(transaction_status_class(TransactionStatus::Processing), "status-badge status-pending");
    }
}
