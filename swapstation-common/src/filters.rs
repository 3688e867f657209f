//! Search and filter predicates for the list pages
//!
//! Each query is a plain value built from the page's inputs; `None`
//! stands for the "all" option of a select. Text search is a
//! case-insensitive substring match and all criteria are conjunctive.

use crate::{
    Battery, BatteryStatus, Booking, BookingMethod, BookingStatus, InspectionRecord, Station,
    StationId, StationReport,
};

fn contains_ci(haystack: &str, needle_lower: &str) -> bool {
    needle_lower.is_empty() || haystack.to_lowercase().contains(needle_lower)
}

/// Booking history filter
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookingQuery {
    pub search: String,
    pub status: Option<BookingStatus>,
    pub method: Option<BookingMethod>,
}

impl BookingQuery {
    pub fn matches(&self, booking: &Booking) -> bool {
        let needle = self.search.trim().to_lowercase();
        let matches_search = contains_ci(&booking.id, &needle)
            || contains_ci(&booking.station, &needle)
            || contains_ci(&booking.vehicle, &needle);

        matches_search
            && self.status.map_or(true, |status| booking.status == status)
            && self.method.map_or(true, |method| booking.method == method)
    }

    pub fn apply<'a>(&self, bookings: &'a [Booking]) -> Vec<&'a Booking> {
        bookings.iter().filter(|b| self.matches(b)).collect()
    }
}

/// Counters shown above the booking list
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BookingSummary {
    pub total: usize,
    /// Bookings that can no longer be cancelled
    pub completed: usize,
    /// Bookings still holding a cancellable deposit
    pub pending: usize,
}

impl BookingSummary {
    pub fn of<'a>(bookings: impl IntoIterator<Item = &'a Booking>) -> Self {
        bookings.into_iter().fold(Self::default(), |mut acc, booking| {
            acc.total += 1;
            if booking.can_cancel {
                acc.pending += 1;
            } else {
                acc.completed += 1;
            }
            acc
        })
    }
}

/// Staff battery inventory filter
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InventoryQuery {
    pub search: String,
    pub status: Option<BatteryStatus>,
}

impl InventoryQuery {
    pub fn matches(&self, battery: &Battery) -> bool {
        let needle = self.search.trim().to_lowercase();
        (contains_ci(&battery.id, &needle) || contains_ci(battery.kind.label(), &needle))
            && self.status.map_or(true, |status| battery.status == status)
    }

    pub fn apply<'a>(&self, batteries: &'a [Battery]) -> Vec<&'a Battery> {
        batteries.iter().filter(|b| self.matches(b)).collect()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatusCounts {
    pub full: usize,
    pub charging: usize,
    pub maintenance: usize,
}

impl StatusCounts {
    pub fn of<'a>(batteries: impl IntoIterator<Item = &'a Battery>) -> Self {
        batteries.into_iter().fold(Self::default(), |mut acc, battery| {
            match battery.status {
                BatteryStatus::Full => acc.full += 1,
                BatteryStatus::Charging => acc.charging += 1,
                BatteryStatus::Maintenance => acc.maintenance += 1,
            }
            acc
        })
    }

    pub fn total(&self) -> usize {
        self.full + self.charging + self.maintenance
    }
}

/// Admin report filter over station performance rows
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReportQuery {
    pub search: String,
    pub station: Option<StationId>,
}

impl ReportQuery {
    pub fn matches(&self, report: &StationReport) -> bool {
        let needle = self.search.trim().to_lowercase();
        (contains_ci(&report.name, &needle) || contains_ci(&report.address, &needle))
            && self.station.map_or(true, |id| report.id == id)
    }

    pub fn apply<'a>(&self, reports: &'a [StationReport]) -> Vec<&'a StationReport> {
        reports.iter().filter(|r| self.matches(r)).collect()
    }
}

/// Driver station finder filter
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FinderQuery {
    pub max_distance_km: Option<f64>,
    /// Stations must hold strictly more full batteries than this
    pub min_full: Option<u32>,
}

impl FinderQuery {
    pub fn matches(&self, station: &Station) -> bool {
        self.max_distance_km.map_or(true, |max| station.distance_km <= max)
            && self.min_full.map_or(true, |min| station.total_full() > min)
    }

    pub fn apply<'a>(&self, stations: &'a [Station]) -> Vec<&'a Station> {
        stations.iter().filter(|s| self.matches(s)).collect()
    }
}

/// Number of history rows shown while the list is collapsed
pub const RECENT_INSPECTIONS: usize = 3;

/// Inspection history as displayed: most recent first, truncated unless expanded
pub fn displayed_inspections(history: &[InspectionRecord], show_all: bool) -> &[InspectionRecord] {
    if show_all {
        history
    } else {
        &history[..history.len().min(RECENT_INSPECTIONS)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;

    #[test]
    fn test_booking_search_fields() {
        let bookings = catalog::bookings();

        let by_id = BookingQuery { search: "bk00".to_string(), ..Default::default() };
        assert_eq!(by_id.apply(&bookings).len(), bookings.len());

        let by_vehicle = BookingQuery { search: "VF9".to_string(), ..Default::default() };
        assert_eq!(by_vehicle.apply(&bookings).len(), 1);

        let by_station = BookingQuery { search: "quận 7".to_string(), ..Default::default() };
        let found = by_station.apply(&bookings);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, "BK004");
    }

    #[test]
    fn test_booking_filters_are_conjunctive() {
        let bookings = catalog::bookings();
        let query = BookingQuery {
            search: "VF8".to_string(),
            status: Some(BookingStatus::Completed),
            method: Some(BookingMethod::FullPayment),
        };
        let found = query.apply(&bookings);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, "BK001");

        let none = BookingQuery {
            search: String::new(),
            status: Some(BookingStatus::Deposited),
            method: Some(BookingMethod::FullPayment),
        };
        assert!(none.apply(&bookings).is_empty());
    }

    #[test]
    fn test_booking_summary() {
        let bookings = catalog::bookings();
        let summary = BookingSummary::of(&bookings);
        assert_eq!(summary.total, 4);
        assert_eq!(summary.pending, 1);
        assert_eq!(summary.completed, 3);
    }

    #[test]
    fn test_inventory_search_by_kind() {
        let batteries = catalog::batteries();
        let query = InventoryQuery { search: "lfp".to_string(), status: None };
        assert!(query.apply(&batteries).iter().all(|b| b.kind == crate::BatteryKind::Lfp));

        let charging = InventoryQuery { search: String::new(), status: Some(BatteryStatus::Charging) };
        assert_eq!(charging.apply(&batteries).len(), 2);
    }

    #[test]
    fn test_status_counts() {
        let counts = StatusCounts::of(&catalog::batteries());
        assert_eq!(counts, StatusCounts { full: 2, charging: 2, maintenance: 1 });
        assert_eq!(counts.total(), 5);
    }

    #[test]
    fn test_report_query() {
        let reports = catalog::station_reports();
        let by_address = ReportQuery { search: "bình thạnh".to_string(), station: None };
        assert_eq!(by_address.apply(&reports).len(), 1);

        let by_id = ReportQuery { search: String::new(), station: Some(StationId(3)) };
        assert_eq!(by_id.apply(&reports)[0].name, "Trạm Quận 3");
    }

    #[test]
    fn test_finder_query() {
        let stations = catalog::stations();
        let near = FinderQuery { max_distance_km: Some(5.0), min_full: None };
        assert_eq!(near.apply(&stations).len(), 2);

        let stocked = FinderQuery { max_distance_km: None, min_full: Some(10) };
        let found = stocked.apply(&stations);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, StationId(3));

        // strictly more than
        let boundary = FinderQuery { max_distance_km: None, min_full: Some(8) };
        assert!(boundary.apply(&stations).iter().all(|s| s.total_full() > 8));
    }

    #[test]
    fn test_displayed_inspections() {
        let history = catalog::inspection_history();
        assert_eq!(displayed_inspections(&history, false).len(), RECENT_INSPECTIONS);
        assert_eq!(displayed_inspections(&history, true).len(), history.len());
        assert!(displayed_inspections(&[], false).is_empty());
    }
}
