//! Page Filter Tests
//! Search/filter predicates over the sample catalog

use swapstation_common::catalog;
use swapstation_common::filters::{
    BookingQuery, BookingSummary, FinderQuery, InventoryQuery, ReportQuery, StatusCounts,
};
use swapstation_common::{BatteryStatus, BookingMethod, BookingStatus, StationId};

#[test]
fn test_empty_queries_match_everything() {
    let bookings = catalog::bookings();
    let batteries = catalog::batteries();
    let reports = catalog::station_reports();
    let stations = catalog::stations();

    assert_eq!(BookingQuery::default().apply(&bookings).len(), bookings.len());
    assert_eq!(InventoryQuery::default().apply(&batteries).len(), batteries.len());
    assert_eq!(ReportQuery::default().apply(&reports).len(), reports.len());
    assert_eq!(FinderQuery::default().apply(&stations).len(), stations.len());
}

#[test]
fn test_search_ignores_case_and_padding() {
    let bookings = catalog::bookings();
    let query = BookingQuery {
        search: "  vinfast vf6 ".to_string(),
        ..Default::default()
    };
    let found = query.apply(&bookings);
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].id, "BK003");
}

#[test]
fn test_summary_follows_filtered_list() {
    let bookings = catalog::bookings();
    let paid = BookingQuery {
        status: Some(BookingStatus::Paid),
        ..Default::default()
    };
    let summary = BookingSummary::of(paid.apply(&bookings));
    assert_eq!(summary, BookingSummary { total: 2, completed: 2, pending: 0 });

    let deposits = BookingQuery {
        method: Some(BookingMethod::Deposit),
        ..Default::default()
    };
    let summary = BookingSummary::of(deposits.apply(&bookings));
    assert_eq!(summary.pending, 1);
}

#[test]
fn test_inventory_search_by_id_with_status() {
    let batteries = catalog::batteries();
    let query = InventoryQuery {
        search: "bat00".to_string(),
        status: Some(BatteryStatus::Full),
    };
    let ids: Vec<&str> = query.apply(&batteries).iter().map(|b| b.id.as_str()).collect();
    assert_eq!(ids, ["BAT001", "BAT004"]);

    let counts = StatusCounts::of(query.apply(&batteries));
    assert_eq!(counts.full, 2);
    assert_eq!(counts.total(), 2);
}

#[test]
fn test_report_search_and_station_conflict() {
    let reports = catalog::station_reports();
    let query = ReportQuery {
        search: "quận 1".to_string(),
        station: Some(StationId(2)),
    };
    assert!(query.apply(&reports).is_empty());
}

#[test]
fn test_finder_combined() {
    let stations = catalog::stations();
    let query = FinderQuery {
        max_distance_km: Some(5.0),
        min_full: Some(5),
    };
    let found = query.apply(&stations);
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].id, StationId(1));
}
