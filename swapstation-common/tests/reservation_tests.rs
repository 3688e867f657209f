//! Reservation Book Tests
//! Merge, completion and pricing of multi-station reservations

use chrono::NaiveDate;
use swapstation_common::checkout::{PaymentPlan, Quote};
use swapstation_common::config::AppConfig;
use swapstation_common::reservation::{ReservationBook, SlotPatch, TimeSlot};
use swapstation_common::StationId;

const FEE: u64 = 150_000;

fn date(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 3, day).unwrap()
}

fn slot(s: &str) -> TimeSlot {
    s.parse().unwrap()
}

// ============== Merge Tests ==============

#[test]
fn test_date_then_time_yields_single_entry() {
    let mut book = ReservationBook::new(FEE);
    book.update(StationId(1), SlotPatch::date(date(10)));
    book.update(StationId(1), SlotPatch::time(slot("09:30")));

    assert_eq!(book.len(), 1);
    let entry = book.entry(StationId(1)).unwrap();
    assert_eq!(entry.station_id, StationId(1));
    assert_eq!(entry.date, Some(date(10)));
    assert_eq!(entry.time, Some(slot("09:30")));
    assert!(entry.is_complete());
}

#[test]
fn test_merge_order_is_commutative() {
    let mut a = ReservationBook::new(FEE);
    a.update(StationId(2), SlotPatch::date(date(11)));
    a.update(StationId(2), SlotPatch::time(slot("16:00")));

    let mut b = ReservationBook::new(FEE);
    b.update(StationId(2), SlotPatch::time(slot("16:00")));
    b.update(StationId(2), SlotPatch::date(date(11)));

    assert_eq!(a.entry(StationId(2)), b.entry(StationId(2)));
}

#[test]
fn test_repeated_date_is_idempotent() {
    let mut book = ReservationBook::new(FEE);
    book.update(StationId(1), SlotPatch::date(date(12)));
    let once = book.clone();
    book.update(StationId(1), SlotPatch::date(date(12)));
    assert_eq!(book, once);
}

#[test]
fn test_rechoosing_overwrites_only_that_field() {
    let mut book = ReservationBook::new(FEE);
    book.update(StationId(1), SlotPatch::date(date(12)));
    book.update(StationId(1), SlotPatch::time(slot("08:00")));
    book.update(StationId(1), SlotPatch::time(slot("18:30")));

    let entry = book.entry(StationId(1)).unwrap();
    assert_eq!(entry.date, Some(date(12)));
    assert_eq!(entry.time, Some(slot("18:30")));
}

// ============== Completion Tests ==============

#[test]
fn test_only_complete_entries_are_charged() {
    let mut book = ReservationBook::new(FEE);
    book.update(StationId(1), SlotPatch { date: Some(date(1)), time: Some(slot("10:00")) });
    book.update(StationId(2), SlotPatch::date(date(2)));

    assert_eq!(book.complete_count(), 1);
    assert_eq!(book.total_cost(), FEE);

    book.update(StationId(2), SlotPatch::time(slot("14:00")));
    assert_eq!(book.total_cost(), 2 * FEE);
}

#[test]
fn test_switching_panels_keeps_selections() {
    let mut book = ReservationBook::new(FEE);
    for id in 1..=3 {
        book.toggle_active(StationId(id));
        book.update(StationId(id), SlotPatch::date(date(id)));
    }

    assert_eq!(book.active(), Some(StationId(3)));
    assert_eq!(book.len(), 3);
    assert!(book.entries().all(|e| e.date.is_some() && e.time.is_none()));
    assert_eq!(book.total_cost(), 0);
}

// ============== Checkout Tests ==============

#[test]
fn test_quote_uses_configured_prices() {
    let config = AppConfig::from_toml_str("[pricing]\nswap_fee_vnd = 120000\ndeposit_vnd = 40000").unwrap();
    let mut book = ReservationBook::new(config.pricing.swap_fee_vnd);
    book.update(StationId(1), SlotPatch { date: Some(date(5)), time: Some(slot("11:30")) });

    let full = Quote::new(&book, PaymentPlan::Full, &config.pricing);
    assert_eq!(full.total_vnd, 120_000);

    let deposit = Quote::new(&book, PaymentPlan::Deposit, &config.pricing);
    assert_eq!(deposit.total_vnd, 40_000);
    assert!(deposit.is_payable());
}
