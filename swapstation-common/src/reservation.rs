//! Multi-station reservation book
//!
//! A driver can open several stations' scheduling panels one at a time
//! and pick a date and a time slot for each. Picks are merged into one
//! entry per station. Only entries with both a date and a slot count
//! toward the total.

use std::collections::BTreeMap;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::{Error, Result, StationId};

/// Bookable half-hour slot
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeSlot {
    hour: u8,
    minute: u8,
}

impl TimeSlot {
    /// Morning and afternoon swap windows, in display order
    pub const ALL: [TimeSlot; 18] = [
        TimeSlot::at(8, 0),
        TimeSlot::at(8, 30),
        TimeSlot::at(9, 0),
        TimeSlot::at(9, 30),
        TimeSlot::at(10, 0),
        TimeSlot::at(10, 30),
        TimeSlot::at(11, 0),
        TimeSlot::at(11, 30),
        TimeSlot::at(14, 0),
        TimeSlot::at(14, 30),
        TimeSlot::at(15, 0),
        TimeSlot::at(15, 30),
        TimeSlot::at(16, 0),
        TimeSlot::at(16, 30),
        TimeSlot::at(17, 0),
        TimeSlot::at(17, 30),
        TimeSlot::at(18, 0),
        TimeSlot::at(18, 30),
    ];

    const fn at(hour: u8, minute: u8) -> Self {
        Self { hour, minute }
    }

    pub fn hour(&self) -> u8 {
        self.hour
    }

    pub fn minute(&self) -> u8 {
        self.minute
    }
}

impl std::fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

impl FromStr for TimeSlot {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        TimeSlot::ALL
            .iter()
            .find(|slot| slot.to_string() == s)
            .copied()
            .ok_or_else(|| Error::InvalidTimeSlot(s.to_string()))
    }
}

/// Parse an ISO `YYYY-MM-DD` date from a date input, refusing days before `today`
pub fn parse_booking_date(value: &str, today: NaiveDate) -> Result<NaiveDate> {
    let date = NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")
        .map_err(|_| Error::InvalidDate(value.to_string()))?;
    if date < today {
        return Err(Error::PastDate(date));
    }
    Ok(date)
}

/// Fields to overwrite on a station's entry; `None` leaves a field alone
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SlotPatch {
    pub date: Option<NaiveDate>,
    pub time: Option<TimeSlot>,
}

impl SlotPatch {
    pub fn date(date: NaiveDate) -> Self {
        Self { date: Some(date), time: None }
    }

    pub fn time(time: TimeSlot) -> Self {
        Self { date: None, time: Some(time) }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct ReservationEntry {
    pub station_id: StationId,
    pub date: Option<NaiveDate>,
    pub time: Option<TimeSlot>,
}

impl ReservationEntry {
    pub fn new(station_id: StationId) -> Self {
        Self { station_id, date: None, time: None }
    }

    pub fn is_complete(&self) -> bool {
        self.date.is_some() && self.time.is_some()
    }

    /// Copy of this entry with the patch's provided fields applied
    pub fn merged(&self, patch: SlotPatch) -> Self {
        Self {
            station_id: self.station_id,
            date: patch.date.or(self.date),
            time: patch.time.or(self.time),
        }
    }
}

/// Per-station date/slot picks for the current session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReservationBook {
    fee_vnd: u64,
    active: Option<StationId>,
    entries: BTreeMap<StationId, ReservationEntry>,
}

impl ReservationBook {
    pub fn new(fee_vnd: u64) -> Self {
        Self {
            fee_vnd,
            active: None,
            entries: BTreeMap::new(),
        }
    }

    pub fn fee_vnd(&self) -> u64 {
        self.fee_vnd
    }

    /// Station whose scheduling panel is expanded
    pub fn active(&self) -> Option<StationId> {
        self.active
    }

    pub fn is_active(&self, station_id: StationId) -> bool {
        self.active == Some(station_id)
    }

    /// Expand `station_id`'s panel, or collapse it if it is already open.
    ///
    /// Stored picks of every station are kept either way.
    pub fn toggle_active(&mut self, station_id: StationId) {
        self.active = if self.is_active(station_id) {
            None
        } else {
            Some(station_id)
        };
        tracing::debug!(station = %station_id, active = ?self.active, "scheduling panel toggled");
    }

    /// Open `station_id`'s panel without toggling
    pub fn open(&mut self, station_id: StationId) {
        self.active = Some(station_id);
    }

    /// Merge a pick into the station's entry, creating it on first use
    pub fn update(&mut self, station_id: StationId, patch: SlotPatch) -> ReservationEntry {
        let merged = self
            .entries
            .get(&station_id)
            .copied()
            .unwrap_or_else(|| ReservationEntry::new(station_id))
            .merged(patch);
        self.entries.insert(station_id, merged);

        tracing::debug!(
            station = %station_id,
            date = ?merged.date,
            time = ?merged.time.map(|t| t.to_string()),
            complete = merged.is_complete(),
            "reservation updated"
        );
        merged
    }

    pub fn entry(&self, station_id: StationId) -> Option<&ReservationEntry> {
        self.entries.get(&station_id)
    }

    /// All entries ordered by station id
    pub fn entries(&self) -> impl Iterator<Item = &ReservationEntry> {
        self.entries.values()
    }

    pub fn complete_entries(&self) -> impl Iterator<Item = &ReservationEntry> {
        self.entries.values().filter(|entry| entry.is_complete())
    }

    pub fn complete_count(&self) -> usize {
        self.complete_entries().count()
    }

    pub fn total_cost(&self) -> u64 {
        (self.complete_count() as u64).saturating_mul(self.fee_vnd)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 12, d).unwrap()
    }

    #[test]
    fn test_slot_parse_and_display() {
        let slot: TimeSlot = "14:30".parse().unwrap();
        assert_eq!(slot.hour(), 14);
        assert_eq!(slot.minute(), 30);
        assert_eq!(slot.to_string(), "14:30");
        assert!(matches!("12:00".parse::<TimeSlot>(), Err(Error::InvalidTimeSlot(_))));
    }

    #[test]
    fn test_slot_list_is_ordered() {
        assert!(TimeSlot::ALL.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(TimeSlot::ALL.first().unwrap().to_string(), "08:00");
        assert_eq!(TimeSlot::ALL.last().unwrap().to_string(), "18:30");
    }

    #[test]
    fn test_parse_booking_date() {
        let today = day(15);
        assert_eq!(parse_booking_date("2024-12-15", today).unwrap(), today);
        assert_eq!(parse_booking_date("2024-12-20", today).unwrap(), day(20));
        assert!(matches!(parse_booking_date("2024-12-14", today), Err(Error::PastDate(_))));
        assert!(matches!(parse_booking_date("15/12/2024", today), Err(Error::InvalidDate(_))));
    }

    #[test]
    fn test_update_creates_entry() {
        let mut book = ReservationBook::new(150_000);
        let entry = book.update(StationId(1), SlotPatch::date(day(20)));
        assert_eq!(entry.date, Some(day(20)));
        assert_eq!(entry.time, None);
        assert!(!entry.is_complete());
        assert_eq!(book.len(), 1);
    }

    #[test]
    fn test_update_keeps_other_field() {
        let mut book = ReservationBook::new(150_000);
        let slot = TimeSlot::ALL[3];
        book.update(StationId(1), SlotPatch::date(day(20)));
        book.update(StationId(1), SlotPatch::time(slot));
        book.update(StationId(1), SlotPatch::default());

        let entry = book.entry(StationId(1)).unwrap();
        assert_eq!(entry.date, Some(day(20)));
        assert_eq!(entry.time, Some(slot));
    }

    #[test]
    fn test_toggle_active() {
        let mut book = ReservationBook::new(150_000);
        book.toggle_active(StationId(1));
        assert!(book.is_active(StationId(1)));

        book.update(StationId(1), SlotPatch::date(day(20)));
        book.toggle_active(StationId(2));
        assert_eq!(book.active(), Some(StationId(2)));
        assert!(book.entry(StationId(1)).is_some());

        book.toggle_active(StationId(2));
        assert_eq!(book.active(), None);
    }

    #[test]
    fn test_open_never_collapses() {
        let mut book = ReservationBook::new(150_000);
        book.update(StationId(1), SlotPatch { date: Some(day(20)), time: Some(TimeSlot::ALL[2]) });
        let stored = *book.entry(StationId(1)).unwrap();

        book.open(StationId(3));
        assert_eq!(book.active(), Some(StationId(3)));
        book.open(StationId(3));
        assert_eq!(book.active(), Some(StationId(3)));

        book.open(StationId(1));
        assert!(book.is_active(StationId(1)));
        assert_eq!(book.entry(StationId(1)), Some(&stored));
        assert!(book.entry(StationId(3)).is_none());
        assert_eq!(book.len(), 1);
    }

    #[test]
    fn test_total_counts_complete_entries_only() {
        let mut book = ReservationBook::new(150_000);
        book.update(StationId(1), SlotPatch { date: Some(day(20)), time: Some(TimeSlot::ALL[0]) });
        book.update(StationId(2), SlotPatch::date(day(21)));
        book.update(StationId(3), SlotPatch::time(TimeSlot::ALL[5]));

        assert_eq!(book.complete_count(), 1);
        assert_eq!(book.total_cost(), 150_000);
        assert_eq!(book.entries().count(), 3);
    }
}
