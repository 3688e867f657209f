//! Multi-station reservation
//!
//! Each station has a collapsible scheduling panel. Picks are merged into
//! the app-level reservation book, so switching panels never loses a
//! choice and the payment page sees the same book.

use leptos::*;
use leptos_router::*;
use swapstation_common::catalog;
use swapstation_common::format::{format_date, format_vnd};
use swapstation_common::reservation::{parse_booking_date, SlotPatch, TimeSlot};
use swapstation_common::{Station, StationId};

use crate::error::{use_toaster, Notice};
use crate::state::use_app_state;
use crate::utils::today;

#[component]
pub fn Reservation() -> impl IntoView {
    let state = use_app_state();
    let toaster = use_toaster();
    let navigate = use_navigate();
    let book = state.reservations;
    let stations = catalog::stations();
    let min_date = today().format("%Y-%m-%d").to_string();

    let set_date = move |station_id: StationId, value: String| {
        match parse_booking_date(&value, today()) {
            Ok(date) => {
                book.update(|book| {
                    book.update(station_id, SlotPatch::date(date));
                });
            }
            Err(e) => toaster.push(Notice::from_error("Invalid date", &e)),
        }
    };

    let set_time = move |station_id: StationId, slot: TimeSlot| {
        book.update(|book| {
            book.update(station_id, SlotPatch::time(slot));
        });
    };

    let total = move || book.with(|book| book.total_cost());
    let can_proceed = move || book.with(|book| book.complete_count() > 0);

    view! {
        <div class="reservation-page">
            <div class="page-header">
                <h1>"Reserve a Swap"</h1>
                <p class="description">"Pick a date and time at one or more stations"</p>
            </div>

            <div class="reservation-layout">
                <div class="station-panels">
                    {stations
                        .into_iter()
                        .map(|station| {
                            let id = station.id;
                            view! {
                                <StationPanel
                                    station=station
                                    min_date=min_date.clone()
                                    on_date=Callback::new(move |value: String| set_date(id, value))
                                    on_time=Callback::new(move |slot: TimeSlot| set_time(id, slot))
                                />
                            }
                        })
                        .collect_view()}
                </div>

                <aside class="reservation-summary">
                    <h2>"Summary"</h2>
                    {move || {
                        let entries: Vec<_> = book.with(|book| book.entries().copied().collect());
                        if entries.is_empty() {
                            return view! { <p class="muted">"No station selected yet"</p> }.into_view();
                        }
                        entries
                            .into_iter()
                            .map(|entry| {
                                let name = catalog::station(entry.station_id)
                                    .map(|s| s.name)
                                    .unwrap_or_else(|| format!("Station {}", entry.station_id));
                                let date = entry.date.map(format_date).unwrap_or_else(|| "No date".to_string());
                                let time = entry.time.map(|t| t.to_string()).unwrap_or_else(|| "No time".to_string());
                                view! {
                                    <div class={if entry.is_complete() { "summary-row complete" } else { "summary-row incomplete" }}>
                                        <span class="summary-station">{name}</span>
                                        <span class="summary-when">{format!("{} · {}", date, time)}</span>
                                        <span class="summary-state">
                                            {if entry.is_complete() { "✓ Ready" } else { "Incomplete" }}
                                        </span>
                                    </div>
                                }
                            })
                            .collect_view()
                    }}

                    <div class="summary-total">
                        <span>{move || format!("{} × {}", book.with(|b| b.complete_count()), format_vnd(book.with(|b| b.fee_vnd())))}</span>
                        <strong>{move || format_vnd(total())}</strong>
                    </div>

                    <button
                        class="btn btn-primary"
                        disabled=move || !can_proceed()
                        on:click=move |_| navigate("/driver/payment", Default::default())
                    >
                        "Proceed to payment"
                    </button>
                    <Show when=move || !can_proceed()>
                        <p class="muted">"Choose both a date and a time for at least one station"</p>
                    </Show>
                </aside>
            </div>
        </div>
    }
}

#[component]
fn StationPanel(
    station: Station,
    min_date: String,
    on_date: Callback<String>,
    on_time: Callback<TimeSlot>,
) -> impl IntoView {
    let book = use_app_state().reservations;
    let id = station.id;
    let is_open = move || book.with(|book| book.is_active(id));
    let entry = move || book.with(|book| book.entry(id).copied());

    view! {
        <div class="station-panel" class:open=is_open>
            <button class="station-panel-header" on:click=move |_| book.update(|book| book.toggle_active(id))>
                <div>
                    <h3>{station.name.clone()}</h3>
                    <p class="station-address">{station.address.clone()}</p>
                </div>
                <span class="station-panel-meta">
                    {format!("{} full · {:.1} km", station.total_full(), station.distance_km)}
                </span>
                <span class="chevron">{move || if is_open() { "▴" } else { "▾" }}</span>
            </button>

            <Show when=is_open>
                <div class="station-panel-body">
                    <div class="form-group">
                        <label>"Date"</label>
                        <input
                            type="date"
                            min=min_date.clone()
                            prop:value=move || {
                                entry().and_then(|e| e.date).map(|d| d.format("%Y-%m-%d").to_string()).unwrap_or_default()
                            }
                            on:change=move |ev| on_date.call(event_target_value(&ev))
                        />
                    </div>

                    <div class="form-group">
                        <label>"Time"</label>
                        <div class="slot-grid">
                            {TimeSlot::ALL
                                .iter()
                                .map(|slot| {
                                    let slot = *slot;
                                    let selected = move || entry().and_then(|e| e.time) == Some(slot);
                                    view! {
                                        <button
                                            class="slot"
                                            class:selected=selected
                                            on:click=move |_| on_time.call(slot)
                                        >
                                            {slot.to_string()}
                                        </button>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>
                </div>
            </Show>
        </div>
    }
}
