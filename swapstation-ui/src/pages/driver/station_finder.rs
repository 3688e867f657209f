//! Station finder
//!
//! Lists nearby swap stations with their per-kind stock. Distance and
//! stock filters narrow the list; "Book" opens the station on the
//! reservation page.

use leptos::*;
use leptos_router::*;
use swapstation_common::catalog;
use swapstation_common::filters::FinderQuery;
use swapstation_common::{BatteryKind, Station};

use crate::error::EmptyState;
use crate::state::use_app_state;
use crate::utils::{parse_filter, ALL_OPTION};

#[component]
pub fn StationFinder() -> impl IntoView {
    let state = use_app_state();
    let navigate = use_navigate();
    let stations = store_value(catalog::stations());

    let (location, set_location) = create_signal(String::new());
    let (max_distance, set_max_distance) = create_signal(None::<f64>);
    let (min_full, set_min_full) = create_signal(None::<u32>);

    let filtered = move || {
        let query = FinderQuery {
            max_distance_km: max_distance.get(),
            min_full: min_full.get(),
        };
        stations.with_value(|stations| query.apply(stations).into_iter().cloned().collect::<Vec<_>>())
    };

    let book = move |station: &Station| {
        let id = station.id;
        state.reservations.update(|book| book.open(id));
        navigate("/driver/reservation", Default::default());
    };
    let book = store_value(book);

    view! {
        <div class="station-finder-page">
            <div class="page-header">
                <h1>"Find a Station"</h1>
                <p class="description">"Swap stations near you with batteries ready to go"</p>
            </div>

            <div class="filter-bar">
                <input
                    type="text"
                    class="search-input"
                    placeholder="Your current location"
                    prop:value=location
                    on:input=move |ev| set_location.set(event_target_value(&ev))
                />
                <select on:change=move |ev| {
                    set_max_distance.set(parse_filter(&event_target_value(&ev), |v| v.parse().ok()))
                }>
                    <option value=ALL_OPTION>"Any distance"</option>
                    <option value="1">"Within 1 km"</option>
                    <option value="5">"Within 5 km"</option>
                    <option value="10">"Within 10 km"</option>
                </select>
                <select on:change=move |ev| {
                    set_min_full.set(parse_filter(&event_target_value(&ev), |v| v.parse().ok()))
                }>
                    <option value=ALL_OPTION>"Any stock"</option>
                    <option value="5">"More than 5 full"</option>
                    <option value="10">"More than 10 full"</option>
                    <option value="15">"More than 15 full"</option>
                </select>
            </div>

            <div class="map-placeholder">
                <span>"🗺️"</span>
                <p>
                    {move || {
                        let here = location.get();
                        if here.trim().is_empty() {
                            "Showing stations around you".to_string()
                        } else {
                            format!("Showing stations around {}", here.trim())
                        }
                    }}
                </p>
            </div>

            <div class="station-list">
                {move || {
                    let stations = filtered();
                    if stations.is_empty() {
                        return view! {
                            <EmptyState
                                icon="🔌"
                                title="No stations match"
                                description="Try a larger distance or a lower stock filter"
                            />
                        }
                        .into_view();
                    }

                    stations
                        .into_iter()
                        .map(|station| {
                            let ratio = station.full_ratio();
                            let for_booking = station.clone();
                            view! {
                                <div class="station-card">
                                    <div class="station-header">
                                        <div>
                                            <h3>{station.name.clone()}</h3>
                                            <p class="station-address">{station.address.clone()}</p>
                                        </div>
                                        <span class={if station.open { "status-badge status-ok" } else { "status-badge status-error" }}>
                                            {if station.open { "Open" } else { "Closed" }}
                                        </span>
                                    </div>

                                    <div class="station-meta">
                                        <span>{format!("📍 {:.1} km", station.distance_km)}</span>
                                        <span>{format!("⏱️ {} min", station.eta_minutes)}</span>
                                        <span>{format!("⭐ {:.1}", station.rating)}</span>
                                    </div>

                                    <div class="stock-grid">
                                        {BatteryKind::ALL
                                            .iter()
                                            .map(|kind| {
                                                let counts = station.stock_for(*kind);
                                                view! {
                                                    <div class="stock-cell">
                                                        <span class="stock-kind">{kind.label()}</span>
                                                        <span class="stock-full">{format!("{} full", counts.full)}</span>
                                                        <span class="stock-charging">{format!("{} charging", counts.charging)}</span>
                                                        <span class="stock-empty">{format!("{} empty", counts.empty)}</span>
                                                    </div>
                                                }
                                            })
                                            .collect_view()}
                                    </div>

                                    <div class="ratio-bar" title={format!("{:.0}% full", ratio)}>
                                        <div class="ratio-fill" style={format!("width: {:.0}%", ratio)}></div>
                                    </div>
                                    <p class="ratio-label">
                                        {format!("{}/{} batteries ready", station.total_full(), station.total_batteries())}
                                    </p>

                                    <div class="amenities">
                                        {station
                                            .amenities
                                            .iter()
                                            .map(|a| view! { <span class="amenity">{a.clone()}</span> })
                                            .collect_view()}
                                    </div>

                                    <button
                                        class="btn btn-primary"
                                        on:click=move |_| book.with_value(|book| book(&for_booking))
                                    >
                                        "Book"
                                    </button>
                                </div>
                            }
                        })
                        .collect_view()
                }}
            </div>
        </div>
    }
}
