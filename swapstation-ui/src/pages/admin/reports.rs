//! Station performance reports

use leptos::*;
use swapstation_common::catalog;
use swapstation_common::filters::ReportQuery;
use swapstation_common::format::{format_compact, format_duration, format_vnd};
use swapstation_common::{StationId, StationReport};

use crate::components::status_badge::transaction_status_class;
use crate::components::{StatCard, StatusBadge};
use crate::error::EmptyState;
use crate::utils::{parse_filter, ALL_OPTION};

#[component]
pub fn Reports() -> impl IntoView {
    let kpis = catalog::kpis();
    let reports = store_value(catalog::station_reports());

    let (search, set_search) = create_signal(String::new());
    let (station, set_station) = create_signal(None::<StationId>);
    let (opened, set_opened) = create_signal(None::<StationReport>);

    let filtered = move || {
        let query = ReportQuery {
            search: search.get(),
            station: station.get(),
        };
        reports.with_value(|reports| query.apply(reports).into_iter().cloned().collect::<Vec<_>>())
    };

    view! {
        <div class="reports-page">
            <div class="page-header">
                <h1>"Reports"</h1>
                <p class="description">"Revenue and activity per station"</p>
            </div>

            <div class="stats-grid">
                <StatCard label="Revenue" icon="💰" value={format!("{} VNĐ", format_compact(kpis.total_revenue_vnd))}/>
                <StatCard label="Transactions" icon="🔄" value=kpis.total_transactions.to_string()/>
                <StatCard label="Active users" icon="👥" value=format_compact(kpis.active_users as u64)/>
                <StatCard label="Satisfaction" icon="⭐" value={format!("{}%", kpis.customer_satisfaction)}/>
            </div>

            <div class="filter-bar">
                <input
                    type="text"
                    class="search-input"
                    placeholder="Search by station name or address"
                    prop:value=search
                    on:input=move |ev| set_search.set(event_target_value(&ev))
                />
                <select on:change=move |ev| {
                    set_station.set(parse_filter(&event_target_value(&ev), |v| v.parse().ok().map(StationId)))
                }>
                    <option value=ALL_OPTION>"All stations"</option>
                    {reports
                        .with_value(|reports| reports.iter().map(|r| (r.id, r.name.clone())).collect::<Vec<_>>())
                        .into_iter()
                        .map(|(id, name)| view! { <option value=id.to_string()>{name}</option> })
                        .collect_view()}
                </select>
            </div>

            <table class="data-table">
                <thead>
                    <tr>
                        <th>"Station"</th>
                        <th>"Revenue"</th>
                        <th>"Transactions"</th>
                        <th>"Batteries"</th>
                        <th>"Efficiency"</th>
                        <th>"Popularity"</th>
                        <th></th>
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        filtered()
                            .into_iter()
                            .map(|report| {
                                let target = report.clone();
                                view! {
                                    <tr>
                                        <td>
                                            <div>{report.name.clone()}</div>
                                            <div class="muted">{report.address.clone()}</div>
                                        </td>
                                        <td>{format_vnd(report.revenue_vnd)}</td>
                                        <td>{report.transactions}</td>
                                        <td>{report.batteries}</td>
                                        <td>{format!("{}%", report.efficiency)}</td>
                                        <td>{format!("{:.1}/10", report.popularity)}</td>
                                        <td>
                                            <button
                                                class="btn btn-ghost btn-sm"
                                                on:click=move |_| set_opened.set(Some(target.clone()))
                                            >
                                                "Weekly transactions"
                                            </button>
                                        </td>
                                    </tr>
                                }
                            })
                            .collect_view()
                    }}
                </tbody>
            </table>
            <Show when=move || filtered().is_empty()>
                <EmptyState icon="🔍" title="No stations found" description="Try a different search or station"/>
            </Show>

            {move || opened.get().map(|report| view! {
                <TransactionsDialog report=report on_close=Callback::new(move |_: ()| set_opened.set(None))/>
            })}
        </div>
    }
}

#[component]
fn TransactionsDialog(report: StationReport, on_close: Callback<()>) -> impl IntoView {
    let transactions = catalog::weekly_transactions(report.id);

    view! {
        <div class="modal-backdrop">
            <div class="modal modal-wide">
                <h2>{format!("{}: this week", report.name)}</h2>
                <table class="data-table">
                    <thead>
                        <tr>
                            <th>"ID"</th>
                            <th>"Customer"</th>
                            <th>"Vehicle"</th>
                            <th>"Battery"</th>
                            <th>"Time"</th>
                            <th>"Duration"</th>
                            <th>"Amount"</th>
                            <th>"Paid with"</th>
                            <th>"Status"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {transactions
                            .into_iter()
                            .map(|txn| view! {
                                <tr>
                                    <td class="mono">{txn.id}</td>
                                    <td>{txn.customer}</td>
                                    <td>{txn.vehicle}</td>
                                    <td>{txn.kind.label()}</td>
                                    <td class="muted">{txn.swapped_at}</td>
                                    <td>{format_duration(txn.duration_secs)}</td>
                                    <td>{format_vnd(txn.amount_vnd)}</td>
                                    <td>{txn.channel}</td>
                                    <td><StatusBadge classes=transaction_status_class(txn.status) label=txn.status.label()/></td>
                                </tr>
                            })
                            .collect_view()}
                    </tbody>
                </table>
                <div class="modal-actions">
                    <button class="btn btn-secondary" on:click=move |_| on_close.call(())>"Close"</button>
                </div>
            </div>
        </div>
    }
}
