//! Admin dashboard

use leptos::*;
use leptos_router::*;
use swapstation_common::catalog;
use swapstation_common::format::{format_compact, format_vnd};

use crate::components::StatCard;

#[component]
pub fn AdminDashboard() -> impl IntoView {
    let kpis = catalog::kpis();
    let stations = catalog::station_reports();

    view! {
        <div class="admin-dashboard-page">
            <div class="page-header">
                <h1>"Network Overview"</h1>
                <p class="description">"Key figures across all swap stations"</p>
            </div>

            <div class="stats-grid">
                <StatCard
                    label="Revenue"
                    icon="💰"
                    value={format!("{} VNĐ", format_compact(kpis.total_revenue_vnd))}
                    hint={format!("avg {} per swap", format_vnd(kpis.average_transaction_vnd()))}
                />
                <StatCard label="Transactions" icon="🔄" value=kpis.total_transactions.to_string()/>
                <StatCard label="Active users" icon="👥" value=format_compact(kpis.active_users as u64)/>
                <StatCard label="Satisfaction" icon="⭐" value={format!("{}%", kpis.customer_satisfaction)}/>
                <StatCard label="Uptime" icon="🟢" value={format!("{:.1}%", kpis.system_uptime)}/>
                <StatCard label="Battery utilization" icon="🔋" value={format!("{}%", kpis.battery_utilization)}/>
            </div>

            <div class="dashboard-grid">
                <section class="card">
                    <h2>"Top stations"</h2>
                    {stations
                        .into_iter()
                        .map(|station| view! {
                            <div class="summary-row">
                                <span>{station.name}</span>
                                <span class="muted">{format!("{} swaps", station.transactions)}</span>
                                <strong>{format_vnd(station.revenue_vnd)}</strong>
                            </div>
                        })
                        .collect_view()}
                </section>

                <section class="card quick-links">
                    <h2>"Quick links"</h2>
                    <A href="/admin/reports" class="btn btn-secondary">"📈 Reports"</A>
                    <A href="/staff/inventory" class="btn btn-secondary">"🔋 Battery inventory"</A>
                    <A href="/staff/inspection" class="btn btn-secondary">"🔍 Battery inspection"</A>
                </section>
            </div>
        </div>
    }
}
