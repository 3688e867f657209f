//! Battery inspection
//!
//! Returned batteries wait here until a staff member signs off an
//! inspection. A passed battery goes back to stock, anything else is sent
//! to maintenance; either way the record lands in the history.

use leptos::logging::log;
use leptos::*;
use swapstation_common::catalog::{self, INSPECTORS};
use swapstation_common::filters::{displayed_inspections, RECENT_INSPECTIONS};
use swapstation_common::forms::InspectionForm;
use swapstation_common::{InspectionVerdict, PendingInspection};

use crate::components::status_badge::verdict_class;
use crate::components::StatusBadge;
use crate::error::{use_toaster, EmptyState, Notice};
use crate::utils::now_label;

#[component]
pub fn BatteryInspection() -> impl IntoView {
    let toaster = use_toaster();
    let pending = create_rw_signal(catalog::pending_inspections());
    let history = create_rw_signal(catalog::inspection_history());

    let (selected, set_selected) = create_signal(None::<String>);
    let (form, set_form) = create_signal(InspectionForm::default());
    let (show_all, set_show_all) = create_signal(false);

    let selected_battery = move || {
        let id = selected.get()?;
        pending.with(|list| list.iter().find(|p| p.battery_id == id).cloned())
    };

    let record = move |verdict: InspectionVerdict| {
        let Some(battery) = selected_battery() else {
            return;
        };
        match form.get().validate(&battery, verdict, &now_label()) {
            Ok(record) => {
                log!("Inspection of {} recorded as {:?} by {}", record.battery_id, verdict, record.inspector);
                let title = match verdict {
                    InspectionVerdict::Passed => "Inspection passed",
                    InspectionVerdict::Maintenance => "Sent to maintenance",
                };
                toaster.push(Notice::success(title, format!("{} inspected by {}", record.battery_id, record.inspector)));
                history.update(|h| h.insert(0, record));
                pending.update(|list| list.retain(|p| p.battery_id != battery.battery_id));
                set_selected.set(None);
                set_form.set(InspectionForm::default());
            }
            Err(e) => toaster.push(Notice::from_error("Inspection incomplete", &e)),
        }
    };

    view! {
        <div class="battery-inspection-page">
            <div class="page-header">
                <h1>"Battery Inspection"</h1>
                <p class="description">"Check returned batteries before they go back into stock"</p>
            </div>

            <div class="inspection-layout">
                <section class="pending-list">
                    <h2>{move || format!("Awaiting inspection ({})", pending.with(|p| p.len()))}</h2>
                    {move || {
                        let rows = pending.get();
                        if rows.is_empty() {
                            return view! {
                                <EmptyState icon="✅" title="All caught up" description="No batteries are waiting for inspection"/>
                            }
                            .into_view();
                        }
                        rows.into_iter()
                            .map(|battery| view! { <PendingCard battery=battery selected=selected on_select=set_selected/> })
                            .collect_view()
                    }}
                </section>

                <section class="inspection-form">
                    <h2>"Inspection sheet"</h2>
                    {move || match selected_battery() {
                        None => view! { <p class="muted">"Select a battery to inspect"</p> }.into_view(),
                        Some(battery) => view! {
                            <div class="form-summary">
                                <strong>{battery.battery_id.clone()}</strong>
                                <span>{format!("{} · SoH {}% · {} cycles", battery.kind, battery.soh, battery.cycles)}</span>
                            </div>
                        }
                        .into_view(),
                    }}

                    <div class="form-group">
                        <label>"Inspector"</label>
                        <select on:change=move |ev| set_form.update(|f| f.inspector = event_target_value(&ev))>
                            <option value="" selected=move || form.get().inspector.is_empty()>"Select inspector"</option>
                            {INSPECTORS
                                .iter()
                                .map(|name| {
                                    let name = *name;
                                    view! { <option value=name selected=move || form.get().inspector == name>{name}</option> }
                                })
                                .collect_view()}
                        </select>
                    </div>
                    <div class="form-group">
                        <label>"Physical condition"</label>
                        <input
                            type="text"
                            placeholder="Good, scratched, corroded..."
                            prop:value=move || form.get().physical_condition
                            on:input=move |ev| set_form.update(|f| f.physical_condition = event_target_value(&ev))
                        />
                    </div>
                    <div class="form-group">
                        <label>"Notes"</label>
                        <textarea
                            prop:value=move || form.get().notes
                            on:input=move |ev| set_form.update(|f| f.notes = event_target_value(&ev))
                        ></textarea>
                    </div>

                    <div class="form-actions">
                        <button
                            class="btn btn-warning"
                            disabled=move || selected.get().is_none()
                            on:click=move |_| record(InspectionVerdict::Maintenance)
                        >
                            "Send to maintenance"
                        </button>
                        <button
                            class="btn btn-primary"
                            disabled=move || selected.get().is_none()
                            on:click=move |_| record(InspectionVerdict::Passed)
                        >
                            "Submit"
                        </button>
                    </div>
                </section>
            </div>

            <section class="inspection-history">
                <div class="section-header">
                    <h2>"Inspection history"</h2>
                    <Show when=move || history.with(|h| h.len() > RECENT_INSPECTIONS)>
                        <button class="btn btn-ghost btn-sm" on:click=move |_| set_show_all.update(|all| *all = !*all)>
                            {move || if show_all.get() { "Show recent" } else { "Show all" }}
                        </button>
                    </Show>
                </div>
                <table class="data-table">
                    <thead>
                        <tr>
                            <th>"Battery"</th>
                            <th>"Type"</th>
                            <th>"Inspected"</th>
                            <th>"Inspector"</th>
                            <th>"Condition"</th>
                            <th>"Notes"</th>
                            <th>"Result"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            history.with(|h| {
                                displayed_inspections(h, show_all.get())
                                    .iter()
                                    .map(|record| view! {
                                        <tr>
                                            <td class="mono">{record.battery_id.clone()}</td>
                                            <td>{record.kind.label()}</td>
                                            <td class="muted">{record.inspected_at.clone()}</td>
                                            <td>{record.inspector.clone()}</td>
                                            <td>{record.physical_condition.clone()}</td>
                                            <td>{record.notes.clone()}</td>
                                            <td><StatusBadge classes=verdict_class(record.verdict) label=record.verdict.label()/></td>
                                        </tr>
                                    })
                                    .collect_view()
                            })
                        }}
                    </tbody>
                </table>
            </section>
        </div>
    }
}

#[component]
fn PendingCard(
    battery: PendingInspection,
    selected: ReadSignal<Option<String>>,
    on_select: WriteSignal<Option<String>>,
) -> impl IntoView {
    let id = battery.battery_id.clone();
    let is_selected = {
        let id = id.clone();
        move || selected.get().as_deref() == Some(id.as_str())
    };

    view! {
        <button class="pending-card" class:selected=is_selected on:click=move |_| on_select.set(Some(id.clone()))>
            <div class="pending-header">
                <strong>{battery.battery_id.clone()}</strong>
                <span>{battery.kind.label()}</span>
            </div>
            <div class="pending-meta">
                <span>{format!("Last used {}", battery.last_used)}</span>
                <span>{battery.slot.clone()}</span>
                <span>{format!("SoH {}%", battery.soh)}</span>
                <span>{format!("{} cycles", battery.cycles)}</span>
            </div>
        </button>
    }
}
