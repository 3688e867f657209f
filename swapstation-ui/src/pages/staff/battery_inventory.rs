//! Battery inventory
//!
//! Station stock for staff: search, status filter, per-status counters and
//! add/edit dialogs. Changes live in page state for the session only.

use leptos::*;
use swapstation_common::catalog;
use swapstation_common::filters::{InventoryQuery, StatusCounts};
use swapstation_common::forms::BatteryDraft;
use swapstation_common::{Battery, BatteryKind, BatteryStatus};

use crate::components::status_badge::battery_status_class;
use crate::components::{StatCard, StatusBadge};
use crate::error::{use_toaster, EmptyState, FieldError, Notice};
use crate::utils::{now_label, parse_filter, ALL_OPTION};

/// Which dialog is open; `Edit` carries the id of the row being edited
#[derive(Clone, Debug, PartialEq)]
enum Editor {
    Add,
    Edit(String),
}

#[component]
pub fn BatteryInventory() -> impl IntoView {
    let toaster = use_toaster();
    let batteries = create_rw_signal(catalog::batteries());

    let (search, set_search) = create_signal(String::new());
    let (status, set_status) = create_signal(None::<BatteryStatus>);
    let (editor, set_editor) = create_signal(None::<Editor>);

    let filtered = move || {
        let query = InventoryQuery {
            search: search.get(),
            status: status.get(),
        };
        batteries.with(|batteries| query.apply(batteries).into_iter().cloned().collect::<Vec<_>>())
    };
    let counts = move || batteries.with(|batteries| StatusCounts::of(batteries));

    let save = Callback::new(move |(mode, battery): (Editor, Battery)| {
        let id = battery.id.clone();
        match mode {
            Editor::Add => {
                batteries.update(|list| list.push(battery));
                toaster.push(Notice::success("Battery added", format!("{} was added to the inventory", id)));
            }
            Editor::Edit(original) => {
                batteries.update(|list| {
                    if let Some(row) = list.iter_mut().find(|b| b.id == original) {
                        *row = battery;
                    }
                });
                toaster.push(Notice::success("Battery updated", format!("{} was updated", id)));
            }
        }
        set_editor.set(None);
    });
    let close = Callback::new(move |_: ()| set_editor.set(None));

    view! {
        <div class="battery-inventory-page">
            <div class="page-header">
                <div class="header-content">
                    <h1>"Battery Inventory"</h1>
                    <p class="description">"Batteries stored at this station"</p>
                </div>
                <div class="header-actions">
                    <button class="btn btn-primary" on:click=move |_| set_editor.set(Some(Editor::Add))>
                        "+ Add battery"
                    </button>
                </div>
            </div>

            <div class="stats-grid">
                <StatCard label="Total" icon="🔋" value=Signal::derive(move || counts().total().to_string())/>
                <StatCard label="Full" icon="🟢" value=Signal::derive(move || counts().full.to_string())/>
                <StatCard label="Charging" icon="⚡" value=Signal::derive(move || counts().charging.to_string())/>
                <StatCard label="Maintenance" icon="🔧" value=Signal::derive(move || counts().maintenance.to_string())/>
            </div>

            <div class="filter-bar">
                <input
                    type="text"
                    class="search-input"
                    placeholder="Search by battery ID or type"
                    prop:value=search
                    on:input=move |ev| set_search.set(event_target_value(&ev))
                />
                <select on:change=move |ev| set_status.set(parse_filter(&event_target_value(&ev), BatteryStatus::from_slug))>
                    <option value=ALL_OPTION>"All statuses"</option>
                    {BatteryStatus::ALL
                        .iter()
                        .map(|s| view! { <option value=s.slug()>{s.label()}</option> })
                        .collect_view()}
                </select>
            </div>

            <table class="data-table">
                <thead>
                    <tr>
                        <th>"Battery ID"</th>
                        <th>"Type"</th>
                        <th>"Status"</th>
                        <th>"SoH"</th>
                        <th>"Location"</th>
                        <th>"Updated"</th>
                        <th></th>
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        filtered()
                            .into_iter()
                            .map(|battery| {
                                let id = battery.id.clone();
                                view! {
                                    <tr>
                                        <td class="mono">{battery.id.clone()}</td>
                                        <td>{battery.kind.label()}</td>
                                        <td>
                                            <StatusBadge classes=battery_status_class(battery.status) label=battery.status.label()/>
                                        </td>
                                        <td>{format!("{}%", battery.soh)}</td>
                                        <td>{battery.slot.clone()}</td>
                                        <td class="muted">{battery.updated_at.clone()}</td>
                                        <td>
                                            <button
                                                class="btn btn-ghost btn-sm"
                                                on:click=move |_| set_editor.set(Some(Editor::Edit(id.clone())))
                                            >
                                                "Edit"
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
                <EmptyState icon="🔍" title="No batteries found" description="Try a different search or status"/>
            </Show>

            {move || editor.get().map(|mode| {
                let draft = match &mode {
                    Editor::Add => BatteryDraft::default(),
                    Editor::Edit(id) => batteries
                        .with(|list| list.iter().find(|b| &b.id == id).map(BatteryDraft::from_battery))
                        .unwrap_or_default(),
                };
                view! { <BatteryDialog mode=mode draft=draft on_save=save on_close=close/> }
            })}
        </div>
    }
}

#[component]
fn BatteryDialog(
    mode: Editor,
    draft: BatteryDraft,
    on_save: Callback<(Editor, Battery)>,
    on_close: Callback<()>,
) -> impl IntoView {
    let toaster = use_toaster();
    let title = match &mode {
        Editor::Add => "Add battery",
        Editor::Edit(_) => "Edit battery",
    };
    let mode = store_value(mode);
    let (draft, set_draft) = create_signal(draft);
    let (error, set_error) = create_signal(None::<String>);

    let submit = move |_| match draft.get().validate(&now_label()) {
        Ok(battery) => on_save.call((mode.get_value(), battery)),
        Err(e) => {
            set_error.set(Some(e.to_string()));
            toaster.push(Notice::from_error("Battery not saved", &e));
        }
    };

    view! {
        <div class="modal-backdrop">
            <div class="modal">
                <h2>{title}</h2>

                <div class="form-group">
                    <label>"Battery ID"</label>
                    <input
                        type="text"
                        prop:value=move || draft.get().id
                        on:input=move |ev| set_draft.update(|d| d.id = event_target_value(&ev))
                    />
                </div>
                <div class="form-group">
                    <label>"Type"</label>
                    <select on:change=move |ev| set_draft.update(|d| d.kind = BatteryKind::from_slug(&event_target_value(&ev)))>
                        <option value="" selected=move || draft.get().kind.is_none()>"Select a type"</option>
                        {BatteryKind::ALL
                            .iter()
                            .map(|kind| {
                                let kind = *kind;
                                view! {
                                    <option value=kind.slug() selected=move || draft.get().kind == Some(kind)>
                                        {kind.label()}
                                    </option>
                                }
                            })
                            .collect_view()}
                    </select>
                </div>
                <div class="form-group">
                    <label>"Status"</label>
                    <select on:change=move |ev| {
                        if let Some(status) = BatteryStatus::from_slug(&event_target_value(&ev)) {
                            set_draft.update(|d| d.status = status);
                        }
                    }>
                        {BatteryStatus::ALL
                            .iter()
                            .map(|status| {
                                let status = *status;
                                view! {
                                    <option value=status.slug() selected=move || draft.get().status == status>
                                        {status.label()}
                                    </option>
                                }
                            })
                            .collect_view()}
                    </select>
                </div>
                <div class="form-group">
                    <label>"State of health (%)"</label>
                    <input
                        type="number"
                        min="0"
                        max="100"
                        prop:value=move || draft.get().soh
                        on:input=move |ev| set_draft.update(|d| d.soh = event_target_value(&ev))
                    />
                </div>
                <div class="form-group">
                    <label>"Location"</label>
                    <input
                        type="text"
                        placeholder="Slot A1"
                        prop:value=move || draft.get().slot
                        on:input=move |ev| set_draft.update(|d| d.slot = event_target_value(&ev))
                    />
                </div>

                {move || error.get().map(|message| view! { <FieldError message=message/> })}

                <div class="modal-actions">
                    <button class="btn btn-secondary" on:click=move |_| on_close.call(())>"Cancel"</button>
                    <button class="btn btn-primary" on:click=submit>"Save"</button>
                </div>
            </div>
        </div>
    }
}
