//! Payment
//!
//! Charges the complete entries of the reservation book. There is no
//! payment gateway; "Pay" logs the order and confirms with a toast.

use leptos::logging::log;
use leptos::*;
use leptos_router::*;
use swapstation_common::catalog;
use swapstation_common::checkout::{PaymentMethod, PaymentPlan, Quote};
use swapstation_common::format::{format_date, format_vnd};

use crate::error::{use_toaster, EmptyState, Notice};
use crate::state::use_app_state;

#[component]
pub fn Payment() -> impl IntoView {
    let state = use_app_state();
    let toaster = use_toaster();
    let book = state.reservations;
    let pricing = state.config.with_value(|config| config.pricing.clone());
    let pricing = store_value(pricing);

    let (plan, set_plan) = create_signal(PaymentPlan::Full);
    let (method, set_method) = create_signal(PaymentMethod::Card);
    let (paid, set_paid) = create_signal(false);

    let quote = create_memo(move |_| {
        let plan = plan.get();
        book.with(|book| pricing.with_value(|pricing| Quote::new(book, plan, pricing)))
    });

    let pay = move |_| {
        let quote = quote.get();
        if !quote.is_payable() {
            return;
        }
        let order = book.with(|book| serde_json::to_string(&book.complete_entries().collect::<Vec<_>>()));
        match order {
            Ok(order) => log!("Payment requested: {:?} via {:?}, {} VND, entries {}", plan.get(), method.get(), quote.total_vnd, order),
            Err(e) => log!("Payment requested, entries not serializable: {}", e),
        }
        set_paid.set(true);
        if method.get() == PaymentMethod::Qr {
            toaster.push(Notice::info("Scan to pay", "Open your banking app and scan the code below"));
        }
        toaster.push(Notice::success(
            "Payment successful",
            format!("{} reservation(s), {}", quote.reservations, format_vnd(quote.total_vnd)),
        ));
    };

    view! {
        <div class="payment-page">
            <div class="page-header">
                <h1>"Payment"</h1>
                <A href="/driver/reservation" class="btn btn-secondary">"← Back to reservation"</A>
            </div>

            <Show
                when=move || quote.get().is_payable()
                fallback=|| view! {
                    <EmptyState
                        icon="🗓️"
                        title="Nothing to pay for"
                        description="Pick a date and a time for at least one station first"
                    />
                }
            >
                <div class="payment-layout">
                    <section class="payment-options">
                        <h2>"Payment plan"</h2>
                        {[PaymentPlan::Full, PaymentPlan::Deposit]
                            .into_iter()
                            .map(|option| {
                                view! {
                                    <label class="option-card" class:selected=move || plan.get() == option>
                                        <input
                                            type="radio"
                                            name="plan"
                                            prop:checked=move || plan.get() == option
                                            on:change=move |_| set_plan.set(option)
                                        />
                                        <span>{option.label()}</span>
                                    </label>
                                }
                            })
                            .collect_view()}

                        <h2>"Payment method"</h2>
                        {PaymentMethod::ALL
                            .into_iter()
                            .map(|option| {
                                view! {
                                    <label class="option-card" class:selected=move || method.get() == option>
                                        <input
                                            type="radio"
                                            name="method"
                                            prop:checked=move || method.get() == option
                                            on:change=move |_| set_method.set(option)
                                        />
                                        <div>
                                            <strong>{option.label()}</strong>
                                            <p class="muted">{option.description()}</p>
                                        </div>
                                    </label>
                                }
                            })
                            .collect_view()}

                        <Show when=move || method.get() == PaymentMethod::Qr && paid.get()>
                            <div class="qr-placeholder">
                                <span>"▦"</span>
                                <p>"Scan with your banking app"</p>
                            </div>
                        </Show>
                    </section>

                    <aside class="payment-summary">
                        <h2>"Order"</h2>
                        {move || {
                            book.with(|book| {
                                book.complete_entries()
                                    .map(|entry| {
                                        let name = catalog::station(entry.station_id)
                                            .map(|s| s.name)
                                            .unwrap_or_else(|| format!("Station {}", entry.station_id));
                                        let when = match (entry.date, entry.time) {
                                            (Some(date), Some(time)) => format!("{} {}", format_date(date), time),
                                            _ => String::new(),
                                        };
                                        view! {
                                            <div class="summary-row">
                                                <span>{name}</span>
                                                <span class="muted">{when}</span>
                                            </div>
                                        }
                                    })
                                    .collect_view()
                            })
                        }}

                        <div class="summary-line">
                            <span>"Subtotal"</span>
                            <span>{move || format_vnd(quote.get().subtotal_vnd)}</span>
                        </div>
                        <div class="summary-line">
                            <span>"Processing fee"</span>
                            <span>{move || format_vnd(quote.get().processing_fee_vnd)}</span>
                        </div>
                        <div class="summary-total">
                            <span>"Total"</span>
                            <strong>{move || format_vnd(quote.get().total_vnd)}</strong>
                        </div>

                        <button
                            class="btn btn-primary"
                            disabled=move || !quote.get().is_payable()
                            on:click=pay
                        >
                            {move || format!("Pay {}", format_vnd(quote.get().total_vnd))}
                        </button>
                    </aside>
                </div>
            </Show>
        </div>
    }
}
