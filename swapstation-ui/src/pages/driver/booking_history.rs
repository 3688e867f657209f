//! Booking history
//!
//! Past swaps with search and filters, deposit refunds, swap ratings and
//! the details of the battery handed over.

use leptos::logging::log;
use leptos::*;
use swapstation_common::catalog;
use swapstation_common::filters::{BookingQuery, BookingSummary};
use swapstation_common::format::format_vnd;
use swapstation_common::forms::{RefundRequest, SwapFeedback};
use swapstation_common::{Booking, BookingMethod, BookingStatus};

use crate::components::status_badge::booking_status_class;
use crate::components::{StatCard, StatusBadge};
use crate::error::{use_toaster, EmptyState, Notice};
use crate::utils::{parse_filter, ALL_OPTION};

fn parse_status(value: &str) -> Option<BookingStatus> {
    match value {
        "deposited" => Some(BookingStatus::Deposited),
        "paid" => Some(BookingStatus::Paid),
        "completed" => Some(BookingStatus::Completed),
        _ => None,
    }
}

fn parse_method(value: &str) -> Option<BookingMethod> {
    match value {
        "deposit" => Some(BookingMethod::Deposit),
        "full-payment" => Some(BookingMethod::FullPayment),
        _ => None,
    }
}

#[derive(Clone, Debug, PartialEq)]
enum Dialog {
    Refund(Booking),
    Rate(Booking),
    Details(Booking),
}

#[component]
pub fn BookingHistory() -> impl IntoView {
    let toaster = use_toaster();
    let bookings = store_value(catalog::bookings());

    let (search, set_search) = create_signal(String::new());
    let (status, set_status) = create_signal(None::<BookingStatus>);
    let (method, set_method) = create_signal(None::<BookingMethod>);
    let (dialog, set_dialog) = create_signal(None::<Dialog>);

    let query = create_memo(move |_| BookingQuery {
        search: search.get(),
        status: status.get(),
        method: method.get(),
    });

    let filtered = move || {
        let query = query.get();
        bookings.with_value(|bookings| query.apply(bookings).into_iter().cloned().collect::<Vec<_>>())
    };
    let summary = move || BookingSummary::of(&filtered());

    let close = Callback::new(move |_: ()| set_dialog.set(None));

    let submit_refund = Callback::new(move |(booking_id, request): (String, RefundRequest)| {
        match request.validate() {
            Ok(()) => {
                log!("Refund requested for {} to {} at {}", booking_id, request.account_number, request.bank_name);
                toaster.push(Notice::success(
                    "Refund requested",
                    format!("The deposit for {} will be refunded within 3-5 business days", booking_id),
                ));
                set_dialog.set(None);
            }
            Err(e) => toaster.push(Notice::from_error("Refund not sent", &e)),
        }
    });

    let submit_rating = Callback::new(move |(booking_id, feedback): (String, SwapFeedback)| {
        match feedback.validate() {
            Ok(rating) => {
                log!("Rated {} with {} stars", booking_id, rating);
                toaster.push(Notice::success("Thank you!", format!("You rated {} {} stars", booking_id, rating)));
                set_dialog.set(None);
            }
            Err(e) => toaster.push(Notice::from_error("Rating not sent", &e)),
        }
    });

    view! {
        <div class="booking-history-page">
            <div class="page-header">
                <h1>"Booking History"</h1>
                <p class="description">"Your reservations and completed swaps"</p>
            </div>

            <div class="stats-grid">
                <StatCard label="Bookings" icon="🧾" value=Signal::derive(move || summary().total.to_string())/>
                <StatCard label="Completed" icon="✅" value=Signal::derive(move || summary().completed.to_string())/>
                <StatCard label="Pending" icon="⏳" value=Signal::derive(move || summary().pending.to_string())/>
            </div>

            <div class="filter-bar">
                <input
                    type="text"
                    class="search-input"
                    placeholder="Search by booking, station or vehicle"
                    prop:value=search
                    on:input=move |ev| set_search.set(event_target_value(&ev))
                />
                <select on:change=move |ev| set_status.set(parse_filter(&event_target_value(&ev), parse_status))>
                    <option value=ALL_OPTION>"All statuses"</option>
                    <option value="deposited">"Deposited"</option>
                    <option value="paid">"Paid"</option>
                    <option value="completed">"Completed"</option>
                </select>
                <select on:change=move |ev| set_method.set(parse_filter(&event_target_value(&ev), parse_method))>
                    <option value=ALL_OPTION>"All methods"</option>
                    <option value="deposit">"Deposit"</option>
                    <option value="full-payment">"Full payment"</option>
                </select>
            </div>

            <div class="booking-list">
                {move || {
                    let rows = filtered();
                    if rows.is_empty() {
                        return view! {
                            <EmptyState icon="🔍" title="No bookings found" description="Try a different search or filter"/>
                        }
                        .into_view();
                    }
                    rows.into_iter()
                        .map(|booking| view! { <BookingRow booking=booking on_open=Callback::new(move |d| set_dialog.set(Some(d)))/> })
                        .collect_view()
                }}
            </div>

            {move || dialog.get().map(|dialog| match dialog {
                Dialog::Refund(booking) => view! { <RefundDialog booking=booking on_submit=submit_refund on_close=close/> }.into_view(),
                Dialog::Rate(booking) => view! { <RatingDialog booking=booking on_submit=submit_rating on_close=close/> }.into_view(),
                Dialog::Details(booking) => view! { <BatteryDetails booking=booking on_close=close/> }.into_view(),
            })}
        </div>
    }
}

#[component]
fn BookingRow(booking: Booking, on_open: Callback<Dialog>) -> impl IntoView {
    let details = booking.clone();
    let action = if booking.can_cancel {
        let target = booking.clone();
        Some(view! {
            <button class="btn btn-danger btn-sm" on:click=move |_| on_open.call(Dialog::Refund(target.clone()))>
                "Cancel & refund"
            </button>
        })
    } else if booking.status == BookingStatus::Completed {
        let target = booking.clone();
        Some(view! {
            <button class="btn btn-secondary btn-sm" on:click=move |_| on_open.call(Dialog::Rate(target.clone()))>
                "Rate"
            </button>
        })
    } else {
        None
    };

    view! {
        <div class="booking-card">
            <div class="booking-header">
                <div>
                    <h3>{booking.id.clone()}</h3>
                    <p class="muted">{booking.station.clone()}</p>
                </div>
                <StatusBadge classes=booking_status_class(booking.status) label=booking.status.label()/>
            </div>
            <div class="booking-meta">
                <span>{format!("🚗 {}", booking.vehicle)}</span>
                <span>{format!("🔋 {}", booking.battery_kind)}</span>
                <span>{format!("🕒 {}", booking.booked_at)}</span>
                <span>{booking.method.label()}</span>
                <strong>{format_vnd(booking.amount_vnd)}</strong>
            </div>
            <div class="booking-actions">
                <button class="btn btn-ghost btn-sm" on:click=move |_| on_open.call(Dialog::Details(details.clone()))>
                    "Battery details"
                </button>
                {action}
            </div>
        </div>
    }
}

#[component]
fn RefundDialog(
    booking: Booking,
    on_submit: Callback<(String, RefundRequest)>,
    on_close: Callback<()>,
) -> impl IntoView {
    let (request, set_request) = create_signal(RefundRequest::default());
    let booking_id = booking.id.clone();

    view! {
        <div class="modal-backdrop">
            <div class="modal">
                <h2>"Cancel booking " {booking.id.clone()}</h2>
                <p class="muted">{format!("Deposit of {} will be refunded to your bank account", format_vnd(booking.amount_vnd))}</p>

                <div class="form-group">
                    <label>"Account number"</label>
                    <input type="text" on:input=move |ev| set_request.update(|r| r.account_number = event_target_value(&ev))/>
                </div>
                <div class="form-group">
                    <label>"Bank name"</label>
                    <input type="text" on:input=move |ev| set_request.update(|r| r.bank_name = event_target_value(&ev))/>
                </div>
                <div class="form-group">
                    <label>"Account holder"</label>
                    <input type="text" on:input=move |ev| set_request.update(|r| r.account_holder = event_target_value(&ev))/>
                </div>
                <div class="form-group">
                    <label>"Reason (optional)"</label>
                    <textarea on:input=move |ev| set_request.update(|r| r.reason = event_target_value(&ev))></textarea>
                </div>

                <div class="modal-actions">
                    <button class="btn btn-secondary" on:click=move |_| on_close.call(())>"Close"</button>
                    <button
                        class="btn btn-danger"
                        on:click=move |_| on_submit.call((booking_id.clone(), request.get()))
                    >
                        "Request refund"
                    </button>
                </div>
            </div>
        </div>
    }
}

#[component]
fn RatingDialog(
    booking: Booking,
    on_submit: Callback<(String, SwapFeedback)>,
    on_close: Callback<()>,
) -> impl IntoView {
    let (feedback, set_feedback) = create_signal(SwapFeedback::default());
    let booking_id = booking.id.clone();

    view! {
        <div class="modal-backdrop">
            <div class="modal">
                <h2>"Rate your swap"</h2>
                <p class="muted">{format!("{} at {}", booking.id, booking.station)}</p>

                <div class="rating-stars">
                    {(1..=5u8)
                        .map(|star| {
                            view! {
                                <button
                                    class="star"
                                    class:filled=move || feedback.get().rating.map_or(false, |r| star <= r)
                                    on:click=move |_| set_feedback.update(|f| f.rating = Some(star))
                                >
                                    "★"
                                </button>
                            }
                        })
                        .collect_view()}
                </div>

                <div class="form-group">
                    <label>"Comment"</label>
                    <textarea on:input=move |ev| set_feedback.update(|f| f.comment = event_target_value(&ev))></textarea>
                </div>

                <div class="modal-actions">
                    <button class="btn btn-secondary" on:click=move |_| on_close.call(())>"Close"</button>
                    <button
                        class="btn btn-primary"
                        on:click=move |_| on_submit.call((booking_id.clone(), feedback.get()))
                    >
                        "Submit rating"
                    </button>
                </div>
            </div>
        </div>
    }
}

#[component]
fn BatteryDetails(booking: Booking, on_close: Callback<()>) -> impl IntoView {
    let battery = booking.battery;

    view! {
        <div class="modal-backdrop">
            <div class="modal">
                <h2>"Battery " {battery.code.clone()}</h2>
                <dl class="detail-list">
                    <dt>"Type"</dt>
                    <dd>{booking.battery_kind.label()}</dd>
                    <dt>"State of health"</dt>
                    <dd>{format!("{}%", battery.soh)}</dd>
                    <dt>"Charge cycles"</dt>
                    <dd>{battery.charge_cycles}</dd>
                    <dt>"Manufactured"</dt>
                    <dd>{battery.manufactured.clone()}</dd>
                    <dt>"Expires"</dt>
                    <dd>{battery.expires.clone()}</dd>
                </dl>
                <div class="modal-actions">
                    <button class="btn btn-secondary" on:click=move |_| on_close.call(())>"Close"</button>
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_values_round_trip_labels() {
        assert_eq!(parse_status("paid"), Some(BookingStatus::Paid));
        assert_eq!(parse_method("full-payment"), Some(BookingMethod::FullPayment));
        assert_eq!(parse_filter(ALL_OPTION, parse_status), None);
    }
}
