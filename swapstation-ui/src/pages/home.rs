use leptos::*;
use leptos_router::*;

#[component]
pub fn Home() -> impl IntoView {
    view! {
        <div class="home-page">
            <section class="hero">
                <h1>"Swap your battery in minutes"</h1>
                <p class="description">"Find a nearby station, reserve a slot and drive away fully charged"</p>
                <div class="hero-actions">
                    <A href="/driver/stations" class="btn btn-primary">"Find a station"</A>
                    <A href="/driver/reservation" class="btn btn-secondary">"Reserve a swap"</A>
                </div>
            </section>

            <section class="role-grid">
                <A href="/driver/history" class="role-card">
                    <h3>"🚗 Drivers"</h3>
                    <p>"Bookings, refunds and swap ratings"</p>
                </A>
                <A href="/staff/inventory" class="role-card">
                    <h3>"🔧 Station staff"</h3>
                    <p>"Inventory and battery inspections"</p>
                </A>
                <A href="/admin" class="role-card">
                    <h3>"📊 Administrators"</h3>
                    <p>"Network figures and station reports"</p>
                </A>
            </section>
        </div>
    }
}

#[component]
pub fn NotFound() -> impl IntoView {
    view! {
        <div class="not-found">
            <h1>"404"</h1>
            <p>"This page does not exist."</p>
            <A href="/" class="btn btn-primary">"Back to home"</A>
        </div>
    }
}
