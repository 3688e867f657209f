use leptos::*;
use leptos_meta::*;
use leptos_router::*;

mod components;
mod error;
mod pages;
mod state;
pub mod utils;

use components::MouseSparkles;
use error::{provide_toaster, ToastHost};
use pages::{
    AdminDashboard, BatteryInspection, BatteryInventory, BookingHistory, Home, NotFound, Payment,
    Reports, Reservation, StationFinder,
};
use state::{load_config, provide_app_state};

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = load_config();
    provide_toaster(config.toasts.duration_ms);
    provide_app_state(config);

    view! {
        <Stylesheet id="leptos" href="/pkg/swapstation-ui.css"/>
        <Title text="SwapStation - Battery Swap Network"/>
        <Meta name="description" content="Find, reserve and pay for EV battery swaps"/>

        <Router>
            <nav class="navbar">
                <div class="navbar-brand">
                    <A href="/"><h1>"SwapStation"</h1></A>
                    <span class="tagline">"Battery swap network"</span>
                </div>
                <div class="navbar-menu">
                    <div class="navbar-dropdown">
                        <span class="navbar-item dropdown-trigger">"Driver ▾"</span>
                        <div class="dropdown-content">
                            <A href="/driver/stations" class="dropdown-item">"Find a Station"</A>
                            <A href="/driver/reservation" class="dropdown-item">"Reservation"</A>
                            <A href="/driver/payment" class="dropdown-item">"Payment"</A>
                            <A href="/driver/history" class="dropdown-item">"Booking History"</A>
                        </div>
                    </div>
                    <div class="navbar-dropdown">
                        <span class="navbar-item dropdown-trigger">"Staff ▾"</span>
                        <div class="dropdown-content">
                            <A href="/staff/inventory" class="dropdown-item">"Battery Inventory"</A>
                            <A href="/staff/inspection" class="dropdown-item">"Battery Inspection"</A>
                        </div>
                    </div>
                    <div class="navbar-dropdown">
                        <span class="navbar-item dropdown-trigger">"Admin ▾"</span>
                        <div class="dropdown-content">
                            <A href="/admin" class="dropdown-item">"Dashboard"</A>
                            <A href="/admin/reports" class="dropdown-item">"Reports"</A>
                        </div>
                    </div>
                </div>
            </nav>

            <main class="container">
                <Routes>
                    <Route path="/" view=Home/>
                    <Route path="/driver/stations" view=StationFinder/>
                    <Route path="/driver/reservation" view=Reservation/>
                    <Route path="/driver/payment" view=Payment/>
                    <Route path="/driver/history" view=BookingHistory/>
                    <Route path="/staff/inventory" view=BatteryInventory/>
                    <Route path="/staff/inspection" view=BatteryInspection/>
                    <Route path="/admin" view=AdminDashboard/>
                    <Route path="/admin/reports" view=Reports/>
                    <Route path="/*any" view=NotFound/>
                </Routes>
            </main>

            <footer class="footer">
                <p>"SwapStation - Built with Rust + Leptos"</p>
            </footer>
        </Router>

        <ToastHost/>
        <MouseSparkles/>
    }
}

#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(App);
}
