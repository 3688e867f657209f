//! Pointer sparkle overlay
//!
//! The window `mousemove` listener and the animation interval are held by
//! one [`SparkleDriver`]. They are acquired together when the overlay
//! mounts and released together on cleanup, so no pointer event or tick
//! reaches the field after teardown.

use std::time::Duration;

use leptos::leptos_dom::helpers::{IntervalHandle, WindowListenerHandle};
use leptos::logging::warn;
use leptos::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use swapstation_common::sparkles::{Particle, SparkleField};

use crate::state::use_app_state;
use crate::utils::now_ms;

/// Inline style for one particle dot
pub fn dot_style(particle: &Particle) -> String {
    format!(
        "left: {:.1}px; top: {:.1}px; width: {:.1}px; height: {:.1}px; opacity: {:.3}; \
         box-shadow: 0 0 {:.1}px rgba(255, 215, 0, {:.3}); \
         transform: translate(-50%, -50%) scale({:.3});",
        particle.x,
        particle.y,
        particle.size,
        particle.size,
        particle.opacity,
        particle.glow_radius(),
        particle.opacity,
        particle.opacity,
    )
}

struct SparkleDriver {
    listener: WindowListenerHandle,
    ticker: IntervalHandle,
}

impl SparkleDriver {
    /// Start the tick interval, then attach the pointer listener.
    ///
    /// Returns `None` with nothing attached if the interval can't be set.
    fn start(
        field: StoredValue<SparkleField<StdRng>>,
        publish: WriteSignal<Vec<Particle>>,
        tick_every: Duration,
    ) -> Option<Self> {
        let ticker = match set_interval_with_handle(
            move || {
                let changed = field
                    .try_update_value(|field| field.tick() > 0 || !field.is_empty())
                    .unwrap_or(false);
                if changed {
                    field.with_value(|field| publish.set(field.particles().to_vec()));
                }
            },
            tick_every,
        ) {
            Ok(handle) => handle,
            Err(e) => {
                warn!("Sparkle ticker unavailable: {:?}", e);
                return None;
            }
        };

        let listener = window_event_listener(ev::mousemove, move |event| {
            let x = event.client_x() as f64;
            let y = event.client_y() as f64;
            let spawned = field
                .try_update_value(|field| field.pointer_moved(x, y, now_ms()))
                .unwrap_or(0);
            if spawned > 0 {
                field.with_value(|field| publish.set(field.particles().to_vec()));
            }
        });

        Some(Self { listener, ticker })
    }

    fn stop(self) {
        self.listener.remove();
        self.ticker.clear();
    }
}

/// Decorative particle trail that follows the pointer
#[component]
pub fn MouseSparkles() -> impl IntoView {
    let config = use_app_state().config.with_value(|config| config.sparkles.clone());
    let (particles, set_particles) = create_signal(Vec::<Particle>::new());

    if config.enabled {
        let tick_every = Duration::from_millis(config.tick_interval_ms);
        let field = store_value(SparkleField::new(config, StdRng::from_entropy()));

        if let Some(driver) = SparkleDriver::start(field, set_particles, tick_every) {
            on_cleanup(move || driver.stop());
        }
    }

    view! {
        <div class="sparkle-layer" aria-hidden="true">
            {move || {
                particles
                    .get()
                    .iter()
                    .map(|particle| view! { <span class="sparkle" style={dot_style(particle)}></span> })
                    .collect_view()
            }}
        </div>
    }
}
