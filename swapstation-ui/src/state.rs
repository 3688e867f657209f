//! App-level state shared by the pages
//!
//! The reservation book outlives page navigation so the payment page can
//! read what was picked on the reservation page. Nothing is persisted.

use leptos::logging::warn;
use leptos::*;
use swapstation_common::config::AppConfig;
use swapstation_common::reservation::ReservationBook;

/// Settings compiled into the binary
pub const EMBEDDED_CONFIG: &str = include_str!("../swapstation.toml");

/// Parse the embedded settings, falling back to defaults on error
pub fn load_config() -> AppConfig {
    config_or_default(EMBEDDED_CONFIG)
}

fn config_or_default(input: &str) -> AppConfig {
    match AppConfig::from_toml_str(input) {
        Ok(config) => config,
        Err(e) => {
            warn!("Ignoring invalid swapstation.toml: {}", e);
            AppConfig::default()
        }
    }
}

#[derive(Clone, Copy)]
pub struct AppState {
    pub config: StoredValue<AppConfig>,
    pub reservations: RwSignal<ReservationBook>,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        let book = ReservationBook::new(config.pricing.swap_fee_vnd);
        Self {
            config: store_value(config),
            reservations: create_rw_signal(book),
        }
    }
}

pub fn provide_app_state(config: AppConfig) -> AppState {
    let state = AppState::new(config);
    provide_context(state);
    state
}

pub fn use_app_state() -> AppState {
    expect_context::<AppState>()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_config_parses() {
        let config = AppConfig::from_toml_str(EMBEDDED_CONFIG).unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_unusable_sparkles_fall_back_to_defaults() {
        let config = config_or_default("[pricing]\nswap_fee_vnd = 99000\n\n[sparkles]\njitter = inf\n");
        assert_eq!(config, AppConfig::default());
        assert!(config.sparkles.jitter.is_finite());
    }
}
