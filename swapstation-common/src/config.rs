//! Application configuration
//!
//! Every field has a default, so an empty document is a valid config.

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    pub pricing: PricingConfig,
    pub sparkles: SparkleConfig,
    pub toasts: ToastConfig,
}

impl AppConfig {
    pub fn from_toml_str(input: &str) -> Result<Self> {
        let config: Self = toml::from_str(input)?;
        config.sparkles.validate()?;
        Ok(config)
    }
}

/// Fees in VND
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct PricingConfig {
    /// Charged once per complete station reservation
    pub swap_fee_vnd: u64,
    /// Held per complete reservation when paying by deposit
    pub deposit_vnd: u64,
    pub processing_fee_vnd: u64,
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            swap_fee_vnd: 150_000,
            deposit_vnd: 50_000,
            processing_fee_vnd: 0,
        }
    }
}

/// Tuning for the pointer sparkle trail
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SparkleConfig {
    pub enabled: bool,
    /// Minimum gap between two spawn batches
    pub throttle_ms: f64,
    pub max_particles: usize,
    pub decay_per_tick: f64,
    pub tick_interval_ms: u64,
    /// Spawn offset from the pointer, applied on both axes in [-jitter, +jitter]
    pub jitter: f64,
    pub min_size: f64,
    pub max_size: f64,
    pub min_batch: usize,
    pub max_batch: usize,
}

impl SparkleConfig {
    /// Reject values the particle spawner can't sample from.
    ///
    /// TOML accepts `inf` and `nan`, so parsing alone doesn't rule them out.
    pub fn validate(&self) -> Result<()> {
        if !self.jitter.is_finite() || self.jitter < 0.0 {
            return Err(Error::InvalidConfig(format!(
                "sparkles.jitter must be a finite, non-negative number, got {}",
                self.jitter
            )));
        }
        if !self.min_size.is_finite() || !self.max_size.is_finite() {
            return Err(Error::InvalidConfig(format!(
                "sparkles.min_size and sparkles.max_size must be finite, got {} and {}",
                self.min_size, self.max_size
            )));
        }
        if !self.decay_per_tick.is_finite() || self.decay_per_tick <= 0.0 {
            return Err(Error::InvalidConfig(format!(
                "sparkles.decay_per_tick must be a positive number, got {}",
                self.decay_per_tick
            )));
        }
        Ok(())
    }
}

impl Default for SparkleConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            throttle_ms: 30.0,
            max_particles: 40,
            decay_per_tick: 0.02,
            tick_interval_ms: 16,
            jitter: 10.0,
            min_size: 4.0,
            max_size: 8.0,
            min_batch: 2,
            max_batch: 3,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ToastConfig {
    pub duration_ms: u32,
}

impl Default for ToastConfig {
    fn default() -> Self {
        Self { duration_ms: 5000 }
    }
}
