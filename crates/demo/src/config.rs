//! Demo configuration, read from the process environment.

use std::path::PathBuf;

use stockroom_core::Quantity;
use stockroom_inventory::{DEFAULT_DATA_FILE, DEFAULT_LOW_STOCK_THRESHOLD};

pub const DATA_FILE_VAR: &str = "STOCKROOM_DATA_FILE";
pub const LOW_STOCK_THRESHOLD_VAR: &str = "STOCKROOM_LOW_STOCK_THRESHOLD";

#[derive(Debug, Clone, PartialEq)]
pub struct DemoConfig {
    /// File used by the save/load steps.
    pub data_file: PathBuf,
    /// Items strictly below this quantity are reported as low stock.
    pub low_stock_threshold: Quantity,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from(DEFAULT_DATA_FILE),
            low_stock_threshold: DEFAULT_LOW_STOCK_THRESHOLD,
        }
    }
}

impl DemoConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable source; unset values keep their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(path) = lookup(DATA_FILE_VAR).filter(|p| !p.trim().is_empty()) {
            config.data_file = PathBuf::from(path);
        }

        if let Some(raw) = lookup(LOW_STOCK_THRESHOLD_VAR) {
            match raw.trim().parse::<f64>().ok().and_then(|v| Quantity::try_from(v).ok()) {
                Some(threshold) => config.low_stock_threshold = threshold,
                None => tracing::warn!(
                    "{LOW_STOCK_THRESHOLD_VAR}={raw:?} is not a number; using default {DEFAULT_LOW_STOCK_THRESHOLD}"
                ),
            }
        }

        config
    }
}
