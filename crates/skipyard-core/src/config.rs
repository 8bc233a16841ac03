//! Browse configuration types.

use std::time::Duration;

use derive_builder::Builder;
use serde::{Deserialize, Serialize};

/// Configuration for the catalog browser.
#[derive(Debug, Clone, Builder, Serialize, Deserialize)]
#[builder(setter(into), build_fn(validate = "Self::validate"))]
pub struct BrowseConfig {
    /// Number of offerings revealed per "show more" action.
    #[builder(default = "6")]
    #[serde(default = "default_page_size")]
    pub page_size: usize,

    /// Quiescence window before a filter change triggers recomputation,
    /// in milliseconds.
    #[builder(default = "800")]
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,
}

fn default_page_size() -> usize {
    6
}

fn default_debounce_ms() -> u64 {
    800
}

impl BrowseConfigBuilder {
    fn validate(&self) -> Result<(), String> {
        if let Some(page_size) = self.page_size {
            if page_size == 0 {
                return Err("page_size must be at least 1".to_string());
            }
        }
        Ok(())
    }
}

impl BrowseConfig {
    /// Create a new browse config builder.
    pub fn builder() -> BrowseConfigBuilder {
        BrowseConfigBuilder::default()
    }

    /// Debounce window as a Duration.
    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }
}

impl Default for BrowseConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
            debounce_ms: default_debounce_ms(),
        }
    }
}
