//! Terminal user interface for skipyard.
//!
//! This crate provides an interactive TUI for choosing a skip offering,
//! built with ratatui.
//!
//! # Overview
//!
//! The screen is a checkout step indicator above a filterable grid:
//!
//! - **Step bar** - where the customer is in the checkout flow
//! - **Filter line** - size, road-legal-only, price bound, sort order
//! - **Offering grid** - derived prices, badges, availability
//!
//! Filter edits are debounced: rapid changes coalesce into a single
//! recomputation once the input quiesces.
//!
//! # Usage
//!
//! ```rust,no_run
//! let catalog = skipyard_catalog::bundled().unwrap();
//! skipyard_tui::run(catalog).unwrap();
//! ```
//!
//! # Keyboard Navigation
//!
//! - `j`/`k` - Move down/up
//! - `s`/`S` - Cycle size filter
//! - `r` - Toggle road-legal only
//! - `-`/`+` - Lower/raise the price bound
//! - `o` - Cycle sort order
//! - `m` - Show more offerings
//! - `Enter` - Select the highlighted skip
//! - `t` - Toggle theme
//! - `?` - Help
//! - `q` - Quit

pub mod app;
mod event;
mod theme;
mod ui;

pub use app::{App, AppResult};
pub use theme::Theme;
pub use ui::{StepPhase, CHECKOUT_STEPS};

use skipyard_core::{BrowseConfig, Catalog};

/// Position of the "Select Skip" step in the checkout flow.
pub const SELECT_SKIP_STEP: usize = 2;

/// Configuration for launching the TUI.
#[derive(Debug, Clone)]
pub struct TuiConfig {
    /// Index of the current checkout step; supplied by the surrounding
    /// flow, not derived here.
    pub current_step: usize,
    /// Page size and debounce window.
    pub browse: BrowseConfig,
}

impl TuiConfig {
    /// Create a config with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the current checkout step.
    pub fn with_current_step(mut self, step: usize) -> Self {
        self.current_step = step;
        self
    }

    /// Set the browse configuration.
    pub fn with_browse(mut self, browse: BrowseConfig) -> Self {
        self.browse = browse;
        self
    }
}

impl Default for TuiConfig {
    fn default() -> Self {
        Self {
            current_step: SELECT_SKIP_STEP,
            browse: BrowseConfig::default(),
        }
    }
}

/// Run the TUI application with default config.
pub fn run(catalog: Catalog) -> AppResult<()> {
    run_with_config(catalog, TuiConfig::default())
}

/// Run the TUI application with custom config.
pub fn run_with_config(catalog: Catalog, config: TuiConfig) -> AppResult<()> {
    // Create tokio runtime for the event loop and debounce timer
    let rt = tokio::runtime::Runtime::new()?;

    let terminal = ratatui::init();
    let result = rt.block_on(App::with_config(catalog, config).run(terminal));
    ratatui::restore();

    // Shutdown runtime immediately; timers die with it
    rt.shutdown_timeout(std::time::Duration::from_millis(100));

    result
}
