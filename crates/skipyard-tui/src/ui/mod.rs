//! UI components and widgets.

mod grid;
mod help;
mod steps;

pub use grid::{GridState, OfferingGrid};
pub use help::HelpOverlay;
pub use steps::{classify, Step, StepBar, StepPhase, CHECKOUT_STEPS};

use ratatui::layout::{Constraint, Layout, Rect};

/// Layout areas for the application.
#[derive(Debug, Clone, Copy)]
pub struct AppLayout {
    pub steps: Rect,
    pub filters: Rect,
    pub main: Rect,
    pub footer: Rect,
}

impl AppLayout {
    /// Compute layout from terminal area.
    pub fn new(area: Rect) -> Self {
        let [steps, filters, main, footer] = Layout::vertical([
            Constraint::Length(2),
            Constraint::Length(1),
            Constraint::Min(6),
            Constraint::Length(1),
        ])
        .areas(area);

        Self {
            steps,
            filters,
            main,
            footer,
        }
    }
}

/// Format a whole-pound price for display.
pub fn format_price(price: u32) -> String {
    format!("£{price}")
}
