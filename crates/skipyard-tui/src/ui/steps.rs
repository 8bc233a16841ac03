//! Checkout step indicator widget.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Widget;
use unicode_width::UnicodeWidthStr;

use crate::theme::Theme;

/// One step in the checkout flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step {
    /// Display label.
    pub label: &'static str,
    /// Single-cell icon glyph, always shown.
    pub icon: &'static str,
}

/// The fixed checkout flow, in order.
pub const CHECKOUT_STEPS: [Step; 6] = [
    Step { label: "Postcode", icon: "⊙" },
    Step { label: "Waste Type", icon: "♻" },
    Step { label: "Select Skip", icon: "▣" },
    Step { label: "Permit Check", icon: "⛨" },
    Step { label: "Choose Date", icon: "☷" },
    Step { label: "Payment", icon: "¤" },
];

/// Where a step sits relative to the current one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepPhase {
    /// Completed; renders active.
    Past,
    /// The step in progress; renders active and emphasized.
    Current,
    /// Not reached yet; renders disabled and non-interactive.
    Future,
}

/// Classify a step index against the current step.
pub fn classify(index: usize, current: usize) -> StepPhase {
    match index.cmp(&current) {
        std::cmp::Ordering::Less => StepPhase::Past,
        std::cmp::Ordering::Equal => StepPhase::Current,
        std::cmp::Ordering::Greater => StepPhase::Future,
    }
}

/// Step indicator widget.
///
/// Holds no business state; the current index comes from the
/// surrounding checkout flow.
pub struct StepBar<'a> {
    steps: &'a [Step],
    current: usize,
    theme: &'a Theme,
}

impl<'a> StepBar<'a> {
    /// Create a step bar over the given steps.
    pub fn new(steps: &'a [Step], current: usize, theme: &'a Theme) -> Self {
        Self {
            steps,
            current,
            theme,
        }
    }

    /// Width of the full bar with every label shown.
    fn full_width(&self) -> usize {
        let mut width = 0;
        for (i, step) in self.steps.iter().enumerate() {
            width += step.icon.width() + 1 + step.label.width();
            if i + 1 != self.steps.len() {
                width += CONNECTOR.width() + 2;
            }
        }
        width
    }

    /// Build the bar line; on narrow areas only the current step keeps
    /// its label, every step keeps its icon.
    fn line(&self, max_width: usize) -> Line<'a> {
        let compact = self.full_width() > max_width;
        let mut spans = Vec::new();

        for (i, step) in self.steps.iter().enumerate() {
            let phase = classify(i, self.current);
            let style = match phase {
                StepPhase::Past => self.theme.step_done,
                StepPhase::Current => self.theme.step_current,
                StepPhase::Future => self.theme.step_future,
            };

            spans.push(Span::styled(step.icon, style));
            if !compact || phase == StepPhase::Current {
                spans.push(Span::styled(format!(" {}", step.label), style));
            }

            // Connector between adjacent steps, except after the last
            if i + 1 != self.steps.len() {
                let connector_style = if phase == StepPhase::Future {
                    self.theme.step_future
                } else {
                    self.theme.step_connector
                };
                spans.push(Span::styled(format!(" {CONNECTOR} "), connector_style));
            }
        }

        Line::from(spans)
    }
}

const CONNECTOR: &str = "──";

impl Widget for StepBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 {
            return;
        }
        let line = self.line(area.width as usize);
        buf.set_line(area.x, area.y, &line, area.width);
    }
}
