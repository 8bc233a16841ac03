//! Offering grid widget.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::StatefulWidget;

use skipyard_browse::OfferingView;

use crate::theme::Theme;
use crate::ui::format_price;

/// Cursor and scroll state for the offering grid.
#[derive(Debug, Default, Clone)]
pub struct GridState {
    /// Currently highlighted row among the visible offerings.
    pub selected: usize,
    /// Scroll offset.
    pub offset: usize,
}

impl GridState {
    /// Create new grid state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Move selection up.
    pub fn move_up(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    /// Move selection down.
    pub fn move_down(&mut self, max: usize) {
        self.selected = (self.selected + 1).min(max.saturating_sub(1));
    }

    /// Jump to the first row.
    pub fn jump_to_top(&mut self) {
        self.selected = 0;
    }

    /// Jump to the last visible row.
    pub fn jump_to_bottom(&mut self, max: usize) {
        self.selected = max.saturating_sub(1);
    }

    /// Clamp selection after the visible list shrank.
    pub fn clamp(&mut self, max: usize) {
        if max == 0 {
            self.selected = 0;
            self.offset = 0;
        } else if self.selected >= max {
            self.selected = max - 1;
        }
    }

    /// Ensure the selected row is inside the viewport.
    pub fn ensure_visible(&mut self, viewport_rows: usize) {
        if viewport_rows == 0 {
            return;
        }
        if self.selected < self.offset {
            self.offset = self.selected;
        } else if self.selected >= self.offset + viewport_rows {
            self.offset = self.selected - viewport_rows + 1;
        }
    }
}

/// Grid of skip offerings with derived prices and availability badges.
pub struct OfferingGrid<'a> {
    /// Offerings revealed by the pager, in display order.
    items: &'a [OfferingView],
    /// Offerings still hidden behind "show more".
    remaining: usize,
    theme: &'a Theme,
}

impl<'a> OfferingGrid<'a> {
    /// Create a grid over the revealed slice of the derived view.
    pub fn new(items: &'a [OfferingView], remaining: usize, theme: &'a Theme) -> Self {
        Self {
            items,
            remaining,
            theme,
        }
    }

    fn row(&self, item: &OfferingView, selected: bool) -> Line<'static> {
        let base = if item.selectable {
            ratatui::style::Style::new().fg(self.theme.foreground)
        } else {
            self.theme.disabled
        };
        let marker_style = if selected {
            self.theme.selected
        } else {
            base
        };

        let marker = if selected { "▸ " } else { "  " };
        let price_style = if item.selectable {
            self.theme.price
        } else {
            self.theme.disabled
        };
        let hire_style = if item.selectable {
            self.theme.help_desc
        } else {
            self.theme.disabled
        };

        let mut spans = vec![
            Span::styled(marker.to_string(), marker_style),
            Span::styled(format!("{:<14}", item.offering.title()), base),
            Span::styled(format!("{:>6}", format_price(item.price)), price_style),
            Span::styled(
                format!("  {:>2} day hire", item.offering.hire_period_days),
                hire_style,
            ),
        ];

        if item.offering.recommended {
            spans.push(Span::styled("  ★ Recommended".to_string(), self.theme.recommended));
        }
        if !item.offering.allowed_on_road {
            spans.push(Span::styled(
                "  ⚠ Not allowed on the road".to_string(),
                self.theme.warning,
            ));
        }
        if !item.selectable {
            spans.push(Span::styled("  (unavailable)".to_string(), self.theme.disabled));
        }

        Line::from(spans)
    }
}

impl StatefulWidget for OfferingGrid<'_> {
    type State = GridState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut GridState) {
        if area.height == 0 {
            return;
        }

        // One row reserved for the "show more" control when present
        let control_rows = usize::from(self.remaining > 0);
        let viewport_rows = (area.height as usize).saturating_sub(control_rows);

        state.clamp(self.items.len());
        state.ensure_visible(viewport_rows);

        let mut y = area.y;
        for (i, item) in self
            .items
            .iter()
            .enumerate()
            .skip(state.offset)
            .take(viewport_rows)
        {
            let line = self.row(item, i == state.selected);
            buf.set_line(area.x, y, &line, area.width);
            y += 1;
        }

        if self.remaining > 0 && y < area.y + area.height {
            let line = Line::from(Span::styled(
                format!("── m: show {} more ──", self.remaining),
                self.theme.help_key,
            ));
            buf.set_line(area.x, y, &line, area.width);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_state_navigation() {
        let mut state = GridState::new();

        state.move_down(3);
        state.move_down(3);
        assert_eq!(state.selected, 2);

        // Clamped at the end
        state.move_down(3);
        assert_eq!(state.selected, 2);

        state.move_up();
        assert_eq!(state.selected, 1);

        state.jump_to_bottom(10);
        assert_eq!(state.selected, 9);
        state.jump_to_top();
        assert_eq!(state.selected, 0);
    }

    #[test]
    fn test_grid_state_clamps_when_list_shrinks() {
        let mut state = GridState::new();
        state.selected = 8;
        state.clamp(3);
        assert_eq!(state.selected, 2);

        state.clamp(0);
        assert_eq!(state.selected, 0);
        assert_eq!(state.offset, 0);
    }

    #[test]
    fn test_ensure_visible_scrolls() {
        let mut state = GridState::new();
        state.selected = 12;
        state.ensure_visible(10);
        assert_eq!(state.offset, 3);

        state.selected = 1;
        state.ensure_visible(10);
        assert_eq!(state.offset, 1);
    }
}
