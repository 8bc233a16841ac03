//! Help overlay widget.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Widget};

use crate::event::get_help_sections;
use crate::theme::Theme;

/// Help overlay showing key bindings organized by section.
pub struct HelpOverlay<'a> {
    theme: &'a Theme,
}

impl<'a> HelpOverlay<'a> {
    /// Create a new help overlay.
    pub fn new(theme: &'a Theme) -> Self {
        Self { theme }
    }
}

impl Widget for HelpOverlay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let popup_width = 50.min(area.width.saturating_sub(4));
        let popup_height = 20.min(area.height.saturating_sub(4));

        let popup_x = (area.width.saturating_sub(popup_width)) / 2 + area.x;
        let popup_y = (area.height.saturating_sub(popup_height)) / 2 + area.y;

        let popup_area = Rect::new(popup_x, popup_y, popup_width, popup_height);

        Clear.render(popup_area, buf);

        let block = Block::default()
            .title(" Help - Press ? or Esc to close ")
            .title_style(self.theme.title)
            .borders(Borders::ALL)
            .border_style(self.theme.border);

        let inner = block.inner(popup_area);
        block.render(popup_area, buf);

        let mut y = inner.y;
        for section in get_help_sections() {
            if y >= inner.y + inner.height {
                break;
            }

            let title_line = Line::from(Span::styled(
                section.title,
                Style::default()
                    .fg(self.theme.info)
                    .add_modifier(Modifier::BOLD),
            ));
            buf.set_line(inner.x, y, &title_line, inner.width);
            y += 1;

            for binding in &section.bindings {
                if y >= inner.y + inner.height {
                    break;
                }

                let key_span = Span::styled(format!("{:>10}", binding.keys), self.theme.help_key);
                let desc_span =
                    Span::styled(format!(" {}", binding.description), self.theme.help_desc);
                buf.set_line(inner.x, y, &Line::from(vec![key_span, desc_span]), inner.width);
                y += 1;
            }

            // Spacing between sections
            y += 1;
        }
    }
}
