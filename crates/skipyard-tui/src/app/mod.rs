//! Main application state and logic.

mod constants;
pub mod state;

use std::time::Duration;

use crossterm::event::{Event, EventStream, KeyEventKind};
use futures::StreamExt;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Widget;
use ratatui::{DefaultTerminal, Frame};
use tokio::time::Instant;

use skipyard_browse::{size_options, BrowseView, FilterState, OfferingView, Pager};
use skipyard_core::Catalog;

use crate::event::KeyAction;
use crate::theme::Theme;
use crate::ui::{AppLayout, GridState, HelpOverlay, OfferingGrid, StepBar, CHECKOUT_STEPS};
use crate::TuiConfig;

use self::constants::{GRID_VIEWPORT_ROWS, PRICE_STEP, TICK_INTERVAL_MS};
use self::state::{AppMode, StatusMessage};

/// Application result type.
pub type AppResult<T> = color_eyre::Result<T>;

/// Main application state.
pub struct App {
    /// The immutable catalog for this session.
    catalog: Catalog,
    /// Launch configuration.
    config: TuiConfig,
    /// Live filter inputs, edited directly by key actions.
    filter: FilterState,
    /// Memoized derived view of the catalog.
    view: BrowseView,
    /// Pagination over the derived view.
    pager: Pager,
    /// Cursor and scroll state for the grid.
    grid_state: GridState,
    /// Distinct sizes on offer, for the size-filter cycle.
    sizes: Vec<u32>,
    /// Color theme.
    theme: Theme,
    /// Current mode.
    mode: AppMode,
    /// Transient status line.
    status: Option<StatusMessage>,
    /// Deadline of the pending debounced recomputation, if any.
    /// Re-armed on every filter edit; at most one is pending.
    recompute_at: Option<Instant>,
    /// Flag indicating UI needs redraw.
    needs_redraw: bool,
}

impl App {
    /// Create a new application with default config.
    pub fn new(catalog: Catalog) -> Self {
        Self::with_config(catalog, TuiConfig::default())
    }

    /// Create a new application with custom config.
    ///
    /// The initial view is computed immediately; only subsequent filter
    /// edits go through the debounce window.
    pub fn with_config(catalog: Catalog, config: TuiConfig) -> Self {
        let filter = FilterState::new(&catalog.stats);
        let sizes = size_options(&catalog);
        let pager = Pager::new(config.browse.page_size);

        let mut view = BrowseView::new();
        view.refresh(&catalog, &filter);

        Self {
            catalog,
            config,
            filter,
            view,
            pager,
            grid_state: GridState::new(),
            sizes,
            theme: Theme::dark(),
            mode: AppMode::default(),
            status: None,
            recompute_at: None,
            needs_redraw: true,
        }
    }

    /// Run the application with async event loop.
    pub async fn run(mut self, mut terminal: DefaultTerminal) -> AppResult<()> {
        let period = Duration::from_millis(TICK_INTERVAL_MS);
        let mut interval = tokio::time::interval(period);
        let mut events = EventStream::new();

        while self.mode != AppMode::Quit {
            if self.needs_redraw {
                terminal.draw(|frame| self.render(frame))?;
                self.needs_redraw = false;
            }

            tokio::select! {
                biased;

                Some(Ok(event)) = events.next() => {
                    match event {
                        Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                            let action = KeyAction::from_key_event(key_event);
                            self.handle_action(action);
                        }
                        Event::Resize(..) => {
                            // The step bar re-measures against the new
                            // width on the next draw.
                        }
                        _ => {}
                    }
                    self.needs_redraw = true;
                }

                _ = async {
                    match self.recompute_at {
                        Some(deadline) => tokio::time::sleep_until(deadline).await,
                        None => std::future::pending().await,
                    }
                } => {
                    self.apply_pending_recompute();
                    self.needs_redraw = true;
                }

                _ = interval.tick() => {
                    // Periodic tick keeps the loop responsive
                }
            }
        }

        Ok(())
    }

    /// Arm (or re-arm) the debounced recomputation.
    ///
    /// Each call replaces any previously pending deadline, so a burst of
    /// filter edits collapses into one recomputation reflecting only the
    /// final state.
    fn schedule_recompute(&mut self) {
        self.recompute_at = Some(Instant::now() + self.config.browse.debounce());
    }

    /// Commit the current filter inputs to the derived view.
    fn apply_pending_recompute(&mut self) {
        self.recompute_at = None;
        if self.view.refresh(&self.catalog, &self.filter) {
            let visible = self.pager.visible_len(self.view.len());
            self.grid_state.clamp(visible);
            self.grid_state.ensure_visible(GRID_VIEWPORT_ROWS);
        }
    }

    /// Whether a debounced recomputation is waiting to run.
    fn recompute_pending(&self) -> bool {
        self.recompute_at.is_some()
    }

    /// Offerings currently revealed by the pager.
    fn visible_items(&self) -> &[OfferingView] {
        let visible = self.pager.visible_len(self.view.len());
        &self.view.items()[..visible]
    }

    /// Handle a key action.
    fn handle_action(&mut self, action: KeyAction) {
        // Any action clears the previous status line
        if !matches!(action, KeyAction::None) {
            self.status = None;
        }

        if self.mode == AppMode::Help {
            if matches!(
                action,
                KeyAction::ToggleHelp | KeyAction::Quit | KeyAction::Cancel
            ) {
                self.mode = AppMode::Normal;
            }
            return;
        }

        match action {
            KeyAction::Quit | KeyAction::ForceQuit => {
                self.mode = AppMode::Quit;
            }
            KeyAction::Cancel => {}

            KeyAction::MoveUp => {
                self.grid_state.move_up();
                self.grid_state.ensure_visible(GRID_VIEWPORT_ROWS);
            }
            KeyAction::MoveDown => {
                let max = self.visible_items().len();
                self.grid_state.move_down(max);
                self.grid_state.ensure_visible(GRID_VIEWPORT_ROWS);
            }
            KeyAction::JumpToTop => {
                self.grid_state.jump_to_top();
                self.grid_state.ensure_visible(GRID_VIEWPORT_ROWS);
            }
            KeyAction::JumpToBottom => {
                let max = self.visible_items().len();
                self.grid_state.jump_to_bottom(max);
                self.grid_state.ensure_visible(GRID_VIEWPORT_ROWS);
            }

            KeyAction::CycleSize => {
                self.cycle_size(true);
                self.schedule_recompute();
            }
            KeyAction::CycleSizeBack => {
                self.cycle_size(false);
                self.schedule_recompute();
            }
            KeyAction::ToggleRoadOnly => {
                self.filter.only_on_road = !self.filter.only_on_road;
                self.schedule_recompute();
            }
            KeyAction::PriceDown => {
                let lowered = self.filter.max_price.saturating_sub(PRICE_STEP);
                self.filter.set_max_price(lowered, &self.catalog.stats);
                self.schedule_recompute();
            }
            KeyAction::PriceUp => {
                let raised = self.filter.max_price.saturating_add(PRICE_STEP);
                self.filter.set_max_price(raised, &self.catalog.stats);
                self.schedule_recompute();
            }
            KeyAction::CycleSort => {
                self.filter.sort_by = self.filter.sort_by.next();
                self.schedule_recompute();
            }

            KeyAction::ShowMore => {
                if self.pager.has_more(self.view.len()) {
                    self.pager.show_more();
                }
            }
            KeyAction::Select => {
                self.select_highlighted();
            }

            KeyAction::ToggleHelp => {
                self.mode = AppMode::Help;
            }
            KeyAction::ToggleTheme => {
                self.theme = self.theme.toggle();
            }

            KeyAction::None => {}
        }
    }

    /// Cycle the size filter: all sizes -> each size in order -> all.
    fn cycle_size(&mut self, forward: bool) {
        if self.sizes.is_empty() {
            return;
        }
        let position = self
            .filter
            .selected_size
            .and_then(|size| self.sizes.iter().position(|&s| s == size));

        self.filter.selected_size = if forward {
            match position {
                None => Some(self.sizes[0]),
                Some(i) if i + 1 < self.sizes.len() => Some(self.sizes[i + 1]),
                Some(_) => None,
            }
        } else {
            match position {
                None => Some(self.sizes[self.sizes.len() - 1]),
                Some(0) => None,
                Some(i) => Some(self.sizes[i - 1]),
            }
        };
    }

    /// Select the highlighted offering, if it is selectable.
    fn select_highlighted(&mut self) {
        let Some(item) = self.visible_items().get(self.grid_state.selected).cloned() else {
            return;
        };

        if item.selectable {
            tracing::info!(target: "browse", id = item.offering.id.0, "offering selected");
            self.status = Some(StatusMessage::success(format!(
                "Selected {} — £{} for {} days",
                item.offering.title(),
                item.price,
                item.offering.hire_period_days
            )));
        } else {
            self.status = Some(StatusMessage::warning(format!(
                "{} is not available for selection",
                item.offering.title()
            )));
        }
    }

    /// Render the application.
    fn render(&self, frame: &mut Frame) {
        frame.render_widget(self, frame.area());
    }

    fn render_filters(&self, area: Rect, buf: &mut Buffer) {
        let size_label = match self.filter.selected_size {
            Some(size) => format!("{size} yd"),
            None => "all".to_string(),
        };
        let road_label = if self.filter.only_on_road { "on" } else { "off" };

        let line = Line::from(vec![
            Span::styled(" [s] size: ", self.theme.help_desc),
            Span::styled(size_label, self.theme.help_key),
            Span::styled("  [r] road-only: ", self.theme.help_desc),
            Span::styled(road_label.to_string(), self.theme.help_key),
            Span::styled("  [-/+] max ", self.theme.help_desc),
            Span::styled(format!("£{}", self.filter.max_price), self.theme.help_key),
            Span::styled("  [o] sort: ", self.theme.help_desc),
            Span::styled(self.filter.sort_by.to_string(), self.theme.help_key),
        ]);
        buf.set_line(area.x, area.y, &line, area.width);
    }

    fn render_footer(&self, area: Rect, buf: &mut Buffer) {
        buf.set_style(area, self.theme.footer);

        let line = if let Some(status) = &self.status {
            let color = if status.success {
                self.theme.success
            } else {
                self.theme.error
            };
            Line::from(Span::styled(
                format!(" {}", status.text),
                Style::new().fg(color),
            ))
        } else if self.recompute_pending() {
            Line::from(Span::styled(" filtering…", self.theme.help_desc))
        } else {
            Line::from(vec![
                Span::styled(
                    format!(
                        " {} of {} skips",
                        self.pager.visible_len(self.view.len()),
                        self.view.len()
                    ),
                    self.theme.footer,
                ),
                Span::styled("   q quit  ? help", self.theme.help_desc),
            ])
        };
        buf.set_line(area.x, area.y, &line, area.width);
    }
}

impl Widget for &App {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let base_style = Style::default()
            .bg(self.theme.background)
            .fg(self.theme.foreground);
        buf.set_style(area, base_style);

        let layout = AppLayout::new(area);

        StepBar::new(&CHECKOUT_STEPS, self.config.current_step, &self.theme)
            .render(layout.steps, buf);

        self.render_filters(layout.filters, buf);

        let items = self.visible_items();
        if items.is_empty() {
            let line = Line::from(Span::styled(
                "  No skips match the current filters",
                Style::new().fg(self.theme.muted),
            ));
            buf.set_line(layout.main.x, layout.main.y, &line, layout.main.width);
        } else {
            let remaining = self.pager.remaining(self.view.len());
            let grid = OfferingGrid::new(items, remaining, &self.theme);
            let mut grid_state = self.grid_state.clone();
            ratatui::widgets::StatefulWidget::render(grid, layout.main, buf, &mut grid_state);
        }

        self.render_footer(layout.footer, buf);

        if self.mode == AppMode::Help {
            HelpOverlay::new(&self.theme).render(area, buf);
        }
    }
}
