//! Color theme for the TUI.
//!
//! Provides dark and light themes using a semantic color palette based
//! on Tailwind CSS colors, with the brand blue and amber accents of the
//! skip-hire storefront.

use ratatui::style::{Color, Modifier, Style};

/// Theme variant (dark or light).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeVariant {
    #[default]
    Dark,
    Light,
}

/// Color theme for the TUI.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Current theme variant.
    pub variant: ThemeVariant,

    // Base colors
    pub background: Color,
    pub foreground: Color,
    pub muted: Color,

    // Interactive elements
    pub selected: Style,

    // Offering card elements
    pub price: Style,
    pub recommended: Style,
    pub warning: Style,
    pub disabled: Style,

    // Step indicator
    pub step_done: Style,
    pub step_current: Style,
    pub step_future: Style,
    pub step_connector: Style,

    // Status colors
    pub success: Color,
    pub error: Color,
    pub info: Color,

    // UI elements
    pub border: Style,
    pub title: Style,
    pub help_key: Style,
    pub help_desc: Style,

    // Header/Footer
    pub header: Style,
    pub footer: Style,
}

impl Theme {
    /// Dark theme on a zinc-based palette.
    pub fn dark() -> Self {
        // Zinc palette (Tailwind CSS)
        let zinc_100 = Color::Rgb(244, 244, 245);
        let zinc_300 = Color::Rgb(212, 212, 216);
        let zinc_400 = Color::Rgb(161, 161, 170);
        let zinc_500 = Color::Rgb(113, 113, 122);
        let zinc_600 = Color::Rgb(82, 82, 91);
        let zinc_700 = Color::Rgb(63, 63, 70);
        let zinc_800 = Color::Rgb(39, 39, 42);
        let zinc_900 = Color::Rgb(24, 24, 27);

        // Accent colors (Tailwind CSS)
        let blue_400 = Color::Rgb(96, 165, 250);
        let amber_400 = Color::Rgb(251, 191, 36);
        let yellow_500 = Color::Rgb(234, 179, 8);
        let green_500 = Color::Rgb(34, 197, 94);
        let red_500 = Color::Rgb(239, 68, 68);

        Self {
            variant: ThemeVariant::Dark,
            background: zinc_900,
            foreground: zinc_100,
            muted: zinc_500,

            selected: Style::new().bg(zinc_700).fg(zinc_100).add_modifier(Modifier::BOLD),

            price: Style::new().fg(blue_400).add_modifier(Modifier::BOLD),
            recommended: Style::new().fg(amber_400).add_modifier(Modifier::BOLD),
            warning: Style::new().fg(yellow_500),
            disabled: Style::new().fg(zinc_600),

            step_done: Style::new().fg(blue_400),
            step_current: Style::new().fg(blue_400).add_modifier(Modifier::BOLD),
            step_future: Style::new().fg(zinc_600),
            step_connector: Style::new().fg(zinc_700),

            success: green_500,
            error: red_500,
            info: blue_400,

            border: Style::new().fg(zinc_600),
            title: Style::new().fg(blue_400).add_modifier(Modifier::BOLD),
            help_key: Style::new().fg(blue_400).add_modifier(Modifier::BOLD),
            help_desc: Style::new().fg(zinc_400),

            header: Style::new().bg(zinc_800).fg(zinc_100),
            footer: Style::new().bg(zinc_800).fg(zinc_300),
        }
    }

    /// Light theme on a zinc-based palette.
    pub fn light() -> Self {
        // Zinc palette (Tailwind CSS)
        let zinc_50 = Color::Rgb(250, 250, 250);
        let zinc_100 = Color::Rgb(244, 244, 245);
        let zinc_200 = Color::Rgb(228, 228, 231);
        let zinc_400 = Color::Rgb(161, 161, 170);
        let zinc_500 = Color::Rgb(113, 113, 122);
        let zinc_600 = Color::Rgb(82, 82, 91);
        let zinc_800 = Color::Rgb(39, 39, 42);
        let zinc_900 = Color::Rgb(24, 24, 27);

        // Accent colors (darker variants for light backgrounds)
        let blue_600 = Color::Rgb(37, 99, 235);
        let blue_700 = Color::Rgb(29, 78, 216);
        let amber_600 = Color::Rgb(217, 119, 6);
        let yellow_600 = Color::Rgb(202, 138, 4);
        let green_600 = Color::Rgb(22, 163, 74);
        let red_600 = Color::Rgb(220, 38, 38);

        Self {
            variant: ThemeVariant::Light,
            background: zinc_50,
            foreground: zinc_900,
            muted: zinc_500,

            selected: Style::new().bg(zinc_200).fg(zinc_900).add_modifier(Modifier::BOLD),

            price: Style::new().fg(blue_700).add_modifier(Modifier::BOLD),
            recommended: Style::new().fg(amber_600).add_modifier(Modifier::BOLD),
            warning: Style::new().fg(yellow_600),
            disabled: Style::new().fg(zinc_400),

            step_done: Style::new().fg(blue_700),
            step_current: Style::new().fg(blue_700).add_modifier(Modifier::BOLD),
            step_future: Style::new().fg(zinc_400),
            step_connector: Style::new().fg(zinc_200),

            success: green_600,
            error: red_600,
            info: blue_600,

            border: Style::new().fg(zinc_400),
            title: Style::new().fg(blue_700).add_modifier(Modifier::BOLD),
            help_key: Style::new().fg(blue_700).add_modifier(Modifier::BOLD),
            help_desc: Style::new().fg(zinc_600),

            header: Style::new().bg(zinc_100).fg(zinc_800),
            footer: Style::new().bg(zinc_100).fg(zinc_600),
        }
    }

    /// Create theme from variant.
    pub fn from_variant(variant: ThemeVariant) -> Self {
        match variant {
            ThemeVariant::Dark => Self::dark(),
            ThemeVariant::Light => Self::light(),
        }
    }

    /// Toggle between dark and light themes.
    pub fn toggle(&self) -> Self {
        match self.variant {
            ThemeVariant::Dark => Self::light(),
            ThemeVariant::Light => Self::dark(),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}
