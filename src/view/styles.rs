//! Theme palettes and color configuration.
//!
//! Every widget asks the [`Palette`] for its style instead of naming colors,
//! so switching theme or disabling color is a single decision made here.

use crate::model::Theme;
use ratatui::style::{Color, Modifier, Style};

// ===== ColorConfig =====

/// Configuration for color output.
///
/// Determines whether colors should be enabled or disabled based on:
/// - `--no-color` CLI flag
/// - `NO_COLOR` environment variable
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorConfig {
    enabled: bool,
}

impl ColorConfig {
    /// Create a ColorConfig from CLI args and environment.
    ///
    /// Priority (first match wins):
    /// 1. `--no-color` flag (disables colors)
    /// 2. `NO_COLOR` env var (any value disables colors)
    /// 3. Default: colors enabled
    pub fn from_env_and_args(no_color_flag: bool) -> Self {
        let enabled = !no_color_flag && std::env::var("NO_COLOR").is_err();
        Self { enabled }
    }

    /// Colours on.
    pub const fn enabled() -> Self {
        Self { enabled: true }
    }

    /// Colours off.
    pub const fn disabled() -> Self {
        Self { enabled: false }
    }

    /// Check if colors are enabled.
    pub fn colors_enabled(self) -> bool {
        self.enabled
    }
}

impl Default for ColorConfig {
    fn default() -> Self {
        Self::enabled()
    }
}

// ===== Palette =====

/// Resolved styles for one theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Page background and body text.
    pub base: Style,
    /// Secondary copy: subtitles, descriptions.
    pub muted: Style,
    /// Brand accent: eyebrows, active nav item, cursor.
    pub accent: Style,
    /// Section and card headings.
    pub heading: Style,
    /// Card and modal borders.
    pub border: Style,
    /// Hovered or focused interactive element.
    pub highlight: Style,
    /// Technology chips.
    pub chip: Style,
    /// Crawl text over the starfield.
    pub crawl: Style,
    /// Dim stars.
    pub star_dim: Style,
    /// Bright stars.
    pub star_bright: Style,
    /// Navigation bar and status bar background.
    pub bar: Style,
    /// Sent confirmation.
    pub success: Style,
    /// Validation and delivery failures.
    pub error: Style,
}

impl Palette {
    /// Palette for `theme`, monochrome when colours are off.
    pub fn for_theme(theme: Theme, colors: ColorConfig) -> Self {
        if !colors.colors_enabled() {
            return Self::monochrome();
        }
        match theme {
            Theme::Dark => Self::dark(),
            Theme::Light => Self::light(),
        }
    }

    fn dark() -> Self {
        let bg = Color::Rgb(10, 10, 12);
        let fg = Color::Rgb(235, 235, 235);
        let accent = Color::Rgb(255, 214, 10);
        Self {
            base: Style::default().fg(fg).bg(bg),
            muted: Style::default().fg(Color::Rgb(150, 150, 160)).bg(bg),
            accent: Style::default().fg(accent).bg(bg),
            heading: Style::default()
                .fg(Color::White)
                .bg(bg)
                .add_modifier(Modifier::BOLD),
            border: Style::default().fg(Color::Rgb(70, 70, 80)).bg(bg),
            highlight: Style::default()
                .fg(bg)
                .bg(accent)
                .add_modifier(Modifier::BOLD),
            chip: Style::default().fg(Color::Rgb(180, 200, 255)).bg(bg),
            crawl: Style::default().fg(accent).bg(Color::Black),
            star_dim: Style::default().fg(Color::Rgb(90, 90, 110)).bg(Color::Black),
            star_bright: Style::default().fg(Color::White).bg(Color::Black),
            bar: Style::default().fg(fg).bg(Color::Rgb(24, 24, 30)),
            success: Style::default().fg(Color::Green).bg(bg),
            error: Style::default().fg(Color::Red).bg(bg),
        }
    }

    fn light() -> Self {
        let bg = Color::Rgb(250, 250, 247);
        let fg = Color::Rgb(25, 25, 30);
        let accent = Color::Rgb(180, 83, 9);
        Self {
            base: Style::default().fg(fg).bg(bg),
            muted: Style::default().fg(Color::Rgb(100, 100, 110)).bg(bg),
            accent: Style::default().fg(accent).bg(bg),
            heading: Style::default()
                .fg(Color::Black)
                .bg(bg)
                .add_modifier(Modifier::BOLD),
            border: Style::default().fg(Color::Rgb(200, 200, 205)).bg(bg),
            highlight: Style::default()
                .fg(bg)
                .bg(accent)
                .add_modifier(Modifier::BOLD),
            chip: Style::default().fg(Color::Rgb(30, 64, 175)).bg(bg),
            crawl: Style::default().fg(Color::Rgb(255, 214, 10)).bg(Color::Black),
            star_dim: Style::default().fg(Color::Rgb(90, 90, 110)).bg(Color::Black),
            star_bright: Style::default().fg(Color::White).bg(Color::Black),
            bar: Style::default().fg(fg).bg(Color::Rgb(232, 232, 228)),
            success: Style::default().fg(Color::Rgb(21, 128, 61)).bg(bg),
            error: Style::default().fg(Color::Rgb(185, 28, 28)).bg(bg),
        }
    }

    /// Modifiers only, for `NO_COLOR` terminals.
    fn monochrome() -> Self {
        let plain = Style::default();
        Self {
            base: plain,
            muted: plain.add_modifier(Modifier::DIM),
            accent: plain.add_modifier(Modifier::BOLD),
            heading: plain.add_modifier(Modifier::BOLD),
            border: plain,
            highlight: plain.add_modifier(Modifier::REVERSED),
            chip: plain,
            crawl: plain.add_modifier(Modifier::BOLD),
            star_dim: plain.add_modifier(Modifier::DIM),
            star_bright: plain,
            bar: plain.add_modifier(Modifier::REVERSED),
            success: plain.add_modifier(Modifier::BOLD),
            error: plain.add_modifier(Modifier::BOLD),
        }
    }

    /// `highlight` when `active`, otherwise `style`.
    pub fn emphasize(&self, style: Style, active: bool) -> Style {
        if active {
            self.highlight
        } else {
            style
        }
    }
}
