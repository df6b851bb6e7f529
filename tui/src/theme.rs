//! Color theme for the Datapad TUI.
//!
//! A dark holo-terminal palette by default with an optional high-contrast
//! override. Swatch colors are fixed and shared by both palettes so the
//! range buckets always read the same.

use ratatui::style::{Color, Modifier, Style};

use datapad_types::Swatch;

/// Default palette constants.
mod colors {
    use super::Color;

    // === Backgrounds ===
    pub const BG_DARK: Color = Color::Rgb(13, 17, 23);
    pub const BG_PANEL: Color = Color::Rgb(22, 27, 34);
    pub const BG_HIGHLIGHT: Color = Color::Rgb(38, 45, 58);
    pub const BG_BORDER: Color = Color::Rgb(48, 54, 61);

    // === Foregrounds ===
    pub const TEXT_PRIMARY: Color = Color::Rgb(228, 234, 241);
    pub const TEXT_SECONDARY: Color = Color::Rgb(158, 167, 179);
    pub const TEXT_MUTED: Color = Color::Rgb(106, 115, 125);

    // === Accents ===
    pub const ACCENT: Color = Color::Rgb(255, 224, 102); // holo amber
    pub const ERROR: Color = Color::Rgb(248, 81, 73);

    // === Swatches (range buckets) ===
    pub const SWATCH_CRIMSON: Color = Color::Rgb(242, 127, 111);
    pub const SWATCH_VERDANT: Color = Color::Rgb(96, 216, 96);
    pub const SWATCH_AZURE: Color = Color::Rgb(64, 191, 241);
}

/// Resolved theme palette used by the UI.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub bg_dark: Color,
    pub bg_panel: Color,
    pub bg_highlight: Color,
    pub bg_border: Color,
    pub text_primary: Color,
    pub text_secondary: Color,
    pub text_muted: Color,
    pub accent: Color,
    pub error: Color,
}

impl Palette {
    #[must_use]
    pub fn new(high_contrast: bool) -> Self {
        if high_contrast {
            Self {
                bg_dark: Color::Black,
                bg_panel: Color::Black,
                bg_highlight: Color::DarkGray,
                bg_border: Color::White,
                text_primary: Color::White,
                text_secondary: Color::Gray,
                text_muted: Color::Gray,
                accent: Color::Yellow,
                error: Color::Red,
            }
        } else {
            Self {
                bg_dark: colors::BG_DARK,
                bg_panel: colors::BG_PANEL,
                bg_highlight: colors::BG_HIGHLIGHT,
                bg_border: colors::BG_BORDER,
                text_primary: colors::TEXT_PRIMARY,
                text_secondary: colors::TEXT_SECONDARY,
                text_muted: colors::TEXT_MUTED,
                accent: colors::ACCENT,
                error: colors::ERROR,
            }
        }
    }

    /// Terminal color for a range swatch.
    #[must_use]
    pub fn swatch_color(swatch: Swatch) -> Color {
        match swatch {
            Swatch::Crimson => colors::SWATCH_CRIMSON,
            Swatch::Verdant => colors::SWATCH_VERDANT,
            Swatch::Azure => colors::SWATCH_AZURE,
        }
    }

    #[must_use]
    pub fn header_style(&self) -> Style {
        Style::default()
            .fg(self.accent)
            .bg(self.bg_dark)
            .add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn panel_style(&self) -> Style {
        Style::default().fg(self.text_primary).bg(self.bg_panel)
    }

    #[must_use]
    pub fn border_style(&self) -> Style {
        Style::default().fg(self.bg_border)
    }

    #[must_use]
    pub fn hovered_style(&self) -> Style {
        Style::default()
            .fg(self.accent)
            .bg(self.bg_highlight)
            .add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn card_title_style(&self) -> Style {
        Style::default()
            .fg(self.text_primary)
            .add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn detail_style(&self) -> Style {
        Style::default().fg(self.text_secondary)
    }

    #[must_use]
    pub fn hint_style(&self) -> Style {
        Style::default().fg(self.text_muted)
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::new(false)
    }
}

#[cfg(test)]
mod tests {
    use super::Palette;
    use datapad_types::Swatch;
    use ratatui::style::Color;

    #[test]
    fn swatch_colors_match_their_bucket() {
        assert_eq!(
            Palette::swatch_color(Swatch::Crimson),
            Color::Rgb(242, 127, 111)
        );
        assert_eq!(
            Palette::swatch_color(Swatch::Verdant),
            Color::Rgb(96, 216, 96)
        );
        assert_eq!(
            Palette::swatch_color(Swatch::Azure),
            Color::Rgb(64, 191, 241)
        );
    }

    #[test]
    fn high_contrast_drops_the_tinted_backgrounds() {
        let palette = Palette::new(true);
        assert_eq!(palette.bg_dark, Color::Black);
        assert_eq!(palette.text_primary, Color::White);
    }
}
