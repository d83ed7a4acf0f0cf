// SPDX-License-Identifier: MPL-2.0
//! Container styles for the page sections.

use crate::portfolio::Accent;
use crate::ui::design_tokens::palette::{self, BLACK, WHITE};
use iced::widget::container;
use iced::{Background, Color, Theme};

/// Fixed black bar at the top of the window.
pub fn navbar(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(BLACK)),
        text_color: Some(WHITE),
        ..Default::default()
    }
}

/// About section backdrop when no background image is configured.
pub fn hero(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::PINK_900)),
        text_color: Some(WHITE),
        ..Default::default()
    }
}

/// Text laid over the About background image.
pub fn hero_text(_theme: &Theme) -> container::Style {
    container::Style {
        text_color: Some(WHITE),
        ..Default::default()
    }
}

/// Contact section, following the active theme.
pub fn contact(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();

    container::Style {
        background: Some(Background::Color(palette.background.weak.color)),
        text_color: Some(palette.background.weak.text),
        ..Default::default()
    }
}

/// Projects heading band.
pub fn projects_heading(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::GRAY_900)),
        text_color: Some(WHITE),
        ..Default::default()
    }
}

/// Background of one project section, painted in the project's accent.
pub fn accent_section(accent: Accent) -> impl Fn(&Theme) -> container::Style {
    let color = accent_color(accent);
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(color)),
        text_color: Some(readable_text_on(color)),
        ..Default::default()
    }
}

#[must_use]
pub fn accent_color(accent: Accent) -> Color {
    Color::from_rgb8(accent.r, accent.g, accent.b)
}

/// Black or white, whichever reads better on `background`.
fn readable_text_on(background: Color) -> Color {
    let luminance = 0.299 * background.r + 0.587 * background.g + 0.114 * background.b;
    if luminance > 0.6 {
        palette::GRAY_900
    } else {
        WHITE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accent_section_uses_accent_background() {
        let style = accent_section(Accent::rgb(0x2c, 0x45, 0x4c))(&Theme::Light);
        assert_eq!(
            style.background,
            Some(Background::Color(Color::from_rgb8(0x2c, 0x45, 0x4c)))
        );
    }

    #[test]
    fn light_accents_get_dark_text() {
        assert_eq!(readable_text_on(Color::from_rgb8(0xaa, 0xaa, 0xaa)), palette::GRAY_900);
        assert_eq!(readable_text_on(Color::from_rgb8(0x00, 0x00, 0xff)), WHITE);
    }
}
