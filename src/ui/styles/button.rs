// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.
//!
//! The studio look is monochrome: primary actions are filled with the
//! inverse of the surface (black on light, white on dark), secondary
//! actions are outlined, and navigation links are bare text.

use crate::ui::design_tokens::{
    opacity,
    palette::{self, BLACK, WHITE},
    radius, shadow,
};
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

fn is_light(theme: &Theme) -> bool {
    matches!(theme, Theme::Light)
}

/// Filled primary button (submit, hero call-to-action).
pub fn primary(theme: &Theme, status: button::Status) -> button::Style {
    let (fill, text, hover_fill) = if is_light(theme) {
        (BLACK, WHITE, palette::GRAY_700)
    } else {
        (WHITE, BLACK, palette::GRAY_200)
    };

    match status {
        button::Status::Active | button::Status::Pressed => button::Style {
            background: Some(Background::Color(fill)),
            text_color: text,
            border: Border {
                radius: radius::SM.into(),
                ..Default::default()
            },
            shadow: shadow::SM,
            snap: true,
        },
        button::Status::Hovered => button::Style {
            background: Some(Background::Color(hover_fill)),
            text_color: text,
            border: Border {
                radius: radius::SM.into(),
                ..Default::default()
            },
            shadow: shadow::MD,
            snap: true,
        },
        button::Status::Disabled => button::Style {
            background: Some(Background::Color(if is_light(theme) {
                palette::GRAY_200
            } else {
                palette::GRAY_700
            })),
            text_color: palette::GRAY_400,
            border: Border {
                radius: radius::SM.into(),
                ..Default::default()
            },
            shadow: shadow::NONE,
            snap: true,
        },
    }
}

/// Outlined secondary button.
pub fn secondary(theme: &Theme, status: button::Status) -> button::Style {
    let (text, border_color) = if is_light(theme) {
        (palette::GRAY_900, palette::GRAY_400)
    } else {
        (WHITE, palette::GRAY_400)
    };

    let background = match status {
        button::Status::Hovered => Some(Background::Color(Color {
            a: opacity::OVERLAY_SUBTLE,
            ..palette::GRAY_400
        })),
        button::Status::Pressed => Some(Background::Color(Color {
            a: opacity::OVERLAY_MEDIUM,
            ..palette::GRAY_400
        })),
        _ => None,
    };

    button::Style {
        background,
        text_color: if matches!(status, button::Status::Disabled) {
            palette::GRAY_400
        } else {
            text
        },
        border: Border {
            color: border_color,
            width: 1.0,
            radius: radius::SM.into(),
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Bare text button for navigation links; an `active` link is
/// rendered at full strength, inactive ones dimmed.
pub fn nav_link(active: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |theme: &Theme, status: button::Status| {
        let base_text = if is_light(theme) {
            palette::GRAY_900
        } else {
            WHITE
        };
        let dimmed = if is_light(theme) {
            palette::GRAY_400
        } else {
            palette::GRAY_300
        };

        let text_color = if active || matches!(status, button::Status::Hovered) {
            base_text
        } else {
            dimmed
        };

        button::Style {
            background: None,
            text_color,
            border: Border::default(),
            shadow: shadow::NONE,
            snap: true,
        }
    }
}

/// Bare button wrapping a scroll-indicator dot or the modal close
/// glyph: no chrome at all, only a text color.
pub fn bare(text_color: Color) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| button::Style {
        background: None,
        text_color: match status {
            button::Status::Hovered | button::Status::Pressed => text_color,
            _ => Color {
                a: opacity::OVERLAY_HOVER,
                ..text_color
            },
        },
        border: Border::default(),
        shadow: shadow::NONE,
        snap: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primary_button_inverts_with_theme() {
        let dark = primary(&Theme::Dark, button::Status::Active);
        let light = primary(&Theme::Light, button::Status::Active);

        assert_eq!(dark.text_color, BLACK);
        assert_eq!(light.text_color, WHITE);
    }

    #[test]
    fn primary_hover_changes_background() {
        let theme = Theme::Dark;
        let active = primary(&theme, button::Status::Active);
        let hovered = primary(&theme, button::Status::Hovered);
        assert_ne!(active.background, hovered.background);
    }

    #[test]
    fn nav_link_dims_inactive_entries() {
        let theme = Theme::Dark;
        let active = nav_link(true)(&theme, button::Status::Active);
        let inactive = nav_link(false)(&theme, button::Status::Active);
        assert_ne!(active.text_color, inactive.text_color);
    }

    #[test]
    fn secondary_has_no_fill_at_rest() {
        let style = secondary(&Theme::Dark, button::Status::Active);
        assert!(style.background.is_none());
    }
}
