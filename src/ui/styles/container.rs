// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{border, opacity, palette, radius, shadow};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Generic panel surface, e.g. the navigation bar backdrop.
///
/// Derived from the active `Theme` background with slight opacity, so
/// panels stay readable in both light and dark modes without
/// hard-coding colors.
pub fn panel(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();
    let base = palette.background.base.color;

    container::Style {
        background: Some(Background::Color(Color::from_rgba(
            base.r,
            base.g,
            base.b,
            opacity::SURFACE,
        ))),
        ..Default::default()
    }
}

/// Card surface for work items, service rows, and the contact panel.
pub fn card(theme: &Theme) -> container::Style {
    let extended = theme.extended_palette();

    container::Style {
        background: Some(Background::Color(extended.background.weak.color)),
        border: Border {
            color: Color {
                a: opacity::OVERLAY_SUBTLE,
                ..palette::GRAY_400
            },
            width: border::WIDTH_SM,
            radius: radius::LG.into(),
        },
        ..Default::default()
    }
}

/// Dimmed full-window backdrop behind the signup modal.
pub fn modal_backdrop(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::OVERLAY_STRONG,
            ..palette::BLACK
        })),
        ..Default::default()
    }
}

/// The modal dialog surface itself.
pub fn modal(theme: &Theme) -> container::Style {
    let extended = theme.extended_palette();

    container::Style {
        background: Some(Background::Color(extended.background.base.color)),
        border: Border {
            color: Color {
                a: opacity::OVERLAY_SUBTLE,
                ..palette::GRAY_400
            },
            width: border::WIDTH_SM,
            radius: radius::LG.into(),
        },
        shadow: shadow::LG,
        text_color: Some(theme.palette().text),
        ..Default::default()
    }
}

/// A solid bar filled with an explicit color (progress bar fill,
/// password strength segments).
pub fn filled(color: Color) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(color)),
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn panel_is_slightly_translucent() {
        let style = panel(&Theme::Dark);
        if let Some(Background::Color(color)) = style.background {
            assert!(color.a < 1.0);
            assert!(color.a > 0.9);
        } else {
            panic!("expected background color");
        }
    }

    #[test]
    fn modal_backdrop_dims_the_page() {
        let style = modal_backdrop(&Theme::Dark);
        if let Some(Background::Color(color)) = style.background {
            assert!(color.a > 0.5 && color.a < 1.0);
        } else {
            panic!("expected background color");
        }
    }

    #[test]
    fn filled_uses_the_given_color() {
        let style = filled(palette::SUCCESS_500)(&Theme::Dark);
        assert_eq!(
            style.background,
            Some(Background::Color(palette::SUCCESS_500))
        );
    }
}
