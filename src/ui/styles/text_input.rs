// SPDX-License-Identifier: MPL-2.0
//! Text input styles, with an error variant for invalid fields.

use crate::ui::design_tokens::{border, palette, radius};
use iced::widget::text_input;
use iced::{Background, Border, Theme};

/// Standard form input. `invalid` switches the border to the error
/// color so a rejected field is visible before the user reads the
/// message underneath it.
pub fn form(invalid: bool) -> impl Fn(&Theme, text_input::Status) -> text_input::Style {
    move |theme: &Theme, status: text_input::Status| {
        let extended = theme.extended_palette();

        let border_color = if invalid {
            palette::ERROR_500
        } else {
            match status {
                text_input::Status::Focused { .. } => extended.background.strong.text,
                _ => palette::GRAY_400,
            }
        };

        text_input::Style {
            background: Background::Color(extended.background.weak.color),
            border: Border {
                color: border_color,
                width: border::WIDTH_SM,
                radius: radius::SM.into(),
            },
            icon: extended.background.weak.text,
            placeholder: palette::GRAY_400,
            value: theme.palette().text,
            selection: extended.primary.weak.color,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_input_gets_error_border() {
        let theme = Theme::Dark;
        let style = form(true)(
            &theme,
            text_input::Status::Active,
        );
        assert_eq!(style.border.color, palette::ERROR_500);
    }

    #[test]
    fn valid_input_keeps_neutral_border() {
        let theme = Theme::Dark;
        let style = form(false)(
            &theme,
            text_input::Status::Active,
        );
        assert_ne!(style.border.color, palette::ERROR_500);
    }
}
