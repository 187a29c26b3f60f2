// SPDX-License-Identifier: MPL-2.0
//! Vertical dot rail marking the active section.
//!
//! One dot per section, pinned to the right edge of the window. The
//! active dot is filled; clicking any dot scrolls to its section.

use crate::domain::section::Section;
use crate::ui::design_tokens::{sizing, spacing};
use crate::ui::styles;
use iced::{
    alignment::{Horizontal, Vertical},
    widget::{button, Column, Container, Text},
    Element, Length, Theme,
};

/// Messages emitted by the indicator.
#[derive(Debug, Clone)]
pub enum Message {
    DotPressed(Section),
}

/// Renders the dot rail with the given active section.
pub fn view<'a>(active: Section) -> Element<'a, Message> {
    let mut dots = Column::new()
        .spacing(spacing::SM)
        .align_x(Horizontal::Center);

    for section in Section::ALL {
        let glyph = if section == active {
            "\u{25CF}" // filled circle
        } else {
            "\u{25CB}" // hollow circle
        };
        let dot = button(Text::new(glyph).size(sizing::INDICATOR_DOT))
            .on_press(Message::DotPressed(section))
            .padding(spacing::XXS)
            .style(move |theme: &Theme, status| {
                styles::button::bare(theme.palette().text)(theme, status)
            });
        dots = dots.push(dot);
    }

    Container::new(dots)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(Horizontal::Right)
        .align_y(Vertical::Center)
        .padding(spacing::LG)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_for_every_active_section() {
        for section in Section::ALL {
            let _element = view(section);
        }
    }
}
