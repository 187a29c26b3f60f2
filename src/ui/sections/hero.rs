// SPDX-License-Identifier: MPL-2.0
//! Hero section: headline, sub-copy, the two calls to action, and a
//! scroll-down hint pinned to the bottom of the viewport.

use crate::domain::section::Section;
use crate::i18n::I18n;
use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::styles;
use iced::{
    alignment::Horizontal,
    widget::{button, Column, Container, Row, Text},
    Element, Length,
};

#[derive(Debug, Clone)]
pub enum Message {
    ViewWorkPressed,
    SignupPressed,
}

#[derive(Debug, Clone)]
pub enum Event {
    ScrollTo(Section),
    OpenSignup,
}

pub fn update(message: Message) -> Event {
    match message {
        Message::ViewWorkPressed => Event::ScrollTo(Section::Work),
        Message::SignupPressed => Event::OpenSignup,
    }
}

/// Render the hero. `height` is the section's share of the page so the
/// hint can sit at its bottom edge.
pub fn view<'a>(i18n: &'a I18n, height: f32) -> Element<'a, Message> {
    let title = Text::new(i18n.tr("hero-title")).size(typography::DISPLAY);

    let subtitle = Text::new(i18n.tr("hero-subtitle"))
        .size(typography::BODY_LG)
        .color(palette::GRAY_400);

    let view_work = button(Text::new(i18n.tr("hero-view-work")).size(typography::BODY))
        .on_press(Message::ViewWorkPressed)
        .padding([spacing::SM, spacing::XL])
        .style(styles::button::primary);

    let signup = button(Text::new(i18n.tr("hero-signup")).size(typography::BODY))
        .on_press(Message::SignupPressed)
        .padding([spacing::SM, spacing::XL])
        .style(styles::button::secondary);

    let actions = Row::new()
        .spacing(spacing::MD)
        .push(view_work)
        .push(signup);

    let copy = Column::new()
        .spacing(spacing::LG)
        .max_width(800.0)
        .push(title)
        .push(subtitle)
        .push(actions);

    let hint = Text::new(i18n.tr("hero-scroll-hint"))
        .size(typography::CAPTION)
        .color(palette::GRAY_400)
        .width(Length::Fill)
        .align_x(Horizontal::Center);

    Column::new()
        .height(Length::Fixed(height))
        .padding([spacing::SECTION, spacing::XL])
        .push(
            Container::new(copy)
                .width(Length::Fill)
                .height(Length::Fill)
                .align_y(iced::alignment::Vertical::Center),
        )
        .push(hint)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn view_work_scrolls_to_the_work_section() {
        let event = update(Message::ViewWorkPressed);
        assert!(matches!(event, Event::ScrollTo(Section::Work)));
    }

    #[test]
    fn signup_opens_the_modal() {
        assert!(matches!(update(Message::SignupPressed), Event::OpenSignup));
    }

    #[test]
    fn view_renders() {
        let i18n = I18n::default();
        let _element = view(&i18n, 800.0);
    }
}
