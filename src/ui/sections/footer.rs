// SPDX-License-Identifier: MPL-2.0
//! Footer: copyright line and social links. The links copy their URL
//! to the clipboard, same affordance as the contact rows.

use crate::i18n::I18n;
use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::styles;
use iced::{
    alignment::Vertical,
    widget::{button, Container, Row, Text},
    Element, Length,
};

#[derive(Debug, Clone, Copy)]
pub struct SocialLink {
    pub name: &'static str,
    pub url: &'static str,
}

pub const SOCIAL_LINKS: [SocialLink; 3] = [
    SocialLink { name: "Twitter", url: "https://twitter.com/rofa" },
    SocialLink { name: "LinkedIn", url: "https://linkedin.com/company/rofa" },
    SocialLink { name: "GitHub", url: "https://github.com/rofa" },
];

#[derive(Debug, Clone)]
pub enum Message {
    SocialPressed(usize),
}

#[derive(Debug, Clone)]
pub enum Event {
    /// Copy `value` to the clipboard and toast `toast_key`.
    Copy {
        toast_key: &'static str,
        value: &'static str,
    },
    None,
}

pub fn update(message: Message) -> Event {
    match message {
        Message::SocialPressed(index) => match SOCIAL_LINKS.get(index) {
            Some(link) => Event::Copy {
                toast_key: "toast-link-copied",
                value: link.url,
            },
            None => Event::None,
        },
    }
}

pub fn view<'a>(i18n: &'a I18n, height: f32) -> Element<'a, Message> {
    let rights = Text::new(i18n.tr("footer-rights"))
        .size(typography::BODY_SM)
        .color(palette::GRAY_400)
        .width(Length::Fill);

    let mut socials = Row::new().spacing(spacing::MD);
    for (index, link) in SOCIAL_LINKS.iter().enumerate() {
        socials = socials.push(
            button(Text::new(link.name).size(typography::BODY_SM))
                .on_press(Message::SocialPressed(index))
                .padding([spacing::XXS, spacing::XS])
                .style(styles::button::bare(palette::GRAY_400)),
        );
    }

    let row = Row::new()
        .align_y(Vertical::Center)
        .push(rights)
        .push(socials);

    Container::new(row)
        .width(Length::Fill)
        .height(Length::Fixed(height))
        .padding([0.0, spacing::XL])
        .align_y(Vertical::Center)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn socials_copy_their_url() {
        match update(Message::SocialPressed(2)) {
            Event::Copy { value, .. } => assert_eq!(value, "https://github.com/rofa"),
            Event::None => panic!("expected a copy event"),
        }
    }

    #[test]
    fn out_of_range_social_is_ignored() {
        assert!(matches!(update(Message::SocialPressed(9)), Event::None));
    }

    #[test]
    fn view_renders() {
        let i18n = I18n::default();
        let _element = view(&i18n, 200.0);
    }
}
