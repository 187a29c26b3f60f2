// SPDX-License-Identifier: MPL-2.0
//! Services section: four numbered rows.

use crate::i18n::I18n;
use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::styles;
use iced::{
    widget::{Column, Container, Row, Text},
    Element, Length,
};

pub const SERVICE_SLUGS: [&str; 4] = ["frontend", "backend", "mobile", "cloud"];

pub fn view<'a, Message: 'a>(i18n: &'a I18n) -> Element<'a, Message> {
    let heading = Column::new()
        .spacing(spacing::XS)
        .push(Text::new(i18n.tr("services-title")).size(typography::TITLE_LG))
        .push(
            Text::new(i18n.tr("services-subtitle"))
                .size(typography::BODY_SM)
                .color(palette::GRAY_400),
        );

    let mut rows = Column::new().spacing(spacing::MD);
    for (index, slug) in SERVICE_SLUGS.iter().enumerate() {
        rows = rows.push(service_row(i18n, index, slug));
    }

    Column::new()
        .spacing(spacing::XL)
        .padding([spacing::SECTION, spacing::XL])
        .push(heading)
        .push(rows)
        .into()
}

fn service_row<'a, Message: 'a>(i18n: &'a I18n, index: usize, slug: &str) -> Element<'a, Message> {
    let number = Text::new(format!("{:02}", index + 1))
        .size(typography::TITLE_MD)
        .color(palette::GRAY_400);

    let copy = Column::new()
        .spacing(spacing::XXS)
        .push(Text::new(i18n.tr(&format!("services-{slug}-title"))).size(typography::TITLE_SM))
        .push(
            Text::new(i18n.tr(&format!("services-{slug}-body")))
                .size(typography::BODY_SM)
                .color(palette::GRAY_400),
        );

    let row = Row::new()
        .spacing(spacing::LG)
        .align_y(iced::alignment::Vertical::Top)
        .push(number)
        .push(copy);

    Container::new(row)
        .width(Length::Fill)
        .padding(spacing::LG)
        .style(styles::container::card)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn four_distinct_services() {
        assert_eq!(SERVICE_SLUGS.len(), 4);
        for (i, a) in SERVICE_SLUGS.iter().enumerate() {
            for b in &SERVICE_SLUGS[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn view_renders() {
        let i18n = I18n::default();
        let _element: Element<'_, ()> = view(&i18n);
    }
}
