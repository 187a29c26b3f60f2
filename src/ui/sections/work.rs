// SPDX-License-Identifier: MPL-2.0
//! Work gallery: six project cards laid out two per row.

use crate::i18n::I18n;
use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::styles;
use iced::{
    widget::{Column, Container, Row, Text},
    Element, Length,
};

/// Static project metadata. Copy lives in the i18n bundles under
/// `work-<slug>-title` / `-category` / `-blurb`.
#[derive(Debug, Clone, Copy)]
pub struct Project {
    pub slug: &'static str,
    pub year: &'static str,
}

pub const PROJECTS: [Project; 6] = [
    Project { slug: "owasp", year: "2024" },
    Project { slug: "ai-platform", year: "2024" },
    Project { slug: "mobile-app", year: "2023" },
    Project { slug: "design-system", year: "2023" },
    Project { slug: "commerce", year: "2022" },
    Project { slug: "analytics", year: "2022" },
];

impl Project {
    #[must_use]
    pub fn title_key(&self) -> String {
        format!("work-{}-title", self.slug)
    }

    #[must_use]
    pub fn category_key(&self) -> String {
        format!("work-{}-category", self.slug)
    }

    #[must_use]
    pub fn blurb_key(&self) -> String {
        format!("work-{}-blurb", self.slug)
    }
}

pub fn view<'a, Message: 'a>(i18n: &'a I18n) -> Element<'a, Message> {
    let heading = Row::new()
        .align_y(iced::alignment::Vertical::Bottom)
        .push(
            Text::new(i18n.tr("work-title"))
                .size(typography::TITLE_LG)
                .width(Length::Fill),
        )
        .push(
            Text::new(i18n.tr("work-hint"))
                .size(typography::BODY_SM)
                .color(palette::GRAY_400),
        );

    let mut grid = Column::new().spacing(spacing::LG);
    for pair in PROJECTS.chunks(2) {
        let mut row = Row::new().spacing(spacing::LG);
        for project in pair {
            row = row.push(card(i18n, project));
        }
        grid = grid.push(row);
    }

    Column::new()
        .spacing(spacing::XL)
        .padding([spacing::SECTION, spacing::XL])
        .push(heading)
        .push(grid)
        .into()
}

fn card<'a, Message: 'a>(i18n: &'a I18n, project: &Project) -> Element<'a, Message> {
    let meta = Row::new()
        .push(
            Text::new(i18n.tr(&project.category_key()))
                .size(typography::CAPTION)
                .color(palette::GRAY_400)
                .width(Length::Fill),
        )
        .push(
            Text::new(project.year)
                .size(typography::CAPTION)
                .color(palette::GRAY_400),
        );

    let body = Column::new()
        .spacing(spacing::XS)
        .push(meta)
        .push(Text::new(i18n.tr(&project.title_key())).size(typography::TITLE_SM))
        .push(
            Text::new(i18n.tr(&project.blurb_key()))
                .size(typography::BODY_SM)
                .color(palette::GRAY_400),
        );

    Container::new(body)
        .width(Length::Fill)
        .padding(spacing::LG)
        .style(styles::container::card)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn six_projects_with_unique_slugs() {
        assert_eq!(PROJECTS.len(), 6);
        for (i, a) in PROJECTS.iter().enumerate() {
            for b in &PROJECTS[i + 1..] {
                assert_ne!(a.slug, b.slug);
            }
        }
    }

    #[test]
    fn keys_follow_the_slug() {
        let project = PROJECTS[0];
        assert_eq!(project.title_key(), "work-owasp-title");
        assert_eq!(project.category_key(), "work-owasp-category");
        assert_eq!(project.blurb_key(), "work-owasp-blurb");
    }

    #[test]
    fn view_renders() {
        let i18n = I18n::default();
        let _element: Element<'_, ()> = view(&i18n);
    }
}
