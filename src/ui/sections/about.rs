// SPDX-License-Identifier: MPL-2.0
//! About section: the studio's four beliefs plus stat tiles whose
//! numbers count up from zero the first time the section scrolls into
//! view.

use crate::i18n::I18n;
use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::scroll::ease_out_cubic;
use crate::ui::styles;
use iced::{
    alignment::Horizontal,
    widget::{Column, Container, Row, Text},
    Element, Length,
};
use std::time::{Duration, Instant};

/// How long the count-up runs once started.
pub const COUNT_UP_DURATION: Duration = Duration::from_millis(1200);

#[derive(Debug, Clone, Copy)]
pub struct Stat {
    pub slug: &'static str,
    pub target: u32,
    pub suffix: &'static str,
}

pub const STATS: [Stat; 4] = [
    Stat { slug: "projects", target: 50, suffix: "+" },
    Stat { slug: "clients", target: 30, suffix: "+" },
    Stat { slug: "years", target: 5, suffix: "" },
    Stat { slug: "satisfaction", target: 100, suffix: "%" },
];

pub const BELIEF_SLUGS: [&str; 4] = ["design", "ai", "impact", "quality"];

/// Drives the one-shot count-up animation.
#[derive(Debug, Default)]
pub struct Counters {
    started: Option<Instant>,
}

impl Counters {
    /// Begin the count-up. Later calls are ignored, the animation only
    /// plays once per run.
    pub fn start(&mut self) {
        if self.started.is_none() {
            self.started = Some(Instant::now());
        }
    }

    #[must_use]
    pub fn has_started(&self) -> bool {
        self.started.is_some()
    }

    /// Whether the animation still needs frames.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.started
            .is_some_and(|started| started.elapsed() < COUNT_UP_DURATION)
    }

    fn progress(&self) -> f32 {
        match self.started {
            None => 0.0,
            Some(started) => {
                let t = started.elapsed().as_secs_f32() / COUNT_UP_DURATION.as_secs_f32();
                ease_out_cubic(t.min(1.0))
            }
        }
    }

    /// Current display value for a stat target.
    #[must_use]
    pub fn value(&self, target: u32) -> u32 {
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let value = (f64::from(target) * f64::from(self.progress())).round() as u32;
        value.min(target)
    }
}

pub fn view<'a, Message: 'a>(i18n: &'a I18n, counters: &Counters) -> Element<'a, Message> {
    let heading = Column::new()
        .spacing(spacing::XS)
        .push(Text::new(i18n.tr("about-title")).size(typography::TITLE_LG))
        .push(
            Text::new(i18n.tr("about-subtitle"))
                .size(typography::BODY_SM)
                .color(palette::GRAY_400),
        );

    let mut beliefs = Column::new().spacing(spacing::LG);
    for pair in BELIEF_SLUGS.chunks(2) {
        let mut row = Row::new().spacing(spacing::LG);
        for slug in pair {
            row = row.push(belief_card(i18n, slug));
        }
        beliefs = beliefs.push(row);
    }

    let mut stats = Row::new().spacing(spacing::LG);
    for stat in &STATS {
        stats = stats.push(stat_tile(i18n, counters, stat));
    }

    Column::new()
        .spacing(spacing::XL)
        .padding([spacing::SECTION, spacing::XL])
        .push(heading)
        .push(beliefs)
        .push(stats)
        .into()
}

fn belief_card<'a, Message: 'a>(i18n: &'a I18n, slug: &str) -> Element<'a, Message> {
    let body = Column::new()
        .spacing(spacing::XS)
        .push(Text::new(i18n.tr(&format!("about-belief-{slug}-title"))).size(typography::TITLE_SM))
        .push(
            Text::new(i18n.tr(&format!("about-belief-{slug}-body")))
                .size(typography::BODY_SM)
                .color(palette::GRAY_400),
        );

    Container::new(body)
        .width(Length::Fill)
        .padding(spacing::LG)
        .style(styles::container::card)
        .into()
}

fn stat_tile<'a, Message: 'a>(
    i18n: &'a I18n,
    counters: &Counters,
    stat: &Stat,
) -> Element<'a, Message> {
    let number = format!("{}{}", counters.value(stat.target), stat.suffix);

    let body = Column::new()
        .spacing(spacing::XXS)
        .align_x(Horizontal::Center)
        .push(Text::new(number).size(typography::TITLE_LG))
        .push(
            Text::new(i18n.tr(&format!("about-stat-{}-label", stat.slug)))
                .size(typography::BODY_SM)
                .color(palette::GRAY_400),
        );

    Container::new(body)
        .width(Length::Fill)
        .padding(spacing::LG)
        .style(styles::container::card)
        .into()
}
