// SPDX-License-Identifier: MPL-2.0
//! Thin reading-progress bar pinned to the top edge of the window.

use crate::ui::design_tokens::sizing;
use crate::ui::styles;
use iced::widget::{Container, Row, Space};
use iced::{Element, Length, Theme};

/// Renders the progress bar for a progress value in `[0, 1]`.
///
/// The fill is the theme's accent (inverse of the surface), so it stays
/// visible in both light and dark modes.
pub fn view<'a, Message: 'a>(progress: f32) -> Element<'a, Message> {
    let progress = progress.clamp(0.0, 1.0);

    // Two portions split by FillPortion; degenerate ends handled below.
    let filled_portion = (progress * 1000.0).round() as u16;
    let empty_portion = 1000 - filled_portion;

    let mut row = Row::new().width(Length::Fill);
    if filled_portion > 0 {
        row = row.push(
            Container::new(
                Space::new()
                    .width(Length::Fill)
                    .height(Length::Fixed(sizing::PROGRESS_BAR_HEIGHT)),
            )
            .width(Length::FillPortion(filled_portion))
            .style(|theme: &Theme| {
                styles::container::filled(theme.extended_palette().background.base.text)(theme)
            }),
        );
    }
    if empty_portion > 0 {
        row = row.push(
            Space::new()
                .width(Length::FillPortion(empty_portion))
                .height(Length::Fixed(sizing::PROGRESS_BAR_HEIGHT)),
        );
    }

    Container::new(row)
        .width(Length::Fill)
        .height(Length::Fixed(sizing::PROGRESS_BAR_HEIGHT))
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_at_the_extremes() {
        let _empty: Element<'_, ()> = view(0.0);
        let _full: Element<'_, ()> = view(1.0);
        let _half: Element<'_, ()> = view(0.5);
    }

    #[test]
    fn out_of_range_progress_does_not_panic() {
        let _low: Element<'_, ()> = view(-2.0);
        let _high: Element<'_, ()> = view(7.5);
    }
}
