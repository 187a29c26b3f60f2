// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! Layers, bottom to top: background canvas, the scrollable page, the
//! fixed chrome (progress bar, navbar, dot rail), the toast overlay,
//! and finally the signup modal when open.

use super::{App, Message};
use crate::domain::section::Section;
use crate::ui::background::Background;
use crate::ui::design_tokens::opacity;
use crate::ui::navbar::{self, ViewContext as NavbarViewContext};
use crate::ui::notifications::Toast;
use crate::ui::progress_bar;
use crate::ui::scroll::PAGE_SCROLLABLE_ID;
use crate::ui::scroll_indicator;
use crate::ui::sections::{about, footer, hero, services, work};
use iced::widget::scrollable::Viewport;
use iced::widget::{scrollable, Column, Container, Id, Stack};
use iced::{Color, Element, Length};

pub fn view(app: &App) -> Element<'_, Message> {
    let mut stack = Stack::new().width(Length::Fill).height(Length::Fill);

    if app.config.background_enabled() {
        stack = stack.push(background_layer(app));
    }

    stack = stack
        .push(page_layer(app))
        .push(chrome_layer(app))
        .push(scroll_indicator::view(app.page.highlighted_section()).map(Message::ScrollIndicator))
        .push(Toast::view_overlay(&app.notifications, &app.i18n).map(Message::Notification));

    if app.signup.is_open() {
        stack = stack.push(app.signup.view(&app.i18n).map(Message::Signup));
    }

    stack.into()
}

fn background_layer(app: &App) -> Element<'_, Message> {
    let color = Color {
        a: opacity::DECOR,
        ..decor_base(app)
    };
    Background::new(&app.scene, color).into_element()
}

// The wireframe reads in both themes as the inverse of the surface.
fn decor_base(app: &App) -> Color {
    if app.theme_mode.is_dark() {
        Color::WHITE
    } else {
        Color::BLACK
    }
}

fn page_layer(app: &App) -> Element<'_, Message> {
    let layout = app.page.layout();
    let spin_time = app.started.elapsed().as_secs_f32();

    let column = Column::new()
        .width(Length::Fill)
        .push(hero::view(&app.i18n, layout.section_height(Section::Hero)).map(Message::Hero))
        .push(fixed_height(
            work::view::<Message>(&app.i18n),
            layout.section_height(Section::Work),
        ))
        .push(fixed_height(
            about::view::<Message>(&app.i18n, &app.counters),
            layout.section_height(Section::About),
        ))
        .push(fixed_height(
            services::view::<Message>(&app.i18n),
            layout.section_height(Section::Services),
        ))
        .push(fixed_height(
            app.contact.view(&app.i18n, spin_time).map(Message::Contact),
            layout.section_height(Section::Contact),
        ))
        .push(
            footer::view(
                &app.i18n,
                crate::ui::scroll::FOOTER_HEIGHT_FACTOR * layout.viewport().height,
            )
            .map(Message::Footer),
        );

    scrollable(column)
        .id(Id::new(PAGE_SCROLLABLE_ID))
        .on_scroll(|viewport: Viewport| Message::PageScrolled(viewport))
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn fixed_height(content: Element<'_, Message>, height: f32) -> Element<'_, Message> {
    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fixed(height))
        .clip(true)
        .into()
}

fn chrome_layer(app: &App) -> Element<'_, Message> {
    let navbar_ctx = NavbarViewContext {
        i18n: &app.i18n,
        active: app.page.highlighted_section(),
        scroll_offset: app.page.offset,
        viewport_width: app.page.viewport.width,
        menu_open: app.nav_menu_open,
    };
    let layout = app.page.layout();

    Column::new()
        .width(Length::Fill)
        .push(progress_bar::view::<Message>(layout.progress(app.page.offset)))
        .push(navbar::view(navbar_ctx).map(Message::Navbar))
        .into()
}
