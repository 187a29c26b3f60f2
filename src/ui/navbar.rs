// SPDX-License-Identifier: MPL-2.0
//! Fixed navigation bar.
//!
//! Shows the brand wordmark, one link per page section, and the
//! call-to-action buttons. Past a small scroll threshold the bar
//! condenses to a slimmer height with a translucent backdrop. Below a
//! width threshold the link row collapses behind a menu toggle.

use crate::app::config::{COMPACT_NAV_WIDTH_PX, NAVBAR_CONDENSE_THRESHOLD_PX};
use crate::domain::section::Section;
use crate::i18n::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::{
    alignment::Vertical,
    widget::{button, Column, Container, Row, Space, Text},
    Element, Length, Theme,
};

/// Contextual data needed to render the navbar.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    /// Section currently highlighted in the link row.
    pub active: Section,
    /// Current page scroll offset, drives the condensed state.
    pub scroll_offset: f32,
    /// Current window width, drives the compact layout.
    pub viewport_width: f32,
    /// Whether the compact-layout menu is expanded.
    pub menu_open: bool,
}

/// Messages emitted by the navbar.
#[derive(Debug, Clone)]
pub enum Message {
    BrandPressed,
    LinkPressed(Section),
    GetStartedPressed,
    SignupPressed,
    MenuToggled,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    ScrollTo(Section),
    OpenSignup,
    ToggleMenu,
}

/// Process a navbar message and return the corresponding event.
pub fn update(message: Message) -> Event {
    match message {
        Message::BrandPressed => Event::ScrollTo(Section::Hero),
        Message::LinkPressed(section) => Event::ScrollTo(section),
        Message::GetStartedPressed => Event::ScrollTo(Section::Contact),
        Message::SignupPressed => Event::OpenSignup,
        Message::MenuToggled => Event::ToggleMenu,
    }
}

/// Whether the bar should render in its condensed form.
#[must_use]
pub fn is_condensed(scroll_offset: f32) -> bool {
    scroll_offset > NAVBAR_CONDENSE_THRESHOLD_PX
}

/// Whether the link row is collapsed behind the menu toggle.
#[must_use]
pub fn is_compact(viewport_width: f32) -> bool {
    viewport_width < COMPACT_NAV_WIDTH_PX
}

/// Render the navigation bar.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let condensed = is_condensed(ctx.scroll_offset);
    let compact = is_compact(ctx.viewport_width);

    let brand = button(Text::new("ROFA").size(typography::TITLE_MD))
        .on_press(Message::BrandPressed)
        .padding([spacing::XXS, spacing::XS])
        .style(styles::button::nav_link(true));

    let mut bar = Row::new()
        .spacing(spacing::XL)
        .padding([0.0, spacing::LG])
        .align_y(Vertical::Center)
        .push(brand);

    if compact {
        let toggle = button(Text::new(ctx.i18n.tr("nav-menu")).size(typography::BODY))
            .on_press(Message::MenuToggled)
            .padding([spacing::XS, spacing::MD])
            .style(styles::button::nav_link(ctx.menu_open));
        bar = bar
            .push(Space::new().width(Length::Fill))
            .push(toggle);
    } else {
        let mut links = Row::new().spacing(spacing::LG).align_y(Vertical::Center);
        for section in Section::nav_links() {
            links = links.push(section_link(&ctx, section));
        }
        bar = bar
            .push(Container::new(links).width(Length::Fill).center_x(Length::Fill))
            .push(cta_buttons(&ctx, spacing::MD));
    }

    let height = if condensed {
        sizing::NAVBAR_HEIGHT_CONDENSED
    } else {
        sizing::NAVBAR_HEIGHT
    };

    let bar = Container::new(bar)
        .width(Length::Fill)
        .height(Length::Fixed(height))
        .align_y(Vertical::Center);

    let mut stacked = Column::new().push(bar);
    if compact && ctx.menu_open {
        stacked = stacked.push(menu_panel(&ctx));
    }

    let container = Container::new(stacked).width(Length::Fill);
    if condensed || (compact && ctx.menu_open) {
        container
            .style(|theme: &Theme| styles::container::panel(theme))
            .into()
    } else {
        container.into()
    }
}

fn section_link<'a>(ctx: &ViewContext<'a>, section: Section) -> Element<'a, Message> {
    let label = ctx.i18n.tr(section.label_key());
    button(Text::new(label).size(typography::BODY))
        .on_press(Message::LinkPressed(section))
        .padding([spacing::XXS, spacing::XS])
        .style(styles::button::nav_link(section == ctx.active))
        .into()
}

fn cta_buttons<'a>(ctx: &ViewContext<'a>, padding_x: f32) -> Element<'a, Message> {
    let get_started = button(Text::new(ctx.i18n.tr("nav-get-started")).size(typography::BODY))
        .on_press(Message::GetStartedPressed)
        .padding([spacing::XS, padding_x])
        .style(styles::button::secondary);
    let signup = button(Text::new(ctx.i18n.tr("nav-signup")).size(typography::BODY))
        .on_press(Message::SignupPressed)
        .padding([spacing::XS, padding_x])
        .style(styles::button::primary);

    Row::new()
        .spacing(spacing::SM)
        .align_y(Vertical::Center)
        .push(get_started)
        .push(signup)
        .into()
}

/// Vertical link list shown under the bar while the compact menu is open.
fn menu_panel<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let mut panel = Column::new()
        .spacing(spacing::XS)
        .padding([spacing::SM, spacing::LG]);
    for section in Section::nav_links() {
        panel = panel.push(section_link(ctx, section));
    }
    panel = panel.push(cta_buttons(ctx, spacing::MD));

    Container::new(panel).width(Length::Fill).into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::I18n;

    #[test]
    fn navbar_view_renders() {
        let i18n = I18n::default();
        let ctx = ViewContext {
            i18n: &i18n,
            active: Section::Hero,
            scroll_offset: 0.0,
            viewport_width: 1280.0,
            menu_open: false,
        };
        let _element = view(ctx);
    }

    #[test]
    fn navbar_view_renders_condensed() {
        let i18n = I18n::default();
        let ctx = ViewContext {
            i18n: &i18n,
            active: Section::Work,
            scroll_offset: 400.0,
            viewport_width: 1280.0,
            menu_open: false,
        };
        let _element = view(ctx);
    }

    #[test]
    fn navbar_view_renders_the_open_compact_menu() {
        let i18n = I18n::default();
        let ctx = ViewContext {
            i18n: &i18n,
            active: Section::Hero,
            scroll_offset: 0.0,
            viewport_width: 920.0,
            menu_open: true,
        };
        let _element = view(ctx);
    }

    #[test]
    fn condenses_past_the_threshold_only() {
        assert!(!is_condensed(0.0));
        assert!(!is_condensed(NAVBAR_CONDENSE_THRESHOLD_PX));
        assert!(is_condensed(NAVBAR_CONDENSE_THRESHOLD_PX + 1.0));
    }

    #[test]
    fn brand_scrolls_to_the_hero() {
        let event = update(Message::BrandPressed);
        assert!(matches!(event, Event::ScrollTo(Section::Hero)));
    }

    #[test]
    fn links_scroll_to_their_section() {
        let event = update(Message::LinkPressed(Section::Services));
        assert!(matches!(event, Event::ScrollTo(Section::Services)));
    }

    #[test]
    fn signup_opens_the_modal() {
        let event = update(Message::SignupPressed);
        assert!(matches!(event, Event::OpenSignup));
    }

    #[test]
    fn get_started_scrolls_to_contact() {
        let event = update(Message::GetStartedPressed);
        assert!(matches!(event, Event::ScrollTo(Section::Contact)));
    }

    #[test]
    fn compact_below_the_width_threshold_only() {
        assert!(is_compact(COMPACT_NAV_WIDTH_PX - 1.0));
        assert!(!is_compact(COMPACT_NAV_WIDTH_PX));
    }
}
