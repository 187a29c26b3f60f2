// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration.
//!
//! The `App` struct wires together the page sections, the scroll model,
//! the background scene, the two forms, localization, and the toast
//! manager, and translates component events into side effects like
//! draft persistence or programmatic scrolling. Policy decisions
//! (window bounds, persistence format, locale switching) stay close to
//! the main update loop so user-facing behavior is easy to audit.

pub mod config;
pub mod drafts;
mod message;
pub mod paths;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::app::drafts::{ContactDraft, SignupDraft};
use crate::i18n::I18n;
use crate::ui::background::SceneState;
use crate::ui::notifications::{self, Notification};
use crate::ui::scroll::PageState;
use crate::ui::sections::about;
use crate::ui::sections::contact::ContactForm;
use crate::ui::signup_modal::SignupModal;
use crate::ui::theming::ThemeMode;
use iced::{window, Element, Size, Subscription, Task, Theme};
use std::fmt;
use std::time::Instant;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    config: config::Config,
    theme_mode: ThemeMode,
    page: PageState,
    scene: SceneState,
    counters: about::Counters,
    contact: ContactForm,
    signup: SignupModal,
    /// Whether the compact navbar menu is expanded.
    nav_menu_open: bool,
    notifications: notifications::Manager,
    /// Wall-clock start; feeds the submit spinner rotation.
    started: Instant,
    /// Previous animation frame, for scene time deltas.
    last_frame: Option<Instant>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("section", &self.page.highlighted_section())
            .field("signup_open", &self.signup.is_open())
            .finish()
    }
}

impl Default for App {
    fn default() -> Self {
        Self {
            i18n: I18n::default(),
            config: config::Config::default(),
            theme_mode: ThemeMode::default(),
            page: PageState::new(Size::new(
                config::DEFAULT_WINDOW_WIDTH,
                config::DEFAULT_WINDOW_HEIGHT,
            )),
            scene: SceneState::default(),
            counters: about::Counters::default(),
            contact: ContactForm::default(),
            signup: SignupModal::default(),
            nav_menu_open: false,
            notifications: notifications::Manager::new(),
            started: Instant::now(),
            last_frame: None,
        }
    }
}

/// Builds the window settings.
#[must_use]
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: Size::new(config::DEFAULT_WINDOW_WIDTH, config::DEFAULT_WINDOW_HEIGHT),
        min_size: Some(Size::new(
            config::MIN_WINDOW_WIDTH,
            config::MIN_WINDOW_HEIGHT,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        let i18n = I18n::new(flags.lang.clone(), &config);
        let (contact_draft, contact_warning) = ContactDraft::load_from(None);
        let (signup_draft, signup_warning) = SignupDraft::load_from(None);

        let mut app = App {
            i18n,
            theme_mode: config.general.theme_mode,
            contact: ContactForm::with_draft(contact_draft),
            signup: SignupModal::with_draft(signup_draft),
            ..Self::default()
        };
        app.config = config;

        for key in [config_warning, contact_warning, signup_warning]
            .into_iter()
            .flatten()
        {
            app.notifications.push(Notification::warning(key));
        }

        (app, Task::none())
    }

    fn title(&self) -> String {
        self.i18n.tr("window-title")
    }

    fn theme(&self) -> Theme {
        if self.theme_mode.is_dark() {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        update::update(self, message)
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(self)
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::subscription(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::section::Section;
    use crate::ui::navbar;

    #[test]
    fn default_app_starts_at_the_hero() {
        let app = App::default();
        assert_eq!(app.page.highlighted_section(), Section::Hero);
        assert!(!app.signup.is_open());
    }

    #[test]
    fn navbar_signup_opens_the_modal() {
        let mut app = App::default();
        let _ = app.update(Message::Navbar(navbar::Message::SignupPressed));
        assert!(app.signup.is_open());
    }

    #[test]
    fn escape_closes_the_modal() {
        let mut app = App::default();
        let _ = app.update(Message::Navbar(navbar::Message::SignupPressed));
        let _ = app.update(Message::EscapePressed);
        assert!(!app.signup.is_open());
    }

    #[test]
    fn menu_toggle_flips_and_escape_closes_it() {
        let mut app = App::default();
        let _ = app.update(Message::Navbar(navbar::Message::MenuToggled));
        assert!(app.nav_menu_open);
        let _ = app.update(Message::EscapePressed);
        assert!(!app.nav_menu_open);
    }

    #[test]
    fn picking_a_menu_link_collapses_the_menu() {
        let mut app = App::default();
        let _ = app.update(Message::Navbar(navbar::Message::MenuToggled));
        let _ = app.update(Message::Navbar(navbar::Message::LinkPressed(
            Section::About,
        )));
        assert!(!app.nav_menu_open);
    }

    #[test]
    fn growing_the_window_collapses_the_menu() {
        let mut app = App::default();
        let _ = app.update(Message::Navbar(navbar::Message::MenuToggled));
        let _ = app.update(Message::WindowResized(Size::new(1280.0, 800.0)));
        assert!(!app.nav_menu_open);
    }

    #[test]
    fn window_settings_enforce_the_minimum_size() {
        let settings = window_settings();
        let min = settings.min_size.unwrap();
        assert!(min.width <= settings.size.width);
        assert!(min.height <= settings.size.height);
    }

    #[test]
    fn view_renders_default_state() {
        let app = App::default();
        let _element = app.view();
    }
}
