// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! Component events bubble up here and turn into side effects: draft
//! persistence, clipboard writes, programmatic scrolls, toasts, and the
//! simulated submission delays.

use super::{App, Message};
use crate::app::drafts::{ContactDraft, SignupDraft};
use crate::domain::section::Section;
use crate::domain::submission::SUBMIT_DELAY;
use crate::ui::background::SceneState;
use crate::ui::navbar::{self, Event as NavbarEvent};
use crate::ui::notifications::Notification;
use crate::ui::scroll::PAGE_SCROLLABLE_ID;
use crate::ui::scroll_indicator;
use crate::ui::sections::contact::{self, Event as ContactEvent};
use crate::ui::sections::footer::{self, Event as FooterEvent};
use crate::ui::sections::hero::{self, Event as HeroEvent};
use crate::ui::signup_modal::{self, Event as SignupEvent};
use iced::widget::scrollable::RelativeOffset;
use iced::widget::{operation, Id};
use iced::Task;
use std::time::Instant;

pub fn update(app: &mut App, message: Message) -> Task<Message> {
    match message {
        Message::Navbar(navbar_message) => match navbar::update(navbar_message) {
            NavbarEvent::ScrollTo(section) => {
                app.nav_menu_open = false;
                scroll_to(app, section)
            }
            NavbarEvent::OpenSignup => {
                app.nav_menu_open = false;
                app.signup.open();
                Task::none()
            }
            NavbarEvent::ToggleMenu => {
                app.nav_menu_open = !app.nav_menu_open;
                Task::none()
            }
        },
        Message::Hero(hero_message) => match hero::update(hero_message) {
            HeroEvent::ScrollTo(section) => scroll_to(app, section),
            HeroEvent::OpenSignup => {
                app.signup.open();
                Task::none()
            }
        },
        Message::ScrollIndicator(scroll_indicator::Message::DotPressed(section)) => {
            scroll_to(app, section)
        }
        Message::Contact(contact_message) => {
            let event = app.contact.update(contact_message);
            handle_contact_event(app, event)
        }
        Message::Signup(signup_message) => {
            let event = app.signup.update(signup_message);
            handle_signup_event(app, event)
        }
        Message::Footer(footer_message) => match footer::update(footer_message) {
            FooterEvent::Copy { toast_key, value } => copy_to_clipboard(app, toast_key, value),
            FooterEvent::None => Task::none(),
        },
        Message::Notification(notification_message) => {
            app.notifications.handle_message(&notification_message);
            Task::none()
        }
        Message::PageScrolled(viewport) => {
            let offset = viewport.absolute_offset().y;
            app.page.record_offset(offset);
            // The stat count-up plays once, when the about section first
            // becomes the active one.
            if app.page.layout().active_section(offset) == Section::About {
                app.counters.start();
            }
            Task::none()
        }
        Message::WindowResized(size) => {
            app.page.resize(size);
            if !navbar::is_compact(size.width) {
                app.nav_menu_open = false;
            }
            Task::none()
        }
        Message::EscapePressed => {
            if app.signup.is_open() {
                let event = app.signup.request_close();
                handle_signup_event(app, event)
            } else {
                app.nav_menu_open = false;
                Task::none()
            }
        }
        Message::PointerMoved(position) => {
            if app.config.background_enabled() {
                app.scene.set_pointer(position, app.page.viewport);
            }
            Task::none()
        }
        Message::PointerLeft => {
            app.scene.clear_pointer();
            Task::none()
        }
        Message::Tick(_) => {
            app.notifications.tick();
            let mut tasks = Vec::new();
            if app.contact.wants_tick() {
                let event = app.contact.update(contact::Message::Tick);
                tasks.push(handle_contact_event(app, event));
            }
            if app.signup.wants_tick() {
                let event = app.signup.update(signup_modal::Message::Tick);
                tasks.push(handle_signup_event(app, event));
            }
            Task::batch(tasks)
        }
        Message::AnimationTick(now) => handle_animation_tick(app, now),
    }
}

fn handle_animation_tick(app: &mut App, now: Instant) -> Task<Message> {
    let delta = app
        .last_frame
        .map_or(0.0, |prev| {
            now.saturating_duration_since(prev).as_secs_f32().min(0.1)
        });
    app.last_frame = Some(now);

    if app.config.background_enabled() && !app.config.reduced_motion() {
        let progress = app.page.layout().progress(app.page.offset);
        app.scene
            .advance(delta, SceneState::follower_target(progress));
    }

    match app.page.animation_frame() {
        Some(offset) => apply_offset(app, offset),
        None => Task::none(),
    }
}

/// Starts (or, under reduced motion, performs) a scroll to a section.
fn scroll_to(app: &mut App, section: Section) -> Task<Message> {
    match app
        .page
        .scroll_to_section(section, app.config.reduced_motion())
    {
        Some(offset) => apply_offset(app, offset),
        None => Task::none(),
    }
}

/// Pushes an absolute offset to the scrollable as a relative snap.
fn apply_offset(app: &App, offset: f32) -> Task<Message> {
    let max_offset = app.page.layout().max_offset();
    let relative_y = if max_offset > 0.0 {
        (offset / max_offset).clamp(0.0, 1.0)
    } else {
        0.0
    };
    operation::snap_to(
        Id::new(PAGE_SCROLLABLE_ID),
        RelativeOffset {
            x: 0.0,
            y: relative_y,
        },
    )
}

fn copy_to_clipboard(app: &mut App, toast_key: &'static str, value: &'static str) -> Task<Message> {
    app.notifications.push(Notification::success(toast_key));
    iced::clipboard::write(value.to_owned())
}

fn handle_contact_event(app: &mut App, event: ContactEvent) -> Task<Message> {
    match event {
        ContactEvent::None => Task::none(),
        ContactEvent::DraftChanged(draft) => {
            if let Some(key) = draft.save_to(None) {
                app.notifications.push(Notification::warning(key));
            }
            Task::none()
        }
        ContactEvent::Copy { toast_key, value } => copy_to_clipboard(app, toast_key, value),
        ContactEvent::InvalidSubmit => {
            app.notifications
                .push(Notification::error("toast-form-errors"));
            Task::none()
        }
        ContactEvent::SubmitStarted => Task::perform(tokio::time::sleep(SUBMIT_DELAY), |()| {
            Message::Contact(contact::Message::SubmitFinished)
        }),
        ContactEvent::Submitted => {
            if let Some(key) = ContactDraft::clear_from(None) {
                app.notifications.push(Notification::warning(key));
            }
            app.notifications
                .push(Notification::success("toast-contact-success"));
            Task::none()
        }
    }
}

fn handle_signup_event(app: &mut App, event: SignupEvent) -> Task<Message> {
    match event {
        SignupEvent::None => Task::none(),
        SignupEvent::Closed => {
            // Cancelling discards the draft along with the fields.
            if let Some(key) = SignupDraft::clear_from(None) {
                app.notifications.push(Notification::warning(key));
            }
            Task::none()
        }
        SignupEvent::DraftChanged(draft) => {
            if let Some(key) = draft.save_to(None) {
                app.notifications.push(Notification::warning(key));
            }
            Task::none()
        }
        SignupEvent::InvalidSubmit => {
            app.notifications
                .push(Notification::error("toast-form-errors"));
            Task::none()
        }
        SignupEvent::SubmitStarted => Task::perform(tokio::time::sleep(SUBMIT_DELAY), |()| {
            Message::Signup(signup_modal::Message::SubmitFinished)
        }),
        SignupEvent::Submitted => {
            if let Some(key) = SignupDraft::clear_from(None) {
                app.notifications.push(Notification::warning(key));
            }
            app.notifications
                .push(Notification::success("toast-signup-success"));
            Task::none()
        }
    }
}
