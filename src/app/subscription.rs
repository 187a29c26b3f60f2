// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Native events (keyboard, mouse, window) are always routed; the two
//! timers only run while something actually needs them so an idle page
//! wakes up for nothing.

use super::{App, Message};
use crate::app::config::{ANIMATION_TICK_MS, TICK_INTERVAL_MS};
use iced::{event, keyboard, mouse, time, window, Subscription};
use std::time::Duration;

pub fn subscription(app: &App) -> Subscription<Message> {
    Subscription::batch([
        event_subscription(),
        tick_subscription(app),
        animation_subscription(app),
    ])
}

fn event_subscription() -> Subscription<Message> {
    event::listen_with(|event, _status, _window_id| match event {
        event::Event::Window(window::Event::Resized(size)) => {
            Some(Message::WindowResized(size))
        }
        event::Event::Keyboard(keyboard::Event::KeyPressed {
            key: keyboard::Key::Named(keyboard::key::Named::Escape),
            ..
        }) => Some(Message::EscapePressed),
        event::Event::Mouse(mouse::Event::CursorMoved { position }) => {
            Some(Message::PointerMoved(position))
        }
        event::Event::Mouse(mouse::Event::CursorLeft) => Some(Message::PointerLeft),
        _ => None,
    })
}

/// Housekeeping tick: toast expiry and form success holds.
fn tick_subscription(app: &App) -> Subscription<Message> {
    let needed = app.notifications.has_notifications()
        || app.contact.wants_tick()
        || app.signup.wants_tick();
    if needed {
        time::every(Duration::from_millis(TICK_INTERVAL_MS)).map(Message::Tick)
    } else {
        Subscription::none()
    }
}

/// Frame tick: smooth scroll, the background scene, stat counters, and
/// the submit spinner.
fn animation_subscription(app: &App) -> Subscription<Message> {
    let background_running = app.config.background_enabled() && !app.config.reduced_motion();
    let needed = background_running
        || app.page.animation.is_some()
        || app.counters.is_animating()
        || app.contact.is_submitting();
    if needed {
        time::every(Duration::from_millis(ANIMATION_TICK_MS)).map(Message::AnimationTick)
    } else {
        Subscription::none()
    }
}
