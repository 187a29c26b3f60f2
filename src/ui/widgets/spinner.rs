// SPDX-License-Identifier: MPL-2.0
//! Canvas spinner shown on submit buttons while a request is in flight.

use crate::ui::design_tokens::sizing;
use iced::widget::canvas::{self, Cache, Canvas, Frame, Geometry, Path, Stroke};
use iced::{mouse, Color, Length, Point, Rectangle, Renderer, Theme};
use std::f32::consts::PI;

/// Revolutions per second.
const SPIN_RATE: f32 = 1.2;

/// A half-circle arc that rotates with elapsed time.
pub struct Spinner {
    cache: Cache,
    color: Color,
    /// Elapsed animation time in seconds.
    time: f32,
    size: f32,
}

impl Spinner {
    #[must_use]
    pub fn new(color: Color, time: f32) -> Self {
        Self {
            cache: Cache::default(),
            color,
            time,
            size: sizing::ICON_SM,
        }
    }

    /// Current rotation angle in radians.
    #[must_use]
    pub fn rotation(&self) -> f32 {
        self.time * SPIN_RATE * 2.0 * PI
    }

    pub fn into_element<Message: 'static>(self) -> iced::Element<'static, Message> {
        let size = self.size;
        Canvas::new(self)
            .width(Length::Fixed(size))
            .height(Length::Fixed(size))
            .into()
    }
}

impl<Message> canvas::Program<Message> for Spinner {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let geometry = self
            .cache
            .draw(renderer, bounds.size(), |frame: &mut Frame| {
                let center = frame.center();
                let radius = frame.width().min(frame.height()) / 2.0 - 2.0;

                let track = Path::circle(center, radius);
                frame.stroke(
                    &track,
                    Stroke::default().with_width(2.0).with_color(Color {
                        a: 0.25,
                        ..self.color
                    }),
                );

                // Half-circle arc starting at the top, built from short
                // line segments.
                let start_angle = self.rotation() - PI / 2.0;
                let end_angle = start_angle + PI;

                let mut arc_path = canvas::path::Builder::new();
                arc_path.move_to(Point::new(
                    center.x + radius * start_angle.cos(),
                    center.y + radius * start_angle.sin(),
                ));
                let segments = 24;
                #[allow(clippy::cast_precision_loss)]
                for i in 1..=segments {
                    let t = i as f32 / segments as f32;
                    let angle = start_angle + (end_angle - start_angle) * t;
                    arc_path.line_to(Point::new(
                        center.x + radius * angle.cos(),
                        center.y + radius * angle.sin(),
                    ));
                }

                frame.stroke(
                    &arc_path.build(),
                    Stroke::default()
                        .with_width(2.0)
                        .with_color(self.color)
                        .with_line_cap(canvas::LineCap::Round),
                );
            });

        vec![geometry]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rotation_advances_with_time() {
        let early = Spinner::new(Color::WHITE, 0.0);
        let late = Spinner::new(Color::WHITE, 0.5);
        assert!(late.rotation() > early.rotation());
        assert!((early.rotation()).abs() < f32::EPSILON);
    }

    #[test]
    fn completes_a_revolution() {
        let spinner = Spinner::new(Color::WHITE, 1.0 / SPIN_RATE);
        assert!((spinner.rotation() - 2.0 * PI).abs() < 1e-4);
    }
}
