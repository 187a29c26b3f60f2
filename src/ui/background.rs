// SPDX-License-Identifier: MPL-2.0
//! Decorative animated 3D background.
//!
//! A wireframe torus, a smaller octahedron, and a ring of orbiting
//! particles are projected from 3D onto the canvas. The octahedron
//! follows the scroll position with a smoothed vertical lerp, and the
//! whole scene tilts slightly toward the pointer.

use crate::ui::design_tokens::opacity;
use iced::widget::canvas::{self, Cache, Canvas, Frame, Geometry, Path, Stroke};
use iced::{mouse, Color, Element, Length, Point, Rectangle, Renderer, Theme};
use std::f32::consts::TAU;

/// Vertical range of the follower shape, in world units.
pub const FOLLOWER_RANGE: f32 = 2.5;

/// Lerp rate multiplier: the follower covers `rate * delta` of the
/// remaining distance each frame, capped at a full step.
const FOLLOWER_LERP_RATE: f32 = 8.0;

/// Camera distance from the origin.
const CAMERA_Z: f32 = 6.0;

/// Number of orbiting particles.
const PARTICLE_COUNT: usize = 8;

/// Mutable scene state advanced by the animation tick.
#[derive(Debug, Clone)]
pub struct SceneState {
    /// Seconds of animation elapsed.
    time: f32,
    /// Smoothed vertical position of the follower shape.
    follower_y: f32,
    /// Pointer position normalized to `[-1, 1]` on both axes.
    pointer: Option<(f32, f32)>,
}

impl Default for SceneState {
    fn default() -> Self {
        Self {
            time: 0.0,
            follower_y: FOLLOWER_RANGE,
            pointer: None,
        }
    }
}

impl SceneState {
    /// Maps page progress `[0, 1]` to the follower's target height:
    /// top of the page puts it high, bottom puts it low.
    #[must_use]
    pub fn follower_target(progress: f32) -> f32 {
        FOLLOWER_RANGE - progress.clamp(0.0, 1.0) * 2.0 * FOLLOWER_RANGE
    }

    /// Advances the scene by `delta_secs` toward `target_y`.
    pub fn advance(&mut self, delta_secs: f32, target_y: f32) {
        self.time += delta_secs;
        let t = (delta_secs * FOLLOWER_LERP_RATE).min(1.0);
        self.follower_y += (target_y - self.follower_y) * t;
        self.follower_y = self.follower_y.clamp(-FOLLOWER_RANGE, FOLLOWER_RANGE);
    }

    /// Records the pointer position in window coordinates.
    pub fn set_pointer(&mut self, position: Point, bounds: iced::Size) {
        if bounds.width <= 0.0 || bounds.height <= 0.0 {
            return;
        }
        let x = (position.x / bounds.width) * 2.0 - 1.0;
        let y = (position.y / bounds.height) * 2.0 - 1.0;
        self.pointer = Some((x.clamp(-1.0, 1.0), y.clamp(-1.0, 1.0)));
    }

    pub fn clear_pointer(&mut self) {
        self.pointer = None;
    }

    #[must_use]
    pub fn follower_y(&self) -> f32 {
        self.follower_y
    }

    #[must_use]
    pub fn time(&self) -> f32 {
        self.time
    }
}

/// Rotates a point around the Y axis.
fn rotate_y(p: [f32; 3], angle: f32) -> [f32; 3] {
    let (sin, cos) = angle.sin_cos();
    [p[0] * cos + p[2] * sin, p[1], -p[0] * sin + p[2] * cos]
}

/// Rotates a point around the X axis.
fn rotate_x(p: [f32; 3], angle: f32) -> [f32; 3] {
    let (sin, cos) = angle.sin_cos();
    [p[0], p[1] * cos - p[2] * sin, p[1] * sin + p[2] * cos]
}

/// Perspective projection onto the canvas. Points behind the camera
/// return `None`.
fn project(p: [f32; 3], bounds: Rectangle) -> Option<Point> {
    let depth = CAMERA_Z - p[2];
    if depth <= 0.1 {
        return None;
    }
    let scale = bounds.width.min(bounds.height) * 0.35;
    let factor = scale / depth * 2.4;
    Some(Point::new(
        bounds.width / 2.0 + p[0] * factor,
        bounds.height / 2.0 - p[1] * factor,
    ))
}

/// The canvas program rendering one frame of the scene.
pub struct Background<'a> {
    scene: &'a SceneState,
    cache: Cache,
    color: Color,
}

impl<'a> Background<'a> {
    #[must_use]
    pub fn new(scene: &'a SceneState, color: Color) -> Self {
        Self {
            scene,
            cache: Cache::default(),
            color,
        }
    }

    /// Wraps the program in a full-size canvas element.
    pub fn into_element<Message: 'static>(self) -> Element<'a, Message> {
        Canvas::new(self)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }

    fn scene_rotation(&self) -> (f32, f32) {
        let (px, py) = self.scene.pointer.unwrap_or((0.0, 0.0));
        // Slow spin plus a slight parallax tilt toward the pointer.
        let yaw = self.scene.time * 0.4 + px * 0.25;
        let pitch = 0.35 + py * 0.2;
        (yaw, pitch)
    }

    fn draw_torus(&self, frame: &mut Frame, bounds: Rectangle, yaw: f32, pitch: f32) {
        const MAJOR: f32 = 1.8;
        const MINOR: f32 = 0.55;
        const RINGS: usize = 18;
        const RING_POINTS: usize = 12;

        let stroke = Stroke::default().with_width(1.0).with_color(Color {
            a: opacity::DECOR,
            ..self.color
        });

        for ring in 0..RINGS {
            let u = ring as f32 / RINGS as f32 * TAU;
            let mut builder = canvas::path::Builder::new();
            let mut started = false;

            for i in 0..=RING_POINTS {
                let v = i as f32 / RING_POINTS as f32 * TAU;
                let point = [
                    (MAJOR + MINOR * v.cos()) * u.cos(),
                    MINOR * v.sin(),
                    (MAJOR + MINOR * v.cos()) * u.sin(),
                ];
                let rotated = rotate_x(rotate_y(point, yaw), pitch);
                if let Some(projected) = project(rotated, bounds) {
                    if started {
                        builder.line_to(projected);
                    } else {
                        builder.move_to(projected);
                        started = true;
                    }
                } else {
                    started = false;
                }
            }

            frame.stroke(&builder.build(), stroke);
        }
    }

    fn draw_follower(&self, frame: &mut Frame, bounds: Rectangle, yaw: f32, pitch: f32) {
        const SIZE: f32 = 0.45;
        // Octahedron vertices, offset vertically by the follower.
        let offset = self.scene.follower_y;
        let vertices: [[f32; 3]; 6] = [
            [SIZE, 0.0, 0.0],
            [-SIZE, 0.0, 0.0],
            [0.0, SIZE, 0.0],
            [0.0, -SIZE, 0.0],
            [0.0, 0.0, SIZE],
            [0.0, 0.0, -SIZE],
        ];
        // Each equatorial vertex connects to both poles and its two
        // equatorial neighbors.
        const EDGES: [(usize, usize); 12] = [
            (0, 2),
            (0, 3),
            (0, 4),
            (0, 5),
            (1, 2),
            (1, 3),
            (1, 4),
            (1, 5),
            (2, 4),
            (4, 3),
            (3, 5),
            (5, 2),
        ];

        // The follower spins faster than the torus.
        let spin = self.scene.time * 1.2;
        let stroke = Stroke::default().with_width(1.2).with_color(Color {
            a: opacity::DECOR * 2.0,
            ..self.color
        });

        let transformed: Vec<Option<Point>> = vertices
            .iter()
            .map(|v| {
                let mut p = rotate_y(*v, spin);
                p[1] += offset;
                let rotated = rotate_x(rotate_y(p, yaw), pitch);
                project(rotated, bounds)
            })
            .collect();

        for (a, b) in EDGES {
            if let (Some(pa), Some(pb)) = (transformed[a], transformed[b]) {
                frame.stroke(&Path::line(pa, pb), stroke);
            }
        }
    }

    fn draw_particles(&self, frame: &mut Frame, bounds: Rectangle, yaw: f32, pitch: f32) {
        const ORBIT: f32 = 2.6;

        for i in 0..PARTICLE_COUNT {
            let phase = i as f32 / PARTICLE_COUNT as f32 * TAU;
            let angle = self.scene.time * 0.6 + phase;
            let point = [
                ORBIT * angle.cos(),
                (angle * 1.7).sin() * 0.6,
                ORBIT * angle.sin(),
            ];
            let rotated = rotate_x(rotate_y(point, yaw), pitch);
            if let Some(projected) = project(rotated, bounds) {
                frame.fill(
                    &Path::circle(projected, 2.0),
                    Color {
                        a: opacity::DECOR * 2.5,
                        ..self.color
                    },
                );
            }
        }
    }
}

impl<Message> canvas::Program<Message> for Background<'_> {
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
                let (yaw, pitch) = self.scene_rotation();
                self.draw_torus(frame, bounds, yaw, pitch);
                self.draw_follower(frame, bounds, yaw, pitch);
                self.draw_particles(frame, bounds, yaw, pitch);
            });

        vec![geometry]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::PI;

    #[test]
    fn follower_target_spans_the_range() {
        assert_eq!(SceneState::follower_target(0.0), FOLLOWER_RANGE);
        assert_eq!(SceneState::follower_target(1.0), -FOLLOWER_RANGE);
        assert_eq!(SceneState::follower_target(0.5), 0.0);
    }

    #[test]
    fn follower_target_clamps_out_of_range_progress() {
        assert_eq!(SceneState::follower_target(2.0), -FOLLOWER_RANGE);
        assert_eq!(SceneState::follower_target(-1.0), FOLLOWER_RANGE);
    }

    #[test]
    fn advance_moves_toward_the_target() {
        let mut scene = SceneState::default();
        let start = scene.follower_y();
        scene.advance(0.016, -FOLLOWER_RANGE);
        assert!(scene.follower_y() < start);
        assert!(scene.follower_y() > -FOLLOWER_RANGE);
    }

    #[test]
    fn large_delta_lands_exactly_on_the_target() {
        let mut scene = SceneState::default();
        // delta * rate >= 1 means a full step.
        scene.advance(1.0, -1.0);
        assert!((scene.follower_y() - (-1.0)).abs() < f32::EPSILON);
    }

    #[test]
    fn follower_stays_clamped() {
        let mut scene = SceneState::default();
        scene.advance(1.0, 100.0);
        assert!(scene.follower_y() <= FOLLOWER_RANGE);
    }

    #[test]
    fn pointer_normalizes_to_unit_range() {
        let mut scene = SceneState::default();
        scene.set_pointer(Point::new(640.0, 400.0), iced::Size::new(1280.0, 800.0));
        let (x, y) = scene.pointer.unwrap();
        assert!(x.abs() < 0.01);
        assert!(y.abs() < 0.01);

        scene.set_pointer(Point::new(1280.0, 0.0), iced::Size::new(1280.0, 800.0));
        let (x, y) = scene.pointer.unwrap();
        assert!((x - 1.0).abs() < 0.01);
        assert!((y + 1.0).abs() < 0.01);
    }

    #[test]
    fn zero_size_bounds_are_ignored() {
        let mut scene = SceneState::default();
        scene.set_pointer(Point::new(10.0, 10.0), iced::Size::new(0.0, 0.0));
        assert!(scene.pointer.is_none());
    }

    #[test]
    fn projection_is_centered_for_the_origin() {
        let bounds = Rectangle::new(Point::ORIGIN, iced::Size::new(800.0, 600.0));
        let projected = project([0.0, 0.0, 0.0], bounds).unwrap();
        assert!((projected.x - 400.0).abs() < 0.01);
        assert!((projected.y - 300.0).abs() < 0.01);
    }

    #[test]
    fn points_behind_the_camera_are_culled() {
        let bounds = Rectangle::new(Point::ORIGIN, iced::Size::new(800.0, 600.0));
        assert!(project([0.0, 0.0, CAMERA_Z + 1.0], bounds).is_none());
    }

    #[test]
    fn rotation_preserves_length() {
        let p = [1.0, 2.0, 3.0];
        let r = rotate_x(rotate_y(p, 0.7), 1.3);
        let len = |v: [f32; 3]| (v[0] * v[0] + v[1] * v[1] + v[2] * v[2]).sqrt();
        assert!((len(p) - len(r)).abs() < 1e-4);
    }

    #[test]
    fn full_turn_is_identity() {
        let p = [1.0, 0.5, -0.5];
        let r = rotate_y(p, PI * 2.0);
        for i in 0..3 {
            assert!((p[i] - r[i]).abs() < 1e-4);
        }
    }
}
