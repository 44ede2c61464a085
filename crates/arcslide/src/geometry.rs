//! Compass/cartesian trigonometry shared by every other module.
//!
//! A compass angle starts at north (straight up on screen) and grows
//! clockwise. A cartesian angle starts at the positive x axis. Screen space has
//! y pointing down, so cartesian angles also appear to grow clockwise, which is
//! what drawing backends such as cairo expect. Nothing outside this module
//! should add or subtract the quarter turn between the two frames.

use crate::style::LineCap;
use std::f64::consts::{FRAC_PI_2, TAU};

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn offset_by(self, delta: Point) -> Self {
        Self::new(self.x + delta.x, self.y + delta.y)
    }

    pub fn distance_to(self, other: Point) -> f64 {
        (other.x - self.x).hypot(other.y - self.y)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn square(side: f64) -> Self {
        Self::new(side, side)
    }

    pub fn min_dimension(&self) -> f64 {
        self.width.min(self.height)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub origin: Point,
    pub size: Size,
}

impl Rect {
    pub fn new(origin: Point, size: Size) -> Self {
        Self { origin, size }
    }

    pub fn from_center(center: Point, size: Size) -> Self {
        Self::new(
            Point::new(center.x - size.width / 2.0, center.y - size.height / 2.0),
            size,
        )
    }

    pub fn center(&self) -> Point {
        Point::new(
            self.origin.x + self.size.width / 2.0,
            self.origin.y + self.size.height / 2.0,
        )
    }

    /// Edges count as inside.
    pub fn contains(&self, point: Point) -> bool {
        (self.origin.x..=self.origin.x + self.size.width).contains(&point.x)
            && (self.origin.y..=self.origin.y + self.size.height).contains(&point.y)
    }
}

pub fn compass_to_cartesian(radians: f64) -> f64 {
    radians - FRAC_PI_2
}

pub fn cartesian_to_compass(radians: f64) -> f64 {
    radians + FRAC_PI_2
}

/// Compass angle in degrees, in `[0, 360)`, of `to` as seen from `from`.
///
/// Returns `0.0` when the two points coincide, since there is no direction to
/// measure.
pub fn angle_from_north(from: Point, to: Point) -> f64 {
    let (dx, dy) = (to.x - from.x, to.y - from.y);
    let magnitude = dx.hypot(dy);
    if magnitude == 0.0 || !magnitude.is_finite() {
        return 0.0;
    }

    let cartesian = (dy / magnitude).atan2(dx / magnitude);
    let mut compass = cartesian_to_compass(cartesian);
    if compass < 0.0 {
        compass += TAU;
    }

    let degrees = compass.to_degrees();
    // tiny negative angles can round up to a full turn
    if degrees >= 360.0 { 0.0 } else { degrees }
}

/// Offset from the circle's center to the point at `angle_from_north` degrees.
///
/// Coordinates are rounded to whole units so the handle and labels sit on the
/// pixel grid.
pub fn point_on_circle(radius: f64, angle_from_north: f64) -> Point {
    let cartesian = compass_to_cartesian(angle_from_north.to_radians());
    Point::new(
        (radius * cartesian.cos()).round(),
        (radius * cartesian.sin()).round(),
    )
}

/// How many degrees of a `max_angle` slider an arc of `arc_length` spans.
pub fn arc_length_to_degrees(arc_length: f64, radius: f64, max_angle: f64) -> f64 {
    let circumference = TAU * radius;
    max_angle * arc_length / circumference
}

pub fn outer_radius(radius: f64, line_width: f64) -> f64 {
    radius + 0.5 * line_width
}

pub fn inner_radius(radius: f64, line_width: f64) -> f64 {
    radius - 0.5 * line_width
}

/// Rotates `point` about `center`. Positive angles turn clockwise on screen.
pub fn rotate_about(point: Point, center: Point, radians: f64) -> Point {
    let (dx, dy) = (point.x - center.x, point.y - center.y);
    let (sin, cos) = radians.sin_cos();
    Point::new(
        center.x + dx * cos - dy * sin,
        center.y + dx * sin + dy * cos,
    )
}

/// A stroked arc between two compass angles, drawn clockwise.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArcSegment {
    pub center: Point,
    pub radius: f64,
    pub line_width: f64,
    pub from_angle: f64,
    pub to_angle: f64,
    pub line_cap: LineCap,
}

impl ArcSegment {
    pub fn start_radians(&self) -> f64 {
        compass_to_cartesian(self.from_angle.to_radians())
    }

    pub fn end_radians(&self) -> f64 {
        compass_to_cartesian(self.to_angle.to_radians())
    }

    pub fn outer_radius(&self) -> f64 {
        outer_radius(self.radius, self.line_width)
    }

    pub fn inner_radius(&self) -> f64 {
        inner_radius(self.radius, self.line_width)
    }
}
