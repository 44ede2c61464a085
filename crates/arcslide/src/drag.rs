use crate::error::SliderError;
use crate::geometry::{Point, angle_from_north};
use crate::value::ValueModel;
use std::cmp::Ordering;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragState {
    #[default]
    Idle,
    Tracking,
}

/// Outcome of feeding one pointer event to the slider.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DragAction {
    pub should_redraw: bool,
    pub value_changed: Option<f64>,
}

impl DragAction {
    pub fn new(should_redraw: bool, value_changed: Option<f64>) -> Self {
        Self {
            should_redraw,
            value_changed,
        }
    }
}

/// Resolves a raw pointer angle against the seam of a partial circle.
///
/// Angles inside `[0, max_angle]` pass through. Past the end of the arc the
/// handle goes to whichever end it was closer to before the move, so dragging
/// across the gap never teleports it to the far end. A handle sitting exactly
/// on the midpoint stays put.
pub fn clamp_to_bounds(raw_angle: i32, previous_angle: i32, max_angle: f64) -> i32 {
    if f64::from(raw_angle) <= max_angle {
        return raw_angle;
    }

    let midpoint = (max_angle / 2.0) as i32;
    match previous_angle.cmp(&midpoint) {
        Ordering::Less => 0,
        Ordering::Greater => max_angle.floor() as i32,
        Ordering::Equal => previous_angle,
    }
}

/// Nearest anchor to `angle`, as a whole degree no larger than `limit`.
pub fn snap_to_nearest(angle: i32, anchors: &[f64], limit: i32) -> i32 {
    let target = f64::from(angle);
    anchors
        .iter()
        .min_by(|a, b| (*a - target).abs().total_cmp(&(*b - target).abs()))
        .map_or(angle, |nearest| (nearest.round() as i32).min(limit))
}

#[derive(Debug, Clone, Default)]
pub struct DragController {
    state: DragState,
}

impl DragController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> DragState {
        self.state
    }

    pub fn is_tracking(&self) -> bool {
        self.state == DragState::Tracking
    }

    /// Pointer down. Tracking starts only when the press hit the control.
    pub fn begin(&mut self, hit: bool) -> bool {
        if hit {
            log::debug!("Drag started");
            self.state = DragState::Tracking;
        }
        hit
    }

    /// Pointer up or cancel.
    pub fn end(&mut self) {
        if self.is_tracking() {
            log::debug!("Drag ended");
        }
        self.state = DragState::Idle;
    }

    /// Moves the handle towards `point`. Returns the accepted angle, or `None`
    /// when no drag is in progress. An accepted angle may equal the previous
    /// one; callers still report it.
    pub fn track(
        &mut self,
        center: Point,
        point: Point,
        model: &mut ValueModel,
        snap_anchors: &[f64],
    ) -> Result<Option<i32>, SliderError> {
        if !self.is_tracking() {
            return Ok(None);
        }

        let raw = angle_from_north(center, point).floor() as i32;
        let mut angle = clamp_to_bounds(raw, model.angle_from_north(), model.max_angle());
        if !snap_anchors.is_empty() {
            angle = snap_to_nearest(angle, snap_anchors, model.max_whole_angle());
        }

        model.set_angle(angle)?;
        Ok(Some(angle))
    }
}
