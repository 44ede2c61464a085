use crate::config::SliderConfig;
use crate::drag::{DragAction, DragController, DragState};
use crate::error::{InvalidConfig, SliderError};
use crate::geometry::{self, ArcSegment, Point, Size, point_on_circle};
use crate::handle::{self, HandleSpec, HandleType};
use crate::labels::{self, LabelLayout, TextMeasure};
use crate::render::Scene;
use crate::style::{Color, LabelFont, LabelText, LineCap};
use crate::value::ValueModel;

type ValueListener = Box<dyn FnMut(f64)>;

/// A circular slider: configuration, current angle and drag state.
///
/// Every setter validates its input and, on success, flags the control for
/// redisplay. Hosts poll [`CircularSlider::take_needs_display`] to coalesce
/// redraws. Value-changed listeners run synchronously inside the call that
/// moved the handle.
pub struct CircularSlider {
    bounds: Size,
    explicit_radius: Option<f64>,
    model: ValueModel,
    drag: DragController,
    line_width: f64,
    handle_type: HandleType,
    handle_color: Option<Color>,
    filled_color: Color,
    unfilled_color: Color,
    label_font: LabelFont,
    label_color: Color,
    label_displacement: f64,
    inner_marking_labels: Option<Vec<LabelText>>,
    snap_to_labels: bool,
    unfilled_arc_line_cap: LineCap,
    filled_arc_line_cap: LineCap,
    rotated: bool,
    needs_display: bool,
    listeners: Vec<ValueListener>,
}

impl CircularSlider {
    /// Slider whose radius is derived from `bounds`.
    pub fn new(bounds: Size, config: SliderConfig) -> Result<Self, SliderError> {
        Self::build(bounds, None, config)
    }

    /// Slider with a fixed radius, sized to fit it.
    pub fn with_radius(radius: f64, config: SliderConfig) -> Result<Self, SliderError> {
        let radius = validate_radius(radius)?;
        let handle_diameter = config.handle_type.diameter(config.line_width);
        let bounds = handle::intrinsic_size(radius, config.line_width, handle_diameter);
        Self::build(bounds, Some(radius), config)
    }

    fn build(
        bounds: Size,
        explicit_radius: Option<f64>,
        config: SliderConfig,
    ) -> Result<Self, SliderError> {
        let mut model = ValueModel::new(config.min_value, config.max_value, config.max_angle)?;
        model.set_value(config.value)?;

        Ok(Self {
            bounds,
            explicit_radius,
            model,
            drag: DragController::new(),
            line_width: validate_line_width(config.line_width)?,
            handle_type: config.handle_type,
            handle_color: config.handle_color,
            filled_color: config.filled_color,
            unfilled_color: config.unfilled_color,
            label_font: config.label_font,
            label_color: config.label_color,
            label_displacement: validate_displacement(config.label_displacement)?,
            inner_marking_labels: validate_labels(config.inner_marking_labels)?,
            snap_to_labels: config.snap_to_labels,
            unfilled_arc_line_cap: config.unfilled_arc_line_cap,
            filled_arc_line_cap: config.filled_arc_line_cap,
            rotated: config.rotated,
            needs_display: true,
            listeners: Vec::new(),
        })
    }

    /// Replaces the whole configuration, keeping bounds, radius and listeners.
    ///
    /// The current value survives when it fits the new range, otherwise the
    /// configured initial value is used. Nothing changes if `config` is
    /// invalid.
    pub fn apply_config(&mut self, config: SliderConfig) -> Result<(), SliderError> {
        let previous = self.current_value();
        let mut next = Self::build(self.bounds, self.explicit_radius, config)?;
        if (next.model.min_value()..=next.model.max_value()).contains(&previous) {
            next.model.set_value(previous)?;
        }

        next.listeners = std::mem::take(&mut self.listeners);
        *self = next;
        if self.current_value() != previous {
            self.notify_value_changed();
        }
        Ok(())
    }

    pub fn on_value_changed(&mut self, listener: impl FnMut(f64) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    fn notify_value_changed(&mut self) {
        let value = self.current_value();
        for listener in &mut self.listeners {
            listener(value);
        }
    }

    /// Returns whether a redraw was requested since the last call.
    pub fn take_needs_display(&mut self) -> bool {
        std::mem::take(&mut self.needs_display)
    }

    fn set_needs_display(&mut self) {
        self.needs_display = true;
    }

    // Value

    pub fn current_value(&self) -> f64 {
        self.model.current_value()
    }

    pub fn angle_from_north(&self) -> i32 {
        self.model.angle_from_north()
    }

    pub fn value_model(&self) -> &ValueModel {
        &self.model
    }

    pub fn set_value(&mut self, value: f64) -> Result<(), SliderError> {
        self.model.set_value(value)?;
        self.set_needs_display();
        self.notify_value_changed();
        Ok(())
    }

    /// Moves the handle to a whole compass angle in `[0, max_angle]`.
    pub fn set_angle(&mut self, angle: i32) -> Result<(), SliderError> {
        self.model.set_angle(angle)?;
        self.set_needs_display();
        self.notify_value_changed();
        Ok(())
    }

    /// Runs a model change that may move the value, notifying if it did.
    fn reshape_model(
        &mut self,
        change: impl FnOnce(&mut ValueModel) -> Result<(), SliderError>,
    ) -> Result<(), SliderError> {
        let previous = self.current_value();
        change(&mut self.model)?;
        self.set_needs_display();
        if self.current_value() != previous {
            self.notify_value_changed();
        }
        Ok(())
    }

    // Configuration

    pub fn min_value(&self) -> f64 {
        self.model.min_value()
    }

    pub fn max_value(&self) -> f64 {
        self.model.max_value()
    }

    /// The angle is kept, so the value follows the new range.
    pub fn set_range(&mut self, min_value: f64, max_value: f64) -> Result<(), SliderError> {
        self.reshape_model(|model| model.set_range(min_value, max_value))
    }

    pub fn set_min_value(&mut self, min_value: f64) -> Result<(), SliderError> {
        self.set_range(min_value, self.max_value())
    }

    pub fn set_max_value(&mut self, max_value: f64) -> Result<(), SliderError> {
        self.set_range(self.min_value(), max_value)
    }

    pub fn max_angle(&self) -> f64 {
        self.model.max_angle()
    }

    /// Angles above 360 are clamped with a warning.
    pub fn set_max_angle(&mut self, max_angle: f64) -> Result<(), SliderError> {
        self.reshape_model(|model| model.set_max_angle(max_angle))
    }

    pub fn line_width(&self) -> f64 {
        self.line_width
    }

    pub fn set_line_width(&mut self, line_width: f64) -> Result<(), SliderError> {
        self.line_width = validate_line_width(line_width)?;
        self.set_needs_display();
        Ok(())
    }

    pub fn handle_type(&self) -> HandleType {
        self.handle_type
    }

    pub fn set_handle_type(&mut self, handle_type: HandleType) {
        self.handle_type = handle_type;
        self.set_needs_display();
    }

    pub fn set_handle_color(&mut self, color: Option<Color>) {
        self.handle_color = color;
        self.set_needs_display();
    }

    pub fn set_filled_color(&mut self, color: Color) {
        self.filled_color = color;
        self.set_needs_display();
    }

    pub fn set_unfilled_color(&mut self, color: Color) {
        self.unfilled_color = color;
        self.set_needs_display();
    }

    pub fn set_label_font(&mut self, font: LabelFont) {
        self.label_font = font;
        self.set_needs_display();
    }

    pub fn set_label_color(&mut self, color: Color) {
        self.label_color = color;
        self.set_needs_display();
    }

    pub fn set_label_displacement(&mut self, displacement: f64) -> Result<(), SliderError> {
        self.label_displacement = validate_displacement(displacement)?;
        self.set_needs_display();
        Ok(())
    }

    pub fn inner_marking_labels(&self) -> Option<&[LabelText]> {
        self.inner_marking_labels.as_deref()
    }

    /// `None` removes the labels. Fewer than two labels are rejected.
    pub fn set_inner_marking_labels(
        &mut self,
        labels: Option<Vec<LabelText>>,
    ) -> Result<(), SliderError> {
        self.inner_marking_labels = validate_labels(labels)?;
        self.set_needs_display();
        Ok(())
    }

    pub fn set_snap_to_labels(&mut self, snap: bool) {
        self.snap_to_labels = snap;
        self.set_needs_display();
    }

    pub fn set_unfilled_arc_line_cap(&mut self, cap: LineCap) {
        self.unfilled_arc_line_cap = cap;
        self.set_needs_display();
    }

    pub fn set_filled_arc_line_cap(&mut self, cap: LineCap) {
        self.filled_arc_line_cap = cap;
        self.set_needs_display();
    }

    pub fn is_rotated(&self) -> bool {
        self.rotated
    }

    pub fn set_rotated(&mut self, rotated: bool) {
        self.rotated = rotated;
        self.set_needs_display();
    }

    // Layout

    pub fn bounds(&self) -> Size {
        self.bounds
    }

    pub fn set_bounds(&mut self, bounds: Size) {
        self.bounds = bounds;
        self.set_needs_display();
    }

    /// `None` goes back to deriving the radius from the bounds.
    pub fn set_radius(&mut self, radius: Option<f64>) -> Result<(), SliderError> {
        self.explicit_radius = radius.map(validate_radius).transpose()?;
        self.set_needs_display();
        Ok(())
    }

    pub fn center(&self) -> Point {
        Point::new(self.bounds.width * 0.5, self.bounds.height * 0.5)
    }

    pub fn handle_diameter(&self) -> f64 {
        self.handle_type.diameter(self.line_width)
    }

    pub fn radius(&self) -> f64 {
        self.explicit_radius.unwrap_or_else(|| {
            handle::computed_radius(self.bounds, self.line_width, self.handle_diameter())
        })
    }

    pub fn intrinsic_size(&self) -> Size {
        handle::intrinsic_size(self.radius(), self.line_width, self.handle_diameter())
    }

    /// Rotation a host applies to the whole control so a partial circle's
    /// gap sits at the bottom. Labels are counter-rotated by the same amount.
    /// Zero when the control is not rotated.
    pub fn rotational_transform(&self) -> f64 {
        if !self.rotated {
            return 0.0;
        }
        labels::rotational_transform(self.max_angle())
    }

    pub fn point_on_circle(&self, angle_from_north: f64) -> Point {
        self.center()
            .offset_by(point_on_circle(self.radius(), angle_from_north))
    }

    pub fn handle(&self) -> HandleSpec {
        HandleSpec {
            handle_type: self.handle_type,
            center: self.point_on_circle(f64::from(self.angle_from_north())),
            diameter: self.handle_diameter(),
            color: self.handle_type.color(self.handle_color, self.filled_color),
        }
    }

    /// Whether a press at `point` grabs the control: on the handle, or on the
    /// stroked arc itself.
    pub fn contains(&self, point: Point) -> bool {
        if self.handle().contains(point) {
            return true;
        }
        let distance = self.center().distance_to(point);
        let radius = self.radius();
        (geometry::inner_radius(radius, self.line_width)..=geometry::outer_radius(radius, self.line_width))
            .contains(&distance)
    }

    // Pointer input

    pub fn drag_state(&self) -> DragState {
        self.drag.state()
    }

    /// Starts a drag if `point` hits the control.
    pub fn pointer_down(&mut self, point: Point) -> bool {
        let hit = self.contains(point);
        self.drag.begin(hit)
    }

    pub fn pointer_moved(&mut self, point: Point) -> Result<DragAction, SliderError> {
        let anchors = self.snap_anchors();
        let center = self.center();
        match self.drag.track(center, point, &mut self.model, &anchors)? {
            Some(_) => {
                self.set_needs_display();
                self.notify_value_changed();
                Ok(DragAction::new(true, Some(self.current_value())))
            }
            None => Ok(DragAction::default()),
        }
    }

    pub fn pointer_up(&mut self) {
        self.drag.end();
    }

    pub fn pointer_cancelled(&mut self) {
        self.drag.end();
    }

    fn snap_anchors(&self) -> Vec<f64> {
        match (&self.inner_marking_labels, self.snap_to_labels) {
            (Some(labels), true) => {
                labels::anchor_angles(labels.len(), self.max_angle()).unwrap_or_default()
            }
            _ => Vec::new(),
        }
    }

    // Drawing

    fn arc(&self, to_angle: f64, line_cap: LineCap) -> ArcSegment {
        ArcSegment {
            center: self.center(),
            radius: self.radius(),
            line_width: self.line_width,
            from_angle: 0.0,
            to_angle,
            line_cap,
        }
    }

    pub fn scene(&self, measure: &impl TextMeasure) -> Result<Scene, SliderError> {
        let labels = match &self.inner_marking_labels {
            Some(texts) => LabelLayout {
                center: self.center(),
                radius: self.radius(),
                line_width: self.line_width,
                max_angle: self.max_angle(),
                font: &self.label_font,
                displacement: self.label_displacement,
                control_rotation: self.rotational_transform(),
            }
            .layout(texts, measure)?,
            None => Vec::new(),
        };

        Ok(Scene {
            unfilled_arc: self.arc(self.max_angle(), self.unfilled_arc_line_cap),
            unfilled_color: self.unfilled_color,
            filled_arc: self.arc(f64::from(self.angle_from_north()), self.filled_arc_line_cap),
            filled_color: self.filled_color,
            handle: self.handle(),
            labels,
            label_font: self.label_font.clone(),
            label_color: self.label_color,
        })
    }
}

fn validate_line_width(line_width: f64) -> Result<f64, InvalidConfig> {
    if line_width.is_finite() && line_width > 0.0 {
        Ok(line_width)
    } else {
        Err(InvalidConfig::LineWidth(line_width))
    }
}

fn validate_radius(radius: f64) -> Result<f64, InvalidConfig> {
    // a zero-width stroke is as degenerate as a zero radius
    validate_line_width(radius)
}

fn validate_displacement(displacement: f64) -> Result<f64, InvalidConfig> {
    if displacement.is_finite() {
        Ok(displacement)
    } else {
        Err(InvalidConfig::LabelDisplacement(displacement))
    }
}

fn validate_labels(labels: Option<Vec<LabelText>>) -> Result<Option<Vec<LabelText>>, InvalidConfig> {
    match labels {
        Some(labels) if labels.len() < 2 => Err(InvalidConfig::TooFewLabels(labels.len())),
        labels => Ok(labels),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Preset;
    use crate::labels::tests::FixedAdvance;
    use approx::assert_abs_diff_eq;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn slider(config: SliderConfig) -> CircularSlider {
        CircularSlider::new(Size::square(200.0), config).unwrap()
    }

    fn recorded(slider: &mut CircularSlider) -> Rc<RefCell<Vec<f64>>> {
        let values = Rc::new(RefCell::new(Vec::new()));
        let sink = values.clone();
        slider.on_value_changed(move |v| sink.borrow_mut().push(v));
        values
    }

    #[test]
    fn test_set_value_updates_angle_and_notifies() {
        let mut slider = slider(SliderConfig::default());
        let values = recorded(&mut slider);

        slider.set_value(10.0).unwrap();
        assert_eq!(slider.angle_from_north(), 36);
        assert_abs_diff_eq!(slider.current_value(), 10.0);
        assert_eq!(*values.borrow(), vec![10.0]);
    }

    #[test]
    fn test_out_of_range_value_is_rejected_without_notification() {
        let mut slider = slider(SliderConfig::default());
        let values = recorded(&mut slider);
        slider.take_needs_display();

        assert!(matches!(
            slider.set_value(120.0),
            Err(SliderError::OutOfRange { value, .. }) if value == 120.0
        ));
        assert!(values.borrow().is_empty());
        assert!(!slider.take_needs_display());
    }

    #[test]
    fn test_construction_validates_config() {
        let too_few = SliderConfig {
            inner_marking_labels: Some(vec![LabelText::new("x")]),
            ..SliderConfig::default()
        };
        assert!(matches!(
            CircularSlider::new(Size::square(100.0), too_few),
            Err(SliderError::InvalidConfiguration(InvalidConfig::TooFewLabels(1)))
        ));

        let bad_width = SliderConfig {
            line_width: 0.0,
            ..SliderConfig::default()
        };
        assert!(CircularSlider::new(Size::square(100.0), bad_width).is_err());

        let bad_value = SliderConfig {
            value: 500.0,
            ..SliderConfig::default()
        };
        assert!(CircularSlider::new(Size::square(100.0), bad_value).is_err());
    }

    #[test]
    fn test_setters_request_display() {
        let mut slider = slider(SliderConfig::default());
        assert!(slider.take_needs_display());
        assert!(!slider.take_needs_display());

        slider.set_line_width(12.0).unwrap();
        assert!(slider.take_needs_display());

        assert!(slider.set_line_width(-1.0).is_err());
        assert!(!slider.take_needs_display());
        assert_eq!(slider.line_width(), 12.0);

        slider.set_handle_type(HandleType::BigCircle);
        assert!(slider.take_needs_display());

        slider.set_snap_to_labels(true);
        assert!(slider.take_needs_display());
    }

    #[test]
    fn test_max_angle_above_360_is_clamped() {
        let mut slider = slider(SliderConfig::default());
        slider.set_max_angle(450.0).unwrap();
        assert_eq!(slider.max_angle(), 360.0);
        assert!(slider.set_max_angle(-10.0).is_err());
    }

    #[test]
    fn test_radius_from_bounds_and_explicit() {
        let slider = slider(Preset::Full.config());
        // small handle: 15, stroke: 30
        assert_eq!(slider.radius(), 85.0);
        assert_eq!(slider.center(), Point::new(100.0, 100.0));

        let fixed = CircularSlider::with_radius(50.0, Preset::Labels.config()).unwrap();
        assert_eq!(fixed.radius(), 50.0);
        // big circle handle is 15 wide: ceil(7.5) = 8
        assert_eq!(fixed.bounds(), Size::square(116.0));
        assert_eq!(fixed.intrinsic_size(), fixed.bounds());
    }

    #[test]
    fn test_hit_testing() {
        let mut slider = slider(SliderConfig {
            line_width: 10.0,
            ..SliderConfig::default()
        });
        // radius = 100 - 5 = 95; handle at north (100, 5)
        assert!(slider.contains(Point::new(100.0, 5.0)));
        // handle box is 44 wide even though the handle is 5
        assert!(slider.contains(Point::new(120.0, 25.0)));
        // on the stroke at east
        assert!(slider.contains(Point::new(193.0, 100.0)));
        // centre and far outside miss
        assert!(!slider.contains(Point::new(100.0, 100.0)));
        assert!(!slider.contains(Point::new(199.0, 199.0)));

        assert!(!slider.pointer_down(Point::new(100.0, 100.0)));
        assert_eq!(slider.drag_state(), DragState::Idle);
    }

    #[test]
    fn test_drag_emits_for_every_move() {
        let mut slider = slider(SliderConfig::default());
        let values = recorded(&mut slider);
        let east = slider.point_on_circle(90.0);

        assert!(slider.pointer_down(slider.point_on_circle(0.0)));
        let first = slider.pointer_moved(east).unwrap();
        let second = slider.pointer_moved(east).unwrap();
        slider.pointer_up();
        let after_release = slider.pointer_moved(slider.point_on_circle(180.0)).unwrap();

        assert_eq!(first, DragAction::new(true, Some(25.0)));
        assert_eq!(second, first);
        assert_eq!(after_release, DragAction::default());
        assert_eq!(*values.borrow(), vec![25.0, 25.0]);
        assert_eq!(slider.angle_from_north(), 90);
    }

    #[test]
    fn test_drag_across_partial_circle_gap() {
        let mut slider = slider(Preset::Partial.config());
        slider.set_value(80.0).unwrap();
        assert_eq!(slider.angle_from_north(), 216);

        assert!(slider.pointer_down(slider.handle().center));
        let action = slider.pointer_moved(slider.point_on_circle(300.0)).unwrap();
        assert_eq!(slider.angle_from_north(), 270);
        assert_eq!(action.value_changed, Some(100.0));
        slider.pointer_cancelled();
        assert_eq!(slider.drag_state(), DragState::Idle);
    }

    #[test]
    fn test_snap_to_labels() {
        let mut config = Preset::Labels.config();
        config.snap_to_labels = true;
        let mut slider = slider(config);

        assert!(slider.pointer_down(slider.handle().center));
        slider.pointer_moved(slider.point_on_circle(70.0)).unwrap();
        assert_eq!(slider.angle_from_north(), 54);
        assert_abs_diff_eq!(slider.current_value(), 20.0);
    }

    #[test]
    fn test_apply_config_keeps_value_and_listeners() {
        let mut slider = slider(SliderConfig::default());
        slider.set_value(40.0).unwrap();
        let values = recorded(&mut slider);

        slider.apply_config(Preset::Partial.config()).unwrap();
        assert_eq!(slider.max_angle(), 270.0);
        assert_abs_diff_eq!(slider.current_value(), 40.0, epsilon = 0.5);
        assert!(values.borrow().len() <= 1);

        let narrow = SliderConfig {
            max_value: 20.0,
            value: 5.0,
            ..SliderConfig::default()
        };
        slider.apply_config(narrow).unwrap();
        assert_abs_diff_eq!(slider.current_value(), 5.0);
        assert_eq!(values.borrow().last(), Some(&5.0));

        let invalid = SliderConfig {
            max_angle: 0.0,
            ..SliderConfig::default()
        };
        assert!(slider.apply_config(invalid).is_err());
        assert_eq!(slider.max_value(), 20.0);
    }

    #[test]
    fn test_scene_for_labels_preset() {
        let slider = CircularSlider::new(Size::square(300.0), Preset::Labels.config()).unwrap();
        let scene = slider.scene(&FixedAdvance).unwrap();

        assert_eq!(scene.unfilled_arc.to_angle, 270.0);
        assert_eq!(scene.unfilled_arc.line_cap, LineCap::Round);
        // value 10 of 100 over 270°
        assert_eq!(scene.filled_arc.to_angle, 27.0);
        assert_eq!(scene.handle.diameter, 15.0);
        assert_eq!(scene.handle.color, Color::red());

        let angles: Vec<f64> = scene.labels.iter().map(|l| l.anchor_angle).collect();
        assert_eq!(angles, vec![0.0, 54.0, 108.0, 162.0, 216.0, 270.0]);
    }

    #[test]
    fn test_label_setter_rejects_single_label() {
        let mut slider = slider(SliderConfig::default());
        assert!(slider
            .set_inner_marking_labels(Some(vec![LabelText::new("solo")]))
            .is_err());
        assert!(slider.inner_marking_labels().is_none());

        slider
            .set_inner_marking_labels(Some(vec![LabelText::new("a"), LabelText::new("b")]))
            .unwrap();
        assert_eq!(slider.inner_marking_labels().map(<[_]>::len), Some(2));
    }

    #[test]
    fn test_set_max_angle_notifies_when_value_moves() {
        let mut slider = slider(SliderConfig::default());
        slider.set_value(90.0).unwrap();
        let values = recorded(&mut slider);

        // angle 324 no longer fits and is pulled back to the new end
        slider.set_max_angle(180.0).unwrap();
        assert_eq!(slider.angle_from_north(), 180);
        assert_abs_diff_eq!(slider.current_value(), 100.0);
        assert_eq!(*values.borrow(), vec![100.0]);
    }

    #[test]
    fn test_set_max_angle_silent_when_value_unchanged() {
        let mut slider = slider(SliderConfig::default());
        let values = recorded(&mut slider);

        slider.set_max_angle(270.0).unwrap();
        assert_eq!(slider.current_value(), 0.0);
        assert!(values.borrow().is_empty());
    }

    #[test]
    fn test_set_range_notifies_new_value() {
        let mut slider = slider(SliderConfig::default());
        slider.set_value(50.0).unwrap();
        let values = recorded(&mut slider);

        slider.set_range(0.0, 10.0).unwrap();
        assert_eq!(slider.angle_from_north(), 180);
        assert_abs_diff_eq!(slider.current_value(), 5.0);
        assert_eq!(*values.borrow(), vec![5.0]);

        assert!(slider.set_range(10.0, 0.0).is_err());
        assert_eq!(values.borrow().len(), 1);
    }

    #[test]
    fn test_set_angle_notifies_and_validates() {
        let mut slider = slider(SliderConfig::default());
        let values = recorded(&mut slider);
        slider.take_needs_display();

        slider.set_angle(90).unwrap();
        assert_abs_diff_eq!(slider.current_value(), 25.0);
        assert_eq!(*values.borrow(), vec![25.0]);
        assert!(slider.take_needs_display());

        assert!(matches!(
            slider.set_angle(400),
            Err(SliderError::OutOfRange { .. })
        ));
        assert!(slider.set_angle(-1).is_err());
        assert_eq!(slider.angle_from_north(), 90);
        assert_eq!(values.borrow().len(), 1);
        assert!(!slider.take_needs_display());
    }

    #[test]
    fn test_unrotated_labels_stay_upright() {
        let config = SliderConfig {
            rotated: false,
            ..Preset::Labels.config()
        };
        let mut slider = CircularSlider::new(Size::square(300.0), config).unwrap();
        assert_eq!(slider.rotational_transform(), 0.0);

        let scene = slider.scene(&FixedAdvance).unwrap();
        assert!(scene.labels.iter().all(|l| l.rotation == 0.0));

        slider.set_rotated(true);
        assert_abs_diff_eq!(slider.rotational_transform(), (-135.0_f64).to_radians());
        let scene = slider.scene(&FixedAdvance).unwrap();
        for label in &scene.labels {
            assert_abs_diff_eq!(label.rotation, 135.0_f64.to_radians());
        }
    }

    #[test]
    fn test_tiny_bounds_collapse_radius_to_zero() {
        let mut slider = slider(Preset::Full.config());
        slider.set_bounds(Size::square(20.0));
        assert_eq!(slider.radius(), 0.0);
        assert_eq!(slider.handle().center, slider.center());
        assert!(slider.pointer_down(slider.center()));
    }
}
