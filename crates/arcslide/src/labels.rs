use crate::error::{InvalidConfig, SliderError};
use crate::geometry::{Point, Rect, Size, point_on_circle};
use crate::style::{LabelFont, LabelText};
use crate::value::FULL_CIRCLE;

/// Measures rendered text. Implemented by the drawing backend.
pub trait TextMeasure {
    fn measure(&self, text: &str, font: &LabelFont) -> Size;
}

/// Rotation, in radians, a host applies to a partial-circle slider so its gap
/// is centred at the bottom. Full circles are not rotated.
pub fn rotational_transform(max_angle: f64) -> f64 {
    if max_angle >= FULL_CIRCLE {
        0.0
    } else {
        (-(max_angle / 2.0)).to_radians()
    }
}

/// Compass angle of each of `count` labels spread evenly over `max_angle`.
pub fn anchor_angles(count: usize, max_angle: f64) -> Result<Vec<f64>, InvalidConfig> {
    if count < 2 {
        return Err(InvalidConfig::TooFewLabels(count));
    }
    let intervals = (count - 1) as f64;
    Ok((0..count)
        .map(|i| i as f64 * max_angle / intervals)
        .collect())
}

#[derive(Debug, Clone, PartialEq)]
pub struct LabelSpec {
    pub text: LabelText,
    pub index: usize,
    pub anchor_angle: f64,
    /// From the anchor on the circumference to the label frame's origin.
    pub offset: Point,
    pub size: Size,
    pub frame: Rect,
    /// Applied about the frame's centre to undo the control's own rotation.
    pub rotation: f64,
}

#[derive(Debug, Clone)]
pub struct LabelLayout<'a> {
    pub center: Point,
    pub radius: f64,
    pub line_width: f64,
    pub max_angle: f64,
    pub font: &'a LabelFont,
    pub displacement: f64,
    /// Rotation the host applies to the whole control, undone per label.
    pub control_rotation: f64,
}

impl LabelLayout<'_> {
    /// Signed distance from the circumference to the label centres. Negative
    /// values move towards the centre.
    pub fn radial_distance(&self) -> f64 {
        -0.1 * self.radius - 0.5 * self.line_width - 0.5 * self.font.size + self.displacement
    }

    pub fn layout(
        &self,
        labels: &[LabelText],
        measure: &impl TextMeasure,
    ) -> Result<Vec<LabelSpec>, SliderError> {
        let angles = anchor_angles(labels.len(), self.max_angle)?;
        let rotation = -self.control_rotation;
        let radial_distance = self.radial_distance();

        Ok(labels
            .iter()
            .zip(angles)
            .enumerate()
            .map(|(index, (text, anchor_angle))| {
                let size = measure.measure(text, self.font);
                let inward = point_on_circle(radial_distance, anchor_angle);
                let offset = Point::new(
                    inward.x - size.width * 0.5,
                    inward.y - size.height * 0.5,
                );
                let anchor = self
                    .center
                    .offset_by(point_on_circle(self.radius, anchor_angle));

                LabelSpec {
                    text: text.clone(),
                    index,
                    anchor_angle,
                    offset,
                    size,
                    frame: Rect::new(anchor.offset_by(offset), size),
                    rotation,
                }
            })
            .collect())
    }
}
