use crate::error::{InvalidConfig, SliderError};

pub const FULL_CIRCLE: f64 = 360.0;

/// Value range, angular extent, and the current angle.
///
/// The angle is the only stored position. The value is always derived from it,
/// with `min_value` at north and `max_value` at `max_angle` degrees clockwise.
#[derive(Debug, Clone, PartialEq)]
pub struct ValueModel {
    min_value: f64,
    max_value: f64,
    max_angle: f64,
    angle_from_north: i32,
}

impl ValueModel {
    pub fn new(min_value: f64, max_value: f64, max_angle: f64) -> Result<Self, SliderError> {
        validate_range(min_value, max_value)?;
        Ok(Self {
            min_value,
            max_value,
            max_angle: sanitize_max_angle(max_angle)?,
            angle_from_north: 0,
        })
    }

    pub fn min_value(&self) -> f64 {
        self.min_value
    }

    pub fn max_value(&self) -> f64 {
        self.max_value
    }

    pub fn max_angle(&self) -> f64 {
        self.max_angle
    }

    pub fn angle_from_north(&self) -> i32 {
        self.angle_from_north
    }

    fn range(&self) -> f64 {
        self.max_value - self.min_value
    }

    /// Largest whole angle the handle may occupy.
    pub fn max_whole_angle(&self) -> i32 {
        self.max_angle.floor() as i32
    }

    pub fn current_value(&self) -> f64 {
        self.value_for_angle(f64::from(self.angle_from_north))
    }

    pub fn value_for_angle(&self, angle: f64) -> f64 {
        self.min_value + angle * self.range() / self.max_angle
    }

    pub fn angle_for_value(&self, value: f64) -> i32 {
        ((value - self.min_value) * self.max_angle / self.range()).round() as i32
    }

    /// Moves the handle to represent `value`. Returns the new angle.
    pub fn set_value(&mut self, value: f64) -> Result<i32, SliderError> {
        if !value.is_finite() || value < self.min_value || value > self.max_value {
            return Err(SliderError::OutOfRange {
                value,
                min: self.min_value,
                max: self.max_value,
            });
        }

        // rounding can land one degree past a fractional max angle
        self.angle_from_north = self.angle_for_value(value).min(self.max_whole_angle());
        Ok(self.angle_from_north)
    }

    pub fn set_angle(&mut self, angle: i32) -> Result<(), SliderError> {
        if angle < 0 || f64::from(angle) > self.max_angle {
            return Err(SliderError::OutOfRange {
                value: f64::from(angle),
                min: 0.0,
                max: self.max_angle,
            });
        }
        self.angle_from_north = angle;
        Ok(())
    }

    pub fn set_range(&mut self, min_value: f64, max_value: f64) -> Result<(), SliderError> {
        validate_range(min_value, max_value)?;
        self.min_value = min_value;
        self.max_value = max_value;
        Ok(())
    }

    /// Values above a full circle are clamped to 360 with a warning. The
    /// current angle is pulled back if it no longer fits.
    pub fn set_max_angle(&mut self, max_angle: f64) -> Result<(), SliderError> {
        self.max_angle = sanitize_max_angle(max_angle)?;

        let limit = self.max_whole_angle();
        if self.angle_from_north > limit {
            log::debug!(
                "Angle {} exceeds new maximum angle, moving handle to {}",
                self.angle_from_north,
                limit
            );
            self.angle_from_north = limit;
        }
        Ok(())
    }
}

fn validate_range(min_value: f64, max_value: f64) -> Result<(), InvalidConfig> {
    if min_value.is_finite() && max_value.is_finite() && min_value < max_value {
        Ok(())
    } else {
        Err(InvalidConfig::EmptyRange {
            min: min_value,
            max: max_value,
        })
    }
}

fn sanitize_max_angle(max_angle: f64) -> Result<f64, InvalidConfig> {
    if max_angle.is_nan() || max_angle <= 0.0 {
        return Err(InvalidConfig::MaxAngle(max_angle));
    }
    if max_angle > FULL_CIRCLE {
        log::warn!(
            "Maximum angle {} should be {} or less, using {} instead",
            max_angle,
            FULL_CIRCLE,
            FULL_CIRCLE
        );
        return Ok(FULL_CIRCLE);
    }
    Ok(max_angle)
}
