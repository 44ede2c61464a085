use crate::geometry::{Point, Rect, Size};
use crate::style::Color;
use serde::Serialize;
use serde_with::DeserializeFromStr;
use strum::{Display as StrumDisplay, EnumIter, EnumString};

/// Smallest side of the square that accepts touches around the handle.
pub const MIN_TOUCH_TARGET: f64 = 44.0;
pub const HANDLE_ALPHA: f64 = 0.7;
pub const BIG_CIRCLE_EXTRA: f64 = 5.0;

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    DeserializeFromStr,
    EnumString,
    EnumIter,
    StrumDisplay,
)]
#[strum(ascii_case_insensitive)]
#[serde(rename_all = "kebab-case")]
pub enum HandleType {
    #[default]
    #[strum(to_string = "small-translucent-white", serialize = "SmallTranslucentWhite")]
    SmallTranslucentWhite,
    #[strum(to_string = "translucent-white", serialize = "TranslucentWhite")]
    TranslucentWhite,
    #[strum(to_string = "translucent-black", serialize = "TranslucentBlack")]
    TranslucentBlack,
    #[strum(to_string = "big-circle", serialize = "BigCircle")]
    BigCircle,
}

impl HandleType {
    pub fn diameter(self, line_width: f64) -> f64 {
        match self {
            Self::SmallTranslucentWhite => line_width / 2.0,
            Self::TranslucentWhite | Self::TranslucentBlack => line_width,
            Self::BigCircle => line_width + BIG_CIRCLE_EXTRA,
        }
    }

    /// Translucent handles have fixed colours. The big circle takes the
    /// explicit handle colour when one is set, otherwise the filled arc colour.
    pub fn color(self, handle_color: Option<Color>, filled_color: Color) -> Color {
        match self {
            Self::SmallTranslucentWhite | Self::TranslucentWhite => Color::white(HANDLE_ALPHA),
            Self::TranslucentBlack => Color::black(HANDLE_ALPHA),
            Self::BigCircle => handle_color.unwrap_or(filled_color),
        }
    }
}

/// Half of the wider of the stroke and the handle, rounded up. This much room
/// is kept between the arc's centre line and the control's edge.
fn edge_clearance(line_width: f64, handle_diameter: f64) -> f64 {
    (line_width / 2.0).ceil().max((handle_diameter / 2.0).ceil())
}

/// Arc radius that fits `bounds` without the stroke or handle clipping.
/// Bounds too small for the stroke give a radius of zero.
pub fn computed_radius(bounds: Size, line_width: f64, handle_diameter: f64) -> f64 {
    (bounds.min_dimension() * 0.5 - edge_clearance(line_width, handle_diameter)).max(0.0)
}

/// Square size a control with an explicit `radius` needs.
pub fn intrinsic_size(radius: f64, line_width: f64, handle_diameter: f64) -> Size {
    Size::square(radius * 2.0 + 2.0 * edge_clearance(line_width, handle_diameter))
}

/// Resolved handle for one redraw.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HandleSpec {
    pub handle_type: HandleType,
    pub center: Point,
    pub diameter: f64,
    pub color: Color,
}

impl HandleSpec {
    pub fn radius(&self) -> f64 {
        self.diameter / 2.0
    }

    pub fn hit_box(&self) -> Rect {
        Rect::from_center(self.center, Size::square(self.diameter.max(MIN_TOUCH_TARGET)))
    }

    pub fn contains(&self, point: Point) -> bool {
        self.hit_box().contains(point)
    }
}
