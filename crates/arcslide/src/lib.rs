//! Geometry and value mapping for a circular slider control.
//!
//! Angles are "compass" angles throughout: 0° points north (up) and angles
//! grow clockwise. Only [`geometry`] knows about the cartesian frame that
//! drawing backends use.

pub mod config;
pub mod drag;
pub mod error;
pub mod geometry;
pub mod handle;
pub mod labels;
pub mod macros;
pub mod render;
pub mod slider;
pub mod style;
pub mod value;

pub use config::{Preset, SliderConfig};
pub use drag::{DragAction, DragController, DragState};
pub use error::{InvalidConfig, SliderError};
pub use geometry::{ArcSegment, Point, Rect, Size};
pub use handle::{HandleSpec, HandleType};
pub use labels::{LabelLayout, LabelSpec, TextMeasure};
pub use render::{Renderer, Scene};
pub use slider::CircularSlider;
pub use style::{Color, LabelFont, LabelText, LineCap};
pub use value::ValueModel;
