use crate::handle::HandleType;
use crate::style::{Color, LabelFont, LabelText, LineCap};
use serde::{Deserialize, Serialize};
use serde_with::DeserializeFromStr;
use strum::{Display as StrumDisplay, EnumIter, EnumString};

/// Everything needed to construct a [`crate::CircularSlider`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SliderConfig {
    /// Value at north, where the arc starts.
    pub min_value: f64,
    /// Value at `max_angle`, where the arc ends.
    pub max_value: f64,
    /// Angular extent of the arc. Less than 360 leaves a gap.
    pub max_angle: f64,
    /// Initial value.
    pub value: f64,
    pub line_width: f64,
    pub handle_type: HandleType,
    /// Only used by [`HandleType::BigCircle`].
    pub handle_color: Option<Color>,
    pub filled_color: Color,
    pub unfilled_color: Color,
    pub label_font: LabelFont,
    pub label_color: Color,
    /// Negative moves labels towards the centre, positive towards the arc.
    pub label_displacement: f64,
    /// The first label sits at north, the last at `max_angle`.
    pub inner_marking_labels: Option<Vec<LabelText>>,
    pub snap_to_labels: bool,
    pub unfilled_arc_line_cap: LineCap,
    pub filled_arc_line_cap: LineCap,
    /// Turn a partial circle so its gap is centred at the bottom.
    pub rotated: bool,
}

impl Default for SliderConfig {
    fn default() -> Self {
        Self {
            min_value: 0.0,
            max_value: 100.0,
            max_angle: 360.0,
            value: 0.0,
            line_width: 5.0,
            handle_type: HandleType::default(),
            handle_color: None,
            filled_color: Color::red(),
            unfilled_color: Color::black(1.0),
            label_font: LabelFont::default(),
            label_color: Color::red(),
            label_displacement: 0.0,
            inner_marking_labels: None,
            snap_to_labels: false,
            unfilled_arc_line_cap: LineCap::default(),
            filled_arc_line_cap: LineCap::default(),
            rotated: true,
        }
    }
}

/// Ready-made slider set-ups.
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
#[serde(rename_all = "lowercase")]
pub enum Preset {
    /// Thick full circle with round caps.
    #[default]
    #[strum(to_string = "full", serialize = "circle")]
    Full,
    /// Thick 270° arc, meant to be rotated so the gap is at the bottom.
    #[strum(serialize = "partial")]
    Partial,
    /// Thin 270° arc with a big handle and six inner labels.
    #[strum(to_string = "labels", serialize = "with-labels")]
    Labels,
}

impl Preset {
    pub fn config(self) -> SliderConfig {
        let base = SliderConfig {
            value: 10.0,
            unfilled_arc_line_cap: LineCap::Round,
            filled_arc_line_cap: LineCap::Round,
            ..SliderConfig::default()
        };

        match self {
            Self::Full => SliderConfig {
                line_width: 30.0,
                ..base
            },
            Self::Partial => SliderConfig {
                max_angle: 270.0,
                line_width: 30.0,
                ..base
            },
            Self::Labels => SliderConfig {
                max_angle: 270.0,
                line_width: 10.0,
                handle_type: HandleType::BigCircle,
                label_displacement: -10.0,
                inner_marking_labels: Some(
                    ["0", "20", "40", "60", "80", "100"]
                        .into_iter()
                        .map(LabelText::from)
                        .collect(),
                ),
                ..base
            },
        }
    }
}
