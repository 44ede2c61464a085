use crate::geometry::{ArcSegment, Point, Rect};
use crate::handle::HandleSpec;
use crate::labels::LabelSpec;
use crate::style::{Color, LabelFont};

/// Drawing primitives a host backend provides. Angles reach the backend only
/// through [`ArcSegment`], which converts them to the cartesian frame.
pub trait Renderer {
    type Error;

    fn stroke_arc(&mut self, arc: &ArcSegment, color: Color) -> Result<(), Self::Error>;

    /// Fills a circle and returns its bounding box.
    fn fill_circle(&mut self, center: Point, radius: f64, color: Color)
    -> Result<Rect, Self::Error>;

    fn draw_text(
        &mut self,
        text: &str,
        frame: Rect,
        font: &LabelFont,
        color: Color,
    ) -> Result<(), Self::Error>;

    fn save(&mut self) -> Result<(), Self::Error>;

    fn rotate_about(&mut self, center: Point, radians: f64) -> Result<(), Self::Error>;

    fn restore(&mut self) -> Result<(), Self::Error>;
}

/// Everything one redraw of the slider paints.
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    pub unfilled_arc: ArcSegment,
    pub unfilled_color: Color,
    pub filled_arc: ArcSegment,
    pub filled_color: Color,
    pub handle: HandleSpec,
    pub labels: Vec<LabelSpec>,
    pub label_font: LabelFont,
    pub label_color: Color,
}

impl Scene {
    /// Paints the track, the filled part, the handle, then the labels.
    /// Returns the handle's bounding box.
    pub fn paint<R: Renderer>(&self, renderer: &mut R) -> Result<Rect, R::Error> {
        renderer.stroke_arc(&self.unfilled_arc, self.unfilled_color)?;
        renderer.stroke_arc(&self.filled_arc, self.filled_color)?;

        let handle_frame =
            renderer.fill_circle(self.handle.center, self.handle.radius(), self.handle.color)?;

        for label in &self.labels {
            renderer.save()?;
            renderer.rotate_about(label.frame.center(), label.rotation)?;
            renderer.draw_text(&label.text, label.frame, &self.label_font, self.label_color)?;
            renderer.restore()?;
        }

        Ok(handle_frame)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Preset;
    use crate::geometry::Size;
    use crate::labels::tests::FixedAdvance;
    use crate::slider::CircularSlider;
    use std::convert::Infallible;

    #[derive(Debug, Clone, PartialEq)]
    enum Call {
        StrokeArc { from: f64, to: f64 },
        FillCircle { center: Point, radius: f64 },
        DrawText(String),
        Save,
        Rotate(f64),
        Restore,
    }

    #[derive(Default)]
    struct RecordingRenderer {
        calls: Vec<Call>,
    }

    impl Renderer for RecordingRenderer {
        type Error = Infallible;

        fn stroke_arc(&mut self, arc: &ArcSegment, _color: Color) -> Result<(), Infallible> {
            self.calls.push(Call::StrokeArc {
                from: arc.from_angle,
                to: arc.to_angle,
            });
            Ok(())
        }

        fn fill_circle(
            &mut self,
            center: Point,
            radius: f64,
            _color: Color,
        ) -> Result<Rect, Infallible> {
            self.calls.push(Call::FillCircle { center, radius });
            Ok(Rect::from_center(center, Size::square(2.0 * radius)))
        }

        fn draw_text(
            &mut self,
            text: &str,
            _frame: Rect,
            _font: &LabelFont,
            _color: Color,
        ) -> Result<(), Infallible> {
            self.calls.push(Call::DrawText(text.to_string()));
            Ok(())
        }

        fn save(&mut self) -> Result<(), Infallible> {
            self.calls.push(Call::Save);
            Ok(())
        }

        fn rotate_about(&mut self, _center: Point, radians: f64) -> Result<(), Infallible> {
            self.calls.push(Call::Rotate(radians));
            Ok(())
        }

        fn restore(&mut self) -> Result<(), Infallible> {
            self.calls.push(Call::Restore);
            Ok(())
        }
    }

    #[test]
    fn test_paint_order_without_labels() {
        let mut slider = CircularSlider::new(Size::square(200.0), Preset::Full.config()).unwrap();
        slider.set_value(25.0).unwrap();

        let scene = slider.scene(&FixedAdvance).unwrap();
        let mut renderer = RecordingRenderer::default();
        let frame = scene.paint(&mut renderer).unwrap();

        // radius = 100 - ceil(30 / 2), handle at east
        assert_eq!(
            renderer.calls,
            vec![
                Call::StrokeArc { from: 0.0, to: 360.0 },
                Call::StrokeArc { from: 0.0, to: 90.0 },
                Call::FillCircle {
                    center: Point::new(185.0, 100.0),
                    radius: 7.5,
                },
            ]
        );
        assert_eq!(frame.size, Size::square(15.0));
    }

    #[test]
    fn test_labels_painted_inside_save_restore() {
        let slider = CircularSlider::new(Size::square(300.0), Preset::Labels.config()).unwrap();
        let scene = slider.scene(&FixedAdvance).unwrap();
        let mut renderer = RecordingRenderer::default();
        scene.paint(&mut renderer).unwrap();

        let label_calls = &renderer.calls[3..];
        assert_eq!(label_calls.len(), 6 * 4);
        for (chunk, text) in label_calls
            .chunks(4)
            .zip(["0", "20", "40", "60", "80", "100"])
        {
            assert_eq!(chunk[0], Call::Save);
            assert!(matches!(chunk[1], Call::Rotate(r) if (r - 135.0_f64.to_radians()).abs() < 1e-9));
            assert_eq!(chunk[2], Call::DrawText(text.to_string()));
            assert_eq!(chunk[3], Call::Restore);
        }
    }
}
