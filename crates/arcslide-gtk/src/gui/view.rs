use arcslide::{
    ArcSegment, CircularSlider, Color, LabelFont, LineCap, Point, Rect, Renderer, Size,
    SliderError, TextMeasure,
};
use cairo::Context;
use std::f64::consts::TAU;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DrawError {
    #[error(transparent)]
    Cairo(#[from] cairo::Error),
    #[error(transparent)]
    Slider(#[from] SliderError),
}

/// Paints slider scenes onto a cairo context.
pub struct CairoRenderer<'a> {
    cr: &'a Context,
}

impl<'a> CairoRenderer<'a> {
    pub fn new(cr: &'a Context) -> Self {
        Self { cr }
    }

    fn set_color(&self, color: Color) {
        let (r, g, b, a) = color.components();
        self.cr.set_source_rgba(r, g, b, a);
    }

    fn select_font(&self, font: &LabelFont) {
        self.cr
            .select_font_face(&font.family, cairo::FontSlant::Normal, cairo::FontWeight::Normal);
        self.cr.set_font_size(font.size);
    }
}

fn cairo_line_cap(cap: LineCap) -> cairo::LineCap {
    match cap {
        LineCap::Butt => cairo::LineCap::Butt,
        LineCap::Round => cairo::LineCap::Round,
        LineCap::Square => cairo::LineCap::Square,
    }
}

impl TextMeasure for CairoRenderer<'_> {
    fn measure(&self, text: &str, font: &LabelFont) -> Size {
        self.select_font(font);
        match self.cr.text_extents(text) {
            Ok(ext) => Size::new(ext.x_advance(), ext.height()),
            Err(e) => {
                log::warn!("Failed to measure label '{}': {}", text, e);
                Size::default()
            }
        }
    }
}

impl Renderer for CairoRenderer<'_> {
    type Error = cairo::Error;

    fn stroke_arc(&mut self, arc: &ArcSegment, color: Color) -> Result<(), cairo::Error> {
        self.set_color(color);
        self.cr.set_line_width(arc.line_width);
        self.cr.set_line_cap(cairo_line_cap(arc.line_cap));
        self.cr.new_path();
        // cairo's y axis points down, so increasing angles already run clockwise
        self.cr.arc(
            arc.center.x,
            arc.center.y,
            arc.radius,
            arc.start_radians(),
            arc.end_radians(),
        );
        self.cr.stroke()
    }

    fn fill_circle(
        &mut self,
        center: Point,
        radius: f64,
        color: Color,
    ) -> Result<Rect, cairo::Error> {
        self.set_color(color);
        self.cr.new_path();
        self.cr.arc(center.x, center.y, radius, 0.0, TAU);
        self.cr.fill()?;
        Ok(Rect::from_center(center, Size::square(2.0 * radius)))
    }

    fn draw_text(
        &mut self,
        text: &str,
        frame: Rect,
        font: &LabelFont,
        color: Color,
    ) -> Result<(), cairo::Error> {
        self.set_color(color);
        self.select_font(font);
        let ext = self.cr.text_extents(text)?;
        // centre the ink box inside the frame
        self.cr.move_to(
            frame.origin.x + (frame.size.width - ext.width()) / 2.0 - ext.x_bearing(),
            frame.origin.y + (frame.size.height - ext.height()) / 2.0 - ext.y_bearing(),
        );
        self.cr.show_text(text)
    }

    fn save(&mut self) -> Result<(), cairo::Error> {
        self.cr.save()
    }

    fn rotate_about(&mut self, center: Point, radians: f64) -> Result<(), cairo::Error> {
        self.cr.translate(center.x, center.y);
        self.cr.rotate(radians);
        self.cr.translate(-center.x, -center.y);
        Ok(())
    }

    fn restore(&mut self) -> Result<(), cairo::Error> {
        self.cr.restore()
    }
}

/// Draws the slider, turning the whole control by its rotational transform.
pub fn draw(cr: &Context, slider: &CircularSlider) -> Result<(), DrawError> {
    let mut renderer = CairoRenderer::new(cr);
    let scene = slider.scene(&renderer)?;

    renderer.save()?;
    renderer.rotate_about(slider.center(), slider.rotational_transform())?;
    let painted = scene.paint(&mut renderer);
    renderer.restore()?;
    painted?;
    Ok(())
}
