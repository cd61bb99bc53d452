use egui::{Align2, Color32, FontId, Frame, Painter, Stroke, pos2};
use touch_paint::{
    render::{Circle, Surface},
    style_config::Colour,
};

use crate::model::Model;

/// Hairline rings are still drawn one point wide.
const MIN_STROKE_WIDTH: f32 = 1.0;

/// Draws rings straight onto an egui layer.
pub struct EguiSurface<'a> {
    painter: &'a Painter,
}

impl<'a> EguiSurface<'a> {
    pub fn new(painter: &'a Painter) -> Self {
        EguiSurface { painter }
    }
}

impl Surface for EguiSurface<'_> {
    fn draw_circle(&mut self, circle: &Circle) {
        let (x, y) = circle.centre;
        let Colour { r, g, b } = circle.colour;
        self.painter.circle_stroke(
            pos2(x, y),
            circle.radius,
            Stroke::new(
                circle.stroke_width.max(MIN_STROKE_WIDTH),
                Color32::from_rgb(r, g, b),
            ),
        );
    }
}

pub fn render_ui(ctx: &egui::Context, model: &mut Model) {
    egui::CentralPanel::default()
        .frame(Frame::none().fill(Color32::BLACK))
        .show(ctx, |ui| {
            let painter = ui.painter();
            model.paint_surface.on_paint(&mut EguiSurface::new(painter));

            if model.show_overlay {
                painter.text(
                    ui.max_rect().left_bottom() + egui::vec2(8., -8.),
                    Align2::LEFT_BOTTOM,
                    format!(
                        "contacts: {}   touches: {}   (H to hide)",
                        model.paint_surface.tracker().len(),
                        model.touches_seen.get()
                    ),
                    FontId::monospace(12.),
                    Color32::GRAY,
                );
            }
        });
}
