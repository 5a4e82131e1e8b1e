// painter.rs - egui implementation of the drawing surface

use conway::render::{Color, POINT_SIZE, Renderer};
use egui::{Align2, Color32, FontId, Painter, Pos2, Rect, Stroke, Vec2};

const FONT_SIZE: f32 = 14.0;

pub fn color32(color: Color) -> Color32 {
    match color {
        Color::Black => Color32::BLACK,
        Color::White => Color32::WHITE,
    }
}

/// Draws onto a square region of an egui painter.
///
/// Surface coordinates are relative to the top-left corner of `rect`.
pub struct EguiRenderer<'a> {
    painter: &'a Painter,
    rect: Rect,
    ink: Color32,
    background: Color32,
}

impl<'a> EguiRenderer<'a> {
    pub fn new(painter: &'a Painter, rect: Rect) -> Self {
        Self {
            painter,
            rect,
            ink: Color32::BLACK,
            background: Color32::WHITE,
        }
    }

    /// Colour `clear` fills the surface with.
    pub fn set_background(&mut self, color: Color) {
        self.background = color32(color);
    }

    fn at(&self, x: f32, y: f32) -> Pos2 {
        self.rect.min + Vec2::new(x, y)
    }
}

impl Renderer for EguiRenderer<'_> {
    fn clear(&mut self) {
        self.painter.rect_filled(self.rect, 0.0, self.background);
    }

    fn draw_point(&mut self, x: f32, y: f32) {
        let rect = Rect::from_min_size(self.at(x, y), Vec2::splat(POINT_SIZE));
        self.painter.rect_filled(rect, 0.0, self.ink);
    }

    fn draw_line(&mut self, x: f32, y: f32, dx: f32, dy: f32) {
        let from = self.at(x, y);
        let to = from + Vec2::new(dx, dy);
        self.painter.line_segment([from, to], Stroke::new(1.0, self.ink));
    }

    fn draw_text(&mut self, x: f32, y: f32, text: &str) {
        // y is the baseline, as with a canvas fillText
        self.painter.text(
            self.at(x, y),
            Align2::LEFT_BOTTOM,
            text,
            FontId::proportional(FONT_SIZE),
            self.ink,
        );
    }

    fn set_color(&mut self, color: Color) {
        self.ink = color32(color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn colour_set_maps_to_opaque_extremes() {
        assert_eq!(color32(Color::Black), Color32::from_rgb(0, 0, 0));
        assert_eq!(color32(Color::White), Color32::from_rgb(255, 255, 255));
    }
}
