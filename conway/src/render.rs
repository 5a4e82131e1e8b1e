// render.rs - Drawing surface boundary and the per-frame paint routine

use crate::grid::Grid;
use crate::simulation::Snapshot;

/// Side of the square painted for one live cell, in surface units.
pub const POINT_SIZE: f32 = 4.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Color {
    Black,
    White,
}

/// Output-only drawing surface. Holds no simulation state.
pub trait Renderer {
    /// Erases the whole surface.
    fn clear(&mut self);
    /// Fills a `POINT_SIZE` square with its top-left corner at `(x, y)`.
    fn draw_point(&mut self, x: f32, y: f32);
    /// Segment from `(x, y)` to `(x + dx, y + dy)`.
    fn draw_line(&mut self, x: f32, y: f32, dx: f32, dy: f32);
    fn draw_text(&mut self, x: f32, y: f32, text: &str);
    fn set_color(&mut self, color: Color);
}

/// Clears the surface and marks every live cell, scaled to surface units.
pub fn draw_grid<R: Renderer + ?Sized>(renderer: &mut R, grid: &Grid, scale: f32) {
    renderer.clear();
    for (x, y) in grid.live_cells() {
        renderer.draw_point(x as f32 * scale, y as f32 * scale);
    }
}

/// Outline of the `side`-unit board.
pub fn draw_border<R: Renderer + ?Sized>(renderer: &mut R, side: f32) {
    renderer.draw_line(0.0, 0.0, side, 0.0);
    renderer.draw_line(side, 0.0, 0.0, side);
    renderer.draw_line(side, side, -side, 0.0);
    renderer.draw_line(0.0, side, 0.0, -side);
}

/// Generation and population counters in the top-left corner.
pub fn draw_overlay<R: Renderer + ?Sized>(renderer: &mut R, snapshot: &Snapshot) {
    renderer.draw_text(8.0, 18.0, &format!("Generation: {}", snapshot.generation));
    renderer.draw_text(8.0, 36.0, &format!("Population: {}", snapshot.population));
}
