// app.rs - eframe front end: controls, per-frame redraw and pointer painting

use std::time::Duration;

use conway::patterns::PATTERNS;
use conway::render::{self, Color, Renderer};
use conway::{Command, Config, SimulationHandle};
use eframe::egui;
use egui::{Pos2, Rect, Vec2};

use crate::painter::EguiRenderer;

/// Viewer state. The simulation itself lives in the tick loop; the app only
/// sends commands and paints whatever snapshot was published last.
pub struct CanvasApp {
    handle: SimulationHandle,
    config: Config,
    selected_pattern: usize,
    speed: f32,                         // generations per second
    inverted: bool,
    show_overlay: bool,
    // Worker thread the tick loop runs on
    _runtime: tokio::runtime::Runtime,
}

impl CanvasApp {
    pub fn new(handle: SimulationHandle, config: Config, runtime: tokio::runtime::Runtime) -> Self {
        let speed = 1.0 / config.tick_interval.as_secs_f32();
        Self {
            handle,
            config,
            selected_pattern: 0,
            speed,
            inverted: false,
            show_overlay: true,
            _runtime: runtime,
        }
    }

    fn send(&self, command: Command) {
        if !self.handle.send(command) {
            log::error!("tick loop is gone, command dropped");
        }
    }

    fn controls(&mut self, ui: &mut egui::Ui, running: bool) {
        ui.horizontal(|ui| {
            let button_text = if running { "⏸ Pause" } else { "▶ Start" };
            if ui.button(button_text).clicked() {
                self.send(Command::SetRunning(!running));
            }

            if ui.button("⏭ Next generation").clicked() {
                self.send(Command::Step);
            }

            if ui.button("🎲 Restart").clicked() {
                self.send(Command::Restart);
            }

            if ui.button("⏹ Clear").clicked() {
                self.send(Command::Clear);
            }

            ui.separator();

            ui.label("Pattern:");
            egui::ComboBox::from_id_source("pattern_selector")
                .selected_text(PATTERNS[self.selected_pattern].name)
                .show_ui(ui, |ui| {
                    for (i, pattern) in PATTERNS.iter().enumerate() {
                        ui.selectable_value(&mut self.selected_pattern, i, pattern.name);
                    }
                });

            if ui.button("Generate").clicked() {
                let name = PATTERNS[self.selected_pattern].name;
                self.send(Command::LoadPattern(name.to_string()));
            }
        });

        ui.horizontal(|ui| {
            ui.label("Speed:");
            if ui.add(egui::Slider::new(&mut self.speed, 0.5..=60.0).suffix(" gen/sec")).changed() {
                self.send(Command::SetInterval(Duration::from_secs_f32(1.0 / self.speed)));
            }

            ui.separator();
            ui.checkbox(&mut self.inverted, "Invert colours");
            ui.checkbox(&mut self.show_overlay, "Counters");
        });
    }
}

/// Grid cell under `pos`, if the pointer is over the board.
pub fn cell_at(pos: Pos2, board: Rect, scale: f32, size: usize) -> Option<(usize, usize)> {
    let local = pos - board.min;
    if local.x < 0.0 || local.y < 0.0 {
        return None;
    }
    let x = (local.x / scale).floor() as usize;
    let y = (local.y / scale).floor() as usize;
    (x < size && y < size).then_some((x, y))
}

impl eframe::App for CanvasApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let snapshot = self.handle.snapshot();

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Conway's Game of Life");
            self.controls(ui, snapshot.running);
            ui.label("Drag on the board to paint cells; hold Shift to erase.");
            ui.separator();

            let side = self.config.canvas_size();
            let (response, painter) = ui.allocate_painter(Vec2::splat(side), egui::Sense::click_and_drag());
            let board = response.rect;

            let (ink, background) = if self.inverted {
                (Color::White, Color::Black)
            } else {
                (Color::Black, Color::White)
            };
            let mut renderer = EguiRenderer::new(&painter, board);
            renderer.set_background(background);
            renderer.set_color(ink);
            render::draw_grid(&mut renderer, &snapshot.grid, self.config.scale);
            render::draw_border(&mut renderer, side);
            if self.show_overlay {
                render::draw_overlay(&mut renderer, &snapshot);
            }

            // Paint while the primary button is held; Shift paints dead cells
            if response.is_pointer_button_down_on() {
                if let Some(pos) = response.interact_pointer_pos() {
                    let alive = !ctx.input(|i| i.modifiers.shift);
                    if let Some((x, y)) = cell_at(pos, board, self.config.scale, snapshot.grid.size()) {
                        if snapshot.grid.is_alive(x, y) != alive {
                            self.send(Command::Paint { x, y, alive });
                        }
                    }
                }
            }
        });

        // Redraw every frame, independent of the tick rate
        ctx.request_repaint();
    }
}

impl Drop for CanvasApp {
    fn drop(&mut self) {
        self.handle.send(Command::Shutdown);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board() -> Rect {
        Rect::from_min_size(Pos2::new(10.0, 50.0), Vec2::splat(800.0))
    }

    #[test]
    fn pointer_maps_to_scaled_cell() {
        assert_eq!(cell_at(Pos2::new(10.0, 50.0), board(), 4.0, 200), Some((0, 0)));
        assert_eq!(cell_at(Pos2::new(13.9, 53.9), board(), 4.0, 200), Some((0, 0)));
        assert_eq!(cell_at(Pos2::new(14.0, 62.5), board(), 4.0, 200), Some((1, 3)));
        assert_eq!(cell_at(Pos2::new(809.0, 849.0), board(), 4.0, 200), Some((199, 199)));
    }

    #[test]
    fn pointer_off_the_board_maps_to_nothing() {
        assert_eq!(cell_at(Pos2::new(9.0, 60.0), board(), 4.0, 200), None);
        assert_eq!(cell_at(Pos2::new(20.0, 49.0), board(), 4.0, 200), None);
        assert_eq!(cell_at(Pos2::new(810.0, 60.0), board(), 4.0, 200), None);
    }
}
