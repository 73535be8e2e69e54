// ui.rs - Controls, board painting and click forwarding

use std::time::Duration;

use eframe::egui;
use egui::{Color32, Pos2, Rect, Stroke, Vec2};

use conway::{Engine, Tag};

use crate::GameOfLife;

const BOARD_PIXELS: f32 = 780.0;
const SPACING: f32 = 0.5;
const MAX_BOX_SIZE: f32 = 15.0;
const MIN_BOX_SIZE: f32 = 2.0;

/// Edge length of one painted cell for a board of `side` cells.
fn box_size(side: usize) -> f32 {
    (BOARD_PIXELS / side.max(1) as f32 - SPACING).clamp(MIN_BOX_SIZE, MAX_BOX_SIZE)
}

/// Maps a pointer position to the (row, col) of the painted cell under it.
/// Gaps between cells and anything outside the board hit nothing.
fn cell_at(pos: Pos2, origin: Pos2, box_size: f32, side: usize) -> Option<(usize, usize)> {
    let pitch = box_size + SPACING;
    let offset = pos - origin;
    if offset.x < 0.0 || offset.y < 0.0 {
        return None;
    }
    let (col, row) = ((offset.x / pitch) as usize, (offset.y / pitch) as usize);
    let inside_box = offset.x % pitch < box_size && offset.y % pitch < box_size;
    (row < side && col < side && inside_box).then_some((row, col))
}

impl eframe::App for GameOfLife {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Fire whatever ticks came due since the last frame
        self.sim.poll();

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Conway's Game of Life");

            // Controls
            ui.horizontal(|ui| {
                let button_text = if self.sim.is_running() { "⏸ Stop" } else { "▶ Start" };
                if ui.button(button_text).clicked() {
                    self.toggle_running();
                }

                if ui.button("⏭ Step").clicked() {
                    self.sim.step();
                }

                if ui.button("⏹ Clear").clicked() {
                    self.clear_grid();
                }

                if ui.button("🎲 Random").clicked() {
                    self.apply_random_pattern();
                }

                ui.separator();

                ui.label(format!("Generation: {}", self.sim.generation()));
                ui.label(format!("Engine: {}", self.sim.engine().name()));
            });

            ui.separator();

            // Speed control
            ui.horizontal(|ui| {
                ui.label("Speed:");
                let mut speed = 1.0 / self.sim.interval().as_secs_f32();
                if ui.add(egui::Slider::new(&mut speed, 0.5..=90.0).suffix(" gen/sec")).changed() {
                    self.sim.set_interval(Duration::from_secs_f32(1.0 / speed));
                }

                ui.separator();

                ui.label("Live:");
                ui.color_edit_button_srgba(&mut self.live_color);
                ui.label("Dead:");
                ui.color_edit_button_srgba(&mut self.dead_color);
            });

            ui.separator();

            ui.label("Click cells to toggle them alive/dead, running or not. Start/Stop drives the simulation.");

            ui.separator();

            let side = self.sim.view().side();
            let cell_size = box_size(side);
            let total_size = Vec2::splat(((cell_size + SPACING) * side as f32 - SPACING).max(0.0));

            let (response, painter) = ui.allocate_painter(total_size, egui::Sense::click());
            let origin = response.rect.min;

            painter.rect_filled(Rect::from_min_size(origin, total_size), 0.0, Color32::BLACK);

            for row in self.sim.view().rows() {
                for cell in &row.cells {
                    let min = origin
                        + Vec2::new(cell.col as f32, cell.row as f32) * (cell_size + SPACING);
                    let rect = Rect::from_min_size(min, Vec2::splat(cell_size));

                    let color = match cell.tag {
                        Tag::Live => self.live_color,
                        Tag::Dead => self.dead_color,
                    };
                    painter.rect_filled(rect, 1.0, color);
                    painter.rect_stroke(rect, 1.0, Stroke::new(0.2, Color32::from_gray(60)));
                }
            }

            if response.clicked() {
                if let Some((row, col)) = response
                    .interact_pointer_pos()
                    .and_then(|pos| cell_at(pos, origin, cell_size, side))
                {
                    self.sim.view_mut().click(row, col);
                }
            }

            ui.separator();

            // Statistics
            let live_cells = self.sim.view().count(Tag::Live);
            let total = (side * side).max(1);
            ui.horizontal(|ui| {
                ui.label(format!("Live cells: {}", live_cells));
                ui.label(format!("Dead cells: {}", self.sim.view().count(Tag::Dead)));
                ui.label(format!("Population: {:.1}%", live_cells as f32 / total as f32 * 100.0));
            });
        });

        // Sleep until the next tick is due instead of spinning
        if let Some(wait) = self.sim.until_next_tick() {
            ctx.request_repaint_after(wait);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn box_size_shrinks_with_side() {
        assert_eq!(box_size(10), MAX_BOX_SIZE);
        assert!(box_size(100) < MAX_BOX_SIZE);
        assert_eq!(box_size(10_000), MIN_BOX_SIZE);
    }

    #[test]
    fn pointer_maps_to_cells() {
        let origin = Pos2::new(10.0, 20.0);
        let size = 15.0;
        assert_eq!(cell_at(Pos2::new(11.0, 21.0), origin, size, 4), Some((0, 0)));
        assert_eq!(cell_at(Pos2::new(10.0 + 15.5 * 2.0 + 1.0, 21.0), origin, size, 4), Some((0, 2)));
        assert_eq!(cell_at(Pos2::new(11.0, 20.0 + 15.5 * 3.0 + 1.0), origin, size, 4), Some((3, 0)));
    }

    #[test]
    fn misses_outside_and_between_cells() {
        let origin = Pos2::new(0.0, 0.0);
        assert_eq!(cell_at(Pos2::new(-1.0, 5.0), origin, 15.0, 4), None);
        assert_eq!(cell_at(Pos2::new(5.0, 15.5 * 4.0 + 1.0), origin, 15.0, 4), None);
        assert_eq!(cell_at(Pos2::new(15.2, 5.0), origin, 15.0, 4), None);
    }
}
