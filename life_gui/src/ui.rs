// ui.rs - egui frontend: control panel, grid painting, click editing

use eframe::egui;
use egui::{Rect, Vec2};
use std::time::{Duration, Instant};

use crate::patterns;
use crate::{LifeApp, new_game, BACKGROUND, DEAD_CELL, LIVE_CELL};

impl eframe::App for LifeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Step the engine once the configured delay has elapsed
        if self.is_running && self.last_update.elapsed() >= self.update_interval {
            self.game.advance();
            self.last_update = Instant::now();
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Game of Life");

            ui.horizontal(|ui| {
                let button_text = if self.is_running { "⏸ Pause" } else { "▶ Play" };
                if ui.button(button_text).clicked() {
                    self.is_running = !self.is_running;
                    if self.is_running {
                        self.last_update = Instant::now();
                    }
                }

                if ui.button("⏹ Clear").clicked() {
                    self.is_running = false;
                    self.game.clear();
                }

                if ui.button("🎲 Random").clicked() {
                    self.is_running = false;
                    self.game = new_game();
                }

                ui.separator();

                ui.label("Pattern:");
                egui::ComboBox::from_id_source("pattern_selector")
                    .selected_text(patterns::PATTERNS[self.selected_pattern].name)
                    .show_ui(ui, |ui| {
                        for (i, pattern) in patterns::PATTERNS.iter().enumerate() {
                            ui.selectable_value(&mut self.selected_pattern, i, pattern.name);
                        }
                    });

                if ui.button("Apply").clicked() {
                    self.is_running = false;
                    if let Some(pattern) = patterns::PATTERNS.get(self.selected_pattern) {
                        patterns::apply_pattern(&mut self.game, pattern);
                    }
                }

                ui.separator();

                ui.label(format!("Iterations: {}", self.game.generation()));
            });

            ui.separator();

            ui.horizontal(|ui| {
                ui.label("Delay:");
                let mut delay_ms = self.update_interval.as_millis() as u64;
                if ui
                    .add(egui::Slider::new(&mut delay_ms, 5..=500).suffix(" ms"))
                    .changed()
                {
                    self.update_interval = Duration::from_millis(delay_ms);
                }
            });

            ui.separator();

            ui.label("Click cells to toggle them alive/dead. Editing pauses the simulation.");

            ui.separator();

            // Draw the grid; cells touch, no guideline strokes
            let box_size = 6.5;
            let width = self.game.width();
            let height = self.game.height();

            let start_pos = ui.cursor().min;
            let total_size = Vec2::new(box_size * width as f32, box_size * height as f32);

            let (response, painter) = ui.allocate_painter(total_size, egui::Sense::click());

            painter.rect_filled(Rect::from_min_size(start_pos, total_size), 0.0, BACKGROUND);

            for y in 0..height {
                for x in 0..width {
                    let rect = Rect::from_min_size(
                        egui::pos2(
                            start_pos.x + x as f32 * box_size,
                            start_pos.y + y as f32 * box_size,
                        ),
                        Vec2::splat(box_size),
                    );

                    let cell_color = if self.game.get_cell(x, y).unwrap_or(false) {
                        LIVE_CELL
                    } else {
                        DEAD_CELL
                    };

                    painter.rect_filled(rect, 0.0, cell_color);
                }
            }

            // Clicking pauses the run, then flips the cell under the pointer
            if response.clicked() {
                if let Some(pos) = response.interact_pointer_pos() {
                    let x = ((pos.x - start_pos.x) / box_size) as usize;
                    let y = ((pos.y - start_pos.y) / box_size) as usize;
                    self.is_running = false;
                    let _ = self.game.toggle_cell(x, y);
                }
            }

            ui.separator();

            let live_cells = self.game.population();
            let total_cells = width * height;

            ui.horizontal(|ui| {
                ui.label(format!("Live cells: {}", live_cells));
                ui.label(format!("Dead cells: {}", total_cells - live_cells));
                ui.label(format!(
                    "Population: {:.1}%",
                    (live_cells as f32 / total_cells as f32) * 100.0
                ));
                ui.label(format!("Seed: {}", self.game.seed()));
            });
        });

        // Keep repainting while the simulation runs
        if self.is_running {
            ctx.request_repaint();
        }
    }
}
