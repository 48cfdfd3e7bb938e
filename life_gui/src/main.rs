// main.rs - Game of Life desktop app

use eframe::egui;
use egui::Color32;
use life_engine::GameOfLife;
use std::time::{Duration, Instant};

mod patterns;
mod ui;

const GRID_WIDTH: usize = 100;
const GRID_HEIGHT: usize = 100;

// Dark palette: near-black blue window, dimmed cell slots, pink live cells
const BACKGROUND: Color32 = Color32::from_rgb(0, 12, 21);
const DEAD_CELL: Color32 = Color32::from_rgb(20, 38, 50);
const LIVE_CELL: Color32 = Color32::from_rgb(229, 145, 162);
const CONTROL_TEXT: Color32 = Color32::from_rgb(150, 150, 150);

fn main() -> Result<(), eframe::Error> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([720.0, 860.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Game of Life",
        options,
        Box::new(|cc| {
            let mut visuals = egui::Visuals::dark();
            visuals.panel_fill = BACKGROUND;
            visuals.override_text_color = Some(CONTROL_TEXT);
            visuals.selection.bg_fill = LIVE_CELL;
            cc.egui_ctx.set_visuals(visuals);
            Box::new(LifeApp::default())
        }),
    )
}

pub struct LifeApp {
    game: GameOfLife,
    is_running: bool,
    last_update: Instant,
    update_interval: Duration,
    selected_pattern: usize,
}

impl Default for LifeApp {
    fn default() -> Self {
        Self {
            game: new_game(),
            // The simulation starts running as soon as the window opens
            is_running: true,
            last_update: Instant::now(),
            update_interval: Duration::from_millis(200),
            selected_pattern: 0,
        }
    }
}

/// Builds a randomly seeded engine at the default dimensions. Passing
/// seed 0 asks the engine to draw a fresh one, so every launch differs.
fn new_game() -> GameOfLife {
    GameOfLife::new(GRID_WIDTH, GRID_HEIGHT, 0).expect("default grid dimensions are valid")
}
