//! # life_engine
//!
//! The simulation core for the Game of Life demo: a fixed-size toroidal
//! boolean grid evolved under the standard B3/S23 rule. The engine is
//! synchronous and self-contained; it knows nothing about windows, timers
//! or widgets. The GUI crate drives it from a wall-clock interval and
//! reflects its state on screen.

pub mod engine;
pub mod error;

pub use engine::GameOfLife;
pub use error::LifeError;
