//! WireWorld engine.
//!
//! This crate holds the sparse grid and its synchronous step, plus the text
//! loader and renderer, the simulation runner and the preset gate circuits.

pub mod circuits;
pub mod grid;
pub mod loader;
pub mod render;
pub mod simulation;

pub use circuits::Preset;
pub use grid::Grid;
pub use render::render;
pub use simulation::{RunSummary, Simulation, StopReason};
