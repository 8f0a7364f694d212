//! Core types and utilities for the WireWorld cellular automaton.

pub mod cell;
pub mod config;
pub mod error;
pub mod types;

pub use cell::CellState;
pub use config::*;
pub use error::{Error, Result};
pub use types::*;
