// src/core/mod.rs

//! Core data structures and types

pub mod error;
pub mod grid;
pub mod state;

pub use error::{FaqaError, Result};
pub use grid::Grid;
pub use state::{Normalization, WaveState};

pub mod constants;
pub use constants::faqa_constants::{PI, TAU};
