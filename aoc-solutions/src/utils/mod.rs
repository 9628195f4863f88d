//! Helpers shared by the puzzle solutions

pub mod text;
