//! Random worlds for exercising `paradox_core`.

pub mod generator;
pub mod shuffle;
