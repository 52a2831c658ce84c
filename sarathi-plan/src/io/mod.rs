//! Audit output for planned maneuvers.

pub mod svg;

pub use svg::{SvgColorScheme, SvgConfig, SvgVisualizer};
