//! Search engine: node grid, Reeds-Shepp curves, and the hybrid A* driver.

pub mod hybrid_a_star;
pub mod node;
pub mod reeds_shepp;

pub use hybrid_a_star::{HybridAStar, Trajectory};
pub use node::Node3d;
pub use reeds_shepp::{ReedsShepp, ReedsSheppPath, Segment};
