//! SarathiPlan - Hybrid A* maneuver planning for car-like vehicles
//!
//! Computes collision-free, kinematically feasible open-space maneuvers
//! (parking, U-turns, tight multi-point turns) between two poses inside a
//! bounded region populated by oriented rectangular obstacles.
//!
//! # Architecture
//!
//! The crate is organized into 4 logical layers:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │                      io/                            │  ← Audit output (SVG)
//! └─────────────────────────────────────────────────────┘
//!                          │
//! ┌─────────────────────────────────────────────────────┐
//! │                   planning/                         │  ← Search engine
//! │      (node grid, Reeds-Shepp curves, hybrid A*)     │
//! └─────────────────────────────────────────────────────┘
//!                          │
//! ┌─────────────────────────────────────────────────────┐
//! │              obstacles / config / error             │  ← Environment & setup
//! └─────────────────────────────────────────────────────┘
//!                          │
//! ┌─────────────────────────────────────────────────────┐
//! │                     core/                           │  ← Foundation
//! │              (math, poses, geometry)                │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Planning pipeline
//!
//! One [`HybridAStar::plan`] invocation runs a forward search over a
//! discretized `(x, y, φ)` grid. Each expansion integrates bicycle-model
//! motion primitives for a fan of steering angles, forward and reverse. At
//! every pop the planner tries to close the search analytically with the
//! shortest Reeds-Shepp curve to the goal; the same curve doubles as the
//! admissible heuristic. The reconstructed pose sequence is finished with a
//! velocity/acceleration/steering profile suitable as a warm start for
//! downstream trajectory optimization.
//!
//! # Example
//!
//! ```
//! use sarathi_plan::{Bounds, HybridAStar, ObstacleSet, PlannerConfig, Pose2D, VehicleConfig};
//!
//! let mut planner =
//!     HybridAStar::new(PlannerConfig::default(), VehicleConfig::default()).unwrap();
//! let obstacles = ObstacleSet::new();
//! let trajectory = planner
//!     .plan(
//!         Pose2D::new(0.0, 0.0, 0.0),
//!         Pose2D::new(10.0, 0.0, 0.0),
//!         Bounds::new(-5.0, 15.0, -5.0, 5.0),
//!         &obstacles,
//!     )
//!     .unwrap();
//! assert!(trajectory.len() > 1);
//! ```

// ============================================================================
// Layer 1: Core foundation (no internal deps)
// ============================================================================
pub mod core;

// ============================================================================
// Layer 2: Environment and setup (depends on core)
// ============================================================================
pub mod config;
pub mod error;
pub mod obstacles;

// ============================================================================
// Layer 3: Search engine (depends on core, environment)
// ============================================================================
pub mod planning;

// ============================================================================
// Layer 4: Audit output (depends on all layers)
// ============================================================================
pub mod io;

// ============================================================================
// Convenience re-exports (flat namespace for common use)
// ============================================================================

pub use core::geometry::{Bounds, OrientedBox};
pub use core::math;
pub use core::types::Pose2D;

pub use config::{PlannerConfig, SarathiConfig, VehicleConfig};
pub use error::{PlanError, Result};
pub use obstacles::{Obstacle, ObstacleSet};

pub use planning::hybrid_a_star::{HybridAStar, Trajectory};
pub use planning::node::Node3d;
pub use planning::reeds_shepp::{ReedsShepp, ReedsSheppPath, Segment};

pub use io::svg::{SvgColorScheme, SvgConfig, SvgVisualizer};
