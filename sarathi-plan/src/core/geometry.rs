//! Collision geometry: planning bounds and oriented rectangles.
//!
//! [`Bounds`] is the axis-aligned planning region handed to the planner;
//! states whose position leaves it are pruned from the search.
//! [`OrientedBox`] represents both vehicle footprints and obstacle boxes;
//! overlap between two of them is decided with the separating-axis test.

use serde::{Deserialize, Serialize};

/// Axis-aligned planning region.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    /// Minimum x in meters.
    pub min_x: f64,
    /// Maximum x in meters.
    pub max_x: f64,
    /// Minimum y in meters.
    pub min_y: f64,
    /// Maximum y in meters.
    pub max_y: f64,
}

impl Bounds {
    /// Create a new planning region from its extents.
    #[inline]
    pub fn new(min_x: f64, max_x: f64, min_y: f64, max_y: f64) -> Self {
        Self {
            min_x,
            max_x,
            min_y,
            max_y,
        }
    }

    /// Check whether a point lies inside the region (borders included).
    #[inline]
    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.min_x && x <= self.max_x && y >= self.min_y && y <= self.max_y
    }

    /// X extent in meters.
    #[inline]
    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    /// Y extent in meters.
    #[inline]
    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }
}

/// Oriented rectangle in the plane.
///
/// Described by its center, heading of the long axis, and full extents.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OrientedBox {
    /// Center x in meters.
    pub center_x: f64,
    /// Center y in meters.
    pub center_y: f64,
    /// Heading of the length axis in radians.
    pub heading: f64,
    /// Full extent along the heading axis, meters.
    pub length: f64,
    /// Full extent across the heading axis, meters.
    pub width: f64,
}

impl OrientedBox {
    /// Create an oriented rectangle.
    #[inline]
    pub fn new(center_x: f64, center_y: f64, heading: f64, length: f64, width: f64) -> Self {
        Self {
            center_x,
            center_y,
            heading,
            length,
            width,
        }
    }

    /// Create an axis-aligned rectangle from its extents.
    #[inline]
    pub fn from_extents(min_x: f64, max_x: f64, min_y: f64, max_y: f64) -> Self {
        Self {
            center_x: (min_x + max_x) * 0.5,
            center_y: (min_y + max_y) * 0.5,
            heading: 0.0,
            length: max_x - min_x,
            width: max_y - min_y,
        }
    }

    /// The four corners, counter-clockwise starting front-left.
    pub fn corners(&self) -> [(f64, f64); 4] {
        let (sin_h, cos_h) = self.heading.sin_cos();
        let hl = self.length * 0.5;
        let hw = self.width * 0.5;
        let ax = (cos_h * hl, sin_h * hl);
        let ay = (-sin_h * hw, cos_h * hw);
        [
            (self.center_x + ax.0 + ay.0, self.center_y + ax.1 + ay.1),
            (self.center_x - ax.0 + ay.0, self.center_y - ax.1 + ay.1),
            (self.center_x - ax.0 - ay.0, self.center_y - ax.1 - ay.1),
            (self.center_x + ax.0 - ay.0, self.center_y + ax.1 - ay.1),
        ]
    }

    /// Check whether a point lies inside the rectangle (borders included).
    pub fn contains_point(&self, x: f64, y: f64) -> bool {
        let (sin_h, cos_h) = self.heading.sin_cos();
        let dx = x - self.center_x;
        let dy = y - self.center_y;
        let along = dx * cos_h + dy * sin_h;
        let across = -dx * sin_h + dy * cos_h;
        along.abs() <= self.length * 0.5 && across.abs() <= self.width * 0.5
    }

    /// Separating-axis overlap test against another oriented rectangle.
    ///
    /// Touching edges count as overlap.
    pub fn has_overlap(&self, other: &OrientedBox) -> bool {
        let ours = self.corners();
        let theirs = other.corners();

        let (sin_a, cos_a) = self.heading.sin_cos();
        let (sin_b, cos_b) = other.heading.sin_cos();
        let axes = [
            (cos_a, sin_a),
            (-sin_a, cos_a),
            (cos_b, sin_b),
            (-sin_b, cos_b),
        ];

        for (ax, ay) in axes {
            let (a_min, a_max) = project(&ours, ax, ay);
            let (b_min, b_max) = project(&theirs, ax, ay);
            if a_max < b_min || b_max < a_min {
                return false;
            }
        }
        true
    }
}

/// Project corners onto a unit axis, returning the covered interval.
fn project(corners: &[(f64, f64); 4], ax: f64, ay: f64) -> (f64, f64) {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for &(x, y) in corners {
        let d = x * ax + y * ay;
        min = min.min(d);
        max = max.max(d);
    }
    (min, max)
}
