//! Planner and vehicle configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::geometry::OrientedBox;
use crate::error::{PlanError, Result};

/// Search parameters for the hybrid A* planner.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PlannerConfig {
    /// Total motion primitives per expansion.
    ///
    /// Must be even and at least 4: the first half drives forward, the
    /// second half reverses, with steering sampled linearly over
    /// [-max_steer, +max_steer] within each half.
    pub next_node_num: usize,

    /// Bicycle-model integration substep in meters.
    pub step_size: f64,

    /// XY grid resolution in meters.
    ///
    /// Controls state deduplication and sets the primitive arc length to
    /// √2 × resolution, long enough to leave the parent's grid cell.
    pub xy_grid_resolution: f64,

    /// Heading grid resolution in radians.
    pub phi_grid_resolution: f64,

    /// Arc-length multiplier for reverse driving (≥ 1).
    pub back_penalty: f64,

    /// Flat penalty per forward/reverse switch.
    pub gear_switch_penalty: f64,

    /// Penalty linear in the steering magnitude.
    pub steer_penalty: f64,

    /// Penalty linear in the steering change between consecutive primitives.
    pub steer_change_penalty: f64,

    /// Sampling interval used to derive velocity and acceleration, seconds.
    pub delta_t: f64,

    /// Cap on successor nodes admitted to the open set.
    ///
    /// Bounds the runtime of a single invocation on adversarial inputs.
    pub max_explored_num: usize,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            next_node_num: 10,
            step_size: 0.1,
            xy_grid_resolution: 0.3,
            phi_grid_resolution: 0.1,
            back_penalty: 1.2,
            gear_switch_penalty: 2.0,
            steer_penalty: 0.5,
            steer_change_penalty: 1.0,
            delta_t: 0.5,
            max_explored_num: 100_000,
        }
    }
}

impl PlannerConfig {
    /// Check parameter consistency.
    pub fn validate(&self) -> Result<()> {
        if self.next_node_num < 4 || self.next_node_num % 2 != 0 {
            return Err(PlanError::Config(format!(
                "next_node_num must be even and >= 4, got {}",
                self.next_node_num
            )));
        }
        if self.step_size <= 0.0 {
            return Err(PlanError::Config(format!(
                "step_size must be positive, got {}",
                self.step_size
            )));
        }
        if self.xy_grid_resolution <= 0.0 || self.phi_grid_resolution <= 0.0 {
            return Err(PlanError::Config(format!(
                "grid resolutions must be positive, got xy={} phi={}",
                self.xy_grid_resolution, self.phi_grid_resolution
            )));
        }
        if self.step_size > std::f64::consts::SQRT_2 * self.xy_grid_resolution {
            return Err(PlanError::Config(format!(
                "step_size {} exceeds the primitive arc length {}",
                self.step_size,
                std::f64::consts::SQRT_2 * self.xy_grid_resolution
            )));
        }
        if self.back_penalty < 1.0 {
            return Err(PlanError::Config(format!(
                "back_penalty must be >= 1, got {}",
                self.back_penalty
            )));
        }
        if self.gear_switch_penalty < 0.0
            || self.steer_penalty < 0.0
            || self.steer_change_penalty < 0.0
        {
            return Err(PlanError::Config("penalties must be non-negative".into()));
        }
        if self.delta_t <= 0.0 {
            return Err(PlanError::Config(format!(
                "delta_t must be positive, got {}",
                self.delta_t
            )));
        }
        if self.max_explored_num == 0 {
            return Err(PlanError::Config("max_explored_num must be positive".into()));
        }
        Ok(())
    }
}

/// Physical vehicle parameters.
///
/// The pose reference point is the rear-axle center; the four `*_to_center`
/// distances describe the footprint around it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct VehicleConfig {
    /// Wheel base in meters.
    pub wheel_base: f64,

    /// Maximum steering-wheel angle in radians.
    pub max_steer_angle: f64,

    /// Steering-wheel to road-wheel ratio.
    pub steer_ratio: f64,

    /// Distance from the reference point to the front edge, meters.
    pub front_to_center: f64,

    /// Distance from the reference point to the rear edge, meters.
    pub back_to_center: f64,

    /// Distance from the reference point to the left edge, meters.
    pub left_to_center: f64,

    /// Distance from the reference point to the right edge, meters.
    pub right_to_center: f64,
}

impl Default for VehicleConfig {
    fn default() -> Self {
        // Mid-size sedan.
        Self {
            wheel_base: 2.84,
            max_steer_angle: 8.20,
            steer_ratio: 16.0,
            front_to_center: 3.89,
            back_to_center: 1.04,
            left_to_center: 1.05,
            right_to_center: 1.05,
        }
    }
}

impl VehicleConfig {
    /// Maximum road-wheel steering angle in radians.
    #[inline]
    pub fn max_steer(&self) -> f64 {
        self.max_steer_angle / self.steer_ratio
    }

    /// Maximum path curvature in 1/meters.
    #[inline]
    pub fn max_kappa(&self) -> f64 {
        self.max_steer().tan() / self.wheel_base
    }

    /// Footprint length, meters.
    #[inline]
    pub fn length(&self) -> f64 {
        self.front_to_center + self.back_to_center
    }

    /// Footprint width, meters.
    #[inline]
    pub fn width(&self) -> f64 {
        self.left_to_center + self.right_to_center
    }

    /// Vehicle footprint for a given pose of the reference point.
    ///
    /// The box center sits ahead of the reference point by half the
    /// difference of the front and rear overhangs.
    pub fn footprint(&self, x: f64, y: f64, phi: f64) -> OrientedBox {
        let shift = (self.front_to_center - self.back_to_center) * 0.5;
        let (sin_phi, cos_phi) = phi.sin_cos();
        OrientedBox::new(
            x + shift * cos_phi,
            y + shift * sin_phi,
            phi,
            self.length(),
            self.width(),
        )
    }

    /// Check parameter consistency.
    pub fn validate(&self) -> Result<()> {
        if self.wheel_base <= 0.0 {
            return Err(PlanError::Config(format!(
                "wheel_base must be positive, got {}",
                self.wheel_base
            )));
        }
        if self.max_steer_angle <= 0.0 || self.steer_ratio <= 0.0 {
            return Err(PlanError::Config(format!(
                "steering limits must be positive, got angle={} ratio={}",
                self.max_steer_angle, self.steer_ratio
            )));
        }
        if self.max_steer() >= std::f64::consts::FRAC_PI_2 {
            return Err(PlanError::Config(format!(
                "road-wheel steering limit {} must stay below π/2",
                self.max_steer()
            )));
        }
        if self.front_to_center < 0.0
            || self.back_to_center < 0.0
            || self.left_to_center < 0.0
            || self.right_to_center < 0.0
        {
            return Err(PlanError::Config("footprint extents must be non-negative".into()));
        }
        if self.length() <= 0.0 || self.width() <= 0.0 {
            return Err(PlanError::Config("footprint must have positive area".into()));
        }
        Ok(())
    }
}

/// Top-level configuration file contents.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SarathiConfig {
    pub vehicle: VehicleConfig,
    pub planner: PlannerConfig,
}

impl SarathiConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| PlanError::Config(format!("failed to read config file: {}", e)))?;
        let config: SarathiConfig = toml::from_str(&content)?;
        config.planner.validate()?;
        config.vehicle.validate()?;
        Ok(config)
    }
}
