//! SVG visualization for maneuver audit.
//!
//! Renders the planning region, obstacle boxes, and a planned trajectory to
//! SVG format. The SVG serves as an audit file showing:
//! - The planning bounds
//! - Every obstacle's oriented bounding box
//! - The trajectory with periodic heading ticks
//! - Start and goal markers

use std::fmt::Write;
use std::path::Path;

use crate::core::geometry::Bounds;
use crate::obstacles::{Obstacle, ObstacleSet};
use crate::planning::hybrid_a_star::Trajectory;

/// SVG color scheme for visualization
#[derive(Clone, Debug)]
pub struct SvgColorScheme {
    /// Free space background color
    pub background: &'static str,
    /// Obstacle box color
    pub obstacle: &'static str,
    /// Trajectory color
    pub trajectory: &'static str,
    /// Heading tick color
    pub heading_tick: &'static str,
    /// Start marker color
    pub start_marker: &'static str,
    /// Goal marker color
    pub goal_marker: &'static str,
}

impl Default for SvgColorScheme {
    fn default() -> Self {
        Self {
            background: "#FFFFFF",
            obstacle: "#333333",
            trajectory: "#2222AA",
            heading_tick: "#88AADD",
            start_marker: "#22AA22",
            goal_marker: "#AA2222",
        }
    }
}

/// Configuration for SVG rendering
#[derive(Clone, Debug)]
pub struct SvgConfig {
    /// Pixels per meter
    pub scale: f64,
    /// Trajectory line width in pixels
    pub trajectory_width: f64,
    /// Start/goal marker radius in pixels
    pub marker_radius: f64,
    /// Heading tick length in meters
    pub heading_tick_length: f64,
    /// Draw a heading tick every N samples
    pub heading_tick_stride: usize,
    /// Padding around the bounds in pixels
    pub padding: f64,
    /// Color scheme
    pub colors: SvgColorScheme,
}

impl Default for SvgConfig {
    fn default() -> Self {
        Self {
            scale: 40.0,
            trajectory_width: 2.0,
            marker_radius: 4.0,
            heading_tick_length: 0.4,
            heading_tick_stride: 10,
            padding: 20.0,
            colors: SvgColorScheme::default(),
        }
    }
}

/// SVG visualization builder
pub struct SvgVisualizer {
    config: SvgConfig,
    bounds: Bounds,
    obstacles: Vec<Obstacle>,
    trajectory: Option<Trajectory>,
    title: Option<String>,
}

impl SvgVisualizer {
    /// Create a new SVG visualizer for a planning region.
    pub fn new(bounds: Bounds, config: SvgConfig) -> Self {
        Self {
            config,
            bounds,
            obstacles: Vec::new(),
            trajectory: None,
            title: None,
        }
    }

    /// Set a title to display
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Add a snapshot of an obstacle collection
    pub fn with_obstacles(mut self, obstacles: &ObstacleSet) -> Self {
        self.obstacles.extend(obstacles.items());
        self
    }

    /// Add the planned trajectory
    pub fn with_trajectory(mut self, trajectory: &Trajectory) -> Self {
        self.trajectory = Some(trajectory.clone());
        self
    }

    /// Render to an SVG string
    pub fn render(&self) -> String {
        let width = self.bounds.width() * self.config.scale + 2.0 * self.config.padding;
        let height = self.bounds.height() * self.config.scale + 2.0 * self.config.padding;

        let mut svg = String::new();
        writeln!(&mut svg, r#"<?xml version="1.0" encoding="UTF-8"?>"#).unwrap();
        writeln!(
            &mut svg,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{:.0}" height="{:.0}" viewBox="0 0 {:.0} {:.0}">"#,
            width, height, width, height
        )
        .unwrap();

        writeln!(
            &mut svg,
            r#"  <rect width="100%" height="100%" fill="{}"/>"#,
            self.config.colors.background
        )
        .unwrap();

        self.render_obstacles(&mut svg);
        if let Some(trajectory) = &self.trajectory {
            self.render_trajectory(&mut svg, trajectory);
        }

        if let Some(title) = &self.title {
            writeln!(
                &mut svg,
                r#"  <text x="{:.0}" y="{:.0}" font-family="monospace" font-size="14">{}</text>"#,
                self.config.padding,
                self.config.padding * 0.75,
                title
            )
            .unwrap();
        }

        writeln!(&mut svg, "</svg>").unwrap();
        svg
    }

    /// Render to a file
    pub fn save(&self, path: &Path) -> std::io::Result<()> {
        std::fs::write(path, self.render())
    }

    fn render_obstacles(&self, svg: &mut String) {
        writeln!(svg, r#"  <g id="obstacles">"#).unwrap();
        for obstacle in &self.obstacles {
            let corners = obstacle.perception_bounding_box().corners();
            let mut points = String::new();
            for (x, y) in corners {
                let (px, py) = self.to_px(x, y);
                write!(&mut points, "{:.1},{:.1} ", px, py).unwrap();
            }
            writeln!(
                svg,
                r#"    <polygon points="{}" fill="{}" fill-opacity="0.8"/>"#,
                points.trim_end(),
                self.config.colors.obstacle
            )
            .unwrap();
        }
        writeln!(svg, "  </g>").unwrap();
    }

    fn render_trajectory(&self, svg: &mut String, trajectory: &Trajectory) {
        if trajectory.is_empty() {
            return;
        }
        writeln!(svg, r#"  <g id="trajectory">"#).unwrap();

        let mut path_d = String::new();
        for i in 0..trajectory.len() {
            let (px, py) = self.to_px(trajectory.x[i], trajectory.y[i]);
            if i == 0 {
                write!(&mut path_d, "M {:.1} {:.1}", px, py).unwrap();
            } else {
                write!(&mut path_d, " L {:.1} {:.1}", px, py).unwrap();
            }
        }
        writeln!(
            svg,
            r#"    <path d="{}" fill="none" stroke="{}" stroke-width="{:.1}"/>"#,
            path_d, self.config.colors.trajectory, self.config.trajectory_width
        )
        .unwrap();

        for i in (0..trajectory.len()).step_by(self.config.heading_tick_stride.max(1)) {
            let (px, py) = self.to_px(trajectory.x[i], trajectory.y[i]);
            let tip_x = trajectory.x[i] + self.config.heading_tick_length * trajectory.phi[i].cos();
            let tip_y = trajectory.y[i] + self.config.heading_tick_length * trajectory.phi[i].sin();
            let (tx, ty) = self.to_px(tip_x, tip_y);
            writeln!(
                svg,
                r#"    <line x1="{:.1}" y1="{:.1}" x2="{:.1}" y2="{:.1}" stroke="{}" stroke-width="1"/>"#,
                px, py, tx, ty, self.config.colors.heading_tick
            )
            .unwrap();
        }

        let (sx, sy) = self.to_px(trajectory.x[0], trajectory.y[0]);
        let last = trajectory.len() - 1;
        let (gx, gy) = self.to_px(trajectory.x[last], trajectory.y[last]);
        writeln!(
            svg,
            r#"    <circle cx="{:.1}" cy="{:.1}" r="{:.1}" fill="{}"/>"#,
            sx, sy, self.config.marker_radius, self.config.colors.start_marker
        )
        .unwrap();
        writeln!(
            svg,
            r#"    <circle cx="{:.1}" cy="{:.1}" r="{:.1}" fill="{}"/>"#,
            gx, gy, self.config.marker_radius, self.config.colors.goal_marker
        )
        .unwrap();

        writeln!(svg, "  </g>").unwrap();
    }

    /// World coordinates to pixel coordinates (y axis flipped).
    fn to_px(&self, x: f64, y: f64) -> (f64, f64) {
        (
            (x - self.bounds.min_x) * self.config.scale + self.config.padding,
            (self.bounds.max_y - y) * self.config.scale + self.config.padding,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::geometry::OrientedBox;

    fn bounds() -> Bounds {
        Bounds::new(-5.0, 5.0, -5.0, 5.0)
    }

    #[test]
    fn test_render_empty_scene() {
        let svg = SvgVisualizer::new(bounds(), SvgConfig::default()).render();
        assert!(svg.starts_with("<?xml"));
        assert!(svg.contains("<svg"));
        assert!(svg.trim_end().ends_with("</svg>"));
    }

    #[test]
    fn test_render_obstacles_and_title() {
        let obstacles = ObstacleSet::new();
        obstacles.insert(Obstacle::new(
            1,
            OrientedBox::from_extents(0.0, 1.0, 0.0, 1.0),
        ));

        let svg = SvgVisualizer::new(bounds(), SvgConfig::default())
            .with_obstacles(&obstacles)
            .with_title("parking audit")
            .render();

        assert!(svg.contains("<polygon"));
        assert!(svg.contains("parking audit"));
    }

    #[test]
    fn test_render_trajectory_markers() {
        let trajectory = Trajectory {
            x: vec![0.0, 1.0, 2.0],
            y: vec![0.0, 0.0, 0.0],
            phi: vec![0.0, 0.0, 0.0],
            v: vec![0.2, 0.2, 0.0],
            a: vec![0.0, -0.4],
            steer: vec![0.0, 0.0],
        };
        let svg = SvgVisualizer::new(bounds(), SvgConfig::default())
            .with_trajectory(&trajectory)
            .render();

        assert!(svg.contains("<path"));
        assert_eq!(svg.matches("<circle").count(), 2);
    }

    #[test]
    fn test_world_to_pixel_flips_y() {
        let viz = SvgVisualizer::new(bounds(), SvgConfig::default());
        let (_, py_low) = viz.to_px(0.0, -5.0);
        let (_, py_high) = viz.to_px(0.0, 5.0);
        assert!(py_high < py_low);
    }
}
