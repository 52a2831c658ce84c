//! Parking maneuver demo.
//!
//! Plans a maneuver into a parking slot between two parked cars and writes
//! an SVG audit file next to the working directory.
//!
//! Run with: `cargo run --example parking_demo`

use std::path::Path;

use sarathi_plan::{
    Bounds, HybridAStar, Obstacle, ObstacleSet, OrientedBox, PlannerConfig, Pose2D, SvgConfig,
    SvgVisualizer, VehicleConfig,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Compact vehicle, easier to animate in a small scene.
    let vehicle = VehicleConfig {
        wheel_base: 1.0,
        max_steer_angle: 6.0,
        steer_ratio: 10.0,
        front_to_center: 0.8,
        back_to_center: 0.2,
        left_to_center: 0.4,
        right_to_center: 0.4,
    };
    let config = PlannerConfig::default();

    // Two parked cars leave a slot below the driving lane.
    let obstacles = ObstacleSet::new();
    obstacles.insert(Obstacle::new(
        1,
        OrientedBox::from_extents(-5.0, -2.0, -2.6, -1.2),
    ));
    obstacles.insert(Obstacle::new(
        2,
        OrientedBox::from_extents(2.0, 5.0, -2.6, -1.2),
    ));

    let start = Pose2D::new(-4.0, 0.5, 0.0);
    let goal = Pose2D::new(0.0, -1.9, 0.0);
    let bounds = Bounds::new(-8.0, 8.0, -4.0, 3.0);

    let mut planner = HybridAStar::new(config, vehicle)?;
    let trajectory = planner.plan(start, goal, bounds, &obstacles)?;

    println!(
        "planned {} samples, {:.2} m driven, {} gear phases",
        trajectory.len(),
        driven_length(&trajectory.x, &trajectory.y),
        gear_phases(&trajectory.v),
    );

    let audit = SvgVisualizer::new(bounds, SvgConfig::default())
        .with_title("parking maneuver")
        .with_obstacles(&obstacles)
        .with_trajectory(&trajectory);
    let out = Path::new("parking_demo.svg");
    audit.save(out)?;
    println!("audit written to {}", out.display());

    Ok(())
}

fn driven_length(x: &[f64], y: &[f64]) -> f64 {
    x.windows(2)
        .zip(y.windows(2))
        .map(|(xs, ys)| ((xs[1] - xs[0]).powi(2) + (ys[1] - ys[0]).powi(2)).sqrt())
        .sum()
}

fn gear_phases(v: &[f64]) -> usize {
    let mut phases = 0;
    let mut last_sign = 0i8;
    for &v in v {
        let sign = if v > 1e-9 {
            1
        } else if v < -1e-9 {
            -1
        } else {
            0
        };
        if sign != 0 && sign != last_sign {
            phases += 1;
            last_sign = sign;
        }
    }
    phases
}
