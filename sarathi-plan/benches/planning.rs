//! Planning benchmarks.
//!
//! Benchmarks the two performance regimes of the planner:
//! - Analytic fast path: the first pop closes with a Reeds-Shepp curve
//! - Maneuvering search: obstacles force primitive expansion
//!
//! Run with: `cargo bench`
//! View HTML reports in: `target/criterion/`

use criterion::{Criterion, black_box, criterion_group, criterion_main};

use sarathi_plan::{
    Bounds, HybridAStar, Obstacle, ObstacleSet, OrientedBox, PlannerConfig, Pose2D, VehicleConfig,
};

fn bench_vehicle() -> VehicleConfig {
    VehicleConfig {
        wheel_base: 1.0,
        max_steer_angle: 6.0,
        steer_ratio: 10.0,
        front_to_center: 0.8,
        back_to_center: 0.2,
        left_to_center: 0.4,
        right_to_center: 0.4,
    }
}

fn bench_analytic_shortcut(c: &mut Criterion) {
    let mut planner = HybridAStar::new(PlannerConfig::default(), bench_vehicle()).unwrap();
    let obstacles = ObstacleSet::new();
    let bounds = Bounds::new(-5.0, 15.0, -5.0, 5.0);

    c.bench_function("analytic_shortcut_straight", |b| {
        b.iter(|| {
            planner
                .plan(
                    black_box(Pose2D::new(0.0, 0.0, 0.0)),
                    black_box(Pose2D::new(10.0, 0.0, 0.0)),
                    bounds,
                    &obstacles,
                )
                .unwrap()
        })
    });
}

fn bench_reversing_maneuver(c: &mut Criterion) {
    let mut planner = HybridAStar::new(PlannerConfig::default(), bench_vehicle()).unwrap();
    let obstacles = ObstacleSet::new();
    obstacles.insert(Obstacle::new(
        1,
        OrientedBox::from_extents(1.0, 2.0, -3.0, 3.0),
    ));
    let bounds = Bounds::new(-6.0, 6.0, -6.0, 2.0);

    c.bench_function("reversing_maneuver", |b| {
        b.iter(|| {
            planner
                .plan(
                    black_box(Pose2D::new(0.0, 0.0, 0.0)),
                    black_box(Pose2D::new(0.0, -2.5, 0.0)),
                    bounds,
                    &obstacles,
                )
                .unwrap()
        })
    });
}

criterion_group!(benches, bench_analytic_shortcut, bench_reversing_maneuver);
criterion_main!(benches);
