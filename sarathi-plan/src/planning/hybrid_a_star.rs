//! Hybrid A* search over the (x, y, φ) grid with analytic Reeds-Shepp closure.
//!
//! One [`HybridAStar::plan`] call runs a best-first search whose vertices
//! are grid-deduplicated continuous states and whose edges are short
//! bicycle-model motion primitives. At every pop the planner first tries to
//! finish the job analytically: the shortest Reeds-Shepp curve from the
//! popped state to the goal, already cached as that state's heuristic, is
//! swept sample-by-sample against the obstacles and, when clean, becomes
//! the tail of the result. The reconstructed pose sequence is annotated
//! with a velocity/acceleration/steering profile.
//!
//! The planner is single-shot and not reentrant: all search state is
//! cleared at the top of `plan` and the instance must not be shared across
//! concurrent invocations.

use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap};
use std::f64::consts::SQRT_2;

use log::{debug, info, warn};

use crate::config::{PlannerConfig, VehicleConfig};
use crate::core::geometry::Bounds;
use crate::core::math::normalize_angle;
use crate::core::types::Pose2D;
use crate::error::{PlanError, Result};
use crate::obstacles::{Obstacle, ObstacleSet};
use crate::planning::node::Node3d;
use crate::planning::reeds_shepp::{ReedsShepp, ReedsSheppPath, Segment};

/// Planned maneuver: pose samples plus the derived motion profile.
///
/// State arrays `x`, `y`, `phi`, `v` share one length N; the control arrays
/// `a` and `steer` hold N−1 per-step entries. `v` is the signed
/// along-heading velocity (negative while reversing) and ends at zero.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Trajectory {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    pub phi: Vec<f64>,
    pub v: Vec<f64>,
    pub a: Vec<f64>,
    pub steer: Vec<f64>,
}

impl Trajectory {
    /// Number of state samples.
    #[inline]
    pub fn len(&self) -> usize {
        self.x.len()
    }

    /// Whether the trajectory holds no samples.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }
}

/// Entry in the open priority queue.
struct QueueEntry {
    index: i64,
    cost: f64,
}

impl Eq for QueueEntry {}

impl PartialEq for QueueEntry {
    fn eq(&self, other: &Self) -> bool {
        self.index == other.index
    }
}

impl Ord for QueueEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering for min-heap (lower cost = higher priority).
        other
            .cost
            .partial_cmp(&self.cost)
            .unwrap_or(Ordering::Equal)
    }
}

impl PartialOrd for QueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Hybrid A* maneuver planner.
pub struct HybridAStar {
    config: PlannerConfig,
    vehicle: VehicleConfig,
    max_steer: f64,
    rs: ReedsShepp,

    // Per-invocation search state, cleared at the top of plan().
    nodes: Vec<Node3d>,
    open_set: HashMap<i64, usize>,
    close_set: HashMap<i64, usize>,
    open_pq: BinaryHeap<QueueEntry>,
    rs_cache: HashMap<i64, ReedsSheppPath>,
    final_node: Option<usize>,
    bounds: Bounds,
    obstacles: Vec<Obstacle>,
    goal: Pose2D,
}

impl HybridAStar {
    /// Create a planner for a vehicle. Fails on inconsistent configuration.
    pub fn new(config: PlannerConfig, vehicle: VehicleConfig) -> Result<Self> {
        config.validate()?;
        vehicle.validate()?;
        let rs = ReedsShepp::new(&vehicle, config.step_size);
        let max_steer = vehicle.max_steer();
        Ok(Self {
            config,
            vehicle,
            max_steer,
            rs,
            nodes: Vec::new(),
            open_set: HashMap::new(),
            close_set: HashMap::new(),
            open_pq: BinaryHeap::new(),
            rs_cache: HashMap::new(),
            final_node: None,
            bounds: Bounds::new(0.0, 0.0, 0.0, 0.0),
            obstacles: Vec::new(),
            goal: Pose2D::identity(),
        })
    }

    /// Plan a collision-free maneuver from `start` to `goal`.
    ///
    /// Obstacle membership is snapshotted once; concurrent inserts into
    /// `obstacles` do not affect a running invocation.
    pub fn plan(
        &mut self,
        start: Pose2D,
        goal: Pose2D,
        bounds: Bounds,
        obstacles: &ObstacleSet,
    ) -> Result<Trajectory> {
        self.reset(bounds, obstacles.items(), goal);

        if !self.bounds.contains(start.x, start.y) {
            return Err(PlanError::StartOutOfBounds);
        }
        if !self.bounds.contains(goal.x, goal.y) {
            return Err(PlanError::GoalOutOfBounds);
        }
        if !self.pose_valid(start.x, start.y, start.phi) {
            return Err(PlanError::StartInCollision);
        }
        if !self.pose_valid(goal.x, goal.y, goal.phi) {
            return Err(PlanError::GoalInCollision);
        }

        let start_node = Node3d::from_pose(
            start.x,
            start.y,
            start.phi,
            &self.bounds,
            self.config.xy_grid_resolution,
            self.config.phi_grid_resolution,
        );
        let start_key = start_node.index();
        let start_cost = start_node.cost();
        self.nodes.push(start_node);
        self.open_set.insert(start_key, 0);
        self.open_pq.push(QueueEntry {
            index: start_key,
            cost: start_cost,
        });

        let Some(rs_to_goal) = self.rs.shortest_rsp(&start, &goal) else {
            return Err(PlanError::NoAnalyticPath);
        };
        self.rs_cache.insert(start_key, rs_to_goal);

        let mut explored = 0usize;
        while let Some(entry) = self.open_pq.pop() {
            let Some(&current_idx) = self.open_set.get(&entry.index) else {
                continue;
            };

            if self.analytic_expansion(entry.index, current_idx) {
                break;
            }

            self.open_set.remove(&entry.index);
            self.close_set.insert(entry.index, current_idx);

            for k in 0..self.config.next_node_num {
                let mut next = self.next_node_generator(current_idx, k);
                if !self.validity_check(&next) {
                    continue;
                }
                if self.close_set.contains_key(&next.index()) {
                    continue;
                }
                if self.open_set.contains_key(&next.index()) {
                    // TODO: rewire the open node onto this parent when the
                    // new arrival improves its accumulated cost.
                    continue;
                }

                explored += 1;
                if explored > self.config.max_explored_num {
                    warn!(
                        "node budget of {} exhausted, giving up",
                        self.config.max_explored_num
                    );
                    return Err(PlanError::BudgetExhausted(self.config.max_explored_num));
                }

                let next_pose = Pose2D::new(next.x(), next.y(), next.phi());
                let Some(rs_path) = self.rs.shortest_rsp(&next_pose, &self.goal) else {
                    debug!(
                        "no analytic curve from ({:.2}, {:.2}, {:.2}), skipping successor",
                        next.x(),
                        next.y(),
                        next.phi()
                    );
                    continue;
                };
                self.calculate_node_cost(current_idx, &mut next, &rs_path);

                let key = next.index();
                let cost = next.cost();
                let next_idx = self.nodes.len();
                self.rs_cache.insert(key, rs_path);
                self.nodes.push(next);
                self.open_set.insert(key, next_idx);
                self.open_pq.push(QueueEntry { index: key, cost });
            }
        }

        let final_idx = self.final_node.ok_or(PlanError::SearchExhausted)?;
        info!("hybrid A* explored {} nodes", explored);
        self.get_result(final_idx)
    }

    /// Try to close the search from a popped node with its cached
    /// Reeds-Shepp curve. On success the curve becomes the final node.
    fn analytic_expansion(&mut self, key: i64, current_idx: usize) -> bool {
        let Some(rs_path) = self.rs_cache.get(&key) else {
            return false;
        };
        if !self.rsp_check(rs_path) {
            return false;
        }

        let rs_path = rs_path.clone();
        info!("reached the goal configuration with an analytic expansion");
        let terminal_idx = self.load_rsp_terminal(&rs_path, current_idx);
        self.final_node = Some(terminal_idx);
        true
    }

    /// Sweep every sample of a Reeds-Shepp curve through the validity check.
    fn rsp_check(&self, rs_path: &ReedsSheppPath) -> bool {
        rs_path
            .x
            .iter()
            .zip(rs_path.y.iter())
            .zip(rs_path.phi.iter())
            .all(|((&x, &y), &phi)| self.pose_valid(x, y, phi))
    }

    /// Build the final node holding the whole Reeds-Shepp sample sequence.
    fn load_rsp_terminal(&mut self, rs_path: &ReedsSheppPath, current_idx: usize) -> usize {
        let n = rs_path.x.len();
        let mut node = Node3d::new(
            rs_path.x[n - 1],
            rs_path.y[n - 1],
            rs_path.phi[n - 1],
            rs_path.x.clone(),
            rs_path.y.clone(),
            rs_path.phi.clone(),
            &self.bounds,
            self.config.xy_grid_resolution,
            self.config.phi_grid_resolution,
        );
        node.set_parent(Some(current_idx));
        node.set_traj_cost(self.nodes[current_idx].traj_cost() + self.rsp_cost(rs_path));

        let key = node.index();
        let idx = self.nodes.len();
        self.nodes.push(node);
        self.close_set.insert(key, idx);
        idx
    }

    /// Terminal pose within bounds and footprint clear of every obstacle.
    fn validity_check(&self, node: &Node3d) -> bool {
        self.pose_valid(node.x(), node.y(), node.phi())
    }

    fn pose_valid(&self, x: f64, y: f64, phi: f64) -> bool {
        if !self.bounds.contains(x, y) {
            return false;
        }
        if self.obstacles.is_empty() {
            return true;
        }
        let footprint = self.vehicle.footprint(x, y, phi);
        self.obstacles
            .iter()
            .all(|o| !footprint.has_overlap(&o.perception_bounding_box()))
    }

    /// Integrate the k-th motion primitive from a node.
    ///
    /// The first half of the primitive indices drives forward, the second
    /// half reverses; steering is sampled linearly over the full range
    /// within each half. The arc is sized to carry the terminal pose out of
    /// the parent's grid cell.
    fn next_node_generator(&self, current_idx: usize, k: usize) -> Node3d {
        let current = &self.nodes[current_idx];
        let half = self.config.next_node_num / 2;
        let steer_step = 2.0 * self.max_steer / (half - 1) as f64;
        let (steer, traveled) = if k < half {
            (-self.max_steer + steer_step * k as f64, self.config.step_size)
        } else {
            (
                -self.max_steer + steer_step * (k - half) as f64,
                -self.config.step_size,
            )
        };

        let arc = SQRT_2 * self.config.xy_grid_resolution;
        let substeps = (arc / self.config.step_size) as usize;

        let mut xs = Vec::with_capacity(substeps + 1);
        let mut ys = Vec::with_capacity(substeps + 1);
        let mut phis = Vec::with_capacity(substeps + 1);
        let (mut x, mut y, mut phi) = (current.x(), current.y(), current.phi());
        xs.push(x);
        ys.push(y);
        phis.push(phi);

        let phi_rate = traveled / self.vehicle.wheel_base * steer.tan();
        for _ in 0..substeps {
            x += traveled * phi.cos();
            y += traveled * phi.sin();
            phi = normalize_angle(phi + phi_rate);
            xs.push(x);
            ys.push(y);
            phis.push(phi);
        }

        let mut node = Node3d::new(
            x,
            y,
            phi,
            xs,
            ys,
            phis,
            &self.bounds,
            self.config.xy_grid_resolution,
            self.config.phi_grid_resolution,
        );
        node.set_parent(Some(current_idx));
        node.set_direction(traveled > 0.0);
        node.set_steer(steer);
        node
    }

    /// Accumulated cost of reaching `next` through `current`, plus the
    /// Reeds-Shepp heuristic to the goal.
    fn calculate_node_cost(&self, current_idx: usize, next: &mut Node3d, rs_path: &ReedsSheppPath) {
        let current = &self.nodes[current_idx];

        let mut piecewise = if next.direction() {
            self.config.xy_grid_resolution
        } else {
            self.config.xy_grid_resolution * self.config.back_penalty
        };
        if current.direction() != next.direction() {
            piecewise += self.config.gear_switch_penalty;
        }
        piecewise += self.config.steer_penalty * next.steer().abs();
        piecewise += self.config.steer_change_penalty * (next.steer() - current.steer()).abs();

        next.set_traj_cost(current.traj_cost() + piecewise);
        next.set_heu_cost(self.rsp_cost(rs_path));
    }

    /// Cost of a Reeds-Shepp curve under the planner's penalty model.
    fn rsp_cost(&self, rs_path: &ReedsSheppPath) -> f64 {
        let mut cost = 0.0;
        for &len in &rs_path.segs_lengths {
            cost += if len >= 0.0 {
                len
            } else {
                -len * self.config.back_penalty
            };
        }

        for pair in rs_path.segs_lengths.windows(2) {
            if pair[0] * pair[1] < 0.0 {
                cost += self.config.gear_switch_penalty;
            }
        }

        let mut last_turn: Option<Segment> = None;
        for &seg in &rs_path.segs_types {
            if seg.is_turn() {
                cost += self.config.steer_penalty * self.max_steer;
                if let Some(prev) = last_turn {
                    if seg != prev {
                        cost += 2.0 * self.config.steer_change_penalty * self.max_steer;
                    }
                }
                last_turn = Some(seg);
            }
        }
        cost
    }

    /// Walk the parent chain from the final node and assemble the result.
    fn get_result(&self, final_idx: usize) -> Result<Trajectory> {
        let mut xs = Vec::new();
        let mut ys = Vec::new();
        let mut phis = Vec::new();

        let mut cursor = final_idx;
        while let Some(parent) = self.nodes[cursor].parent() {
            let node = &self.nodes[cursor];
            if node.xs().is_empty() {
                return Err(PlanError::Reconstruction(
                    "interior node carries no samples".into(),
                ));
            }

            // Samples run parent→node; emit them node→parent and drop the
            // parent's own pose, which the next link contributes.
            let take = node.xs().len() - 1;
            xs.extend(node.xs().iter().rev().take(take));
            ys.extend(node.ys().iter().rev().take(take));
            phis.extend(node.phis().iter().rev().take(take));
            cursor = parent;
        }
        let start = &self.nodes[cursor];
        xs.push(start.x());
        ys.push(start.y());
        phis.push(start.phi());

        xs.reverse();
        ys.reverse();
        phis.reverse();

        let (v, a, steer) = self.generate_speed_acceleration(&xs, &ys, &phis);

        if xs.len() != ys.len() || xs.len() != phis.len() || xs.len() != v.len() {
            return Err(PlanError::Reconstruction("state array sizes diverge".into()));
        }
        if a.len() != steer.len() || xs.len() - a.len() != 1 {
            return Err(PlanError::Reconstruction(
                "control array sizes diverge".into(),
            ));
        }

        Ok(Trajectory {
            x: xs,
            y: ys,
            phi: phis,
            v,
            a,
            steer,
        })
    }

    /// Derive the motion profile from the pose sequence.
    ///
    /// Velocity is the along-heading displacement per `delta_t`, signed;
    /// the last sample stops. Steering in reverse gear flips sign, matching
    /// front-axle-referenced kinematics driven from the rear wheels.
    fn generate_speed_acceleration(
        &self,
        x: &[f64],
        y: &[f64],
        phi: &[f64],
    ) -> (Vec<f64>, Vec<f64>, Vec<f64>) {
        let n = x.len();
        let dt = self.config.delta_t;

        let mut v = Vec::with_capacity(n);
        for i in 0..n - 1 {
            let (sin_phi, cos_phi) = phi[i].sin_cos();
            v.push((x[i + 1] - x[i]) / dt * cos_phi + (y[i + 1] - y[i]) / dt * sin_phi);
        }
        v.push(0.0);

        let mut a = Vec::with_capacity(n - 1);
        for i in 0..n - 1 {
            a.push((v[i + 1] - v[i]) / dt);
        }

        let mut steer = Vec::with_capacity(n - 1);
        for i in 0..n - 1 {
            let raw = (phi[i + 1] - phi[i]) * self.vehicle.wheel_base / self.config.step_size;
            steer.push(if v[i] > 0.0 { raw.atan() } else { (-raw).atan() });
        }

        (v, a, steer)
    }

    fn reset(&mut self, bounds: Bounds, obstacles: Vec<Obstacle>, goal: Pose2D) {
        self.nodes.clear();
        self.open_set.clear();
        self.close_set.clear();
        self.open_pq.clear();
        self.rs_cache.clear();
        self.final_node = None;
        self.bounds = bounds;
        self.obstacles = obstacles;
        self.goal = goal;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn test_vehicle() -> VehicleConfig {
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

    fn test_config() -> PlannerConfig {
        PlannerConfig {
            next_node_num: 10,
            step_size: 0.1,
            xy_grid_resolution: 0.3,
            phi_grid_resolution: 0.15,
            back_penalty: 1.5,
            gear_switch_penalty: 2.0,
            steer_penalty: 0.5,
            steer_change_penalty: 1.0,
            delta_t: 0.5,
            max_explored_num: 100_000,
        }
    }

    /// Planner with a seeded arena holding one start node at the origin.
    fn seeded_planner() -> HybridAStar {
        let mut planner = HybridAStar::new(test_config(), test_vehicle()).unwrap();
        planner.bounds = Bounds::new(-20.0, 20.0, -20.0, 20.0);
        let start = Node3d::from_pose(
            0.0,
            0.0,
            0.0,
            &planner.bounds,
            planner.config.xy_grid_resolution,
            planner.config.phi_grid_resolution,
        );
        planner.nodes.push(start);
        planner
    }

    #[test]
    fn test_queue_pops_lowest_cost() {
        let mut pq = BinaryHeap::new();
        pq.push(QueueEntry {
            index: 1,
            cost: 5.0,
        });
        pq.push(QueueEntry {
            index: 2,
            cost: 1.0,
        });
        pq.push(QueueEntry {
            index: 3,
            cost: 3.0,
        });
        assert_eq!(pq.pop().map(|e| e.index), Some(2));
        assert_eq!(pq.pop().map(|e| e.index), Some(3));
        assert_eq!(pq.pop().map(|e| e.index), Some(1));
    }

    #[test]
    fn test_primitive_fan_layout() {
        let planner = seeded_planner();
        let max_steer = planner.max_steer;

        // First half drives forward from full right to full left lock.
        let first = planner.next_node_generator(0, 0);
        assert!(first.direction());
        assert_relative_eq!(first.steer(), -max_steer, epsilon = 1e-12);

        let mid = planner.next_node_generator(0, 2);
        assert!(mid.direction());
        assert_relative_eq!(mid.steer(), 0.0, epsilon = 1e-12);

        let last_fwd = planner.next_node_generator(0, 4);
        assert_relative_eq!(last_fwd.steer(), max_steer, epsilon = 1e-12);

        // Second half mirrors the fan in reverse.
        let first_rev = planner.next_node_generator(0, 5);
        assert!(!first_rev.direction());
        assert_relative_eq!(first_rev.steer(), -max_steer, epsilon = 1e-12);
    }

    #[test]
    fn test_primitive_starts_at_parent() {
        let planner = seeded_planner();
        let node = planner.next_node_generator(0, 2);
        assert_relative_eq!(node.xs()[0], 0.0);
        assert_relative_eq!(node.ys()[0], 0.0);
        assert_relative_eq!(node.phis()[0], 0.0);

        // √2 × 0.3 arc at 0.1 substeps = 4 integration steps + parent pose.
        assert_eq!(node.xs().len(), 5);
    }

    #[test]
    fn test_primitive_is_kinematically_consistent() {
        let planner = seeded_planner();
        for k in 0..planner.config.next_node_num {
            let node = planner.next_node_generator(0, k);
            let d = if node.direction() {
                planner.config.step_size
            } else {
                -planner.config.step_size
            };
            for i in 0..node.xs().len() - 1 {
                let expected_x = node.xs()[i] + d * node.phis()[i].cos();
                let expected_y = node.ys()[i] + d * node.phis()[i].sin();
                let expected_phi = normalize_angle(
                    node.phis()[i] + d / planner.vehicle.wheel_base * node.steer().tan(),
                );
                assert_relative_eq!(node.xs()[i + 1], expected_x, epsilon = 1e-12);
                assert_relative_eq!(node.ys()[i + 1], expected_y, epsilon = 1e-12);
                assert_relative_eq!(node.phis()[i + 1], expected_phi, epsilon = 1e-12);
            }
        }
    }

    #[test]
    fn test_piecewise_cost_terms() {
        let planner = seeded_planner();
        let config = &planner.config;

        let rs_path = ReedsSheppPath::default();
        let mut forward = planner.next_node_generator(0, 2);
        planner.calculate_node_cost(0, &mut forward, &rs_path);
        // Straight forward from a forward parent with zero steer: base only.
        assert_relative_eq!(forward.traj_cost(), config.xy_grid_resolution);

        let mut reverse = planner.next_node_generator(0, 5);
        planner.calculate_node_cost(0, &mut reverse, &rs_path);
        // Reverse base, gear switch off the forward start, full right lock.
        let expected = config.xy_grid_resolution * config.back_penalty
            + config.gear_switch_penalty
            + config.steer_penalty * planner.max_steer
            + config.steer_change_penalty * planner.max_steer;
        assert_relative_eq!(reverse.traj_cost(), expected, epsilon = 1e-12);
    }

    #[test]
    fn test_rsp_cost_length_terms() {
        let planner = seeded_planner();
        let config = &planner.config;

        let path = ReedsSheppPath {
            segs_lengths: vec![2.0, -1.0],
            segs_types: vec![Segment::Straight, Segment::Straight],
            ..Default::default()
        };
        // Forward at unit cost, reverse weighted, one sign change.
        let expected = 2.0 + 1.0 * config.back_penalty + config.gear_switch_penalty;
        assert_relative_eq!(planner.rsp_cost(&path), expected, epsilon = 1e-12);
    }

    #[test]
    fn test_rsp_cost_steering_terms() {
        let planner = seeded_planner();
        let config = &planner.config;
        let max_steer = planner.max_steer;

        let path = ReedsSheppPath {
            segs_lengths: vec![1.0, 1.0, 1.0],
            segs_types: vec![Segment::Left, Segment::Right, Segment::Left],
            ..Default::default()
        };
        // Three arcs, two turning-direction changes, no gear switch.
        let expected = 3.0 * config.steer_penalty * max_steer
            + 2.0 * 2.0 * config.steer_change_penalty * max_steer;
        assert_relative_eq!(planner.rsp_cost(&path), expected, epsilon = 1e-12);
    }

    #[test]
    fn test_rsp_cost_straight_between_turns() {
        let planner = seeded_planner();
        let config = &planner.config;
        let max_steer = planner.max_steer;

        // L S L: the straight does not reset the turning walk.
        let path = ReedsSheppPath {
            segs_lengths: vec![1.0, 1.0, 1.0],
            segs_types: vec![Segment::Left, Segment::Straight, Segment::Left],
            ..Default::default()
        };
        let expected = 2.0 * config.steer_penalty * max_steer;
        assert_relative_eq!(planner.rsp_cost(&path), expected, epsilon = 1e-12);
    }

    #[test]
    fn test_speed_profile_straight_line() {
        let planner = seeded_planner();
        let x = vec![0.0, 0.1, 0.2, 0.3];
        let y = vec![0.0; 4];
        let phi = vec![0.0; 4];
        let (v, a, steer) = planner.generate_speed_acceleration(&x, &y, &phi);

        assert_eq!(v.len(), 4);
        assert_eq!(a.len(), 3);
        assert_eq!(steer.len(), 3);

        let dt = planner.config.delta_t;
        assert_relative_eq!(v[0], 0.1 / dt);
        assert_relative_eq!(v[1], 0.1 / dt);
        assert_relative_eq!(v[3], 0.0);
        // Final stop decelerates over the last step.
        assert_relative_eq!(a[2], -0.1 / dt / dt);
        for &s in &steer {
            assert_relative_eq!(s, 0.0);
        }
    }

    #[test]
    fn test_speed_profile_reverse_flips_sign() {
        let planner = seeded_planner();
        let x = vec![0.0, -0.1, -0.2];
        let y = vec![0.0; 3];
        let phi = vec![0.0, 0.05, 0.1];
        let (v, _, steer) = planner.generate_speed_acceleration(&x, &y, &phi);

        assert!(v[0] < 0.0);
        // Reverse gear flips the derived steering sign.
        let raw = 0.05 * planner.vehicle.wheel_base / planner.config.step_size;
        assert_relative_eq!(steer[0], (-raw).atan(), epsilon = 1e-12);
    }

    #[test]
    fn test_speed_profile_single_sample() {
        let planner = seeded_planner();
        let (v, a, steer) = planner.generate_speed_acceleration(&[1.0], &[2.0], &[0.0]);
        assert_eq!(v, vec![0.0]);
        assert!(a.is_empty());
        assert!(steer.is_empty());
    }
}
