//! Shortest Reeds-Shepp curves between two poses.
//!
//! A Reeds-Shepp path is the shortest curve a car with bounded curvature
//! can drive between two poses when both forward and reverse motion are
//! allowed: a concatenation of minimum-radius arcs and straight segments.
//! The planner consumes these curves twice per node, as the admissible
//! heuristic to the goal and as the analytic shortcut that closes the
//! search.
//!
//! Candidate paths are enumerated per the classic word families (CSC, CCC,
//! CCCC, CC|SC..), each evaluated in curvature-normalized coordinates and
//! expanded through the timeflip and reflect symmetries. The shortest
//! candidate is sampled at uniform arc length.

use std::f64::consts::{FRAC_PI_2, PI};

use crate::config::VehicleConfig;
use crate::core::math::normalize_angle;
use crate::core::types::Pose2D;

/// Position tolerance below which two poses count as coincident.
const COINCIDENT_EPS: f64 = 1e-6;

/// Segments shorter than this (normalized units) are dropped as artifacts.
const ZERO_SEG_EPS: f64 = 1e-10;

/// Segment type within a Reeds-Shepp word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment {
    /// Straight drive.
    Straight,
    /// Minimum-radius left turn.
    Left,
    /// Minimum-radius right turn.
    Right,
}

impl Segment {
    /// True for the two arc types.
    #[inline]
    pub fn is_turn(self) -> bool {
        !matches!(self, Segment::Straight)
    }

    /// Mirror the turning direction.
    #[inline]
    fn reflected(self) -> Segment {
        match self {
            Segment::Left => Segment::Right,
            Segment::Right => Segment::Left,
            Segment::Straight => Segment::Straight,
        }
    }
}

/// A sampled Reeds-Shepp path.
///
/// Samples are spaced at uniform arc length; the first sample is the `from`
/// pose and the last the `to` pose of the generating query. Segment lengths
/// are signed, negative meaning reverse.
#[derive(Debug, Clone, Default)]
pub struct ReedsSheppPath {
    /// Signed arc length per segment, meters.
    pub segs_lengths: Vec<f64>,
    /// Segment type per segment.
    pub segs_types: Vec<Segment>,
    /// Total unsigned arc length, meters.
    pub total_length: f64,
    /// Sample x coordinates, meters.
    pub x: Vec<f64>,
    /// Sample y coordinates, meters.
    pub y: Vec<f64>,
    /// Sample headings, normalized to (-π, π].
    pub phi: Vec<f64>,
}

/// Candidate word in curvature-normalized units.
#[derive(Debug, Clone)]
struct Candidate {
    lengths: Vec<f64>,
    types: Vec<Segment>,
    total: f64,
}

/// Shortest Reeds-Shepp path generator for a fixed vehicle.
#[derive(Debug, Clone)]
pub struct ReedsShepp {
    max_kappa: f64,
    step_size: f64,
}

impl ReedsShepp {
    /// Create a generator from vehicle steering limits.
    pub fn new(vehicle: &VehicleConfig, step_size: f64) -> Self {
        Self {
            max_kappa: vehicle.max_kappa(),
            step_size,
        }
    }

    /// Create a generator from an explicit curvature limit.
    pub fn from_curvature(max_kappa: f64, step_size: f64) -> Self {
        Self {
            max_kappa,
            step_size,
        }
    }

    /// Shortest Reeds-Shepp path between two poses, ignoring obstacles.
    ///
    /// Returns `None` when no candidate word closes the displacement, which
    /// for finite inputs only happens on degenerate queries.
    pub fn shortest_rsp(&self, from: &Pose2D, to: &Pose2D) -> Option<ReedsSheppPath> {
        let dx = to.x - from.x;
        let dy = to.y - from.y;
        let dphi = normalize_angle(to.phi - from.phi);
        if dx.abs() < COINCIDENT_EPS && dy.abs() < COINCIDENT_EPS && dphi.abs() < COINCIDENT_EPS {
            // Zero-motion path: a single sample at the shared pose.
            return Some(ReedsSheppPath {
                segs_lengths: vec![0.0],
                segs_types: vec![Segment::Straight],
                total_length: 0.0,
                x: vec![from.x],
                y: vec![from.y],
                phi: vec![from.phi],
            });
        }

        let (sin0, cos0) = from.phi.sin_cos();
        let x = (cos0 * dx + sin0 * dy) * self.max_kappa;
        let y = (-sin0 * dx + cos0 * dy) * self.max_kappa;
        let step = self.step_size * self.max_kappa;

        let candidates = generate_candidates(x, y, dphi, step);
        let best = candidates.into_iter().fold(None, |best: Option<Candidate>, c| {
            match best {
                Some(b) if b.total <= c.total => Some(b),
                _ => Some(c),
            }
        })?;

        Some(self.sample(&best, from))
    }

    /// Sample a candidate word into world coordinates.
    fn sample(&self, candidate: &Candidate, from: &Pose2D) -> ReedsSheppPath {
        let step = self.step_size * self.max_kappa;
        let (xs, ys, yaws) = generate_course(&candidate.lengths, &candidate.types, self.max_kappa, step);

        let (sin0, cos0) = from.phi.sin_cos();
        let x = xs
            .iter()
            .zip(ys.iter())
            .map(|(&lx, &ly)| cos0 * lx - sin0 * ly + from.x)
            .collect();
        let y = xs
            .iter()
            .zip(ys.iter())
            .map(|(&lx, &ly)| sin0 * lx + cos0 * ly + from.y)
            .collect();
        let phi = yaws
            .iter()
            .map(|&yaw| normalize_angle(yaw + from.phi))
            .collect();

        ReedsSheppPath {
            segs_lengths: candidate.lengths.iter().map(|&l| l / self.max_kappa).collect(),
            segs_types: candidate.types.clone(),
            total_length: candidate.total / self.max_kappa,
            x,
            y,
            phi,
        }
    }
}

/// Enumerate all valid candidate words for a normalized displacement.
fn generate_candidates(x: f64, y: f64, phi: f64, step: f64) -> Vec<Candidate> {
    type Family = fn(f64, f64, f64) -> Option<(Vec<f64>, Vec<Segment>)>;
    const FAMILIES: [Family; 12] = [
        left_straight_left,
        left_straight_right,
        left_x_right_x_left,
        left_x_right_left,
        left_right_x_left,
        left_right_x_left_right,
        left_x_right_left_x_right,
        left_x_right90_straight_left,
        left_x_right90_straight_right,
        left_straight_right90_x_left,
        left_straight_left90_x_right,
        left_x_right90_straight_left90_x_right,
    ];

    let mut candidates = Vec::new();
    for family in FAMILIES {
        if let Some((lengths, types)) = family(x, y, phi) {
            push_candidate(&mut candidates, lengths, types, step);
        }
        // Timeflip: drive the mirrored-in-time word backwards.
        if let Some((lengths, types)) = family(-x, y, -phi) {
            let lengths = lengths.iter().map(|l| -l).collect();
            push_candidate(&mut candidates, lengths, types, step);
        }
        // Reflect: mirror the turning directions.
        if let Some((lengths, types)) = family(x, -y, -phi) {
            let types = types.iter().map(|t| t.reflected()).collect();
            push_candidate(&mut candidates, lengths, types, step);
        }
        // Timeflip + reflect.
        if let Some((lengths, types)) = family(-x, -y, phi) {
            let lengths = lengths.iter().map(|l| -l).collect();
            let types = types.iter().map(|t| t.reflected()).collect();
            push_candidate(&mut candidates, lengths, types, step);
        }
    }
    candidates
}

/// Validate a raw word and add it to the candidate list.
fn push_candidate(
    candidates: &mut Vec<Candidate>,
    lengths: Vec<f64>,
    types: Vec<Segment>,
    step: f64,
) {
    if !lengths.iter().all(|l| l.is_finite()) {
        return;
    }

    // Degenerate segments carry no motion; drop them so single-segment
    // words (a straight shot, a plain arc) survive the size filter below.
    let mut pruned_lengths = Vec::with_capacity(lengths.len());
    let mut pruned_types = Vec::with_capacity(types.len());
    for (&l, &t) in lengths.iter().zip(types.iter()) {
        if l.abs() > ZERO_SEG_EPS {
            pruned_lengths.push(l);
            pruned_types.push(t);
        }
    }
    if pruned_lengths.is_empty() {
        return;
    }

    let total: f64 = pruned_lengths.iter().map(|l| l.abs()).sum();
    if total <= step {
        return;
    }

    // Words with a segment much shorter than both the word and the sample
    // spacing degrade to numerical noise when sampled.
    let min_len = 0.1 * total;
    if !pruned_lengths
        .iter()
        .all(|l| l.abs() >= min_len || l.abs() >= step)
    {
        return;
    }

    // Keep one representative per (word, length) equivalence class.
    for existing in candidates.iter() {
        if existing.types == pruned_types && (existing.total - total).abs() <= step {
            return;
        }
    }

    candidates.push(Candidate {
        lengths: pruned_lengths,
        types: pruned_types,
        total,
    });
}

fn polar(x: f64, y: f64) -> (f64, f64) {
    ((x * x + y * y).sqrt(), y.atan2(x))
}

fn left_straight_left(x: f64, y: f64, phi: f64) -> Option<(Vec<f64>, Vec<Segment>)> {
    let (u, t) = polar(x - phi.sin(), y - 1.0 + phi.cos());
    if (0.0..=PI).contains(&t) {
        let v = normalize_angle(phi - t);
        if (0.0..=PI).contains(&v) {
            return Some((
                vec![t, u, v],
                vec![Segment::Left, Segment::Straight, Segment::Left],
            ));
        }
    }
    None
}

fn left_straight_right(x: f64, y: f64, phi: f64) -> Option<(Vec<f64>, Vec<Segment>)> {
    let (u1, t1) = polar(x + phi.sin(), y - 1.0 - phi.cos());
    let u1_sq = u1 * u1;
    if u1_sq >= 4.0 {
        let u = (u1_sq - 4.0).sqrt();
        let theta = 2.0_f64.atan2(u);
        let t = normalize_angle(t1 + theta);
        let v = normalize_angle(t - phi);
        if t >= 0.0 && v >= 0.0 {
            return Some((
                vec![t, u, v],
                vec![Segment::Left, Segment::Straight, Segment::Right],
            ));
        }
    }
    None
}

fn left_x_right_x_left(x: f64, y: f64, phi: f64) -> Option<(Vec<f64>, Vec<Segment>)> {
    let (u1, theta) = polar(x - phi.sin(), y - 1.0 + phi.cos());
    if u1 <= 4.0 {
        let a = (0.25 * u1).acos();
        let t = normalize_angle(a + theta + FRAC_PI_2);
        let u = normalize_angle(PI - 2.0 * a);
        let v = normalize_angle(phi - t - u);
        return Some((
            vec![t, -u, v],
            vec![Segment::Left, Segment::Right, Segment::Left],
        ));
    }
    None
}

fn left_x_right_left(x: f64, y: f64, phi: f64) -> Option<(Vec<f64>, Vec<Segment>)> {
    let (u1, theta) = polar(x - phi.sin(), y - 1.0 + phi.cos());
    if u1 <= 4.0 {
        let a = (0.25 * u1).acos();
        let t = normalize_angle(a + theta + FRAC_PI_2);
        let u = normalize_angle(PI - 2.0 * a);
        let v = normalize_angle(-phi + t + u);
        return Some((
            vec![t, -u, -v],
            vec![Segment::Left, Segment::Right, Segment::Left],
        ));
    }
    None
}

fn left_right_x_left(x: f64, y: f64, phi: f64) -> Option<(Vec<f64>, Vec<Segment>)> {
    let (u1, theta) = polar(x - phi.sin(), y - 1.0 + phi.cos());
    if u1 <= 4.0 {
        let u = (1.0 - u1 * u1 * 0.125).acos();
        let a = (2.0 * u.sin() / u1).asin();
        let t = normalize_angle(-a + theta + FRAC_PI_2);
        let v = normalize_angle(t - u - phi);
        return Some((
            vec![t, u, -v],
            vec![Segment::Left, Segment::Right, Segment::Left],
        ));
    }
    None
}

fn left_right_x_left_right(x: f64, y: f64, phi: f64) -> Option<(Vec<f64>, Vec<Segment>)> {
    let (u1, theta) = polar(x + phi.sin(), y - 1.0 - phi.cos());
    if u1 <= 2.0 {
        let a = ((u1 + 2.0) * 0.25).acos();
        let t = normalize_angle(theta + a + FRAC_PI_2);
        let u = normalize_angle(a);
        let v = normalize_angle(phi - t + 2.0 * u);
        if t >= 0.0 && u >= 0.0 && v >= 0.0 {
            return Some((
                vec![t, u, -u, -v],
                vec![Segment::Left, Segment::Right, Segment::Left, Segment::Right],
            ));
        }
    }
    None
}

fn left_x_right_left_x_right(x: f64, y: f64, phi: f64) -> Option<(Vec<f64>, Vec<Segment>)> {
    let (u1, theta) = polar(x + phi.sin(), y - 1.0 - phi.cos());
    let u2 = (20.0 - u1 * u1) / 16.0;
    if (0.0..=1.0).contains(&u2) {
        let u = u2.acos();
        let a = (2.0 * u.sin() / u1).asin();
        let t = normalize_angle(theta + a + FRAC_PI_2);
        let v = normalize_angle(t - phi);
        if t >= 0.0 && v >= 0.0 {
            return Some((
                vec![t, -u, -u, v],
                vec![Segment::Left, Segment::Right, Segment::Left, Segment::Right],
            ));
        }
    }
    None
}

fn left_x_right90_straight_left(x: f64, y: f64, phi: f64) -> Option<(Vec<f64>, Vec<Segment>)> {
    let (u1, theta) = polar(x - phi.sin(), y - 1.0 + phi.cos());
    if u1 >= 2.0 {
        let u = (u1 * u1 - 4.0).sqrt() - 2.0;
        let a = 2.0_f64.atan2((u1 * u1 - 4.0).sqrt());
        let t = normalize_angle(theta + a + FRAC_PI_2);
        let v = normalize_angle(t - phi + FRAC_PI_2);
        if t >= 0.0 && v >= 0.0 {
            return Some((
                vec![t, -FRAC_PI_2, -u, -v],
                vec![Segment::Left, Segment::Right, Segment::Straight, Segment::Left],
            ));
        }
    }
    None
}

fn left_straight_right90_x_left(x: f64, y: f64, phi: f64) -> Option<(Vec<f64>, Vec<Segment>)> {
    let (u1, theta) = polar(x - phi.sin(), y - 1.0 + phi.cos());
    if u1 >= 2.0 {
        let u = (u1 * u1 - 4.0).sqrt() - 2.0;
        let a = (u1 * u1 - 4.0).sqrt().atan2(2.0);
        let t = normalize_angle(theta - a + FRAC_PI_2);
        let v = normalize_angle(t - phi - FRAC_PI_2);
        if t >= 0.0 && v >= 0.0 {
            return Some((
                vec![t, u, FRAC_PI_2, -v],
                vec![Segment::Left, Segment::Straight, Segment::Right, Segment::Left],
            ));
        }
    }
    None
}

fn left_x_right90_straight_right(x: f64, y: f64, phi: f64) -> Option<(Vec<f64>, Vec<Segment>)> {
    let (u1, theta) = polar(x + phi.sin(), y - 1.0 - phi.cos());
    if u1 >= 2.0 {
        let t = normalize_angle(theta + FRAC_PI_2);
        let u = u1 - 2.0;
        let v = normalize_angle(phi - t - FRAC_PI_2);
        if t >= 0.0 && v >= 0.0 {
            return Some((
                vec![t, -FRAC_PI_2, -u, -v],
                vec![Segment::Left, Segment::Right, Segment::Straight, Segment::Right],
            ));
        }
    }
    None
}

fn left_straight_left90_x_right(x: f64, y: f64, phi: f64) -> Option<(Vec<f64>, Vec<Segment>)> {
    let (u1, theta) = polar(x + phi.sin(), y - 1.0 - phi.cos());
    if u1 >= 2.0 {
        let t = normalize_angle(theta);
        let u = u1 - 2.0;
        let v = normalize_angle(phi - t - FRAC_PI_2);
        if t >= 0.0 && v >= 0.0 {
            return Some((
                vec![t, u, FRAC_PI_2, -v],
                vec![Segment::Left, Segment::Straight, Segment::Left, Segment::Right],
            ));
        }
    }
    None
}

fn left_x_right90_straight_left90_x_right(
    x: f64,
    y: f64,
    phi: f64,
) -> Option<(Vec<f64>, Vec<Segment>)> {
    let (u1, theta) = polar(x + phi.sin(), y - 1.0 - phi.cos());
    if u1 >= 4.0 {
        let u = (u1 * u1 - 4.0).sqrt() - 4.0;
        let a = 2.0_f64.atan2((u1 * u1 - 4.0).sqrt());
        let t = normalize_angle(theta + a + FRAC_PI_2);
        let v = normalize_angle(t - phi);
        if t >= 0.0 && v >= 0.0 {
            return Some((
                vec![t, -FRAC_PI_2, -u, -FRAC_PI_2, v],
                vec![
                    Segment::Left,
                    Segment::Right,
                    Segment::Straight,
                    Segment::Left,
                    Segment::Right,
                ],
            ));
        }
    }
    None
}

/// Arc-length stations to sample within each segment, including both ends.
fn sample_dists(lengths: &[f64], step: f64) -> Vec<Vec<f64>> {
    lengths
        .iter()
        .map(|&length| {
            let d = if length >= 0.0 { step } else { -step };
            let mut dists = Vec::new();
            let mut current = 0.0;
            while (length >= 0.0 && current < length) || (length < 0.0 && current > length) {
                dists.push(current);
                current += d;
            }
            dists.push(length);
            dists
        })
        .collect()
}

/// Pose after driving `dist` (normalized arc length) of a segment that
/// starts at `(ox, oy, oyaw)` in real units.
fn interpolate(
    dist: f64,
    seg: Segment,
    max_kappa: f64,
    ox: f64,
    oy: f64,
    oyaw: f64,
) -> (f64, f64, f64) {
    let (sin_o, cos_o) = oyaw.sin_cos();
    match seg {
        Segment::Straight => (
            ox + dist / max_kappa * cos_o,
            oy + dist / max_kappa * sin_o,
            oyaw,
        ),
        Segment::Left => {
            let ldx = dist.sin() / max_kappa;
            let ldy = (1.0 - dist.cos()) / max_kappa;
            (
                ox + cos_o * ldx - sin_o * ldy,
                oy + sin_o * ldx + cos_o * ldy,
                oyaw + dist,
            )
        }
        Segment::Right => {
            let ldx = dist.sin() / max_kappa;
            let ldy = -(1.0 - dist.cos()) / max_kappa;
            (
                ox + cos_o * ldx - sin_o * ldy,
                oy + sin_o * ldx + cos_o * ldy,
                oyaw - dist,
            )
        }
    }
}

/// Sample the whole word in the frame of its first pose.
fn generate_course(
    lengths: &[f64],
    types: &[Segment],
    max_kappa: f64,
    step: f64,
) -> (Vec<f64>, Vec<f64>, Vec<f64>) {
    let dists_per_seg = sample_dists(lengths, step);

    let mut origin = (0.0, 0.0, 0.0);
    let mut xs = Vec::new();
    let mut ys = Vec::new();
    let mut yaws = Vec::new();

    for (dists, &seg) in dists_per_seg.iter().zip(types.iter()) {
        for &dist in dists {
            let (x, y, yaw) = interpolate(dist, seg, max_kappa, origin.0, origin.1, origin.2);
            xs.push(x);
            ys.push(y);
            yaws.push(yaw);
        }
        if let (Some(&x), Some(&y), Some(&yaw)) = (xs.last(), ys.last(), yaws.last()) {
            origin = (x, y, yaw);
        }
    }

    (xs, ys, yaws)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn generator() -> ReedsShepp {
        // Curvature 0.684 ≈ tan(0.6 rad) steering on a 1 m wheel base.
        ReedsShepp::from_curvature(0.6_f64.tan(), 0.1)
    }

    fn assert_ends_at(path: &ReedsSheppPath, to: &Pose2D) {
        let n = path.x.len();
        assert_relative_eq!(path.x[n - 1], to.x, epsilon = 1e-6);
        assert_relative_eq!(path.y[n - 1], to.y, epsilon = 1e-6);
        assert_relative_eq!(
            normalize_angle(path.phi[n - 1] - to.phi),
            0.0,
            epsilon = 1e-6
        );
    }

    #[test]
    fn test_straight_forward_goal() {
        let from = Pose2D::new(0.0, 0.0, 0.0);
        let to = Pose2D::new(10.0, 0.0, 0.0);
        let path = generator().shortest_rsp(&from, &to).unwrap();

        assert_eq!(path.segs_types, vec![Segment::Straight]);
        assert_eq!(path.segs_lengths.len(), 1);
        assert_relative_eq!(path.segs_lengths[0], 10.0, epsilon = 1e-9);
        assert_relative_eq!(path.total_length, 10.0, epsilon = 1e-9);

        assert_relative_eq!(path.x[0], 0.0);
        assert_relative_eq!(path.y[0], 0.0);
        assert_ends_at(&path, &to);
        for &phi in &path.phi {
            assert_relative_eq!(phi, 0.0, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_straight_reverse_goal() {
        let from = Pose2D::new(0.0, 0.0, 0.0);
        let to = Pose2D::new(-3.0, 0.0, 0.0);
        let path = generator().shortest_rsp(&from, &to).unwrap();

        assert_eq!(path.segs_types, vec![Segment::Straight]);
        assert_relative_eq!(path.segs_lengths[0], -3.0, epsilon = 1e-9);
        assert_ends_at(&path, &to);

        // x decreases monotonically along a pure reverse straight.
        for pair in path.x.windows(2) {
            assert!(pair[1] < pair[0] + 1e-12);
        }
    }

    #[test]
    fn test_u_turn_has_arcs() {
        let from = Pose2D::new(0.0, 0.0, 0.0);
        let to = Pose2D::new(0.0, 0.0, PI);
        let path = generator().shortest_rsp(&from, &to).unwrap();

        assert!(path.segs_types.iter().any(|t| t.is_turn()));
        assert!(path.total_length > 0.0);
        assert_ends_at(&path, &to);
    }

    #[test]
    fn test_generic_goal_endpoint_exact() {
        let from = Pose2D::new(-1.0, -4.0, -0.35);
        let to = Pose2D::new(5.0, 5.0, 0.44);
        let path = generator().shortest_rsp(&from, &to).unwrap();

        assert_relative_eq!(path.x[0], from.x);
        assert_relative_eq!(path.y[0], from.y);
        assert_ends_at(&path, &to);
    }

    #[test]
    fn test_total_matches_signed_lengths() {
        let from = Pose2D::new(0.0, 0.0, 0.0);
        let to = Pose2D::new(2.0, 3.0, 1.0);
        let path = generator().shortest_rsp(&from, &to).unwrap();

        let unsigned: f64 = path.segs_lengths.iter().map(|l| l.abs()).sum();
        assert_relative_eq!(path.total_length, unsigned, epsilon = 1e-9);
        assert_eq!(path.segs_lengths.len(), path.segs_types.len());
    }

    #[test]
    fn test_sample_spacing_bounded() {
        let generator = generator();
        let from = Pose2D::new(0.0, 0.0, 0.0);
        let to = Pose2D::new(4.0, 2.0, 0.8);
        let path = generator.shortest_rsp(&from, &to).unwrap();

        // Consecutive samples are at most one arc-length step apart
        // (chord length never exceeds arc length).
        for i in 1..path.x.len() {
            let dx = path.x[i] - path.x[i - 1];
            let dy = path.y[i] - path.y[i - 1];
            assert!((dx * dx + dy * dy).sqrt() <= generator.step_size + 1e-9);
        }
    }

    #[test]
    fn test_coincident_poses_zero_motion() {
        let pose = Pose2D::new(1.0, 2.0, 0.5);
        let path = generator().shortest_rsp(&pose, &pose).unwrap();

        assert_eq!(path.x.len(), 1);
        assert_relative_eq!(path.total_length, 0.0);
        assert_eq!(path.segs_types, vec![Segment::Straight]);
        assert_relative_eq!(path.x[0], 1.0);
        assert_relative_eq!(path.y[0], 2.0);
    }

    #[test]
    fn test_headings_normalized() {
        let from = Pose2D::new(0.0, 0.0, 3.0);
        let to = Pose2D::new(-4.0, 1.0, -3.0);
        let path = generator().shortest_rsp(&from, &to).unwrap();
        for &phi in &path.phi {
            assert!(phi > -PI && phi <= PI + 1e-12);
        }
    }

    #[test]
    fn test_deterministic() {
        let from = Pose2D::new(0.0, 0.0, 0.3);
        let to = Pose2D::new(3.0, -2.0, -1.1);
        let a = generator().shortest_rsp(&from, &to).unwrap();
        let b = generator().shortest_rsp(&from, &to).unwrap();
        assert_eq!(a.x, b.x);
        assert_eq!(a.y, b.y);
        assert_eq!(a.phi, b.phi);
        assert_eq!(a.segs_lengths, b.segs_lengths);
    }
}
