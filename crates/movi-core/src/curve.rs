//! The 2-D (and degenerate 1-D) convex, downward-closed Pareto curve.
//!
//! A [`ParetoCurve`] is just a vertex list; construction never imposes the
//! convexity invariant, [`ParetoCurve::upper_right_hull`] does. Every
//! objective is assumed to be oriented "larger is better" — callers at the
//! environment boundary negate minimization objectives before anything here
//! ever sees a vertex.

use crate::vector::{self, lex_cmp, EPS};

/// A point in objective space; all points within one curve share a dimension.
pub type Point = Vec<f64>;

#[derive(Debug, Clone, PartialEq)]
pub struct ParetoCurve {
    dim: usize,
    vertices: Vec<Point>,
}

impl Default for ParetoCurve {
    /// The empty curve of dimension 0, used only as a placeholder for `mem::take`.
    fn default() -> Self {
        ParetoCurve::empty(0)
    }
}

/// Signed area of the triangle `a, b, c`; positive when `c` is left of `a -> b`.
pub fn ccw(a: &[f64], b: &[f64], c: &[f64]) -> f64 {
    debug_assert_eq!(a.len(), 2);
    (b[0] - a[0]) * (c[1] - a[1]) - (b[1] - a[1]) * (c[0] - a[0])
}

impl ParetoCurve {
    /// Builds a curve from an unordered point list. Does not normalize.
    ///
    /// # Panics
    /// If the points do not share a single dimension in `{1, 2}`.
    pub fn new(vertices: Vec<Point>) -> Self {
        let dim = vertices.first().map_or(0, Vec::len);
        assert!(dim <= 2, "ParetoCurve: only 1-D and 2-D curves are supported, got dim {dim}");
        assert!(
            vertices.iter().all(|v| v.len() == dim),
            "ParetoCurve: all vertices must share one dimension"
        );
        ParetoCurve { dim, vertices }
    }

    /// The bottom element: neutral for Minkowski sum, dominated by everything.
    pub fn empty(dim: usize) -> Self {
        ParetoCurve { dim, vertices: Vec::new() }
    }

    pub fn dim(&self) -> usize {
        self.dim
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn vertices(&self) -> &[Point] {
        &self.vertices
    }

    pub fn into_vertices(self) -> Vec<Point> {
        self.vertices
    }

    /// Normalizes to the convex upper-right frontier.
    ///
    /// `d=1` reduces to the single maximum point. `d=2` sorts ascending and
    /// sweeps left to right, popping the stack while the last three points
    /// fail to make a strict right turn (within `eps/100` of colinear) —
    /// the textbook monotone-chain upper hull.
    ///
    /// # Panics
    /// If `dim() > 2` (InvalidGeometry: hull is undefined above 2-D).
    pub fn upper_right_hull(mut self, eps: f64) -> Self {
        if self.vertices.is_empty() {
            return self;
        }
        if self.dim == 1 {
            let max = self
                .vertices
                .into_iter()
                .reduce(|a, b| if b[0] > a[0] { b } else { a })
                .expect("non-empty after the emptiness check above");
            self.vertices = vec![max];
            return self;
        }
        assert_eq!(self.dim, 2, "upper_right_hull: dim > 2 is undefined");

        self.vertices.sort_by(|a, b| lex_cmp(a, b));
        let tolerance = eps / 100.0;
        let mut hull: Vec<Point> = Vec::with_capacity(self.vertices.len());
        for p in self.vertices {
            while hull.len() >= 2 {
                let b = &hull[hull.len() - 1];
                let a = &hull[hull.len() - 2];
                // pop unless a -> b -> p is a strict right turn
                if ccw(a, b, &p) >= -tolerance {
                    hull.pop();
                } else {
                    break;
                }
            }
            hull.push(p);
        }
        self.vertices = hull;
        self
    }

    /// Extends the curve toward `reference` along both axes.
    ///
    /// Precondition: `self` is already hulled, and `reference` is
    /// componentwise at most every vertex. No-op for `d=1`.
    pub fn downward_closure(mut self, reference: &[f64]) -> Self {
        assert_eq!(self.dim, reference.len(), "downward_closure: dimension mismatch");
        if self.dim < 2 || self.vertices.is_empty() {
            return self;
        }
        let max_x_point = self.vertices.last().expect("checked non-empty above").clone();
        let max_y_point = self
            .vertices
            .iter()
            .max_by(|a, b| a[1].partial_cmp(&b[1]).expect("no NaN objectives"))
            .expect("checked non-empty above")
            .clone();

        let left_shadow = vec![reference[0], max_y_point[1]];
        let bottom_shadow = vec![max_x_point[0], reference[1]];

        let mut vertices = Vec::with_capacity(self.vertices.len() + 2);
        vertices.push(left_shadow);
        vertices.extend(self.vertices);
        vertices.push(bottom_shadow);
        self.vertices = vertices;
        self
    }

    /// Translates every vertex by `delta`. Does not re-hull.
    pub fn shift(mut self, delta: &[f64]) -> Self {
        for v in &mut self.vertices {
            *v = vector::add(v, delta);
        }
        self
    }

    /// Scales every vertex by a scalar. Does not re-hull.
    pub fn scale(mut self, w: f64) -> Self {
        for v in &mut self.vertices {
            *v = vector::scalar_multiply(w, v);
        }
        self
    }

    /// Scales every vertex componentwise. Does not re-hull.
    pub fn scale_vector(mut self, w: &[f64]) -> Self {
        for v in &mut self.vertices {
            *v = vector::elementwise_multiply(v, w);
        }
        self
    }

    /// Distance from `p` to the nearest facet (edge between consecutive vertices).
    ///
    /// Only contractually meaningful for `p` outside this curve's downward-closed
    /// region; callers (Bounds) only ever feed it points from the dominating curve.
    ///
    /// # Panics
    /// If the curve is empty (InvalidGeometry: distance called on empty curve).
    pub fn point_distance(&self, p: &[f64]) -> f64 {
        assert!(!self.vertices.is_empty(), "point_distance: distance called on empty curve");
        if self.dim == 1 {
            return p[0] - self.vertices[0][0];
        }
        if self.vertices.len() == 1 {
            return vector::euclidean_distance(&self.vertices[0], p);
        }
        self.vertices
            .windows(2)
            .map(|w| vector::line_segment_distance(&w[0], &w[1], p))
            .fold(f64::INFINITY, f64::min)
    }

    /// One-sided Hausdorff distance: `max` over `other`'s vertices of `self.point_distance`.
    ///
    /// Returns the distance and the vertex of `other` that attains it (used by
    /// the BRTDP state heuristic to focus exploration). `self` is the
    /// dominated ("inner") curve, `other` the dominating ("outer") one.
    pub fn hausdorff_distance(&self, other: &Self) -> (f64, Option<Point>) {
        let mut max_dist = f64::NEG_INFINITY;
        let mut argmax = None;
        for v in &other.vertices {
            let d = self.point_distance(v);
            if d > max_dist {
                max_dist = d;
                argmax = Some(v.clone());
            }
        }
        if max_dist.is_finite() { (max_dist, argmax) } else { (0.0, None) }
    }
}

/// Weighted Minkowski sum `sum_i w_i * P_i` of already-hulled curves.
///
/// Linear in the total vertex count: each curve contributes an offset pointer
/// that only ever advances, and at every step we advance whichever curve(s)
/// have the steepest remaining edge slope (curves are stored lexicographically
/// ascending, so slope is monotonically decreasing along a hull — advancing
/// the steepest edge first keeps the merged sequence convex). Ties (colinear
/// edges across inputs, or zero-length edges) advance together so the shared
/// vertex is only emitted once.
pub fn minkowski_sum(curves: &[&ParetoCurve], weights: &[f64]) -> ParetoCurve {
    assert_eq!(curves.len(), weights.len(), "minkowski_sum: curves/weights length mismatch");
    assert!(!curves.is_empty(), "minkowski_sum: empty operand list");

    let dim = curves.iter().find(|c| !c.is_empty()).map_or(curves[0].dim(), ParetoCurve::dim);
    if dim == 0 {
        return ParetoCurve::empty(0);
    }
    if dim == 1 {
        let mut x = 0.0;
        for (c, w) in curves.iter().zip(weights) {
            if let Some(v) = c.vertices.first() {
                x += w * v[0];
            }
        }
        return ParetoCurve { dim: 1, vertices: vec![vec![x]] };
    }
    assert_eq!(dim, 2, "minkowski_sum: only 1-D and 2-D supported");

    let active: Vec<(&ParetoCurve, f64)> = curves
        .iter()
        .zip(weights.iter())
        .filter(|(c, _)| !c.is_empty())
        .map(|(c, w)| (*c, *w))
        .collect();
    if active.is_empty() {
        return ParetoCurve::empty(2);
    }

    let mut offsets = vec![0usize; active.len()];
    let mut result = Vec::new();
    loop {
        let mut next = vec![0.0, 0.0];
        for (i, (c, w)) in active.iter().enumerate() {
            let v = &c.vertices()[offsets[i]];
            next[0] += w * v[0];
            next[1] += w * v[1];
        }
        result.push(next);

        let mut any_unfinished = false;
        let mut best_slope = f64::NEG_INFINITY;
        let mut advancing = Vec::new();
        for (i, (c, w)) in active.iter().enumerate() {
            if offsets[i] == c.vertices().len() - 1 {
                continue;
            }
            any_unfinished = true;
            let cur = &c.vertices()[offsets[i]];
            let nxt = &c.vertices()[offsets[i] + 1];
            let dx = w * (nxt[0] - cur[0]);
            let dy = w * (nxt[1] - cur[1]);
            let slope = if dx.abs() < EPS && dy.abs() < EPS { f64::INFINITY } else { dy / dx };
            if slope > best_slope + EPS {
                best_slope = slope;
                advancing.clear();
                advancing.push(i);
            } else if (slope - best_slope).abs() <= EPS {
                advancing.push(i);
            }
        }
        if !any_unfinished {
            break;
        }
        for i in advancing {
            offsets[i] += 1;
        }
    }
    ParetoCurve { dim: 2, vertices: result }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn curve(points: &[[f64; 2]]) -> ParetoCurve {
        ParetoCurve::new(points.iter().map(|p| p.to_vec()).collect())
    }

    #[test]
    fn hull_of_cluster_matches_expected_frontier() {
        let c = curve(&[
            [5.0, 2.0],
            [5.0, 3.0],
            [6.5, 3.0],
            [5.0, 3.5],
            [5.5, 3.5],
            [3.0, 4.0],
            [4.5, 4.0],
            [6.0, 4.0],
            [5.25, 4.5],
            [4.5, 5.0],
            [6.5, 5.0],
        ])
        .upper_right_hull(1e-7);
        assert_eq!(c.vertices(), &[vec![3.0, 4.0], vec![4.5, 5.0], vec![6.5, 5.0]]);
    }

    #[test]
    fn hull_of_colinear_chain_reduces_to_endpoints() {
        let c = curve(&[[-10.0, -10.0], [2.0, 2.0], [5.0, 5.0], [300.0, 300.0]]).upper_right_hull(1e-7);
        assert_eq!(c.vertices(), &[vec![-10.0, -10.0], vec![300.0, 300.0]]);
    }

    #[test]
    fn one_d_hull_keeps_only_the_maximum() {
        let c = ParetoCurve::new(vec![vec![-10.0], vec![-5.0], vec![2.0], vec![10.0], vec![25.0]])
            .upper_right_hull(1e-7);
        assert_eq!(c.vertices(), &[vec![25.0]]);
    }

    #[test]
    fn hull_is_idempotent() {
        let once = curve(&[[1.0, 1.0], [2.0, 3.0], [4.0, 2.0], [0.0, 0.0]]).upper_right_hull(1e-7);
        let twice = once.clone().upper_right_hull(1e-7);
        assert_eq!(once, twice);
    }

    #[test]
    fn minkowski_sum_of_singletons_adds_points() {
        let a = curve(&[[1.0, 2.0]]);
        let b = curve(&[[3.0, 4.0]]);
        let sum = minkowski_sum(&[&a, &b], &[1.0, 1.0]);
        assert_eq!(sum.vertices(), &[vec![4.0, 6.0]]);
    }

    #[test]
    fn minkowski_sum_scales_a_single_operand() {
        let a = curve(&[[0.0, 0.0], [1.0, 2.0], [3.0, 2.5]]).upper_right_hull(1e-7);
        let scaled = minkowski_sum(&[&a], &[2.0]);
        let expected: Vec<Point> = a.vertices().iter().map(|v| vector::scalar_multiply(2.0, v)).collect();
        assert_eq!(scaled.vertices(), expected.as_slice());
    }

    #[test]
    fn minkowski_sum_is_commutative_with_identity() {
        let a = curve(&[[0.0, 1.0], [1.0, 0.0]]).upper_right_hull(1e-7);
        let empty = ParetoCurve::empty(2);
        let with_identity = minkowski_sum(&[&a, &empty], &[1.0, 1.0]);
        assert_eq!(with_identity.vertices(), a.vertices());
    }

    #[test]
    fn point_distance_is_zero_on_a_vertex() {
        let c = curve(&[[0.0, 2.0], [1.0, 1.0], [2.0, 0.0]]).upper_right_hull(1e-7);
        assert!(vector::approx_zero(c.point_distance(&[1.0, 1.0])));
    }

    #[test]
    fn hausdorff_distance_is_zero_when_outer_equals_inner() {
        let lower = curve(&[[0.0, 2.0], [1.0, 1.0], [2.0, 0.0]]).upper_right_hull(1e-7);
        let upper = lower.clone();
        let (d, _) = lower.hausdorff_distance(&upper);
        assert!(vector::approx_zero(d));
    }

    #[test]
    fn downward_closure_extends_both_axes() {
        let c = curve(&[[1.0, 4.0], [3.0, 2.0]]).upper_right_hull(1e-7).downward_closure(&[0.0, 0.0]);
        assert_eq!(
            c.vertices(),
            &[vec![0.0, 4.0], vec![1.0, 4.0], vec![3.0, 2.0], vec![3.0, 0.0]]
        );
    }

    #[test]
    #[should_panic(expected = "distance called on empty curve")]
    fn distance_on_empty_curve_panics() {
        ParetoCurve::empty(2).point_distance(&[0.0, 0.0]);
    }
}
