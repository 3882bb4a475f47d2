//! A pair of curves approximating the achievable-return set from below and above.

use crate::curve::{self, ParetoCurve, Point};

/// `(lower, upper)` with a memoized Hausdorff gap, invalidated on any mutation.
#[derive(Debug, Clone)]
pub struct Bounds {
    lower: ParetoCurve,
    upper: ParetoCurve,
    cached_gap: Option<(f64, Option<Point>)>,
}

impl Bounds {
    pub fn new(lower: ParetoCurve, upper: ParetoCurve) -> Self {
        assert_eq!(lower.dim(), upper.dim(), "Bounds: lower/upper dimension mismatch");
        Bounds { lower, upper, cached_gap: None }
    }

    /// A degenerate rectangle: lower is the single point `lower_left`, upper
    /// the single point `upper_right`. This is how `discover` seeds a state.
    pub fn rectangle(lower_left: Point, upper_right: Point) -> Self {
        Bounds::new(ParetoCurve::new(vec![lower_left]), ParetoCurve::new(vec![upper_right]))
    }

    pub fn lower(&self) -> &ParetoCurve {
        &self.lower
    }

    pub fn upper(&self) -> &ParetoCurve {
        &self.upper
    }

    pub fn dim(&self) -> usize {
        self.lower.dim()
    }

    fn invalidate(&mut self) {
        self.cached_gap = None;
    }

    pub fn multiply(&mut self, w: f64) {
        self.lower = std::mem::take(&mut self.lower).scale(w);
        self.upper = std::mem::take(&mut self.upper).scale(w);
        self.invalidate();
    }

    pub fn multiply_vector(&mut self, w: &[f64]) {
        self.lower = std::mem::take(&mut self.lower).scale_vector(w);
        self.upper = std::mem::take(&mut self.upper).scale_vector(w);
        self.invalidate();
    }

    pub fn shift(&mut self, r: &[f64]) {
        self.lower = std::mem::take(&mut self.lower).shift(r);
        self.upper = std::mem::take(&mut self.upper).shift(r);
        self.invalidate();
    }

    /// Replaces lower/upper with the weighted Minkowski sum of the operands'
    /// lower/upper curves — the expected-successor-bound step of `update`.
    pub fn sum_successors(weighted: &[(&Bounds, f64)]) -> Bounds {
        let weights: Vec<f64> = weighted.iter().map(|(_, w)| *w).collect();
        let lowers: Vec<&ParetoCurve> = weighted.iter().map(|(b, _)| b.lower()).collect();
        let uppers: Vec<&ParetoCurve> = weighted.iter().map(|(b, _)| b.upper()).collect();
        Bounds::new(curve::minkowski_sum(&lowers, &weights), curve::minkowski_sum(&uppers, &weights))
    }

    /// Re-hulls both curves; additionally closes the lower curve toward `reference`.
    pub fn pareto(&mut self, reference: &[f64], eps: f64) {
        self.lower = std::mem::take(&mut self.lower).upper_right_hull(eps).downward_closure(reference);
        self.upper = std::mem::take(&mut self.upper).upper_right_hull(eps);
        self.invalidate();
    }

    /// Re-hulls only the upper curve (used by CHVI sweeps, which tolerate
    /// interim vertex growth on the lower curve between sweeps).
    pub fn hull_upper_only(&mut self, eps: f64) {
        self.upper = std::mem::take(&mut self.upper).upper_right_hull(eps);
        self.invalidate();
    }

    /// Memoized one-sided Hausdorff distance from lower to upper.
    pub fn bound_distance(&mut self) -> f64 {
        self.ensure_gap();
        self.cached_gap.as_ref().expect("populated by ensure_gap").0
    }

    /// The vertex of the upper curve realizing the Hausdorff gap, if any.
    pub fn get_furthest_points(&mut self) -> Option<Point> {
        self.ensure_gap();
        self.cached_gap.as_ref().and_then(|(_, p)| p.clone())
    }

    fn ensure_gap(&mut self) {
        if self.cached_gap.is_none() {
            self.cached_gap = Some(self.lower.hausdorff_distance(&self.upper));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vector::approx_zero;

    #[test]
    fn rectangle_has_zero_gap_when_corners_coincide() {
        let mut b = Bounds::rectangle(vec![1.0, 1.0], vec![1.0, 1.0]);
        assert!(approx_zero(b.bound_distance()));
    }

    #[test]
    fn gap_is_invalidated_by_mutation() {
        let mut b = Bounds::rectangle(vec![0.0, 0.0], vec![2.0, 2.0]);
        let first = b.bound_distance();
        assert!(first > 0.0);
        b.shift(&[5.0, 5.0]);
        let second = b.bound_distance();
        assert!(approx_zero(first - second), "shifting both curves together leaves the gap unchanged");
    }

    #[test]
    fn sum_successors_combines_weighted_curves() {
        let a = Bounds::rectangle(vec![0.0, 0.0], vec![1.0, 1.0]);
        let b = Bounds::rectangle(vec![2.0, 2.0], vec![3.0, 3.0]);
        let combined = Bounds::sum_successors(&[(&a, 0.5), (&b, 0.5)]);
        assert_eq!(combined.lower().vertices(), &[vec![1.0, 1.0]]);
        assert_eq!(combined.upper().vertices(), &[vec![2.0, 2.0]]);
    }

    #[test]
    fn pareto_closes_lower_toward_reference() {
        let mut b = Bounds::new(
            ParetoCurve::new(vec![vec![1.0, 4.0], vec![3.0, 2.0]]),
            ParetoCurve::new(vec![vec![1.0, 5.0], vec![4.0, 3.0]]),
        );
        b.pareto(&[0.0, 0.0], 1e-7);
        assert_eq!(
            b.lower().vertices(),
            &[vec![0.0, 4.0], vec![1.0, 4.0], vec![3.0, 2.0], vec![3.0, 0.0]]
        );
        assert_eq!(b.upper().vertices(), &[vec![1.0, 5.0], vec![4.0, 3.0]]);
    }
}
