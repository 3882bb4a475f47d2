//! Elementwise arithmetic over fixed-length real vectors.
//!
//! Every [`ParetoCurve`](crate::curve::ParetoCurve) vertex and every
//! [`Bounds`](crate::bounds::Bounds) operand is a plain `Vec<f64>`; this
//! module is the only place component-wise math is written out, so the rest
//! of the crate reads as geometry rather than loops.

/// Tolerance below which two scalars, or a scalar and zero, are considered equal.
pub const EPS: f64 = 1e-7;

pub fn approx_equal(a: f64, b: f64) -> bool {
    (a - b).abs() < EPS
}

pub fn approx_zero(a: f64) -> bool {
    a.abs() < EPS
}

pub fn add(a: &[f64], b: &[f64]) -> Vec<f64> {
    debug_assert_eq!(a.len(), b.len(), "add: dimension mismatch");
    a.iter().zip(b).map(|(x, y)| x + y).collect()
}

pub fn subtract(a: &[f64], b: &[f64]) -> Vec<f64> {
    debug_assert_eq!(a.len(), b.len(), "subtract: dimension mismatch");
    a.iter().zip(b).map(|(x, y)| x - y).collect()
}

pub fn scalar_multiply(w: f64, a: &[f64]) -> Vec<f64> {
    a.iter().map(|x| w * x).collect()
}

pub fn elementwise_multiply(a: &[f64], b: &[f64]) -> Vec<f64> {
    debug_assert_eq!(a.len(), b.len(), "elementwise_multiply: dimension mismatch");
    a.iter().zip(b).map(|(x, y)| x * y).collect()
}

pub fn dot_product(a: &[f64], b: &[f64]) -> f64 {
    debug_assert_eq!(a.len(), b.len(), "dot_product: dimension mismatch");
    a.iter().zip(b).map(|(x, y)| x * y).sum()
}

pub fn euclidean_distance(a: &[f64], b: &[f64]) -> f64 {
    dot_product(&subtract(a, b), &subtract(a, b)).sqrt()
}

/// Distance from `p` to the closest point on segment `ab`, via clamped projection.
///
/// `t = clamp(<p-a, b-a> / <b-a, b-a>, 0, 1)`; zero-length segments fall back to `|a-p|`.
pub fn line_segment_distance(a: &[f64], b: &[f64], p: &[f64]) -> f64 {
    let line = subtract(b, a);
    let norm = dot_product(&line, &line);
    if approx_zero(norm) {
        return euclidean_distance(a, p);
    }
    let delta = subtract(p, a);
    let t = (dot_product(&delta, &line) / norm).clamp(0.0, 1.0);
    let proj = add(a, &scalar_multiply(t, &line));
    euclidean_distance(&proj, p)
}

/// Lexicographic comparison, component by component.
pub fn lex_cmp(a: &[f64], b: &[f64]) -> std::cmp::Ordering {
    for (x, y) in a.iter().zip(b) {
        match x.partial_cmp(y) {
            Some(std::cmp::Ordering::Equal) => continue,
            Some(ord) => return ord,
            None => panic!("lex_cmp: non-comparable component (NaN)"),
        }
    }
    std::cmp::Ordering::Equal
}
