//! Interleaved state-vector views and dense-matrix block accumulation.
//!
//! Simulation state lives in flat interleaved vectors (`[x0, y0, x1, y1, ..]`),
//! and second derivatives in dense `(2n, 2n)` matrices. Forces work on 2D
//! blocks; these helpers bridge the two layouts.

use faer::Mat;
use glam::{DMat2, DVec2};

/// Reads the 2D slot for particle `i` from an interleaved vector.
#[inline]
pub fn get2(xs: &[f64], i: usize) -> DVec2 {
    DVec2::new(xs[2 * i], xs[2 * i + 1])
}

/// Writes the 2D slot for particle `i` in an interleaved vector.
#[inline]
pub fn set2(xs: &mut [f64], i: usize, v: DVec2) {
    xs[2 * i] = v.x;
    xs[2 * i + 1] = v.y;
}

/// Adds `v` into the 2D slot for particle `i` of an interleaved vector.
#[inline]
pub fn add2(xs: &mut [f64], i: usize, v: DVec2) {
    xs[2 * i] += v.x;
    xs[2 * i + 1] += v.y;
}

/// Outer product `a bᵀ` as a 2×2 matrix.
#[inline]
pub fn outer(a: DVec2, b: DVec2) -> DMat2 {
    // Column c of a bᵀ is a scaled by b[c].
    DMat2::from_cols(a * b.x, a * b.y)
}

/// Adds a 2×2 block into a system matrix at particle block `(bi, bj)`.
///
/// Rows `2bi..2bi+2` and columns `2bj..2bj+2` receive `block` additively.
pub fn add_block(h: &mut Mat<f64>, bi: usize, bj: usize, block: DMat2) {
    for c in 0..2 {
        let col = block.col(c);
        for r in 0..2 {
            h[(2 * bi + r, 2 * bj + c)] += col[r];
        }
    }
}

/// Checks a square matrix for symmetry up to `eps`.
///
/// Used by integrator tests to validate assembled position Hessians, which
/// are symmetric for any potential-energy force.
pub fn approx_symmetric(a: &Mat<f64>, eps: f64) -> bool {
    debug_assert_eq!(a.nrows(), a.ncols());
    for i in 0..a.nrows() {
        for j in (i + 1)..a.ncols() {
            if (a[(i, j)] - a[(j, i)]).abs() >= eps {
                return false;
            }
        }
    }
    true
}

/// Infinity norm of a flat vector.
#[inline]
pub fn inf_norm(xs: &[f64]) -> f64 {
    xs.iter().fold(0.0, |acc, &x| acc.max(x.abs()))
}
