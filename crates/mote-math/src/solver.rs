//! Dense linear solver backed by `faer`.
//!
//! Implements the [`DenseSolver`] trait using faer's full-pivot LU
//! factorization. The Newton system matrices assembled by the implicit
//! integrators change every iteration, so factorizations are not cached.

use faer::linalg::solvers::Solve;
use faer::Mat;

/// Trait for dense linear solvers over assembled system matrices.
///
/// The position Hessian of a damped spring is not symmetric positive
/// definite in general, so implementations must handle indefinite systems.
pub trait DenseSolver: Send {
    /// Solve `A x = b`, writing `x` into the provided output buffer.
    fn solve(&self, matrix: &Mat<f64>, rhs: &[f64], solution: &mut [f64]) -> Result<(), String>;

    /// Returns the name of this solver.
    fn name(&self) -> &str;
}

/// Full-pivot LU solver using `faer`.
pub struct LuSolver;

impl LuSolver {
    /// Creates a new solver.
    pub fn new() -> Self {
        Self
    }
}

impl Default for LuSolver {
    fn default() -> Self {
        Self::new()
    }
}

impl DenseSolver for LuSolver {
    fn solve(&self, matrix: &Mat<f64>, rhs: &[f64], solution: &mut [f64]) -> Result<(), String> {
        if matrix.nrows() != matrix.ncols() {
            return Err(format!(
                "Matrix must be square, got {}×{}",
                matrix.nrows(),
                matrix.ncols()
            ));
        }
        let dimension = matrix.nrows();
        if rhs.len() != dimension {
            return Err(format!(
                "RHS length ({}) != matrix dimension ({})",
                rhs.len(),
                dimension
            ));
        }
        if solution.len() != dimension {
            return Err(format!(
                "Solution length ({}) != matrix dimension ({})",
                solution.len(),
                dimension
            ));
        }
        if dimension == 0 {
            return Ok(());
        }

        let rhs_col: Mat<f64> = Mat::from_fn(dimension, 1, |i, _| rhs[i]);

        let lu = matrix.full_piv_lu();
        let sol = lu.solve(&rhs_col);

        for i in 0..dimension {
            solution[i] = sol[(i, 0)];
        }

        Ok(())
    }

    fn name(&self) -> &str {
        "full-pivot-lu"
    }
}
