//! Plugin contract between the engine and a concrete problem instance.
//!
//! The engine needs exactly two things from the problem it optimizes: a
//! per-variable candidate count (cardinality) and a deterministic cost
//! function over coordinate vectors. Everything else — where candidates come
//! from, what a coordinate means — stays on the consumer's side.

use crate::error::BoxError;

/// Defines a discrete optimization problem over an integer lattice.
///
/// # Determinism
///
/// `cost` must be pure: repeated calls with identical coordinates must return
/// identical values, since the engine memoizes per-point costs and assumes
/// the cached value stays valid. Lower cost is better.
///
/// # Failures
///
/// A cost function may fail (a fare cache miss, an I/O error in whatever
/// backs it). The engine never catches or retries such failures; they abort
/// the running algorithm and surface to the caller.
///
/// # Examples
///
/// ```
/// use lattice_search::error::BoxError;
/// use lattice_search::model::CostModel;
///
/// /// Separable quadratic with minimum at (1, 0).
/// struct Quadratic;
///
/// impl CostModel for Quadratic {
///     fn cardinalities(&self) -> Vec<usize> {
///         vec![3, 2]
///     }
///
///     fn cost(&self, coordinates: &[usize]) -> Result<f64, BoxError> {
///         let x = coordinates[0] as f64;
///         let y = coordinates[1] as f64;
///         Ok((x - 1.0).powi(2) + y.powi(2))
///     }
/// }
/// ```
pub trait CostModel {
    /// Candidate count per decision variable, one entry per axis.
    ///
    /// Queried once at space construction; every cardinality must be ≥ 1.
    fn cardinalities(&self) -> Vec<usize>;

    /// Cost of one full coordinate vector. Lower is better.
    fn cost(&self, coordinates: &[usize]) -> Result<f64, BoxError>;
}

/// Adapts an infallible closure into a [`CostModel`].
///
/// Convenient for tests, benchmarks, and closed-form objectives that cannot
/// fail.
pub struct FnCostModel<F> {
    cardinalities: Vec<usize>,
    cost: F,
}

impl<F> FnCostModel<F>
where
    F: Fn(&[usize]) -> f64,
{
    pub fn new(cardinalities: Vec<usize>, cost: F) -> Self {
        Self {
            cardinalities,
            cost,
        }
    }
}

impl<F> CostModel for FnCostModel<F>
where
    F: Fn(&[usize]) -> f64,
{
    fn cardinalities(&self) -> Vec<usize> {
        self.cardinalities.clone()
    }

    fn cost(&self, coordinates: &[usize]) -> Result<f64, BoxError> {
        Ok((self.cost)(coordinates))
    }
}
