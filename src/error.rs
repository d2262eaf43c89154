//! Error taxonomy for the search engine.
//!
//! All variants are programmer errors or environment failures, raised
//! synchronously and never retried. Nothing here is a steady-state event to
//! be logged and continued past.

use thiserror::Error;

/// Opaque error produced by an externally supplied cost function.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Errors surfaced by the lattice, the point factory, and cost evaluation.
#[derive(Debug, Error)]
pub enum SearchError {
    /// A coordinate vector has the wrong number of axes.
    #[error("coordinate vector has {got} axes, expected {expected}")]
    DimensionMismatch {
        /// Dimension of the lattice.
        expected: usize,
        /// Length of the offending vector.
        got: usize,
    },

    /// A coordinate component falls outside its axis range.
    #[error("coordinate {value} on axis {axis} is outside [0, {cardinality})")]
    InvalidCoordinate {
        /// Axis of the offending component.
        axis: usize,
        /// The out-of-range value.
        value: usize,
        /// Exclusive upper bound for the axis.
        cardinality: usize,
    },

    /// An axis index outside `[0, dimension)` was passed to a cardinality lookup.
    #[error("axis {axis} is out of range for a {dimension}-dimensional lattice")]
    AxisOutOfRange {
        /// The offending axis index.
        axis: usize,
        /// Dimension of the lattice.
        dimension: usize,
    },

    /// The externally supplied cost function failed.
    ///
    /// The engine never catches or retries this: it propagates to the caller
    /// and aborts whatever algorithm was in progress, with no partial result.
    #[error("cost function failed")]
    CostFunction(#[source] BoxError),
}
