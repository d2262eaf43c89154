//! Discrete local-search optimization over an implicit integer lattice.
//!
//! A combinatorial assignment problem is modeled as an n-dimensional integer
//! lattice: one axis per decision variable, each axis bounded by a per-variable
//! cardinality. The lattice is never materialized — the engine walks it point
//! by point:
//!
//! - **Solution points**: immutable coordinate vectors with a lazily computed,
//!   memoized cost. Every evaluation reports to the owning space's global
//!   best/worst trackers.
//! - **Greedy descent** ("Monte Carlo path"): deterministic steepest-descent
//!   walk to a local optimum, one unit step per move.
//! - **Simulated annealing**: randomized single-unit moves under a geometric
//!   cooling schedule, accepting worsening moves with decaying probability.
//! - **Strategy comparison**: a diagnostic harness tallying how often compound
//!   strategies (descent, annealing-then-descent, descent-then-annealing) beat
//!   plain annealing.
//!
//! # Architecture
//!
//! The engine is domain-agnostic: the concrete problem supplies only a
//! cardinality vector and a pure cost function through the [`model::CostModel`]
//! trait. Search runs single-threaded; reproducibility is guaranteed by a
//! seeded random source owned by the [`space::SearchSpace`].

pub mod annealing;
pub mod error;
pub mod lattice;
pub mod model;
pub mod point;
pub mod space;
