//! Solution points: coordinate vectors with memoized cost.
//!
//! A [`SolutionPoint`] is an independent value holding a non-owning handle to
//! its [`SearchSpace`](crate::space::SearchSpace) for cardinality lookups and
//! for reporting extrema. Its cost is computed at most once, on first read,
//! and cached; the computation reports to the space's best/worst trackers as
//! a side effect.
//!
//! Neighbor enumeration and greedy descent are lazy iterators: neighbors are
//! created (and their costs computed) only as the sequence is consumed, which
//! matters when the cost function is expensive.

use std::cell::OnceCell;

use crate::error::SearchError;
use crate::model::CostModel;
use crate::space::SearchSpace;

/// One point of the lattice: an immutable coordinate vector plus its
/// lazily computed, cached cost.
pub struct SolutionPoint<M: CostModel> {
    space: SearchSpace<M>,
    coordinates: Vec<usize>,
    cost: OnceCell<f64>,
}

impl<M: CostModel> Clone for SolutionPoint<M> {
    fn clone(&self) -> Self {
        Self {
            space: self.space.clone(),
            coordinates: self.coordinates.clone(),
            cost: self.cost.clone(),
        }
    }
}

impl<M: CostModel> std::fmt::Debug for SolutionPoint<M> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SolutionPoint")
            .field("coordinates", &self.coordinates)
            .field("cost", &self.cost.get())
            .finish()
    }
}

impl<M: CostModel> SolutionPoint<M> {
    /// Caller guarantees the coordinates are valid for the space's lattice;
    /// the public factory is [`SearchSpace::create_point`].
    pub(crate) fn new(space: SearchSpace<M>, coordinates: Vec<usize>) -> Self {
        Self {
            space,
            coordinates,
            cost: OnceCell::new(),
        }
    }

    /// Rebuilds a point whose cost is already known (the space's recorded
    /// extrema). Pre-seeding the cache keeps the one-evaluation guarantee.
    pub(crate) fn with_cached_cost(
        space: SearchSpace<M>,
        coordinates: Vec<usize>,
        cost: f64,
    ) -> Self {
        let cell = OnceCell::new();
        let _ = cell.set(cost);
        Self {
            space,
            coordinates,
            cost: cell,
        }
    }

    /// The coordinate vector, exactly as supplied at creation.
    pub fn coordinates(&self) -> &[usize] {
        &self.coordinates
    }

    /// The owning search space.
    pub fn space(&self) -> &SearchSpace<M> {
        &self.space
    }

    /// Cost of this point, computed on first read and cached thereafter.
    ///
    /// The first successful evaluation reports to the space's best/worst
    /// trackers. A cost-model failure propagates without caching, so a later
    /// call would invoke the model again.
    pub fn cost(&self) -> Result<f64, SearchError> {
        if let Some(&cached) = self.cost.get() {
            return Ok(cached);
        }
        let cost = self.space.evaluate_model(&self.coordinates)?;
        let _ = self.cost.set(cost);
        self.space.record_evaluation(&self.coordinates, cost);
        Ok(cost)
    }

    /// Lazy, finite, restartable sequence of neighboring points.
    ///
    /// For every axis, yields the −1 then the +1 unit move, skipping moves
    /// that would leave `[0, cardinality)`. A d-dimensional point yields at
    /// most `2d` and at least `d` neighbors when every axis has cardinality
    /// > 1; boundary points yield fewer. Each neighbor is a fresh point with
    /// its own (empty) cost cache.
    pub fn neighbors(&self) -> Neighbors<'_, M> {
        Neighbors {
            point: self,
            axis: 0,
            tried_decrement: false,
        }
    }

    /// The strictly cheapest point among this one and its neighbors.
    ///
    /// Ties resolve in favor of `self`: only a strictly lower cost moves.
    pub fn best_among_neighbors(&self) -> Result<SolutionPoint<M>, SearchError> {
        let mut best_cost = self.cost()?;
        let mut best = self.clone();
        for neighbor in self.neighbors() {
            let cost = neighbor.cost()?;
            if cost < best_cost {
                best_cost = cost;
                best = neighbor;
            }
        }
        Ok(best)
    }

    /// Greedy steepest-descent walk, historically the "Monte Carlo path".
    ///
    /// A lazy, finite sequence starting at this point; each step moves to
    /// [`best_among_neighbors`](Self::best_among_neighbors) and the sequence
    /// ends the first time a step fails to strictly improve. Deterministic:
    /// no randomness, no backtracking, and the endpoint may be far from the
    /// global optimum.
    pub fn greedy_descent(&self) -> DescentPath<M> {
        DescentPath {
            next: Some(self.clone()),
        }
    }

    /// Walks [`greedy_descent`](Self::greedy_descent) to its end and returns
    /// the local optimum.
    pub fn local_optimum(&self) -> Result<SolutionPoint<M>, SearchError> {
        let mut last = self.clone();
        for step in self.greedy_descent() {
            last = step?;
        }
        Ok(last)
    }

    /// Runs simulated annealing from this point with the default geometric
    /// schedule, returning the final accepted point.
    ///
    /// See [`AnnealingRunner`](crate::annealing::AnnealingRunner) for the
    /// full contract and [`AnnealingConfig`](crate::annealing::AnnealingConfig)
    /// for non-default schedules.
    pub fn simulated_annealing(
        &self,
        steps_per_temperature: usize,
    ) -> Result<SolutionPoint<M>, SearchError> {
        let config = crate::annealing::AnnealingConfig::default()
            .with_steps_per_temperature(steps_per_temperature);
        Ok(crate::annealing::AnnealingRunner::run(self, &config)?.final_point)
    }

    /// Copy of this point with one coordinate replaced.
    pub(crate) fn offset(&self, axis: usize, value: usize) -> SolutionPoint<M> {
        let mut coordinates = self.coordinates.clone();
        coordinates[axis] = value;
        SolutionPoint::new(self.space.clone(), coordinates)
    }
}

/// Lazy neighbor iterator, see [`SolutionPoint::neighbors`].
pub struct Neighbors<'a, M: CostModel> {
    point: &'a SolutionPoint<M>,
    axis: usize,
    tried_decrement: bool,
}

impl<M: CostModel> Iterator for Neighbors<'_, M> {
    type Item = SolutionPoint<M>;

    fn next(&mut self) -> Option<Self::Item> {
        let cardinalities = self.point.space.lattice().cardinalities();
        while self.axis < self.point.coordinates.len() {
            let axis = self.axis;
            let value = self.point.coordinates[axis];
            if !self.tried_decrement {
                self.tried_decrement = true;
                if value > 0 {
                    return Some(self.point.offset(axis, value - 1));
                }
            }
            self.axis += 1;
            self.tried_decrement = false;
            if value + 1 < cardinalities[axis] {
                return Some(self.point.offset(axis, value + 1));
            }
        }
        None
    }
}

/// Lazy greedy-descent iterator, see [`SolutionPoint::greedy_descent`].
///
/// Yields the starting point first, then each strictly improving step. A
/// failed cost evaluation is yielded as an error and fuses the iterator.
pub struct DescentPath<M: CostModel> {
    next: Option<SolutionPoint<M>>,
}

impl<M: CostModel> Iterator for DescentPath<M> {
    type Item = Result<SolutionPoint<M>, SearchError>;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next.take()?;
        let step = match current.best_among_neighbors() {
            Ok(step) => step,
            Err(err) => return Some(Err(err)),
        };
        // Fixed point: best-among-neighbors returned the point itself.
        if step.coordinates != current.coordinates {
            self.next = Some(step);
        }
        Some(Ok(current))
    }
}
