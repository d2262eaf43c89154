//! Search space: lattice, seeded randomness, and global extrema tracking.
//!
//! A [`SearchSpace`] owns the lattice descriptor, the cost model, a seeded
//! random source, and the best/worst points discovered so far. It is the
//! factory for [`SolutionPoint`]s and the entry point for random sampling
//! and the strategy-comparison harness.
//!
//! The space is a cheap-to-clone handle (`Rc` inner), so points can carry a
//! non-owning back-reference without an ownership cycle. Everything is
//! single-threaded by design: the handle is deliberately `!Send`/`!Sync`,
//! and concurrent trials are out of scope.

use std::cell::RefCell;
use std::rc::Rc;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, trace};

use crate::annealing::{AnnealingConfig, AnnealingRunner};
use crate::error::SearchError;
use crate::lattice::Lattice;
use crate::model::CostModel;
use crate::point::SolutionPoint;

/// Best and worst evaluations seen so far, recorded as (coordinates, cost).
///
/// Stored by value rather than as points to keep the space free of
/// `Rc` cycles; [`SearchSpace::best`] rebuilds a point on demand.
#[derive(Debug, Default)]
struct Extrema {
    best: Option<(Vec<usize>, f64)>,
    worst: Option<(Vec<usize>, f64)>,
}

struct SpaceInner<M> {
    model: M,
    lattice: Lattice,
    rng: RefCell<StdRng>,
    extrema: RefCell<Extrema>,
}

/// Handle to one optimization run's search space.
///
/// Constructed once with a fixed seed; the cardinality vector is read from
/// the model at construction and immutable thereafter. Identical seed plus
/// identical call sequence reproduces identical search trajectories.
///
/// # Examples
///
/// ```
/// use lattice_search::model::FnCostModel;
/// use lattice_search::space::SearchSpace;
///
/// let model = FnCostModel::new(vec![3, 2], |c| {
///     let x = c[0] as f64;
///     (x - 1.0).powi(2) + (c[1] as f64).powi(2)
/// });
/// let space = SearchSpace::new(model, 42);
///
/// space.sample_random(50, false).unwrap();
/// let best = space.best().unwrap();
/// assert_eq!(best.cost().unwrap(), 0.0);
/// ```
pub struct SearchSpace<M: CostModel> {
    inner: Rc<SpaceInner<M>>,
}

impl<M: CostModel> Clone for SearchSpace<M> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<M: CostModel> SearchSpace<M> {
    /// Creates a space over the model's lattice with a seeded random source.
    ///
    /// # Panics
    ///
    /// Panics if the model reports a zero cardinality on any axis.
    pub fn new(model: M, seed: u64) -> Self {
        let lattice = Lattice::new(model.cardinalities());
        Self {
            inner: Rc::new(SpaceInner {
                model,
                lattice,
                rng: RefCell::new(StdRng::seed_from_u64(seed)),
                extrema: RefCell::new(Extrema::default()),
            }),
        }
    }

    /// The lattice descriptor.
    pub fn lattice(&self) -> &Lattice {
        &self.inner.lattice
    }

    /// Number of decision variables.
    pub fn dimension(&self) -> usize {
        self.inner.lattice.dimension()
    }

    /// Factory for solution points from an explicit coordinate vector.
    pub fn create_point(&self, coordinates: Vec<usize>) -> Result<SolutionPoint<M>, SearchError> {
        self.inner.lattice.validate_coordinates(&coordinates)?;
        Ok(SolutionPoint::new(self.clone(), coordinates))
    }

    /// Draws one uniform coordinate per axis and returns a fresh point.
    pub fn random_point(&self) -> SolutionPoint<M> {
        let coordinates = {
            let mut rng = self.inner.rng.borrow_mut();
            self.inner
                .lattice
                .cardinalities()
                .iter()
                .map(|&cardinality| rng.random_range(0..cardinality))
                .collect()
        };
        SolutionPoint::new(self.clone(), coordinates)
    }

    /// Evaluates `samples` random points, discarding the results.
    ///
    /// With `descend`, each point is walked to its greedy local optimum
    /// instead of being evaluated in place. The side effect — updating the
    /// best/worst trackers — is the purpose.
    pub fn sample_random(&self, samples: usize, descend: bool) -> Result<(), SearchError> {
        debug!(samples, descend, "random sampling");
        for _ in 0..samples {
            let point = self.random_point();
            if descend {
                point.local_optimum()?;
            } else {
                point.cost()?;
            }
        }
        Ok(())
    }

    /// Best point evaluated so far, if any evaluation happened.
    pub fn best(&self) -> Option<SolutionPoint<M>> {
        let extrema = self.inner.extrema.borrow();
        extrema
            .best
            .as_ref()
            .map(|(coordinates, cost)| {
                SolutionPoint::with_cached_cost(self.clone(), coordinates.clone(), *cost)
            })
    }

    /// Worst point evaluated so far, if any evaluation happened.
    pub fn worst(&self) -> Option<SolutionPoint<M>> {
        let extrema = self.inner.extrema.borrow();
        extrema
            .worst
            .as_ref()
            .map(|(coordinates, cost)| {
                SolutionPoint::with_cached_cost(self.clone(), coordinates.clone(), *cost)
            })
    }

    /// Benchmarks compound strategies against plain annealing.
    ///
    /// Per trial: draw one random point, then independently compute plain
    /// annealing, greedy descent, annealing-then-descent, and
    /// descent-then-annealing from it. A compound strategy earns a win only
    /// when its final cost is strictly below plain annealing's — ties score
    /// nothing. Diagnostic only; the win counts are the whole result.
    pub fn compare_annealing_vs_descent(
        &self,
        trials: usize,
        steps_per_temperature: usize,
    ) -> Result<StrategyComparison, SearchError> {
        let config =
            AnnealingConfig::default().with_steps_per_temperature(steps_per_temperature);
        let mut comparison = StrategyComparison {
            trials,
            ..StrategyComparison::default()
        };
        debug!(trials, steps_per_temperature, "strategy comparison");

        for trial in 0..trials {
            let start = self.random_point();

            let annealed_cost = AnnealingRunner::run(&start, &config)?
                .final_point
                .cost()?;
            let descended = start.local_optimum()?;
            let annealed_then_descended = AnnealingRunner::run(&start, &config)?
                .final_point
                .local_optimum()?;
            let descended_then_annealed =
                AnnealingRunner::run(&descended, &config)?.final_point;

            if descended.cost()? < annealed_cost {
                comparison.descent_wins += 1;
            }
            if annealed_then_descended.cost()? < annealed_cost {
                comparison.annealing_then_descent_wins += 1;
            }
            if descended_then_annealed.cost()? < annealed_cost {
                comparison.descent_then_annealing_wins += 1;
            }
            trace!(trial, annealed_cost, "comparison trial done");
        }

        Ok(comparison)
    }

    pub(crate) fn evaluate_model(&self, coordinates: &[usize]) -> Result<f64, SearchError> {
        self.inner
            .model
            .cost(coordinates)
            .map_err(SearchError::CostFunction)
    }

    /// Single entry point for extrema updates, invoked by
    /// [`SolutionPoint::cost`] after each first evaluation. Strict
    /// comparisons: the earliest point of a tied cost is kept.
    pub(crate) fn record_evaluation(&self, coordinates: &[usize], cost: f64) {
        let mut extrema = self.inner.extrema.borrow_mut();
        if extrema.best.as_ref().is_none_or(|(_, best)| cost < *best) {
            trace!(cost, "new best");
            extrema.best = Some((coordinates.to_vec(), cost));
        }
        if extrema
            .worst
            .as_ref()
            .is_none_or(|(_, worst)| cost > *worst)
        {
            extrema.worst = Some((coordinates.to_vec(), cost));
        }
    }

    /// Uniform draw from `[0, n)` using the space's seeded source.
    pub(crate) fn draw_index(&self, n: usize) -> usize {
        self.inner.rng.borrow_mut().random_range(0..n)
    }

    /// Uniform draw from `[0, 1)` using the space's seeded source.
    pub(crate) fn draw_unit(&self) -> f64 {
        self.inner.rng.borrow_mut().random_range(0.0..1.0)
    }
}

/// Win tallies from [`SearchSpace::compare_annealing_vs_descent`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StrategyComparison {
    /// Number of trials run.
    pub trials: usize,
    /// Trials where plain greedy descent beat plain annealing.
    pub descent_wins: usize,
    /// Trials where annealing followed by descent beat plain annealing.
    pub annealing_then_descent_wins: usize,
    /// Trials where descent followed by annealing beat plain annealing.
    pub descent_then_annealing_wins: usize,
}
