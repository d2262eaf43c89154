//! Annealing execution loop.

use tracing::{debug, trace};

use super::config::AnnealingConfig;
use crate::error::SearchError;
use crate::model::CostModel;
use crate::point::SolutionPoint;

/// Result of a simulated-annealing run.
#[derive(Debug)]
pub struct AnnealingOutcome<M: CostModel> {
    /// The final accepted point after the schedule completed. Not
    /// necessarily the best point visited — the owning space's best tracker
    /// records that.
    pub final_point: SolutionPoint<M>,

    /// Total number of legal proposals evaluated.
    pub proposals: usize,

    /// Number of accepted moves (including improvements).
    pub accepted: usize,

    /// Number of strictly improving moves.
    pub improving: usize,

    /// Temperature when the schedule stopped.
    pub final_temperature: f64,
}

/// Executes simulated annealing from a starting point.
pub struct AnnealingRunner;

impl AnnealingRunner {
    /// Runs the geometric cooling schedule from `start`.
    ///
    /// At each proposal step one uniformly random axis and direction (±1)
    /// are drawn; out-of-range proposals are discarded and redrawn. The move
    /// is accepted unconditionally when it is no worse, otherwise with
    /// probability `exp(delta / current_cost / temperature)` where
    /// `delta = current_cost - proposed_cost` (negative here). After each
    /// block of `steps_per_temperature` proposals the temperature is
    /// multiplied by the cooling factor, until it drops below the floor.
    ///
    /// A lattice where every axis has cardinality 1 admits no legal move;
    /// the run returns `start` immediately.
    pub fn run<M: CostModel>(
        start: &SolutionPoint<M>,
        config: &AnnealingConfig,
    ) -> Result<AnnealingOutcome<M>, SearchError> {
        config.validate().expect("invalid AnnealingConfig");

        let space = start.space().clone();
        let cardinalities = space.lattice().cardinalities().to_vec();
        if cardinalities.iter().all(|&c| c == 1) {
            return Ok(AnnealingOutcome {
                final_point: start.clone(),
                proposals: 0,
                accepted: 0,
                improving: 0,
                final_temperature: config.initial_temperature,
            });
        }

        let dimension = cardinalities.len();
        let mut current = start.clone();
        let mut current_cost = current.cost()?;
        let mut temperature = config.initial_temperature;
        let mut proposals = 0usize;
        let mut accepted = 0usize;
        let mut improving = 0usize;

        debug!(
            dimension,
            start_cost = current_cost,
            steps = config.steps_per_temperature,
            "annealing start"
        );

        while temperature > config.min_temperature {
            for _ in 0..config.steps_per_temperature {
                // Redraw until the unit move stays inside the lattice. At
                // least one axis has cardinality > 1, so a legal move exists.
                let proposed = loop {
                    let axis = space.draw_index(dimension);
                    let value = current.coordinates()[axis];
                    if space.draw_index(2) == 0 {
                        if value > 0 {
                            break current.offset(axis, value - 1);
                        }
                    } else if value + 1 < cardinalities[axis] {
                        break current.offset(axis, value + 1);
                    }
                };

                let proposed_cost = proposed.cost()?;
                let delta = current_cost - proposed_cost;
                proposals += 1;

                let accept = if delta >= 0.0 {
                    if delta > 0.0 {
                        improving += 1;
                    }
                    true
                } else {
                    // Negative delta: acceptance probability shrinks with
                    // relative worsening and with falling temperature. The
                    // clamp keeps the exponent defined for zero or negative
                    // current costs.
                    let probability =
                        (delta / current_cost.max(config.cost_floor) / temperature).exp();
                    space.draw_unit() < probability
                };

                if accept {
                    current = proposed;
                    current_cost = proposed_cost;
                    accepted += 1;
                }
            }

            temperature *= config.cooling_factor;
            trace!(temperature, current_cost, "cooled");
        }

        debug!(
            final_cost = current_cost,
            proposals, accepted, improving, "annealing done"
        );

        Ok(AnnealingOutcome {
            final_point: current,
            proposals,
            accepted,
            improving,
            final_temperature: temperature,
        })
    }
}
