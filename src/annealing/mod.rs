//! Simulated annealing over the lattice.
//!
//! Single-unit random moves under a geometric cooling schedule. Worsening
//! moves are accepted with a probability that decays as the temperature
//! drops, letting the search escape local optima that greedy descent would
//! get stuck in.
//!
//! # References
//!
//! - Kirkpatrick, Gelatt & Vecchi (1983), "Optimization by Simulated Annealing"
//! - Cerny (1985), "Thermodynamical Approach to the Travelling Salesman Problem"

mod config;
mod runner;

pub use config::AnnealingConfig;
pub use runner::{AnnealingOutcome, AnnealingRunner};
