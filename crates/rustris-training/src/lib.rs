//! Weight evolution for the move-selection AI.
//!
//! This crate evolves the feature weights consumed by `rustris-ai`. The scheme
//! is deliberately simple: an elitist, asexual hill-climb. Each generation
//! holds one unmutated baseline plus a set of independently mutated variants,
//! every member plays a full game externally, and the member with the best
//! score-per-line ratio seeds the next generation.
//!
//! - [`mutation`] - per-coefficient multiplicative perturbation
//! - [`generation`] - population container and elitist selection

pub mod generation;
pub mod mutation;
