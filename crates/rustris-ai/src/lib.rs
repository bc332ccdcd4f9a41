//! Move selection AI for rustris.
//!
//! Three layers, leaf first:
//!
//! 1. [`board_metrics`] - derived measurements of a board snapshot (column
//!    heights, holes, bumpiness).
//! 2. [`evaluator`] - a pure scoring function mapping board + clear event +
//!    strategy + weights to a desirability score, lower is better.
//! 3. [`planner`] - breadth-first search over every pose the current piece
//!    can reach, scoring each resting placement (optionally with one-ply
//!    lookahead over the next known piece) and returning the best action
//!    sequence.
//!
//! The whole stack is pure and synchronous: planning clones the grid for
//! every simulated placement and touches no shared state, so independent
//! games can plan concurrently without coordination.

pub use self::{board_metrics::*, evaluator::*, planner::*, strategy::*, weights::*};

mod board_metrics;
mod evaluator;
mod planner;
mod strategy;
mod weights;
