use rustris_engine::Grid;

use crate::{
    board_metrics::BoardMetrics,
    strategy::{Strategy, WellSide},
    weights::{WeightKey, Weights},
};

/// Tallest-column threshold above which survival mode starts penalizing a
/// clogged center.
pub const DANGER_HEIGHT: u8 = 18;

/// Piece locks without an I-piece line clear before the well strategy starts
/// considering its well stale.
pub const DROUGHT_LIMIT: u32 = 12;

/// Minimum well depth (neighbor height minus well height) for the drought
/// penalty to apply.
const DROUGHT_DEPTH_GUARD: i32 = 3;

/// Pure board scoring, lower is better.
///
/// Bundles the strategy, weight vector and caller-threaded drought counter so
/// the planner can score every candidate placement with one call.
#[derive(Debug, Clone, Copy)]
pub struct BoardEvaluator<'a> {
    strategy: Strategy,
    weights: &'a Weights,
    drought: u32,
}

impl<'a> BoardEvaluator<'a> {
    #[must_use]
    pub fn new(strategy: Strategy, weights: &'a Weights, drought: u32) -> Self {
        Self {
            strategy,
            weights,
            drought,
        }
    }

    /// Scores a post-clear board.
    ///
    /// `cleared` is the number of rows removed by the placement being judged
    /// and `holes_before_clear` the hole count of the locked board before
    /// those rows were removed; survival mode compares against it to reward
    /// clears that dig holes out.
    #[must_use]
    #[expect(clippy::cast_precision_loss)]
    pub fn score(&self, grid: &Grid, cleared: usize, holes_before_clear: u32) -> f32 {
        let metrics = BoardMetrics::measure(grid);
        let w = self.weights;
        match self.strategy {
            Strategy::Survival => {
                let mut score = w.get(WeightKey::AggregateHeight)
                    * metrics.aggregate_height() as f32
                    + w.get(WeightKey::CompletedLines) * cleared as f32
                    + w.get(WeightKey::Holes) * metrics.holes() as f32
                    + w.get(WeightKey::Bumpiness) * metrics.bumpiness() as f32;
                if cleared > 0 && metrics.holes() < holes_before_clear {
                    score += w.get(WeightKey::HoleReduction);
                }
                if metrics.max_height() > DANGER_HEIGHT {
                    score += w.get(WeightKey::CenterClog) * metrics.center_height() as f32;
                }
                score
            }
            Strategy::Well { side } => {
                let (well, neighbor, excluded_pair) = match side {
                    WellSide::Left => (0, 1, 0),
                    WellSide::Right => (Grid::WIDTH - 1, Grid::WIDTH - 2, Grid::WIDTH - 2),
                };
                let mut score = w.get(WeightKey::Holes) * metrics.holes() as f32
                    + w.get(WeightKey::Bumpiness)
                        * metrics.bumpiness_excluding_pair(excluded_pair) as f32
                    + w.get(WeightKey::AggregateHeight) * metrics.aggregate_height() as f32
                    + w.get(WeightKey::WellClogs) * f32::from(metrics.height(well))
                    + w.get(WeightKey::LineClearBonus) * (cleared * cleared) as f32;

                // Signed depth: a neighbor shorter than the well goes negative
                // and the guard suppresses the penalty.
                let depth = i32::from(metrics.height(neighbor)) - i32::from(metrics.height(well));
                if self.drought > DROUGHT_LIMIT && depth > DROUGHT_DEPTH_GUARD {
                    score += w.get(WeightKey::DroughtPenalty)
                        * (self.drought - DROUGHT_LIMIT) as f32
                        * depth as f32;
                }
                score
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn right_well_flat(well_height: usize) -> Grid {
        let mut art = String::new();
        for row in 0..5 {
            let well = if 5 - row <= well_height { '#' } else { '.' };
            art.push_str(&format!("#########{well}\n"));
        }
        Grid::from_ascii(&art)
    }

    #[test]
    fn test_empty_weights_score_zero() {
        let weights = Weights::new();
        for strategy in [Strategy::Survival, Strategy::LEFT_WELL, Strategy::RIGHT_WELL] {
            let evaluator = BoardEvaluator::new(strategy, &weights, 20);
            let grid = Grid::from_ascii("#####.....");
            assert_eq!(evaluator.score(&grid, 2, 5), 0.0, "{strategy}");
        }
    }

    #[test]
    fn test_well_bumpiness_ignores_well_column_height() {
        let weights = Weights::new().with(WeightKey::Bumpiness, 1.0);
        let evaluator = BoardEvaluator::new(Strategy::RIGHT_WELL, &weights, 0);
        // Heights [5x9, 0] and [5x9, 5]: the edge pair is excluded in both,
        // so the bumpiness penalty is identical.
        let open_well = right_well_flat(0);
        let filled_well = right_well_flat(5);
        assert_eq!(
            evaluator.score(&open_well, 0, 0),
            evaluator.score(&filled_well, 0, 0),
        );
    }

    #[test]
    fn test_quadratic_clear_bonus() {
        let weights = Weights::new().with(WeightKey::LineClearBonus, -1.0);
        let evaluator = BoardEvaluator::new(Strategy::LEFT_WELL, &weights, 0);
        let grid = Grid::EMPTY;
        let single = evaluator.score(&grid, 1, 0);
        let tetris = evaluator.score(&grid, 4, 0);
        assert_eq!(tetris, 16.0 * single);
        assert!(tetris < single);
    }

    #[test]
    fn test_well_clogs_penalizes_well_height() {
        let weights = Weights::new().with(WeightKey::WellClogs, 1.0);
        let evaluator = BoardEvaluator::new(Strategy::RIGHT_WELL, &weights, 0);
        assert_eq!(evaluator.score(&right_well_flat(0), 0, 0), 0.0);
        assert_eq!(evaluator.score(&right_well_flat(3), 0, 0), 3.0);
    }

    #[test]
    fn test_drought_penalty_requires_both_conditions() {
        let weights = Weights::new().with(WeightKey::DroughtPenalty, 1.0);
        let deep_well = right_well_flat(0); // depth 5

        // Depth 5 > 3 but drought below the limit: no penalty.
        let fresh = BoardEvaluator::new(Strategy::RIGHT_WELL, &weights, DROUGHT_LIMIT);
        assert_eq!(fresh.score(&deep_well, 0, 0), 0.0);

        // Drought 15 and depth 5: (15 - 12) * 5.
        let starved = BoardEvaluator::new(Strategy::RIGHT_WELL, &weights, 15);
        assert_eq!(starved.score(&deep_well, 0, 0), 15.0);

        // Shallow well suppresses the penalty regardless of drought.
        let shallow = right_well_flat(3); // depth 2
        assert_eq!(starved.score(&shallow, 0, 0), 0.0);
    }

    #[test]
    fn test_drought_penalty_suppressed_for_negative_depth() {
        let weights = Weights::new().with(WeightKey::DroughtPenalty, 1.0);
        let evaluator = BoardEvaluator::new(Strategy::LEFT_WELL, &weights, 100);
        // Left column taller than its neighbor: signed depth is negative.
        let grid = Grid::from_ascii(
            "
            #.........
            #.........
            ##########",
        );
        assert_eq!(evaluator.score(&grid, 0, 0), 0.0);
    }

    #[test]
    fn test_hole_reduction_needs_clear_and_fewer_holes() {
        let weights = Weights::new().with(WeightKey::HoleReduction, -2.0);
        let evaluator = BoardEvaluator::new(Strategy::Survival, &weights, 0);
        let grid = Grid::from_ascii(
            "
            #.........
            ..........
            #.........
            ",
        ); // one covered hole in column 0

        let holes_now = BoardMetrics::measure(&grid).holes();
        // Clear happened and holes dropped: bonus applies.
        assert_eq!(evaluator.score(&grid, 1, holes_now + 1), -2.0);
        // No clear: no bonus even though holes dropped.
        assert_eq!(evaluator.score(&grid, 0, holes_now + 1), 0.0);
        // Clear but holes unchanged: no bonus.
        assert_eq!(evaluator.score(&grid, 1, holes_now), 0.0);
    }

    #[test]
    fn test_center_clog_only_above_danger_height() {
        let weights = Weights::new().with(WeightKey::CenterClog, 1.0);
        let evaluator = BoardEvaluator::new(Strategy::Survival, &weights, 0);

        let mut tall = String::new();
        for _ in 0..19 {
            tall.push_str("....#.....\n");
        }
        let spike = Grid::from_ascii(&tall); // column 4 height 19 > 18
        assert_eq!(evaluator.score(&spike, 0, 0), 19.0);

        let low = Grid::from_ascii("....#.....\n");
        assert_eq!(evaluator.score(&low, 0, 0), 0.0);
    }
}
