use std::collections::{HashSet, VecDeque};

use arrayvec::ArrayVec;
use rustris_engine::{Grid, Piece, PieceKind, Rotation, RotationDir};
use serde::{Deserialize, Serialize};

use crate::{
    board_metrics::BoardMetrics,
    evaluator::BoardEvaluator,
    strategy::Strategy,
    weights::{WeightKey, Weights},
};

/// Lookahead contribution weight used when the weight vector has no
/// `lookaheadScore` entry. The one key whose absence does not mean 0.
pub const DEFAULT_LOOKAHEAD_WEIGHT: f32 = 0.8;

/// One input action of the planner's vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub enum Action {
    Left,
    Right,
    SoftDrop,
    RotateCw,
    RotateCcw,
    HardDrop,
}

const ACTIONS: [Action; 6] = [
    Action::Left,
    Action::Right,
    Action::SoftDrop,
    Action::RotateCw,
    Action::RotateCcw,
    Action::HardDrop,
];

/// The planner's answer: an executable action sequence and the resting pose
/// it leads to.
///
/// `target` is absent in the two degenerate cases: no active piece (empty
/// path) and an exhausted search (defensive single hard-drop).
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct MovePlan {
    pub actions: Vec<Action>,
    pub target: Option<Piece>,
}

/// Finds the best resting placement for the active piece.
///
/// Breadth-first traversal of the pose graph: an edge from pose P to P'
/// exists when one action legally transforms P into P'. Poses are
/// deduplicated by `(x, y, rotation)` alone, so every reachable pose is
/// visited exactly once via its shortest action sequence and the search is
/// bounded by the number of reachable poses. Every visited pose that cannot
/// move one row down is a terminal candidate: it is locked on a grid copy,
/// full rows are cleared, and the result is scored (plus the discounted best
/// score the next piece could reach, when its kind is known). The candidate
/// with the minimum total wins; ties keep the earliest-discovered path.
///
/// Deterministic for identical inputs. Never fails: with no active piece it
/// returns an empty plan, and if the queue drains without any terminal
/// candidate it falls back to a single hard-drop.
#[must_use]
pub fn find_best_move(
    grid: &Grid,
    active: Option<Piece>,
    next_kind: Option<PieceKind>,
    strategy: Strategy,
    weights: &Weights,
    drought: u32,
) -> MovePlan {
    let Some(start) = active else {
        return MovePlan {
            actions: Vec::new(),
            target: None,
        };
    };

    let evaluator = BoardEvaluator::new(strategy, weights, drought);
    let lookahead_weight = weights.get_or(WeightKey::LookaheadScore, DEFAULT_LOOKAHEAD_WEIGHT);

    let mut best: Option<(f32, Vec<Action>, Piece)> = None;
    let mut visited = HashSet::new();
    let mut queue = VecDeque::new();
    visited.insert(start.pose());
    queue.push_back((start, Vec::new()));

    while let Some((piece, path)) = queue.pop_front() {
        if grid.is_colliding(piece.down()) {
            let (current, after) = score_placement(grid, piece, &evaluator);
            let total = match next_kind {
                Some(kind) => {
                    current + lookahead_weight * best_next_score(&after, kind, &evaluator)
                }
                None => current,
            };
            if best.as_ref().is_none_or(|(score, ..)| total < *score) {
                let mut actions = path.clone();
                if actions.last() != Some(&Action::HardDrop) {
                    actions.push(Action::HardDrop);
                }
                best = Some((total, actions, piece));
            }
        }

        for (action, successor) in successors(grid, piece) {
            if visited.insert(successor.pose()) {
                let mut successor_path = path.clone();
                successor_path.push(action);
                queue.push_back((successor, successor_path));
            }
        }
    }

    match best {
        Some((_, actions, target)) => MovePlan {
            actions,
            target: Some(target),
        },
        None => MovePlan {
            actions: vec![Action::HardDrop],
            target: None,
        },
    }
}

/// Legal single-action transitions out of a pose.
fn successors(grid: &Grid, piece: Piece) -> ArrayVec<(Action, Piece), 6> {
    ACTIONS
        .iter()
        .filter_map(|&action| apply_action(grid, piece, action).map(|piece| (action, piece)))
        .collect()
}

fn apply_action(grid: &Grid, piece: Piece, action: Action) -> Option<Piece> {
    let moved = match action {
        Action::Left => piece.left(),
        Action::Right => piece.right(),
        Action::SoftDrop => piece.down(),
        Action::RotateCw => return piece.kicked_rotation(grid, RotationDir::Cw),
        Action::RotateCcw => return piece.kicked_rotation(grid, RotationDir::Ccw),
        Action::HardDrop => return Some(piece.dropped(grid)),
    };
    (!grid.is_colliding(moved)).then_some(moved)
}

/// Locks the piece on a copy of the grid, clears full rows and scores the
/// result. Returns the score and the post-clear grid for lookahead use.
fn score_placement(grid: &Grid, piece: Piece, evaluator: &BoardEvaluator<'_>) -> (f32, Grid) {
    let mut sim = grid.clone();
    sim.lock_piece(piece);
    let holes_before_clear = BoardMetrics::measure(&sim).holes();
    let cleared = sim.clear_full_rows();
    (evaluator.score(&sim, cleared, holes_before_clear), sim)
}

/// Best (minimum) score the next piece can reach on the post-clear board.
///
/// Exhaustive over every (rotation, horizontal offset) pair: each candidate
/// is dropped to its resting row, locked, cleared and evaluated. Contributes
/// 0 when no candidate fits.
#[expect(clippy::cast_possible_truncation)]
fn best_next_score(post_clear: &Grid, kind: PieceKind, evaluator: &BoardEvaluator<'_>) -> f32 {
    let mut best: Option<f32> = None;
    for rotation in Rotation::ALL {
        for x in -3..Grid::WIDTH as i16 {
            let piece = Piece::with_pose(kind, rotation, x, 0);
            if post_clear.is_colliding(piece) {
                continue;
            }
            let (score, _) = score_placement(post_clear, piece.dropped(post_clear), evaluator);
            best = Some(best.map_or(score, |b| f32::min(b, score)));
        }
    }
    best.unwrap_or(0.0)
}
