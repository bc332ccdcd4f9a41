//! Multiplicative weight perturbation.
//!
//! Mutation is sign-preserving and per-coefficient: each non-zero weight is
//! scaled by `1 + p` where `p` is drawn uniformly from `[-f, f]`. Coefficients
//! that are exactly zero are treated as disabled and never re-enabled, and a
//! draw that would flip the sign of a weight is discarded in favor of the
//! original value, so a weight's role (reward vs. penalty) is stable across
//! generations.

use rand::Rng;
use rustris_ai::Weights;

/// Default perturbation factor for one generation step.
pub const DEFAULT_MUTATION_FACTOR: f32 = 0.1;

/// Dampening applied to the perturbation range of negative coefficients.
///
/// Negative weights are rewards; shrinking their range keeps a round of
/// mutation from overshooting toward zero and stalling the sign guard.
const NEGATIVE_RANGE_DIVISOR: f32 = 1.5;

/// Produces a mutated copy of `base`.
///
/// Each coefficient is perturbed independently; there is no crossover and no
/// coupling between coefficients. Zero coefficients stay exactly zero, and the
/// sign of every non-zero coefficient is preserved.
pub fn mutate_weights<R>(base: &Weights, factor: f32, rng: &mut R) -> Weights
where
    R: Rng + ?Sized,
{
    let mut mutated = Weights::new();
    for (key, value) in base.iter() {
        mutated.insert(key, mutate_coefficient(value, factor, rng));
    }
    mutated
}

fn mutate_coefficient<R>(base: f32, factor: f32, rng: &mut R) -> f32
where
    R: Rng + ?Sized,
{
    if base == 0.0 {
        return base;
    }
    let range = if base < 0.0 {
        factor / NEGATIVE_RANGE_DIVISOR
    } else {
        factor
    };
    let perturbation = rng.random_range(-range..=range);
    let mutated = base * (1.0 + perturbation);
    if mutated.signum() == base.signum() {
        mutated
    } else {
        base
    }
}
