//! Elitist single-parent generation driver.
//!
//! A [`Generation`] is one unmutated baseline plus N-1 independent mutations
//! of it. Members play full games externally and report a [`GameOutcome`];
//! fitness is score per cleared line. [`Generation::select_next`] promotes the
//! best member to be the next generation's baseline. There is no
//! recombination and no history beyond the current baseline.

use rand::Rng;
use rustris_ai::Weights;

use crate::mutation;

/// Result of one member's full game, as reported by the external game driver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GameOutcome {
    pub score: f32,
    pub lines: u32,
}

impl GameOutcome {
    /// Fitness of the outcome: score per cleared line.
    ///
    /// A game that cleared no lines has fitness 0 regardless of score, so
    /// members that merely survive without clearing never win selection over
    /// members that clear.
    #[must_use]
    pub fn score_per_line(&self) -> f32 {
        if self.lines == 0 {
            return 0.0;
        }
        #[expect(clippy::cast_precision_loss)]
        let ratio = self.score / self.lines as f32;
        ratio
    }
}

/// One round of candidate weight vectors.
#[derive(Debug, Clone)]
pub struct Generation {
    members: Vec<Weights>,
}

impl Generation {
    /// Builds a generation of `size` members from `baseline`.
    ///
    /// The baseline itself is member 0, unmutated, so a round can never
    /// regress below the fitness already achieved: if every mutation is
    /// worse, selection keeps the baseline.
    ///
    /// # Panics
    ///
    /// Panics if `size` is 0.
    pub fn from_baseline<R>(baseline: &Weights, size: usize, factor: f32, rng: &mut R) -> Self
    where
        R: Rng + ?Sized,
    {
        assert!(size > 0, "a generation needs at least the baseline member");
        let mut members = Vec::with_capacity(size);
        members.push(baseline.clone());
        for _ in 1..size {
            members.push(mutation::mutate_weights(baseline, factor, rng));
        }
        Self { members }
    }

    #[must_use]
    pub fn members(&self) -> &[Weights] {
        &self.members
    }

    /// Picks the next generation's baseline: the member whose outcome has the
    /// best score-per-line ratio.
    ///
    /// Ties keep the earliest member, so the unmutated baseline wins over a
    /// mutation that merely matches it.
    ///
    /// # Panics
    ///
    /// Panics if `outcomes` does not have one entry per member.
    #[must_use]
    pub fn select_next(&self, outcomes: &[GameOutcome]) -> &Weights {
        assert_eq!(
            outcomes.len(),
            self.members.len(),
            "one outcome per member"
        );
        let mut best = 0;
        for (i, outcome) in outcomes.iter().enumerate().skip(1) {
            if outcome.score_per_line() > outcomes[best].score_per_line() {
                best = i;
            }
        }
        &self.members[best]
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng as _;
    use rand_pcg::Pcg64Mcg;
    use rustris_ai::{WeightKey, Weights};

    use crate::mutation::DEFAULT_MUTATION_FACTOR;

    use super::*;

    #[test]
    fn fitness_is_zero_without_cleared_lines() {
        let outcome = GameOutcome {
            score: 12_000.0,
            lines: 0,
        };
        assert_eq!(outcome.score_per_line(), 0.0);
    }

    #[test]
    fn fitness_is_score_per_line() {
        let outcome = GameOutcome {
            score: 900.0,
            lines: 30,
        };
        assert_eq!(outcome.score_per_line(), 30.0);
    }

    #[test]
    fn baseline_is_first_member_and_unmutated() {
        let baseline = Weights::survival_preset();
        let mut rng = Pcg64Mcg::seed_from_u64(10);
        let generation =
            Generation::from_baseline(&baseline, 8, DEFAULT_MUTATION_FACTOR, &mut rng);

        assert_eq!(generation.members().len(), 8);
        assert_eq!(generation.members()[0], baseline);
    }

    #[test]
    fn members_diverge_from_baseline() {
        let baseline = Weights::well_preset();
        let mut rng = Pcg64Mcg::seed_from_u64(11);
        let generation =
            Generation::from_baseline(&baseline, 4, DEFAULT_MUTATION_FACTOR, &mut rng);

        for member in &generation.members()[1..] {
            assert_ne!(*member, baseline);
        }
    }

    #[test]
    fn selects_member_with_best_ratio() {
        let members = [
            Weights::new().with(WeightKey::Holes, 1.0),
            Weights::new().with(WeightKey::Holes, 2.0),
            Weights::new().with(WeightKey::Holes, 3.0),
        ];
        let generation = Generation {
            members: members.to_vec(),
        };
        let outcomes = [
            GameOutcome {
                score: 100.0,
                lines: 10,
            },
            GameOutcome {
                score: 500.0,
                lines: 10,
            },
            GameOutcome {
                score: 300.0,
                lines: 10,
            },
        ];

        let next = generation.select_next(&outcomes);
        assert_eq!(*next, members[1]);
    }

    #[test]
    fn survivor_without_clears_never_beats_a_clearer() {
        let members = [
            Weights::new().with(WeightKey::Holes, 1.0),
            Weights::new().with(WeightKey::Holes, 2.0),
        ];
        let generation = Generation {
            members: members.to_vec(),
        };
        let outcomes = [
            GameOutcome {
                score: 1_000_000.0,
                lines: 0,
            },
            GameOutcome {
                score: 40.0,
                lines: 4,
            },
        ];

        assert_eq!(*generation.select_next(&outcomes), members[1]);
    }

    #[test]
    fn tie_keeps_the_earliest_member() {
        let members = [
            Weights::new().with(WeightKey::Holes, 1.0),
            Weights::new().with(WeightKey::Holes, 2.0),
        ];
        let generation = Generation {
            members: members.to_vec(),
        };
        let outcome = GameOutcome {
            score: 100.0,
            lines: 10,
        };

        assert_eq!(*generation.select_next(&[outcome, outcome]), members[0]);
    }
}
