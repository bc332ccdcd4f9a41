use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Name of a heuristic term.
///
/// The survival and well schemas overlap: `aggregateHeight`, `holes`,
/// `bumpiness` and `lookaheadScore` appear in both with mode-specific
/// meaning, the rest belong to one schema each.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize, Serialize,
)]
#[serde(rename_all = "camelCase")]
pub enum WeightKey {
    AggregateHeight,
    CompletedLines,
    Holes,
    Bumpiness,
    HoleReduction,
    CenterClog,
    WellClogs,
    LineClearBonus,
    DroughtPenalty,
    LookaheadScore,
}

/// A named weight vector: heuristic term -> coefficient.
///
/// Scores are minimized, so penalties carry positive coefficients and rewards
/// negative ones. A missing key reads as coefficient 0 and disables the term;
/// it is never an error. Serializes as a flat JSON object keyed by the
/// camelCase term names, which is the on-disk format evolved weights are
/// exchanged in.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(transparent)]
pub struct Weights(BTreeMap<WeightKey, f32>);

impl Weights {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insertion, used by the presets and tests.
    #[must_use]
    pub fn with(mut self, key: WeightKey, value: f32) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: WeightKey, value: f32) {
        self.0.insert(key, value);
    }

    /// Coefficient for a term; 0 when the key is absent.
    #[must_use]
    pub fn get(&self, key: WeightKey) -> f32 {
        self.0.get(&key).copied().unwrap_or(0.0)
    }

    /// Coefficient for a term with an explicit fallback, used for the
    /// lookahead weight whose absence means 0.8 rather than 0.
    #[must_use]
    pub fn get_or(&self, key: WeightKey, default: f32) -> f32 {
        self.0.get(&key).copied().unwrap_or(default)
    }

    pub fn iter(&self) -> impl Iterator<Item = (WeightKey, f32)> + '_ {
        self.0.iter().map(|(&key, &value)| (key, value))
    }

    /// Default seed for the survival strategy, tuned by evolution runs.
    #[must_use]
    pub fn survival_preset() -> Self {
        Self::new()
            .with(WeightKey::AggregateHeight, 0.510_066)
            .with(WeightKey::CompletedLines, -0.760_666)
            .with(WeightKey::Holes, 0.356_63)
            .with(WeightKey::Bumpiness, 0.184_483)
            .with(WeightKey::HoleReduction, -0.85)
            .with(WeightKey::CenterClog, 0.24)
            .with(WeightKey::LookaheadScore, 0.8)
    }

    /// Default seed for the well strategies, tuned by evolution runs.
    #[must_use]
    pub fn well_preset() -> Self {
        Self::new()
            .with(WeightKey::Holes, 3.85)
            .with(WeightKey::Bumpiness, 0.34)
            .with(WeightKey::AggregateHeight, 0.46)
            .with(WeightKey::WellClogs, 2.6)
            .with(WeightKey::LineClearBonus, -1.4)
            .with(WeightKey::DroughtPenalty, 0.06)
            .with(WeightKey::LookaheadScore, 0.8)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_key_reads_as_zero() {
        let weights = Weights::new().with(WeightKey::Holes, 1.5);
        assert_eq!(weights.get(WeightKey::Holes), 1.5);
        assert_eq!(weights.get(WeightKey::Bumpiness), 0.0);
        assert_eq!(weights.get_or(WeightKey::LookaheadScore, 0.8), 0.8);
    }

    #[test]
    fn test_presets_disagree_on_schema() {
        let survival = Weights::survival_preset();
        let well = Weights::well_preset();
        assert!(survival.get(WeightKey::CompletedLines) != 0.0);
        assert_eq!(survival.get(WeightKey::WellClogs), 0.0);
        assert!(well.get(WeightKey::WellClogs) != 0.0);
        assert_eq!(well.get(WeightKey::CompletedLines), 0.0);
    }

    #[test]
    fn test_serializes_as_camel_case_object() {
        let weights = Weights::new()
            .with(WeightKey::AggregateHeight, 0.5)
            .with(WeightKey::LineClearBonus, -1.25);
        let json = serde_json::to_string(&weights).unwrap();
        assert_eq!(json, r#"{"aggregateHeight":0.5,"lineClearBonus":-1.25}"#);

        let parsed: Weights = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, weights);
    }

    #[test]
    fn test_preset_round_trips_through_json() {
        let weights = Weights::well_preset();
        let json = serde_json::to_string(&weights).unwrap();
        let parsed: Weights = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, weights);
    }
}
