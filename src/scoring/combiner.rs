use crate::model::{ConsumerPolicy, ScoreBreakdown, Weights};

#[derive(Debug, Clone, Copy, PartialEq)]
/// How per-scorer outputs fold into one final score.
pub enum CombineMode<'a> {
    /// Arithmetic mean over all scorers (zero when there are none).
    Average,
    /// Sum of `output * weight` over scorers named in the mapping.
    Weighted(&'a Weights),
}

impl<'a> CombineMode<'a> {
    /// Weighted when the policy carries a non-empty weight mapping, average otherwise.
    pub fn for_policy(policy: &'a ConsumerPolicy) -> Self {
        match policy.weights() {
            Some(weights) => CombineMode::Weighted(weights),
            None => CombineMode::Average,
        }
    }

    pub fn combine(&self, components: &ScoreBreakdown) -> f64 {
        match self {
            CombineMode::Average => {
                if components.is_empty() {
                    return 0.0;
                }
                components.values().sum::<f64>() / components.len() as f64
            }
            CombineMode::Weighted(weights) => components
                .iter()
                .filter_map(|(name, score)| weights.get(*name).map(|weight| score * weight))
                .sum(),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CombineMode::Average => "average",
            CombineMode::Weighted(_) => "weighted",
        }
    }
}
