use serde::{Serialize, Deserialize};

use crate::train::argmax;

/// Output class. Declaration order is the order of the network's output units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    Premium,
    Medium,
    Basic,
}

impl Tier {
    pub const ALL: [Tier; 3] = [Tier::Premium, Tier::Medium, Tier::Basic];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Option<Tier> {
        Tier::ALL.get(index).copied()
    }

    pub fn name(self) -> &'static str {
        match self {
            Tier::Premium => "premium",
            Tier::Medium => "medium",
            Tier::Basic => "basic",
        }
    }

    /// Label names positionally aligned with the output units.
    pub fn names() -> Vec<String> {
        Tier::ALL.iter().map(|t| t.name().to_string()).collect()
    }

    pub fn one_hot(self) -> Vec<f64> {
        let mut v = vec![0.0; Tier::ALL.len()];
        v[self.index()] = 1.0;
        v
    }

    /// Highest-scoring tier of an output or label vector.
    pub fn from_scores(scores: &[f64]) -> Option<Tier> {
        if scores.len() != Tier::ALL.len() {
            return None;
        }
        Tier::from_index(argmax(scores))
    }
}

impl std::fmt::Display for Tier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
