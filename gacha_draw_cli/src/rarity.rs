use std::collections::HashSet;

use crate::error::{GachaError, Result};
use crate::record::normalize_label;

/// Rarity tiers and their relative weights.
///
/// Entries keep their declared order. The cumulative walk in
/// [`crate::draw::select_tier`] follows this order, so it decides which
/// roll values map to which tier. The default table declares
/// `N, R, SR, SSR`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RarityWeightTable {
    entries: Vec<(String, u32)>,
}

impl RarityWeightTable {
    pub const DEFAULT: [(&'static str, u32); 4] = [("N", 30), ("R", 60), ("SR", 9), ("SSR", 1)];

    pub fn new<I, S>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (S, u32)>,
        S: AsRef<str>,
    {
        let mut seen = HashSet::new();
        let mut out = Vec::new();
        for (label, weight) in entries {
            let label = normalize_label(label.as_ref());
            if label.is_empty() {
                return Err(GachaError::BlankRarity);
            }
            if weight == 0 {
                return Err(GachaError::InvalidWeight { label, weight });
            }
            if !seen.insert(label.clone()) {
                return Err(GachaError::DuplicateRarity(label));
            }
            out.push((label, weight));
        }
        if out.is_empty() {
            return Err(GachaError::EmptyWeightTable);
        }
        Ok(Self { entries: out })
    }

    /// Weight for `label`, matched after trimming and upper-casing.
    pub fn weight(&self, label: &str) -> Option<u32> {
        let key = normalize_label(label);
        self.entries.iter().find(|(l, _)| *l == key).map(|(_, w)| *w)
    }

    pub fn contains(&self, label: &str) -> bool {
        self.weight(label).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> + '_ {
        self.entries.iter().map(|(l, w)| (l.as_str(), *w))
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.iter().map(|(l, _)| l.as_str())
    }

    pub fn total_weight(&self) -> u64 {
        self.entries.iter().map(|(_, w)| u64::from(*w)).sum()
    }
}

impl Default for RarityWeightTable {
    fn default() -> Self {
        Self {
            entries: Self::DEFAULT
                .iter()
                .map(|(l, w)| (l.to_string(), *w))
                .collect(),
        }
    }
}
