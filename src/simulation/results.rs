// src/simulation/results.rs
use crate::core::ClassicBit;
use std::collections::BTreeMap;
use std::fmt;

/// The classical bits of a circuit after one run.
///
/// Rendered most-significant first: the highest classical-bit index is the
/// leftmost character, so bits `[c0 = 1, c1 = 0]` display as `"01"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Outcome {
    bits: Vec<ClassicBit>,
}

impl Outcome {
    pub(crate) fn new(bits: Vec<ClassicBit>) -> Self {
        Self { bits }
    }

    /// Bits in register order (`c0` first).
    pub fn bits(&self) -> &[ClassicBit] {
        &self.bits
    }

    pub fn bit(&self, index: usize) -> Option<ClassicBit> {
        self.bits.get(index).copied()
    }

    /// The bits read as an unsigned integer with `c0` as the least
    /// significant bit. `None` if there are more than 64 bits.
    pub fn value(&self) -> Option<u64> {
        if self.bits.len() > 64 {
            return None;
        }
        Some(
            self.bits
                .iter()
                .enumerate()
                .filter(|(_, bit)| bit.is_one())
                .fold(0u64, |acc, (i, _)| acc | (1 << i)),
        )
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for bit in self.bits.iter().rev() {
            write!(f, "{}", bit)?;
        }
        Ok(())
    }
}

/// Histogram of outcomes over many trials, keyed by the outcome string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompoundResult {
    counts: BTreeMap<String, usize>,
}

impl CompoundResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one more occurrence of `outcome`.
    pub fn add(&mut self, outcome: &Outcome) {
        *self.counts.entry(outcome.to_string()).or_insert(0) += 1;
    }

    /// Occurrences of the outcome string `key`; `0` if never seen.
    pub fn count(&self, key: &str) -> usize {
        self.counts.get(key).copied().unwrap_or(0)
    }

    /// Fraction of all trials that produced `key`.
    pub fn frequency(&self, key: &str) -> f64 {
        let total = self.total();
        if total == 0 {
            0.0
        } else {
            self.count(key) as f64 / total as f64
        }
    }

    /// Number of recorded trials.
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    /// Number of distinct outcomes.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Distinct outcomes with their counts, ordered by outcome string.
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.counts.iter().map(|(key, count)| (key.as_str(), *count))
    }

    /// The outcome seen most often; ties go to the smallest outcome string.
    pub fn most_frequent(&self) -> Option<(&str, usize)> {
        self.iter()
            .max_by(|a, b| a.1.cmp(&b.1).then_with(|| b.0.cmp(a.0)))
    }
}

impl FromIterator<Outcome> for CompoundResult {
    fn from_iter<I: IntoIterator<Item = Outcome>>(iter: I) -> Self {
        let mut compound = CompoundResult::new();
        for outcome in iter {
            compound.add(&outcome);
        }
        compound
    }
}

impl fmt::Display for CompoundResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.counts.is_empty() {
            return write!(f, "{{ }}");
        }
        write!(f, "{{ ")?;
        for (i, (key, count)) in self.counts.iter().enumerate() {
            write!(f, "{}\"{}\" : {}", if i > 0 { ", " } else { "" }, key, count)?;
        }
        write!(f, " }}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ClassicBit::{One, Zero};

    #[test]
    fn test_outcome_renders_highest_index_first() {
        let outcome = Outcome::new(vec![One, Zero]);
        assert_eq!(outcome.to_string(), "01");
        assert_eq!(outcome.value(), Some(1));
        assert_eq!(Outcome::new(vec![Zero, One, One]).value(), Some(6));
        assert_eq!(Outcome::new(vec![]).to_string(), "");
    }

    #[test]
    fn test_compound_counts() {
        let result: CompoundResult = [
            Outcome::new(vec![Zero, Zero]),
            Outcome::new(vec![One, One]),
            Outcome::new(vec![One, One]),
        ]
        .into_iter()
        .collect();
        assert_eq!(result.count("11"), 2);
        assert_eq!(result.count("00"), 1);
        assert_eq!(result.count("01"), 0);
        assert_eq!(result.total(), 3);
        assert_eq!(result.len(), 2);
        assert!((result.frequency("11") - 2.0 / 3.0).abs() < 1e-12);
        assert_eq!(result.most_frequent(), Some(("11", 2)));
    }

    #[test]
    fn test_compound_display() {
        assert_eq!(CompoundResult::new().to_string(), "{ }");
        let result: CompoundResult = [Outcome::new(vec![One]), Outcome::new(vec![Zero])]
            .into_iter()
            .collect();
        assert_eq!(result.to_string(), "{ \"0\" : 1, \"1\" : 1 }");
    }

    #[test]
    fn test_most_frequent_tie_prefers_smallest_key() {
        let result: CompoundResult = [Outcome::new(vec![One]), Outcome::new(vec![Zero])]
            .into_iter()
            .collect();
        assert_eq!(result.most_frequent(), Some(("0", 1)));
    }
}
