//! Size-bucketed threshold lookup.

use orgtrace_core::config::ThresholdRule;
use orgtrace_core::errors::MatchingError;

/// Threshold rules sorted ascending by size bound. Never empty.
#[derive(Debug, Clone)]
pub struct ThresholdTable {
    rules: Vec<ThresholdRule>,
}

impl ThresholdTable {
    /// Sort `rules` by bound. Rules sharing a bound keep their configured order.
    pub fn new(mut rules: Vec<ThresholdRule>) -> Result<Self, MatchingError> {
        if rules.is_empty() {
            return Err(MatchingError::EmptyThresholds);
        }
        rules.sort_by_key(|rule| rule.size);
        Ok(Self { rules })
    }

    /// First rule whose bound is at least `size`; the last rule when `size`
    /// exceeds every bound.
    pub fn get(&self, size: usize) -> &ThresholdRule {
        match self.rules.iter().find(|rule| size <= rule.size) {
            Some(rule) => rule,
            None => &self.rules[self.rules.len() - 1],
        }
    }

    pub fn rules(&self) -> &[ThresholdRule] {
        &self.rules
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> ThresholdTable {
        ThresholdTable::new(vec![
            ThresholdRule::new(20, 0.7, 0.7, "medium"),
            ThresholdRule::new(5, 0.8, 0.8, "small"),
        ])
        .unwrap()
    }

    #[test]
    fn rules_are_sorted_by_bound() {
        let t = table();
        assert_eq!(t.rules()[0].comment, "small");
        assert_eq!(t.rules()[1].comment, "medium");
    }

    #[test]
    fn bound_is_inclusive() {
        let t = table();
        assert_eq!(t.get(5).comment, "small");
        assert_eq!(t.get(6).comment, "medium");
        assert_eq!(t.get(0).comment, "small");
    }

    #[test]
    fn oversize_falls_back_to_last_rule() {
        assert_eq!(table().get(10_000).comment, "medium");
    }

    #[test]
    fn empty_rules_are_rejected() {
        assert!(matches!(
            ThresholdTable::new(Vec::new()),
            Err(MatchingError::EmptyThresholds)
        ));
    }
}
