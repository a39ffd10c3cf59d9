//! Employment-type composition of an organisation.

use orgtrace_core::constants::EMPLOYEE_TYPE_ATTRIBUTE;
use orgtrace_core::models::EmploymentType;

use super::MembershipEntry;

/// Share of full-time, part-time and contract rows in an organisation.
/// All zero for an organisation with no employment-type values.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct EmploymentMix {
    pub full_time: f64,
    pub part_time: f64,
    pub contract: f64,
}

impl EmploymentMix {
    pub fn from_values<S: AsRef<str>>(values: &[S]) -> Self {
        let total = values.len();
        if total == 0 {
            return Self::default();
        }
        let (mut full_time, mut part_time, mut contract) = (0usize, 0usize, 0usize);
        for value in values {
            match EmploymentType::parse(value.as_ref()) {
                Some(EmploymentType::FullTime) => full_time += 1,
                Some(EmploymentType::PartTime) => part_time += 1,
                Some(EmploymentType::Contract) => contract += 1,
                None => {}
            }
        }
        let total = total as f64;
        Self {
            full_time: full_time as f64 / total,
            part_time: part_time as f64 / total,
            contract: contract as f64 / total,
        }
    }

    pub fn of(entry: &MembershipEntry) -> Self {
        Self::from_values(entry.attribute(EMPLOYEE_TYPE_ATTRIBUTE))
    }
}

/// `1 - mean(|Δfull|, |Δpart|, |Δcontract|)`: 1.0 for an identical mix.
pub fn composition_ratio_diff(a: &EmploymentMix, b: &EmploymentMix) -> f64 {
    let avg = ((a.full_time - b.full_time).abs()
        + (a.part_time - b.part_time).abs()
        + (a.contract - b.contract).abs())
        / 3.0;
    1.0 - avg
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mix_counts_each_type() {
        let mix = EmploymentMix::from_values(&["full_time", "part_time", "part_time", "contract_employee"]);
        assert!((mix.full_time - 0.25).abs() < 1e-9);
        assert!((mix.part_time - 0.5).abs() < 1e-9);
        assert!((mix.contract - 0.25).abs() < 1e-9);
    }

    #[test]
    fn empty_values_give_zero_mix() {
        let values: [&str; 0] = [];
        assert_eq!(EmploymentMix::from_values(&values), EmploymentMix::default());
    }

    #[test]
    fn identical_mix_scores_one() {
        let a = EmploymentMix::from_values(&["full_time", "part_time"]);
        assert!((composition_ratio_diff(&a, &a) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn opposite_mix_scores_one_third() {
        let a = EmploymentMix::from_values(&["full_time"]);
        let b = EmploymentMix::from_values(&["part_time"]);
        // |1-0| + |0-1| + 0 = 2, mean 2/3.
        assert!((composition_ratio_diff(&a, &b) - 1.0 / 3.0).abs() < 1e-9);
    }
}
