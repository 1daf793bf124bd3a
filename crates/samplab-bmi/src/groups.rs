use std::fmt;

use samplab_stats::{descriptive, quantile};

use crate::record::{BmiRecord, Sex, Smoker};

/// A sex/smoking-status subgroup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GroupKey {
    pub sex: Sex,
    pub smoker: Smoker,
}

impl GroupKey {
    /// All four subgroups, men first and smokers first within each sex.
    pub const ALL: [Self; 4] = [
        Self::new(Sex::Male, Smoker::Yes),
        Self::new(Sex::Male, Smoker::No),
        Self::new(Sex::Female, Smoker::Yes),
        Self::new(Sex::Female, Smoker::No),
    ];

    #[must_use]
    pub const fn new(sex: Sex, smoker: Smoker) -> Self {
        Self { sex, smoker }
    }

    #[must_use]
    pub fn matches(self, record: &BmiRecord) -> bool {
        record.sex == self.sex && record.smoker == self.smoker
    }
}

impl fmt::Display for GroupKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sex = match self.sex {
            Sex::Male => "men",
            Sex::Female => "women",
        };
        match self.smoker {
            Smoker::Yes => write!(f, "smoking {sex}"),
            Smoker::No => write!(f, "non-smoking {sex}"),
        }
    }
}

/// Number of records of the given sex and smoking status.
///
/// ```
/// # use samplab_bmi::{groups, record::{BmiRecord, Sex, Smoker}};
/// let records = [
///     BmiRecord { sex: Sex::Male, smoker: Smoker::Yes, bmi: 30.0 },
///     BmiRecord { sex: Sex::Male, smoker: Smoker::No, bmi: 25.0 },
/// ];
/// assert_eq!(groups::count(&records, Sex::Male, Smoker::Yes), 1);
/// assert_eq!(groups::count(&records, Sex::Female, Smoker::No), 0);
/// ```
#[must_use]
pub fn count(records: &[BmiRecord], sex: Sex, smoker: Smoker) -> usize {
    let key = GroupKey::new(sex, smoker);
    records.iter().filter(|r| key.matches(r)).count()
}

/// BMI values of one sex, in record order.
#[must_use]
pub fn bmi_by_sex(records: &[BmiRecord], sex: Sex) -> Vec<f64> {
    records
        .iter()
        .filter(|r| r.sex == sex)
        .map(|r| r.bmi)
        .collect()
}

/// BMI values of one subgroup, in record order.
#[must_use]
pub fn bmi_by_group(records: &[BmiRecord], key: GroupKey) -> Vec<f64> {
    records
        .iter()
        .filter(|r| key.matches(r))
        .map(|r| r.bmi)
        .collect()
}

/// BMI statistics of one subgroup.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GroupSummary {
    pub key: GroupKey,
    pub count: usize,
    /// NaN for an empty group.
    pub mean: f64,
    /// Bessel-corrected; NaN with fewer than two records.
    pub variance: f64,
    pub median: f64,
    /// Linearly interpolated 0.6-quantile.
    pub quantile_60: f64,
}

impl GroupSummary {
    #[must_use]
    pub fn from_records(records: &[BmiRecord], key: GroupKey) -> Self {
        let mut values = bmi_by_group(records, key);
        values.sort_unstable_by(f64::total_cmp);
        Self {
            key,
            count: values.len(),
            mean: descriptive::mean(&values),
            variance: descriptive::sample_variance(&values),
            median: quantile::quantile_sorted(&values, 0.5),
            quantile_60: quantile::quantile_sorted(&values, 0.6),
        }
    }

    /// Summaries of all four subgroups in [`GroupKey::ALL`] order.
    #[must_use]
    pub fn all(records: &[BmiRecord]) -> [Self; 4] {
        GroupKey::ALL.map(|key| Self::from_records(records, key))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(sex: Sex, smoker: Smoker, bmi: f64) -> BmiRecord {
        BmiRecord { sex, smoker, bmi }
    }

    fn sample() -> Vec<BmiRecord> {
        vec![
            record(Sex::Male, Smoker::Yes, 30.0),
            record(Sex::Male, Smoker::Yes, 34.0),
            record(Sex::Male, Smoker::Yes, 32.0),
            record(Sex::Male, Smoker::No, 25.0),
            record(Sex::Female, Smoker::No, 22.0),
            record(Sex::Female, Smoker::No, 24.0),
            record(Sex::Female, Smoker::Yes, 28.0),
        ]
    }

    #[test]
    fn test_counts() {
        let records = sample();
        assert_eq!(count(&records, Sex::Male, Smoker::Yes), 3);
        assert_eq!(count(&records, Sex::Female, Smoker::No), 2);
        let total: usize = GroupKey::ALL
            .iter()
            .map(|k| count(&records, k.sex, k.smoker))
            .sum();
        assert_eq!(total, records.len());
    }

    #[test]
    fn test_group_summary() {
        let summary =
            GroupSummary::from_records(&sample(), GroupKey::new(Sex::Male, Smoker::Yes));
        assert_eq!(summary.count, 3);
        assert_eq!(summary.mean, 32.0);
        assert_eq!(summary.variance, 4.0);
        assert_eq!(summary.median, 32.0);
        // position 0.6 * 2 = 1.2 between 32 and 34
        assert!((summary.quantile_60 - 32.4).abs() < 1e-12);
    }

    #[test]
    fn test_single_record_group_has_nan_variance() {
        let summary = GroupSummary::from_records(&sample(), GroupKey::new(Sex::Male, Smoker::No));
        assert_eq!(summary.count, 1);
        assert_eq!(summary.mean, 25.0);
        assert!(summary.variance.is_nan());
        assert_eq!(summary.quantile_60, 25.0);
    }

    #[test]
    fn test_empty_group() {
        let summary = GroupSummary::from_records(&[], GroupKey::new(Sex::Female, Smoker::Yes));
        assert_eq!(summary.count, 0);
        assert!(summary.mean.is_nan());
        assert!(summary.median.is_nan());
    }

    #[test]
    fn test_bmi_by_sex_keeps_order() {
        assert_eq!(bmi_by_sex(&sample(), Sex::Female), vec![22.0, 24.0, 28.0]);
    }

    #[test]
    fn test_group_display() {
        assert_eq!(GroupKey::ALL[0].to_string(), "smoking men");
        assert_eq!(GroupKey::ALL[3].to_string(), "non-smoking women");
    }
}
