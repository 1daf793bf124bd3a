use chrono::{DateTime, Utc};
use samplab_sampling::{
    limit::LimitDistribution,
    study::{StatisticReport, StudyReport},
};
use serde::{Deserialize, Serialize};

/// JSON report of a gamma study run.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StudyReportFile {
    pub generated_at: DateTime<Utc>,
    pub config: StudyConfigRecord,
    pub statistics: Vec<StatisticRecord>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StudyConfigRecord {
    pub shape: f64,
    pub scale: f64,
    pub n_samples: usize,
    pub sample_size: usize,
    pub hist_bins: usize,
    /// `asymptotic` or `classic`.
    pub limit_model: String,
    /// `None` when the thread RNG was used.
    pub seed: Option<u64>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StatisticRecord {
    pub id: String,
    pub label: String,
    pub mean: f64,
    pub std_dev: f64,
    pub median: f64,
    pub limit: LimitRecord,
    pub ks: KsRecord,
    pub histogram: Vec<BinRecord>,
}

#[derive(Debug, Clone, Copy, Deserialize, Serialize)]
#[serde(tag = "distribution", rename_all = "snake_case")]
pub enum LimitRecord {
    Normal { mean: f64, std_dev: f64 },
    Gamma { shape: f64, scale: f64 },
    Exponential { rate: f64 },
}

#[derive(Debug, Clone, Copy, Deserialize, Serialize)]
pub struct KsRecord {
    pub n: usize,
    pub statistic: f64,
    pub p_value: f64,
}

#[derive(Debug, Clone, Copy, Deserialize, Serialize)]
pub struct BinRecord {
    pub start: f64,
    pub end: f64,
    pub count: u64,
    pub density: f64,
}

impl StudyReportFile {
    pub fn new(
        report: &StudyReport,
        hist_bins: usize,
        seed: Option<u64>,
        generated_at: DateTime<Utc>,
    ) -> Self {
        let config = report.config();
        Self {
            generated_at,
            config: StudyConfigRecord {
                shape: config.params().shape(),
                scale: config.params().scale(),
                n_samples: config.n_samples(),
                sample_size: config.sample_size(),
                hist_bins,
                limit_model: report.limit_model().to_string(),
                seed,
            },
            statistics: report.statistics().iter().map(StatisticRecord::from).collect(),
        }
    }
}

impl From<&StatisticReport> for StatisticRecord {
    fn from(stat: &StatisticReport) -> Self {
        Self {
            id: stat.kind.id().to_owned(),
            label: stat.kind.label().to_owned(),
            mean: stat.summary.mean,
            std_dev: stat.summary.std_dev,
            median: stat.summary.median,
            limit: stat.limit.into(),
            ks: KsRecord {
                n: stat.fit.n,
                statistic: stat.fit.statistic,
                p_value: stat.fit.p_value,
            },
            histogram: stat
                .histogram
                .bins
                .iter()
                .map(|bin| BinRecord {
                    start: bin.range.start,
                    end: bin.range.end,
                    count: bin.count,
                    density: bin.density,
                })
                .collect(),
        }
    }
}

impl From<LimitDistribution> for LimitRecord {
    fn from(limit: LimitDistribution) -> Self {
        match limit {
            LimitDistribution::Normal { mean, std_dev } => Self::Normal { mean, std_dev },
            LimitDistribution::Gamma { shape, scale } => Self::Gamma { shape, scale },
            LimitDistribution::Exponential { rate } => Self::Exponential { rate },
        }
    }
}
