use std::{fmt, ops::RangeInclusive};

use samplab_stats::descriptive::DescriptiveStats;
use statrs::distribution::{Continuous, ContinuousCDF, Exp, Gamma, Normal};

use crate::{params::StudyConfig, statistic::StatisticKind};

/// How the limit curves of the variance and the median are chosen.
#[derive(
    Default, Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::FromStr,
)]
pub enum LimitModel {
    /// Limits from asymptotic theory, see [`LimitDistribution::for_statistic`].
    #[default]
    #[display("asymptotic")]
    Asymptotic,
    /// The variance limit ignores the population kurtosis (`N(σ², 2σ⁴ / (m - 1))`)
    /// and the median limit is a normal fitted to the observed medians.
    #[display("classic")]
    Classic,
}

impl LimitModel {
    /// Returns the limit of `kind`, given the observed statistic `values`.
    ///
    /// Only [`LimitModel::Classic`] looks at `values`, to fit the median
    /// limit. With fewer than two values it falls back to the asymptotic one.
    ///
    /// ```
    /// # use samplab_sampling::{limit::LimitModel, params::StudyConfig, statistic::StatisticKind};
    /// let config = StudyConfig::default();
    /// let medians = [13.6, 13.7, 13.8];
    /// let limit = LimitModel::Classic.limit(StatisticKind::Median, &config, &medians);
    /// assert!((limit.mean() - 13.7).abs() < 1e-12);
    /// assert!((limit.std_dev() - 0.1).abs() < 1e-12);
    /// ```
    #[expect(clippy::cast_precision_loss)]
    #[must_use]
    pub fn limit(
        self,
        kind: StatisticKind,
        config: &StudyConfig,
        values: &[f64],
    ) -> LimitDistribution {
        match (self, kind) {
            (Self::Classic, StatisticKind::Variance) => {
                let sigma2 = config.params().variance();
                let m = config.sample_size() as f64;
                LimitDistribution::Normal {
                    mean: sigma2,
                    std_dev: (2.0 * sigma2 * sigma2 / (m - 1.0)).sqrt(),
                }
            }
            (Self::Classic, StatisticKind::Median) => {
                let fitted = DescriptiveStats::new(values.iter().copied()).and_then(|stats| {
                    let var = stats.sample_variance?;
                    Some(LimitDistribution::Normal {
                        mean: stats.mean,
                        std_dev: var.sqrt(),
                    })
                });
                fitted.unwrap_or_else(|| LimitDistribution::for_statistic(kind, config))
            }
            _ => LimitDistribution::for_statistic(kind, config),
        }
    }
}

/// Theoretical distribution a statistic converges to as the sample size grows.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LimitDistribution {
    Normal { mean: f64, std_dev: f64 },
    Gamma { shape: f64, scale: f64 },
    Exponential { rate: f64 },
}

impl LimitDistribution {
    /// Returns the limit of `kind` for samples of `config.sample_size()` values
    /// drawn from `config.params()`.
    ///
    /// - mean: `N(kθ, kθ² / m)` by the central limit theorem
    /// - variance: `N(σ², σ⁴ (2 / (m - 1) + κ / m))` with excess kurtosis `κ = 6 / k`
    /// - median: `N(ξ, 1 / (4 m f(ξ)²))` with population median `ξ` and density `f`
    /// - `m F(X_(2))`: `Gamma(2, 1)`
    /// - `m (1 - F(X_(m)))`: `Exponential(1)`
    ///
    /// ```
    /// # use samplab_sampling::{limit::LimitDistribution, params::StudyConfig, statistic::StatisticKind};
    /// let config = StudyConfig::default();
    /// let limit = LimitDistribution::for_statistic(StatisticKind::Mean, &config);
    /// assert_eq!(limit.mean(), 14.0);
    /// assert_eq!(
    ///     LimitDistribution::for_statistic(StatisticKind::ScaledMaxSurvival, &config),
    ///     LimitDistribution::Exponential { rate: 1.0 },
    /// );
    /// ```
    #[expect(clippy::cast_precision_loss)]
    #[must_use]
    pub fn for_statistic(kind: StatisticKind, config: &StudyConfig) -> Self {
        let params = config.params();
        let m = config.sample_size() as f64;
        match kind {
            StatisticKind::Mean => Self::Normal {
                mean: params.mean(),
                std_dev: (params.variance() / m).sqrt(),
            },
            StatisticKind::Variance => {
                let sigma2 = params.variance();
                let var = sigma2 * sigma2 * (2.0 / (m - 1.0) + params.excess_kurtosis() / m);
                Self::Normal {
                    mean: sigma2,
                    std_dev: var.sqrt(),
                }
            }
            StatisticKind::Median => {
                let xi = params.median();
                Self::Normal {
                    mean: xi,
                    std_dev: 1.0 / (2.0 * params.pdf(xi) * m.sqrt()),
                }
            }
            StatisticKind::ScaledSecondOrder => Self::Gamma {
                shape: 2.0,
                scale: 1.0,
            },
            StatisticKind::ScaledMaxSurvival => Self::Exponential { rate: 1.0 },
        }
    }

    /// Expected value of the distribution.
    #[must_use]
    pub fn mean(&self) -> f64 {
        match *self {
            Self::Normal { mean, .. } => mean,
            Self::Gamma { shape, scale } => shape * scale,
            Self::Exponential { rate } => rate.recip(),
        }
    }

    /// Standard deviation of the distribution.
    #[must_use]
    pub fn std_dev(&self) -> f64 {
        match *self {
            Self::Normal { std_dev, .. } => std_dev,
            Self::Gamma { shape, scale } => shape.sqrt() * scale,
            Self::Exponential { rate } => rate.recip(),
        }
    }

    /// Probability density at `x`, or NaN when the parameters are invalid.
    ///
    /// ```
    /// # use samplab_sampling::limit::LimitDistribution;
    /// let exp = LimitDistribution::Exponential { rate: 1.0 };
    /// assert_eq!(exp.pdf(0.0), 1.0);
    /// assert_eq!(exp.pdf(-1.0), 0.0);
    /// ```
    #[must_use]
    pub fn pdf(&self, x: f64) -> f64 {
        match self.model() {
            Some(Model::Normal(dist)) => dist.pdf(x),
            Some(Model::Gamma(dist)) => dist.pdf(x),
            Some(Model::Exponential(dist)) => dist.pdf(x),
            None => f64::NAN,
        }
    }

    /// Cumulative distribution function at `x`, or NaN when the parameters are invalid.
    #[must_use]
    pub fn cdf(&self, x: f64) -> f64 {
        match self.model() {
            Some(Model::Normal(dist)) => dist.cdf(x),
            Some(Model::Gamma(dist)) => dist.cdf(x),
            Some(Model::Exponential(dist)) => dist.cdf(x),
            None => f64::NAN,
        }
    }

    fn model(&self) -> Option<Model> {
        let model = match *self {
            Self::Normal { mean, std_dev } => Model::Normal(Normal::new(mean, std_dev).ok()?),
            // statrs parameterizes by rate
            Self::Gamma { shape, scale } => {
                Model::Gamma(Gamma::new(shape, scale.recip()).ok()?)
            }
            Self::Exponential { rate } => Model::Exponential(Exp::new(rate).ok()?),
        };
        Some(model)
    }

    /// Samples the density at `points` evenly spaced positions covering `range`.
    ///
    /// ```
    /// # use samplab_sampling::limit::LimitDistribution;
    /// let curve = LimitDistribution::Exponential { rate: 1.0 }.density_curve(0.0..=10.0, 100);
    /// assert_eq!(curve.len(), 100);
    /// assert_eq!(curve[0], (0.0, 1.0));
    /// assert_eq!(curve[99].0, 10.0);
    /// ```
    #[expect(clippy::cast_precision_loss)]
    #[must_use]
    pub fn density_curve(&self, range: RangeInclusive<f64>, points: usize) -> Vec<(f64, f64)> {
        let (start, end) = range.into_inner();
        match points {
            0 => vec![],
            1 => vec![(start, self.pdf(start))],
            _ => {
                let step = (end - start) / (points - 1) as f64;
                (0..points)
                    .map(|i| {
                        let x = if i + 1 == points {
                            end
                        } else {
                            start + step * i as f64
                        };
                        (x, self.pdf(x))
                    })
                    .collect()
            }
        }
    }
}

#[derive(Debug)]
enum Model {
    Normal(Normal),
    Gamma(Gamma),
    Exponential(Exp),
}

impl fmt::Display for LimitDistribution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::Normal { mean, std_dev } => write!(f, "N({mean:.4}, {std_dev:.4}²)"),
            Self::Gamma { shape, scale } => write!(f, "Gamma({shape}, {scale})"),
            Self::Exponential { rate } => write!(f, "Exp({rate})"),
        }
    }
}
