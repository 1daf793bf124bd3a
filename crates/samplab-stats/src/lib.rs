//! Statistical building blocks for the samplab studies.
//!
//! This crate provides the summaries and comparisons shared by the Monte Carlo
//! study and the BMI report:
//!
//! - **Descriptive statistics**: mean, median, population and Bessel-corrected variance
//! - **Quantiles**: linear interpolation between order statistics
//! - **Histograms**: equal-width bins normalized to a probability density
//! - **Empirical CDF**: step function of a dataset
//! - **Box plots**: quartiles, Tukey whiskers and outliers
//! - **Goodness of fit**: one-sample Kolmogorov-Smirnov test
//!
//! # Modules
//!
//! - [`descriptive`]: Descriptive statistics for summarizing datasets
//! - [`quantile`]: Quantile computation and storage
//! - [`histogram`]: Density histograms
//! - [`ecdf`]: Empirical cumulative distribution functions
//! - [`boxplot`]: Five-number summaries for box plots
//! - [`goodness_of_fit`]: Kolmogorov-Smirnov test against a theoretical CDF
//!
//! # Examples
//!
//! ## Computing descriptive statistics
//!
//! ```
//! use samplab_stats::descriptive::DescriptiveStats;
//!
//! let values = [1.0, 2.0, 3.0, 4.0, 5.0];
//! let stats = DescriptiveStats::new(values).unwrap();
//! assert_eq!(stats.mean, 3.0);
//! assert_eq!(stats.sample_variance, Some(2.5));
//! ```
//!
//! ## Computing quantiles
//!
//! ```
//! use samplab_stats::quantile::quantile;
//!
//! let values = [1.0, 2.0, 3.0, 4.0];
//! assert_eq!(quantile(&values, 0.5), 2.5);
//! ```
//!
//! ## Testing a fit
//!
//! ```
//! use samplab_stats::goodness_of_fit::KsTest;
//!
//! let values = [0.1, 0.3, 0.5, 0.7, 0.9];
//! let test = KsTest::one_sample(&values, |x| x.clamp(0.0, 1.0));
//! assert!(test.passes(0.05));
//! ```

pub mod boxplot;
pub mod descriptive;
pub mod ecdf;
pub mod goodness_of_fit;
pub mod histogram;
pub mod quantile;
