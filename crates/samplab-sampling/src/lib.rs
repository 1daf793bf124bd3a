//! Monte Carlo study of sampling distributions under a gamma population.
//!
//! The study draws many independent samples from Gamma(shape, scale), reduces each
//! sample to five scalar statistics and compares the empirical distribution of
//! every statistic with its theoretical limit:
//!
//! | statistic              | limit                                  |
//! |------------------------|----------------------------------------|
//! | sample mean            | Normal (central limit theorem)         |
//! | sample variance        | Normal                                 |
//! | sample median          | Normal (asymptotic quantile theory)    |
//! | `m * F(X_(2))`         | Gamma(2, 1)                            |
//! | `m * (1 - F(X_(m)))`   | Exponential(1)                         |
//!
//! # Pipeline
//!
//! 1. [`generator::SampleBatch::generate`] draws an `n_samples x sample_size` batch
//! 2. [`statistic::StatisticVectors::compute`] reduces every row to the five statistics
//! 3. [`study::Study::report`] summarizes each statistic vector and tests it against
//!    its [`limit::LimitDistribution`]
//!
//! # Examples
//!
//! ```
//! use rand::SeedableRng as _;
//! use samplab_sampling::{
//!     params::{GammaParams, StudyConfig},
//!     statistic::StatisticKind,
//!     study::Study,
//! };
//!
//! let params = GammaParams::new(14.0, 1.0).unwrap();
//! let config = StudyConfig::new(params, 200, 100).unwrap();
//! let mut rng = rand_pcg::Pcg64Mcg::seed_from_u64(7);
//! let report = Study::new(config).run(&mut rng);
//!
//! let mean = &report.statistic(StatisticKind::Mean).summary;
//! assert!((mean.mean - 14.0).abs() < 0.1);
//! ```

pub mod generator;
pub mod limit;
pub mod params;
pub mod statistic;
pub mod study;
