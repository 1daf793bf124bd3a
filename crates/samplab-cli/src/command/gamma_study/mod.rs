use std::{path::PathBuf, rc::Rc};

use chrono::Utc;
use rand::SeedableRng as _;
use rand_pcg::Pcg64Mcg;
use samplab_sampling::{
    limit::LimitModel,
    params::{
        DEFAULT_N_SAMPLES, DEFAULT_SAMPLE_SIZE, DEFAULT_SCALE, DEFAULT_SHAPE, GammaParams,
        StudyConfig,
    },
    study::{DEFAULT_HIST_BINS, Study},
};

use crate::{schema::study_report::StudyReportFile, util};

mod screens;

/// Significance level reported in the progress log.
const KS_ALPHA: f64 = 0.01;

#[derive(Debug, Clone, PartialEq, clap::Args)]
pub(crate) struct GammaStudyArg {
    /// Shape parameter of the sampled gamma distribution
    #[arg(long, default_value_t = DEFAULT_SHAPE)]
    shape: f64,
    /// Scale parameter of the sampled gamma distribution
    #[arg(long, default_value_t = DEFAULT_SCALE)]
    scale: f64,
    /// Number of independent samples
    #[arg(long, default_value_t = DEFAULT_N_SAMPLES)]
    samples: usize,
    /// Number of values in each sample
    #[arg(long, default_value_t = DEFAULT_SAMPLE_SIZE)]
    sample_size: usize,
    /// Number of histogram bins per statistic
    #[arg(long, default_value_t = DEFAULT_HIST_BINS)]
    bins: usize,
    /// Variance and median limit curves: "asymptotic" or "classic"
    #[arg(long, default_value = "asymptotic")]
    limits: LimitModel,
    /// Seed for a reproducible run; the thread RNG is used when omitted
    #[arg(long)]
    seed: Option<u64>,
    /// Skip the figure and only print the summary lines
    #[arg(long)]
    no_plot: bool,
    /// Write a JSON report to this path
    #[arg(long)]
    report: Option<PathBuf>,
}

impl Default for GammaStudyArg {
    fn default() -> Self {
        Self {
            shape: DEFAULT_SHAPE,
            scale: DEFAULT_SCALE,
            samples: DEFAULT_N_SAMPLES,
            sample_size: DEFAULT_SAMPLE_SIZE,
            bins: DEFAULT_HIST_BINS,
            limits: LimitModel::default(),
            seed: None,
            no_plot: false,
            report: None,
        }
    }
}

pub(crate) fn run(arg: &GammaStudyArg) -> anyhow::Result<()> {
    let GammaStudyArg {
        shape,
        scale,
        samples,
        sample_size,
        bins,
        limits,
        seed,
        no_plot,
        report: report_path,
    } = arg;
    anyhow::ensure!(*bins > 0, "--bins must be at least 1");

    let params = GammaParams::new(*shape, *scale)?;
    let config = StudyConfig::new(params, *samples, *sample_size)?;
    let study = Study::new(config)
        .with_hist_bins(*bins)
        .with_limit_model(*limits);

    eprintln!(
        "Generating {samples} samples of size {sample_size} from Gamma({shape}, {scale})..."
    );
    let batch = match seed {
        Some(seed) => {
            eprintln!("  Seed: {seed}");
            study.generate(&mut Pcg64Mcg::seed_from_u64(*seed))
        }
        None => study.generate(&mut rand::rng()),
    };
    eprintln!("Generated {} values", batch.values().len());

    eprintln!("Computing sample statistics...");
    let vectors = study.compute(&batch);
    drop(batch);
    eprintln!("Statistics computed for {} samples", vectors.len());

    eprintln!("Comparing with {limits} limit distributions...");
    let report = Rc::new(study.report(&vectors));
    for stat in report.statistics() {
        eprintln!(
            "  {:<24} {:<24} KS D={:.4} p={:.4}{}",
            stat.kind.label(),
            stat.limit.to_string(),
            stat.fit.statistic,
            stat.fit.p_value,
            if stat.fit.passes(KS_ALPHA) {
                ""
            } else {
                " (rejected)"
            }
        );
    }

    if let Some(path) = report_path {
        let file = StudyReportFile::new(&report, *bins, *seed, Utc::now());
        util::save_json(&file, path)?;
        eprintln!("Report saved to {}", path.display());
    }

    if !no_plot {
        screens::run_tui(Rc::clone(&report))?;
    }

    for line in report.summary_lines() {
        println!("{line}");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::Parser as _;

    use crate::command::{CommandArgs, Mode};

    use super::*;

    #[test]
    fn test_limits_flag_selects_model() {
        let args =
            CommandArgs::try_parse_from(["samplab", "gamma-study", "--limits", "classic"]).unwrap();
        let Some(Mode::GammaStudy(arg)) = args.mode else {
            panic!("expected gamma-study");
        };
        assert_eq!(arg.limits, LimitModel::Classic);
        assert!(
            CommandArgs::try_parse_from(["samplab", "gamma-study", "--limits", "exact"]).is_err()
        );
    }
}
