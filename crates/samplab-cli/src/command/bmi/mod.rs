use std::path::PathBuf;

use samplab_bmi::{
    groups::{self, GroupSummary},
    record::{self, Sex, Smoker},
};

use crate::util;

use self::screens::BmiFigures;

mod screens;

/// Bins shared by both sexes in the histogram figure.
const DEFAULT_BINS: usize = 20;

#[derive(Debug, Clone, PartialEq, clap::Args)]
pub(crate) struct BmiArg {
    /// Dataset CSV with sex, smoker and bmi columns
    #[arg(default_value = record::DEFAULT_PATH)]
    path: PathBuf,
    /// Number of histogram bins
    #[arg(long, default_value_t = DEFAULT_BINS)]
    bins: usize,
    /// Skip the figures and only print the statistics
    #[arg(long)]
    no_plot: bool,
}

pub(crate) fn run(arg: &BmiArg) -> anyhow::Result<()> {
    let BmiArg {
        path,
        bins,
        no_plot,
    } = arg;
    anyhow::ensure!(*bins > 0, "--bins must be at least 1");

    eprintln!("Loading BMI records from {}...", path.display());
    let records = util::read_bmi_file(path)?;
    eprintln!("Loaded {} records", records.len());

    println!(
        "Smoking men: {}",
        groups::count(&records, Sex::Male, Smoker::Yes)
    );
    println!(
        "Non-smoking women: {}",
        groups::count(&records, Sex::Female, Smoker::No)
    );

    for summary in GroupSummary::all(&records) {
        println!();
        println!(
            "Statistics for {}, smoker: {} ({} records)",
            summary.key.sex, summary.key.smoker, summary.count
        );
        println!("Mean: {}", summary.mean);
        println!("Variance: {}", summary.variance);
        println!("Median: {}", summary.median);
        println!("Quantile 3/5: {}", summary.quantile_60);
    }

    if !no_plot {
        screens::run_tui(BmiFigures::new(&records, *bins))?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::Parser as _;

    use crate::command::{CommandArgs, Mode};

    use super::*;

    #[test]
    fn test_path_defaults_to_dataset_name() {
        let args = CommandArgs::try_parse_from(["samplab", "bmi"]).unwrap();
        let Some(Mode::Bmi(arg)) = args.mode else {
            panic!("expected bmi");
        };
        assert_eq!(arg.path, PathBuf::from(record::DEFAULT_PATH));
        assert_eq!(arg.bins, DEFAULT_BINS);
        assert!(!arg.no_plot);
    }

    #[test]
    fn test_explicit_path_and_flags() {
        let args =
            CommandArgs::try_parse_from(["samplab", "bmi", "data.csv", "--bins", "7", "--no-plot"])
                .unwrap();
        let Some(Mode::Bmi(arg)) = args.mode else {
            panic!("expected bmi");
        };
        assert_eq!(
            arg,
            BmiArg {
                path: PathBuf::from("data.csv"),
                bins: 7,
                no_plot: true,
            }
        );
    }
}
