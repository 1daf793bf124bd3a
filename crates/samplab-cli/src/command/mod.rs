use clap::{Parser, Subcommand};

use self::{bmi::BmiArg, gamma_study::GammaStudyArg};

mod bmi;
mod gamma_study;

#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct CommandArgs {
    /// What to run; defaults to the gamma study
    #[command(subcommand)]
    mode: Option<Mode>,
}

#[derive(Debug, Clone, Subcommand)]
enum Mode {
    /// Compare sampling distributions of gamma-sample statistics with their limits
    GammaStudy(#[clap(flatten)] GammaStudyArg),
    /// Summarize BMI by sex and smoking status
    Bmi(#[clap(flatten)] BmiArg),
}

pub fn run() -> anyhow::Result<()> {
    let args = CommandArgs::parse();
    match args
        .mode
        .unwrap_or(Mode::GammaStudy(GammaStudyArg::default()))
    {
        Mode::GammaStudy(arg) => gamma_study::run(&arg)?,
        Mode::Bmi(arg) => bmi::run(&arg)?,
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory as _;

    use super::*;

    #[test]
    fn test_command_is_well_formed() {
        CommandArgs::command().debug_assert();
    }

    #[test]
    fn test_gamma_study_defaults() {
        let args = CommandArgs::try_parse_from(["samplab", "gamma-study"]).unwrap();
        let Some(Mode::GammaStudy(arg)) = args.mode else {
            panic!("expected gamma-study");
        };
        assert_eq!(arg, GammaStudyArg::default());
    }
}
