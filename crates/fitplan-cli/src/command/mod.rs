use clap::{Parser, Subcommand};

use self::{advise::AdviseArg, catalog::CatalogArg, nutrition::NutritionArg, plan::PlanArg};

mod advise;
mod catalog;
mod nutrition;
mod plan;

#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct CommandArgs {
    /// What mode to run the program in
    #[command(subcommand)]
    mode: Mode,
}

#[derive(Debug, Clone, Subcommand)]
enum Mode {
    /// Search a weekly workout plan with a genetic algorithm
    Plan(#[clap(flatten)] PlanArg),
    /// Compute daily calorie and macronutrient targets
    Nutrition(#[clap(flatten)] NutritionArg),
    /// Compute nutrition targets and a workout plan for one person
    Advise(#[clap(flatten)] AdviseArg),
    /// Print the exercise catalog as JSON
    Catalog(#[clap(flatten)] CatalogArg),
}

pub fn run() -> anyhow::Result<()> {
    let args = CommandArgs::parse();
    match args.mode {
        Mode::Plan(arg) => plan::run(&arg)?,
        Mode::Nutrition(arg) => nutrition::run(&arg),
        Mode::Advise(arg) => advise::run(&arg)?,
        Mode::Catalog(arg) => catalog::run(&arg)?,
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory as _;

    use super::*;

    #[test]
    fn test_command_definition() {
        CommandArgs::command().debug_assert();
    }

    #[test]
    fn test_parse_plan_arguments() {
        let args = CommandArgs::try_parse_from([
            "fitplan",
            "plan",
            "--goal",
            "bulk",
            "--days",
            "4",
            "--seed",
            "000000000000000000000000000000ff",
            "--result",
            "best-ever",
        ])
        .unwrap();
        assert!(matches!(args.mode, Mode::Plan(_)));
    }

    #[test]
    fn test_reject_invalid_arguments() {
        let base = ["fitplan", "plan", "--goal"];
        let parse = |rest: &[&str]| {
            CommandArgs::try_parse_from(base.iter().chain(rest).copied()).is_ok()
        };
        assert!(parse(&["cut", "--days", "3"]));
        assert!(!parse(&["shred", "--days", "3"]));
        assert!(!parse(&["cut", "--days", "0"]));
        assert!(!parse(&["cut", "--days", "8"]));
        assert!(!parse(&["cut", "--days", "3", "--seed", "xyz"]));
        assert!(parse(&["cut", "--days", "3", "--population", "10000"]));
        assert!(!parse(&["cut", "--days", "3", "--population", "1"]));
        assert!(!parse(&["cut", "--days", "3", "--population", "18446744073709551615"]));
        assert!(parse(&["cut", "--days", "3", "--generations", "0"]));
        assert!(!parse(&["cut", "--days", "3", "--generations", "100001"]));
        assert!(!parse(&["cut", "--days", "3", "--generations", "18446744073709551615"]));
    }
}
