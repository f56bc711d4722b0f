use std::path::PathBuf;

use clap::builder::RangedU64ValueParser;
use fitplan_engine::{Catalog, Goal, GoalProfile, PlanSeed, Schedule};
use fitplan_training::genetic::{
    GeneticAlgorithm, GeneticAlgorithmParams, ResultPolicy, TrainingOutcome,
};
use rand::Rng as _;

use crate::{
    schema::workout_plan::WorkoutPlan,
    util::{self, Output},
};

const MAX_POPULATION: u64 = 10_000;
const MAX_GENERATIONS: u64 = 100_000;

#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub(crate) enum ResultArg {
    /// Best survivor entering the last generation
    #[default]
    LastSurvivor,
    /// Best plan scored at any point of the search
    BestEver,
}

impl From<ResultArg> for ResultPolicy {
    fn from(arg: ResultArg) -> Self {
        match arg {
            ResultArg::LastSurvivor => ResultPolicy::LastSurvivor,
            ResultArg::BestEver => ResultPolicy::BestEver,
        }
    }
}

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct SearchArg {
    /// Training goal: cut, bulk or maintain
    #[arg(long)]
    goal: Goal,
    /// Training days per week
    #[arg(long, value_parser = clap::value_parser!(u8).range(1..=7))]
    days: u8,
    /// Random seed as 32 hex characters (random if omitted)
    #[arg(long)]
    seed: Option<PlanSeed>,
    /// Number of plans per generation [default: 20]
    #[arg(long, value_parser = RangedU64ValueParser::<usize>::new().range(2..=MAX_POPULATION))]
    population: Option<usize>,
    /// Number of generations [default: 50]
    #[arg(long, value_parser = RangedU64ValueParser::<usize>::new().range(0..=MAX_GENERATIONS))]
    generations: Option<usize>,
    /// Probability of mutating a newly bred plan [default: 0.2]
    #[arg(long)]
    mutation_rate: Option<f64>,
    /// Which plan to return
    #[arg(long, value_enum, default_value_t)]
    result: ResultArg,
    /// Exercise catalog JSON file (built-in table if omitted)
    #[arg(long)]
    catalog: Option<PathBuf>,
    /// Print fitness statistics for every generation
    #[arg(long)]
    verbose: bool,
}

impl SearchArg {
    pub(crate) fn goal(&self) -> Goal {
        self.goal
    }

    fn params(&self) -> GeneticAlgorithmParams {
        let default = GeneticAlgorithmParams::default();
        GeneticAlgorithmParams {
            population_size: self.population.unwrap_or(default.population_size),
            generations: self.generations.unwrap_or(default.generations),
            mutation_rate: self.mutation_rate.unwrap_or(default.mutation_rate),
            result_policy: self.result.into(),
        }
    }
}

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct PlanArg {
    #[clap(flatten)]
    search: SearchArg,
    /// Output file path
    #[arg(long)]
    output: Option<PathBuf>,
}

#[derive(Debug)]
pub(crate) struct SearchResult {
    pub profile: GoalProfile,
    pub seed: PlanSeed,
    pub outcome: TrainingOutcome,
}

pub(crate) fn search(arg: &SearchArg) -> anyhow::Result<SearchResult> {
    let catalog = util::load_catalog(arg.catalog.as_ref())?;
    let profile = GoalProfile::new(arg.goal, arg.days.into())?;
    let seed = arg.seed.unwrap_or_else(|| rand::rng().random());
    let params = arg.params();
    log::info!("searching plan for {profile:?} with seed {seed} and {params:?}");

    let outcome = run_search(&catalog, profile, params, seed)?;
    if arg.verbose {
        for stats in &outcome.history {
            let fitness = &stats.fitness;
            eprintln!(
                "Generation #{:2}: max {:4} / median {:4} / mean {:7.2} / min {:4}",
                stats.generation, fitness.max, fitness.median, fitness.mean, fitness.min
            );
        }
    }

    Ok(SearchResult {
        profile,
        seed,
        outcome,
    })
}

fn run_search(
    catalog: &Catalog,
    profile: GoalProfile,
    params: GeneticAlgorithmParams,
    seed: PlanSeed,
) -> anyhow::Result<TrainingOutcome> {
    let ga = GeneticAlgorithm::new(catalog, profile, params)?;
    Ok(ga.run(&mut seed.rng())?)
}

/// Formats the weekly plan, one line per day.
pub(crate) fn format_days(schedule: &Schedule) -> Vec<String> {
    schedule
        .days()
        .iter()
        .enumerate()
        .map(|(i, day)| {
            let names = day.names().collect::<Vec<_>>();
            format!("Day {}: {}", i + 1, names.join(", "))
        })
        .collect()
}

pub(crate) fn run(arg: &PlanArg) -> anyhow::Result<()> {
    let PlanArg { search: search_arg, output } = arg;
    let SearchResult {
        profile,
        seed,
        outcome,
    } = search(search_arg)?;
    let best = &outcome.best;

    eprintln!("Plan search completed.");
    eprintln!("  Goal: {}", profile.goal());
    eprintln!("  Seed: {seed}");
    eprintln!("  Fitness: {}", best.fitness());
    for line in format_days(best) {
        eprintln!("  {line}");
    }

    let plan = WorkoutPlan::new(&profile, seed, best);
    Output::save_json(&plan, output.clone())?;
    if let Some(path) = &output {
        eprintln!("Plan saved to {}", path.display());
    }

    Ok(())
}
