use fitplan_engine::Goal;

use crate::{
    command::{
        nutrition::{self, BodyArg},
        plan::{self, SearchArg, SearchResult},
    },
    model::nutrition::NutritionTarget,
};

const RULE: &str = "------------------------------------------------------------";

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct AdviseArg {
    /// Name shown in the report
    #[arg(long)]
    name: String,
    #[clap(flatten)]
    body: BodyArg,
    #[clap(flatten)]
    search: SearchArg,
}

fn goal_label(goal: Goal) -> String {
    goal.to_string().to_uppercase()
}

pub(crate) fn run(arg: &AdviseArg) -> anyhow::Result<()> {
    let goal = arg.search.goal();
    println!("{RULE}");
    println!("PROCESSING PROFILE: {} | GOAL: {}", arg.name, goal_label(goal));

    let target = NutritionTarget::calculate(&arg.body.profile(), goal);
    for line in nutrition::format_target(&target) {
        println!(" > {line}");
    }

    println!(" > Optimizing Workout Program (Genetic Algorithm Running)...");
    let SearchResult { seed, outcome, .. } = plan::search(&arg.search)?;
    let best = &outcome.best;
    println!(" > Program Fitness Score: {}/100", best.fitness());
    println!(" > Seed: {seed}");
    println!(" > Weekly Plan:");
    for line in plan::format_days(best) {
        println!("   {line}");
    }
    println!("{RULE}");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_goal_label() {
        assert_eq!(goal_label(Goal::Maintain), "MAINTAIN");
    }
}
