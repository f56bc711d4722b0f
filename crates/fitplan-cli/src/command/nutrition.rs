use fitplan_engine::Goal;

use crate::{
    model::nutrition::{BodyProfile, Gender, NutritionTarget},
    util,
};

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct BodyArg {
    /// Age in years
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..=150))]
    age: u32,
    /// Gender: male or female
    #[arg(long)]
    gender: Gender,
    /// Body weight in kilograms
    #[arg(long, value_parser = util::parse_positive)]
    weight: f64,
    /// Height in centimeters
    #[arg(long, value_parser = util::parse_positive)]
    height: f64,
}

impl BodyArg {
    pub(crate) fn profile(&self) -> BodyProfile {
        BodyProfile {
            age: self.age,
            gender: self.gender,
            weight_kg: self.weight,
            height_cm: self.height,
        }
    }
}

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct NutritionArg {
    #[clap(flatten)]
    body: BodyArg,
    /// Training goal: cut, bulk or maintain
    #[arg(long)]
    goal: Goal,
}

pub(crate) fn format_target(target: &NutritionTarget) -> [String; 2] {
    [
        format!("Nutrition Target: {} kcal", target.calories),
        format!(
            "Macros: Protein: {}g | Carb: {}g | Fat: {}g",
            target.protein_g, target.carb_g, target.fat_g
        ),
    ]
}

pub(crate) fn run(arg: &NutritionArg) {
    let target = NutritionTarget::calculate(&arg.body.profile(), arg.goal);
    for line in format_target(&target) {
        println!("{line}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_target() {
        let target = NutritionTarget {
            calories: 2259,
            protein_g: 225,
            carb_g: 169,
            fat_g: 75,
        };
        assert_eq!(
            format_target(&target),
            [
                "Nutrition Target: 2259 kcal",
                "Macros: Protein: 225g | Carb: 169g | Fat: 75g"
            ]
        );
    }
}
