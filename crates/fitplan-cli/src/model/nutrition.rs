//! Daily calorie and macronutrient targets.
//!
//! ```text
//! BMR (Mifflin-St Jeor) = 10 × weight + 6.25 × height - 5 × age + 5    (male)
//!                       = 10 × weight + 6.25 × height - 5 × age - 161  (female)
//! TDEE     = BMR × 1.55  (moderate activity)
//! calories = TDEE - 500 (cut) | TDEE + 500 (bulk) | TDEE (maintain)
//! grams    = calories × share / 4 (protein, carb) | / 9 (fat)
//! ```
//!
//! All results are truncated toward zero.

use fitplan_engine::Goal;
use serde::Serialize;

const ACTIVITY_MULTIPLIER: f64 = 1.55;
const GOAL_CALORIE_OFFSET: f64 = 500.0;
const KCAL_PER_GRAM_PROTEIN: f64 = 4.0;
const KCAL_PER_GRAM_CARB: f64 = 4.0;
const KCAL_PER_GRAM_FAT: f64 = 9.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::FromStr)]
pub enum Gender {
    #[display("male")]
    Male,
    #[display("female")]
    Female,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BodyProfile {
    pub age: u32,
    pub gender: Gender,
    pub weight_kg: f64,
    pub height_cm: f64,
}

impl BodyProfile {
    /// Basal metabolic rate in kcal per day.
    #[must_use]
    pub fn basal_metabolic_rate(&self) -> f64 {
        let base = 10.0 * self.weight_kg + 6.25 * self.height_cm - 5.0 * f64::from(self.age);
        match self.gender {
            Gender::Male => base + 5.0,
            Gender::Female => base - 161.0,
        }
    }
}

/// Share of calories per macronutrient.
#[derive(Debug, Clone, Copy, PartialEq)]
struct MacroSplit {
    protein: f64,
    carb: f64,
    fat: f64,
}

impl MacroSplit {
    const fn for_goal(goal: Goal) -> Self {
        match goal {
            Goal::Cut => Self {
                protein: 0.40,
                carb: 0.30,
                fat: 0.30,
            },
            Goal::Bulk => Self {
                protein: 0.30,
                carb: 0.50,
                fat: 0.20,
            },
            Goal::Maintain => Self {
                protein: 0.30,
                carb: 0.40,
                fat: 0.30,
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NutritionTarget {
    pub calories: i32,
    pub protein_g: i32,
    pub carb_g: i32,
    pub fat_g: i32,
}

impl NutritionTarget {
    #[expect(clippy::cast_possible_truncation)]
    #[must_use]
    pub fn calculate(body: &BodyProfile, goal: Goal) -> Self {
        let tdee = body.basal_metabolic_rate() * ACTIVITY_MULTIPLIER;
        let calories = match goal {
            Goal::Cut => tdee - GOAL_CALORIE_OFFSET,
            Goal::Bulk => tdee + GOAL_CALORIE_OFFSET,
            Goal::Maintain => tdee,
        };
        let split = MacroSplit::for_goal(goal);
        Self {
            calories: calories as i32,
            protein_g: (calories * split.protein / KCAL_PER_GRAM_PROTEIN) as i32,
            carb_g: (calories * split.carb / KCAL_PER_GRAM_CARB) as i32,
            fat_g: (calories * split.fat / KCAL_PER_GRAM_FAT) as i32,
        }
    }
}
