use chrono::{DateTime, Utc};
use fitplan_engine::{Day, ExerciseRecord, Goal, GoalProfile, PlanSeed, Schedule};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct WorkoutPlan {
    pub goal: Goal,
    pub weekly_days: usize,
    pub seed: PlanSeed,
    pub generated_at: DateTime<Utc>,
    pub fitness: i32,
    pub days: Vec<WorkoutDay>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct WorkoutDay {
    pub total_duration: u64,
    pub exercises: Vec<ExerciseRecord>,
}

impl From<&Day> for WorkoutDay {
    fn from(day: &Day) -> Self {
        Self {
            total_duration: day.total_duration(),
            exercises: day.exercises().to_vec(),
        }
    }
}

impl WorkoutPlan {
    pub fn new(profile: &GoalProfile, seed: PlanSeed, schedule: &Schedule) -> Self {
        Self {
            goal: profile.goal(),
            weekly_days: profile.weekly_days(),
            seed,
            generated_at: Utc::now(),
            fitness: schedule.fitness(),
            days: schedule.days().iter().map(WorkoutDay::from).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use fitplan_engine::Catalog;

    use super::*;

    #[test]
    fn test_plan_json_shape() {
        let catalog = Catalog::reference();
        let day: Day = ["Jogging", "Plank", "Squat"]
            .into_iter()
            .map(|name| catalog.find(name).unwrap().clone())
            .collect();
        let mut schedule = Schedule::new(vec![day]);
        schedule.set_fitness(80);
        let profile = GoalProfile::new(Goal::Cut, 1).unwrap();
        let plan = WorkoutPlan::new(&profile, PlanSeed::from_u128(1), &schedule);

        let json = serde_json::to_value(&plan).unwrap();
        assert_eq!(json["goal"], "cut");
        assert_eq!(json["weekly_days"], 1);
        assert_eq!(json["seed"], "00000000000000000000000000000001");
        assert_eq!(json["fitness"], 80);
        assert_eq!(json["days"][0]["total_duration"], 43);
        assert_eq!(json["days"][0]["exercises"][0]["name"], "Jogging");
        assert_eq!(json["days"][0]["exercises"][0]["category"], "cardio");

        let parsed: WorkoutPlan = serde_json::from_value(json).unwrap();
        assert_eq!(parsed, plan);
    }
}
