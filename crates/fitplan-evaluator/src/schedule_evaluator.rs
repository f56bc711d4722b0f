//! Schedule evaluation: the fitness function that plan search maximizes.
//!
//! # Scoring
//!
//! ```text
//! fitness = 100
//!         - 10 × (days whose total duration is < 30 or > 90 minutes)
//!         - goal adjustment
//!
//! goal adjustment (applied once per week):
//!   bulk:     20 if average intensity < 7
//!           + 30 if cardio count > strength count
//!   cut:      20 if cardio count < 2
//!   maintain: 0
//! ```
//!
//! Intensity and category counts are taken over the whole week, not per day.
//! There is no lower bound: a long enough week of badly sized days scores
//! below zero. Exercise order never affects the score.

use fitplan_engine::{Goal, Schedule};

use crate::week_stats::WeekStats;

/// Score of a schedule before any penalty is applied.
pub const BASELINE_FITNESS: i32 = 100;

/// Accepted range for a single day's total duration in minutes.
pub const DAY_DURATION_RANGE: std::ops::RangeInclusive<u64> = 30..=90;
pub const DAY_DURATION_PENALTY: i32 = 10;

pub const BULK_MIN_AVERAGE_INTENSITY: u32 = 7;
pub const BULK_LOW_INTENSITY_PENALTY: i32 = 20;
pub const BULK_CARDIO_DOMINANCE_PENALTY: i32 = 30;

pub const CUT_MIN_CARDIO_COUNT: u32 = 2;
pub const CUT_LOW_CARDIO_PENALTY: i32 = 20;

/// Computes fitness scores for schedules.
pub trait ScheduleEvaluator {
    /// Computes the fitness of `schedule` without modifying it.
    fn evaluate(&self, schedule: &Schedule) -> i32;

    /// Computes the fitness of `schedule` and stores it in the schedule.
    ///
    /// The stored value replaces whatever an earlier evaluation left there.
    fn score(&self, schedule: &mut Schedule) -> i32 {
        let fitness = self.evaluate(schedule);
        schedule.set_fitness(fitness);
        fitness
    }
}

/// Fitness function for a person's training goal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GoalEvaluator {
    goal: Goal,
}

impl GoalEvaluator {
    #[must_use]
    pub fn new(goal: Goal) -> Self {
        Self { goal }
    }

    /// Computes the fitness from already collected week statistics.
    #[must_use]
    pub fn evaluate_stats(&self, stats: &WeekStats) -> i32 {
        let mut fitness = BASELINE_FITNESS;

        for duration in &stats.day_durations {
            if !DAY_DURATION_RANGE.contains(duration) {
                fitness -= DAY_DURATION_PENALTY;
            }
        }

        match self.goal {
            Goal::Bulk => {
                if stats.average_intensity_below(BULK_MIN_AVERAGE_INTENSITY) {
                    fitness -= BULK_LOW_INTENSITY_PENALTY;
                }
                if stats.cardio_count > stats.strength_count {
                    fitness -= BULK_CARDIO_DOMINANCE_PENALTY;
                }
            }
            Goal::Cut => {
                if stats.cardio_count < CUT_MIN_CARDIO_COUNT {
                    fitness -= CUT_LOW_CARDIO_PENALTY;
                }
            }
            Goal::Maintain => {}
        }

        fitness
    }
}

impl ScheduleEvaluator for GoalEvaluator {
    fn evaluate(&self, schedule: &Schedule) -> i32 {
        self.evaluate_stats(&WeekStats::from_schedule(schedule))
    }
}

#[cfg(test)]
mod tests {
    use fitplan_engine::{Catalog, Category, Day, ExerciseRecord};

    use super::*;

    fn day_of(catalog: &Catalog, names: &[&str]) -> Day {
        names
            .iter()
            .map(|name| catalog.find(name).unwrap().clone())
            .collect()
    }

    fn evaluate(goal: Goal, schedule: &Schedule) -> i32 {
        GoalEvaluator::new(goal).evaluate(schedule)
    }

    #[test]
    fn test_maintain_baseline_regardless_of_composition() {
        let catalog = Catalog::reference();
        let schedules = [
            // 47 minutes, all strength
            vec![day_of(&catalog, &["Squat", "Deadlift", "Bench Press", "Push Up", "Pull Up"])],
            // 50 minutes of cardio, then 30 minutes mixed
            vec![
                day_of(&catalog, &["HIIT Cardio", "Jogging"]),
                day_of(&catalog, &["Plank", "Yoga Stretch", "Bench Press"]),
            ],
        ];
        for days in schedules {
            assert_eq!(evaluate(Goal::Maintain, &Schedule::new(days)), 100);
        }
    }

    #[test]
    fn test_day_duration_bounds_are_inclusive() {
        let exercise = |duration| ExerciseRecord::new("Walk", Category::Core, 5, duration);
        let schedule = |duration| Schedule::new(vec![Day::new(vec![exercise(duration)])]);
        assert_eq!(evaluate(Goal::Maintain, &schedule(29)), 90);
        assert_eq!(evaluate(Goal::Maintain, &schedule(30)), 100);
        assert_eq!(evaluate(Goal::Maintain, &schedule(90)), 100);
        assert_eq!(evaluate(Goal::Maintain, &schedule(91)), 90);
    }

    #[test]
    fn test_huge_durations_are_penalized() {
        // the days sum past u32::MAX; a wrapped total would land near 30..=90
        let half = u32::MAX / 2 + 1;
        let day = Day::new(vec![
            ExerciseRecord::new("Marathon", Category::Strength, 8, half),
            ExerciseRecord::new("Ultra", Category::Strength, 8, half),
            ExerciseRecord::new("Sprint", Category::Strength, 8, 45),
        ]);
        let schedule = Schedule::new(vec![day; 2]);
        let stats = WeekStats::from_schedule(&schedule);
        assert_eq!(stats.day_durations, [u64::from(u32::MAX) + 1 + 45; 2]);
        assert_eq!(evaluate(Goal::Maintain, &schedule), 80);
        assert_eq!(evaluate(Goal::Bulk, &schedule), 80);
    }

    #[test]
    fn test_duration_penalty_applies_per_day() {
        let catalog = Catalog::reference();
        // 18 minutes each
        let short = day_of(&catalog, &["Push Up", "Pull Up", "Plank", "Push Up"]);
        let schedule = Schedule::new(vec![short; 7]);
        assert_eq!(evaluate(Goal::Maintain, &schedule), 30);
    }

    #[test]
    fn test_bulk_penalties_compose() {
        let catalog = Catalog::reference();
        let schedule = Schedule::new(vec![
            // 18 minutes
            day_of(&catalog, &["Plank", "Yoga Stretch"]),
            // 105 minutes
            day_of(&catalog, &["Jogging", "Jogging", "Jogging", "Yoga Stretch"]),
            // 50 minutes
            day_of(&catalog, &["HIIT Cardio", "Jogging"]),
        ]);
        let stats = WeekStats::from_schedule(&schedule);
        assert!(stats.average_intensity_below(7));
        assert!(stats.cardio_count > stats.strength_count);
        assert_eq!(evaluate(Goal::Bulk, &schedule), 100 - 10 * 2 - 20 - 30);
    }

    #[test]
    fn test_bulk_all_cardio_is_penalized() {
        let catalog = Catalog::reference();
        // 20 + 30 = 50 minutes, average intensity 7.5
        let day = day_of(&catalog, &["HIIT Cardio", "Jogging"]);
        for weekly_days in 1..=7 {
            let schedule = Schedule::new(vec![day.clone(); weekly_days]);
            assert_eq!(evaluate(Goal::Bulk, &schedule), 70);
            assert!(evaluate(Goal::Bulk, &schedule) <= 100 - 30);
        }
    }

    #[test]
    fn test_bulk_satisfied() {
        let catalog = Catalog::reference();
        let schedule = Schedule::new(vec![day_of(
            &catalog,
            &["Squat", "Deadlift", "HIIT Cardio", "Bench Press"],
        )]);
        assert_eq!(evaluate(Goal::Bulk, &schedule), 100);
    }

    #[test]
    fn test_cut_requires_two_cardio_per_week() {
        let catalog = Catalog::reference();
        let one_cardio = Schedule::new(vec![day_of(&catalog, &["Jogging", "Plank"])]);
        assert_eq!(evaluate(Goal::Cut, &one_cardio), 80);

        // cardio count is weekly, not per day
        let spread = Schedule::new(vec![
            day_of(&catalog, &["Jogging", "Plank"]),
            day_of(&catalog, &["Jogging", "Squat"]),
        ]);
        assert_eq!(evaluate(Goal::Cut, &spread), 100);
    }

    #[test]
    fn test_score_may_be_negative() {
        let stroll = ExerciseRecord::new("Stroll", Category::Cardio, 1, 5);
        let schedule = Schedule::new(vec![Day::new(vec![stroll]); 7]);
        assert_eq!(evaluate(Goal::Bulk, &schedule), 100 - 70 - 20 - 30);
        assert!(evaluate(Goal::Bulk, &schedule) < 0);
    }

    #[test]
    fn test_empty_days() {
        let empty = Schedule::new(vec![Day::default(); 7]);
        assert_eq!(evaluate(Goal::Cut, &empty), 100 - 70 - 20);
        assert_eq!(evaluate(Goal::Bulk, &empty), 100 - 70 - 20);
        assert_eq!(evaluate(Goal::Maintain, &empty), 100 - 70);
    }

    #[test]
    fn test_score_is_deterministic_and_overwrites() {
        let catalog = Catalog::reference();
        let evaluator = GoalEvaluator::new(Goal::Cut);
        let mut schedule = Schedule::new(vec![day_of(&catalog, &["Squat", "Plank", "Push Up"])]);
        schedule.set_fitness(1234);

        let first = evaluator.score(&mut schedule);
        let second = evaluator.score(&mut schedule);
        assert_eq!(first, second);
        assert_eq!(schedule.fitness(), first);
        assert_eq!(first, 100 - 10 - 20);
    }

    #[test]
    fn test_order_does_not_matter() {
        let catalog = Catalog::reference();
        let forward = Schedule::new(vec![day_of(&catalog, &["Squat", "Jogging", "Plank"])]);
        let backward = Schedule::new(vec![day_of(&catalog, &["Plank", "Jogging", "Squat"])]);
        for goal in [Goal::Cut, Goal::Bulk, Goal::Maintain] {
            assert_eq!(evaluate(goal, &forward), evaluate(goal, &backward));
        }
    }
}
