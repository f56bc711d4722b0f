//! Fitness evaluation for weekly workout plans.
//!
//! A schedule is scored in two steps:
//!
//! 1. **Collect statistics** - [`week_stats::WeekStats`] sums up durations,
//!    intensities and category counts over the whole week
//! 2. **Compute fitness** - a [`schedule_evaluator::ScheduleEvaluator`] turns
//!    the statistics into an integer score (higher is better)
//!
//! Evaluation is deterministic: it never draws random numbers, so the same
//! schedule and goal always produce the same score.
//!
//! # Usage
//!
//! ```
//! use fitplan_engine::{Catalog, Day, Goal, Schedule};
//! use fitplan_evaluator::schedule_evaluator::{GoalEvaluator, ScheduleEvaluator as _};
//!
//! let catalog = Catalog::reference();
//! let day: Day = ["Squat", "Deadlift", "Jogging"]
//!     .into_iter()
//!     .map(|name| catalog.find(name).unwrap().clone())
//!     .collect();
//! let mut schedule = Schedule::new(vec![day]);
//!
//! let evaluator = GoalEvaluator::new(Goal::Maintain);
//! assert_eq!(evaluator.score(&mut schedule), 100);
//! assert_eq!(schedule.fitness(), 100);
//! ```

pub mod schedule_evaluator;
pub mod week_stats;
