//! Plan search: evolving weekly workout schedules with a genetic algorithm.
//!
//! # How Search Works
//!
//! 1. **Population** - Create random schedules, one day per weekly training day
//! 2. **Evaluation** - Score every schedule against the person's goal
//! 3. **Selection** - Keep the better half (stable sort, ties keep their order)
//! 4. **Reproduction** - Refill the population with children of random survivor
//!    pairs (single-point crossover, occasional mutation)
//! 5. **Repeat** - Continue for a fixed number of generations
//!
//! # Architecture
//!
//! ```text
//! Catalog (fitplan-engine)
//!     ↓ sampled by
//! Operators (random_schedule, crossover, mutate)
//!     ↓ produce
//! Schedules (individuals)
//!     ↓ scored by
//! GoalEvaluator (fitplan-evaluator)
//!     ↓ guides
//! Selection & Reproduction (genetic)
//! ```
//!
//! # Reproducibility
//!
//! Every random decision is drawn from the generator passed to
//! [`genetic::GeneticAlgorithm::run`]. Seeding it from a
//! [`PlanSeed`](fitplan_engine::PlanSeed) reproduces a run exactly.
//!
//! # Example
//!
//! ```
//! use fitplan_engine::{Catalog, Goal, GoalProfile, PlanSeed};
//! use fitplan_training::genetic::{GeneticAlgorithm, GeneticAlgorithmParams};
//!
//! let catalog = Catalog::reference();
//! let profile = GoalProfile::new(Goal::Cut, 3).unwrap();
//! let ga = GeneticAlgorithm::new(&catalog, profile, GeneticAlgorithmParams::default()).unwrap();
//!
//! let mut rng = PlanSeed::from_u128(7).rng();
//! let outcome = ga.run(&mut rng).unwrap();
//! assert_eq!(outcome.best.len(), 3);
//! ```
//!
//! # Current Limitations
//!
//! - **Fixed rates**: mutation and selection rates never adapt to the population state
//! - **Single objective**: all goal rules are folded into one integer score
//! - **Sequential**: schedules are evaluated one after another

pub mod genetic;
pub mod operators;
pub mod stats;
