//! Data model for weekly workout plan search.
//!
//! This crate holds the value types shared by the evaluator, the training
//! loop and the command line front end:
//!
//! - [`ExerciseRecord`] and [`Category`] describe a single exercise
//! - [`Catalog`] is the immutable, validated table exercises are drawn from
//! - [`Day`] and [`Schedule`] form a candidate weekly plan
//! - [`Goal`] and [`GoalProfile`] carry the part of a person's profile the
//!   search consumes
//! - [`PlanSeed`] makes a search run reproducible
//!
//! Nothing in here is random by itself. Randomness always comes from an
//! explicit generator, usually created with [`PlanSeed::rng`].

pub use self::{catalog::*, exercise::*, goal::*, schedule::*, seed::*};

pub mod catalog;
pub mod exercise;
pub mod goal;
pub mod schedule;
pub mod seed;

#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum CatalogError {
    #[display("exercise #{index} has an empty name")]
    EmptyName { index: usize },
    #[display("exercise '{name}' has intensity {intensity}, expected 1..=10")]
    IntensityOutOfRange { name: String, intensity: u8 },
    #[display("exercise '{name}' has zero duration")]
    ZeroDuration { name: String },
}

#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ProfileError {
    #[display("weekly training days must be within 1..=7, got {weekly_days}")]
    WeeklyDaysOutOfRange { weekly_days: usize },
}
