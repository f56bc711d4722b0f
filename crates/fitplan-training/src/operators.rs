//! Genetic operators on weekly schedules.
//!
//! - **Initialization**: [`random_day`] and [`random_schedule`]
//! - **Crossover**: [`crossover`] (single point, at the middle day)
//! - **Mutation**: [`mutate`] (replace one exercise, or shuffle one day)
//!
//! Operators copy exercise records by value. A child never shares a day with
//! its parents, so mutating the child leaves the parents untouched.

use fitplan_engine::{Catalog, DAY_LENGTH_RANGE, Day, Schedule};
use rand::{
    Rng,
    seq::{IndexedRandom, SliceRandom},
};

/// Probability that a mutation replaces an exercise rather than shuffling a day.
pub const REPLACE_PROBABILITY: f64 = 0.5;

#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum InitializeError {
    #[display("a schedule needs at least one training day")]
    NoTrainingDays,
    #[display("cannot draw {requested} distinct exercises from a catalog of {available}")]
    CatalogTooSmall { requested: usize, available: usize },
}

/// Draws one training day.
///
/// The day length is drawn uniformly from `3..=6`, then that many distinct
/// catalog records are drawn without replacement.
///
/// # Arguments
///
/// * `catalog` - Exercises to draw from
/// * `rng` - Random number generator
///
/// # Errors
///
/// Fails with [`InitializeError::CatalogTooSmall`] if the drawn length exceeds
/// the catalog size.
pub fn random_day<R>(catalog: &Catalog, rng: &mut R) -> Result<Day, InitializeError>
where
    R: Rng + ?Sized,
{
    let len = rng.random_range(DAY_LENGTH_RANGE);
    if len > catalog.len() {
        return Err(InitializeError::CatalogTooSmall {
            requested: len,
            available: catalog.len(),
        });
    }
    Ok(catalog.records().choose_multiple(rng, len).cloned().collect())
}

/// Draws a schedule with `weekly_days` random days.
///
/// Days are drawn independently with [`random_day`]. The schedule starts
/// unevaluated (fitness 0).
///
/// # Arguments
///
/// * `catalog` - Exercises to draw from
/// * `weekly_days` - Number of days in the schedule
/// * `rng` - Random number generator
///
/// # Errors
///
/// Fails with [`InitializeError::NoTrainingDays`] if `weekly_days` is 0, or
/// with [`InitializeError::CatalogTooSmall`] as [`random_day`] does.
pub fn random_schedule<R>(
    catalog: &Catalog,
    weekly_days: usize,
    rng: &mut R,
) -> Result<Schedule, InitializeError>
where
    R: Rng + ?Sized,
{
    if weekly_days == 0 {
        return Err(InitializeError::NoTrainingDays);
    }
    let days = (0..weekly_days)
        .map(|_| random_day(catalog, rng))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Schedule::new(days))
}

/// Single-point crossover.
///
/// The child takes days `[0, L/2)` from `p1` and days `[L/2, L)` from `p2`,
/// where `L` is the parents' length. The crossover point is always the
/// middle day, never random. The child starts unevaluated.
///
/// # Arguments
///
/// * `p1` - Parent supplying the first half of the days
/// * `p2` - Parent supplying the second half of the days
///
/// # Panics
///
/// Panics if the parents have different lengths.
#[must_use]
pub fn crossover(p1: &Schedule, p2: &Schedule) -> Schedule {
    assert_eq!(p1.len(), p2.len());
    let mid = p1.len() / 2;
    let days = p1.days()[..mid]
        .iter()
        .chain(&p2.days()[mid..])
        .cloned()
        .collect();
    Schedule::new(days)
}

/// What a call to [`mutate`] changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mutation {
    /// The exercise at `slot` of `day` was overwritten with a random catalog record.
    Replace { day: usize, slot: usize },
    /// The exercises of `day` were shuffled. This never changes the fitness.
    Shuffle { day: usize },
}

/// Perturbs one random day of `schedule`.
///
/// With probability [`REPLACE_PROBABILITY`] one exercise of the day is
/// replaced by a uniformly drawn catalog record (any category, duplicates
/// allowed). Otherwise the day's exercises are shuffled. Day lengths never
/// change.
///
/// # Arguments
///
/// * `schedule` - Schedule to mutate (modified in-place)
/// * `catalog` - Exercises replacement records are drawn from
/// * `rng` - Random number generator
///
/// # Returns
///
/// The mutation applied. Returns `None` and leaves the schedule untouched if there is nothing to
/// mutate (no days, an empty day picked for replacement, or an empty catalog).
pub fn mutate<R>(schedule: &mut Schedule, catalog: &Catalog, rng: &mut R) -> Option<Mutation>
where
    R: Rng + ?Sized,
{
    if schedule.is_empty() {
        return None;
    }
    let day_index = rng.random_range(0..schedule.len());
    let day = schedule.day_mut(day_index)?;

    if rng.random_bool(REPLACE_PROBABILITY) {
        if day.is_empty() {
            return None;
        }
        let slot = rng.random_range(0..day.len());
        let record = catalog.records().choose(rng)?;
        day.exercises_mut()[slot] = record.clone();
        Some(Mutation::Replace {
            day: day_index,
            slot,
        })
    } else {
        day.exercises_mut().shuffle(rng);
        Some(Mutation::Shuffle { day: day_index })
    }
}
