use serde::{Deserialize, Serialize};

use crate::ExerciseRecord;

/// Range of exercise counts a freshly created day may have.
pub const DAY_LENGTH_RANGE: std::ops::RangeInclusive<usize> = 3..=6;

/// The exercises of one training day, in the order they are performed.
///
/// The length of a day is fixed once it is created: the mutable accessor
/// hands out a slice, so exercises can be replaced or reordered but never
/// added or removed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Day {
    exercises: Vec<ExerciseRecord>,
}

impl Day {
    #[must_use]
    pub fn new(exercises: Vec<ExerciseRecord>) -> Self {
        Self { exercises }
    }

    #[must_use]
    pub fn exercises(&self) -> &[ExerciseRecord] {
        &self.exercises
    }

    pub fn exercises_mut(&mut self) -> &mut [ExerciseRecord] {
        &mut self.exercises
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.exercises.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.exercises.is_empty()
    }

    /// Sum of the exercise durations in minutes.
    ///
    /// Summed as `u64`, so no combination of catalog durations can overflow.
    #[must_use]
    pub fn total_duration(&self) -> u64 {
        self.exercises.iter().map(|ex| u64::from(ex.duration)).sum()
    }

    /// Returns an iterator over the exercise names.
    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.exercises.iter().map(|ex| ex.name.as_str())
    }
}

impl FromIterator<ExerciseRecord> for Day {
    fn from_iter<T: IntoIterator<Item = ExerciseRecord>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// A candidate weekly plan: one [`Day`] per training day.
///
/// The number of days is fixed at creation and equals the requested weekly
/// training days for the whole lifetime of the schedule.
///
/// The schedule also carries the score from its most recent evaluation.
/// The score starts at 0 and is overwritten, never accumulated, by
/// [`Self::set_fitness`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Schedule {
    days: Vec<Day>,
    fitness: i32,
}

impl Schedule {
    /// Creates an unevaluated schedule.
    #[must_use]
    pub fn new(days: Vec<Day>) -> Self {
        Self { days, fitness: 0 }
    }

    #[must_use]
    pub fn days(&self) -> &[Day] {
        &self.days
    }

    #[must_use]
    pub fn day_mut(&mut self, index: usize) -> Option<&mut Day> {
        self.days.get_mut(index)
    }

    /// Number of training days in this schedule.
    #[must_use]
    pub fn len(&self) -> usize {
        self.days.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// Returns the score from the most recent evaluation (0 if never evaluated).
    #[must_use]
    pub fn fitness(&self) -> i32 {
        self.fitness
    }

    pub fn set_fitness(&mut self, fitness: i32) {
        self.fitness = fitness;
    }

    /// Returns an iterator over every exercise of the week, day by day.
    pub fn exercises(&self) -> impl Iterator<Item = &ExerciseRecord> + '_ {
        self.days.iter().flat_map(Day::exercises)
    }
}
