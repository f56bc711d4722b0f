use fitplan_engine::{Category, Schedule};

/// Aggregated statistics of a weekly schedule.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WeekStats {
    /// Total duration of each day in minutes, in schedule order.
    pub day_durations: Vec<u64>,
    /// Number of exercises over the whole week.
    pub exercise_count: u32,
    /// Sum of the intensities of every exercise.
    pub intensity_sum: u32,
    pub cardio_count: u32,
    pub strength_count: u32,
}

impl WeekStats {
    #[must_use]
    pub fn from_schedule(schedule: &Schedule) -> Self {
        let mut stats = Self {
            day_durations: schedule.days().iter().map(|d| d.total_duration()).collect(),
            ..Self::default()
        };
        for ex in schedule.exercises() {
            stats.exercise_count += 1;
            stats.intensity_sum += u32::from(ex.intensity);
            match ex.category {
                Category::Cardio => stats.cardio_count += 1,
                Category::Strength => stats.strength_count += 1,
                Category::Core | Category::Flexibility => {}
            }
        }
        stats
    }

    /// Returns `true` if the average intensity is strictly below `threshold`.
    ///
    /// The comparison is done on integers, so averages such as 6.999... never
    /// depend on float rounding. A week without exercises has average 0.
    #[must_use]
    pub fn average_intensity_below(&self, threshold: u32) -> bool {
        self.intensity_sum < threshold * self.exercise_count || self.exercise_count == 0
    }
}
