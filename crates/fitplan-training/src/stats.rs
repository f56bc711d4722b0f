/// Summary of the fitness scores of one population.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FitnessStats {
    pub min: i32,
    pub max: i32,
    pub mean: f32,
    /// Upper median (the element at `len / 2` after sorting).
    pub median: i32,
}

impl FitnessStats {
    /// Computes statistics from unsorted scores.
    ///
    /// Returns `None` if there are no scores.
    ///
    /// ```
    /// use fitplan_training::stats::FitnessStats;
    ///
    /// let stats = FitnessStats::new([70, 100, 80, 90]).unwrap();
    /// assert_eq!(stats.min, 70);
    /// assert_eq!(stats.max, 100);
    /// assert_eq!(stats.mean, 85.0);
    /// assert_eq!(stats.median, 90);
    /// ```
    #[expect(clippy::cast_precision_loss)]
    #[must_use]
    pub fn new<I>(values: I) -> Option<Self>
    where
        I: IntoIterator<Item = i32>,
    {
        let mut values = values.into_iter().collect::<Vec<_>>();
        values.sort_unstable();

        let min = *values.first()?;
        let max = *values.last()?;
        let sum = values.iter().copied().map(i64::from).sum::<i64>();
        let mean = sum as f32 / values.len() as f32;
        let median = values[values.len() / 2];

        Some(Self {
            min,
            max,
            mean,
            median,
        })
    }
}
