use serde::{Deserialize, Serialize};

/// Kind of training an exercise belongs to.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    #[display("strength")]
    Strength,
    #[display("cardio")]
    Cardio,
    #[display("core")]
    Core,
    #[display("flexibility")]
    Flexibility,
}

/// A single entry of the exercise catalog.
///
/// Records are plain values. A [`Day`](crate::Day) owns copies of the records
/// it was built from, so editing a placed exercise never reaches back into
/// the catalog or into another schedule.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ExerciseRecord {
    pub name: String,
    pub category: Category,
    /// Perceived intensity on a 1 to 10 scale.
    pub intensity: u8,
    /// Estimated duration in minutes.
    pub duration: u32,
}

impl ExerciseRecord {
    #[must_use]
    pub fn new(name: impl Into<String>, category: Category, intensity: u8, duration: u32) -> Self {
        Self {
            name: name.into(),
            category,
            intensity,
            duration,
        }
    }
}
