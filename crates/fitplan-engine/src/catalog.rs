use serde::{Deserialize, Serialize};

use crate::{Category, CatalogError, ExerciseRecord};

/// Range of valid exercise intensities.
pub const INTENSITY_RANGE: std::ops::RangeInclusive<u8> = 1..=10;

/// Immutable, ordered table of exercises that plans are built from.
///
/// A catalog is validated once on construction (or deserialization) and never
/// changes afterwards. Operators only ever read from it and copy records out.
///
/// # Example
///
/// ```
/// use fitplan_engine::Catalog;
///
/// let catalog = Catalog::reference();
/// assert_eq!(catalog.len(), 10);
/// assert_eq!(catalog.records()[0].name, "Squat");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<ExerciseRecord>", into = "Vec<ExerciseRecord>")]
pub struct Catalog {
    records: Vec<ExerciseRecord>,
}

impl Catalog {
    /// Creates a catalog after checking every record.
    pub fn new(records: Vec<ExerciseRecord>) -> Result<Self, CatalogError> {
        for (index, record) in records.iter().enumerate() {
            if record.name.trim().is_empty() {
                return Err(CatalogError::EmptyName { index });
            }
            if !INTENSITY_RANGE.contains(&record.intensity) {
                return Err(CatalogError::IntensityOutOfRange {
                    name: record.name.clone(),
                    intensity: record.intensity,
                });
            }
            if record.duration == 0 {
                return Err(CatalogError::ZeroDuration {
                    name: record.name.clone(),
                });
            }
        }
        Ok(Self { records })
    }

    /// Returns the built-in ten exercise table.
    #[must_use]
    pub fn reference() -> Self {
        use Category::{Cardio, Core, Flexibility, Strength};
        let records = vec![
            ExerciseRecord::new("Squat", Strength, 8, 10),
            ExerciseRecord::new("Deadlift", Strength, 9, 15),
            ExerciseRecord::new("Bench Press", Strength, 8, 12),
            ExerciseRecord::new("Push Up", Strength, 6, 5),
            ExerciseRecord::new("Pull Up", Strength, 8, 5),
            ExerciseRecord::new("Dumbbell Row", Strength, 7, 10),
            ExerciseRecord::new("Plank", Core, 5, 3),
            ExerciseRecord::new("HIIT Cardio", Cardio, 9, 20),
            ExerciseRecord::new("Jogging", Cardio, 6, 30),
            ExerciseRecord::new("Yoga Stretch", Flexibility, 3, 15),
        ];
        Self { records }
    }

    #[must_use]
    pub fn records(&self) -> &[ExerciseRecord] {
        &self.records
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Looks up a record by its exact name.
    #[must_use]
    pub fn find(&self, name: &str) -> Option<&ExerciseRecord> {
        self.records.iter().find(|r| r.name == name)
    }
}

impl TryFrom<Vec<ExerciseRecord>> for Catalog {
    type Error = CatalogError;

    fn try_from(records: Vec<ExerciseRecord>) -> Result<Self, Self::Error> {
        Self::new(records)
    }
}

impl From<Catalog> for Vec<ExerciseRecord> {
    fn from(catalog: Catalog) -> Self {
        catalog.records
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_catalog_is_valid() {
        let reference = Catalog::reference();
        let rebuilt = Catalog::new(reference.records().to_vec()).unwrap();
        assert_eq!(reference, rebuilt);
        assert!(reference.len() >= 6);
    }

    #[test]
    fn test_reference_catalog_categories() {
        let catalog = Catalog::reference();
        let count = |category| {
            catalog
                .records()
                .iter()
                .filter(|r| r.category == category)
                .count()
        };
        assert_eq!(count(Category::Strength), 6);
        assert_eq!(count(Category::Cardio), 2);
        assert_eq!(count(Category::Core), 1);
        assert_eq!(count(Category::Flexibility), 1);
    }

    #[test]
    fn test_find() {
        let catalog = Catalog::reference();
        let jogging = catalog.find("Jogging").unwrap();
        assert_eq!(jogging.category, Category::Cardio);
        assert_eq!(jogging.intensity, 6);
        assert_eq!(jogging.duration, 30);
        assert!(catalog.find("jogging").is_none());
    }

    #[test]
    fn test_error_empty_name() {
        let records = vec![
            ExerciseRecord::new("Squat", Category::Strength, 8, 10),
            ExerciseRecord::new("  ", Category::Core, 5, 3),
        ];
        assert_eq!(
            Catalog::new(records),
            Err(CatalogError::EmptyName { index: 1 })
        );
    }

    #[test]
    fn test_error_intensity_out_of_range() {
        for intensity in [0, 11] {
            let records = vec![ExerciseRecord::new("Burpee", Category::Cardio, intensity, 5)];
            assert_eq!(
                Catalog::new(records),
                Err(CatalogError::IntensityOutOfRange {
                    name: "Burpee".to_owned(),
                    intensity,
                })
            );
        }
    }

    #[test]
    fn test_error_zero_duration() {
        let records = vec![ExerciseRecord::new("Plank", Category::Core, 5, 0)];
        let err = Catalog::new(records).unwrap_err();
        assert_eq!(err.to_string(), "exercise 'Plank' has zero duration");
    }

    #[test]
    fn test_deserialize_validates() {
        let json = r#"[
            {"name": "Row", "category": "cardio", "intensity": 7, "duration": 20},
            {"name": "Stretch", "category": "flexibility", "intensity": 2, "duration": 10}
        ]"#;
        let catalog: Catalog = serde_json::from_str(json).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.records()[1].category, Category::Flexibility);

        let json = r#"[{"name": "Row", "category": "cardio", "intensity": 12, "duration": 20}]"#;
        let result: Result<Catalog, _> = serde_json::from_str(json);
        let err_msg = result.unwrap_err().to_string();
        assert!(err_msg.contains("expected 1..=10"));
    }

    #[test]
    fn test_deserialize_unknown_category() {
        let json = r#"[{"name": "Swim", "category": "aquatic", "intensity": 7, "duration": 20}]"#;
        let result: Result<Catalog, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }
}
