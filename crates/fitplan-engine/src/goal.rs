use serde::{Deserialize, Serialize};

use crate::ProfileError;

/// Largest number of training days a week can hold.
pub const MAX_WEEKLY_DAYS: usize = 7;

/// Training goal a plan is optimized for.
///
/// Parsing is case-insensitive. Anything other than the three known goals is
/// rejected when the string is parsed, so a plan is never scored against an
/// unknown goal.
///
/// ```
/// use fitplan_engine::Goal;
///
/// assert_eq!("Bulk".parse::<Goal>().unwrap(), Goal::Bulk);
/// assert!("shred".parse::<Goal>().is_err());
/// assert_eq!(Goal::Cut.to_string(), "cut");
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    derive_more::Display,
    derive_more::FromStr,
    Serialize,
    Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Goal {
    /// Lose fat: needs cardio work.
    #[display("cut")]
    Cut,
    /// Gain muscle: needs intense, strength-dominated work.
    #[display("bulk")]
    Bulk,
    /// Keep the current shape.
    #[display("maintain")]
    Maintain,
}

/// The part of a person's profile that plan search consumes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GoalProfile {
    goal: Goal,
    weekly_days: usize,
}

impl GoalProfile {
    /// Creates a validated profile.
    ///
    /// `weekly_days` must be within `1..=MAX_WEEKLY_DAYS`.
    pub fn new(goal: Goal, weekly_days: usize) -> Result<Self, ProfileError> {
        if !(1..=MAX_WEEKLY_DAYS).contains(&weekly_days) {
            return Err(ProfileError::WeeklyDaysOutOfRange { weekly_days });
        }
        Ok(Self { goal, weekly_days })
    }

    #[must_use]
    pub fn goal(&self) -> Goal {
        self.goal
    }

    #[must_use]
    pub fn weekly_days(&self) -> usize {
        self.weekly_days
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_goal() {
        assert_eq!("cut".parse::<Goal>().unwrap(), Goal::Cut);
        assert_eq!("BULK".parse::<Goal>().unwrap(), Goal::Bulk);
        assert_eq!("maintain".parse::<Goal>().unwrap(), Goal::Maintain);
        assert!("".parse::<Goal>().is_err());
        assert!("lose".parse::<Goal>().is_err());
    }

    #[test]
    fn test_display_roundtrip() {
        for goal in [Goal::Cut, Goal::Bulk, Goal::Maintain] {
            assert_eq!(goal.to_string().parse::<Goal>().unwrap(), goal);
        }
    }

    #[test]
    fn test_profile_weekly_days_bounds() {
        for days in 1..=MAX_WEEKLY_DAYS {
            let profile = GoalProfile::new(Goal::Maintain, days).unwrap();
            assert_eq!(profile.weekly_days(), days);
            assert_eq!(profile.goal(), Goal::Maintain);
        }
        assert_eq!(
            GoalProfile::new(Goal::Cut, 0),
            Err(ProfileError::WeeklyDaysOutOfRange { weekly_days: 0 })
        );
        assert!(GoalProfile::new(Goal::Cut, 8).is_err());
    }
}
