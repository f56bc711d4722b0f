pub mod workout_plan;
