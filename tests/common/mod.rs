#![allow(dead_code)]

use yoga_coach::models::{
    Difficulty, Discomfort, Goal, SessionDuration, UserPreferences,
};
use yoga_coach::services::RandomSource;

/// Deterministic random source returning the same value forever.
pub struct FixedSource(pub f64);

impl RandomSource for FixedSource {
    fn next_f64(&mut self) -> f64 {
        self.0
    }
}

pub fn preferences(
    goal: Goal,
    level: Difficulty,
    duration_minutes: u32,
    frequency: u8,
    discomforts: Vec<Discomfort>,
) -> UserPreferences {
    UserPreferences {
        user_id: None,
        level,
        goal,
        duration: SessionDuration::try_from(duration_minutes).expect("valid duration"),
        frequency,
        discomforts,
        start_date: None,
    }
}
