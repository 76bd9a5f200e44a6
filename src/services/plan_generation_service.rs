use std::collections::HashSet;

use tracing::info;
use uuid::Uuid;

use crate::models::{
    ActivityType, Difficulty, Discomfort, Goal, PlanDay, PlanMetadata, PlanStatus, TrainingPlan,
    UserPreferences,
};

use super::random::{RandomSource, ThreadRngSource};

pub(crate) const ROMAN_STAGES: [&str; 10] =
    ["I", "II", "III", "IV", "V", "VI", "VII", "VIII", "IX", "X"];

/// Roman numeral for a 1-based stage counter.
pub(crate) fn roman_stage(stage: u32) -> &'static str {
    ROMAN_STAGES
        .get(stage.saturating_sub(1) as usize)
        .copied()
        .unwrap_or("I")
}

const WEEK_THEMES: [&str; 4] = [
    "Foundation and Awakening",
    "Building and Stability",
    "Deepening and Challenge",
    "Integration and Flow",
];

/// Active focus themes per goal. Pool order is the tiebreak order when the
/// without-repetition selection has to reset.
fn focus_pool(goal: Goal) -> &'static [&'static str] {
    match goal {
        Goal::Flexibility => &[
            "Hip Opening",
            "Shoulder Mobility",
            "Splits (Hanumanasana)",
            "Forward Folds",
            "Detox Twists",
            "Chest Opening",
            "Spinal Mobility",
            "Deep Hamstrings",
            "Water Flow",
            "Moon Salutation",
        ],
        Goal::Strength => &[
            "Core of Steel",
            "Powerful Warriors",
            "Arm Strengthening",
            "Legs and Glutes",
            "Balance and Focus",
            "Power Vinyasa",
            "Strong Transitions",
            "Planks and Isometrics",
            "Total Endurance",
            "Inversion Challenge",
        ],
        Goal::Relaxation => &[
            "Gentle Flow",
            "Breath and Movement",
            "Slow Sun Salutation",
            "Anti-Stress Yoga",
            "Mind-Body Connection",
            "Mindful Movement",
            "Emotional Balance",
            "Yoga for Anxiety",
            "Grounding",
            "Gratitude Flow",
        ],
        Goal::PainRelief => &[
            "Spine Health",
            "Healthy Posture",
            "Neck Relief",
            "Pain-Free Hips",
            "Ankle Mobility",
            "Lower Back Strengthening",
            "Shoulder Opening",
            "Walking Yoga",
            "Pelvic Alignment",
            "Chair Yoga",
        ],
    }
}

/// Fixed active/rest layout per clamped weekly frequency, Sunday = index 0.
/// A lookup table keeps the spacing human-sensible instead of "every Nth day".
fn weekly_schedule_pattern(frequency: u8) -> [bool; 7] {
    match frequency.clamp(2, 7) {
        2 => [false, true, false, false, true, false, false],
        3 => [false, true, false, true, false, true, false],
        4 => [false, true, true, false, true, true, false],
        5 => [false, true, true, true, true, true, false],
        6 => [false, true, true, true, true, true, true],
        7 => [true; 7],
        _ => [false, true, false, true, false, true, false],
    }
}

/// Practice-name prefixes per progression stage.
fn practice_name_prefixes(stage: u32) -> &'static [&'static str] {
    match stage {
        1 => &["Foundations of", "Basics of", "Introduction to", "First Steps:"],
        2 => &["Exploring", "Practice of", "Sequence of", "Flow:"],
        3 => &["Deepening", "Challenge:", "Intensive", "Power of"],
        4 => &["Advanced:", "Complex", "Integration:", "Master Flow:"],
        _ => &["Mastery of", "Art of", "Total Flow:", "Transcending"],
    }
}

fn intensity_label(level: Difficulty, week_index: usize) -> &'static str {
    match level {
        Difficulty::Beginner => {
            if week_index == 2 {
                "Moderate"
            } else {
                "Gentle"
            }
        }
        Difficulty::Intermediate => {
            if week_index == 2 {
                "High"
            } else {
                "Moderate"
            }
        }
        Difficulty::Advanced => {
            if week_index == 3 {
                "Flowing"
            } else {
                "Intense"
            }
        }
    }
}

/// Builds personalized 4-week training plans from user preferences and a
/// progression stage. Total: always produces a complete plan.
pub struct PlanGenerationService<R = ThreadRngSource> {
    rng: R,
}

impl PlanGenerationService {
    pub fn new() -> Self {
        Self {
            rng: ThreadRngSource::new(),
        }
    }
}

impl Default for PlanGenerationService {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: RandomSource> PlanGenerationService<R> {
    /// Build a service over an explicit random source.
    pub fn with_random_source(rng: R) -> Self {
        Self { rng }
    }

    /// Generate a complete 4-week plan for the given preferences and stage.
    /// Stage is clamped to >= 1 and frequency to [2, 7].
    pub fn create_personalized_plan(
        &mut self,
        prefs: &UserPreferences,
        stage: u32,
    ) -> TrainingPlan {
        let stage = stage.max(1);
        let frequency = prefs.frequency.clamp(2, 7);
        let stage_roman = roman_stage(stage);

        info!(
            goal = %prefs.goal,
            level = %prefs.level,
            stage,
            frequency,
            "generating personalized plan"
        );

        let real_discomforts: Vec<Discomfort> = prefs
            .discomforts
            .iter()
            .copied()
            .filter(|d| *d != Discomfort::None)
            .collect();

        let mut description = format!(
            "{} plan ({}) - Phase {}.",
            prefs.goal, prefs.level, stage_roman
        );
        if !real_discomforts.is_empty() {
            let areas: Vec<String> = real_discomforts.iter().map(discomfort_label).collect();
            description.push_str(&format!(" Adapted for: {}.", areas.join(", ")));
        }

        let reasoning = vec![
            format!("Phase {}: progressive focus on {}.", stage_roman, prefs.goal),
            format!("Frequency: {frequency} days per week."),
            format!("Level: {} - tuned to your progression.", prefs.level),
        ];

        // Shared across all 4 weeks so the whole plan stays varied. Local to
        // this call; must never live longer than one generation pass.
        let mut used_focuses: HashSet<String> = HashSet::new();
        let mut weeks: Vec<Vec<PlanDay>> = Vec::with_capacity(4);
        for week_index in 0..4 {
            weeks.push(self.generate_varied_week(
                week_index,
                prefs.goal,
                &real_discomforts,
                prefs.level,
                frequency,
                stage,
                &mut used_focuses,
            ));
        }

        let total_active = weeks
            .iter()
            .flatten()
            .filter(|day| day.activity_type == ActivityType::Active)
            .count() as u32;

        TrainingPlan {
            id: Uuid::new_v4(),
            user_id: prefs.user_id,
            name: format!("{} {} {}", prefs.goal, prefs.level, stage_roman),
            description,
            schedule: weeks[0].clone(),
            weeks: Some(weeks),
            duration_weeks: 4,
            reasoning,
            metadata: Some(PlanMetadata {
                goal: prefs.goal,
                level: prefs.level,
            }),
            stage,
            status: PlanStatus::Active,
            progress: 0,
            completed_sessions: 0,
            total_planned_sessions: total_active,
            next_paths: None,
        }
    }

    /// Generate the next-stage plan for the same preferences. Used when a user
    /// bumps difficulty directly instead of picking a pathway.
    pub fn create_evolution_plan(
        &mut self,
        current_plan: &TrainingPlan,
        prefs: &UserPreferences,
    ) -> TrainingPlan {
        self.create_personalized_plan(prefs, current_plan.stage.max(1) + 1)
    }

    #[allow(clippy::too_many_arguments)]
    fn generate_varied_week(
        &mut self,
        week_index: usize,
        goal: Goal,
        discomforts: &[Discomfort],
        level: Difficulty,
        frequency: u8,
        stage: u32,
        used_focuses: &mut HashSet<String>,
    ) -> Vec<PlanDay> {
        let theme = WEEK_THEMES[week_index];
        let intensity = intensity_label(level, week_index);

        let pattern = weekly_schedule_pattern(frequency);
        let active_days = pattern.iter().filter(|active| **active).count();

        let picks = self.pick_unique(focus_pool(goal), used_focuses, active_days);
        for pick in &picks {
            used_focuses.insert(pick.clone());
        }

        let avoid_wrists = discomforts.contains(&Discomfort::Wrists);
        let avoid_knees = discomforts.contains(&Discomfort::Knees);

        let mut pick_index = 0;
        (0..7u8)
            .map(|day_of_week| {
                if pattern[day_of_week as usize] {
                    let focus = picks[pick_index % picks.len()].clone();
                    pick_index += 1;

                    let prefixes = practice_name_prefixes(stage);
                    let prefix = prefixes
                        [(self.rng.next_f64() * prefixes.len() as f64) as usize % prefixes.len()];
                    let first_word = focus.split_whitespace().next().unwrap_or(&focus);
                    let mut practice_name = format!("{prefix} {first_word}");
                    // Roughly 40% of the time the bare theme reads better than
                    // a prefixed fragment.
                    if self.rng.next_f64() > 0.6 {
                        practice_name = focus.clone();
                    }

                    let mut description = format!(
                        "A {} session focused on {}.",
                        intensity.to_lowercase(),
                        focus.to_lowercase()
                    );

                    if avoid_wrists && (focus.contains("Arm") || focus.contains("Plank")) {
                        practice_name.push_str(" (Adapted)");
                        description.push_str(" Reduced load on the wrists.");
                    }
                    if avoid_knees && (focus.contains("Warrior") || focus.contains("Leg")) {
                        description.push_str(" With support under the knees.");
                    }

                    PlanDay {
                        day_of_week,
                        activity_type: ActivityType::Active,
                        practice_name,
                        focus,
                        description,
                    }
                } else {
                    let (practice_name, focus, description) = match day_of_week {
                        0 => (
                            "Weekly Intention".to_string(),
                            "Mindset".to_string(),
                            format!("Set your intention for the {theme} phase."),
                        ),
                        3 => (
                            "Free Movement".to_string(),
                            "Active Recovery".to_string(),
                            "A light walk or gentle free stretching.".to_string(),
                        ),
                        _ => (
                            "Recovery".to_string(),
                            "Rest".to_string(),
                            "Day off to recover.".to_string(),
                        ),
                    };
                    PlanDay {
                        day_of_week,
                        activity_type: ActivityType::Rest,
                        practice_name,
                        focus,
                        description,
                    }
                }
            })
            .collect()
    }

    /// Pick `count` themes preferring ones not used yet in this generation
    /// pass; falls back to the full pool when the remainder runs short.
    fn pick_unique(
        &mut self,
        pool: &[&'static str],
        used: &HashSet<String>,
        count: usize,
    ) -> Vec<String> {
        let available: Vec<&str> = pool
            .iter()
            .copied()
            .filter(|item| !used.contains(*item))
            .collect();
        let mut source: Vec<&str> = if available.len() >= count {
            available
        } else {
            pool.to_vec()
        };

        // Fisher-Yates over the candidate slice, then take the head.
        for i in (1..source.len()).rev() {
            let j = (self.rng.next_f64() * (i + 1) as f64) as usize % (i + 1);
            source.swap(i, j);
        }
        source
            .into_iter()
            .take(count)
            .map(str::to_string)
            .collect()
    }
}

fn discomfort_label(discomfort: &Discomfort) -> String {
    match discomfort {
        Discomfort::LowerBack => "Lower Back",
        Discomfort::Knees => "Knees",
        Discomfort::NeckShoulders => "Neck/Shoulders",
        Discomfort::Wrists => "Wrists",
        Discomfort::None => "None",
    }
    .to_string()
}
