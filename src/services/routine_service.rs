use std::collections::HashSet;

use chrono::Utc;
use tracing::info;
use uuid::Uuid;

use crate::catalog::pose_catalog;
use crate::models::{
    Difficulty, Discomfort, Goal, Pose, PoseCategory, Routine, SessionDuration, UserPreferences,
};

/// Benefit keywords that mark a pose as serving a goal.
fn goal_keywords(goal: Goal) -> &'static [&'static str] {
    match goal {
        Goal::Flexibility => &["Flexibility", "Stretch", "Opening"],
        Goal::Strength => &["Strength", "Core", "Endurance", "Energy"],
        Goal::Relaxation => &["Calm", "Relaxation", "Peace", "Restorative"],
        Goal::PainRelief => &["Relief", "Spine", "Neck"],
    }
}

/// Benefit keywords that mark a pose as relieving a discomfort. Knees and
/// wrists deliberately map to nothing: they are mobility constraints, not
/// pain targets, and would need an exclusion filter rather than a boost.
fn relief_keywords(discomfort: Discomfort) -> &'static [&'static str] {
    match discomfort {
        Discomfort::LowerBack => &["Spine", "Back", "Pain Relief"],
        Discomfort::NeckShoulders => &["Neck", "Shoulders", "Tension"],
        Discomfort::Knees | Discomfort::Wrists | Discomfort::None => &[],
    }
}

/// Builds a single-session pose sequence from preferences: warmup, main body,
/// cooldown, final relaxation.
pub struct RoutineService {
    catalog: Vec<Pose>,
}

impl RoutineService {
    pub fn new() -> Self {
        Self {
            catalog: pose_catalog(),
        }
    }

    /// Build a service over an explicit catalog, mainly for tests.
    pub fn with_catalog(catalog: Vec<Pose>) -> Self {
        Self { catalog }
    }

    pub fn generate_routine(&self, prefs: &UserPreferences) -> Routine {
        info!(goal = %prefs.goal, level = %prefs.level, duration = prefs.duration.minutes(), "generating routine");

        // Level gate: beginners only see beginner poses, intermediates lose
        // the advanced tier, advanced practitioners see everything.
        let available: Vec<&Pose> = self
            .catalog
            .iter()
            .filter(|pose| match prefs.level {
                Difficulty::Beginner => pose.difficulty == Difficulty::Beginner,
                Difficulty::Intermediate => pose.difficulty != Difficulty::Advanced,
                Difficulty::Advanced => true,
            })
            .collect();

        let mut scored: Vec<(&Pose, i32)> = available
            .iter()
            .map(|&pose| (pose, score_pose(pose, prefs)))
            .collect();
        // Stable sort: ties keep catalog order.
        scored.sort_by(|a, b| b.1.cmp(&a.1));

        let main_count = match prefs.duration {
            SessionDuration::Short => 3,
            SessionDuration::Standard => 7,
            SessionDuration::Long => 12,
        };

        let mut used_ids: HashSet<String> = HashSet::new();
        let mut poses: Vec<Pose> = Vec::new();

        poses.extend(pick(&scored, &[PoseCategory::Warmup], 2, &mut used_ids));
        poses.extend(pick(
            &scored,
            &[
                PoseCategory::Standing,
                PoseCategory::Core,
                PoseCategory::Inversion,
                PoseCategory::Seated,
            ],
            main_count,
            &mut used_ids,
        ));
        poses.extend(pick(
            &scored,
            &[
                PoseCategory::Restorative,
                PoseCategory::Seated,
                PoseCategory::Inversion,
            ],
            2,
            &mut used_ids,
        ));

        // Final relaxation closes every routine.
        if let Some(savasana) = self
            .catalog
            .iter()
            .find(|pose| pose.sanskrit_name == "Savasana")
        {
            if !used_ids.contains(&savasana.id) {
                poses.push(savasana.clone());
            }
        }

        let total_duration_secs = poses.iter().map(|pose| pose.duration_default).sum();

        Routine {
            id: Uuid::new_v4(),
            name: format!("{} Flow", prefs.goal),
            poses,
            total_duration_secs,
            created_at: Utc::now(),
        }
    }
}

impl Default for RoutineService {
    fn default() -> Self {
        Self::new()
    }
}

/// Base score 1, +5 for a goal-keyword match, +3 per discomfort whose relief
/// keywords match a benefit.
fn score_pose(pose: &Pose, prefs: &UserPreferences) -> i32 {
    let mut score = 1;

    let keywords = goal_keywords(prefs.goal);
    if pose
        .benefits
        .iter()
        .any(|benefit| keywords.iter().any(|k| benefit.contains(k)))
    {
        score += 5;
    }

    for discomfort in &prefs.discomforts {
        let relief = relief_keywords(*discomfort);
        if pose
            .benefits
            .iter()
            .any(|benefit| relief.iter().any(|k| benefit.contains(k)))
        {
            score += 3;
        }
    }

    score
}

/// Take up to `count` highest-scored poses from the given categories, never
/// reusing an id. Short categories yield a short result, not an error.
fn pick(
    scored: &[(&Pose, i32)],
    categories: &[PoseCategory],
    count: usize,
    used_ids: &mut HashSet<String>,
) -> Vec<Pose> {
    let selected: Vec<Pose> = scored
        .iter()
        .filter(|(pose, _)| categories.contains(&pose.category) && !used_ids.contains(&pose.id))
        .take(count)
        .map(|(pose, _)| (*pose).clone())
        .collect();

    for pose in &selected {
        used_ids.insert(pose.id.clone());
    }
    selected
}
