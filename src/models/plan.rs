use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::pose::Difficulty;
use super::preferences::Goal;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActivityType {
    #[serde(rename = "active")]
    Active,
    #[serde(rename = "rest")]
    Rest,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlanStatus {
    #[serde(rename = "active")]
    Active,
    #[serde(rename = "completed")]
    Completed,
    #[serde(rename = "archived")]
    Archived,
}

/// One calendar day inside a plan week. Always embedded, never stored alone.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanDay {
    /// 0 = Sunday .. 6 = Saturday.
    pub day_of_week: u8,
    pub activity_type: ActivityType,
    pub practice_name: String,
    pub focus: String,
    pub description: String,
}

/// Explicit goal/level snapshot taken at generation time. Downstream logic
/// must read this instead of re-parsing the plan name, which is ambiguous
/// once a plan has been renamed by a pathway selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanMetadata {
    pub goal: Goal,
    pub level: Difficulty,
}

/// A follow-on plan configuration offered once a plan completes. Computed on
/// demand and stored inside `TrainingPlan::next_paths`, never persisted alone.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanPathway {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub reason: String,
    pub target_goal: Goal,
    pub target_level: Difficulty,
    pub target_stage: u32,
}

/// A 4-week training plan. `weeks` is the source of truth (4 arrays of 7
/// days); `schedule` aliases `weeks[0]` for older clients that only render a
/// single representative week.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainingPlan {
    pub id: Uuid,
    pub user_id: Option<Uuid>,
    pub name: String,
    pub description: String,
    pub schedule: Vec<PlanDay>,
    pub weeks: Option<Vec<Vec<PlanDay>>>,
    pub duration_weeks: u32,
    pub reasoning: Vec<String>,
    pub metadata: Option<PlanMetadata>,
    /// Progression counter within one (goal, level) pairing, starting at 1.
    pub stage: u32,
    pub status: PlanStatus,
    /// Completion percentage, 0..=100.
    pub progress: u8,
    pub completed_sessions: u32,
    pub total_planned_sessions: u32,
    pub next_paths: Option<Vec<PlanPathway>>,
}

impl TrainingPlan {
    /// Count of active (practice) days across every week of the plan.
    pub fn planned_active_days(&self) -> u32 {
        self.weeks
            .as_deref()
            .unwrap_or(&[])
            .iter()
            .flatten()
            .filter(|day| day.activity_type == ActivityType::Active)
            .count() as u32
    }
}
