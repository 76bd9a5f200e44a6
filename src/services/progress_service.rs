use tracing::debug;

use crate::models::{PlanStatus, SessionRecord, TrainingPlan};

use super::pathway_service::PathwayService;

/// Derives completion percentage and lifecycle status from a plan and its
/// session history. Pure: always returns an updated copy, never mutates or
/// performs I/O, so callers can retry persistence independently.
#[derive(Debug, Clone, Default)]
pub struct ProgressService {
    pathway_service: PathwayService,
}

impl ProgressService {
    pub fn new() -> Self {
        Self {
            pathway_service: PathwayService::new(),
        }
    }

    pub fn calculate_plan_progress(
        &self,
        plan: &TrainingPlan,
        history: &[SessionRecord],
    ) -> TrainingPlan {
        // Legacy plans without a week grid cannot be measured.
        if plan.weeks.is_none() {
            return plan.clone();
        }

        let total_planned = plan.planned_active_days();
        // A session counts toward exactly one plan, even if the user switched
        // plans mid-history.
        let completed = history
            .iter()
            .filter(|session| session.plan_id == Some(plan.id))
            .count() as u32;

        let progress = ((f64::from(completed) / f64::from(total_planned.max(1))) * 100.0)
            .round()
            .min(100.0) as u8;

        // Pathways are generated exactly once: their ids must stay stable
        // across repeated recalculations.
        let next_paths = match &plan.next_paths {
            Some(paths) => Some(paths.clone()),
            None if progress >= 100 => {
                Some(self.pathway_service.generate_next_pathways(plan))
            }
            None => None,
        };

        // Archived is sticky: a superseded plan stays archived even when its
        // history fills up afterwards.
        let status = if plan.status == PlanStatus::Archived {
            PlanStatus::Archived
        } else if progress >= 100 {
            PlanStatus::Completed
        } else {
            PlanStatus::Active
        };

        debug!(plan_id = %plan.id, progress, completed, total_planned, "recalculated plan progress");

        TrainingPlan {
            progress,
            completed_sessions: completed,
            total_planned_sessions: total_planned,
            status,
            next_paths,
            ..plan.clone()
        }
    }
}
