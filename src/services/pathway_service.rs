use tracing::info;
use uuid::Uuid;

use crate::models::{Difficulty, Goal, PlanMetadata, PlanPathway, TrainingPlan};

use super::plan_generation_service::roman_stage;

/// Proposes 2-3 follow-on plan configurations once a plan completes:
/// linear progression (or a level-up at stage 5), cross-training on the
/// complementary goal, and exploration of the remaining goal.
#[derive(Debug, Clone, Default)]
pub struct PathwayService;

impl PathwayService {
    pub fn new() -> Self {
        Self
    }

    pub fn generate_next_pathways(&self, current_plan: &TrainingPlan) -> Vec<PlanPathway> {
        let PlanMetadata { goal, level } = resolve_plan_metadata(current_plan);
        let stage = current_plan.stage.max(1);

        info!(%goal, %level, stage, plan_id = %current_plan.id, "generating next pathways");

        let mut pathways = Vec::new();

        if stage < 5 {
            let next_stage = stage + 1;
            pathways.push(PlanPathway {
                id: Uuid::new_v4(),
                title: format!("Advance to Phase {}", roman_stage(next_stage)),
                description: format!(
                    "Deepen your {goal} practice with new challenges and adjusted intensity."
                ),
                reason: "Consistency is the key to evolution.".to_string(),
                target_goal: goal,
                target_level: level,
                target_stage: next_stage,
            });
        } else if let Some(next_level) = next_level_up(level) {
            pathways.push(PlanPathway {
                id: Uuid::new_v4(),
                title: format!("Graduation to {next_level}"),
                description: format!("You completed the {level} cycle. Time to level up!"),
                reason: "Your body is ready for new challenges.".to_string(),
                target_goal: goal,
                target_level: next_level,
                target_stage: 1,
            });
        }
        // At stage 5 on Advanced there is no level left to graduate into, so
        // the linear pathway is simply omitted.

        let complementary = goal.complementary();
        pathways.push(PlanPathway {
            id: Uuid::new_v4(),
            title: format!("New Focus: {complementary}"),
            description: format!(
                "Shift the stimulus by focusing on {complementary}. Great for balance."
            ),
            reason: "Variety prevents plateaus and injuries.".to_string(),
            target_goal: complementary,
            target_level: level,
            target_stage: 1,
        });

        if stage >= 2 {
            let other_goal = Goal::ALL
                .into_iter()
                .find(|g| *g != goal && *g != complementary)
                .unwrap_or(Goal::Relaxation);
            pathways.push(PlanPathway {
                id: Uuid::new_v4(),
                title: format!("Explore {other_goal}"),
                description: format!("Try a journey focused on {other_goal}."),
                reason: "Discover new capacities in your body.".to_string(),
                target_goal: other_goal,
                target_level: level,
                target_stage: 1,
            });
        }

        pathways
    }
}

fn next_level_up(level: Difficulty) -> Option<Difficulty> {
    match level {
        Difficulty::Beginner => Some(Difficulty::Intermediate),
        Difficulty::Intermediate => Some(Difficulty::Advanced),
        Difficulty::Advanced => None,
    }
}

/// Metadata is the single source of truth for a plan's goal/level. Plans
/// created before the metadata field existed fall back to name matching here
/// and nowhere else.
fn resolve_plan_metadata(plan: &TrainingPlan) -> PlanMetadata {
    if let Some(metadata) = plan.metadata {
        return metadata;
    }
    legacy_metadata_from_name(&plan.name)
}

/// Compatibility shim for legacy plans that only carry a display name.
fn legacy_metadata_from_name(name: &str) -> PlanMetadata {
    let goal = if name.contains("Flexibility") {
        Goal::Flexibility
    } else if name.contains("Strength") {
        Goal::Strength
    } else if name.contains("Pain") {
        Goal::PainRelief
    } else {
        Goal::Relaxation
    };

    let level = if name.contains("Intermediate") {
        Difficulty::Intermediate
    } else if name.contains("Advanced") {
        Difficulty::Advanced
    } else {
        Difficulty::Beginner
    };

    PlanMetadata { goal, level }
}
