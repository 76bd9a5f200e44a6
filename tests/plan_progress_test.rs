use chrono::NaiveDate;
use pretty_assertions::assert_eq;
use uuid::Uuid;

use yoga_coach::models::{
    Difficulty, Goal, PlanStatus, SessionRecord, TrainingPlan,
};
use yoga_coach::services::{PlanGenerationService, ProgressService};

mod common;
use common::preferences;

/// Frequency 3 over 4 weeks: 12 planned sessions.
fn twelve_session_plan() -> TrainingPlan {
    let prefs = preferences(Goal::Flexibility, Difficulty::Beginner, 30, 3, vec![]);
    PlanGenerationService::new().create_personalized_plan(&prefs, 1)
}

fn sessions_for(plan_id: Uuid, count: usize) -> Vec<SessionRecord> {
    (0..count)
        .map(|i| SessionRecord {
            id: Uuid::new_v4(),
            user_id: None,
            plan_id: Some(plan_id),
            date: NaiveDate::from_ymd_opt(2026, 1, 1)
                .unwrap()
                .checked_add_days(chrono::Days::new(i as u64))
                .unwrap(),
            routine_name: "Flexibility Flow".to_string(),
            duration_minutes: 30,
            feedback: None,
        })
        .collect()
}

#[test]
fn total_planned_is_independent_of_history() {
    let plan = twelve_session_plan();
    let service = ProgressService::new();

    let empty = service.calculate_plan_progress(&plan, &[]);
    let busy = service.calculate_plan_progress(&plan, &sessions_for(plan.id, 5));

    assert_eq!(empty.total_planned_sessions, 12);
    assert_eq!(busy.total_planned_sessions, 12);
}

#[test]
fn halfway_history_yields_fifty_percent_active() {
    let plan = twelve_session_plan();
    let service = ProgressService::new();

    let updated = service.calculate_plan_progress(&plan, &sessions_for(plan.id, 6));

    assert_eq!(updated.progress, 50);
    assert_eq!(updated.completed_sessions, 6);
    assert_eq!(updated.status, PlanStatus::Active);
    assert!(updated.next_paths.is_none());
}

#[test]
fn full_history_completes_the_plan_and_offers_pathways() {
    let plan = twelve_session_plan();
    let service = ProgressService::new();

    let updated = service.calculate_plan_progress(&plan, &sessions_for(plan.id, 12));

    assert_eq!(updated.progress, 100);
    assert_eq!(updated.status, PlanStatus::Completed);
    let paths = updated.next_paths.expect("completion generates pathways");
    assert!((2..=3).contains(&paths.len()));
}

#[test]
fn over_completion_is_clamped_to_one_hundred() {
    let plan = twelve_session_plan();
    let service = ProgressService::new();

    let updated = service.calculate_plan_progress(&plan, &sessions_for(plan.id, 20));

    assert_eq!(updated.progress, 100);
    assert_eq!(updated.completed_sessions, 20);
    assert_eq!(updated.status, PlanStatus::Completed);
}

#[test]
fn recalculation_is_idempotent_and_keeps_pathway_identity() {
    let plan = twelve_session_plan();
    let service = ProgressService::new();
    let history = sessions_for(plan.id, 12);

    let first = service.calculate_plan_progress(&plan, &history);
    let second = service.calculate_plan_progress(&first, &history);

    assert_eq!(first.progress, second.progress);
    assert_eq!(first.status, second.status);

    let first_ids: Vec<Uuid> = first.next_paths.as_ref().unwrap().iter().map(|p| p.id).collect();
    let second_ids: Vec<Uuid> = second.next_paths.as_ref().unwrap().iter().map(|p| p.id).collect();
    assert_eq!(first_ids, second_ids);
}

#[test]
fn progress_is_monotone_in_matching_sessions() {
    let plan = twelve_session_plan();
    let service = ProgressService::new();

    let mut previous = 0u8;
    for count in 0..=15 {
        let updated = service.calculate_plan_progress(&plan, &sessions_for(plan.id, count));
        assert!(
            updated.progress >= previous,
            "progress dropped from {previous} to {} at {count} sessions",
            updated.progress
        );
        previous = updated.progress;
    }
}

#[test]
fn sessions_against_other_plans_are_excluded() {
    let plan = twelve_session_plan();
    let service = ProgressService::new();

    let mut history = sessions_for(Uuid::new_v4(), 12);
    history.extend(sessions_for(plan.id, 3));
    history.push(SessionRecord {
        plan_id: None,
        ..history[0].clone()
    });

    let updated = service.calculate_plan_progress(&plan, &history);
    assert_eq!(updated.completed_sessions, 3);
    assert_eq!(updated.progress, 25);
}

#[test]
fn completed_status_never_reverts_to_active() {
    let plan = twelve_session_plan();
    let service = ProgressService::new();
    let history = sessions_for(plan.id, 13);

    let completed = service.calculate_plan_progress(&plan, &history);
    assert_eq!(completed.status, PlanStatus::Completed);

    // Another session against a finished plan keeps it finished.
    let mut longer = history.clone();
    longer.extend(sessions_for(plan.id, 1));
    let again = service.calculate_plan_progress(&completed, &longer);
    assert_eq!(again.status, PlanStatus::Completed);
    assert_eq!(again.progress, 100);
}

#[test]
fn archived_status_is_sticky_even_at_full_progress() {
    let mut plan = twelve_session_plan();
    plan.status = PlanStatus::Archived;
    let service = ProgressService::new();

    let updated = service.calculate_plan_progress(&plan, &sessions_for(plan.id, 12));

    assert_eq!(updated.status, PlanStatus::Archived);
    assert_eq!(updated.progress, 100);
}

#[test]
fn plan_without_weeks_is_returned_unchanged() {
    let mut plan = twelve_session_plan();
    plan.weeks = None;
    plan.progress = 42;
    let service = ProgressService::new();

    let updated = service.calculate_plan_progress(&plan, &sessions_for(plan.id, 12));

    assert_eq!(updated.progress, 42);
    assert_eq!(updated.status, plan.status);
    assert!(updated.next_paths.is_none());
}
