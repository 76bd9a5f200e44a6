use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Append-only record of one completed practice. `plan_id` is a weak
/// back-reference: a session outlives the plan it was practiced against.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionRecord {
    pub id: Uuid,
    pub user_id: Option<Uuid>,
    pub plan_id: Option<Uuid>,
    /// Calendar day of the practice, not a timestamp.
    pub date: NaiveDate,
    pub routine_name: String,
    pub duration_minutes: u32,
    pub feedback: Option<String>,
}
