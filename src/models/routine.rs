use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::pose::Pose;

/// A single-session pose sequence. Ephemeral: built per practice session and
/// handed to the player, never persisted by this core.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Routine {
    pub id: Uuid,
    pub name: String,
    /// Fully resolved poses in play order: warmup, main body, cooldown, closing.
    pub poses: Vec<Pose>,
    /// Sum of each pose's default hold duration, in seconds. A byproduct of
    /// selection, not a target enforced by trimming.
    pub total_duration_secs: u32,
    pub created_at: DateTime<Utc>,
}
