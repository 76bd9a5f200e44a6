use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::pose::Difficulty;

/// Primary outcome a user wants from their practice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Goal {
    #[serde(rename = "flexibility")]
    Flexibility,
    #[serde(rename = "strength")]
    Strength,
    #[serde(rename = "relaxation")]
    Relaxation,
    #[serde(rename = "pain_relief")]
    PainRelief,
}

impl Goal {
    pub const ALL: [Goal; 4] = [
        Goal::Flexibility,
        Goal::Strength,
        Goal::Relaxation,
        Goal::PainRelief,
    ];

    /// Fixed 2-cycle pairing used by the cross-training pathway.
    pub fn complementary(self) -> Goal {
        match self {
            Goal::Strength => Goal::Flexibility,
            Goal::Flexibility => Goal::Strength,
            Goal::Relaxation => Goal::PainRelief,
            Goal::PainRelief => Goal::Relaxation,
        }
    }
}

impl std::fmt::Display for Goal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Goal::Flexibility => "Flexibility",
            Goal::Strength => "Strength",
            Goal::Relaxation => "Relaxation",
            Goal::PainRelief => "Pain Relief",
        };
        write!(f, "{label}")
    }
}

/// Body areas a user flagged during onboarding. Lower back and neck/shoulder
/// discomforts boost relieving poses in routine scoring; knees and wrists are
/// handled by plan-level adaptation notes only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Discomfort {
    #[serde(rename = "lower_back")]
    LowerBack,
    #[serde(rename = "knees")]
    Knees,
    #[serde(rename = "neck_shoulders")]
    NeckShoulders,
    #[serde(rename = "wrists")]
    Wrists,
    #[serde(rename = "none")]
    None,
}

/// Session length, a closed set serialized as the minute count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub enum SessionDuration {
    Short,
    Standard,
    Long,
}

impl SessionDuration {
    pub fn minutes(self) -> u32 {
        match self {
            SessionDuration::Short => 15,
            SessionDuration::Standard => 30,
            SessionDuration::Long => 45,
        }
    }
}

impl TryFrom<u32> for SessionDuration {
    type Error = String;

    fn try_from(minutes: u32) -> Result<Self, Self::Error> {
        match minutes {
            15 => Ok(SessionDuration::Short),
            30 => Ok(SessionDuration::Standard),
            45 => Ok(SessionDuration::Long),
            other => Err(format!("unsupported session duration: {other} minutes")),
        }
    }
}

impl From<SessionDuration> for u32 {
    fn from(duration: SessionDuration) -> u32 {
        duration.minutes()
    }
}

/// Preferences collected during onboarding; owned by a single user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserPreferences {
    pub user_id: Option<Uuid>,
    pub level: Difficulty,
    pub goal: Goal,
    pub duration: SessionDuration,
    /// Practice days per week; clamped to [2, 7] by the plan generator.
    pub frequency: u8,
    pub discomforts: Vec<Discomfort>,
    pub start_date: Option<NaiveDate>,
}
