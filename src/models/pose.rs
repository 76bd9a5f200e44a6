use serde::{Deserialize, Serialize};

/// Practice level of a user or difficulty of a single pose.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Difficulty {
    #[serde(rename = "beginner")]
    Beginner,
    #[serde(rename = "intermediate")]
    Intermediate,
    #[serde(rename = "advanced")]
    Advanced,
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Difficulty::Beginner => "Beginner",
            Difficulty::Intermediate => "Intermediate",
            Difficulty::Advanced => "Advanced",
        };
        write!(f, "{label}")
    }
}

/// Structural role a pose plays inside a sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PoseCategory {
    #[serde(rename = "warmup")]
    Warmup,
    #[serde(rename = "standing")]
    Standing,
    #[serde(rename = "seated")]
    Seated,
    #[serde(rename = "inversion")]
    Inversion,
    #[serde(rename = "restorative")]
    Restorative,
    #[serde(rename = "core")]
    Core,
    #[serde(rename = "closing")]
    Closing,
    #[serde(rename = "breathing")]
    Breathing,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PoseMedia {
    pub thumbnail_url: String,
    pub video_embed_url: String,
}

/// Immutable reference-data entry from the pose catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Pose {
    pub id: String,
    pub sanskrit_name: String,
    pub english_name: String,
    pub difficulty: Difficulty,
    pub category: PoseCategory,
    pub benefits: Vec<String>,
    pub media: PoseMedia,
    /// Default hold duration in seconds.
    pub duration_default: u32,
    pub description: String,
}
