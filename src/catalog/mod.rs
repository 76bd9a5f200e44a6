// Static pose catalog. Pure reference data, loaded once per service.

use crate::models::{Difficulty, Pose, PoseCategory, PoseMedia};

fn placeholder_media(label: &str) -> PoseMedia {
    let encoded = label.replace(' ', "%20");
    PoseMedia {
        thumbnail_url: format!("https://placehold.co/600x400/e7e5e4/44403c?text={encoded}"),
        video_embed_url:
            "https://www.youtube.com/embed/v7AYKMP6rOE?autoplay=1&mute=1&controls=0&loop=1"
                .to_string(),
    }
}

struct PoseEntry {
    id: &'static str,
    sanskrit_name: &'static str,
    english_name: &'static str,
    difficulty: Difficulty,
    category: PoseCategory,
    benefits: &'static [&'static str],
    duration_default: u32,
    description: &'static str,
}

impl PoseEntry {
    fn build(&self) -> Pose {
        Pose {
            id: self.id.to_string(),
            sanskrit_name: self.sanskrit_name.to_string(),
            english_name: self.english_name.to_string(),
            difficulty: self.difficulty,
            category: self.category,
            benefits: self.benefits.iter().map(|b| b.to_string()).collect(),
            media: placeholder_media(self.english_name),
            duration_default: self.duration_default,
            description: self.description.to_string(),
        }
    }
}

const POSES: &[PoseEntry] = &[
    // Breathing (pranayama)
    PoseEntry {
        id: "100",
        sanskrit_name: "Nadi Shodhana",
        english_name: "Alternate Nostril Breathing",
        difficulty: Difficulty::Beginner,
        category: PoseCategory::Breathing,
        benefits: &["Mental Balance", "Stress Reduction", "Focus"],
        duration_default: 180,
        description: "Use the thumb and ring finger to close alternate nostrils, breathing in a slow, even rhythm.",
    },
    PoseEntry {
        id: "101",
        sanskrit_name: "Kapalabhati",
        english_name: "Skull Shining Breath",
        difficulty: Difficulty::Intermediate,
        category: PoseCategory::Breathing,
        benefits: &["Energy", "Cleansing", "Warming"],
        duration_default: 120,
        description: "Short, vigorous exhales through the nose with passive inhales. Keep the focus on the belly.",
    },
    PoseEntry {
        id: "102",
        sanskrit_name: "Sama Vritti",
        english_name: "Box Breathing",
        difficulty: Difficulty::Beginner,
        category: PoseCategory::Breathing,
        benefits: &["Calm", "Control", "Anxiety Relief"],
        duration_default: 180,
        description: "Inhale for 4 counts, hold for 4, exhale for 4, hold empty for 4.",
    },
    // Warmup
    PoseEntry {
        id: "1",
        sanskrit_name: "Balasana",
        english_name: "Child's Pose",
        difficulty: Difficulty::Beginner,
        category: PoseCategory::Warmup,
        benefits: &["Relaxation", "Back Pain Relief", "Calm"],
        duration_default: 60,
        description: "Kneel, touch your big toes together and sit back on your heels, then widen the knees to hip width.",
    },
    PoseEntry {
        id: "2",
        sanskrit_name: "Marjaryasana-Bitilasana",
        english_name: "Cat-Cow",
        difficulty: Difficulty::Beginner,
        category: PoseCategory::Warmup,
        benefits: &["Spine Flexibility", "Warming", "Tension Relief"],
        duration_default: 60,
        description: "Move the spine gently between rounding (Cat) and arching (Cow), synchronized with the breath.",
    },
    PoseEntry {
        id: "3",
        sanskrit_name: "Adho Mukha Svanasana",
        english_name: "Downward-Facing Dog",
        difficulty: Difficulty::Beginner,
        category: PoseCategory::Warmup,
        benefits: &["Energy", "Posterior Stretch", "Arm Strength"],
        duration_default: 45,
        description: "Form an inverted V, pressing the floor away with your hands and reaching the heels toward the ground.",
    },
    PoseEntry {
        id: "4",
        sanskrit_name: "Uttanasana",
        english_name: "Standing Forward Fold",
        difficulty: Difficulty::Beginner,
        category: PoseCategory::Warmup,
        benefits: &["Calm", "Stretch", "Stress Relief"],
        duration_default: 30,
        description: "From standing, exhale and fold forward from the hips, keeping the spine long.",
    },
    // Standing
    PoseEntry {
        id: "5",
        sanskrit_name: "Tadasana",
        english_name: "Mountain Pose",
        difficulty: Difficulty::Beginner,
        category: PoseCategory::Standing,
        benefits: &["Posture", "Focus", "Balance"],
        duration_default: 30,
        description: "Stand with the bases of the big toes touching, heels slightly apart.",
    },
    PoseEntry {
        id: "6",
        sanskrit_name: "Virabhadrasana I",
        english_name: "Warrior I",
        difficulty: Difficulty::Beginner,
        category: PoseCategory::Standing,
        benefits: &["Strength", "Focus", "Stability"],
        duration_default: 45,
        description: "Step one foot far back, turn it out 45 degrees and bend the front knee.",
    },
    PoseEntry {
        id: "7",
        sanskrit_name: "Virabhadrasana II",
        english_name: "Warrior II",
        difficulty: Difficulty::Beginner,
        category: PoseCategory::Standing,
        benefits: &["Leg Strength", "Hip Opening", "Endurance"],
        duration_default: 45,
        description: "Arms extended to the sides, gaze fixed over the front hand.",
    },
    PoseEntry {
        id: "8",
        sanskrit_name: "Virabhadrasana III",
        english_name: "Warrior III",
        difficulty: Difficulty::Intermediate,
        category: PoseCategory::Standing,
        benefits: &["Balance", "Core", "Back Strength"],
        duration_default: 30,
        description: "Balance on one leg, hinging the torso forward and extending the other leg behind you.",
    },
    PoseEntry {
        id: "9",
        sanskrit_name: "Trikonasana",
        english_name: "Triangle Pose",
        difficulty: Difficulty::Beginner,
        category: PoseCategory::Standing,
        benefits: &["Side Stretch", "Stability", "Digestion"],
        duration_default: 45,
        description: "Reach forward and lower the hand to the shin or floor, opening the chest to the side.",
    },
    PoseEntry {
        id: "10",
        sanskrit_name: "Vrksasana",
        english_name: "Tree Pose",
        difficulty: Difficulty::Beginner,
        category: PoseCategory::Standing,
        benefits: &["Balance", "Focus", "Calm"],
        duration_default: 60,
        description: "Press the sole of one foot into the inner thigh or calf of the other leg, hands at the heart.",
    },
    PoseEntry {
        id: "11",
        sanskrit_name: "Utkatasana",
        english_name: "Chair Pose",
        difficulty: Difficulty::Beginner,
        category: PoseCategory::Standing,
        benefits: &["Leg Strength", "Heat", "Energy"],
        duration_default: 30,
        description: "Bend the knees as if sitting into an imaginary chair, arms lifted overhead.",
    },
    PoseEntry {
        id: "12",
        sanskrit_name: "Garudasana",
        english_name: "Eagle Pose",
        difficulty: Difficulty::Intermediate,
        category: PoseCategory::Standing,
        benefits: &["Balance", "Shoulder Opening", "Focus"],
        duration_default: 45,
        description: "Cross one leg over the other and one arm under the other, pressing the palms together.",
    },
    // Core
    PoseEntry {
        id: "13",
        sanskrit_name: "Phalakasana",
        english_name: "Plank",
        difficulty: Difficulty::Beginner,
        category: PoseCategory::Core,
        benefits: &["Core Strength", "Arms", "Stability"],
        duration_default: 45,
        description: "Hands under the shoulders, body in one straight line from heels to crown.",
    },
    PoseEntry {
        id: "14",
        sanskrit_name: "Navasana",
        english_name: "Boat Pose",
        difficulty: Difficulty::Intermediate,
        category: PoseCategory::Core,
        benefits: &["Core", "Balance", "Digestion"],
        duration_default: 30,
        description: "Balance on the sitting bones, lifting the legs and extending the arms forward.",
    },
    PoseEntry {
        id: "15",
        sanskrit_name: "Vasisthasana",
        english_name: "Side Plank",
        difficulty: Difficulty::Intermediate,
        category: PoseCategory::Core,
        benefits: &["Arm Strength", "Obliques", "Balance"],
        duration_default: 30,
        description: "Support yourself on one hand and the outer edge of the foot, lifting the hips high.",
    },
    // Seated and twists
    PoseEntry {
        id: "16",
        sanskrit_name: "Dandasana",
        english_name: "Staff Pose",
        difficulty: Difficulty::Beginner,
        category: PoseCategory::Seated,
        benefits: &["Posture", "Alignment", "Breathing"],
        duration_default: 60,
        description: "Sit with the legs extended forward, spine tall, hands beside the hips.",
    },
    PoseEntry {
        id: "17",
        sanskrit_name: "Paschimottanasana",
        english_name: "Seated Forward Fold",
        difficulty: Difficulty::Beginner,
        category: PoseCategory::Seated,
        benefits: &["Calm", "Stretch", "Introspection"],
        duration_default: 60,
        description: "Seated, hinge forward over the legs holding the feet or shins.",
    },
    PoseEntry {
        id: "18",
        sanskrit_name: "Janu Sirsasana",
        english_name: "Head-to-Knee Pose",
        difficulty: Difficulty::Beginner,
        category: PoseCategory::Seated,
        benefits: &["Flexibility", "Digestion", "Calm"],
        duration_default: 45,
        description: "One leg extended, the other bent with the foot at the inner thigh. Fold over the straight leg.",
    },
    PoseEntry {
        id: "19",
        sanskrit_name: "Ardha Matsyendrasana",
        english_name: "Seated Twist",
        difficulty: Difficulty::Beginner,
        category: PoseCategory::Seated,
        benefits: &["Spine", "Digestion", "Energy"],
        duration_default: 45,
        description: "Seated, cross one leg over the other and twist the torso gently toward the top knee.",
    },
    PoseEntry {
        id: "20",
        sanskrit_name: "Baddha Konasana",
        english_name: "Butterfly Pose",
        difficulty: Difficulty::Beginner,
        category: PoseCategory::Seated,
        benefits: &["Hip Opening", "Circulation", "Relaxation"],
        duration_default: 60,
        description: "Bring the soles of the feet together and let the knees fall out to the sides.",
    },
    // Inversions and backbends
    PoseEntry {
        id: "21",
        sanskrit_name: "Setu Bandhasana",
        english_name: "Bridge Pose",
        difficulty: Difficulty::Beginner,
        category: PoseCategory::Inversion,
        benefits: &["Spine", "Chest", "Thyroid"],
        duration_default: 45,
        description: "Lying on your back, bend the knees and lift the hips away from the floor.",
    },
    PoseEntry {
        id: "22",
        sanskrit_name: "Bhujangasana",
        english_name: "Cobra Pose",
        difficulty: Difficulty::Beginner,
        category: PoseCategory::Restorative,
        benefits: &["Spine", "Chest", "Lungs"],
        duration_default: 30,
        description: "Lying face down, place the hands under the shoulders and lift the chest gently.",
    },
    PoseEntry {
        id: "23",
        sanskrit_name: "Ustrasana",
        english_name: "Camel Pose",
        difficulty: Difficulty::Intermediate,
        category: PoseCategory::Restorative,
        benefits: &["Energy", "Front Opening", "Posture"],
        duration_default: 30,
        description: "Kneeling, lean back and reach for the heels, lifting through the chest.",
    },
    PoseEntry {
        id: "24",
        sanskrit_name: "Salamba Sarvangasana",
        english_name: "Shoulder Stand",
        difficulty: Difficulty::Intermediate,
        category: PoseCategory::Inversion,
        benefits: &["Circulation", "Calm", "Thyroid"],
        duration_default: 45,
        description: "Lie down and lift the legs and hips, supporting the back with your hands.",
    },
    // Restorative and closing
    PoseEntry {
        id: "25",
        sanskrit_name: "Supta Baddha Konasana",
        english_name: "Reclined Butterfly",
        difficulty: Difficulty::Beginner,
        category: PoseCategory::Restorative,
        benefits: &["Deep Relaxation", "Pelvic Opening"],
        duration_default: 90,
        description: "Lie on your back, join the soles of the feet and let the knees fall open.",
    },
    PoseEntry {
        id: "26",
        sanskrit_name: "Ananda Balasana",
        english_name: "Happy Baby",
        difficulty: Difficulty::Beginner,
        category: PoseCategory::Restorative,
        benefits: &["Hips", "Spine", "Calming"],
        duration_default: 60,
        description: "Lying down, hold the outer edges of the feet and draw the knees toward the armpits.",
    },
    PoseEntry {
        id: "27",
        sanskrit_name: "Viparita Karani",
        english_name: "Legs Up the Wall",
        difficulty: Difficulty::Beginner,
        category: PoseCategory::Restorative,
        benefits: &["Circulation", "Rest", "Tired Leg Relief"],
        duration_default: 120,
        description: "Lie close to a wall and extend the legs straight up, resting them against it.",
    },
    PoseEntry {
        id: "28",
        sanskrit_name: "Eka Pada Rajakapotasana",
        english_name: "Pigeon Pose",
        difficulty: Difficulty::Intermediate,
        category: PoseCategory::Restorative,
        benefits: &["Deep Hips", "Emotional Release", "Flexibility"],
        duration_default: 60,
        description: "Bring one leg forward bent and extend the other straight behind you.",
    },
    PoseEntry {
        id: "29",
        sanskrit_name: "Matsyasana",
        english_name: "Fish Pose",
        difficulty: Difficulty::Beginner,
        category: PoseCategory::Restorative,
        benefits: &["Chest", "Throat", "Neck Release"],
        duration_default: 30,
        description: "Lying on your back, prop yourself on the forearms and arch the chest upward.",
    },
    PoseEntry {
        id: "30",
        sanskrit_name: "Savasana",
        english_name: "Corpse Pose",
        difficulty: Difficulty::Beginner,
        category: PoseCategory::Closing,
        benefits: &["Integration", "Total Peace", "Relaxation"],
        duration_default: 300,
        description: "Lie on your back, arms and legs relaxed, eyes closed.",
    },
];

/// Materialize the full pose catalog.
pub fn pose_catalog() -> Vec<Pose> {
    POSES.iter().map(PoseEntry::build).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_has_unique_ids() {
        let catalog = pose_catalog();
        let mut ids: Vec<&str> = catalog.iter().map(|p| p.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), catalog.len());
    }

    #[test]
    fn catalog_contains_exactly_one_closing_pose() {
        let catalog = pose_catalog();
        let closing: Vec<_> = catalog
            .iter()
            .filter(|p| p.category == PoseCategory::Closing)
            .collect();
        assert_eq!(closing.len(), 1);
        assert_eq!(closing[0].sanskrit_name, "Savasana");
    }
}
