use crate::types::{Routine, RoutineItem, User};

/// Number of routine items previewed on the dashboard.
pub const ROUTINE_PREVIEW: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Feature {
    pub title: &'static str,
    pub description: &'static str,
    pub command: &'static str,
}

pub const FEATURES: [Feature; 4] = [
    Feature {
        title: "Exam Predictor",
        description: "Upload PYQs to find high-yield questions.",
        command: "pyq analyze",
    },
    Feature {
        title: "AI Tutor",
        description: "Learn new topics from scratch.",
        command: "chat tutor",
    },
    Feature {
        title: "Counsellor",
        description: "Share your feelings safely.",
        command: "chat counsellor",
    },
    Feature {
        title: "Routine Planner",
        description: "Organize your life and study.",
        command: "routine generate",
    },
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dashboard {
    pub greeting: String,
    pub features: &'static [Feature],
    /// First items of the latest routine, empty when none exists.
    pub today: Vec<RoutineItem>,
}

impl Dashboard {
    #[must_use]
    pub fn build(user: &User, current: Option<Routine>) -> Self {
        let today = current
            .map(|routine| routine.items.into_iter().take(ROUTINE_PREVIEW).collect())
            .unwrap_or_default();

        let first_name = user.name.split_whitespace().next().unwrap_or(&user.name);

        Self {
            greeting: format!("Welcome back, {first_name}! Ready to achieve your goals today?"),
            features: &FEATURES,
            today,
        }
    }
}
