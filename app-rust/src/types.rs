//! Records persisted by the application.
//!
//! Field names follow the camelCase JSON documents kept in the store, so a
//! stored collection round-trips unchanged.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub avatar: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grade: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub goal: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Feedback {
    pub is_helpful: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

/// A file sent along with a chat message or a question paper.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Attachment {
    pub name: String,
    pub mime_type: String,
    /// Base64 string.
    pub data: String,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Model,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ChatMessage {
    pub id: String,
    pub role: ChatRole,
    pub text: String,
    /// Milliseconds since the Unix epoch.
    pub timestamp: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub feedback: Option<Feedback>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attachment: Option<Attachment>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Importance {
    High,
    Medium,
    Low,
}

impl fmt::Display for Importance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::High => "High",
            Self::Medium => "Medium",
            Self::Low => "Low",
        };
        f.pad(label)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TopicInsight {
    pub topic: String,
    pub importance: Importance,
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PredictedQuestion {
    pub question: String,
    pub answer: String,
    pub explanation: String,
    /// Expected between 0 and 100. Not enforced: the value is shown as the
    /// model returned it.
    pub probability_score: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PyqAnalysis {
    pub id: String,
    pub subject: String,
    pub topics: Vec<TopicInsight>,
    pub predicted_questions: Vec<PredictedQuestion>,
    pub timestamp: i64,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Academic,
    Personal,
    Health,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Academic => "Academic",
            Self::Personal => "Personal",
            Self::Health => "Health",
        };
        f.pad(label)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RoutineItem {
    pub time: String,
    pub activity: String,
    pub category: Category,
    #[serde(default)]
    pub completed: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Routine {
    pub id: String,
    pub date: String,
    pub items: Vec<RoutineItem>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub id: String,
    pub user_name: String,
    pub user_avatar: String,
    pub rating: u8,
    pub comment: String,
    pub date: String,
}

pub(crate) fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// Today's date as shown to the user, e.g. `3/14/2025`.
pub(crate) fn today() -> String {
    chrono::Local::now().format("%-m/%-d/%Y").to_string()
}

pub(crate) fn new_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn chat_message_uses_stored_field_names() {
        let message = ChatMessage {
            id: "m1".to_string(),
            role: ChatRole::Model,
            text: "Hi".to_string(),
            timestamp: 1_700_000_000_000,
            feedback: Some(Feedback {
                is_helpful: true,
                comment: None,
            }),
            attachment: Some(Attachment {
                name: "q.png".to_string(),
                mime_type: "image/png".to_string(),
                data: "AAAA".to_string(),
            }),
        };

        assert_eq!(
            serde_json::to_value(&message).unwrap(),
            json!({
                "id": "m1",
                "role": "model",
                "text": "Hi",
                "timestamp": 1_700_000_000_000_i64,
                "feedback": { "isHelpful": true },
                "attachment": { "name": "q.png", "mimeType": "image/png", "data": "AAAA" }
            })
        );
    }

    #[test]
    fn routine_item_defaults_completed_to_false() {
        let item: RoutineItem = serde_json::from_value(json!({
            "time": "08:00 AM - 09:00 AM",
            "activity": "Revise calculus",
            "category": "academic"
        }))
        .unwrap();

        assert_eq!(item.category, Category::Academic);
        assert!(!item.completed);
    }

    #[test]
    fn probability_score_is_not_clamped() {
        let question: PredictedQuestion = serde_json::from_value(json!({
            "question": "Q",
            "answer": "A",
            "explanation": "E",
            "probabilityScore": 140
        }))
        .unwrap();

        assert!((question.probability_score - 140.0).abs() < f64::EPSILON);
    }
}
