use crate::store::{COUNSELLOR_CHAT_KEY, TUTOR_CHAT_KEY};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

const TUTOR_INSTRUCTION: &str = "You are an expert AI Tutor. Your goal is to explain complex topics simply, starting from the basics. Be patient, encouraging, and use examples. If a user asks something unrelated to learning, gently steer them back to academics. You can analyze images or documents if provided.";

const COUNSELLOR_INSTRUCTION: &str = "You are a warm, empathetic, and caring AI Counsellor. Your name is 'Mira'. Listen actively to the user's personal or academic struggles. Validate their feelings. Offer gentle, non-judgmental advice. Prioritize their mental well-being. Speak in a human-like, conversational tone.";

const TUTOR_GREETING: &str = "Hello! I'm your AI Tutor. What topic would you like to learn about today? I can explain things from the basics. You can also upload images of questions.";

const COUNSELLOR_GREETING: &str = "Hi there, I'm Mira. I'm here to listen. How have you been feeling lately? You can share anything with me.";

/// Which assistant a chat surface talks to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatMode {
    Tutor,
    Counsellor,
}

impl ChatMode {
    #[must_use]
    pub fn system_instruction(self) -> &'static str {
        match self {
            Self::Tutor => TUTOR_INSTRUCTION,
            Self::Counsellor => COUNSELLOR_INSTRUCTION,
        }
    }

    /// First message shown when a surface has no stored history.
    #[must_use]
    pub fn greeting(self) -> &'static str {
        match self {
            Self::Tutor => TUTOR_GREETING,
            Self::Counsellor => COUNSELLOR_GREETING,
        }
    }

    #[must_use]
    pub fn storage_key(self) -> &'static str {
        match self {
            Self::Tutor => TUTOR_CHAT_KEY,
            Self::Counsellor => COUNSELLOR_CHAT_KEY,
        }
    }

    /// Only the tutor reads images and documents.
    #[must_use]
    pub fn accepts_attachments(self) -> bool {
        matches!(self, Self::Tutor)
    }

    #[must_use]
    pub fn tagline(self) -> &'static str {
        match self {
            Self::Tutor => "Expert in simplifying complex topics",
            Self::Counsellor => "Here to listen and support you",
        }
    }
}

impl fmt::Display for ChatMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Tutor => f.write_str("tutor"),
            Self::Counsellor => f.write_str("counsellor"),
        }
    }
}

impl FromStr for ChatMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "tutor" => Ok(Self::Tutor),
            "counsellor" | "counselor" => Ok(Self::Counsellor),
            other => Err(format!("unknown chat mode '{other}'")),
        }
    }
}
