// src/chat.rs
//! Chat surface glue: conversation starters and the single-turn reply.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Starter {
    pub label: &'static str,
    pub message: &'static str,
}

pub fn starters() -> Vec<Starter> {
    vec![
        Starter {
            label: "Morning routine ideation",
            message: "Can you help me create a personalized morning routine that would help increase my productivity throughout the day? Start by asking me about my current habits and what activities energize me in the morning.",
        },
        Starter {
            label: "Travel itinerary planning",
            message: "I want to plan a week-long trip to Japan. Can you help me create an itinerary that includes must-see attractions, local cuisine recommendations, and cultural experiences? Start by asking me about my interests and travel preferences.",
        },
        Starter {
            label: "Fitness goal setting",
            message: "I want to set achievable fitness goals for the next three months. Can you help me create a workout plan and suggest healthy eating habits? Start by asking me about my current fitness level and dietary preferences.",
        },
    ]
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChatRequest {
    pub message: String,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ChatReply {
    pub content: String,
}

/// No conversation state: every message is answered on its own.
pub fn reply(message: &str) -> ChatReply {
    ChatReply {
        content: format!("You said: {message}"),
    }
}
