// src/modules/chatbot/chat_session.rs
use crate::modules::chatbot::rule_table::RuleTable;

pub const GREETING: &str =
    "Hi! I'm the portfolio assistant. Pick a question below or type your own.";

pub const SUGGESTED_QUESTIONS: &[&str] = &[
    "What are your main skills?",
    "Tell me about your experience",
    "Which projects have you built?",
    "How can I contact you?",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatRole {
    User,
    Assistant,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub content: String,
}

/// Transcript of one chat widget. Starts with the greeting.
#[derive(Debug, Clone)]
pub struct ChatSession {
    rules: RuleTable,
    transcript: Vec<ChatMessage>,
}

impl Default for ChatSession {
    fn default() -> Self {
        Self::new(RuleTable::default())
    }
}

impl ChatSession {
    pub fn new(rules: RuleTable) -> Self {
        Self {
            rules,
            transcript: vec![ChatMessage {
                role: ChatRole::Assistant,
                content: GREETING.to_string(),
            }],
        }
    }

    pub fn transcript(&self) -> &[ChatMessage] {
        &self.transcript
    }

    pub fn suggested_questions(&self) -> &'static [&'static str] {
        SUGGESTED_QUESTIONS
    }

    /// Records the question and its answer. Blank input is ignored.
    pub fn ask(&mut self, question: &str) -> Option<&str> {
        let question = question.trim();
        if question.is_empty() {
            return None;
        }

        let answer = self.rules.respond(question).to_string();
        self.transcript.push(ChatMessage {
            role: ChatRole::User,
            content: question.to_string(),
        });
        self.transcript.push(ChatMessage {
            role: ChatRole::Assistant,
            content: answer,
        });
        self.transcript.last().map(|m| m.content.as_str())
    }

    /// Back to the greeting only.
    pub fn reset(&mut self) {
        self.transcript.truncate(1);
    }
}
