pub mod chat_session;
pub mod rule_table;

pub use chat_session::{ChatMessage, ChatRole, ChatSession};
pub use rule_table::{ChatRule, RuleTable};
