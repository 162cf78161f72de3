// src/modules/chatbot/rule_table.rs

/// One canned answer and the keywords that trigger it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatRule {
    pub keywords: Vec<String>,
    pub response: String,
}

impl ChatRule {
    pub fn new(keywords: &[&str], response: impl Into<String>) -> Self {
        Self {
            keywords: keywords.iter().map(|k| k.to_lowercase()).collect(),
            response: response.into(),
        }
    }

    /// Keywords with spaces or punctuation (`ci/cd`, `good morning`) match
    /// anywhere in the question. Plain keywords match a word: as a prefix
    /// when longer than three letters (`skill` matches `skills`), exactly
    /// otherwise (`hi` does not match `history`).
    fn matches(&self, question: &str) -> bool {
        let words: Vec<&str> = question
            .split(|c: char| !c.is_alphanumeric())
            .filter(|w| !w.is_empty())
            .collect();

        self.keywords.iter().any(|keyword| {
            if !keyword.chars().all(char::is_alphanumeric) {
                question.contains(keyword.as_str())
            } else if keyword.chars().count() > SHORT_KEYWORD_CHARS {
                words.iter().any(|w| w.starts_with(keyword.as_str()))
            } else {
                words.iter().any(|w| w == keyword)
            }
        })
    }
}

const SHORT_KEYWORD_CHARS: usize = 3;

/// Ordered keyword rules. The first rule with a keyword found in the
/// question wins; otherwise the fallback answers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleTable {
    rules: Vec<ChatRule>,
    fallback: String,
}

impl RuleTable {
    pub fn new(rules: Vec<ChatRule>, fallback: impl Into<String>) -> Self {
        Self {
            rules,
            fallback: fallback.into(),
        }
    }

    pub fn rules(&self) -> &[ChatRule] {
        &self.rules
    }

    pub fn respond(&self, question: &str) -> &str {
        let question = question.trim().to_lowercase();
        self.rules
            .iter()
            .find(|rule| rule.matches(&question))
            .map_or(self.fallback.as_str(), |rule| rule.response.as_str())
    }
}

impl Default for RuleTable {
    fn default() -> Self {
        Self::new(
            vec![
                ChatRule::new(
                    &["hello", "hi", "hey", "good morning"],
                    "Hello! Ask me about skills, experience, projects or how to get in touch.",
                ),
                ChatRule::new(&["thank", "thanks"], "You're welcome!"),
                ChatRule::new(
                    &["skill", "stack", "technolog", "expertise"],
                    "Main stack: Spring Boot and NestJS on the backend, Angular and Next.js on the front end, Kafka for messaging.",
                ),
                ChatRule::new(
                    &["experience", "internship", "company", "job"],
                    "Several internships building REST APIs and microservices, most recently on an event-driven platform.",
                ),
                ChatRule::new(
                    &["project", "portfolio", "built"],
                    "The projects section lists every project with screenshots and the technologies used.",
                ),
                ChatRule::new(
                    &["education", "degree", "study", "school"],
                    "Software engineering degree, with a focus on distributed systems.",
                ),
                ChatRule::new(
                    &["devops", "ci/cd", "docker", "deploy"],
                    "CI/CD pipelines with Jenkins and SonarQube, containers with Docker.",
                ),
                ChatRule::new(
                    &["contact", "email", "reach", "linkedin"],
                    "Use the contact form on this site; every message is read.",
                ),
                ChatRule::new(
                    &["who", "about", "yourself", "profile"],
                    "A full-stack developer who enjoys backend architecture and clean APIs.",
                ),
            ],
            "I don't have an answer for that yet. Try asking about skills, experience, projects or contact details.",
        )
    }
}
