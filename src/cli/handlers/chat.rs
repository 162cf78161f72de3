use crate::cli::handlers::HandlerResult;
use crate::modules::chatbot::{ChatRole, ChatSession};
use crate::shared::ui::Notice;

pub fn ask(questions: &[String]) -> HandlerResult {
    let mut session = ChatSession::default();

    if questions.is_empty() {
        print_transcript(&session);
        println!();
        println!("Try one of:");
        for question in session.suggested_questions() {
            println!("  - {question}");
        }
        return Ok(Notice::info("Pass a question to ask the assistant"));
    }

    // blank questions are skipped by the session
    let answered = questions
        .iter()
        .filter(|question| session.ask(question).is_some())
        .count();
    print_transcript(&session);
    Ok(Notice::info(format!("{answered} question(s) answered")))
}

fn print_transcript(session: &ChatSession) {
    for message in session.transcript() {
        let speaker = match message.role {
            ChatRole::User => "you",
            ChatRole::Assistant => "bot",
        };
        println!("{speaker:>4}: {}", message.content);
    }
}
