use crate::cli::app_context::AppContext;
use crate::cli::args::MessageCommand;
use crate::cli::handlers::{id_label, settle, HandlerResult};
use crate::modules::contact::application::domain::{ContactMessage, NewContactMessage};
use crate::shared::ui::{truncate_text, Notice};

const PREVIEW_CHARS: usize = 40;

pub async fn handle(ctx: &AppContext, action: MessageCommand) -> Notice {
    let result = match action {
        MessageCommand::List => list(ctx).await,
        MessageCommand::Show { id } => match ctx.contact.get_single.execute(id).await {
            Ok(message) => {
                print_message(&message);
                Ok(Notice::info(format!("Message {id}")))
            }
            Err(e) => Err(Notice::from_error(&e)),
        },
        MessageCommand::Send {
            name,
            email,
            message,
        } => {
            let draft = NewContactMessage::new(name, email, message);
            match ctx.contact.send.execute(draft).await {
                Ok(_) => Ok(Notice::success("Thank you! Your message has been sent.")),
                Err(e) => Err(Notice::from_error(&e)),
            }
        }
        MessageCommand::Delete { id } => match ctx.contact.delete.execute(id).await {
            // the backend answers with a plain-text confirmation
            Ok(confirmation) if !confirmation.trim().is_empty() => {
                Ok(Notice::success(confirmation.trim()))
            }
            Ok(_) => Ok(Notice::success(format!("Message {id} deleted"))),
            Err(e) => Err(Notice::from_error(&e)),
        },
    };
    settle(result)
}

async fn list(ctx: &AppContext) -> HandlerResult {
    let messages = ctx
        .contact
        .get_list
        .execute()
        .await
        .map_err(|e| Notice::from_error(&e))?;

    if messages.is_empty() {
        return Ok(Notice::info("No messages"));
    }

    println!("{:<6} {:<17} {:<24} Message", "ID", "Received", "From");
    println!("{}", "─".repeat(80));
    for message in &messages {
        println!(
            "{:<6} {:<17} {:<24} {}",
            id_label(message.id),
            message.received_label(),
            truncate_text(&message.name, 21),
            truncate_text(&message.message, PREVIEW_CHARS)
        );
    }
    Ok(Notice::info(format!("{} message(s)", messages.len())))
}

fn print_message(message: &ContactMessage) {
    println!("From:     {} <{}>", message.name, message.email);
    println!("Received: {}", message.received_label());
    println!();
    println!("{}", message.message);
}
