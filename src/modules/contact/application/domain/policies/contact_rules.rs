use email_address::EmailAddress;

use crate::modules::contact::application::domain::NewContactMessage;
use crate::shared::validation::ValidationErrors;

pub fn validate_message(message: &NewContactMessage) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::new();
    errors.check_text("name", "Name", &message.name, 1);

    let email = message.email.trim();
    if email.is_empty() {
        errors.push("email", "Email is required");
    } else if !EmailAddress::is_valid(email) {
        errors.push("email", "Please enter a valid email address");
    }

    errors.check_text("message", "Message", &message.message, 1);
    errors.into_result()
}
