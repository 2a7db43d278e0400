use colored::Colorize;
use inquire::Text;

use crate::error::AppError;

/// Prompts user for input until valid input is provided
///
/// # Arguments
/// * `prompt_message` - Question shown to the user
/// * `help_message` - Hint shown under the question
/// * `placeholder` - Greyed-out example answer, if any
/// * `input_validation` - Check run on every answer
pub fn prompt_until_valid<F>(
    prompt_message: &str,
    help_message: &str,
    placeholder: Option<&str>,
    input_validation: F,
) -> Result<String, AppError>
where
    F: Fn(&str) -> Result<(), AppError>,
{
    loop {
        let mut text: Text = Text::new(prompt_message).with_help_message(help_message);
        if let Some(placeholder) = placeholder {
            text = text.with_placeholder(placeholder);
        }

        let input: String = text.prompt()?;
        match input_validation(&input) {
            Ok(_) => break Ok(input),
            Err(AppError::Validation(msg)) => println!("{}", msg.red()),
            Err(e) => return Err(e),
        }
    }
}

// Validate input helper functions

/// Validates username input
pub fn validate_input_username(name: &str) -> Result<(), AppError> {
    if name.is_empty() {
        Err(AppError::Validation("username required".to_string()))
    } else {
        Ok(())
    }
}

/// Validates email input
///
/// Only checks for `@` and `.`, so no-reply forwarding addresses always pass.
pub fn validate_input_email(email: &str) -> Result<(), AppError> {
    if !email.contains('@') || !email.contains('.') {
        Err(AppError::Validation("not a valid email address".to_string()))
    } else {
        Ok(())
    }
}
