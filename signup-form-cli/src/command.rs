//! Parsing console lines into form events.

use signup_form::fields::Field;
use signup_form::form::{AgeInputError, EditEvent, FormEvent};

/// One console command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Event(FormEvent),
    Show,
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CommandError {
    #[error("Unknown command '{0}' (try 'help')")]
    UnknownCommand(String),

    #[error("Unknown field '{0}' (expected email, name or age)")]
    UnknownField(String),

    #[error("'{0}' needs a field name")]
    MissingField(&'static str),

    #[error(transparent)]
    AgeInput(#[from] AgeInputError),
}

pub const HELP: &str = "\
Commands:
  email <text>     set the email
  name <text>      set the display name
  age [number]     set the age (empty clears it)
  blur <field>     validate one field (email, name, age)
  submit           validate everything
  reset            clear the form
  show             print the form
  help             print this help
  quit             exit";

/// Parse one input line. Blank lines are `None`.
pub fn parse_line(line: &str) -> Result<Option<Command>, CommandError> {
    let line = line.trim_end_matches(['\r', '\n']);
    if line.trim().is_empty() {
        return Ok(None);
    }

    let trimmed = line.trim_start();
    let (keyword, rest) = trimmed.split_once(' ').unwrap_or((trimmed, ""));

    let command = match keyword {
        "email" => Command::Event(EditEvent::Email(rest.to_string()).into()),
        "name" => Command::Event(EditEvent::DisplayName(rest.to_string()).into()),
        "age" => Command::Event(EditEvent::age_from_text(rest)?.into()),
        "blur" => {
            let name = rest.trim();
            if name.is_empty() {
                return Err(CommandError::MissingField("blur"));
            }
            Command::Event(FormEvent::Blur(parse_field(name)?))
        }
        "submit" => Command::Event(FormEvent::Submit),
        "reset" => Command::Event(FormEvent::Reset),
        "show" => Command::Show,
        "help" | "?" => Command::Help,
        "quit" | "exit" => Command::Quit,
        other => return Err(CommandError::UnknownCommand(other.to_string())),
    };
    Ok(Some(command))
}

fn parse_field(name: &str) -> Result<Field, CommandError> {
    match name.to_ascii_lowercase().as_str() {
        "email" => Ok(Field::Email),
        "name" | "display-name" | "display_name" => Ok(Field::DisplayName),
        "age" => Ok(Field::Age),
        _ => Err(CommandError::UnknownField(name.to_string())),
    }
}
