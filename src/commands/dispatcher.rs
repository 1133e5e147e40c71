//! Routes parsed commands to directory operations and renders the replies.

use super::format::{birthdays_list, contacts_table};
use super::parser::{parse_input, Command};
use crate::domain::Birthday;
use crate::error::{CommandError, CommandResult, ContactError};
use crate::repositories::{ContactDirectory, UpsertOutcome};
use crate::services::{upcoming_birthdays_within, Clock, SystemClock, DEFAULT_BIRTHDAY_WINDOW_DAYS};

/// What the caller should do after printing a reply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Print the text and read the next command.
    Continue(String),
    /// Print the text and stop.
    Exit(String),
}

impl Reply {
    pub fn text(&self) -> &str {
        match self {
            Reply::Continue(text) | Reply::Exit(text) => text,
        }
    }

    pub fn is_exit(&self) -> bool {
        matches!(self, Reply::Exit(_))
    }
}

/// The interactive assistant: owns the address book and answers commands.
#[derive(Debug)]
pub struct Assistant<C: Clock = SystemClock> {
    directory: ContactDirectory,
    clock: C,
    birthday_window_days: i64,
}

impl Default for Assistant<SystemClock> {
    fn default() -> Self {
        Self::new(SystemClock)
    }
}

impl<C: Clock> Assistant<C> {
    pub fn new(clock: C) -> Self {
        Self {
            directory: ContactDirectory::new(),
            clock,
            birthday_window_days: DEFAULT_BIRTHDAY_WINDOW_DAYS,
        }
    }

    /// Override the look-ahead window used by `birthdays`.
    pub fn with_birthday_window(mut self, days: i64) -> Self {
        self.birthday_window_days = days;
        self
    }

    pub fn directory(&self) -> &ContactDirectory {
        &self.directory
    }

    /// Parse and execute one input line. Blank lines yield `None`.
    pub fn handle_line(&mut self, line: &str) -> Option<Reply> {
        let (command, args) = parse_input(line)?;
        Some(self.dispatch(&command, &args))
    }

    /// Execute a command by name. Failures become reply text; nothing here
    /// ends the session except `close`/`exit`.
    pub fn dispatch<S: AsRef<str>>(&mut self, command: &str, args: &[S]) -> Reply {
        let args: Vec<&str> = args.iter().map(AsRef::as_ref).collect();

        let Some(command) = Command::from_name(&command.to_lowercase()) else {
            tracing::debug!(command, "Unknown command");
            return Reply::Continue("Invalid command.".to_string());
        };

        if command == Command::Exit {
            return Reply::Exit("Good bye!".to_string());
        }

        tracing::debug!(command = command.name(), args = ?args, "Dispatching command");
        match self.execute(command, &args) {
            Ok(text) => Reply::Continue(text),
            Err(err) => {
                tracing::debug!(command = command.name(), error = %err, "Command failed");
                Reply::Continue(error_message(&err))
            }
        }
    }

    fn execute(&mut self, command: Command, args: &[&str]) -> CommandResult<String> {
        match (command, args) {
            (Command::Hello, _) => Ok("How can I help you?".to_string()),

            (Command::Add, [name, phone, ..]) => {
                match self.directory.upsert_contact(name, phone)? {
                    UpsertOutcome::Added => Ok("Contact added".to_string()),
                    UpsertOutcome::AlreadyExists => Ok("Contact already exists".to_string()),
                }
            }

            (Command::Change, [name, old_phone, new_phone, ..]) => {
                self.directory
                    .get_mut(name)?
                    .edit_phone(old_phone, new_phone)?;
                Ok("Phone number updated.".to_string())
            }

            (Command::Phone, [name, ..]) => self
                .directory
                .find(name)
                .map(|record| record.describe())
                .ok_or_else(|| contact_not_found(name)),

            (Command::RemovePhone, [name, phone, ..]) => {
                self.directory.get_mut(name)?.remove_phone(phone);
                Ok("Phone number removed.".to_string())
            }

            (Command::Delete, [name, ..]) => self
                .directory
                .remove(name)
                .map(|record| format!("Contact {} deleted.", record.name))
                .ok_or_else(|| contact_not_found(name)),

            (Command::All, _) => Ok(contacts_table(&self.directory)),

            (Command::AddBirthday, [name, date, ..]) => {
                let birthday = Birthday::new(date)?;
                self.directory.get_mut(name)?.set_birthday(birthday);
                Ok(format!("Birthday added for {}.", name))
            }

            (Command::ShowBirthday, [name, ..]) => {
                let record = self
                    .directory
                    .find(name)
                    .ok_or_else(|| contact_not_found(name))?;
                Ok(match record.birthday {
                    Some(birthday) => format!("Birthday for {}: {}", name, birthday),
                    None => format!("No birthday set for {}.", name),
                })
            }

            (Command::Birthdays, _) => {
                let upcoming = upcoming_birthdays_within(
                    &self.directory,
                    self.clock.today(),
                    self.birthday_window_days,
                );
                Ok(birthdays_list(&upcoming))
            }

            (Command::Exit, _) => Ok("Good bye!".to_string()),

            (command, _) => Err(command.missing_arguments()),
        }
    }
}

fn contact_not_found(name: &str) -> CommandError {
    ContactError::NotFound(format!("Contact '{}'", name)).into()
}

/// Turn a command failure into the text shown to the user.
pub fn error_message(err: &CommandError) -> String {
    match err {
        CommandError::MissingArguments { usage, .. } => {
            format!("Please enter the correct arguments. Usage: {}", usage)
        }
        CommandError::Contact(ContactError::Validation(e)) => {
            format!("Please enter the correct arguments. {}", e)
        }
        CommandError::Contact(e @ ContactError::NotFound(_)) => format!("{}.", e),
        CommandError::Contact(ContactError::Duplicate(name)) => {
            format!("The contact exists: {}", name)
        }
    }
}
