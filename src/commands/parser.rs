//! Input line parsing and the command vocabulary.

use crate::error::CommandError;

/// Every command the assistant understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Hello,
    Add,
    Change,
    Phone,
    RemovePhone,
    Delete,
    All,
    AddBirthday,
    ShowBirthday,
    Birthdays,
    Exit,
}

impl Command {
    /// Resolve a (lower-cased) command token, including aliases.
    pub fn from_name(name: &str) -> Option<Self> {
        let command = match name {
            "hello" => Self::Hello,
            "add" | "add-contact" => Self::Add,
            "change" => Self::Change,
            "phone" | "show" => Self::Phone,
            "remove-phone" => Self::RemovePhone,
            "delete" => Self::Delete,
            "all" | "show-all" => Self::All,
            "add-birthday" => Self::AddBirthday,
            "show-birthday" => Self::ShowBirthday,
            "birthdays" => Self::Birthdays,
            "close" | "exit" => Self::Exit,
            _ => return None,
        };
        Some(command)
    }

    /// Canonical name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Hello => "hello",
            Self::Add => "add",
            Self::Change => "change",
            Self::Phone => "phone",
            Self::RemovePhone => "remove-phone",
            Self::Delete => "delete",
            Self::All => "all",
            Self::AddBirthday => "add-birthday",
            Self::ShowBirthday => "show-birthday",
            Self::Birthdays => "birthdays",
            Self::Exit => "exit",
        }
    }

    pub fn usage(self) -> &'static str {
        match self {
            Self::Hello => "hello",
            Self::Add => "add <name> <phone>",
            Self::Change => "change <name> <old_phone> <new_phone>",
            Self::Phone => "phone <name>",
            Self::RemovePhone => "remove-phone <name> <phone>",
            Self::Delete => "delete <name>",
            Self::All => "all",
            Self::AddBirthday => "add-birthday <name> <DD.MM.YYYY>",
            Self::ShowBirthday => "show-birthday <name>",
            Self::Birthdays => "birthdays",
            Self::Exit => "exit",
        }
    }

    pub fn missing_arguments(self) -> CommandError {
        CommandError::MissingArguments {
            command: self.name(),
            usage: self.usage(),
        }
    }
}

/// Split a line into a lower-cased command token and its arguments.
///
/// Returns `None` for a blank line.
pub fn parse_input(line: &str) -> Option<(String, Vec<&str>)> {
    let mut tokens = line.split_whitespace();
    let command = tokens.next()?.to_lowercase();
    Some((command, tokens.collect()))
}
