//! Command-line parsing for the roster shell.

use std::path::PathBuf;

use thiserror::Error;

use crate::record::Student;

/// One parsed shell command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Add(Student),
    Update {
        id: String,
        name: String,
        age: i64,
        grade: i64,
    },
    Delete(String),
    Undo,
    Get(String),
    List,
    Search(String),
    /// Mode name kept verbatim; unknown modes are ignored on execution.
    Sort(String),
    Top,
    Save,
    Export(PathBuf),
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("unknown command '{0}', type 'help' for a list of commands")]
    UnknownCommand(String),

    #[error("please fill all fields. usage: {0}")]
    MissingFields(&'static str),

    #[error("age and grade must be integers, got {field} = '{value}'")]
    NotAnInteger { field: &'static str, value: String },

    #[error("unterminated quote")]
    UnterminatedQuote,
}

const ADD_USAGE: &str = "add <id> <name> <age> <grade>";
const UPDATE_USAGE: &str = "update <id> <name> <age> <grade>";

/// Parse a single line. Blank lines yield `Ok(None)`.
pub fn parse(line: &str) -> Result<Option<Command>, ParseError> {
    let tokens = tokenize(line)?;
    let Some((head, args)) = tokens.split_first() else {
        return Ok(None);
    };

    let command = match head.to_lowercase().as_str() {
        "add" => {
            let (id, name, age, grade) = record_fields(args, ADD_USAGE)?;
            Command::Add(Student::new(id, name, age, grade))
        }
        "update" | "edit" => {
            let (id, name, age, grade) = record_fields(args, UPDATE_USAGE)?;
            Command::Update {
                id,
                name,
                age,
                grade,
            }
        }
        "delete" | "rm" => Command::Delete(single(args, "delete <id>")?),
        "undo" => Command::Undo,
        "get" => Command::Get(single(args, "get <id>")?),
        "list" | "ls" => Command::List,
        "search" | "find" => Command::Search(single(args, "search <query>")?),
        "sort" => Command::Sort(single(args, "sort <mode>")?),
        "top" => Command::Top,
        "save" => Command::Save,
        "export" => Command::Export(PathBuf::from(single(args, "export <path>")?)),
        "help" | "?" => Command::Help,
        "quit" | "exit" | "q" => Command::Quit,
        other => return Err(ParseError::UnknownCommand(other.to_string())),
    };

    Ok(Some(command))
}

fn single(args: &[String], usage: &'static str) -> Result<String, ParseError> {
    match args {
        [value] if !value.is_empty() => Ok(value.clone()),
        _ => Err(ParseError::MissingFields(usage)),
    }
}

fn record_fields(
    args: &[String],
    usage: &'static str,
) -> Result<(String, String, i64, i64), ParseError> {
    let [id, name, age, grade] = args else {
        return Err(ParseError::MissingFields(usage));
    };
    if id.is_empty() || name.is_empty() {
        return Err(ParseError::MissingFields(usage));
    }

    Ok((
        id.clone(),
        name.clone(),
        integer("age", age)?,
        integer("grade", grade)?,
    ))
}

fn integer(field: &'static str, value: &str) -> Result<i64, ParseError> {
    value.parse().map_err(|_| ParseError::NotAnInteger {
        field,
        value: value.to_string(),
    })
}

/// Split a script into commands on `;`, except inside double quotes.
///
/// Quotes are kept so each piece still parses as written. Blank pieces are
/// dropped.
pub fn split_commands(script: &str) -> Vec<String> {
    let mut commands = Vec::new();
    let mut current = String::new();
    let mut quoted = false;

    for ch in script.chars() {
        match ch {
            '"' => {
                quoted = !quoted;
                current.push(ch);
            }
            ';' if !quoted => commands.push(std::mem::take(&mut current)),
            c => current.push(c),
        }
    }
    commands.push(current);

    commands.retain(|command| !command.trim().is_empty());
    commands
}

/// Split on whitespace, keeping double-quoted runs together.
fn tokenize(line: &str) -> Result<Vec<String>, ParseError> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut in_token = false;
    let mut quoted = false;

    for ch in line.trim().chars() {
        match ch {
            '"' => {
                quoted = !quoted;
                in_token = true;
            }
            c if c.is_whitespace() && !quoted => {
                if in_token {
                    tokens.push(std::mem::take(&mut current));
                    in_token = false;
                }
            }
            c => {
                current.push(c);
                in_token = true;
            }
        }
    }

    if quoted {
        return Err(ParseError::UnterminatedQuote);
    }
    if in_token {
        tokens.push(current);
    }
    Ok(tokens)
}
