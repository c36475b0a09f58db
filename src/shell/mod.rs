//! Line-oriented shell over a `StudentRepository`.
//!
//! Parsing and field validation live here; the repository itself only
//! enforces identity rules.

mod command;

pub use command::{parse, split_commands, Command, ParseError};

use std::io::{self, Write};

use crate::record::Student;
use crate::repository::StudentRepository;
use crate::store::RosterStore;

/// Result of handling one line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandResult {
    /// Nothing to print.
    Continue,
    /// Text to display.
    Output(String),
    /// Leave the shell.
    Exit,
}

/// Parse and execute one line against `repo`.
///
/// Parse failures and repository errors become output text; the shell
/// never aborts on a bad command.
pub fn handle_line<S: RosterStore>(repo: &mut StudentRepository<S>, line: &str) -> CommandResult {
    match parse(line) {
        Ok(Some(command)) => execute(repo, command),
        Ok(None) => CommandResult::Continue,
        Err(err) => CommandResult::Output(format!("error: {err}")),
    }
}

/// Handle every line in order, printing each result to `out`.
///
/// Stops early at `quit` or at the first read error.
pub fn run_session<S, I, W>(
    repo: &mut StudentRepository<S>,
    lines: I,
    out: &mut W,
) -> io::Result<()>
where
    S: RosterStore,
    I: IntoIterator<Item = io::Result<String>>,
    W: Write,
{
    for line in lines {
        match handle_line(repo, &line?) {
            CommandResult::Continue => {}
            CommandResult::Output(text) => writeln!(out, "{}", text)?,
            CommandResult::Exit => break,
        }
    }
    Ok(())
}

pub fn execute<S: RosterStore>(repo: &mut StudentRepository<S>, command: Command) -> CommandResult {
    let text = match command {
        Command::Add(student) => {
            let id = student.id.clone();
            match repo.add(student) {
                Ok(()) => format!("added {id}"),
                Err(err) => format!("error: {err}"),
            }
        }
        Command::Update {
            id,
            name,
            age,
            grade,
        } => match repo.update(&id, name, age, grade) {
            Ok(student) => format!("updated {}", format_student(student)),
            Err(err) => format!("error: {err}"),
        },
        Command::Delete(id) => match repo.delete(&id) {
            Some(student) => format!("deleted {}", student.id),
            None => format!("no student with id {id}"),
        },
        Command::Undo => match repo.undo_delete() {
            Some(student) => format!("restored {}", student.name),
            None => "nothing to undo".to_string(),
        },
        Command::Get(id) => match repo.get_by_id(&id) {
            Some(student) => format_student(student),
            None => format!("no student with id {id}"),
        },
        Command::List => {
            if repo.is_empty() {
                "no students".to_string()
            } else {
                format_table(&repo.get_all())
            }
        }
        Command::Search(query) => match repo.search(&query) {
            Some(student) => format_student(student),
            None => format!("no match for '{query}'"),
        },
        Command::Sort(mode) => {
            if repo.sort_by_name(&mode) {
                format!("sorted by {mode}")
            } else {
                format!("unknown sort mode '{mode}', order unchanged")
            }
        }
        Command::Top => match repo.top_student() {
            Some(student) => format!("top student: {}", format_student(student)),
            None => "no students available".to_string(),
        },
        Command::Save => match repo.save() {
            Ok(()) => format!("saved to {}", repo.location()),
            Err(err) => format!("error: {err}"),
        },
        Command::Export(path) => match repo.export_to(&path) {
            Ok(()) => format!("exported to {}", path.display()),
            Err(err) => format!("error: {err}"),
        },
        Command::Help => help().to_string(),
        Command::Quit => return CommandResult::Exit,
    };

    CommandResult::Output(text)
}

pub fn format_student(student: &Student) -> String {
    format!(
        "{} | {} | {} | {}",
        student.id, student.name, student.age, student.grade
    )
}

fn format_table(students: &[Student]) -> String {
    students
        .iter()
        .map(format_student)
        .collect::<Vec<_>>()
        .join("\n")
}

fn help() -> &'static str {
    "commands:
  add <id> <name> <age> <grade>      add a student (quote names with spaces)
  update <id> <name> <age> <grade>   change name, age and grade
  delete <id>                        delete a student (undoable)
  undo                               restore the last deleted student
  get <id>                           show one student
  list                               show every student
  search <query>                     first student whose id or name contains query
  sort <mode>                        name_asc name_desc age_asc age_desc grade_asc grade_desc
  top                                student with the highest grade
  save                               write the roster to its file
  export <path>                      write the roster to another file
  help                               show this text
  quit                               leave"
}
