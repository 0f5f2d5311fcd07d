//! Shell command parser.
//!
//! Turns one input line into a [`Command`]. Arity and flag checks happen
//! here so that malformed invocations never reach the namespace.

use std::fmt;

use thiserror::Error;

use crate::namespace::{SortKey, SortOrder, SortSpec};

const REGISTER_SYNTAX: &str = "register [username]";
const CREATE_FOLDER_SYNTAX: &str = "create-folder [username] [foldername] [description]?";
const DELETE_FOLDER_SYNTAX: &str = "delete-folder [username] [foldername]?";
const RENAME_FOLDER_SYNTAX: &str = "rename-folder [username] [foldername] [new-foldername]";
const LIST_FOLDERS_SYNTAX: &str = "list-folders [username] [--sort-name|--sort-created] [asc|desc]";
const CREATE_FILE_SYNTAX: &str = "create-file [username] [foldername] [filename] [description]?";
const DELETE_FILE_SYNTAX: &str = "delete-file [username] [foldername] [filename]";
const LIST_FILES_SYNTAX: &str =
    "list-files [username] [foldername] [--sort-name|--sort-created] [asc|desc]";

/// A parsed shell command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Register a new user.
    Register { username: String },
    /// Create a folder.
    CreateFolder {
        username: String,
        foldername: String,
        description: String,
    },
    /// Delete a folder and its files.
    DeleteFolder {
        username: String,
        foldername: String,
    },
    /// Rename a folder.
    RenameFolder {
        username: String,
        foldername: String,
        new_name: String,
    },
    /// List a user's folders.
    ListFolders { username: String, sort: SortSpec },
    /// Create a file.
    CreateFile {
        username: String,
        foldername: String,
        filename: String,
        description: String,
    },
    /// Delete a file.
    DeleteFile {
        username: String,
        foldername: String,
        filename: String,
    },
    /// List the files in a folder.
    ListFiles {
        username: String,
        foldername: String,
        sort: SortSpec,
    },
    /// Show command help.
    Help,
    /// Leave the shell.
    Exit,
    /// Blank input line.
    Empty,
}

impl Command {
    /// Get the command name as typed at the prompt.
    pub fn name(&self) -> &'static str {
        match self {
            Command::Register { .. } => "register",
            Command::CreateFolder { .. } => "create-folder",
            Command::DeleteFolder { .. } => "delete-folder",
            Command::RenameFolder { .. } => "rename-folder",
            Command::ListFolders { .. } => "list-folders",
            Command::CreateFile { .. } => "create-file",
            Command::DeleteFile { .. } => "delete-file",
            Command::ListFiles { .. } => "list-files",
            Command::Help => "help",
            Command::Exit => "exit",
            Command::Empty => "",
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Errors raised before a command reaches the namespace.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// Wrong number of arguments or an unknown flag.
    #[error("Usage: {0}")]
    Usage(&'static str),

    /// The first token is not a known command.
    #[error("Unrecognized command")]
    Unrecognized(String),
}

fn parse_sort(args: &[&str], syntax: &'static str) -> Result<SortSpec, CommandError> {
    let mut spec = SortSpec::default();
    for arg in args {
        match *arg {
            "--sort-name" => spec.key = SortKey::Name,
            "--sort-created" => spec.key = SortKey::Created,
            "asc" => spec.order = SortOrder::Asc,
            "desc" => spec.order = SortOrder::Desc,
            _ => return Err(CommandError::Usage(syntax)),
        }
    }
    Ok(spec)
}

/// Parse an input line into a command.
///
/// Tokens are split on whitespace. Trailing tokens after the fixed
/// arguments of `create-folder` and `create-file` are joined with single
/// spaces to form the description.
pub fn parse_input(input: &str) -> Result<Command, CommandError> {
    let tokens: Vec<&str> = input.split_whitespace().collect();
    let Some((&cmd, args)) = tokens.split_first() else {
        return Ok(Command::Empty);
    };

    let owned = |i: usize| args[i].to_string();

    let command = match cmd {
        "register" => {
            if args.len() != 1 {
                return Err(CommandError::Usage(REGISTER_SYNTAX));
            }
            Command::Register { username: owned(0) }
        }
        "create-folder" => {
            if args.len() < 2 {
                return Err(CommandError::Usage(CREATE_FOLDER_SYNTAX));
            }
            Command::CreateFolder {
                username: owned(0),
                foldername: owned(1),
                description: args[2..].join(" "),
            }
        }
        "delete-folder" => {
            if args.len() < 2 {
                return Err(CommandError::Usage(DELETE_FOLDER_SYNTAX));
            }
            Command::DeleteFolder {
                username: owned(0),
                foldername: owned(1),
            }
        }
        "rename-folder" => {
            if args.len() < 3 {
                return Err(CommandError::Usage(RENAME_FOLDER_SYNTAX));
            }
            Command::RenameFolder {
                username: owned(0),
                foldername: owned(1),
                new_name: owned(2),
            }
        }
        "list-folders" => {
            if args.is_empty() {
                return Err(CommandError::Usage(LIST_FOLDERS_SYNTAX));
            }
            Command::ListFolders {
                username: owned(0),
                sort: parse_sort(&args[1..], LIST_FOLDERS_SYNTAX)?,
            }
        }
        "create-file" => {
            if args.len() < 3 {
                return Err(CommandError::Usage(CREATE_FILE_SYNTAX));
            }
            Command::CreateFile {
                username: owned(0),
                foldername: owned(1),
                filename: owned(2),
                description: args[3..].join(" "),
            }
        }
        "delete-file" => {
            if args.len() < 3 {
                return Err(CommandError::Usage(DELETE_FILE_SYNTAX));
            }
            Command::DeleteFile {
                username: owned(0),
                foldername: owned(1),
                filename: owned(2),
            }
        }
        "list-files" => {
            if args.len() < 2 {
                return Err(CommandError::Usage(LIST_FILES_SYNTAX));
            }
            Command::ListFiles {
                username: owned(0),
                foldername: owned(1),
                sort: parse_sort(&args[2..], LIST_FILES_SYNTAX)?,
            }
        }
        "help" => Command::Help,
        "exit" => Command::Exit,
        other => return Err(CommandError::Unrecognized(other.to_string())),
    };

    Ok(command)
}

/// Command information for help display.
pub struct CommandInfo {
    /// Command name.
    pub name: &'static str,
    /// Command syntax.
    pub syntax: &'static str,
    /// Command description.
    pub description: &'static str,
}

/// Get all available command information.
pub fn get_command_help() -> Vec<CommandInfo> {
    vec![
        CommandInfo {
            name: "register",
            syntax: REGISTER_SYNTAX,
            description: "Register a new user",
        },
        CommandInfo {
            name: "create-folder",
            syntax: CREATE_FOLDER_SYNTAX,
            description: "Create a folder with an optional description",
        },
        CommandInfo {
            name: "delete-folder",
            syntax: DELETE_FOLDER_SYNTAX,
            description: "Delete a folder and every file in it",
        },
        CommandInfo {
            name: "rename-folder",
            syntax: RENAME_FOLDER_SYNTAX,
            description: "Rename a folder",
        },
        CommandInfo {
            name: "list-folders",
            syntax: LIST_FOLDERS_SYNTAX,
            description: "List a user's folders",
        },
        CommandInfo {
            name: "create-file",
            syntax: CREATE_FILE_SYNTAX,
            description: "Create a file with an optional description",
        },
        CommandInfo {
            name: "delete-file",
            syntax: DELETE_FILE_SYNTAX,
            description: "Delete a file",
        },
        CommandInfo {
            name: "list-files",
            syntax: LIST_FILES_SYNTAX,
            description: "List the files in a folder",
        },
        CommandInfo {
            name: "help",
            syntax: "help",
            description: "Show this help",
        },
        CommandInfo {
            name: "exit",
            syntax: "exit",
            description: "Leave the shell",
        },
    ]
}

/// Format the help message for display.
pub fn format_help() -> String {
    let mut lines = Vec::new();
    lines.push("Commands:".to_string());

    for info in get_command_help() {
        lines.push(format!("  {}", info.syntax));
        lines.push(format!("      {}", info.description));
    }

    lines.join("\n")
}
