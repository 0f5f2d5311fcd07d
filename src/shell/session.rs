//! Interactive shell session.
//!
//! Executes parsed commands against a borrowed [`Namespace`] and renders the
//! results. Success output goes to `out`, errors and warnings to `err`.

use std::io::{self, BufRead, Write};

use tracing::{debug, warn};

use super::command::{format_help, parse_input, Command};
use crate::config::ShellConfig;
use crate::datetime::format_rfc1123;
use crate::namespace::{Namespace, SortSpec};

/// What the loop should do after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Read the next line.
    Continue,
    /// Leave the loop.
    Exit,
}

/// A shell bound to one namespace.
pub struct Shell<'a> {
    namespace: &'a mut Namespace,
    prompt: String,
    timezone: String,
}

impl<'a> Shell<'a> {
    /// Create a shell with the given settings.
    pub fn new(namespace: &'a mut Namespace, config: &ShellConfig) -> Self {
        Self {
            namespace,
            prompt: config.prompt.clone(),
            timezone: config.timezone.clone(),
        }
    }

    /// Get the underlying namespace.
    pub fn namespace(&self) -> &Namespace {
        &*self.namespace
    }

    /// Read and execute lines until `exit` or end of input.
    ///
    /// A line that is not valid UTF-8 is reported on `err` and skipped.
    pub fn run<R, W, E>(&mut self, mut input: R, out: &mut W, err: &mut E) -> io::Result<()>
    where
        R: BufRead,
        W: Write,
        E: Write,
    {
        let mut buf = Vec::new();
        loop {
            write!(out, "{}", self.prompt)?;
            out.flush()?;

            buf.clear();
            if input.read_until(b'\n', &mut buf)? == 0 {
                break;
            }

            let line = match std::str::from_utf8(&buf) {
                Ok(line) => line.trim_end_matches(['\n', '\r']),
                Err(e) => {
                    warn!("Skipping undecodable input line: {}", e);
                    writeln!(err, "Error: input is not valid UTF-8")?;
                    continue;
                }
            };
            if self.execute(line, out, err)? == Outcome::Exit {
                break;
            }
        }
        Ok(())
    }

    /// Execute a single input line.
    ///
    /// Failed commands are reported on `err` and never end the session.
    pub fn execute<W, E>(&mut self, line: &str, out: &mut W, err: &mut E) -> io::Result<Outcome>
    where
        W: Write,
        E: Write,
    {
        let command = match parse_input(line) {
            Ok(command) => command,
            Err(e) => {
                writeln!(err, "{e}")?;
                return Ok(Outcome::Continue);
            }
        };
        debug!("Executing {}", command);

        match command {
            Command::Empty => {}
            Command::Exit => return Ok(Outcome::Exit),
            Command::Help => writeln!(out, "{}", format_help())?,
            Command::Register { username } => match self.namespace.register(&username) {
                Ok(()) => writeln!(out, "Add {username} successfully.")?,
                Err(e) => writeln!(err, "Error: {e}")?,
            },
            Command::CreateFolder {
                username,
                foldername,
                description,
            } => match self
                .namespace
                .create_folder(&username, &foldername, &description)
            {
                Ok(()) => writeln!(out, "Create {foldername} successfully.")?,
                Err(e) => writeln!(err, "Error: {e}")?,
            },
            Command::DeleteFolder {
                username,
                foldername,
            } => match self.namespace.delete_folder(&username, &foldername) {
                Ok(()) => writeln!(out, "Delete {foldername} successfully.")?,
                Err(e) => writeln!(err, "Error: {e}")?,
            },
            Command::RenameFolder {
                username,
                foldername,
                new_name,
            } => match self
                .namespace
                .rename_folder(&username, &foldername, &new_name)
            {
                Ok(()) => writeln!(out, "Rename {foldername} to {new_name} successfully.")?,
                Err(e) => writeln!(err, "Error: {e}")?,
            },
            Command::ListFolders { username, sort } => {
                self.list_folders(&username, sort, out, err)?
            }
            Command::CreateFile {
                username,
                foldername,
                filename,
                description,
            } => match self
                .namespace
                .create_file(&username, &foldername, &filename, &description)
            {
                Ok(()) => writeln!(
                    out,
                    "Create {filename} in {username}/{foldername} successfully."
                )?,
                Err(e) => writeln!(err, "Error: {e}")?,
            },
            Command::DeleteFile {
                username,
                foldername,
                filename,
            } => match self
                .namespace
                .delete_file(&username, &foldername, &filename)
            {
                Ok(()) => writeln!(
                    out,
                    "Delete {filename} in {username}/{foldername} successfully."
                )?,
                Err(e) => writeln!(err, "Error: {e}")?,
            },
            Command::ListFiles {
                username,
                foldername,
                sort,
            } => self.list_files(&username, &foldername, sort, out, err)?,
        }

        Ok(Outcome::Continue)
    }

    fn list_folders<W: Write, E: Write>(
        &self,
        username: &str,
        sort: SortSpec,
        out: &mut W,
        err: &mut E,
    ) -> io::Result<()> {
        debug!("Listing folders of {} by {}", username, sort);
        let folders = match self.namespace.list_folders(username, sort) {
            Ok(folders) => folders,
            Err(e) => return writeln!(err, "Error: {e}"),
        };

        if folders.is_empty() {
            return writeln!(err, "Warning: The {username} doesn't have any folders.");
        }

        for folder in folders {
            writeln!(
                out,
                "{}\t{}\t{}\t{}",
                folder.name(),
                folder.description(),
                format_rfc1123(&folder.created_at(), &self.timezone),
                username
            )?;
        }
        Ok(())
    }

    fn list_files<W: Write, E: Write>(
        &self,
        username: &str,
        foldername: &str,
        sort: SortSpec,
        out: &mut W,
        err: &mut E,
    ) -> io::Result<()> {
        debug!("Listing files of {}/{} by {}", username, foldername, sort);
        let files = match self.namespace.list_files(username, foldername, sort) {
            Ok(files) => files,
            Err(e) => return writeln!(err, "Error: {e}"),
        };

        if files.is_empty() {
            return writeln!(out, "Warning: The folder is empty.");
        }

        for file in files {
            writeln!(
                out,
                "{}\t{}\t{}\t{}\t{}",
                file.name(),
                file.description(),
                format_rfc1123(&file.created_at(), &self.timezone),
                foldername,
                username
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn exec(shell: &mut Shell<'_>, line: &str) -> (String, String, Outcome) {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let outcome = shell.execute(line, &mut out, &mut err).unwrap();
        (
            String::from_utf8(out).unwrap(),
            String::from_utf8(err).unwrap(),
            outcome,
        )
    }

    #[test]
    fn test_register_output() {
        let mut ns = Namespace::new();
        let mut shell = Shell::new(&mut ns, &ShellConfig::default());

        let (out, err, outcome) = exec(&mut shell, "register Alice");
        assert_eq!(out, "Add Alice successfully.\n");
        assert!(err.is_empty());
        assert_eq!(outcome, Outcome::Continue);

        let (out, err, _) = exec(&mut shell, "register alice");
        assert!(out.is_empty());
        assert_eq!(err, "Error: the user alice has already existed\n");
    }

    #[test]
    fn test_usage_error_goes_to_stderr() {
        let mut ns = Namespace::new();
        let mut shell = Shell::new(&mut ns, &ShellConfig::default());

        let (out, err, outcome) = exec(&mut shell, "register");
        assert!(out.is_empty());
        assert_eq!(err, "Usage: register [username]\n");
        assert_eq!(outcome, Outcome::Continue);
    }

    #[test]
    fn test_unrecognized_command() {
        let mut ns = Namespace::new();
        let mut shell = Shell::new(&mut ns, &ShellConfig::default());

        let (_, err, outcome) = exec(&mut shell, "format c:");
        assert_eq!(err, "Unrecognized command\n");
        assert_eq!(outcome, Outcome::Continue);
    }

    #[test]
    fn test_exit() {
        let mut ns = Namespace::new();
        let mut shell = Shell::new(&mut ns, &ShellConfig::default());

        let (out, err, outcome) = exec(&mut shell, "exit");
        assert!(out.is_empty());
        assert!(err.is_empty());
        assert_eq!(outcome, Outcome::Exit);
    }

    #[test]
    fn test_empty_line_is_silent() {
        let mut ns = Namespace::new();
        let mut shell = Shell::new(&mut ns, &ShellConfig::default());

        let (out, err, outcome) = exec(&mut shell, "   ");
        assert!(out.is_empty());
        assert!(err.is_empty());
        assert_eq!(outcome, Outcome::Continue);
    }

    #[test]
    fn test_list_folders_empty_warning() {
        let mut ns = Namespace::new();
        ns.register("alice").unwrap();
        let mut shell = Shell::new(&mut ns, &ShellConfig::default());

        let (out, err, _) = exec(&mut shell, "list-folders alice");
        assert!(out.is_empty());
        assert_eq!(err, "Warning: The alice doesn't have any folders.\n");
    }

    #[test]
    fn test_list_files_empty_warning() {
        let mut ns = Namespace::new();
        ns.register("alice").unwrap();
        ns.create_folder("alice", "docs", "").unwrap();
        let mut shell = Shell::new(&mut ns, &ShellConfig::default());

        let (out, err, _) = exec(&mut shell, "list-files alice docs");
        assert_eq!(out, "Warning: The folder is empty.\n");
        assert!(err.is_empty());
    }

    #[test]
    fn test_list_folders_row_format() {
        let mut ns = Namespace::new();
        ns.register("alice").unwrap();
        ns.create_folder("alice", "Docs", "my docs").unwrap();
        let mut shell = Shell::new(&mut ns, &ShellConfig::default());

        let (out, _, _) = exec(&mut shell, "list-folders alice");
        let fields: Vec<&str> = out.trim_end().split('\t').collect();
        assert_eq!(fields.len(), 4);
        assert_eq!(fields[0], "docs");
        assert_eq!(fields[1], "my docs");
        assert!(fields[2].ends_with(" UTC"));
        assert_eq!(fields[3], "alice");
    }

    #[test]
    fn test_help_output() {
        let mut ns = Namespace::new();
        let mut shell = Shell::new(&mut ns, &ShellConfig::default());

        let (out, _, _) = exec(&mut shell, "help");
        assert!(out.contains("list-files [username] [foldername]"));
    }

    #[test]
    fn test_run_stops_at_exit() {
        let mut ns = Namespace::new();
        let config = ShellConfig {
            prompt: "$ ".to_string(),
            ..ShellConfig::default()
        };
        let mut shell = Shell::new(&mut ns, &config);

        let input = "register alice\nexit\nregister bob\n";
        let mut out = Vec::new();
        let mut err = Vec::new();
        shell.run(input.as_bytes(), &mut out, &mut err).unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "$ Add alice successfully.\n$ "
        );
        assert_eq!(shell.namespace().user_count(), 1);
    }

    #[test]
    fn test_run_stops_at_eof() {
        let mut ns = Namespace::new();
        let mut shell = Shell::new(&mut ns, &ShellConfig::default());

        let mut out = Vec::new();
        let mut err = Vec::new();
        shell
            .run("register a\nregister a\nregister b".as_bytes(), &mut out, &mut err)
            .unwrap();

        assert_eq!(shell.namespace().user_count(), 2);
        assert_eq!(
            String::from_utf8(err).unwrap(),
            "Error: the user a has already existed\n"
        );
    }

    #[test]
    fn test_run_skips_invalid_utf8_line() {
        let mut ns = Namespace::new();
        let mut shell = Shell::new(&mut ns, &ShellConfig::default());

        let input: &[u8] = b"register b\xffob\nregister carol\n";
        let mut out = Vec::new();
        let mut err = Vec::new();
        shell.run(input, &mut out, &mut err).unwrap();

        assert_eq!(
            String::from_utf8(err).unwrap(),
            "Error: input is not valid UTF-8\n"
        );
        assert_eq!(shell.namespace().user_count(), 1);
        assert!(shell.namespace().user("carol").is_ok());
    }

    #[test]
    fn test_run_accepts_crlf_lines() {
        let mut ns = Namespace::new();
        let mut shell = Shell::new(&mut ns, &ShellConfig::default());

        let mut out = Vec::new();
        let mut err = Vec::new();
        shell
            .run("register dave\r\nexit\r\n".as_bytes(), &mut out, &mut err)
            .unwrap();

        assert!(err.is_empty());
        assert!(shell.namespace().user("dave").is_ok());
    }
}
