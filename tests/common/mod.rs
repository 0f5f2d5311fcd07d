//! Test helpers for shell E2E tests.
//!
//! Provides a transcript-driven harness around `Shell`.

#![allow(dead_code)]

use vfs::config::ShellConfig;
use vfs::{Namespace, Outcome, Shell};

/// Captured output of one shell command.
#[derive(Debug, Default)]
pub struct Reply {
    pub out: String,
    pub err: String,
    pub outcome: Option<Outcome>,
}

impl Reply {
    /// Stdout lines.
    pub fn out_lines(&self) -> Vec<&str> {
        self.out.lines().collect()
    }

    /// Split each stdout line into tab-separated fields.
    pub fn rows(&self) -> Vec<Vec<&str>> {
        self.out.lines().map(|l| l.split('\t').collect()).collect()
    }

    /// First field of each stdout row.
    pub fn names(&self) -> Vec<&str> {
        self.rows().into_iter().map(|r| r[0]).collect()
    }
}

/// Shell harness owning its namespace.
pub struct TestShell {
    namespace: Namespace,
    config: ShellConfig,
}

impl TestShell {
    /// Create a harness with an empty prompt and UTC timestamps.
    pub fn new() -> Self {
        Self {
            namespace: Namespace::new(),
            config: ShellConfig {
                prompt: String::new(),
                timezone: "UTC".to_string(),
            },
        }
    }

    /// Execute a single line.
    pub fn send(&mut self, line: &str) -> Reply {
        let mut shell = Shell::new(&mut self.namespace, &self.config);
        let mut out = Vec::new();
        let mut err = Vec::new();
        let outcome = shell.execute(line, &mut out, &mut err).unwrap();
        Reply {
            out: String::from_utf8(out).unwrap(),
            err: String::from_utf8(err).unwrap(),
            outcome: Some(outcome),
        }
    }

    /// Execute a line and assert it succeeded with the expected stdout.
    pub fn expect_ok(&mut self, line: &str, expected: &str) {
        let reply = self.send(line);
        assert_eq!(reply.err, "", "unexpected stderr for {line:?}");
        assert_eq!(reply.out.trim_end(), expected, "stdout for {line:?}");
    }

    /// Execute a line and assert it failed with the expected stderr.
    pub fn expect_err(&mut self, line: &str, expected: &str) {
        let reply = self.send(line);
        assert_eq!(reply.out, "", "unexpected stdout for {line:?}");
        assert_eq!(reply.err.trim_end(), expected, "stderr for {line:?}");
    }

    /// Feed a whole script through `Shell::run`.
    pub fn run_script(&mut self, script: &str) -> Reply {
        let mut shell = Shell::new(&mut self.namespace, &self.config);
        let mut out = Vec::new();
        let mut err = Vec::new();
        shell.run(script.as_bytes(), &mut out, &mut err).unwrap();
        Reply {
            out: String::from_utf8(out).unwrap(),
            err: String::from_utf8(err).unwrap(),
            outcome: None,
        }
    }

    /// Direct access to the namespace.
    pub fn namespace(&self) -> &Namespace {
        &self.namespace
    }
}
