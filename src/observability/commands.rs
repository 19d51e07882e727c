//! GitHub Actions workflow commands (`::name::message` lines on stdout).

use std::fmt;
use std::io::{self, Write};

/// A workflow command understood by the Actions runner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WorkflowCommand {
    /// Marks the step as failed with an error annotation.
    Error(String),
    /// Replaces the value with `***` in all later log output.
    AddMask(String),
    Group(String),
    EndGroup,
}

impl WorkflowCommand {
    /// Writes the command followed by a newline.
    pub fn write_to<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "{}", self)
    }

    /// Emits the command on stdout.
    pub fn issue(&self) {
        let stdout = io::stdout();
        let mut handle = stdout.lock();
        // Nowhere to report a failed stdout write.
        let _ = self.write_to(&mut handle).and_then(|_| handle.flush());
    }
}

impl fmt::Display for WorkflowCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WorkflowCommand::Error(message) => write!(f, "::error::{}", escape_data(message)),
            WorkflowCommand::AddMask(value) => write!(f, "::add-mask::{}", escape_data(value)),
            WorkflowCommand::Group(title) => write!(f, "::group::{}", escape_data(title)),
            WorkflowCommand::EndGroup => write!(f, "::endgroup::"),
        }
    }
}

/// Escapes a command message so it stays on one line.
pub fn escape_data(value: &str) -> String {
    value
        .replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}

/// Marks the step as failed.
pub fn set_failed(message: &str) {
    WorkflowCommand::Error(message.to_string()).issue();
}

/// Masks `value` in the rest of the job log. Blank values are ignored.
pub fn add_mask(value: &str) {
    if !value.trim().is_empty() {
        WorkflowCommand::AddMask(value.to_string()).issue();
    }
}
