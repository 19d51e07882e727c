//! Logging and workflow-command output.

pub mod commands;
pub mod logging;

pub use commands::{add_mask, escape_data, set_failed, WorkflowCommand};
pub use logging::{LogFormat, LogLevel, LoggingConfig};
