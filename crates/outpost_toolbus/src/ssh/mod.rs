//! Remote-shell transport.
//!
//! Everything here goes over plain `ssh`/`scp` child processes; there is no
//! persistent remote session. Commands are executed one at a time with a
//! bounded timeout, and file content moves through short-lived local
//! staging files.
//!
//! - **transport**: the [`Transport`] trait and its `ssh`/`scp` backed
//!   implementation, [`SshTransport`]
//! - **staging**: [`StagedFile`], a temp file that removes itself when
//!   dropped
//! - **error**: [`SshError`]

pub mod error;
pub mod staging;
pub mod transport;

pub use error::SshError;
pub use staging::StagedFile;
pub use transport::{
    escape_shell_arg, CommandOutput, RunOptions, SshTransport, Transport, DEFAULT_COMMAND_TIMEOUT,
};
