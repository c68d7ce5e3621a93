//! Remote target addressing.
//!
//! A target names the remote machine and the working directory every tool
//! call operates against, written as a single `host:path` string. The first
//! colon separates host from path, so the path itself may contain colons.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::OutpostError;

/// A parsed `host:path` pair. Immutable once parsed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteTarget {
    /// SSH host (alias or user@host), never empty.
    pub host: String,
    /// Absolute working directory on the remote host.
    pub path: String,
}

impl RemoteTarget {
    /// Parses a `host:path` string, splitting at the first colon.
    pub fn parse(target: &str) -> Result<Self, OutpostError> {
        let Some((host, path)) = target.split_once(':') else {
            return Err(OutpostError::Target(format!(
                "expected \"host:path\", got \"{target}\""
            )));
        };

        if host.is_empty() {
            return Err(OutpostError::Target(format!(
                "host must not be empty in \"{target}\""
            )));
        }

        Ok(Self {
            host: host.to_string(),
            path: path.to_string(),
        })
    }
}

impl FromStr for RemoteTarget {
    type Err = OutpostError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for RemoteTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.host, self.path)
    }
}
