// Copyright (C) 2024 Stephane Raux. Distributed under the 0BSD license.

use serde::{Deserialize, Serialize};
use std::{
    fmt::{self, Display},
    io,
    num::ParseIntError,
    path::Path,
    str::FromStr,
};
use sysinfo::{PidExt, Process, ProcessExt, System, SystemExt};
use thiserror::Error;
use tokio::process::Command;

pub const PIDOF: &str = "pidof";

#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct Pid(pub u32);

impl Display for Pid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for Pid {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse().map(Pid)
    }
}

/// How a program name is mapped to running processes.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, clap::ValueEnum)]
pub enum Lookup {
    /// Ask the `pidof` tool.
    #[default]
    Pidof,
    /// Scan the process table for an exact name or executable match.
    Table,
}

#[derive(Debug, Error)]
pub enum LookupError {
    #[error("invalid program name {program:?}")]
    InvalidName { program: String },
    #[error("cannot run {tool}: {source}")]
    Spawn {
        tool: &'static str,
        #[source]
        source: io::Error,
    },
    #[error("{tool} exited with {status}: {stderr}")]
    Failed {
        tool: &'static str,
        status: std::process::ExitStatus,
        stderr: String,
    },
}

impl Lookup {
    /// Never fails: a broken lookup is logged and reported as no processes.
    pub async fn resolve_pids(self, program: &str) -> Vec<Pid> {
        let pids = match self {
            Lookup::Pidof => pidof(program).await,
            Lookup::Table => Ok(process_table(program)),
        };
        pids.unwrap_or_else(|e| {
            tracing::warn!(program, error = %e, "process lookup failed");
            Vec::new()
        })
    }
}

pub async fn pidof(program: &str) -> Result<Vec<Pid>, LookupError> {
    // pidof would read a leading '-' as an option.
    if program.is_empty() || program.starts_with('-') {
        return Err(LookupError::InvalidName {
            program: program.to_owned(),
        });
    }
    let output = Command::new(PIDOF)
        .arg(program)
        .output()
        .await
        .map_err(|source| LookupError::Spawn {
            tool: PIDOF,
            source,
        })?;
    let stdout = String::from_utf8_lossy(&output.stdout);
    match output.status.code() {
        Some(0) => Ok(parse_pid_list(&stdout)),
        // No match.
        Some(1) if stdout.trim().is_empty() => Ok(Vec::new()),
        _ => Err(LookupError::Failed {
            tool: PIDOF,
            status: output.status,
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_owned(),
        }),
    }
}

/// Parses whitespace-separated identifiers, keeping their order and any duplicates.
pub fn parse_pid_list(s: &str) -> Vec<Pid> {
    s.split_whitespace()
        .filter_map(|token| match token.parse() {
            Ok(pid) => Some(pid),
            Err(e) => {
                tracing::warn!(token, error = %e, "skipping malformed process id");
                None
            }
        })
        .collect()
}

pub fn process_table(program: &str) -> Vec<Pid> {
    let mut system = System::new();
    system.refresh_processes();
    let mut pids = system
        .processes()
        .iter()
        .filter(|(_, process)| runs_program(process, program))
        .map(|(pid, _)| Pid(pid.as_u32()))
        .collect::<Vec<_>>();
    pids.sort_unstable_by(|a, b| b.cmp(a));
    pids
}

/// `name()` is the kernel comm name, cut at 15 bytes, so the executable and
/// argv[0] basenames are checked as well.
fn runs_program(process: &Process, program: &str) -> bool {
    let basename = |path: &Path| {
        path.file_name()
            .map_or(false, |name| name.to_string_lossy() == program)
    };
    process.name() == program
        || basename(process.exe())
        || process
            .cmd()
            .first()
            .map_or(false, |arg0| basename(Path::new(arg0)))
}
