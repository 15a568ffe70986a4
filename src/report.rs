// Copyright (C) 2024 Stephane Raux. Distributed under the 0BSD license.

use crate::{
    sources::{
        memory_snapshot, processes_memory, Lookup, MemInfoError, MemorySnapshot, Pid, ProcFs,
        ProcessMemory,
    },
    util::DEFAULT_BAR_LENGTH,
    views::{MemoryView, ProgramView},
};

/// Resident memory of every process running a program.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ProgramUsage {
    pub name: String,
    pub processes: Vec<ProcessMemory>,
}

impl ProgramUsage {
    pub async fn capture(procfs: &ProcFs, lookup: Lookup, name: &str) -> Self {
        let pids = lookup.resolve_pids(name).await;
        tracing::debug!(program = name, ?pids, "resolved processes");
        Self::from_pids(procfs, name, &pids).await
    }

    pub async fn from_pids(procfs: &ProcFs, name: &str, pids: &[Pid]) -> Self {
        Self {
            name: name.to_owned(),
            processes: processes_memory(procfs, pids).await,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.processes.is_empty()
    }

    pub fn resident_kb(&self) -> u64 {
        self.processes.iter().map(|p| p.resident_kb).sum()
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct RenderOptions {
    pub bar_length: usize,
    pub human_readable: bool,
    pub verbose: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            bar_length: DEFAULT_BAR_LENGTH,
            human_readable: false,
            verbose: false,
        }
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Report {
    pub system: MemorySnapshot,
    pub program: Option<ProgramUsage>,
}

impl Report {
    /// Fails only if system memory cannot be read; the program part is best-effort.
    pub async fn capture(
        procfs: &ProcFs,
        lookup: Lookup,
        program: Option<&str>,
    ) -> Result<Self, MemInfoError> {
        let system = memory_snapshot(procfs).await?;
        let program = match program {
            Some(name) => Some(ProgramUsage::capture(procfs, lookup, name).await),
            None => None,
        };
        Ok(Self { system, program })
    }

    pub fn render(&self, options: &RenderOptions) -> Vec<String> {
        let mut lines = MemoryView::new(self.system)
            .bar_length(options.bar_length)
            .render();
        if let Some(program) = &self.program {
            lines.extend(
                ProgramView::new(program, self.system.used_kb())
                    .bar_length(options.bar_length)
                    .human_readable(options.human_readable)
                    .verbose(options.verbose)
                    .render(),
            );
        }
        lines
    }
}
