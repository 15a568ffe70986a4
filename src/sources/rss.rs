// Copyright (C) 2024 Stephane Raux. Distributed under the 0BSD license.

use crate::sources::{Pid, ProcFs};
use futures::{future::join_all, TryStreamExt};
use serde::{Deserialize, Serialize};
use std::{io, path::PathBuf};
use thiserror::Error;
use tokio::{fs::File, io::AsyncBufReadExt, io::BufReader};
use tokio_stream::wrappers::LinesStream;

const RSS_PREFIX: &str = "Rss";

#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct ProcessMemory {
    pub pid: Pid,
    pub resident_kb: u64,
}

#[derive(Debug, Error)]
pub enum RssError {
    #[error("cannot read {} for process {pid}: {source}", .path.display())]
    Unavailable {
        pid: Pid,
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid Rss line {line:?} in {} for process {pid}", .path.display())]
    InvalidValue { pid: Pid, path: PathBuf, line: String },
}

/// Resident memory of `pid` in kibibytes, or 0 if it cannot be read.
pub async fn resident_kb(procfs: &ProcFs, pid: Pid) -> u64 {
    read_resident_kb(procfs, pid).await.unwrap_or_else(|e| {
        tracing::warn!(%pid, error = %e, "counting process as 0 kB");
        0
    })
}

/// Sums every `Rss` line of the process memory map, one per mapped region.
pub async fn read_resident_kb(procfs: &ProcFs, pid: Pid) -> Result<u64, RssError> {
    let path = procfs.smaps(pid);
    let unavailable = |source: io::Error| RssError::Unavailable {
        pid,
        path: path.clone(),
        source,
    };
    let file = File::open(&path).await.map_err(unavailable)?;
    let mut lines = LinesStream::new(BufReader::new(file).lines());
    let mut total = 0u64;
    while let Some(line) = lines.try_next().await.map_err(unavailable)? {
        if !line.starts_with(RSS_PREFIX) {
            continue;
        }
        let value = line
            .split_whitespace()
            .nth(1)
            .and_then(|value| value.parse::<u64>().ok())
            .ok_or_else(|| RssError::InvalidValue {
                pid,
                path: path.clone(),
                line: line.clone(),
            })?;
        total += value;
    }
    Ok(total)
}

/// Reads all processes concurrently, keeping the order of `pids`.
pub async fn processes_memory(procfs: &ProcFs, pids: &[Pid]) -> Vec<ProcessMemory> {
    join_all(pids.iter().map(|&pid| async move {
        ProcessMemory {
            pid,
            resident_kb: resident_kb(procfs, pid).await,
        }
    }))
    .await
}
