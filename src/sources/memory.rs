// Copyright (C) 2019-2024 Stephane Raux. Distributed under the 0BSD license.

use crate::sources::ProcFs;
use futures::TryStreamExt;
use serde::{Deserialize, Serialize};
use std::{
    io,
    path::{Path, PathBuf},
};
use thiserror::Error;
use tokio::{fs::File, io::AsyncBufReadExt, io::BufReader};
use tokio_stream::wrappers::LinesStream;

pub const MEM_TOTAL: &str = "MemTotal";
pub const MEM_AVAILABLE: &str = "MemAvailable";

/// System-wide memory figures, in kibibytes.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct MemorySnapshot {
    pub total_kb: u64,
    pub available_kb: u64,
}

impl MemorySnapshot {
    pub fn used_kb(&self) -> u64 {
        self.total_kb.saturating_sub(self.available_kb)
    }

    /// Used memory as a fraction of the total. Zero when the total is zero.
    pub fn used_fraction(&self) -> f64 {
        if self.total_kb == 0 {
            return 0.0;
        }
        self.used_kb() as f64 / self.total_kb as f64
    }
}

#[derive(Debug, Error)]
pub enum MemInfoError {
    #[error("cannot read {}: {source}", .path.display())]
    Unavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("field {field} not found in {}", .path.display())]
    MissingField { path: PathBuf, field: &'static str },
    #[error("invalid value {value:?} for field {field} in {}", .path.display())]
    InvalidValue {
        path: PathBuf,
        field: &'static str,
        value: String,
    },
}

pub async fn read_total_kb(procfs: &ProcFs) -> Result<u64, MemInfoError> {
    read_field(&procfs.meminfo(), MEM_TOTAL).await
}

pub async fn read_available_kb(procfs: &ProcFs) -> Result<u64, MemInfoError> {
    read_field(&procfs.meminfo(), MEM_AVAILABLE).await
}

pub async fn memory_snapshot(procfs: &ProcFs) -> Result<MemorySnapshot, MemInfoError> {
    Ok(MemorySnapshot {
        total_kb: read_total_kb(procfs).await?,
        available_kb: read_available_kb(procfs).await?,
    })
}

/// Returns the value of the first line labelled `field`, without reading the rest of the file.
pub async fn read_field(path: &Path, field: &'static str) -> Result<u64, MemInfoError> {
    let unavailable = |source: io::Error| MemInfoError::Unavailable {
        path: path.to_owned(),
        source,
    };
    let file = File::open(path).await.map_err(unavailable)?;
    let mut lines = LinesStream::new(BufReader::new(file).lines());
    while let Some(line) = lines.try_next().await.map_err(unavailable)? {
        let mut tokens = line.split_whitespace();
        let label = match tokens.next() {
            Some(label) => label,
            None => continue,
        };
        if label.strip_suffix(':').unwrap_or(label) != field {
            continue;
        }
        let value = tokens.next().unwrap_or_default();
        return value.parse().map_err(|_| MemInfoError::InvalidValue {
            path: path.to_owned(),
            field,
            value: value.to_owned(),
        });
    }
    Err(MemInfoError::MissingField {
        path: path.to_owned(),
        field,
    })
}
