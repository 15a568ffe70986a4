// Copyright (C) 2019-2024 Stephane Raux. Distributed under the 0BSD license.

pub use memory::{
    memory_snapshot, read_available_kb, read_field, read_total_kb, MemInfoError, MemorySnapshot,
};
pub use process::{parse_pid_list, pidof, process_table, Lookup, LookupError, Pid};
pub use procfs::ProcFs;
pub use rss::{processes_memory, read_resident_kb, resident_kb, ProcessMemory, RssError};

mod memory;
mod process;
mod procfs;
mod rss;
