// Copyright (C) 2019-2024 Stephane Raux. Distributed under the 0BSD license.

pub use memory::MemoryView;
pub use program::ProgramView;

mod memory;
mod program;
