// Copyright (C) 2019-2024 Stephane Raux. Distributed under the 0BSD license.

pub use logging::init_tracing;
pub use report::{ProgramUsage, RenderOptions, Report};
pub use serialize::serialize_report;
pub use util::{render_bar, DEFAULT_BAR_LENGTH};

mod logging;
pub mod pretty;
mod report;
mod serialize;
pub mod sources;
mod util;
pub mod views;
