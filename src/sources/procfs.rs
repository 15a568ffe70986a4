// Copyright (C) 2024 Stephane Raux. Distributed under the 0BSD license.

use crate::sources::Pid;
use std::path::PathBuf;

pub const DEFAULT_ROOT: &str = "/proc";

/// Location of the kernel pseudo-files.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ProcFs {
    root: PathBuf,
}

impl ProcFs {
    pub fn new<P>(root: P) -> Self
    where
        P: Into<PathBuf>,
    {
        Self { root: root.into() }
    }

    pub fn meminfo(&self) -> PathBuf {
        self.root.join("meminfo")
    }

    pub fn smaps(&self, pid: Pid) -> PathBuf {
        self.root.join(pid.to_string()).join("smaps")
    }
}

impl Default for ProcFs {
    fn default() -> Self {
        Self::new(DEFAULT_ROOT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn paths_are_relative_to_root() {
        let procfs = ProcFs::new("/tmp/fake");
        assert_eq!(procfs.meminfo(), Path::new("/tmp/fake/meminfo"));
        assert_eq!(procfs.smaps(Pid(42)), Path::new("/tmp/fake/42/smaps"));
    }

    #[test]
    fn default_root_is_proc() {
        assert_eq!(ProcFs::default().meminfo(), Path::new("/proc/meminfo"));
    }
}
