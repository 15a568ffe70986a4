// Copyright (C) 2019-2024 Stephane Raux. Distributed under the 0BSD license.

use crate::{
    pretty::Kibibytes,
    report::{ProgramUsage, Report},
    sources::ProcessMemory,
};
use serde::Serialize;

#[derive(Debug, Serialize)]
struct WireReport<'a> {
    system: WireSystem,
    program: Option<WireProgram<'a>>,
}

#[derive(Debug, Serialize)]
struct WireSystem {
    total_kb: u64,
    used_kb: u64,
    available_kb: u64,
    used_percent: f64,
}

#[derive(Debug, Serialize)]
struct WireProgram<'a> {
    name: &'a str,
    processes: &'a [ProcessMemory],
    resident_kb: u64,
    resident_human: String,
}

impl<'a> From<&'a Report> for WireReport<'a> {
    fn from(r: &'a Report) -> Self {
        Self {
            system: WireSystem {
                total_kb: r.system.total_kb,
                used_kb: r.system.used_kb(),
                available_kb: r.system.available_kb,
                used_percent: r.system.used_fraction() * 100.0,
            },
            program: r.program.as_ref().map(WireProgram::from),
        }
    }
}

impl<'a> From<&'a ProgramUsage> for WireProgram<'a> {
    fn from(p: &'a ProgramUsage) -> Self {
        let resident_kb = p.resident_kb();
        Self {
            name: &p.name,
            processes: &p.processes,
            resident_kb,
            resident_human: Kibibytes::new(resident_kb).to_string(),
        }
    }
}

pub fn serialize_report(report: &Report) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&WireReport::from(report))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sources::{MemorySnapshot, Pid};
    use serde_json::{json, Value};

    #[test]
    fn system_only_report() {
        let report = Report {
            system: MemorySnapshot {
                total_kb: 1_000_000,
                available_kb: 400_000,
            },
            program: None,
        };
        let value: Value = serde_json::from_str(&serialize_report(&report).unwrap()).unwrap();
        assert_eq!(
            value,
            json!({
                "system": {
                    "total_kb": 1_000_000,
                    "used_kb": 600_000,
                    "available_kb": 400_000,
                    "used_percent": 60.0,
                },
                "program": null,
            })
        );
    }

    #[test]
    fn program_report_lists_processes() {
        let report = Report {
            system: MemorySnapshot {
                total_kb: 8,
                available_kb: 4,
            },
            program: Some(ProgramUsage {
                name: "sshd".to_owned(),
                processes: vec![
                    ProcessMemory {
                        pid: Pid(7),
                        resident_kb: 2000,
                    },
                    ProcessMemory {
                        pid: Pid(3),
                        resident_kb: 48,
                    },
                ],
            }),
        };
        let value: Value = serde_json::from_str(&serialize_report(&report).unwrap()).unwrap();
        assert_eq!(
            value["program"],
            json!({
                "name": "sshd",
                "processes": [
                    { "pid": 7, "resident_kb": 2000 },
                    { "pid": 3, "resident_kb": 48 },
                ],
                "resident_kb": 2048,
                "resident_human": "2.00 MiB",
            })
        );
    }
}
