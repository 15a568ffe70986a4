// Copyright (C) 2024 Stephane Raux. Distributed under the 0BSD license.

use crate::{
    pretty::Kibibytes,
    report::ProgramUsage,
    util::{render_bar, DEFAULT_BAR_LENGTH},
};

#[derive(Debug)]
pub struct ProgramView<'a> {
    usage: &'a ProgramUsage,
    system_used_kb: u64,
    bar_length: usize,
    human_readable: bool,
    verbose: bool,
}

impl<'a> ProgramView<'a> {
    pub fn new(usage: &'a ProgramUsage, system_used_kb: u64) -> Self {
        Self {
            usage,
            system_used_kb,
            bar_length: DEFAULT_BAR_LENGTH,
            human_readable: false,
            verbose: false,
        }
    }

    pub fn bar_length(self, bar_length: usize) -> Self {
        Self { bar_length, ..self }
    }

    pub fn human_readable(self, human_readable: bool) -> Self {
        Self {
            human_readable,
            ..self
        }
    }

    pub fn verbose(self, verbose: bool) -> Self {
        Self { verbose, ..self }
    }

    /// Share of the system's used memory held by the program.
    pub fn share(&self) -> f64 {
        if self.system_used_kb == 0 {
            return 0.0;
        }
        self.usage.resident_kb() as f64 / self.system_used_kb as f64
    }

    pub fn render(&self) -> Vec<String> {
        let name = &self.usage.name;
        let mut lines = vec![
            String::new(),
            format!("Memory usage for processes related to {name}:"),
        ];
        if self.usage.is_empty() {
            lines.push(format!("No running processes found for {name}."));
            return lines;
        }
        if self.verbose {
            lines.extend(
                self.usage
                    .processes
                    .iter()
                    .map(|p| format!("  PID {}: {} kB", p.pid, p.resident_kb)),
            );
        }
        let total = self.usage.resident_kb();
        lines.push(format!("Total Memory Used by {name}: {total} kB"));
        if self.human_readable {
            let human = Kibibytes::new(total);
            lines.push(format!(
                "Total Memory Used by {name} (Human Readable): {human}"
            ));
        }
        let share = self.share();
        lines.push(format!(
            "Share of Used Memory: {}",
            render_bar(share, self.bar_length)
        ));
        lines.push(format!(
            "Share of Used Memory Percentage: {:.2}%",
            share * 100.0
        ));
        lines
    }
}
