// Copyright (C) 2019-2024 Stephane Raux. Distributed under the 0BSD license.

use crate::{
    sources::MemorySnapshot,
    util::{render_bar, DEFAULT_BAR_LENGTH},
};

#[derive(Debug)]
pub struct MemoryView {
    snapshot: MemorySnapshot,
    bar_length: usize,
}

impl MemoryView {
    pub fn new(snapshot: MemorySnapshot) -> Self {
        Self {
            snapshot,
            bar_length: DEFAULT_BAR_LENGTH,
        }
    }

    pub fn bar_length(self, bar_length: usize) -> Self {
        Self { bar_length, ..self }
    }

    pub fn render(&self) -> Vec<String> {
        let MemorySnapshot {
            total_kb,
            available_kb,
        } = self.snapshot;
        let used_kb = self.snapshot.used_kb();
        let fraction = self.snapshot.used_fraction();
        let bar = render_bar(fraction, self.bar_length);
        vec![
            format!("Total Memory: {total_kb} kB"),
            format!("Used Memory: {used_kb} kB"),
            format!("Available Memory: {available_kb} kB"),
            format!("Memory Usage: {bar}"),
            format!("Memory Usage Percentage: {:.2}%", fraction * 100.0),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_usage_lines() {
        let snapshot = MemorySnapshot {
            total_kb: 1_000_000,
            available_kb: 400_000,
        };
        let lines = MemoryView::new(snapshot).render();
        assert_eq!(
            lines,
            vec![
                "Total Memory: 1000000 kB",
                "Used Memory: 600000 kB",
                "Available Memory: 400000 kB",
                "Memory Usage: ############        ",
                "Memory Usage Percentage: 60.00%",
            ]
        );
    }

    #[test]
    fn bar_follows_configured_length() {
        let snapshot = MemorySnapshot {
            total_kb: 4,
            available_kb: 1,
        };
        let lines = MemoryView::new(snapshot).bar_length(8).render();
        assert_eq!(lines[3], "Memory Usage: ######  ");
        assert_eq!(lines[4], "Memory Usage Percentage: 75.00%");
    }

    #[test]
    fn zero_total_renders_empty_usage() {
        let snapshot = MemorySnapshot {
            total_kb: 0,
            available_kb: 0,
        };
        let lines = MemoryView::new(snapshot).bar_length(4).render();
        assert_eq!(lines[3], "Memory Usage:     ");
        assert_eq!(lines[4], "Memory Usage Percentage: 0.00%");
    }
}
