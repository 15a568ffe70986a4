// Copyright (C) 2019-2024 Stephane Raux. Distributed under the 0BSD license.

use number_prefix::Prefix;
use std::fmt::{self, Display};

const PREFIXES: [Prefix; 5] = [
    Prefix::Kibi,
    Prefix::Mebi,
    Prefix::Gibi,
    Prefix::Tebi,
    Prefix::Pebi,
];

/// Memory amount in kibibytes, displayed with a binary unit.
///
/// The unit only advances once the value exceeds 1024, so 1024 KiB stays
/// `1024.00 KiB`. Values past the pebibyte range stay in PiB.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Kibibytes {
    value: u64,
    decimal_places: usize,
}

impl Kibibytes {
    pub fn new(value: u64) -> Self {
        Self {
            value,
            decimal_places: 2,
        }
    }

    pub fn decimal_places(self, decimal_places: usize) -> Self {
        Self {
            decimal_places,
            ..self
        }
    }
}

impl Display for Kibibytes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut value = self.value as f64;
        let mut index = 0;
        while value > 1024.0 && index < PREFIXES.len() - 1 {
            value /= 1024.0;
            index += 1;
        }
        let prefix = PREFIXES[index];
        let precision = self.decimal_places;
        write!(f, "{value:.precision$} {prefix}B")
    }
}

pub fn format_human(kibibytes: u64, decimal_places: usize) -> String {
    Kibibytes::new(kibibytes)
        .decimal_places(decimal_places)
        .to_string()
}
