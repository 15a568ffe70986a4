// Copyright (C) 2019-2024 Stephane Raux. Distributed under the 0BSD license.

pub const DEFAULT_BAR_LENGTH: usize = 20;
pub const BAR_FILL: char = '#';

/// Number of filled cells for `fraction` in a bar of `length` cells.
///
/// The fraction is clamped to `[0, 1]` and NaN counts as 0. The product is
/// truncated, not rounded.
pub fn bar_fill(fraction: f64, length: usize) -> usize {
    let fraction = if fraction.is_nan() {
        0.0
    } else {
        fraction.clamp(0.0, 1.0)
    };
    ((fraction * length as f64) as usize).min(length)
}

pub fn render_bar(fraction: f64, length: usize) -> String {
    let fill = bar_fill(fraction, length);
    let mut bar = String::with_capacity(length);
    bar.extend(std::iter::repeat(BAR_FILL).take(fill));
    bar.extend(std::iter::repeat(' ').take(length - fill));
    bar
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled(bar: &str) -> usize {
        bar.chars().filter(|&c| c == BAR_FILL).count()
    }

    #[test]
    fn bar_has_requested_length() {
        for length in [1, 7, 20, 64] {
            for step in 0..=20 {
                let fraction = step as f64 / 20.0;
                let bar = render_bar(fraction, length);
                assert_eq!(bar.chars().count(), length);
                assert_eq!(filled(&bar), (fraction * length as f64).floor() as usize);
            }
        }
    }

    #[test]
    fn fill_is_truncated() {
        assert_eq!(render_bar(0.6, 20), format!("{}{}", "#".repeat(12), " ".repeat(8)));
        assert_eq!(bar_fill(0.99, 10), 9);
        assert_eq!(bar_fill(0.049, 20), 0);
    }

    #[test]
    fn out_of_range_fractions_are_clamped() {
        assert_eq!(render_bar(-0.5, 10), " ".repeat(10));
        assert_eq!(render_bar(1.5, 10), "#".repeat(10));
        assert_eq!(bar_fill(60.0, 20), 20);
        assert_eq!(bar_fill(f64::NEG_INFINITY, 8), 0);
        assert_eq!(bar_fill(f64::INFINITY, 8), 8);
    }

    #[test]
    fn nan_is_empty() {
        assert_eq!(render_bar(f64::NAN, 5), "     ");
    }

    #[test]
    fn zero_length_is_empty() {
        assert_eq!(render_bar(0.5, 0), "");
    }
}
