//! Integer input mask: digits only, grouped in threes from the right.

use crate::config::DEFAULT_GROUP_SEPARATOR;
use crate::controls::FormControl;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MaskError {
    #[error("value contains no digits")]
    Empty,
    #[error("value {digits} does not fit in an unsigned 64-bit integer")]
    Overflow { digits: String },
}

pub fn strip_to_digits(raw: &str) -> String {
    raw.chars().filter(|ch| ch.is_ascii_digit()).collect()
}

/// Inserts `separator` after position `i` (1-indexed) whenever the number of
/// digits left after it is a positive multiple of three.
pub fn group_digits(digits: &str, separator: char) -> String {
    let len = digits.chars().count();
    let mut grouped = String::with_capacity(digits.len() + len / 3);
    for (index, ch) in digits.chars().enumerate() {
        grouped.push(ch);
        let remaining = len - index - 1;
        if remaining > 0 && remaining % 3 == 0 {
            grouped.push(separator);
        }
    }
    grouped
}

pub fn mask_integer(raw: &str) -> String {
    group_digits(&strip_to_digits(raw), DEFAULT_GROUP_SEPARATOR)
}

pub fn parse_masked_integer(masked: &str) -> Result<u64, MaskError> {
    let digits = strip_to_digits(masked);
    if digits.is_empty() {
        return Err(MaskError::Empty);
    }
    digits
        .parse::<u64>()
        .map_err(|_| MaskError::Overflow { digits })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntegerMask {
    separator: char,
}

impl Default for IntegerMask {
    fn default() -> Self {
        Self::new(DEFAULT_GROUP_SEPARATOR)
    }
}

impl IntegerMask {
    pub const fn new(separator: char) -> Self {
        Self { separator }
    }

    pub fn format(&self, raw: &str) -> String {
        group_digits(&strip_to_digits(raw), self.separator)
    }

    /// Re-masks the control's value in place. Returns `true` when it changed.
    pub fn apply<C: FormControl + ?Sized>(&self, control: &C) -> bool {
        let current = control.value();
        let masked = self.format(&current);
        if masked == current {
            return false;
        }
        control.set_value(&masked);
        true
    }

    /// Prepares a field for masking and formats whatever it already holds.
    pub fn bind<C: FormControl + ?Sized>(&self, control: &C) -> bool {
        control.force_text_input();
        self.apply(control)
    }
}
