//! String helpers shared by the keyword registry and the number parser.
//!
//! Only ASCII digits count as numeric; full-width digits and other Unicode
//! numerals are treated as text.

use std::cmp::Ordering;

/// Characters accepted as a standalone dash separator.
const DASHES: &[char] = &[
    '-', '\u{2010}', '\u{2011}', '\u{2012}', '\u{2013}', '\u{2014}', '\u{2015}',
];

/// Byte index of the first ASCII digit in `text`.
pub fn find_number_in_string(text: &str) -> Option<usize> {
    text.char_indices()
        .find(|(_, c)| c.is_ascii_digit())
        .map(|(idx, _)| idx)
}

/// Returns `true` if `text` is non-empty and made only of ASCII digits.
pub fn is_numeric_string(text: &str) -> bool {
    !text.is_empty() && text.bytes().all(|b| b.is_ascii_digit())
}

/// Returns `true` if the first character of `text` is an ASCII digit.
pub fn starts_with_digit(text: &str) -> bool {
    text.chars().next().is_some_and(|c| c.is_ascii_digit())
}

/// Returns `true` if the last character of `text` is an ASCII digit.
pub fn ends_with_digit(text: &str) -> bool {
    text.chars().next_back().is_some_and(|c| c.is_ascii_digit())
}

/// The run of ASCII digits at the start of `text`.
pub fn leading_digits(text: &str) -> &str {
    let end = text
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(text.len());
    &text[..end]
}

/// Parses the leading digit run of `text`.
///
/// Returns `None` when `text` does not start with a digit or the run does not
/// fit in a `u64`.
pub fn leading_number(text: &str) -> Option<u64> {
    let digits = leading_digits(text);
    if digits.is_empty() {
        None
    } else {
        digits.parse().ok()
    }
}

/// Orders two numbers by their leading digit runs.
///
/// Runs of any length compare correctly: leading zeros are ignored, then a
/// longer run is larger, then digits compare in order. A missing run sorts
/// like zero.
pub fn compare_leading_numbers(a: &str, b: &str) -> Ordering {
    let a = leading_digits(a).trim_start_matches('0');
    let b = leading_digits(b).trim_start_matches('0');
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}

/// Returns `true` if `text` is exactly one dash character.
pub fn is_dash(text: &str) -> bool {
    let mut chars = text.chars();
    matches!((chars.next(), chars.next()), (Some(c), None) if DASHES.contains(&c))
}

/// Strips leading and trailing spaces and ASCII dashes.
pub fn trim_separators(text: &str) -> &str {
    text.trim_matches(|c| c == ' ' || c == '-')
}

/// Removes leading zeros from the leading digit run, keeping at least one digit.
///
/// `"08"` becomes `"8"`, `"07.5"` becomes `"7.5"` and `"000"` becomes `"0"`.
pub fn strip_leading_zeros(number: &str) -> String {
    let digits = leading_digits(number).len();
    let zeros = number.bytes().take_while(|b| *b == b'0').count().min(digits);
    let cut = zeros.min(digits.saturating_sub(1));
    number[cut..].to_string()
}
