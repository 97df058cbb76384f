//! Normalization of comma-separated value lists.
//!
//! Value cells are free text while being edited. Every whitespace character is
//! stripped (including inside tokens, so multi-word values are not possible), the
//! text is split on `,`, and empty tokens are dropped. The canonical rendering joins
//! the tokens with a comma and a newline, one value per line.

use itertools::Itertools;

/// Separator used when rendering a value list back into a cell.
pub const VALUE_SEPARATOR: &str = ",\n";

/// Splits `text` into its non-empty, whitespace-free tokens, preserving order.
pub fn split_and_trim(text: &str) -> Vec<String> {
    let compact: String = text.chars().filter(|c| !c.is_whitespace()).collect();
    compact
        .split(',')
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}

/// Joins values into their canonical cell text.
pub fn render_values<S: AsRef<str>>(values: &[S]) -> String {
    values.iter().map(AsRef::as_ref).join(VALUE_SEPARATOR)
}

/// Rewrites raw cell text into its canonical form.
pub fn normalize_text(text: &str) -> String {
    render_values(&split_and_trim(text))
}
