//! Unit-aware merging of free-text quantity strings.
//!
//! Quantities arrive as loosely formatted text ("1 1/2 cups", "2 tbsp",
//! "a pinch"). Merging never fails: anything unparseable falls through to a
//! "list both" concatenation instead of an error.

/// A quantity split into its numeric value and trailing unit text.
#[derive(Debug, Clone, PartialEq)]
struct ParsedQuantity {
    value: f64,
    unit: String,
}

impl ParsedQuantity {
    /// Unit key used for compatibility checks: lowercased, trimmed, with one
    /// trailing "s" dropped so "cup" and "Cups" compare equal. The raw unit
    /// text is preserved for display.
    fn unit_key(&self) -> String {
        let key = self.unit.to_lowercase();
        key.strip_suffix('s').map(str::to_string).unwrap_or(key)
    }
}

/// Split a quantity string into a numeric head and a unit tail.
///
/// The head is the longest prefix of digits, dots, slashes, hyphens, and
/// spaces. Its whitespace-separated components are parsed independently and
/// summed, so "1 1/2" reads as 1.5. Components that fail to parse (including
/// division by zero) contribute 0 rather than failing the whole string.
fn parse(quantity: &str) -> ParsedQuantity {
    let trimmed = quantity.trim();
    let head_len = trimmed
        .find(|c: char| {
            !(c.is_ascii_digit() || c == '.' || c == '/' || c == '-' || c.is_whitespace())
        })
        .unwrap_or(trimmed.len());
    let (head, tail) = trimmed.split_at(head_len);

    let value = head.split_whitespace().map(component_value).sum();

    ParsedQuantity {
        value,
        unit: tail.trim().to_string(),
    }
}

fn component_value(component: &str) -> f64 {
    let value = match component.split_once('/') {
        Some((numerator, denominator)) => {
            let numerator: f64 = numerator.trim().parse().unwrap_or(0.0);
            let denominator: f64 = denominator.trim().parse().unwrap_or(0.0);
            numerator / denominator
        }
        None => component.parse().unwrap_or(0.0),
    };
    if value.is_finite() { value } else { 0.0 }
}

/// Combine two quantity strings into one.
///
/// An empty operand is the identity. When both sides carry a positive number
/// and a compatible unit, the numbers are summed; item counts round to whole
/// items, everything else keeps the first operand's unit text. Otherwise the
/// two strings are listed side by side, except that identical strings
/// collapse to one copy ("a pinch" twice is still "a pinch").
pub fn merge(first: &str, second: &str) -> String {
    let first = first.trim();
    let second = second.trim();
    if first.is_empty() {
        return second.to_string();
    }
    if second.is_empty() {
        return first.to_string();
    }

    let left = parse(first);
    let right = parse(second);

    if left.value > 0.0 && right.value > 0.0 && left.unit_key() == right.unit_key() {
        let sum = left.value + right.value;
        if left.unit_key() == "item" {
            let count = sum.round() as i64;
            let noun = if count == 1 { "item" } else { "items" };
            return format!("{count} {noun}");
        }
        return format!("{} {}", format_amount(sum), left.unit)
            .trim()
            .to_string();
    }

    if first == second {
        return first.to_string();
    }
    format!("{first} & {second}")
}

/// Format a summed amount: two decimal places with trailing zeros (and a
/// bare trailing dot) trimmed, so 3.0 → "3" and 2.5 → "2.5".
fn format_amount(value: f64) -> String {
    let mut text = format!("{:.2}", (value * 100.0).round() / 100.0);
    while text.ends_with('0') {
        text.pop();
    }
    if text.ends_with('.') {
        text.pop();
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_number_and_unit() {
        let parsed = parse("2 tbsp");
        assert_eq!(parsed.value, 2.0);
        assert_eq!(parsed.unit, "tbsp");
    }

    #[test]
    fn test_parse_mixed_fraction() {
        let parsed = parse("1 1/2 cups");
        assert_eq!(parsed.value, 1.5);
        assert_eq!(parsed.unit, "cups");
        assert_eq!(parsed.unit_key(), "cup");
    }

    #[test]
    fn test_parse_bare_fraction() {
        assert_eq!(parse("3/4 cup").value, 0.75);
    }

    #[test]
    fn test_parse_descriptive_text_has_zero_value() {
        let parsed = parse("a pinch");
        assert_eq!(parsed.value, 0.0);
        assert_eq!(parsed.unit, "a pinch");
    }

    #[test]
    fn test_merge_keeps_first_operand_unit_casing() {
        assert_eq!(merge("1 Cup", "1 cup"), "2 Cup");
    }

    #[test]
    fn test_parse_division_by_zero_degrades_to_zero() {
        assert_eq!(parse("1/0 cup").value, 0.0);
    }

    #[test]
    fn test_parse_range_component_degrades_to_zero() {
        // "2-3" is not a number; it contributes nothing rather than failing.
        assert_eq!(parse("2-3 cups").value, 0.0);
    }

    #[test]
    fn test_merge_same_unit_sums() {
        assert_eq!(merge("1 cup", "1 cup"), "2 cup");
        assert_eq!(merge("1 cup", "2 cup"), "3 cup");
    }

    #[test]
    fn test_merge_depluralizes_units_for_comparison() {
        assert_eq!(merge("1 cup", "2 cups"), "3 cup");
        assert_eq!(merge("2 cups", "1 cup"), "3 cups");
    }

    #[test]
    fn test_merge_item_counts_round_and_pluralize() {
        assert_eq!(merge("1 item", "2 items"), "3 items");
        assert_eq!(merge("1 item", "1 item"), "2 items");
        assert_eq!(merge("0.6 item", "0.6 item"), "1 item");
    }

    #[test]
    fn test_merge_empty_operand_is_identity() {
        assert_eq!(merge("", "2 tbsp"), "2 tbsp");
        assert_eq!(merge("2 tbsp", ""), "2 tbsp");
        assert_eq!(merge("  ", "2 tbsp"), "2 tbsp");
        assert_eq!(merge("", ""), "");
    }

    #[test]
    fn test_merge_fractions_sum() {
        assert_eq!(merge("1/2 cup", "1/4 cup"), "0.75 cup");
        assert_eq!(merge("1 1/2 cups", "1/2 cup"), "2 cups");
    }

    #[test]
    fn test_merge_trims_trailing_zeros() {
        assert_eq!(merge("1.25 cup", "1.25 cup"), "2.5 cup");
        assert_eq!(merge("1/3 cup", "1/3 cup"), "0.67 cup");
    }

    #[test]
    fn test_merge_different_units_lists_both() {
        assert_eq!(merge("1 cup", "2 tbsp"), "1 cup & 2 tbsp");
    }

    #[test]
    fn test_merge_identical_unparseable_strings_collapse() {
        assert_eq!(merge("a pinch", "a pinch"), "a pinch");
    }

    #[test]
    fn test_merge_numeric_pinch_sums_like_any_unit() {
        // "1 pinch" parses cleanly, so it follows the numeric path.
        assert_eq!(merge("1 pinch", "1 pinch"), "2 pinch");
    }

    #[test]
    fn test_merge_distinct_unparseable_strings_list_both() {
        assert_eq!(merge("a pinch", "to taste"), "a pinch & to taste");
    }

    #[test]
    fn test_merge_unitless_numbers() {
        assert_eq!(merge("2", "3"), "5");
    }
}
