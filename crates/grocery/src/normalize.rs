//! Ingredient name canonicalization.
//!
//! Two occurrences normalize to the same key exactly when they should merge
//! on the grocery list. The function is pure and idempotent: feeding a
//! canonical key back in returns it unchanged.

/// Preparation words stripped off the front of a name. Stripping repeats, so
/// stacked descriptors ("chopped fresh tomatoes") all fall off.
const LEADING_DESCRIPTORS: &[&str] = &[
    "optional",
    "sliced",
    "chopped",
    "diced",
    "minced",
    "crushed",
    "whole",
    "large",
    "small",
    "medium",
    "fresh",
    "to taste",
    "for garnish",
];

/// Substring-containment synonym table; the first containing entry wins.
///
/// Entries are ordered most-specific first: "green onion" must match before
/// "onion" or every scallion would collapse into plain onions.
const SYNONYMS: &[(&str, &str)] = &[
    ("garlic clove", "garlic"),
    ("clove of garlic", "garlic"),
    ("scallion", "green onion"),
    ("green onion", "green onion"),
    ("bell pepper", "bell pepper"),
    ("chili pepper", "chili pepper"),
    ("onion", "onion"),
    ("avocado", "avocado"),
];

/// Canonicalize a raw ingredient name into its deduplication key.
///
/// Lowercases and trims, strips leading preparation descriptors, truncates
/// at the first comma ("lemon, zested" → "lemon"), depluralizes ("-oes"
/// drops "es", otherwise a trailing "s" drops), then folds synonyms by
/// containment. Returns the empty string for names that dissolve entirely
/// (e.g. a bare "fresh"); callers drop such occurrences.
///
/// The depluralization heuristic mangles words that genuinely end in "s"
/// ("hummus" → "hummu"). Known limitation, kept as-is.
pub fn normalize(raw: &str) -> String {
    let mut name = raw.trim().to_lowercase();
    if name.is_empty() {
        return String::new();
    }

    loop {
        let mut stripped = false;
        for descriptor in LEADING_DESCRIPTORS {
            if name == *descriptor {
                name.clear();
                stripped = true;
                break;
            }
            if let Some(rest) = name.strip_prefix(descriptor) {
                if rest.starts_with(char::is_whitespace) {
                    name = rest.trim_start().to_string();
                    stripped = true;
                    break;
                }
            }
        }
        if !stripped || name.is_empty() {
            break;
        }
    }

    if let Some(comma) = name.find(',') {
        name.truncate(comma);
    }
    name = name.trim().to_string();

    if name.ends_with("oes") {
        name.truncate(name.len() - 2);
    } else if name.ends_with('s') {
        name.pop();
    }

    for (pattern, canonical) in SYNONYMS {
        if name.contains(pattern) {
            return (*canonical).to_string();
        }
    }

    name.trim().to_string()
}
