use std::sync::LazyLock;

use regex::Regex;

use crate::model::FrameEntry;

/// Sort key for anchors whose outline label contains a non-numeric component.
/// Orders after every finite key, so malformed labels sink to the end of
/// their group deterministically.
pub const UNORDERED_KEY: u64 = u64::MAX;

/// Weights reserve two decimal digits for outline levels 3 and 4 and wider
/// room for levels 1 and 2; levels past the fourth never affect ordering.
const COMPONENT_WEIGHTS: [u64; 4] = [10_000_000, 10_000, 100, 1];

static OUTLINE_LABEL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]+(\.[0-9]+)*$").expect("outline label regex is valid"));

#[derive(Debug, Clone, Copy)]
pub struct OrderKeyOptions {
    /// When set, a paragraph with a rendered numbering label is keyed by the
    /// outline number; otherwise every anchor falls back to page position.
    pub prefer_outline_number: bool,
}

impl Default for OrderKeyOptions {
    fn default() -> Self {
        Self {
            prefer_outline_number: true,
        }
    }
}

/// Display number plus its total-order sort key, as derived for one anchor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DerivedNumber {
    pub display: String,
    pub key: u64,
}

pub fn derive_number(
    numbering_label: &str,
    frames: &[FrameEntry],
    options: &OrderKeyOptions,
) -> DerivedNumber {
    let cleaned = clean_outline_label(numbering_label);

    if options.prefer_outline_number && !cleaned.is_empty() {
        DerivedNumber {
            key: outline_order_key(cleaned),
            display: cleaned.to_string(),
        }
    } else {
        page_fallback(frames)
    }
}

fn clean_outline_label(label: &str) -> &str {
    label.trim().trim_end_matches('.')
}

/// Maps a cleaned dot-delimited outline label to one comparable integer. Only
/// the first four components contribute; deeper nesting is displayed but not
/// ordered on. A label with any non-digit component gets [`UNORDERED_KEY`].
fn outline_order_key(cleaned: &str) -> u64 {
    if !OUTLINE_LABEL.is_match(cleaned) {
        return UNORDERED_KEY;
    }

    let mut key: u64 = 0;
    for (component, weight) in cleaned.split('.').zip(COMPONENT_WEIGHTS) {
        let Ok(value) = component.parse::<u64>() else {
            return UNORDERED_KEY;
        };
        key = key.saturating_add(value.saturating_mul(weight));
    }
    key
}

/// Keys an anchor by physical page when no outline numbering is available.
/// Every valid frame contributes a `p<page>` label; the key is the page
/// number of the last valid frame that parses, because a paragraph threaded
/// across frames is anchored where it currently displays.
fn page_fallback(frames: &[FrameEntry]) -> DerivedNumber {
    let mut labels = Vec::new();
    let mut key: u64 = 0;

    for frame in frames {
        if !frame.valid {
            continue;
        }

        labels.push(format!("p{}", frame.page_name));
        if let Some(page) = parse_leading_digits(&frame.page_name) {
            key = page;
        }
    }

    let display = if labels.is_empty() {
        "?".to_string()
    } else {
        format!("{}?", labels.join(","))
    };

    DerivedNumber { display, key }
}

/// Parses the leading ASCII-digit run of a page name ("12", "12a" -> 12).
/// Page names with no leading digit ("iv", "A-3") yield `None`.
fn parse_leading_digits(value: &str) -> Option<u64> {
    let digits: &str = match value.find(|ch: char| !ch.is_ascii_digit()) {
        Some(0) => return None,
        Some(end) => &value[..end],
        None if value.is_empty() => return None,
        None => value,
    };

    digits.parse::<u64>().ok()
}

#[cfg(test)]
pub(super) fn outline_key_for_test(label: &str) -> u64 {
    outline_order_key(clean_outline_label(label))
}
