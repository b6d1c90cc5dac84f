//! Text cleanup and price-token primitives shared by the card and detail
//! parsers.

use std::sync::LazyLock;

use regex::Regex;

static TAG_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]+>").expect("valid tag regex"));
static TWD_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)TWD\s*([0-9,]+)").expect("valid price regex"));

pub(crate) const CURRENCY_CODE: &str = "TWD";

/// Strips tags, decodes HTML entities and collapses runs of whitespace to a
/// single space. Returns `None` if nothing is left.
pub(crate) fn clean_text(raw: &str) -> Option<String> {
    if raw.is_empty() {
        return None;
    }
    let stripped = TAG_RE.replace_all(raw, "");
    let decoded = html_escape::decode_html_entities(&stripped);
    let collapsed = decoded.split_whitespace().collect::<Vec<_>>().join(" ");
    if collapsed.is_empty() {
        None
    } else {
        Some(collapsed)
    }
}

/// Every `TWD <digits>` amount in `scope`, in document order.
///
/// Thousands separators are dropped. Tokens that are all commas or too large
/// for a `u64` are skipped.
pub(crate) fn twd_amounts(scope: &str) -> Vec<u64> {
    TWD_RE
        .captures_iter(scope)
        .filter_map(|caps| {
            let digits: String = caps.get(1)?.as_str().chars().filter(|c| *c != ',').collect();
            if digits.is_empty() {
                return None;
            }
            digits.parse::<u64>().ok()
        })
        .collect()
}

/// Picks the effective price from the amounts found on a card.
///
/// Cards list the discounted price and the struck-through original next to
/// each other, in either order, so the lower of the first two wins. Amounts
/// after the second are ignored.
pub(crate) fn effective_price(amounts: &[u64]) -> Option<u64> {
    match amounts {
        [] => None,
        [only] => Some(*only),
        [first, second, ..] => Some((*first).min(*second)),
    }
}

/// `1234567` → `"TWD 1,234,567"`.
pub(crate) fn format_price(amount: u64) -> String {
    let digits = amount.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    format!("{CURRENCY_CODE} {grouped}")
}

/// Largest char boundary in `s` that is `<= index`.
pub(crate) fn floor_char_boundary(s: &str, index: usize) -> usize {
    if index >= s.len() {
        return s.len();
    }
    (0..=index)
        .rev()
        .find(|&i| s.is_char_boundary(i))
        .unwrap_or(0)
}
