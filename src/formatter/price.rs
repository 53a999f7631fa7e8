use regex::Regex;
use std::sync::OnceLock;

use crate::error::EntryError;
use crate::model::Price;

struct PricePatterns {
    amount: Regex,
    large: Regex,
    small: Regex,
}

fn patterns() -> &'static PricePatterns {
    static PATTERNS: OnceLock<PricePatterns> = OnceLock::new();
    PATTERNS.get_or_init(|| PricePatterns {
        amount: Regex::new(r"\d+,?\d*").expect("regex should be valid"),
        large: Regex::new(r"Groß:\s*(\d+,?\d*)").expect("regex should be valid"),
        small: Regex::new(r"Klein:\s*(\d+,?\d*)").expect("regex should be valid"),
    })
}

/// Parse the price sub-region text.
///
/// A `Groß:`/`Klein:` pair becomes [`Price::Tiered`], otherwise the first
/// amount in the text is used.
pub fn parse_price(text: &str) -> Result<Price, EntryError> {
    let patterns = patterns();

    let labelled = |re: &Regex| {
        re.captures(text)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().to_string())
    };
    if let (Some(large), Some(small)) = (labelled(&patterns.large), labelled(&patterns.small)) {
        return Ok(Price::Tiered { large, small });
    }

    patterns
        .amount
        .find(text)
        .map(|m| Price::Single(m.as_str().to_string()))
        .ok_or_else(|| EntryError::MalformedPrice(text.to_string()))
}
