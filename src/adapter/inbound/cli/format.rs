//! Plain-text display formatters.
//!
//! These never add color; see [`super::output`] for styled variants.

use chrono::{DateTime, Utc};
use rust_decimal::{Decimal, RoundingStrategy};

use crate::domain::nft::MAX_HEALTH_SCORE;

/// Decimal places shown for ETH amounts.
pub const ETH_DECIMALS: u32 = 4;

/// Shorten an address to `0x1234...abcd`.
///
/// Addresses too short to shorten are returned unchanged.
#[must_use]
pub fn short_address(address: &str) -> String {
    let chars: Vec<char> = address.chars().collect();
    if chars.len() <= 10 {
        return address.to_string();
    }
    let head: String = chars[..6].iter().collect();
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("{head}...{tail}")
}

/// Format an amount as ETH with four decimals.
#[must_use]
pub fn eth(value: Decimal) -> String {
    let rounded =
        value.round_dp_with_strategy(ETH_DECIMALS, RoundingStrategy::MidpointAwayFromZero);
    format!("{rounded:.4} ETH")
}

/// Format a percentage with one decimal.
#[must_use]
pub fn percentage(value: f64) -> String {
    format!("{value:.1}%")
}

/// Abbreviate large numbers with a K, M or B suffix.
#[must_use]
pub fn large_number(value: f64) -> String {
    if value >= 1e9 {
        format!("{:.1}B", value / 1e9)
    } else if value >= 1e6 {
        format!("{:.1}M", value / 1e6)
    } else if value >= 1e3 {
        format!("{:.1}K", value / 1e3)
    } else {
        value.to_string()
    }
}

/// Health score as `NN/100`.
#[must_use]
pub fn health_score(score: u8) -> String {
    format!("{score}/{MAX_HEALTH_SCORE}")
}

/// Relative age such as `3 hours ago`.
///
/// Times under a minute old, or in the future, are `just now`.
#[must_use]
pub fn relative_time(at: DateTime<Utc>, now: DateTime<Utc>) -> String {
    const UNITS: [(&str, i64); 6] = [
        ("year", 31_536_000),
        ("month", 2_592_000),
        ("week", 604_800),
        ("day", 86_400),
        ("hour", 3_600),
        ("minute", 60),
    ];

    let seconds = (now - at).num_seconds();
    for (unit, size) in UNITS {
        let count = seconds / size;
        if count >= 1 {
            let plural = if count == 1 { "" } else { "s" };
            return format!("{count} {unit}{plural} ago");
        }
    }
    "just now".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use rust_decimal_macros::dec;

    #[test]
    fn shortens_long_addresses() {
        assert_eq!(
            short_address("0x1234567890abcdef1234567890abcdef1234abcd"),
            "0x1234...abcd"
        );
        assert_eq!(short_address("0x12"), "0x12");
        assert_eq!(short_address(""), "");
    }

    #[test]
    fn eth_uses_four_decimals() {
        assert_eq!(eth(dec!(1.23456)), "1.2346 ETH");
        assert_eq!(eth(dec!(2)), "2.0000 ETH");
        assert_eq!(eth(Decimal::ZERO), "0.0000 ETH");
    }

    #[test]
    fn percentage_uses_one_decimal() {
        assert_eq!(percentage(33.333), "33.3%");
        assert_eq!(percentage(100.0), "100.0%");
    }

    #[test]
    fn large_numbers_get_suffixes() {
        assert_eq!(large_number(999.0), "999");
        assert_eq!(large_number(1_500.0), "1.5K");
        assert_eq!(large_number(2_000_000.0), "2.0M");
        assert_eq!(large_number(3_400_000_000.0), "3.4B");
    }

    #[test]
    fn health_score_out_of_hundred() {
        assert_eq!(health_score(64), "64/100");
    }

    #[test]
    fn relative_time_picks_largest_unit() {
        let now = DateTime::<Utc>::UNIX_EPOCH + Duration::days(800);
        assert_eq!(relative_time(now, now), "just now");
        assert_eq!(relative_time(now - Duration::minutes(1), now), "1 minute ago");
        assert_eq!(relative_time(now - Duration::hours(5), now), "5 hours ago");
        assert_eq!(relative_time(now - Duration::days(14), now), "2 weeks ago");
        assert_eq!(relative_time(now - Duration::days(400), now), "1 year ago");
    }
}
