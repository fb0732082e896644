use rust_decimal::{Decimal, RoundingStrategy};

use crate::types::Token;

/// `10^decimals` as a `Decimal`. Callers keep `decimals` within
/// [`crate::types::MAX_TOKEN_DECIMALS`].
fn unit_scale(decimals: u32) -> Decimal {
    Decimal::from_i128_with_scale(10i128.pow(decimals), 0)
}

/// Convert a raw base-unit amount into whole token units.
pub fn to_unit_amount(amount: Decimal, token: &Token) -> Decimal {
    amount / unit_scale(token.decimals())
}

/// Drop every digit past `dp` places, rounding toward zero.
pub fn truncate(value: Decimal, dp: u32) -> Decimal {
    let mut truncated = value.round_dp_with_strategy(dp, RoundingStrategy::ToZero);
    if truncated.is_zero() {
        truncated.set_sign_positive(true);
    }
    truncated
}

/// Truncate to `dp` places and render exactly `dp` places.
///
/// Negative zero after truncation renders without a sign.
pub fn format_truncated(value: Decimal, dp: u32) -> String {
    format!("{:.prec$}", truncate(value, dp), prec = dp as usize)
}

/// Raw amount → token units → fixed `dp`-place string.
pub fn token_amount_in_units(amount: Decimal, token: &Token, dp: u32) -> String {
    format_truncated(to_unit_amount(amount, token), dp)
}

/// Split a fixed-precision number string into its significant part and the
/// trailing zeros of its fraction, e.g. `"1.2300"` → `("1.23", "00")`.
///
/// Integers and strings without a fraction have no padding. A fraction that
/// is entirely zero keeps its decimal point on the padding side:
/// `"5.000"` → `("5", ".000")`.
pub fn split_trailing_zeros(formatted: &str) -> (&str, &str) {
    let Some(dot) = formatted.find('.') else {
        return (formatted, "");
    };
    let trimmed = formatted.trim_end_matches('0');
    let cut = if trimmed.len() == dot + 1 {
        dot
    } else {
        trimmed.len()
    };
    formatted.split_at(cut)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn token(decimals: u32) -> Token {
        Token::new("0x0", "TKN", "Token", decimals).unwrap()
    }

    // ---- truncate ----

    #[test]
    fn test_truncate_keeps_value_below_precision() {
        assert_eq!(truncate(dec!(0.00009), 4), dec!(0));
        assert!(truncate(dec!(0.00009), 4).is_zero());
        assert_eq!(truncate(dec!(2.71828), 2), dec!(2.71));
    }

    // ---- format_truncated ----

    #[test]
    fn test_format_truncated_pads_to_precision() {
        assert_eq!(format_truncated(dec!(1), 4), "1.0000");
        assert_eq!(format_truncated(dec!(0.5), 2), "0.50");
    }

    #[test]
    fn test_format_truncated_truncates_not_rounds() {
        assert_eq!(format_truncated(dec!(1.23456789), 4), "1.2345");
        assert_eq!(format_truncated(dec!(0.99999), 2), "0.99");
        assert_eq!(format_truncated(dec!(-1.239), 2), "-1.23");
    }

    #[test]
    fn test_format_truncated_zero_dp() {
        assert_eq!(format_truncated(dec!(42.9), 0), "42");
    }

    #[test]
    fn test_format_truncated_negative_sub_precision_is_unsigned_zero() {
        assert_eq!(format_truncated(dec!(-0.0001), 2), "0.00");
    }

    // ---- token_amount_in_units ----

    #[test]
    fn test_token_amount_in_units_eighteen_decimals() {
        // 1.234567891234567891 tokens
        let raw = dec!(1234567891234567891);
        assert_eq!(token_amount_in_units(raw, &token(18), 4), "1.2345");
    }

    #[test]
    fn test_token_amount_in_units_zero_decimals() {
        assert_eq!(token_amount_in_units(dec!(7), &token(0), 2), "7.00");
    }

    #[test]
    fn test_token_amount_in_units_max_decimals() {
        let raw = dec!(50000000000000000000000000000);
        assert_eq!(token_amount_in_units(raw, &token(28), 1), "5.0");
    }

    #[test]
    fn test_token_amount_in_units_dust_truncates_to_zero() {
        // 0.00001 tokens at 18 decimals
        let raw = dec!(10000000000000);
        assert_eq!(token_amount_in_units(raw, &token(18), 4), "0.0000");
    }

    // ---- split_trailing_zeros ----

    #[test]
    fn test_split_trailing_zeros() {
        assert_eq!(split_trailing_zeros("1.2300"), ("1.23", "00"));
        assert_eq!(split_trailing_zeros("1.2345"), ("1.2345", ""));
        assert_eq!(split_trailing_zeros("5.000"), ("5", ".000"));
        assert_eq!(split_trailing_zeros("100"), ("100", ""));
        assert_eq!(split_trailing_zeros("10.50"), ("10.5", "0"));
    }
}
