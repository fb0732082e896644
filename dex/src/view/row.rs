//! Per-level row construction and "my size" aggregation.

use rust_decimal::Decimal;
use serde::Serialize;
use tracing::warn;

use crate::config::DisplayConfig;
use crate::theme::ThemeProperties;
use crate::types::{OrderBookItem, OrderSide, Token};
use crate::utils::{
    format_truncated, split_trailing_zeros, to_unit_amount, token_amount_in_units, truncate,
};

/// Shown in place of an empty value.
pub const EMPTY_CELL: &str = "-";

/// A fixed-precision number split so the host can dim the zero padding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NumberCell {
    /// Digits up to the last non-zero fractional digit.
    pub significant: String,
    /// Trailing zeros (and a bare decimal point, if the fraction is all zeros).
    pub padding: String,
}

impl NumberCell {
    pub fn new(formatted: &str) -> Self {
        let (significant, padding) = split_trailing_zeros(formatted);
        Self {
            significant: significant.to_string(),
            padding: padding.to_string(),
        }
    }

    pub fn text(&self) -> String {
        format!("{}{}", self.significant, self.padding)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderRow {
    pub side: OrderSide,
    pub size: NumberCell,
    pub my_size: String,
    pub price: String,
    pub price_color: &'static str,
    /// No trade time is wired into the book, so this is always [`EMPTY_CELL`].
    pub time: String,
    pub time_color: &'static str,
}

/// Row between the sell and buy halves. Carries only the spread.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SpreadRow {
    pub title: &'static str,
    pub price: String,
}

impl SpreadRow {
    pub fn new(spread: Decimal, config: &DisplayConfig) -> Self {
        Self {
            title: "Spread",
            price: format_truncated(spread, config.price_decimals),
        }
    }
}

/// Sum, in token units, of the viewer's sizes resting at exactly `price`.
///
/// `mine` must already be limited to the row's side. Each size is converted
/// before adding; a total past `Decimal::MAX` saturates there.
pub fn my_size_at(price: Decimal, mine: &[&OrderBookItem], token: &Token) -> Decimal {
    let mut total = Decimal::ZERO;
    for item in mine.iter().filter(|item| item.price == price) {
        match total.checked_add(to_unit_amount(item.size, token)) {
            Some(sum) => total = sum,
            None => {
                warn!(side = %item.side, %price, "my size overflowed, saturating");
                return Decimal::MAX;
            }
        }
    }
    total
}

/// Build the displayed row for one level of the book.
pub fn order_to_row(
    order: &OrderBookItem,
    token: &Token,
    mine: &[&OrderBookItem],
    theme: &ThemeProperties,
    config: &DisplayConfig,
) -> OrderRow {
    let size = NumberCell::new(&token_amount_in_units(
        order.size,
        token,
        config.size_decimals,
    ));

    let my_size = truncate(my_size_at(order.price, mine, token), config.size_decimals);
    let my_size = if my_size.is_zero() {
        EMPTY_CELL.to_string()
    } else {
        format_truncated(my_size, config.size_decimals)
    };

    let price_color = match order.side {
        OrderSide::Buy => theme.green,
        OrderSide::Sell => theme.orange,
    };

    OrderRow {
        side: order.side,
        size,
        my_size,
        price: format_truncated(order.price, config.price_decimals),
        price_color,
        time: EMPTY_CELL.to_string(),
        time_color: theme.light_gray,
    }
}
