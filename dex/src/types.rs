//! Order-book data model shared by the store adaptation and the view.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::DexError;

/// Largest token precision the view can convert; `rust_decimal` keeps at
/// most 28 fractional digits.
pub const MAX_TOKEN_DECIMALS: u32 = 28;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderSide {
    Buy,
    Sell,
}

impl std::fmt::Display for OrderSide {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OrderSide::Buy => write!(f, "buy"),
            OrderSide::Sell => write!(f, "sell"),
        }
    }
}

/// One aggregated price level of the book.
///
/// `size` is a raw token amount in base units; `price` is already expressed
/// in quote units. Both must fit a `Decimal` (magnitude at most
/// `Decimal::MAX`, about 7.9e28); a larger value fails to parse and rejects
/// the whole state document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderBookItem {
    pub price: Decimal,
    pub size: Decimal,
    pub side: OrderSide,
}

impl OrderBookItem {
    pub fn new(side: OrderSide, price: Decimal, size: Decimal) -> Self {
        Self { price, size, side }
    }
}

/// Order-book snapshot. Replaced wholesale on every market-data update.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderBook {
    /// Sell levels in display order (top of the table first).
    pub sell_orders: Vec<OrderBookItem>,
    /// Buy levels in display order (closest to the spread first).
    pub buy_orders: Vec<OrderBookItem>,
    /// The viewer's own resting levels, both sides mixed.
    #[serde(default)]
    pub my_size_orders: Vec<OrderBookItem>,
    pub spread: Decimal,
}

impl OrderBook {
    /// `true` when neither side has a level to show.
    pub fn is_empty(&self) -> bool {
        self.buy_orders.is_empty() && self.sell_orders.is_empty()
    }

    /// The viewer's levels on one side, in their original order.
    pub fn my_size_orders_for(&self, side: OrderSide) -> Vec<&OrderBookItem> {
        self.my_size_orders
            .iter()
            .filter(|item| item.side == side)
            .collect()
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawToken {
    #[serde(default)]
    address: String,
    symbol: String,
    #[serde(default)]
    name: String,
    decimals: u32,
    #[serde(default)]
    primary_color: Option<String>,
}

/// Token metadata. `decimals` converts raw integer amounts to display units.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawToken", rename_all = "camelCase")]
pub struct Token {
    pub address: String,
    pub symbol: String,
    pub name: String,
    decimals: u32,
    pub primary_color: Option<String>,
}

impl Token {
    /// Build a token, rejecting precisions beyond [`MAX_TOKEN_DECIMALS`].
    ///
    /// # Errors
    ///
    /// Returns [`DexError::Validation`] if `decimals` is out of range.
    pub fn new(
        address: impl Into<String>,
        symbol: impl Into<String>,
        name: impl Into<String>,
        decimals: u32,
    ) -> Result<Self, DexError> {
        if decimals > MAX_TOKEN_DECIMALS {
            return Err(DexError::Validation(format!(
                "token decimals {decimals} exceeds {MAX_TOKEN_DECIMALS}"
            )));
        }
        Ok(Self {
            address: address.into(),
            symbol: symbol.into(),
            name: name.into(),
            decimals,
            primary_color: None,
        })
    }

    pub fn decimals(&self) -> u32 {
        self.decimals
    }
}

impl TryFrom<RawToken> for Token {
    type Error = DexError;

    fn try_from(raw: RawToken) -> Result<Self, Self::Error> {
        let mut token = Token::new(raw.address, raw.symbol, raw.name, raw.decimals)?;
        token.primary_color = raw.primary_color;
        Ok(token)
    }
}

/// Wallet connection state reported by the (external) web3 layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Web3State {
    #[serde(alias = "Connected")]
    Done,
    Loading,
    Error,
    Locked,
    NotInstalled,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderStatus {
    Fillable,
    Expired,
    FullyFilled,
    Cancelled,
    Unfunded,
}

/// One of the viewer's own orders as the store exposes it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UiOrder {
    pub order_hash: String,
    pub side: OrderSide,
    pub size: Decimal,
    #[serde(default)]
    pub filled: Option<Decimal>,
    pub price: Decimal,
    pub status: OrderStatus,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_token_rejects_excess_decimals() {
        assert!(Token::new("0x0", "WETH", "Wrapped Ether", 18).is_ok());
        assert!(Token::new("0x0", "X", "X", 28).is_ok());
        assert!(matches!(
            Token::new("0x0", "X", "X", 29),
            Err(DexError::Validation(_))
        ));
    }

    #[test]
    fn test_token_deserialize_validates_decimals() {
        let ok = r#"{"symbol":"ZRX","decimals":18}"#;
        let token: Token = serde_json::from_str(ok).unwrap();
        assert_eq!(token.decimals(), 18);
        assert_eq!(token.name, "");

        let bad = r#"{"symbol":"ZRX","decimals":40}"#;
        assert!(serde_json::from_str::<Token>(bad).is_err());
    }

    #[test]
    fn test_web3_state_accepts_connected_alias() {
        let state: Web3State = serde_json::from_str(r#""Connected""#).unwrap();
        assert_eq!(state, Web3State::Done);
        let state: Web3State = serde_json::from_str(r#""NotInstalled""#).unwrap();
        assert_eq!(state, Web3State::NotInstalled);
    }

    #[test]
    fn test_my_size_orders_for_partitions_by_side() {
        let book = OrderBook {
            my_size_orders: vec![
                OrderBookItem::new(OrderSide::Sell, dec!(1.0), dec!(5)),
                OrderBookItem::new(OrderSide::Buy, dec!(1.0), dec!(3)),
                OrderBookItem::new(OrderSide::Sell, dec!(2.0), dec!(1)),
            ],
            ..Default::default()
        };
        let sells = book.my_size_orders_for(OrderSide::Sell);
        assert_eq!(sells.len(), 2);
        assert!(sells.iter().all(|i| i.side == OrderSide::Sell));
        assert_eq!(book.my_size_orders_for(OrderSide::Buy).len(), 1);
    }

    #[test]
    fn test_order_book_is_empty() {
        let mut book = OrderBook::default();
        assert!(book.is_empty());
        book.buy_orders
            .push(OrderBookItem::new(OrderSide::Buy, dec!(1), dec!(1)));
        assert!(!book.is_empty());
    }
}
