//! State document and the selectors that turn it into view input.
//!
//! The view never reads the store directly: [`OrderBookProps::from_state`]
//! builds the explicit input struct and the host hands that to
//! [`crate::view::OrderBookView::render`].

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::Result;
use crate::types::{OrderBook, Token, UiOrder, Web3State};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreState {
    #[serde(default)]
    pub order_book: OrderBook,
    #[serde(default)]
    pub selected_token: Option<Token>,
    #[serde(default)]
    pub user_orders: Vec<UiOrder>,
    #[serde(default)]
    pub web3_state: Option<Web3State>,
}

impl StoreState {
    /// Parse a JSON state document.
    pub fn from_json(text: &str) -> Result<Self> {
        let state: StoreState = serde_json::from_str(text)?;
        debug!(
            sell = state.order_book.sell_orders.len(),
            buy = state.order_book.buy_orders.len(),
            mine = state.order_book.my_size_orders.len(),
            "parsed store state"
        );
        Ok(state)
    }
}

pub fn get_order_book(state: &StoreState) -> &OrderBook {
    &state.order_book
}

pub fn get_selected_token(state: &StoreState) -> Option<&Token> {
    state.selected_token.as_ref()
}

pub fn get_user_orders(state: &StoreState) -> &[UiOrder] {
    &state.user_orders
}

pub fn get_web3_state(state: &StoreState) -> Option<Web3State> {
    state.web3_state
}

/// Everything the order-book view reads. Owned so a render can outlive the
/// state it was selected from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderBookProps {
    pub order_book: OrderBook,
    pub selected_token: Option<Token>,
    pub user_orders: Vec<UiOrder>,
    pub web3_state: Option<Web3State>,
}

impl OrderBookProps {
    pub fn from_state(state: &StoreState) -> Self {
        Self {
            order_book: get_order_book(state).clone(),
            selected_token: get_selected_token(state).cloned(),
            user_orders: get_user_orders(state).to_vec(),
            web3_state: get_web3_state(state),
        }
    }
}

impl From<StoreState> for OrderBookProps {
    fn from(state: StoreState) -> Self {
        Self {
            order_book: state.order_book,
            selected_token: state.selected_token,
            user_orders: state.user_orders,
            web3_state: state.web3_state,
        }
    }
}
