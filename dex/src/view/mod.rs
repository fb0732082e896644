//! The order-book card: a pure function of [`OrderBookProps`].
//!
//! [`OrderBookView::render`] picks one of the gated placeholder states or the
//! full table and returns a tree the host draws however it likes. The only
//! state the view owns is the cosmetic Current/History tab.

mod row;

use serde::Serialize;
use tracing::debug;

use crate::config::DisplayConfig;
use crate::store::OrderBookProps;
use crate::theme::ThemeProperties;
use crate::types::{OrderBook, OrderSide, Token, Web3State};

pub use row::{my_size_at, order_to_row, NumberCell, OrderRow, SpreadRow, EMPTY_CELL};

pub const CARD_TITLE: &str = "Orderbook";

pub const WALLET_NOT_INSTALLED: &str = "Install Metamask wallet to make trades.";

pub const WALLET_LOCKED: &str = "Metamask is locked. Unlock it to make trades.";

pub const NO_ORDERS: &str = "There are no orders to show";

pub const TABLE_HEADERS: [&str; 4] = ["Trade size", "My Size", "Price (ETH)", "Time"];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub enum Tab {
    #[default]
    Current,
    History,
}

impl Tab {
    pub fn label(self) -> &'static str {
        match self {
            Tab::Current => "Current",
            Tab::History => "History",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TabItem {
    pub tab: Tab,
    pub text: &'static str,
    pub active: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FontSize {
    Large,
    Medium,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ErrorIcon {
    Lock,
    Metamask,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorCard {
    pub font_size: FontSize,
    pub text: &'static str,
    pub icon: ErrorIcon,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmptyContent {
    pub text: &'static str,
    pub align_absolute_center: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderBookTable {
    pub headers: [&'static str; 4],
    /// Size digits past this column's significant part use this color.
    pub number_decimals_color: &'static str,
    pub sell_rows: Vec<OrderRow>,
    pub spread: SpreadRow,
    pub buy_rows: Vec<OrderRow>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum OrderBookContent {
    Error(ErrorCard),
    Loading,
    Empty(EmptyContent),
    Table(OrderBookTable),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderBookCard {
    pub title: &'static str,
    pub tabs: [TabItem; 2],
    pub content: OrderBookContent,
}

/// One mounted order-book card. Dropping it discards the tab selection.
#[derive(Debug, Default)]
pub struct OrderBookView {
    tab: Tab,
}

impl OrderBookView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tab(&self) -> Tab {
        self.tab
    }

    pub fn select_tab(&mut self, tab: Tab) {
        debug!(?tab, "tab selected");
        self.tab = tab;
    }

    pub fn toggle_tab(&mut self) {
        let next = match self.tab {
            Tab::Current => Tab::History,
            Tab::History => Tab::Current,
        };
        self.select_tab(next);
    }

    /// Render the card for the given inputs. Never fails: missing
    /// preconditions degrade to a placeholder.
    pub fn render(
        &self,
        props: &OrderBookProps,
        theme: &ThemeProperties,
        config: &DisplayConfig,
    ) -> OrderBookCard {
        OrderBookCard {
            title: CARD_TITLE,
            tabs: [Tab::Current, Tab::History].map(|tab| TabItem {
                tab,
                text: tab.label(),
                active: self.tab == tab,
            }),
            content: render_content(props, theme, config),
        }
    }
}

fn render_content(
    props: &OrderBookProps,
    theme: &ThemeProperties,
    config: &DisplayConfig,
) -> OrderBookContent {
    match props.web3_state {
        Some(Web3State::NotInstalled) => OrderBookContent::Error(ErrorCard {
            font_size: FontSize::Large,
            text: WALLET_NOT_INSTALLED,
            icon: ErrorIcon::Metamask,
        }),
        Some(Web3State::Locked) => OrderBookContent::Error(ErrorCard {
            font_size: FontSize::Large,
            text: WALLET_LOCKED,
            icon: ErrorIcon::Lock,
        }),
        _ => match &props.selected_token {
            None => OrderBookContent::Loading,
            Some(_) if props.order_book.is_empty() => OrderBookContent::Empty(EmptyContent {
                text: NO_ORDERS,
                align_absolute_center: true,
            }),
            Some(token) => {
                OrderBookContent::Table(render_table(&props.order_book, token, theme, config))
            }
        },
    }
}

fn render_table(
    book: &OrderBook,
    token: &Token,
    theme: &ThemeProperties,
    config: &DisplayConfig,
) -> OrderBookTable {
    let my_sells = book.my_size_orders_for(OrderSide::Sell);
    let my_buys = book.my_size_orders_for(OrderSide::Buy);

    debug!(
        sell = book.sell_orders.len(),
        buy = book.buy_orders.len(),
        my_sell = my_sells.len(),
        my_buy = my_buys.len(),
        token = %token.symbol,
        "rendering order book table"
    );

    OrderBookTable {
        headers: TABLE_HEADERS,
        number_decimals_color: theme.number_decimals_color,
        sell_rows: book
            .sell_orders
            .iter()
            .map(|order| order_to_row(order, token, &my_sells, theme, config))
            .collect(),
        spread: SpreadRow::new(book.spread, config),
        buy_rows: book
            .buy_orders
            .iter()
            .map(|order| order_to_row(order, token, &my_buys, theme, config))
            .collect(),
    }
}
