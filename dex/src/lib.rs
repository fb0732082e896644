pub mod config;
pub mod error;
pub mod store;
pub mod theme;
pub mod types;
pub mod utils;
pub mod view;

// ---- Top-level re-exports for ergonomic usage ----

pub use config::{DisplayConfig, UI_DECIMALS_DISPLAYED_ORDER_SIZE, UI_DECIMALS_DISPLAYED_PRICE_ETH};
pub use error::{DexError, Result};

// Core model
pub use types::{OrderBook, OrderBookItem, OrderSide, OrderStatus, Token, UiOrder, Web3State};

// Store adaptation
pub use store::{OrderBookProps, StoreState};

// Theme
pub use theme::{Theme, ThemeCatalog, ThemeMetaData, ThemeModalStyle, ThemeProperties};

// View
pub use view::{
    EmptyContent, ErrorCard, ErrorIcon, FontSize, NumberCell, OrderBookCard, OrderBookContent,
    OrderBookTable, OrderBookView, OrderRow, SpreadRow, Tab, TabItem,
};
