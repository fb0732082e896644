/// Decimal places shown for order sizes ("Trade size" and "My Size").
pub const UI_DECIMALS_DISPLAYED_ORDER_SIZE: u32 = 4;

/// Decimal places shown for prices and the spread.
pub const UI_DECIMALS_DISPLAYED_PRICE_ETH: u32 = 7;

/// Display precision used by the order-book view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayConfig {
    /// Decimal places for sizes after conversion to token units.
    pub size_decimals: u32,
    /// Decimal places for prices and the spread.
    pub price_decimals: u32,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            size_decimals: UI_DECIMALS_DISPLAYED_ORDER_SIZE,
            price_decimals: UI_DECIMALS_DISPLAYED_PRICE_ETH,
        }
    }
}
