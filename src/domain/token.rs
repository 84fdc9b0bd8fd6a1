//! Fungible token holdings.

/// Symbol reported when the mirror node omits one.
pub const UNKNOWN_SYMBOL: &str = "Unknown";

/// A fungible token balance held by an account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// The token identifier (e.g., "0.0.456858").
    pub token_id: String,
    /// Token symbol, or [`UNKNOWN_SYMBOL`].
    pub symbol: String,
    /// Raw balance in the token's smallest unit.
    pub balance: u64,
    /// Number of decimal places the token uses.
    pub decimals: u32,
}

impl Token {
    /// Returns the balance scaled by the token's decimals.
    #[must_use]
    pub fn display_balance(&self) -> f64 {
        self.balance as f64 / 10f64.powi(self.decimals as i32)
    }
}
