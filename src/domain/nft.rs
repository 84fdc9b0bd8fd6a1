//! Non-fungible token holdings.

/// A single NFT held by an account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Nft {
    /// The token (collection) identifier.
    pub token_id: String,
    /// Serial number within the collection.
    pub serial_number: u64,
    /// Base64-decoded metadata, empty when the mirror node has none.
    pub metadata: String,
}
