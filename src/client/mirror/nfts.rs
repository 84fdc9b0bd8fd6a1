//! NFT holdings endpoint.

use base64::Engine;
use base64::alphabet;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
use serde::Deserialize;

use super::MirrorClient;
use crate::domain::{MirrorError, Nft};

/// Lenient standard-alphabet decoder: padding optional, trailing bits ignored.
const METADATA_ENGINE: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new()
        .with_decode_padding_mode(DecodePaddingMode::Indifferent)
        .with_decode_allow_trailing_bits(true),
);

#[derive(Debug, Deserialize)]
struct NftsResponse {
    nfts: Vec<NftRecord>,
}

#[derive(Debug, Deserialize)]
struct NftRecord {
    token_id: String,
    serial_number: u64,
    #[serde(default)]
    metadata: Option<String>,
}

/// Decode base64 NFT metadata into text.
///
/// ASCII whitespace is ignored. Bytes that are not valid UTF-8 are replaced
/// with U+FFFD.
pub(crate) fn decode_metadata(encoded: &str) -> Option<String> {
    let compact: String = encoded
        .chars()
        .filter(|c| !c.is_ascii_whitespace())
        .collect();

    METADATA_ENGINE
        .decode(compact)
        .ok()
        .map(|bytes| String::from_utf8_lossy(&bytes).into_owned())
}

impl NftRecord {
    fn into_nft(self) -> Result<Nft, MirrorError> {
        let metadata = match self.metadata.as_deref() {
            None | Some("") => String::new(),
            Some(encoded) => decode_metadata(encoded)
                .ok_or_else(|| MirrorError::decode(&self.token_id, self.serial_number))?,
        };

        Ok(Nft {
            token_id: self.token_id,
            serial_number: self.serial_number,
            metadata,
        })
    }
}

impl MirrorClient {
    /// Get the NFTs held by an account, with decoded metadata.
    ///
    /// # Errors
    ///
    /// Returns `MirrorError::Http` for non-2xx responses, `MirrorError::Parse`
    /// for malformed records and `MirrorError::Decode` if any metadata is not
    /// valid base64. No partial list is returned.
    pub async fn get_nfts(&self, account_id: &str) -> Result<Vec<Nft>, MirrorError> {
        let path = format!("/api/v1/accounts/{account_id}/nfts");
        let response: NftsResponse = self.get_json("NFTs", &path).await?;

        response.nfts.into_iter().map(NftRecord::into_nft).collect()
    }
}
